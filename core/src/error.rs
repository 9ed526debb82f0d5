//! Error taxonomy for launch descriptor parsing.
//!
//! Every failure is immediate: a parse call either returns a finished
//! [`LaunchDescriptor`](crate::LaunchDescriptor) or one of these variants,
//! carrying the offending token or value for diagnostics.

use thiserror::Error;

/// Errors produced while turning tokens into a launch descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntentError {
    /// An option expected an operand but the token stream ran out.
    #[error("option {option} requires an argument")]
    ExhaustedInput { option: String },

    /// A numeric operand could not be decoded.
    #[error("invalid number: {0}")]
    MalformedNumber(String),

    /// A boolean operand was neither a boolean word nor an integer.
    #[error("invalid boolean value: {0}")]
    MalformedBoolean(String),

    /// A URI operand or positional URI could not be parsed.
    #[error("invalid URI: {0}")]
    MalformedUri(String),

    /// A component name is missing its `/` separator or one of its halves.
    #[error("bad component name: {0}")]
    BadComponentName(String),

    /// The token is not in the option table.
    #[error("unknown option: {0}")]
    UnknownOption(String),

    /// The finished descriptor carries nothing to launch.
    #[error("no intent supplied")]
    NoIntentSupplied,

    /// `--selector` appeared after a selector was already started.
    #[error("selector already specified")]
    DuplicateSelector,

    /// More than one positional token was left after the options.
    #[error("unexpected argument: {0}")]
    UnexpectedArgument(String),

    /// An intent URI entry used an extra type prefix that does not exist.
    #[error("unknown extra type in intent URI entry: {0}")]
    UnknownExtraType(String),
}
