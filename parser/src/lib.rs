//! Parser for `am start`-style launch commands.
//!
//! Turns a sequence of shell-like tokens into a
//! [`LaunchDescriptor`](launch_intent_core::LaunchDescriptor):
//!
//! 1. options are consumed from a [`TokenStream`](stream::TokenStream) and
//!    applied through the [option table](options) to the primary descriptor,
//!    or to the selector once `--selector` is seen;
//! 2. the single remaining token, if any, is [resolved](resolve) into a base
//!    descriptor (an [intent URI](intent_uri), a component, or a package);
//! 3. the two are merged with
//!    [`merge_positional`](launch_intent_core::merge_positional).
//!
//! Finished descriptors can be rendered back with [`output`].
//!
//! # Example
//!
//! ```
//! use launch_intent_core::*;
//! use launch_intent_parser::parse_intent_command;
//!
//! let d = parse_intent_command([
//!     "-a", "android.intent.action.VIEW",
//!     "-d", "/sdcard/roms/game.gba",
//!     "--ez", "fullscreen", "t",
//!     "com.emulator/.MainActivity",
//! ])
//! .unwrap();
//!
//! assert_eq!(d.action.as_deref(), Some(ACTION_VIEW));
//! assert_eq!(d.component.unwrap().class, "com.emulator.MainActivity");
//! assert_eq!(d.extras["fullscreen"], ExtraValue::Bool(true));
//! // The explicit action replaces the launcher defaults of the positional.
//! assert!(d.categories.is_empty());
//! ```

mod builder;
pub mod decode;
mod dispatch;
pub mod intent_uri;
pub mod options;
pub mod output;
pub mod resolve;
pub mod stream;

pub use builder::{IntentBuilder, SealedIntent, Target};
pub use dispatch::IntentParser;

use launch_intent_core::{IntentError, LaunchDescriptor};

use crate::stream::TokenStream;

/// Parses launch command tokens (without the leading `am start`).
///
/// # Errors
///
/// Returns the first [`IntentError`] met; there is no partial result.
pub fn parse_intent_command<I, S>(tokens: I) -> Result<LaunchDescriptor, IntentError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    IntentParser::new(TokenStream::new(tokens)).parse()
}

/// Splits a command string and parses the tokens.
///
/// # Examples
///
/// ```
/// use launch_intent_parser::parse_command_line;
///
/// let d = parse_command_line("-n 'com.example/.Main' --es rom '/sdcard/My Roms/a.zip'").unwrap();
/// assert_eq!(d.component.unwrap().package, "com.example");
/// ```
pub fn parse_command_line(line: &str) -> Result<LaunchDescriptor, IntentError> {
    IntentParser::new(TokenStream::from_command_line(line)).parse()
}
