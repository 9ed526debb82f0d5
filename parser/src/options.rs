//! Option table for the `am start` argument grammar.
//!
//! Every recognized option maps to an [`OptionEffect`] describing how many
//! operands it consumes and what it does with them. The dispatcher looks
//! options up here instead of branching on strings, so each entry can be
//! checked on its own.

use std::collections::HashMap;
use std::sync::LazyLock;

use launch_intent_core::ListKind;
use launch_intent_core::flags::*;

/// Value type of an extra-setting option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtraKind {
    /// Key only, no value operand (`--esn`).
    Null,
    String,
    Int,
    Long,
    Float,
    Bool,
    Uri,
    Component,
    IntList(ListKind),
    LongList(ListKind),
    FloatList(ListKind),
    StringList(ListKind),
}

/// What an option does to the descriptor being built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionEffect {
    Action,
    Data,
    MimeType,
    Identifier,
    Category,
    Component,
    Package,
    /// Replace the flags word with the decoded operand.
    SetFlags,
    /// OR a fixed bit into the flags word.
    AddFlags(u32),
    /// Read a key (and, except for [`ExtraKind::Null`], a value).
    Extra(ExtraKind),
    /// Seal the primary descriptor and start the selector.
    Selector,
    /// Accepted for compatibility and discarded along with its operands.
    Ignore { operands: usize },
}

impl OptionEffect {
    /// Number of operand tokens consumed after the option itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use launch_intent_parser::options::{ExtraKind, OptionEffect};
    ///
    /// assert_eq!(OptionEffect::Action.arity(), 1);
    /// assert_eq!(OptionEffect::Extra(ExtraKind::Int).arity(), 2);
    /// assert_eq!(OptionEffect::Extra(ExtraKind::Null).arity(), 1);
    /// assert_eq!(OptionEffect::Selector.arity(), 0);
    /// ```
    pub fn arity(self) -> usize {
        match self {
            Self::Action
            | Self::Data
            | Self::MimeType
            | Self::Identifier
            | Self::Category
            | Self::Component
            | Self::Package
            | Self::SetFlags => 1,
            Self::Extra(ExtraKind::Null) => 1,
            Self::Extra(_) => 2,
            Self::AddFlags(_) | Self::Selector => 0,
            Self::Ignore { operands } => operands,
        }
    }

    /// Whether applying this option to the primary descriptor counts as
    /// supplying intent information.
    pub fn marks_intent_info(self) -> bool {
        matches!(
            self,
            Self::Action
                | Self::Data
                | Self::MimeType
                | Self::Identifier
                | Self::Category
                | Self::Component
                | Self::Package
        )
    }

    /// Short human-readable description.
    pub fn describe(self) -> String {
        match self {
            Self::Action => "set action".to_string(),
            Self::Data => "set data URI".to_string(),
            Self::MimeType => "set MIME type".to_string(),
            Self::Identifier => "set identifier".to_string(),
            Self::Category => "add category".to_string(),
            Self::Component => "set component".to_string(),
            Self::Package => "set package".to_string(),
            Self::SetFlags => "replace flags".to_string(),
            Self::AddFlags(bits) => format!("add flag {bits:#010x}"),
            Self::Extra(kind) => format!("put {} extra", extra_kind_label(kind)),
            Self::Selector => "start selector".to_string(),
            Self::Ignore { operands: 0 } => "ignored".to_string(),
            Self::Ignore { operands } => format!("ignored ({operands} operand)"),
        }
    }
}

fn extra_kind_label(kind: ExtraKind) -> &'static str {
    match kind {
        ExtraKind::Null => "null string",
        ExtraKind::String => "string",
        ExtraKind::Int => "int",
        ExtraKind::Long => "long",
        ExtraKind::Float => "float",
        ExtraKind::Bool => "boolean",
        ExtraKind::Uri => "URI",
        ExtraKind::Component => "component",
        ExtraKind::IntList(ListKind::Array) => "int array",
        ExtraKind::IntList(ListKind::ArrayList) => "int array-list",
        ExtraKind::LongList(ListKind::Array) => "long array",
        ExtraKind::LongList(ListKind::ArrayList) => "long array-list",
        ExtraKind::FloatList(ListKind::Array) => "float array",
        ExtraKind::FloatList(ListKind::ArrayList) => "float array-list",
        ExtraKind::StringList(ListKind::Array) => "string array",
        ExtraKind::StringList(ListKind::ArrayList) => "string array-list",
    }
}

/// One row of the option table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionSpec {
    pub name: &'static str,
    pub effect: OptionEffect,
}

const fn opt(name: &'static str, effect: OptionEffect) -> OptionSpec {
    OptionSpec { name, effect }
}

const fn flag(name: &'static str, bits: u32) -> OptionSpec {
    opt(name, OptionEffect::AddFlags(bits))
}

const fn extra(name: &'static str, kind: ExtraKind) -> OptionSpec {
    opt(name, OptionEffect::Extra(kind))
}

const fn ignore(name: &'static str, operands: usize) -> OptionSpec {
    opt(name, OptionEffect::Ignore { operands })
}

use ListKind::{Array, ArrayList};

static OPTION_TABLE: &[OptionSpec] = &[
    opt("-a", OptionEffect::Action),
    opt("-d", OptionEffect::Data),
    opt("-t", OptionEffect::MimeType),
    opt("-i", OptionEffect::Identifier),
    opt("-c", OptionEffect::Category),
    opt("-n", OptionEffect::Component),
    opt("-p", OptionEffect::Package),
    opt("-f", OptionEffect::SetFlags),
    extra("-e", ExtraKind::String),
    extra("--es", ExtraKind::String),
    extra("--esn", ExtraKind::Null),
    extra("--ei", ExtraKind::Int),
    extra("--eu", ExtraKind::Uri),
    extra("--ecn", ExtraKind::Component),
    extra("--eia", ExtraKind::IntList(Array)),
    extra("--eial", ExtraKind::IntList(ArrayList)),
    extra("--el", ExtraKind::Long),
    extra("--ela", ExtraKind::LongList(Array)),
    extra("--elal", ExtraKind::LongList(ArrayList)),
    extra("--ef", ExtraKind::Float),
    extra("--efa", ExtraKind::FloatList(Array)),
    extra("--efal", ExtraKind::FloatList(ArrayList)),
    extra("--esa", ExtraKind::StringList(Array)),
    extra("--esal", ExtraKind::StringList(ArrayList)),
    extra("--ez", ExtraKind::Bool),
    flag("--grant-read-uri-permission", FLAG_GRANT_READ_URI_PERMISSION),
    flag("--grant-write-uri-permission", FLAG_GRANT_WRITE_URI_PERMISSION),
    flag(
        "--grant-persistable-uri-permission",
        FLAG_GRANT_PERSISTABLE_URI_PERMISSION,
    ),
    flag("--grant-prefix-uri-permission", FLAG_GRANT_PREFIX_URI_PERMISSION),
    flag("--exclude-stopped-packages", FLAG_EXCLUDE_STOPPED_PACKAGES),
    flag("--include-stopped-packages", FLAG_INCLUDE_STOPPED_PACKAGES),
    flag("--debug-log-resolution", FLAG_DEBUG_LOG_RESOLUTION),
    flag("--activity-brought-to-front", FLAG_ACTIVITY_BROUGHT_TO_FRONT),
    flag("--activity-clear-top", FLAG_ACTIVITY_CLEAR_TOP),
    flag(
        "--activity-clear-when-task-reset",
        FLAG_ACTIVITY_CLEAR_WHEN_TASK_RESET,
    ),
    flag(
        "--activity-exclude-from-recents",
        FLAG_ACTIVITY_EXCLUDE_FROM_RECENTS,
    ),
    flag(
        "--activity-launched-from-history",
        FLAG_ACTIVITY_LAUNCHED_FROM_HISTORY,
    ),
    flag("--activity-multiple-task", FLAG_ACTIVITY_MULTIPLE_TASK),
    flag("--activity-no-animation", FLAG_ACTIVITY_NO_ANIMATION),
    flag("--activity-no-history", FLAG_ACTIVITY_NO_HISTORY),
    flag("--activity-no-user-action", FLAG_ACTIVITY_NO_USER_ACTION),
    flag("--activity-previous-is-top", FLAG_ACTIVITY_PREVIOUS_IS_TOP),
    flag("--activity-reorder-to-front", FLAG_ACTIVITY_REORDER_TO_FRONT),
    flag(
        "--activity-reset-task-if-needed",
        FLAG_ACTIVITY_RESET_TASK_IF_NEEDED,
    ),
    flag("--activity-single-top", FLAG_ACTIVITY_SINGLE_TOP),
    flag("--activity-clear-task", FLAG_ACTIVITY_CLEAR_TASK),
    flag("--activity-task-on-home", FLAG_ACTIVITY_TASK_ON_HOME),
    flag("--activity-match-external", FLAG_ACTIVITY_MATCH_EXTERNAL),
    flag("--receiver-registered-only", FLAG_RECEIVER_REGISTERED_ONLY),
    flag("--receiver-replace-pending", FLAG_RECEIVER_REPLACE_PENDING),
    flag("--receiver-foreground", FLAG_RECEIVER_FOREGROUND),
    flag("--receiver-no-abort", FLAG_RECEIVER_NO_ABORT),
    opt("--selector", OptionEffect::Selector),
    // Options of the activity manager itself; the launcher has no use for them.
    ignore("-D", 0),
    ignore("-N", 0),
    ignore("-W", 0),
    ignore("-S", 0),
    ignore("--streaming", 0),
    ignore("--track-allocation", 0),
    ignore("--task-overlay", 0),
    ignore("--lock-task", 0),
    ignore("--allow-background-activity-starts", 0),
    ignore("-P", 1),
    ignore("--start-profiler", 1),
    ignore("--sampling", 1),
    ignore("--attach-agent", 1),
    ignore("--attach-agent-bind", 1),
    ignore("-R", 1),
    ignore("--user", 1),
    ignore("--receiver-permission", 1),
    ignore("--display", 1),
    ignore("--windowingMode", 1),
    ignore("--activityType", 1),
    ignore("--task", 1),
];

static OPTIONS_BY_NAME: LazyLock<HashMap<&'static str, &'static OptionSpec>> =
    LazyLock::new(|| OPTION_TABLE.iter().map(|spec| (spec.name, spec)).collect());

/// Returns the full option table in declaration order.
pub fn option_table() -> &'static [OptionSpec] {
    OPTION_TABLE
}

/// Looks up an option by its exact spelling.
///
/// # Examples
///
/// ```
/// use launch_intent_parser::options::{OptionEffect, lookup_option};
///
/// assert_eq!(lookup_option("-p").unwrap().effect, OptionEffect::Package);
/// assert!(lookup_option("--nope").is_none());
/// ```
pub fn lookup_option(name: &str) -> Option<&'static OptionSpec> {
    OPTIONS_BY_NAME.get(name).copied()
}

/// Names of activity and permission flag options whose bit is set in `flags`.
///
/// Receiver options are left out because they reuse activity bit positions.
pub fn flag_option_names(flags: u32) -> Vec<&'static str> {
    OPTION_TABLE
        .iter()
        .filter(|spec| !spec.name.starts_with("--receiver-"))
        .filter_map(|spec| match spec.effect {
            OptionEffect::AddFlags(bits) if flags & bits == bits => Some(spec.name),
            _ => None,
        })
        .collect()
}
