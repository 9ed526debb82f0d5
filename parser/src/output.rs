//! Output formatting for launch descriptors and the option table.

use launch_intent_core::{ExtraValue, LaunchDescriptor, ListKind};
use serde::Serialize;
use tracing::warn;

use crate::intent_uri::to_intent_uri;
use crate::options::{flag_option_names, option_table};

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum OutputFormat {
    Json,
    Yaml,
    Table,
    /// `am start` argument list, shell-quoted.
    Args,
    /// `intent:` URI.
    Uri,
}

/// Formats a descriptor in the requested output format.
pub fn format_descriptor(
    descriptor: &LaunchDescriptor,
    format: OutputFormat,
) -> Result<String, String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(descriptor)
            .map_err(|e| format!("JSON serialization failed: {e}")),
        OutputFormat::Yaml => serde_yaml::to_string(descriptor)
            .map_err(|e| format!("YAML serialization failed: {e}")),
        OutputFormat::Table => Ok(descriptor_to_table(descriptor)),
        OutputFormat::Args => Ok(join_command_line(&descriptor_to_args(descriptor))),
        OutputFormat::Uri => Ok(to_intent_uri(descriptor)),
    }
}

/// Renders a descriptor as `am start` arguments.
///
/// Parsing the result again yields an equal descriptor, provided it carries
/// no `double`, `byte`, `short` or `char` extras. Those only come from intent
/// URIs, have no `am` option, and are dropped with a warning, so the reparsed
/// descriptor lacks them.
///
/// # Examples
///
/// ```
/// use launch_intent_core::*;
/// use launch_intent_parser::output::descriptor_to_args;
///
/// let d = LaunchDescriptor::main_launcher()
///     .with_package("com.example")
///     .with_extra("n", ExtraValue::Int(3));
/// assert_eq!(
///     descriptor_to_args(&d),
///     vec!["-a", ACTION_MAIN, "-c", CATEGORY_LAUNCHER, "-p", "com.example", "--ei", "n", "3"]
/// );
/// ```
pub fn descriptor_to_args(descriptor: &LaunchDescriptor) -> Vec<String> {
    let mut args = Vec::new();
    push_descriptor_args(&mut args, descriptor);
    if let Some(selector) = &descriptor.selector {
        args.push("--selector".to_string());
        push_descriptor_args(&mut args, selector);
    }
    args
}

fn push_descriptor_args(args: &mut Vec<String>, descriptor: &LaunchDescriptor) {
    let mut push = |option: &str, operand: String| {
        args.push(option.to_string());
        args.push(operand);
    };

    if let Some(action) = &descriptor.action {
        push("-a", action.clone());
    }
    if let Some(data) = &descriptor.data {
        push("-d", data.to_string());
    }
    if let Some(mime_type) = &descriptor.mime_type {
        push("-t", mime_type.clone());
    }
    if let Some(identifier) = &descriptor.identifier {
        push("-i", identifier.clone());
    }
    for category in &descriptor.categories {
        push("-c", category.clone());
    }
    if let Some(component) = &descriptor.component {
        push("-n", component.flatten());
    }
    if let Some(package) = &descriptor.package {
        push("-p", package.clone());
    }
    if descriptor.flags != 0 {
        push("-f", format!("{:#x}", descriptor.flags));
    }

    for (key, value) in &descriptor.extras {
        let Some((option, operand)) = extra_option(value) else {
            warn!(
                key = %key,
                kind = value.type_name(),
                "Extra has no command-line form, dropping"
            );
            continue;
        };
        args.push(option.to_string());
        args.push(key.clone());
        if let Some(operand) = operand {
            args.push(operand);
        }
    }
}

/// Option and operand that reproduce an extra, if one exists.
fn extra_option(value: &ExtraValue) -> Option<(&'static str, Option<String>)> {
    fn list(kind: ListKind, array: &'static str, array_list: &'static str) -> &'static str {
        match kind {
            ListKind::Array => array,
            ListKind::ArrayList => array_list,
        }
    }

    // An empty list is written as a lone comma, which splits into nothing.
    fn join<T: ToString>(values: &[T]) -> String {
        if values.is_empty() {
            return ",".to_string();
        }
        values
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }

    let pair = match value {
        ExtraValue::Null => ("--esn", None),
        ExtraValue::String(v) => ("--es", Some(v.clone())),
        ExtraValue::Int(v) => ("--ei", Some(v.to_string())),
        ExtraValue::Long(v) => ("--el", Some(v.to_string())),
        ExtraValue::Float(v) => ("--ef", Some(v.to_string())),
        ExtraValue::Bool(v) => ("--ez", Some(v.to_string())),
        ExtraValue::Uri(v) => ("--eu", Some(v.to_string())),
        ExtraValue::Component(v) => ("--ecn", Some(v.flatten())),
        ExtraValue::IntList { values, kind } => (list(*kind, "--eia", "--eial"), Some(join(values))),
        ExtraValue::LongList { values, kind } => (list(*kind, "--ela", "--elal"), Some(join(values))),
        ExtraValue::FloatList { values, kind } => {
            (list(*kind, "--efa", "--efal"), Some(join(values)))
        }
        ExtraValue::StringList { values, kind } => {
            (list(*kind, "--esa", "--esal"), Some(join(values)))
        }
        ExtraValue::Double(_) | ExtraValue::Byte(_) | ExtraValue::Short(_) | ExtraValue::Char(_) => {
            return None;
        }
    };
    Some(pair)
}

/// Joins tokens into one command string that
/// [`split_command_line`](crate::stream::split_command_line) splits back.
///
/// # Examples
///
/// ```
/// use launch_intent_parser::output::join_command_line;
///
/// let line = join_command_line(&["--es".into(), "k".into(), "it's here".into(), "".into()]);
/// assert_eq!(line, r"--es k 'it'\''s here' ''");
/// ```
pub fn join_command_line(tokens: &[String]) -> String {
    tokens
        .iter()
        .map(|token| quote_token(token))
        .collect::<Vec<_>>()
        .join(" ")
}

fn quote_token(token: &str) -> String {
    let safe = !token.is_empty()
        && token.chars().all(|c| {
            c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '/' | ':' | ',' | '=' | '@' | '+' | '%')
        });
    if safe {
        token.to_string()
    } else {
        format!("'{}'", token.replace('\'', r"'\''"))
    }
}

fn descriptor_to_table(descriptor: &LaunchDescriptor) -> String {
    let mut out = String::new();
    write_table(&mut out, descriptor, "");
    if let Some(selector) = &descriptor.selector {
        out.push_str("Selector:\n");
        write_table(&mut out, selector, "  ");
    }
    out
}

fn write_table(out: &mut String, descriptor: &LaunchDescriptor, indent: &str) {
    let mut row = |label: &str, value: &str| {
        out.push_str(&format!("{indent}{label:<12}{value}\n"));
    };

    if let Some(ref action) = descriptor.action {
        row("Action:", action);
    }
    if let Some(ref data) = descriptor.data {
        row("Data:", data.as_str());
    }
    if let Some(ref mime_type) = descriptor.mime_type {
        row("Type:", mime_type);
    }
    if let Some(ref identifier) = descriptor.identifier {
        row("Identifier:", identifier);
    }
    if !descriptor.categories.is_empty() {
        let categories = descriptor
            .categories
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        row("Categories:", &categories);
    }
    if let Some(ref component) = descriptor.component {
        row("Component:", &component.flatten_short());
    }
    if let Some(ref package) = descriptor.package {
        row("Package:", package);
    }
    if descriptor.flags != 0 {
        let names = flag_option_names(descriptor.flags);
        let flags = if names.is_empty() {
            format!("{:#010x}", descriptor.flags)
        } else {
            format!("{:#010x} ({})", descriptor.flags, names.join(" "))
        };
        row("Flags:", &flags);
    }

    if !descriptor.extras.is_empty() {
        out.push_str(&format!("{indent}Extras:\n"));
        let key_width = descriptor.extras.keys().map(String::len).max().unwrap_or(4);
        let type_width = descriptor
            .extras
            .values()
            .map(|v| v.type_name().len())
            .max()
            .unwrap_or(4);
        for (key, value) in &descriptor.extras {
            out.push_str(&format!(
                "{indent}  {key:<key_width$}  {:<type_width$}  {value}\n",
                value.type_name()
            ));
        }
    }
}

/// One option table row, as dumped by [`format_options`].
#[derive(Debug, Clone, Serialize)]
pub struct OptionRow {
    pub name: &'static str,
    pub operands: usize,
    pub description: String,
}

/// Returns the option table as serializable rows.
pub fn option_rows() -> Vec<OptionRow> {
    option_table()
        .iter()
        .map(|spec| OptionRow {
            name: spec.name,
            operands: spec.effect.arity(),
            description: spec.effect.describe(),
        })
        .collect()
}

/// Formats the option table.
///
/// `args` and `uri` only apply to descriptors.
pub fn format_options(format: OutputFormat) -> Result<String, String> {
    let rows = option_rows();
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(&rows).map_err(|e| format!("JSON serialization failed: {e}"))
        }
        OutputFormat::Yaml => {
            serde_yaml::to_string(&rows).map_err(|e| format!("YAML serialization failed: {e}"))
        }
        OutputFormat::Table => {
            let width = rows.iter().map(|r| r.name.len()).max().unwrap_or(4);
            let mut out = String::new();
            for row in &rows {
                out.push_str(&format!(
                    "  {:<width$}  {}  {}\n",
                    row.name, row.operands, row.description
                ));
            }
            Ok(out)
        }
        OutputFormat::Args | OutputFormat::Uri => {
            Err(format!("format {format:?} is not supported for the option table"))
        }
    }
}
