//! The `am` command front-end.
//!
//! Accepts a full `am` argument list (`start` followed by launch options),
//! parses it, adds the configured launch flags and hands the result to the
//! context's launcher.

use launch_intent_core::{LaunchDescriptor, validate_descriptor};
use launch_intent_parser::parse_intent_command;
use launch_intent_parser::stream::split_command_line;
use tracing::{debug, info};

use crate::config::HostConfig;
use crate::error::{HostError, Result};
use crate::platform::{AppEntry, HostContext};

/// Runs an `am` command.
///
/// The first token is the subcommand, matched case-insensitively; only
/// `start` is supported. Returns the descriptor that was launched.
///
/// # Errors
///
/// - [`HostError::NoArguments`] for an empty argument list;
/// - [`HostError::UnsupportedCommand`] for any subcommand but `start`;
/// - [`HostError::Intent`] when the launch options do not parse;
/// - [`HostError::Invalid`] when the descriptor is structurally invalid;
/// - [`HostError::Launch`] when the launcher fails.
///
/// # Examples
///
/// ```
/// use launch_intent_core::flags::FLAG_ACTIVITY_NEW_TASK;
/// use launch_intent_host::{HostConfig, HostContext, RecordingLauncher, run_am_command};
///
/// let launcher = RecordingLauncher::new();
/// let context = HostContext::new(&launcher);
///
/// let d = run_am_command(["START", "com.example"], &context, &HostConfig::default()).unwrap();
/// assert_eq!(d.package.as_deref(), Some("com.example"));
/// assert_ne!(d.flags & FLAG_ACTIVITY_NEW_TASK, 0);
/// assert_eq!(launcher.launched(), vec![d]);
/// ```
pub fn run_am_command<I, S>(
    args: I,
    context: &HostContext<'_>,
    config: &HostConfig,
) -> Result<LaunchDescriptor>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut args = args.into_iter().map(Into::<String>::into);
    let command = args.next().ok_or(HostError::NoArguments)?.to_lowercase();
    if command != "start" {
        return Err(HostError::UnsupportedCommand(command));
    }

    let mut descriptor = parse_intent_command(args)?;
    if let Some(problem) = validate_descriptor(&descriptor).into_iter().next() {
        return Err(HostError::Invalid(problem));
    }
    descriptor.add_flags(config.launch_flags());

    info!(
        action = ?descriptor.action,
        component = ?descriptor.component.as_ref().map(|c| c.flatten()),
        package = ?descriptor.package,
        flags = %format!("{:#x}", descriptor.flags),
        "Launching"
    );
    context
        .launcher()
        .launch(&descriptor)
        .map_err(HostError::Launch)?;
    Ok(descriptor)
}

/// Splits a stored command string and runs it.
///
/// A leading `am` word is skipped, so both `am start ...` and `start ...`
/// are accepted.
pub fn run_am_line(
    line: &str,
    context: &HostContext<'_>,
    config: &HostConfig,
) -> Result<LaunchDescriptor> {
    let mut tokens = split_command_line(line);
    if tokens.first().is_some_and(|first| first == "am") {
        tokens.remove(0);
    }
    debug!(tokens = ?tokens, "Running am command line");
    run_am_command(tokens, context, config)
}

/// Launches an installed app through its generated launch command.
pub fn launch_app(
    app: &AppEntry,
    context: &HostContext<'_>,
    config: &HostConfig,
) -> Result<LaunchDescriptor> {
    run_am_line(&app.launch_command(config.apps.user), context, config)
}
