use std::io::Read;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use launch_intent_host::{HostConfig, HostContext, RecordingLauncher, run_am_command};
use launch_intent_parser::output::{OutputFormat, format_descriptor, format_options};
use launch_intent_parser::{parse_command_line, parse_intent_command};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "am-intent")]
#[command(about = "Parse, render and dry-run am start launch commands")]
#[command(version)]
struct Cli {
    /// Host configuration YAML (launch flags, app user).
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log filter used when RUST_LOG is unset.
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse launch options given as separate arguments (after `--`).
    Parse(ParseArgs),
    /// Parse a single launch command string from --line or stdin.
    ParseLine(ParseLineArgs),
    /// Run an am start command against a dry-run launcher.
    Start(StartArgs),
    /// List every recognized launch option.
    Options(OptionsArgs),
}

#[derive(Debug, Args)]
struct ParseArgs {
    /// Output format.
    #[arg(long, default_value = "json")]
    format: OutputFormat,
    /// Launch options and optional target, e.g. `-- -a A com.example`.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    tokens: Vec<String>,
}

#[derive(Debug, Args)]
struct ParseLineArgs {
    /// Command string; read from stdin when omitted.
    #[arg(long)]
    line: Option<String>,
    /// Output format.
    #[arg(long, default_value = "json")]
    format: OutputFormat,
}

#[derive(Debug, Args)]
struct StartArgs {
    /// Output format for the launched descriptor.
    #[arg(long, default_value = "json")]
    format: OutputFormat,
    /// Launch options and optional target, as given to `am start`.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    tokens: Vec<String>,
}

#[derive(Debug, Args)]
struct OptionsArgs {
    /// Output format (json, yaml or table).
    #[arg(long, default_value = "table")]
    format: OutputFormat,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let result = match cli.command {
        Command::Parse(args) => run_parse(args),
        Command::ParseLine(args) => run_parse_line(args),
        Command::Start(args) => run_start(args, cli.config),
        Command::Options(args) => run_options(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing(level: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .init();
}

fn run_parse(args: ParseArgs) -> Result<(), String> {
    let descriptor = parse_intent_command(args.tokens).map_err(|err| err.to_string())?;
    println!("{}", format_descriptor(&descriptor, args.format)?);
    Ok(())
}

fn run_parse_line(args: ParseLineArgs) -> Result<(), String> {
    let line = match args.line {
        Some(line) => line,
        None => {
            let mut line = String::new();
            std::io::stdin()
                .read_to_string(&mut line)
                .map_err(|err| format!("Failed to read stdin: {err}"))?;
            line
        }
    };
    let descriptor = parse_command_line(line.trim()).map_err(|err| err.to_string())?;
    println!("{}", format_descriptor(&descriptor, args.format)?);
    Ok(())
}

fn run_start(args: StartArgs, config_path: Option<PathBuf>) -> Result<(), String> {
    let config = match config_path {
        Some(path) => HostConfig::load(&path)
            .map_err(|err| format!("Failed to load config '{}': {err}", path.display()))?,
        None => HostConfig::default(),
    };
    debug!(config = ?config, "Using host config");

    let launcher = RecordingLauncher::new();
    let context = HostContext::new(&launcher);
    let am_args = std::iter::once("start".to_string()).chain(args.tokens);
    let descriptor = run_am_command(am_args, &context, &config).map_err(|err| err.to_string())?;

    println!("{}", format_descriptor(&descriptor, args.format)?);
    Ok(())
}

fn run_options(args: OptionsArgs) -> Result<(), String> {
    print!("{}", format_options(args.format)?);
    Ok(())
}
