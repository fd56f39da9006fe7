// outlink-cli/src/main.rs
// ============================================================================
// Module: Outlink CLI Entry Point
// Description: Command dispatcher for link decoration and config workflows.
// Purpose: Provide a safe CLI for decoration, eligibility probes, and config.
// Dependencies: clap, outlink-config, outlink-core, serde_json, thiserror.
// ============================================================================

//! ## Overview
//! The Outlink CLI decorates single links, probes eligibility, renders build
//! summaries, and validates configuration. All user-facing strings are routed
//! through the message catalog to prepare for future localization. CLI inputs
//! are untrusted and must be validated.

// ============================================================================
// SECTION: Modules
// ============================================================================


// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::ArgAction;
use clap::Args;
use clap::CommandFactory;
use clap::Parser;
use clap::Subcommand;
use outlink_cli::t;
use outlink_config::OutlinkConfig;
use outlink_config::config_toml_example;
use outlink_core::BuildSummary;
use outlink_core::DecorationContext;
use outlink_core::HostnameStatus;
use outlink_core::LinkDecorator;
use outlink_core::LinkRequest;
use outlink_core::ServerBuild;
use outlink_core::TelemetryId;
use outlink_core::UserId;
use thiserror::Error;

// ============================================================================
// SECTION: CLI Definition
// ============================================================================

/// Top-level CLI arguments.
#[derive(Debug, Parser)]
#[command(name = "outlink", about = "Deterministic outbound-link decoration")]
struct Cli {
    /// Print version information and exit.
    #[arg(long = "version", action = ArgAction::SetTrue)]
    show_version: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Top-level subcommands.
#[derive(Debug, Subcommand)]
enum Commands {
    /// Decorate a single outbound link.
    Decorate(DecorateArgs),
    /// Probe link eligibility without decorating.
    Check(CheckArgs),
    /// Render the build summary report.
    Info(InfoArgs),
    /// Configuration utilities.
    Config {
        /// Config subcommand to execute.
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Arguments for the `decorate` command.
#[derive(Debug, Args)]
struct DecorateArgs {
    /// Candidate link to decorate.
    #[arg(long)]
    href: String,

    /// Location tag identifying the call site.
    #[arg(long, default_value = "")]
    location: String,

    /// Parameter override in KEY=VALUE form; repeatable.
    #[arg(long = "set", value_name = "KEY=VALUE")]
    set: Vec<String>,

    /// Active user identifier.
    #[arg(long, default_value = "")]
    user_id: String,

    /// Telemetry session identifier.
    #[arg(long, default_value = "")]
    telemetry_id: String,

    /// Raw server build number.
    #[arg(long)]
    build_number: Option<String>,

    /// Semantic server version.
    #[arg(long)]
    server_version: Option<String>,

    /// Path to the configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Emit the outcome as JSON instead of the bare URL.
    #[arg(long, action = ArgAction::SetTrue)]
    json: bool,
}

/// Arguments for the `check` command.
#[derive(Debug, Args)]
struct CheckArgs {
    /// Candidate link to probe.
    #[arg(long)]
    href: String,

    /// Path to the configuration file.
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Arguments for the `info` command.
#[derive(Debug, Args)]
struct InfoArgs {
    /// Raw server build number.
    #[arg(long)]
    build_number: Option<String>,

    /// Semantic server version.
    #[arg(long)]
    server_version: Option<String>,

    /// Database schema version.
    #[arg(long)]
    schema_version: Option<String>,

    /// Database driver name.
    #[arg(long)]
    database: Option<String>,

    /// Build hash.
    #[arg(long)]
    build_hash: Option<String>,

    /// Build date.
    #[arg(long)]
    build_date: Option<String>,

    /// Hostname reported by the server.
    #[arg(long, conflicts_with = "disconnected")]
    hostname: Option<String>,

    /// Report the client as disconnected.
    #[arg(long, action = ArgAction::SetTrue)]
    disconnected: bool,
}

/// Config subcommands.
#[derive(Debug, Subcommand)]
enum ConfigCommands {
    /// Validate the configuration file.
    Validate {
        /// Path to the configuration file.
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print a canonical example configuration.
    Example,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error carrying a user-facing message.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a catalog message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();

    if cli.show_version {
        let version = env!("CARGO_PKG_VERSION");
        write_stdout_line(&t!("main.version", version = version))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command else {
        show_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    match command {
        Commands::Decorate(command) => command_decorate(&command),
        Commands::Check(command) => command_check(&command),
        Commands::Info(command) => command_info(command),
        Commands::Config {
            command,
        } => match command {
            ConfigCommands::Validate {
                config,
            } => command_config_validate(config.as_deref()),
            ConfigCommands::Example => command_config_example(),
        },
    }
}

// ============================================================================
// SECTION: Commands
// ============================================================================

/// Decorates a single link and prints the outcome.
fn command_decorate(args: &DecorateArgs) -> CliResult<ExitCode> {
    let config = load_config(args.config.as_deref())?;
    let decorator = LinkDecorator::new(config.to_policy());

    let mut request = LinkRequest::new(args.href.clone()).with_location(args.location.clone());
    for raw in &args.set {
        let (key, value) = parse_override(raw)?;
        request = request.with_override(key, value);
    }

    let context = DecorationContext::new(
        UserId::new(args.user_id.clone()),
        TelemetryId::new(args.telemetry_id.clone()),
        ServerBuild::new(args.build_number.clone(), args.server_version.clone()),
    );

    let outcome = decorator
        .decorate(&request, &context)
        .map_err(|err| CliError::new(t!("decorate.failed", error = err)))?;

    if args.json {
        let rendered = serde_json::to_string_pretty(&outcome)
            .map_err(|err| CliError::new(t!("decorate.serialize_failed", error = err)))?;
        write_stdout_line(&rendered)
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    } else {
        write_stdout_line(&outcome.url)
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    }
    Ok(ExitCode::SUCCESS)
}

/// Probes link eligibility and reports the expected outcome.
fn command_check(args: &CheckArgs) -> CliResult<ExitCode> {
    let config = load_config(args.config.as_deref())?;
    let policy = config.to_policy();

    if policy.is_eligible(&args.href) {
        write_stdout_line(&t!("check.eligible"))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }
    write_stdout_line(&t!("check.passthrough"))
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::from(1))
}

/// Renders the build summary report.
fn command_info(args: InfoArgs) -> CliResult<ExitCode> {
    let hostname = if args.disconnected {
        HostnameStatus::Disconnected
    } else {
        args.hostname.map_or(HostnameStatus::Unknown, HostnameStatus::Known)
    };

    let mut summary = BuildSummary::new(ServerBuild::new(args.build_number, args.server_version))
        .with_hostname(hostname);
    if let Some(schema_version) = args.schema_version {
        summary = summary.with_schema_version(schema_version);
    }
    if let Some(database) = args.database {
        summary = summary.with_database_driver(database);
    }
    if let Some(build_hash) = args.build_hash {
        summary = summary.with_build_hash(build_hash);
    }
    if let Some(build_date) = args.build_date {
        summary = summary.with_build_date(build_date);
    }

    write_stdout_line(&summary.report())
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

/// Validates the configuration file.
fn command_config_validate(path: Option<&Path>) -> CliResult<ExitCode> {
    load_config(path)?;
    write_stdout_line(&t!("config.validate.ok"))
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

/// Prints a canonical example configuration.
fn command_config_example() -> CliResult<ExitCode> {
    write_stdout_bytes(config_toml_example().as_bytes())
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Loads configuration, mapping failures onto CLI errors.
fn load_config(path: Option<&Path>) -> CliResult<OutlinkConfig> {
    OutlinkConfig::load(path).map_err(|err| CliError::new(t!("config.load_failed", error = err)))
}

/// Parses a KEY=VALUE override argument.
fn parse_override(raw: &str) -> CliResult<(String, String)> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(CliError::new(t!("decorate.override.invalid", value = raw))),
    }
}

/// Prints top-level help.
fn show_help() -> CliResult<()> {
    let mut command = Cli::command();
    command.print_help().map_err(|err| CliError::new(output_error("stdout", &err)))?;
    write_stdout_line("").map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(())
}

/// Formats an output-stream failure message.
fn output_error(stream: &str, err: &std::io::Error) -> String {
    let stream = match stream {
        "stdout" => t!("output.stream.stdout"),
        "stderr" => t!("output.stream.stderr"),
        _ => stream.to_string(),
    };
    t!("output.write_failed", stream = stream, error = err)
}

/// Writes a single line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes raw bytes to stdout without adding a newline.
fn write_stdout_bytes(bytes: &[u8]) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    stdout.write_all(bytes)
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Reports an error on stderr and returns a failing exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
