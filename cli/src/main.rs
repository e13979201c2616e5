//! centauri-cli: inspect the governance whitelist and decode mint simulation entries.

mod commands;
mod config;

use centauri_utils::LogFormat;
use clap::Parser;
use config::CliConfig;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "centauri-cli",
    about = "Inspect the Centauri governance whitelist and mint simulation store"
)]
struct Cli {
    /// Path to a TOML configuration file. CLI flags and env vars override it.
    #[arg(long, env = "CENTAURI_CONFIG")]
    config: Option<PathBuf>,

    /// Log format: "human" or "json".
    #[arg(long, env = "CENTAURI_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "CENTAURI_LOG_LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Check whether a proposal may execute a message type.
    CheckMsg {
        /// Fully-qualified type URL, e.g. /cosmos.gov.v1.MsgUpdateParams.
        type_url: String,
    },
    /// Classify legacy proposal content read from a JSON file.
    CheckProposal { file: PathBuf },
    /// Run the proposal filter over a JSON list of transaction messages.
    CheckTx { file: PathBuf },
    /// Print the whitelisted message types and parameters.
    Whitelist,
    /// Decode two diverging mint store entries.
    DecodeMint {
        /// Store key, hex-encoded.
        #[arg(long)]
        key: String,
        /// Value from the first run, hex-encoded.
        #[arg(long)]
        a: String,
        /// Value from the second run, hex-encoded.
        #[arg(long)]
        b: String,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let file_config = match cli.config {
        Some(ref path) => CliConfig::from_toml_file(path)?,
        None => CliConfig::default(),
    };
    let config = CliConfig {
        log_format: cli.log_format.unwrap_or(file_config.log_format),
        log_level: cli.log_level.unwrap_or(file_config.log_level),
    };
    centauri_utils::init_logging(config.log_format, &config.log_level);
    if let Some(path) = &cli.config {
        tracing::debug!(path = %path.display(), "loaded config");
    }

    let mut out = std::io::stdout().lock();
    let accepted = match &cli.command {
        Command::CheckMsg { type_url } => commands::check_msg(&mut out, type_url)?,
        Command::CheckProposal { file } => commands::check_proposal(&mut out, file)?,
        Command::CheckTx { file } => commands::check_tx(&mut out, file)?,
        Command::Whitelist => commands::print_whitelist(&mut out)?,
        Command::DecodeMint { key, a, b } => commands::decode_mint(&mut out, key, a, b)?,
    };

    Ok(if accepted {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
