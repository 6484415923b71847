// memberdir CLI - member directory and cooking-group roster from static JSON

mod directory;
mod exit_codes;
mod export;
mod roster;
mod util;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use exit_codes::{roster_exit_code, EXIT_ERROR, EXIT_IO, EXIT_SUCCESS, EXIT_USAGE};

#[derive(Parser)]
#[command(name = "memberdir")]
#[command(about = "Member directory and cooking-group roster tools")]
#[command(version)]
#[command(subcommand_required = false)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the cooking-group roster against the member list
    #[command(after_help = "\
Examples:
  memberdir groups directory.roster.toml
  memberdir groups directory.roster.toml --json
  memberdir groups directory.roster.toml --output groups.json --csv groups.csv
  memberdir groups directory.roster.toml --strict")]
    Groups {
        /// Path to the .roster.toml directory config
        config: PathBuf,

        /// Output JSON report to stdout instead of the group listing
        #[arg(long)]
        json: bool,

        /// Write JSON report to file (overrides [output].json)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Write flat CSV export to file (overrides [output].csv)
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Exit 4 when any roster name fell back to a placeholder
        #[arg(long)]
        strict: bool,
    },

    /// Check the config and datasets without resolving groups
    #[command(after_help = "\
Examples:
  memberdir validate directory.roster.toml")]
    Validate {
        /// Path to the .roster.toml directory config
        config: PathBuf,
    },

    /// Search members by name or phone number
    #[command(after_help = "\
Examples:
  memberdir search directory.roster.toml shah
  memberdir search directory.roster.toml '98430 12' --json")]
    Search {
        /// Path to the .roster.toml directory config
        config: PathBuf,

        /// Name fragment or phone digits
        query: String,

        #[arg(long)]
        json: bool,
    },

    /// List office bearers grouped by committee role
    Committee {
        /// Path to the .roster.toml directory config
        config: PathBuf,

        #[arg(long)]
        json: bool,
    },

    /// Look up a scanned QR payload (MEMBER:<id>)
    #[command(after_help = "\
Examples:
  memberdir scan directory.roster.toml MEMBER:101")]
    Scan {
        /// Path to the .roster.toml directory config
        config: PathBuf,

        /// Raw text decoded from the QR code
        payload: String,

        #[arg(long)]
        json: bool,
    },

    /// Print the member list with group numbers and captain roles filled in
    Assign {
        /// Path to the .roster.toml directory config
        config: PathBuf,

        /// Write JSON to file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// List emergency contacts
    Contacts {
        /// Path to the .roster.toml directory config
        config: PathBuf,

        #[arg(long)]
        json: bool,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // Also installs the `log` bridge, so engine records reach stderr.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    let result = match cli.command {
        None => {
            eprintln!("Usage: memberdir <command> [options]");
            eprintln!("       memberdir --help for more information");
            Err(CliError::new(EXIT_USAGE, ""))
        }
        Some(Commands::Groups { config, json, output, csv, strict }) => {
            roster::cmd_groups(config, json, output, csv, strict)
        }
        Some(Commands::Validate { config }) => roster::cmd_validate(config),
        Some(Commands::Assign { config, output }) => roster::cmd_assign(config, output),
        Some(Commands::Search { config, query, json }) => directory::cmd_search(config, query, json),
        Some(Commands::Committee { config, json }) => directory::cmd_committee(config, json),
        Some(Commands::Scan { config, payload, json }) => directory::cmd_scan(config, payload, json),
        Some(Commands::Contacts { config, json }) => directory::cmd_contacts(config, json),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn new(code: u8, msg: impl Into<String>) -> Self {
        Self { code, message: msg.into(), hint: None }
    }

    pub fn io(msg: impl Into<String>) -> Self {
        Self::new(EXIT_IO, msg)
    }

    pub fn json(err: serde_json::Error) -> Self {
        Self::new(EXIT_ERROR, format!("JSON serialization error: {err}"))
    }

    /// Add a hint to an existing error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl From<memberdir_roster::RosterError> for CliError {
    fn from(err: memberdir_roster::RosterError) -> Self {
        Self::new(roster_exit_code(&err), err.to_string())
    }
}
