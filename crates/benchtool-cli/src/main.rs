//! benchtool CLI
//!
//! Command-line front end for the benchmarking tool adapters.
//!
//! # Commands
//!
//! - `benchtool locate` - Print the resolved tool executable
//! - `benchtool version` - Print the tool's version identifier
//! - `benchtool status --exit-code N [FILE]` - Classify saved run output
//! - `benchtool cmdline <source> [-- options...]` - Print a run command line

mod commands;

use benchtool_adapters::ToolId;
use clap::{Parser, Subcommand};
use commands::{CmdlineConfig, StatusConfig, ToolOptions, VersionConfig};
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "benchtool")]
#[command(about = "Locate, version and classify verification tools for benchmarking")]
#[command(version)]
struct Cli {
    /// Tool adapter to use
    #[arg(short, long, global = true, default_value = "blast")]
    tool: ToolId,

    /// Explicit path to the tool binary (skips the search path)
    #[arg(long, global = true, env = "BLAST_PATH")]
    tool_path: Option<PathBuf>,

    /// Directories to search, PATH-style (defaults to $PATH)
    #[arg(long, global = true)]
    search_path: Option<String>,

    /// Seconds to wait for the version banner
    #[arg(long, global = true, default_value = "10")]
    version_timeout: u64,

    /// Emit JSON instead of plain text
    #[arg(long, global = true)]
    json: bool,

    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the resolved executable path
    Locate,
    /// Print the tool's version identifier
    Version {
        /// Executable to query instead of searching for it
        #[arg(long)]
        executable: Option<PathBuf>,
    },
    /// Classify the output of a finished run
    Status {
        /// Exit code of the run
        #[arg(short = 'c', long, allow_negative_numbers = true)]
        exit_code: i32,
        /// Signal that terminated the run
        #[arg(short, long)]
        signal: Option<i32>,
        /// The run was killed for exceeding its time budget
        #[arg(long)]
        timed_out: bool,
        /// File holding the combined output ("-" or omitted for stdin)
        input: Option<PathBuf>,
    },
    /// Print the command line for running the tool on a source file
    Cmdline {
        /// Executable to use instead of searching for it
        #[arg(long)]
        executable: Option<PathBuf>,
        /// Source file to verify
        source_file: PathBuf,
        /// Extra tool options
        #[arg(last = true)]
        options: Vec<String>,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let options = ToolOptions {
        tool: cli.tool,
        tool_path: cli.tool_path,
        search_path: cli.search_path,
        version_timeout: Duration::from_secs(cli.version_timeout),
        json: cli.json,
    };
    debug!("benchtool options: {:?}", options);

    match cli.command {
        Commands::Locate => commands::run_locate(&options)?,
        Commands::Version { executable } => {
            commands::run_version(&options, VersionConfig { executable }).await?;
        }
        Commands::Status {
            exit_code,
            signal,
            timed_out,
            input,
        } => {
            commands::run_status(
                &options,
                StatusConfig {
                    exit_code,
                    exit_signal: signal,
                    timed_out,
                    input,
                },
            )
            .await?;
        }
        Commands::Cmdline {
            executable,
            source_file,
            options: tool_options,
        } => {
            commands::run_cmdline(
                &options,
                CmdlineConfig {
                    executable,
                    source_file,
                    options: tool_options,
                },
            )?;
        }
    }

    Ok(())
}
