//! # icie CLI Entry Point
//!
//! Terminal front end for the build and test orchestrators. The active
//! document is `--source`, or the configured solution file when it exists;
//! the workspace root is `--workspace`, or the current directory.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use colored::*;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use icie::build::BuildOutcome;
use icie::config;
use icie::host::{TerminalReporter, WorkspaceEditor};
use icie::paths;
use icie::session::Session;
use icie::staleness;
use icie::tool::ProcessRunner;

#[derive(Parser)]
#[command(name = "icie")]
#[command(about = "Build and test a solution file through the ci compiler-driver", version = env!("CARGO_PKG_VERSION"))]
#[command(propagate_version = true)]
struct Cli {
    /// Source file to work on [default: the configured solution file]
    #[arg(long, global = true)]
    source: Option<PathBuf>,
    /// Workspace root [default: current directory]
    #[arg(long, global = true)]
    workspace: Option<PathBuf>,
    /// Show debug logs (overridden by ICIE_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Save and compile the active source file
    Build,
    /// Compile if out of date, then run the tests
    Test,
    /// Show resolved paths and whether a rebuild is needed
    Info,
    /// Generate shell completion scripts
    Completion { shell: Shell },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    if let Commands::Completion { shell } = &cli.command {
        let mut cmd = Cli::command();
        let bin_name = cmd.get_name().to_string();
        generate(*shell, &mut cmd, bin_name, &mut std::io::stdout());
        return Ok(());
    }

    let root = match &cli.workspace {
        Some(dir) => Some(absolute(dir)?),
        None => std::env::current_dir().ok(),
    };
    let config = match &root {
        Some(root) => config::load_config(root)?,
        None => config::IcieConfig::default(),
    };
    let source = match &cli.source {
        Some(path) => Some(absolute(path)?),
        None => root
            .as_deref()
            .map(|root| paths::solution(root, &config))
            .filter(|path| path.exists()),
    };

    let session = Session::new(
        Arc::new(WorkspaceEditor::new(source, root)),
        Arc::new(TerminalReporter::new()),
        Arc::new(ProcessRunner),
        config,
    );

    match cli.command {
        Commands::Build => match session.build().await {
            Ok(BuildOutcome::Succeeded(_)) => Ok(()),
            // The reporter already told the user what went wrong.
            Ok(BuildOutcome::Failed(_)) | Err(_) => std::process::exit(1),
        },
        Commands::Test => match session.test().await {
            Ok(true) => {
                println!("{}", "ALL TESTS PASSED ✨".green().bold());
                Ok(())
            }
            Ok(false) => {
                println!("{}", "SOME TESTS FAILED 💀".red().bold());
                std::process::exit(1);
            }
            Err(_) => std::process::exit(1),
        },
        Commands::Info => print_info(&session).await,
        Commands::Completion { .. } => Ok(()),
    }
}

fn init_tracing(verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_env("ICIE_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))
}

fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    Ok(cwd.join(path))
}

async fn print_info(session: &Session) -> Result<()> {
    println!("{} v{}", "icie".bold().cyan(), env!("CARGO_PKG_VERSION"));
    println!("------------------------------------");

    let workspace = session.workspace();
    let show = |path: Option<&Path>| match path {
        Some(path) => path.display().to_string(),
        None => "(none)".yellow().to_string(),
    };

    println!("{}: {}", "Source".bold(), show(workspace.source.as_deref()));
    println!(
        "{}: {}",
        "Tests".bold(),
        show(workspace.test_directory.as_deref())
    );
    match session.tool_path() {
        Ok(tool) => {
            let marker = if tool.exists() { "✓".green() } else { "x".red() };
            println!("{}: {} {}", "Tool".bold(), tool.display(), marker);
        }
        Err(e) => println!("{}: {}", "Tool".bold(), e.to_string().red()),
    }

    if let Some(source) = &workspace.source {
        let executable =
            paths::executable_for(source, &session.config().solution.artifact_extension);
        println!("{}: {}", "Executable".bold(), executable.display());
        match staleness::is_stale(source, &executable).await {
            Ok(true) => println!("{} Rebuild needed", "!".yellow()),
            Ok(false) => println!("{} Up to date", "⚡".green()),
            Err(e) => println!("{} {}", "x".red(), e),
        }
    }

    Ok(())
}
