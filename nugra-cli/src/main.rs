//! nugra CLI tool

#![forbid(unsafe_code)]
#![allow(clippy::multiple_crate_versions)]

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{CreateCommand, GenerateCommand, InstallCommand, InstallTarget, RunCommand};
use nugra_cli_lib::observability::{self, LogFormat};
use nugra_cli_lib::Flavor;

#[derive(Parser)]
#[command(name = "nugra")]
#[command(version)]
#[command(
    about = "Scaffold NestJS + React/Vue/Angular monorepos and CRUD entities",
    long_about = None
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Log line format
    #[arg(long, value_enum, default_value_t = LogFormat::Compact, global = true)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new monorepo (NestJS backend + frontend)
    Create {
        /// Project name (used as directory and npm package name)
        name: String,
        /// Frontend framework; prompts when omitted
        #[arg(long, value_enum)]
        frontend: Option<Flavor>,
        /// Write files only, skip package installs
        #[arg(long)]
        skip_install: bool,
        /// Do not seed ESLint/Prettier configuration
        #[arg(long)]
        no_lint: bool,
    },
    /// Generate code (entities)
    Generate {
        #[command(subcommand)]
        command: GenerateCommand,
    },
    /// Install a package into the project, frontend or backend
    #[command(visible_alias = "i")]
    Install {
        /// Package to install
        package: String,
        /// Install into apps/frontend
        #[arg(long, conflicts_with = "backend")]
        frontend: bool,
        /// Install into apps/backend
        #[arg(long)]
        backend: bool,
    },
    /// Run frontend and backend dev servers or builds
    Run {
        #[command(subcommand)]
        command: RunCommand,
    },
    /// Print the CLI version
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    observability::init(cli.verbose, cli.log_format)?;

    match cli.command {
        Commands::Create {
            name,
            frontend,
            skip_install,
            no_lint,
        } => {
            let cmd = CreateCommand::new(name, frontend, skip_install, !no_lint)?;
            cmd.execute()?;
        }
        Commands::Generate { command } => {
            command.execute()?;
        }
        Commands::Install {
            package,
            frontend,
            backend,
        } => {
            let target = InstallTarget::from_flags(frontend, backend);
            InstallCommand::new(package, target).execute()?;
        }
        Commands::Run { command } => {
            command.execute()?;
        }
        Commands::Version => {
            commands::version::execute();
        }
    }

    Ok(())
}
