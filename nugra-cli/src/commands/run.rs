//! Dev server and build commands

use anyhow::{Context, Result};
use clap::Subcommand;
use console::style;
use nugra_cli_lib::process;
use nugra_cli_lib::project::{build_commands, dev_commands};
use nugra_cli_lib::ProjectConfig;

/// Run the frontend and backend together
#[derive(Subcommand)]
pub enum RunCommand {
    /// Start frontend and backend dev servers (Ctrl-C stops both)
    Dev,
    /// Build frontend, then backend
    Build,
}

impl RunCommand {
    /// Execute the command
    pub fn execute(&self) -> Result<()> {
        let project_root = std::env::current_dir().context("Failed to get current directory")?;
        let config = ProjectConfig::load(&project_root)
            .context("Failed to load project configuration")?;
        let flavor = config.resolve_run_flavor(&project_root)?;

        match self {
            Self::Dev => {
                let specs = dev_commands(&project_root, flavor, &config.tooling);
                println!(
                    "{} {} {}",
                    style("Starting").green().bold(),
                    style(flavor).cyan().bold(),
                    style("and NestJS dev servers...").bold()
                );
                for spec in &specs {
                    println!("  {} {}", style(format!("{}:", spec.label)).dim(), spec);
                }
                println!();

                let runtime =
                    tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
                runtime
                    .block_on(process::supervise(&specs))
                    .context("Development servers failed")?;
            }
            Self::Build => {
                let mut failures = Vec::new();
                for spec in build_commands(&project_root, flavor, &config.tooling) {
                    println!("{} {} ({spec})", style("Building").green().bold(), spec.label);
                    if let Err(err) = process::run_blocking(&spec) {
                        tracing::warn!(label = %spec.label, %err, "build step failed");
                        println!("{} {err}", style("✗").red().bold());
                        failures.push(spec.label);
                    }
                }

                if !failures.is_empty() {
                    anyhow::bail!("Build failed for: {}", failures.join(", "));
                }
                println!("{}", style("✓ Build finished").green().bold());
            }
        }

        Ok(())
    }
}
