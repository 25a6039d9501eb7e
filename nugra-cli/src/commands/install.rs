//! Package install command

use anyhow::{Context, Result};
use console::style;
use nugra_cli_lib::layout;
use nugra_cli_lib::process::{self, CommandSpec};
use nugra_cli_lib::ProjectConfig;
use std::path::Path;

/// Where `install` runs the package manager
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallTarget {
    /// Project root
    Root,
    /// `apps/frontend`
    Frontend,
    /// `apps/backend`
    Backend,
}

impl InstallTarget {
    /// Target from the mutually exclusive `--frontend` / `--backend` flags
    pub const fn from_flags(frontend: bool, backend: bool) -> Self {
        if frontend {
            Self::Frontend
        } else if backend {
            Self::Backend
        } else {
            Self::Root
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Root => "root",
            Self::Frontend => "frontend",
            Self::Backend => "backend",
        }
    }

    fn dir(self, project_root: &Path) -> std::path::PathBuf {
        match self {
            Self::Root => project_root.to_path_buf(),
            Self::Frontend => project_root.join(layout::APPS_FRONTEND),
            Self::Backend => project_root.join(layout::APPS_BACKEND),
        }
    }
}

/// Install a package with the project's package manager
pub struct InstallCommand {
    package: String,
    target: InstallTarget,
}

impl InstallCommand {
    /// Create a new command instance
    pub const fn new(package: String, target: InstallTarget) -> Self {
        Self { package, target }
    }

    /// Execute the command
    pub fn execute(&self) -> Result<()> {
        let project_root = std::env::current_dir().context("Failed to get current directory")?;
        let config = ProjectConfig::load(&project_root)
            .context("Failed to load project configuration")?;

        let spec = CommandSpec::new(
            self.target.label(),
            &config.tooling.package_manager,
            ["install", self.package.as_str()],
            &self.target.dir(&project_root),
        );

        println!(
            "{} {} {} {}",
            style("Installing").green().bold(),
            style(&self.package).cyan().bold(),
            style("in").dim(),
            style(self.target.label()).bold()
        );

        process::run_blocking(&spec)
            .with_context(|| format!("Failed to install {}", self.package))?;

        println!("{}", style("✓ Package installed").green().bold());
        Ok(())
    }
}
