//! Project scaffolding command

use anyhow::{Context, Result};
use console::style;
use dialoguer::Select;
use indicatif::{ProgressBar, ProgressStyle};
use nugra_cli_lib::project::{self, CreateOptions};
use nugra_cli_lib::{layout, process, Flavor, NugraError, ProjectConfig};

/// Create a new NestJS + frontend monorepo
pub struct CreateCommand {
    name: String,
    frontend: Option<Flavor>,
    skip_install: bool,
    lint: bool,
}

impl CreateCommand {
    /// Create a new command instance
    ///
    /// # Arguments
    ///
    /// * `name` - Project name (must be a valid npm package name)
    pub fn new(
        name: String,
        frontend: Option<Flavor>,
        skip_install: bool,
        lint: bool,
    ) -> Result<Self> {
        if !project::is_valid_project_name(&name) {
            return Err(NugraError::InvalidProjectName(name).into());
        }

        let output_dir = std::path::Path::new(&name);
        if output_dir.exists() {
            anyhow::bail!(
                "Directory '{name}' already exists. Please choose a different name \
                 or remove the existing directory."
            );
        }

        Ok(Self {
            name,
            frontend,
            skip_install,
            lint,
        })
    }

    /// Execute the command
    pub fn execute(&self) -> Result<()> {
        let flavor = match self.frontend {
            Some(flavor) => flavor,
            None => prompt_flavor()?,
        };
        let options = CreateOptions {
            flavor,
            lint: self.lint,
        };

        println!(
            "{} {} {} {}",
            style("Creating").green().bold(),
            style("nugra project:").bold(),
            style(&self.name).cyan().bold(),
            style(format!("({flavor} + NestJS)")).dim()
        );
        println!();

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .context("Failed to set progress style")?,
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(100));

        spinner.set_message("Creating project structure...");
        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        let root = project::create_project(&cwd, &self.name, options)
            .with_context(|| format!("Failed to create project '{}'", self.name))?;

        let mut failures = Vec::new();
        if self.skip_install {
            tracing::info!("skipping package installs");
        } else {
            let config =
                ProjectConfig::load(&root).context("Failed to load project configuration")?;
            for step in project::install_plan(&root, options, &config.tooling) {
                spinner.set_message(format!("Installing {}...", step.description));
                if let Err(err) = spinner.suspend(|| process::run_blocking(&step.command)) {
                    tracing::warn!(step = %step.description, %err, "install step failed");
                    failures.push((step.description, err));
                }
            }
        }

        spinner.finish_and_clear();
        self.print_summary(flavor);

        if !failures.is_empty() {
            println!();
            println!("{}", style("Some install steps failed:").yellow().bold());
            for (description, err) in &failures {
                println!("  {} {description}: {err}", style("✗").red());
            }
            anyhow::bail!(
                "{} install step(s) failed; files were created, rerun the installs inside '{}'",
                failures.len(),
                self.name
            );
        }

        Ok(())
    }

    /// Print the created layout and next steps
    fn print_summary(&self, flavor: Flavor) {
        println!("{}", style("✓ Project created successfully!").green().bold());
        println!();
        println!("{}", style("Structure:").bold());
        println!("  {}/", self.name);
        println!("    {:<18} {}", layout::APPS_BACKEND, style("NestJS API").dim());
        println!("    {:<18} {}", layout::APPS_FRONTEND, style(format!("{flavor} app")).dim());
        println!("    {:<18} {}", layout::PACKAGES_UI, style("shared UI components").dim());
        println!("    {:<18} {}", layout::PACKAGES_MODELS, style("shared models").dim());
        println!();
        println!("{}", style("Next steps:").bold());
        println!();
        println!("  {} Navigate to project:", style("1.").cyan());
        println!("     {} {}", style("$").dim(), style(format!("cd {}", self.name)).cyan());
        println!();
        println!("  {} Generate an entity:", style("2.").cyan());
        println!(
            "     {} {}",
            style("$").dim(),
            style("nugra generate entity product --fields name:string,price:number").cyan()
        );
        println!();
        println!("  {} Start development servers:", style("3.").cyan());
        println!("     {} {}", style("$").dim(), style("nugra run dev").cyan());
        println!();
        println!("  {} API docs:", style("4.").cyan());
        println!("     {}", style("http://localhost:3000/api-docs").cyan().underlined());
    }
}

/// Ask for the frontend framework
fn prompt_flavor() -> Result<Flavor> {
    let labels: Vec<_> = Flavor::ALL.iter().map(|flavor| flavor.label()).collect();
    let selection = Select::new()
        .with_prompt("Choose a frontend framework")
        .items(&labels)
        .default(0)
        .interact()
        .context("Failed to read frontend selection")?;

    Ok(Flavor::ALL[selection])
}
