//! Code generation commands
//!
//! # Example
//!
//! ```bash
//! nugra generate entity product --fields name:string,price:number,active:boolean
//! ```

use anyhow::{Context, Result};
use clap::Subcommand;
use console::{style, Emoji};
use nugra_cli_lib::registration::PatchOutcome;
use nugra_cli_lib::{plan_entity, EntityRequest, Flavor, GeneratedFile};
use similar::{ChangeTag, TextDiff};

static CHECK: Emoji<'_, '_> = Emoji("✓ ", "");
static FILE: Emoji<'_, '_> = Emoji("📄 ", "");

/// Generate code
#[derive(Subcommand)]
pub enum GenerateCommand {
    /// Generate a CRUD entity: NestJS module plus frontend components
    Entity {
        /// Entity name (e.g. `product`)
        name: String,
        /// Comma-separated `name:type` fields (e.g. `name:string,price:number`)
        #[arg(long)]
        fields: Option<String>,
        /// Frontend framework, overriding the project metadata
        #[arg(long, value_enum)]
        frontend: Option<Flavor>,
        /// Overwrite existing entity files
        #[arg(long)]
        force: bool,
        /// Show what would be generated without writing anything
        #[arg(long)]
        dry_run: bool,
    },
}

impl GenerateCommand {
    /// Execute the command
    pub fn execute(&self) -> Result<()> {
        match self {
            Self::Entity {
                name,
                fields,
                frontend,
                force,
                dry_run,
            } => {
                let request = EntityRequest {
                    name: name.clone(),
                    fields: fields.clone(),
                    frontend: *frontend,
                };
                generate_entity(&request, *force, *dry_run)
            }
        }
    }
}

fn generate_entity(request: &EntityRequest, force: bool, dry_run: bool) -> Result<()> {
    println!(
        "\n{} {} {}",
        style("Generating entity").cyan().bold(),
        style(&request.name).green().bold(),
        style("...").cyan().bold()
    );

    let project_root = std::env::current_dir().context("Failed to get current directory")?;
    let plan = plan_entity(&project_root, request)
        .with_context(|| format!("Failed to generate entity '{}'", request.name))?;

    if dry_run {
        println!(
            "\n{} {} files would be written ({} frontend):",
            style("Dry run:").yellow().bold(),
            plan.files.len(),
            plan.flavor
        );
        for file in &plan.files {
            print_file(&FILE, file);
        }
        println!();
        print_registration_diff(&plan.registration);
        return Ok(());
    }

    plan.apply(&project_root, force).context("Failed to write entity files")?;

    println!("\n{} {} files:", style("Generated").green().bold(), plan.files.len());
    for file in &plan.files {
        print_file(&CHECK, file);
    }

    let registration = &plan.registration;
    if registration.changed() {
        println!(
            "\n{} {} in {}",
            style("Registered").green().bold(),
            style(&registration.module_class).bold(),
            registration.path.strip_prefix(&project_root).unwrap_or(&registration.path).display()
        );
    } else {
        println!(
            "\n{} already registered",
            style(&registration.module_class).bold()
        );
    }

    Ok(())
}

fn print_file(icon: &Emoji<'_, '_>, file: &GeneratedFile) {
    println!(
        "  {icon}{} {}",
        style(file.path.display()).cyan(),
        style(format!("({})", file.description)).dim()
    );
}

/// Print the registration change as a colored diff
fn print_registration_diff(outcome: &PatchOutcome) {
    if !outcome.changed() {
        println!("{} already registered", style(&outcome.module_class).bold());
        return;
    }

    println!("{FILE}{}", style(outcome.path.display()).bold());
    println!();

    let diff = TextDiff::from_lines(&outcome.original, &outcome.patched);
    for change in diff.iter_all_changes() {
        match change.tag() {
            ChangeTag::Delete => {
                print!("{}", style(format!("-{change}")).red());
            }
            ChangeTag::Insert => {
                print!("{}", style(format!("+{change}")).green());
            }
            ChangeTag::Equal => {
                print!(" {change}");
            }
        }
    }
    println!();
}
