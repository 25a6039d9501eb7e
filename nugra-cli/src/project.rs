//! Monorepo creation
//!
//! `create` validates the name, lays out `apps/` and `packages/`, writes the
//! starter files and the `nugra.toml` metadata record, then installs
//! dependencies following [`install_plan`]. The commands `run dev` and
//! `run build` launch in a created project are defined here too.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{ProjectConfig, ToolingSection};
use crate::error::{NugraError, Result};
use crate::flavor::Flavor;
use crate::layout;
use crate::process::CommandSpec;
use crate::templates::ProjectTemplate;

/// Maximum npm package name length
const MAX_NAME_LEN: usize = 214;

/// Dev dependencies installed in both apps when linting is enabled
pub const LINT_PACKAGES: &[&str] = &[
    "eslint",
    "prettier",
    "@typescript-eslint/eslint-plugin",
    "@typescript-eslint/parser",
    "eslint-plugin-prettier",
    "eslint-config-prettier",
];

/// Options for [`create_project`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateOptions {
    /// Frontend flavor
    pub flavor: Flavor,
    /// Seed ESLint/Prettier configuration and install lint packages
    pub lint: bool,
}

/// Whether `name` is usable as a project directory and npm package name
///
/// Lowercase ASCII letters, digits, `-`, `_`, `.` and `~`; not starting with
/// `.` or `_`; at most 214 characters.
///
/// # Examples
///
/// ```
/// # use nugra_cli_lib::project::is_valid_project_name;
/// assert!(is_valid_project_name("my-shop"));
/// assert!(!is_valid_project_name("MyShop"));
/// assert!(!is_valid_project_name(".hidden"));
/// ```
#[must_use]
pub fn is_valid_project_name(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= MAX_NAME_LEN
        && !name.starts_with(['.', '_'])
        && name
            .chars()
            .all(|c| {
                c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '_' | '.' | '~')
            })
}

/// Create the project `name` under `parent`
///
/// Returns the project root.
///
/// # Errors
///
/// Returns [`NugraError::InvalidProjectName`] for unusable names, an I/O
/// error of kind `AlreadyExists` if the directory exists, or any error from
/// writing the starter files.
pub fn create_project(parent: &Path, name: &str, options: CreateOptions) -> Result<PathBuf> {
    if !is_valid_project_name(name) {
        return Err(NugraError::InvalidProjectName(name.to_string()));
    }

    let root = parent.join(name);
    if root.exists() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!("directory '{}' already exists", root.display()),
        )
        .into());
    }

    for dir in layout::PROJECT_DIRS {
        fs::create_dir_all(root.join(dir))?;
    }
    tracing::debug!(root = %root.display(), "created project directories");

    let written = ProjectTemplate::new(name, options.flavor)
        .with_lint(options.lint)
        .generate(&root)?;
    tracing::info!(
        root = %root.display(),
        files = written.len(),
        flavor = %options.flavor,
        "wrote starter files"
    );

    ProjectConfig::for_new_project(name, options.flavor).save(&root)?;

    Ok(root)
}

/// A package install step of project creation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallStep {
    /// What the step installs, for progress output
    pub description: String,
    /// Command to run
    pub command: CommandSpec,
}

/// Package installs run after the files are written, in order
///
/// Lint tooling goes to both apps (when enabled), then the framework and
/// Tailwind packages to the frontend, then the backend's declared
/// dependencies.
#[must_use]
pub fn install_plan(
    root: &Path,
    options: CreateOptions,
    tooling: &ToolingSection,
) -> Vec<InstallStep> {
    let frontend = root.join(layout::APPS_FRONTEND);
    let backend = root.join(layout::APPS_BACKEND);
    let pm = tooling.package_manager.as_str();
    let mut steps = Vec::new();

    if options.lint {
        for (label, dir) in [("frontend", &frontend), ("backend", &backend)] {
            let args = ["install", "--save-dev"].into_iter().chain(LINT_PACKAGES.iter().copied());
            steps.push(InstallStep {
                description: format!("lint tooling ({label})"),
                command: CommandSpec::new(label, pm, args, dir),
            });
        }
    }

    let packages = framework_packages(options.flavor);
    steps.push(InstallStep {
        description: format!("{} and Tailwind CSS", options.flavor),
        command: CommandSpec::new(
            "frontend",
            pm,
            std::iter::once("install").chain(packages.iter().copied()),
            &frontend,
        ),
    });

    steps.push(InstallStep {
        description: "NestJS backend dependencies".to_string(),
        command: CommandSpec::new("backend", pm, ["install"], &backend),
    });

    steps
}

/// Frontend packages installed for a flavor
#[must_use]
pub const fn framework_packages(flavor: Flavor) -> &'static [&'static str] {
    match flavor {
        Flavor::React => &["react", "react-dom", "vite", "tailwindcss", "postcss", "autoprefixer"],
        Flavor::Vue => &["vue", "vite", "tailwindcss", "postcss", "autoprefixer"],
        Flavor::Angular => &[
            "@angular/core",
            "@angular/platform-browser",
            "@angular/platform-browser-dynamic",
            "tailwindcss",
            "postcss",
            "autoprefixer",
        ],
    }
}

/// Dev servers started by `run dev`: frontend first, then backend
#[must_use]
pub fn dev_commands(root: &Path, flavor: Flavor, tooling: &ToolingSection) -> Vec<CommandSpec> {
    let frontend_args: &[&str] = match flavor {
        Flavor::Angular => &["ng", "serve"],
        Flavor::React | Flavor::Vue => &["vite"],
    };

    vec![
        CommandSpec::new(
            "frontend",
            &tooling.runner,
            frontend_args.iter().copied(),
            &root.join(layout::APPS_FRONTEND),
        ),
        CommandSpec::new(
            "backend",
            &tooling.package_manager,
            ["run", "start:dev"],
            &root.join(layout::APPS_BACKEND),
        ),
    ]
}

/// Builds run by `run build`, in order
#[must_use]
pub fn build_commands(root: &Path, flavor: Flavor, tooling: &ToolingSection) -> Vec<CommandSpec> {
    let frontend_args: &[&str] = match flavor {
        Flavor::Angular => &["ng", "build"],
        Flavor::React | Flavor::Vue => &["vite", "build"],
    };

    vec![
        CommandSpec::new(
            "frontend",
            &tooling.runner,
            frontend_args.iter().copied(),
            &root.join(layout::APPS_FRONTEND),
        ),
        CommandSpec::new(
            "backend",
            &tooling.package_manager,
            ["run", "build"],
            &root.join(layout::APPS_BACKEND),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const REACT: CreateOptions = CreateOptions {
        flavor: Flavor::React,
        lint: true,
    };

    #[test]
    fn test_project_name_validation() {
        assert!(is_valid_project_name("shop"));
        assert!(is_valid_project_name("my-shop.v2"));
        assert!(!is_valid_project_name(""));
        assert!(!is_valid_project_name("_private"));
        assert!(!is_valid_project_name("my shop"));
        assert!(!is_valid_project_name("../shop"));
        assert!(!is_valid_project_name(&"a".repeat(215)));
    }

    #[test]
    fn test_create_project_layout() {
        let temp_dir = tempdir().unwrap();
        let root = create_project(temp_dir.path(), "shop", REACT).unwrap();

        for dir in layout::PROJECT_DIRS {
            assert!(root.join(dir).is_dir(), "{dir}");
        }
        assert!(root.join(layout::REGISTRATION_FILE).is_file());

        let config = ProjectConfig::load(&root).unwrap();
        assert_eq!(config.project.name, "shop");
        assert_eq!(config.project.frontend, Some(Flavor::React));
    }

    #[test]
    fn test_create_refuses_existing_directory() {
        let temp_dir = tempdir().unwrap();
        fs::create_dir(temp_dir.path().join("shop")).unwrap();
        let err = create_project(temp_dir.path(), "shop", REACT).unwrap_err();
        assert!(matches!(
            err,
            NugraError::Io(ref e) if e.kind() == std::io::ErrorKind::AlreadyExists
        ));
    }

    #[test]
    fn test_create_rejects_invalid_name() {
        let temp_dir = tempdir().unwrap();
        let err = create_project(temp_dir.path(), "Shop", REACT).unwrap_err();
        assert!(matches!(err, NugraError::InvalidProjectName(_)));
        assert!(!temp_dir.path().join("Shop").exists());
    }

    #[test]
    fn test_install_plan() {
        let root = Path::new("/work/shop");
        let steps = install_plan(root, REACT, &ToolingSection::default());
        assert_eq!(steps.len(), 4);
        assert_eq!(
            steps[0].command.to_string(),
            "npm install --save-dev eslint prettier @typescript-eslint/eslint-plugin \
             @typescript-eslint/parser eslint-plugin-prettier eslint-config-prettier"
        );
        assert_eq!(steps[0].command.cwd, root.join("apps/frontend"));
        assert_eq!(steps[1].command.cwd, root.join("apps/backend"));
        assert_eq!(
            steps[2].command.to_string(),
            "npm install react react-dom vite tailwindcss postcss autoprefixer"
        );
        assert_eq!(steps[3].command.to_string(), "npm install");
    }

    #[test]
    fn test_dev_and_build_commands() {
        let root = Path::new("shop");
        let tooling = ToolingSection::default();

        let dev = dev_commands(root, Flavor::Angular, &tooling);
        assert_eq!(dev[0].to_string(), "npx ng serve");
        assert_eq!(dev[0].cwd, root.join("apps/frontend"));
        assert_eq!(dev[1].to_string(), "npm run start:dev");
        assert_eq!(dev[1].cwd, root.join("apps/backend"));

        let build = build_commands(root, Flavor::Vue, &tooling);
        assert_eq!(build[0].to_string(), "npx vite build");
        assert_eq!(build[1].to_string(), "npm run build");
        assert_eq!(dev_commands(root, Flavor::React, &tooling)[0].to_string(), "npx vite");
    }

    #[test]
    fn test_install_plan_without_lint() {
        let options = CreateOptions {
            flavor: Flavor::Angular,
            lint: false,
        };
        let tooling = ToolingSection {
            package_manager: "pnpm".to_string(),
            ..ToolingSection::default()
        };
        let steps = install_plan(Path::new("shop"), options, &tooling);
        assert_eq!(steps.len(), 2);
        assert!(steps[0].command.to_string().starts_with("pnpm install @angular/core"));
    }
}
