//! Project configuration and metadata
//!
//! Every project created by `nugra create` carries a `nugra.toml` at its root
//! recording the chosen frontend flavor. Configuration is loaded with clear
//! precedence:
//!
//! 1. Environment variables (highest priority, `NUGRA_` prefix, `__` for nesting)
//! 2. `<project>/nugra.toml`
//! 3. Hardcoded defaults (fallback)
//!
//! Example: `NUGRA_TOOLING__PACKAGE_MANAGER=pnpm`
//!
//! ```toml
//! [project]
//! name = "shop"
//! frontend = "vue"
//! backend = "nestjs"
//!
//! [tooling]
//! package_manager = "npm"
//! runner = "npx"
//!
//! [templates]
//! dir = ".nugra/templates"
//! ```

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{NugraError, Result};
use crate::flavor::Flavor;

/// Metadata file name at the project root
pub const CONFIG_FILE: &str = "nugra.toml";

/// Environment variable prefix
const ENV_PREFIX: &str = "NUGRA_";

/// Identity of a scaffolded project
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ProjectSection {
    /// Project name
    pub name: String,
    /// Frontend flavor chosen at creation time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frontend: Option<Flavor>,
    /// Backend framework, always `nestjs`
    pub backend: String,
}

impl Default for ProjectSection {
    fn default() -> Self {
        Self {
            name: String::new(),
            frontend: None,
            backend: "nestjs".to_string(),
        }
    }
}

/// External tools invoked by the CLI
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ToolingSection {
    /// Package manager used for installs and backend scripts
    pub package_manager: String,
    /// Package runner used for frontend dev/build tools
    pub runner: String,
}

impl Default for ToolingSection {
    fn default() -> Self {
        Self {
            package_manager: "npm".to_string(),
            runner: "npx".to_string(),
        }
    }
}

/// Template override settings
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TemplatesSection {
    /// Directory with entity template overrides, relative to the project root
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

/// Complete project configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectConfig {
    /// Project identity and flavor
    #[serde(default)]
    pub project: ProjectSection,

    /// External tooling
    #[serde(default)]
    pub tooling: ToolingSection,

    /// Template overrides
    #[serde(default)]
    pub templates: TemplatesSection,
}

impl ProjectConfig {
    /// Create configuration for a freshly created project
    #[must_use]
    pub fn for_new_project(name: &str, frontend: Flavor) -> Self {
        Self {
            project: ProjectSection {
                name: name.to_string(),
                frontend: Some(frontend),
                ..ProjectSection::default()
            },
            ..Self::default()
        }
    }

    /// Load configuration for the project rooted at `project_root`
    ///
    /// A missing `nugra.toml` is not an error; defaults and environment
    /// variables still apply.
    ///
    /// # Errors
    ///
    /// Returns an error if the file or environment contain invalid values.
    pub fn load(project_root: &Path) -> Result<Self> {
        let path = project_root.join(CONFIG_FILE);
        tracing::debug!(
            path = %path.display(),
            exists = path.exists(),
            "loading project configuration"
        );

        let config = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()?;

        Ok(config)
    }

    /// Write this configuration to `<project_root>/nugra.toml`
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, project_root: &Path) -> Result<()> {
        let path = project_root.join(CONFIG_FILE);
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        tracing::debug!(path = %path.display(), "wrote project configuration");
        Ok(())
    }

    /// Whether the project root carries a metadata file
    #[must_use]
    pub fn exists(project_root: &Path) -> bool {
        project_root.join(CONFIG_FILE).exists()
    }

    /// Absolute template override directory, if configured
    #[must_use]
    pub fn templates_dir(&self, project_root: &Path) -> Option<PathBuf> {
        self.templates.dir.as_ref().map(|dir| project_root.join(dir))
    }

    /// Resolve the frontend flavor of the project
    ///
    /// Order: explicit override, metadata record, legacy README marker.
    ///
    /// # Errors
    ///
    /// Returns [`NugraError::FlavorUndetermined`] when no source names a flavor,
    /// or [`NugraError::UnknownFlavor`] when the README names an unknown one.
    pub fn resolve_flavor(&self, project_root: &Path, explicit: Option<Flavor>) -> Result<Flavor> {
        if let Some(flavor) = explicit.or(self.project.frontend) {
            return Ok(flavor);
        }

        if let Some(flavor) = Flavor::detect_from_readme(project_root)? {
            tracing::warn!(
                %flavor,
                "flavor detected from README marker; \
                 add `frontend` to {CONFIG_FILE} to make it explicit"
            );
            return Ok(flavor);
        }

        Err(NugraError::FlavorUndetermined(project_root.to_path_buf()))
    }
    /// Resolve the flavor for `run dev` / `run build`
    ///
    /// Order: metadata record, frontend `package.json` dependencies, legacy
    /// README marker.
    ///
    /// # Errors
    ///
    /// Returns [`NugraError::FlavorUndetermined`] when no source names a flavor.
    pub fn resolve_run_flavor(&self, project_root: &Path) -> Result<Flavor> {
        if let Some(flavor) = self.project.frontend {
            return Ok(flavor);
        }

        if let Some(flavor) = Flavor::detect_from_manifest(project_root)? {
            tracing::debug!(%flavor, "flavor detected from frontend package.json");
            return Ok(flavor);
        }

        self.resolve_flavor(project_root, None)
    }
}
