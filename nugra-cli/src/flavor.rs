//! Frontend flavor of a scaffolded project
//!
//! The flavor decides which starter files `create` writes, which entity
//! templates `generate entity` renders, and which dev/build commands `run`
//! launches.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::error::{NugraError, Result};
use crate::layout;

/// README line prefix written by `create` and read back by older projects
pub const README_MARKER: &str = "Frontend: ";

/// Frontend framework family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Flavor {
    /// React with Vite
    React,
    /// Vue 3 with Vite
    Vue,
    /// Angular
    Angular,
}

impl Flavor {
    /// All flavors in prompt order
    pub const ALL: [Self; 3] = [Self::React, Self::Vue, Self::Angular];

    /// Display name as written to the README
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::React => "React",
            Self::Vue => "Vue",
            Self::Angular => "Angular",
        }
    }

    /// Detect the flavor from a legacy README marker (`Frontend: Vue`)
    ///
    /// Returns `Ok(None)` when the README has no marker line.
    ///
    /// # Errors
    ///
    /// Returns [`NugraError::UnknownFlavor`] if the marker names an unknown flavor.
    pub fn from_readme(content: &str) -> Result<Option<Self>> {
        content
            .lines()
            .find_map(|line| line.trim().strip_prefix(README_MARKER))
            .map(|name| name.trim().parse())
            .transpose()
    }

    /// Detect the flavor from the dependencies of a frontend `package.json`
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest is not valid JSON.
    pub fn from_package_json(content: &str) -> Result<Option<Self>> {
        let manifest: serde_json::Value = serde_json::from_str(content)?;
        let has = |name: &str| {
            ["dependencies", "devDependencies"]
                .iter()
                .any(|section| manifest.get(section).and_then(|deps| deps.get(name)).is_some())
        };

        let flavor = if has("@angular/core") {
            Some(Self::Angular)
        } else if has("vue") {
            Some(Self::Vue)
        } else if has("react") {
            Some(Self::React)
        } else {
            None
        };

        Ok(flavor)
    }

    /// Read `apps/frontend/package.json` under `project_root` and detect the flavor
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest exists but cannot be read or parsed.
    pub fn detect_from_manifest(project_root: &Path) -> Result<Option<Self>> {
        let path = project_root.join(layout::APPS_FRONTEND).join("package.json");
        if !path.exists() {
            return Ok(None);
        }
        Self::from_package_json(&fs::read_to_string(&path)?)
    }

    /// Read `README.md` under `project_root` and detect the flavor from its marker
    ///
    /// # Errors
    ///
    /// Returns an error if the README exists but cannot be read, or names an unknown flavor.
    pub fn detect_from_readme(project_root: &Path) -> Result<Option<Self>> {
        let path = project_root.join(layout::README);
        if !path.exists() {
            return Ok(None);
        }
        Self::from_readme(&fs::read_to_string(&path)?)
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Flavor {
    type Err = NugraError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "react" => Ok(Self::React),
            "vue" => Ok(Self::Vue),
            "angular" => Ok(Self::Angular),
            _ => Err(NugraError::UnknownFlavor(s.trim().to_string())),
        }
    }
}
