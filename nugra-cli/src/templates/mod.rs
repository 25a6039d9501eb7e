//! Project template generation

use handlebars::Handlebars;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::flavor::Flavor;
use crate::layout;

pub mod entity;
pub mod files;
pub use files::*;

/// A starter file: path relative to the project root and its template
pub type StarterFile = (String, &'static str);

/// Project template generator
pub struct ProjectTemplate {
    name: String,
    flavor: Flavor,
    lint: bool,
    handlebars: Handlebars<'static>,
}

impl ProjectTemplate {
    /// Create a new project template
    #[must_use]
    pub fn new(name: &str, flavor: Flavor) -> Self {
        let mut handlebars = Handlebars::new();

        // Disable HTML escaping since we're generating code
        handlebars.register_escape_fn(handlebars::no_escape);

        Self {
            name: name.to_string(),
            flavor,
            lint: true,
            handlebars,
        }
    }

    /// Whether ESLint and Prettier configuration is seeded (default `true`)
    #[must_use]
    pub const fn with_lint(mut self, lint: bool) -> Self {
        self.lint = lint;
        self
    }

    /// Every starter file of the project, in write order
    #[must_use]
    pub fn files(&self) -> Vec<StarterFile> {
        let backend = |path: &str| format!("{}/{path}", layout::APPS_BACKEND);
        let frontend = |path: &str| format!("{}/{path}", layout::APPS_FRONTEND);

        let mut files = vec![
            (layout::README.to_string(), README_MD),
            ("package.json".to_string(), ROOT_PACKAGE_JSON),
            (".gitignore".to_string(), GITIGNORE),
        ];

        if self.lint {
            for app in [layout::APPS_FRONTEND, layout::APPS_BACKEND] {
                files.push((format!("{app}/.eslintrc.json"), ESLINTRC_JSON));
                files.push((format!("{app}/.prettierrc"), PRETTIERRC));
            }
        }

        files.extend([
            (backend("package.json"), BACKEND_PACKAGE_JSON),
            (backend("tsconfig.json"), BACKEND_TSCONFIG_JSON),
            (backend("nest-cli.json"), BACKEND_NEST_CLI_JSON),
            (backend(".env.example"), BACKEND_ENV_EXAMPLE),
            (backend("src/main.ts"), BACKEND_MAIN_TS),
            (backend("src/app.module.ts"), BACKEND_APP_MODULE_TS),
            (backend("src/ormconfig.ts"), BACKEND_ORMCONFIG_TS),
        ]);

        match self.flavor {
            Flavor::React => files.extend([
                (frontend("package.json"), REACT_PACKAGE_JSON),
                (frontend("index.html"), REACT_INDEX_HTML),
                (frontend("vite.config.ts"), REACT_VITE_CONFIG_TS),
                (frontend("src/main.tsx"), REACT_MAIN_TSX),
                (frontend("src/App.tsx"), REACT_APP_TSX),
                (frontend("index.css"), TAILWIND_CSS),
            ]),
            Flavor::Vue => files.extend([
                (frontend("package.json"), VUE_PACKAGE_JSON),
                (frontend("index.html"), VUE_INDEX_HTML),
                (frontend("vite.config.ts"), VUE_VITE_CONFIG_TS),
                (frontend("src/main.ts"), VUE_MAIN_TS),
                (frontend("src/App.vue"), VUE_APP_VUE),
                (frontend("index.css"), TAILWIND_CSS),
            ]),
            Flavor::Angular => files.extend([
                (frontend("package.json"), ANGULAR_PACKAGE_JSON),
                (frontend("angular.json"), ANGULAR_JSON),
                (frontend("tsconfig.json"), ANGULAR_TSCONFIG_JSON),
                (frontend("src/index.html"), ANGULAR_INDEX_HTML),
                (frontend("src/main.ts"), ANGULAR_MAIN_TS),
                (frontend("src/app/app.component.ts"), ANGULAR_APP_COMPONENT_TS),
                (frontend("styles.css"), TAILWIND_CSS),
            ]),
        }

        files.extend([
            (frontend("tailwind.config.js"), TAILWIND_CONFIG_JS),
            (frontend("postcss.config.js"), POSTCSS_CONFIG_JS),
        ]);

        files
    }

    /// Generate all project files under `output_dir`
    ///
    /// Everything is rendered before the first write.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Template rendering fails
    /// - File writing fails
    /// - Directory creation fails
    pub fn generate(&self, output_dir: &Path) -> Result<Vec<PathBuf>> {
        let context = json!({
            "project_name": self.name,
            "frontend": self.flavor.label(),
        });

        let rendered = self
            .files()
            .into_iter()
            .map(|(path, template)| -> Result<(PathBuf, String)> {
                let content = self.handlebars.render_template(template, &context)?;
                Ok((output_dir.join(path), content))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut written = Vec::with_capacity(rendered.len());
        for (path, content) in rendered {
            Self::write_file(&path, &content)?;
            written.push(path);
        }

        Ok(written)
    }

    /// Write a single rendered file, creating parent directories
    fn write_file(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        tracing::debug!(path = %path.display(), "wrote starter file");
        Ok(())
    }
}
