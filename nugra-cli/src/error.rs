//! Error types for the nugra library
//!
//! Library code returns [`NugraError`]; command implementations wrap it with
//! `anyhow` context before it reaches the user.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while scaffolding projects and entities
#[derive(Debug, Error)]
pub enum NugraError {
    /// A flavor name that is not React, Vue or Angular
    #[error("unknown frontend flavor: '{0}' (expected one of: react, vue, angular)")]
    UnknownFlavor(String),

    /// Neither project metadata nor a README marker names the flavor
    #[error(
        "could not determine the frontend flavor of the project at {}; \
         add `frontend` to nugra.toml or pass --frontend",
        .0.display()
    )]
    FlavorUndetermined(PathBuf),

    /// Entity name is empty, unusable in file and class names, or reserved
    #[error(
        "invalid entity name: '{0}' (must start with a letter, contain only letters, \
         digits or '_', and not be `app`)"
    )]
    InvalidEntityName(String),

    /// A field entry that has no name or no type
    #[error("invalid field definition: '{0}' (expected name:type)")]
    InvalidField(String),

    /// Project name that cannot be used as an npm package name
    #[error(
        "invalid project name: '{0}' (lowercase letters, digits, '-', '_' and '.', \
         not starting with '.' or '_')"
    )]
    InvalidProjectName(String),

    /// The backend registration file does not exist
    #[error("registration file not found: {}", .0.display())]
    RegistrationFileMissing(PathBuf),

    /// The registration file has no `imports: [...]` list literal
    #[error("no `imports: [...]` list found in {}; register {module} manually", .path.display())]
    RegistrationListNotFound {
        /// Registration file path
        path: PathBuf,
        /// Module class that could not be registered
        module: String,
    },

    /// Output file already exists and overwriting was not requested
    #[error("file already exists: {} (use --force to overwrite)", .0.display())]
    FileExists(PathBuf),

    /// Template could not be parsed
    #[error("failed to parse template: {0}")]
    TemplateParse(#[from] Box<handlebars::TemplateError>),

    /// Template could not be rendered
    #[error("failed to render template: {0}")]
    Render(#[from] Box<handlebars::RenderError>),

    /// Configuration could not be loaded
    #[error("configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    /// Configuration could not be serialized
    #[error("failed to serialize configuration: {0}")]
    Toml(#[from] toml::ser::Error),

    /// Malformed JSON manifest
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Child process failed to start or exited unsuccessfully
    #[error("{0}")]
    Process(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl NugraError {
    /// Create a process error from a message
    #[must_use]
    pub fn process<T: Into<String>>(msg: T) -> Self {
        Self::Process(msg.into())
    }
}

impl From<handlebars::TemplateError> for NugraError {
    fn from(err: handlebars::TemplateError) -> Self {
        Self::TemplateParse(Box::new(err))
    }
}

impl From<handlebars::RenderError> for NugraError {
    fn from(err: handlebars::RenderError) -> Self {
        Self::Render(Box::new(err))
    }
}

impl From<figment::Error> for NugraError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

/// Result alias for library operations
pub type Result<T> = std::result::Result<T, NugraError>;
