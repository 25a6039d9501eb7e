//! nugra CLI library
//!
//! Scaffolds NestJS + React/Vue/Angular monorepos and generates CRUD entity
//! modules into them.

#![forbid(unsafe_code)]
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod error;
pub mod flavor;
pub mod layout;
pub mod observability;
pub mod process;
pub mod project;
pub mod registration;
pub mod scaffold;
pub mod templates;

pub use config::ProjectConfig;
pub use error::{NugraError, Result};
pub use flavor::Flavor;
pub use registration::{PatchOutcome, RegistrationDocument, RegistrationPatcher};
pub use scaffold::{
    parse_fields, plan_entity, EntityGenerator, EntityPlan, EntityRequest, Field, GeneratedFile,
    TemplateHelpers, TemplateRegistry,
};
pub use templates::ProjectTemplate;
