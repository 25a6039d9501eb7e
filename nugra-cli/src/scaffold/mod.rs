//! Entity scaffolding
//!
//! Turns an entity name and a field list into NestJS and frontend source
//! files: fields are parsed, a template set is selected for the project's
//! flavor, every template is rendered in memory and the results are written
//! under the module directories.

pub mod field;
pub mod generator;
pub mod helpers;
pub mod naming;
pub mod plan;
pub mod selector;
pub mod templates;

pub use field::{parse_fields, Field};
pub use generator::{write_generated, EntityGenerator, GeneratedFile};
pub use helpers::TemplateHelpers;
pub use plan::{plan_entity, EntityPlan, EntityRequest};
pub use selector::{Target, TemplateSet};
pub use templates::TemplateRegistry;
