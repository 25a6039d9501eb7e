//! CLI command implementations

pub mod create;
pub mod generate;
pub mod install;
pub mod run;
pub mod version;

pub use create::CreateCommand;
pub use generate::GenerateCommand;
pub use install::{InstallCommand, InstallTarget};
pub use run::RunCommand;
