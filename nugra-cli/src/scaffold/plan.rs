//! `generate entity` end to end
//!
//! [`plan_entity`] does everything that can fail without touching the disk:
//! flavor resolution, field parsing, rendering and the registration patch.
//! [`EntityPlan::apply`] then writes the files and the patched registration
//! file.

use std::fs;
use std::path::{Path, PathBuf};

use super::field::parse_fields;
use super::generator::{write_generated, EntityGenerator, GeneratedFile};
use super::helpers::TemplateHelpers;
use super::templates::TemplateRegistry;
use crate::config::ProjectConfig;
use crate::error::{NugraError, Result};
use crate::flavor::Flavor;
use crate::registration::{PatchOutcome, RegistrationPatcher};

/// Input of `generate entity`
#[derive(Debug, Clone, Default)]
pub struct EntityRequest {
    /// Entity name
    pub name: String,
    /// Raw comma-separated field list
    pub fields: Option<String>,
    /// Explicit flavor overriding project metadata
    pub frontend: Option<Flavor>,
}

/// Rendered entity files plus the registration change
#[derive(Debug)]
pub struct EntityPlan {
    /// Flavor the frontend files were rendered for
    pub flavor: Flavor,
    /// Files to write, relative to the project root
    pub files: Vec<GeneratedFile>,
    /// Registration file change
    pub registration: PatchOutcome,
}

/// Plan entity generation for the project at `project_root`
///
/// # Errors
///
/// Returns an error for an invalid entity name or field list, an
/// undeterminable flavor, a template failure, or a registration file that is
/// missing or has no `imports: [...]` list.
pub fn plan_entity(project_root: &Path, request: &EntityRequest) -> Result<EntityPlan> {
    if !TemplateHelpers::is_valid_entity_name(&request.name) {
        return Err(NugraError::InvalidEntityName(request.name.clone()));
    }
    let fields = parse_fields(request.fields.as_deref())?;

    let config = ProjectConfig::load(project_root)?;
    let flavor = config.resolve_flavor(project_root, request.frontend)?;
    let templates =
        TemplateRegistry::with_overrides(config.templates_dir(project_root).as_deref())?;
    tracing::debug!(entity = %request.name, %flavor, fields = fields.len(), "planning entity");

    let generator = EntityGenerator::new(&request.name, fields, flavor, templates)?;
    let files = generator.generate()?;
    let registration = RegistrationPatcher::for_project(project_root).plan(&request.name)?;

    Ok(EntityPlan {
        flavor,
        files,
        registration,
    })
}

impl EntityPlan {
    /// Write the files and the registration change
    ///
    /// Returns the written paths; the registration file is included only if
    /// it changed.
    ///
    /// # Errors
    ///
    /// Returns [`NugraError::FileExists`] before any write if an output file
    /// exists and `force` is not set, or an I/O error.
    pub fn apply(&self, project_root: &Path, force: bool) -> Result<Vec<PathBuf>> {
        let mut written = write_generated(project_root, &self.files, force)?;

        if self.registration.changed() {
            fs::write(&self.registration.path, &self.registration.patched)?;
            tracing::info!(
                path = %self.registration.path.display(),
                module = %self.registration.module_class,
                "registered module"
            );
            written.push(self.registration.path.clone());
        }

        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::{create_project, CreateOptions};
    use tempfile::tempdir;

    fn request(name: &str, fields: Option<&str>) -> EntityRequest {
        EntityRequest {
            name: name.to_string(),
            fields: fields.map(str::to_string),
            frontend: None,
        }
    }

    #[test]
    fn test_plan_and_apply() {
        let temp_dir = tempdir().unwrap();
        let root = create_project(
            temp_dir.path(),
            "shop",
            CreateOptions {
                flavor: Flavor::Vue,
                lint: false,
            },
        )
        .unwrap();

        let plan = plan_entity(&root, &request("order", Some("total:number"))).unwrap();
        assert_eq!(plan.flavor, Flavor::Vue);
        assert_eq!(plan.files.len(), 7);
        assert!(plan.registration.changed());

        let written = plan.apply(&root, false).unwrap();
        assert_eq!(written.len(), 8);
        assert!(root.join("apps/frontend/src/modules/order/entity-list.vue").exists());

        let app_module = fs::read_to_string(root.join("apps/backend/src/app.module.ts")).unwrap();
        let import = "import { OrderModule } from './modules/order/order.module';\n";
        assert!(app_module.starts_with(import));
        assert!(app_module.contains("    OrderModule,\n  ],"));
    }

    #[test]
    fn test_invalid_name_checked_first() {
        let temp_dir = tempdir().unwrap();
        let err = plan_entity(temp_dir.path(), &request("9lives", None)).unwrap_err();
        assert!(matches!(err, NugraError::InvalidEntityName(_)));

        let err = plan_entity(temp_dir.path(), &request("app", None)).unwrap_err();
        assert!(matches!(err, NugraError::InvalidEntityName(_)));
    }

    #[test]
    fn test_missing_registration_file_writes_nothing() {
        let temp_dir = tempdir().unwrap();
        let req = EntityRequest {
            frontend: Some(Flavor::React),
            ..request("order", None)
        };
        let err = plan_entity(temp_dir.path(), &req).unwrap_err();
        assert!(matches!(err, NugraError::RegistrationFileMissing(_)));
        assert!(!temp_dir.path().join("apps").exists());
    }
}
