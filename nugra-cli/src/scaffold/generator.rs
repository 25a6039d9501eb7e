//! Entity scaffold generator
//!
//! Renders the backend template set and the frontend template set of the
//! project's flavor for one entity. Everything is rendered in memory first;
//! [`write_generated`] then checks every target path before writing any of
//! them.

use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};

use super::field::Field;
use super::helpers::TemplateHelpers;
use super::naming;
use super::selector::{self, Target};
use super::templates::TemplateRegistry;
use crate::error::{NugraError, Result};
use crate::flavor::Flavor;
use crate::layout;

/// CRUD entity generator
pub struct EntityGenerator {
    /// Entity name as given (e.g. `order`)
    entity_name: String,
    /// Field definitions
    fields: Vec<Field>,
    /// Frontend flavor of the project
    flavor: Flavor,
    /// Template registry
    templates: TemplateRegistry,
}

impl EntityGenerator {
    /// Create a generator
    ///
    /// # Errors
    ///
    /// Returns [`NugraError::InvalidEntityName`] if the name cannot be used
    /// for file and class names.
    pub fn new(
        entity_name: &str,
        fields: Vec<Field>,
        flavor: Flavor,
        templates: TemplateRegistry,
    ) -> Result<Self> {
        if !TemplateHelpers::is_valid_entity_name(entity_name) {
            return Err(NugraError::InvalidEntityName(entity_name.to_string()));
        }

        Ok(Self {
            entity_name: entity_name.to_string(),
            fields,
            flavor,
            templates,
        })
    }

    /// Entity name
    #[must_use]
    pub fn entity_name(&self) -> &str {
        &self.entity_name
    }

    /// Frontend flavor the generator renders for
    #[must_use]
    pub const fn flavor(&self) -> Flavor {
        self.flavor
    }

    /// Module class the registration file has to reference
    #[must_use]
    pub fn module_class(&self) -> String {
        TemplateHelpers::module_class(&self.entity_name)
    }

    /// Template context for this entity
    #[must_use]
    pub fn descriptor(&self) -> serde_json::Value {
        let fields: Vec<_> = self
            .fields
            .iter()
            .map(|f| {
                json!({
                    "name": f.name,
                    "type": f.field_type,
                    "tsType": f.ts_type(),
                })
            })
            .collect();

        json!({
            "entityName": self.entity_name,
            "className": TemplateHelpers::capitalize(&self.entity_name),
            "moduleClass": self.module_class(),
            "camelName": TemplateHelpers::to_camel_case(&self.entity_name),
            "kebabName": TemplateHelpers::to_kebab_case(&self.entity_name),
            "routePath": TemplateHelpers::to_route_path(&self.entity_name),
            "title": TemplateHelpers::to_title(&self.entity_name),
            "fields": fields,
        })
    }

    /// Render every selected template
    ///
    /// Backend files come first, in template order, followed by the frontend
    /// files of the flavor.
    ///
    /// # Errors
    ///
    /// Returns the first render error; nothing is written in that case.
    pub fn generate(&self) -> Result<Vec<GeneratedFile>> {
        let context = self.descriptor();
        let mut generated = Vec::new();

        for set in selector::entity_templates(self.flavor) {
            for (file, id) in set.files.iter().zip(set.identifiers()) {
                let content = self.templates.render(&id, &context)?;
                tracing::debug!(
                    template = %id,
                    overridden = self.templates.is_overridden(&id),
                    "rendered template"
                );
                generated.push(self.output_file(set.target, file, content));
            }
        }

        Ok(generated)
    }

    fn output_file(&self, target: Target, template: &str, content: String) -> GeneratedFile {
        let (dir, name, description) = match target {
            Target::Backend => {
                let kind = template.split('.').next().unwrap_or(template);
                (
                    layout::BACKEND_MODULES_DIR,
                    naming::backend_output_name(template, &self.entity_name),
                    format!("NestJS {kind} for {}", self.entity_name),
                )
            }
            Target::Frontend => (
                layout::FRONTEND_MODULES_DIR,
                naming::frontend_output_name(self.flavor, template, &self.entity_name),
                format!("{} component for {}", self.flavor, self.entity_name),
            ),
        };

        GeneratedFile {
            path: Path::new(dir).join(&self.entity_name).join(name),
            content,
            description,
        }
    }
}

/// Represents a generated file
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    /// Relative path from project root
    pub path: PathBuf,
    /// File content
    pub content: String,
    /// File description for user feedback
    pub description: String,
}

/// Write generated files under `project_root`
///
/// Without `force`, every target path is checked first and an existing file
/// aborts before anything is written.
///
/// # Errors
///
/// Returns [`NugraError::FileExists`] or an I/O error.
pub fn write_generated(
    project_root: &Path,
    files: &[GeneratedFile],
    force: bool,
) -> Result<Vec<PathBuf>> {
    if !force {
        if let Some(existing) = files
            .iter()
            .map(|file| project_root.join(&file.path))
            .find(|path| path.exists())
        {
            return Err(NugraError::FileExists(existing));
        }
    }

    let mut written = Vec::with_capacity(files.len());
    for file in files {
        let path = project_root.join(&file.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, &file.content)?;
        tracing::info!(path = %file.path.display(), "wrote file");
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn generator(name: &str, fields: &str, flavor: Flavor) -> EntityGenerator {
        EntityGenerator::new(
            name,
            super::super::field::parse_fields(Some(fields)).unwrap(),
            flavor,
            TemplateRegistry::new().unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_invalid_entity_name() {
        let result =
            EntityGenerator::new("", vec![], Flavor::React, TemplateRegistry::new().unwrap());
        assert!(matches!(result, Err(NugraError::InvalidEntityName(_))));

        let result = EntityGenerator::new(
            "../order",
            vec![],
            Flavor::React,
            TemplateRegistry::new().unwrap(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_descriptor() {
        let generator = generator("orderItem", "qty:int,label:string", Flavor::React);
        let descriptor = generator.descriptor();
        assert_eq!(descriptor["entityName"], "orderItem");
        assert_eq!(descriptor["className"], "OrderItem");
        assert_eq!(descriptor["moduleClass"], "OrderItemModule");
        assert_eq!(descriptor["kebabName"], "order-item");
        assert_eq!(descriptor["routePath"], "order-items");
        assert_eq!(descriptor["fields"][0]["name"], "qty");
        assert_eq!(descriptor["fields"][0]["type"], "int");
        assert_eq!(descriptor["fields"][0]["tsType"], "number");
    }

    #[test]
    fn test_react_output_paths() {
        let files = generator("invoice", "total:number", Flavor::React).generate().unwrap();
        let paths: Vec<_> = files.iter().map(|f| f.path.to_string_lossy().into_owned()).collect();
        assert_eq!(
            paths,
            [
                "apps/backend/src/modules/invoice/invoice.model.ts",
                "apps/backend/src/modules/invoice/invoice.service.ts",
                "apps/backend/src/modules/invoice/invoice.controller.ts",
                "apps/backend/src/modules/invoice/invoice.module.ts",
                "apps/frontend/src/modules/invoice/InvoiceList.tsx",
                "apps/frontend/src/modules/invoice/InvoiceForm.tsx",
                "apps/frontend/src/modules/invoice/InvoiceDetail.tsx",
            ]
        );
        assert_eq!(files[0].description, "NestJS model for invoice");
    }

    #[test]
    fn test_vue_and_angular_output_paths() {
        let files = generator("invoice", "", Flavor::Vue).generate().unwrap();
        assert_eq!(files.len(), 7);
        assert!(files[4].path.ends_with("invoice/entity-list.vue"));

        let files = generator("invoice", "", Flavor::Angular).generate().unwrap();
        assert!(files[6]
            .path
            .ends_with("invoice/entity-detail.component.ts"));
        assert!(files[4].content.contains("export class InvoiceListComponent"));
    }

    #[test]
    fn test_write_generated() {
        let temp_dir = tempdir().unwrap();
        let files = generator("order", "total:number", Flavor::React).generate().unwrap();

        let written = write_generated(temp_dir.path(), &files, false).unwrap();
        assert_eq!(written.len(), 7);
        let model = fs::read_to_string(
            temp_dir.path().join("apps/backend/src/modules/order/order.model.ts"),
        )
        .unwrap();
        assert!(model.contains("total: number;"));
    }

    #[test]
    fn test_existing_files_abort_before_writing() {
        let temp_dir = tempdir().unwrap();
        let files = generator("order", "", Flavor::React).generate().unwrap();

        let last = temp_dir.path().join(&files[6].path);
        fs::create_dir_all(last.parent().unwrap()).unwrap();
        fs::write(&last, "keep").unwrap();

        let err = write_generated(temp_dir.path(), &files, false).unwrap_err();
        assert!(matches!(err, NugraError::FileExists(ref p) if *p == last));
        assert!(!temp_dir.path().join(&files[0].path).exists());
        assert_eq!(fs::read_to_string(&last).unwrap(), "keep");

        write_generated(temp_dir.path(), &files, true).unwrap();
        assert_ne!(fs::read_to_string(&last).unwrap(), "keep");
    }
}
