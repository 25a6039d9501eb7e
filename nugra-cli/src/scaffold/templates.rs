//! Template registry for entity generation
//!
//! Embedded defaults are registered under their identifiers
//! (`entity/model.ts.hbs`, `vue/entity-list.vue.hbs`, ...). A project can
//! override any of them by placing a file with the same relative path in its
//! templates directory.

use handlebars::{handlebars_helper, Handlebars};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::field;
use super::helpers::TemplateHelpers;
use crate::error::Result;
use crate::templates::entity::ENTITY_TEMPLATES;

/// File extension of template overrides
const TEMPLATE_EXTENSION: &str = "hbs";

handlebars_helper!(capitalize_helper: |s: str| TemplateHelpers::capitalize(s));
handlebars_helper!(camel_case_helper: |s: str| TemplateHelpers::to_camel_case(s));
handlebars_helper!(kebab_case_helper: |s: str| TemplateHelpers::to_kebab_case(s));
handlebars_helper!(pluralize_helper: |s: str| TemplateHelpers::pluralize(s));
handlebars_helper!(ts_type_helper: |s: str| field::ts_type(s));
// Emits `{{ object.field }}` for Vue and Angular templates
handlebars_helper!(bind_helper: |object: str, field: str| format!("{{{{ {object}.{field} }}}}"));

/// Registry of entity templates with naming helpers registered
pub struct TemplateRegistry {
    handlebars: Handlebars<'static>,
    overridden: BTreeSet<String>,
}

impl TemplateRegistry {
    /// Registry with the embedded templates
    ///
    /// # Errors
    ///
    /// Returns an error if an embedded template fails to parse.
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Generated code must not be HTML-escaped
        handlebars.register_escape_fn(handlebars::no_escape);

        handlebars.register_helper("capitalize", Box::new(capitalize_helper));
        handlebars.register_helper("camel_case", Box::new(camel_case_helper));
        handlebars.register_helper("kebab_case", Box::new(kebab_case_helper));
        handlebars.register_helper("pluralize", Box::new(pluralize_helper));
        handlebars.register_helper("ts_type", Box::new(ts_type_helper));
        handlebars.register_helper("bind", Box::new(bind_helper));

        for (id, body) in ENTITY_TEMPLATES {
            handlebars.register_template_string(id, body)?;
        }

        Ok(Self {
            handlebars,
            overridden: BTreeSet::new(),
        })
    }

    /// Registry with embedded templates, overridden by files under `dir`
    ///
    /// A missing directory is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be walked or a template fails
    /// to parse.
    pub fn with_overrides(dir: Option<&Path>) -> Result<Self> {
        let mut registry = Self::new()?;
        if let Some(dir) = dir.filter(|dir| dir.is_dir()) {
            registry.load_overrides(dir)?;
        }
        Ok(registry)
    }

    fn load_overrides(&mut self, dir: &Path) -> Result<()> {
        for entry in WalkDir::new(dir).sort_by_file_name() {
            let entry = entry.map_err(std::io::Error::from)?;
            let path = entry.path();
            if !entry.file_type().is_file()
                || path.extension().and_then(|ext| ext.to_str()) != Some(TEMPLATE_EXTENSION)
            {
                continue;
            }

            let Ok(relative) = path.strip_prefix(dir) else {
                continue;
            };
            let id = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");

            let body = fs::read_to_string(path)?;
            self.handlebars.register_template_string(&id, body)?;
            tracing::debug!(template = %id, path = %path.display(), "loaded template override");
            self.overridden.insert(id);
        }
        Ok(())
    }

    /// Whether a template with this identifier is registered
    #[must_use]
    pub fn has_template(&self, id: &str) -> bool {
        self.handlebars.has_template(id)
    }

    /// Whether the template comes from the override directory
    #[must_use]
    pub fn is_overridden(&self, id: &str) -> bool {
        self.overridden.contains(id)
    }

    /// Render a template by identifier
    ///
    /// # Errors
    ///
    /// Returns an error if the template is missing or fails to render.
    pub fn render(&self, id: &str, context: &serde_json::Value) -> Result<String> {
        Ok(self.handlebars.render(id, context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn context() -> serde_json::Value {
        json!({
            "entityName": "order",
            "className": "Order",
            "moduleClass": "OrderModule",
            "camelName": "order",
            "kebabName": "order",
            "routePath": "orders",
            "title": "Order",
            "fields": [
                { "name": "total", "type": "number", "tsType": "number" },
                { "name": "note", "type": "text", "tsType": "string" },
            ],
        })
    }

    #[test]
    fn test_embedded_templates_registered() {
        let registry = TemplateRegistry::new().unwrap();
        for (id, _) in ENTITY_TEMPLATES {
            assert!(registry.has_template(id), "missing {id}");
            assert!(!registry.is_overridden(id));
        }
    }

    #[test]
    fn test_render_model() {
        let registry = TemplateRegistry::new().unwrap();
        let out = registry.render("entity/model.ts.hbs", &context()).unwrap();
        assert!(out.contains("export class Order {"));
        assert!(out.contains("@Entity('orders')"));
        assert!(out.contains("total: number;"));
        assert!(out.contains("note: string;"));
    }

    #[test]
    fn test_render_module_class() {
        let registry = TemplateRegistry::new().unwrap();
        let out = registry.render("entity/module.ts.hbs", &context()).unwrap();
        assert!(out.contains("export class OrderModule {}"));
        assert!(out.contains("import { OrderService } from './order.service';"));
    }

    #[test]
    fn test_bind_helper_emits_interpolation() {
        let registry = TemplateRegistry::new().unwrap();
        let vue = registry.render("vue/entity-list.vue.hbs", &context()).unwrap();
        assert!(vue.contains("{{ item.id }}"));
        assert!(vue.contains("{{ item.total }}"));

        let angular = registry
            .render("angular/entity-detail.component.ts.hbs", &context())
            .unwrap();
        assert!(angular.contains("<dd>{{ item.note }}</dd>"));
        assert!(angular.contains("selector: 'app-order-detail'"));
    }

    #[test]
    fn test_no_html_escaping() {
        let registry = TemplateRegistry::new().unwrap();
        let out = registry.render("entity/list.tsx.hbs", &context()).unwrap();
        assert!(out.contains("useState<Order[]>([])"));
        assert!(out.contains("{String(item.total)}"));
    }

    #[test]
    fn test_overrides_replace_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("entity")).unwrap();
        fs::write(
            dir.path().join("entity/model.ts.hbs"),
            "// {{capitalize entityName}} {{#each fields}}{{name}}:{{ts_type type}} {{/each}}",
        )
        .unwrap();
        fs::write(dir.path().join("entity/notes.txt"), "ignored").unwrap();

        let registry = TemplateRegistry::with_overrides(Some(dir.path())).unwrap();
        assert!(registry.is_overridden("entity/model.ts.hbs"));
        assert!(!registry.is_overridden("entity/service.ts.hbs"));
        assert!(!registry.has_template("entity/notes.txt"));

        let out = registry.render("entity/model.ts.hbs", &context()).unwrap();
        assert_eq!(out, "// Order total:number note:string ");
    }

    #[test]
    fn test_missing_override_dir_is_ignored() {
        let registry =
            TemplateRegistry::with_overrides(Some(Path::new("/nonexistent/nugra"))).unwrap();
        assert!(registry.has_template("entity/model.ts.hbs"));
    }

    #[test]
    fn test_unknown_template_fails() {
        let registry = TemplateRegistry::new().unwrap();
        assert!(registry.render("svelte/list.svelte.hbs", &context()).is_err());
    }

    #[test]
    fn test_naming_helpers() {
        let mut registry = TemplateRegistry::new().unwrap();
        registry
            .handlebars
            .register_template_string(
                "t",
                "{{camel_case \"order_item\"}} {{kebab_case \"OrderItem\"}} {{pluralize \"order\"}}",
            )
            .unwrap();
        assert_eq!(registry.render("t", &json!({})).unwrap(), "orderItem order-item orders");
    }
}
