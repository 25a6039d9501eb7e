//! Output file names for rendered entity templates
//!
//! Generated projects import entity files by convention
//! (`./modules/invoice/invoice.module`, `./InvoiceList`), so these rules
//! must not drift.

use super::helpers::TemplateHelpers;
use crate::flavor::Flavor;

/// Template file extensions stripped from output names
const TEMPLATE_EXTENSIONS: &[&str] = &[".hbs", ".ejs"];

/// Backend template kinds that get the entity name as prefix
const BACKEND_KINDS: &[&str] = &["model", "service", "controller", "module"];

/// React component kinds that get the capitalized entity name as prefix
const REACT_KINDS: &[(&str, &str)] = &[("list", "List"), ("form", "Form"), ("detail", "Detail")];

/// Strip the template engine extension (`model.ts.hbs` -> `model.ts`)
#[must_use]
pub fn strip_template_extension(template: &str) -> &str {
    TEMPLATE_EXTENSIONS
        .iter()
        .find_map(|ext| template.strip_suffix(ext))
        .unwrap_or(template)
}

/// Output name for a backend template
///
/// `model.ts.ejs` + `invoice` -> `invoice.model.ts`
#[must_use]
pub fn backend_output_name(template: &str, entity: &str) -> String {
    let name = strip_template_extension(template);
    match name.split_once('.') {
        Some((kind, rest)) if BACKEND_KINDS.contains(&kind) => format!("{entity}.{kind}.{rest}"),
        _ => name.to_string(),
    }
}

/// Output name for a frontend template
///
/// React templates become components named after the entity
/// (`list.tsx.hbs` + `invoice` -> `InvoiceList.tsx`); Vue and Angular
/// templates keep their file name.
#[must_use]
pub fn frontend_output_name(flavor: Flavor, template: &str, entity: &str) -> String {
    let name = strip_template_extension(template);
    if flavor != Flavor::React {
        return name.to_string();
    }

    match name.split_once('.') {
        Some((kind, rest)) => REACT_KINDS
            .iter()
            .find(|(k, _)| *k == kind)
            .map_or_else(
                || name.to_string(),
                |(_, suffix)| format!("{}{suffix}.{rest}", TemplateHelpers::capitalize(entity)),
            ),
        None => name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_names() {
        assert_eq!(backend_output_name("model.ts.ejs", "invoice"), "invoice.model.ts");
        assert_eq!(backend_output_name("service.ts.hbs", "invoice"), "invoice.service.ts");
        assert_eq!(backend_output_name("controller.ts.hbs", "invoice"), "invoice.controller.ts");
        assert_eq!(backend_output_name("module.ts.hbs", "invoice"), "invoice.module.ts");
    }

    #[test]
    fn test_backend_name_with_kind_inside_entity() {
        // Entity names that contain a kind word must not be rewritten twice
        assert_eq!(backend_output_name("model.ts.hbs", "service"), "service.model.ts");
        assert_eq!(backend_output_name("module.ts.hbs", "model"), "model.module.ts");
    }

    #[test]
    fn test_react_names_capitalize_entity() {
        let react = |template| frontend_output_name(Flavor::React, template, "invoice");
        assert_eq!(react("list.tsx.hbs"), "InvoiceList.tsx");
        assert_eq!(react("form.tsx.ejs"), "InvoiceForm.tsx");
        assert_eq!(react("detail.tsx.hbs"), "InvoiceDetail.tsx");
    }

    #[test]
    fn test_vue_and_angular_keep_template_names() {
        assert_eq!(
            frontend_output_name(Flavor::Vue, "entity-list.vue.hbs", "invoice"),
            "entity-list.vue"
        );
        assert_eq!(
            frontend_output_name(Flavor::Angular, "entity-form.component.ts.hbs", "invoice"),
            "entity-form.component.ts"
        );
    }

    #[test]
    fn test_strip_extension() {
        assert_eq!(strip_template_extension("model.ts.hbs"), "model.ts");
        assert_eq!(strip_template_extension("model.ts.ejs"), "model.ts");
        assert_eq!(strip_template_extension("model.ts"), "model.ts");
    }
}
