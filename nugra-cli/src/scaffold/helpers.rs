//! Template helper functions for code generation
//!
//! Naming conventions used by generated file names, class names and template
//! variables. The same functions back the Handlebars helpers registered in
//! [`super::templates::TemplateRegistry`].

use inflector::Inflector;

/// Module classes already declared by the backend starter
const RESERVED_MODULE_CLASSES: &[&str] = &["AppModule"];

/// Naming helpers for entity code generation
pub struct TemplateHelpers;

impl TemplateHelpers {
    /// Upper-case the first character, leave the rest untouched
    ///
    /// This is the convention generated class and component names follow.
    ///
    /// # Examples
    ///
    /// ```
    /// # use nugra_cli_lib::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::capitalize("invoice"), "Invoice");
    /// assert_eq!(TemplateHelpers::capitalize("order_item"), "Order_item");
    /// assert_eq!(TemplateHelpers::capitalize(""), "");
    /// ```
    #[must_use]
    pub fn capitalize(input: &str) -> String {
        let mut chars = input.chars();
        chars.next().map_or_else(String::new, |first| {
            first.to_uppercase().chain(chars).collect()
        })
    }

    /// Registration class name for an entity module (`invoice` -> `InvoiceModule`)
    #[must_use]
    pub fn module_class(entity: &str) -> String {
        format!("{}Module", Self::capitalize(entity))
    }

    /// Import path of an entity module relative to `app.module.ts`
    #[must_use]
    pub fn module_import_path(entity: &str) -> String {
        format!("./modules/{entity}/{entity}.module")
    }

    /// Convert string to camelCase
    ///
    /// # Examples
    ///
    /// ```
    /// # use nugra_cli_lib::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::to_camel_case("order_item"), "orderItem");
    /// ```
    #[must_use]
    pub fn to_camel_case(input: &str) -> String {
        input.to_camel_case()
    }

    /// Convert string to kebab-case
    ///
    /// # Examples
    ///
    /// ```
    /// # use nugra_cli_lib::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::to_kebab_case("OrderItem"), "order-item");
    /// ```
    #[must_use]
    pub fn to_kebab_case(input: &str) -> String {
        input.to_kebab_case()
    }

    /// Pluralize a word
    ///
    /// The inflector library has known limitations with some irregular plurals.
    /// Entity names are typically regular words.
    #[must_use]
    pub fn pluralize(input: &str) -> String {
        input.to_plural()
    }

    /// REST route segment for an entity (kebab-case plural)
    ///
    /// # Examples
    ///
    /// ```
    /// # use nugra_cli_lib::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::to_route_path("invoice"), "invoices");
    /// assert_eq!(TemplateHelpers::to_route_path("orderItem"), "order-items");
    /// ```
    #[must_use]
    pub fn to_route_path(entity: &str) -> String {
        Self::pluralize(&Self::to_kebab_case(entity))
    }

    /// Human-readable title
    #[must_use]
    pub fn to_title(input: &str) -> String {
        input.to_title_case()
    }

    /// Whether `name` can be used as an entity name
    ///
    /// Entity names become directory names, file name prefixes and (after
    /// capitalization) class names, so they must start with a letter and
    /// contain only ASCII letters, digits or `_`. Names whose module class is
    /// the root module's own class (`app` -> `AppModule`) are rejected.
    #[must_use]
    pub fn is_valid_entity_name(name: &str) -> bool {
        let mut chars = name.chars();
        chars.next().is_some_and(|c| c.is_ascii_alphabetic())
            && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
            && !RESERVED_MODULE_CLASSES.contains(&Self::module_class(name).as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(TemplateHelpers::capitalize("invoice"), "Invoice");
        assert_eq!(TemplateHelpers::capitalize("Invoice"), "Invoice");
        assert_eq!(TemplateHelpers::capitalize("orderItem"), "OrderItem");
        assert_eq!(TemplateHelpers::capitalize("x"), "X");
    }

    #[test]
    fn test_module_naming() {
        assert_eq!(TemplateHelpers::module_class("order"), "OrderModule");
        assert_eq!(
            TemplateHelpers::module_import_path("order"),
            "./modules/order/order.module"
        );
    }

    #[test]
    fn test_route_path() {
        assert_eq!(TemplateHelpers::to_route_path("product"), "products");
        assert_eq!(TemplateHelpers::to_route_path("category"), "categories");
    }

    #[test]
    fn test_title() {
        assert_eq!(TemplateHelpers::to_title("orderItem"), "Order Item");
    }

    #[test]
    fn test_entity_name_validation() {
        assert!(TemplateHelpers::is_valid_entity_name("invoice"));
        assert!(TemplateHelpers::is_valid_entity_name("order_item"));
        assert!(TemplateHelpers::is_valid_entity_name("lineItem2"));

        assert!(!TemplateHelpers::is_valid_entity_name(""));
        assert!(!TemplateHelpers::is_valid_entity_name("1invoice"));
        assert!(!TemplateHelpers::is_valid_entity_name("../invoice"));
        assert!(!TemplateHelpers::is_valid_entity_name("in voice"));
        assert!(!TemplateHelpers::is_valid_entity_name("line-item"));
        assert!(!TemplateHelpers::is_valid_entity_name("app"));
        assert!(!TemplateHelpers::is_valid_entity_name("App"));
        assert!(TemplateHelpers::is_valid_entity_name("application"));
        assert!(TemplateHelpers::is_valid_entity_name("appModule"));
    }
}
