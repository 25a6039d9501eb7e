//! Field definitions for entity scaffolding
//!
//! Fields arrive as a single comma-separated string, e.g.
//! `--fields name:string,age:number,active:boolean`. Each entry is split on
//! its first colon into a name and a type. Types are passed through to the
//! templates as written; only their TypeScript rendering is normalized (see
//! [`Field::ts_type`]).

use serde::Serialize;

use crate::error::{NugraError, Result};

/// A single entity field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    /// Field name as given
    pub name: String,
    /// Field type as given (not validated)
    #[serde(rename = "type")]
    pub field_type: String,
}

impl Field {
    /// Create a field
    #[must_use]
    pub fn new(name: impl Into<String>, field_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type: field_type.into(),
        }
    }

    /// Parse one `name:type` entry
    ///
    /// # Errors
    ///
    /// Returns [`NugraError::InvalidField`] if the name or the type is missing.
    pub fn parse(entry: &str) -> Result<Self> {
        let (name, field_type) = entry
            .split_once(':')
            .map(|(name, ty)| (name.trim(), ty.trim()))
            .ok_or_else(|| NugraError::InvalidField(entry.trim().to_string()))?;

        if name.is_empty() || field_type.is_empty() {
            return Err(NugraError::InvalidField(entry.trim().to_string()));
        }

        Ok(Self::new(name, field_type))
    }

    /// TypeScript type for this field
    ///
    /// Common aliases collapse onto the TypeScript primitive; anything else is
    /// assumed to already be a TypeScript type and passes through.
    #[must_use]
    pub fn ts_type(&self) -> String {
        ts_type(&self.field_type)
    }
}

/// Map a raw field type to a TypeScript type
#[must_use]
pub fn ts_type(raw: &str) -> String {
    match raw.to_lowercase().as_str() {
        "string" | "text" | "uuid" => "string".to_string(),
        "number" | "int" | "integer" | "float" | "double" | "decimal" => "number".to_string(),
        "boolean" | "bool" => "boolean".to_string(),
        "date" | "datetime" | "timestamp" => "Date".to_string(),
        _ => raw.to_string(),
    }
}

/// Parse an optional comma-separated field list
///
/// An absent or blank string yields no fields. Blank entries (e.g. a trailing
/// comma) are skipped. Duplicate names are kept as given.
///
/// # Errors
///
/// Returns [`NugraError::InvalidField`] for an entry without a name or type.
pub fn parse_fields(raw: Option<&str>) -> Result<Vec<Field>> {
    raw.unwrap_or_default()
        .split(',')
        .filter(|entry| !entry.trim().is_empty())
        .map(Field::parse)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_two_fields() {
        let fields = parse_fields(Some("name:string,age:number")).unwrap();
        assert_eq!(
            fields,
            vec![Field::new("name", "string"), Field::new("age", "number")]
        );
    }

    #[test]
    fn test_absent_or_empty_fields() {
        assert!(parse_fields(None).unwrap().is_empty());
        assert!(parse_fields(Some("")).unwrap().is_empty());
        assert!(parse_fields(Some("  ")).unwrap().is_empty());
    }

    #[test]
    fn test_whitespace_and_trailing_comma() {
        let fields = parse_fields(Some(" title : string , price:number,")).unwrap();
        assert_eq!(
            fields,
            vec![Field::new("title", "string"), Field::new("price", "number")]
        );
    }

    #[test]
    fn test_type_is_not_validated() {
        let fields = parse_fields(Some("tags:string[],owner:User")).unwrap();
        assert_eq!(fields[0], Field::new("tags", "string[]"));
        assert_eq!(fields[1], Field::new("owner", "User"));
    }

    #[test]
    fn test_duplicates_are_kept() {
        let fields = parse_fields(Some("name:string,name:number")).unwrap();
        assert_eq!(fields.len(), 2);
    }

    #[test]
    fn test_missing_type() {
        assert!(matches!(
            parse_fields(Some("name")),
            Err(NugraError::InvalidField(ref e)) if e == "name"
        ));
        assert!(parse_fields(Some("name:")).is_err());
        assert!(parse_fields(Some(":string")).is_err());
    }

    #[test]
    fn test_ts_type_mapping() {
        assert_eq!(ts_type("string"), "string");
        assert_eq!(ts_type("Integer"), "number");
        assert_eq!(ts_type("bool"), "boolean");
        assert_eq!(ts_type("datetime"), "Date");
        assert_eq!(ts_type("string[]"), "string[]");
    }
}
