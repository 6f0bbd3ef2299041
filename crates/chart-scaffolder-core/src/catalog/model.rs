//! Release catalog types and parsing

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::codegen::value::PropValue;
use crate::error::IntegrityError;

/// npm package a catalog describes when it does not name one
pub const DEFAULT_PACKAGE: &str = "@financial-times/vvc";

/// Snapshot of a component library's published templates (vvc-release-data.json)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseCatalog {
    /// Semver version of the library the catalog was generated from
    pub version: String,

    /// npm package name; falls back to [`DEFAULT_PACKAGE`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,

    /// Template name -> prop contract, in document order
    #[serde(default)]
    pub templates: IndexMap<String, TemplateSpec>,
}

impl ReleaseCatalog {
    pub fn template(&self, name: &str) -> Option<&TemplateSpec> {
        self.templates.get(name)
    }

    pub fn template_names(&self) -> Vec<String> {
        self.templates.keys().cloned().collect()
    }

    pub fn package_name(&self) -> &str {
        self.package.as_deref().unwrap_or(DEFAULT_PACKAGE)
    }

    /// Check every template's prop lists
    pub fn validate(&self) -> Result<(), IntegrityError> {
        for (name, spec) in &self.templates {
            spec.validate(name)?;
        }
        Ok(())
    }
}

/// Prop contract of a single template
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateSpec {
    /// Props that must be supplied, in declaration order
    #[serde(default)]
    pub required: Vec<String>,

    /// Props that may be omitted, in declaration order
    #[serde(default)]
    pub optional: Vec<String>,

    /// Default values; a prop missing here has no known default
    #[serde(default)]
    pub defaults: IndexMap<String, PropValue>,
}

impl TemplateSpec {
    /// Default for `prop`. A `null` default counts as no default.
    pub fn default_for(&self, prop: &str) -> Option<&PropValue> {
        self.defaults.get(prop).filter(|v| !v.is_null())
    }

    pub fn is_required(&self, prop: &str) -> bool {
        self.required.iter().any(|r| r == prop)
    }

    pub fn is_optional(&self, prop: &str) -> bool {
        self.optional.iter().any(|o| o == prop)
    }

    /// Reject props listed twice, within a list or across both lists
    pub fn validate(&self, template: &str) -> Result<(), IntegrityError> {
        let mut seen = HashSet::new();
        for prop in &self.required {
            if !seen.insert(prop.as_str()) {
                return Err(IntegrityError::Duplicate {
                    template: template.to_string(),
                    prop: prop.clone(),
                });
            }
        }
        let mut seen_optional = HashSet::new();
        for prop in &self.optional {
            if seen.contains(prop.as_str()) {
                return Err(IntegrityError::Overlap {
                    template: template.to_string(),
                    prop: prop.clone(),
                });
            }
            if !seen_optional.insert(prop.as_str()) {
                return Err(IntegrityError::Duplicate {
                    template: template.to_string(),
                    prop: prop.clone(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn spec(required: &[&str], optional: &[&str]) -> TemplateSpec {
        TemplateSpec {
            required: required.iter().map(|s| s.to_string()).collect(),
            optional: optional.iter().map(|s| s.to_string()).collect(),
            defaults: IndexMap::new(),
        }
    }

    #[test]
    fn test_parse_catalog_document() {
        let catalog: ReleaseCatalog = serde_json::from_value(json!({
            "version": "1.0.0",
            "templates": {
                "Line": { "required": ["data"], "optional": [], "defaults": {} },
                "Bar": {
                    "required": ["data", "xVariable"],
                    "optional": ["color"],
                    "defaults": { "xVariable": "age" }
                }
            }
        }))
        .unwrap();

        assert_eq!(catalog.template_names(), vec!["Line", "Bar"]);
        assert_eq!(catalog.package_name(), DEFAULT_PACKAGE);
        let bar = catalog.template("Bar").unwrap();
        assert_eq!(
            bar.default_for("xVariable"),
            Some(&PropValue::String("age".to_string()))
        );
        assert!(bar.default_for("data").is_none());
    }

    #[test]
    fn test_missing_lists_default_to_empty() {
        let spec: TemplateSpec = serde_json::from_value(json!({})).unwrap();
        assert!(spec.required.is_empty());
        assert!(spec.optional.is_empty());
        assert!(spec.defaults.is_empty());
    }

    #[test]
    fn test_null_default_counts_as_absent() {
        let spec: TemplateSpec = serde_json::from_value(json!({
            "required": ["data"],
            "defaults": { "data": null }
        }))
        .unwrap();
        assert!(spec.default_for("data").is_none());
    }

    #[test]
    fn test_validate_accepts_disjoint_lists() {
        assert!(spec(&["data", "x"], &["color"]).validate("Bar").is_ok());
    }

    #[test]
    fn test_validate_rejects_overlap() {
        let err = spec(&["data"], &["data"]).validate("Bar").unwrap_err();
        assert_eq!(
            err,
            IntegrityError::Overlap {
                template: "Bar".to_string(),
                prop: "data".to_string()
            }
        );
    }

    #[test]
    fn test_validate_rejects_duplicates() {
        assert!(matches!(
            spec(&["data", "data"], &[]).validate("Bar"),
            Err(IntegrityError::Duplicate { .. })
        ));
        assert!(matches!(
            spec(&[], &["color", "color"]).validate("Bar"),
            Err(IntegrityError::Duplicate { .. })
        ));
    }

    #[test]
    fn test_prop_membership() {
        let s = spec(&["data"], &["color"]);
        assert!(s.is_required("data"));
        assert!(!s.is_required("color"));
        assert!(s.is_optional("color"));
    }
}
