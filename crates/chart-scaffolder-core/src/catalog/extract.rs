//! Release catalog extraction from a library's runtime prop metadata
//!
//! The input is the library's own description of its templates, dumped as
//! JSON: each component's `propTypes` (with an `isRequired` marker) and its
//! `defaultProps`. Props flagged `isRequired` become `required`, everything
//! else `optional`, both in declaration order.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Serializer;

use super::model::{ReleaseCatalog, TemplateSpec};
use super::version::parse_version;
use crate::codegen::value::PropValue;
use crate::error::CatalogError;

/// Prop metadata dumped from a component library build
#[derive(Debug, Clone, Deserialize)]
pub struct LibraryMetadata {
    pub version: String,

    #[serde(default)]
    pub package: Option<String>,

    #[serde(default)]
    pub components: IndexMap<String, ComponentMetadata>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentMetadata {
    #[serde(default)]
    pub prop_types: IndexMap<String, PropTypeMetadata>,

    /// Components without `defaultProps` dump `null`
    #[serde(default)]
    pub default_props: Option<IndexMap<String, PropValue>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropTypeMetadata {
    #[serde(default)]
    pub is_required: bool,
}

pub fn parse_metadata(content: &str) -> Result<LibraryMetadata, CatalogError> {
    Ok(serde_json::from_str(content)?)
}

/// Build a release catalog from library metadata
pub fn extract_catalog(metadata: LibraryMetadata) -> Result<ReleaseCatalog, CatalogError> {
    parse_version(&metadata.version).map_err(|source| CatalogError::InvalidVersion {
        version: metadata.version.clone(),
        source,
    })?;

    let templates = metadata
        .components
        .into_iter()
        .map(|(name, component)| {
            let (required, optional): (Vec<_>, Vec<_>) = component
                .prop_types
                .into_iter()
                .partition(|(_, prop_type)| prop_type.is_required);

            let spec = TemplateSpec {
                required: required.into_iter().map(|(prop, _)| prop).collect(),
                optional: optional.into_iter().map(|(prop, _)| prop).collect(),
                defaults: component.default_props.unwrap_or_default(),
            };
            (name, spec)
        })
        .collect();

    let catalog = ReleaseCatalog {
        version: metadata.version,
        package: metadata.package,
        templates,
    };
    catalog.validate()?;
    Ok(catalog)
}

/// Tab-indented JSON, the release data file format
pub fn render_catalog(catalog: &ReleaseCatalog) -> Result<String, CatalogError> {
    let mut out = Vec::new();
    let mut ser = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"\t"));
    serde::Serialize::serialize(catalog, &mut ser)?;
    out.push(b'\n');
    // serde_json only ever emits UTF-8
    Ok(String::from_utf8_lossy(&out).into_owned())
}
