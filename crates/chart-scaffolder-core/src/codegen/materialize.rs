//! Generates an example source file that renders one catalog template

use std::fmt;

use super::builder::SourceBuilder;
use super::value::{serialize, PropValue, DEFAULT_INDENT};
use crate::catalog::model::{ReleaseCatalog, TemplateSpec};
use crate::error::MaterializeError;

/// Inert value written for a required prop that has no default
pub const PLACEHOLDER: &str = "{/* required prop; please add a value */}";

/// Column of each attribute inside the component tag
const ATTRIBUTE_INDENT: usize = 4;

/// Column of the component tag inside `App`
const TAG_INDENT: usize = 2;

/// Text of a generated source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSource(String);

impl GeneratedSource {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for GeneratedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<[u8]> for GeneratedSource {
    fn as_ref(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

/// Attribute lines for a template: required props first, then optional
/// props that have a default, each group in catalog order
pub fn attributes(spec: &TemplateSpec) -> Result<Vec<String>, MaterializeError> {
    let mut attrs = Vec::with_capacity(spec.required.len() + spec.optional.len());

    for prop in &spec.required {
        let value = match spec.default_for(prop) {
            Some(default) => render(prop, default)?,
            None => PLACEHOLDER.to_string(),
        };
        attrs.push(format!("{}={}", prop, value));
    }

    for prop in &spec.optional {
        if let Some(default) = spec.default_for(prop) {
            attrs.push(format!("{}={}", prop, render(prop, default)?));
        }
    }

    Ok(attrs)
}

fn render(prop: &str, value: &PropValue) -> Result<String, MaterializeError> {
    serialize(value, DEFAULT_INDENT).map_err(|source| MaterializeError::Serialization {
        prop: prop.to_string(),
        source,
    })
}

/// Produce the example source for `template_name`.
///
/// The name is embedded as-is; callers pick it from the catalog keys.
pub fn materialize(
    catalog: &ReleaseCatalog,
    template_name: &str,
) -> Result<GeneratedSource, MaterializeError> {
    let spec = catalog
        .template(template_name)
        .ok_or_else(|| MaterializeError::TemplateNotFound {
            name: template_name.to_string(),
            available: catalog.template_names(),
        })?;
    spec.validate(template_name)?;

    let attrs = attributes(spec)?;

    let mut src = SourceBuilder::new();
    src.line("/**")
        .line(" * @file")
        .line(format!(" * Chart using the {} template", template_name))
        .line(" */")
        .line(r#"import { render } from "react-dom";"#)
        .line(r#"import React from "react";"#)
        .line(format!(
            r#"import {{ templates }} from "{}";"#,
            catalog.package_name()
        ))
        .blank()
        .line("const App = () => (")
        .indented(TAG_INDENT, &format!("<templates.{}", template_name));
    for attr in &attrs {
        src.hanging(ATTRIBUTE_INDENT, attr);
    }
    src.indented(TAG_INDENT, "/>")
        .line(");")
        .blank()
        .line(r#"render(<App />, document.getElementById("root"));"#);

    Ok(GeneratedSource(src.finish()))
}
