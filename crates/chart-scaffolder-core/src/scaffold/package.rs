//! package.json for scaffolded projects

use serde_json::{Map, Value};

/// Base manifest shipped with the scaffolder
pub const BASE_PACKAGE_JSON: &str = include_str!("../../assets/package.json");

/// npm-friendly project name derived from a directory name
pub fn project_name(dir_name: &str) -> String {
    dir_name
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Fill in the base manifest: project name, plus `package` pinned to
/// `version` as the first dependency
pub fn render_package_json(
    base: &str,
    name: Option<&str>,
    package: &str,
    version: &str,
) -> Result<String, serde_json::Error> {
    let mut manifest: Value = serde_json::from_str(base)?;

    if let Some(obj) = manifest.as_object_mut() {
        if let Some(name) = name.filter(|n| !n.is_empty()) {
            obj.insert("name".to_string(), Value::String(name.to_string()));
        }

        let existing = match obj.get_mut("dependencies") {
            Some(Value::Object(deps)) => std::mem::take(deps),
            _ => Map::new(),
        };
        let mut deps = Map::new();
        deps.insert(package.to_string(), Value::String(version.to_string()));
        for (dep, spec) in existing {
            if dep != package {
                deps.insert(dep, spec);
            }
        }
        obj.insert("dependencies".to_string(), Value::Object(deps));
    }

    let mut text = serde_json::to_string_pretty(&manifest)?;
    text.push('\n');
    Ok(text)
}
