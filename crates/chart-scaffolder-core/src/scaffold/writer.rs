//! Writes a scaffolded chart project to disk

use super::package::{project_name, render_package_json, BASE_PACKAGE_JSON};
use crate::catalog::model::ReleaseCatalog;
use crate::catalog::version::{dependency_spec, parse_version};
use crate::codegen::materialize;
use crate::error::ScaffoldError;
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;

const GITIGNORE: &str = include_str!("../../assets/gitignore");
const INDEX_HTML: &str = include_str!("../../assets/index.html");

/// Relative path of the generated example source
pub const ENTRY_POINT: &str = "src/index.js";

/// Create `dest` and write a runnable example for `template_name` into it.
///
/// Nothing is written unless the example source materializes and the
/// destination is free; if a later write fails, `dest` is removed again.
/// Returns the relative paths written.
pub async fn write_project(
    dest: &Path,
    catalog: &ReleaseCatalog,
    template_name: &str,
) -> Result<Vec<String>, ScaffoldError> {
    let source = materialize(catalog, template_name)?;

    let version = parse_version(&catalog.version)
        .map(|v| dependency_spec(&v))
        .unwrap_or_else(|_| catalog.version.clone());
    let name = dest
        .file_name()
        .map(|n| project_name(&n.to_string_lossy()));
    let package_json = render_package_json(
        BASE_PACKAGE_JSON,
        name.as_deref(),
        catalog.package_name(),
        &version,
    )?;

    let files: [(&str, &str); 4] = [
        ("package.json", &package_json),
        (".gitignore", GITIGNORE),
        ("index.html", INDEX_HTML),
        (ENTRY_POINT, source.as_str()),
    ];

    write_files(dest, &files).await
}

/// Claim `dest` and write `files` into it, removing `dest` again if any
/// write fails.
async fn write_files(dest: &Path, files: &[(&str, &str)]) -> Result<Vec<String>, ScaffoldError> {
    claim_destination(dest).await?;
    match populate(dest, files).await {
        Ok(written) => Ok(written),
        Err(err) => {
            let _ = fs::remove_dir_all(dest).await;
            Err(err)
        }
    }
}

/// Create `dest` itself, failing if anything already occupies the path.
///
/// Missing parent directories are created first; `dest` is made with a
/// single `create_dir` so a concurrent creator cannot slip in between the
/// existence check and the write.
async fn claim_destination(dest: &Path) -> Result<(), ScaffoldError> {
    if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .await
            .map_err(|source| ScaffoldError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
    }

    fs::create_dir(dest).await.map_err(|source| {
        if source.kind() == ErrorKind::AlreadyExists {
            ScaffoldError::DestinationExists {
                path: dest.to_path_buf(),
            }
        } else {
            ScaffoldError::Io {
                path: dest.to_path_buf(),
                source,
            }
        }
    })
}

async fn populate(dest: &Path, files: &[(&str, &str)]) -> Result<Vec<String>, ScaffoldError> {
    let mut written = Vec::with_capacity(files.len());
    for (relative, content) in files {
        let target_path = dest.join(relative);
        if let Some(parent) = target_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|source| ScaffoldError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }
        fs::write(&target_path, content)
            .await
            .map_err(|source| ScaffoldError::Io {
                path: target_path.clone(),
                source,
            })?;
        written.push(relative.to_string());
    }
    Ok(written)
}
