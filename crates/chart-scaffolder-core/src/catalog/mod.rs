//! Release catalog model, loading, and extraction
//!
//! This module provides:
//! - Catalog types (ReleaseCatalog, TemplateSpec)
//! - Loading from the bundled release data or a local JSON file
//! - Extraction of a catalog from library prop metadata
//! - Library version parsing and comparison

pub mod extract;
pub mod loader;
pub mod model;
pub mod version;

use crate::library::LibraryConfig;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

pub use extract::{extract_catalog, parse_metadata, render_catalog, LibraryMetadata};
pub use loader::{bundled_catalog, load_catalog, parse_catalog, CatalogSource};
pub use model::{ReleaseCatalog, TemplateSpec, DEFAULT_PACKAGE};
pub use version::check_compatibility;

/// Generate a release data file from a library metadata dump
pub async fn generate_catalog<C: LibraryConfig>(
    config: &C,
    metadata_path: &Path,
    output_path: &Path,
) -> Result<ReleaseCatalog> {
    let content = tokio::fs::read_to_string(metadata_path)
        .await
        .with_context(|| format!("Failed to read {}", metadata_path.display()))?;
    let metadata = parse_metadata(&content)
        .with_context(|| format!("Failed to parse {}", metadata_path.display()))?;

    println!(
        "{}",
        format!(
            "Generating {} release data for version {}...",
            config.display_name(),
            metadata.version
        )
        .cyan()
        .bold()
    );
    println!();

    let mut catalog = extract_catalog(metadata)?;
    if catalog.package.is_none() && config.package_name() != DEFAULT_PACKAGE {
        catalog.package = Some(config.package_name().to_string());
    }

    for (name, spec) in &catalog.templates {
        println!(
            "  {} {} ({} required, {} optional, {} defaults)",
            "->".blue(),
            name,
            spec.required.len(),
            spec.optional.len(),
            spec.defaults.len()
        );
    }

    let text = render_catalog(&catalog)?;
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }
    tokio::fs::write(output_path, text)
        .await
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    println!();
    println!(
        "{} {} template(s) to {}",
        "Wrote".green().bold(),
        catalog.templates.len(),
        output_path.display()
    );

    Ok(catalog)
}
