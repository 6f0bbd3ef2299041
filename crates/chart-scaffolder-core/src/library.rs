//! Library configuration trait for CLI binaries
//!
//! This trait defines the interface a component library must implement to
//! configure scaffolding for its own templates and package.

use crate::runtime::check::RuntimeInfo;
use std::path::Path;

/// Configuration trait for a component library
///
/// Each library implements this trait to define:
/// - Library identity (name, display name, npm package)
/// - Where an alternative release catalog can be supplied
/// - Documentation links
/// - Post-setup instructions
pub trait LibraryConfig: Clone + Send + Sync + 'static {
    /// Internal name (used for the CLI command)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// npm package the scaffolded project depends on
    fn package_name(&self) -> &'static str;

    /// Environment variable pointing at a release catalog to use instead of
    /// the bundled one
    fn catalog_path_env(&self) -> &'static str;

    /// URL for library documentation
    fn docs_url(&self) -> &'static str;

    /// CLI description shown in help text
    fn cli_description(&self) -> &'static str;

    /// Generate the "next steps" instructions after project creation
    fn next_steps(&self, dir: &Path, runtimes: &[RuntimeInfo]) -> Vec<String>;
}
