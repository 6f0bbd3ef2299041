//! Chart Scaffolder Core - Shared library for chart example scaffolding
//!
//! This library turns a component library's release catalog into runnable
//! example projects. Given a template name, it generates a source file that
//! renders the template with every required prop (defaulted, or marked with a
//! placeholder) and every optional prop that has a default.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Code generation** - Pure functions: default value serialization
//!   and template materialization ([`codegen`])
//! - **Layer 2: Catalog and project I/O** - Catalog loading/extraction
//!   ([`catalog`]), project writing ([`scaffold`]), tooling detection ([`runtime`])
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use chart_scaffolder_core::{bundled_catalog, materialize};
//!
//! let catalog = bundled_catalog()?;
//! let source = materialize(&catalog, "Scatterplot")?;
//! std::fs::write("index.js", source.as_str())?;
//! ```

pub mod catalog;
pub mod codegen;
pub mod error;
pub mod library;
pub mod runtime;
pub mod scaffold;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use catalog::{bundled_catalog, load_catalog, CatalogSource, ReleaseCatalog, TemplateSpec};
pub use codegen::{materialize, serialize, GeneratedSource, PropValue};
pub use error::{CatalogError, IntegrityError, MaterializeError, ScaffoldError, SerializeError};
pub use library::LibraryConfig;
pub use runtime::{check_runtimes, RuntimeInfo};
pub use scaffold::write_project;

#[cfg(feature = "tui")]
pub use tui::run;
