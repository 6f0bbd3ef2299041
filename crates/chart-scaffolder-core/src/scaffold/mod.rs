//! Project scaffolding: the files written around the generated example

pub mod package;
pub mod writer;

pub use package::render_package_json;
pub use writer::{write_project, ENTRY_POINT};
