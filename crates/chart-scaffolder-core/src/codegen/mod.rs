//! Source generation for template usage examples
//!
//! - [`value`]: classification and rendering of default prop values
//! - [`builder`]: line-based text assembly
//! - [`materialize`]: full example source for a catalog template

pub mod builder;
pub mod materialize;
pub mod value;

pub use builder::{reindent, SourceBuilder};
pub use materialize::{attributes, materialize, GeneratedSource, PLACEHOLDER};
pub use value::{serialize, serialize_default, PropValue, DEFAULT_INDENT};
