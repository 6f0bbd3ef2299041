//! Interactive `create` flow built on cliclack prompts
//!
//! Compiled only with the `tui` feature; `lib.rs` gates the whole module.

mod prompts;

pub use prompts::{run, CreateArgs};
