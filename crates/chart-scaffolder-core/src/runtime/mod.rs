//! Runtime detection
//!
//! Reports whether Node.js and the Parcel bundler are on PATH so the
//! post-setup instructions can mention what is missing.

pub mod check;

pub use check::{check_node, check_parcel, check_runtimes, RuntimeInfo};
