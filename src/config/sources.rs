//! Configuration sources, lowest to highest precedence.

pub mod catalog_file;
pub mod environment;
pub mod global_file;
