//! Merge layer: defaults and source precedence.

pub mod merge_policy;
pub mod service;
