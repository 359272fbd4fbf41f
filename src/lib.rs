//! Design Modifiers: a lazy-loading browser for a catalog of prompt modifiers
//!
//! The catalog is a four-level tree (cluster → category → subcategory →
//! modifier group) stored as static documents, one per level. The navigator
//! resolves a slash path into the chain of fetches needed to show it and
//! hands resolved frames to a renderer.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod navigator;
pub mod preferences;
pub mod render;
pub mod store;
