//! Integration tests for the modifier catalog browser

mod config_integration;
mod fs_catalog;
mod preferences;
mod test_utils;
