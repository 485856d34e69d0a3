//! FakeScope command-line shell
//!
//! Thin presentation layer over `fakescope-classifiers`: argument parsing,
//! config loading with CLI overrides, and text/JSON rendering.

pub mod cli;
pub mod commands;
pub mod config;
pub mod output;
