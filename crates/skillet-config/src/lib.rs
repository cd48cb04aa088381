//! # skillet-config
//!
//! Configuration loading for the skillet CLI. Loads `skillet.toml` (with
//! env var overrides), validates it, and derives the scan and lint
//! options the library crates consume.

pub mod loader;
pub mod schema;

pub use loader::ConfigLoader;
pub use schema::{CorpusConfig, LintConfig, LoggingConfig, SkilletConfig};
