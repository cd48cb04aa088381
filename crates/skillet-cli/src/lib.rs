//! # skillet-cli
//!
//! Command-line interface for the skillet corpus toolkit.
//!
//! ## Commands
//!
//! - `skillet lint`: validate a skill corpus
//! - `skillet list`: list skills
//! - `skillet show`: show one skill
//! - `skillet match`: rank skills against a task query
//! - `skillet catalog`: emit the assistant-facing catalog
//! - `skillet new`: scaffold a skill directory
//! - `skillet caps`: validate cloud-grid capabilities JSON
//! - `skillet pwconfig`: lint a Playwright config
//! - `skillet config`: show/edit configuration

pub mod commands;

pub use commands::Cli;
