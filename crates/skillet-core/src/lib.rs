//! # skillet-core
//!
//! Core types for the skillet toolkit. This crate defines the shared
//! vocabulary used by every other crate in the workspace: the unified
//! error type and the diagnostic type all validators emit.

pub mod diag;
pub mod error;

pub use diag::{Diagnostic, Severity};
pub use error::{Result, SkilletError};
