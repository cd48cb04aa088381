//! # skillet-lint
//!
//! The validators behind `skillet lint`, `skillet caps`, and
//! `skillet pwconfig`:
//!
//! 1. Corpus structure rules ([`skills`]): frontmatter fields, line
//!    budget, and the `reference/playbook.md` layout convention
//! 2. Cloud-grid capabilities validation ([`capabilities`]): the
//!    browser/platform constants and the `LT:Options` field rules
//! 3. Playwright config linting ([`playwright`]): textual checks for
//!    missing settings and known anti-patterns
//!
//! Every check emits [`skillet_core::Diagnostic`] findings; only `Error`
//! severity fails a run.

pub mod capabilities;
pub mod playwright;
pub mod report;
pub mod skills;

pub use capabilities::{validate_capabilities, validate_capabilities_json};
pub use playwright::lint_playwright_config;
pub use report::LintReport;
pub use skills::{
    LintOptions, MAX_SKILL_LINES, default_categories, lint_corpus, lint_skill_dir,
};
