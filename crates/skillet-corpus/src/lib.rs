//! # skillet-corpus
//!
//! The skill corpus data model. A corpus is a directory whose immediate
//! children are skill directories, each holding a `SKILL.md` (Markdown
//! with YAML frontmatter) and, by convention, deep reference material in
//! `reference/` with a `reference/playbook.md` entry point.
//!
//! ## SKILL.md format
//!
//! ```markdown
//! ---
//! name: playwright-automation
//! description: Browser automation and E2E testing with Playwright
//! triggers: [playwright, browser automation, e2e]
//! languages: [TypeScript, JavaScript]
//! category: e2e-testing
//! ---
//!
//! # Playwright Automation
//!
//! ## When to use this skill
//! Browser-level end-to-end coverage, cross-browser runs...
//! ```
//!
//! ## What this crate does
//!
//! 1. Parses frontmatter ([`frontmatter`]) and whole skills ([`Skill`])
//! 2. Discovers a corpus and tracks skips and load failures ([`Corpus`])
//! 3. Ranks skills against free-text queries by trigger keywords
//!    ([`matcher`])
//! 4. Emits the catalog an assistant integration consumes ([`catalog`]):
//!    an `<available_skills>` prompt block and a JSON index

pub mod catalog;
pub mod corpus;
pub mod frontmatter;
pub mod matcher;
pub mod skill;

pub use catalog::{Catalog, CatalogEntry};
pub use corpus::{Corpus, LoadFailure, ScanOptions};
pub use frontmatter::{Frontmatter, FrontmatterError};
pub use matcher::SkillMatch;
pub use skill::Skill;
