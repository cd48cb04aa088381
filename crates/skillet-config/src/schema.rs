use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use skillet_core::Diagnostic;
use skillet_corpus::ScanOptions;
use skillet_corpus::corpus::default_skip_dirs;
use skillet_lint::LintOptions;
use skillet_lint::skills::{MAX_SKILL_LINES, default_categories};

/// Root configuration. Maps to `skillet.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SkilletConfig {
    pub corpus: CorpusConfig,
    pub lint: LintConfig,
    pub logging: LoggingConfig,
}

// ── Corpus ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    /// Corpus root directory.
    pub root: PathBuf,
    /// Directory names that are never skill directories.
    pub skip_dirs: Vec<String>,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            skip_dirs: default_skip_dirs(),
        }
    }
}

// ── Lint ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LintConfig {
    /// Maximum SKILL.md length in lines.
    pub max_skill_lines: usize,
    /// Accepted values for the frontmatter `category` field.
    pub categories: Vec<String>,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            max_skill_lines: MAX_SKILL_LINES,
            categories: default_categories(),
        }
    }
}

// ── Logging ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error.
    pub level: String,
    /// Output format: pretty, json, compact.
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}

// ── Validation ─────────────────────────────────────────────────

impl SkilletConfig {
    /// Validate the config and return findings.
    /// Returns `Err` with the error messages joined when any finding is
    /// an error.
    pub fn validate(&self) -> Result<Vec<Diagnostic>, String> {
        let mut findings = Vec::new();

        // ── Lint ───
        if self.lint.max_skill_lines == 0 {
            findings.push(
                Diagnostic::error("lint.max_skill_lines", "max_skill_lines is 0")
                    .with_hint("Every SKILL.md would fail the length check; set to e.g. 500"),
            );
        }
        if self.lint.categories.is_empty() {
            findings.push(
                Diagnostic::warning("lint.categories", "category list is empty")
                    .with_hint("Every skill category will be flagged as unknown"),
            );
        }

        // ── Logging ───
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            findings.push(
                Diagnostic::warning(
                    "logging.level",
                    format!("unknown log level '{}'", self.logging.level),
                )
                .with_hint(format!("Valid values: {}", valid_levels.join(", "))),
            );
        }
        let valid_formats = ["pretty", "json", "compact"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            findings.push(
                Diagnostic::warning(
                    "logging.format",
                    format!("unknown log format '{}'", self.logging.format),
                )
                .with_hint(format!("Valid values: {}", valid_formats.join(", "))),
            );
        }

        // ── Corpus ───
        if !self.corpus.root.exists() {
            findings.push(
                Diagnostic::warning(
                    "corpus.root",
                    format!("corpus root '{}' does not exist", self.corpus.root.display()),
                )
                .with_hint("Point corpus.root at your skill corpus or run 'skillet new'"),
            );
        }

        if findings.iter().any(|f| f.is_error()) {
            let joined = findings
                .iter()
                .filter(|f| f.is_error())
                .map(|f| format!("{}: {}", f.subject, f.message))
                .collect::<Vec<_>>()
                .join("; ");
            return Err(joined);
        }

        Ok(findings)
    }

    /// Discovery options derived from this config.
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            skip_dirs: self.corpus.skip_dirs.clone(),
        }
    }

    /// Lint options derived from this config.
    pub fn lint_options(&self) -> LintOptions {
        LintOptions {
            max_skill_lines: self.lint.max_skill_lines,
            categories: self.lint.categories.clone(),
        }
    }
}
