use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::skill::Skill;

/// Discovery knobs for a corpus scan.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Directory names that are never skill directories (tooling, shared
    /// assets, eval harnesses). Hidden directories are always skipped.
    pub skip_dirs: Vec<String>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            skip_dirs: default_skip_dirs(),
        }
    }
}

/// The stock set of non-skill directory names found in skill corpora.
pub fn default_skip_dirs() -> Vec<String> {
    ["evals", "shared", "scripts", "docs", "__pycache__"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// A skill directory whose SKILL.md could not be loaded.
#[derive(Debug, Clone)]
pub struct LoadFailure {
    /// The skill directory (relative name under the corpus root).
    pub dir: String,
    /// Why the load failed.
    pub reason: String,
}

/// A discovered skill corpus.
///
/// A corpus is a directory whose immediate children are skill directories,
/// each holding a SKILL.md. Directories without one are not part of the
/// corpus and are passed over silently; directories whose SKILL.md fails
/// to load are retained as failures so the linter can report them.
pub struct Corpus {
    root: PathBuf,
    skills: HashMap<String, Skill>,
    skipped: Vec<String>,
    failures: Vec<LoadFailure>,
}

impl Corpus {
    /// An empty corpus rooted at `root` (programmatic construction).
    pub fn empty(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            skills: HashMap::new(),
            skipped: Vec::new(),
            failures: Vec::new(),
        }
    }

    /// Discover the corpus under `root` with default scan options.
    pub fn discover(root: &Path) -> skillet_core::Result<Self> {
        Self::discover_with(root, &ScanOptions::default())
    }

    /// Discover the corpus under `root`.
    ///
    /// Scans the immediate children of the root in sorted name order. When
    /// two skill directories declare the same name the first wins and the
    /// duplicate is recorded as a load failure. A nonexistent root yields
    /// an empty corpus.
    pub fn discover_with(root: &Path, options: &ScanOptions) -> skillet_core::Result<Self> {
        let mut corpus = Self::empty(root);

        if !root.exists() {
            debug!(?root, "corpus root does not exist, nothing to discover");
            return Ok(corpus);
        }

        let entries = std::fs::read_dir(root).map_err(|e| {
            skillet_core::SkilletError::Corpus(format!(
                "failed to read corpus root {}: {}",
                root.display(),
                e
            ))
        })?;

        let mut dirs: Vec<PathBuf> = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| skillet_core::SkilletError::Corpus(e.to_string()))?;
            if entry.path().is_dir() {
                dirs.push(entry.path());
            }
        }
        dirs.sort();

        for dir in dirs {
            let dir_name = dir
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();

            if dir_name.starts_with('.') || options.skip_dirs.iter().any(|s| s == &dir_name) {
                debug!(dir = %dir_name, "skipping non-skill directory");
                corpus.skipped.push(dir_name);
                continue;
            }

            let skill_md = dir.join("SKILL.md");
            if !skill_md.exists() {
                continue;
            }

            match Skill::from_file(&skill_md) {
                Ok(skill) => {
                    if let Some(existing) = corpus.skills.get(&skill.name) {
                        warn!(
                            skill = %skill.name,
                            first = %existing.base_dir.display(),
                            duplicate = %dir.display(),
                            "duplicate skill name, keeping the first"
                        );
                        corpus.failures.push(LoadFailure {
                            dir: dir_name,
                            reason: format!(
                                "duplicate skill name '{}' (already loaded from {})",
                                skill.name,
                                existing.base_dir.display()
                            ),
                        });
                    } else {
                        info!(skill = %skill.name, path = ?skill_md, "loaded skill");
                        corpus.skills.insert(skill.name.clone(), skill);
                    }
                }
                Err(e) => {
                    warn!(path = ?skill_md, error = %e, "failed to load skill");
                    corpus.failures.push(LoadFailure {
                        dir: dir_name,
                        reason: e.to_string(),
                    });
                }
            }
        }

        Ok(corpus)
    }

    /// Register a skill programmatically.
    pub fn register(&mut self, skill: Skill) {
        let name = skill.name.clone();
        self.skills.insert(name, skill);
    }

    /// The corpus root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get a skill by name.
    pub fn get(&self, name: &str) -> Option<&Skill> {
        self.skills.get(name)
    }

    /// List all skills, sorted by name.
    pub fn list(&self) -> Vec<&Skill> {
        let mut skills: Vec<_> = self.skills.values().collect();
        skills.sort_by_key(|s| &s.name);
        skills
    }

    /// List skills in a category (case-insensitive), sorted by name.
    pub fn by_category(&self, category: &str) -> Vec<&Skill> {
        self.list()
            .into_iter()
            .filter(|s| {
                s.category
                    .as_deref()
                    .is_some_and(|c| c.eq_ignore_ascii_case(category))
            })
            .collect()
    }

    /// List skills covering a language (case-insensitive), sorted by name.
    pub fn by_language(&self, language: &str) -> Vec<&Skill> {
        self.list()
            .into_iter()
            .filter(|s| s.languages.iter().any(|l| l.eq_ignore_ascii_case(language)))
            .collect()
    }

    /// Number of loaded skills.
    pub fn len(&self) -> usize {
        self.skills.len()
    }

    /// Whether the corpus has no skills.
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// Directory names skipped during discovery.
    pub fn skipped(&self) -> &[String] {
        &self.skipped
    }

    /// Skill directories whose SKILL.md failed to load.
    pub fn failures(&self) -> &[LoadFailure] {
        &self.failures
    }
}
