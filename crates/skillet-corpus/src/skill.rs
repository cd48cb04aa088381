use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::frontmatter;

/// A skill loaded from a SKILL.md file.
///
/// Skills are Markdown documents with YAML frontmatter. The frontmatter
/// carries the selection metadata (name, description, trigger keywords,
/// languages, category); the body is the overview a reader or assistant
/// follows, with deep reference material under `reference/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    /// Skill name (from frontmatter, or the directory name when omitted).
    pub name: String,
    /// One-line description used for selection.
    pub description: String,
    /// Trigger keywords an assistant matches user requests against.
    #[serde(default)]
    pub triggers: Vec<String>,
    /// Languages the skill's guidance covers.
    #[serde(default)]
    pub languages: Vec<String>,
    /// Taxonomy category (e.g. `e2e-testing`).
    #[serde(default)]
    pub category: Option<String>,
    /// The Markdown body after the frontmatter.
    #[serde(skip)]
    pub body: String,
    /// Absolute path to the SKILL.md file.
    #[serde(skip)]
    pub file_path: PathBuf,
    /// Base directory of the skill (parent of SKILL.md).
    #[serde(skip)]
    pub base_dir: PathBuf,
}

impl Skill {
    /// Load a skill from a SKILL.md path. The file format is:
    ///
    /// ```text
    /// ---
    /// name: my-skill
    /// description: What this skill covers
    /// triggers: [keyword, another keyword]
    /// languages: [TypeScript]
    /// category: e2e-testing
    /// ---
    ///
    /// # Skill Overview
    ///
    /// Guidance for the reader...
    /// ```
    pub fn from_file(path: &Path) -> skillet_core::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            skillet_core::SkilletError::Corpus(format!(
                "failed to read {}: {}",
                path.display(),
                e
            ))
        })?;

        let base_dir = path.parent().unwrap_or(Path::new(".")).to_path_buf();
        let file_path = path.to_path_buf();

        Self::parse(&content, file_path, base_dir)
    }

    /// Parse SKILL.md content with known path info.
    pub fn parse(
        content: &str,
        file_path: PathBuf,
        base_dir: PathBuf,
    ) -> skillet_core::Result<Self> {
        let dir_name = base_dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let (fm_block, body) = frontmatter::split(content).map_err(|e| {
            skillet_core::SkilletError::Skill {
                name: dir_name.clone(),
                reason: e.to_string(),
            }
        })?;
        let fm = frontmatter::parse(fm_block);

        // The directory name stands in for a missing or empty name field.
        let name = match fm.name {
            Some(n) if !n.trim().is_empty() => n,
            _ => dir_name.clone(),
        };
        if name.is_empty() {
            return Err(skillet_core::SkilletError::Skill {
                name: dir_name,
                reason: "skill has no name and no directory name to fall back to".into(),
            });
        }

        let description = match fm.description {
            Some(d) if !d.trim().is_empty() => d,
            _ => {
                return Err(skillet_core::SkilletError::Skill {
                    name,
                    reason: "missing description in frontmatter".into(),
                });
            }
        };

        Ok(Self {
            name,
            description,
            triggers: fm.triggers,
            languages: fm.languages,
            category: fm.category.filter(|c| !c.trim().is_empty()),
            body: body.trim().to_string(),
            file_path,
            base_dir,
        })
    }

    /// The conventional deep-reference directory of this skill.
    pub fn reference_dir(&self) -> PathBuf {
        self.base_dir.join("reference")
    }

    /// The conventional playbook path: `reference/playbook.md`.
    pub fn playbook_path(&self) -> PathBuf {
        self.reference_dir().join("playbook.md")
    }

    /// Whether the playbook exists on disk.
    pub fn has_playbook(&self) -> bool {
        self.playbook_path().is_file()
    }
}
