use chrono::Utc;
use serde::Serialize;

use crate::corpus::Corpus;

/// One skill's entry in the machine-readable catalog.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogEntry {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub languages: Vec<String>,
    pub triggers: Vec<String>,
    pub skill_md: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playbook: Option<String>,
}

/// The machine-readable corpus catalog an assistant integration consumes.
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    pub generated_at: String,
    pub root: String,
    pub skills: Vec<CatalogEntry>,
}

/// Build the JSON-serializable catalog for a corpus.
pub fn catalog(corpus: &Corpus) -> Catalog {
    let skills = corpus
        .list()
        .into_iter()
        .map(|skill| CatalogEntry {
            name: skill.name.clone(),
            description: skill.description.clone(),
            category: skill.category.clone(),
            languages: skill.languages.clone(),
            triggers: skill.triggers.clone(),
            skill_md: skill.file_path.display().to_string(),
            playbook: skill
                .has_playbook()
                .then(|| skill.playbook_path().display().to_string()),
        })
        .collect();

    Catalog {
        generated_at: Utc::now().to_rfc3339(),
        root: corpus.root().display().to_string(),
        skills,
    }
}

/// Generate the `<available_skills>` block for an assistant's system prompt.
///
/// Lists name, description, and triggers per skill plus the SKILL.md path
/// (and playbook path when present); the assistant reads the full SKILL.md
/// when it decides a skill applies. Returns `None` for an empty corpus.
pub fn prompt_block(corpus: &Corpus) -> Option<String> {
    if corpus.is_empty() {
        return None;
    }

    let mut block = String::from("<available_skills>\n");

    for skill in corpus.list() {
        block.push_str("<skill>\n");
        block.push_str(&format!("  <name>{}</name>\n", skill.name));
        block.push_str(&format!(
            "  <description>{}</description>\n",
            skill.description
        ));
        if !skill.triggers.is_empty() {
            block.push_str(&format!(
                "  <triggers>{}</triggers>\n",
                skill.triggers.join(", ")
            ));
        }
        block.push_str(&format!("  <file>{}</file>\n", skill.file_path.display()));
        if skill.has_playbook() {
            block.push_str(&format!(
                "  <playbook>{}</playbook>\n",
                skill.playbook_path().display()
            ));
        }
        block.push_str("</skill>\n");
    }

    block.push_str(
        "To use a skill: read its SKILL.md file and follow the instructions; consult the playbook for deep reference material.\n",
    );
    block.push_str("</available_skills>");

    Some(block)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skill::Skill;
    use std::path::{Path, PathBuf};

    fn sample_corpus() -> Corpus {
        let mut corpus = Corpus::empty(Path::new("/corpus"));
        corpus.register(Skill {
            name: "playwright-automation".into(),
            description: "Playwright E2E testing".into(),
            triggers: vec!["playwright".into(), "e2e".into()],
            languages: vec!["TypeScript".into()],
            category: Some("e2e-testing".into()),
            body: String::new(),
            file_path: PathBuf::from("/corpus/playwright-automation/SKILL.md"),
            base_dir: PathBuf::from("/corpus/playwright-automation"),
        });
        corpus.register(Skill {
            name: "jest-unit".into(),
            description: "Jest unit testing".into(),
            triggers: vec![],
            languages: vec!["JavaScript".into()],
            category: Some("unit-testing".into()),
            body: String::new(),
            file_path: PathBuf::from("/corpus/jest-unit/SKILL.md"),
            base_dir: PathBuf::from("/corpus/jest-unit"),
        });
        corpus
    }

    #[test]
    fn prompt_block_format() {
        let corpus = sample_corpus();
        let block = prompt_block(&corpus).unwrap();
        assert!(block.starts_with("<available_skills>"));
        assert!(block.ends_with("</available_skills>"));
        assert!(block.contains("<name>playwright-automation</name>"));
        assert!(block.contains("<description>Jest unit testing</description>"));
        assert!(block.contains("<triggers>playwright, e2e</triggers>"));
        assert!(block.contains("<file>/corpus/jest-unit/SKILL.md</file>"));
        // jest-unit has no triggers, so no empty tag for it
        assert_eq!(block.matches("<triggers>").count(), 1);
    }

    #[test]
    fn prompt_block_empty_corpus() {
        let corpus = Corpus::empty(Path::new("/corpus"));
        assert!(prompt_block(&corpus).is_none());
    }

    #[test]
    fn catalog_json_shape() {
        let corpus = sample_corpus();
        let cat = catalog(&corpus);
        assert_eq!(cat.root, "/corpus");
        assert_eq!(cat.skills.len(), 2);
        // sorted by name
        assert_eq!(cat.skills[0].name, "jest-unit");
        assert_eq!(cat.skills[1].name, "playwright-automation");

        let json = serde_json::to_value(&cat).unwrap();
        assert!(json["generated_at"].is_string());
        assert_eq!(json["skills"][1]["triggers"][0], "playwright");
        // no playbook on disk, so the key is skipped
        assert!(json["skills"][0].get("playbook").is_none());
    }
}
