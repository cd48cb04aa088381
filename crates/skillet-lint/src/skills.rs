use std::path::Path;
use tracing::debug;

use skillet_core::Diagnostic;
use skillet_corpus::ScanOptions;
use skillet_corpus::frontmatter::{self, FrontmatterError};

use crate::report::LintReport;

/// Default ceiling for SKILL.md length. The overview must stay readable;
/// depth belongs in `reference/`.
pub const MAX_SKILL_LINES: usize = 500;

/// The stock category taxonomy for test-automation skills.
pub fn default_categories() -> Vec<String> {
    [
        "accessibility",
        "api-testing",
        "bdd-testing",
        "cloud-testing",
        "devops",
        "e2e-testing",
        "mobile-testing",
        "performance-testing",
        "security-testing",
        "unit-testing",
        "visual-testing",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// Tunables for corpus linting.
#[derive(Debug, Clone)]
pub struct LintOptions {
    /// Maximum SKILL.md length in lines.
    pub max_skill_lines: usize,
    /// Accepted values for the frontmatter `category` field.
    pub categories: Vec<String>,
}

impl Default for LintOptions {
    fn default() -> Self {
        Self {
            max_skill_lines: MAX_SKILL_LINES,
            categories: default_categories(),
        }
    }
}

/// Lint every skill directory under a corpus root.
///
/// Walks the immediate children in sorted name order, skipping hidden
/// directories and the configured skip set. A child without a SKILL.md is
/// not a skill directory and is passed over silently; use
/// [`lint_skill_dir`] on an explicit path to make that an error.
pub fn lint_corpus(
    root: &Path,
    scan: &ScanOptions,
    options: &LintOptions,
) -> skillet_core::Result<LintReport> {
    let mut report = LintReport::default();

    if !root.exists() {
        report.diagnostics.push(Diagnostic::warning(
            root.display().to_string(),
            "corpus root does not exist",
        ));
        return Ok(report);
    }

    let entries = std::fs::read_dir(root).map_err(|e| {
        skillet_core::SkilletError::Corpus(format!(
            "failed to read corpus root {}: {}",
            root.display(),
            e
        ))
    })?;

    let mut dirs = Vec::new();
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

        if dir_name.starts_with('.') || scan.skip_dirs.iter().any(|s| s == &dir_name) {
            debug!(dir = %dir_name, "skipping non-skill directory");
            continue;
        }
        if !dir.join("SKILL.md").exists() {
            continue;
        }

        report.checked += 1;
        report.diagnostics.extend(lint_skill_dir(&dir, options));
    }

    if report.checked == 0 {
        report.diagnostics.push(Diagnostic::warning(
            root.display().to_string(),
            "no skill directories found",
        ));
    }

    Ok(report)
}

/// Lint a single skill directory. Every diagnostic's subject is the
/// directory name.
pub fn lint_skill_dir(dir: &Path, options: &LintOptions) -> Vec<Diagnostic> {
    let subject = dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| dir.display().to_string());
    let mut diags = Vec::new();

    let skill_md = dir.join("SKILL.md");
    if !skill_md.exists() {
        diags.push(Diagnostic::error(&subject, "Missing SKILL.md"));
        return diags;
    }

    let content = match std::fs::read_to_string(&skill_md) {
        Ok(c) => c,
        Err(e) => {
            diags.push(Diagnostic::error(
                &subject,
                format!("failed to read SKILL.md: {e}"),
            ));
            return diags;
        }
    };

    let lines = content.split('\n').count();
    if lines > options.max_skill_lines {
        diags.push(Diagnostic::error(
            &subject,
            format!("SKILL.md is {} lines (max {})", lines, options.max_skill_lines),
        ));
    }

    // A structurally broken frontmatter reports one error; the field
    // checks only run on a parsed block.
    match frontmatter::split(&content) {
        Err(FrontmatterError::MissingOpen) => {
            diags.push(Diagnostic::error(
                &subject,
                "Missing opening --- in frontmatter",
            ));
        }
        Err(FrontmatterError::MissingClose) => {
            diags.push(Diagnostic::error(
                &subject,
                "Missing closing --- in frontmatter",
            ));
        }
        Ok((fm_block, _)) => {
            let fm = frontmatter::parse(fm_block);

            if fm.name.is_none() {
                diags.push(Diagnostic::error(&subject, "Missing 'name' in frontmatter"));
            }
            if fm.description.is_none() {
                diags.push(Diagnostic::error(
                    &subject,
                    "Missing 'description' in frontmatter",
                ));
            }
            if fm.languages.is_empty() {
                diags.push(Diagnostic::warning(
                    &subject,
                    "Missing 'languages' in frontmatter",
                ));
            }
            match fm.category.as_deref().map(str::trim) {
                None => {
                    diags.push(Diagnostic::warning(
                        &subject,
                        "Missing 'category' in frontmatter",
                    ));
                }
                Some(cat) if !cat.is_empty() && !options.categories.iter().any(|c| c == cat) => {
                    diags.push(
                        Diagnostic::warning(&subject, format!("Unknown category '{cat}'"))
                            .with_hint(format!("Valid: {}", options.categories.join(", "))),
                    );
                }
                Some(_) => {}
            }
            if fm.triggers.is_empty() {
                diags.push(
                    Diagnostic::warning(&subject, "No 'triggers' in frontmatter").with_hint(
                        "Trigger keywords let an assistant select this skill by request",
                    ),
                );
            }
        }
    }

    let ref_dir = dir.join("reference");
    if !ref_dir.is_dir() {
        diags.push(Diagnostic::warning(&subject, "No reference/ directory"));
    } else if !ref_dir.join("playbook.md").exists() {
        diags.push(Diagnostic::warning(&subject, "No reference/playbook.md"));
    }

    // The overview must point readers at its deep-reference material.
    if !content.contains("reference/") && !content.contains("playbook.md") {
        diags.push(Diagnostic::warning(
            &subject,
            "SKILL.md doesn't reference playbook.md",
        ));
    }

    diags
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_skill(dir: &Path) {
        std::fs::create_dir_all(dir.join("reference")).unwrap();
        std::fs::write(
            dir.join("SKILL.md"),
            "---\n\
             name: cypress-e2e\n\
             description: Cypress end-to-end testing\n\
             triggers: [cypress]\n\
             languages: [JavaScript]\n\
             category: e2e-testing\n\
             ---\n\n\
             # Cypress\n\nSee reference/playbook.md for details.\n",
        )
        .unwrap();
        std::fs::write(dir.join("reference").join("playbook.md"), "# Playbook\n").unwrap();
    }

    #[test]
    fn clean_skill_has_no_findings() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("cypress-e2e");
        full_skill(&dir);
        assert!(lint_skill_dir(&dir, &LintOptions::default()).is_empty());
    }

    #[test]
    fn missing_skill_md_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("empty-dir");
        std::fs::create_dir_all(&dir).unwrap();

        let diags = lint_skill_dir(&dir, &LintOptions::default());
        assert_eq!(diags.len(), 1);
        assert!(diags[0].is_error());
        assert_eq!(diags[0].message, "Missing SKILL.md");
    }

    #[test]
    fn structural_error_suppresses_field_checks() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("broken");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("SKILL.md"), "# No frontmatter at all\n").unwrap();

        let diags = lint_skill_dir(&dir, &LintOptions::default());
        let errors: Vec<_> = diags.iter().filter(|d| d.is_error()).collect();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Missing opening --- in frontmatter");
        // Reference warnings still apply.
        assert!(diags.iter().any(|d| d.message == "No reference/ directory"));
    }

    #[test]
    fn missing_close_is_distinct() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("unclosed");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("SKILL.md"), "---\nname: unclosed\nno end\n").unwrap();

        let diags = lint_skill_dir(&dir, &LintOptions::default());
        assert!(
            diags
                .iter()
                .any(|d| d.message == "Missing closing --- in frontmatter")
        );
    }

    #[test]
    fn field_rules_fire() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("sparse");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(
            dir.join("SKILL.md"),
            "---\ncategory: made-up-category\n---\n\nBody without references.\n",
        )
        .unwrap();

        let diags = lint_skill_dir(&dir, &LintOptions::default());
        let messages: Vec<_> = diags.iter().map(|d| d.message.as_str()).collect();
        assert!(messages.contains(&"Missing 'name' in frontmatter"));
        assert!(messages.contains(&"Missing 'description' in frontmatter"));
        assert!(messages.contains(&"Missing 'languages' in frontmatter"));
        assert!(messages.contains(&"Unknown category 'made-up-category'"));
        assert!(messages.contains(&"No 'triggers' in frontmatter"));
        assert!(messages.contains(&"SKILL.md doesn't reference playbook.md"));
    }

    #[test]
    fn line_budget_enforced() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("long");
        std::fs::create_dir_all(&dir).unwrap();
        let mut content =
            String::from("---\nname: long\ndescription: d\n---\n# reference/playbook.md\n");
        for _ in 0..600 {
            content.push_str("filler line\n");
        }
        std::fs::write(dir.join("SKILL.md"), &content).unwrap();

        let options = LintOptions::default();
        let diags = lint_skill_dir(&dir, &options);
        let count = content.split('\n').count();
        assert!(
            diags
                .iter()
                .any(|d| d.is_error() && d.message == format!("SKILL.md is {count} lines (max 500)"))
        );
    }

    #[test]
    fn playbook_warning_only_when_reference_exists() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("refless");
        std::fs::create_dir_all(dir.join("reference")).unwrap();
        std::fs::write(
            dir.join("SKILL.md"),
            "---\nname: refless\ndescription: d\ntriggers: [x]\nlanguages: [Go]\ncategory: devops\n---\nSee reference/ for more.\n",
        )
        .unwrap();

        let diags = lint_skill_dir(&dir, &LintOptions::default());
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].message, "No reference/playbook.md");
    }
}
