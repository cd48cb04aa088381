use std::path::PathBuf;

use skillet_config::SkilletConfig;
use skillet_core::SkilletError;

/// Scaffold a skill directory under the corpus root: SKILL.md with filled
/// frontmatter plus a reference/playbook.md stub. Missing fields are
/// prompted for unless `--defaults` skips straight to placeholders.
pub(super) fn cmd_new(
    config: SkilletConfig,
    name: String,
    category: Option<String>,
    description: Option<String>,
    languages: Vec<String>,
    triggers: Vec<String>,
    defaults: bool,
) -> skillet_core::Result<()> {
    use dialoguer::{Input, Select, theme::ColorfulTheme};

    if name.is_empty() || name.contains(['/', '\\']) {
        return Err(SkilletError::Corpus(format!(
            "invalid skill name '{name}': use a plain directory name"
        )));
    }

    let skill_dir = config.corpus.root.join(&name);
    if skill_dir.exists() {
        return Err(SkilletError::Corpus(format!(
            "skill '{}' already exists at {}",
            name,
            skill_dir.display()
        )));
    }

    let theme = ColorfulTheme::default();
    let placeholder_description = "Describe what this skill does";

    let description = match description {
        Some(d) => d,
        None if defaults => placeholder_description.to_string(),
        None => Input::with_theme(&theme)
            .with_prompt("One-line description")
            .default(placeholder_description.into())
            .interact_text()
            .unwrap_or_else(|_| placeholder_description.into()),
    };

    let category = match category {
        Some(c) => c,
        None => {
            let categories = if config.lint.categories.is_empty() {
                skillet_lint::default_categories()
            } else {
                config.lint.categories.clone()
            };
            if defaults {
                categories[0].clone()
            } else {
                let idx = Select::with_theme(&theme)
                    .with_prompt("Category")
                    .items(&categories)
                    .default(0)
                    .interact()
                    .unwrap_or(0);
                categories[idx].clone()
            }
        }
    };

    let languages = prompt_csv_list(
        &theme,
        languages,
        defaults,
        "Languages (comma-separated, Enter to skip)",
    );
    let triggers = prompt_csv_list(
        &theme,
        triggers,
        defaults,
        "Trigger keywords (comma-separated, Enter to skip)",
    );

    std::fs::create_dir_all(skill_dir.join("reference"))?;

    let skill_md = format!(
        r#"---
name: {name}
description: {description}
category: {category}
languages:{languages_yaml}
triggers:{triggers_yaml}
---

# {name}

## When to use this skill

Describe when an assistant or engineer should reach for this skill.

## Instructions

1. First step
2. Second step
3. Report the result

## Reference

Deep reference material lives in [reference/playbook.md](reference/playbook.md).
"#,
        languages_yaml = yaml_list(&languages),
        triggers_yaml = yaml_list(&triggers),
    );

    let playbook = format!(
        r#"# {name} playbook

Deep reference material for the {name} skill. Keep SKILL.md a short
overview and put exhaustive detail here.

## Setup

## Common patterns

## Troubleshooting
"#
    );

    let skill_path = skill_dir.join("SKILL.md");
    std::fs::write(&skill_path, skill_md)?;
    std::fs::write(skill_dir.join("reference").join("playbook.md"), playbook)?;

    println!("✅ Created skill '{}' at {}", name, skill_dir.display());
    println!(
        "   Edit {}, then check it with: skillet lint {}",
        skill_path.display(),
        skill_dir.display()
    );

    Ok(())
}

fn prompt_csv_list(
    theme: &dialoguer::theme::ColorfulTheme,
    given: Vec<String>,
    defaults: bool,
    prompt: &str,
) -> Vec<String> {
    use dialoguer::Input;

    if !given.is_empty() || defaults {
        return given;
    }
    let raw: String = Input::with_theme(theme)
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .unwrap_or_default();
    split_csv(&raw)
}

fn split_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// Render a YAML list for the frontmatter template: inline `[]` when empty,
/// a block sequence otherwise.
fn yaml_list(items: &[String]) -> String {
    if items.is_empty() {
        return " []".to_string();
    }
    let mut out = String::new();
    for item in items {
        out.push_str("\n  - ");
        out.push_str(item);
    }
    out
}

/// Write a commented starter skillet.toml in the current directory.
pub(super) fn cmd_init() -> skillet_core::Result<()> {
    let config_path = PathBuf::from("skillet.toml");

    if config_path.exists() {
        println!("⚠️  {} already exists", config_path.display());
        println!("   Edit it directly, or use: skillet set KEY VALUE");
        return Ok(());
    }

    let starter = r#"# 🍳 Skillet configuration
# Commented keys show the built-in defaults.

[corpus]
root = "."
# skip_dirs = ["evals", "shared", "scripts", "docs", "__pycache__"]

[lint]
# max_skill_lines = 500
# categories = [
#   "accessibility", "api-testing", "bdd-testing", "cloud-testing",
#   "devops", "e2e-testing", "mobile-testing", "performance-testing",
#   "security-testing", "unit-testing", "visual-testing",
# ]

[logging]
level = "info"
# format = "pretty"   # pretty | json | compact
"#;

    std::fs::write(&config_path, starter)?;
    println!("✅ Created {}", config_path.display());
    println!("   Point corpus.root at your skill corpus, then run: skillet lint");

    Ok(())
}
