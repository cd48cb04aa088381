use skillet_config::SkilletConfig;
use skillet_corpus::{Corpus, catalog, matcher};

pub(super) fn cmd_list(
    config: SkilletConfig,
    category: Option<String>,
    language: Option<String>,
    json: bool,
) -> skillet_core::Result<()> {
    let corpus = Corpus::discover_with(&config.corpus.root, &config.scan_options())?;

    let skills = match (&category, &language) {
        (Some(c), None) => corpus.by_category(c),
        (None, Some(l)) => corpus.by_language(l),
        (Some(c), Some(l)) => {
            let mut matching = corpus.by_category(c);
            matching.retain(|s| s.languages.iter().any(|x| x.eq_ignore_ascii_case(l)));
            matching
        }
        (None, None) => corpus.list(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&skills)?);
        return Ok(());
    }

    if skills.is_empty() {
        println!("No skills found in {}", corpus.root().display());
        println!("  Create one with: skillet new <name>");
    } else {
        println!("\x1b[1mSkills ({}):\x1b[0m\n", skills.len());
        for s in skills {
            let langs = if s.languages.is_empty() {
                String::new()
            } else {
                format!(" [{}]", s.languages.join(", "))
            };
            println!("  \x1b[36m{}\x1b[0m{}", s.name, langs);
            println!("    {}", s.description);
            if let Some(ref cat) = s.category {
                println!("    Category: {cat}");
            }
            println!("    File: {}", s.file_path.display());
            println!();
        }
    }
    Ok(())
}

pub(super) fn cmd_show(
    config: SkilletConfig,
    name: String,
    json: bool,
) -> skillet_core::Result<()> {
    let corpus = Corpus::discover_with(&config.corpus.root, &config.scan_options())?;

    match corpus.get(&name) {
        Some(skill) => {
            if json {
                println!("{}", serde_json::to_string_pretty(skill)?);
                return Ok(());
            }

            println!("\x1b[1m{}\x1b[0m", skill.name);
            println!("  {}", skill.description);
            if let Some(ref cat) = skill.category {
                println!("  Category: {cat}");
            }
            if !skill.languages.is_empty() {
                println!("  Languages: {}", skill.languages.join(", "));
            }
            if !skill.triggers.is_empty() {
                println!("  Triggers: {}", skill.triggers.join(", "));
            }
            println!("  File: {}", skill.file_path.display());
            if skill.has_playbook() {
                println!("  Playbook: {}", skill.playbook_path().display());
            }

            println!("\n  \x1b[1mInstructions:\x1b[0m");
            for line in skill.body.lines() {
                println!("    {line}");
            }
        }
        None => {
            println!("Skill '{name}' not found.");
        }
    }
    Ok(())
}

pub(super) fn cmd_match(
    config: SkilletConfig,
    query: String,
    limit: usize,
    json: bool,
) -> skillet_core::Result<()> {
    let corpus = Corpus::discover_with(&config.corpus.root, &config.scan_options())?;
    let matches = matcher::match_skills(&corpus, &query, limit);

    if json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
        return Ok(());
    }

    if matches.is_empty() {
        println!("No skills match '{query}'.");
        return Ok(());
    }

    println!("\x1b[1mTop matches for '{query}':\x1b[0m\n");
    for m in &matches {
        println!("  \x1b[36m{}\x1b[0m \x1b[90m(score {})\x1b[0m", m.name, m.score);
        if let Some(skill) = corpus.get(&m.name) {
            println!("    {}", skill.description);
        }
        if !m.matched.is_empty() {
            println!("    \x1b[90mmatched: {}\x1b[0m", m.matched.join(", "));
        }
        println!();
    }
    Ok(())
}

pub(super) fn cmd_catalog(config: SkilletConfig, json: bool) -> skillet_core::Result<()> {
    let corpus = Corpus::discover_with(&config.corpus.root, &config.scan_options())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&catalog::catalog(&corpus))?);
        return Ok(());
    }

    match catalog::prompt_block(&corpus) {
        Some(block) => println!("{block}"),
        None => println!("No skills found in {}", corpus.root().display()),
    }
    Ok(())
}
