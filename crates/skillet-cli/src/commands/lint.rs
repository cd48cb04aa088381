use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;

use notify::{Event as NotifyEvent, EventKind, RecursiveMode, Watcher};
use tracing::warn;

use skillet_config::{ConfigLoader, SkilletConfig};
use skillet_core::SkilletError;
use skillet_corpus::ScanOptions;
use skillet_lint::{LintOptions, LintReport, lint_corpus, lint_skill_dir};

pub(super) fn cmd_lint(
    config: SkilletConfig,
    path: Option<PathBuf>,
    json: bool,
    strict: bool,
    watch: bool,
    loader: ConfigLoader,
) -> skillet_core::Result<()> {
    let explicit = path.is_some();
    let root = path.unwrap_or_else(|| config.corpus.root.clone());

    if watch {
        return watch_lint(&root, explicit, json, &loader);
    }

    let report = run_lint(&root, explicit, &config.scan_options(), &config.lint_options())?;
    render_report(&report, json)?;

    if report.has_errors() || (strict && report.has_warnings()) {
        std::process::exit(1);
    }
    Ok(())
}

/// Lint `root` as a corpus, or as a single skill directory when the user
/// named a path that is not a corpus root. An explicit path with neither a
/// SKILL.md nor skill subdirectories reports a Missing SKILL.md error.
fn run_lint(
    root: &Path,
    explicit: bool,
    scan: &ScanOptions,
    options: &LintOptions,
) -> skillet_core::Result<LintReport> {
    if explicit && !is_corpus_root(root) {
        return Ok(LintReport {
            checked: 1,
            diagnostics: lint_skill_dir(root, options),
        });
    }
    lint_corpus(root, scan, options)
}

/// A corpus root has at least one immediate child directory holding a
/// SKILL.md, and is not itself a skill directory.
fn is_corpus_root(path: &Path) -> bool {
    if path.join("SKILL.md").is_file() {
        return false;
    }
    std::fs::read_dir(path)
        .map(|entries| {
            entries
                .flatten()
                .any(|e| e.path().join("SKILL.md").is_file())
        })
        .unwrap_or(false)
}

fn render_report(report: &LintReport, json: bool) -> skillet_core::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{}", "=".repeat(60));
        println!("Skill Corpus Validation");
        println!("{}", "=".repeat(60));
        println!();
        print!("{}", report.render_text());
    }
    Ok(())
}

/// Re-run the lint whenever files under the corpus root change. Also watches
/// skillet.toml, reloading it before the next run. Runs until interrupted.
fn watch_lint(
    root: &Path,
    explicit: bool,
    json: bool,
    loader: &ConfigLoader,
) -> skillet_core::Result<()> {
    let (tx, rx) = mpsc::channel();
    let mut watcher = notify::recommended_watcher(tx)
        .map_err(|e| SkilletError::Corpus(format!("failed to create file watcher: {e}")))?;
    watcher
        .watch(root, RecursiveMode::Recursive)
        .map_err(|e| SkilletError::Corpus(format!("failed to watch {}: {e}", root.display())))?;

    let config_path = loader.path().to_path_buf();
    if config_path.is_file() {
        watcher
            .watch(&config_path, RecursiveMode::NonRecursive)
            .map_err(|e| {
                SkilletError::Config(format!("failed to watch {}: {e}", config_path.display()))
            })?;
    }

    println!("👀 Watching {} (Ctrl+C to stop)\n", root.display());

    let config = loader.get();
    let report = run_lint(root, explicit, &config.scan_options(), &config.lint_options())?;
    render_report(&report, json)?;

    while let Ok(first) = rx.recv() {
        // Let the burst settle, then drain the queue so one save triggers
        // one re-run. Editors often emit several events per write.
        std::thread::sleep(Duration::from_millis(200));
        let mut events = vec![first];
        while let Ok(more) = rx.try_recv() {
            events.push(more);
        }

        let changed: Vec<&NotifyEvent> = events
            .iter()
            .filter_map(|r| r.as_ref().ok())
            .filter(|e| is_relevant(e))
            .collect();
        if changed.is_empty() {
            continue;
        }

        if changed.iter().any(|e| touches(e, &config_path))
            && let Err(e) = loader.reload()
        {
            warn!(error = %e, "config file has errors, keeping current config");
        }
        let config = loader.get();

        println!("\n🔁 Change detected, re-linting\n");
        match run_lint(root, explicit, &config.scan_options(), &config.lint_options()) {
            Ok(report) => render_report(&report, json)?,
            Err(e) => warn!(error = %e, "lint run failed"),
        }
    }

    Ok(())
}

fn is_relevant(event: &NotifyEvent) -> bool {
    matches!(
        event.kind,
        EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
    )
}

/// Editors create temp files and rename over the original, so compare by
/// file name rather than full path.
fn touches(event: &NotifyEvent, path: &Path) -> bool {
    event.paths.iter().any(|p| p.file_name() == path.file_name())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_skill(root: &Path, dir: &str) {
        let skill_dir = root.join(dir);
        std::fs::create_dir_all(&skill_dir).unwrap();
        std::fs::write(
            skill_dir.join("SKILL.md"),
            "---\nname: t\ndescription: d\n---\nBody\n",
        )
        .unwrap();
    }

    #[test]
    fn test_is_corpus_root() {
        let tmp = tempfile::tempdir().unwrap();
        write_skill(tmp.path(), "alpha");
        assert!(is_corpus_root(tmp.path()));
        assert!(!is_corpus_root(&tmp.path().join("alpha")));
        assert!(!is_corpus_root(&tmp.path().join("missing")));
    }

    #[test]
    fn test_run_lint_explicit_skill_dir() {
        let tmp = tempfile::tempdir().unwrap();
        write_skill(tmp.path(), "alpha");
        let report = run_lint(
            &tmp.path().join("alpha"),
            true,
            &ScanOptions::default(),
            &LintOptions::default(),
        )
        .unwrap();
        assert_eq!(report.checked, 1);
    }

    #[test]
    fn test_run_lint_explicit_non_skill_path_errors() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(tmp.path().join("not-a-skill")).unwrap();
        let report = run_lint(
            &tmp.path().join("not-a-skill"),
            true,
            &ScanOptions::default(),
            &LintOptions::default(),
        )
        .unwrap();
        assert!(report.has_errors());
        assert!(
            report.diagnostics[0].message.contains("Missing SKILL.md"),
            "{:?}",
            report.diagnostics
        );
    }

    #[test]
    fn test_run_lint_explicit_corpus_root() {
        let tmp = tempfile::tempdir().unwrap();
        write_skill(tmp.path(), "alpha");
        write_skill(tmp.path(), "beta");
        let report = run_lint(
            tmp.path(),
            true,
            &ScanOptions::default(),
            &LintOptions::default(),
        )
        .unwrap();
        assert_eq!(report.checked, 2);
        assert!(!report.has_errors());
    }
}
