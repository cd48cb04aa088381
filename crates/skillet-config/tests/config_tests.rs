#[cfg(test)]
mod tests {
    use skillet_config::ConfigLoader;
    use skillet_config::schema::*;

    // ── Default tests ──────────────────────────────────────────

    #[test]
    fn test_corpus_config_defaults() {
        let config = CorpusConfig::default();
        assert_eq!(config.root, std::path::PathBuf::from("."));
        assert!(config.skip_dirs.contains(&"shared".to_string()));
        assert!(config.skip_dirs.contains(&"scripts".to_string()));
        assert!(config.skip_dirs.contains(&"__pycache__".to_string()));
    }

    #[test]
    fn test_lint_config_defaults() {
        let config = LintConfig::default();
        assert_eq!(config.max_skill_lines, 500);
        assert_eq!(config.categories.len(), 11);
        assert!(config.categories.contains(&"e2e-testing".to_string()));
        assert!(config.categories.contains(&"unit-testing".to_string()));
    }

    #[test]
    fn test_logging_config_defaults() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert_eq!(config.format, "pretty");
    }

    // ── TOML roundtrip tests ───────────────────────────────────

    #[test]
    fn test_config_toml_roundtrip() {
        let config = SkilletConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let restored: SkilletConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(restored.corpus.root, config.corpus.root);
        assert_eq!(restored.lint.max_skill_lines, config.lint.max_skill_lines);
        assert_eq!(restored.logging.level, config.logging.level);
    }

    #[test]
    fn test_partial_toml_applies_defaults() {
        let toml_str = r#"
[corpus]
root = "skills"

[lint]
max_skill_lines = 300
"#;
        let config: SkilletConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.corpus.root, std::path::PathBuf::from("skills"));
        assert_eq!(config.lint.max_skill_lines, 300);
        // Defaults should fill in
        assert!(!config.corpus.skip_dirs.is_empty());
        assert_eq!(config.lint.categories.len(), 11);
        assert_eq!(config.logging.format, "pretty");
    }

    // ── ConfigLoader tests ─────────────────────────────────────

    #[test]
    fn test_config_loader_with_file() {
        let dir = tempfile::tempdir().unwrap();
        let corpus_dir = dir.path().join("corpus");
        std::fs::create_dir_all(&corpus_dir).unwrap();
        let config_path = dir.path().join("skillet.toml");
        std::fs::write(
            &config_path,
            format!(
                r#"
[corpus]
root = "{}"
skip_dirs = ["internal"]

[lint]
max_skill_lines = 250

[logging]
level = "debug"
"#,
                corpus_dir.display()
            ),
        )
        .unwrap();

        let loader = ConfigLoader::load(Some(config_path.as_path())).unwrap();
        let config = loader.get();
        assert_eq!(config.corpus.root, corpus_dir);
        assert_eq!(config.corpus.skip_dirs, vec!["internal"]);
        assert_eq!(config.lint.max_skill_lines, 250);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_config_loader_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loader = ConfigLoader::load(Some(&dir.path().join("skillet.toml"))).unwrap();
        assert_eq!(loader.get().lint.max_skill_lines, 500);
    }

    #[test]
    fn test_config_loader_rejects_invalid_config() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("skillet.toml");
        std::fs::write(&config_path, "[lint]\nmax_skill_lines = 0\n").unwrap();

        let result = ConfigLoader::load(Some(config_path.as_path()));
        assert!(result.is_err());
    }

    #[test]
    fn test_config_loader_rejects_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("skillet.toml");
        std::fs::write(&config_path, "not [valid toml").unwrap();

        assert!(ConfigLoader::load(Some(config_path.as_path())).is_err());
    }

    #[test]
    fn test_config_loader_reload() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("skillet.toml");
        std::fs::write(&config_path, "[lint]\nmax_skill_lines = 400\n").unwrap();

        let loader = ConfigLoader::load(Some(config_path.as_path())).unwrap();
        assert_eq!(loader.get().lint.max_skill_lines, 400);

        std::fs::write(&config_path, "[lint]\nmax_skill_lines = 900\n").unwrap();
        loader.reload().unwrap();
        assert_eq!(loader.get().lint.max_skill_lines, 900);
    }

    // ── JSON roundtrip ─────────────────────────────────────────

    #[test]
    fn test_config_json_roundtrip() {
        let config = SkilletConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let restored: SkilletConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.logging.level, config.logging.level);
    }
}
