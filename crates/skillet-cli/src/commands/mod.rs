use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use std::path::PathBuf;

use skillet_config::ConfigLoader;

mod corpus;
mod grid;
mod lint;
mod scaffold;

/// 🍳 Skillet: lint, index, and match Markdown skill corpora
#[derive(Parser)]
#[command(name = "skillet", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to skillet.toml config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level override (e.g. debug, info, warn, error)
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all log output (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a skill corpus (frontmatter, structure, line budget)
    Lint {
        /// Corpus root or a single skill directory (default: configured root)
        path: Option<PathBuf>,

        /// Output the report as JSON
        #[arg(long)]
        json: bool,

        /// Treat warnings as failures
        #[arg(long)]
        strict: bool,

        /// Re-run the lint when files under the corpus change
        #[arg(long)]
        watch: bool,
    },
    /// List skills in the corpus
    List {
        /// Filter by category
        #[arg(long)]
        category: Option<String>,

        /// Filter by language
        #[arg(long)]
        language: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one skill's metadata and instructions
    Show {
        /// Skill name (frontmatter name, or the directory name)
        name: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Rank skills against a task description by trigger keywords
    Match {
        /// Free-text task description
        query: String,

        /// Number of matches to show
        #[arg(short = 'n', long, default_value = "5")]
        limit: usize,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Emit the skill catalog an assistant consumes
    Catalog {
        /// Output the JSON catalog instead of the prompt block
        #[arg(long)]
        json: bool,
    },
    /// Scaffold a new skill directory (SKILL.md + reference/playbook.md)
    New {
        /// Skill name (becomes the directory name)
        name: String,

        /// Skill category
        #[arg(long)]
        category: Option<String>,

        /// One-line description
        #[arg(long)]
        description: Option<String>,

        /// Language the skill covers (repeatable)
        #[arg(long = "language")]
        languages: Vec<String>,

        /// Trigger keyword (repeatable)
        #[arg(long = "trigger")]
        triggers: Vec<String>,

        /// Skip prompts and fill missing fields with placeholders
        #[arg(long)]
        defaults: bool,
    },
    /// Validate cloud-grid capabilities JSON
    Caps {
        /// Path to a capabilities JSON file
        file: Option<PathBuf>,

        /// Inline JSON instead of a file
        #[arg(long)]
        inline: Option<String>,

        /// Output diagnostics as JSON
        #[arg(long)]
        json: bool,
    },
    /// Lint a Playwright config file
    Pwconfig {
        /// Path to the config (default: playwright.config.ts)
        path: Option<PathBuf>,

        /// Output diagnostics as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show current configuration
    Config {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Set a config value in skillet.toml (dot-notation key)
    Set {
        /// Config key in dot notation (e.g. lint.max_skill_lines)
        key: String,
        /// Value to set
        value: String,
    },
    /// Write a commented starter skillet.toml in the current directory
    Init,
    /// Generate shell completions for bash, zsh, or fish
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Cli {
    pub fn run(self) -> skillet_core::Result<()> {
        // Load config first so we can use it for log level and format
        let config_loader = ConfigLoader::load(self.config.as_deref())?;
        let config = config_loader.get();

        // Resolve log level: --verbose > --quiet > --log-level > config
        let log_level = if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            self.log_level.as_deref().unwrap_or(&config.logging.level)
        };

        // Logs go to stderr so JSON output modes keep stdout clean
        let env_filter = || {
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level))
        };
        match config.logging.format.as_str() {
            "json" => tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(std::io::stderr)
                .json()
                .with_target(true)
                .init(),
            "compact" => tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(std::io::stderr)
                .compact()
                .with_target(false)
                .init(),
            _ => tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(std::io::stderr)
                .with_target(false)
                .init(),
        }

        match self.command {
            Commands::Lint {
                path,
                json,
                strict,
                watch,
            } => lint::cmd_lint(config, path, json, strict, watch, config_loader),
            Commands::List {
                category,
                language,
                json,
            } => corpus::cmd_list(config, category, language, json),
            Commands::Show { name, json } => corpus::cmd_show(config, name, json),
            Commands::Match { query, limit, json } => {
                corpus::cmd_match(config, query, limit, json)
            }
            Commands::Catalog { json } => corpus::cmd_catalog(config, json),
            Commands::New {
                name,
                category,
                description,
                languages,
                triggers,
                defaults,
            } => scaffold::cmd_new(config, name, category, description, languages, triggers, defaults),
            Commands::Caps { file, inline, json } => grid::cmd_caps(file, inline, json),
            Commands::Pwconfig { path, json } => grid::cmd_pwconfig(path, json),
            Commands::Config { json } => Self::cmd_config(config, json),
            Commands::Set { key, value } => {
                Self::cmd_config_set(config_loader.path().to_path_buf(), key, value)
            }
            Commands::Init => scaffold::cmd_init(),
            Commands::Completions { shell } => Self::cmd_completions(shell),
        }
    }

    fn cmd_config(config: skillet_config::SkilletConfig, json: bool) -> skillet_core::Result<()> {
        if json {
            println!("{}", serde_json::to_string_pretty(&config)?);
        } else {
            println!(
                "{}",
                toml::to_string_pretty(&config)
                    .map_err(|e| skillet_core::SkilletError::Config(e.to_string()))?
            );
        }
        Ok(())
    }

    fn cmd_config_set(config_path: PathBuf, key: String, value: String) -> skillet_core::Result<()> {
        if !config_path.is_file() {
            return Err(skillet_core::SkilletError::Config(
                "No config file found. Run 'skillet init' first.".into(),
            ));
        }

        let content = std::fs::read_to_string(&config_path).map_err(|e| {
            skillet_core::SkilletError::Config(format!(
                "Cannot read {}: {}",
                config_path.display(),
                e
            ))
        })?;

        let mut doc = content.parse::<toml_edit::DocumentMut>().map_err(|e| {
            skillet_core::SkilletError::Config(format!(
                "Invalid TOML in {}: {}",
                config_path.display(),
                e
            ))
        })?;

        // Parse dot-notation key into table path, e.g. "lint.max_skill_lines"
        let parts: Vec<&str> = key.split('.').collect();
        if parts.is_empty() {
            return Err(skillet_core::SkilletError::Config("Empty key".into()));
        }

        // Navigate to the correct table, creating intermediate tables as needed
        let table_parts = &parts[..parts.len() - 1];
        let leaf_key = parts[parts.len() - 1];

        let mut table: &mut toml_edit::Item = doc.as_item_mut();
        for part in table_parts {
            if table.get(part).is_none() {
                table[part] = toml_edit::Item::Table(toml_edit::Table::new());
            }
            table = &mut table[part];
        }

        // Infer the value type: bool, integer, float, or string
        let toml_value = if value == "true" {
            toml_edit::value(true)
        } else if value == "false" {
            toml_edit::value(false)
        } else if let Ok(i) = value.parse::<i64>() {
            toml_edit::value(i)
        } else if let Ok(f) = value.parse::<f64>() {
            toml_edit::value(f)
        } else {
            toml_edit::value(&value)
        };

        let old_value = table.get(leaf_key).map(|v| v.to_string());
        table[leaf_key] = toml_value;

        std::fs::write(&config_path, doc.to_string()).map_err(|e| {
            skillet_core::SkilletError::Config(format!(
                "Cannot write {}: {}",
                config_path.display(),
                e
            ))
        })?;

        match old_value {
            Some(old) => println!("✅ {} = {} (was {})", key, value, old.trim()),
            None => println!("✅ {key} = {value} (new)"),
        }

        Ok(())
    }

    fn cmd_completions(shell: Shell) -> skillet_core::Result<()> {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "skillet", &mut std::io::stdout());
        Ok(())
    }
}
