use parking_lot::RwLock;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

use crate::schema::SkilletConfig;

/// Loads the skillet configuration and hands out snapshots.
pub struct ConfigLoader {
    config: Arc<RwLock<SkilletConfig>>,
    config_path: PathBuf,
}

impl ConfigLoader {
    /// Resolve the config path: explicit path > SKILLET_CONFIG env >
    /// ./skillet.toml
    pub fn resolve_path(explicit: Option<&Path>) -> PathBuf {
        if let Some(p) = explicit {
            return p.to_path_buf();
        }
        if let Ok(p) = std::env::var("SKILLET_CONFIG") {
            return PathBuf::from(p);
        }
        PathBuf::from("skillet.toml")
    }

    /// Load the config from disk, falling back to defaults.
    ///
    /// A missing file is fine (defaults apply); a file that exists but
    /// fails to parse or validate is an error.
    pub fn load(path: Option<&Path>) -> skillet_core::Result<Self> {
        let config_path = Self::resolve_path(path);
        let config = if config_path.exists() {
            info!(?config_path, "loading configuration");
            let raw = std::fs::read_to_string(&config_path)?;
            toml::from_str::<SkilletConfig>(&raw).map_err(|e| {
                skillet_core::SkilletError::Config(format!(
                    "failed to parse {}: {}",
                    config_path.display(),
                    e
                ))
            })?
        } else {
            warn!(?config_path, "config file not found, using defaults");
            SkilletConfig::default()
        };

        let config = Self::apply_env_overrides(config);

        // Log warnings, fail on errors.
        match config.validate() {
            Ok(findings) => {
                for f in &findings {
                    warn!("{}", f);
                }
            }
            Err(e) => {
                return Err(skillet_core::SkilletError::Config(e));
            }
        }

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            config_path,
        })
    }

    /// Get a read snapshot of the current config.
    pub fn get(&self) -> SkilletConfig {
        self.config.read().clone()
    }

    /// Get a shared handle (for watchers).
    pub fn shared(&self) -> Arc<RwLock<SkilletConfig>> {
        Arc::clone(&self.config)
    }

    /// Path the config was resolved to.
    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Apply env var overrides (SKILLET_CORPUS_ROOT, SKILLET_LOG_LEVEL).
    fn apply_env_overrides(mut config: SkilletConfig) -> SkilletConfig {
        if let Ok(v) = std::env::var("SKILLET_CORPUS_ROOT") {
            config.corpus.root = PathBuf::from(v);
        }
        if let Ok(v) = std::env::var("SKILLET_LOG_LEVEL") {
            config.logging.level = v;
        }
        config
    }

    /// Reload the config from disk.
    ///
    /// Used by `skillet lint --watch` when the config file itself changes.
    pub fn reload(&self) -> skillet_core::Result<()> {
        if !self.config_path.exists() {
            return Err(skillet_core::SkilletError::Config(format!(
                "config file not found: {}",
                self.config_path.display()
            )));
        }
        let raw = std::fs::read_to_string(&self.config_path)?;
        let new_config = toml::from_str::<SkilletConfig>(&raw).map_err(|e| {
            skillet_core::SkilletError::Config(format!(
                "failed to parse {}: {}",
                self.config_path.display(),
                e
            ))
        })?;
        let new_config = Self::apply_env_overrides(new_config);
        *self.config.write() = new_config;
        info!("configuration reloaded");
        Ok(())
    }
}
