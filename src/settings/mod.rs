//! Durable key-value settings backing the theme store.

use anyhow::Context;
use directories::ProjectDirs;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// String key-value storage. The theme store treats writes as best-effort;
/// implementations report failures, they do not panic.
pub trait Settings {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()>;
    fn remove(&mut self, key: &str) -> anyhow::Result<()>;
}

pub fn default_settings_path() -> anyhow::Result<PathBuf> {
    let proj =
        ProjectDirs::from("dev", "hearth", "hearth-theme").context("ProjectDirs unavailable")?;
    Ok(proj.config_dir().join("settings.toml"))
}

/// Settings stored as a flat TOML table on disk.
pub struct FileSettings {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileSettings {
    pub fn open(override_path: Option<&Path>) -> anyhow::Result<Self> {
        let path = match override_path {
            Some(p) => p.to_path_buf(),
            None => default_settings_path()?,
        };

        // A missing or unreadable file is the fresh-install case: start from
        // an empty table instead of failing startup.
        let values = match fs::read_to_string(&path) {
            Ok(raw) => match toml::from_str(&raw) {
                Ok(values) => values,
                Err(err) => {
                    tracing::warn!("corrupt settings file {}: {err}", path.display());
                    BTreeMap::new()
                }
            },
            Err(err) => {
                if err.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!("unreadable settings file {}: {err}", path.display());
                }
                BTreeMap::new()
            }
        };

        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create dir {}", parent.display()))?;
        }
        let raw = toml::to_string_pretty(&self.values).context("serialize settings")?;
        fs::write(&self.path, raw).with_context(|| format!("write {}", self.path.display()))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let _ = fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600));
        }
        Ok(())
    }
}

impl Settings for FileSettings {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.persist()
    }

    fn remove(&mut self, key: &str) -> anyhow::Result<()> {
        if self.values.remove(key).is_some() {
            self.persist()?;
        }
        Ok(())
    }
}

/// In-memory settings for tests. `fail_writes` simulates a full or broken
/// backing store so the swallow-on-write-failure path can be exercised.
#[derive(Debug, Default)]
pub struct MemorySettings {
    values: BTreeMap<String, String>,
    pub fail_writes: bool,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: &[(&str, &str)]) -> Self {
        Self {
            values: entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            fail_writes: false,
        }
    }
}

impl Settings for MemorySettings {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        if self.fail_writes {
            anyhow::bail!("storage quota exceeded");
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> anyhow::Result<()> {
        if self.fail_writes {
            anyhow::bail!("storage quota exceeded");
        }
        self.values.remove(key);
        Ok(())
    }
}
