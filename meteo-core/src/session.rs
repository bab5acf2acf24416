use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use std::{collections::HashMap, fmt::Debug, fs, path::PathBuf};
use tracing::debug;

/// Key holding the latitude as typed by the user.
pub const LAT_KEY: &str = "lat";
/// Key holding the longitude as typed by the user.
pub const LON_KEY: &str = "lon";

/// String key-value state that survives between page loads.
pub trait SessionStore: Debug {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Volatile store, lives as long as the value does.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store persisted as a flat TOML table, rewritten on every `set`.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`. A missing or unreadable file means the
    /// session has not started yet and yields an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = fs::read_to_string(&path)
            .ok()
            .and_then(|contents| match toml::from_str(&contents) {
                Ok(entries) => Some(entries),
                Err(err) => {
                    debug!(
                        path = %path.display(),
                        error = %err,
                        "Ignoring unreadable session file"
                    );
                    None
                }
            })
            .unwrap_or_default();

        Self { path, entries }
    }

    /// Open the store at its default location in the platform cache directory.
    pub fn open_default() -> Result<Self> {
        Ok(Self::open(Self::default_path()?))
    }

    pub fn default_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "meteo", "meteo")
            .ok_or_else(|| anyhow!("Could not determine platform cache directory"))?;

        Ok(dirs.cache_dir().join("session.toml"))
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create session directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string(&self.entries).context("Failed to serialize session state")?;

        fs::write(&self.path, toml)
            .with_context(|| format!("Failed to write session file: {}", self.path.display()))
    }
}

impl SessionStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }
}
