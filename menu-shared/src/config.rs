use std::fs;
use std::path::Path;
use std::sync::RwLock;

use anyhow::Context;
use once_cell::sync::OnceCell;
use serde::de::DeserializeOwned;
use toml::Table;

static GLOBAL_CONFIG: OnceCell<ConfigStore> = OnceCell::new();

/// Parsed configuration file, split into named sections.
///
/// Sections are deserialized lazily; a section that is missing or does not
/// match the requested type yields `T::default()`.
#[derive(Debug, Default)]
pub struct ConfigStore {
    table: RwLock<Table>,
}

impl ConfigStore {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();

        let content = if path.exists() {
            log::info!("Loading config from {:?}", path);
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read config: {:?}", path))?
        } else {
            log::warn!("Config file not found at {:?}, using defaults.", path);
            String::new()
        };

        Ok(Self::from_toml(&content))
    }

    pub fn from_toml(content: &str) -> Self {
        let table: Table = toml::from_str(content).unwrap_or_else(|e| {
            log::error!("Config syntax error: {}, using empty config.", e);
            Table::new()
        });

        Self { table: RwLock::new(table) }
    }

    pub fn section<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        let guard = match self.table.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        match guard.get(key) {
            Some(value) => value.clone().try_into().unwrap_or_else(|e| {
                log::warn!("Config section '[{}]' mismatch: {}. Using default.", key, e);
                T::default()
            }),
            None => T::default(),
        }
    }

    pub fn has_section(&self, key: &str) -> bool {
        self.table
            .read()
            .map(|t| t.contains_key(key))
            .unwrap_or(false)
    }
}

pub fn init<P: AsRef<Path>>(path: P) -> anyhow::Result<()> {
    let store = ConfigStore::load(path)?;
    install(store)
}

pub fn init_from_str(content: &str) -> anyhow::Result<()> {
    install(ConfigStore::from_toml(content))
}

fn install(store: ConfigStore) -> anyhow::Result<()> {
    GLOBAL_CONFIG
        .set(store)
        .map_err(|_| anyhow::anyhow!("Config already initialized"))
}

/// Reads a section from the process-wide store.
///
/// Before `init` has run every section reads as its default.
pub fn get<T: DeserializeOwned + Default>(key: &str) -> T {
    match GLOBAL_CONFIG.get() {
        Some(store) => store.section(key),
        None => {
            log::warn!("Config read of '[{}]' before init, using default.", key);
            T::default()
        }
    }
}
