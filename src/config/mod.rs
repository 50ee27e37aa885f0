pub mod models;

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::command::signature::CommandSignature;
use crate::command::table::CommandTable;
use crate::config::models::{ConfigItem, FileLoggingConfigItem, LogDirConfigItem};
use crate::errors::{Error, Result};
use crate::resolve::parameter::TypeKey;
use crate::resolve::registry::ResolverRegistry;

pub const DEFAULT_CONFIG_PATH: &str = "argbind.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub file_logging_enabled: FileLoggingConfigItem,
    #[serde(default)]
    pub log_dir: LogDirConfigItem,
    /// Choice types: type name -> accepted spellings.
    #[serde(default)]
    pub choices: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub commands: Vec<CommandSignature>,
}

#[derive(Debug, Clone)]
pub struct Config {
    path: Option<PathBuf>,
    data: ConfigFile,
}

impl Config {
    pub fn load_default() -> Result<Self> {
        Self::load_from(DEFAULT_CONFIG_PATH)
    }

    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Err(Error::config(format!(
                "Configuration file '{}' not found.",
                path.display()
            )));
        }
        let text = fs::read_to_string(&path)
            .map_err(|e| Error::config(format!("Failed to read {}: {}", path.display(), e)))?;
        let data: ConfigFile = serde_json::from_str(&text)
            .map_err(|e| Error::config(format!("Invalid JSON in '{}': {}", path.display(), e)))?;
        Ok(Self {
            path: Some(path),
            data,
        })
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let data: ConfigFile = serde_json::from_str(text)
            .map_err(|e| Error::config(format!("Invalid JSON: {e}")))?;
        Ok(Self { path: None, data })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn view(&self) -> &ConfigFile {
        &self.data
    }

    pub fn file_logging_enabled(&self) -> bool {
        *self.data.file_logging_enabled.get_value()
    }

    pub fn log_dir(&self) -> &Path {
        self.data.log_dir.path()
    }

    /// Validates every declared signature and indexes it by name and alias.
    pub fn command_table(&self) -> Result<CommandTable> {
        let mut table = CommandTable::new();
        for signature in &self.data.commands {
            table.register(signature.clone())?;
        }
        Ok(table)
    }

    /// Registers each declared choice type on `registry`.
    pub fn install_choices(&self, registry: &mut ResolverRegistry) -> Result<()> {
        for (name, choices) in &self.data.choices {
            let key = TypeKey::new(name);
            if key.builtin().is_some() {
                return Err(Error::config(format!(
                    "Choice type '{name}' shadows the built-in type '{key}'."
                )));
            }
            if choices.is_empty() {
                return Err(Error::config(format!(
                    "Choice type '{name}' declares no choices."
                )));
            }
            registry.register_choices(key, choices.iter().cloned());
        }
        Ok(())
    }
}
