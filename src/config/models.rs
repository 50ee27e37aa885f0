use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub trait ConfigItem<T> {
    fn get_value(&self) -> &T;
    fn description(&self) -> &str;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileLoggingConfigItem {
    pub value: bool,
    #[serde(default)]
    pub description: String,
}

impl Default for FileLoggingConfigItem {
    fn default() -> Self {
        Self {
            value: false,
            description: "Write binding traces to a log file.".into(),
        }
    }
}

impl ConfigItem<bool> for FileLoggingConfigItem {
    fn get_value(&self) -> &bool {
        &self.value
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogDirConfigItem {
    pub value: PathBuf,
    #[serde(default)]
    pub description: String,
}

impl Default for LogDirConfigItem {
    fn default() -> Self {
        Self {
            value: PathBuf::from("logs"),
            description: "Directory that receives log files.".into(),
        }
    }
}

impl ConfigItem<PathBuf> for LogDirConfigItem {
    fn get_value(&self) -> &PathBuf {
        &self.value
    }
    fn description(&self) -> &str {
        &self.description
    }
}

impl LogDirConfigItem {
    pub fn path(&self) -> &Path {
        &self.value
    }
}
