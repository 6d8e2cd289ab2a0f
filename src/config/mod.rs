use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    pub config_path: PathBuf,
    /// Optional word list for the suggestion engine; the built-in
    /// vocabulary is used when unset.
    pub dictionary_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        Self {
            config_path: PathBuf::from(&home).join(".config/signtext/config.toml"),
            dictionary_path: None,
        }
    }
}

impl Config {
    pub fn load() -> Self {
        let mut config = Config::default();

        if let Some(parent) = config.config_path.parent() {
            let _ = fs::create_dir_all(parent);
        }

        if !config.config_path.exists() {
            let _ = config.save();
            return config;
        }

        match fs::read_to_string(&config.config_path) {
            Ok(contents) => match contents.parse::<toml_edit::DocumentMut>() {
                Ok(doc) => {
                    if let Some(path) = doc.get("dictionary_path").and_then(|v| v.as_str()) {
                        config.dictionary_path = Some(PathBuf::from(path));
                    }
                }
                Err(e) => warn!("ignoring malformed config file: {}", e),
            },
            Err(e) => warn!("could not read config file: {}", e),
        }

        config
    }

    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let mut doc = toml_edit::DocumentMut::new();
        if let Some(path) = &self.dictionary_path {
            doc["dictionary_path"] = toml_edit::value(path.to_string_lossy().as_ref());
        }

        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(
            &self.config_path,
            format!("# signtext configuration file.\n{}", doc),
        )?;
        Ok(())
    }
}
