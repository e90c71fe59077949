use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;
use tsmodel_common::FileSystem;
use tsmodel_generator::{GenerationOptions, ModelRegistration, ModelRegistry, ModuleLayout};

pub const DEFAULT_CONFIG_NAME: &str = "tsmodel.config.json";

/// tsmodel configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory containing JSON type descriptors
    #[serde(default = "default_descriptor_dir")]
    pub descriptor_dir: String,

    /// Directory generated `.ts` files are written to
    #[serde(default = "default_out_dir")]
    pub out_dir: String,

    #[serde(default)]
    pub layout: ModuleLayout,

    #[serde(default)]
    pub options: GenerationOptions,

    /// Types to generate; empty means every descriptor
    #[serde(default)]
    pub models: Vec<ModelRegistration>,
}

fn default_descriptor_dir() -> String {
    "models".to_string()
}

fn default_out_dir() -> String {
    "generated".to_string()
}

impl Config {
    /// Load config from a project directory, falling back to defaults
    pub fn load(fs: &dyn FileSystem, root: &Path) -> Result<Self> {
        let config_path = root.join(DEFAULT_CONFIG_NAME);

        if fs.exists(&config_path) {
            let content = fs.read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Invalid config {}", config_path.display()))?;
            debug!("loaded config from {}", config_path.display());
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn get_descriptor_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.descriptor_dir)
    }

    pub fn get_out_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.out_dir)
    }

    pub fn registry(&self) -> Result<ModelRegistry> {
        Ok(ModelRegistry::from_registrations(self.models.iter().cloned())?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            descriptor_dir: default_descriptor_dir(),
            out_dir: default_out_dir(),
            layout: ModuleLayout::PerType,
            options: GenerationOptions::default(),
            models: vec![],
        }
    }
}
