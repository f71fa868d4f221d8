//! Configuration du désassembleur

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;

/// Fichier de configuration lu dans le répertoire courant
pub const DEFAULT_CONFIG_PATH: &str = "disasm.toml";

/// Configuration principale du désassembleur
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisasmConfig {
    pub table: TableConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Chemin du fichier JSON de la table d'instructions
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filtre par défaut ("error", "warn", "info", "debug", "trace")
    pub level: String,

    /// Fichier de log, stderr si absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            path: "instructions.json".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            file: None,
        }
    }
}

impl DisasmConfig {
    pub fn load_from_file(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: DisasmConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &str) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    pub fn load_or_default(path: &str) -> Self {
        Self::load_from_file(path).unwrap_or_default()
    }
}
