//! Chargement du binaire à désassembler

use crate::error::{DisasmError, Result};
use log::info;
use std::path::Path;

/// Image binaire chargée intégralement en mémoire
#[derive(Debug, Clone)]
pub struct Rom {
    /// Données de la ROM
    data: Vec<u8>,

    /// Nom/identifiant de la ROM
    name: String,

    /// CRC32 pour identifier l'image dans les logs
    crc32: u32,
}

impl Rom {
    /// Crée une ROM à partir de données
    pub fn new(data: Vec<u8>) -> Self {
        let crc32 = crc32fast::hash(&data);
        Self {
            data,
            name: String::new(),
            crc32,
        }
    }

    /// Crée une ROM avec un nom spécifique
    pub fn with_name(data: Vec<u8>, name: String) -> Self {
        let mut rom = Self::new(data);
        rom.name = name;
        rom
    }

    /// Charge une ROM depuis un fichier
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|e| DisasmError::unavailable(path, e))?;
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
            .to_string();

        let rom = Self::with_name(data, name);
        info!(
            "ROM {} chargée: {} octets, CRC32 {:08x}",
            rom.name,
            rom.len(),
            rom.crc32
        );
        Ok(rom)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn crc32(&self) -> u32 {
        self.crc32
    }

    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    /// Cède les données, par exemple au moteur de désassemblage
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}
