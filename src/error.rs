//! Erreurs du désassembleur

use std::path::PathBuf;
use thiserror::Error;

/// Erreurs pouvant survenir au chargement ou pendant le désassemblage
#[derive(Debug, Error)]
pub enum DisasmError {
    /// La table d'instructions ou le binaire d'entrée est illisible
    #[error("source indisponible: {}: {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// La table ne contient pas exactement 256 entrées
    #[error("jeu d'instructions incomplet: {found} entrées au lieu de 256")]
    IncompleteTable { found: usize },

    /// Une entrée déclare une longueur hors de {1, 2, 3}
    #[error("longueur indéfinie {length} pour l'opcode 0x{opcode:02x}")]
    UndefinedLength { opcode: u8, length: i64 },

    /// Les octets d'opérande dépassent la fin du flux
    #[error(
        "instruction tronquée à l'offset 0x{offset:04x}: {length} octets requis, {available} disponibles"
    )]
    TruncatedInstruction {
        offset: usize,
        length: usize,
        available: usize,
    },

    /// Échec d'écriture vers la sortie
    #[error("erreur d'écriture: {0}")]
    Output(#[from] std::io::Error),
}

impl DisasmError {
    /// Construit une erreur de source indisponible pour un chemin donné
    pub fn unavailable<E>(path: impl Into<PathBuf>, source: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::SourceUnavailable {
            path: path.into(),
            source: source.into(),
        }
    }

    /// Indique si l'erreur survient avant tout décodage
    pub fn is_startup_error(&self) -> bool {
        matches!(
            self,
            Self::SourceUnavailable { .. } | Self::IncompleteTable { .. } | Self::UndefinedLength { .. }
        )
    }
}

/// Résultat spécialisé du désassembleur
pub type Result<T> = std::result::Result<T, DisasmError>;
