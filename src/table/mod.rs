//! Table des instructions Intel 8080
//!
//! Associe chacun des 256 opcodes à son mnémonique et à sa longueur encodée.
//! La table est chargée une seule fois puis partagée en lecture seule par le
//! moteur de désassemblage.

use crate::error::{DisasmError, Result};
use log::{debug, info};
use serde::Deserialize;
use std::fmt;
use std::path::Path;

/// Nombre d'opcodes d'un jeu d'instructions 8 bits
pub const OPCODE_COUNT: usize = 256;

/// Table 8080 livrée avec le désassembleur
const INTEL_8080_JSON: &str = include_str!("../../instructions.json");

/// Longueur encodée d'une instruction, opcode compris
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstructionLength {
    One,
    Two,
    Three,
}

impl InstructionLength {
    /// Retourne la taille en octets
    pub fn bytes(self) -> usize {
        match self {
            InstructionLength::One => 1,
            InstructionLength::Two => 2,
            InstructionLength::Three => 3,
        }
    }

    /// Convertit une longueur brute, en signalant l'opcode fautif
    pub fn from_raw(opcode: u8, length: i64) -> Result<Self> {
        match length {
            1 => Ok(InstructionLength::One),
            2 => Ok(InstructionLength::Two),
            3 => Ok(InstructionLength::Three),
            _ => Err(DisasmError::UndefinedLength { opcode, length }),
        }
    }
}

/// Description immuable d'un opcode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructionSpec {
    /// Mnémonique, espacement et nom d'opérande compris (ex: `"mvi    c,"`)
    pub mnemonic: String,

    /// Longueur totale de l'instruction
    pub length: InstructionLength,
}

impl InstructionSpec {
    pub fn new(mnemonic: impl Into<String>, length: InstructionLength) -> Self {
        Self {
            mnemonic: mnemonic.into(),
            length,
        }
    }

    /// Premier mot du mnémonique, vide si le texte ne contient que des blancs
    pub fn leading_token(&self) -> &str {
        self.mnemonic.split_whitespace().next().unwrap_or("")
    }
}

/// Entrée brute du format JSON: `["mvi    c,", 2]`
#[derive(Debug, Deserialize)]
struct RawEntry(String, i64);

/// Table complète opcode -> instruction
#[derive(Clone, PartialEq, Eq)]
pub struct InstructionTable {
    specs: Box<[InstructionSpec; OPCODE_COUNT]>,
}

impl InstructionTable {
    /// Construit une table à partir de paires (mnémonique, longueur)
    ///
    /// La position dans la séquence donne l'opcode. Le nombre d'entrées est
    /// vérifié avant les longueurs.
    pub fn from_entries<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, i64)>,
        S: Into<String>,
    {
        let raw: Vec<(String, i64)> = entries
            .into_iter()
            .map(|(mnemonic, length)| (mnemonic.into(), length))
            .collect();

        if raw.len() != OPCODE_COUNT {
            return Err(DisasmError::IncompleteTable { found: raw.len() });
        }

        let mut specs = Vec::with_capacity(OPCODE_COUNT);
        for (opcode, (mnemonic, length)) in (0..=u8::MAX).zip(raw) {
            let length = InstructionLength::from_raw(opcode, length)?;
            specs.push(InstructionSpec::new(mnemonic, length));
        }

        let specs: Box<[InstructionSpec; OPCODE_COUNT]> = specs
            .into_boxed_slice()
            .try_into()
            .map_err(|rest: Box<[InstructionSpec]>| DisasmError::IncompleteTable {
                found: rest.len(),
            })?;

        Ok(Self { specs })
    }

    /// Analyse le format JSON externe (tableau de 256 paires)
    pub fn from_json_str(json: &str) -> Result<Self> {
        let entries: Vec<RawEntry> =
            serde_json::from_str(json).map_err(|e| DisasmError::unavailable("<json>", e))?;
        Self::from_entries(entries.into_iter().map(|RawEntry(m, l)| (m, l)))
    }

    /// Charge la table depuis un fichier JSON
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| DisasmError::unavailable(path, e))?;

        let table = match Self::from_json_str(&content) {
            Err(DisasmError::SourceUnavailable { source, .. }) => {
                return Err(DisasmError::SourceUnavailable {
                    path: path.to_path_buf(),
                    source,
                })
            }
            other => other?,
        };

        info!("Table d'instructions chargée depuis {}", path.display());
        Ok(table)
    }

    /// Table Intel 8080 intégrée au binaire
    pub fn intel_8080() -> Result<Self> {
        debug!("Utilisation de la table 8080 intégrée");
        Self::from_json_str(INTEL_8080_JSON)
    }

    /// Description de l'opcode donné, toujours définie
    #[inline]
    pub fn spec_for(&self, opcode: u8) -> &InstructionSpec {
        &self.specs[opcode as usize]
    }

    /// Nombre d'entrées (toujours 256)
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Parcourt les entrées par ordre d'opcode
    pub fn iter(&self) -> impl Iterator<Item = (u8, &InstructionSpec)> {
        (0..=u8::MAX).zip(self.specs.iter())
    }
}

impl fmt::Debug for InstructionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstructionTable")
            .field("entries", &self.specs.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nop_entries(count: usize) -> Vec<(String, i64)> {
        (0..count).map(|_| ("nop".to_string(), 1)).collect()
    }

    #[test]
    fn test_intel_8080_table_is_total() {
        let table = InstructionTable::intel_8080().unwrap();
        assert_eq!(table.len(), OPCODE_COUNT);

        for opcode in 0..=u8::MAX {
            let spec = table.spec_for(opcode);
            assert!((1..=3).contains(&spec.length.bytes()));
            assert!(!spec.mnemonic.is_empty());
        }
    }

    #[test]
    fn test_intel_8080_known_opcodes() {
        let table = InstructionTable::intel_8080().unwrap();

        assert_eq!(table.spec_for(0x00).mnemonic, "nop");
        assert_eq!(table.spec_for(0x3e).mnemonic, "mvi    a,");
        assert_eq!(table.spec_for(0x3e).length, InstructionLength::Two);
        assert_eq!(table.spec_for(0x21).leading_token(), "lxi");
        assert_eq!(table.spec_for(0x21).length, InstructionLength::Three);
        assert_eq!(table.spec_for(0xd3).leading_token(), "out");
        assert_eq!(table.spec_for(0xdb).leading_token(), "in");
        assert_eq!(table.spec_for(0xc3).length, InstructionLength::Three);
    }

    #[test]
    fn test_incomplete_table_rejected() {
        for count in [0, 255, 257] {
            match InstructionTable::from_entries(nop_entries(count)) {
                Err(DisasmError::IncompleteTable { found }) => assert_eq!(found, count),
                other => panic!("Résultat inattendu pour {} entrées: {:?}", count, other),
            }
        }
    }

    #[test]
    fn test_undefined_length_rejected() {
        let mut entries = nop_entries(OPCODE_COUNT);
        entries[0x42] = ("bad".to_string(), 4);

        match InstructionTable::from_entries(entries) {
            Err(DisasmError::UndefinedLength { opcode, length }) => {
                assert_eq!(opcode, 0x42);
                assert_eq!(length, 4);
            }
            other => panic!("Résultat inattendu: {:?}", other),
        }

        let mut entries = nop_entries(OPCODE_COUNT);
        entries[0xff] = ("bad".to_string(), 0);
        assert!(matches!(
            InstructionTable::from_entries(entries),
            Err(DisasmError::UndefinedLength { opcode: 0xff, length: 0 })
        ));
    }

    #[test]
    fn test_count_checked_before_lengths() {
        let mut entries = nop_entries(10);
        entries[0] = ("bad".to_string(), 9);
        assert!(matches!(
            InstructionTable::from_entries(entries),
            Err(DisasmError::IncompleteTable { found: 10 })
        ));
    }

    #[test]
    fn test_malformed_json_is_unavailable() {
        assert!(matches!(
            InstructionTable::from_json_str("not json"),
            Err(DisasmError::SourceUnavailable { .. })
        ));
        assert!(matches!(
            InstructionTable::from_json_str(r#"[["nop", "un"]]"#),
            Err(DisasmError::SourceUnavailable { .. })
        ));
    }

    #[test]
    fn test_leading_token() {
        assert_eq!(InstructionSpec::new("mvi    c,", InstructionLength::Two).leading_token(), "mvi");
        assert_eq!(InstructionSpec::new("nop", InstructionLength::One).leading_token(), "nop");
        assert_eq!(InstructionSpec::new("   ", InstructionLength::One).leading_token(), "");
    }
}
