//! Moteur de désassemblage linéaire
//!
//! Parcourt le flux d'octets du début à la fin en supposant que chaque
//! position atteinte est le début d'une instruction valide. Une instruction
//! dont les opérandes dépassent la fin du flux est rejetée
//! (`TruncatedInstruction`) et arrête le désassemblage: les lignes déjà
//! produites restent valides.

use super::line::DecodedLine;
use super::operand::Operand;
use crate::error::{DisasmError, Result};
use crate::table::InstructionTable;
use log::{debug, error};
use std::io::Write;

/// Statistiques d'un désassemblage complet
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisassemblyStats {
    /// Nombre d'instructions émises
    pub instructions: usize,

    /// Nombre d'octets consommés
    pub bytes: usize,
}

/// Désassembleur d'un flux d'octets
///
/// La table est injectée à la construction; le flux et le curseur
/// appartiennent exclusivement au désassembleur. Une fois le flux épuisé ou
/// une erreur rencontrée, il faut en créer un nouveau pour recommencer.
#[derive(Debug)]
pub struct Disassembler<'t> {
    table: &'t InstructionTable,
    data: Vec<u8>,
    cursor: usize,
    halted: bool,
}

impl<'t> Disassembler<'t> {
    /// Crée un désassembleur positionné au début du flux
    pub fn new(table: &'t InstructionTable, data: impl Into<Vec<u8>>) -> Self {
        Self {
            table,
            data: data.into(),
            cursor: 0,
            halted: false,
        }
    }

    /// Position de lecture courante
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Longueur du flux
    pub fn end(&self) -> usize {
        self.data.len()
    }

    /// Vrai après une erreur de décodage
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Décode l'instruction sous le curseur
    ///
    /// Retourne `Ok(None)` en fin de flux ou après un arrêt sur erreur.
    pub fn step(&mut self) -> Result<Option<DecodedLine<'t>>> {
        if self.halted || self.cursor >= self.data.len() {
            return Ok(None);
        }

        let offset = self.cursor;
        let table: &'t InstructionTable = self.table;
        let spec = table.spec_for(self.data[offset]);
        let length = spec.length.bytes();
        let available = self.data.len() - offset;

        if length > available {
            self.halted = true;
            return Err(DisasmError::TruncatedInstruction {
                offset,
                length,
                available,
            });
        }

        let operand = Operand::decode(spec, &self.data[offset + 1..offset + length]);
        self.cursor += length;

        Ok(Some(DecodedLine::new(offset, &spec.mnemonic, operand)))
    }

    /// Écrit le listing complet dans `out`, une ligne par instruction
    ///
    /// Chaque ligne est aussi envoyée au log au niveau `debug`.
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<DisassemblyStats> {
        let mut stats = DisassemblyStats::default();

        loop {
            let line = match self.step() {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(e) => {
                    out.flush()?;
                    error!("{}", e);
                    return Err(e);
                }
            };

            let text = line.to_string();
            writeln!(out, "{}", text)?;
            debug!("{}", text);
            stats.instructions += 1;
        }

        stats.bytes = self.cursor;
        out.flush()?;
        Ok(stats)
    }
}

impl<'t> Iterator for Disassembler<'t> {
    type Item = Result<DecodedLine<'t>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.step().transpose()
    }
}

impl std::iter::FusedIterator for Disassembler<'_> {}
