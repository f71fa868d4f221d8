//! Ligne de listing produite pour chaque instruction

use super::operand::Operand;
use std::fmt;

/// Instruction décodée, prête à être affichée
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedLine<'t> {
    /// Offset de l'opcode dans le flux
    pub offset: usize,

    /// Gabarit du mnémonique issu de la table
    pub mnemonic: &'t str,

    pub operand: Operand,
}

impl<'t> DecodedLine<'t> {
    pub fn new(offset: usize, mnemonic: &'t str, operand: Operand) -> Self {
        Self {
            offset,
            mnemonic,
            operand,
        }
    }
}

impl fmt::Display for DecodedLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04x} {}{}", self.offset, self.mnemonic, self.operand)
    }
}
