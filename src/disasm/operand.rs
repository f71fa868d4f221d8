//! Opérandes et style de rendu
//!
//! Le style dépend uniquement du premier mot du mnémonique: les ports
//! (`in`, `out`) et les adresses 16 bits sont préfixés par `$`, les valeurs
//! immédiates par `#`.

use crate::table::{InstructionLength, InstructionSpec};
use std::fmt;

/// Mnémoniques dont l'opérande 8 bits est un numéro de port
const PORT_MNEMONICS: &[&str] = &["out", "in"];

/// Mnémoniques dont l'opérande 16 bits est une valeur immédiate
const WORD_IMMEDIATE_MNEMONICS: &[&str] = &["lxi"];

/// Style de rendu d'un opérande
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandStyle {
    /// Adresse ou port, préfixe `$`
    Address,
    /// Valeur littérale, préfixe `#`
    Immediate,
}

impl OperandStyle {
    /// Style d'un opérande 8 bits
    pub fn for_byte(token: &str) -> Self {
        if PORT_MNEMONICS.contains(&token) {
            OperandStyle::Address
        } else {
            OperandStyle::Immediate
        }
    }

    /// Style d'un opérande 16 bits
    pub fn for_word(token: &str) -> Self {
        if WORD_IMMEDIATE_MNEMONICS.contains(&token) {
            OperandStyle::Immediate
        } else {
            OperandStyle::Address
        }
    }

    pub fn prefix(self) -> char {
        match self {
            OperandStyle::Address => '$',
            OperandStyle::Immediate => '#',
        }
    }
}

/// Opérande décodé
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    None,
    Byte(u8, OperandStyle),
    Word(u16, OperandStyle),
}

impl Operand {
    /// Extrait l'opérande des octets qui suivent l'opcode
    ///
    /// `operand_bytes` doit contenir exactement `length - 1` octets.
    pub fn decode(spec: &InstructionSpec, operand_bytes: &[u8]) -> Self {
        let token = spec.leading_token();
        match (spec.length, operand_bytes) {
            (InstructionLength::Two, &[value]) => Operand::Byte(value, OperandStyle::for_byte(token)),
            (InstructionLength::Three, &[lo, hi]) => {
                Operand::Word(u16::from_le_bytes([lo, hi]), OperandStyle::for_word(token))
            }
            _ => Operand::None,
        }
    }

    pub fn style(&self) -> Option<OperandStyle> {
        match self {
            Operand::None => None,
            Operand::Byte(_, style) | Operand::Word(_, style) => Some(*style),
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::None => Ok(()),
            Operand::Byte(value, style) => write!(f, "{}{:02x}", style.prefix(), value),
            Operand::Word(value, style) => write!(f, "{}{:04x}", style.prefix(), value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_style() {
        assert_eq!(OperandStyle::for_byte("out"), OperandStyle::Address);
        assert_eq!(OperandStyle::for_byte("in"), OperandStyle::Address);
        assert_eq!(OperandStyle::for_byte("mvi"), OperandStyle::Immediate);
        assert_eq!(OperandStyle::for_byte("adi"), OperandStyle::Immediate);
        // Seul le mot entier compte, pas un préfixe
        assert_eq!(OperandStyle::for_byte("inr"), OperandStyle::Immediate);
        assert_eq!(OperandStyle::for_byte(""), OperandStyle::Immediate);
    }

    #[test]
    fn test_word_style() {
        assert_eq!(OperandStyle::for_word("lxi"), OperandStyle::Immediate);
        assert_eq!(OperandStyle::for_word("jmp"), OperandStyle::Address);
        assert_eq!(OperandStyle::for_word("lda"), OperandStyle::Address);
        assert_eq!(OperandStyle::for_word("in"), OperandStyle::Address);
    }

    #[test]
    fn test_decode_word_little_endian() {
        let spec = InstructionSpec::new("jmp    ", InstructionLength::Three);
        let operand = Operand::decode(&spec, &[0x34, 0x12]);
        assert_eq!(operand, Operand::Word(0x1234, OperandStyle::Address));
        assert_eq!(operand.to_string(), "$1234");
    }

    #[test]
    fn test_display() {
        assert_eq!(Operand::None.to_string(), "");
        assert_eq!(Operand::Byte(0x05, OperandStyle::Address).to_string(), "$05");
        assert_eq!(Operand::Byte(0x0a, OperandStyle::Immediate).to_string(), "#0a");
        assert_eq!(Operand::Word(0x00ff, OperandStyle::Immediate).to_string(), "#00ff");
        assert_eq!(Operand::None.style(), None);
    }
}
