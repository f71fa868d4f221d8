//! Désassemblage Intel 8080
//!
//! Transforme un flux d'octets en listing: une ligne par instruction,
//! préfixée par son offset hexadécimal.

pub mod engine;
pub mod line;
pub mod operand;

pub use engine::*;
pub use line::*;
pub use operand::*;
