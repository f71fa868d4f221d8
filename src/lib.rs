//! i8080-disasm - Désassembleur Intel 8080
//!
//! Cette bibliothèque décode un flux de code machine 8080 en listing lisible:
//! table des opcodes, moteur de parcours linéaire et rendu des opérandes.

pub mod config;
pub mod disasm;
pub mod error;
pub mod rom;
pub mod table;

pub use config::*;
pub use disasm::*;
pub use error::DisasmError;
pub use rom::*;
pub use table::*;

/// Version du désassembleur
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
