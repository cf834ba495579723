//! Callers of the rendering core
//!
//! Everything that touches state or the filesystem lives here: loading art
//! catalogs, the rotation index, and pairing messages with art.

mod catalog;
mod rotation;
mod showcase;

pub use catalog::*;
pub use rotation::*;
pub use showcase::*;
