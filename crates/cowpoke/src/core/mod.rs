//! Rendering core
//!
//! Pure, stateless text formatting: wrapping a message, drawing the speech
//! bubble, and stacking it on top of art. Nothing in here performs IO apart
//! from the optional logging setup.

mod bubble;
mod compose;
mod error;
pub mod logging;

pub use bubble::*;
pub use compose::*;
pub use error::*;
pub use logging::*;
