//! Cowpoke - ASCII speech bubbles over ASCII art
//!
//! Renders a short message inside a bordered speech bubble and stacks it on
//! top of a block of preformatted art, producing monospace text ready for a
//! terminal or a `<pre>` element.
//!
//! # Quick Start
//!
//! ```rust
//! use cowpoke::{compose, render_bubble};
//!
//! let bubble = render_bubble("Hello world", 42);
//! assert_eq!(bubble.lines().nth(1), Some("< Hello world >"));
//!
//! let scene = compose("Howdy, partner", "   (oo)\n   /||\\");
//! assert!(scene.ends_with("(oo)\n   /||\\"));
//! ```
//!
//! # Rotating through a catalog
//!
//! ```rust
//! use cowpoke::gallery::{builtin_catalog, Rotation, Showcase};
//!
//! let showcase = Showcase::with_jokes(builtin_catalog());
//! let mut rotation = Rotation::new();
//!
//! let (index, text) = showcase.next(&mut rotation).expect("built-in catalog is not empty");
//! assert_eq!(index, 0);
//! assert!(text.contains("Pod went missing"));
//! ```

pub mod core;
pub mod gallery;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use crate::core::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{
        compose, compose_with_width, BubbleRenderer, CatalogError, DEFAULT_WIDTH, MIN_WIDTH,
    };
    pub use crate::gallery::{
        builtin_catalog, load_catalog, next_index, try_load_catalog, Rotation, Showcase, JOKES,
    };
}

/// Render `message` as a speech bubble wrapped at `width` columns.
///
/// Widths below 10 (including zero and negative values) behave as 10. Words
/// longer than the width are kept whole and widen the bubble instead.
///
/// # Example
/// ```rust
/// use cowpoke::render_bubble;
///
/// let bubble = render_bubble("a\nb", 42);
/// let body: Vec<&str> = bubble.lines().filter(|l| l.starts_with('<')).collect();
/// assert_eq!(body, vec!["< a >", "< b >"]);
/// ```
pub fn render_bubble(message: &str, width: i64) -> String {
    BubbleRenderer::with_width(width).render(message)
}
