//! Stacking a speech bubble on top of a piece of art

use tracing::trace;

use super::bubble::{BubbleRenderer, DEFAULT_WIDTH};

/// Render `message` as a bubble at the default width and place `art` below it.
///
/// The art is passed through untouched; the two blocks are joined with a
/// single `\n` and their widths are never reconciled.
///
/// # Example
/// ```
/// use cowpoke::{compose, render_bubble};
///
/// let art = "  (oo)\n  /||\\";
/// assert_eq!(compose("Howdy", art), format!("{}\n{}", render_bubble("Howdy", 42), art));
/// ```
pub fn compose(message: &str, art: &str) -> String {
    compose_with_width(message, art, DEFAULT_WIDTH)
}

/// Like [`compose`], wrapping the message at `width` instead of the default
pub fn compose_with_width(message: &str, art: &str, width: i64) -> String {
    trace!(art_len = art.len(), "Composing bubble with art");
    let bubble = BubbleRenderer::with_width(width).render(message);
    format!("{}\n{}", bubble, art)
}
