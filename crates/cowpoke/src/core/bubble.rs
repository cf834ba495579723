//! Speech bubble rendering
//!
//! Wraps a message to a bounded width and draws the bubble border around the
//! wrapped lines. Rendering is total: every message and every width produce a
//! well-formed bubble.

use tracing::{debug, span, trace, Level};
use unicode_width::UnicodeWidthStr;

/// Wrap width used when the caller does not pick one
pub const DEFAULT_WIDTH: i64 = 42;

/// Smallest wrap width ever used; smaller requests are raised to this
pub const MIN_WIDTH: i64 = 10;

/// Two-line tail hanging below the bubble, at a fixed indentation
const TAIL: [&str; 2] = ["         \\ ", "          \\"];

/// Clamp a requested wrap width to the supported floor.
///
/// # Example
/// ```
/// use cowpoke::core::effective_width;
///
/// assert_eq!(effective_width(42), 42);
/// assert_eq!(effective_width(3), 10);
/// assert_eq!(effective_width(-7), 10);
/// ```
pub fn effective_width(width: i64) -> usize {
    usize::try_from(width.max(MIN_WIDTH)).unwrap_or(usize::MAX)
}

/// Wrap a message into the lines that make up the bubble body.
///
/// Every `\n` starts a new line, and each hard-broken segment is then wrapped
/// on word boundaries to at most `width` columns. Words longer than the width
/// stay whole. Whitespace between words on the same line is kept (each
/// whitespace character becomes one space), a segment keeps its leading
/// indentation, and whitespace at a wrap point is dropped. An empty or
/// whitespace-only segment becomes one empty line, so the result is never
/// empty.
///
/// # Example
/// ```
/// use cowpoke::core::wrap_message;
///
/// let lines = wrap_message("one two three four five", 10);
/// assert_eq!(lines, vec!["one two", "three four", "five"]);
///
/// let lines = wrap_message("a\n\n  b   c", 42);
/// assert_eq!(lines, vec!["a", "", "  b   c"]);
/// ```
pub fn wrap_message(message: &str, width: i64) -> Vec<String> {
    let max_width = effective_width(width);

    message
        .split('\n')
        .map(|segment| segment.strip_suffix('\r').unwrap_or(segment))
        .flat_map(|segment| wrap_segment(segment, max_width))
        .collect()
}

/// Split a segment into alternating runs of whitespace and non-whitespace
fn chunks(segment: &str) -> impl Iterator<Item = &str> {
    let mut rest = segment;
    std::iter::from_fn(move || {
        let is_space = rest.chars().next()?.is_whitespace();
        let end = rest
            .find(|c: char| c.is_whitespace() != is_space)
            .unwrap_or(rest.len());
        let (chunk, tail) = rest.split_at(end);
        rest = tail;
        Some(chunk)
    })
}

/// Greedy word wrap of a single hard-broken segment
fn wrap_segment(segment: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current_line = String::new();
    let mut current_width = 0;
    // Whitespace seen since the last word, in columns
    let mut gap = 0;

    for chunk in chunks(segment) {
        if chunk.starts_with(char::is_whitespace) {
            gap = chunk.chars().count();
            continue;
        }
        let word_width = UnicodeWidthStr::width(chunk);

        if current_line.is_empty() {
            // Indentation survives only on the first line, and only if the word still fits
            let indent = if lines.is_empty() && gap + word_width <= max_width {
                gap
            } else {
                0
            };
            current_line.push_str(&" ".repeat(indent));
            current_line.push_str(chunk);
            current_width = indent + word_width;
        } else if current_width + gap + word_width <= max_width {
            current_line.push_str(&" ".repeat(gap));
            current_line.push_str(chunk);
            current_width += gap + word_width;
        } else {
            lines.push(std::mem::take(&mut current_line));
            current_line.push_str(chunk);
            current_width = word_width;
        }
        gap = 0;
    }

    if !current_line.is_empty() || lines.is_empty() {
        lines.push(current_line);
    }

    lines
}

/// Display width of the widest line, or 0 when there are no lines.
pub fn bounding_width(lines: &[String]) -> usize {
    lines
        .iter()
        .map(|line| UnicodeWidthStr::width(line.as_str()))
        .max()
        .unwrap_or(0)
}

/// Renders messages as speech bubbles at a configured wrap width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BubbleRenderer {
    width: i64,
}

impl BubbleRenderer {
    /// Create a renderer with the default wrap width
    pub fn new() -> Self {
        Self::with_width(DEFAULT_WIDTH)
    }

    /// Create a renderer with a specific wrap width.
    ///
    /// Any value is accepted; widths below [`MIN_WIDTH`] behave as `MIN_WIDTH`.
    pub fn with_width(width: i64) -> Self {
        Self { width }
    }

    /// The wrap width actually used, after clamping
    pub fn width(&self) -> usize {
        effective_width(self.width)
    }

    /// Render `message` as a bubble: top border, one body line per wrapped
    /// line, bottom border, then the tail. Lines are joined with `\n` and
    /// there is no trailing newline.
    pub fn render(&self, message: &str) -> String {
        let render_span = span!(
            Level::DEBUG,
            "render_bubble",
            message_len = message.len(),
            width = self.width
        );
        let _enter = render_span.enter();

        let lines = wrap_message(message, self.width);
        let inner = bounding_width(&lines);
        debug!(
            line_count = lines.len(),
            bounding_width = inner,
            "Wrapped message"
        );

        let mut output = Vec::with_capacity(lines.len() + 2 + TAIL.len());
        output.push(format!("  {}", "_".repeat(inner + 2)));
        for line in &lines {
            let padding = inner - UnicodeWidthStr::width(line.as_str());
            output.push(format!("< {}{} >", line, " ".repeat(padding)));
        }
        output.push(format!("  {}", "-".repeat(inner + 2)));
        output.extend(TAIL.iter().map(|tail| tail.to_string()));

        trace!(output_lines = output.len(), "Assembled bubble");
        output.join("\n")
    }
}

impl Default for BubbleRenderer {
    fn default() -> Self {
        Self::new()
    }
}
