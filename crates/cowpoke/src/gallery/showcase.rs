//! Pairing messages with art
//!
//! A showcase lines up a list of messages with a list of art blocks by index.
//! Only positions present in both lists are shown.

use tracing::{debug, info};

use super::rotation::Rotation;
use crate::core::{compose_with_width, DEFAULT_WIDTH};

/// Messages bundled with the crate, one per built-in art block
pub const JOKES: &[&str] = &[
    "Pod went missing—turned out to be a Job all along.",
    "Our cowboy lassoed nodes; now it’s a proper cluster.",
    "This Service had no selectors, but plenty of ambition.",
    "Yeehaw! Autoscaler grew faster than our Helm chart broke.",
    "ConfigMaps: because even cowboys need plain text wisdom.",
];

/// Index-aligned messages and art
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Showcase {
    messages: Vec<String>,
    arts: Vec<String>,
    width: i64,
}

impl Showcase {
    /// Create a showcase from a message list and an art list
    pub fn new(messages: Vec<String>, arts: Vec<String>) -> Self {
        Self {
            messages,
            arts,
            width: DEFAULT_WIDTH,
        }
    }

    /// The built-in jokes paired with `arts`
    pub fn with_jokes(arts: Vec<String>) -> Self {
        let messages = JOKES.iter().map(|joke| joke.to_string()).collect();
        Self::new(messages, arts)
    }

    /// Use a different bubble wrap width
    pub fn with_width(mut self, width: i64) -> Self {
        self.width = width;
        self
    }

    /// Number of showable entries
    pub fn len(&self) -> usize {
        self.messages.len().min(self.arts.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Compose the entry at `index`, or `None` when it is out of range.
    pub fn render(&self, index: usize) -> Option<String> {
        if index >= self.len() {
            debug!(index, len = self.len(), "Showcase index out of range");
            return None;
        }
        Some(compose_with_width(
            &self.messages[index],
            &self.arts[index],
            self.width,
        ))
    }

    /// Advance `rotation` and compose the entry it lands on.
    ///
    /// Returns the index shown together with the text. An empty showcase
    /// renders nothing and leaves `rotation` unchanged.
    pub fn next(&self, rotation: &mut Rotation) -> Option<(usize, String)> {
        let index = rotation.advance(self.len())?;
        info!(index, "Showing entry");
        self.render(index).map(|text| (index, text))
    }
}
