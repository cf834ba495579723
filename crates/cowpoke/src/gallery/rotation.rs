//! Rotation through a catalog
//!
//! The rotation index is plain data owned by the caller. A fresh rotation sits
//! at `-1`, so the first advance lands on index 0.

/// Index of the entry after `current` in a catalog of `modulo` entries.
///
/// Returns `None` for an empty catalog. Any `current`, including negative
/// values or values past the end, maps into `0..modulo`.
///
/// # Example
/// ```
/// use cowpoke::gallery::next_index;
///
/// assert_eq!(next_index(-1, 5), Some(0));
/// assert_eq!(next_index(4, 5), Some(0));
/// assert_eq!(next_index(0, 0), None);
/// ```
pub fn next_index(current: i64, modulo: usize) -> Option<usize> {
    let modulo = i128::try_from(modulo).ok().filter(|m| *m > 0)?;
    let next = (i128::from(current) + 1).rem_euclid(modulo);
    usize::try_from(next).ok()
}

/// Caller-held rotation state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotation {
    current: i64,
}

impl Rotation {
    /// Sentinel for a rotation that has not shown anything yet
    pub const START: i64 = -1;

    /// Create a rotation at the start
    pub fn new() -> Self {
        Self::from_index(Self::START)
    }

    /// Resume a rotation from a previously stored index
    pub fn from_index(current: i64) -> Self {
        Self { current }
    }

    /// The stored index, for callers that persist rotation state
    pub fn current(&self) -> i64 {
        self.current
    }

    /// Go back to the start, so the next advance returns index 0
    pub fn reset(&mut self) {
        self.current = Self::START;
    }

    /// Move to the next entry of a catalog with `modulo` entries.
    ///
    /// An empty catalog leaves the state untouched and returns `None`.
    pub fn advance(&mut self, modulo: usize) -> Option<usize> {
        let next = next_index(self.current, modulo)?;
        self.current = next as i64;
        Some(next)
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self::new()
    }
}
