use crate::{IndexRange, MeasurementCache};

/// Everything the engine remembers between recompute calls.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`, so a host can stash
/// it when a list is hidden and restore it later without re-measuring.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowState {
    pub cache: MeasurementCache,
    /// The last returned range, or `None` when no window has been computed since construction,
    /// reset, or a zero-count recompute.
    pub range: Option<IndexRange>,
}

impl WindowState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_windowed(&self) -> bool {
        self.range.is_some()
    }

    /// Drops both the range and every cached measurement.
    pub fn clear(&mut self) {
        self.range = None;
        self.cache.clear();
    }
}
