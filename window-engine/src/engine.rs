use alloc::vec::Vec;
use core::ops::RangeBounds;

use crate::compute;
use crate::{
    Error, Frame, IndexRange, ItemMeasurement, Measure, MeasurementCache, Window, WindowOptions,
    WindowState,
};

/// A headless windowing engine for one scrollable list.
///
/// The engine holds no UI objects. Your host drives it:
/// - call [`recompute`](Self::recompute) whenever the scroll offset, container size, or item count
///   changes, passing the elements it currently has materialized;
/// - realize the returned [`Window::materialize_range`] between spacers of
///   [`Window::padding_head`] and [`Window::padding_tail`];
/// - call [`reset`](Self::reset) when the underlying item collection is replaced.
///
/// Calls must be sequential; `&mut self` on every state-changing method enforces that.
#[derive(Clone, Debug)]
pub struct WindowEngine {
    options: WindowOptions,
    state: WindowState,
}

impl WindowEngine {
    /// Creates an engine with an empty cache and no range.
    ///
    /// A zero `estimated_item_size` is treated as 1 (and trips a debug assertion). Use
    /// [`try_new`](Self::try_new) to reject it instead.
    pub fn new(options: WindowOptions) -> Self {
        wdebug!(
            estimated_item_size = options.estimated_item_size,
            buffer_count = options.buffer_count,
            tail_threshold = options.tail_threshold,
            "WindowEngine::new"
        );
        Self {
            options: options.sanitized(),
            state: WindowState::new(),
        }
    }

    pub fn try_new(options: WindowOptions) -> Result<Self, Error> {
        options.validate()?;
        Ok(Self::new(options))
    }

    /// Rebuilds an engine around a previously captured state.
    pub fn from_state(options: WindowOptions, state: WindowState) -> Result<Self, Error> {
        options.validate()?;
        if let Some(range) = state.range {
            if range.start_index > range.end_index {
                return Err(Error::InvertedRange {
                    start_index: range.start_index,
                    end_index: range.end_index,
                });
            }
        }
        wdebug!(
            measured = state.cache.measured_count(),
            windowed = state.is_windowed(),
            "WindowEngine::from_state"
        );
        Ok(Self { options, state })
    }

    pub fn options(&self) -> &WindowOptions {
        &self.options
    }

    pub fn state(&self) -> &WindowState {
        &self.state
    }

    pub fn into_state(self) -> WindowState {
        self.state
    }

    /// The last returned range, if any.
    pub fn range(&self) -> Option<IndexRange> {
        self.state.range
    }

    /// Computes the next window.
    ///
    /// `elements` are the currently materialized elements in index order, starting at the
    /// previous window's start index. See [`compute::recompute`] for the full contract.
    pub fn recompute<E: Measure>(
        &mut self,
        container_size: u32,
        scroll_offset: u64,
        total_count: usize,
        elements: impl IntoIterator<Item = E>,
    ) -> Window {
        let frame = Frame::new(container_size, scroll_offset, total_count);
        compute::recompute(&self.options, &mut self.state, frame, elements)
    }

    /// Same as [`recompute`](Self::recompute), with the scroll geometry bundled in a [`Frame`].
    pub fn recompute_frame<E: Measure>(
        &mut self,
        frame: Frame,
        elements: impl IntoIterator<Item = E>,
    ) -> Window {
        compute::recompute(&self.options, &mut self.state, frame, elements)
    }

    /// Forgets the range and every measurement.
    ///
    /// Call this when the identity of the item collection changes, so measurements taken for old
    /// items are never applied to new ones at the same index.
    pub fn reset(&mut self) {
        wdebug!(
            measured = self.state.cache.measured_count(),
            "WindowEngine::reset"
        );
        self.state.clear();
    }

    /// Writes a measurement for `index` from `element`, replacing any cached value.
    pub fn record_measurement(&mut self, index: usize, element: &impl Measure) {
        self.state
            .cache
            .record(element.measure(index, self.options.axis));
    }

    /// Drops the cached measurement for `index` so the next recompute records it again if the
    /// item is materialized.
    pub fn invalidate(&mut self, index: usize) -> bool {
        let removed = self.state.cache.remove(index).is_some();
        wtrace!(index, removed, "invalidate");
        removed
    }

    /// Drops every cached measurement whose index falls in `range`. Returns how many were dropped.
    pub fn invalidate_range(&mut self, range: impl RangeBounds<usize>) -> usize {
        let removed = self.state.cache.remove_range(range);
        wdebug!(removed, "invalidate_range");
        removed
    }

    pub fn measurement(&self, index: usize) -> Option<ItemMeasurement> {
        self.state.cache.get(index).copied()
    }

    pub fn is_measured(&self, index: usize) -> bool {
        self.state.cache.contains(index)
    }

    /// One past the highest measured index.
    pub fn measurement_cache_len(&self) -> usize {
        self.state.cache.len()
    }

    pub fn measurement_cache(&self) -> &MeasurementCache {
        &self.state.cache
    }

    pub fn for_each_measurement(&self, mut f: impl FnMut(&ItemMeasurement)) {
        for m in self.state.cache.iter() {
            f(m);
        }
    }

    /// Snapshots the measurement cache in index order.
    pub fn export_measurements(&self) -> Vec<ItemMeasurement> {
        self.state.cache.iter().copied().collect()
    }

    /// Merges previously exported measurements into the cache, replacing entries at the same
    /// indices. The range state is left untouched.
    pub fn import_measurements(&mut self, entries: impl IntoIterator<Item = ItemMeasurement>) {
        self.state.cache.extend(entries);
        wdebug!(
            measured = self.state.cache.measured_count(),
            "import_measurements"
        );
    }
}
