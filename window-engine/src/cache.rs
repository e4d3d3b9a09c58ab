use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::ops::RangeBounds;

use crate::ItemMeasurement;

/// Sparse, index-ordered cache of item measurements.
///
/// Memory is `O(distinct indices ever recorded)`: nothing is pruned until [`clear`] or an explicit
/// invalidation.
///
/// Serialized as a list of measurements; each entry is keyed by its own `index` on the way back.
///
/// [`clear`]: MeasurementCache::clear
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Vec<ItemMeasurement>", into = "Vec<ItemMeasurement>")
)]
pub struct MeasurementCache {
    entries: BTreeMap<usize, ItemMeasurement>,
}

impl MeasurementCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes a measurement, replacing any prior entry for the same index.
    pub fn record(&mut self, measurement: ItemMeasurement) {
        self.entries.insert(measurement.index, measurement);
    }

    pub fn get(&self, index: usize) -> Option<&ItemMeasurement> {
        self.entries.get(&index)
    }

    pub fn contains(&self, index: usize) -> bool {
        self.entries.contains_key(&index)
    }

    /// One past the highest recorded index (zero when empty).
    pub fn len(&self) -> usize {
        self.entries
            .last_key_value()
            .map_or(0, |(&index, _)| index.saturating_add(1))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of indices that actually hold a measurement.
    pub fn measured_count(&self) -> usize {
        self.entries.len()
    }

    /// Iterates measurements in index order.
    pub fn iter(&self) -> impl Iterator<Item = &ItemMeasurement> + '_ {
        self.entries.values()
    }

    pub fn remove(&mut self, index: usize) -> Option<ItemMeasurement> {
        self.entries.remove(&index)
    }

    /// Removes every measurement whose index falls in `range`, returning how many were dropped.
    pub fn remove_range(&mut self, range: impl RangeBounds<usize>) -> usize {
        let before = self.entries.len();
        self.entries.retain(|index, _| !range.contains(index));
        before - self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Leading offset of `index`: recorded if measured, otherwise extrapolated from the nearest
    /// measured entry below it using `estimated_item_size` per index.
    pub fn position_of(&self, index: usize, estimated_item_size: u32) -> u64 {
        if let Some(m) = self.entries.get(&index) {
            return m.position;
        }
        let estimate = estimated_item_size as u64;
        match self.entries.range(..index).next_back() {
            Some((&below, m)) => {
                let gap = (index - below - 1) as u64;
                m.end().saturating_add(gap.saturating_mul(estimate))
            }
            None => (index as u64).saturating_mul(estimate),
        }
    }

    /// Total extent of the indices in `start..end`, using recorded sizes where present and
    /// `estimated_item_size` for holes.
    pub fn extent_of(&self, start: usize, end: usize, estimated_item_size: u32) -> u64 {
        if start >= end {
            return 0;
        }
        let mut measured = 0usize;
        let mut total = 0u64;
        for m in self.entries.range(start..end).map(|(_, m)| m) {
            measured += 1;
            total = total.saturating_add(m.size as u64);
        }
        let holes = (end - start - measured) as u64;
        total.saturating_add(holes.saturating_mul(estimated_item_size as u64))
    }
}

impl FromIterator<ItemMeasurement> for MeasurementCache {
    fn from_iter<I: IntoIterator<Item = ItemMeasurement>>(iter: I) -> Self {
        let mut cache = Self::new();
        cache.extend(iter);
        cache
    }
}

impl Extend<ItemMeasurement> for MeasurementCache {
    fn extend<I: IntoIterator<Item = ItemMeasurement>>(&mut self, iter: I) {
        for m in iter {
            self.record(m);
        }
    }
}

impl From<Vec<ItemMeasurement>> for MeasurementCache {
    fn from(measurements: Vec<ItemMeasurement>) -> Self {
        measurements.into_iter().collect()
    }
}

impl From<MeasurementCache> for Vec<ItemMeasurement> {
    fn from(cache: MeasurementCache) -> Self {
        cache.entries.into_values().collect()
    }
}
