use crate::{Axis, Error};

/// How the engine treats elements whose index already has a cached measurement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MeasurementPolicy {
    /// Record an index the first time it is materialized and keep that value until it is
    /// invalidated or the engine is reset. Later size changes of a rendered item are not seen.
    #[default]
    KeepFirst,
    /// Re-record every materialized element on every steady-state recompute.
    Refresh,
}

/// Configuration for [`crate::WindowEngine`].
///
/// With `feature = "serde"`, this can be loaded from a host's config file; `tail_threshold`,
/// `axis` and `measurement_policy` fall back to their defaults when omitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowOptions {
    /// Size along the axis assumed for items that have not been measured.
    pub estimated_item_size: u32,
    /// Extra items materialized on each side of the visible range.
    pub buffer_count: usize,
    /// How many items from the end still count as "reached tail".
    #[cfg_attr(feature = "serde", serde(default))]
    pub tail_threshold: usize,
    #[cfg_attr(feature = "serde", serde(default))]
    pub axis: Axis,
    #[cfg_attr(feature = "serde", serde(default))]
    pub measurement_policy: MeasurementPolicy,
}

impl WindowOptions {
    /// Creates options for a vertical list with a tail threshold of zero.
    pub fn new(estimated_item_size: u32, buffer_count: usize) -> Self {
        Self {
            estimated_item_size,
            buffer_count,
            tail_threshold: 0,
            axis: Axis::Vertical,
            measurement_policy: MeasurementPolicy::KeepFirst,
        }
    }

    pub fn with_tail_threshold(mut self, tail_threshold: usize) -> Self {
        self.tail_threshold = tail_threshold;
        self
    }

    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    pub fn with_measurement_policy(mut self, measurement_policy: MeasurementPolicy) -> Self {
        self.measurement_policy = measurement_policy;
        self
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.estimated_item_size == 0 {
            return Err(Error::ZeroEstimatedItemSize);
        }
        Ok(())
    }

    /// Returns a copy that is safe to compute with: a zero estimate becomes 1.
    pub(crate) fn sanitized(mut self) -> Self {
        if self.estimated_item_size == 0 {
            wwarn!("estimated_item_size is zero; using 1");
            debug_assert!(
                self.estimated_item_size > 0,
                "WindowOptions: estimated_item_size must be greater than zero"
            );
            self.estimated_item_size = 1;
        }
        self
    }
}
