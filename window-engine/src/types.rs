use core::ops::Range;

/// The scroll axis along which positions and sizes are read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Axis {
    /// Rows stacked top to bottom: position is the offset from the top, size is the height.
    #[default]
    Vertical,
    /// Columns laid out left to right: position is the offset from the left, size is the width.
    Horizontal,
}

impl Axis {
    /// Leading offset of `rect` along this axis.
    pub fn position(self, rect: ElementRect) -> u64 {
        match self {
            Self::Vertical => rect.y,
            Self::Horizontal => rect.x,
        }
    }

    /// Extent of `rect` along this axis.
    pub fn size(self, rect: ElementRect) -> u32 {
        match self {
            Self::Vertical => rect.height,
            Self::Horizontal => rect.width,
        }
    }
}

/// The box a host reports for a materialized element, in the scroll content's coordinate space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementRect {
    pub x: u64,
    pub y: u64,
    pub width: u32,
    pub height: u32,
}

impl ElementRect {
    pub fn new(x: u64, y: u64, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// A cached measurement for one logical item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemMeasurement {
    pub index: usize,
    /// Leading offset along the axis.
    pub position: u64,
    /// Extent along the axis.
    pub size: u32,
}

impl ItemMeasurement {
    pub fn end(&self) -> u64 {
        self.position.saturating_add(self.size as u64)
    }
}

/// An index range with an inclusive end, as returned by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexRange {
    pub start_index: usize,
    pub end_index: usize, // inclusive
}

impl IndexRange {
    pub fn new(start_index: usize, end_index: usize) -> Self {
        Self {
            start_index,
            end_index,
        }
    }
}

/// Scroll geometry for one recompute call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    /// Viewport extent along the axis.
    pub container_size: u32,
    /// Current scroll position along the axis.
    pub scroll_offset: u64,
    /// Logical number of items in the list.
    pub total_count: usize,
}

impl Frame {
    pub fn new(container_size: u32, scroll_offset: u64, total_count: usize) -> Self {
        Self {
            container_size,
            scroll_offset,
            total_count,
        }
    }

    /// The viewport's trailing edge along the axis.
    pub fn trailing_edge(&self) -> u64 {
        self.scroll_offset
            .saturating_add(self.container_size as u64)
    }
}

/// The result of a recompute: which items to materialize and how much space to reserve around them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Window {
    pub start_index: usize,
    /// Buffer-inclusive last index.
    ///
    /// The first window after construction or reset is computed from estimates only and may
    /// report `total_count` here; use [`Window::materialize_range`] to get a clamped range.
    pub end_index: usize,
    /// Spacer extent before the first materialized item.
    pub padding_head: u64,
    /// Spacer extent after the last materialized item.
    pub padding_tail: u64,
    /// `true` when the range differs from the previously returned one.
    pub should_update: bool,
    /// `true` when the window's trailing edge is within the tail threshold of the list end.
    pub reached_tail: bool,
    /// The `total_count` this window was computed for.
    pub total_count: usize,
}

impl Window {
    pub fn range(&self) -> IndexRange {
        IndexRange::new(self.start_index, self.end_index)
    }

    /// The half-open range of indices the render layer should realize.
    ///
    /// Empty for an idle window (`total_count == 0`).
    pub fn materialize_range(&self) -> Range<usize> {
        if self.total_count == 0 {
            return 0..0;
        }
        let end = self.end_index.saturating_add(1).min(self.total_count);
        self.start_index.min(end)..end
    }

    /// Total scrollable extent implied by this window, given the extent the materialized items
    /// occupy.
    pub fn content_extent(&self, materialized_extent: u64) -> u64 {
        self.padding_head
            .saturating_add(materialized_extent)
            .saturating_add(self.padding_tail)
    }
}
