use core::ops::Range;

/// Index ranges that enter and leave the materialized set between two windows.
///
/// Each side holds at most two half-open ranges (one per edge of the window); unused slots are
/// empty ranges.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangeDiff {
    pub mount: [Range<usize>; 2],
    pub unmount: [Range<usize>; 2],
}

impl RangeDiff {
    pub fn is_empty(&self) -> bool {
        self.mount.iter().chain(&self.unmount).all(Range::is_empty)
    }

    /// Non-empty ranges to create, in ascending order.
    pub fn mount_ranges(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        self.mount.iter().filter(|r| !r.is_empty()).cloned()
    }

    /// Non-empty ranges to destroy, in ascending order.
    pub fn unmount_ranges(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        self.unmount.iter().filter(|r| !r.is_empty()).cloned()
    }

    pub fn mount_count(&self) -> usize {
        self.mount.iter().map(ExactSizeIterator::len).sum()
    }

    pub fn unmount_count(&self) -> usize {
        self.unmount.iter().map(ExactSizeIterator::len).sum()
    }

    pub fn for_each_mount(&self, mut f: impl FnMut(usize)) {
        self.mount_ranges().flatten().for_each(&mut f);
    }

    pub fn for_each_unmount(&self, mut f: impl FnMut(usize)) {
        self.unmount_ranges().flatten().for_each(&mut f);
    }
}

/// Computes which indices a host must create and destroy to go from `prev` to `next`.
pub fn diff_ranges(prev: Range<usize>, next: Range<usize>) -> RangeDiff {
    let empty = 0..0;
    if prev.is_empty() {
        return RangeDiff {
            mount: [next, empty.clone()],
            unmount: [empty.clone(), empty],
        };
    }
    if next.is_empty() {
        return RangeDiff {
            mount: [empty.clone(), empty.clone()],
            unmount: [prev, empty],
        };
    }
    if next.end <= prev.start || next.start >= prev.end {
        return RangeDiff {
            mount: [next, empty.clone()],
            unmount: [prev, empty],
        };
    }

    let leading = |a: &Range<usize>, b: &Range<usize>| {
        if a.start < b.start {
            a.start..b.start
        } else {
            0..0
        }
    };
    let trailing = |a: &Range<usize>, b: &Range<usize>| {
        if b.end < a.end { b.end..a.end } else { 0..0 }
    };

    RangeDiff {
        mount: [leading(&next, &prev), trailing(&next, &prev)],
        unmount: [leading(&prev, &next), trailing(&prev, &next)],
    }
}
