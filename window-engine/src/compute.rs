//! The windowing algorithm as free functions over an explicit [`WindowState`].
//!
//! [`crate::WindowEngine`] is a thin owner of options plus state that delegates here; hosts that
//! prefer to keep state in their own structures can call these directly.

use crate::{
    Frame, IndexRange, Measure, MeasurementCache, MeasurementPolicy, Window, WindowOptions,
    WindowState,
};

/// Derives the next window from `frame` and the currently materialized elements.
///
/// `elements` must be in index order and correspond to the indices starting at the start of the
/// previously returned window. They are ignored on the first computation, since nothing has been
/// rendered yet.
///
/// - `frame.total_count == 0` clears the range and returns a zeroed window.
/// - With no previous range, the window is derived from estimates alone (see [`initial_window`]).
/// - Otherwise missing measurements are recorded, the cache is scanned for the viewport edges,
///   and the result is buffered, clamped and padded.
pub fn recompute<E: Measure>(
    options: &WindowOptions,
    state: &mut WindowState,
    frame: Frame,
    elements: impl IntoIterator<Item = E>,
) -> Window {
    let total = frame.total_count;
    if total == 0 {
        if state.range.take().is_some() {
            wdebug!("recompute: total_count is zero, window cleared");
        }
        return Window::default();
    }

    let Some(previous) = state.range else {
        let window = initial_window(options, frame);
        state.range = Some(window.range());
        return window;
    };

    record_materialized(options, &mut state.cache, previous.start_index, total, elements);

    let estimate_size = options.estimated_item_size.max(1);
    let estimate = estimate_size as u64;
    let (visible_start, visible_end) = scan(&state.cache, frame);

    let end_index = visible_end
        .saturating_add(options.buffer_count)
        .min(total - 1);
    let start_index = visible_start
        .saturating_sub(options.buffer_count)
        .min(end_index);

    let padding_head = state.cache.position_of(start_index, estimate_size);

    let cache_len = state.cache.len();
    let padding_tail = if end_index >= cache_len {
        // Everything after the window is unmeasured.
        ((total - end_index - 1) as u64).saturating_mul(estimate)
    } else {
        let unmeasured = total.saturating_sub(cache_len) as u64;
        // Entries at or past `total` belong to items that no longer exist.
        let measured_after = state
            .cache
            .extent_of(end_index + 1, cache_len.min(total), estimate_size);
        unmeasured.saturating_mul(estimate).saturating_add(measured_after)
    };

    let range = IndexRange::new(start_index, end_index);
    let should_update = previous != range;
    state.range = Some(range);

    let reached_tail = total - (end_index + 1) <= options.tail_threshold;

    debug_assert!(
        start_index <= end_index && end_index < total,
        "recompute: window out of bounds (start={start_index}, end={end_index}, total={total})"
    );
    wtrace!(
        start_index,
        end_index,
        padding_head,
        padding_tail,
        should_update,
        reached_tail,
        "recompute"
    );

    Window {
        start_index,
        end_index,
        padding_head,
        padding_tail,
        should_update,
        reached_tail,
        total_count: total,
    }
}

/// The first window for a list, computed purely from `estimated_item_size`.
///
/// Starts at index 0 and covers the items that fit in the container plus `buffer_count`, capped at
/// `total_count`. Always reports `should_update` and never reports `reached_tail`.
pub fn initial_window(options: &WindowOptions, frame: Frame) -> Window {
    let total = frame.total_count;
    let estimate = options.estimated_item_size.max(1);
    let start_index = 0;
    let visible_count = frame.container_size.div_ceil(estimate) as usize;
    let end_index = options
        .buffer_count
        .saturating_add(visible_count)
        .min(total);
    let render_count = end_index - start_index;
    let padding_tail = ((total - render_count) as u64).saturating_mul(estimate as u64);

    wtrace!(
        container_size = frame.container_size,
        total,
        end_index,
        padding_tail,
        "initial_window"
    );

    Window {
        start_index,
        end_index,
        padding_head: 0,
        padding_tail,
        should_update: true,
        reached_tail: false,
        total_count: total,
    }
}

/// Records measurements for `elements`, which map to indices `first_index, first_index + 1, ..`.
///
/// Under [`MeasurementPolicy::KeepFirst`] indices that already hold a measurement are skipped.
/// Returns how many measurements were written.
pub fn record_materialized<E: Measure>(
    options: &WindowOptions,
    cache: &mut MeasurementCache,
    first_index: usize,
    total_count: usize,
    elements: impl IntoIterator<Item = E>,
) -> usize {
    let mut recorded = 0usize;
    let mut beyond_total = 0usize;
    for (offset, element) in elements.into_iter().enumerate() {
        let index = first_index.saturating_add(offset);
        if index >= total_count {
            beyond_total += 1;
        }
        if options.measurement_policy == MeasurementPolicy::KeepFirst && cache.contains(index) {
            continue;
        }
        cache.record(element.measure(index, options.axis));
        recorded += 1;
    }
    if beyond_total > 0 {
        wwarn!(
            first_index,
            total_count,
            beyond_total,
            "materialized elements extend past total_count; was the engine reset after a data change?"
        );
    }
    recorded
}

/// Finds the pre-buffer window edges: the last index starting at or before the scroll offset, and
/// the first index starting past the viewport's trailing edge (cache length when there is none).
fn scan(cache: &MeasurementCache, frame: Frame) -> (usize, usize) {
    let trailing_edge = frame.trailing_edge();
    let mut start = None;
    let mut end = None;
    for m in cache.iter() {
        if m.position <= frame.scroll_offset {
            start = Some(m.index);
        } else if m.position > trailing_edge {
            end = Some(m.index);
            break;
        }
    }
    (start.unwrap_or(0), end.unwrap_or_else(|| cache.len()))
}
