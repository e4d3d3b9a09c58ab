//! A headless windowing engine for very large scrollable lists.
//!
//! Given a viewport extent, a scroll offset and a logical item count, the engine decides which
//! contiguous slice of items must be materialized, and how much spacer to reserve before and after
//! that slice so the scrollbar and the rendered items stay where they belong.
//!
//! Item sizes are learned lazily: every time the host recomputes, it passes the elements it has
//! currently materialized and the engine records the position and size of any index it has not
//! measured yet. Items that were never rendered are assumed to have `estimated_item_size`.
//!
//! It is UI-agnostic. A TUI/GUI/DOM layer is expected to provide:
//! - the container size and scroll offset along the scroll axis
//! - the total item count
//! - the materialized elements, via the [`Measure`] trait
//!
//! For data-identity resets, edge-triggered tail events and mount/unmount diffs, see the
//! `window-engine-adapter` crate.
//!
//! ```
//! use window_engine::{ElementRect, WindowEngine, WindowOptions};
//!
//! let mut engine = WindowEngine::new(WindowOptions::new(50, 2));
//!
//! // Nothing is rendered yet: the first window comes from estimates.
//! let first = engine.recompute(300, 0, 100, core::iter::empty::<ElementRect>());
//! assert_eq!((first.start_index, first.end_index), (0, 8));
//!
//! // The host rendered rows 0..8; feed them back while scrolling.
//! let rows: Vec<ElementRect> = (0..8).map(|i| ElementRect::new(0, i * 50, 400, 50)).collect();
//! let next = engine.recompute(300, 200, 100, rows);
//! assert_eq!((next.start_index, next.end_index), (2, 10));
//! assert_eq!(next.padding_head, 100);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod cache;
pub mod compute;
mod engine;
mod error;
mod measure;
mod options;
mod state;
mod types;


pub use cache::MeasurementCache;
pub use engine::WindowEngine;
pub use error::Error;
pub use measure::Measure;
pub use options::{MeasurementPolicy, WindowOptions};
pub use state::WindowState;
pub use types::{Axis, ElementRect, Frame, IndexRange, ItemMeasurement, Window};
