//! Adapter utilities for the `window-engine` crate.
//!
//! The `window-engine` crate is UI-agnostic and only computes windows. This crate provides small,
//! framework-neutral helpers commonly needed by hosts:
//!
//! - Resetting the engine when the underlying data set is replaced
//! - Turning the per-frame `reached_tail` flag into a one-shot "load more" event
//! - Diffing consecutive windows into mount/unmount index ranges
//!
//! This crate is intentionally framework-agnostic (no DOM/egui/ratatui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod diff;
mod key;


pub use controller::{Controller, FrameOutcome};
pub use diff::{RangeDiff, diff_ranges};
pub use key::DataKey;
