use core::ops::Range;

use window_engine::{Frame, Measure, Window, WindowEngine, WindowOptions};

use crate::{DataKey, RangeDiff, diff_ranges};

/// What a host needs to act on after one frame.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameOutcome {
    pub window: Window,
    /// Indices to create and destroy relative to the previous frame's window.
    pub diff: RangeDiff,
    /// `true` only on the frame where the window first reaches the tail. Re-armed once the
    /// window leaves the tail again (for example after more items were appended) or the data key
    /// changes.
    pub tail_reached: bool,
}

/// A framework-neutral controller that wraps a `window_engine::WindowEngine` and provides common
/// host workflows.
///
/// This type does not hold any UI objects. Hosts drive it by calling:
/// - `set_data_key` whenever the list is bound to a (possibly new) data set
/// - `on_frame` on every scroll/resize/count change, with the elements currently on screen
#[derive(Clone, Debug)]
pub struct Controller<K> {
    engine: WindowEngine,
    data_key: Option<K>,
    last_window: Option<Window>,
    tail_armed: bool,
}

impl<K: DataKey> Controller<K> {
    pub fn new(options: WindowOptions) -> Self {
        Self::from_engine(WindowEngine::new(options))
    }

    pub fn from_engine(engine: WindowEngine) -> Self {
        Self {
            engine,
            data_key: None,
            last_window: None,
            tail_armed: true,
        }
    }

    pub fn engine(&self) -> &WindowEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut WindowEngine {
        &mut self.engine
    }

    pub fn into_engine(self) -> WindowEngine {
        self.engine
    }

    pub fn data_key(&self) -> Option<&K> {
        self.data_key.as_ref()
    }

    /// The window returned by the most recent `on_frame`, if any.
    pub fn last_window(&self) -> Option<Window> {
        self.last_window
    }

    /// Binds the controller to a data set.
    ///
    /// When `key` differs from the current one the engine is reset, so measurements of the old
    /// items are never applied to the new ones. Returns `true` when a reset happened.
    pub fn set_data_key(&mut self, key: K) -> bool {
        if self.data_key.as_ref() == Some(&key) {
            return false;
        }
        self.data_key = Some(key);
        self.reset();
        true
    }

    /// Resets the engine and forgets the previous window and tail state.
    pub fn reset(&mut self) {
        adebug!("Controller::reset");
        self.engine.reset();
        self.last_window = None;
        self.tail_armed = true;
    }

    /// Recomputes the window for `frame`.
    ///
    /// `elements` are the elements currently materialized, i.e. the ones realized for the
    /// previous outcome's window, in index order.
    pub fn on_frame<E: Measure>(
        &mut self,
        frame: Frame,
        elements: impl IntoIterator<Item = E>,
    ) -> FrameOutcome {
        let window = self.engine.recompute_frame(frame, elements);
        let diff = diff_ranges(self.materialized(), window.materialize_range());

        let tail_reached = window.reached_tail && self.tail_armed;
        self.tail_armed = !window.reached_tail;
        self.last_window = Some(window);

        atrace!(
            start_index = window.start_index,
            end_index = window.end_index,
            mounted = diff.mount_count(),
            unmounted = diff.unmount_count(),
            tail_reached,
            "Controller::on_frame"
        );

        FrameOutcome {
            window,
            diff,
            tail_reached,
        }
    }

    /// Indices currently materialized according to the last window.
    pub fn materialized(&self) -> Range<usize> {
        self.last_window
            .as_ref()
            .map_or(0..0, Window::materialize_range)
    }
}
