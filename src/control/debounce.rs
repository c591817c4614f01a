//! Time-window debouncer for button edges.
//!
//! An edge is accepted only if more than `window_ms` have elapsed since
//! the last accepted edge; otherwise it is dropped without touching any
//! state. Timestamps are `u32` milliseconds since boot and are compared
//! with wrapping subtraction, so the filter keeps working across the
//! ~49-day counter wrap. An elapsed time above half the counter range is
//! an edge stamped before the last accepted one and is rejected, so the
//! stored timestamp never moves backwards.
//!
//! With [`DebounceScope::Shared`] all buttons share one timestamp: a press
//! on one button within the window of a press on another is dropped too.

use core::sync::atomic::{AtomicU32, Ordering};

use super::Button;

/// Elapsed values above this are negative deltas seen through the wrap.
const OUT_OF_ORDER_MS: u32 = u32::MAX / 2;

/// How accepted-edge timestamps are tracked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DebounceScope {
    /// One timestamp for every button.
    Shared,
    /// An independent timestamp per button.
    PerButton,
}

/// Debounce filter. Lives for the whole process and is never reset.
pub struct Debouncer {
    window_ms: u32,
    scope: DebounceScope,
    last_accepted_ms: [AtomicU32; Button::COUNT],
}

impl Debouncer {
    pub const fn new(window_ms: u32, scope: DebounceScope) -> Self {
        Self {
            window_ms,
            scope,
            last_accepted_ms: [AtomicU32::new(0), AtomicU32::new(0), AtomicU32::new(0)],
        }
    }

    pub fn window_ms(&self) -> u32 {
        self.window_ms
    }

    pub fn scope(&self) -> DebounceScope {
        self.scope
    }

    /// Accept or reject an edge on `button` seen at `now_ms`.
    ///
    /// Returns `true` and records `now_ms` if the edge is accepted.
    pub fn accept(&self, button: Button, now_ms: u32) -> bool {
        let slot = &self.last_accepted_ms[self.slot(button)];
        let elapsed = now_ms.wrapping_sub(slot.load(Ordering::Relaxed));
        if elapsed <= self.window_ms || elapsed > OUT_OF_ORDER_MS {
            return false;
        }
        slot.store(now_ms, Ordering::Relaxed);
        true
    }

    /// Timestamp of the last accepted edge relevant to `button`.
    pub fn last_accepted_ms(&self, button: Button) -> u32 {
        self.last_accepted_ms[self.slot(button)].load(Ordering::Relaxed)
    }

    fn slot(&self, button: Button) -> usize {
        match self.scope {
            DebounceScope::Shared => 0,
            DebounceScope::PerButton => button.index(),
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(
            crate::config::DEBOUNCE_WINDOW_MS,
            crate::config::DEBOUNCE_SCOPE,
        )
    }
}
