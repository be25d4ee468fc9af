use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

/// Single-fire latch binding a sequence to one page load.
///
/// Usable in a `static`: the browser host keeps one for the page lifetime and
/// never resets it.
#[derive(Debug, Default)]
pub struct OnceTrigger {
    fired: AtomicBool,
}

impl OnceTrigger {
    #[must_use]
    pub const fn new() -> Self {
        Self { fired: AtomicBool::new(false) }
    }

    /// Returns `true` for the first call only.
    pub fn fire(&self) -> bool {
        let first = !self.fired.swap(true, Ordering::AcqRel);
        if !first {
            debug!("Load trigger already fired, ignoring");
        }
        first
    }

    /// Runs `f` if this is the first firing. Returns whether it ran.
    pub fn run_once(&self, f: impl FnOnce()) -> bool {
        let first = self.fire();
        if first {
            f();
        }
        first
    }

    #[must_use]
    pub fn has_fired(&self) -> bool {
        self.fired.load(Ordering::Acquire)
    }
}
