use crate::constants::{FADE_MS, HIDE_CLASS, HOLD_MS, LOGIN_PAGE, SHOW_CLASS, WELCOME_SLIDE};
use crate::region::RegionId;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Everything the sequencer needs to know about the page it drives.
///
/// Every field falls back to the stock page contract, so an empty document
/// (or no document at all) deserializes into the default transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionConfig {
    /// Region faded out and collapsed.
    pub welcome: RegionId,
    /// Region revealed once the welcome slide is gone.
    pub login: RegionId,
    pub hide_class: String,
    pub show_class: String,
    /// Time the welcome slide stays untouched, in milliseconds.
    pub hold_ms: u64,
    /// Time given to the fade animation before collapsing, in milliseconds.
    pub fade_ms: u64,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            welcome: RegionId::from(WELCOME_SLIDE),
            login: RegionId::from(LOGIN_PAGE),
            hide_class: HIDE_CLASS.to_owned(),
            show_class: SHOW_CLASS.to_owned(),
            hold_ms: HOLD_MS,
            fade_ms: FADE_MS,
        }
    }
}

impl TransitionConfig {
    #[must_use]
    pub const fn hold(&self) -> Duration {
        Duration::from_millis(self.hold_ms)
    }

    #[must_use]
    pub const fn fade(&self) -> Duration {
        Duration::from_millis(self.fade_ms)
    }

    /// Total time from trigger to the login panel being shown.
    #[must_use]
    pub const fn total(&self) -> Duration {
        Duration::from_millis(self.hold_ms.saturating_add(self.fade_ms))
    }

    #[must_use]
    pub fn with_hold_ms(mut self, hold_ms: u64) -> Self {
        self.hold_ms = hold_ms;
        self
    }

    #[must_use]
    pub fn with_fade_ms(mut self, fade_ms: u64) -> Self {
        self.fade_ms = fade_ms;
        self
    }

    #[must_use]
    pub fn with_regions(mut self, welcome: impl Into<RegionId>, login: impl Into<RegionId>) -> Self {
        self.welcome = welcome.into();
        self.login = login.into();
        self
    }
}
