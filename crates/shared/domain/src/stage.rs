use serde::{Deserialize, Serialize};
use std::fmt;

/// Progress of a transition sequence.
///
/// Stages only move forward: `Pending` -> `Hiding` -> `Shown`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// Triggered, holding the welcome slide on screen.
    #[default]
    Pending,
    /// The hide marker is applied and the fade is running.
    Hiding,
    /// The welcome slide is collapsed and the login panel is shown.
    Shown,
}

impl Stage {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Hiding => "hiding",
            Self::Shown => "shown",
        }
    }

    #[must_use]
    pub const fn is_final(self) -> bool {
        matches!(self, Self::Shown)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
