//! Per-page tuning through `data-splash-*` attributes on `<body>`.
//!
//! ```html
//! <body data-splash-hold-ms="1500" data-splash-fade-ms="400">
//! ```

use splash_domain::TransitionConfig;
use tracing::warn;

pub const HOLD_ATTRIBUTE: &str = "data-splash-hold-ms";
pub const FADE_ATTRIBUTE: &str = "data-splash-fade-ms";

/// Overlays delay attributes found through `lookup` onto `config`.
///
/// Unparsable values are ignored with a warning; the configured delay stays.
#[must_use]
pub fn apply_overrides(
    mut config: TransitionConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> TransitionConfig {
    if let Some(ms) = parse_millis(HOLD_ATTRIBUTE, lookup(HOLD_ATTRIBUTE)) {
        config.hold_ms = ms;
    }
    if let Some(ms) = parse_millis(FADE_ATTRIBUTE, lookup(FADE_ATTRIBUTE)) {
        config.fade_ms = ms;
    }
    config
}

fn parse_millis(attribute: &str, raw: Option<String>) -> Option<u64> {
    let raw = raw?;
    match raw.trim().parse::<u64>() {
        Ok(ms) => Some(ms),
        Err(error) => {
            warn!(attribute, value = %raw, %error, "Ignoring invalid delay override");
            None
        },
    }
}
