//! # Transition
//!
//! Hides the welcome slide and reveals the login panel once per page load:
//! hold for 3 s, add the `hide` marker, wait 1 s for the fade, collapse the
//! slide and add the `show` marker to the login panel.
//!
//! The [`TransitionSequencer`] is host-agnostic; it reaches the page through
//! the [`Document`] and [`Timer`] seams.
//!
//! * `wasm32` builds get the browser host (`web` module): real DOM elements,
//!   `setTimeout` suspensions and a one-time `DOMContentLoaded` listener.
//! * The `headless` feature (default) adds an in-memory page driven by
//!   `tokio::time`, used by tests and the native rehearsal CLI.
//!
//! ## Example
//!
//! ```rust
//! # #[cfg(feature = "headless")]
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! use splash_transition::headless::{HeadlessDocument, TokioTimer};
//! use splash_transition::{TransitionConfig, TransitionSequencer};
//!
//! let config = TransitionConfig::default().with_hold_ms(0).with_fade_ms(0);
//! let document = HeadlessDocument::for_config(&config);
//!
//! let report = TransitionSequencer::new(document, TokioTimer, config).unwrap().run().await;
//! assert!(report.is_complete());
//! # }
//! # #[cfg(not(feature = "headless"))]
//! # fn main() {}
//! ```

mod error;
pub mod host;
pub mod overrides;
pub mod progress;
pub mod sequencer;
pub mod trigger;

#[cfg(feature = "headless")]
pub mod headless;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use crate::error::{TransitionError, TransitionErrorExt};
pub use crate::host::{Document, Region, Timer};
pub use crate::progress::{Progress, ProgressReceiver};
pub use crate::sequencer::{TransitionReport, TransitionSequencer, validate_config};
pub use crate::trigger::OnceTrigger;
pub use splash_domain::{Mutations, RegionId, Stage, TransitionConfig};
