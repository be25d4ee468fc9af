//! # Domain Models
//!
//! Pure types shared by the transition sequencer and its hosts, with minimal
//! dependencies (`serde`, `bitflags`). Keep it lean: no I/O, no DOM, no timers,
//! just data and simple helpers.

pub mod config;
pub mod constants;
pub mod mutations;
pub mod region;
pub mod stage;

pub use config::TransitionConfig;
pub use mutations::Mutations;
pub use region::RegionId;
pub use stage::Stage;
