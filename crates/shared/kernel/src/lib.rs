//! Kernel utilities shared across hosts.
//! Keep this crate lightweight; it re-exports the domain and owns config loading.
//!
//! ## Config loading (non-wasm)
//! ```rust,ignore
//! #[cfg(not(target_arch = "wasm32"))]
//! # {
//!     use splash_kernel::config::load_config;
//!     let cfg: splash_kernel::domain::TransitionConfig = load_config(Some("splash.toml")).unwrap();
//! # }
//! ```
#[cfg(not(target_arch = "wasm32"))]
pub mod config;

pub use splash_domain as domain;
