//! Browser entry point.
//!
//! Loading the generated module arms the transition: on `DOMContentLoaded`
//! the `#welcomeSlide` region fades out after 3 s and `#loginPage` appears
//! one second later. Delays can be tuned per page with
//! `data-splash-hold-ms` / `data-splash-fade-ms` on `<body>`.
#![cfg(target_arch = "wasm32")]

use splash_logger::{LevelFilter, Logger};
use splash_transition::TransitionConfig;
use wasm_bindgen::prelude::*;

/// Module start hook, run once when the wasm module is instantiated.
///
/// # Errors
/// Rejects the module promise when the transition cannot be armed.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    // A host page may already own the global subscriber; the transition runs either way.
    if let Err(error) =
        Logger::builder().name(env!("CARGO_PKG_NAME")).level(LevelFilter::INFO).init()
    {
        tracing::warn!(%error, "Browser logger not installed");
    }

    splash_transition::web::install(TransitionConfig::default())
        .map_err(|error| JsValue::from_str(&error.to_string()))
}
