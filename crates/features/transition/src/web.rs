//! # Browser host
//!
//! Binds the sequencer to the real page: regions are `HtmlElement`s found by
//! id, suspensions are `setTimeout` promises, and the sequence starts from a
//! one-time `DOMContentLoaded` listener registered on `window`.

use crate::error::{TransitionError, TransitionErrorExt};
use crate::host::{Document, Region, Timer};
use crate::overrides::apply_overrides;
use crate::sequencer::{TransitionSequencer, validate_config};
use crate::trigger::OnceTrigger;
use js_sys::{Function, Promise};
use splash_domain::{RegionId, TransitionConfig};
use std::time::Duration;
use tracing::{debug, info, warn};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{AddEventListenerOptions, HtmlElement, Window};

const DOM_CONTENT_LOADED: &str = "DOMContentLoaded";
const READY_STATE_LOADING: &str = "loading";

/// One sequence per page load, no matter how often the event is re-dispatched.
static PAGE_TRIGGER: OnceTrigger = OnceTrigger::new();

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

fn browser_window() -> Result<Window, TransitionError> {
    web_sys::window().ok_or(TransitionError::HostUnavailable {
        message: "no global `window`".into(),
        context: None,
    })
}

fn dom_error(value: &JsValue, operation: &'static str) -> TransitionError {
    TransitionError::Dom { message: describe(value).into(), context: Some(operation.into()) }
}

/// The page's `document`.
#[derive(Debug, Clone)]
pub struct WebDocument {
    document: web_sys::Document,
}

impl WebDocument {
    /// Resolves `window.document`.
    ///
    /// # Errors
    /// Returns [`TransitionError::HostUnavailable`] outside a browsing context.
    pub fn current() -> Result<Self, TransitionError> {
        Self::of(&browser_window()?)
    }

    /// The document displayed in `window`.
    ///
    /// # Errors
    /// Returns [`TransitionError::HostUnavailable`] if `window` has no document.
    pub fn of(window: &Window) -> Result<Self, TransitionError> {
        let document = window.document().ok_or(TransitionError::HostUnavailable {
            message: "window has no `document`".into(),
            context: None,
        })?;
        Ok(Self { document })
    }

    /// `true` while the parser is still building the DOM.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.document.ready_state() == READY_STATE_LOADING
    }

    /// Reads an attribute of `<body>`, if both exist.
    #[must_use]
    pub fn body_attribute(&self, name: &str) -> Option<String> {
        self.document.body().and_then(|body| body.get_attribute(name))
    }
}

impl Document for WebDocument {
    type Region = WebRegion;

    fn find(&self, id: &RegionId) -> Option<WebRegion> {
        let element = self.document.get_element_by_id(id.as_str())?;
        match element.dyn_into::<HtmlElement>() {
            Ok(element) => Some(WebRegion { id: id.clone(), element }),
            Err(_) => {
                warn!(region = %id, "Element is not an HtmlElement, cannot restyle it");
                None
            },
        }
    }
}

/// An element of the page.
#[derive(Debug, Clone)]
pub struct WebRegion {
    id: RegionId,
    element: HtmlElement,
}

impl Region for WebRegion {
    fn id(&self) -> &RegionId {
        &self.id
    }

    fn add_class(&self, class: &str) -> Result<(), TransitionError> {
        self.element.class_list().add_1(class).map_err(|e| dom_error(&e, "classList.add"))
    }

    fn set_display(&self, value: &str) -> Result<(), TransitionError> {
        self.element
            .style()
            .set_property("display", value)
            .map_err(|e| dom_error(&e, "style.setProperty"))
    }
}

/// [`Timer`] resolving a promise from `window.setTimeout`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserTimer;

impl Timer for BrowserTimer {
    async fn sleep(&self, duration: Duration) {
        let millis = i32::try_from(duration.as_millis()).unwrap_or(i32::MAX);
        let promise = Promise::new(&mut |resolve: Function, _reject: Function| {
            let scheduled = web_sys::window().map(|window| {
                window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis)
            });
            match scheduled {
                Some(Ok(_)) => {},
                Some(Err(e)) => {
                    warn!(error = %describe(&e), "setTimeout failed, resuming immediately");
                    let _ = resolve.call0(&JsValue::UNDEFINED);
                },
                None => {
                    warn!("No window to schedule on, resuming immediately");
                    let _ = resolve.call0(&JsValue::UNDEFINED);
                },
            }
        });

        if let Err(e) = JsFuture::from(promise).await {
            warn!(error = %describe(&e), "Timer promise rejected");
        }
    }
}

/// Arms the transition for the current page.
///
/// Registers a one-time `DOMContentLoaded` listener on `window`. When the
/// document has already been parsed the sequence starts right away instead.
/// The listener lives as long as the page; there is no teardown.
///
/// # Errors
/// Returns [`TransitionError::InvalidConfig`] for an unusable configuration,
/// [`TransitionError::HostUnavailable`] outside a browsing context, or
/// [`TransitionError::Dom`] if the listener cannot be registered.
pub fn install(config: TransitionConfig) -> Result<(), TransitionError> {
    validate_config(&config)?;

    let window = browser_window().context("Installing transition")?;
    let document = WebDocument::of(&window).context("Installing transition")?;

    if !document.is_loading() {
        debug!("Document already parsed, starting transition now");
        start(document, config);
        return Ok(());
    }

    let options = AddEventListenerOptions::new();
    options.set_once(true);

    let callback = wasm_bindgen::closure::Closure::once_into_js(move || start(document, config));
    window
        .add_event_listener_with_callback_and_add_event_listener_options(
            DOM_CONTENT_LOADED,
            callback.unchecked_ref(),
            &options,
        )
        .map_err(|e| dom_error(&e, "addEventListener"))?;

    debug!("Transition armed on {DOM_CONTENT_LOADED}");
    Ok(())
}

fn start(document: WebDocument, config: TransitionConfig) {
    if !PAGE_TRIGGER.fire() {
        return;
    }

    let config = apply_overrides(config, |name| document.body_attribute(name));
    let sequencer = match TransitionSequencer::new(document, BrowserTimer, config) {
        Ok(sequencer) => sequencer,
        Err(error) => {
            warn!(%error, "Cannot start transition");
            return;
        },
    };

    spawn_local(async move {
        let report = sequencer.run().await;
        info!(applied = ?report.applied, skipped = ?report.skipped, "Welcome transition done");
    });
}
