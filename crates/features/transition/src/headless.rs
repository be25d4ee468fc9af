//! # Headless host
//!
//! An in-memory page for native runs: a shared [`HeadlessDocument`] whose
//! regions record class and `display` changes, a [`TokioTimer`] that honors
//! paused time in tests, and a [`HeadlessPage`] that plays the role of the
//! browser's one-time `DOMContentLoaded` listener.

use crate::error::TransitionError;
use crate::host::{Document, Region, Timer};
use crate::progress::{self, Progress, ProgressReceiver};
use crate::sequencer::{TransitionReport, TransitionSequencer};
use crate::trigger::OnceTrigger;
use fxhash::FxHashMap;
use parking_lot::Mutex;
use splash_domain::{RegionId, TransitionConfig};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::debug;

/// One recorded mutation, in the order the document received it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    ClassAdded { region: RegionId, class: String },
    Display { region: RegionId, value: String },
}

#[derive(Debug, Default)]
struct RegionState {
    classes: Vec<String>,
    display: Option<String>,
}

#[derive(Debug, Default)]
struct DocumentState {
    regions: FxHashMap<RegionId, RegionState>,
    journal: Vec<Change>,
}

/// Shared in-memory document. Clones see the same regions.
#[derive(Debug, Clone, Default)]
pub struct HeadlessDocument {
    state: Arc<Mutex<DocumentState>>,
}

impl HeadlessDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A document exposing the welcome and login regions named by `config`.
    #[must_use]
    pub fn for_config(config: &TransitionConfig) -> Self {
        let document = Self::new();
        document.insert(config.welcome.clone());
        document.insert(config.login.clone());
        document
    }

    /// Adds an empty region. Re-inserting an existing id resets it.
    pub fn insert(&self, id: impl Into<RegionId>) -> HeadlessRegion {
        let id = id.into();
        self.state.lock().regions.insert(id.clone(), RegionState::default());
        HeadlessRegion { id, document: self.clone() }
    }

    /// Detaches a region. Handles resolved earlier start refusing mutations.
    pub fn remove(&self, id: &RegionId) -> bool {
        self.state.lock().regions.remove(id).is_some()
    }

    /// Every mutation received so far, oldest first.
    #[must_use]
    pub fn journal(&self) -> Vec<Change> {
        self.state.lock().journal.clone()
    }

    fn mutate(
        &self,
        id: &RegionId,
        f: impl FnOnce(&mut RegionState) -> Option<Change>,
    ) -> Result<(), TransitionError> {
        let mut state = self.state.lock();
        let Some(region) = state.regions.get_mut(id) else {
            return Err(TransitionError::Dom {
                message: format!("region '{id}' is no longer attached").into(),
                context: None,
            });
        };
        if let Some(change) = f(region) {
            state.journal.push(change);
        }
        Ok(())
    }

    fn read<R>(&self, id: &RegionId, f: impl FnOnce(&RegionState) -> R) -> Option<R> {
        self.state.lock().regions.get(id).map(f)
    }
}

impl Document for HeadlessDocument {
    type Region = HeadlessRegion;

    fn find(&self, id: &RegionId) -> Option<HeadlessRegion> {
        self.state
            .lock()
            .regions
            .contains_key(id)
            .then(|| HeadlessRegion { id: id.clone(), document: self.clone() })
    }
}

/// Handle to a region of a [`HeadlessDocument`].
#[derive(Debug, Clone)]
pub struct HeadlessRegion {
    id: RegionId,
    document: HeadlessDocument,
}

impl HeadlessRegion {
    /// Current class list in insertion order; empty once detached.
    #[must_use]
    pub fn classes(&self) -> Vec<String> {
        self.document.read(&self.id, |r| r.classes.clone()).unwrap_or_default()
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.document.read(&self.id, |r| r.classes.iter().any(|c| c == class)).unwrap_or(false)
    }

    /// Inline `display` value, if one was set.
    #[must_use]
    pub fn display(&self) -> Option<String> {
        self.document.read(&self.id, |r| r.display.clone()).flatten()
    }

    /// `true` while the region has neither classes nor an inline display.
    #[must_use]
    pub fn is_pristine(&self) -> bool {
        self.document
            .read(&self.id, |r| r.classes.is_empty() && r.display.is_none())
            .unwrap_or(true)
    }
}

impl Region for HeadlessRegion {
    fn id(&self) -> &RegionId {
        &self.id
    }

    fn add_class(&self, class: &str) -> Result<(), TransitionError> {
        self.document.mutate(&self.id, |region| {
            if region.classes.iter().any(|c| c == class) {
                return None;
            }
            region.classes.push(class.to_owned());
            Some(Change::ClassAdded { region: self.id.clone(), class: class.to_owned() })
        })
    }

    fn set_display(&self, value: &str) -> Result<(), TransitionError> {
        self.document.mutate(&self.id, |region| {
            region.display = Some(value.to_owned());
            Some(Change::Display { region: self.id.clone(), value: value.to_owned() })
        })
    }
}

/// [`Timer`] backed by `tokio::time`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioTimer;

impl Timer for TokioTimer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        tokio::time::sleep(duration)
    }
}

/// A page lifetime: one document, one configuration, one load trigger.
#[derive(Debug)]
pub struct HeadlessPage {
    document: HeadlessDocument,
    config: TransitionConfig,
    trigger: OnceTrigger,
    progress: Progress,
    receiver: ProgressReceiver,
}

impl HeadlessPage {
    #[must_use]
    pub fn new(document: HeadlessDocument, config: TransitionConfig) -> Self {
        let (progress, receiver) = progress::channel();
        Self { document, config, trigger: OnceTrigger::new(), progress, receiver }
    }

    #[must_use]
    pub const fn document(&self) -> &HeadlessDocument {
        &self.document
    }

    /// Follows the stage of the page's sequence.
    #[must_use]
    pub fn subscribe(&self) -> ProgressReceiver {
        self.receiver.clone()
    }

    /// Dispatches the structural-load event.
    ///
    /// The first dispatch spawns the sequence on the current tokio runtime and
    /// returns its handle; later dispatches return `Ok(None)`.
    ///
    /// # Errors
    /// Returns [`TransitionError::InvalidConfig`] if the page configuration is invalid,
    /// or [`TransitionError::HostUnavailable`] outside a tokio runtime.
    pub fn dom_content_loaded(
        &self,
    ) -> Result<Option<JoinHandle<TransitionReport>>, TransitionError> {
        if !self.trigger.fire() {
            return Ok(None);
        }

        let runtime =
            tokio::runtime::Handle::try_current().map_err(|e| TransitionError::HostUnavailable {
                message: e.to_string().into(),
                context: Some("Spawning transition sequence".into()),
            })?;

        let sequencer =
            TransitionSequencer::new(self.document.clone(), TokioTimer, self.config.clone())?
                .with_progress(self.progress.clone());

        debug!("Structural load complete, spawning transition");
        Ok(Some(runtime.spawn(sequencer.run())))
    }
}
