//! # Transition Sequencer
//!
//! Drives the welcome slide out and the login panel in:
//!
//! 1. resolve both regions,
//! 2. **hold** for `hold_ms`,
//! 3. add the hide marker to the welcome slide,
//! 4. **fade** for `fade_ms`,
//! 5. collapse the welcome slide (`display: none`),
//! 6. add the show marker to the login panel.
//!
//! The two suspensions are strictly sequential. A region that does not
//! resolve only disables the mutations aimed at it; the rest of the sequence
//! still runs and the gap is reported.

use crate::error::{TransitionError, TransitionErrorExt};
use crate::host::{Document, Region, Timer};
use crate::progress::Progress;
use splash_domain::constants::DISPLAY_NONE;
use splash_domain::{Mutations, RegionId, Stage, TransitionConfig};
use tracing::{info, instrument, warn};

/// Outcome of one sequence run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionReport {
    pub welcome_found: bool,
    pub login_found: bool,
    /// Mutations that reached the document.
    pub applied: Mutations,
    /// Mutations dropped because their region was missing or the host refused them.
    pub skipped: Mutations,
    pub stage: Stage,
}

impl TransitionReport {
    const fn new(welcome_found: bool, login_found: bool) -> Self {
        Self {
            welcome_found,
            login_found,
            applied: Mutations::empty(),
            skipped: Mutations::empty(),
            stage: Stage::Pending,
        }
    }

    /// `true` when every mutation was applied.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.skipped.is_empty() && self.applied.contains(Mutations::ALL)
    }
}

/// Checks that `config` can describe a sequence at all.
///
/// # Errors
/// Returns [`TransitionError::InvalidConfig`] for blank region identifiers or markers.
pub fn validate_config(config: &TransitionConfig) -> Result<(), TransitionError> {
    let blank = |field: &'static str| TransitionError::InvalidConfig {
        message: format!("{field} cannot be empty").into(),
        context: None,
    };

    if config.welcome.is_blank() {
        return Err(blank("welcome region id"));
    }
    if config.login.is_blank() {
        return Err(blank("login region id"));
    }
    if config.hide_class.trim().is_empty() {
        return Err(blank("hide marker"));
    }
    if config.show_class.trim().is_empty() {
        return Err(blank("show marker"));
    }

    Ok(())
}

/// Runs the welcome-to-login transition against a host.
#[derive(Debug)]
pub struct TransitionSequencer<D, T> {
    document: D,
    timer: T,
    config: TransitionConfig,
    progress: Progress,
}

impl<D: Document, T: Timer> TransitionSequencer<D, T> {
    /// Creates a sequencer for `document`, suspending on `timer`.
    ///
    /// # Errors
    /// Returns [`TransitionError::InvalidConfig`] if `config` fails [`validate_config`].
    pub fn new(document: D, timer: T, config: TransitionConfig) -> Result<Self, TransitionError> {
        validate_config(&config).context("Creating transition sequencer")?;
        Ok(Self { document, timer, config, progress: Progress::detached() })
    }

    /// Publishes stage changes through `progress`.
    #[must_use]
    pub fn with_progress(mut self, progress: impl Into<Progress>) -> Self {
        self.progress = progress.into();
        self
    }

    #[must_use]
    pub const fn config(&self) -> &TransitionConfig {
        &self.config
    }

    /// Runs the sequence to completion.
    ///
    /// Never fails: missing regions and refused mutations are logged and
    /// recorded in the returned report.
    #[instrument(
        name = "transition",
        skip(self),
        fields(welcome = %self.config.welcome, login = %self.config.login)
    )]
    pub async fn run(self) -> TransitionReport {
        let welcome = self.resolve(&self.config.welcome);
        let login = self.resolve(&self.config.login);
        let mut report = TransitionReport::new(welcome.is_some(), login.is_some());

        info!(
            hold_ms = self.config.hold_ms,
            fade_ms = self.config.fade_ms,
            "Transition sequence started"
        );
        self.progress.advance(Stage::Pending);

        self.timer.sleep(self.config.hold()).await;
        apply(&mut report, Mutations::HIDE_WELCOME, welcome.as_ref(), |region| {
            region.add_class(&self.config.hide_class)
        });
        report.stage = Stage::Hiding;
        self.progress.advance(Stage::Hiding);

        self.timer.sleep(self.config.fade()).await;
        apply(&mut report, Mutations::COLLAPSE_WELCOME, welcome.as_ref(), |region| {
            region.set_display(DISPLAY_NONE)
        });
        apply(&mut report, Mutations::SHOW_LOGIN, login.as_ref(), |region| {
            region.add_class(&self.config.show_class)
        });
        report.stage = Stage::Shown;
        self.progress.advance(Stage::Shown);

        if report.is_complete() {
            info!("Transition sequence finished");
        } else {
            warn!(skipped = ?report.skipped, "Transition sequence finished with skipped mutations");
        }

        report
    }

    fn resolve(&self, id: &RegionId) -> Option<D::Region> {
        let region = self.document.find(id);
        if region.is_none() {
            warn!(region = %id, "Region not found, its mutations will be skipped");
        }
        region
    }
}

fn apply<R: Region>(
    report: &mut TransitionReport,
    mutation: Mutations,
    region: Option<&R>,
    op: impl FnOnce(&R) -> Result<(), TransitionError>,
) {
    let Some(region) = region else {
        report.skipped |= mutation;
        return;
    };

    match op(region) {
        Ok(()) => report.applied |= mutation,
        Err(error) => {
            warn!(region = %region.id(), %error, ?mutation, "Mutation refused by host");
            report.skipped |= mutation;
        },
    }
}
