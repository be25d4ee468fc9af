use crate::cli::Cli;
use anyhow::Context;
use splash_transition::headless::{HeadlessDocument, HeadlessPage};
use splash_transition::{Document, TransitionConfig, TransitionReport};
use tokio::time::Instant;
use tracing::info;

/// Plays one page load: builds the page, fires the load trigger, follows the
/// stages and reports what the document looks like afterwards.
pub(crate) async fn run(cli: &Cli, config: TransitionConfig) -> anyhow::Result<TransitionReport> {
    let document = HeadlessDocument::new();
    if !cli.omit_welcome {
        document.insert(config.welcome.clone());
    }
    if !cli.omit_login {
        document.insert(config.login.clone());
    }
    let ids = [config.welcome.clone(), config.login.clone()];

    let page = HeadlessPage::new(document.clone(), config);
    let mut stages = page.subscribe();
    let started = Instant::now();

    let sequence = page.dom_content_loaded()?.context("Load trigger already fired")?;

    let follower = tokio::spawn(async move {
        while stages.changed().await.is_ok() {
            let stage = *stages.borrow_and_update();
            info!(%stage, elapsed_ms = started.elapsed().as_millis(), "Stage reached");
            if stage.is_final() {
                break;
            }
        }
    });

    let report = sequence.await.context("Transition task failed")?;
    follower.await.context("Stage follower failed")?;

    for id in &ids {
        match document.find(id) {
            Some(region) => info!(
                region = %id,
                classes = ?region.classes(),
                display = region.display().as_deref().unwrap_or("-"),
                "Region state"
            ),
            None => info!(region = %id, "Region absent"),
        }
    }

    info!(
        applied = ?report.applied,
        skipped = ?report.skipped,
        complete = report.is_complete(),
        "Rehearsal finished"
    );
    Ok(report)
}
