#![cfg(feature = "headless")]

use splash_transition::headless::{Change, HeadlessDocument, HeadlessPage, TokioTimer};
use splash_transition::{
    Document, Mutations, RegionId, Stage, TransitionConfig, TransitionError, TransitionSequencer,
};
use std::time::Duration;
use tokio::time::advance;

/// Lets spawned tasks run until they park on a timer.
async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}

fn default_ids() -> (RegionId, RegionId) {
    let cfg = TransitionConfig::default();
    (cfg.welcome, cfg.login)
}

#[tokio::test(start_paused = true)]
async fn nothing_changes_before_the_hold_elapses() {
    let config = TransitionConfig::default();
    let document = HeadlessDocument::for_config(&config);
    let (welcome, login) = default_ids();
    let page = HeadlessPage::new(document.clone(), config);

    let _handle = page.dom_content_loaded().unwrap().expect("first dispatch spawns");
    settle().await;

    advance(Duration::from_millis(2999)).await;
    settle().await;

    assert!(document.find(&welcome).unwrap().is_pristine());
    assert!(document.find(&login).unwrap().is_pristine());
    assert!(document.journal().is_empty());
    assert_eq!(*page.subscribe().borrow(), Stage::Pending);
}

#[tokio::test(start_paused = true)]
async fn hide_marker_lands_at_three_seconds() {
    let config = TransitionConfig::default();
    let document = HeadlessDocument::for_config(&config);
    let (welcome, login) = default_ids();
    let page = HeadlessPage::new(document.clone(), config);

    let _handle = page.dom_content_loaded().unwrap().expect("first dispatch spawns");
    settle().await;

    advance(Duration::from_millis(3000)).await;
    settle().await;

    let welcome = document.find(&welcome).unwrap();
    assert!(welcome.has_class("hide"));
    assert_eq!(welcome.display(), None, "collapse waits for the fade");
    assert!(document.find(&login).unwrap().is_pristine(), "login is untouched while fading");
    assert_eq!(*page.subscribe().borrow(), Stage::Hiding);
}

#[tokio::test(start_paused = true)]
async fn login_is_shown_after_the_fade() {
    let config = TransitionConfig::default();
    let document = HeadlessDocument::for_config(&config);
    let (welcome, login) = default_ids();
    let page = HeadlessPage::new(document.clone(), config);

    let handle = page.dom_content_loaded().unwrap().expect("first dispatch spawns");
    settle().await;

    advance(Duration::from_millis(3000)).await;
    settle().await;
    advance(Duration::from_millis(999)).await;
    settle().await;
    assert!(!document.find(&login).unwrap().has_class("show"), "fade not finished yet");

    advance(Duration::from_millis(1)).await;
    settle().await;

    let welcome = document.find(&welcome).unwrap();
    let login = document.find(&login).unwrap();
    assert_eq!(welcome.display().as_deref(), Some("none"));
    assert!(welcome.has_class("hide"));
    assert_eq!(login.classes(), vec!["show".to_owned()]);
    assert_eq!(*page.subscribe().borrow(), Stage::Shown);

    let report = handle.await.expect("sequence task");
    assert!(report.is_complete());
    assert_eq!(report.applied, Mutations::ALL);
    assert_eq!(report.stage, Stage::Shown);
}

#[tokio::test(start_paused = true)]
async fn mutations_are_strictly_ordered() {
    let config = TransitionConfig::default();
    let document = HeadlessDocument::for_config(&config);
    let (welcome, login) = default_ids();
    let page = HeadlessPage::new(document.clone(), config);

    let mut stages = page.subscribe();
    let handle = page.dom_content_loaded().unwrap().expect("first dispatch spawns");

    // Auto-advance of paused time drives the whole sequence.
    stages.wait_for(|stage| *stage == Stage::Hiding).await.expect("hiding");
    assert!(!document.find(&login).unwrap().has_class("show"));
    stages.wait_for(|stage| stage.is_final()).await.expect("shown");
    handle.await.expect("sequence task");

    assert_eq!(
        document.journal(),
        vec![
            Change::ClassAdded { region: welcome.clone(), class: "hide".to_owned() },
            Change::Display { region: welcome, value: "none".to_owned() },
            Change::ClassAdded { region: login, class: "show".to_owned() },
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn load_trigger_fires_once() {
    let config = TransitionConfig::default();
    let document = HeadlessDocument::for_config(&config);
    let page = HeadlessPage::new(document.clone(), config);

    let handle = page.dom_content_loaded().unwrap().expect("first dispatch spawns");
    assert!(page.dom_content_loaded().unwrap().is_none());

    handle.await.expect("sequence task");
    assert!(page.dom_content_loaded().unwrap().is_none(), "no re-run after completion");
    assert_eq!(document.journal().len(), 3);
}

#[tokio::test(start_paused = true)]
async fn missing_welcome_still_reveals_login() {
    let config = TransitionConfig::default();
    let document = HeadlessDocument::new();
    let login = document.insert(config.login.clone());
    let page = HeadlessPage::new(document.clone(), config);

    let report = page.dom_content_loaded().unwrap().expect("spawned").await.expect("no panic");

    assert!(!report.welcome_found);
    assert!(report.login_found);
    assert_eq!(report.skipped, Mutations::WELCOME);
    assert_eq!(report.applied, Mutations::SHOW_LOGIN);
    assert!(login.has_class("show"));
}

#[tokio::test(start_paused = true)]
async fn missing_login_keeps_welcome_transition() {
    let config = TransitionConfig::default();
    let document = HeadlessDocument::new();
    let welcome = document.insert(config.welcome.clone());

    let report = TransitionSequencer::new(&document, TokioTimer, config).unwrap().run().await;

    assert!(!report.login_found);
    assert_eq!(report.applied, Mutations::WELCOME);
    assert_eq!(report.skipped, Mutations::SHOW_LOGIN);
    assert_eq!(welcome.display().as_deref(), Some("none"));
}

#[tokio::test(start_paused = true)]
async fn detached_region_is_reported_not_fatal() {
    let config = TransitionConfig::default();
    let document = HeadlessDocument::for_config(&config);
    let page = HeadlessPage::new(document.clone(), config.clone());

    let handle = page.dom_content_loaded().unwrap().expect("spawned");
    settle().await;

    assert!(document.remove(&config.welcome));
    let report = handle.await.expect("no panic");

    assert!(report.welcome_found, "resolved before it was removed");
    assert_eq!(report.skipped, Mutations::WELCOME);
    assert!(report.applied.contains(Mutations::SHOW_LOGIN));
}

#[tokio::test(start_paused = true)]
async fn custom_delays_and_markers_are_honored() {
    let config = TransitionConfig {
        hide_class: "fade-out".to_owned(),
        show_class: "visible".to_owned(),
        ..TransitionConfig::default().with_hold_ms(100).with_fade_ms(50).with_regions("intro", "auth")
    };
    let document = HeadlessDocument::for_config(&config);
    let page = HeadlessPage::new(document.clone(), config);

    let _handle = page.dom_content_loaded().unwrap().expect("spawned");
    settle().await;

    advance(Duration::from_millis(100)).await;
    settle().await;
    assert!(document.find(&RegionId::from("intro")).unwrap().has_class("fade-out"));

    advance(Duration::from_millis(50)).await;
    settle().await;
    assert!(document.find(&RegionId::from("auth")).unwrap().has_class("visible"));
}

#[tokio::test]
async fn invalid_config_is_rejected_before_spawning() {
    let config = TransitionConfig::default().with_regions("", "loginPage");
    let page = HeadlessPage::new(HeadlessDocument::for_config(&config), config);

    let err = page.dom_content_loaded().expect_err("blank id");
    assert!(matches!(err, TransitionError::InvalidConfig { .. }));
}

#[test]
fn dispatch_outside_runtime_is_host_error() {
    let config = TransitionConfig::default();
    let page = HeadlessPage::new(HeadlessDocument::for_config(&config), config);

    let err = page.dom_content_loaded().expect_err("no runtime");
    assert!(matches!(err, TransitionError::HostUnavailable { .. }));
}
