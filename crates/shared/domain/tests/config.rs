use serde_json::json;
use splash_domain::constants::{FADE_MS, HOLD_MS, LOGIN_PAGE, WELCOME_SLIDE};
use splash_domain::{Mutations, RegionId, Stage, TransitionConfig};
use std::time::Duration;

#[test]
fn config_defaults_match_page_contract() {
    let cfg = TransitionConfig::default();
    assert_eq!(cfg.welcome.as_str(), WELCOME_SLIDE);
    assert_eq!(cfg.login.as_str(), LOGIN_PAGE);
    assert_eq!(cfg.hide_class, "hide");
    assert_eq!(cfg.show_class, "show");
    assert_eq!(cfg.hold(), Duration::from_millis(HOLD_MS));
    assert_eq!(cfg.fade(), Duration::from_millis(FADE_MS));
    assert_eq!(cfg.total(), Duration::from_secs(4));
}

#[test]
fn config_deserializes_partial_documents() {
    let raw = json!({ "welcome": "intro", "hold_ms": 250 });

    let cfg: TransitionConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.welcome, RegionId::from("intro"));
    assert_eq!(cfg.login.as_str(), LOGIN_PAGE);
    assert_eq!(cfg.hold_ms, 250);
    assert_eq!(cfg.fade_ms, FADE_MS);
}

#[test]
fn config_deserializes_empty_document() {
    let cfg: TransitionConfig = serde_json::from_value(json!({})).expect("config deserialize");
    assert_eq!(cfg, TransitionConfig::default());
}

#[test]
fn builders_override_fields() {
    let cfg = TransitionConfig::default().with_hold_ms(10).with_fade_ms(5).with_regions("a", "b");
    assert_eq!(cfg.total(), Duration::from_millis(15));
    assert_eq!(cfg.welcome.as_str(), "a");
    assert_eq!(cfg.login.as_str(), "b");
}

#[test]
fn blank_region_ids_are_detected() {
    assert!(RegionId::from("  ").is_blank());
    assert!(!RegionId::from("loginPage").is_blank());
}

#[test]
fn stages_are_ordered_and_lowercase() {
    assert!(Stage::Pending < Stage::Hiding);
    assert!(Stage::Hiding < Stage::Shown);
    assert!(Stage::Shown.is_final());
    assert_eq!(Stage::Hiding.to_string(), "hiding");
    assert_eq!(serde_json::to_value(Stage::Shown).expect("serialize"), json!("shown"));
}

#[test]
fn mutations_serialize_as_bits() {
    let applied = Mutations::HIDE_WELCOME | Mutations::SHOW_LOGIN;
    let raw = serde_json::to_value(applied).expect("serialize");
    assert_eq!(raw, json!(0b101));

    let back: Mutations = serde_json::from_value(raw).expect("deserialize");
    assert_eq!(back, applied);
    assert_eq!(Mutations::WELCOME | Mutations::SHOW_LOGIN, Mutations::ALL);
}
