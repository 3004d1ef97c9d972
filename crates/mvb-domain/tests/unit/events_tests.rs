//! Tests for lifecycle events

use mvb_domain::{Error, MediationEvent};

#[test]
fn test_event_codes() {
    let codes: Vec<&str> = MediationEvent::ALL.iter().map(|e| e.as_str()).collect();
    assert_eq!(codes, vec!["AWAKE", "ENABLED", "DISABLED", "DESTROYED"]);
    assert_eq!(MediationEvent::Destroyed.to_string(), "DESTROYED");
}

#[test]
fn test_parse_is_case_insensitive() {
    assert_eq!("awake".parse::<MediationEvent>().unwrap(), MediationEvent::Awake);
    assert_eq!("Disabled".parse::<MediationEvent>().unwrap(), MediationEvent::Disabled);
}

#[test]
fn test_parse_unknown_event_fails() {
    let err = "start".parse::<MediationEvent>().unwrap_err();

    assert!(matches!(err, Error::Binding { .. }));
    assert!(err.to_string().contains("start"));
}

#[test]
fn test_serde_uses_screaming_case() {
    let json = serde_json::to_string(&MediationEvent::Awake).unwrap();
    assert_eq!(json, "\"AWAKE\"");

    let event: MediationEvent = serde_json::from_str("\"DESTROYED\"").unwrap();
    assert_eq!(event, MediationEvent::Destroyed);
}
