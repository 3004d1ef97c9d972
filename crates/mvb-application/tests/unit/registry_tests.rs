//! Tests for the mediation host registry
//!
//! Registers a host from this test crate to exercise the linkme slice the
//! same way an embedding application would.

use std::sync::Arc;

use mvb_application::ports::registry::{
    MEDIATION_HOSTS, MediationHostConfig, MediationHostEntry, list_mediation_hosts,
    resolve_mediation_host,
};
use mvb_application::{DefaultHost, MediationHost};

#[linkme::distributed_slice(MEDIATION_HOSTS)]
static TEST_HOST: MediationHostEntry = MediationHostEntry {
    name: "unit-test",
    description: "Default host registered by the unit suite",
    factory: |config| {
        if config.extra.contains_key("fail") {
            return Err("requested failure".to_string());
        }
        Ok(Arc::new(DefaultHost))
    },
};

#[test]
fn test_config_builder() {
    let config = MediationHostConfig::new("scene").with_extra("layer", "ui");

    assert_eq!(config.name, "scene");
    assert_eq!(config.extra.get("layer"), Some(&"ui".to_string()));
}

#[test]
fn test_list_includes_registered_host() {
    let hosts = list_mediation_hosts();

    assert!(
        hosts.iter().any(|(name, _)| *name == "unit-test"),
        "unit-test host should be registered. Available: {hosts:?}"
    );
}

#[test]
fn test_resolve_registered_host() {
    let host = resolve_mediation_host(&MediationHostConfig::new("unit-test"))
        .expect("registered host should resolve");

    assert_eq!(host.name(), "default");
}

#[test]
fn test_resolve_unknown_host_lists_available() {
    let err = match resolve_mediation_host(&MediationHostConfig::new("nonexistent")) {
        Ok(_) => panic!("unknown host should fail"),
        Err(err) => err,
    };

    assert!(err.contains("Unknown mediation host 'nonexistent'"));
    assert!(err.contains("unit-test"));
}

#[test]
fn test_factory_error_is_reported() {
    let config = MediationHostConfig::new("unit-test").with_extra("fail", "true");
    let result = resolve_mediation_host(&config);

    assert_eq!(result.err(), Some("requested failure".to_string()));
}
