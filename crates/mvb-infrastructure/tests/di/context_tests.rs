//! Context bootstrap tests

use std::sync::Arc;

use mvb_application::ports::registry::list_mediation_hosts;
use mvb_domain::error::Error;
use mvb_domain::{MediationEvent, Mediator, View, ViewRef, ViewState};
use mvb_infrastructure::config::MediationConfig;
use mvb_infrastructure::di::{InjectionBinder, MediationHostHandle, init_context};

#[derive(Default)]
struct MenuView {
    state: ViewState,
}

impl View for MenuView {
    fn registered_with_context(&self) -> bool {
        self.state.registered_with_context()
    }

    fn set_registered_with_context(&self, registered: bool) {
        self.state.set_registered_with_context(registered);
    }
}

#[derive(Default)]
struct MenuMediator;

impl Mediator for MenuMediator {}

fn config_with_host(host: &str) -> MediationConfig {
    let mut config = MediationConfig::default();
    config.mediation.host = host.to_string();
    config
}

#[test]
fn test_builtin_hosts_are_registered() {
    let names: Vec<&str> = list_mediation_hosts().into_iter().map(|(n, _)| n).collect();

    assert!(names.contains(&"detached"));
    assert!(names.contains(&"inject-only"));
}

#[test]
fn test_init_context_with_defaults() {
    let context = init_context(MediationConfig::default()).unwrap();

    assert_eq!(context.host().name(), "detached");
    assert_eq!(context.config(), &MediationConfig::default());
    assert!(context.injection_binder().is_empty());
}

#[test]
fn test_catalog_exposes_services() {
    let context = init_context(MediationConfig::default()).unwrap();
    let catalog = context.catalog();

    let config = catalog.get_one::<MediationConfig>().unwrap();
    assert_eq!(config.mediation.host, "detached");

    let host = catalog.get_one::<MediationHostHandle>().unwrap().get();
    assert!(Arc::ptr_eq(&host, context.host()));

    let injection = catalog.get_one::<InjectionBinder>().unwrap();
    injection.bind::<String>().to_value("shared".to_string());
    assert!(context.injection_binder().is_bound_type::<String>());
}

#[test]
fn test_unknown_host_fails_with_available_list() {
    let err = init_context(config_with_host("scene")).unwrap_err();

    assert!(matches!(err, Error::Configuration { .. }));
    let message = err.to_string();
    assert!(message.contains("Unknown mediation host 'scene'"));
    assert!(message.contains("detached"));
}

#[test]
fn test_invalid_config_is_rejected() {
    let mut config = MediationConfig::default();
    config.mediation.max_depth = 0;

    assert!(init_context(config).is_err());
}

#[test]
fn test_create_binder_uses_config() {
    let mut config = MediationConfig::default();
    config.mediation.max_depth = 7;
    let context = init_context(config).unwrap();

    let binder = context.create_binder();
    assert_eq!(binder.max_depth(), 7);
    assert_eq!(binder.host().name(), "detached");
    assert_eq!(binder.binding_count(), 0);
}

#[test]
fn test_detached_host_mediates_bound_views() {
    let context = init_context(MediationConfig::default()).unwrap();
    let mut binder = context.create_binder();
    binder.bind::<MenuView>().to::<MenuMediator>();

    let view: ViewRef = Arc::new(MenuView::default());
    binder.trigger(MediationEvent::Awake, &view).unwrap();
    assert!(binder.mediator_for::<MenuMediator>(&view).is_some());

    binder.trigger(MediationEvent::Destroyed, &view).unwrap();
    assert!(binder.mediators().is_empty());
}

#[test]
fn test_inject_only_host_never_creates_mediators() {
    let context = init_context(config_with_host("inject-only")).unwrap();
    let mut binder = context.create_binder();
    binder.bind::<MenuView>().to::<MenuMediator>();

    let view: ViewRef = Arc::new(MenuView::default());
    binder.trigger(MediationEvent::Awake, &view).unwrap();

    assert!(view.registered_with_context());
    assert!(binder.mediators().is_empty());
}

#[test]
fn test_detached_host_option_is_validated() {
    let mut config = MediationConfig::default();
    config
        .mediation
        .host_options
        .insert("warn_on_missing_factory".to_string(), "maybe".to_string());

    let err = init_context(config).unwrap_err();
    assert!(err.to_string().contains("warn_on_missing_factory"));
}
