//! Injection binder tests against a live mediation binder

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock, Weak};

use mvb_domain::error::{Error, MediationErrorKind, Result};
use mvb_domain::{Injectable, Injector, MediationEvent, Mediator, View, ViewRef, ViewState};
use mvb_infrastructure::config::MediationConfig;
use mvb_infrastructure::di::{InjectionBinder, init_context};

#[derive(Debug, Default)]
struct ScoreService {
    created: AtomicUsize,
}

#[derive(Default)]
struct HudView {
    state: ViewState,
    service: OnceLock<Arc<ScoreService>>,
}

impl View for HudView {
    fn registered_with_context(&self) -> bool {
        self.state.registered_with_context()
    }

    fn set_registered_with_context(&self, registered: bool) {
        self.state.set_registered_with_context(registered);
    }

    fn inject(&self, injector: &dyn Injector) -> Result<()> {
        let _ = self.service.set(injector.resolve::<ScoreService>()?);
        Ok(())
    }
}

#[derive(Default)]
struct HudMediator {
    view: Option<Weak<HudView>>,
    service: Option<Arc<ScoreService>>,
}

impl Mediator for HudMediator {
    fn inject(&mut self, injector: &dyn Injector) -> Result<()> {
        self.view = Some(injector.resolve_weak::<HudView>()?);
        self.service = Some(injector.resolve::<ScoreService>()?);
        Ok(())
    }

    fn on_register(&mut self) {
        if let Some(service) = &self.service {
            service.created.fetch_add(1, Ordering::SeqCst);
        }
    }
}

struct Settings {
    service: Option<Arc<ScoreService>>,
}

impl Injectable for Settings {
    fn inject_from(&mut self, injector: &dyn Injector) -> Result<()> {
        self.service = injector.try_resolve::<ScoreService>();
        Ok(())
    }
}

#[test]
fn test_singleton_shared_between_view_and_mediator() {
    let context = init_context(MediationConfig::default()).unwrap();
    context.injection_binder().bind::<ScoreService>().to_singleton();

    let mut binder = context.create_binder();
    binder.bind::<HudView>().to::<HudMediator>();

    let hud = Arc::new(HudView::default());
    let view: ViewRef = hud.clone();
    binder.trigger(MediationEvent::Awake, &view).unwrap();

    let mediator = binder.mediator_for::<HudMediator>(&view).unwrap();
    let from_view = hud.service.get().unwrap();
    let from_mediator = mediator.service.as_ref().unwrap();
    assert!(Arc::ptr_eq(from_view, from_mediator));
    assert_eq!(from_view.created.load(Ordering::SeqCst), 1);
    let view_of_mediator = mediator.view.as_ref().and_then(Weak::upgrade).unwrap();
    assert!(Arc::ptr_eq(&view_of_mediator, &hud));
}

#[test]
fn test_bindings_added_after_binder_creation_are_visible() {
    let context = init_context(MediationConfig::default()).unwrap();
    let mut binder = context.create_binder();
    binder.bind::<HudView>().to::<HudMediator>();

    let view: ViewRef = Arc::new(HudView::default());
    let err = binder.trigger(MediationEvent::Awake, &view).unwrap_err();
    assert!(matches!(err, Error::Injection { .. }));

    context.injection_binder().bind::<ScoreService>().to_new();
    let retry: ViewRef = Arc::new(HudView::default());
    binder.trigger(MediationEvent::Awake, &retry).unwrap();
    assert!(binder.has_mediator(&retry));
}

#[test]
fn test_view_does_not_stay_bound_after_mediation() {
    let context = init_context(MediationConfig::default()).unwrap();
    context.injection_binder().bind::<ScoreService>().to_new();

    let mut binder = context.create_binder();
    binder.bind::<HudView>().to::<HudMediator>();
    let view: ViewRef = Arc::new(HudView::default());
    binder.trigger(MediationEvent::Awake, &view).unwrap();

    assert!(!context.injection_binder().is_bound_type::<HudView>());
    assert_eq!(context.injection_binder().len(), 1);
}

#[test]
fn test_inject_into_plain_injectable() {
    let binder = InjectionBinder::new();
    let mut settings = Settings { service: None };
    binder.inject_into(&mut settings).unwrap();
    assert!(settings.service.is_none());

    binder.bind::<ScoreService>().to_value(ScoreService::default());
    binder.inject_into(&mut settings).unwrap();
    assert!(settings.service.is_some());
}

#[test]
fn test_factory_binding_runs_per_resolution() {
    let binder = InjectionBinder::new();
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    binder.bind::<ScoreService>().to_factory(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        ScoreService::default()
    });

    binder.get::<ScoreService>().unwrap();
    binder.get::<ScoreService>().unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn test_self_binding_through_context_overflows() {
    let context = init_context(MediationConfig::default()).unwrap();
    context.injection_binder().bind::<ScoreService>().to_new();
    let mut binder = context.create_binder();
    binder.bind::<HudView>().to_type::<HudView>();

    let view: ViewRef = Arc::new(HudView::default());
    let err = binder.trigger(MediationEvent::Awake, &view).unwrap_err();

    assert_eq!(
        err.mediation_kind(),
        Some(MediationErrorKind::MediatorViewStackOverflow)
    );
}
