//! Tests for mediator hook ordering, ENABLED/DISABLED and binding maintenance

use mvb_domain::events::MediationEvent;
use mvb_domain::ports::ViewRef;
use mvb_domain::value_objects::TypeKey;

use crate::fixtures::*;

#[test]
fn test_hook_order_on_awake() {
    let Harness { mut binder, .. } = harness();
    let probe = MediatorProbe::new();
    bind_probe(&mut binder, &probe);

    let view = TestView::new_ref();
    binder.trigger(MediationEvent::Awake, &view).unwrap();

    assert_eq!(
        probe.events(),
        vec!["inject", "pre_register", "on_register", "on_enabled"]
    );
}

#[test]
fn test_disabled_view_does_not_get_on_enabled_at_awake() {
    let Harness { mut binder, .. } = harness();
    let probe = MediatorProbe::new();
    bind_probe(&mut binder, &probe);

    let view = TestView::new();
    view.set_enabled(false);
    let view_ref: ViewRef = view;
    binder.trigger(MediationEvent::Awake, &view_ref).unwrap();

    assert_eq!(probe.events(), vec!["inject", "pre_register", "on_register"]);
}

#[test]
fn test_enabled_and_disabled_reach_mapped_mediator() {
    let Harness { mut binder, .. } = harness();
    let probe = MediatorProbe::new();
    bind_probe(&mut binder, &probe);

    let view = TestView::new_ref();
    binder.trigger(MediationEvent::Awake, &view).unwrap();
    binder.trigger(MediationEvent::Disabled, &view).unwrap();
    binder.trigger(MediationEvent::Enabled, &view).unwrap();

    assert_eq!(probe.count("on_disabled"), 1);
    assert_eq!(probe.count("on_enabled"), 2);
}

#[test]
fn test_enabled_on_unmediated_view_is_noop() {
    let Harness { mut binder, .. } = harness();
    let probe = MediatorProbe::new();
    bind_probe(&mut binder, &probe);

    let view = TestView::new_ref();
    binder.trigger(MediationEvent::Enabled, &view).unwrap();
    binder.trigger(MediationEvent::Disabled, &view).unwrap();

    assert!(probe.events().is_empty());
    assert!(binder.mediators().is_empty());
}

#[test]
fn test_events_after_destroyed_are_ignored() {
    let Harness { mut binder, .. } = harness();
    let probe = MediatorProbe::new();
    bind_probe(&mut binder, &probe);

    let view = TestView::new_ref();
    binder.trigger(MediationEvent::Awake, &view).unwrap();
    binder.trigger(MediationEvent::Destroyed, &view).unwrap();
    binder.trigger(MediationEvent::Disabled, &view).unwrap();

    assert_eq!(probe.count("on_disabled"), 0);
    assert_eq!(probe.events().last(), Some(&"on_remove"));
}

#[test]
fn test_rebinding_replaces_previous_binding() {
    let Harness { mut binder, .. } = harness();
    binder.bind::<TestView>().to::<PanelMediator>();
    binder.bind::<TestView>().to::<TestMediator>();

    let binding = binder.get_binding(TypeKey::of::<TestView>()).unwrap();
    assert_eq!(binding.mediator_type(), TypeKey::of::<TestMediator>());
    assert_eq!(binder.binding_count(), 1);

    let view = TestView::new_ref();
    binder.trigger(MediationEvent::Awake, &view).unwrap();
    assert!(binder.mediator_for::<TestMediator>(&view).is_some());
    assert!(binder.mediator_for::<PanelMediator>(&view).is_none());
}

#[test]
fn test_unbind_keeps_existing_mediators() {
    let Harness { mut binder, .. } = harness();
    let probe = MediatorProbe::new();
    bind_probe(&mut binder, &probe);

    let first = TestView::new_ref();
    binder.trigger(MediationEvent::Awake, &first).unwrap();

    assert!(binder.unbind::<TestView>().is_some());
    assert!(binder.unbind::<TestView>().is_none());

    let second = TestView::new_ref();
    binder.trigger(MediationEvent::Awake, &second).unwrap();

    assert!(binder.has_mediator(&first));
    assert!(!binder.has_mediator(&second));

    binder.trigger(MediationEvent::Destroyed, &first).unwrap();
    assert_eq!(probe.count("on_remove"), 1);
}

#[test]
fn test_prune_orphans_removes_dropped_views() {
    let Harness { mut binder, host } = harness();
    let probe = MediatorProbe::new();
    bind_probe(&mut binder, &probe);

    let kept = TestView::new_ref();
    let dropped = TestView::new_ref();
    binder.trigger(MediationEvent::Awake, &kept).unwrap();
    binder.trigger(MediationEvent::Awake, &dropped).unwrap();

    // the mediator holds its view, but only weakly
    let mediator = binder.mediator_for::<TestMediator>(&dropped).unwrap();
    let held = mediator.view.clone().expect("view should be injected");
    assert!(held.upgrade().is_some());
    drop(dropped);
    assert!(held.upgrade().is_none());

    assert_eq!(binder.prune_orphans(), 1);
    assert_eq!(binder.mediators().len(), 1);
    assert!(binder.has_mediator(&kept));
    assert_eq!(probe.count("on_remove"), 1);
    assert_eq!(host.destroyed.load(std::sync::atomic::Ordering::SeqCst), 0);
    assert_eq!(binder.prune_orphans(), 0);
}
