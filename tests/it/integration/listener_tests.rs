//! Listener registration lifecycle.

use crate::helpers::{Harness, MockSurface, SURFACE_ID};
use std::rc::Rc;
use tileboard::error::SceneError;
use tileboard::input::{
    ContextMenuEvent, InputEvent, KeyboardEvent, ListenerKind, Modifiers, PointerKind, Surface, WheelEvent,
};
use tileboard::types::Rect;
use tileboard::ui_state::DialogType;
use tileboard::{Mode, ModeActions, ModeKind, ModeRegistry, Result, State};

#[test]
fn test_attach_registers_window_and_surface_listeners() {
    let harness = Harness::new();

    assert_eq!(harness.window.log.active_count(), 8);
    for kind in ListenerKind::WINDOW {
        assert!(harness.window.log.is_active(kind), "{kind:?}");
        assert!(harness.manager.is_listening(kind));
    }
    assert!(!harness.window.log.is_active(ListenerKind::Wheel));
    assert_eq!(harness.surface.log.active_count(), 1);
    assert!(harness.surface.log.is_active(ListenerKind::Wheel));
}

#[test]
fn test_disabled_mode_attaches_nothing() {
    let mut harness = Harness::new();
    harness.ui.set_mode(Mode::InteractionsDisabled);
    harness.manager.refresh_listeners(&harness.ui);

    assert_eq!(harness.window.log.active_count(), 0);
    assert_eq!(harness.surface.log.active_count(), 0);

    // Nothing is routed while disabled
    harness.down(1, 1);
    let mut key = InputEvent::Key(KeyboardEvent::new("F1", Modifiers::NONE));
    harness.send(&mut key).unwrap();
    let mut wheel = InputEvent::Wheel(WheelEvent {
        delta_y: 1.0,
        target: SURFACE_ID,
    });
    harness.send(&mut wheel).unwrap();

    assert!(harness.ui.mouse().mousedown.is_none());
    assert_eq!(harness.ui.dialog(), None);
    assert_eq!(harness.ui.zoom(), 1.0);

    harness.ui.set_mode(Mode::Cursor);
    harness.manager.refresh_listeners(&harness.ui);
    assert_eq!(harness.window.log.active_count(), 8);
    assert_eq!(harness.surface.log.active_count(), 1);
}

#[test]
fn test_disabling_between_events_suppresses_shortcuts() {
    let mut harness = Harness::new();
    harness.ui.set_mode(Mode::InteractionsDisabled);

    let mut help = InputEvent::Key(KeyboardEvent::new("F1", Modifiers::NONE));
    harness.send(&mut help).unwrap();
    let mut menu = InputEvent::ContextMenu(ContextMenuEvent::new(SURFACE_ID));
    harness.send(&mut menu).unwrap();
    let mut wheel = InputEvent::Wheel(WheelEvent {
        delta_y: -1.0,
        target: SURFACE_ID,
    });
    harness.send(&mut wheel).unwrap();

    assert_eq!(harness.ui.dialog(), None);
    assert_eq!(harness.ui.context_menu(), None);
    assert_eq!(harness.ui.zoom(), 1.0);
    let InputEvent::Key(help_key) = &help else {
        unreachable!()
    };
    assert!(!help_key.default_prevented());
    assert_eq!(harness.window.log.active_count(), 0);
    assert_eq!(harness.surface.log.active_count(), 0);

    // Re-enabling takes effect on the very next event
    harness.ui.set_mode(Mode::Cursor);
    harness.send(&mut help).unwrap();
    assert_eq!(harness.ui.dialog(), Some(DialogType::Help));
    assert_eq!(harness.window.log.active_count(), 8);
}

#[test]
fn test_mode_change_reregisters_without_duplicates() {
    let mut harness = Harness::new();
    let initial = harness.window.log.total();

    harness.ui.set_mode(Mode::Pan);
    harness.move_to(0, 0);

    assert_eq!(harness.window.log.total(), initial + 8);
    assert_eq!(harness.window.log.active_count(), 8);
    assert_eq!(harness.surface.log.active_count(), 1);

    // Same mode, no churn
    harness.move_to(1, 0);
    assert_eq!(harness.window.log.total(), initial + 8);
}

#[test]
fn test_detach_and_drop_release_everything() {
    let mut harness = Harness::new();
    harness.manager.detach();
    assert_eq!(harness.window.log.active_count(), 0);
    assert_eq!(harness.surface.log.active_count(), 0);

    let Harness {
        manager,
        window,
        surface,
        ui,
        ..
    } = Harness::new();
    assert_eq!(window.log.active_count(), 8);
    drop(manager);
    drop(ui);
    assert_eq!(window.log.active_count(), 0);
    assert_eq!(surface.log.active_count(), 0);
}

#[test]
fn test_replacing_surface_moves_wheel_listener() {
    let mut harness = Harness::new();
    let replacement = Rc::new(MockSurface::new(7, Rect::new(0.0, 0.0, 400.0, 300.0)));
    let as_surface: Rc<dyn Surface> = replacement.clone();

    harness.manager.set_interactions_element(as_surface);

    assert_eq!(harness.surface.log.active_count(), 0);
    assert!(replacement.log.is_active(ListenerKind::Wheel));
    assert_eq!(harness.window.log.active_count(), 8);
}

fn disable_and_fail(state: &mut State<'_>) -> Result<()> {
    state.ui.set_mode(Mode::InteractionsDisabled);
    Err(SceneError::IconNotFound("missing".into()).into())
}

#[test]
fn test_listeners_refresh_after_failed_dispatch() {
    let mut registry = ModeRegistry::builtin();
    registry.register(
        ModeKind::Cursor,
        ModeActions {
            pointer_down: Some(disable_and_fail),
            ..ModeActions::default()
        },
    );
    let mut harness = Harness::with_registry(registry);

    assert!(harness.pointer_at_tile(PointerKind::Down, 0, 0).is_err());
    assert_eq!(harness.window.log.active_count(), 0);
    assert_eq!(harness.surface.log.active_count(), 0);
}
