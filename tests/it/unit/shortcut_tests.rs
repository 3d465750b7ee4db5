//! Keyboard shortcuts against a real scene history.

use crate::helpers::TestSceneBuilder;
use tileboard::input::shortcuts::handle_key_down;
use tileboard::input::{FocusedElement, KeyboardEvent, Modifiers};
use tileboard::scene::ViewItemUpdate;
use tileboard::types::Coords;
use tileboard::ui_state::DialogType;
use tileboard::{History, UiState};

fn moved_scene() -> tileboard::Scene {
    let mut scene = TestSceneBuilder::new().with_node("n", Coords::new(0, 0)).build();
    scene
        .update_view_item("n", ViewItemUpdate { tile: Some(Coords::new(2, 2)) })
        .unwrap();
    scene.commit();
    scene
}

fn node_tile(scene: &tileboard::Scene) -> Coords {
    scene.view().item("n").unwrap().tile
}

#[test]
fn test_ctrl_z_undoes_and_ctrl_y_redoes() {
    let mut scene = moved_scene();
    let mut ui = UiState::default();

    let mut undo = KeyboardEvent::new("z", Modifiers::ctrl());
    assert!(handle_key_down(&mut undo, &mut scene, &mut ui));
    assert!(undo.default_prevented());
    assert_eq!(node_tile(&scene), Coords::new(0, 0));

    let mut redo = KeyboardEvent::new("y", Modifiers::ctrl());
    assert!(handle_key_down(&mut redo, &mut scene, &mut ui));
    assert!(redo.default_prevented());
    assert_eq!(node_tile(&scene), Coords::new(2, 2));
}

#[test]
fn test_cmd_shift_z_redoes() {
    let mut scene = moved_scene();
    let mut ui = UiState::default();
    scene.undo();

    let mut event = KeyboardEvent::new(
        "Z",
        Modifiers {
            meta: true,
            shift: true,
            ..Modifiers::NONE
        },
    );
    handle_key_down(&mut event, &mut scene, &mut ui);
    assert_eq!(node_tile(&scene), Coords::new(2, 2));
}

#[test]
fn test_redo_without_history_still_prevents_default() {
    let mut scene = moved_scene();
    let mut ui = UiState::default();
    assert!(!scene.can_redo());

    let mut event = KeyboardEvent::new("y", Modifiers::meta());
    assert!(handle_key_down(&mut event, &mut scene, &mut ui));
    assert!(event.default_prevented());
    assert_eq!(node_tile(&scene), Coords::new(2, 2));
}

#[test]
fn test_f1_opens_help() {
    let mut scene = moved_scene();
    let mut ui = UiState::default();
    let mut event = KeyboardEvent::new("F1", Modifiers::NONE);

    assert!(handle_key_down(&mut event, &mut scene, &mut ui));
    assert!(event.default_prevented());
    assert_eq!(ui.dialog(), Some(DialogType::Help));
}

#[test]
fn test_editable_targets_are_left_alone() {
    let mut ui = UiState::default();
    for focused in [
        FocusedElement::Input,
        FocusedElement::TextArea,
        FocusedElement::ContentEditable,
        FocusedElement::RichTextEditor,
    ] {
        let mut scene = moved_scene();
        let mut event = KeyboardEvent::new("z", Modifiers::ctrl()).with_focus(focused);
        assert!(!handle_key_down(&mut event, &mut scene, &mut ui));
        assert!(!event.default_prevented());
        assert_eq!(node_tile(&scene), Coords::new(2, 2), "{focused:?}");
    }

    let mut scene = moved_scene();
    let mut help = KeyboardEvent::new("F1", Modifiers::NONE).with_focus(FocusedElement::Input);
    handle_key_down(&mut help, &mut scene, &mut ui);
    assert_eq!(ui.dialog(), None);
}

#[test]
fn test_plain_keys_pass_through() {
    let mut scene = moved_scene();
    let mut ui = UiState::default();
    let mut event = KeyboardEvent::new("z", Modifiers::NONE);

    assert!(!handle_key_down(&mut event, &mut scene, &mut ui));
    assert!(!event.default_prevented());
    assert_eq!(node_tile(&scene), Coords::new(2, 2));
}
