//! Context-menu resolution from the last known pointer tile.

use crate::helpers::{Harness, TestSceneBuilder};
use tileboard::input::context_menu::resolve_context_menu;
use tileboard::input::{ContextMenuEvent, PointerKind};
use tileboard::types::{Coords, ItemReference, Vec2};
use tileboard::ui_state::{ContextMenu, MousePosition, MouseState};
use tileboard::UiState;

fn ui_at(tile: Coords) -> UiState {
    let mut ui = UiState::default();
    ui.set_mouse(MouseState {
        position: MousePosition::new(Vec2::ZERO, tile),
        ..MouseState::default()
    });
    ui
}

#[test]
fn test_item_under_pointer_opens_item_menu() {
    let scene = TestSceneBuilder::new().with_node("n1", Coords::new(2, 1)).build();
    let mut ui = ui_at(Coords::new(2, 1));
    let mut event = ContextMenuEvent::new(1);

    resolve_context_menu(&mut event, &scene, &mut ui);

    assert!(event.default_prevented());
    assert_eq!(
        ui.context_menu(),
        Some(&ContextMenu::Item {
            item: ItemReference::item("n1"),
            tile: Coords::new(2, 1),
        })
    );
    insta::assert_json_snapshot!(ui.context_menu(), @r#"
    {
      "type": "ITEM",
      "item": {
        "type": "ITEM",
        "id": "n1"
      },
      "tile": {
        "x": 2,
        "y": 1
      }
    }
    "#);
}

#[test]
fn test_empty_tile_opens_empty_menu() {
    let scene = TestSceneBuilder::new().with_node("n1", Coords::new(2, 1)).build();
    let mut ui = ui_at(Coords::new(-3, 4));
    let mut event = ContextMenuEvent::new(1);

    resolve_context_menu(&mut event, &scene, &mut ui);

    assert!(event.default_prevented());
    insta::assert_json_snapshot!(ui.context_menu(), @r#"
    {
      "type": "EMPTY",
      "tile": {
        "x": -3,
        "y": 4
      }
    }
    "#);
}

#[test]
fn test_menu_uses_last_dispatched_position() {
    let scene = TestSceneBuilder::new().with_node("n1", Coords::new(0, 0)).build();
    let mut harness = Harness::with_scene(scene);

    // The pointer moves off the node; the right click arrives without
    // coordinates of its own.
    harness.pointer_at_tile(PointerKind::Move, 0, 0).unwrap();
    harness.pointer_at_tile(PointerKind::Move, 3, 3).unwrap();

    let mut event = tileboard::input::InputEvent::ContextMenu(ContextMenuEvent::new(1));
    harness.send(&mut event).unwrap();
    assert_eq!(
        harness.ui.context_menu(),
        Some(&ContextMenu::Empty { tile: Coords::new(3, 3) })
    );
}
