//! Moving a selection across the grid.
//!
//! Items move by the tile delta of each pointer move, so a drag never jumps
//! when the press started off-centre. Connector anchors are the exception:
//! they are re-pinned to whatever sits under the pointer.

use super::{ModeActions, State};
use crate::error::Result;
use crate::error::SceneError;
use crate::input::surface::CursorStyle;
use crate::scene::{AnchorRef, ConnectorUpdate, RectangleUpdate, Scene, TextBoxUpdate, ViewItemUpdate};
use crate::types::{Coords, ItemKind, ItemReference};
use crate::ui_state::Mode;

pub(super) const ACTIONS: ModeActions = ModeActions {
    entry: Some(entry),
    exit: Some(exit),
    pointer_move: Some(pointer_move),
    pointer_down: None,
    pointer_up: Some(pointer_up),
};

fn entry(state: &mut State<'_>) -> Result<()> {
    state.surface.set_cursor(CursorStyle::Grabbing);
    Ok(())
}

fn exit(state: &mut State<'_>) -> Result<()> {
    state.surface.set_cursor(CursorStyle::Default);
    Ok(())
}

fn pointer_move(state: &mut State<'_>) -> Result<()> {
    let Mode::DragItems { items, .. } = state.ui.mode().clone() else {
        return Ok(());
    };
    let Some(delta) = state.ui.mouse().delta else {
        return Ok(());
    };
    if delta.tile.is_zero() {
        return Ok(());
    }

    let tile = state.tile();
    for item in &items {
        translate(state.scene, item, delta.tile, tile)?;
    }
    state.ui.set_mode(Mode::DragItems {
        items,
        is_initial_movement: false,
    });
    Ok(())
}

/// A drag that never left its tile is a click: it selects instead.
fn pointer_up(state: &mut State<'_>) -> Result<()> {
    if let Mode::DragItems {
        items,
        is_initial_movement,
    } = state.ui.mode().clone()
    {
        if is_initial_movement {
            state.ui.set_item_controls(items.into_iter().next());
        } else {
            state.scene.commit();
        }
    }
    state.ui.set_mode(Mode::Cursor);
    Ok(())
}

fn translate(scene: &mut Scene, item: &ItemReference, delta: Coords, pointer: Coords) -> Result<(), SceneError> {
    let missing = || SceneError::not_found(item.kind, &item.id);

    match item.kind {
        ItemKind::Item => {
            let tile = scene.view().item(&item.id).ok_or_else(missing)?.tile;
            scene.update_view_item(&item.id, ViewItemUpdate { tile: Some(tile + delta) })
        }
        ItemKind::TextBox => {
            let tile = scene.view().text_box(&item.id).ok_or_else(missing)?.tile;
            scene.update_text_box(
                &item.id,
                TextBoxUpdate {
                    tile: Some(tile + delta),
                    ..Default::default()
                },
            )
        }
        ItemKind::Rectangle => {
            let rectangle = scene.view().rectangle(&item.id).ok_or_else(missing)?;
            let (from, to) = (rectangle.from + delta, rectangle.to + delta);
            scene.update_rectangle(
                &item.id,
                RectangleUpdate {
                    from: Some(from),
                    to: Some(to),
                    ..Default::default()
                },
            )
        }
        ItemKind::Connector => {
            // Item-pinned ends follow their nodes; only free ends move.
            let mut anchors = scene.view().connector(&item.id).ok_or_else(missing)?.anchors.clone();
            for anchor in &mut anchors {
                if let AnchorRef::Tile(tile) = anchor.target {
                    anchor.target = AnchorRef::Tile(tile + delta);
                }
            }
            scene.update_connector(
                &item.id,
                ConnectorUpdate {
                    anchors: Some(anchors),
                    ..Default::default()
                },
            )
        }
        ItemKind::ConnectorAnchor => {
            let target = match scene.node_at_tile(pointer) {
                Some(node) => AnchorRef::Item(node.id.clone()),
                None => AnchorRef::Tile(pointer),
            };
            scene.update_connector_anchor(&item.id, target)
        }
    }
}
