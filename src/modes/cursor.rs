//! Default selection mode.

use super::{ModeActions, State};
use crate::error::Result;
use crate::input::surface::CursorStyle;
use crate::ui_state::Mode;

pub(super) const ACTIONS: ModeActions = ModeActions {
    entry: Some(entry),
    exit: None,
    pointer_move: Some(pointer_move),
    pointer_down: Some(pointer_down),
    pointer_up: Some(pointer_up),
};

fn entry(state: &mut State<'_>) -> Result<()> {
    state.surface.set_cursor(CursorStyle::Default);
    Ok(())
}

fn pointer_move(state: &mut State<'_>) -> Result<()> {
    let hovered = if state.is_renderer_interaction {
        state.scene.item_at_tile(state.tile())
    } else {
        None
    };
    if state.ui.hovered_item() != hovered.as_ref() {
        state.ui.set_hovered_item(hovered);
    }
    Ok(())
}

/// Pressing on an item starts a drag; pressing anywhere on the canvas
/// dismisses an open context menu.
fn pointer_down(state: &mut State<'_>) -> Result<()> {
    if !state.is_renderer_interaction {
        return Ok(());
    }
    state.ui.set_context_menu(None);

    if let Some(item) = state.scene.item_at_tile(state.tile()) {
        state.ui.set_mode(Mode::drag_items(vec![item]));
    }
    Ok(())
}

fn pointer_up(state: &mut State<'_>) -> Result<()> {
    if !state.is_renderer_interaction {
        return Ok(());
    }
    if state.scene.item_at_tile(state.last_known_tile()).is_none() {
        state.ui.set_item_controls(None);
    }
    Ok(())
}
