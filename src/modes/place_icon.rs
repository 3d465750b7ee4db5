//! Dropping a new node from the icon picker.
//!
//! The host enters this mode with the chosen icon. Release over an empty
//! tile creates the model item and its placement in one undo step; the
//! pointer position is tracked in between so the host can draw a preview.

use super::{ModeActions, State, track_pointer};
use crate::constants::DEFAULT_NODE_NAME;
use crate::error::Result;
use crate::input::surface::CursorStyle;
use crate::scene::{ModelItem, ViewItem};
use crate::types::{ItemReference, generate_id};
use crate::ui_state::Mode;
use tracing::debug;

pub(super) const ACTIONS: ModeActions = ModeActions {
    entry: Some(entry),
    exit: Some(exit),
    pointer_move: Some(track_pointer),
    pointer_down: None,
    pointer_up: Some(pointer_up),
};

fn entry(state: &mut State<'_>) -> Result<()> {
    state.surface.set_cursor(CursorStyle::Crosshair);
    Ok(())
}

fn exit(state: &mut State<'_>) -> Result<()> {
    state.surface.set_cursor(CursorStyle::Default);
    Ok(())
}

fn pointer_up(state: &mut State<'_>) -> Result<()> {
    if !state.is_renderer_interaction {
        return Ok(());
    }
    let Mode::PlaceIcon { id: Some(icon) } = state.ui.mode().clone() else {
        return Ok(());
    };
    let tile = state.last_known_tile();
    if state.scene.node_at_tile(tile).is_some() {
        debug!(?tile, "Tile occupied, icon not placed");
        return Ok(());
    }

    let id = generate_id();
    state
        .scene
        .create_model_item(ModelItem::new(id.clone(), DEFAULT_NODE_NAME).with_icon(icon))?;
    state.scene.create_view_item(ViewItem::new(id.clone(), tile))?;
    state.scene.commit();

    state.ui.set_item_controls(Some(ItemReference::item(id)));
    state.ui.set_mode(Mode::Cursor);
    Ok(())
}
