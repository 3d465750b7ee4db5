//! Creating and positioning free text.

use super::{ModeActions, State};
use crate::constants::DEFAULT_FONT_SIZE;
use crate::error::Result;
use crate::scene::{TextBox, TextBoxUpdate};
use crate::types::{ItemReference, generate_id};
use crate::ui_state::Mode;

pub(super) const ACTIONS: ModeActions = ModeActions {
    entry: None,
    exit: None,
    pointer_move: Some(pointer_move),
    pointer_down: Some(pointer_down),
    pointer_up: Some(pointer_up),
};

/// Start a text box here unless the host already created one.
fn pointer_down(state: &mut State<'_>) -> Result<()> {
    if !state.is_renderer_interaction {
        return Ok(());
    }
    if let Mode::TextBox { id: Some(_) } = state.ui.mode() {
        return Ok(());
    }
    let id = generate_id();
    let tile = state.tile();
    state.scene.create_text_box(TextBox {
        id: id.clone(),
        tile,
        content: String::new(),
        font_size: DEFAULT_FONT_SIZE,
    })?;
    state.ui.set_mode(Mode::TextBox { id: Some(id) });
    Ok(())
}

/// The box follows the pointer until it is dropped.
fn pointer_move(state: &mut State<'_>) -> Result<()> {
    let Mode::TextBox { id: Some(id) } = state.ui.mode().clone() else {
        return Ok(());
    };
    let tile = state.tile();
    state.scene.update_text_box(
        &id,
        TextBoxUpdate {
            tile: Some(tile),
            ..Default::default()
        },
    )?;
    Ok(())
}

fn pointer_up(state: &mut State<'_>) -> Result<()> {
    let Mode::TextBox { id: Some(id) } = state.ui.mode().clone() else {
        return Ok(());
    };
    state.scene.commit();
    state.ui.set_item_controls(Some(ItemReference::text_box(id)));
    state.ui.set_mode(Mode::Cursor);
    Ok(())
}
