//! Dragging the viewport.

use super::{ModeActions, State};
use crate::error::Result;
use crate::input::coords::{CoordinateContext, CoordinateConverter};
use crate::input::surface::CursorStyle;
use crate::types::Vec2;

pub(super) const ACTIONS: ModeActions = ModeActions {
    entry: Some(entry),
    exit: Some(exit),
    pointer_move: Some(pointer_move),
    pointer_down: Some(pointer_down),
    pointer_up: Some(pointer_up),
};

fn entry(state: &mut State<'_>) -> Result<()> {
    state.surface.set_cursor(CursorStyle::Grab);
    Ok(())
}

fn exit(state: &mut State<'_>) -> Result<()> {
    state.surface.set_cursor(CursorStyle::Default);
    Ok(())
}

fn pointer_down(state: &mut State<'_>) -> Result<()> {
    state.surface.set_cursor(CursorStyle::Grabbing);
    Ok(())
}

fn pointer_up(state: &mut State<'_>) -> Result<()> {
    state.surface.set_cursor(CursorStyle::Grab);
    Ok(())
}

/// Scroll opposite to the pointer so the content stays under it.
fn pointer_move(state: &mut State<'_>) -> Result<()> {
    if !state.is_pressed() {
        return Ok(());
    }
    let Some(delta) = state.ui.mouse().delta else {
        return Ok(());
    };
    let ctx = CoordinateContext::new(
        Vec2::ZERO,
        state.ui.zoom(),
        state.ui.scroll(),
        state.settings.tile_size,
    );
    let tiles = CoordinateConverter::delta_screen_to_tiles(delta.screen, &ctx);
    let scroll = state.ui.scroll() - tiles;
    state.ui.set_scroll(scroll);
    Ok(())
}
