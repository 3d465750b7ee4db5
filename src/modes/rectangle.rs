//! Rectangle drawing and corner resizing.

use super::{ModeActions, State};
use crate::error::{Result, SceneError};
use crate::input::surface::CursorStyle;
use crate::scene::{Rectangle, RectangleUpdate};
use crate::types::{Coords, ItemKind, generate_id};
use crate::ui_state::{AnchorPosition, Mode};

pub(super) const DRAW_ACTIONS: ModeActions = ModeActions {
    entry: Some(crosshair),
    exit: Some(reset_cursor),
    pointer_move: Some(draw_move),
    pointer_down: Some(draw_down),
    pointer_up: Some(draw_up),
};

pub(super) const TRANSFORM_ACTIONS: ModeActions = ModeActions {
    entry: None,
    exit: None,
    pointer_move: Some(transform_move),
    pointer_down: Some(transform_down),
    pointer_up: Some(transform_up),
};

fn crosshair(state: &mut State<'_>) -> Result<()> {
    state.surface.set_cursor(CursorStyle::Crosshair);
    Ok(())
}

fn reset_cursor(state: &mut State<'_>) -> Result<()> {
    state.surface.set_cursor(CursorStyle::Default);
    Ok(())
}

// ============================================================================
// Draw
// ============================================================================

fn draw_down(state: &mut State<'_>) -> Result<()> {
    if !state.is_renderer_interaction {
        return Ok(());
    }
    // A draft is still open; a second press must not orphan it.
    if let Mode::RectangleDraw { id: Some(_) } = state.ui.mode() {
        return Ok(());
    }
    let tile = state.tile();
    let id = generate_id();
    state.scene.create_rectangle(Rectangle {
        id: id.clone(),
        color: state.settings.default_rectangle_color.clone(),
        from: tile,
        to: tile,
    })?;
    state.ui.set_mode(Mode::RectangleDraw { id: Some(id) });
    Ok(())
}

fn draw_move(state: &mut State<'_>) -> Result<()> {
    let Mode::RectangleDraw { id: Some(id) } = state.ui.mode().clone() else {
        return Ok(());
    };
    if !state.is_pressed() {
        return Ok(());
    }
    let tile = state.tile();
    state.scene.update_rectangle(
        &id,
        RectangleUpdate {
            to: Some(tile),
            ..Default::default()
        },
    )?;
    Ok(())
}

fn draw_up(state: &mut State<'_>) -> Result<()> {
    if let Mode::RectangleDraw { id: Some(_) } = state.ui.mode() {
        state.scene.commit();
        state.ui.set_mode(Mode::Cursor);
    }
    Ok(())
}

// ============================================================================
// Transform
// ============================================================================

/// Normalized corners of a rectangle: (top-left, bottom-right).
fn bounds(from: Coords, to: Coords) -> (Coords, Coords) {
    (
        Coords::new(from.x.min(to.x), from.y.min(to.y)),
        Coords::new(from.x.max(to.x), from.y.max(to.y)),
    )
}

fn corner(from: Coords, to: Coords, anchor: AnchorPosition) -> Coords {
    let (min, max) = bounds(from, to);
    match anchor {
        AnchorPosition::TopLeft => min,
        AnchorPosition::TopRight => Coords::new(max.x, min.y),
        AnchorPosition::BottomLeft => Coords::new(min.x, max.y),
        AnchorPosition::BottomRight => max,
    }
}

fn opposite(anchor: AnchorPosition) -> AnchorPosition {
    match anchor {
        AnchorPosition::TopLeft => AnchorPosition::BottomRight,
        AnchorPosition::TopRight => AnchorPosition::BottomLeft,
        AnchorPosition::BottomLeft => AnchorPosition::TopRight,
        AnchorPosition::BottomRight => AnchorPosition::TopLeft,
    }
}

/// Grab the corner under the pointer; pressing anywhere else leaves
/// transform mode.
fn transform_down(state: &mut State<'_>) -> Result<()> {
    let Mode::RectangleTransform { id, .. } = state.ui.mode().clone() else {
        return Ok(());
    };
    let rectangle = state
        .scene
        .view()
        .rectangle(&id)
        .ok_or_else(|| SceneError::not_found(ItemKind::Rectangle, &id))?;
    let tile = state.tile();
    let grabbed = [
        AnchorPosition::TopLeft,
        AnchorPosition::TopRight,
        AnchorPosition::BottomLeft,
        AnchorPosition::BottomRight,
    ]
    .into_iter()
    .find(|anchor| corner(rectangle.from, rectangle.to, *anchor) == tile);

    let Some(anchor) = grabbed else {
        state.ui.set_mode(Mode::Cursor);
        return Ok(());
    };
    // From here on `from` is the fixed corner and `to` follows the pointer.
    let fixed = corner(rectangle.from, rectangle.to, opposite(anchor));
    state.scene.update_rectangle(
        &id,
        RectangleUpdate {
            from: Some(fixed),
            to: Some(tile),
            ..Default::default()
        },
    )?;
    state.ui.set_mode(Mode::RectangleTransform {
        id,
        selected_anchor: Some(anchor),
    });
    Ok(())
}

fn transform_move(state: &mut State<'_>) -> Result<()> {
    let Mode::RectangleTransform {
        id,
        selected_anchor: Some(_),
    } = state.ui.mode().clone()
    else {
        return Ok(());
    };
    let tile = state.tile();
    state.scene.update_rectangle(
        &id,
        RectangleUpdate {
            to: Some(tile),
            ..Default::default()
        },
    )?;
    Ok(())
}

fn transform_up(state: &mut State<'_>) -> Result<()> {
    if let Mode::RectangleTransform {
        selected_anchor: Some(_),
        ..
    } = state.ui.mode()
    {
        state.scene.commit();
        state.ui.set_mode(Mode::Cursor);
    }
    Ok(())
}
