//! Drawing connectors.
//!
//! Press creates a two-anchor connector with both ends at the pointer; the
//! second end follows the pointer until release. Ends snap to a node when one
//! occupies the tile. The mode stays active after each connector so several
//! can be drawn in a row.

use super::{ModeActions, State};
use crate::error::{Result, SceneError};
use crate::input::surface::CursorStyle;
use crate::scene::{AnchorRef, Connector, ConnectorAnchor, Scene};
use crate::types::{Coords, ItemKind, generate_id};
use crate::ui_state::Mode;
use tracing::debug;

pub(super) const ACTIONS: ModeActions = ModeActions {
    entry: Some(entry),
    exit: Some(exit),
    pointer_move: Some(pointer_move),
    pointer_down: Some(pointer_down),
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

fn anchor_target(scene: &Scene, tile: Coords) -> AnchorRef {
    match scene.node_at_tile(tile) {
        Some(node) => AnchorRef::Item(node.id.clone()),
        None => AnchorRef::Tile(tile),
    }
}

fn pointer_down(state: &mut State<'_>) -> Result<()> {
    if !state.is_renderer_interaction {
        return Ok(());
    }
    if let Mode::Connector { id: Some(_) } = state.ui.mode() {
        return Ok(());
    }
    let target = anchor_target(state.scene, state.tile());
    let id = generate_id();
    state.scene.create_connector(Connector {
        id: id.clone(),
        color: state.settings.default_connector_color.clone(),
        anchors: vec![
            ConnectorAnchor::new(generate_id(), target.clone()),
            ConnectorAnchor::new(generate_id(), target),
        ],
    })?;
    state.ui.set_mode(Mode::Connector { id: Some(id) });
    Ok(())
}

fn pointer_move(state: &mut State<'_>) -> Result<()> {
    let Mode::Connector { id: Some(id) } = state.ui.mode().clone() else {
        return Ok(());
    };
    if !state.is_pressed() {
        return Ok(());
    }
    let last = state
        .scene
        .view()
        .connector(&id)
        .and_then(|c| c.anchors.last())
        .map(|a| a.id.clone())
        .ok_or_else(|| SceneError::not_found(ItemKind::Connector, &id))?;
    let target = anchor_target(state.scene, state.tile());
    state.scene.update_connector_anchor(&last, target)?;
    Ok(())
}

/// Finish the draft. A connector whose ends resolve to the same tile has no
/// length and is discarded instead of committed.
fn pointer_up(state: &mut State<'_>) -> Result<()> {
    let Mode::Connector { id: Some(id) } = state.ui.mode().clone() else {
        return Ok(());
    };
    let view = state.scene.view();
    let connector = view
        .connector(&id)
        .ok_or_else(|| SceneError::not_found(ItemKind::Connector, &id))?;
    let first = connector.anchors.first().and_then(|a| view.anchor_tile(&a.target));
    let last = connector.anchors.last().and_then(|a| view.anchor_tile(&a.target));

    if first == last {
        debug!(connector = %id, "Discarding zero-length connector");
        state.scene.delete_connector(&id)?;
    } else {
        state.scene.commit();
    }
    state.ui.set_mode(Mode::Connector { id: None });
    Ok(())
}
