//! Right-click resolution.

use crate::input::event::ContextMenuEvent;
use crate::scene::Scene;
use crate::profile_scope;
use crate::ui_state::{ContextMenu, UiState};

/// Suppress the platform menu and open ours for the last known pointer tile.
///
/// The tile comes from the mouse state rather than the event, so it reflects
/// the most recent pointer dispatch.
pub fn resolve_context_menu(event: &mut ContextMenuEvent, scene: &Scene, ui: &mut UiState) {
    profile_scope!("context_menu");
    event.prevent_default();

    let tile = ui.mouse().position.tile;
    let menu = match scene.item_at_tile(tile) {
        Some(item) => ContextMenu::Item { item, tile },
        None => ContextMenu::Empty { tile },
    };
    ui.set_context_menu(Some(menu));
}
