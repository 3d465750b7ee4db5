//! Global keyboard shortcuts.
//!
//! | Keys                              | Action          |
//! |-----------------------------------|-----------------|
//! | Ctrl/Cmd+Z                        | Undo            |
//! | Ctrl/Cmd+Y, Ctrl/Cmd+Shift+Z      | Redo            |
//! | F1                                | Help dialog     |
//!
//! Keystrokes aimed at a text-entry element are never intercepted.

use crate::input::event::KeyboardEvent;
use crate::scene::History;
use crate::profile_scope;
use crate::ui_state::{DialogType, UiState};
use tracing::debug;

/// Apply a shortcut. Returns true when the event matched one.
///
/// Undo/redo suppress the platform default even when there is nothing to
/// undo or redo, so the browser-level action never fires behind the editor.
pub fn handle_key_down<H>(event: &mut KeyboardEvent, history: &mut H, ui: &mut UiState) -> bool
where
    H: History + ?Sized,
{
    profile_scope!("key_down");
    if event.focused.is_text_entry() {
        return false;
    }

    let key = event.key.to_lowercase();
    let command = event.modifiers.command();
    let shift = event.modifiers.shift;

    match key.as_str() {
        "z" if command && !shift => {
            event.prevent_default();
            if history.can_undo() {
                history.undo();
                debug!("Undo");
            }
            true
        }
        "y" if command => redo(event, history),
        "z" if command && shift => redo(event, history),
        "f1" => {
            event.prevent_default();
            ui.set_dialog(Some(DialogType::Help));
            true
        }
        _ => false,
    }
}

fn redo<H>(event: &mut KeyboardEvent, history: &mut H) -> bool
where
    H: History + ?Sized,
{
    event.prevent_default();
    if history.can_redo() {
        history.redo();
        debug!("Redo");
    }
    true
}
