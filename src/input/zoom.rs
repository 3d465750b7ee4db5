//! Wheel zoom.

use crate::input::event::WheelEvent;
use crate::profile_scope;
use crate::ui_state::UiState;
use tracing::trace;

/// One discrete step per wheel event: scrolling down zooms out, anything
/// else (a zero delta included) zooms in. Magnitude is ignored.
pub fn handle_wheel(event: &WheelEvent, ui: &mut UiState) {
    profile_scope!("wheel");
    if event.delta_y > 0.0 {
        ui.decrement_zoom();
    } else {
        ui.increment_zoom();
    }
    trace!(zoom = ui.zoom(), "Wheel zoom");
}
