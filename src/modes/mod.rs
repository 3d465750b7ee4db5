//! Interaction modes - the behaviours the dispatcher routes pointer input to.
//!
//! A mode is a set of optional handlers ([`ModeActions`]). Any subset may be
//! present; the dispatcher treats a missing handler as "ignore this event".
//! Modes keep no state of their own between calls. Draft state (the
//! rectangle being drawn, the items being dragged) lives in
//! [`crate::ui_state::Mode`] payloads or in the scene, written through the
//! store actions.
//!
//! ## Modules
//!
//! - `cursor` - Selection, hover, click-to-drag
//! - `drag_items` - Moving nodes, rectangles, text boxes and anchors
//! - `rectangle` - Drawing and corner-transforming rectangles
//! - `connector` - Drawing edges between nodes and tiles
//! - `pan` - Scrolling the viewport by dragging
//! - `place_icon` - Dropping a new node from the icon picker
//! - `text_box` - Creating and positioning free text

mod connector;
mod cursor;
mod drag_items;
mod pan;
mod place_icon;
mod rectangle;
mod text_box;

use crate::error::Result;
use crate::input::event::PointerKind;
use crate::input::surface::Surface;
use crate::scene::Scene;
use crate::settings::InteractionSettings;
use crate::types::{Coords, Size};
use crate::ui_state::{ModeKind, UiState};
use std::collections::HashMap;

/// Ambient state handed to every handler for one dispatch.
///
/// The model store is reachable through `scene.model()`.
pub struct State<'a> {
    pub scene: &'a mut Scene,
    pub ui: &'a mut UiState,
    pub surface: &'a dyn Surface,
    /// Most recently observed surface size
    pub renderer_size: Size,
    /// True when the event targeted the surface itself rather than a child
    /// UI element layered over it
    pub is_renderer_interaction: bool,
    pub settings: &'a InteractionSettings,
}

impl State<'_> {
    /// Tile under the pointer for this dispatch.
    pub fn tile(&self) -> Coords {
        self.ui.mouse().position.tile
    }

    /// Tile the pointer was over before this event. Touch releases arrive
    /// without coordinates, so release handlers place things here.
    pub fn last_known_tile(&self) -> Coords {
        let mouse = self.ui.mouse();
        mouse
            .delta
            .map_or(mouse.position.tile, |delta| mouse.position.tile - delta.tile)
    }

    pub fn is_pressed(&self) -> bool {
        self.ui.mouse().mousedown.is_some()
    }
}

/// A mode handler. Mutates the scene and UI state through their actions.
pub type Handler = fn(&mut State<'_>) -> Result<()>;

/// The capability set of a mode.
#[derive(Clone, Copy, Debug, Default)]
pub struct ModeActions {
    pub entry: Option<Handler>,
    pub exit: Option<Handler>,
    pub pointer_move: Option<Handler>,
    pub pointer_down: Option<Handler>,
    pub pointer_up: Option<Handler>,
}

impl ModeActions {
    /// The handler for a pointer event kind, if this mode implements it.
    pub fn handler(&self, kind: PointerKind) -> Option<Handler> {
        match kind {
            PointerKind::Move => self.pointer_move,
            PointerKind::Down => self.pointer_down,
            PointerKind::Up => self.pointer_up,
        }
    }
}

/// Mapping from mode identifier to its handlers.
#[derive(Clone, Debug, Default)]
pub struct ModeRegistry {
    modes: HashMap<ModeKind, ModeActions>,
}

impl ModeRegistry {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Every built-in editing mode. `InteractionsDisabled` is deliberately
    /// absent, so lookups for it resolve to nothing.
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        registry
            .register(ModeKind::Cursor, cursor::ACTIONS)
            .register(ModeKind::DragItems, drag_items::ACTIONS)
            .register(ModeKind::RectangleDraw, rectangle::DRAW_ACTIONS)
            .register(ModeKind::RectangleTransform, rectangle::TRANSFORM_ACTIONS)
            .register(ModeKind::Connector, connector::ACTIONS)
            .register(ModeKind::Pan, pan::ACTIONS)
            .register(ModeKind::PlaceIcon, place_icon::ACTIONS)
            .register(ModeKind::TextBox, text_box::ACTIONS);
        registry
    }

    /// Add or replace a mode.
    pub fn register(&mut self, kind: ModeKind, actions: ModeActions) -> &mut Self {
        self.modes.insert(kind, actions);
        self
    }

    pub fn unregister(&mut self, kind: ModeKind) -> Option<ModeActions> {
        self.modes.remove(&kind)
    }

    pub fn get(&self, kind: ModeKind) -> Option<&ModeActions> {
        self.modes.get(&kind)
    }

    pub fn contains(&self, kind: ModeKind) -> bool {
        self.modes.contains_key(&kind)
    }
}

/// Handler that does nothing itself; registering it makes the dispatcher
/// refresh the mouse state for that event kind.
pub(crate) fn track_pointer(_state: &mut State<'_>) -> Result<()> {
    Ok(())
}
