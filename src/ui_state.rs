//! UI state store - the active interaction mode, pointer state, viewport and
//! overlay state.
//!
//! Exactly one `UiState` exists per editing session. Fields are private; all
//! mutation goes through the action methods so every change is explicit and
//! traceable.
//!
//! ## Modes
//!
//! ```text
//! Cursor -> DragItems            (pointer down over an item)
//! DragItems -> Cursor            (pointer up)
//! RectangleDraw -> Cursor        (pointer up after drawing)
//! RectangleTransform -> Cursor   (pointer up after resizing)
//! PlaceIcon -> Cursor            (pointer up after placing)
//! TextBox -> Cursor              (pointer up after positioning)
//! Connector -> Connector         (pointer up resets the draft id)
//! Any -> Any                     (toolbar / host request via set_mode)
//! ```
//!
//! Transitions are not validated: any handler may request any mode.

use crate::settings::ZoomSettings;
use crate::types::{Coords, ItemReference, Vec2};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Identifier of an interaction mode, used for registry lookup and
/// transition detection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModeKind {
    #[serde(rename = "CURSOR")]
    Cursor,
    #[serde(rename = "DRAG_ITEMS")]
    DragItems,
    #[serde(rename = "RECTANGLE.DRAW")]
    RectangleDraw,
    #[serde(rename = "RECTANGLE.TRANSFORM")]
    RectangleTransform,
    #[serde(rename = "CONNECTOR")]
    Connector,
    #[serde(rename = "PAN")]
    Pan,
    #[serde(rename = "PLACE_ICON")]
    PlaceIcon,
    #[serde(rename = "TEXTBOX")]
    TextBox,
    #[serde(rename = "INTERACTIONS_DISABLED")]
    InteractionsDisabled,
}

impl ModeKind {
    pub fn id(&self) -> &'static str {
        match self {
            Self::Cursor => "CURSOR",
            Self::DragItems => "DRAG_ITEMS",
            Self::RectangleDraw => "RECTANGLE.DRAW",
            Self::RectangleTransform => "RECTANGLE.TRANSFORM",
            Self::Connector => "CONNECTOR",
            Self::Pan => "PAN",
            Self::PlaceIcon => "PLACE_ICON",
            Self::TextBox => "TEXTBOX",
            Self::InteractionsDisabled => "INTERACTIONS_DISABLED",
        }
    }
}

impl fmt::Display for ModeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Corner of a rectangle grabbed in transform mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnchorPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// The active mode plus its transient draft state.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Mode {
    /// Editing is switched off; no listeners are attached
    InteractionsDisabled,
    #[default]
    Cursor,
    DragItems {
        items: Vec<ItemReference>,
        /// Still true until the pointer crosses a tile boundary
        is_initial_movement: bool,
    },
    RectangleDraw {
        id: Option<String>,
    },
    RectangleTransform {
        id: String,
        selected_anchor: Option<AnchorPosition>,
    },
    Connector {
        id: Option<String>,
    },
    Pan,
    PlaceIcon {
        /// Icon chosen in the picker
        id: Option<String>,
    },
    TextBox {
        id: Option<String>,
    },
}

impl Mode {
    pub fn kind(&self) -> ModeKind {
        match self {
            Self::InteractionsDisabled => ModeKind::InteractionsDisabled,
            Self::Cursor => ModeKind::Cursor,
            Self::DragItems { .. } => ModeKind::DragItems,
            Self::RectangleDraw { .. } => ModeKind::RectangleDraw,
            Self::RectangleTransform { .. } => ModeKind::RectangleTransform,
            Self::Connector { .. } => ModeKind::Connector,
            Self::Pan => ModeKind::Pan,
            Self::PlaceIcon { .. } => ModeKind::PlaceIcon,
            Self::TextBox { .. } => ModeKind::TextBox,
        }
    }

    pub fn drag_items(items: Vec<ItemReference>) -> Self {
        Self::DragItems {
            items,
            is_initial_movement: true,
        }
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self, Self::InteractionsDisabled)
    }
}

/// A pointer location in both coordinate spaces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MousePosition {
    pub screen: Vec2,
    pub tile: Coords,
}

impl MousePosition {
    pub fn new(screen: Vec2, tile: Coords) -> Self {
        Self { screen, tile }
    }
}

/// Last known pointer state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MouseState {
    pub position: MousePosition,
    /// Where the current press started; `None` while released
    pub mousedown: Option<MousePosition>,
    /// Movement since the previous pointer event
    pub delta: Option<MousePosition>,
}

/// Context-menu target resolved from a right click.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContextMenu {
    Item { item: ItemReference, tile: Coords },
    Empty { tile: Coords },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DialogType {
    Help,
}

/// The UI state store.
#[derive(Debug, Clone)]
pub struct UiState {
    mode: Mode,
    mouse: MouseState,
    zoom: f64,
    /// Viewport offset in tile units
    scroll: Vec2,
    context_menu: Option<ContextMenu>,
    dialog: Option<DialogType>,
    item_controls: Option<ItemReference>,
    hovered_item: Option<ItemReference>,
    zoom_settings: ZoomSettings,
}

impl UiState {
    pub fn new(zoom_settings: ZoomSettings) -> Self {
        Self {
            mode: Mode::default(),
            mouse: MouseState::default(),
            zoom: zoom_settings.clamp(zoom_settings.default),
            scroll: Vec2::ZERO,
            context_menu: None,
            dialog: None,
            item_controls: None,
            hovered_item: None,
            zoom_settings,
        }
    }

    // ========================================================================
    // Reads
    // ========================================================================

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn mouse(&self) -> &MouseState {
        &self.mouse
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn scroll(&self) -> Vec2 {
        self.scroll
    }

    pub fn context_menu(&self) -> Option<&ContextMenu> {
        self.context_menu.as_ref()
    }

    pub fn dialog(&self) -> Option<DialogType> {
        self.dialog
    }

    pub fn item_controls(&self) -> Option<&ItemReference> {
        self.item_controls.as_ref()
    }

    pub fn hovered_item(&self) -> Option<&ItemReference> {
        self.hovered_item.as_ref()
    }

    // ========================================================================
    // Actions
    // ========================================================================

    pub fn set_mode(&mut self, mode: Mode) {
        if mode.kind() != self.mode.kind() {
            debug!(from = %self.mode.kind(), to = %mode.kind(), "Mode change requested");
        }
        self.mode = mode;
    }

    pub fn set_mouse(&mut self, mouse: MouseState) {
        self.mouse = mouse;
    }

    pub fn set_context_menu(&mut self, menu: Option<ContextMenu>) {
        self.context_menu = menu;
    }

    pub fn set_dialog(&mut self, dialog: Option<DialogType>) {
        self.dialog = dialog;
    }

    pub fn set_item_controls(&mut self, item: Option<ItemReference>) {
        self.item_controls = item;
    }

    pub fn set_hovered_item(&mut self, item: Option<ItemReference>) {
        self.hovered_item = item;
    }

    pub fn set_scroll(&mut self, scroll: Vec2) {
        self.scroll = scroll;
    }

    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = self.zoom_settings.clamp(zoom);
    }

    /// One zoom step in, clamped to the configured maximum.
    pub fn increment_zoom(&mut self) {
        self.set_zoom(self.zoom + self.zoom_settings.step);
    }

    /// One zoom step out, clamped to the configured minimum.
    pub fn decrement_zoom(&mut self) {
        self.set_zoom(self.zoom - self.zoom_settings.step);
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new(ZoomSettings::default())
    }
}
