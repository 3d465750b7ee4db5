//! Platform input handling for the diagram surface.
//!
//! Hosts feed raw events to [`InteractionManager::handle`]. Pointer and touch
//! input is normalized and dispatched to the active mode; wheel, keyboard and
//! context-menu input is handled directly.
//!
//! ## Modules
//!
//! - `event` - Raw event shapes and the pointer/touch normalizer
//! - `coords` - Screen/tile conversion and mouse state derivation
//! - `surface` - Surface and event source traits, scoped listener guard
//! - `dispatcher` - `InteractionManager`: mode lifecycle and event routing
//! - `shortcuts` - Undo/redo/help keyboard shortcuts
//! - `context_menu` - Right-click target resolution
//! - `zoom` - Discrete wheel zoom

pub mod context_menu;
pub mod coords;
pub mod dispatcher;
pub mod event;
pub mod shortcuts;
pub mod surface;
pub mod zoom;

pub use dispatcher::InteractionManager;
pub use event::{
    ContextMenuEvent, FocusedElement, InputEvent, KeyboardEvent, Modifiers, PointerEvent, PointerKind,
    SlimPointerEvent, TargetId, TouchEvent, TouchPhase, TouchPoint, WheelEvent,
};
pub use surface::{CursorStyle, EventSource, ListenerId, ListenerKind, ListenerSet, Surface};
