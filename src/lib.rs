//! Tileboard - the interaction engine of a tile-based diagram editor.
//!
//! Turns raw pointer, touch, wheel, keyboard and context-menu input into
//! edits of a diagram scene by way of a small set of interaction modes.
//!
//! ## Modules
//!
//! - `input` - Event normalization, dispatch, shortcuts, zoom, context menu
//! - `modes` - Cursor, drag, rectangle, connector, pan, icon and text modes
//! - `scene` - Model/view stores, hit testing and undo history
//! - `ui_state` - Active mode, mouse, viewport and overlay state
//! - `settings` - Tile size, zoom bounds and creation defaults
//! - `spatial_index` - R-tree over tile bounds
//! - `perf` - Dispatch timing
//! - `logging` - `tracing` subscriber setup

pub mod constants;
pub mod error;
pub mod input;
pub mod logging;
pub mod modes;
pub mod perf;
pub mod scene;
pub mod settings;
pub mod spatial_index;
pub mod types;
pub mod ui_state;

pub use error::{InteractionError, Result, SceneError, SettingsError};
pub use input::InteractionManager;
pub use modes::{Handler, ModeActions, ModeRegistry, State};
pub use scene::{History, Scene, SceneData};
pub use settings::InteractionSettings;
pub use ui_state::{Mode, ModeKind, UiState};
