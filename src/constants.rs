//! Engine-wide constants.
//!
//! Centralizes magic numbers for the tile grid, zoom and history so the
//! interaction code and its defaults stay in one place.

// ============================================================================
// Tile Grid
// ============================================================================

/// Edge length of one tile in screen pixels at zoom 1.0
pub const TILE_SIZE: f64 = 50.0;

// ============================================================================
// Zoom
// ============================================================================

/// Minimum zoom level
pub const MIN_ZOOM: f64 = 0.2;

/// Maximum zoom level
pub const MAX_ZOOM: f64 = 1.0;

/// Default zoom level
pub const DEFAULT_ZOOM: f64 = 1.0;

/// Zoom step applied per wheel tick
pub const ZOOM_STEP: f64 = 0.2;

// ============================================================================
// Item Defaults
// ============================================================================

/// Fill colour for newly drawn rectangles
pub const DEFAULT_RECTANGLE_COLOR: &str = "#a5b8f3";

/// Stroke colour for newly drawn connectors
pub const DEFAULT_CONNECTOR_COLOR: &str = "#a5b8f3";

/// Font size for newly created text boxes
pub const DEFAULT_FONT_SIZE: f32 = 0.6;

/// Name given to nodes placed from the icon picker
pub const DEFAULT_NODE_NAME: &str = "Untitled";

// ============================================================================
// History & Timing
// ============================================================================

/// Maximum undo history states to keep
pub const MAX_HISTORY_STATES: usize = 50;

/// Budget for one synchronous dispatch (one 60 FPS frame)
pub const SLOW_DISPATCH_MS: f64 = 16.67;

// ============================================================================
// Configuration
// ============================================================================

/// Directory name under the platform config dir
pub const CONFIG_DIR_NAME: &str = "tileboard";

/// Interaction settings file name
pub const SETTINGS_FILE_NAME: &str = "interaction.json";
