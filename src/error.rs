//! Error types for the interaction engine.
//!
//! Absent prerequisites (no surface, unknown mode, unimplemented handler) are
//! not errors and never show up here. What does show up is collaborator
//! failure: a scene action asked to touch an item that does not exist.

use crate::types::ItemKind;
use thiserror::Error;

/// Errors raised by scene mutation actions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// No item of the given kind has this id
    #[error("{kind:?} not found: {id}")]
    ItemNotFound { kind: ItemKind, id: String },

    /// An item with this id already exists
    #[error("duplicate {kind:?} id: {id}")]
    DuplicateId { kind: ItemKind, id: String },

    /// The icon catalogue has no icon with this id
    #[error("icon not found: {0}")]
    IconNotFound(String),
}

impl SceneError {
    pub fn not_found(kind: ItemKind, id: impl Into<String>) -> Self {
        Self::ItemNotFound { kind, id: id.into() }
    }
}

/// Errors propagated out of a dispatch.
#[derive(Error, Debug)]
pub enum InteractionError {
    /// A scene action failed inside a mode handler
    #[error("scene action failed: {0}")]
    Scene(#[from] SceneError),
}

/// Errors raised while loading or validating settings.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Zoom bounds or step are inconsistent
    #[error("invalid zoom settings: min {min}, max {max}, step {step}")]
    InvalidZoom { min: f64, max: f64, step: f64 },

    /// Tile size must be strictly positive
    #[error("invalid tile size: {0}")]
    InvalidTileSize(f64),
}

/// Result type alias for dispatch and handler operations
pub type Result<T, E = InteractionError> = std::result::Result<T, E>;
