//! Core geometry and reference types shared by the scene, the UI state store
//! and the input pipeline.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

// ============================================================================
// Tile Coordinates
// ============================================================================

/// A logical grid cell on the diagram.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coords {
    pub x: i32,
    pub y: i32,
}

impl Coords {
    pub const ZERO: Coords = Coords { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.x == 0 && self.y == 0
    }
}

impl Add for Coords {
    type Output = Coords;

    fn add(self, rhs: Coords) -> Coords {
        Coords::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Coords {
    type Output = Coords;

    fn sub(self, rhs: Coords) -> Coords {
        Coords::new(self.x - rhs.x, self.y - rhs.y)
    }
}

// ============================================================================
// Screen Space
// ============================================================================

/// A screen-space position or offset in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Pixel dimensions of the interactive surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Bounding geometry of the surface in screen space (its client rect).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Size,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Size::new(width, height),
        }
    }
}

// ============================================================================
// Item References
// ============================================================================

/// The kinds of scene item an interaction can target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemKind {
    /// A placed node (icon + label)
    Item,
    Connector,
    ConnectorAnchor,
    Rectangle,
    TextBox,
}

/// A typed pointer to a scene item.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemReference {
    #[serde(rename = "type")]
    pub kind: ItemKind,
    pub id: String,
}

impl ItemReference {
    pub fn new(kind: ItemKind, id: impl Into<String>) -> Self {
        Self { kind, id: id.into() }
    }

    pub fn item(id: impl Into<String>) -> Self {
        Self::new(ItemKind::Item, id)
    }

    pub fn connector(id: impl Into<String>) -> Self {
        Self::new(ItemKind::Connector, id)
    }

    pub fn rectangle(id: impl Into<String>) -> Self {
        Self::new(ItemKind::Rectangle, id)
    }

    pub fn text_box(id: impl Into<String>) -> Self {
        Self::new(ItemKind::TextBox, id)
    }
}

/// Generate a fresh id for items created by interaction modes.
pub fn generate_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
