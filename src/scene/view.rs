//! Geometric half of the scene: where things sit on the tile grid.

use crate::types::Coords;
use serde::{Deserialize, Serialize};

/// Placement of a node on the grid. Shares its id with a [`super::ModelItem`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewItem {
    pub id: String,
    pub tile: Coords,
}

impl ViewItem {
    pub fn new(id: impl Into<String>, tile: Coords) -> Self {
        Self { id: id.into(), tile }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewItemUpdate {
    pub tile: Option<Coords>,
}

/// What a connector end is pinned to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AnchorRef {
    /// Follows a node wherever it moves
    Item(String),
    /// Fixed to a tile
    Tile(Coords),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConnectorAnchor {
    pub id: String,
    #[serde(rename = "ref")]
    pub target: AnchorRef,
}

impl ConnectorAnchor {
    pub fn new(id: impl Into<String>, target: AnchorRef) -> Self {
        Self {
            id: id.into(),
            target,
        }
    }
}

/// An edge drawn between nodes or free tiles.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Connector {
    pub id: String,
    pub color: String,
    pub anchors: Vec<ConnectorAnchor>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConnectorUpdate {
    pub color: Option<String>,
    pub anchors: Option<Vec<ConnectorAnchor>>,
}

/// A filled region spanning two opposite corner tiles (inclusive).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub id: String,
    pub color: String,
    pub from: Coords,
    pub to: Coords,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RectangleUpdate {
    pub color: Option<String>,
    pub from: Option<Coords>,
    pub to: Option<Coords>,
}

/// Free text anchored at a tile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextBox {
    pub id: String,
    pub tile: Coords,
    pub content: String,
    pub font_size: f32,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextBoxUpdate {
    pub tile: Option<Coords>,
    pub content: Option<String>,
    pub font_size: Option<f32>,
}

/// The view store: every geometric item on the diagram.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct View {
    #[serde(default)]
    pub items: Vec<ViewItem>,
    #[serde(default)]
    pub connectors: Vec<Connector>,
    #[serde(default)]
    pub rectangles: Vec<Rectangle>,
    #[serde(default)]
    pub text_boxes: Vec<TextBox>,
}

impl View {
    pub fn item(&self, id: &str) -> Option<&ViewItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn connector(&self, id: &str) -> Option<&Connector> {
        self.connectors.iter().find(|c| c.id == id)
    }

    pub fn rectangle(&self, id: &str) -> Option<&Rectangle> {
        self.rectangles.iter().find(|r| r.id == id)
    }

    pub fn text_box(&self, id: &str) -> Option<&TextBox> {
        self.text_boxes.iter().find(|t| t.id == id)
    }

    /// Resolve an anchor to the tile it currently points at.
    pub fn anchor_tile(&self, target: &AnchorRef) -> Option<Coords> {
        match target {
            AnchorRef::Item(id) => self.item(id).map(|item| item.tile),
            AnchorRef::Tile(tile) => Some(*tile),
        }
    }

    /// Tiles covered by a connector: an L-shaped run (horizontal, then
    /// vertical) between each pair of consecutive anchors.
    pub fn connector_path(&self, connector: &Connector) -> Vec<Coords> {
        let ends: Vec<Coords> = connector
            .anchors
            .iter()
            .filter_map(|anchor| self.anchor_tile(&anchor.target))
            .collect();

        let mut path = Vec::new();
        if let Some(first) = ends.first() {
            path.push(*first);
        }
        for pair in ends.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            let step_x = (to.x - from.x).signum();
            let step_y = (to.y - from.y).signum();
            let mut cursor = from;
            while cursor.x != to.x {
                cursor.x += step_x;
                path.push(cursor);
            }
            while cursor.y != to.y {
                cursor.y += step_y;
                path.push(cursor);
            }
        }
        path
    }
}
