//! The diagram scene: model (semantic) and view (geometric) stores, the
//! spatial index used for hit testing, and the undo history.
//!
//! The interaction engine only reads the scene for hit tests and mutates it
//! through the explicit actions below. Every action on an unknown id fails
//! with [`SceneError::ItemNotFound`]; callers propagate it with `?`.
//!
//! ## Modules
//!
//! - `model` - Nodes' semantic data and the icon catalogue
//! - `view` - Node placement, connectors, rectangles, text boxes
//! - `history` - `History` contract and the snapshot stack behind it

mod history;
mod model;
mod view;

pub use history::{History, HistoryStack};
pub use model::{Icon, Model, ModelItem, ModelItemUpdate};
pub use view::{
    AnchorRef, Connector, ConnectorAnchor, ConnectorUpdate, Rectangle, RectangleUpdate, TextBox,
    TextBoxUpdate, View, ViewItem, ViewItemUpdate,
};

use crate::constants::MAX_HISTORY_STATES;
use crate::error::SceneError;
use crate::profile_scope;
use crate::spatial_index::SpatialIndex;
use crate::types::{Coords, ItemKind, ItemReference};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Everything that undo/redo captures.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneData {
    #[serde(default)]
    pub model: Model,
    #[serde(default)]
    pub view: View,
}

/// Owned scene store with mutation actions.
#[derive(Debug)]
pub struct Scene {
    data: SceneData,
    index: SpatialIndex,
    history: HistoryStack<SceneData>,
}

impl Scene {
    pub fn new() -> Self {
        Self::from_data(SceneData::default())
    }

    /// Load a scene; the loaded state becomes the bottom of the history.
    pub fn from_data(data: SceneData) -> Self {
        let mut scene = Self {
            history: HistoryStack::new(data.clone(), MAX_HISTORY_STATES),
            index: SpatialIndex::new(),
            data,
        };
        scene.rebuild_index();
        scene
    }

    pub fn data(&self) -> &SceneData {
        &self.data
    }

    pub fn model(&self) -> &Model {
        &self.data.model
    }

    pub fn view(&self) -> &View {
        &self.data.view
    }

    // ========================================================================
    // Hit testing
    // ========================================================================

    /// The topmost item at a tile: nodes, then text boxes, then connectors,
    /// then rectangles.
    pub fn item_at_tile(&self, tile: Coords) -> Option<ItemReference> {
        profile_scope!("item_at_tile");

        let hits = self.index.query_tile(tile);
        let first_of = |kind: ItemKind| hits.iter().find(|hit| hit.kind == kind).cloned();

        first_of(ItemKind::Item)
            .or_else(|| first_of(ItemKind::TextBox))
            .or_else(|| {
                self.data
                    .view
                    .connectors
                    .iter()
                    .find(|c| self.data.view.connector_path(c).contains(&tile))
                    .map(|c| ItemReference::connector(&c.id))
            })
            .or_else(|| first_of(ItemKind::Rectangle))
    }

    /// The node occupying a tile, ignoring every other kind.
    pub fn node_at_tile(&self, tile: Coords) -> Option<&ViewItem> {
        self.index
            .query_tile(tile)
            .into_iter()
            .find(|hit| hit.kind == ItemKind::Item)
            .and_then(|hit| self.data.view.item(&hit.id))
    }

    // ========================================================================
    // Model actions
    // ========================================================================

    pub fn create_model_item(&mut self, item: ModelItem) -> Result<(), SceneError> {
        if self.data.model.item(&item.id).is_some() {
            return Err(SceneError::DuplicateId {
                kind: ItemKind::Item,
                id: item.id,
            });
        }
        if let Some(icon) = &item.icon {
            if self.data.model.icon(icon).is_none() {
                return Err(SceneError::IconNotFound(icon.clone()));
            }
        }
        self.data.model.items.push(item);
        Ok(())
    }

    pub fn update_model_item(&mut self, id: &str, update: ModelItemUpdate) -> Result<(), SceneError> {
        if let Some(icon) = &update.icon {
            if self.data.model.icon(icon).is_none() {
                return Err(SceneError::IconNotFound(icon.clone()));
            }
        }
        let item = self
            .data
            .model
            .item_mut(id)
            .ok_or_else(|| SceneError::not_found(ItemKind::Item, id))?;
        update.apply(item);
        Ok(())
    }

    // ========================================================================
    // View item (node) actions
    // ========================================================================

    /// Place a node. Its model item must already exist.
    pub fn create_view_item(&mut self, item: ViewItem) -> Result<(), SceneError> {
        if self.data.model.item(&item.id).is_none() {
            return Err(SceneError::not_found(ItemKind::Item, &item.id));
        }
        if self.data.view.item(&item.id).is_some() {
            return Err(SceneError::DuplicateId {
                kind: ItemKind::Item,
                id: item.id,
            });
        }
        self.index
            .insert(ItemReference::item(&item.id), item.tile, item.tile);
        self.data.view.items.push(item);
        Ok(())
    }

    pub fn update_view_item(&mut self, id: &str, update: ViewItemUpdate) -> Result<(), SceneError> {
        let item = self
            .data
            .view
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| SceneError::not_found(ItemKind::Item, id))?;
        if let Some(tile) = update.tile {
            item.tile = tile;
        }
        let tile = item.tile;
        self.index.insert(ItemReference::item(id), tile, tile);
        Ok(())
    }

    /// Remove a node, its model item, and any connector anchored to it.
    pub fn delete_view_item(&mut self, id: &str) -> Result<(), SceneError> {
        let position = self
            .data
            .view
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| SceneError::not_found(ItemKind::Item, id))?;
        self.data.view.items.remove(position);
        self.data.model.items.retain(|item| item.id != id);
        self.index.remove(&ItemReference::item(id));

        let anchored = AnchorRef::Item(id.to_string());
        let before = self.data.view.connectors.len();
        self.data
            .view
            .connectors
            .retain(|c| !c.anchors.iter().any(|a| a.target == anchored));
        let dropped = before - self.data.view.connectors.len();
        if dropped > 0 {
            debug!(item = id, dropped, "Removed connectors anchored to deleted item");
        }
        Ok(())
    }

    // ========================================================================
    // Connector actions
    // ========================================================================

    pub fn create_connector(&mut self, connector: Connector) -> Result<(), SceneError> {
        if self.data.view.connector(&connector.id).is_some() {
            return Err(SceneError::DuplicateId {
                kind: ItemKind::Connector,
                id: connector.id,
            });
        }
        self.data.view.connectors.push(connector);
        Ok(())
    }

    pub fn update_connector(&mut self, id: &str, update: ConnectorUpdate) -> Result<(), SceneError> {
        let connector = self
            .data
            .view
            .connectors
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| SceneError::not_found(ItemKind::Connector, id))?;
        if let Some(color) = update.color {
            connector.color = color;
        }
        if let Some(anchors) = update.anchors {
            connector.anchors = anchors;
        }
        Ok(())
    }

    /// Re-pin a single anchor, wherever its connector is.
    pub fn update_connector_anchor(&mut self, anchor_id: &str, target: AnchorRef) -> Result<(), SceneError> {
        let anchor = self
            .data
            .view
            .connectors
            .iter_mut()
            .flat_map(|c| c.anchors.iter_mut())
            .find(|a| a.id == anchor_id)
            .ok_or_else(|| SceneError::not_found(ItemKind::ConnectorAnchor, anchor_id))?;
        anchor.target = target;
        Ok(())
    }

    pub fn delete_connector(&mut self, id: &str) -> Result<(), SceneError> {
        let position = self
            .data
            .view
            .connectors
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| SceneError::not_found(ItemKind::Connector, id))?;
        self.data.view.connectors.remove(position);
        Ok(())
    }

    // ========================================================================
    // Rectangle actions
    // ========================================================================

    pub fn create_rectangle(&mut self, rectangle: Rectangle) -> Result<(), SceneError> {
        if self.data.view.rectangle(&rectangle.id).is_some() {
            return Err(SceneError::DuplicateId {
                kind: ItemKind::Rectangle,
                id: rectangle.id,
            });
        }
        self.index.insert(
            ItemReference::rectangle(&rectangle.id),
            rectangle.from,
            rectangle.to,
        );
        self.data.view.rectangles.push(rectangle);
        Ok(())
    }

    pub fn update_rectangle(&mut self, id: &str, update: RectangleUpdate) -> Result<(), SceneError> {
        let rectangle = self
            .data
            .view
            .rectangles
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| SceneError::not_found(ItemKind::Rectangle, id))?;
        if let Some(color) = update.color {
            rectangle.color = color;
        }
        if let Some(from) = update.from {
            rectangle.from = from;
        }
        if let Some(to) = update.to {
            rectangle.to = to;
        }
        let (from, to) = (rectangle.from, rectangle.to);
        self.index.insert(ItemReference::rectangle(id), from, to);
        Ok(())
    }

    pub fn delete_rectangle(&mut self, id: &str) -> Result<(), SceneError> {
        let position = self
            .data
            .view
            .rectangles
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| SceneError::not_found(ItemKind::Rectangle, id))?;
        self.data.view.rectangles.remove(position);
        self.index.remove(&ItemReference::rectangle(id));
        Ok(())
    }

    // ========================================================================
    // Text box actions
    // ========================================================================

    pub fn create_text_box(&mut self, text_box: TextBox) -> Result<(), SceneError> {
        if self.data.view.text_box(&text_box.id).is_some() {
            return Err(SceneError::DuplicateId {
                kind: ItemKind::TextBox,
                id: text_box.id,
            });
        }
        self.index.insert(
            ItemReference::text_box(&text_box.id),
            text_box.tile,
            text_box.tile,
        );
        self.data.view.text_boxes.push(text_box);
        Ok(())
    }

    pub fn update_text_box(&mut self, id: &str, update: TextBoxUpdate) -> Result<(), SceneError> {
        let text_box = self
            .data
            .view
            .text_boxes
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| SceneError::not_found(ItemKind::TextBox, id))?;
        if let Some(tile) = update.tile {
            text_box.tile = tile;
        }
        if let Some(content) = update.content {
            text_box.content = content;
        }
        if let Some(font_size) = update.font_size {
            text_box.font_size = font_size;
        }
        let tile = text_box.tile;
        self.index.insert(ItemReference::text_box(id), tile, tile);
        Ok(())
    }

    pub fn delete_text_box(&mut self, id: &str) -> Result<(), SceneError> {
        let position = self
            .data
            .view
            .text_boxes
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| SceneError::not_found(ItemKind::TextBox, id))?;
        self.data.view.text_boxes.remove(position);
        self.index.remove(&ItemReference::text_box(id));
        Ok(())
    }

    // ========================================================================
    // History
    // ========================================================================

    /// Record the current state as an undo step.
    pub fn commit(&mut self) {
        self.history.push(self.data.clone());
        debug!(states = self.history.len(), "Scene history committed");
    }

    fn restore(&mut self, data: SceneData) {
        self.data = data;
        self.rebuild_index();
    }

    fn rebuild_index(&mut self) {
        let view = &self.data.view;
        let nodes = view
            .items
            .iter()
            .map(|i| (ItemReference::item(&i.id), i.tile, i.tile));
        let text_boxes = view
            .text_boxes
            .iter()
            .map(|t| (ItemReference::text_box(&t.id), t.tile, t.tile));
        let rectangles = view
            .rectangles
            .iter()
            .map(|r| (ItemReference::rectangle(&r.id), r.from, r.to));
        self.index.rebuild(nodes.chain(text_boxes).chain(rectangles));
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl History for Scene {
    fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    fn undo(&mut self) -> bool {
        match self.history.undo().cloned() {
            Some(data) => {
                self.restore(data);
                true
            }
            None => false,
        }
    }

    fn redo(&mut self) -> bool {
        match self.history.redo().cloned() {
            Some(data) => {
                self.restore(data);
                true
            }
            None => false,
        }
    }
}
