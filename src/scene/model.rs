//! Semantic half of the scene: what a node is, independent of where it sits.

use serde::{Deserialize, Serialize};

/// An icon from the catalogue that nodes can display.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Icon {
    pub id: String,
    pub name: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection: Option<String>,
    #[serde(default)]
    pub is_isometric: bool,
}

impl Icon {
    pub fn new(id: impl Into<String>, name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            url: url.into(),
            collection: None,
            is_isometric: false,
        }
    }
}

/// Semantic data for a node.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModelItem {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl ModelItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// Partial update for a [`ModelItem`]; `None` fields are left untouched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModelItemUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
}

impl ModelItemUpdate {
    pub(crate) fn apply(self, item: &mut ModelItem) {
        if let Some(name) = self.name {
            item.name = name;
        }
        if let Some(description) = self.description {
            item.description = Some(description);
        }
        if let Some(icon) = self.icon {
            item.icon = Some(icon);
        }
    }
}

/// The model store: nodes' semantic data plus the icon catalogue.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Model {
    #[serde(default)]
    pub items: Vec<ModelItem>,
    #[serde(default)]
    pub icons: Vec<Icon>,
}

impl Model {
    pub fn item(&self, id: &str) -> Option<&ModelItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub(crate) fn item_mut(&mut self, id: &str) -> Option<&mut ModelItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    pub fn icon(&self, id: &str) -> Option<&Icon> {
        self.icons.iter().find(|icon| icon.id == id)
    }
}
