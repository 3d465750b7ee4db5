//! Spatial Index Module
//!
//! Provides R-tree based spatial indexing over tile bounds for hit testing
//! the scene. Point queries are O(log n) instead of a scan over every item.

use crate::types::{Coords, ItemReference};
use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;

/// A spatial entry covering an inclusive range of tiles.
#[derive(Debug, Clone)]
pub struct SpatialEntry {
    pub item: ItemReference,
    pub min: Coords,
    pub max: Coords,
}

impl SpatialEntry {
    /// Build an entry from two opposite corners, in any order.
    pub fn new(item: ItemReference, a: Coords, b: Coords) -> Self {
        Self {
            item,
            min: Coords::new(a.x.min(b.x), a.y.min(b.y)),
            max: Coords::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    #[inline]
    pub fn contains(&self, tile: Coords) -> bool {
        tile.x >= self.min.x && tile.x <= self.max.x && tile.y >= self.min.y && tile.y <= self.max.y
    }

    /// Number of tiles covered; smaller entries win ties in hit tests.
    fn area(&self) -> i64 {
        (i64::from(self.max.x - self.min.x) + 1) * (i64::from(self.max.y - self.min.y) + 1)
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[i32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min.x, self.min.y], [self.max.x, self.max.y])
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.item == other.item
    }
}

/// Spatial index for tile-bounded scene items.
#[derive(Debug)]
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    entries: HashMap<ItemReference, SpatialEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
            entries: HashMap::new(),
        }
    }

    pub fn insert(&mut self, item: ItemReference, a: Coords, b: Coords) {
        if let Some(old_entry) = self.entries.remove(&item) {
            self.tree.remove(&old_entry);
        }

        let entry = SpatialEntry::new(item.clone(), a, b);
        self.tree.insert(entry.clone());
        self.entries.insert(item, entry);
    }

    pub fn remove(&mut self, item: &ItemReference) -> bool {
        if let Some(entry) = self.entries.remove(item) {
            self.tree.remove(&entry);
            true
        } else {
            false
        }
    }

    /// All items covering the tile, smallest footprint first.
    pub fn query_tile(&self, tile: Coords) -> Vec<ItemReference> {
        let point_envelope = AABB::from_point([tile.x, tile.y]);

        let mut hits: Vec<&SpatialEntry> = self
            .tree
            .locate_in_envelope_intersecting(&point_envelope)
            .filter(|entry| entry.contains(tile))
            .collect();
        hits.sort_by_key(|entry| entry.area());
        hits.into_iter().map(|entry| entry.item.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn rebuild<I>(&mut self, items: I)
    where
        I: Iterator<Item = (ItemReference, Coords, Coords)>,
    {
        let entries: Vec<SpatialEntry> = items
            .map(|(item, a, b)| SpatialEntry::new(item, a, b))
            .collect();

        self.entries = entries.iter().map(|e| (e.item.clone(), e.clone())).collect();
        self.tree = RTree::bulk_load(entries);
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}
