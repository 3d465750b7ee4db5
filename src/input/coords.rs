//! Coordinate conversion between screen pixels and logical tiles.
//!
//! `tile = floor((screen - surface_origin) / (tile_size * zoom) + scroll)`,
//! applied independently per axis. Every function here is pure.

use crate::input::event::{PointerKind, SlimPointerEvent};
use crate::types::{Coords, Vec2};
use crate::ui_state::{MousePosition, MouseState};

/// Context needed for coordinate conversions
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoordinateContext {
    /// Top-left of the interactive surface in screen space
    pub origin: Vec2,
    pub zoom: f64,
    /// Viewport offset in tile units
    pub scroll: Vec2,
    pub tile_size: f64,
}

impl CoordinateContext {
    #[inline]
    pub fn new(origin: Vec2, zoom: f64, scroll: Vec2, tile_size: f64) -> Self {
        Self {
            origin,
            zoom,
            scroll,
            tile_size,
        }
    }

    #[inline]
    fn tile_px(&self) -> f64 {
        self.tile_size * self.zoom
    }
}

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Convert a screen position to the tile under it
    #[inline]
    pub fn screen_to_tile(screen: Vec2, ctx: &CoordinateContext) -> Coords {
        let tile_px = ctx.tile_px();
        Coords::new(
            ((screen.x - ctx.origin.x) / tile_px + ctx.scroll.x).floor() as i32,
            ((screen.y - ctx.origin.y) / tile_px + ctx.scroll.y).floor() as i32,
        )
    }

    /// Screen position of a tile's top-left corner
    #[inline]
    pub fn tile_to_screen(tile: Coords, ctx: &CoordinateContext) -> Vec2 {
        let tile_px = ctx.tile_px();
        Vec2::new(
            (f64::from(tile.x) - ctx.scroll.x) * tile_px + ctx.origin.x,
            (f64::from(tile.y) - ctx.scroll.y) * tile_px + ctx.origin.y,
        )
    }

    /// Convert a screen delta to a fractional tile delta (for panning)
    #[inline]
    pub fn delta_screen_to_tiles(delta: Vec2, ctx: &CoordinateContext) -> Vec2 {
        let tile_px = ctx.tile_px();
        Vec2::new(delta.x / tile_px, delta.y / tile_px)
    }
}

/// Derive the next mouse state from the previous one and a pointer event.
///
/// `mousedown` is captured on press, cleared on release and carried
/// otherwise; `delta` is measured against the previous position.
pub fn next_mouse(last: &MouseState, event: &SlimPointerEvent, ctx: &CoordinateContext) -> MouseState {
    let position = MousePosition::new(event.screen, CoordinateConverter::screen_to_tile(event.screen, ctx));

    let mousedown = match event.kind {
        PointerKind::Down => Some(position),
        PointerKind::Up => None,
        PointerKind::Move => last.mousedown,
    };

    MouseState {
        position,
        mousedown,
        delta: Some(MousePosition::new(
            position.screen - last.position.screen,
            position.tile - last.position.tile,
        )),
    }
}
