//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `MockWindow` / `MockSurface` - Recording `EventSource` and `Surface`
//! - `TestSceneBuilder` - Builder for scenes with nodes, shapes and icons
//! - `Harness` - A manager attached to a mock window, plus pointer helpers

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tileboard::input::{
    CursorStyle, EventSource, InputEvent, ListenerId, ListenerKind, PointerEvent, PointerKind, Surface,
    TargetId,
};
use tileboard::scene::{Icon, ModelItem, Rectangle, SceneData, TextBox, ViewItem};
use tileboard::types::{Coords, Rect};
use tileboard::{InteractionManager, InteractionSettings, ModeRegistry, Result, Scene, UiState};

pub const SURFACE_ID: TargetId = 1;
/// A UI element layered over the surface (toolbar, dialog, ...)
pub const OVERLAY_ID: TargetId = 2;
pub const TILE: f64 = 50.0;

// ============================================================================
// Mock event sources
// ============================================================================

/// Records registrations so tests can assert on the listener lifecycle.
#[derive(Default)]
pub struct ListenerLog {
    next: Cell<ListenerId>,
    active: RefCell<Vec<(ListenerId, ListenerKind)>>,
    total: Cell<usize>,
}

impl ListenerLog {
    fn listen(&self, kind: ListenerKind) -> ListenerId {
        let id = self.next.get() + 1;
        self.next.set(id);
        self.total.set(self.total.get() + 1);
        self.active.borrow_mut().push((id, kind));
        id
    }

    fn unlisten(&self, id: ListenerId) {
        self.active.borrow_mut().retain(|(active, _)| *active != id);
    }

    pub fn active_count(&self) -> usize {
        self.active.borrow().len()
    }

    pub fn is_active(&self, kind: ListenerKind) -> bool {
        self.active.borrow().iter().any(|(_, k)| *k == kind)
    }

    /// Registrations made over the log's lifetime.
    pub fn total(&self) -> usize {
        self.total.get()
    }
}

#[derive(Default)]
pub struct MockWindow {
    pub log: ListenerLog,
}

impl EventSource for MockWindow {
    fn listen(&self, kind: ListenerKind) -> ListenerId {
        self.log.listen(kind)
    }

    fn unlisten(&self, id: ListenerId) {
        self.log.unlisten(id)
    }
}

pub struct MockSurface {
    pub id: TargetId,
    pub bounds: Cell<Rect>,
    pub cursor: Cell<CursorStyle>,
    pub log: ListenerLog,
}

impl MockSurface {
    pub fn new(id: TargetId, bounds: Rect) -> Self {
        Self {
            id,
            bounds: Cell::new(bounds),
            cursor: Cell::new(CursorStyle::Default),
            log: ListenerLog::default(),
        }
    }
}

impl EventSource for MockSurface {
    fn listen(&self, kind: ListenerKind) -> ListenerId {
        self.log.listen(kind)
    }

    fn unlisten(&self, id: ListenerId) {
        self.log.unlisten(id)
    }
}

impl Surface for MockSurface {
    fn id(&self) -> TargetId {
        self.id
    }

    fn bounds(&self) -> Rect {
        self.bounds.get()
    }

    fn set_cursor(&self, cursor: CursorStyle) {
        self.cursor.set(cursor);
    }
}

// ============================================================================
// TestSceneBuilder
// ============================================================================

#[derive(Default)]
pub struct TestSceneBuilder {
    data: SceneData,
}

impl TestSceneBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_node(mut self, id: &str, tile: Coords) -> Self {
        self.data.model.items.push(ModelItem::new(id, id));
        self.data.view.items.push(ViewItem::new(id, tile));
        self
    }

    pub fn with_icon(mut self, id: &str) -> Self {
        self.data
            .model
            .icons
            .push(Icon::new(id, id, format!("https://icons.test/{id}.svg")));
        self
    }

    pub fn with_rectangle(mut self, id: &str, from: Coords, to: Coords) -> Self {
        self.data.view.rectangles.push(Rectangle {
            id: id.into(),
            color: "#ffffff".into(),
            from,
            to,
        });
        self
    }

    pub fn with_text_box(mut self, id: &str, tile: Coords) -> Self {
        self.data.view.text_boxes.push(TextBox {
            id: id.into(),
            tile,
            content: id.into(),
            font_size: 0.6,
        });
        self
    }

    pub fn build(self) -> Scene {
        Scene::from_data(self.data)
    }
}

/// Centre of a tile in screen space, with the surface at the origin and
/// zoom 1.
pub fn tile_center(x: i32, y: i32) -> (f64, f64) {
    (f64::from(x) * TILE + TILE / 2.0, f64::from(y) * TILE + TILE / 2.0)
}

// ============================================================================
// Harness
// ============================================================================

/// An attached manager with a surface at (0, 0) sized 800x600.
pub struct Harness {
    pub manager: InteractionManager,
    pub scene: Scene,
    pub ui: UiState,
    pub window: Rc<MockWindow>,
    pub surface: Rc<MockSurface>,
}

impl Harness {
    pub fn new() -> Self {
        Self::build(InteractionManager::new(InteractionSettings::default()), Scene::new())
    }

    pub fn with_registry(registry: ModeRegistry) -> Self {
        Self::build(
            InteractionManager::with_registry(InteractionSettings::default(), registry),
            Scene::new(),
        )
    }

    pub fn with_scene(scene: Scene) -> Self {
        Self::build(InteractionManager::new(InteractionSettings::default()), scene)
    }

    fn build(mut manager: InteractionManager, scene: Scene) -> Self {
        let ui = UiState::default();
        let window = Rc::new(MockWindow::default());
        let surface = Rc::new(MockSurface::new(SURFACE_ID, Rect::new(0.0, 0.0, 800.0, 600.0)));

        let as_surface: Rc<dyn Surface> = surface.clone();
        let as_window: Rc<dyn EventSource> = window.clone();
        manager.set_interactions_element(as_surface);
        manager.attach(as_window, &ui);

        Self {
            manager,
            scene,
            ui,
            window,
            surface,
        }
    }

    pub fn send(&mut self, event: &mut InputEvent) -> Result<()> {
        self.manager.handle(event, &mut self.scene, &mut self.ui)
    }

    pub fn pointer_on(&mut self, kind: PointerKind, x: f64, y: f64, target: TargetId) -> Result<()> {
        self.send(&mut InputEvent::Pointer(PointerEvent::new(kind, x, y, target)))
    }

    pub fn pointer_at_tile(&mut self, kind: PointerKind, x: i32, y: i32) -> Result<()> {
        let (sx, sy) = tile_center(x, y);
        self.pointer_on(kind, sx, sy, SURFACE_ID)
    }

    pub fn down(&mut self, x: i32, y: i32) {
        self.pointer_at_tile(PointerKind::Down, x, y).unwrap();
    }

    pub fn move_to(&mut self, x: i32, y: i32) {
        self.pointer_at_tile(PointerKind::Move, x, y).unwrap();
    }

    pub fn up(&mut self, x: i32, y: i32) {
        self.pointer_at_tile(PointerKind::Up, x, y).unwrap();
    }
}
