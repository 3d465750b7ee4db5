//! The interactive surface and scoped listener registration.
//!
//! The host owns the real window and drawing surface; the engine sees them
//! through [`EventSource`] and [`Surface`]. Listener registrations are held
//! by a [`ListenerSet`] guard which releases every one of them when dropped,
//! so teardown happens on every exit path.

use crate::input::event::TargetId;
use crate::types::Rect;
use std::fmt;
use std::rc::Rc;
use tracing::debug;

/// Handle returned by a registration, used to release it.
pub type ListenerId = u64;

/// Native event streams the engine subscribes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    PointerMove,
    PointerDown,
    PointerUp,
    ContextMenu,
    TouchStart,
    TouchMove,
    TouchEnd,
    KeyDown,
    Wheel,
}

impl ListenerKind {
    /// Listeners attached to the window for the duration of a session.
    pub const WINDOW: [ListenerKind; 8] = [
        Self::PointerMove,
        Self::PointerDown,
        Self::PointerUp,
        Self::ContextMenu,
        Self::TouchStart,
        Self::TouchMove,
        Self::TouchEnd,
        Self::KeyDown,
    ];
}

/// Something events can be subscribed on.
pub trait EventSource {
    fn listen(&self, kind: ListenerKind) -> ListenerId;
    fn unlisten(&self, id: ListenerId);
}

/// Pointer cursor shown over the surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CursorStyle {
    #[default]
    Default,
    Grab,
    Grabbing,
    Crosshair,
}

/// The interactive region pointer input is measured against.
pub trait Surface: EventSource {
    /// Identity compared against event targets
    fn id(&self) -> TargetId;
    /// Current client rect
    fn bounds(&self) -> Rect;
    fn set_cursor(&self, cursor: CursorStyle);
}

/// View a surface as a plain event source for registration.
pub fn surface_source(surface: &Rc<dyn Surface>) -> Rc<dyn EventSource> {
    Rc::new(SurfaceEvents(Rc::clone(surface)))
}

struct SurfaceEvents(Rc<dyn Surface>);

impl EventSource for SurfaceEvents {
    fn listen(&self, kind: ListenerKind) -> ListenerId {
        self.0.listen(kind)
    }

    fn unlisten(&self, id: ListenerId) {
        self.0.unlisten(id)
    }
}

struct Registration {
    source: Rc<dyn EventSource>,
    kind: ListenerKind,
    id: ListenerId,
}

/// RAII guard over a batch of listener registrations.
#[derive(Default)]
pub struct ListenerSet {
    registrations: Vec<Registration>,
}

impl ListenerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn listen(&mut self, source: &Rc<dyn EventSource>, kind: ListenerKind) {
        let id = source.listen(kind);
        self.registrations.push(Registration {
            source: Rc::clone(source),
            kind,
            id,
        });
    }

    pub fn contains(&self, kind: ListenerKind) -> bool {
        self.registrations.iter().any(|r| r.kind == kind)
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }
}

impl Drop for ListenerSet {
    fn drop(&mut self) {
        if self.registrations.is_empty() {
            return;
        }
        debug!(count = self.registrations.len(), "Releasing listeners");
        for registration in self.registrations.drain(..) {
            registration.source.unlisten(registration.id);
        }
    }
}

impl fmt::Debug for ListenerSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.registrations.iter().map(|r| (r.kind, r.id)))
            .finish()
    }
}
