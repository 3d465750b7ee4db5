//! Raw platform input and the event normalizer.
//!
//! Hosts translate their native events into the raw shapes below. Pointer
//! and touch input is then normalized into one [`SlimPointerEvent`] before it
//! reaches the dispatcher. Normalization is pure; it never touches state.

use crate::types::Vec2;

/// Opaque identity of the element an event originated from.
pub type TargetId = u64;

/// Canonical pointer event kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerKind {
    Move,
    Down,
    Up,
}

impl PointerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Move => "pointermove",
            Self::Down => "pointerdown",
            Self::Up => "pointerup",
        }
    }
}

/// A native mouse/pointer event.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    /// Client (viewport) coordinates in pixels
    pub client: Vec2,
    pub target: TargetId,
}

impl PointerEvent {
    pub fn new(kind: PointerKind, x: f64, y: f64, target: TargetId) -> Self {
        Self {
            kind,
            client: Vec2::new(x, y),
            target,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchPhase {
    Start,
    Move,
    End,
}

/// One active contact point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPoint {
    pub client: Vec2,
}

impl TouchPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            client: Vec2::new(x, y),
        }
    }
}

/// A native touch event. `touches` lists the contacts still on the surface,
/// so it is empty on release.
#[derive(Clone, Debug, PartialEq)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    pub touches: Vec<TouchPoint>,
    pub target: TargetId,
}

#[derive(Clone, Debug, PartialEq)]
pub struct WheelEvent {
    pub delta_y: f64,
    pub target: TargetId,
}

/// Keyboard modifier state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        meta: false,
        shift: false,
        alt: false,
    };

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Self::NONE
        }
    }

    pub fn meta() -> Self {
        Self {
            meta: true,
            ..Self::NONE
        }
    }

    pub fn ctrl_shift() -> Self {
        Self {
            ctrl: true,
            shift: true,
            ..Self::NONE
        }
    }

    /// Ctrl on Linux/Windows, Cmd on macOS.
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// What kind of element holds keyboard focus.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FocusedElement {
    /// Single-line text input
    Input,
    /// Multi-line text input
    TextArea,
    /// Any element with `contenteditable`
    ContentEditable,
    /// Inside a rich-text editor region
    RichTextEditor,
    #[default]
    Other,
}

impl FocusedElement {
    /// Keystrokes aimed at these are never intercepted.
    pub fn is_text_entry(&self) -> bool {
        !matches!(self, Self::Other)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct KeyboardEvent {
    /// Key value as reported by the platform (`"z"`, `"Z"`, `"F1"`, ...)
    pub key: String,
    pub modifiers: Modifiers,
    pub focused: FocusedElement,
    default_prevented: bool,
}

impl KeyboardEvent {
    pub fn new(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into(),
            modifiers,
            focused: FocusedElement::Other,
            default_prevented: false,
        }
    }

    pub fn with_focus(mut self, focused: FocusedElement) -> Self {
        self.focused = focused;
        self
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContextMenuEvent {
    pub target: TargetId,
    default_prevented: bool,
}

impl ContextMenuEvent {
    pub fn new(target: TargetId) -> Self {
        Self {
            target,
            default_prevented: false,
        }
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Everything a host can feed the engine.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    Pointer(PointerEvent),
    Touch(TouchEvent),
    Wheel(WheelEvent),
    Key(KeyboardEvent),
    ContextMenu(ContextMenuEvent),
}

/// The canonical pointer event the dispatcher consumes.
#[derive(Clone, Debug, PartialEq)]
pub struct SlimPointerEvent {
    pub kind: PointerKind,
    pub screen: Vec2,
    pub target: TargetId,
    /// First contact point, for touch-originated events
    pub touch: Option<TouchPoint>,
}

/// Mouse/pointer input passes through with its kind.
pub fn normalize_pointer(event: &PointerEvent) -> SlimPointerEvent {
    SlimPointerEvent {
        kind: event.kind,
        screen: event.client,
        target: event.target,
        touch: None,
    }
}

/// Map touch input onto pointer kinds.
///
/// Start/move use the first contact, floored to whole pixels. End maps to an
/// up event at (0, 0): no contact exists at release, and the last known
/// position is deliberately not carried over. Start/move without any contact
/// are dropped.
pub fn normalize_touch(event: &TouchEvent) -> Option<SlimPointerEvent> {
    let kind = match event.phase {
        TouchPhase::Start => PointerKind::Down,
        TouchPhase::Move => PointerKind::Move,
        TouchPhase::End => {
            return Some(SlimPointerEvent {
                kind: PointerKind::Up,
                screen: Vec2::ZERO,
                target: event.target,
                touch: None,
            });
        }
    };

    let first = event.touches.first()?;
    Some(SlimPointerEvent {
        kind,
        screen: Vec2::new(first.client.x.floor(), first.client.y.floor()),
        target: event.target,
        touch: Some(*first),
    })
}
