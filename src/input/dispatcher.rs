//! The mode dispatcher.
//!
//! `InteractionManager` owns the mode registry and the listener lifecycle.
//! Every pointer event follows the same sequence:
//!
//! ```text
//! surface set?  -> mode registered?  -> handler for this event kind?
//!   -> recompute mouse state (screen + tile, press, delta)
//!   -> mode changed since the last dispatch?  exit(previous), entry(current)
//!   -> handler
//!   -> remember the mode seen at the start of this dispatch
//! ```
//!
//! A missing prerequisite at any of the first three steps drops the event
//! without touching state. Handlers see the mouse state for this event, and
//! transitions requested by a handler take effect (exit/entry) on the next
//! dispatch.

use crate::error::Result;
use crate::input::context_menu::resolve_context_menu;
use crate::input::coords::{CoordinateContext, next_mouse};
use crate::input::event::{
    InputEvent, PointerKind, SlimPointerEvent, TargetId, TouchPhase, normalize_pointer, normalize_touch,
};
use crate::input::shortcuts::handle_key_down;
use crate::input::surface::{EventSource, ListenerKind, ListenerSet, Surface, surface_source};
use crate::input::zoom::handle_wheel;
use crate::modes::{ModeRegistry, State};
use crate::perf::ScopedTimer;
use crate::profile_scope;
use crate::scene::Scene;
use crate::settings::InteractionSettings;
use crate::types::Size;
use crate::ui_state::{ModeKind, UiState};
use std::rc::Rc;
use tracing::{debug, trace};

/// What the current listener registrations were made for. Registrations are
/// refreshed whenever this changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct ListenerKey {
    mode: ModeKind,
    surface: Option<TargetId>,
}

/// Routes platform input to the active mode.
pub struct InteractionManager {
    registry: ModeRegistry,
    settings: InteractionSettings,
    surface: Option<Rc<dyn Surface>>,
    /// Mode seen at the start of the last completed dispatch
    previous_mode: Option<ModeKind>,
    renderer_size: Size,
    window: Option<Rc<dyn EventSource>>,
    listeners: Option<ListenerSet>,
    listener_key: Option<ListenerKey>,
}

impl InteractionManager {
    pub fn new(settings: InteractionSettings) -> Self {
        Self::with_registry(settings, ModeRegistry::builtin())
    }

    /// Use a custom set of modes in place of the built-in ones.
    pub fn with_registry(settings: InteractionSettings, registry: ModeRegistry) -> Self {
        Self {
            registry,
            settings,
            surface: None,
            previous_mode: None,
            renderer_size: Size::default(),
            window: None,
            listeners: None,
            listener_key: None,
        }
    }

    pub fn settings(&self) -> &InteractionSettings {
        &self.settings
    }

    pub fn registry(&self) -> &ModeRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut ModeRegistry {
        &mut self.registry
    }

    pub fn previous_mode(&self) -> Option<ModeKind> {
        self.previous_mode
    }

    pub fn surface(&self) -> Option<&Rc<dyn Surface>> {
        self.surface.as_ref()
    }

    /// Designate the interactive surface. Pointer events are measured
    /// against its bounds and the wheel listener is re-attached to it.
    pub fn set_interactions_element(&mut self, surface: Rc<dyn Surface>) {
        debug!(surface = surface.id(), "Interactions element set");
        self.surface = Some(surface);
        if let Some(key) = self.listener_key {
            self.register(key.mode);
        }
    }

    pub fn clear_interactions_element(&mut self) {
        self.surface = None;
        if let Some(key) = self.listener_key {
            self.register(key.mode);
        }
    }

    pub fn renderer_size(&self) -> Size {
        self.renderer_size
    }

    /// Record the surface size observed by the host's resize tracking.
    pub fn set_renderer_size(&mut self, size: Size) {
        self.renderer_size = size;
    }

    // ========================================================================
    // Listener lifecycle
    // ========================================================================

    /// Start a session on `window`. Nothing is registered while the mode is
    /// `InteractionsDisabled`.
    pub fn attach(&mut self, window: Rc<dyn EventSource>, ui: &UiState) {
        self.detach();
        self.window = Some(window);
        self.refresh_listeners(ui);
    }

    /// Release every registration and forget the window.
    pub fn detach(&mut self) {
        self.listeners = None;
        self.listener_key = None;
        self.window = None;
    }

    pub fn is_listening(&self, kind: ListenerKind) -> bool {
        self.listeners.as_ref().is_some_and(|set| set.contains(kind))
    }

    /// Re-register if the mode or surface changed since the last registration.
    pub fn refresh_listeners(&mut self, ui: &UiState) {
        if self.window.is_none() {
            return;
        }
        let mode = ui.mode().kind();
        let key = ListenerKey {
            mode,
            surface: self.surface.as_ref().map(|s| s.id()),
        };
        if self.listener_key == Some(key) {
            return;
        }
        self.register(mode);
    }

    fn register(&mut self, mode: ModeKind) {
        // Old registrations go first so a listener is never attached twice.
        self.listeners = None;
        self.listener_key = None;
        let Some(window) = self.window.clone() else {
            return;
        };

        let surface = self.surface.as_ref().map(|s| s.id());
        self.listener_key = Some(ListenerKey { mode, surface });
        if mode == ModeKind::InteractionsDisabled {
            debug!("Interactions disabled, no listeners attached");
            return;
        }

        let mut set = ListenerSet::new();
        for kind in ListenerKind::WINDOW {
            set.listen(&window, kind);
        }
        if let Some(surface) = &self.surface {
            set.listen(&surface_source(surface), ListenerKind::Wheel);
        }
        debug!(mode = %mode, count = set.len(), "Listeners attached");
        self.listeners = Some(set);
    }

    // ========================================================================
    // Event routing
    // ========================================================================

    /// Route one platform event. Events without a matching registration are
    /// dropped. Registrations are brought up to date before routing, since the
    /// host may have changed the mode in between, and again afterwards, on
    /// the error path too.
    pub fn handle(&mut self, event: &mut InputEvent, scene: &mut Scene, ui: &mut UiState) -> Result<()> {
        self.refresh_listeners(ui);
        if ui.mode().is_disabled() {
            trace!("Interactions disabled, event dropped");
            return Ok(());
        }
        let result = self.route(event, scene, ui);
        self.refresh_listeners(ui);
        result
    }

    fn route(&mut self, event: &mut InputEvent, scene: &mut Scene, ui: &mut UiState) -> Result<()> {
        match event {
            InputEvent::Pointer(pointer) => {
                let kind = match pointer.kind {
                    PointerKind::Move => ListenerKind::PointerMove,
                    PointerKind::Down => ListenerKind::PointerDown,
                    PointerKind::Up => ListenerKind::PointerUp,
                };
                if !self.is_listening(kind) {
                    return Ok(());
                }
                self.dispatch(&normalize_pointer(pointer), scene, ui)
            }
            InputEvent::Touch(touch) => {
                let kind = match touch.phase {
                    TouchPhase::Start => ListenerKind::TouchStart,
                    TouchPhase::Move => ListenerKind::TouchMove,
                    TouchPhase::End => ListenerKind::TouchEnd,
                };
                if !self.is_listening(kind) {
                    return Ok(());
                }
                match normalize_touch(touch) {
                    Some(slim) => self.dispatch(&slim, scene, ui),
                    None => Ok(()),
                }
            }
            InputEvent::Wheel(wheel) => {
                if self.is_listening(ListenerKind::Wheel) {
                    handle_wheel(wheel, ui);
                }
                Ok(())
            }
            InputEvent::Key(key) => {
                if self.is_listening(ListenerKind::KeyDown) {
                    handle_key_down(key, scene, ui);
                }
                Ok(())
            }
            InputEvent::ContextMenu(menu) => {
                if self.is_listening(ListenerKind::ContextMenu) {
                    resolve_context_menu(menu, scene, ui);
                }
                Ok(())
            }
        }
    }

    /// Run one normalized pointer event through the active mode.
    ///
    /// Handler errors propagate unchanged. The previous mode is only
    /// recorded once the handler succeeds, so a failed transition is retried
    /// on the next event.
    pub fn dispatch(&mut self, event: &SlimPointerEvent, scene: &mut Scene, ui: &mut UiState) -> Result<()> {
        let _timer = ScopedTimer::new("dispatch", self.settings.slow_dispatch_ms);
        profile_scope!("dispatch_pointer");

        let Some(surface) = self.surface.clone() else {
            trace!(event = event.kind.as_str(), "No interactions element, event dropped");
            return Ok(());
        };
        let mode = ui.mode().kind();
        let Some(actions) = self.registry.get(mode).copied() else {
            trace!(%mode, "Mode not registered, event dropped");
            return Ok(());
        };
        let Some(handler) = actions.handler(event.kind) else {
            trace!(%mode, event = event.kind.as_str(), "Mode has no handler, event dropped");
            return Ok(());
        };

        let ctx = CoordinateContext::new(
            surface.bounds().origin,
            ui.zoom(),
            ui.scroll(),
            self.settings.tile_size,
        );
        let mouse = next_mouse(ui.mouse(), event, &ctx);
        ui.set_mouse(mouse);

        let previous = self.previous_mode;
        let exit = previous
            .filter(|prev| *prev != mode)
            .and_then(|prev| self.registry.get(prev))
            .and_then(|prev| prev.exit);

        let mut state = State {
            scene,
            ui,
            surface: &*surface,
            renderer_size: self.renderer_size,
            is_renderer_interaction: event.target == surface.id(),
            settings: &self.settings,
        };

        if previous != Some(mode) {
            debug!(from = ?previous, to = %mode, "Mode transition");
            if let Some(exit) = exit {
                exit(&mut state)?;
            }
            if let Some(entry) = actions.entry {
                entry(&mut state)?;
            }
        }
        handler(&mut state)?;

        self.previous_mode = Some(mode);
        Ok(())
    }
}

impl std::fmt::Debug for InteractionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InteractionManager")
            .field("previous_mode", &self.previous_mode)
            .field("renderer_size", &self.renderer_size)
            .field("listeners", &self.listeners)
            .finish_non_exhaustive()
    }
}
