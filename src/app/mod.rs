mod launch;
mod types;

pub use launch::{LaunchSink, LogSink};
pub use types::StatusToast;

use std::time::Duration;
use tracing::{debug, info};

use crate::input::{self, Action, Dispatch, KeyInput, PointerTarget};
use crate::layout::{LoadedLayout, NetworkIndicator};
use crate::rail::{RailGeometry, RailState};
use crate::view::{self, Scene};

const TOAST_DURATION: Duration = Duration::from_secs(3);

/// Top-level controller: owns the one `RailState` and keeps the scene in sync with it
pub struct App {
    pub should_quit: bool,
    /// Set by the reload key; the event loop fetches the layout and calls `replace_layout`
    pub reload_requested: bool,
    pub status_toast: Option<StatusToast>,
    rail: RailState,
    indicators: Vec<NetworkIndicator>,
    geometry: RailGeometry,
    scene: Scene,
    launch_sink: Box<dyn LaunchSink>,
}

impl App {
    /// Creates the controller from a loaded layout
    pub fn new(
        layout: LoadedLayout,
        geometry: RailGeometry,
        viewport_width: f64,
        launch_sink: Box<dyn LaunchSink>,
    ) -> Self {
        let rail = RailState::new(layout.items, layout.initial_focus_index);
        let indicators = layout.network_indicators;
        let scene = view::project(&rail, &indicators, geometry, viewport_width);

        Self {
            should_quit: false,
            reload_requested: false,
            status_toast: None,
            rail,
            indicators,
            geometry,
            scene,
            launch_sink,
        }
    }

    #[cfg(test)]
    #[must_use]
    pub fn rail(&self) -> &RailState {
        &self.rail
    }

    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn handle_key(&mut self, key: KeyInput) -> bool {
        match key {
            KeyInput::Quit => {
                self.should_quit = true;
                true
            }
            KeyInput::Reload => {
                self.reload_requested = true;
                true
            }
            KeyInput::Action(action) => self.dispatch(action),
        }
    }

    /// Routes one action; returns whether it was handled
    pub fn dispatch(&mut self, action: Action) -> bool {
        let outcome = input::route(&mut self.rail, action);
        debug!(?action, handled = outcome.handled, "action routed");
        self.apply(outcome)
    }

    pub fn dispatch_pointer(&mut self, target: PointerTarget) -> bool {
        let outcome = input::route_pointer(&mut self.rail, target);
        debug!(?target, handled = outcome.handled, "pointer routed");
        self.apply(outcome)
    }

    fn apply(&mut self, outcome: Dispatch) -> bool {
        if let Some(signal) = &outcome.launch {
            self.launch_sink.launch(signal);
            let label = self
                .rail
                .items()
                .iter()
                .find(|item| item.id == signal.item_id)
                .map_or(signal.item_id.as_str(), |item| item.label.as_str());
            let message = format!("LAUNCHING {}", label.to_uppercase());
            self.show_status_toast(message);
        }
        if outcome.handled {
            self.rerender();
        }
        outcome.handled
    }

    fn rerender(&mut self) {
        self.scene = view::project(
            &self.rail,
            &self.indicators,
            self.geometry,
            self.scene.viewport_width,
        );
    }

    /// Swaps in a freshly loaded layout. Focus stays on the same index when it still
    /// exists and is clamped otherwise; an open panel stays open.
    pub fn replace_layout(&mut self, layout: LoadedLayout) {
        self.reload_requested = false;
        let count = layout.items.len();
        self.rail.replace_items(layout.items);
        self.indicators = layout.network_indicators;
        self.rerender();
        info!(items = count, "layout replaced");
        self.show_status_toast(format!("LAYOUT RELOADED ({count} APPS)"));
    }

    /// Viewport changed size; only the offset is recomputed
    pub fn resize(&mut self, viewport_width: f64) {
        self.scene.reposition(&self.rail, viewport_width);
    }

    pub fn show_status_toast(&mut self, message: impl Into<String>) {
        self.status_toast = Some(StatusToast::new(message));
    }

    pub fn clear_expired_status_toast(&mut self) {
        let should_clear = self
            .status_toast
            .as_ref()
            .is_some_and(|toast| toast.is_expired(TOAST_DURATION));
        if should_clear {
            self.status_toast = None;
        }
    }

    #[must_use]
    pub fn status_toast_message(&self) -> Option<&str> {
        self.status_toast.as_ref().map(|toast| toast.message.as_str())
    }
}
