use dioxus::prelude::*;

use crate::domain::services::{DismissBehavior, MobileNavState, NavTrigger};
use crate::shared::logging::log_mobile_nav_transition;

/// Mobile navigation visibility owned by the shell
#[derive(Clone, Copy, PartialEq)]
pub struct MobileNavigation {
    state: Signal<MobileNavState>,
    dismiss_behavior: DismissBehavior,
}

impl MobileNavigation {
    pub fn state(&self) -> MobileNavState {
        *self.state.read()
    }

    pub fn is_open(&self) -> bool {
        self.state().is_open()
    }

    /// Top bar toggle: always flips
    pub fn toggle(&mut self) {
        self.transition(NavTrigger::TopBarToggle);
    }

    /// Panel dismiss: follows the configured dismiss behavior
    pub fn dismiss(&mut self) {
        self.transition(NavTrigger::PanelDismiss);
    }

    /// Item selection inside the panel: dismisses only while open
    pub fn dismiss_if_open(&mut self) {
        if self.is_open() {
            self.dismiss();
        }
    }

    /// Forced close regardless of configuration
    pub fn close(&mut self) {
        let from = self.state();
        if from.is_open() {
            self.state.set(from.close());
            log_mobile_nav_transition("close", from, MobileNavState::Closed);
        }
    }

    fn transition(&mut self, trigger: NavTrigger) {
        let from = self.state();
        let to = from.apply(trigger, self.dismiss_behavior);
        self.state.set(to);
        log_mobile_nav_transition(trigger.as_str(), from, to);
    }
}

/// Hook to manage mobile navigation visibility, closed on mount
pub fn use_mobile_navigation(dismiss_behavior: DismissBehavior) -> MobileNavigation {
    let state = use_signal(MobileNavState::default);

    MobileNavigation {
        state,
        dismiss_behavior,
    }
}
