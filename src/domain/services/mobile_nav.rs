//! Mobile navigation visibility state machine

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MobileNavState {
    #[default]
    Closed,
    Open,
}

impl MobileNavState {
    pub fn is_open(&self) -> bool {
        matches!(self, MobileNavState::Open)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MobileNavState::Closed => "closed",
            MobileNavState::Open => "open",
        }
    }

    /// Unconditional flip
    pub fn toggle(self) -> Self {
        match self {
            MobileNavState::Closed => MobileNavState::Open,
            MobileNavState::Open => MobileNavState::Closed,
        }
    }

    /// Forced close, idempotent
    pub fn close(self) -> Self {
        MobileNavState::Closed
    }

    pub fn apply(self, trigger: NavTrigger, dismiss: DismissBehavior) -> Self {
        match (trigger, dismiss) {
            (NavTrigger::TopBarToggle, _) => self.toggle(),
            (NavTrigger::PanelDismiss, DismissBehavior::Toggle) => self.toggle(),
            (NavTrigger::PanelDismiss, DismissBehavior::Close) => self.close(),
        }
    }
}

/// Where a visibility change came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTrigger {
    /// Navigation toggle button in the top bar
    TopBarToggle,
    /// Backdrop click or item selection inside the panel
    PanelDismiss,
}

impl NavTrigger {
    pub fn as_str(&self) -> &'static str {
        match self {
            NavTrigger::TopBarToggle => "top_bar_toggle",
            NavTrigger::PanelDismiss => "panel_dismiss",
        }
    }
}

/// What a panel dismiss does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DismissBehavior {
    /// Same flip as the top bar toggle. Dismissing a closed panel reopens it.
    #[default]
    Toggle,
    /// Always ends closed
    Close,
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATES: [MobileNavState; 2] = [MobileNavState::Closed, MobileNavState::Open];

    #[test]
    fn test_initial_state_is_closed() {
        assert_eq!(MobileNavState::default(), MobileNavState::Closed);
        assert!(!MobileNavState::default().is_open());
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        for state in STATES {
            assert_eq!(state.toggle().toggle(), state);
            assert_ne!(state.toggle(), state);
        }
    }

    #[test]
    fn test_toggle_sequence_from_closed() {
        let state = MobileNavState::default().toggle();
        assert_eq!(state, MobileNavState::Open);
        assert_eq!(state.toggle(), MobileNavState::Closed);
    }

    #[test]
    fn test_close_is_idempotent() {
        for state in STATES {
            assert_eq!(state.close(), MobileNavState::Closed);
            assert_eq!(state.close().close(), MobileNavState::Closed);
        }
    }

    #[test]
    fn test_both_triggers_flip_identically_with_toggle_dismiss() {
        for state in STATES {
            assert_eq!(
                state.apply(NavTrigger::TopBarToggle, DismissBehavior::Toggle),
                state.apply(NavTrigger::PanelDismiss, DismissBehavior::Toggle),
            );
        }
        // Shipped behavior: dismissing a closed panel reopens it
        assert_eq!(
            MobileNavState::Closed.apply(NavTrigger::PanelDismiss, DismissBehavior::Toggle),
            MobileNavState::Open
        );
    }

    #[test]
    fn test_close_dismiss_never_opens() {
        for state in STATES {
            assert_eq!(
                state.apply(NavTrigger::PanelDismiss, DismissBehavior::Close),
                MobileNavState::Closed
            );
        }
        // The top bar still toggles
        assert_eq!(
            MobileNavState::Closed.apply(NavTrigger::TopBarToggle, DismissBehavior::Close),
            MobileNavState::Open
        );
    }

    #[test]
    fn test_dismiss_behavior_serde() {
        let behavior: DismissBehavior = serde_json::from_str("\"close\"").unwrap();
        assert_eq!(behavior, DismissBehavior::Close);
        assert_eq!(serde_json::to_string(&DismissBehavior::Toggle).unwrap(), "\"toggle\"");
    }
}
