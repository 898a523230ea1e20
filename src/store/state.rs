//! Application state definitions.

use std::time::Duration;

use crate::{
    config::{Config, DEFAULT_ACK_SECONDS},
    purchase::form::PurchaseForm,
    store::timer::DismissTimer,
    ui::colors::{Colors, Theme},
};

/// Complete application state for the terminal UI.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    pub true_color_enabled: bool,
    pub theme: Theme,
    pub colors: Colors,
    pub form: PurchaseForm,
    /// Blocking message shown in a popover until dismissed.
    pub error: Option<String>,
    /// Pending auto-dismiss of the "saved" acknowledgment. Active while the
    /// acknowledgment is visible.
    pub ack: DismissTimer,
    pub ack_duration: Duration,
}

impl Default for State {
    fn default() -> Self {
        Self {
            true_color_enabled: Default::default(),
            theme: Default::default(),
            colors: Default::default(),
            form: Default::default(),
            error: Default::default(),
            ack: Default::default(),
            ack_duration: Duration::from_secs(DEFAULT_ACK_SECONDS),
        }
    }
}

impl State {
    /// Builds the initial state for the given config and terminal color
    /// support.
    pub fn new(config: &Config, form: PurchaseForm, true_color_enabled: bool) -> Self {
        let theme = Theme::from_string(&config.theme);
        Self {
            true_color_enabled,
            theme,
            colors: Colors::new(theme.to_palette(true_color_enabled), true_color_enabled),
            form,
            error: None,
            ack: DismissTimer::default(),
            ack_duration: Duration::from_secs(config.ack_seconds),
        }
    }

    /// Whether the "saved" acknowledgment should be displayed.
    pub fn ack_visible(&self) -> bool {
        self.ack.is_active()
    }
}

#[cfg(test)]
#[path = "./state_tests.rs"]
mod tests;
