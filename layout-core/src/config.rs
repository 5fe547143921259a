use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::selector::Selector;
use crate::viewport::Breakpoints;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("mobile breakpoint {mobile_max}px must be below tablet breakpoint {tablet_max}px")]
    Breakpoints { mobile_max: u32, tablet_max: u32 },
    #[error("{0} must be greater than zero")]
    ZeroDelay(&'static str),
}

/// Where the controller looks for the page pieces it enhances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub panel: Selector,
    pub nav_item: Selector,
    pub interactive: Selector,
    pub animated: Selector,
    pub form: Selector,
    pub submit_control: Selector,
    pub table: Selector,
    pub header_cell: Selector,
    pub body_row: Selector,
    pub body_cell: Selector,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            panel: Selector::class("sidebar"),
            nav_item: Selector::class("nav-item"),
            interactive: Selector::any([
                Selector::tag("button"),
                Selector::class("btn"),
                Selector::class("nav-link"),
                Selector::class("card"),
            ]),
            animated: Selector::any([
                Selector::class("card"),
                Selector::class("stat-card"),
                Selector::class("alert"),
            ]),
            form: Selector::tag("form"),
            submit_control: Selector::any([
                Selector::tag_with_attr("button", "type", "submit"),
                Selector::tag_with_attr("input", "type", "submit"),
            ]),
            table: Selector::tag("table"),
            header_cell: Selector::within(&Selector::tag("thead"), &Selector::tag("th")),
            body_row: Selector::within(&Selector::tag("tbody"), &Selector::tag("tr")),
            body_cell: Selector::tag("td"),
        }
    }
}

/// Tunables of the responsive layer. One canonical set; pages override
/// individual fields through JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponsiveConfig {
    pub breakpoints: Breakpoints,
    /// Quiet period before a resize burst is acted on.
    pub resize_debounce_ms: u32,
    /// How long the pressed look lingers after touchend.
    pub press_feedback_ms: u32,
    /// Re-enable a submit control still disabled after this long.
    pub loading_fallback_ms: u32,
    /// Entrance animation offset between consecutive nav items.
    pub nav_stagger_ms: u32,
    pub selectors: Selectors,
    pub loading_label: String,
    pub toggle_icon: String,
    /// `tracing` filter directive for the browser console.
    pub log_level: String,
}

impl Default for ResponsiveConfig {
    fn default() -> Self {
        Self {
            breakpoints: Breakpoints::default(),
            resize_debounce_ms: 250,
            press_feedback_ms: 150,
            loading_fallback_ms: 5000,
            nav_stagger_ms: 100,
            selectors: Selectors::default(),
            loading_label: r#"<i class="fas fa-spinner fa-spin"></i> Loading..."#.to_string(),
            toggle_icon: r#"<i class="fas fa-bars"></i>"#.to_string(),
            log_level: "warn".to_string(),
        }
    }
}

impl ResponsiveConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: ResponsiveConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let Breakpoints {
            mobile_max,
            tablet_max,
        } = self.breakpoints;
        if mobile_max >= tablet_max {
            return Err(ConfigError::Breakpoints {
                mobile_max,
                tablet_max,
            });
        }
        for (name, value) in [
            ("resize_debounce_ms", self.resize_debounce_ms),
            ("press_feedback_ms", self.press_feedback_ms),
            ("loading_fallback_ms", self.loading_fallback_ms),
        ] {
            if value == 0 {
                return Err(ConfigError::ZeroDelay(name));
            }
        }
        Ok(())
    }
}
