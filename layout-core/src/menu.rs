//! Collapsible navigation panel for mobile widths.

use tracing::debug;

use crate::dom::{Dom, DomError, EventKind};
use crate::{Command, Effect, Selector};

/// Added to whatever element `selectors.panel` matched; the slide rules key on it.
pub const PANEL_CLASS: &str = "responsive-panel";
pub const TOGGLE_CLASS: &str = "mobile-menu-toggle";
pub const TOGGLE_ARIA_LABEL: &str = "Toggle Menu";
pub const OVERLAY_CLASS: &str = "mobile-overlay";
pub const OVERLAY_ACTIVE_CLASS: &str = "active";
pub const PANEL_OPEN_CLASS: &str = "mobile-open";
pub const SCROLL_LOCK_CLASS: &str = "menu-open";
pub const ENTRANCE_CLASS: &str = "slide-in";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Everything that can move the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuInput {
    Toggle,
    Open,
    Close,
    /// Click outside panel and toggle while the viewport is mobile-class.
    OutsideClick,
    Escape,
    /// Viewport left the mobile bucket.
    LeftMobile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuTransition {
    Opened,
    Closed,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    /// Pure transition function; `None` means the input changes nothing.
    pub fn next(self, input: MenuInput) -> (MenuState, Option<MenuTransition>) {
        use MenuInput::*;
        match (self, input) {
            (MenuState::Closed, Toggle | Open) => (MenuState::Open, Some(MenuTransition::Opened)),
            (MenuState::Open, Toggle | Close | OutsideClick | Escape | LeftMobile) => {
                (MenuState::Closed, Some(MenuTransition::Closed))
            }
            (state, _) => (state, None),
        }
    }
}

/// DOM pieces owned by the menu. Exists only when the page has a panel.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuParts<N> {
    pub panel: N,
    pub toggle: N,
    pub overlay: Option<N>,
}

impl<N: Clone + PartialEq + std::fmt::Debug> MenuParts<N> {
    /// Inject the toggle button next to an existing panel. `Ok(None)` when the
    /// page has no panel.
    pub fn install<D: Dom<Node = N>>(
        dom: &mut D,
        panel_selector: &Selector,
        icon: &str,
        effects: &mut Vec<Effect<N>>,
    ) -> Result<Option<Self>, DomError> {
        let Some(panel) = dom.select(None, panel_selector) else {
            return Ok(None);
        };
        dom.add_class(&panel, PANEL_CLASS);
        let toggle = dom.create_element("button")?;
        dom.add_class(&toggle, TOGGLE_CLASS);
        dom.set_attribute(&toggle, "type", "button");
        dom.set_attribute(&toggle, "aria-label", TOGGLE_ARIA_LABEL);
        dom.set_label(&toggle, icon);
        let body = dom.body();
        dom.append_child(&body, &toggle);
        effects.push(Effect::Bind {
            target: toggle.clone(),
            event: EventKind::Click,
            command: Command::ToggleMenu,
        });
        Ok(Some(Self {
            panel,
            toggle,
            overlay: None,
        }))
    }

    /// True when `target` is neither inside the panel nor the toggle.
    pub fn is_outside<D: Dom<Node = N>>(&self, dom: &D, target: &N) -> bool {
        !dom.contains(&self.panel, target) && !dom.contains(&self.toggle, target)
    }

    pub fn render_open<D: Dom<Node = N>>(
        &mut self,
        dom: &mut D,
        nav_item: &Selector,
        stagger_ms: u32,
        effects: &mut Vec<Effect<N>>,
    ) {
        let body = dom.body();
        if self.overlay.is_none() {
            match dom.create_element("div") {
                Ok(overlay) => {
                    dom.add_class(&overlay, OVERLAY_CLASS);
                    dom.append_child(&body, &overlay);
                    effects.push(Effect::Bind {
                        target: overlay.clone(),
                        event: EventKind::Click,
                        command: Command::CloseMenu,
                    });
                    self.overlay = Some(overlay);
                }
                Err(err) => tracing::warn!(%err, "menu overlay unavailable"),
            }
        }
        dom.add_class(&self.panel, PANEL_OPEN_CLASS);
        if let Some(overlay) = &self.overlay {
            dom.add_class(overlay, OVERLAY_ACTIVE_CLASS);
        }
        dom.add_class(&body, SCROLL_LOCK_CLASS);

        let items = dom.select_all(Some(&self.panel), nav_item);
        for (index, item) in items.iter().enumerate() {
            let delay = format!("{}ms", entrance_delay_ms(index, stagger_ms));
            dom.set_style(item, "animation-delay", Some(&delay));
            dom.add_class(item, ENTRANCE_CLASS);
        }
        debug!(items = items.len(), "menu opened");
    }

    pub fn render_closed<D: Dom<Node = N>>(&self, dom: &mut D, nav_item: &Selector) {
        dom.remove_class(&self.panel, PANEL_OPEN_CLASS);
        if let Some(overlay) = &self.overlay {
            dom.remove_class(overlay, OVERLAY_ACTIVE_CLASS);
        }
        let body = dom.body();
        dom.remove_class(&body, SCROLL_LOCK_CLASS);
        for item in dom.select_all(Some(&self.panel), nav_item) {
            dom.remove_class(&item, ENTRANCE_CLASS);
            dom.set_style(&item, "animation-delay", None);
        }
        debug!("menu closed");
    }
}

/// Entrance animation delay of the `index`-th navigation item.
pub fn entrance_delay_ms(index: usize, stagger_ms: u32) -> u64 {
    index as u64 * u64::from(stagger_ms)
}
