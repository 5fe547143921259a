//! Command dispatch for the whole responsive layer.
//!
//! The host turns browser events into [`Command`]s and executes the
//! [`Effect`]s that come back: timers, listener bindings and visibility
//! observation. All state lives in [`ResponsiveController`]; the DOM is only
//! touched through the injected [`Dom`].

use tracing::{debug, trace, warn};

use crate::config::ResponsiveConfig;
use crate::debounce::Debounce;
use crate::dom::{Dom, EventKind};
use crate::menu::{MenuInput, MenuParts, MenuState, MenuTransition};
use crate::stylesheet::{STYLESHEET, STYLESHEET_ID};
use crate::table::{self, TableBinding, TableRegistry};
use crate::touch::{self, TouchCapability, PRESSED_CLASS};
use crate::viewport::{self, ViewportClass};
use crate::{form, Selector};

/// Class added to observed elements once they scroll into view.
pub const REVEALED_CLASS: &str = "animate-in";
/// Hides an element until [`REVEALED_CLASS`] arrives. Only set on elements
/// that are actually observed.
pub const REVEAL_PENDING_CLASS: &str = "reveal-pending";

#[derive(Debug, Clone, PartialEq)]
pub enum Command<N> {
    /// Page is ready: install everything once.
    Init,
    /// Raw resize event; debounced before anything happens.
    ResizeObserved,
    ResizeSettled { generation: u64 },
    ToggleMenu,
    OpenMenu,
    CloseMenu,
    DocumentClick { target: N },
    KeyDown { key: String },
    Press { target: N },
    Release { target: N },
    PressExpired { target: N },
    FormSubmitted { form: N },
    ShowLoading { control: N },
    LoadingFallback { control: N, original_label: String },
    AdaptTables,
    RebindTable { table: N },
    BecameVisible { target: N },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect<N> {
    /// Dispatch `command` after `delay_ms`.
    Schedule { delay_ms: u32, command: Command<N> },
    /// Dispatch `command` whenever `event` fires on `target`.
    Bind {
        target: N,
        event: EventKind,
        command: Command<N>,
    },
    /// Dispatch `BecameVisible` when `target` first intersects the viewport.
    Observe { target: N },
}

pub struct ResponsiveController<D: Dom> {
    dom: D,
    config: ResponsiveConfig,
    initialized: bool,
    viewport: Option<ViewportClass>,
    menu: MenuState,
    menu_parts: Option<MenuParts<D::Node>>,
    touch: Option<TouchCapability>,
    resize: Debounce,
    tables: TableRegistry<D::Node>,
}

impl<D: Dom> ResponsiveController<D> {
    pub fn new(dom: D, config: ResponsiveConfig) -> Self {
        Self {
            dom,
            config,
            initialized: false,
            viewport: None,
            menu: MenuState::Closed,
            menu_parts: None,
            touch: None,
            resize: Debounce::default(),
            tables: TableRegistry::default(),
        }
    }

    pub fn dom(&self) -> &D {
        &self.dom
    }

    pub fn dom_mut(&mut self) -> &mut D {
        &mut self.dom
    }

    pub fn config(&self) -> &ResponsiveConfig {
        &self.config
    }

    pub fn menu_state(&self) -> MenuState {
        self.menu
    }

    pub fn viewport_class(&self) -> Option<ViewportClass> {
        self.viewport
    }

    pub fn menu_toggle(&self) -> Option<&D::Node> {
        self.menu_parts.as_ref().map(|p| &p.toggle)
    }

    pub fn menu_overlay(&self) -> Option<&D::Node> {
        self.menu_parts.as_ref().and_then(|p| p.overlay.as_ref())
    }

    pub fn table_binding(&self, table: &D::Node) -> Option<&TableBinding> {
        self.tables.binding(table)
    }

    /// Touch capability, detected once and then fixed.
    pub fn is_touch_device(&mut self) -> bool {
        self.touch_capability().is_touch()
    }

    fn touch_capability(&mut self) -> TouchCapability {
        match self.touch {
            Some(capability) => capability,
            None => {
                let capability = TouchCapability::detect(self.dom.touch_signals());
                self.touch = Some(capability);
                capability
            }
        }
    }

    pub fn dispatch(&mut self, command: Command<D::Node>) -> Vec<Effect<D::Node>> {
        trace!(?command, "dispatch");
        let mut effects = Vec::new();
        match command {
            Command::Init => self.init(&mut effects),
            Command::ResizeObserved => {
                let generation = self.resize.restart();
                effects.push(Effect::Schedule {
                    delay_ms: self.config.resize_debounce_ms,
                    command: Command::ResizeSettled { generation },
                });
            }
            Command::ResizeSettled { generation } => {
                if self.resize.settle(generation) {
                    self.on_resize(&mut effects);
                }
            }
            Command::ToggleMenu => self.drive_menu(MenuInput::Toggle, &mut effects),
            Command::OpenMenu => self.drive_menu(MenuInput::Open, &mut effects),
            Command::CloseMenu => self.drive_menu(MenuInput::Close, &mut effects),
            Command::DocumentClick { target } => {
                let outside = self
                    .menu_parts
                    .as_ref()
                    .is_some_and(|parts| parts.is_outside(&self.dom, &target));
                if outside && self.menu.is_open() && self.current_class().is_mobile() {
                    self.drive_menu(MenuInput::OutsideClick, &mut effects);
                }
            }
            Command::KeyDown { key } => {
                if key == "Escape" {
                    self.drive_menu(MenuInput::Escape, &mut effects);
                }
            }
            Command::Press { target } => self.dom.add_class(&target, PRESSED_CLASS),
            Command::Release { target } => effects.push(Effect::Schedule {
                delay_ms: self.config.press_feedback_ms,
                command: Command::PressExpired { target },
            }),
            Command::PressExpired { target } => self.dom.remove_class(&target, PRESSED_CLASS),
            Command::FormSubmitted { form } => {
                let control = self
                    .dom
                    .select(Some(&form), &self.config.selectors.submit_control);
                if let Some(control) = control {
                    self.show_loading(control, &mut effects);
                }
            }
            Command::ShowLoading { control } => self.show_loading(control, &mut effects),
            Command::LoadingFallback {
                control,
                original_label,
            } => {
                form::restore_if_stuck(&mut self.dom, &control, &original_label);
            }
            Command::AdaptTables => self.adapt_tables(),
            Command::RebindTable { table } => {
                let class = self.current_class();
                table::rebind_table(
                    &mut self.dom,
                    &self.config.selectors,
                    &mut self.tables,
                    &table,
                    class,
                );
            }
            Command::BecameVisible { target } => self.dom.add_class(&target, REVEALED_CLASS),
        }
        effects
    }

    fn init(&mut self, effects: &mut Vec<Effect<D::Node>>) {
        if self.initialized {
            return;
        }
        self.initialized = true;

        self.install_stylesheet();
        let class = self.classify();

        match MenuParts::install(
            &mut self.dom,
            &self.config.selectors.panel,
            &self.config.toggle_icon,
            effects,
        ) {
            Ok(parts) => self.menu_parts = parts,
            Err(err) => warn!(%err, "mobile menu toggle unavailable"),
        }

        self.adapt_tables();

        let capability = self.touch_capability();
        let pressable = touch::enhance(
            &mut self.dom,
            capability,
            &self.config.selectors.interactive,
            effects,
        );

        let forms = self.dom.select_all(None, &self.config.selectors.form);
        for form in &forms {
            effects.push(Effect::Bind {
                target: form.clone(),
                event: EventKind::Submit,
                command: Command::FormSubmitted { form: form.clone() },
            });
        }

        for target in self.dom.select_all(None, &self.config.selectors.animated) {
            self.dom.add_class(&target, REVEAL_PENDING_CLASS);
            effects.push(Effect::Observe { target });
        }

        debug!(
            ?class,
            menu = self.menu_parts.is_some(),
            touch = capability.is_touch(),
            pressable,
            forms = forms.len(),
            "responsive layer initialized"
        );
    }

    fn install_stylesheet(&mut self) {
        if self
            .dom
            .select(None, &Selector::id(STYLESHEET_ID))
            .is_some()
        {
            return;
        }
        match self.dom.create_element("style") {
            Ok(style) => {
                self.dom.set_attribute(&style, "id", STYLESHEET_ID);
                self.dom.set_text(&style, STYLESHEET);
                let head = self.dom.head();
                self.dom.append_child(&head, &style);
            }
            Err(err) => warn!(%err, "responsive stylesheet not installed"),
        }
    }

    fn current_class(&self) -> ViewportClass {
        self.config
            .breakpoints
            .classify(self.dom.viewport_width())
    }

    fn classify(&mut self) -> ViewportClass {
        let class = self.current_class();
        viewport::apply_marker(&mut self.dom, class);
        if self.viewport != Some(class) {
            debug!(from = ?self.viewport, to = ?class, "viewport class changed");
        }
        self.viewport = Some(class);
        class
    }

    fn on_resize(&mut self, effects: &mut Vec<Effect<D::Node>>) {
        let class = self.classify();
        if !class.is_mobile() {
            self.drive_menu(MenuInput::LeftMobile, effects);
        }
        self.adapt_tables();
    }

    fn adapt_tables(&mut self) {
        let class = self.current_class();
        table::adapt_tables(&mut self.dom, &self.config.selectors, &mut self.tables, class);
    }

    fn drive_menu(&mut self, input: MenuInput, effects: &mut Vec<Effect<D::Node>>) {
        let Some(parts) = self.menu_parts.as_mut() else {
            return;
        };
        let (next, transition) = self.menu.next(input);
        self.menu = next;
        match transition {
            Some(MenuTransition::Opened) => parts.render_open(
                &mut self.dom,
                &self.config.selectors.nav_item,
                self.config.nav_stagger_ms,
                effects,
            ),
            Some(MenuTransition::Closed) => {
                parts.render_closed(&mut self.dom, &self.config.selectors.nav_item)
            }
            None => {}
        }
    }

    fn show_loading(&mut self, control: D::Node, effects: &mut Vec<Effect<D::Node>>) {
        if let Some(original_label) =
            form::show_loading(&mut self.dom, &control, &self.config.loading_label)
        {
            effects.push(Effect::Schedule {
                delay_ms: self.config.loading_fallback_ms,
                command: Command::LoadingFallback {
                    control,
                    original_label,
                },
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{MemoryDom, NodeId};
    use crate::menu::{
        ENTRANCE_CLASS, OVERLAY_ACTIVE_CLASS, PANEL_CLASS, PANEL_OPEN_CLASS, SCROLL_LOCK_CLASS,
        TOGGLE_CLASS,
    };
    use crate::table::LABEL_ATTR;
    use crate::touch::{TouchSignals, TOUCH_DEVICE_CLASS};

    struct Page {
        panel: NodeId,
        items: Vec<NodeId>,
        link: NodeId,
        content: NodeId,
        table: NodeId,
        form: NodeId,
        submit: NodeId,
        card: NodeId,
    }

    fn page(width: u32) -> (MemoryDom, Page) {
        let mut dom = MemoryDom::new(width);
        let body = dom.body();
        let panel = dom.add(&body, "nav", &["sidebar"]);
        let list = dom.add(&panel, "ul", &[]);
        let items: Vec<_> = (0..3).map(|_| dom.add(&list, "li", &["nav-item"])).collect();
        let link = dom.add(&items[0], "a", &["nav-link"]);
        let content = dom.add(&body, "main", &["main-content"]);
        let card = dom.add(&content, "div", &["card"]);
        let table = dom.add(&content, "table", &[]);
        let thead = dom.add(&table, "thead", &[]);
        let hr = dom.add(&thead, "tr", &[]);
        dom.add_text(&hr, "th", "Name");
        dom.add_text(&hr, "th", "Role");
        let tbody = dom.add(&table, "tbody", &[]);
        let tr = dom.add(&tbody, "tr", &[]);
        dom.add_text(&tr, "td", "Aysel");
        dom.add_text(&tr, "td", "Engineer");
        let form = dom.add(&content, "form", &[]);
        let submit = dom.add_text(&form, "button", "Save");
        dom.set_attribute(&submit, "type", "submit");
        (
            dom,
            Page {
                panel,
                items,
                link,
                content,
                table,
                form,
                submit,
                card,
            },
        )
    }

    fn controller(width: u32) -> (ResponsiveController<MemoryDom>, Page, Vec<Effect<NodeId>>) {
        let (dom, page) = page(width);
        let mut ctl = ResponsiveController::new(dom, ResponsiveConfig::default());
        let effects = ctl.dispatch(Command::Init);
        (ctl, page, effects)
    }

    /// Resize and let the debounce settle.
    fn resize_to(ctl: &mut ResponsiveController<MemoryDom>, width: u32) {
        ctl.dom_mut().set_viewport_width(width);
        let effects = ctl.dispatch(Command::ResizeObserved);
        for effect in effects {
            if let Effect::Schedule { command, .. } = effect {
                ctl.dispatch(command);
            }
        }
    }

    fn overlay_visible(ctl: &ResponsiveController<MemoryDom>) -> bool {
        ctl.menu_overlay()
            .is_some_and(|o| ctl.dom().has_class(o, OVERLAY_ACTIVE_CLASS))
    }

    #[test]
    fn init_installs_toggle_stylesheet_and_bindings() {
        let (ctl, page, effects) = controller(375);
        let dom = ctl.dom();
        let body = dom.body();
        assert!(dom.has_class(&body, "mobile"));
        assert_eq!(ctl.viewport_class(), Some(ViewportClass::Mobile));

        let toggle = *ctl.menu_toggle().unwrap();
        assert!(dom.has_class(&toggle, TOGGLE_CLASS));
        assert_eq!(dom.attribute(&toggle, "aria-label").as_deref(), Some("Toggle Menu"));
        assert_eq!(dom.parent(&toggle), Some(body));
        assert!(effects.contains(&Effect::Bind {
            target: toggle,
            event: EventKind::Click,
            command: Command::ToggleMenu,
        }));
        assert!(effects.contains(&Effect::Bind {
            target: page.form,
            event: EventKind::Submit,
            command: Command::FormSubmitted { form: page.form },
        }));
        assert!(effects.contains(&Effect::Observe { target: page.card }));
        assert!(dom.has_class(&page.card, REVEAL_PENDING_CLASS));
        assert!(dom.has_class(&page.panel, PANEL_CLASS));

        let styles = dom.select_all(None, &Selector::id(STYLESHEET_ID));
        assert_eq!(styles.len(), 1);
        assert_eq!(dom.parent(&styles[0]), Some(dom.head()));
        assert!(dom.text(&styles[0]).contains("table-responsive"));
    }

    #[test]
    fn second_init_is_a_noop() {
        let (mut ctl, _page, _) = controller(375);
        let effects = ctl.dispatch(Command::Init);
        assert!(effects.is_empty());
        let toggles = ctl
            .dom()
            .select_all(None, &Selector::class(TOGGLE_CLASS));
        assert_eq!(toggles.len(), 1);
    }

    #[test]
    fn page_without_panel_has_no_menu() {
        let mut dom = MemoryDom::new(375);
        let body = dom.body();
        dom.add(&body, "main", &[]);
        let mut ctl = ResponsiveController::new(dom, ResponsiveConfig::default());
        ctl.dispatch(Command::Init);
        assert!(ctl.menu_toggle().is_none());
        assert!(ctl.dispatch(Command::ToggleMenu).is_empty());
        assert_eq!(ctl.menu_state(), MenuState::Closed);
        assert!(ctl
            .dom()
            .select_all(None, &Selector::class(TOGGLE_CLASS))
            .is_empty());
    }

    #[test]
    fn open_applies_all_side_effects_once() {
        let (mut ctl, page, _) = controller(375);
        let effects = ctl.dispatch(Command::OpenMenu);
        assert_eq!(ctl.menu_state(), MenuState::Open);
        let overlay = *ctl.menu_overlay().unwrap();
        assert_eq!(
            effects,
            vec![Effect::Bind {
                target: overlay,
                event: EventKind::Click,
                command: Command::CloseMenu,
            }]
        );

        let again = ctl.dispatch(Command::OpenMenu);
        assert!(again.is_empty());
        assert_eq!(ctl.menu_state(), MenuState::Open);
        let overlays = ctl
            .dom()
            .select_all(None, &Selector::class(crate::menu::OVERLAY_CLASS));
        assert_eq!(overlays.len(), 1);

        let dom = ctl.dom();
        assert!(dom.has_class(&page.panel, PANEL_OPEN_CLASS));
        assert!(dom.has_class(&dom.body(), SCROLL_LOCK_CLASS));
        assert!(overlay_visible(&ctl));
        for (i, item) in page.items.iter().enumerate() {
            assert!(dom.has_class(item, ENTRANCE_CLASS));
            let delay = format!("{}ms", i * 100);
            assert_eq!(dom.style(item, "animation-delay"), Some(delay.as_str()));
        }
    }

    #[test]
    fn close_reverses_open_and_is_idempotent() {
        let (mut ctl, page, _) = controller(375);
        assert!(ctl.dispatch(Command::CloseMenu).is_empty());
        assert_eq!(ctl.menu_state(), MenuState::Closed);

        ctl.dispatch(Command::ToggleMenu);
        ctl.dispatch(Command::ToggleMenu);
        assert_eq!(ctl.menu_state(), MenuState::Closed);
        let dom = ctl.dom();
        assert!(!dom.has_class(&page.panel, PANEL_OPEN_CLASS));
        assert!(!dom.has_class(&dom.body(), SCROLL_LOCK_CLASS));
        assert!(!overlay_visible(&ctl));
        for item in &page.items {
            assert!(!dom.has_class(item, ENTRANCE_CLASS));
            assert_eq!(dom.style(item, "animation-delay"), None);
        }
    }

    #[test]
    fn outside_click_and_escape_close() {
        let (mut ctl, page, _) = controller(375);
        ctl.dispatch(Command::OpenMenu);
        ctl.dispatch(Command::DocumentClick { target: page.link });
        assert_eq!(ctl.menu_state(), MenuState::Open);
        let toggle = *ctl.menu_toggle().unwrap();
        ctl.dispatch(Command::DocumentClick { target: toggle });
        assert_eq!(ctl.menu_state(), MenuState::Open);
        ctl.dispatch(Command::DocumentClick {
            target: page.content,
        });
        assert_eq!(ctl.menu_state(), MenuState::Closed);

        ctl.dispatch(Command::OpenMenu);
        ctl.dispatch(Command::KeyDown { key: "Enter".into() });
        assert_eq!(ctl.menu_state(), MenuState::Open);
        ctl.dispatch(Command::KeyDown {
            key: "Escape".into(),
        });
        assert_eq!(ctl.menu_state(), MenuState::Closed);
    }

    #[test]
    fn outside_click_ignored_off_mobile() {
        let (mut ctl, page, _) = controller(375);
        ctl.dispatch(Command::OpenMenu);
        // Width changed but the debounced pass has not run yet.
        ctl.dom_mut().set_viewport_width(900);
        ctl.dispatch(Command::DocumentClick {
            target: page.content,
        });
        assert_eq!(ctl.menu_state(), MenuState::Open);
    }

    #[test]
    fn leaving_mobile_forces_close() {
        let (mut ctl, page, _) = controller(375);
        ctl.dispatch(Command::OpenMenu);
        assert!(overlay_visible(&ctl));
        resize_to(&mut ctl, 769);
        assert_eq!(ctl.menu_state(), MenuState::Closed);
        assert!(!overlay_visible(&ctl));
        assert!(!ctl.dom().has_class(&page.panel, PANEL_OPEN_CLASS));
        let body = ctl.dom().body();
        assert!(ctl.dom().has_class(&body, "tablet"));
        assert!(!ctl.dom().has_class(&body, "mobile"));
    }

    #[test]
    fn staying_mobile_keeps_menu_open() {
        let (mut ctl, _page, _) = controller(375);
        ctl.dispatch(Command::OpenMenu);
        resize_to(&mut ctl, 700);
        assert_eq!(ctl.menu_state(), MenuState::Open);
    }

    #[test]
    fn resize_burst_coalesces() {
        let (mut ctl, _page, _) = controller(1280);
        let body = ctl.dom().body();
        let mut scheduled = Vec::new();
        for width in [1000, 800, 500] {
            ctl.dom_mut().set_viewport_width(width);
            scheduled.extend(ctl.dispatch(Command::ResizeObserved));
        }
        assert_eq!(scheduled.len(), 3);
        assert!(scheduled.iter().all(|e| matches!(
            e,
            Effect::Schedule { delay_ms: 250, .. }
        )));
        // Stale timers fire first and do nothing.
        for effect in scheduled.iter().take(2) {
            if let Effect::Schedule { command, .. } = effect {
                ctl.dispatch(command.clone());
            }
        }
        assert!(ctl.dom().has_class(&body, "desktop"));
        if let Some(Effect::Schedule { command, .. }) = scheduled.last() {
            ctl.dispatch(command.clone());
        }
        assert!(ctl.dom().has_class(&body, "mobile"));
        assert!(!ctl.dom().has_class(&body, "desktop"));
    }

    #[test]
    fn tables_follow_resize() {
        let (mut ctl, page, _) = controller(1280);
        let cells = ctl.dom().select_all(Some(&page.table), &Selector::tag("td"));
        assert!(ctl.dom().attribute(&cells[0], LABEL_ATTR).is_none());
        resize_to(&mut ctl, 600);
        assert_eq!(
            ctl.dom().attribute(&cells[0], LABEL_ATTR).as_deref(),
            Some("Name")
        );
        assert_eq!(
            ctl.dom().attribute(&cells[1], LABEL_ATTR).as_deref(),
            Some("Role")
        );
        let wrappers = ctl
            .dom()
            .select_all(None, &Selector::class(table::WRAPPER_CLASS));
        assert_eq!(wrappers.len(), 1);
        assert_eq!(
            ctl.table_binding(&page.table).map(|b| b.labels().to_vec()),
            Some(vec!["Name".to_string(), "Role".to_string()])
        );
    }

    #[test]
    fn submit_fallback_restores_control() {
        let (mut ctl, page, _) = controller(1280);
        let effects = ctl.dispatch(Command::FormSubmitted { form: page.form });
        assert!(ctl.dom().is_disabled(&page.submit));
        assert!(ctl.dom().label(&page.submit).contains("Loading..."));
        assert_eq!(
            effects,
            vec![Effect::Schedule {
                delay_ms: 5000,
                command: Command::LoadingFallback {
                    control: page.submit,
                    original_label: "Save".into(),
                },
            }]
        );
        for effect in effects {
            if let Effect::Schedule { command, .. } = effect {
                ctl.dispatch(command);
            }
        }
        assert!(!ctl.dom().is_disabled(&page.submit));
        assert_eq!(ctl.dom().label(&page.submit), "Save");
    }

    #[test]
    fn fallback_leaves_already_restored_control_alone() {
        let (mut ctl, page, _) = controller(1280);
        let effects = ctl.dispatch(Command::ShowLoading {
            control: page.submit,
        });
        ctl.dom_mut().set_disabled(&page.submit, false);
        ctl.dom_mut().set_label(&page.submit, "Saved");
        for effect in effects {
            if let Effect::Schedule { command, .. } = effect {
                ctl.dispatch(command);
            }
        }
        assert_eq!(ctl.dom().label(&page.submit), "Saved");
    }

    #[test]
    fn form_without_submit_control_is_ignored() {
        let (mut ctl, _page, _) = controller(1280);
        let body = ctl.dom().body();
        let bare = ctl.dom_mut().add(&body, "form", &[]);
        assert!(ctl.dispatch(Command::FormSubmitted { form: bare }).is_empty());
    }

    #[test]
    fn no_touch_means_no_press_bindings() {
        let (ctl, _page, effects) = controller(375);
        assert!(!effects.iter().any(|e| matches!(
            e,
            Effect::Bind {
                event: EventKind::TouchStart | EventKind::TouchEnd | EventKind::TouchCancel,
                ..
            }
        )));
        assert!(!ctl.dom().has_class(&ctl.dom().body(), TOUCH_DEVICE_CLASS));
    }

    #[test]
    fn touch_press_feedback_expires_independently() {
        let (dom, page) = page(375);
        let dom = dom.with_touch(TouchSignals {
            has_touch_start: true,
            max_touch_points: 5,
        });
        let mut ctl = ResponsiveController::new(dom, ResponsiveConfig::default());
        let effects = ctl.dispatch(Command::Init);
        assert!(ctl.is_touch_device());
        assert!(ctl.dom().has_class(&ctl.dom().body(), TOUCH_DEVICE_CLASS));
        assert!(effects.contains(&Effect::Bind {
            target: page.link,
            event: EventKind::TouchStart,
            command: Command::Press { target: page.link },
        }));

        ctl.dispatch(Command::Press { target: page.card });
        assert!(ctl.dom().has_class(&page.card, PRESSED_CLASS));
        let expiry = ctl.dispatch(Command::Release { target: page.card });
        ctl.dispatch(Command::Press { target: page.card });
        assert_eq!(
            expiry,
            vec![Effect::Schedule {
                delay_ms: 150,
                command: Command::PressExpired { target: page.card },
            }]
        );
        for effect in expiry {
            if let Effect::Schedule { command, .. } = effect {
                ctl.dispatch(command);
            }
        }
        assert!(!ctl.dom().has_class(&page.card, PRESSED_CLASS));
    }

    #[test]
    fn configured_selectors_drive_the_marker_classes() {
        let (mut dom, page) = page(375);
        let body = dom.body();
        let side_menu = dom.add(&body, "nav", &["side-menu"]);
        let widget = dom.add(&body, "section", &["widget"]);
        let config = ResponsiveConfig::from_json(
            r#"{ "selectors": { "animated": ".widget", "panel": "nav.side-menu" } }"#,
        )
        .unwrap();
        let mut ctl = ResponsiveController::new(dom, config);
        let effects = ctl.dispatch(Command::Init);

        // Unobserved cards are never hidden.
        assert!(!effects.contains(&Effect::Observe { target: page.card }));
        assert!(!ctl.dom().has_class(&page.card, REVEAL_PENDING_CLASS));
        assert!(effects.contains(&Effect::Observe { target: widget }));
        assert!(ctl.dom().has_class(&widget, REVEAL_PENDING_CLASS));

        assert!(ctl.dom().has_class(&side_menu, PANEL_CLASS));
        assert!(!ctl.dom().has_class(&page.panel, PANEL_CLASS));
        ctl.dispatch(Command::OpenMenu);
        assert!(ctl.dom().has_class(&side_menu, PANEL_OPEN_CLASS));
        let slide_rule = format!("body.mobile .{PANEL_CLASS}.{PANEL_OPEN_CLASS}");
        let hide_rule = format!(".{REVEAL_PENDING_CLASS}:not(.{REVEALED_CLASS})");
        assert!(STYLESHEET.contains(&slide_rule));
        assert!(STYLESHEET.contains(&hide_rule));
    }

    #[test]
    fn visible_elements_animate_in() {
        let (mut ctl, page, _) = controller(1280);
        ctl.dispatch(Command::BecameVisible { target: page.card });
        assert!(ctl.dom().has_class(&page.card, REVEALED_CLASS));
    }
}
