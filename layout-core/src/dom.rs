use std::fmt;

use thiserror::Error;

use crate::selector::Selector;
use crate::touch::TouchSignals;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    #[error("could not create <{tag}>: {reason}")]
    Create { tag: String, reason: String },
}

/// Browser events the controller asks the host to listen for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    TouchStart,
    TouchEnd,
    /// Touch turned into a scroll or was interrupted; no `touchend` follows.
    TouchCancel,
    Submit,
}

impl EventKind {
    /// DOM event type name.
    pub fn name(self) -> &'static str {
        match self {
            EventKind::Click => "click",
            EventKind::TouchStart => "touchstart",
            EventKind::TouchEnd => "touchend",
            EventKind::TouchCancel => "touchcancel",
            EventKind::Submit => "submit",
        }
    }
}

/// Minimal document surface the layout controller mutates.
///
/// Node handles are cheap clones (a `web_sys::Element` or an arena index).
/// Mutations are infallible from the controller's point of view: a host that
/// cannot apply one logs and carries on.
pub trait Dom {
    type Node: Clone + PartialEq + fmt::Debug;

    /// Layout viewport width in CSS pixels.
    fn viewport_width(&self) -> u32;
    fn touch_signals(&self) -> TouchSignals;

    fn head(&self) -> Self::Node;
    fn body(&self) -> Self::Node;

    /// All matches in document order, below `scope` or in the whole document.
    fn select_all(&self, scope: Option<&Self::Node>, selector: &Selector) -> Vec<Self::Node>;

    fn select(&self, scope: Option<&Self::Node>, selector: &Selector) -> Option<Self::Node> {
        self.select_all(scope, selector).into_iter().next()
    }

    fn parent(&self, node: &Self::Node) -> Option<Self::Node>;
    /// Inclusive: a node contains itself.
    fn contains(&self, ancestor: &Self::Node, node: &Self::Node) -> bool;

    fn create_element(&mut self, tag: &str) -> Result<Self::Node, DomError>;
    fn append_child(&mut self, parent: &Self::Node, child: &Self::Node);
    /// Put `wrapper` where `node` is and move `node` inside it.
    fn wrap(&mut self, node: &Self::Node, wrapper: &Self::Node);

    fn has_class(&self, node: &Self::Node, class: &str) -> bool;
    fn add_class(&mut self, node: &Self::Node, class: &str);
    fn remove_class(&mut self, node: &Self::Node, class: &str);

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;
    fn set_attribute(&mut self, node: &Self::Node, name: &str, value: &str);
    fn remove_attribute(&mut self, node: &Self::Node, name: &str);

    /// Inline style property; `None` removes it.
    fn set_style(&mut self, node: &Self::Node, property: &str, value: Option<&str>);

    fn text(&self, node: &Self::Node) -> String;
    fn set_text(&mut self, node: &Self::Node, text: &str);

    /// Visible label of a control: markup for buttons, `value` for inputs.
    fn label(&self, node: &Self::Node) -> String;
    fn set_label(&mut self, node: &Self::Node, markup: &str);

    fn is_disabled(&self, node: &Self::Node) -> bool;
    fn set_disabled(&mut self, node: &Self::Node, disabled: bool);
}
