use js_sys::Reflect;
use layout_core::form::plain_label;
use layout_core::{Dom, DomError, Selector, TouchSignals};
use tracing::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlButtonElement, HtmlElement, HtmlInputElement, Window};

use crate::WebError;

/// [`Dom`] over the live browser document.
pub struct WebDom {
    window: Window,
    document: Document,
    head: Element,
    body: Element,
}

fn log_js(action: &str, result: Result<(), JsValue>) {
    if let Err(err) = result {
        warn!(action, "dom mutation failed: {err:?}");
    }
}

impl WebDom {
    pub fn from_window() -> Result<Self, WebError> {
        let window = web_sys::window().ok_or(WebError::NoWindow)?;
        let document = window.document().ok_or(WebError::NoDocument)?;
        let head = document
            .head()
            .map(Element::from)
            .ok_or(WebError::MissingElement("head"))?;
        let body = document
            .body()
            .map(Element::from)
            .ok_or(WebError::MissingElement("body"))?;
        Ok(Self {
            window,
            document,
            head,
            body,
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl Dom for WebDom {
    type Node = Element;

    fn viewport_width(&self) -> u32 {
        self.window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .map(|w| w.max(0.0) as u32)
            .unwrap_or(0)
    }

    fn touch_signals(&self) -> TouchSignals {
        TouchSignals {
            has_touch_start: Reflect::has(&self.window, &JsValue::from_str("ontouchstart"))
                .unwrap_or(false),
            max_touch_points: self.window.navigator().max_touch_points().max(0) as u32,
        }
    }

    fn head(&self) -> Element {
        self.head.clone()
    }

    fn body(&self) -> Element {
        self.body.clone()
    }

    fn select_all(&self, scope: Option<&Element>, selector: &Selector) -> Vec<Element> {
        let css = selector.to_string();
        let list = match scope {
            Some(el) => el.query_selector_all(&css),
            None => self.document.query_selector_all(&css),
        };
        match list {
            Ok(list) => (0..list.length())
                .filter_map(|i| list.item(i))
                .filter_map(|node| node.dyn_into::<Element>().ok())
                .collect(),
            Err(err) => {
                warn!(selector = %css, "query failed: {err:?}");
                Vec::new()
            }
        }
    }

    fn parent(&self, node: &Element) -> Option<Element> {
        node.parent_element()
    }

    fn contains(&self, ancestor: &Element, node: &Element) -> bool {
        ancestor.contains(Some(node.as_ref()))
    }

    fn create_element(&mut self, tag: &str) -> Result<Element, DomError> {
        self.document
            .create_element(tag)
            .map_err(|err| DomError::Create {
                tag: tag.to_string(),
                reason: format!("{err:?}"),
            })
    }

    fn append_child(&mut self, parent: &Element, child: &Element) {
        log_js("append_child", parent.append_child(child).map(|_| ()));
    }

    fn wrap(&mut self, node: &Element, wrapper: &Element) {
        let Some(parent) = node.parent_node() else {
            return;
        };
        log_js(
            "insert_before",
            parent.insert_before(wrapper, Some(node.as_ref())).map(|_| ()),
        );
        log_js("append_child", wrapper.append_child(node).map(|_| ()));
    }

    fn has_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn add_class(&mut self, node: &Element, class: &str) {
        log_js("add_class", node.class_list().add_1(class));
    }

    fn remove_class(&mut self, node: &Element, class: &str) {
        log_js("remove_class", node.class_list().remove_1(class));
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn set_attribute(&mut self, node: &Element, name: &str, value: &str) {
        log_js("set_attribute", node.set_attribute(name, value));
    }

    fn remove_attribute(&mut self, node: &Element, name: &str) {
        log_js("remove_attribute", node.remove_attribute(name));
    }

    fn set_style(&mut self, node: &Element, property: &str, value: Option<&str>) {
        let Some(el) = node.dyn_ref::<HtmlElement>() else {
            return;
        };
        let style = el.style();
        match value {
            Some(value) => log_js("set_style", style.set_property(property, value)),
            None => log_js("remove_style", style.remove_property(property).map(|_| ())),
        }
    }

    fn text(&self, node: &Element) -> String {
        node.text_content().unwrap_or_default()
    }

    fn set_text(&mut self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn label(&self, node: &Element) -> String {
        match node.dyn_ref::<HtmlInputElement>() {
            Some(input) => input.value(),
            None => node.inner_html(),
        }
    }

    fn set_label(&mut self, node: &Element, markup: &str) {
        match node.dyn_ref::<HtmlInputElement>() {
            Some(input) => input.set_value(&plain_label(markup)),
            None => node.set_inner_html(markup),
        }
    }

    fn is_disabled(&self, node: &Element) -> bool {
        if let Some(button) = node.dyn_ref::<HtmlButtonElement>() {
            button.disabled()
        } else if let Some(input) = node.dyn_ref::<HtmlInputElement>() {
            input.disabled()
        } else {
            node.has_attribute("disabled")
        }
    }

    fn set_disabled(&mut self, node: &Element, disabled: bool) {
        if let Some(button) = node.dyn_ref::<HtmlButtonElement>() {
            button.set_disabled(disabled);
        } else if let Some(input) = node.dyn_ref::<HtmlInputElement>() {
            input.set_disabled(disabled);
        } else if disabled {
            self.set_attribute(node, "disabled", "");
        } else {
            self.remove_attribute(node, "disabled");
        }
    }
}
