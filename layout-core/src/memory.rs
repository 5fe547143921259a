//! Arena-backed in-memory document.
//!
//! Implements [`Dom`] well enough to drive the controller without a browser:
//! tree structure, classes, attributes, inline styles, text, labels and the
//! disabled flag, plus evaluation of [`Selector`].

use std::collections::BTreeMap;

use crate::dom::{Dom, DomError};
use crate::form::plain_label;
use crate::selector::{Chain, Compound, Selector};
use crate::touch::TouchSignals;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone, Default)]
struct NodeData {
    tag: String,
    classes: Vec<String>,
    attrs: BTreeMap<String, String>,
    style: BTreeMap<String, String>,
    content: String,
    disabled: bool,
    parent: Option<usize>,
    children: Vec<usize>,
}

#[derive(Debug, Clone)]
pub struct MemoryDom {
    nodes: Vec<NodeData>,
    root: NodeId,
    head: NodeId,
    body: NodeId,
    width: u32,
    touch: TouchSignals,
}

impl MemoryDom {
    /// `<html><head></head><body></body></html>` at the given viewport width.
    pub fn new(width: u32) -> Self {
        let mut dom = Self {
            nodes: Vec::new(),
            root: NodeId(0),
            head: NodeId(0),
            body: NodeId(0),
            width,
            touch: TouchSignals::default(),
        };
        let root = dom.alloc("html");
        dom.root = root;
        dom.head = dom.add(&root, "head", &[]);
        dom.body = dom.add(&root, "body", &[]);
        dom
    }

    pub fn with_touch(mut self, touch: TouchSignals) -> Self {
        self.touch = touch;
        self
    }

    pub fn set_viewport_width(&mut self, width: u32) {
        self.width = width;
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Append a new element with the given classes under `parent`.
    pub fn add(&mut self, parent: &NodeId, tag: &str, classes: &[&str]) -> NodeId {
        let node = self.alloc(tag);
        self.nodes[node.0].classes = classes.iter().map(|c| c.to_string()).collect();
        self.attach(*parent, node);
        node
    }

    /// Append a new element holding `text` under `parent`.
    pub fn add_text(&mut self, parent: &NodeId, tag: &str, text: &str) -> NodeId {
        let node = self.add(parent, tag, &[]);
        self.nodes[node.0].content = text.to_string();
        node
    }

    /// Detach `node` and its subtree from the document.
    pub fn remove(&mut self, node: &NodeId) {
        self.detach(*node);
    }

    pub fn children(&self, node: &NodeId) -> Vec<NodeId> {
        self.nodes[node.0].children.iter().map(|&i| NodeId(i)).collect()
    }

    pub fn tag(&self, node: &NodeId) -> &str {
        &self.nodes[node.0].tag
    }

    pub fn style(&self, node: &NodeId, property: &str) -> Option<&str> {
        self.nodes[node.0].style.get(property).map(String::as_str)
    }

    fn alloc(&mut self, tag: &str) -> NodeId {
        self.nodes.push(NodeData {
            tag: tag.to_ascii_lowercase(),
            ..NodeData::default()
        });
        NodeId(self.nodes.len() - 1)
    }

    fn detach(&mut self, node: NodeId) {
        if let Some(parent) = self.nodes[node.0].parent.take() {
            self.nodes[parent].children.retain(|&c| c != node.0);
        }
    }

    fn attach(&mut self, parent: NodeId, node: NodeId) {
        self.detach(node);
        self.nodes[node.0].parent = Some(parent.0);
        self.nodes[parent.0].children.push(node.0);
    }

    fn descendants(&self, scope: NodeId, out: &mut Vec<NodeId>) {
        for &child in &self.nodes[scope.0].children {
            out.push(NodeId(child));
            self.descendants(NodeId(child), out);
        }
    }

    fn matches_compound(&self, node: NodeId, compound: &Compound) -> bool {
        let data = &self.nodes[node.0];
        compound.matches(
            &data.tag,
            data.attrs.get("id").map(String::as_str),
            |class| data.classes.iter().any(|c| c == class),
            |name| data.attrs.get(name).map(String::as_str),
        )
    }

    fn matches_chain(&self, node: NodeId, chain: &Chain) -> bool {
        if !self.matches_compound(node, chain.subject()) {
            return false;
        }
        let mut cursor = self.nodes[node.0].parent;
        for compound in chain.ancestors().iter().rev() {
            loop {
                let Some(current) = cursor else {
                    return false;
                };
                cursor = self.nodes[current].parent;
                if self.matches_compound(NodeId(current), compound) {
                    break;
                }
            }
        }
        true
    }

    fn is_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut cursor = Some(node.0);
        while let Some(current) = cursor {
            if current == ancestor.0 {
                return true;
            }
            cursor = self.nodes[current].parent;
        }
        false
    }
}

impl Dom for MemoryDom {
    type Node = NodeId;

    fn viewport_width(&self) -> u32 {
        self.width
    }

    fn touch_signals(&self) -> TouchSignals {
        self.touch
    }

    fn head(&self) -> NodeId {
        self.head
    }

    fn body(&self) -> NodeId {
        self.body
    }

    fn select_all(&self, scope: Option<&NodeId>, selector: &Selector) -> Vec<NodeId> {
        let mut candidates = Vec::new();
        self.descendants(scope.copied().unwrap_or(self.root), &mut candidates);
        candidates
            .into_iter()
            .filter(|&node| {
                selector
                    .alternatives()
                    .iter()
                    .any(|chain| self.matches_chain(node, chain))
            })
            .collect()
    }

    fn parent(&self, node: &NodeId) -> Option<NodeId> {
        self.nodes[node.0].parent.map(NodeId)
    }

    fn contains(&self, ancestor: &NodeId, node: &NodeId) -> bool {
        self.is_ancestor(*ancestor, *node)
    }

    fn create_element(&mut self, tag: &str) -> Result<NodeId, DomError> {
        Ok(self.alloc(tag))
    }

    fn append_child(&mut self, parent: &NodeId, child: &NodeId) {
        self.attach(*parent, *child);
    }

    fn wrap(&mut self, node: &NodeId, wrapper: &NodeId) {
        let Some(parent) = self.nodes[node.0].parent else {
            return;
        };
        self.detach(*wrapper);
        let Some(index) = self.nodes[parent].children.iter().position(|&c| c == node.0) else {
            return;
        };
        self.nodes[parent].children[index] = wrapper.0;
        self.nodes[wrapper.0].parent = Some(parent);
        self.nodes[node.0].parent = Some(wrapper.0);
        self.nodes[wrapper.0].children.push(node.0);
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        self.nodes[node.0].classes.iter().any(|c| c == class)
    }

    fn add_class(&mut self, node: &NodeId, class: &str) {
        if !self.has_class(node, class) {
            self.nodes[node.0].classes.push(class.to_string());
        }
    }

    fn remove_class(&mut self, node: &NodeId, class: &str) {
        self.nodes[node.0].classes.retain(|c| c != class);
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        self.nodes[node.0].attrs.get(name).cloned()
    }

    fn set_attribute(&mut self, node: &NodeId, name: &str, value: &str) {
        self.nodes[node.0]
            .attrs
            .insert(name.to_string(), value.to_string());
    }

    fn remove_attribute(&mut self, node: &NodeId, name: &str) {
        self.nodes[node.0].attrs.remove(name);
    }

    fn set_style(&mut self, node: &NodeId, property: &str, value: Option<&str>) {
        let style = &mut self.nodes[node.0].style;
        match value {
            Some(value) => {
                style.insert(property.to_string(), value.to_string());
            }
            None => {
                style.remove(property);
            }
        }
    }

    fn text(&self, node: &NodeId) -> String {
        let mut out = self.nodes[node.0].content.clone();
        for &child in &self.nodes[node.0].children {
            out.push_str(&self.text(&NodeId(child)));
        }
        out
    }

    fn set_text(&mut self, node: &NodeId, text: &str) {
        let children = std::mem::take(&mut self.nodes[node.0].children);
        for child in children {
            self.nodes[child].parent = None;
        }
        self.nodes[node.0].content = text.to_string();
    }

    fn label(&self, node: &NodeId) -> String {
        let data = &self.nodes[node.0];
        if data.tag == "input" {
            data.attrs.get("value").cloned().unwrap_or_default()
        } else {
            data.content.clone()
        }
    }

    fn set_label(&mut self, node: &NodeId, markup: &str) {
        if self.nodes[node.0].tag == "input" {
            self.set_attribute(node, "value", &plain_label(markup));
        } else {
            self.nodes[node.0].content = markup.to_string();
        }
    }

    fn is_disabled(&self, node: &NodeId) -> bool {
        self.nodes[node.0].disabled
    }

    fn set_disabled(&mut self, node: &NodeId, disabled: bool) {
        self.nodes[node.0].disabled = disabled;
    }
}
