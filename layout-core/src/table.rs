//! Responsive table reflow.
//!
//! Every table gets wrapped once in a horizontally scrollable container.
//! In the mobile bucket each body cell is annotated with its column header so
//! the stylesheet can render rows as stacked, labelled blocks.

use tracing::{debug, warn};

use crate::config::Selectors;
use crate::dom::Dom;
use crate::viewport::ViewportClass;

pub const PROCESSED_CLASS: &str = "responsive-processed";
pub const WRAPPER_CLASS: &str = "table-responsive";
pub const LABEL_ATTR: &str = "data-label";

/// Column header labels of one table, in column order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableBinding {
    labels: Vec<String>,
}

impl TableBinding {
    pub fn from_headers<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            labels: headers
                .into_iter()
                .map(|h| h.as_ref().trim().to_string())
                .collect(),
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Label for a column; blank headers and columns past the header row have none.
    pub fn label_for(&self, column: usize) -> Option<&str> {
        self.labels
            .get(column)
            .map(String::as_str)
            .filter(|l| !l.is_empty())
    }
}

/// Bindings of every table seen so far, keyed by node.
#[derive(Debug, Clone)]
pub struct TableRegistry<N> {
    entries: Vec<(N, TableBinding)>,
}

impl<N> Default for TableRegistry<N> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<N: PartialEq> TableRegistry<N> {
    pub fn binding(&self, table: &N) -> Option<&TableBinding> {
        self.entries
            .iter()
            .find(|(node, _)| node == table)
            .map(|(_, binding)| binding)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keep only entries whose table satisfies `keep`.
    pub fn retain(&mut self, mut keep: impl FnMut(&N) -> bool) {
        self.entries.retain(|(node, _)| keep(node));
    }

    fn insert(&mut self, table: N, binding: TableBinding) {
        match self.entries.iter_mut().find(|(node, _)| *node == table) {
            Some(entry) => entry.1 = binding,
            None => self.entries.push((table, binding)),
        }
    }
}

/// Process every table in the document. Returns the number of tables that
/// were seen for the first time.
pub fn adapt_tables<D: Dom>(
    dom: &mut D,
    selectors: &Selectors,
    registry: &mut TableRegistry<D::Node>,
    class: ViewportClass,
) -> usize {
    let body = dom.body();
    let before = registry.len();
    registry.retain(|table| dom.contains(&body, table));
    let dropped = before - registry.len();

    let mut fresh = 0;
    for table in dom.select_all(None, &selectors.table) {
        if !dom.has_class(&table, PROCESSED_CLASS) {
            dom.add_class(&table, PROCESSED_CLASS);
            ensure_wrapped(dom, &table);
            let binding = read_binding(dom, &table, selectors);
            registry.insert(table.clone(), binding);
            fresh += 1;
        }
        if class.is_mobile() {
            let binding = match registry.binding(&table) {
                Some(binding) => binding.clone(),
                None => {
                    let binding = read_binding(dom, &table, selectors);
                    registry.insert(table.clone(), binding.clone());
                    binding
                }
            };
            annotate(dom, &table, &binding, selectors);
        }
    }
    debug!(fresh, dropped, known = registry.len(), ?class, "tables adapted");
    fresh
}

/// Re-read the headers of one table and re-annotate it when mobile.
pub fn rebind_table<D: Dom>(
    dom: &mut D,
    selectors: &Selectors,
    registry: &mut TableRegistry<D::Node>,
    table: &D::Node,
    class: ViewportClass,
) {
    dom.add_class(table, PROCESSED_CLASS);
    ensure_wrapped(dom, table);
    let binding = read_binding(dom, table, selectors);
    if class.is_mobile() {
        annotate(dom, table, &binding, selectors);
    }
    registry.insert(table.clone(), binding);
}

fn ensure_wrapped<D: Dom>(dom: &mut D, table: &D::Node) {
    let Some(parent) = dom.parent(table) else {
        return;
    };
    if dom.has_class(&parent, WRAPPER_CLASS) {
        return;
    }
    match dom.create_element("div") {
        Ok(wrapper) => {
            dom.add_class(&wrapper, WRAPPER_CLASS);
            dom.wrap(table, &wrapper);
        }
        Err(err) => warn!(%err, "table left unwrapped"),
    }
}

fn read_binding<D: Dom>(dom: &D, table: &D::Node, selectors: &Selectors) -> TableBinding {
    let headers = dom.select_all(Some(table), &selectors.header_cell);
    TableBinding::from_headers(headers.iter().map(|th| dom.text(th)))
}

fn annotate<D: Dom>(dom: &mut D, table: &D::Node, binding: &TableBinding, selectors: &Selectors) {
    for row in dom.select_all(Some(table), &selectors.body_row) {
        for (column, cell) in dom.select_all(Some(&row), &selectors.body_cell).iter().enumerate() {
            if let Some(label) = binding.label_for(column) {
                dom.set_attribute(cell, LABEL_ATTR, label);
            }
        }
    }
}
