//! Loading feedback on form submission.

use tracing::debug;

use crate::dom::Dom;

/// Swap the control's label for the loading markup and disable it.
/// Returns the label to restore, or `None` when the control was already
/// disabled (a second submit while loading).
pub fn show_loading<D: Dom>(dom: &mut D, control: &D::Node, loading_label: &str) -> Option<String> {
    if dom.is_disabled(control) {
        return None;
    }
    let original = dom.label(control);
    dom.set_label(control, loading_label);
    dom.set_disabled(control, true);
    debug!("submit control in loading state");
    Some(original)
}

/// Fallback restore: only acts if nothing else re-enabled the control.
pub fn restore_if_stuck<D: Dom>(dom: &mut D, control: &D::Node, original_label: &str) -> bool {
    if !dom.is_disabled(control) {
        return false;
    }
    dom.set_label(control, original_label);
    dom.set_disabled(control, false);
    debug!("submit control restored by fallback");
    true
}

/// Text of a markup label, for controls that cannot render markup
/// (`<input type="submit">` shows its `value` verbatim).
pub fn plain_label(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut in_tag = false;
    for ch in markup.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out.trim().to_string()
}
