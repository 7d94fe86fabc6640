//! Snapshot rendering helpers.
//!
//! Converts element descriptors into plain-text strings suitable for
//! snapshot testing and assertions.

use crate::binding::{Element, ElementValue};

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Render a descriptor as text, one line per populated part.
///
/// Absent parts are omitted. Lines are separated by `'\n'`; the final line
/// does not have a trailing newline.
///
/// # Examples
///
/// ```ignore
/// use unicorn_dom::testing::descriptor_to_string;
///
/// let output = descriptor_to_string(&element);
/// assert!(output.contains("model name=name"));
/// ```
pub fn descriptor_to_string<N>(element: &Element<N>) -> String
where
    N: Clone + std::fmt::Debug,
{
    let mut lines = vec![format!(
        "element id={} unicorn={} value={}",
        element.id().unwrap_or("-"),
        element.is_unicorn(),
        value_to_string(element.initial_value()),
    )];

    if let Some(model) = element.model() {
        lines.push(format!(
            "model name={} event={} lazy={} defer={} debounce={} pk={}",
            model.name,
            model.event_type,
            model.is_lazy,
            model.is_defer,
            model.debounce_time,
            model.pk.as_deref().unwrap_or("null"),
        ));
    }
    if let Some(poll) = element.poll() {
        lines.push(format!("poll method={} timing={}", poll.method, poll.timing));
    }
    for action in element.actions() {
        lines.push(format!(
            "action {} -> {} prevent={} stop={} key={}",
            action.event_type,
            action.name,
            action.is_prevent,
            action.is_stop,
            action.key.as_deref().unwrap_or("-"),
        ));
    }
    if let Some(key) = element.key() {
        lines.push(format!("key {key}"));
    }
    if let Some(pk) = element.pk() {
        lines.push(format!("pk {pk}"));
    }
    if let Some(value) = element.element_value() {
        lines.push(format!("value {value}"));
    }
    for error in element.errors() {
        lines.push(format!("error {}: {}", error.code, error.message));
    }

    lines.join("\n")
}

/// Render an [`ElementValue`] compactly: `-`, `"text"`, `true`, `[a, b]`.
pub fn value_to_string(value: &ElementValue) -> String {
    match value {
        ElementValue::Absent => "-".to_owned(),
        ElementValue::Text(text) => format!("{text:?}"),
        ElementValue::Checked(checked) => checked.to_string(),
        ElementValue::Selected(values) => format!("[{}]", values.join(", ")),
    }
}
