//! Value adapter: reading and writing a form control's current value.
//!
//! Browsers expose control state through different properties depending on
//! the control type. This module folds them into one [`ElementValue`]:
//!
//! - checkboxes report `checked`, never their `value` attribute,
//! - `select-multiple` reports the selected option values in document order,
//! - every other typed control reports `value`,
//! - elements without a `type` report [`ElementValue::Absent`].

use crate::error::ElementError;
use crate::host::DomHost;

use super::element::Element;

// ---------------------------------------------------------------------------
// ElementValue
// ---------------------------------------------------------------------------

/// The current value of an element.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum ElementValue {
    /// The element exposes no value.
    #[default]
    Absent,
    Text(String),
    Checked(bool),
    Selected(Vec<String>),
}

impl ElementValue {
    /// Truthiness as a checkbox sees it: non-empty text, `true`, and any
    /// selection list (even an empty one) are truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Absent => false,
            Self::Text(text) => !text.is_empty(),
            Self::Checked(checked) => *checked,
            Self::Selected(_) => true,
        }
    }

    /// The text payload, for [`ElementValue::Text`].
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// String form assigned to a control's `value` property.
    fn to_dom_string(&self) -> String {
        match self {
            Self::Absent => String::new(),
            Self::Text(text) => text.clone(),
            Self::Checked(checked) => checked.to_string(),
            Self::Selected(values) => values.join(","),
        }
    }
}

impl From<&str> for ElementValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for ElementValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<bool> for ElementValue {
    fn from(checked: bool) -> Self {
        Self::Checked(checked)
    }
}

impl From<Vec<String>> for ElementValue {
    fn from(values: Vec<String>) -> Self {
        Self::Selected(values)
    }
}

/// Read the current value of `node`.
pub(crate) fn read_value<D: DomHost>(host: &D, node: &D::Node) -> ElementValue {
    let Some(control_type) = host.control_type(node) else {
        return host
            .value(node)
            .map(ElementValue::Text)
            .unwrap_or_default();
    };

    if control_type.eq_ignore_ascii_case("checkbox") {
        ElementValue::Checked(host.checked(node))
    } else if control_type.eq_ignore_ascii_case("select-multiple") {
        ElementValue::Selected(host.selected_values(node))
    } else {
        ElementValue::Text(host.value(node).unwrap_or_default())
    }
}

impl<N: Clone + std::fmt::Debug> Element<N> {
    /// Read the element's current value from the DOM.
    pub fn get_value<D>(&self, host: &D) -> ElementValue
    where
        D: DomHost<Node = N>,
    {
        read_value(host, self.node())
    }

    /// Write `candidate` into the DOM, honoring control-type semantics.
    ///
    /// A non-empty `unicorn:value` override replaces `candidate`. Radios are
    /// only ever checked (when their value equals the candidate text), never
    /// unchecked; the other radios of the group have their own wrappers.
    ///
    /// # Errors
    ///
    /// [`ElementError::UntypedControl`] if the element has no control type.
    pub fn set_value<D>(&self, host: &mut D, candidate: impl Into<ElementValue>) -> Result<(), ElementError>
    where
        D: DomHost<Node = N>,
    {
        let node = self.node();
        let Some(control_type) = host.control_type(node) else {
            return Err(ElementError::UntypedControl {
                id: self.id().map(str::to_owned),
            });
        };

        let candidate = match self.element_value().filter(|v| !v.is_empty()) {
            Some(forced) => ElementValue::Text(forced.to_owned()),
            None => candidate.into(),
        };

        if control_type.eq_ignore_ascii_case("radio") {
            let current = host.value(node).unwrap_or_default();
            if candidate.as_text() == Some(current.as_str()) {
                host.set_checked(node, true);
            }
        } else if control_type.eq_ignore_ascii_case("checkbox") {
            host.set_checked(node, candidate.is_truthy());
        } else {
            host.set_value(node, &candidate.to_dom_string());
        }
        Ok(())
    }

    /// Give the element focus.
    pub fn focus<D>(&self, host: &mut D)
    where
        D: DomHost<Node = N>,
    {
        host.focus(self.node());
    }
}
