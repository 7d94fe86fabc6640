//! Node types: NodeId, NodeData, Control.

use slotmap::new_key_type;

new_key_type! {
    /// Unique identifier for a DOM element. Copy, lightweight (u64).
    pub struct NodeId;
}

/// One `<option>` of a select control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub selected: bool,
}

/// Form-control state of an element: what `el.type`, `el.value`,
/// `el.checked` and `el.selectedOptions` report in a browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    /// The control type as the DOM reports it (`text`, `checkbox`,
    /// `select-multiple`, ...). Case is preserved; consumers compare
    /// case-insensitively.
    pub control_type: String,
    pub value: String,
    pub checked: bool,
    /// Options, for select controls. Empty for everything else.
    pub options: Vec<SelectOption>,
}

impl Control {
    /// Create a control of the given type with an empty value.
    pub fn new(control_type: impl Into<String>) -> Self {
        Self {
            control_type: control_type.into(),
            value: String::new(),
            checked: false,
            options: Vec::new(),
        }
    }

    fn is_select(&self) -> bool {
        self.control_type.to_ascii_lowercase().starts_with("select")
    }

    /// The current value. Selects report their first selected option.
    pub fn value(&self) -> String {
        if self.is_select() {
            return self
                .options
                .iter()
                .find(|o| o.selected)
                .map(|o| o.value.clone())
                .unwrap_or_default();
        }
        self.value.clone()
    }

    /// Assign the value. Selects select the first option with a matching
    /// value and deselect every other option.
    pub fn set_value(&mut self, value: &str) {
        if self.is_select() {
            let mut matched = false;
            for option in &mut self.options {
                option.selected = !matched && option.value == value;
                matched |= option.selected;
            }
            return;
        }
        self.value = value.to_owned();
    }

    /// Values of the selected options, in document order.
    pub fn selected_values(&self) -> Vec<String> {
        self.options
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.value.clone())
            .collect()
    }
}

/// Data associated with a single DOM element.
#[derive(Debug, Clone)]
pub struct NodeData {
    /// Tag name (e.g. "div", "input").
    pub tag: String,
    /// Attributes in document order.
    pub attributes: Vec<(String, String)>,
    /// Form-control state. `None` for elements without a `type`.
    pub control: Option<Control>,
    /// Whether this element currently has focus.
    pub focused: bool,
}

impl NodeData {
    /// Create a plain element with the given tag and no attributes.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            control: None,
            focused: false,
        }
    }

    /// An `<input>` of the given type.
    pub fn input(input_type: impl Into<String>) -> Self {
        Self {
            control: Some(Control::new(input_type)),
            ..Self::new("input")
        }
    }

    /// A `<textarea>`.
    pub fn textarea() -> Self {
        Self {
            control: Some(Control::new("textarea")),
            ..Self::new("textarea")
        }
    }

    /// A single-choice `<select>`.
    pub fn select() -> Self {
        Self {
            control: Some(Control::new("select-one")),
            ..Self::new("select")
        }
    }

    /// A `<select multiple>`.
    pub fn select_multiple() -> Self {
        Self {
            control: Some(Control::new("select-multiple")),
            ..Self::new("select")
        }
    }

    /// Set an attribute (builder).
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(&name.into(), &value.into());
        self
    }

    /// Set the `id` attribute (builder).
    pub fn with_id(self, id: impl Into<String>) -> Self {
        self.with_attr("id", id)
    }

    /// Set the control value (builder). No-op for elements without a control.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        if let Some(control) = self.control.as_mut() {
            control.value = value.into();
        }
        self
    }

    /// Set the checked state (builder). No-op for elements without a control.
    pub fn checked(mut self, checked: bool) -> Self {
        if let Some(control) = self.control.as_mut() {
            control.checked = checked;
        }
        self
    }

    /// Append an `<option>` (builder). No-op for elements without a control.
    pub fn with_option(mut self, value: impl Into<String>, selected: bool) -> Self {
        if let Some(control) = self.control.as_mut() {
            control.options.push(SelectOption {
                value: value.into(),
                selected,
            });
        }
        self
    }

    /// Read an attribute value.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Whether the attribute is present.
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    /// Set an attribute. Existing attributes keep their position; new ones
    /// are appended.
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        match self.attributes.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value.to_owned(),
            None => self.attributes.push((name.to_owned(), value.to_owned())),
        }
    }

    /// Remove an attribute. No-op if not present.
    pub fn remove_attribute(&mut self, name: &str) {
        self.attributes.retain(|(n, _)| n != name);
    }

    /// The `id` attribute, if any.
    pub fn id(&self) -> Option<&str> {
        self.attribute("id")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_defaults() {
        let data = NodeData::new("div");
        assert_eq!(data.tag, "div");
        assert!(data.attributes.is_empty());
        assert!(data.control.is_none());
        assert!(!data.focused);
    }

    #[test]
    fn builder_with_id() {
        let data = NodeData::new("div").with_id("title");
        assert_eq!(data.id(), Some("title"));
    }

    #[test]
    fn attributes_keep_document_order() {
        let data = NodeData::new("div")
            .with_attr("b", "1")
            .with_attr("a", "2")
            .with_attr("b", "3");
        assert_eq!(
            data.attributes,
            vec![("b".to_owned(), "3".to_owned()), ("a".to_owned(), "2".to_owned())]
        );
    }

    #[test]
    fn remove_attribute() {
        let mut data = NodeData::new("div").with_attr("a", "1").with_attr("b", "2");
        data.remove_attribute("a");
        assert!(!data.has_attribute("a"));
        assert!(data.has_attribute("b"));
        data.remove_attribute("missing"); // should not panic
    }

    #[test]
    fn input_builders() {
        let data = NodeData::input("checkbox").with_value("on").checked(true);
        let control = data.control.unwrap();
        assert_eq!(control.control_type, "checkbox");
        assert_eq!(control.value, "on");
        assert!(control.checked);
    }

    #[test]
    fn control_builders_ignored_without_control() {
        let data = NodeData::new("div").with_value("x").checked(true).with_option("a", true);
        assert!(data.control.is_none());
    }

    #[test]
    fn select_value_is_first_selected_option() {
        let data = NodeData::select_multiple()
            .with_option("a", false)
            .with_option("b", true)
            .with_option("c", true);
        let control = data.control.unwrap();
        assert_eq!(control.value(), "b");
        assert_eq!(control.selected_values(), vec!["b", "c"]);
    }

    #[test]
    fn select_set_value_selects_single_match() {
        let mut control = NodeData::select_multiple()
            .with_option("a", true)
            .with_option("b", false)
            .control
            .unwrap();
        control.set_value("b");
        assert_eq!(control.selected_values(), vec!["b"]);
        control.set_value("zzz");
        assert!(control.selected_values().is_empty());
    }

    #[test]
    fn text_set_value() {
        let mut control = Control::new("text");
        control.set_value("hello");
        assert_eq!(control.value(), "hello");
    }

    #[test]
    fn node_id_is_copy() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<NodeId>();
    }
}
