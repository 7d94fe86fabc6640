//! Browser host: [`DomHost`] over `web_sys::Element`.
//!
//! Exceptions thrown by the DOM (an attribute name the browser rejects, a
//! focus call on a detached node) are logged with [`tracing::error`] and
//! otherwise ignored. Use `tracing-wasm` or similar to see them in the
//! developer tools.

use wasm_bindgen::JsCast;
use web_sys::{
    Element, HtmlButtonElement, HtmlElement, HtmlInputElement, HtmlOptionElement,
    HtmlSelectElement, HtmlTextAreaElement,
};

use crate::host::{DomHost, RawAttribute};

/// The live browser document.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebDom;

/// The form-control interfaces that expose `type` and `value`.
enum FormControl<'a> {
    Input(&'a HtmlInputElement),
    Select(&'a HtmlSelectElement),
    TextArea(&'a HtmlTextAreaElement),
    Button(&'a HtmlButtonElement),
}

impl<'a> FormControl<'a> {
    fn of(element: &'a Element) -> Option<Self> {
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            Some(Self::Input(input))
        } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
            Some(Self::Select(select))
        } else if let Some(textarea) = element.dyn_ref::<HtmlTextAreaElement>() {
            Some(Self::TextArea(textarea))
        } else {
            element.dyn_ref::<HtmlButtonElement>().map(Self::Button)
        }
    }

    fn control_type(&self) -> String {
        match self {
            Self::Input(el) => el.type_(),
            Self::Select(el) => el.type_(),
            Self::TextArea(el) => el.type_(),
            Self::Button(el) => el.type_(),
        }
    }

    fn value(&self) -> String {
        match self {
            Self::Input(el) => el.value(),
            Self::Select(el) => el.value(),
            Self::TextArea(el) => el.value(),
            Self::Button(el) => el.value(),
        }
    }

    fn set_value(&self, value: &str) {
        match self {
            Self::Input(el) => el.set_value(value),
            Self::Select(el) => el.set_value(value),
            Self::TextArea(el) => el.set_value(value),
            Self::Button(el) => el.set_value(value),
        }
    }
}

impl DomHost for WebDom {
    type Node = Element;

    fn attributes(&self, node: &Element) -> Vec<RawAttribute> {
        let map = node.attributes();
        (0..map.length())
            .filter_map(|i| map.item(i))
            .map(|attr| RawAttribute {
                name: attr.name(),
                value: Some(attr.value()),
            })
            .collect()
    }

    fn get_attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn set_attribute(&mut self, node: &Element, name: &str, value: &str) {
        if let Err(err) = node.set_attribute(name, value) {
            tracing::error!(name, ?err, "failed to set attribute");
        }
    }

    fn remove_attribute(&mut self, node: &Element, name: &str) {
        if let Err(err) = node.remove_attribute(name) {
            tracing::error!(name, ?err, "failed to remove attribute");
        }
    }

    fn parent(&self, node: &Element) -> Option<Element> {
        node.parent_element()
    }

    fn element_id(&self, node: &Element) -> Option<String> {
        Some(node.id()).filter(|id| !id.is_empty())
    }

    fn control_type(&self, node: &Element) -> Option<String> {
        FormControl::of(node).map(|control| control.control_type())
    }

    fn value(&self, node: &Element) -> Option<String> {
        FormControl::of(node).map(|control| control.value())
    }

    fn set_value(&mut self, node: &Element, value: &str) {
        if let Some(control) = FormControl::of(node) {
            control.set_value(value);
        }
    }

    fn checked(&self, node: &Element) -> bool {
        node.dyn_ref::<HtmlInputElement>()
            .is_some_and(HtmlInputElement::checked)
    }

    fn set_checked(&mut self, node: &Element, checked: bool) {
        if let Some(input) = node.dyn_ref::<HtmlInputElement>() {
            input.set_checked(checked);
        }
    }

    fn selected_values(&self, node: &Element) -> Vec<String> {
        let Some(select) = node.dyn_ref::<HtmlSelectElement>() else {
            return Vec::new();
        };
        let options = select.selected_options();
        (0..options.length())
            .filter_map(|i| options.item(i))
            .filter_map(|option| option.dyn_ref::<HtmlOptionElement>().map(HtmlOptionElement::value))
            .collect()
    }

    fn focus(&mut self, node: &Element) {
        let Some(element) = node.dyn_ref::<HtmlElement>() else {
            return;
        };
        if let Err(err) = element.focus() {
            tracing::error!(?err, "failed to focus element");
        }
    }
}
