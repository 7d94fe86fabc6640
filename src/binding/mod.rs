//! Binding layer: attribute decoding, element descriptors, value adapter.

pub mod tokenizer;
pub mod attribute;
pub mod descriptor;
pub mod element;
pub mod value;
pub mod component;

pub use attribute::{decode, AttributeKind, DecodedAttribute, ModifierArg, Modifiers};
pub use component::collect_elements;
pub use descriptor::{ActionSpec, ErrorEntry, ModelEvent, ModelSpec, PollSpec, NO_DEBOUNCE};
pub use element::Element;
pub use value::ElementValue;
