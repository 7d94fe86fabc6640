//! # unicorn-dom
//!
//! Client-side element binding for a server-driven UI library.
//!
//! Templates rendered by the server annotate elements with namespaced
//! attributes (`unicorn:model`, `unicorn:click.prevent`, `unicorn:poll-5000`,
//! ...). This crate decodes them into typed descriptors that a
//! reconciliation layer uses to decide what to send to the server and how to
//! apply its responses back onto the DOM.
//!
//! ## Core Systems
//!
//! - **[`binding`]**: attribute decoder, element descriptor builder with
//!   primary-key resolution, form-control value adapter
//! - **[`host`]**: the [`DomHost`](host::DomHost) seam the descriptors run against
//! - **[`dom`]**: slotmap-backed in-memory DOM implementing the seam
//! - **[`config`]**: attribute namespace and fallback values
//! - **[`error`]**: precondition violations reported by element operations
//! - **[`testing`]**: plain-text descriptor rendering for snapshot tests
//! - **`web`** (feature `web`): the seam over `web_sys::Element`
//!
//! ## Example
//!
//! ```
//! use unicorn_dom::binding::Element;
//! use unicorn_dom::config::BindingConfig;
//! use unicorn_dom::dom::{Dom, NodeData};
//!
//! let mut dom = Dom::new();
//! let root = dom.insert(
//!     NodeData::new("div")
//!         .with_attr("unicorn:checksum", "a1b2")
//!         .with_attr("unicorn:pk", "7"),
//! );
//! let input = dom.insert_child(
//!     root,
//!     NodeData::input("text").with_attr("unicorn:model.lazy", "name"),
//! );
//!
//! let element = Element::build(&dom, input, &BindingConfig::default()).unwrap();
//! assert_eq!(element.model_key().as_deref(), Some("name:7"));
//! ```
//!
//! ## Logging
//!
//! Decoding and pk resolution emit [`tracing`] events at `trace`/`debug`
//! level; the library never installs a subscriber.

// Foundation
pub mod config;
pub mod error;

// Document access
pub mod dom;
pub mod host;
#[cfg(feature = "web")]
pub mod web;

// Binding
pub mod binding;

// Testing helpers
pub mod testing;

pub use binding::{Element, ElementValue};
pub use config::BindingConfig;
pub use error::ElementError;
pub use host::DomHost;
