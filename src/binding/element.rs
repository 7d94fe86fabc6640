//! Element descriptors: a snapshot of how one DOM element participates in
//! data binding.
//!
//! [`Element::build`] decodes every attribute in document order and folds
//! them into a descriptor:
//!
//! - the first `model` attribute wins, and so does the first `poll`,
//! - every action attribute appends an [`ActionSpec`],
//! - `key`, `pk` and `value` overwrite, so the last one wins,
//! - every `error:<code>` attribute appends an [`ErrorEntry`].
//!
//! Model elements then resolve their primary key: their own `pk`, or the
//! nearest ancestor's, searching no further than the component boundary
//! (the ancestor carrying a `checksum`).

use tracing::{debug, trace};

use crate::config::BindingConfig;
use crate::error::ElementError;
use crate::host::DomHost;

use super::attribute::{decode, AttributeKind, DecodedAttribute, ModifierArg};
use super::descriptor::{ActionSpec, ErrorEntry, ModelEvent, ModelSpec, PollSpec, NO_DEBOUNCE};
use super::value::{read_value, ElementValue};

// ---------------------------------------------------------------------------
// Element
// ---------------------------------------------------------------------------

/// Binding descriptor for one DOM element.
///
/// Holds a non-owning handle to the element. Everything except the error
/// list is fixed at build time; rebuild to pick up attribute changes.
#[derive(Debug, Clone)]
pub struct Element<N> {
    node: N,
    id: Option<String>,
    is_unicorn: bool,
    attributes: Vec<DecodedAttribute>,
    value: ElementValue,
    model: Option<ModelSpec>,
    poll: Option<PollSpec>,
    actions: Vec<ActionSpec>,
    key: Option<String>,
    pk: Option<String>,
    element_value: Option<String>,
    errors: Vec<ErrorEntry>,
    error_prefix: String,
}

impl<N: Clone + std::fmt::Debug> Element<N> {
    /// Wrap `node`, decoding its current attributes.
    ///
    /// # Errors
    ///
    /// For model elements without their own `pk`, the ancestor walk fails
    /// with [`ElementError::NoComponentBoundary`] when it runs out of
    /// parents, and with [`ElementError::AncestorDepthExceeded`] past
    /// `config.max_ancestor_depth` ancestors.
    pub fn build<D>(host: &D, node: N, config: &BindingConfig) -> Result<Self, ElementError>
    where
        D: DomHost<Node = N>,
    {
        let mut element = Self {
            id: host.element_id(&node),
            is_unicorn: false,
            attributes: Vec::new(),
            value: read_value(host, &node),
            model: None,
            poll: None,
            actions: Vec::new(),
            key: None,
            pk: None,
            element_value: None,
            errors: Vec::new(),
            error_prefix: config.error_prefix(),
            node,
        };

        for raw in host.attributes(&element.node) {
            let attribute = decode(&raw, config);
            trace!(name = %attribute.name, kind = ?attribute.kind, "decoded attribute");
            element.apply(&attribute, config);
            element.attributes.push(attribute);
        }

        if element.is_unicorn {
            if let Some(mut model) = element.model.take() {
                model.pk = element.resolve_model_pk(host, config)?;
                element.model = Some(model);
            }
        }

        Ok(element)
    }

    fn apply(&mut self, attribute: &DecodedAttribute, config: &BindingConfig) {
        if attribute.is_unicorn() {
            self.is_unicorn = true;
        }
        let value = attribute.value_or_empty();

        match &attribute.kind {
            AttributeKind::Model if self.model.is_some() => {
                debug!(name = %attribute.name, "ignoring additional model attribute");
            }
            AttributeKind::Model => {
                let modifiers = &attribute.modifiers;
                self.model = Some(ModelSpec {
                    name: value.to_owned(),
                    event_type: if modifiers.lazy {
                        ModelEvent::Blur
                    } else {
                        ModelEvent::Input
                    },
                    is_lazy: modifiers.lazy,
                    is_defer: modifiers.defer,
                    debounce_time: debounce_time(modifiers.debounce.as_ref()),
                    pk: None,
                });
            }
            AttributeKind::Poll { .. } if self.poll.is_some() => {
                debug!(name = %attribute.name, "ignoring additional poll attribute");
            }
            AttributeKind::Poll { argument } => {
                let method = if value.is_empty() {
                    config.refresh_method.clone()
                } else {
                    value.to_owned()
                };
                // `poll-1500ms` is non-numeric: no prefix parsing.
                let timing = argument
                    .as_deref()
                    .and_then(|arg| arg.parse::<u32>().ok())
                    .filter(|&ms| ms > 0)
                    .unwrap_or(config.poll_timing_ms);
                self.poll = Some(PollSpec { method, timing });
            }
            AttributeKind::Action { event_type } => {
                self.actions.push(ActionSpec {
                    name: value.to_owned(),
                    event_type: event_type.clone(),
                    is_prevent: attribute.modifiers.prevent,
                    is_stop: attribute.modifiers.stop,
                    key: attribute.modifiers.key_filter.clone(),
                });
            }
            AttributeKind::Key => self.key = Some(value.to_owned()),
            AttributeKind::PrimaryKey => self.pk = Some(value.to_owned()),
            AttributeKind::Value => self.element_value = Some(value.to_owned()),
            AttributeKind::Error { code } => {
                self.errors.push(ErrorEntry::new(code.as_str(), value));
            }
            AttributeKind::Foreign | AttributeKind::Marker | AttributeKind::Checksum => {}
        }
    }

    /// The element's own pk, else the first ancestor `pk` up to and
    /// including the component boundary.
    fn resolve_model_pk<D>(&self, host: &D, config: &BindingConfig) -> Result<Option<String>, ElementError>
    where
        D: DomHost<Node = N>,
    {
        if self.pk.is_some() {
            return Ok(self.pk.clone());
        }

        let pk_attribute = config.pk_attribute();
        let checksum_attribute = config.checksum_attribute();
        let mut current = host.parent(&self.node);

        for depth in 1..=config.max_ancestor_depth {
            let Some(ancestor) = current else {
                return Err(ElementError::NoComponentBoundary {
                    id: self.id.clone(),
                });
            };

            let pk = host.get_attribute(&ancestor, &pk_attribute);
            let at_boundary = host
                .get_attribute(&ancestor, &checksum_attribute)
                .is_some_and(|checksum| !checksum.is_empty());

            if pk.is_some() || at_boundary {
                debug!(depth, pk = ?pk, at_boundary, "resolved model pk from ancestor");
                return Ok(pk);
            }
            current = host.parent(&ancestor);
        }

        Err(ElementError::AncestorDepthExceeded {
            id: self.id.clone(),
            depth: config.max_ancestor_depth,
        })
    }

    // ── Accessors ────────────────────────────────────────────────────

    /// The wrapped element handle.
    pub fn node(&self) -> &N {
        &self.node
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Whether any attribute is in the binding namespace.
    pub fn is_unicorn(&self) -> bool {
        self.is_unicorn
    }

    /// Every attribute, decoded, in document order.
    pub fn attributes(&self) -> &[DecodedAttribute] {
        &self.attributes
    }

    /// The value read when the element was wrapped.
    pub fn initial_value(&self) -> &ElementValue {
        &self.value
    }

    pub fn model(&self) -> Option<&ModelSpec> {
        self.model.as_ref()
    }

    pub fn poll(&self) -> Option<&PollSpec> {
        self.poll.as_ref()
    }

    pub fn actions(&self) -> &[ActionSpec] {
        &self.actions
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// The element's own `pk` attribute (not the inherited one; see
    /// [`ModelSpec::pk`]).
    pub fn pk(&self) -> Option<&str> {
        self.pk.as_deref()
    }

    /// The explicit `value` override.
    pub fn element_value(&self) -> Option<&str> {
        self.element_value.as_deref()
    }

    pub fn errors(&self) -> &[ErrorEntry] {
        &self.errors
    }

    /// Identity correlating this element with server-side model updates:
    /// `<model name>:<pk>`, with a missing pk rendered as `null`.
    ///
    /// `None` for elements without a model binding.
    pub fn model_key(&self) -> Option<String> {
        let model = self.model.as_ref()?;
        Some(format!(
            "{}:{}",
            model.name,
            model.pk.as_deref().unwrap_or("null")
        ))
    }

    // ── Errors ───────────────────────────────────────────────────────

    /// Record a validation error and display it as an `error:<code>`
    /// attribute on the element.
    pub fn add_error<D>(&mut self, host: &mut D, error: ErrorEntry)
    where
        D: DomHost<Node = N>,
    {
        let attribute = format!("{}{}", self.error_prefix, error.code);
        host.set_attribute(&self.node, &attribute, &error.message);
        self.errors.push(error);
    }

    /// Remove every recorded error and its attribute.
    pub fn remove_errors<D>(&mut self, host: &mut D)
    where
        D: DomHost<Node = N>,
    {
        for error in self.errors.drain(..) {
            let attribute = format!("{}{}", self.error_prefix, error.code);
            host.remove_attribute(&self.node, &attribute);
        }
    }
}

/// Milliseconds from a `debounce-<ms>` modifier; anything but a plain
/// non-negative integer is [`NO_DEBOUNCE`]. Trailing text after the digits
/// (`debounce-250ms`) is rejected rather than read as a numeric prefix.
fn debounce_time(arg: Option<&ModifierArg>) -> i32 {
    match arg {
        Some(ModifierArg::Value(ms)) => ms
            .parse::<u32>()
            .ok()
            .and_then(|ms| i32::try_from(ms).ok())
            .unwrap_or(NO_DEBOUNCE),
        Some(ModifierArg::Flag) | None => NO_DEBOUNCE,
    }
}
