//! Attribute decoding: one raw DOM attribute in, one classified
//! [`DecodedAttribute`] out.
//!
//! Grammar: `<ns>:<category>[:<sub>...][.<modifier>[-<arg>]...]`.
//!
//! | Category            | Kind                                   |
//! |---------------------|----------------------------------------|
//! | `model`             | [`AttributeKind::Model`]               |
//! | `poll`, `poll-<ms>` | [`AttributeKind::Poll`]                |
//! | `key`               | [`AttributeKind::Key`]                 |
//! | `pk`                | [`AttributeKind::PrimaryKey`]          |
//! | `value`             | [`AttributeKind::Value`]               |
//! | `error:<code>`      | [`AttributeKind::Error`]               |
//! | `checksum`          | [`AttributeKind::Checksum`]            |
//! | `id`, `name`, empty | [`AttributeKind::Marker`]              |
//! | anything else       | [`AttributeKind::Action`] (event name) |

use crate::config::BindingConfig;
use crate::host::RawAttribute;

use super::tokenizer::{tokenize, Token};

/// Directives under the namespace that are neither bindings nor events.
const RESERVED: &[&str] = &["", "id", "name"];

// ---------------------------------------------------------------------------
// AttributeKind
// ---------------------------------------------------------------------------

/// Closed classification of a decoded attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeKind {
    /// Not in the binding namespace (`class`, `type`, ...).
    Foreign,
    /// In the namespace but inert (`unicorn:id`, `unicorn:name`).
    Marker,
    /// `unicorn:model`: two-way binding.
    Model,
    /// `unicorn:poll[-<arg>]`. The dash argument is kept raw.
    Poll { argument: Option<String> },
    /// `unicorn:<event>`: action triggered by a DOM event.
    Action { event_type: String },
    /// `unicorn:key`
    Key,
    /// `unicorn:pk`
    PrimaryKey,
    /// `unicorn:value`
    Value,
    /// `unicorn:error:<code>`. The code is kept verbatim.
    Error { code: String },
    /// `unicorn:checksum`: component boundary.
    Checksum,
}

// ---------------------------------------------------------------------------
// Modifiers
// ---------------------------------------------------------------------------

/// Argument of a modifier: bare (`.lazy`) or dashed (`.debounce-250`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModifierArg {
    Flag,
    Value(String),
}

/// Modifiers recognized from the dotted suffix of an attribute name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub lazy: bool,
    pub defer: bool,
    pub debounce: Option<ModifierArg>,
    pub prevent: bool,
    pub stop: bool,
    /// Last modifier other than `prevent`/`stop`, read as a keyboard-key
    /// filter by actions. Binding words (`lazy`, `defer`, `debounce`) count
    /// too; models ignore this field.
    pub key_filter: Option<String>,
}

impl Modifiers {
    /// Fold dotted segments into the record.
    ///
    /// Duplicate keys keep the position of their first occurrence and the
    /// argument of their last.
    fn parse<'a>(segments: impl IntoIterator<Item = &'a str>) -> Self {
        let mut ordered: Vec<(&str, ModifierArg)> = Vec::new();
        for segment in segments.into_iter().filter(|s| !s.is_empty()) {
            let (key, arg) = match segment.split_once('-') {
                Some((key, rest)) => {
                    let arg = rest.split('-').next().unwrap_or_default();
                    (key, ModifierArg::Value(arg.to_owned()))
                }
                None => (segment, ModifierArg::Flag),
            };
            match ordered.iter_mut().find(|(k, _)| *k == key) {
                Some(entry) => entry.1 = arg,
                None => ordered.push((key, arg)),
            }
        }

        let mut modifiers = Self::default();
        for (key, arg) in ordered {
            match key {
                "prevent" => modifiers.prevent = true,
                "stop" => modifiers.stop = true,
                other => {
                    match other {
                        "lazy" => modifiers.lazy = true,
                        "defer" => modifiers.defer = true,
                        "debounce" => modifiers.debounce = Some(arg),
                        _ => {}
                    }
                    modifiers.key_filter = Some(other.to_owned());
                }
            }
        }
        modifiers
    }
}

// ---------------------------------------------------------------------------
// DecodedAttribute
// ---------------------------------------------------------------------------

/// A raw attribute together with its classification and modifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedAttribute {
    pub name: String,
    pub value: Option<String>,
    pub kind: AttributeKind,
    pub modifiers: Modifiers,
}

impl DecodedAttribute {
    /// The attribute value, with a missing value read as empty.
    pub fn value_or_empty(&self) -> &str {
        self.value.as_deref().unwrap_or_default()
    }

    pub fn is_unicorn(&self) -> bool {
        self.kind != AttributeKind::Foreign
    }

    pub fn is_model(&self) -> bool {
        self.kind == AttributeKind::Model
    }

    pub fn is_poll(&self) -> bool {
        matches!(self.kind, AttributeKind::Poll { .. })
    }

    pub fn is_key(&self) -> bool {
        self.kind == AttributeKind::Key
    }

    pub fn is_pk(&self) -> bool {
        self.kind == AttributeKind::PrimaryKey
    }

    pub fn is_value(&self) -> bool {
        self.kind == AttributeKind::Value
    }

    pub fn is_error(&self) -> bool {
        matches!(self.kind, AttributeKind::Error { .. })
    }

    /// The DOM event name, for action attributes.
    pub fn event_type(&self) -> Option<&str> {
        match &self.kind {
            AttributeKind::Action { event_type } => Some(event_type),
            _ => None,
        }
    }
}

/// Decode one attribute. Total and side-effect free.
pub fn decode(raw: &RawAttribute, config: &BindingConfig) -> DecodedAttribute {
    let (kind, modifiers) = classify(&raw.name, config);
    DecodedAttribute {
        name: raw.name.clone(),
        value: raw.value.clone(),
        kind,
        modifiers,
    }
}

fn classify(name: &str, config: &BindingConfig) -> (AttributeKind, Modifiers) {
    let namespace = config.namespace.as_str();
    let rest = match name.strip_prefix(namespace) {
        Some("") => return (AttributeKind::Marker, Modifiers::default()),
        Some(rest) => match rest.strip_prefix(':') {
            Some(rest) => rest,
            None => return (AttributeKind::Foreign, Modifiers::default()),
        },
        None => return (AttributeKind::Foreign, Modifiers::default()),
    };

    // `head` is everything before the first dot; each dot opens a modifier.
    let mut head = String::new();
    let mut segments: Vec<String> = Vec::new();
    for (token, text) in tokenize(rest) {
        match (token, segments.last_mut()) {
            (Token::Dot, _) => segments.push(String::new()),
            (_, Some(current)) => current.push_str(&text),
            (_, None) => head.push_str(&text),
        }
    }
    let modifiers = Modifiers::parse(segments.iter().map(String::as_str));

    let (category, sub_path) = match head.split_once(':') {
        Some((category, sub)) => (category, Some(sub)),
        None => (head.as_str(), None),
    };

    let kind = match (category, sub_path) {
        ("error", Some(_)) => {
            let code = name.strip_prefix(&config.error_prefix()).unwrap_or_default();
            AttributeKind::Error {
                code: code.to_owned(),
            }
        }
        ("model", _) => AttributeKind::Model,
        ("poll", _) => AttributeKind::Poll { argument: None },
        (category, _) if category.starts_with("poll-") => AttributeKind::Poll {
            argument: category
                .split('-')
                .nth(1)
                .map(str::to_owned),
        },
        ("key", None) => AttributeKind::Key,
        ("pk", None) => AttributeKind::PrimaryKey,
        ("value", None) => AttributeKind::Value,
        ("checksum", None) => AttributeKind::Checksum,
        (category, None) if RESERVED.contains(&category) => AttributeKind::Marker,
        _ => AttributeKind::Action {
            event_type: head.clone(),
        },
    };

    (kind, modifiers)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn decode_name(name: &str) -> DecodedAttribute {
        decode(&RawAttribute::new(name, "v"), &BindingConfig::default())
    }

    // ── Classification ───────────────────────────────────────────────

    #[test]
    fn foreign_attributes_are_inert() {
        for name in ["class", "type", "unicornish", "data-unicorn:model", "u:model"] {
            let attr = decode_name(name);
            assert_eq!(attr.kind, AttributeKind::Foreign, "{name}");
            assert!(!attr.is_unicorn());
            assert!(attr.event_type().is_none());
            assert_eq!(attr.modifiers, Modifiers::default());
        }
    }

    #[test]
    fn bare_namespace_is_marker() {
        let attr = decode_name("unicorn");
        assert_eq!(attr.kind, AttributeKind::Marker);
        assert!(attr.is_unicorn());
    }

    #[test]
    fn reserved_names_are_markers() {
        for name in ["unicorn:", "unicorn:id", "unicorn:name"] {
            let attr = decode_name(name);
            assert_eq!(attr.kind, AttributeKind::Marker, "{name}");
            assert!(attr.event_type().is_none());
        }
    }

    #[test]
    fn model() {
        let attr = decode_name("unicorn:model");
        assert!(attr.is_unicorn());
        assert!(attr.is_model());
        assert!(attr.event_type().is_none());
    }

    #[test]
    fn model_with_modifiers() {
        let attr = decode_name("unicorn:model.lazy.defer.debounce-250");
        assert!(attr.is_model());
        assert_eq!(
            attr.modifiers,
            Modifiers {
                lazy: true,
                defer: true,
                debounce: Some(ModifierArg::Value("250".into())),
                key_filter: Some("debounce".into()),
                ..Modifiers::default()
            }
        );
    }

    #[test]
    fn poll_plain_and_timed() {
        assert_eq!(decode_name("unicorn:poll").kind, AttributeKind::Poll { argument: None });
        assert_eq!(
            decode_name("unicorn:poll-5000").kind,
            AttributeKind::Poll {
                argument: Some("5000".into())
            }
        );
        assert_eq!(
            decode_name("unicorn:poll-abc").kind,
            AttributeKind::Poll {
                argument: Some("abc".into())
            }
        );
    }

    #[test]
    fn poll_argument_stops_at_next_dash() {
        assert_eq!(
            decode_name("unicorn:poll-1000-30").kind,
            AttributeKind::Poll {
                argument: Some("1000".into())
            }
        );
    }

    #[test]
    fn singleton_kinds() {
        assert!(decode_name("unicorn:key").is_key());
        assert!(decode_name("unicorn:pk").is_pk());
        assert!(decode_name("unicorn:value").is_value());
        assert_eq!(decode_name("unicorn:checksum").kind, AttributeKind::Checksum);
    }

    #[test]
    fn error_code_kept_verbatim() {
        let attr = decode_name("unicorn:error:required");
        assert!(attr.is_error());
        assert_eq!(
            attr.kind,
            AttributeKind::Error {
                code: "required".into()
            }
        );

        let attr = decode_name("unicorn:error:max.length");
        assert_eq!(
            attr.kind,
            AttributeKind::Error {
                code: "max.length".into()
            }
        );
    }

    #[test]
    fn error_without_code_is_the_error_event() {
        assert_eq!(decode_name("unicorn:error").event_type(), Some("error"));
    }

    #[test]
    fn action_event_types() {
        assert_eq!(decode_name("unicorn:click").event_type(), Some("click"));
        assert_eq!(decode_name("unicorn:submit.prevent").event_type(), Some("submit"));
        assert_eq!(decode_name("unicorn:my-event").event_type(), Some("my-event"));
    }

    #[test]
    fn action_flags_are_exclusive() {
        let attr = decode_name("unicorn:click");
        assert!(!attr.is_model());
        assert!(!attr.is_poll());
        assert!(!attr.is_key());
        assert!(!attr.is_pk());
        assert!(!attr.is_value());
        assert!(!attr.is_error());
    }

    // ── Modifiers ────────────────────────────────────────────────────

    #[test]
    fn prevent_and_stop() {
        let attr = decode_name("unicorn:click.prevent.stop");
        assert!(attr.modifiers.prevent);
        assert!(attr.modifiers.stop);
        assert!(attr.modifiers.key_filter.is_none());
    }

    #[test]
    fn residual_modifier_is_key_filter() {
        let attr = decode_name("unicorn:keyup.enter");
        assert_eq!(attr.modifiers.key_filter.as_deref(), Some("enter"));
    }

    #[test]
    fn last_residual_modifier_wins() {
        let attr = decode_name("unicorn:keydown.shift.enter.prevent");
        assert_eq!(attr.modifiers.key_filter.as_deref(), Some("enter"));
        assert!(attr.modifiers.prevent);
    }

    #[test]
    fn binding_words_also_fill_key_filter() {
        let attr = decode_name("unicorn:keydown.enter.defer");
        assert!(attr.modifiers.defer);
        assert_eq!(attr.modifiers.key_filter.as_deref(), Some("defer"));

        let attr = decode_name("unicorn:keyup.debounce-300.stop");
        assert_eq!(attr.modifiers.debounce, Some(ModifierArg::Value("300".into())));
        assert_eq!(attr.modifiers.key_filter.as_deref(), Some("debounce"));
    }

    #[test]
    fn duplicate_modifier_keeps_first_position_last_value() {
        let attr = decode_name("unicorn:model.debounce-100.lazy.debounce-300");
        assert_eq!(attr.modifiers.debounce, Some(ModifierArg::Value("300".into())));

        // `a` stays before `b`, so `b` is the last residual.
        let attr = decode_name("unicorn:keyup.a.b.a");
        assert_eq!(attr.modifiers.key_filter.as_deref(), Some("b"));
    }

    #[test]
    fn bare_debounce_is_flag() {
        let attr = decode_name("unicorn:model.debounce");
        assert_eq!(attr.modifiers.debounce, Some(ModifierArg::Flag));
    }

    #[test]
    fn empty_modifier_segments_ignored() {
        let attr = decode_name("unicorn:click..prevent.");
        assert_eq!(attr.event_type(), Some("click"));
        assert!(attr.modifiers.prevent);
        assert!(attr.modifiers.key_filter.is_none());
    }

    #[test]
    fn passthrough_name_and_value() {
        let raw = RawAttribute {
            name: "unicorn:click".into(),
            value: None,
        };
        let attr = decode(&raw, &BindingConfig::default());
        assert_eq!(attr.name, "unicorn:click");
        assert_eq!(attr.value, None);
        assert_eq!(attr.value_or_empty(), "");
    }

    #[test]
    fn custom_namespace() {
        let config = BindingConfig::new().with_namespace("u");
        let attr = decode(&RawAttribute::new("u:model.lazy", "name"), &config);
        assert!(attr.is_model());
        assert!(attr.modifiers.lazy);

        let attr = decode(&RawAttribute::new("unicorn:model", "name"), &config);
        assert_eq!(attr.kind, AttributeKind::Foreign);

        let attr = decode(&RawAttribute::new("u:error:required", "x"), &config);
        assert_eq!(
            attr.kind,
            AttributeKind::Error {
                code: "required".into()
            }
        );
    }
}
