//! Binding descriptor parts: model, poll, action and error specs.

use std::fmt;
use std::time::Duration;

/// `debounce_time` value meaning "no debounce configured".
pub const NO_DEBOUNCE: i32 = -1;

// ---------------------------------------------------------------------------
// ModelSpec
// ---------------------------------------------------------------------------

/// DOM event that pushes a bound control's value to the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ModelEvent {
    Input,
    /// `.lazy` bindings sync on blur.
    Blur,
}

impl ModelEvent {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Blur => "blur",
        }
    }
}

impl fmt::Display for ModelEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A two-way binding between a control and a server-side field.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ModelSpec {
    /// Server-side field name (the attribute value).
    pub name: String,
    pub event_type: ModelEvent,
    pub is_lazy: bool,
    pub is_defer: bool,
    /// Milliseconds, or [`NO_DEBOUNCE`].
    pub debounce_time: i32,
    /// Resolved primary key. `None` when the component boundary carries none.
    pub pk: Option<String>,
}

impl ModelSpec {
    /// The debounce interval, if one is configured.
    pub fn debounce(&self) -> Option<Duration> {
        u64::try_from(self.debounce_time)
            .ok()
            .map(Duration::from_millis)
    }
}

// ---------------------------------------------------------------------------
// PollSpec
// ---------------------------------------------------------------------------

/// A recurring server call.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PollSpec {
    pub method: String,
    /// Interval in milliseconds.
    pub timing: u32,
}

impl PollSpec {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.timing))
    }
}

// ---------------------------------------------------------------------------
// ActionSpec
// ---------------------------------------------------------------------------

/// A server call triggered by a DOM event.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ActionSpec {
    /// Handler identifier (the attribute value).
    pub name: String,
    pub event_type: String,
    pub is_prevent: bool,
    pub is_stop: bool,
    /// Keyboard-key filter (`enter`, `escape`, ...).
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub key: Option<String>,
}

impl ActionSpec {
    /// Whether a keyboard event for `key` should fire this action.
    /// Actions without a key filter accept every key.
    pub fn accepts_key(&self, key: &str) -> bool {
        self.key
            .as_deref()
            .is_none_or(|filter| filter.eq_ignore_ascii_case(key))
    }
}

// ---------------------------------------------------------------------------
// ErrorEntry
// ---------------------------------------------------------------------------

/// A validation error displayed on an element.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ErrorEntry {
    pub code: String,
    pub message: String,
}

impl ErrorEntry {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(debounce_time: i32) -> ModelSpec {
        ModelSpec {
            name: "name".into(),
            event_type: ModelEvent::Input,
            is_lazy: false,
            is_defer: false,
            debounce_time,
            pk: None,
        }
    }

    #[test]
    fn model_event_names() {
        assert_eq!(ModelEvent::Input.to_string(), "input");
        assert_eq!(ModelEvent::Blur.as_str(), "blur");
    }

    #[test]
    fn debounce_duration() {
        assert_eq!(model(NO_DEBOUNCE).debounce(), None);
        assert_eq!(model(0).debounce(), Some(Duration::ZERO));
        assert_eq!(model(250).debounce(), Some(Duration::from_millis(250)));
    }

    #[test]
    fn poll_interval() {
        let poll = PollSpec {
            method: "refresh".into(),
            timing: 2000,
        };
        assert_eq!(poll.interval(), Duration::from_secs(2));
    }

    #[test]
    fn action_key_filter() {
        let mut action = ActionSpec {
            name: "search".into(),
            event_type: "keyup".into(),
            is_prevent: false,
            is_stop: false,
            key: None,
        };
        assert!(action.accepts_key("a"));

        action.key = Some("enter".into());
        assert!(action.accepts_key("Enter"));
        assert!(!action.accepts_key("Escape"));
    }
}
