//! Binding configuration: attribute namespace and fallback values.

/// Default recurring-call method when a poll directive names none.
pub const DEFAULT_REFRESH_METHOD: &str = "refresh";

/// Default poll interval in milliseconds.
pub const DEFAULT_POLL_TIMING_MS: u32 = 2000;

/// Default limit on ancestors visited while resolving a model's pk.
pub const DEFAULT_MAX_ANCESTOR_DEPTH: usize = 512;

// ---------------------------------------------------------------------------
// BindingConfig
// ---------------------------------------------------------------------------

/// Configuration for attribute decoding and descriptor building.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingConfig {
    /// Attribute namespace, without the trailing colon (`unicorn`).
    pub namespace: String,
    /// Method used by poll directives with an empty value.
    pub refresh_method: String,
    /// Poll interval used when the directive has no (numeric) timing.
    pub poll_timing_ms: u32,
    /// Maximum number of ancestors the pk walk may visit.
    pub max_ancestor_depth: usize,
}

impl Default for BindingConfig {
    fn default() -> Self {
        Self {
            namespace: "unicorn".to_owned(),
            refresh_method: DEFAULT_REFRESH_METHOD.to_owned(),
            poll_timing_ms: DEFAULT_POLL_TIMING_MS,
            max_ancestor_depth: DEFAULT_MAX_ANCESTOR_DEPTH,
        }
    }
}

impl BindingConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the attribute namespace (builder).
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Set the default poll method (builder).
    pub fn with_refresh_method(mut self, method: impl Into<String>) -> Self {
        self.refresh_method = method.into();
        self
    }

    /// Set the default poll interval (builder).
    pub fn with_poll_timing_ms(mut self, timing: u32) -> Self {
        self.poll_timing_ms = timing;
        self
    }

    /// Set the pk walk depth limit (builder).
    pub fn with_max_ancestor_depth(mut self, depth: usize) -> Self {
        self.max_ancestor_depth = depth;
        self
    }

    /// `<ns>:<suffix>`.
    pub fn attribute_name(&self, suffix: &str) -> String {
        format!("{}:{suffix}", self.namespace)
    }

    /// The ancestor attribute carrying an inherited primary key.
    pub fn pk_attribute(&self) -> String {
        self.attribute_name("pk")
    }

    /// The attribute marking a component boundary.
    pub fn checksum_attribute(&self) -> String {
        self.attribute_name("checksum")
    }

    /// Prefix of error attributes (`<ns>:error:`).
    pub fn error_prefix(&self) -> String {
        self.attribute_name("error:")
    }
}
