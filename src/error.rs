//! Programming-error conditions reported by element operations.

/// Errors from building or driving an [`Element`](crate::binding::Element).
///
/// Malformed markup never produces one of these; it decodes to inert
/// attributes or fallback values. These variants report callers breaking a
/// precondition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ElementError {
    /// The pk walk ran out of parents before reaching a component boundary.
    #[error("model element {id:?} is not inside a component boundary")]
    NoComponentBoundary { id: Option<String> },
    /// The pk walk visited more ancestors than the configured limit.
    #[error("no component boundary within {depth} ancestors of element {id:?}")]
    AncestorDepthExceeded { id: Option<String>, depth: usize },
    /// A value was assigned to an element that exposes no control `type`.
    #[error("element {id:?} has no control type; cannot set its value")]
    UntypedControl { id: Option<String> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let err = ElementError::NoComponentBoundary {
            id: Some("name".into()),
        };
        assert_eq!(
            err.to_string(),
            "model element Some(\"name\") is not inside a component boundary"
        );

        let err = ElementError::AncestorDepthExceeded { id: None, depth: 3 };
        assert_eq!(
            err.to_string(),
            "no component boundary within 3 ancestors of element None"
        );

        let err = ElementError::UntypedControl { id: None };
        assert!(err.to_string().contains("no control type"));
    }
}
