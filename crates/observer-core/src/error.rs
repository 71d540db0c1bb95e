//! Error types for model queries, sampling, and sweeps.

/// Result type for observer-core operations.
pub type Result<T> = std::result::Result<T, ObserverError>;

/// Errors surfaced synchronously to the immediate caller.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ObserverError {
    /// A caller-supplied parameter is outside its domain.
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// A swept scale value of exactly zero (amplitude would be 1/0).
    #[error("scale value at index {index} is zero; amplitude 1/λ is undefined")]
    ZeroScaleValue { index: usize },

    /// Model state outside its physically interpretable range.
    #[error("`{name}` = {value} is outside the physical range {range}")]
    OutOfRangeState {
        name: &'static str,
        value: f64,
        range: &'static str,
    },
}

impl ObserverError {
    pub(crate) fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidParameter {
            name,
            value,
            reason,
        }
    }

    pub(crate) fn out_of_range(name: &'static str, value: f64, range: &'static str) -> Self {
        Self::OutOfRangeState { name, value, range }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_value() {
        let err = ObserverError::invalid("sample_count", 0.0, "must be > 0");
        assert_eq!(
            err.to_string(),
            "invalid parameter `sample_count` = 0: must be > 0"
        );

        let err = ObserverError::ZeroScaleValue { index: 3 };
        assert!(err.to_string().contains("index 3"));

        let err = ObserverError::out_of_range("error_probability", 1.5, "[0, 1]");
        assert!(err.to_string().contains("1.5"));
        assert!(err.to_string().contains("[0, 1]"));
    }
}
