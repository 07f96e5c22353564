//! Common error infrastructure for raid-core.
//!
//! Operation-specific errors (`RaidError`, `TrainError`, `UnitParseError`)
//! live next to the operations that produce them. They are all expected,
//! caller-facing results: none of them unwinds past the engine boundary and
//! none is ever returned alongside a partially mutated snapshot.

/// Severity level of an error, used by callers to pick a recovery strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// The same request may succeed later (cooldown expires, energy refills).
    Recoverable,

    /// The request itself is invalid and must change before retrying.
    ///
    /// Examples: unknown unit type, unit limit reached
    Validation,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
        }
    }

    /// Returns true if waiting alone can make the request succeed.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all raid-core errors.
///
/// Gives callers a uniform way to classify failures and map them to
/// user-facing messages or status codes without matching every variant.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a stable identifier for this error variant.
    ///
    /// Codes are snake_case and never change once published, so they are safe
    /// to use in logs, metrics and client-side lookups.
    fn error_code(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_labels() {
        assert_eq!(ErrorSeverity::Recoverable.as_str(), "recoverable");
        assert_eq!(ErrorSeverity::Validation.as_str(), "validation");
        assert!(ErrorSeverity::Recoverable.is_recoverable());
        assert!(!ErrorSeverity::Validation.is_recoverable());
    }
}
