//! Common error infrastructure for combat-core.
//!
//! This module provides shared types and traits used across all error types in combat-core.
//! Subsystem-specific errors (e.g., `ResolveError`, `BossError`) are defined in their
//! respective modules alongside the operations that produce them.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each subsystem has its own error type with specific variants
//! - **Severity Classification**: Errors are categorized so callers can pick a log level
//! - **Contained**: No error produced here is allowed to abort the caller's turn loop

/// Severity level of an error, used for categorization and logging.
///
/// Errors are classified by how the caller is expected to handle them:
/// - **Validation**: Invalid input (zero duration, empty identifier, defeated target)
/// - **Recoverable**: A missing resource (unknown boss, unknown ability, not enough mana)
/// - **Internal**: Unexpected state inconsistency, healed in place where possible
/// - **Fatal**: A required provider is missing entirely
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Missing resource - the same call may succeed once the resource exists.
    ///
    /// Examples: insufficient mana, unknown boss identifier
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: zero-turn status effect, empty boss identifier
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// These indicate bugs and should be investigated.
    Internal,

    /// Fatal error - the engine cannot produce a meaningful result.
    ///
    /// Examples: required provider not supplied
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

impl core::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Common trait for all combat-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait CombatError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// This is useful for error categorization and testing.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Emits a log record for `err` at the level matching its severity.
///
/// Every public boundary that swallows an error routes it through here so the
/// log level stays consistent with the error taxonomy.
pub fn log_contained<E: CombatError>(operation: &str, err: &E) {
    match err.severity() {
        ErrorSeverity::Validation | ErrorSeverity::Recoverable => tracing::warn!(
            operation,
            code = err.error_code(),
            severity = %err.severity(),
            "{}",
            err
        ),
        ErrorSeverity::Internal | ErrorSeverity::Fatal => tracing::error!(
            operation,
            code = err.error_code(),
            severity = %err.severity(),
            "{}",
            err
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_classification() {
        assert!(ErrorSeverity::Recoverable.is_recoverable());
        assert!(!ErrorSeverity::Validation.is_recoverable());
        assert!(ErrorSeverity::Internal.is_internal());
        assert!(ErrorSeverity::Fatal.is_internal());
        assert_eq!(ErrorSeverity::Validation.to_string(), "validation");
    }
}
