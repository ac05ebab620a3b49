//! Status engine errors.

use crate::error::{CombatError, ErrorSeverity};
use crate::state::{ParticipantError, ParticipantId};

use super::StatusEffectKind;

/// Errors raised while applying or ticking status effects.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StatusError {
    /// Duration must be at least one turn.
    #[error("{kind} on {holder} rejected: duration must be positive")]
    ZeroDuration {
        holder: ParticipantId,
        kind: StatusEffectKind,
    },

    /// Potency must be at least one.
    #[error("{kind} on {holder} rejected: potency must be positive")]
    ZeroPotency {
        holder: ParticipantId,
        kind: StatusEffectKind,
    },

    /// No template is registered for the kind.
    #[error("no template registered for {0}")]
    TemplateNotFound(StatusEffectKind),

    /// The holder refused the tick's damage or healing.
    #[error("{kind} tick on {holder} failed: {source}")]
    TickFailed {
        holder: ParticipantId,
        kind: StatusEffectKind,
        #[source]
        source: ParticipantError,
    },
}

impl CombatError for StatusError {
    fn severity(&self) -> ErrorSeverity {
        use StatusError::*;
        match self {
            ZeroDuration { .. } | ZeroPotency { .. } => ErrorSeverity::Validation,
            TemplateNotFound(_) => ErrorSeverity::Recoverable,
            TickFailed { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        use StatusError::*;
        match self {
            ZeroDuration { .. } => "STATUS_ZERO_DURATION",
            ZeroPotency { .. } => "STATUS_ZERO_POTENCY",
            TemplateNotFound(_) => "STATUS_TEMPLATE_NOT_FOUND",
            TickFailed { .. } => "STATUS_TICK_FAILED",
        }
    }
}
