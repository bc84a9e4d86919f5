//! Shared error classification.
//!
//! Each concern keeps its own error enum next to the code that raises it
//! (`ActionError` in [`crate::action`], `SetupError` in [`crate::state`]).
//! They all implement [`GameError`] so callers can log and triage failures
//! without matching on every variant.

/// How bad a failure is for the battle in progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// The turn is lost, play continues.
    ///
    /// Examples: attacking a defeated character
    Recoverable,

    /// The request itself is wrong and will fail again unchanged.
    ///
    /// Examples: unknown character id, attacking an ally, moving off the board
    Validation,

    /// State the rules should never produce.
    Internal,

    /// The battle cannot start or go on.
    ///
    /// Examples: unknown character type, unknown win condition
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// True for failures that only cost a single turn.
    pub const fn is_turn_local(&self) -> bool {
        matches!(self, Self::Recoverable | Self::Validation)
    }
}

impl core::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification implemented by every error enum of the workspace.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Stable identifier of the variant, e.g. `ACTION_DEAD_CHARACTER`.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
