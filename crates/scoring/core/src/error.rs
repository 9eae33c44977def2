//! Common error infrastructure for scoring-core.
//!
//! Action-specific errors (`DeliveryError`, `RetirementError`, ...) live next
//! to the actions they validate. This module holds the classification shared
//! by all of them.
//!
//! # Classification
//!
//! - **Validation**: the operator supplied incomplete or contradictory input
//!   (missing fielder, unresolved crease slot, missing replacement). The match
//!   is unchanged and the corrected event may be resubmitted.
//! - **Consistency**: the event references a player who is not in the role it
//!   claims (not at the crease, already dismissed). This points at a caller
//!   defect and the event is refused outright.

/// Class of an error, used to decide how a caller should react.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid or incomplete operator input; resubmit after correcting it.
    Validation,

    /// Event contradicts the current snapshot; indicates a caller defect.
    Consistency,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Consistency => "consistency",
        }
    }

    /// Returns true if the operator can fix the input and try again.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Validation)
    }
}

/// Common trait for all scoring-core errors.
///
/// Provides a uniform interface for error classification across the
/// per-action error enums.
pub trait ScoringError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for log fields and for asserting on errors in tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

impl ScoringError for core::convert::Infallible {
    fn severity(&self) -> ErrorSeverity {
        match *self {}
    }
}
