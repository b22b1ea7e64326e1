//! Error types for boundary-condition selection.

/// Errors raised when selecting a boundary condition.
///
/// An invalid selection is a configuration defect rather than a transient
/// condition. The library reports it and leaves the active mode untouched; the
/// caller decides whether to abort.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoundaryError {
    /// The integer code does not name any supported boundary condition.
    #[display("Undefined boundary condition.")]
    UndefinedBoundary {
        /// The rejected code.
        code: i32,
    },
    /// The name does not match any supported boundary condition or alias.
    #[display("unknown boundary condition name: {name:?}")]
    UnknownName {
        /// The rejected name.
        name: String,
    },
}

impl BoundaryError {
    /// Returns the rejected integer code, if this error came from a code lookup.
    #[must_use]
    pub fn code(&self) -> Option<i32> {
        match self {
            Self::UndefinedBoundary { code } => Some(*code),
            Self::UnknownName { .. } => None,
        }
    }
}
