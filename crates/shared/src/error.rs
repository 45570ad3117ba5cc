//! Money error types.

use thiserror::Error;

/// Result type alias using `MoneyError`.
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Errors raised by currency and money operations.
///
/// Every failure is local to the call that raised it; no operation leaves
/// partial results behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// Malformed constructor or method input.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Two amounts in different currencies were combined.
    #[error("Currency mismatch: expected {expected}, found {found}")]
    CurrencyMismatch {
        /// Currency code of the left-hand operand.
        expected: String,
        /// Currency code of the right-hand operand.
        found: String,
    },

    /// An operand was not of the expected value type.
    ///
    /// The typed API rules this out at compile time; the variant exists for
    /// callers bridging dynamically typed input into the money types.
    #[error("Type mismatch: {0}")]
    TypeMismatch(String),

    /// A result does not fit in 64-bit minor units.
    #[error("Arithmetic overflow: {0}")]
    Overflow(String),
}

impl MoneyError {
    /// Shorthand for [`MoneyError::InvalidArgument`].
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Shorthand for [`MoneyError::Overflow`].
    pub fn overflow(msg: impl Into<String>) -> Self {
        Self::Overflow(msg.into())
    }

    /// Returns a stable machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "INVALID_ARGUMENT",
            Self::CurrencyMismatch { .. } => "CURRENCY_MISMATCH",
            Self::TypeMismatch(_) => "TYPE_MISMATCH",
            Self::Overflow(_) => "ARITHMETIC_OVERFLOW",
        }
    }

    /// Returns true if the error was caused by caller input rather than by
    /// the magnitude of the numbers involved.
    #[must_use]
    pub const fn is_argument_error(&self) -> bool {
        matches!(self, Self::InvalidArgument(_) | Self::TypeMismatch(_))
    }
}
