//! Domain error model.

use thiserror::Error;

use crate::id::ProductId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// stock, lookup, status). Infrastructure concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An argument failed validation (price, stock, quantity, name, id).
    #[error("invalid argument: {argument}: {reason}")]
    InvalidArgument {
        argument: &'static str,
        reason: String,
    },

    /// A total was requested for a product with no stock left.
    #[error("product {0} is out of stock")]
    OutOfStock(ProductId),

    /// No product is stored under the requested id.
    #[error("product {0} not found")]
    NotFound(ProductId),

    /// The product exists but is not available for purchase.
    #[error("product {0} is not active")]
    NotActive(ProductId),
}

/// Error category, for callers that branch on the kind rather than the payload.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    OutOfStock,
    NotFound,
    NotActive,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::InvalidArgument => "invalid_argument",
            ErrorKind::OutOfStock => "out_of_stock",
            ErrorKind::NotFound => "not_found",
            ErrorKind::NotActive => "not_active",
        }
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl DomainError {
    pub fn invalid_argument(argument: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument,
            reason: reason.into(),
        }
    }

    pub fn out_of_stock(id: ProductId) -> Self {
        Self::OutOfStock(id)
    }

    pub fn not_found(id: ProductId) -> Self {
        Self::NotFound(id)
    }

    pub fn not_active(id: ProductId) -> Self {
        Self::NotActive(id)
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            DomainError::OutOfStock(_) => ErrorKind::OutOfStock,
            DomainError::NotFound(_) => ErrorKind::NotFound,
            DomainError::NotActive(_) => ErrorKind::NotActive,
        }
    }
}
