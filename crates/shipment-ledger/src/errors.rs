//! # Error Types
//!
//! All error types for the shipment ledger.
//!
//! The ledger proper produces exactly two errors, each carrying the wire code
//! the surrounding dispatcher reports to callers: `u100` for an unknown
//! shipment and `u101` for an unauthorized mutation. Validation of inbound
//! text and dispatcher-boundary failures are separate classes and never leak
//! into that two-code surface.

use crate::domain::value_objects::{Principal, ShipmentId};
use thiserror::Error;

// =============================================================================
// LEDGER ERRORS
// =============================================================================

/// Errors produced by the ledger's three operations.
///
/// Both variants are recoverable by the caller and leave the store unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// The referenced shipment id was never assigned.
    #[error("shipment not found: {0}")]
    ShipmentNotFound(ShipmentId),

    /// The caller is not the shipper that created the record.
    #[error("caller {caller} is not the shipper of shipment {id}")]
    UnauthorizedCaller {
        /// Shipment the caller tried to mutate.
        id: ShipmentId,
        /// Identity that attempted the mutation.
        caller: Principal,
    },
}

impl LedgerError {
    /// Wire code for an unknown shipment.
    pub const CODE_NOT_FOUND: u32 = 100;

    /// Wire code for an unauthorized mutation attempt.
    pub const CODE_UNAUTHORIZED: u32 = 101;

    /// Returns the numeric code reported across the dispatcher boundary.
    #[must_use]
    pub const fn code(&self) -> u32 {
        match self {
            Self::ShipmentNotFound(_) => Self::CODE_NOT_FOUND,
            Self::UnauthorizedCaller { .. } => Self::CODE_UNAUTHORIZED,
        }
    }
}

// =============================================================================
// LOCATION VALIDATION ERRORS
// =============================================================================

/// Errors from validating inbound location text.
///
/// Raised at `Location` construction, before any ledger call. By design this
/// class carries no wire code: the ledger only ever sees already-validated
/// locations, so its own error surface stays at exactly two codes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LocationError {
    /// The text exceeds the storage bound.
    #[error("location too long: {len} > {max} characters")]
    TooLong {
        /// Length of the rejected input.
        len: usize,
        /// Maximum accepted length.
        max: usize,
    },

    /// The text contains characters outside printable ASCII.
    #[error("location contains non-printable or non-ASCII characters")]
    NotPrintableAscii,
}

// =============================================================================
// DISPATCH ERRORS
// =============================================================================

/// Errors at the dispatcher boundary, before an operation reaches the ledger.
///
/// Unknown operation names never get this far: the typed request enum rejects
/// them at deserialization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// A mutating operation arrived without an authenticated caller.
    #[error("missing caller identity for mutating operation {operation}")]
    MissingCaller {
        /// Operation that required a caller.
        operation: &'static str,
    },

    /// The location argument failed validation.
    #[error("invalid location: {0}")]
    InvalidLocation(#[from] LocationError),
}

// =============================================================================
// TESTS
// =============================================================================
