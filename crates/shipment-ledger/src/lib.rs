//! # Shipment Ledger - Custody-Gated Record Store
//!
//! ## Purpose
//!
//! A minimal ledger tracking the lifecycle of shipment records: creation by
//! an originating party, location updates restricted to the original creator,
//! public read access. The whole of the semantics is identifier allocation,
//! primary-key storage, and the authorization rule gating mutation.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | Dense monotonic ids starting at 1, never reused | `domain/ledger.rs` - `create_new_shipment()` |
//! | INVARIANT-2 | Shipper never changes after creation | `domain/ledger.rs` - `update_shipment()` touches location only |
//! | INVARIANT-3 | Only the ledger assigns ids | `domain/ledger.rs` - callers never supply ids on create |
//! | INVARIANT-4 | Unknown ids fail, never default | `domain/ledger.rs` - `get_shipment()` / `update_shipment()` |
//! | INVARIANT-5 | Failed calls mutate nothing | `domain/ledger.rs` - checks precede every write |
//!
//! Runtime sweeps for these live in `domain/invariants.rs`.
//!
//! ## Error Codes
//!
//! | Code | Meaning | Raised By |
//! |------|---------|-----------|
//! | 100 | shipment not found | get, update (existence checked first) |
//! | 101 | caller not authorized | update (after existence) |
//!
//! These are the only codes the three operations produce. Location validation
//! and dispatcher-boundary failures are separate error classes and never
//! enter the code space.
//!
//! ## Usage Example
//!
//! ```ignore
//! use shipment_ledger::prelude::*;
//!
//! let service = ShipmentLedgerService::new(ServiceConfig::default());
//! let receipt = service
//!     .create_new_shipment(Location::new("Denver")?, receiver, shipper)
//!     .await;
//! let view = service.get_shipment(receipt.id).await?;
//! assert_eq!(view.status.as_str(), "In Transit");
//! ```

// Crate-level lints
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// =============================================================================
// MODULES
// =============================================================================

pub mod domain;
pub mod errors;
pub mod events;
pub mod ports;
pub mod service;

// =============================================================================
// PRELUDE
// =============================================================================

/// Convenient re-exports for common usage.
pub mod prelude {
    // Domain entities
    pub use crate::domain::entities::{Shipment, ShipmentView};

    // Value objects
    pub use crate::domain::value_objects::{Location, Principal, ShipmentId, ShipmentStatus};

    // The ledger core
    pub use crate::domain::ledger::{
        ShipmentLedger, MSG_SHIPMENT_CREATED, MSG_SHIPMENT_UPDATED,
    };

    // Invariants
    pub use crate::domain::invariants::{
        check_all_invariants, check_counter_invariant, check_custody_invariant,
        check_dense_ids_invariant, InvariantCheckResult, InvariantViolation,
    };

    // Ports
    pub use crate::ports::inbound::{CreatedShipment, ShipmentLedgerApi};

    // Events
    pub use crate::events::{
        CallOutcome, CallValue, CreateShipmentRequestPayload, GetShipmentRequestPayload,
        ShipmentCallRequest, UpdateShipmentRequestPayload,
    };

    // Errors
    pub use crate::errors::{DispatchError, LedgerError, LocationError};

    // Service
    pub use crate::service::{
        create_test_service, ServiceConfig, ServiceStats, ShipmentLedgerService,
    };
}

// =============================================================================
// CRATE INFO
// =============================================================================

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// TESTS
// =============================================================================
