//! # Driving Ports (API - Inbound)
//!
//! The interface the shipment ledger exposes to the surrounding
//! transaction/query dispatcher. Mutating calls take an explicit,
//! already-authenticated caller identity; reads take none because read
//! access is unrestricted.

use crate::domain::entities::ShipmentView;
use crate::domain::value_objects::{Location, Principal, ShipmentId};
use crate::errors::LedgerError;
use async_trait::async_trait;

// =============================================================================
// CREATE RECEIPT
// =============================================================================

/// Receipt for a successful create call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreatedShipment {
    /// The id the ledger assigned.
    pub id: ShipmentId,
    /// Fixed confirmation message for the dispatcher.
    pub confirmation: &'static str,
}

// =============================================================================
// SHIPMENT LEDGER API (Primary Driving Port)
// =============================================================================

/// Primary API of the shipment ledger.
///
/// Each call executes as an atomic unit: the implementation serializes
/// operations so no interleaving is observable, and a failed call commits
/// nothing.
#[async_trait]
pub trait ShipmentLedgerApi: Send + Sync {
    /// Create a new shipment owned by `caller`.
    ///
    /// Always succeeds for validated inputs; the ledger allocates the next
    /// dense identifier and stores the record with status "In Transit".
    async fn create_new_shipment(
        &self,
        location: Location,
        receiver: Principal,
        caller: Principal,
    ) -> CreatedShipment;

    /// Overwrite the location of shipment `id`.
    ///
    /// # Errors
    ///
    /// * [`LedgerError::ShipmentNotFound`] (100) if `id` was never assigned —
    ///   checked first, regardless of caller.
    /// * [`LedgerError::UnauthorizedCaller`] (101) if `caller` is not the
    ///   shipment's shipper.
    async fn update_shipment(
        &self,
        id: ShipmentId,
        new_location: Location,
        caller: Principal,
    ) -> Result<&'static str, LedgerError>;

    /// Read shipment `id`. Any caller, no side effects.
    ///
    /// # Errors
    ///
    /// * [`LedgerError::ShipmentNotFound`] (100) if `id` was never assigned.
    async fn get_shipment(&self, id: ShipmentId) -> Result<ShipmentView, LedgerError>;
}
