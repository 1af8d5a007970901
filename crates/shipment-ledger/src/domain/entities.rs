//! # Core Domain Entities
//!
//! The shipment record and its read model. The ledger has exactly one
//! persisted entity type; there is no deletion and no secondary indexing.

use crate::domain::value_objects::{Location, Principal, ShipmentId, ShipmentStatus};
use serde::{Deserialize, Serialize};

// =============================================================================
// SHIPMENT
// =============================================================================

/// A shipment record as stored in the ledger.
///
/// `id` and `shipper` are fixed at creation and never change; `location` is
/// the only mutable field, and only via the ledger's update operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shipment {
    /// Ledger-assigned primary key.
    pub id: ShipmentId,
    /// Current whereabouts.
    pub location: Location,
    /// Identity that created the record. Sole party authorized to update it.
    pub shipper: Principal,
    /// Intended recipient. Informational; never authorized to mutate.
    pub receiver: Principal,
    /// Lifecycle status.
    pub status: ShipmentStatus,
}

impl Shipment {
    /// Creates a freshly-originated shipment. Status is always `InTransit`.
    #[must_use]
    pub fn originate(
        id: ShipmentId,
        location: Location,
        shipper: Principal,
        receiver: Principal,
    ) -> Self {
        Self {
            id,
            location,
            shipper,
            receiver,
            status: ShipmentStatus::InTransit,
        }
    }

    /// Returns the read model handed out to arbitrary callers.
    #[must_use]
    pub fn view(&self) -> ShipmentView {
        ShipmentView {
            location: self.location.clone(),
            receiver: self.receiver.clone(),
            shipper: self.shipper.clone(),
            status: self.status,
        }
    }
}

// =============================================================================
// SHIPMENT VIEW (read model)
// =============================================================================

/// The structured record returned by the read operation.
///
/// Field set and ordering mirror the tuple callers observe:
/// `{location, receiver, shipper, status}`. The id is not repeated since the
/// caller supplied it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentView {
    /// Current whereabouts.
    pub location: Location,
    /// Intended recipient.
    pub receiver: Principal,
    /// Originating identity.
    pub shipper: Principal,
    /// Lifecycle status.
    pub status: ShipmentStatus,
}

// =============================================================================
// TESTS
// =============================================================================
