//! # Shipment Ledger Core
//!
//! The append-and-mutate store of shipment records and the three operations
//! over it. This module is the whole of the system's semantics:
//!
//! - identifier allocation (dense, monotonic, starting at 1),
//! - primary-key storage,
//! - the authorization rule gating mutation (creator-only).
//!
//! The core is pure and synchronous: no logging, no locking, no ambient
//! context. Caller identity arrives as an explicit [`Principal`] argument and
//! sequencing/concurrency is the service layer's concern. Every operation is
//! all-or-nothing: a failed call leaves the store untouched.

use crate::domain::entities::{Shipment, ShipmentView};
use crate::domain::value_objects::{Location, Principal, ShipmentId};
use crate::errors::LedgerError;
use std::collections::BTreeMap;

/// Confirmation message for a successful create.
pub const MSG_SHIPMENT_CREATED: &str = "Shipment created successfully";

/// Confirmation message for a successful update.
pub const MSG_SHIPMENT_UPDATED: &str = "Shipment updated successfully";

// =============================================================================
// LEDGER
// =============================================================================

/// The shipment store: a primary-key map plus the identifier counter.
///
/// The ledger exclusively owns every record; no handle to a stored
/// [`Shipment`] ever escapes mutably. Records are never deleted, so the map
/// only grows and `last_id` equals the map's size at all times.
#[derive(Debug, Default, Clone)]
pub struct ShipmentLedger {
    /// Records keyed by their ledger-assigned id.
    shipments: BTreeMap<ShipmentId, Shipment>,
    /// Last-assigned identifier. 0 means no shipments yet.
    last_id: u64,
}

impl ShipmentLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new shipment owned by `caller`.
    ///
    /// Allocates the next identifier, stores the record with
    /// `shipper = caller` and status `InTransit`, and advances the counter.
    /// The two mutations are a single indivisible step. Never fails: the
    /// location was validated at construction and id space is effectively
    /// unbounded.
    ///
    /// Returns the assigned id.
    pub fn create_new_shipment(
        &mut self,
        location: Location,
        receiver: Principal,
        caller: Principal,
    ) -> ShipmentId {
        let id = ShipmentId::new(self.last_id + 1);
        self.shipments
            .insert(id, Shipment::originate(id, location, caller, receiver));
        self.last_id = id.get();
        id
    }

    /// Overwrites the location of an existing shipment.
    ///
    /// Preconditions, checked in this order:
    ///
    /// 1. the shipment exists — otherwise [`LedgerError::ShipmentNotFound`]
    ///    (code 100), regardless of who is calling;
    /// 2. `caller` equals the stored shipper — otherwise
    ///    [`LedgerError::UnauthorizedCaller`] (code 101).
    ///
    /// On success only `location` changes; id, shipper, receiver, and status
    /// are untouched. On failure the store is byte-for-byte unchanged.
    ///
    /// # Errors
    ///
    /// See preconditions above.
    pub fn update_shipment(
        &mut self,
        id: ShipmentId,
        new_location: Location,
        caller: &Principal,
    ) -> Result<(), LedgerError> {
        let shipment = self
            .shipments
            .get_mut(&id)
            .ok_or(LedgerError::ShipmentNotFound(id))?;
        if shipment.shipper != *caller {
            return Err(LedgerError::UnauthorizedCaller {
                id,
                caller: caller.clone(),
            });
        }
        shipment.location = new_location;
        Ok(())
    }

    /// Returns the full record for `id`. Any caller; no side effects.
    ///
    /// # Errors
    ///
    /// [`LedgerError::ShipmentNotFound`] (code 100) if `id` was never
    /// assigned. An unknown id fails rather than producing a default record.
    pub fn get_shipment(&self, id: ShipmentId) -> Result<ShipmentView, LedgerError> {
        self.shipments
            .get(&id)
            .map(Shipment::view)
            .ok_or(LedgerError::ShipmentNotFound(id))
    }

    /// Last identifier the ledger assigned; 0 if none yet.
    #[must_use]
    pub fn last_assigned_id(&self) -> u64 {
        self.last_id
    }

    /// Number of records in the ledger.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shipments.len()
    }

    /// Returns true if no shipment was ever created.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shipments.is_empty()
    }

    /// Iterates over all stored records in id order. Read-only.
    pub fn iter(&self) -> impl Iterator<Item = &Shipment> {
        self.shipments.values()
    }
}

// =============================================================================
// TESTS
// =============================================================================
