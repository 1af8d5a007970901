//! # Dispatcher Payloads
//!
//! Message types exchanged with the surrounding transaction/query dispatcher.
//! The dispatcher supplies an operation, positional arguments, and an
//! authenticated caller identity for mutating calls; it receives a uniform
//! tagged success/failure wrapper back.
//!
//! Location text travels as a raw string here and is validated at the
//! service boundary; only validated values reach the ledger core.

use crate::domain::entities::ShipmentView;
use crate::domain::value_objects::Principal;
use crate::errors::LedgerError;
use serde::{Deserialize, Serialize};

// =============================================================================
// INBOUND REQUESTS (From the Dispatcher)
// =============================================================================

/// Arguments for the create operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateShipmentRequestPayload {
    /// Starting location (raw, validated at the service boundary).
    pub location: String,
    /// Intended recipient.
    pub receiver: Principal,
}

/// Arguments for the update operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateShipmentRequestPayload {
    /// Shipment to update.
    pub id: u64,
    /// New location (raw, validated at the service boundary).
    pub new_location: String,
}

/// Arguments for the read operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetShipmentRequestPayload {
    /// Shipment to look up.
    pub id: u64,
}

/// A dispatched call, tagged by operation name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "operation", content = "args")]
pub enum ShipmentCallRequest {
    /// Create a new shipment owned by the caller.
    #[serde(rename = "create-new-shipment")]
    CreateNewShipment(CreateShipmentRequestPayload),
    /// Overwrite the location of an existing shipment.
    #[serde(rename = "update-shipment")]
    UpdateShipment(UpdateShipmentRequestPayload),
    /// Read a shipment record.
    #[serde(rename = "get-shipment")]
    GetShipment(GetShipmentRequestPayload),
}

impl ShipmentCallRequest {
    /// Operation name as the dispatcher spells it.
    #[must_use]
    pub const fn operation(&self) -> &'static str {
        match self {
            Self::CreateNewShipment(_) => "create-new-shipment",
            Self::UpdateShipment(_) => "update-shipment",
            Self::GetShipment(_) => "get-shipment",
        }
    }

    /// Returns true if the operation mutates ledger state and therefore
    /// requires an authenticated caller.
    #[must_use]
    pub const fn is_mutating(&self) -> bool {
        !matches!(self, Self::GetShipment(_))
    }
}

// =============================================================================
// OUTBOUND RESPONSES (To the Dispatcher)
// =============================================================================

/// Success payload of a call: a confirmation string or a record view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CallValue {
    /// Fixed confirmation message (create, update).
    Confirmation(String),
    /// Structured record (get).
    Record(ShipmentView),
}

/// Uniform tagged result wrapper for every dispatched call.
///
/// The failure arm carries the bare numeric code the dispatcher reports:
/// 100 for an unknown shipment, 101 for an unauthorized mutation. These
/// three operations produce no other codes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "value", rename_all = "lowercase")]
pub enum CallOutcome {
    /// The operation committed (or, for reads, resolved).
    Ok(CallValue),
    /// The operation failed; no state was mutated.
    Err(u32),
}

impl CallOutcome {
    /// Wraps a fixed confirmation message.
    #[must_use]
    pub fn confirmation(message: &str) -> Self {
        Self::Ok(CallValue::Confirmation(message.to_owned()))
    }

    /// Wraps a record view.
    #[must_use]
    pub fn record(view: ShipmentView) -> Self {
        Self::Ok(CallValue::Record(view))
    }

    /// Returns true for the success arm.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns the error code, if this is the failure arm.
    #[must_use]
    pub const fn err_code(&self) -> Option<u32> {
        match self {
            Self::Ok(_) => None,
            Self::Err(code) => Some(*code),
        }
    }
}

impl From<LedgerError> for CallOutcome {
    fn from(err: LedgerError) -> Self {
        Self::Err(err.code())
    }
}

// =============================================================================
// TESTS
// =============================================================================
