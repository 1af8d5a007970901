//! # Value Objects
//!
//! Immutable domain primitives for the shipment ledger.
//! These types represent concepts that are defined by their value, not identity.

use crate::errors::LocationError;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// PRINCIPAL (caller identity)
// =============================================================================

/// An opaque caller identity, as handed to us by the surrounding dispatcher.
///
/// Equality is the entire semantics: the ledger only ever compares a caller
/// against a stored shipper. The ledger never mints, derives, or validates
/// principals itself.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Principal(String);

impl Principal {
    /// Creates a principal from its textual form.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the textual form of the principal.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Principal({})", self.0)
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Principal {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

// =============================================================================
// SHIPMENT ID
// =============================================================================

/// Primary key of a shipment record.
///
/// Ids are allocated by the ledger alone, densely, starting at 1. Callers
/// construct `ShipmentId` values only to look records up; an id the ledger
/// never assigned (including 0) simply resolves to not-found.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ShipmentId(u64);

impl ShipmentId {
    /// Creates a shipment id from its raw value.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw id value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for ShipmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ShipmentId({})", self.0)
    }
}

impl fmt::Display for ShipmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ShipmentId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

// =============================================================================
// LOCATION
// =============================================================================

/// A bounded free-form description of a shipment's current whereabouts.
///
/// At most [`Location::MAX_LEN`] printable ASCII characters. The bound is
/// enforced at construction: oversized or non-printable input is a distinct
/// validation error at this boundary, never silently truncated. Validated
/// locations are the only ones the ledger ever stores, which is why the
/// ledger's own error surface stays at exactly two codes.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Location(String);

impl Location {
    /// Maximum length of a location, in characters.
    pub const MAX_LEN: usize = 32;

    /// Creates a validated location.
    ///
    /// # Errors
    ///
    /// Returns [`LocationError::TooLong`] if the text exceeds [`Self::MAX_LEN`]
    /// characters, or [`LocationError::NotPrintableAscii`] if it contains
    /// anything outside the printable ASCII range.
    pub fn new(value: impl Into<String>) -> Result<Self, LocationError> {
        let value = value.into();
        if value.len() > Self::MAX_LEN {
            return Err(LocationError::TooLong {
                len: value.len(),
                max: Self::MAX_LEN,
            });
        }
        if !value.bytes().all(|b| (0x20..=0x7E).contains(&b)) {
            return Err(LocationError::NotPrintableAscii);
        }
        Ok(Self(value))
    }

    /// Returns the location text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Location({:?})", self.0)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Location {
    type Error = LocationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Location> for String {
    fn from(location: Location) -> Self {
        location.0
    }
}

// =============================================================================
// SHIPMENT STATUS
// =============================================================================

/// Lifecycle status of a shipment.
///
/// Creation produces `InTransit` and no public operation transitions away
/// from it, so the status machine is single-state. Kept as an enum so the
/// wire rendering ("In Transit") has exactly one source of truth.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShipmentStatus {
    /// The shipment is underway. The only reachable status.
    #[default]
    #[serde(rename = "In Transit")]
    InTransit,
}

impl ShipmentStatus {
    /// Returns the canonical textual rendering.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InTransit => "In Transit",
        }
    }
}

impl fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// TESTS
// =============================================================================
