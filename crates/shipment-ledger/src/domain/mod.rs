//! # Domain Layer (Inner Hexagon)
//!
//! Pure business logic for the shipment ledger.
//! NO I/O, NO async, NO external dependencies beyond serde derives.
//!
//! Dependencies point INWARD only: the service and event layers depend on
//! this module, never the other way around. Caller identity is an explicit
//! [`value_objects::Principal`] argument here, never ambient context.

pub mod entities;
pub mod invariants;
pub mod ledger;
pub mod value_objects;

pub use entities::*;
pub use invariants::*;
pub use ledger::*;
pub use value_objects::*;
