//! # Ports Layer (Middle Hexagon)
//!
//! Trait definitions for the shipment ledger.
//!
//! - **Driving Port (Inbound)**: [`inbound::ShipmentLedgerApi`] — what the
//!   surrounding transaction/query dispatcher programs against.
//! - **Driven Ports (Outbound)**: none. The store is exclusively owned by
//!   the ledger; no external component may read or write it directly, so
//!   there is deliberately no storage port to implement elsewhere.

pub mod inbound;

pub use inbound::*;
