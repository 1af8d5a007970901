//! # Domain Invariants
//!
//! Structural invariants of the shipment store, checked at runtime by tests
//! and debug tooling:
//!
//! - INVARIANT-1: Dense identifiers — stored ids are exactly {1, …, N}.
//! - INVARIANT-2: Counter consistency — `last_assigned_id` equals the record
//!   count and the highest stored id.
//! - INVARIANT-3: Custody immutability — between two snapshots of the same
//!   ledger, no surviving record changed its shipper, receiver, or status.

use crate::domain::ledger::ShipmentLedger;

// =============================================================================
// INVARIANT CHECKS
// =============================================================================

/// INVARIANT-1: Dense identifiers.
///
/// The stored ids are exactly {1, 2, …, N} with no gaps or repeats.
#[must_use]
pub fn check_dense_ids_invariant(ledger: &ShipmentLedger) -> bool {
    ledger
        .iter()
        .zip(1u64..)
        .all(|(shipment, expected)| shipment.id.get() == expected)
}

/// INVARIANT-2: Counter consistency.
///
/// The counter equals both the record count and the highest stored id, so the
/// ledger can never report an id it does not hold nor hold one it never
/// assigned.
#[must_use]
pub fn check_counter_invariant(ledger: &ShipmentLedger) -> bool {
    let count = ledger.len() as u64;
    let highest = ledger.iter().last().map_or(0, |s| s.id.get());
    ledger.last_assigned_id() == count && highest == count
}

/// INVARIANT-3: Custody immutability.
///
/// `earlier` must be a snapshot of the same ledger taken before `later`.
/// Every record present in the earlier snapshot still exists and kept its
/// shipper, receiver, and status; only `location` may differ.
#[must_use]
pub fn check_custody_invariant(earlier: &ShipmentLedger, later: &ShipmentLedger) -> bool {
    earlier.iter().all(|old| match later.get_shipment(old.id) {
        Ok(view) => {
            view.shipper == old.shipper
                && view.receiver == old.receiver
                && view.status == old.status
        }
        Err(_) => false,
    })
}

/// Check all single-snapshot invariants at once.
#[must_use]
pub fn check_all_invariants(ledger: &ShipmentLedger) -> InvariantCheckResult {
    let mut violations = Vec::new();

    if !check_dense_ids_invariant(ledger) {
        violations.push(InvariantViolation::SparseIds);
    }

    if !check_counter_invariant(ledger) {
        violations.push(InvariantViolation::CounterMismatch {
            counter: ledger.last_assigned_id(),
            records: ledger.len(),
        });
    }

    InvariantCheckResult { violations }
}

// =============================================================================
// VIOLATION REPORT
// =============================================================================

/// Result of an invariant sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantCheckResult {
    /// Violations found; empty means the store is sound.
    pub violations: Vec<InvariantViolation>,
}

impl InvariantCheckResult {
    /// Returns true if no invariant was violated.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.violations.is_empty()
    }
}

/// A specific invariant violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    /// Stored ids are not the dense range {1, …, N}.
    SparseIds,
    /// Counter disagrees with the record count or the highest id.
    CounterMismatch {
        /// Last-assigned counter value.
        counter: u64,
        /// Number of stored records.
        records: usize,
    },
}

// =============================================================================
// TESTS
// =============================================================================
