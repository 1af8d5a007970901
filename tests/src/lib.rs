//! # Shipment Ledger Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── flows.rs    # End-to-end dispatcher scenarios
//!     └── model.rs    # Model-based command suite (proptest)
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p ledger-tests
//!
//! # By category
//! cargo test -p ledger-tests integration::flows::
//! cargo test -p ledger-tests integration::model::
//! ```

#![allow(unused_imports)]
#![allow(dead_code)]

use tracing_subscriber::EnvFilter;


/// Initialize a tracing subscriber for debugging test runs.
/// Repeated calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}
