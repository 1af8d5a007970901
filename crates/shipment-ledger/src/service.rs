//! # Shipment Ledger Service
//!
//! Async wrapper around the pure ledger core. This is the layer the
//! surrounding transaction/query dispatcher talks to:
//!
//! - serializes operations through a write lock, giving the sequential
//!   transaction-processing model (no interleaving within an operation, no
//!   partial visibility of create's counter-advance versus its insert),
//! - validates inbound location text before anything reaches the core,
//! - translates core results into the uniform [`CallOutcome`] wire wrapper,
//! - keeps per-operation statistics and emits tracing events. The core
//!   itself never logs.

use crate::domain::entities::ShipmentView;
use crate::domain::ledger::{ShipmentLedger, MSG_SHIPMENT_CREATED, MSG_SHIPMENT_UPDATED};
use crate::domain::value_objects::{Location, Principal, ShipmentId};
use crate::errors::{DispatchError, LedgerError, LocationError};
use crate::events::{CallOutcome, ShipmentCallRequest};
use crate::ports::inbound::{CreatedShipment, ShipmentLedgerApi};

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

// =============================================================================
// CONFIGURATION
// =============================================================================

/// Shipment Ledger Service configuration.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Upper bound accepted for location text at the dispatch boundary.
    /// Effective bound is never above the storage bound
    /// [`Location::MAX_LEN`]; a deployment may only tighten it.
    pub max_location_len: usize,
    /// Emit debug events for read calls as well as mutations.
    pub trace_reads: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            max_location_len: Location::MAX_LEN,
            trace_reads: false,
        }
    }
}

// =============================================================================
// STATISTICS
// =============================================================================

/// Statistics for the Shipment Ledger Service.
#[derive(Debug, Default, Clone)]
pub struct ServiceStats {
    /// Shipments created.
    pub shipments_created: u64,
    /// Location updates applied.
    pub locations_updated: u64,
    /// Read calls served (successful or not).
    pub reads_served: u64,
    /// Calls that failed with code 100 (unknown shipment).
    pub not_found_errors: u64,
    /// Update attempts rejected with code 101 (foreign caller).
    pub unauthorized_errors: u64,
}

// =============================================================================
// SERVICE
// =============================================================================

/// The main Shipment Ledger Service.
///
/// Owns the ledger core for the process lifetime. Created once at
/// initialization, mutated only through the three operations, never reset.
pub struct ShipmentLedgerService {
    /// Service configuration.
    config: ServiceConfig,
    /// The ledger core. The write lock totally orders mutations.
    ledger: Arc<RwLock<ShipmentLedger>>,
    /// Service statistics.
    stats: Arc<RwLock<ServiceStats>>,
}

impl ShipmentLedgerService {
    /// Create a new service around an empty ledger.
    #[must_use]
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            config,
            ledger: Arc::new(RwLock::new(ShipmentLedger::new())),
            stats: Arc::new(RwLock::new(ServiceStats::default())),
        }
    }

    /// Get current service statistics.
    pub async fn stats(&self) -> ServiceStats {
        self.stats.read().await.clone()
    }

    /// Clone of the current ledger state, for invariant sweeps in tests and
    /// diagnostics. Read-only with respect to the live store.
    pub async fn snapshot(&self) -> ShipmentLedger {
        self.ledger.read().await.clone()
    }

    /// Validate raw location text against the configured bound.
    fn validate_location(&self, raw: &str) -> Result<Location, LocationError> {
        let max = self.config.max_location_len.min(Location::MAX_LEN);
        if raw.len() > max {
            return Err(LocationError::TooLong {
                len: raw.len(),
                max,
            });
        }
        Location::new(raw)
    }

    /// Handle one dispatched call.
    ///
    /// `caller` is the authenticated identity the dispatcher attached;
    /// mutating operations require it, reads ignore it. The returned
    /// [`CallOutcome`] carries only the two ledger codes (100, 101);
    /// boundary problems surface as [`DispatchError`] instead.
    ///
    /// # Errors
    ///
    /// * [`DispatchError::MissingCaller`] if a mutating call had no identity.
    /// * [`DispatchError::InvalidLocation`] if location text fails validation.
    #[instrument(skip(self, request), fields(operation = request.operation(), %correlation_id))]
    pub async fn dispatch(
        &self,
        request: ShipmentCallRequest,
        caller: Option<Principal>,
        correlation_id: Uuid,
    ) -> Result<CallOutcome, DispatchError> {
        match request {
            ShipmentCallRequest::CreateNewShipment(payload) => {
                let caller = caller.ok_or(DispatchError::MissingCaller {
                    operation: "create-new-shipment",
                })?;
                let location = self.validate_location(&payload.location)?;
                let receipt = self
                    .create_new_shipment(location, payload.receiver, caller)
                    .await;
                Ok(CallOutcome::confirmation(receipt.confirmation))
            }
            ShipmentCallRequest::UpdateShipment(payload) => {
                let caller = caller.ok_or(DispatchError::MissingCaller {
                    operation: "update-shipment",
                })?;
                let new_location = self.validate_location(&payload.new_location)?;
                let outcome = match self
                    .update_shipment(ShipmentId::new(payload.id), new_location, caller)
                    .await
                {
                    Ok(confirmation) => CallOutcome::confirmation(confirmation),
                    Err(err) => err.into(),
                };
                Ok(outcome)
            }
            ShipmentCallRequest::GetShipment(payload) => {
                let outcome = match self.get_shipment(ShipmentId::new(payload.id)).await {
                    Ok(view) => CallOutcome::record(view),
                    Err(err) => err.into(),
                };
                Ok(outcome)
            }
        }
    }
}

#[async_trait]
impl ShipmentLedgerApi for ShipmentLedgerService {
    async fn create_new_shipment(
        &self,
        location: Location,
        receiver: Principal,
        caller: Principal,
    ) -> CreatedShipment {
        let id = {
            let mut ledger = self.ledger.write().await;
            ledger.create_new_shipment(location, receiver, caller.clone())
        };
        self.stats.write().await.shipments_created += 1;

        info!(%id, shipper = %caller, "shipment created");
        CreatedShipment {
            id,
            confirmation: MSG_SHIPMENT_CREATED,
        }
    }

    async fn update_shipment(
        &self,
        id: ShipmentId,
        new_location: Location,
        caller: Principal,
    ) -> Result<&'static str, LedgerError> {
        let result = {
            let mut ledger = self.ledger.write().await;
            ledger.update_shipment(id, new_location, &caller)
        };

        match result {
            Ok(()) => {
                self.stats.write().await.locations_updated += 1;
                info!(%id, shipper = %caller, "shipment location updated");
                Ok(MSG_SHIPMENT_UPDATED)
            }
            Err(err) => {
                let mut stats = self.stats.write().await;
                match &err {
                    LedgerError::ShipmentNotFound(_) => stats.not_found_errors += 1,
                    LedgerError::UnauthorizedCaller { .. } => stats.unauthorized_errors += 1,
                }
                drop(stats);
                warn!(%id, caller = %caller, code = err.code(), "shipment update rejected");
                Err(err)
            }
        }
    }

    async fn get_shipment(&self, id: ShipmentId) -> Result<ShipmentView, LedgerError> {
        let result = self.ledger.read().await.get_shipment(id);

        let mut stats = self.stats.write().await;
        stats.reads_served += 1;
        if result.is_err() {
            stats.not_found_errors += 1;
        }
        drop(stats);

        if self.config.trace_reads {
            debug!(%id, found = result.is_ok(), "shipment read");
        }
        result
    }
}

/// Create a service with default configuration, for tests.
#[must_use]
pub fn create_test_service() -> ShipmentLedgerService {
    ShipmentLedgerService::new(ServiceConfig::default())
}

// =============================================================================
// TESTS
// =============================================================================
