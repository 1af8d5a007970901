//! # Model-Based Command Suite
//!
//! Drives the ledger core with random command sequences and checks it against
//! a reference model (a plain map plus a counter) after every step. Commands
//! cover creation, owner updates, foreign updates, known reads, and
//! never-assigned reads, so the dense-id, authorization, and no-mutation-on-
//! failure properties are exercised in combination rather than one at a time.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use shipment_ledger::prelude::*;
    use std::collections::HashMap;

    const WALLETS: [&str; 4] = ["wallet_1", "wallet_2", "wallet_3", "wallet_4"];

    fn wallet(index: usize) -> Principal {
        Principal::from(WALLETS[index % WALLETS.len()])
    }

    // =============================================================================
    // REFERENCE MODEL
    // =============================================================================

    #[derive(Clone, Debug)]
    struct ModelShipment {
        location: String,
        shipper: usize,
        receiver: usize,
    }

    /// The model the real ledger must agree with: a map and a counter.
    #[derive(Clone, Debug, Default)]
    struct ModelState {
        shipments: HashMap<u64, ModelShipment>,
        current_id: u64,
    }

    impl ModelState {
        /// Picks a known id from `pick`, or an id that will miss if empty.
        fn choose_id(&self, pick: u64) -> u64 {
            if self.current_id == 0 {
                pick + 1
            } else {
                pick % self.current_id + 1
            }
        }
    }

    // =============================================================================
    // COMMANDS
    // =============================================================================

    #[derive(Clone, Debug)]
    enum Command {
        /// Create a shipment; must always succeed with the next dense id.
        Create {
            location: String,
            shipper: usize,
            receiver: usize,
        },
        /// Update a (usually) known shipment as its shipper; must succeed.
        UpdateOwn { pick: u64, location: String },
        /// Update a (usually) known shipment as anyone else; must fail 101
        /// and mutate nothing.
        UpdateOthers {
            pick: u64,
            caller_bump: usize,
            location: String,
        },
        /// Read a (usually) known shipment; must match the model.
        GetKnown { pick: u64 },
        /// Read and update an id beyond the counter; both must fail 100.
        GetUnknown { offset: u64 },
    }

    fn arb_location() -> impl Strategy<Value = String> {
        "[A-Za-z ]{1,32}"
    }

    fn arb_wallet() -> impl Strategy<Value = usize> {
        0..WALLETS.len()
    }

    fn arb_command() -> impl Strategy<Value = Command> {
        prop_oneof![
            (arb_location(), arb_wallet(), arb_wallet()).prop_map(
                |(location, shipper, receiver)| Command::Create {
                    location,
                    shipper,
                    receiver,
                }
            ),
            (0..64u64, arb_location())
                .prop_map(|(pick, location)| Command::UpdateOwn { pick, location }),
            (0..64u64, 0..WALLETS.len() - 1, arb_location()).prop_map(
                |(pick, caller_bump, location)| Command::UpdateOthers {
                    pick,
                    caller_bump,
                    location,
                }
            ),
            (0..64u64).prop_map(|pick| Command::GetKnown { pick }),
            (0..16u64).prop_map(|offset| Command::GetUnknown { offset }),
        ]
    }

    // =============================================================================
    // EXECUTION
    // =============================================================================

    /// Applies one command to both ledger and model, checking agreement.
    fn apply(ledger: &mut ShipmentLedger, model: &mut ModelState, command: &Command) {
        match command {
            Command::Create {
                location,
                shipper,
                receiver,
            } => {
                let id = ledger.create_new_shipment(
                    Location::new(location.clone()).unwrap(),
                    wallet(*receiver),
                    wallet(*shipper),
                );
                model.current_id += 1;
                model.shipments.insert(
                    model.current_id,
                    ModelShipment {
                        location: location.clone(),
                        shipper: *shipper,
                        receiver: *receiver,
                    },
                );
                assert_eq!(id.get(), model.current_id, "create must assign next dense id");
            }
            Command::UpdateOwn { pick, location } => {
                let id = model.choose_id(*pick);
                match model.shipments.get_mut(&id) {
                    Some(stored) => {
                        let owner = wallet(stored.shipper);
                        ledger
                            .update_shipment(
                                ShipmentId::new(id),
                                Location::new(location.clone()).unwrap(),
                                &owner,
                            )
                            .expect("owner update of a known shipment must succeed");
                        stored.location = location.clone();
                    }
                    None => {
                        let err = ledger
                            .update_shipment(
                                ShipmentId::new(id),
                                Location::new(location.clone()).unwrap(),
                                &wallet(0),
                            )
                            .unwrap_err();
                        assert_eq!(err.code(), 100);
                    }
                }
            }
            Command::UpdateOthers {
                pick,
                caller_bump,
                location,
            } => {
                let id = model.choose_id(*pick);
                match model.shipments.get(&id) {
                    Some(stored) => {
                        // Any wallet other than the stored shipper.
                        let foreign = wallet(stored.shipper + 1 + caller_bump);
                        let err = ledger
                            .update_shipment(
                                ShipmentId::new(id),
                                Location::new(location.clone()).unwrap(),
                                &foreign,
                            )
                            .unwrap_err();
                        assert_eq!(err.code(), 101);
                        // Mutated nothing.
                        let view = ledger.get_shipment(ShipmentId::new(id)).unwrap();
                        assert_eq!(view.location.as_str(), stored.location);
                    }
                    None => {
                        let err = ledger
                            .update_shipment(
                                ShipmentId::new(id),
                                Location::new(location.clone()).unwrap(),
                                &wallet(*caller_bump),
                            )
                            .unwrap_err();
                        assert_eq!(err.code(), 100, "existence is checked before authorization");
                    }
                }
            }
            Command::GetKnown { pick } => {
                let id = model.choose_id(*pick);
                match model.shipments.get(&id) {
                    Some(stored) => {
                        let view = ledger.get_shipment(ShipmentId::new(id)).unwrap();
                        assert_eq!(view.location.as_str(), stored.location);
                        assert_eq!(view.shipper, wallet(stored.shipper));
                        assert_eq!(view.receiver, wallet(stored.receiver));
                        assert_eq!(view.status, ShipmentStatus::InTransit);
                    }
                    None => {
                        let err = ledger.get_shipment(ShipmentId::new(id)).unwrap_err();
                        assert_eq!(err.code(), 100);
                    }
                }
            }
            Command::GetUnknown { offset } => {
                let beyond = ShipmentId::new(model.current_id + 1 + offset);
                let get = ledger.get_shipment(beyond).unwrap_err();
                let update = ledger
                    .update_shipment(beyond, Location::new("Nowhere").unwrap(), &wallet(0))
                    .unwrap_err();
                assert_eq!(get.code(), 100);
                assert_eq!(update.code(), 100);
            }
        }
    }

    // =============================================================================
    // PROPERTIES
    // =============================================================================

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        /// The real ledger agrees with the reference model after every
        /// command, and custody fields survive every step.
        #[test]
        fn prop_ledger_agrees_with_model(
            commands in prop::collection::vec(arb_command(), 1..40),
        ) {
            let mut ledger = ShipmentLedger::new();
            let mut model = ModelState::default();

            for command in &commands {
                let before = ledger.clone();
                apply(&mut ledger, &mut model, command);

                prop_assert_eq!(ledger.last_assigned_id(), model.current_id);
                prop_assert_eq!(ledger.len(), model.shipments.len());
                prop_assert!(check_custody_invariant(&before, &ledger));
            }

            prop_assert!(check_all_invariants(&ledger).is_ok());
        }

        /// N creates assign exactly {1, …, N} in call order.
        #[test]
        fn prop_identifiers_are_dense_and_monotonic(
            triples in prop::collection::vec(
                (arb_location(), arb_wallet(), arb_wallet()),
                1..50,
            ),
        ) {
            let mut ledger = ShipmentLedger::new();
            for (n, (location, shipper, receiver)) in triples.iter().enumerate() {
                let id = ledger.create_new_shipment(
                    Location::new(location.clone()).unwrap(),
                    wallet(*receiver),
                    wallet(*shipper),
                );
                prop_assert_eq!(id.get(), n as u64 + 1);
            }
            prop_assert!(check_dense_ids_invariant(&ledger));
            prop_assert!(check_counter_invariant(&ledger));
        }

        /// Every valid triple creates successfully and reads back with the
        /// supplied fields and status "In Transit".
        #[test]
        fn prop_creation_always_succeeds(
            location in arb_location(),
            shipper in arb_wallet(),
            receiver in arb_wallet(),
        ) {
            let mut ledger = ShipmentLedger::new();
            let id = ledger.create_new_shipment(
                Location::new(location.clone()).unwrap(),
                wallet(receiver),
                wallet(shipper),
            );

            let view = ledger.get_shipment(id).unwrap();
            prop_assert_eq!(view.location.as_str(), location.as_str());
            prop_assert_eq!(view.shipper, wallet(shipper));
            prop_assert_eq!(view.receiver, wallet(receiver));
            prop_assert_eq!(view.status.as_str(), "In Transit");
        }
    }
}
