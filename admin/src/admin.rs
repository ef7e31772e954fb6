//! Signature-gated administration.

use crate::{
    membership::Membership,
    nonce::Nonce,
    operation::Operation,
    registry::Registry,
    types::{CurrencyRegistry, Event, Zone},
    verifier, Config, Error, Reporter,
};
use bytes::Bytes;
use commonware_codec::Encode as _;
use quorum_cryptography::{Address, Recoverable};
use std::{collections::BTreeMap, marker::PhantomData};
use tracing::{debug, info, warn};

/// Everything a call may change besides the nonce.
#[derive(Clone, Debug)]
struct State {
    registry: Registry,
    moderators: Membership<Address>,
    zones: Membership<Zone>,
    activations: BTreeMap<Zone, Membership<Address>>,
    collections: Membership<Address>,
    currencies: BTreeMap<Address, CurrencyRegistry>,
}

/// Authorizes privileged operations with k-of-n admin signatures.
///
/// Every mutating call takes `&mut self` and either commits completely (state, nonce
/// advance, and events) or returns an error having changed nothing.
pub struct Admin<S: Recoverable, R: Reporter<Activity = Event>> {
    address: Address,
    threshold: u32,
    nonce: Nonce,
    state: State,
    reporter: R,

    _scheme: PhantomData<S>,
}

impl<S: Recoverable, R: Reporter<Activity = Event>> Admin<S, R> {
    /// Creates a new admin from the provided [Config].
    pub fn new(cfg: Config, reporter: R) -> Result<Self, Error> {
        cfg.validate()?;
        let registry = Registry::new(cfg.admins)?;
        debug!(
            address = %cfg.address,
            signers = registry.size(),
            threshold = cfg.threshold,
            "initialized admin"
        );
        Ok(Self {
            address: cfg.address,
            threshold: cfg.threshold,
            nonce: Nonce::default(),
            state: State {
                registry,
                moderators: Membership::default(),
                zones: Membership::default(),
                activations: BTreeMap::new(),
                collections: Membership::default(),
                currencies: BTreeMap::new(),
            },
            reporter,
            _scheme: PhantomData,
        })
    }

    /// Identity bound into every message as its target.
    pub fn address(&self) -> Address {
        self.address
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Returns the nonce the next signature set must be signed over.
    pub fn nonce(&self) -> u64 {
        self.nonce.get()
    }

    pub fn admins(&self) -> &[Address] {
        self.state.registry.admins()
    }

    pub fn is_admin(&self, account: &Address) -> bool {
        self.state.registry.is_admin(account)
    }

    pub fn is_manager(&self, account: &Address) -> bool {
        self.state.registry.is_manager(account)
    }

    pub fn is_moderator(&self, account: &Address) -> bool {
        self.state.moderators.contains(account)
    }

    /// Returns whether `account` is a manager or a moderator.
    pub fn is_executive(&self, account: &Address) -> bool {
        self.is_manager(account) || self.is_moderator(account)
    }

    pub fn is_zone(&self, zone: &Zone) -> bool {
        self.state.zones.contains(zone)
    }

    pub fn is_active_in(&self, zone: &Zone, account: &Address) -> bool {
        self.state
            .activations
            .get(zone)
            .is_some_and(|accounts| accounts.contains(account))
    }

    pub fn is_collection(&self, collection: &Address) -> bool {
        self.state.collections.contains(collection)
    }

    /// Returns the registry of `currency` (unavailable and non-exclusive if never updated).
    pub fn currency_registry(&self, currency: &Address) -> CurrencyRegistry {
        self.state
            .currencies
            .get(currency)
            .copied()
            .unwrap_or_default()
    }

    /// Verifies `signatures` over an arbitrary `message` on behalf of `caller`.
    ///
    /// Only managers may call this. On success the nonce advances by one and the number of
    /// valid signatures that met the threshold is returned.
    pub fn verify_admin_signatures(
        &mut self,
        caller: &Address,
        message: &[u8],
        signatures: &[Bytes],
    ) -> Result<u32, Error> {
        if !self.is_manager(caller) {
            debug!(%caller, "unauthorized verification request");
            return Err(Error::Unauthorized(*caller));
        }
        let message = Bytes::copy_from_slice(message);
        self.commit(message, signatures, |_| Ok(Vec::new()))
    }

    /// Replaces the admin in slot `index` with `admin`.
    pub fn transfer_administration(
        &mut self,
        index: u64,
        admin: Address,
        signatures: &[Bytes],
    ) -> Result<(), Error> {
        let operation = Operation::TransferAdministration { index, admin };
        self.execute(operation, signatures, |state| {
            let slot = usize::try_from(index).map_err(|_| Error::InvalidInput)?;
            let previous = state.registry.transfer(slot, admin)?;
            Ok(vec![Event::AdministrationTransfer {
                index,
                previous,
                admin,
            }])
        })
    }

    /// Authorizes (or deauthorizes) `accounts` as managers.
    ///
    /// `caller` may not deauthorize itself.
    pub fn authorize_managers(
        &mut self,
        caller: &Address,
        accounts: Vec<Address>,
        is_manager: bool,
        signatures: &[Bytes],
    ) -> Result<(), Error> {
        let operation = Operation::AuthorizeManagers {
            accounts: accounts.clone(),
            is_manager,
        };
        let caller = *caller;
        self.execute(operation, signatures, |state| {
            if !is_manager && accounts.contains(&caller) {
                return Err(Error::CannotSelfDeauthorizing);
            }
            state
                .registry
                .managers_mut()
                .set_all(&accounts, is_manager)
                .map_err(|conflict| {
                    conflict.into_error(Error::AuthorizedAccount, Error::NotAuthorizedAccount)
                })?;
            let event: fn(Address) -> Event = if is_manager {
                Event::ManagerAuthorization
            } else {
                Event::ManagerDeauthorization
            };
            Ok(accounts.into_iter().map(event).collect())
        })
    }

    /// Authorizes (or deauthorizes) `accounts` as moderators.
    pub fn authorize_moderators(
        &mut self,
        accounts: Vec<Address>,
        is_moderator: bool,
        signatures: &[Bytes],
    ) -> Result<(), Error> {
        let operation = Operation::AuthorizeModerators {
            accounts: accounts.clone(),
            is_moderator,
        };
        self.execute(operation, signatures, |state| {
            state
                .moderators
                .set_all(&accounts, is_moderator)
                .map_err(|conflict| {
                    conflict.into_error(Error::AuthorizedAccount, Error::NotAuthorizedAccount)
                })?;
            let event: fn(Address) -> Event = if is_moderator {
                Event::ModeratorAuthorization
            } else {
                Event::ModeratorDeauthorization
            };
            Ok(accounts.into_iter().map(event).collect())
        })
    }

    /// Declares (or revokes) `zones`.
    pub fn declare_zones(
        &mut self,
        zones: Vec<Zone>,
        is_zone: bool,
        signatures: &[Bytes],
    ) -> Result<(), Error> {
        let operation = Operation::DeclareZones {
            zones: zones.clone(),
            is_zone,
        };
        self.execute(operation, signatures, |state| {
            state
                .zones
                .set_all(&zones, is_zone)
                .map_err(|conflict| {
                    conflict.into_error(Error::AuthorizedZone, Error::NotAuthorizedZone)
                })?;
            let event: fn(Zone) -> Event = if is_zone {
                Event::ZoneDeclaration
            } else {
                Event::ZoneRevocation
            };
            Ok(zones.into_iter().map(event).collect())
        })
    }

    /// Activates (or deactivates) `accounts` in a declared `zone`.
    pub fn activate_in(
        &mut self,
        zone: Zone,
        accounts: Vec<Address>,
        is_active: bool,
        signatures: &[Bytes],
    ) -> Result<(), Error> {
        let operation = Operation::ActivateIn {
            zone,
            accounts: accounts.clone(),
            is_active,
        };
        self.execute(operation, signatures, |state| {
            if !state.zones.contains(&zone) {
                return Err(Error::NotAuthorizedZone(zone));
            }
            state
                .activations
                .entry(zone)
                .or_default()
                .set_all(&accounts, is_active)
                .map_err(|conflict| conflict.into_error(Error::Activated, Error::NotActivated))?;
            Ok(accounts
                .into_iter()
                .map(|account| {
                    if is_active {
                        Event::Activation { zone, account }
                    } else {
                        Event::Deactivation { zone, account }
                    }
                })
                .collect())
        })
    }

    /// Registers (or deregisters) `collections`.
    pub fn register_collections(
        &mut self,
        collections: Vec<Address>,
        is_registered: bool,
        signatures: &[Bytes],
    ) -> Result<(), Error> {
        let operation = Operation::RegisterCollections {
            collections: collections.clone(),
            is_registered,
        };
        self.execute(operation, signatures, |state| {
            state
                .collections
                .set_all(&collections, is_registered)
                .map_err(|conflict| {
                    conflict.into_error(Error::RegisteredCollection, Error::NotRegisteredCollection)
                })?;
            let event: fn(Address) -> Event = if is_registered {
                Event::CollectionRegistration
            } else {
                Event::CollectionDeregistration
            };
            Ok(collections.into_iter().map(event).collect())
        })
    }

    /// Updates the availability flags of `currencies`.
    ///
    /// The three lists are parallel and must have equal lengths.
    pub fn update_currency_registries(
        &mut self,
        currencies: Vec<Address>,
        is_available: Vec<bool>,
        is_exclusive: Vec<bool>,
        signatures: &[Bytes],
    ) -> Result<(), Error> {
        if currencies.len() != is_available.len() || currencies.len() != is_exclusive.len() {
            return Err(Error::InvalidInput);
        }
        let operation = Operation::UpdateCurrencyRegistries {
            currencies: currencies.clone(),
            is_available: is_available.clone(),
            is_exclusive: is_exclusive.clone(),
        };
        self.execute(operation, signatures, |state| {
            let mut events = Vec::with_capacity(currencies.len());
            for ((currency, is_available), is_exclusive) in
                currencies.into_iter().zip(is_available).zip(is_exclusive)
            {
                let registry = CurrencyRegistry {
                    is_available,
                    is_exclusive,
                };
                state.currencies.insert(currency, registry);
                events.push(Event::CurrencyRegistryUpdate { currency, registry });
            }
            Ok(events)
        })
    }

    fn execute<F>(
        &mut self,
        operation: Operation,
        signatures: &[Bytes],
        apply: F,
    ) -> Result<(), Error>
    where
        F: FnOnce(&mut State) -> Result<Vec<Event>, Error>,
    {
        let message = operation.message(self.address).encode().freeze();
        match self.commit(message, signatures, apply) {
            Ok(_) => Ok(()),
            Err(err) => {
                debug!(operation = operation.name(), ?err, "rejected operation");
                Err(err)
            }
        }
    }

    /// Verifies `signatures`, applies `apply` to a staged copy of the state, and commits
    /// both (advancing the nonce and reporting events) only if every step succeeds.
    ///
    /// Returns the number of valid signatures.
    fn commit<F>(&mut self, message: Bytes, signatures: &[Bytes], apply: F) -> Result<u32, Error>
    where
        F: FnOnce(&mut State) -> Result<Vec<Event>, Error>,
    {
        let nonce = self.nonce.get();
        let valid = verifier::verify::<S>(
            &self.state.registry,
            self.threshold,
            nonce,
            &message,
            signatures,
        )
        .inspect_err(|err| warn!(nonce, ?err, "rejected admin signatures"))?;

        let mut staged = self.state.clone();
        let events = apply(&mut staged)?;

        self.state = staged;
        self.nonce.advance();
        info!(nonce, valid, changes = events.len(), "verified admin signatures");

        self.reporter.report(Event::AdminSignaturesVerification {
            message,
            nonce,
            signatures: signatures.to_vec(),
        });
        for event in events {
            self.reporter.report(event);
        }
        Ok(valid)
    }
}
