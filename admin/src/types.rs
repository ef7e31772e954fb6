//! Types reported and queried by the admin.

use bytes::Bytes;
use quorum_cryptography::Address;
use quorum_utils::hex;
use std::fmt::{Debug, Display};

/// A 32-byte zone identifier.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
#[repr(transparent)]
pub struct Zone([u8; 32]);

impl Zone {
    pub const fn new(value: [u8; 32]) -> Self {
        Self(value)
    }
}

impl From<[u8; 32]> for Zone {
    fn from(value: [u8; 32]) -> Self {
        Self(value)
    }
}

impl From<Zone> for [u8; 32] {
    fn from(value: Zone) -> Self {
        value.0
    }
}

impl AsRef<[u8]> for Zone {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Debug for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{}", hex(&self.0))
    }
}

impl Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{}", hex(&self.0))
    }
}

/// Availability flags of a currency.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CurrencyRegistry {
    pub is_available: bool,
    pub is_exclusive: bool,
}

/// Auditable activity emitted after a call commits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// A signature set was accepted at `nonce`.
    AdminSignaturesVerification {
        message: Bytes,
        nonce: u64,
        signatures: Vec<Bytes>,
    },
    AdministrationTransfer {
        index: u64,
        previous: Address,
        admin: Address,
    },
    ManagerAuthorization(Address),
    ManagerDeauthorization(Address),
    ModeratorAuthorization(Address),
    ModeratorDeauthorization(Address),
    ZoneDeclaration(Zone),
    ZoneRevocation(Zone),
    Activation { zone: Zone, account: Address },
    Deactivation { zone: Zone, account: Address },
    CollectionRegistration(Address),
    CollectionDeregistration(Address),
    CurrencyRegistryUpdate {
        currency: Address,
        registry: CurrencyRegistry,
    },
}
