#![allow(dead_code)]

use bytes::Bytes;
use commonware_codec::Encode as _;
use quorum_admin::{mocks, signer, Admin, Config, Operation};
use quorum_cryptography::{
    secp256r1::{PrivateKey, Signature},
    Address, PrivateKeyExt as _, PublicKey as _, Signer as _,
};

pub type TestAdmin = Admin<Signature, mocks::Reporter>;

/// Seed of the key whose address identifies the admin instance.
const TARGET_SEED: u64 = 1_000;

pub fn address(key: &PrivateKey) -> Address {
    key.public_key().address()
}

/// Returns `n` keys ordered by ascending address.
pub fn keys(n: u64, offset: u64) -> Vec<PrivateKey> {
    let mut keys: Vec<_> = (offset..offset + n).map(PrivateKey::from_seed).collect();
    keys.sort_by_key(address);
    keys
}

/// An entry that never parses as a signature.
pub fn placeholder() -> Bytes {
    Bytes::from(vec![0u8; 65])
}

pub struct Fixture {
    pub keys: Vec<PrivateKey>,
    pub admin: TestAdmin,
    pub reporter: mocks::Reporter,
}

impl Fixture {
    /// Five admins with the default threshold (4 of 5).
    pub fn new() -> Self {
        Self::with_threshold(5, Config::default_threshold(5))
    }

    pub fn with_threshold(n: u64, threshold: u32) -> Self {
        let keys = keys(n, 0);
        let cfg = Config {
            address: address(&PrivateKey::from_seed(TARGET_SEED)),
            admins: keys.iter().map(address).collect(),
            threshold,
        };
        let reporter = mocks::Reporter::default();
        let admin = Admin::new(cfg, reporter.clone()).unwrap();
        Self {
            keys,
            admin,
            reporter,
        }
    }

    /// Signs `message` at the current nonce with every admin, in ascending order.
    pub fn sign(&self, message: &[u8]) -> Vec<Bytes> {
        signer::sign_all(&self.keys, message, self.admin.nonce())
    }

    /// Signs `message` at the current nonce with the admins selected by `mask`, leaving a
    /// placeholder in every other slot.
    pub fn sign_subset(&self, message: &[u8], mask: u32) -> Vec<Bytes> {
        self.keys
            .iter()
            .enumerate()
            .map(|(i, key)| {
                if mask & (1 << i) != 0 {
                    signer::sign(key, message, self.admin.nonce())
                } else {
                    placeholder()
                }
            })
            .collect()
    }

    /// Signs the canonical message of `operation` with every admin.
    pub fn sign_operation(&self, operation: &Operation) -> Vec<Bytes> {
        let message = operation.message(self.admin.address()).encode();
        self.sign(&message)
    }

    /// Authorizes `manager` with every admin signature and clears the reported events.
    pub fn authorize_manager(&mut self, manager: Address) {
        let signatures = self.sign_operation(&Operation::AuthorizeManagers {
            accounts: vec![manager],
            is_manager: true,
        });
        self.admin
            .authorize_managers(&manager, vec![manager], true, &signatures)
            .unwrap();
        self.reporter.drain();
    }
}
