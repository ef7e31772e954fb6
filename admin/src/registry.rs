//! The set of identities allowed to sign admin messages.

use crate::{membership::Membership, Error};
use quorum_cryptography::Address;
use std::collections::BTreeSet;

/// Fixed admin slots plus a dynamically managed set of managers.
///
/// The number of admin slots is fixed at construction and is the exact number of
/// signatures every verification expects. Slots are replaced one at a time but never
/// added or removed.
#[derive(Clone, Debug)]
pub struct Registry {
    admins: Vec<Address>,
    managers: Membership<Address>,
}

impl Registry {
    /// Creates a registry over `admins`, rejecting duplicate slots.
    pub fn new(admins: Vec<Address>) -> Result<Self, Error> {
        let mut seen = BTreeSet::new();
        for admin in &admins {
            if !seen.insert(*admin) {
                return Err(Error::DuplicateSigner(*admin));
            }
        }
        Ok(Self {
            admins,
            managers: Membership::default(),
        })
    }

    /// Number of admin slots (and of signatures each verification expects).
    pub fn size(&self) -> usize {
        self.admins.len()
    }

    pub fn admins(&self) -> &[Address] {
        &self.admins
    }

    pub fn is_admin(&self, account: &Address) -> bool {
        self.admins.contains(account)
    }

    pub fn is_manager(&self, account: &Address) -> bool {
        self.managers.contains(account)
    }

    /// Returns whether a signature from `account` counts toward the threshold.
    pub fn is_signer(&self, account: &Address) -> bool {
        self.is_admin(account) || self.is_manager(account)
    }

    pub(crate) fn managers_mut(&mut self) -> &mut Membership<Address> {
        &mut self.managers
    }

    /// Replaces the admin in slot `index`, returning the previous holder.
    pub(crate) fn transfer(&mut self, index: usize, admin: Address) -> Result<Address, Error> {
        if index >= self.admins.len() {
            return Err(Error::InvalidInput);
        }
        if self.is_admin(&admin) {
            return Err(Error::AuthorizedAccount(admin));
        }
        Ok(std::mem::replace(&mut self.admins[index], admin))
    }
}
