//! Signature-gated operations and their canonical messages.

use crate::{
    message::{Argument, Message},
    types::Zone,
};
use quorum_cryptography::Address;

/// An operation that must be authorized by admin signatures.
///
/// Signers sign [Operation::message] for the admin's address at the current nonce.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Operation {
    TransferAdministration {
        index: u64,
        admin: Address,
    },
    AuthorizeManagers {
        accounts: Vec<Address>,
        is_manager: bool,
    },
    AuthorizeModerators {
        accounts: Vec<Address>,
        is_moderator: bool,
    },
    DeclareZones {
        zones: Vec<Zone>,
        is_zone: bool,
    },
    ActivateIn {
        zone: Zone,
        accounts: Vec<Address>,
        is_active: bool,
    },
    RegisterCollections {
        collections: Vec<Address>,
        is_registered: bool,
    },
    UpdateCurrencyRegistries {
        currencies: Vec<Address>,
        is_available: Vec<bool>,
        is_exclusive: Vec<bool>,
    },
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Self::TransferAdministration { .. } => "transferAdministration",
            Self::AuthorizeManagers { .. } => "authorizeManagers",
            Self::AuthorizeModerators { .. } => "authorizeModerators",
            Self::DeclareZones { .. } => "declareZones",
            Self::ActivateIn { .. } => "activateIn",
            Self::RegisterCollections { .. } => "registerCollections",
            Self::UpdateCurrencyRegistries { .. } => "updateCurrencyRegistries",
        }
    }

    /// Builds the canonical message for this operation on `target`.
    pub fn message(&self, target: Address) -> Message {
        let message = Message::new(target, self.name());
        match self {
            Self::TransferAdministration { index, admin } => message
                .with(Argument::Uint(*index))
                .with(Argument::Address(*admin)),
            Self::AuthorizeManagers {
                accounts,
                is_manager,
            } => message
                .with(Argument::Addresses(accounts.clone()))
                .with(Argument::Bool(*is_manager)),
            Self::AuthorizeModerators {
                accounts,
                is_moderator,
            } => message
                .with(Argument::Addresses(accounts.clone()))
                .with(Argument::Bool(*is_moderator)),
            Self::DeclareZones { zones, is_zone } => message
                .with(Argument::Bytes32s(
                    zones.iter().map(|zone| (*zone).into()).collect(),
                ))
                .with(Argument::Bool(*is_zone)),
            Self::ActivateIn {
                zone,
                accounts,
                is_active,
            } => message
                .with(Argument::Bytes32((*zone).into()))
                .with(Argument::Addresses(accounts.clone()))
                .with(Argument::Bool(*is_active)),
            Self::RegisterCollections {
                collections,
                is_registered,
            } => message
                .with(Argument::Addresses(collections.clone()))
                .with(Argument::Bool(*is_registered)),
            Self::UpdateCurrencyRegistries {
                currencies,
                is_available,
                is_exclusive,
            } => message
                .with(Argument::Addresses(currencies.clone()))
                .with(Argument::Bools(is_available.clone()))
                .with(Argument::Bools(is_exclusive.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use commonware_codec::Encode as _;

    #[test]
    fn test_flag_changes_message() {
        let target = Address::new([1; 20]);
        let accounts = vec![Address::new([2; 20])];
        let authorize = Operation::AuthorizeManagers {
            accounts: accounts.clone(),
            is_manager: true,
        };
        let deauthorize = Operation::AuthorizeManagers {
            accounts,
            is_manager: false,
        };
        assert_ne!(
            authorize.message(target).encode(),
            deauthorize.message(target).encode()
        );
    }

    #[test]
    fn test_same_arguments_different_operation() {
        let target = Address::new([1; 20]);
        let accounts = vec![Address::new([2; 20])];
        let managers = Operation::AuthorizeManagers {
            accounts: accounts.clone(),
            is_manager: true,
        };
        let moderators = Operation::AuthorizeModerators {
            accounts,
            is_moderator: true,
        };
        assert_ne!(
            managers.message(target).encode(),
            moderators.message(target).encode()
        );
    }
}
