//! Error types for admin operations.

use crate::types::Zone;
use quorum_cryptography::Address;
use thiserror::Error;

/// Reasons an admin operation can be rejected.
///
/// Every error aborts the whole call: no nonce advance, no membership change, and no
/// event is reported.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unauthorized caller: {0}")]
    Unauthorized(Address),
    #[error("invalid signature number: expected {expected}, found {found}")]
    InvalidSignatureNumber { expected: usize, found: usize },
    #[error("failed verification")]
    FailedVerification,
    #[error("authorized account: {0}")]
    AuthorizedAccount(Address),
    #[error("not authorized account: {0}")]
    NotAuthorizedAccount(Address),
    #[error("authorized zone: {0}")]
    AuthorizedZone(Zone),
    #[error("not authorized zone: {0}")]
    NotAuthorizedZone(Zone),
    #[error("registered collection: {0}")]
    RegisteredCollection(Address),
    #[error("not registered collection: {0}")]
    NotRegisteredCollection(Address),
    #[error("activated: {0}")]
    Activated(Address),
    #[error("not activated: {0}")]
    NotActivated(Address),
    #[error("cannot self deauthorize")]
    CannotSelfDeauthorizing,
    #[error("invalid input")]
    InvalidInput,
    #[error("duplicate signer: {0}")]
    DuplicateSigner(Address),
    #[error("invalid threshold: {threshold} of {signers}")]
    InvalidThreshold { threshold: u32, signers: usize },
}
