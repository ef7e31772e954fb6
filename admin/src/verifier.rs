//! Threshold verification of admin signatures.

use crate::{registry::Registry, signer::payload, Error, NAMESPACE};
use bytes::Bytes;
use quorum_cryptography::{Address, PublicKey as _, Recoverable};
use tracing::{debug, trace};

/// Checks `signatures` over `message` at `nonce` against `registry`.
///
/// The list must hold exactly one entry per admin slot. Entries that fail to parse, fail to
/// recover, or recover to an identity outside the registry are tolerated placeholders.
/// Every registered identity must be strictly greater than the previous registered
/// identity in the list (which also rules out duplicates), and at least `threshold` of them
/// must be present.
///
/// Returns the number of valid signatures. Nothing is mutated: the caller advances the
/// nonce once the surrounding call commits.
pub fn verify<S: Recoverable>(
    registry: &Registry,
    threshold: u32,
    nonce: u64,
    message: &[u8],
    signatures: &[Bytes],
) -> Result<u32, Error> {
    if signatures.len() != registry.size() {
        return Err(Error::InvalidSignatureNumber {
            expected: registry.size(),
            found: signatures.len(),
        });
    }

    let payload = payload(message, nonce);
    let mut last: Option<Address> = None;
    let mut valid = 0u32;
    for (index, raw) in signatures.iter().enumerate() {
        let Ok(signature) = S::try_from(&raw[..]) else {
            trace!(index, "malformed signature");
            continue;
        };
        let Some(public_key) = signature.recover_signer(Some(NAMESPACE), &payload) else {
            trace!(index, "unrecoverable signature");
            continue;
        };
        let signer = public_key.address();
        if !registry.is_signer(&signer) {
            trace!(index, %signer, "signature from unregistered identity");
            continue;
        }
        if last.is_some_and(|last| signer <= last) {
            debug!(index, %signer, "signatures not in ascending order");
            return Err(Error::FailedVerification);
        }
        last = Some(signer);
        valid += 1;
    }

    if valid < threshold {
        debug!(valid, threshold, nonce, "insufficient signatures");
        return Err(Error::FailedVerification);
    }
    Ok(valid)
}
