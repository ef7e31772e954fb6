//! Produce admin signatures.

use crate::NAMESPACE;
use bytes::Bytes;
use quorum_cryptography::{PublicKey as _, Signer};

/// Returns the payload signed for `message` at `nonce`.
///
/// The nonce is appended as a fixed-width big-endian integer, which keeps the payload
/// unambiguous because the canonical message is self-delimiting.
pub fn payload(message: &[u8], nonce: u64) -> Vec<u8> {
    let mut payload = Vec::with_capacity(message.len() + 8);
    payload.extend_from_slice(message);
    payload.extend_from_slice(&nonce.to_be_bytes());
    payload
}

/// Signs `message` at `nonce` with a single key.
pub fn sign<C: Signer>(signer: &C, message: &[u8], nonce: u64) -> Bytes {
    let signature = signer.sign(Some(NAMESPACE), &payload(message, nonce));
    Bytes::copy_from_slice(signature.as_ref())
}

/// Signs `message` at `nonce` with every key, ordered by ascending signer address.
pub fn sign_all<C: Signer>(signers: &[C], message: &[u8], nonce: u64) -> Vec<Bytes> {
    let mut signatures: Vec<_> = signers
        .iter()
        .map(|signer| (signer.public_key().address(), sign(signer, message, nonce)))
        .collect();
    signatures.sort_by_key(|(address, _)| *address);
    signatures
        .into_iter()
        .map(|(_, signature)| signature)
        .collect()
}
