//! Secp256r1 implementation of the [Signer], [Verifier], and [Recoverable] traits.
//!
//! This implementation operates over public keys in compressed form (SEC 1, Version 2.0, Section 2.3.3), generates
//! deterministic signatures as specified in [RFC 6979](https://datatracker.ietf.org/doc/html/rfc6979), and enforces
//! signatures are normalized according to [BIP 62](https://github.com/bitcoin/bips/blob/master/bip-0062.mediawiki#low-s-values-in-signatures).
//!
//! Signatures carry a trailing recovery byte (`r || s || v`) so the signing key can be recovered from
//! the signature and the message alone. Messages are hashed with SHA-256 before signing.
//!
//! # Example
//! ```rust
//! use quorum_cryptography::{secp256r1, PrivateKeyExt, PublicKey, Recoverable, Signer, Verifier};
//! use rand::rngs::OsRng;
//!
//! // Generate a new private key
//! let signer = secp256r1::PrivateKey::from_rng(&mut OsRng);
//!
//! // Create a message to sign
//! let namespace = Some(&b"demo"[..]);
//! let msg = b"hello, world!";
//!
//! // Sign the message
//! let signature = signer.sign(namespace, msg);
//!
//! // Verify the signature
//! assert!(signer.public_key().verify(namespace, msg, &signature));
//!
//! // Recover the signer
//! let recovered = signature.recover_signer(namespace, msg).unwrap();
//! assert_eq!(recovered.address(), signer.public_key().address());
//! ```

use crate::{Address, Error, Signer as _};
use ecdsa::RecoveryId;
use p256::{
    ecdsa::{SigningKey, VerifyingKey},
    elliptic_curve::scalar::IsHigh,
};
use quorum_utils::{hex, union_unique};
use rand::{CryptoRng, Rng};
use sha2::{Digest as _, Sha256};
use std::{
    borrow::Cow,
    fmt::{Debug, Display},
};

const PRIVATE_KEY_LENGTH: usize = 32;
const PUBLIC_KEY_LENGTH: usize = 33; // Y-Parity || X
const SIGNATURE_LENGTH: usize = 65; // R || S || V

/// Hash the (optionally namespaced) message into the prehash that is signed.
fn prehash(namespace: Option<&[u8]>, msg: &[u8]) -> [u8; 32] {
    let payload = match namespace {
        Some(namespace) => Cow::Owned(union_unique(namespace, msg)),
        None => Cow::Borrowed(msg),
    };
    let mut digest = [0u8; 32];
    digest.copy_from_slice(&Sha256::digest(&payload));
    digest
}

/// Secp256r1 private key.
#[derive(Clone)]
pub struct PrivateKey {
    key: SigningKey,
}

impl PrivateKey {
    /// Length of an encoded [PrivateKey].
    pub const SIZE: usize = PRIVATE_KEY_LENGTH;

    /// Returns the raw scalar of this key.
    pub fn to_bytes(&self) -> [u8; PRIVATE_KEY_LENGTH] {
        self.key.to_bytes().into()
    }
}

impl TryFrom<&[u8]> for PrivateKey {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        if value.len() != PRIVATE_KEY_LENGTH {
            return Err(Error::InvalidLength {
                expected: PRIVATE_KEY_LENGTH,
                found: value.len(),
            });
        }
        let key = SigningKey::from_slice(value).map_err(|_| Error::InvalidPrivateKey)?;
        Ok(Self { key })
    }
}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for PrivateKey {}

impl Debug for PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print the scalar.
        write!(f, "PrivateKey({})", self.public_key())
    }
}

impl crate::Signer for PrivateKey {
    type Signature = Signature;
    type PublicKey = PublicKey;

    fn public_key(&self) -> Self::PublicKey {
        PublicKey::from(self.key.verifying_key().to_owned())
    }

    fn sign(&self, namespace: Option<&[u8]>, msg: &[u8]) -> Self::Signature {
        let digest = prehash(namespace, msg);
        let (signature, recovery_id) = self
            .key
            .sign_prehash_recoverable(&digest)
            .expect("signing a 32-byte prehash with a valid key cannot fail");

        // Normalizing `s` negates the nonce point, which flips the parity of its y-coordinate.
        let (signature, recovery_id) = match signature.normalize_s() {
            Some(normalized) => (
                normalized,
                RecoveryId::new(!recovery_id.is_y_odd(), recovery_id.is_x_reduced()),
            ),
            None => (signature, recovery_id),
        };

        let mut raw = [0u8; SIGNATURE_LENGTH];
        raw[..64].copy_from_slice(&signature.to_bytes());
        raw[64] = recovery_id.to_byte();
        Signature {
            raw,
            signature,
            recovery_id,
        }
    }
}

impl crate::PrivateKeyExt for PrivateKey {
    fn from_rng<R: Rng + CryptoRng>(rng: &mut R) -> Self {
        Self {
            key: SigningKey::random(rng),
        }
    }
}

/// Secp256r1 public key.
#[derive(Clone, Eq, PartialEq)]
pub struct PublicKey {
    raw: [u8; PUBLIC_KEY_LENGTH],
    key: VerifyingKey,
}

impl PublicKey {
    /// Length of an encoded [PublicKey].
    pub const SIZE: usize = PUBLIC_KEY_LENGTH;
}

impl From<VerifyingKey> for PublicKey {
    fn from(key: VerifyingKey) -> Self {
        let mut raw = [0u8; PUBLIC_KEY_LENGTH];
        raw.copy_from_slice(key.to_encoded_point(true).as_bytes());
        Self { raw, key }
    }
}

impl TryFrom<&[u8]> for PublicKey {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        if value.len() != PUBLIC_KEY_LENGTH {
            return Err(Error::InvalidLength {
                expected: PUBLIC_KEY_LENGTH,
                found: value.len(),
            });
        }
        let key = VerifyingKey::from_sec1_bytes(value).map_err(|_| Error::InvalidPublicKey)?;
        Ok(Self::from(key))
    }
}

impl AsRef<[u8]> for PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.raw
    }
}

impl Debug for PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex(&self.raw))
    }
}

impl Display for PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex(&self.raw))
    }
}

impl crate::Verifier for PublicKey {
    type Signature = Signature;

    fn verify(&self, namespace: Option<&[u8]>, msg: &[u8], sig: &Self::Signature) -> bool {
        sig.recover_key(namespace, msg)
            .is_some_and(|recovered| recovered == self.key)
    }
}

impl crate::PublicKey for PublicKey {
    fn address(&self) -> Address {
        let point = self.key.to_encoded_point(false);
        // Skip the SEC 1 tag byte.
        Address::from_point(&point.as_bytes()[1..])
    }
}

/// Secp256r1 recoverable signature.
#[derive(Clone, Copy)]
pub struct Signature {
    raw: [u8; SIGNATURE_LENGTH],
    signature: p256::ecdsa::Signature,
    recovery_id: RecoveryId,
}

impl Signature {
    /// Length of an encoded [Signature].
    pub const SIZE: usize = SIGNATURE_LENGTH;

    fn recover_key(&self, namespace: Option<&[u8]>, msg: &[u8]) -> Option<VerifyingKey> {
        let digest = prehash(namespace, msg);
        VerifyingKey::recover_from_prehash(&digest, &self.signature, self.recovery_id).ok()
    }
}

impl TryFrom<&[u8]> for Signature {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        let raw: [u8; SIGNATURE_LENGTH] = value.try_into().map_err(|_| Error::InvalidLength {
            expected: SIGNATURE_LENGTH,
            found: value.len(),
        })?;
        let signature =
            p256::ecdsa::Signature::from_slice(&raw[..64]).map_err(|_| Error::InvalidSignature)?;
        if signature.s().is_high().into() {
            // Reject any signatures with a `s` value in the upper half of the curve order.
            return Err(Error::InvalidSignature);
        }
        let recovery_id = RecoveryId::from_byte(raw[64]).ok_or(Error::InvalidSignature)?;
        Ok(Self {
            raw,
            signature,
            recovery_id,
        })
    }
}

impl PartialEq for Signature {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for Signature {}

impl AsRef<[u8]> for Signature {
    fn as_ref(&self) -> &[u8] {
        &self.raw
    }
}

impl Debug for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex(&self.raw))
    }
}

impl Display for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex(&self.raw))
    }
}

impl crate::Signature for Signature {}

impl crate::Recoverable for Signature {
    type PublicKey = PublicKey;

    fn recover_signer(&self, namespace: Option<&[u8]>, msg: &[u8]) -> Option<Self::PublicKey> {
        self.recover_key(namespace, msg).map(PublicKey::from)
    }
}
