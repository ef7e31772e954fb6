//! Generate keys, sign messages, and recover signer identities from signatures.
//!
//! # Status
//!
//! `quorum-cryptography` is **ALPHA** software and is not yet recommended for production use. Developers should
//! expect breaking changes and occasional instability.

use rand::{CryptoRng, Rng, SeedableRng};
use std::fmt::Debug;
use thiserror::Error;

mod address;
pub use address::Address;
pub mod secp256r1;

/// Errors returned when parsing keys and signatures.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("invalid length: expected {expected}, found {found}")]
    InvalidLength { expected: usize, found: usize },
    #[error("invalid private key")]
    InvalidPrivateKey,
    #[error("invalid public key")]
    InvalidPublicKey,
    #[error("invalid signature")]
    InvalidSignature,
}

/// A private key that signs namespaced messages.
pub trait Signer: Send + Sync + Clone + 'static {
    type Signature: Signature;
    type PublicKey: PublicKey<Signature = Self::Signature>;

    fn public_key(&self) -> Self::PublicKey;

    /// Signs `msg` (unhashed) under `namespace`.
    ///
    /// When present, the namespace is joined to the message with [quorum_utils::union_unique]
    /// so a signature produced for one namespace never verifies under another.
    fn sign(&self, namespace: Option<&[u8]>, msg: &[u8]) -> Self::Signature;
}

/// Deterministic and random key generation.
pub trait PrivateKeyExt: Signer {
    /// Derives a key from `seed`. Only suitable for tests and examples.
    fn from_seed(seed: u64) -> Self {
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        Self::from_rng(&mut rng)
    }

    fn from_rng<R: Rng + CryptoRng>(rng: &mut R) -> Self;
}

pub trait Verifier {
    type Signature: Signature;

    /// Returns whether `sig` was produced over `msg` under `namespace` by this key.
    fn verify(&self, namespace: Option<&[u8]>, msg: &[u8], sig: &Self::Signature) -> bool;
}

/// A public key with a stable [Address].
pub trait PublicKey: Verifier + Clone + Eq + Debug + Send + Sync + 'static {
    fn address(&self) -> Address;
}

/// A signature with a canonical byte encoding.
pub trait Signature:
    Clone
    + Eq
    + Debug
    + AsRef<[u8]>
    + for<'a> TryFrom<&'a [u8], Error = Error>
    + Send
    + Sync
    + 'static
{
}

/// A [Signature] that identifies its signer.
pub trait Recoverable: Signature {
    type PublicKey: PublicKey<Signature = Self>;

    /// Recovers the key that signed `msg` under `namespace`.
    ///
    /// `None` means no key could be recovered. Recovery over the wrong message or namespace
    /// usually succeeds but yields an unrelated key.
    fn recover_signer(&self, namespace: Option<&[u8]>, msg: &[u8]) -> Option<Self::PublicKey>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng as _};

    const NAMESPACE: &[u8] = b"_QUORUM_TEST";

    fn check_namespace_separation<C: PrivateKeyExt>() {
        let key = C::from_seed(3);
        let public_key = key.public_key();
        let signature = key.sign(Some(NAMESPACE), b"payload");
        assert!(public_key.verify(Some(NAMESPACE), b"payload", &signature));
        assert!(!public_key.verify(Some(b"_QUORUM_OTHER".as_slice()), b"payload", &signature));
        assert!(!public_key.verify(None, b"payload", &signature));
        assert!(!public_key.verify(Some(NAMESPACE), b"other", &signature));

        // An empty namespace is still a namespace.
        let signature = key.sign(Some(b"".as_slice()), b"payload");
        assert!(public_key.verify(Some(b"".as_slice()), b"payload", &signature));
        assert!(!public_key.verify(None, b"payload", &signature));
    }

    fn check_wrong_key<C: PrivateKeyExt>() {
        let mut rng = StdRng::seed_from_u64(9);
        let signer = C::from_rng(&mut rng);
        let other = C::from_rng(&mut rng);
        let signature = signer.sign(Some(NAMESPACE), b"payload");
        assert!(!other.public_key().verify(Some(NAMESPACE), b"payload", &signature));
    }

    fn check_recovery<C>()
    where
        C: PrivateKeyExt,
        C::Signature: Recoverable<PublicKey = C::PublicKey>,
    {
        let key = C::from_seed(11);
        let signature = key.sign(Some(NAMESPACE), b"payload");
        assert_eq!(
            signature.recover_signer(Some(NAMESPACE), b"payload"),
            Some(key.public_key())
        );
        assert_eq!(C::from_seed(11).sign(Some(NAMESPACE), b"payload"), signature);
        assert_ne!(
            signature.recover_signer(Some(NAMESPACE), b"other"),
            Some(key.public_key())
        );
    }

    #[test]
    fn test_secp256r1_namespace_separation() {
        check_namespace_separation::<secp256r1::PrivateKey>();
    }

    #[test]
    fn test_secp256r1_wrong_key() {
        check_wrong_key::<secp256r1::PrivateKey>();
    }

    #[test]
    fn test_secp256r1_recovery() {
        check_recovery::<secp256r1::PrivateKey>();
    }
}
