//! Authorize privileged operations with k-of-n admin signatures.
//!
//! # Overview
//!
//! An [Admin] holds a fixed list of admin slots, a dynamic set of managers, and a
//! monotonically increasing nonce. Every privileged call carries one signature per admin
//! slot over the call's canonical [Message] bound to the current nonce. The call commits
//! only if at least `threshold` entries recover to distinct registered signers appearing in
//! strictly ascending address order; unused slots may be filled with placeholders.
//!
//! A successful call advances the nonce by one, which invalidates every signature set
//! produced for the previous nonce. A failed call changes nothing.
//!
//! # Example
//!
//! ```rust
//! use commonware_codec::Encode as _;
//! use quorum_admin::{mocks, signer, Admin, Config, Operation};
//! use quorum_cryptography::{secp256r1, PrivateKeyExt as _, PublicKey as _, Signer as _};
//!
//! let keys: Vec<_> = (0..3).map(secp256r1::PrivateKey::from_seed).collect();
//! let admins = keys.iter().map(|key| key.public_key().address()).collect();
//! let manager = secp256r1::PrivateKey::from_seed(42).public_key().address();
//!
//! let cfg = Config {
//!     address: secp256r1::PrivateKey::from_seed(100).public_key().address(),
//!     admins,
//!     threshold: 2,
//! };
//! let reporter = mocks::Reporter::default();
//! let mut admin =
//!     Admin::<secp256r1::Signature, _>::new(cfg, reporter.clone()).expect("valid config");
//!
//! let operation = Operation::AuthorizeManagers {
//!     accounts: vec![manager],
//!     is_manager: true,
//! };
//! let message = operation.message(admin.address()).encode();
//! let signatures = signer::sign_all(&keys, &message, admin.nonce());
//! admin
//!     .authorize_managers(&manager, vec![manager], true, &signatures)
//!     .expect("authorized");
//!
//! assert!(admin.is_manager(&manager));
//! assert_eq!(admin.nonce(), 1);
//! assert_eq!(reporter.events().len(), 2);
//! ```

mod admin;
pub use admin::Admin;
mod config;
pub use config::Config;
mod error;
pub use error::Error;
pub mod membership;
pub mod message;
pub use message::{Argument, Message};
pub mod mocks;
mod nonce;
pub use nonce::Nonce;
mod operation;
pub use operation::Operation;
pub mod registry;
pub mod reporter;
pub mod signer;
mod types;
pub use types::{CurrencyRegistry, Event, Zone};
pub mod verifier;

/// Namespace every admin signature is produced under.
pub const NAMESPACE: &[u8] = b"_QUORUM_ADMIN";

/// Receives activity emitted by an [Admin].
pub trait Reporter: Send + 'static {
    /// Activity reported.
    type Activity;

    /// Reports some activity.
    fn report(&mut self, activity: Self::Activity);
}
