use crate::Error;
use quorum_cryptography::Address;

/// Configuration for an [crate::Admin].
#[derive(Clone, Debug)]
pub struct Config {
    /// Identity of the admin instance, bound into every message as its target.
    pub address: Address,

    /// Initial holders of the admin slots. The number of slots is also the exact number of
    /// signatures every verification expects.
    pub admins: Vec<Address>,

    /// Minimum number of valid, ascending signatures required to authorize a call.
    pub threshold: u32,
}

impl Config {
    /// Returns the threshold used when none is chosen explicitly: three quarters of the
    /// signers, rounded up (4 of 5).
    pub fn default_threshold(signers: usize) -> u32 {
        let threshold = (3 * signers).div_ceil(4).max(1);
        u32::try_from(threshold).unwrap_or(u32::MAX)
    }

    /// Ensures `1 <= threshold <= admins.len()`.
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.threshold == 0 || self.threshold as usize > self.admins.len() {
            return Err(Error::InvalidThreshold {
                threshold: self.threshold,
                signers: self.admins.len(),
            });
        }
        Ok(())
    }
}
