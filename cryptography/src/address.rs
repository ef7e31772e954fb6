//! Signer identities.

use crate::Error;
use bytes::BufMut;
use commonware_codec::{FixedSize, Write};
use quorum_utils::hex;
use sha2::{Digest as _, Sha256};
use std::fmt::{Debug, Display};

const ADDRESS_LENGTH: usize = 20;

/// A 20-byte identity derived from a public key.
///
/// Addresses are totally ordered by their bytes, which is equivalent to comparing
/// them as big-endian integers.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
#[repr(transparent)]
pub struct Address([u8; ADDRESS_LENGTH]);

impl Address {
    /// Creates an [Address] from raw bytes.
    pub const fn new(value: [u8; ADDRESS_LENGTH]) -> Self {
        Self(value)
    }

    /// Derives the [Address] of an uncompressed point (`x || y`, without the SEC 1 tag).
    ///
    /// The address is the trailing 20 bytes of the SHA-256 digest of the point.
    pub fn from_point(point: &[u8]) -> Self {
        let digest = Sha256::digest(point);
        let mut address = [0u8; ADDRESS_LENGTH];
        address.copy_from_slice(&digest[digest.len() - ADDRESS_LENGTH..]);
        Self(address)
    }
}

impl From<[u8; ADDRESS_LENGTH]> for Address {
    fn from(value: [u8; ADDRESS_LENGTH]) -> Self {
        Self(value)
    }
}

impl TryFrom<&[u8]> for Address {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        let array: [u8; ADDRESS_LENGTH] = value.try_into().map_err(|_| Error::InvalidLength {
            expected: ADDRESS_LENGTH,
            found: value.len(),
        })?;
        Ok(Self(array))
    }
}

impl Write for Address {
    fn write(&self, buf: &mut impl BufMut) {
        self.0.write(buf);
    }
}

impl FixedSize for Address {
    const SIZE: usize = ADDRESS_LENGTH;
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Debug for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{}", hex(&self.0))
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{}", hex(&self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let mut bytes = [0u8; ADDRESS_LENGTH];
        bytes[ADDRESS_LENGTH - 1] = 0xab;
        let address = Address::new(bytes);
        assert_eq!(
            address.to_string(),
            "0x00000000000000000000000000000000000000ab"
        );
        assert_eq!(format!("{:?}", address), address.to_string());
    }

    #[test]
    fn test_ordering_is_numeric() {
        let mut low = [0u8; ADDRESS_LENGTH];
        low[ADDRESS_LENGTH - 1] = 0xff;
        let mut high = [0u8; ADDRESS_LENGTH];
        high[0] = 0x01;
        assert!(Address::new(low) < Address::new(high));
    }

    #[test]
    fn test_try_from() {
        let bytes = vec![7u8; ADDRESS_LENGTH];
        assert_eq!(
            Address::try_from(bytes.as_slice()).unwrap(),
            Address::new([7u8; ADDRESS_LENGTH])
        );
        assert_eq!(
            Address::try_from(&bytes[1..]),
            Err(Error::InvalidLength {
                expected: ADDRESS_LENGTH,
                found: ADDRESS_LENGTH - 1,
            })
        );
    }

    #[test]
    fn test_from_point_uses_trailing_digest_bytes() {
        let point = [1u8; 64];
        let digest = Sha256::digest(point);
        let address = Address::from_point(&point);
        assert_eq!(address.as_ref(), &digest[12..]);
    }

    #[test]
    fn test_encode() {
        use commonware_codec::Encode as _;

        let address = Address::new([5u8; ADDRESS_LENGTH]);
        let encoded = address.encode();
        assert_eq!(encoded.len(), Address::SIZE);
        assert_eq!(&encoded[..], address.as_ref());
    }
}
