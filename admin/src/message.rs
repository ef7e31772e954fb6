//! Canonical encoding of operation requests.
//!
//! A [Message] binds a target identity, an operation name, and an ordered list of typed
//! [Argument]s into a single byte string. Every argument is prefixed with a type tag and every
//! variable-length payload with its length, so distinct `(target, operation, arguments)` tuples
//! never encode to the same bytes.
//!
//! # Format
//!
//! ```text
//! target (20) || varint(len(operation)) || operation || varint(len(arguments)) || argument*
//! argument := tag (1) || payload
//! ```

use bytes::{BufMut, Bytes};
use commonware_codec::{EncodeSize, Write};
use quorum_cryptography::Address;

const TAG_ADDRESS: u8 = 0x01;
const TAG_ADDRESSES: u8 = 0x02;
const TAG_BOOL: u8 = 0x03;
const TAG_BOOLS: u8 = 0x04;
const TAG_UINT: u8 = 0x05;
const TAG_UINTS: u8 = 0x06;
const TAG_BYTES32: u8 = 0x07;
const TAG_BYTES32S: u8 = 0x08;
const TAG_BYTES: u8 = 0x09;
const TAG_STRING: u8 = 0x0a;

/// A typed operation argument.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Argument {
    Address(Address),
    Addresses(Vec<Address>),
    Bool(bool),
    Bools(Vec<bool>),
    Uint(u64),
    Uints(Vec<u64>),
    Bytes32([u8; 32]),
    Bytes32s(Vec<[u8; 32]>),
    Bytes(Bytes),
    String(String),
}

fn write_str(value: &str, buf: &mut impl BufMut) {
    value.len().write(buf);
    buf.put_slice(value.as_bytes());
}

fn str_size(value: &str) -> usize {
    value.len().encode_size() + value.len()
}

impl Argument {
    fn tag(&self) -> u8 {
        match self {
            Self::Address(_) => TAG_ADDRESS,
            Self::Addresses(_) => TAG_ADDRESSES,
            Self::Bool(_) => TAG_BOOL,
            Self::Bools(_) => TAG_BOOLS,
            Self::Uint(_) => TAG_UINT,
            Self::Uints(_) => TAG_UINTS,
            Self::Bytes32(_) => TAG_BYTES32,
            Self::Bytes32s(_) => TAG_BYTES32S,
            Self::Bytes(_) => TAG_BYTES,
            Self::String(_) => TAG_STRING,
        }
    }
}

impl Write for Argument {
    fn write(&self, buf: &mut impl BufMut) {
        self.tag().write(buf);
        match self {
            Self::Address(address) => address.write(buf),
            Self::Addresses(addresses) => addresses.write(buf),
            Self::Bool(value) => value.write(buf),
            Self::Bools(values) => values.write(buf),
            Self::Uint(value) => value.write(buf),
            Self::Uints(values) => values.write(buf),
            Self::Bytes32(value) => value.write(buf),
            Self::Bytes32s(values) => values.write(buf),
            Self::Bytes(value) => value.write(buf),
            Self::String(value) => write_str(value, buf),
        }
    }
}

impl EncodeSize for Argument {
    fn encode_size(&self) -> usize {
        let payload = match self {
            Self::Address(address) => address.encode_size(),
            Self::Addresses(addresses) => addresses.encode_size(),
            Self::Bool(value) => value.encode_size(),
            Self::Bools(values) => values.encode_size(),
            Self::Uint(value) => value.encode_size(),
            Self::Uints(values) => values.encode_size(),
            Self::Bytes32(value) => value.encode_size(),
            Self::Bytes32s(values) => values.encode_size(),
            Self::Bytes(value) => value.encode_size(),
            Self::String(value) => str_size(value),
        };
        self.tag().encode_size() + payload
    }
}

/// A request to run `operation` on `target` with `arguments`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    target: Address,
    operation: String,
    arguments: Vec<Argument>,
}

impl Message {
    /// Creates a message with no arguments.
    pub fn new(target: Address, operation: impl Into<String>) -> Self {
        Self {
            target,
            operation: operation.into(),
            arguments: Vec::new(),
        }
    }

    /// Appends an argument.
    pub fn with(mut self, argument: Argument) -> Self {
        self.arguments.push(argument);
        self
    }

    pub fn target(&self) -> &Address {
        &self.target
    }

    pub fn operation(&self) -> &str {
        &self.operation
    }

    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }
}

impl Write for Message {
    fn write(&self, buf: &mut impl BufMut) {
        self.target.write(buf);
        write_str(&self.operation, buf);
        self.arguments.write(buf);
    }
}

impl EncodeSize for Message {
    fn encode_size(&self) -> usize {
        self.target.encode_size() + str_size(&self.operation) + self.arguments.encode_size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use commonware_codec::Encode as _;
    use quorum_utils::hex;

    fn target(byte: u8) -> Address {
        Address::new([byte; 20])
    }

    #[test]
    fn test_encode_layout() {
        let message = Message::new(target(0xaa), "op")
            .with(Argument::Bool(true))
            .with(Argument::Uint(258));
        let encoded = message.encode();

        let mut expected = vec![0xaa; 20];
        expected.extend_from_slice(&[0x02, b'o', b'p']);
        expected.push(0x02);
        expected.extend_from_slice(&[TAG_BOOL, 0x01]);
        expected.extend_from_slice(&[TAG_UINT, 0, 0, 0, 0, 0, 0, 0x01, 0x02]);
        assert_eq!(hex(&encoded), hex(&expected));
    }

    #[test]
    fn test_encode_size_matches_every_argument() {
        let message = Message::new(target(1), "everything")
            .with(Argument::Address(target(2)))
            .with(Argument::Addresses(vec![target(3), target(4)]))
            .with(Argument::Bool(false))
            .with(Argument::Bools(vec![true, false, true]))
            .with(Argument::Uint(u64::MAX))
            .with(Argument::Uints(vec![1, 2]))
            .with(Argument::Bytes32([9; 32]))
            .with(Argument::Bytes32s(vec![[1; 32]]))
            .with(Argument::Bytes(Bytes::from(vec![0; 300])))
            .with(Argument::String("zone".into()));
        assert_eq!(message.encode().len(), message.encode_size());
    }

    #[test]
    fn test_deterministic() {
        let build = || {
            Message::new(target(7), "authorizeManagers")
                .with(Argument::Addresses(vec![target(1), target(2)]))
                .with(Argument::Bool(true))
        };
        assert_eq!(build().encode(), build().encode());
    }

    #[test]
    fn test_no_collisions() {
        let base = Message::new(target(7), "ab").with(Argument::String("c".into()));
        let shifted = Message::new(target(7), "a").with(Argument::String("bc".into()));
        assert_ne!(base.encode(), shifted.encode());

        // Same bytes under different types must differ.
        let as_bytes =
            Message::new(target(7), "op").with(Argument::Bytes(Bytes::from_static(b"x")));
        let as_string = Message::new(target(7), "op").with(Argument::String("x".into()));
        assert_ne!(as_bytes.encode(), as_string.encode());

        // Splitting a list across two arguments must differ from one list.
        let one = Message::new(target(7), "op").with(Argument::Bools(vec![true, true]));
        let two = Message::new(target(7), "op")
            .with(Argument::Bools(vec![true]))
            .with(Argument::Bools(vec![true]));
        assert_ne!(one.encode(), two.encode());

        // The target is bound into the message.
        let other_target = Message::new(target(8), "ab").with(Argument::String("c".into()));
        assert_ne!(base.encode(), other_target.encode());
    }

    #[test]
    fn test_argument_order_matters() {
        let a = Message::new(target(1), "op")
            .with(Argument::Uint(1))
            .with(Argument::Uint(2));
        let b = Message::new(target(1), "op")
            .with(Argument::Uint(2))
            .with(Argument::Uint(1));
        assert_ne!(a.encode(), b.encode());
    }
}
