//! Replay protection.

/// A counter that advances by exactly one per accepted signature set.
///
/// Signers bind the current value into every signature, so a signature set is only
/// ever accepted once: after it is accepted, the value it was signed over is gone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Nonce(u64);

impl Nonce {
    /// Returns the value the next signature set must be signed over.
    pub fn get(&self) -> u64 {
        self.0
    }

    pub(crate) fn advance(&mut self) {
        self.0 += 1;
    }
}
