//! Idempotent membership toggles.
//!
//! A toggle authorizes (or deauthorizes) a list of keys left-to-right. Each key is checked
//! against the current state, including the effect of keys earlier in the same list, so
//! repeating a key within one call conflicts just like repeating it across calls.

use std::collections::BTreeSet;

/// Why a key could not be toggled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Conflict<K> {
    /// The key was already a member.
    Present(K),
    /// The key was not a member.
    Absent(K),
}

impl<K> Conflict<K> {
    /// Converts the conflict into an error with the given constructors.
    pub fn into_error<E>(self, present: impl FnOnce(K) -> E, absent: impl FnOnce(K) -> E) -> E {
        match self {
            Self::Present(key) => present(key),
            Self::Absent(key) => absent(key),
        }
    }
}

/// A set of authorized keys.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Membership<K: Ord> {
    members: BTreeSet<K>,
}

impl<K: Ord> Default for Membership<K> {
    fn default() -> Self {
        Self {
            members: BTreeSet::new(),
        }
    }
}

impl<K: Ord + Clone> Membership<K> {
    pub fn contains(&self, key: &K) -> bool {
        self.members.contains(key)
    }

    /// Adds (`member = true`) or removes (`member = false`) a single key.
    pub fn set(&mut self, key: &K, member: bool) -> Result<(), Conflict<K>> {
        if member {
            if !self.members.insert(key.clone()) {
                return Err(Conflict::Present(key.clone()));
            }
        } else if !self.members.remove(key) {
            return Err(Conflict::Absent(key.clone()));
        }
        Ok(())
    }

    /// Toggles every key in order, stopping at the first conflict.
    ///
    /// On conflict, keys before the conflicting one have already been applied; callers
    /// that need all-or-nothing semantics must apply to a staged copy.
    pub fn set_all(&mut self, keys: &[K], member: bool) -> Result<(), Conflict<K>> {
        for key in keys {
            self.set(key, member)?;
        }
        Ok(())
    }
}
