//! Boolean - truth value with a salted hash
//!
//! Comparison and truthiness behave exactly like the wrapped `bool`. The hash
//! does not: it is taken from `hash_value`, which defaults to a fresh random
//! [`HashSalt`]. Someone who can observe hash buckets therefore cannot tell
//! two boolean-gated conditions apart by their truth value, nor correlate two
//! conditions holding the same value.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::error::ArgumentError;

use super::{Comparable, Truthy};

/// 128 random bits drawn when a [`Boolean`] is built without an explicit
/// hash value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashSalt(u128);

impl HashSalt {
    /// Draws a salt from the thread-local RNG.
    pub fn random() -> Self {
        Self(rand::random())
    }

    pub fn from_u128(salt: u128) -> Self {
        Self(salt)
    }

    pub fn as_u128(&self) -> u128 {
        self.0
    }
}

/// Truth value wrapper.
///
/// `hash(Boolean::with_hash_value(x, h)) == hash(h)` for any `x`, and two
/// `Boolean::new(x)` never hash alike (up to a 2^-128 chance).
///
/// Deliberately not `PartialEq`: two equal truth values hash differently, so
/// an `Eq` impl would break the `Hash` contract for map keys. Use
/// [`Comparable::compare`] instead.
#[derive(Debug, Clone, Copy)]
pub struct Boolean<H = HashSalt> {
    pub value: bool,
    pub hash_value: H,
}

impl Boolean {
    /// Wraps `value` with a freshly drawn salt.
    pub fn new(value: bool) -> Self {
        Self {
            value,
            hash_value: HashSalt::random(),
        }
    }
}

impl<H> Boolean<H> {
    /// Wraps `value`, hashing `hash_value` in place of it.
    pub fn with_hash_value(value: bool, hash_value: H) -> Self {
        Self { value, hash_value }
    }
}

impl<H: Hash> Hash for Boolean<H> {
    fn hash<S: Hasher>(&self, state: &mut S) {
        self.hash_value.hash(state);
    }
}

impl<H> Comparable<bool> for Boolean<H> {
    fn compare(&self, other: &bool) -> Result<Ordering, ArgumentError> {
        Ok(self.value.cmp(other))
    }
}

impl<H, O> Comparable<Boolean<O>> for Boolean<H> {
    fn compare(&self, other: &Boolean<O>) -> Result<Ordering, ArgumentError> {
        self.compare(&other.value)
    }
}

impl<H> Truthy for Boolean<H> {
    fn is_truthy(&self) -> bool {
        self.value
    }
}

impl From<bool> for Boolean {
    fn from(value: bool) -> Self {
        Self::new(value)
    }
}
