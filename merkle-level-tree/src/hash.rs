//! Pluggable hashing: the [`Hasher`] trait and RustCrypto digest adapters.

use std::{fmt, marker::PhantomData};

use digest::Digest;

use crate::{Node, Result};

/// A deterministic digest function, used both for leaf ingestion and for
/// internal-node combination within a tree.
///
/// Implementations must be pure: the same input always yields the same
/// output. The fallible signature lets adapters over external hashing
/// backends abort tree construction cleanly instead of panicking; the
/// implementations provided by this crate never fail.
pub trait Hasher {
    /// Hash `input` to a fixed-length digest.
    fn hash(&self, input: &[u8]) -> Result<Node>;
}

/// Adapter implementing [`Hasher`] for any RustCrypto [`Digest`].
///
/// The adapter is zero-sized; the digest algorithm lives purely in the type
/// parameter, so a fresh digest instance is used per call and no state is
/// observable across calls.
pub struct DigestHasher<D> {
    _marker: PhantomData<D>,
}

impl<D> DigestHasher<D> {
    /// Create the adapter.
    pub const fn new() -> Self {
        DigestHasher {
            _marker: PhantomData,
        }
    }
}

impl<D: Digest> Hasher for DigestHasher<D> {
    fn hash(&self, input: &[u8]) -> Result<Node> {
        Ok(Node::new(D::digest(input).to_vec()))
    }
}

// Manual impls so they hold regardless of the algorithm type parameter.

impl<D> Clone for DigestHasher<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for DigestHasher<D> {}

impl<D> Default for DigestHasher<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> fmt::Debug for DigestHasher<D> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("DigestHasher")
    }
}

/// The default hasher: SHA-256.
pub type Sha256Hasher = DigestHasher<sha2::Sha256>;

/// The default hasher as a standalone value, usable without constructing a
/// tree.
pub const DEFAULT_HASHER: Sha256Hasher = DigestHasher::new();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_known_digest() {
        // sha256("abc"), the FIPS 180-2 sample vector.
        let node = DEFAULT_HASHER.hash(b"abc").expect("sha256 never fails");
        assert_eq!(
            node.to_hex(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_adapter_is_deterministic() {
        let a = DEFAULT_HASHER.hash(b"same input").expect("hash");
        let b = DEFAULT_HASHER.hash(b"same input").expect("hash");
        assert_eq!(a, b);
    }
}
