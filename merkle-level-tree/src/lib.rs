//! Levelled binary Merkle tree with pluggable hashing.
//!
//! Builds the whole level structure eagerly from an ordered sequence of
//! leaf values, then exposes read-only accessors over it:
//!
//! - leaf level: `hash(value)`, one node per input, order preserved
//! - internal nodes: `hash(left || right)`, where a lone trailing node is
//!   concatenated with a copy of itself and rehashed
//! - level `0` is the root level, level `depth` the leaf level
//!
//! Hashing is pluggable through the [`Hasher`] trait. [`Sha256Hasher`] is
//! the default, and any RustCrypto digest plugs in via [`DigestHasher`].
//!
//! Construction is a one-shot operation; a built tree is immutable and can
//! be shared across threads for reads without locking.

#![warn(missing_docs)]

mod error;
mod hash;
mod node;
mod tree;


pub use error::{Error, Result};
pub use hash::{DEFAULT_HASHER, DigestHasher, Hasher, Sha256Hasher};
pub use node::Node;
pub use tree::MerkleTree;
