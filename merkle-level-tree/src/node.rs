//! The digest type shared by every tree level.

use std::fmt;

use crate::{Error, Result};

/// A single digest in the tree: a leaf hash or an internal combination hash.
///
/// The byte length is fixed by the [`Hasher`](crate::Hasher) that produced
/// the node and is never inspected by the tree itself. Nodes are immutable
/// once produced.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Node {
    hash: Vec<u8>,
}

impl Node {
    /// Wrap raw digest bytes.
    pub fn new(hash: Vec<u8>) -> Self {
        Node { hash }
    }

    /// Parse a node from its lowercase hex representation.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hash = hex::decode(hex).map_err(|e| Error::InvalidData(e.to_string()))?;
        Ok(Node { hash })
    }

    /// The raw digest bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.hash
    }

    /// Consume the node and return the raw digest bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.hash
    }

    /// Digest length in bytes.
    pub fn len(&self) -> usize {
        self.hash.len()
    }

    /// `true` when the digest is empty. Only a degenerate hasher produces
    /// zero-length digests.
    pub fn is_empty(&self) -> bool {
        self.hash.is_empty()
    }

    /// Lowercase hex representation of the digest.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.hash)
    }
}

impl AsRef<[u8]> for Node {
    fn as_ref(&self) -> &[u8] {
        &self.hash
    }
}

impl From<Vec<u8>> for Node {
    fn from(hash: Vec<u8>) -> Self {
        Node::new(hash)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Node({})", self.to_hex())
    }
}
