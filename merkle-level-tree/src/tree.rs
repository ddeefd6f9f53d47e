//! Tree construction and the read-only query surface.

use crate::{DEFAULT_HASHER, Error, Hasher, Node, Result, Sha256Hasher};

/// A binary hash tree committing to an ordered sequence of leaf values.
///
/// Levels are stored root-first: level `0` holds the single root digest and
/// level `depth` holds one digest per input value, in input order. The whole
/// structure is computed once at construction; queries never hash anything.
/// A built tree is immutable, so concurrent read access needs no locking.
#[derive(Debug, Clone)]
pub struct MerkleTree<H = Sha256Hasher> {
    /// `levels[0]` is the root level, `levels[depth]` the leaf level.
    levels: Vec<Vec<Node>>,
    leaf_count: usize,
    hasher: H,
}

impl MerkleTree<Sha256Hasher> {
    /// Build a tree over `leaves` with the default SHA-256 hasher.
    ///
    /// Each input value is hashed once to form the leaf level, then adjacent
    /// pairs are combined upward until a single root remains. Zero leaves is
    /// accepted: the tree then holds a single level whose only node is the
    /// digest of the empty byte string.
    pub fn new<I>(leaves: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        Self::with_hasher(leaves, DEFAULT_HASHER)
    }
}

impl<H: Hasher> MerkleTree<H> {
    /// Build a tree over `leaves`, using `hasher` for every digest computed
    /// within the tree (leaf ingestion and internal-node combination alike).
    ///
    /// Construction is all-or-nothing: a hasher failure aborts it and no
    /// partially built tree is observable.
    pub fn with_hasher<I>(leaves: I, hasher: H) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        let leaf_level = leaves
            .into_iter()
            .map(|leaf| hasher.hash(leaf.as_ref()))
            .collect::<Result<Vec<Node>>>()?;
        let leaf_count = leaf_level.len();

        // An empty input still commits to something: the digest of the
        // empty byte string stands in as the only stored level.
        let mut levels = if leaf_level.is_empty() {
            vec![vec![hasher.hash(&[])?]]
        } else {
            vec![leaf_level]
        };

        loop {
            let current = levels.last().expect("levels never empty");
            if current.len() <= 1 {
                break;
            }
            let parent = combine(current, &hasher)?;
            levels.push(parent);
        }
        levels.reverse();

        Ok(MerkleTree {
            levels,
            leaf_count,
            hasher,
        })
    }

    /// Number of levels above the leaf level.
    ///
    /// Equals the number of halving steps from the leaf count down to one;
    /// `0` for trees built over one or fewer leaves.
    pub fn depth(&self) -> usize {
        self.levels.len() - 1
    }

    /// Total number of stored levels, including the leaf level.
    pub fn levels(&self) -> usize {
        self.levels.len()
    }

    /// The nodes at `index`, ordered left to right.
    ///
    /// Level `0` is the root level, level [`depth`](Self::depth) the leaf
    /// level. Indices outside that window fail with
    /// [`Error::LevelOutOfRange`].
    pub fn level(&self, index: usize) -> Result<&[Node]> {
        self.levels
            .get(index)
            .map(Vec::as_slice)
            .ok_or(Error::LevelOutOfRange {
                index,
                depth: self.depth(),
            })
    }

    /// The root digest, committing to the entire leaf sequence.
    pub fn root(&self) -> &Node {
        &self.levels[0][0]
    }

    /// Total number of computed internal nodes.
    ///
    /// Leaves are supplied inputs rather than combination results, so the
    /// leaf level is excluded from the count.
    pub fn nodes(&self) -> usize {
        self.levels[..self.depth()].iter().map(Vec::len).sum()
    }

    /// Number of raw input values the tree was built over.
    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    /// The hasher this tree was built with.
    pub fn hasher(&self) -> &H {
        &self.hasher
    }
}

/// Derive the parent level of `children` by pairwise combination.
///
/// Operands are concatenated strictly in index order, never reordered. A
/// trailing unpaired node is concatenated with a copy of itself and
/// rehashed, so the parent level always has `ceil(n / 2)` nodes.
fn combine<H: Hasher>(children: &[Node], hasher: &H) -> Result<Vec<Node>> {
    let mut parent = Vec::with_capacity(children.len().div_ceil(2));
    for pair in children.chunks(2) {
        let left = &pair[0];
        let right = pair.get(1).unwrap_or(left);
        let mut input = Vec::with_capacity(left.len() + right.len());
        input.extend_from_slice(left.as_bytes());
        input.extend_from_slice(right.as_bytes());
        parent.push(hasher.hash(&input)?);
    }
    Ok(parent)
}
