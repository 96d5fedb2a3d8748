//! Hybrid select directory: anchor positions plus a per-block resolver.

use super::layout::Layout;
use super::rank_index::RankIndex;
use crate::bit_vectors::BitVector;
use crate::size::SizeInBytes;
use crate::{utils, Error, Result};

/// Select directory of an [`RsBitVector`](crate::RsBitVector), separated from
/// the bit vector.
///
/// The anchors record the position of every `B`-th set bit, partitioning the
/// set bits into blocks of `B` ones (the final block may hold fewer). Each
/// block is resolved by one of two structures, chosen by the bit span of the
/// block:
///
/// - a k-ary tree whose nodes annotate each child with the number of set
///   bits preceding it, descended by prefix-sum comparison, when the span is
///   at most [`Layout::sparse_span`];
/// - the explicit array of the block's one-positions otherwise, answering in
///   one lookup where a tree over so wide a span would waste space.
///
/// Both resolvers answer identically; only space and step count differ.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectIndex {
    layout: Layout,
    anchors: Vec<usize>,
    blocks: Vec<SelectBlock>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum SelectBlock {
    Dense(TreeNode),
    Sparse(Vec<usize>),
}

/// Node of a dense-block tree, covering a contiguous bit interval.
///
/// A node owns its children; dropping a block's root releases the whole
/// subtree. `counts[c]` is the number of set bits between the start of the
/// interval and the start of child `c`, so `counts[0] == 0` and the sequence
/// is non-decreasing. A node with no children is a leaf and is scanned
/// directly; leaves cover at most `branching` bits.
#[derive(Debug, Clone, PartialEq, Eq)]
struct TreeNode {
    start: usize,
    len: usize,
    counts: Vec<usize>,
    children: Vec<TreeNode>,
}

impl SelectIndex {
    /// Builds a resolver for every select block delimited by `anchors`.
    ///
    /// `rank` must be the directory built over `bv`; dense-tree construction
    /// uses its constant-time rank to count the set bits of each child
    /// interval.
    pub(crate) fn build(
        bv: &BitVector,
        rank: &RankIndex,
        anchors: Vec<usize>,
        layout: Layout,
    ) -> Result<Self> {
        let mut blocks = Vec::with_capacity(anchors.len());
        for (q, &start) in anchors.iter().enumerate() {
            let end = match anchors.get(q + 1) {
                Some(&next) => next - 1,
                None => layout.num_bits() - 1,
            };
            let block = if end - start + 1 > layout.sparse_span() {
                let positions = bv.ones_from(start).take_while(|&pos| pos <= end).collect();
                SelectBlock::Sparse(positions)
            } else {
                SelectBlock::Dense(TreeNode::build(rank, start, end, layout.branching())?)
            };
            blocks.push(block);
        }
        Ok(Self {
            layout,
            anchors,
            blocks,
        })
    }

    /// Returns the 0-based position of the `k`-th set bit, where `k` is
    /// 1-indexed and already validated against the total one count.
    ///
    /// # Complexity
    ///
    /// - Logarithmic for dense blocks, constant for sparse blocks
    pub(crate) fn select1(&self, bv: &BitVector, k: usize) -> Result<usize> {
        let q = (k - 1) / self.layout.ones_per_block();
        let mut r = (k - 1) % self.layout.ones_per_block();
        match self.blocks.get(q) {
            Some(SelectBlock::Sparse(positions)) => positions
                .get(r)
                .copied()
                .ok_or(Error::Corrupted("sparse block shorter than its rank range")),
            Some(SelectBlock::Dense(root)) => {
                let mut node = root;
                while !node.children.is_empty() {
                    // The target lies in the last child preceded by at most
                    // `r` set bits.
                    let mut chosen = 0;
                    for (c, &count) in node.counts.iter().enumerate() {
                        if count <= r {
                            chosen = c;
                        } else {
                            break;
                        }
                    }
                    r -= node.counts[chosen];
                    node = node
                        .children
                        .get(chosen)
                        .ok_or(Error::Corrupted("dense tree lacks the chosen child"))?;
                }
                for pos in node.start..node.start + node.len {
                    if bv.get_bit(pos) == Some(true) {
                        if r == 0 {
                            return Ok(pos);
                        }
                        r -= 1;
                    }
                }
                Err(Error::Corrupted("dense leaf exhausted before the target rank"))
            }
            None => Err(Error::Corrupted("no select block for an in-range rank")),
        }
    }

    /// Returns the anchor positions: the position of every `B`-th set bit.
    pub fn anchors(&self) -> &[usize] {
        &self.anchors
    }

    /// Returns the number of select blocks (equally, anchors).
    #[inline(always)]
    pub fn num_blocks(&self) -> usize {
        self.blocks.len()
    }

    /// Returns the number of blocks resolved by a tree.
    pub fn num_dense_blocks(&self) -> usize {
        self.blocks
            .iter()
            .filter(|b| matches!(b, SelectBlock::Dense(_)))
            .count()
    }

    /// Returns the number of blocks resolved by a position array.
    pub fn num_sparse_blocks(&self) -> usize {
        self.blocks.len() - self.num_dense_blocks()
    }

    /// Returns the cumulative size of all tree nodes in bytes.
    pub fn tree_size_in_bytes(&self) -> usize {
        self.blocks
            .iter()
            .map(|b| match b {
                SelectBlock::Dense(root) => root.size_in_bytes(),
                SelectBlock::Sparse(_) => 0,
            })
            .sum()
    }

    /// Returns the cumulative size of all sparse position arrays in bytes.
    pub fn sparse_size_in_bytes(&self) -> usize {
        self.blocks
            .iter()
            .map(|b| match b {
                SelectBlock::Dense(_) => 0,
                SelectBlock::Sparse(positions) => positions.size_in_bytes(),
            })
            .sum()
    }
}

impl TreeNode {
    /// Builds the tree over the bit interval `[lo, hi]`.
    ///
    /// Children split the interval into `branching` equal widths, rounding
    /// the width up so no bit is orphaned; the final child takes whatever
    /// remains.
    fn build(rank: &RankIndex, lo: usize, hi: usize, branching: usize) -> Result<Self> {
        let len = hi - lo + 1;
        if len <= branching {
            return Ok(Self {
                start: lo,
                len,
                counts: Vec::new(),
                children: Vec::new(),
            });
        }
        let width = utils::ceiled_divide(len, branching);
        let mut counts = Vec::with_capacity(branching);
        let mut children = Vec::with_capacity(branching);
        let mut prefix = 0;
        let mut child_lo = lo;
        while child_lo <= hi {
            let child_hi = hi.min(child_lo + width - 1);
            counts.push(prefix);
            prefix += ones_between(rank, child_lo, child_hi)?;
            children.push(Self::build(rank, child_lo, child_hi, branching)?);
            child_lo = child_hi + 1;
        }
        Ok(Self {
            start: lo,
            len,
            counts,
            children,
        })
    }
}

/// Counts the set bits in the inclusive interval `[lo, hi]`.
fn ones_between(rank: &RankIndex, lo: usize, hi: usize) -> Result<usize> {
    let through_hi = rank.rank1(hi)?;
    if lo == 0 {
        Ok(through_hi)
    } else {
        Ok(through_hi - rank.rank1(lo - 1)?)
    }
}

impl SizeInBytes for SelectIndex {
    fn size_in_bytes(&self) -> usize {
        std::mem::size_of::<Layout>() + self.anchors.size_in_bytes() + self.blocks.size_in_bytes()
    }
}

impl SizeInBytes for SelectBlock {
    fn size_in_bytes(&self) -> usize {
        let payload = match self {
            Self::Dense(root) => root.size_in_bytes(),
            Self::Sparse(positions) => positions.size_in_bytes(),
        };
        payload + bool::size_of().unwrap_or(1)
    }
}

impl SizeInBytes for TreeNode {
    fn size_in_bytes(&self) -> usize {
        self.start.size_in_bytes()
            + self.len.size_in_bytes()
            + self.counts.size_in_bytes()
            + self.children.size_in_bytes()
    }
}
