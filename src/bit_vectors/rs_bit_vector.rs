//! Rank/select data structure over a bit vector through a two-level rank
//! directory and hybrid per-block select resolvers.
pub mod layout;
pub mod rank_index;
pub mod select_index;

use crate::bit_vectors::{Access, BitVector, Build, NumBits, Rank, Select};
use crate::size::SizeInBytes;
use crate::{Error, Result};

pub use layout::Layout;
use rank_index::RankIndex;
use select_index::SelectIndex;

/// Rank/select data structure over a bit vector, with constant-time rank and
/// logarithmic-time select.
///
/// [`RsBitVector`] stores the raw bits in a plain [`BitVector`] and builds
/// two read-only directories over them:
///
/// - a rank directory of cumulative counts over two block granularities plus
///   packed per-block keys, resolved through a popcount lookup table
///   ([`rank_index::RankIndex`]);
/// - a select directory sampling the position of every `B`-th set bit, where
///   each sampled block is resolved by a k-ary cumulative-count tree or an
///   explicit position array depending on its bit span
///   ([`select_index::SelectIndex`]).
///
/// All block widths are derived from the input length (see [`Layout`]). The
/// structure is immutable after construction and safe to query from multiple
/// threads.
///
/// # Examples
///
/// ```
/// use sucbv::bit_vectors::{RsBitVector, prelude::*};
///
/// let bv = RsBitVector::from_bits([true, false, false, true]).unwrap();
///
/// assert_eq!(bv.num_bits(), 4);
/// assert_eq!(bv.num_ones(), 2);
///
/// assert_eq!(bv.rank1(2), Ok(1));
/// assert_eq!(bv.rank1(3), Ok(2));
///
/// assert_eq!(bv.select1(1), Ok(0));
/// assert_eq!(bv.select1(2), Ok(3));
/// ```
///
/// # References
///
/// - G. Jacobson, "Succinct static data structures," PhD thesis, 1989.
/// - D. Clark, "Compact Pat trees," PhD thesis, 1996.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsBitVector {
    bv: BitVector,
    layout: Layout,
    rank: RankIndex,
    select: SelectIndex,
}

impl RsBitVector {
    /// Creates a new instance from input bit stream `bits`.
    ///
    /// # Arguments
    ///
    /// - `bits`: Bit stream.
    ///
    /// # Errors
    ///
    /// An error is returned only if index construction fails; any finite bit
    /// stream, including an empty one, is a valid input.
    pub fn from_bits<I>(bits: I) -> Result<Self>
    where
        I: IntoIterator<Item = bool>,
    {
        Self::build(BitVector::from_bits(bits))
    }

    /// Creates a new instance from a bit source that advertises its length.
    ///
    /// # Arguments
    ///
    /// - `len`: Number of bits the source claims to yield.
    /// - `bits`: Bit stream.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidSize`] if the stream yields a number of bits different
    /// from `len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sucbv::bit_vectors::RsBitVector;
    ///
    /// assert!(RsBitVector::from_sized_bits(3, [true, false, true]).is_ok());
    /// assert!(RsBitVector::from_sized_bits(4, [true, false, true]).is_err());
    /// ```
    pub fn from_sized_bits<I>(len: usize, bits: I) -> Result<Self>
    where
        I: IntoIterator<Item = bool>,
    {
        let bv = BitVector::from_bits(bits);
        if bv.len() != len {
            return Err(Error::InvalidSize {
                expected: len,
                actual: bv.len(),
            });
        }
        Self::build(bv)
    }

    fn build(bv: BitVector) -> Result<Self> {
        let layout = Layout::new(bv.len());
        let (rank, anchors) = RankIndex::build(&bv, layout);
        let select = SelectIndex::build(&bv, &rank, anchors, layout)?;
        Ok(Self {
            bv,
            layout,
            rank,
            select,
        })
    }

    /// Returns the reference of the internal plain bit vector.
    pub const fn bit_vector(&self) -> &BitVector {
        &self.bv
    }

    /// Returns the block widths derived at construction.
    pub const fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Returns the reference of the internal rank directory.
    pub const fn rank_index(&self) -> &RankIndex {
        &self.rank
    }

    /// Returns the reference of the internal select directory.
    pub const fn select_index(&self) -> &SelectIndex {
        &self.select
    }

    /// Returns the number of bits stored.
    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.bv.len()
    }

    /// Checks if the vector is empty.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Build for RsBitVector {
    /// Creates a new vector from input bit stream `bits`.
    ///
    /// # Arguments
    ///
    /// - `bits`: Bit stream.
    ///
    /// # Errors
    ///
    /// An error is returned only if index construction fails.
    fn build_from_bits<I>(bits: I) -> Result<Self>
    where
        I: IntoIterator<Item = bool>,
        Self: Sized,
    {
        Self::from_bits(bits)
    }
}

impl NumBits for RsBitVector {
    /// Returns the number of bits stored.
    fn num_bits(&self) -> usize {
        self.len()
    }

    /// Returns the number of bits set, counted once at construction.
    fn num_ones(&self) -> usize {
        self.rank.num_ones()
    }
}

impl Access for RsBitVector {
    /// Returns the `pos`-th bit, or [`None`] if out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use sucbv::bit_vectors::{RsBitVector, Access};
    ///
    /// let bv = RsBitVector::from_bits([true, false, false]).unwrap();
    /// assert_eq!(bv.access(0), Some(true));
    /// assert_eq!(bv.access(1), Some(false));
    /// assert_eq!(bv.access(3), None);
    /// ```
    fn access(&self, pos: usize) -> Option<bool> {
        self.bv.get_bit(pos)
    }
}

impl Rank for RsBitVector {
    /// Returns the number of set bits in positions `0..=i`.
    ///
    /// # Complexity
    ///
    /// - Constant
    ///
    /// # Examples
    ///
    /// ```
    /// use sucbv::bit_vectors::{RsBitVector, Rank};
    ///
    /// let bv = RsBitVector::from_bits([true, false, false, true]).unwrap();
    /// assert_eq!(bv.rank1(0), Ok(1));
    /// assert_eq!(bv.rank1(1), Ok(1));
    /// assert_eq!(bv.rank1(3), Ok(2));
    /// assert!(bv.rank1(4).is_err());
    /// ```
    fn rank1(&self, i: usize) -> Result<usize> {
        self.rank.rank1(i)
    }
}

impl Select for RsBitVector {
    /// Returns the 0-based position of the `k`-th set bit, where `k` is
    /// 1-indexed.
    ///
    /// # Complexity
    ///
    /// - Logarithmic for dense select blocks, constant for sparse ones
    ///
    /// # Examples
    ///
    /// ```
    /// use sucbv::bit_vectors::{RsBitVector, Select};
    ///
    /// let bv = RsBitVector::from_bits([true, false, false, true]).unwrap();
    /// assert_eq!(bv.select1(1), Ok(0));
    /// assert_eq!(bv.select1(2), Ok(3));
    /// assert!(bv.select1(0).is_err());
    /// assert!(bv.select1(3).is_err());
    /// ```
    fn select1(&self, k: usize) -> Result<usize> {
        if k == 0 || self.num_ones() < k {
            return Err(Error::OutOfRange(k));
        }
        self.select.select1(&self.bv, k)
    }
}

impl SizeInBytes for RsBitVector {
    fn size_in_bytes(&self) -> usize {
        self.bv.size_in_bytes()
            + std::mem::size_of::<Layout>()
            + self.rank.size_in_bytes()
            + self.select.size_in_bytes()
    }
}
