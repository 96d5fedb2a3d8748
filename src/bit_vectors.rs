//! Top module for bit vectors.
//!
//! # Introduction
//!
//! Let $`B`$ be a sequence of $`u`$ bits addressed by 0-based position.
//! The structures in this module support the following queries:
//!
//! - $`\textrm{Access}(i)`$ returns the `i`-th bit (implemented by [`Access`]).
//! - $`\textrm{Rank}(i)`$ returns the number of set bits in positions
//!   $`0..=i`$ (implemented by [`Rank`]).
//! - $`\textrm{Select}(k)`$ returns the position of the $`k`$-th set bit,
//!   where $`k`$ is 1-indexed (implemented by [`Select`]).
//!
//! # Data structures
//!
//! | Implementations | [Access](Access) | [Rank](Rank) | [Select](Select) | Memory (bits) |
//! | --- | :-: | :-: | :-: | :-: |
//! | [`BitVector`] | $`O(1)`$ | $`O(u)`$ | $`O(u)`$ | $`u`$ |
//! | [`RsBitVector`] | $`O(1)`$ | $`O(1)`$ | $`O(\lg u)`$ | $`u + o(u)`$ |
//!
//! [`BitVector`] is the plain packed representation. Its linear-scan queries
//! serve as the reference answers the indexed structure is tested against.
//!
//! [`RsBitVector`] layers a two-level cumulative rank directory and a hybrid
//! select directory over the plain bits; the widths of all levels are derived
//! from the input length (see [`rs_bit_vector::Layout`]).
//!
//! Both structures are immutable once built and can be queried from multiple
//! threads without synchronization.
//!
//! # Examples
//!
//! [`prelude`] imports the common traits in one line.
//!
//! ```
//! use sucbv::bit_vectors::{RsBitVector, prelude::*};
//!
//! let bv = RsBitVector::from_bits([true, false, false, true]).unwrap();
//!
//! assert_eq!(bv.num_bits(), 4);
//! assert_eq!(bv.num_ones(), 2);
//!
//! assert_eq!(bv.access(1), Some(false));
//!
//! assert_eq!(bv.rank1(1), Ok(1));
//! assert_eq!(bv.rank0(1), Ok(1));
//!
//! assert_eq!(bv.select1(1), Ok(0));
//! assert_eq!(bv.select1(2), Ok(3));
//! ```
pub mod bit_vector;
pub mod prelude;
pub mod rs_bit_vector;

pub use bit_vector::BitVector;
pub use rs_bit_vector::RsBitVector;

use crate::Result;

/// Interface for building a bit vector from a bit source.
pub trait Build {
    /// Creates a new vector from input bit stream `bits`.
    ///
    /// # Arguments
    ///
    /// - `bits`: Bit stream.
    ///
    /// # Errors
    ///
    /// An error is returned if the structure cannot be built from the stream.
    fn build_from_bits<I>(bits: I) -> Result<Self>
    where
        I: IntoIterator<Item = bool>,
        Self: Sized;
}

/// Interface for reporting basic statistics of a bit vector.
pub trait NumBits {
    /// Returns the number of bits stored.
    fn num_bits(&self) -> usize;

    /// Returns the number of bits set.
    fn num_ones(&self) -> usize;

    /// Returns the number of bits unset.
    #[inline(always)]
    fn num_zeros(&self) -> usize {
        self.num_bits() - self.num_ones()
    }
}

/// Interface for accessing elements on bit arrays.
pub trait Access {
    /// Returns the `pos`-th bit, or [`None`] if out of bounds.
    fn access(&self, pos: usize) -> Option<bool>;
}

/// Interface for rank queries on bit vectors.
pub trait Rank {
    /// Returns the number of set bits in positions `0..=i`.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`](crate::Error::OutOfRange) if `i` is not a valid
    /// bit position.
    fn rank1(&self, i: usize) -> Result<usize>;

    /// Returns the number of unset bits in positions `0..=i`.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`](crate::Error::OutOfRange) if `i` is not a valid
    /// bit position.
    #[inline(always)]
    fn rank0(&self, i: usize) -> Result<usize> {
        let ones = self.rank1(i)?;
        Ok(i + 1 - ones)
    }
}

/// Interface for select queries on bit vectors.
pub trait Select {
    /// Returns the 0-based position of the `k`-th set bit, where `k` is
    /// 1-indexed.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`](crate::Error::OutOfRange) if `k == 0` or `k`
    /// exceeds the number of set bits.
    fn select1(&self, k: usize) -> Result<usize>;
}
