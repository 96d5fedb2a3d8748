//! # Sucbv: succinct bit vectors with fast rank and select
//!
//! Sucbv provides an immutable bit vector index answering two queries over a
//! sequence of bits:
//!
//! - `rank1(i)`: the number of set bits in positions `0..=i`, and
//! - `select1(k)`: the position of the `k`-th set bit,
//!
//! in constant and logarithmic time respectively, using auxiliary space that
//! grows strictly slower than the raw bits.
//!
//! The entry points live in [`bit_vectors`]: [`BitVector`] is the plain
//! packed representation with linear-scan queries, and [`RsBitVector`] builds
//! the multi-level directory on top of it.
//!
//! ```
//! use sucbv::bit_vectors::{RsBitVector, prelude::*};
//!
//! let bv = RsBitVector::from_bits([true, false, false, true]).unwrap();
//! assert_eq!(bv.rank1(2), Ok(1));
//! assert_eq!(bv.select1(2), Ok(3));
//! ```
pub mod bit_vectors;
pub mod broadword;
pub mod error;
pub mod size;
pub mod utils;

pub use bit_vectors::{BitVector, RsBitVector};
pub use error::{Error, Result};
pub use size::SizeInBytes;
