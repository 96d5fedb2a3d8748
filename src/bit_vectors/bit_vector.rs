//! Bit vector in a plain packed format with linear-scan queries.
pub mod ones;

use crate::bit_vectors::{Access, Build, NumBits, Rank, Select};
use crate::size::SizeInBytes;
use crate::{broadword, Error, Result};
use ones::Ones;

/// The number of bits in a machine word.
pub const WORD_LEN: usize = usize::BITS as usize;

/// Bit vector in a plain packed format, one bit per slot in machine words.
///
/// This is the storage layer of the crate: it supports constant-time
/// positional reads and enumeration of set positions. Rank and select are
/// answered by linear scan and serve as the reference implementations that
/// [`RsBitVector`](crate::RsBitVector) is cross-checked against.
///
/// Bits can be pushed only before the vector is handed to an index; there is
/// no update operation.
///
/// # Examples
///
/// ```
/// use sucbv::bit_vectors::BitVector;
///
/// let bv = BitVector::from_bits([true, false, true]);
///
/// assert_eq!(bv.len(), 3);
/// assert_eq!(bv.get_bit(0), Some(true));
/// assert_eq!(bv.get_bit(1), Some(false));
/// assert_eq!(bv.get_bit(3), None);
/// ```
#[derive(Default, Clone, PartialEq, Eq)]
pub struct BitVector {
    words: Vec<usize>,
    len: usize,
}

impl BitVector {
    /// Creates a new empty vector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new vector that reserves space for at least `capa` bits.
    ///
    /// # Arguments
    ///
    ///  - `capa`: Number of bits reserved at least.
    pub fn with_capacity(capa: usize) -> Self {
        Self {
            words: Vec::with_capacity(Self::words_for(capa)),
            len: 0,
        }
    }

    /// Creates a new vector that stores `len` copies of `bit`.
    ///
    /// # Arguments
    ///
    ///  - `bit`: Bit value used for initialization.
    ///  - `len`: Number of bits.
    ///
    /// # Examples
    ///
    /// ```
    /// use sucbv::bit_vectors::BitVector;
    ///
    /// let bv = BitVector::from_bit(false, 5);
    /// assert_eq!(bv.len(), 5);
    /// assert_eq!(bv.get_bit(0), Some(false));
    /// ```
    pub fn from_bit(bit: bool, len: usize) -> Self {
        let word = if bit { usize::MAX } else { 0 };
        let mut words = vec![word; Self::words_for(len)];
        let shift = len % WORD_LEN;
        if shift != 0 {
            let mask = (1 << shift) - 1;
            if let Some(last) = words.last_mut() {
                *last &= mask;
            }
        }
        Self { words, len }
    }

    /// Creates a new vector from input bit stream `bits`.
    ///
    /// # Arguments
    ///
    ///  - `bits`: Bit stream.
    ///
    /// # Examples
    ///
    /// ```
    /// use sucbv::bit_vectors::BitVector;
    ///
    /// let bv = BitVector::from_bits([false, true, false]);
    /// assert_eq!(bv.len(), 3);
    /// assert_eq!(bv.get_bit(1), Some(true));
    /// ```
    pub fn from_bits<I>(bits: I) -> Self
    where
        I: IntoIterator<Item = bool>,
    {
        let mut this = Self::new();
        bits.into_iter().for_each(|b| this.push_bit(b));
        this
    }

    /// Returns the `pos`-th bit, or [`None`] if out of bounds.
    ///
    /// # Arguments
    ///
    ///  - `pos`: Bit position.
    #[inline(always)]
    pub fn get_bit(&self, pos: usize) -> Option<bool> {
        if pos < self.len {
            let (block, shift) = (pos / WORD_LEN, pos % WORD_LEN);
            Some((self.words[block] >> shift) & 1 == 1)
        } else {
            None
        }
    }

    /// Pushes `bit` at the end.
    ///
    /// # Arguments
    ///
    ///  - `bit`: Bit value pushed.
    #[inline(always)]
    pub fn push_bit(&mut self, bit: bool) {
        let pos_in_word = self.len % WORD_LEN;
        if pos_in_word == 0 {
            self.words.push(bit as usize);
        } else if let Some(cur_word) = self.words.last_mut() {
            *cur_word |= (bit as usize) << pos_in_word;
        }
        self.len += 1;
    }

    /// Creates an iterator enumerating positions of set bits, in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use sucbv::bit_vectors::BitVector;
    ///
    /// let bv = BitVector::from_bits([true, false, false, true]);
    /// let mut it = bv.ones();
    /// assert_eq!(it.next(), Some(0));
    /// assert_eq!(it.next(), Some(3));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn ones(&self) -> Ones {
        self.ones_from(0)
    }

    /// Creates an iterator enumerating positions of set bits, starting at bit
    /// position `pos`.
    ///
    /// # Arguments
    ///
    ///  - `pos`: Bit position to start at.
    ///
    /// # Examples
    ///
    /// ```
    /// use sucbv::bit_vectors::BitVector;
    ///
    /// let bv = BitVector::from_bits([true, true, false, true]);
    /// let mut it = bv.ones_from(1);
    /// assert_eq!(it.next(), Some(1));
    /// assert_eq!(it.next(), Some(3));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn ones_from(&self, pos: usize) -> Ones {
        Ones::new(self, pos)
    }

    /// Returns the 0-based position of the `k`-th unset bit, where `k` is
    /// 1-indexed, by linear scan.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if `k == 0` or `k` exceeds the number of unset
    /// bits.
    ///
    /// # Examples
    ///
    /// ```
    /// use sucbv::bit_vectors::BitVector;
    ///
    /// let bv = BitVector::from_bits([true, false, false, true]);
    /// assert_eq!(bv.select0(1), Ok(1));
    /// assert_eq!(bv.select0(2), Ok(2));
    /// assert!(bv.select0(3).is_err());
    /// ```
    pub fn select0(&self, k: usize) -> Result<usize> {
        if k == 0 || self.num_zeros() < k {
            return Err(Error::OutOfRange(k));
        }
        let mut remaining = k;
        for (wpos, &w) in self.words.iter().enumerate() {
            let cnt = broadword::popcount(!w);
            if remaining <= cnt {
                let sel_in_word = broadword::select_in_word(!w, remaining - 1)
                    .ok_or(Error::Corrupted("select0 word scan overran its word"))?;
                return Ok(wpos * WORD_LEN + sel_in_word);
            }
            remaining -= cnt;
        }
        Err(Error::OutOfRange(k))
    }

    /// Gets the `word_pos`-th word, or [`None`] if out of bounds.
    #[inline(always)]
    pub fn get_word(&self, word_pos: usize) -> Option<usize> {
        self.words.get(word_pos).copied()
    }

    /// Gets the slice of raw words.
    pub fn words(&self) -> &[usize] {
        &self.words
    }

    /// Gets the number of words.
    #[inline(always)]
    pub fn num_words(&self) -> usize {
        self.words.len()
    }

    /// Returns the number of bits stored.
    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Checks if the vector is empty.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Shrinks the capacity of the vector as much as possible.
    pub fn shrink_to_fit(&mut self) {
        self.words.shrink_to_fit();
    }

    #[inline(always)]
    const fn words_for(n: usize) -> usize {
        (n + WORD_LEN - 1) / WORD_LEN
    }
}

impl Build for BitVector {
    /// Creates a new vector from input bit stream `bits`.
    ///
    /// # Arguments
    ///
    /// - `bits`: Bit stream.
    ///
    /// # Errors
    ///
    /// Never.
    fn build_from_bits<I>(bits: I) -> Result<Self>
    where
        I: IntoIterator<Item = bool>,
        Self: Sized,
    {
        Ok(Self::from_bits(bits))
    }
}

impl NumBits for BitVector {
    /// Returns the number of bits stored (just wrapping [`Self::len()`]).
    fn num_bits(&self) -> usize {
        self.len()
    }

    /// Returns the number of bits set.
    ///
    /// # Notes on complexity
    ///
    /// It is performed by linear scan in $`O(u)`$ time.
    fn num_ones(&self) -> usize {
        self.words.iter().map(|&w| broadword::popcount(w)).sum()
    }
}

impl Access for BitVector {
    /// Returns the `pos`-th bit, or [`None`] if out of bounds.
    ///
    /// # Arguments
    ///
    ///  - `pos`: Bit position.
    ///
    /// # Examples
    ///
    /// ```
    /// use sucbv::bit_vectors::{BitVector, Access};
    ///
    /// let bv = BitVector::from_bits([true, false, false]);
    /// assert_eq!(bv.access(0), Some(true));
    /// assert_eq!(bv.access(1), Some(false));
    /// assert_eq!(bv.access(3), None);
    /// ```
    fn access(&self, pos: usize) -> Option<bool> {
        self.get_bit(pos)
    }
}

impl Rank for BitVector {
    /// Returns the number of set bits in positions `0..=i`.
    ///
    /// # Complexity
    ///
    /// - Linear
    ///
    /// # Examples
    ///
    /// ```
    /// use sucbv::bit_vectors::{BitVector, Rank};
    ///
    /// let bv = BitVector::from_bits([true, false, false, true]);
    /// assert_eq!(bv.rank1(0), Ok(1));
    /// assert_eq!(bv.rank1(2), Ok(1));
    /// assert_eq!(bv.rank1(3), Ok(2));
    /// assert!(bv.rank1(4).is_err());
    /// ```
    fn rank1(&self, i: usize) -> Result<usize> {
        if self.len() <= i {
            return Err(Error::OutOfRange(i));
        }
        let (wpos, left) = ((i + 1) / WORD_LEN, (i + 1) % WORD_LEN);
        let mut r = 0;
        for &w in &self.words[..wpos] {
            r += broadword::popcount(w);
        }
        if left != 0 {
            r += broadword::popcount(self.words[wpos] << (WORD_LEN - left));
        }
        Ok(r)
    }
}

impl Select for BitVector {
    /// Returns the 0-based position of the `k`-th set bit, where `k` is
    /// 1-indexed.
    ///
    /// # Complexity
    ///
    /// - Linear
    ///
    /// # Examples
    ///
    /// ```
    /// use sucbv::bit_vectors::{BitVector, Select};
    ///
    /// let bv = BitVector::from_bits([true, false, false, true]);
    /// assert_eq!(bv.select1(1), Ok(0));
    /// assert_eq!(bv.select1(2), Ok(3));
    /// assert!(bv.select1(0).is_err());
    /// assert!(bv.select1(3).is_err());
    /// ```
    fn select1(&self, k: usize) -> Result<usize> {
        if k == 0 {
            return Err(Error::OutOfRange(k));
        }
        let mut remaining = k;
        for (wpos, &w) in self.words.iter().enumerate() {
            let cnt = broadword::popcount(w);
            if remaining <= cnt {
                let sel_in_word = broadword::select_in_word(w, remaining - 1)
                    .ok_or(Error::Corrupted("select1 word scan overran its word"))?;
                return Ok(wpos * WORD_LEN + sel_in_word);
            }
            remaining -= cnt;
        }
        Err(Error::OutOfRange(k))
    }
}

impl std::iter::Extend<bool> for BitVector {
    fn extend<I>(&mut self, bits: I)
    where
        I: IntoIterator<Item = bool>,
    {
        bits.into_iter().for_each(|b| self.push_bit(b));
    }
}

impl std::fmt::Debug for BitVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BitVector")
            .field("len", &self.len)
            .field("ones", &self.num_ones())
            .finish()
    }
}

impl SizeInBytes for BitVector {
    fn size_in_bytes(&self) -> usize {
        self.words.size_in_bytes() + self.len.size_in_bytes()
    }
}
