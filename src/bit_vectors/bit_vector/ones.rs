//! Iterator over positions of set bits.
use super::WORD_LEN;
use crate::bit_vectors::BitVector;
use crate::broadword;

/// Iterator enumerating positions of set bits, created by
/// [`BitVector::ones`] or [`BitVector::ones_from`].
///
/// Scans one word at a time, clearing the reported bit from an internal
/// buffer, so a full enumeration costs one popcount-sized step per word plus
/// one step per set bit.
pub struct Ones<'a> {
    bv: &'a BitVector,
    pos: usize,
    buf: usize,
}

impl<'a> Ones<'a> {
    /// Creates the iterator from the given bit position.
    pub fn new(bv: &'a BitVector, pos: usize) -> Self {
        let buf = bv
            .get_word(pos / WORD_LEN)
            .map_or(0, |w| w & usize::MAX.wrapping_shl((pos % WORD_LEN) as u32));
        Self { bv, pos, buf }
    }

    /// Gets the current bit position.
    #[inline(always)]
    pub const fn position(&self) -> usize {
        self.pos
    }
}

impl Iterator for Ones<'_> {
    type Item = usize;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        let mut buf = self.buf;
        while buf == 0 {
            self.pos += WORD_LEN;
            let word_pos = self.pos / WORD_LEN;
            if self.bv.num_words() <= word_pos {
                return None;
            }
            buf = self.bv.words()[word_pos];
        }
        let pos_in_word = broadword::lsb(buf)?;
        self.buf = buf & (buf - 1); // clear LSB
        self.pos = (self.pos & !(WORD_LEN - 1)) + pos_in_word;
        Some(self.pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_zeros() {
        let bv = BitVector::from_bit(false, 100);
        let mut it = bv.ones();
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_start_past_last_one() {
        let bv = BitVector::from_bits([true, false, true, false]);
        let mut it = bv.ones_from(3);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_start_beyond_len() {
        let bv = BitVector::from_bits([true; 3]);
        let mut it = bv.ones_from(200);
        assert_eq!(it.next(), None);
    }
}
