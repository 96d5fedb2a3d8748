use proptest::prelude::*;

use sucbv::bit_vectors::prelude::*;
use sucbv::{BitVector, Error, RsBitVector};

proptest! {
    #[test]
    fn rank_agrees_with_linear_scan(
        bits in prop::collection::vec(any::<bool>(), 0..1200),
    ) {
        let idx = RsBitVector::from_bits(bits.iter().copied()).unwrap();
        let mut ones = 0;
        for (i, &b) in bits.iter().enumerate() {
            if b {
                ones += 1;
            }
            prop_assert_eq!(idx.rank1(i), Ok(ones));
            prop_assert_eq!(idx.rank0(i), Ok(i + 1 - ones));
        }
        prop_assert_eq!(idx.num_ones(), ones);
    }

    #[test]
    fn rank_steps_follow_the_bits(
        bits in prop::collection::vec(any::<bool>(), 1..1200),
    ) {
        let idx = RsBitVector::from_bits(bits.iter().copied()).unwrap();
        for i in 1..bits.len() {
            let step = idx.rank1(i).unwrap() - idx.rank1(i - 1).unwrap();
            prop_assert_eq!(step, usize::from(bits[i]));
        }
        prop_assert_eq!(idx.rank1(0), Ok(usize::from(bits[0])));
    }

    #[test]
    fn select_is_the_inverse_of_rank(
        bits in prop::collection::vec(any::<bool>(), 0..1200),
    ) {
        let idx = RsBitVector::from_bits(bits.iter().copied()).unwrap();
        for k in 1..=idx.num_ones() {
            let pos = idx.select1(k).unwrap();
            prop_assert_eq!(idx.access(pos), Some(true));
            prop_assert_eq!(idx.rank1(pos), Ok(k));
        }
        for (i, &b) in bits.iter().enumerate() {
            if b {
                let k = idx.rank1(i).unwrap();
                prop_assert_eq!(idx.select1(k), Ok(i));
            }
        }
    }

    #[test]
    fn boundaries_and_out_of_range(
        bits in prop::collection::vec(any::<bool>(), 1..600),
    ) {
        let idx = RsBitVector::from_bits(bits.iter().copied()).unwrap();
        let n = bits.len();
        let ones = idx.num_ones();

        prop_assert_eq!(idx.rank1(0), Ok(usize::from(bits[0])));
        prop_assert_eq!(idx.rank1(n - 1), Ok(ones));
        if ones > 0 {
            let first = bits.iter().position(|&b| b).unwrap();
            let last = bits.iter().rposition(|&b| b).unwrap();
            prop_assert_eq!(idx.select1(1), Ok(first));
            prop_assert_eq!(idx.select1(ones), Ok(last));
        }

        prop_assert_eq!(idx.rank1(n), Err(Error::OutOfRange(n)));
        prop_assert_eq!(idx.select1(0), Err(Error::OutOfRange(0)));
        prop_assert_eq!(idx.select1(ones + 1), Err(Error::OutOfRange(ones + 1)));
    }

    #[test]
    fn indexed_and_plain_answers_match(
        bits in prop::collection::vec(any::<bool>(), 0..1200),
    ) {
        let idx = RsBitVector::from_bits(bits.iter().copied()).unwrap();
        let plain = BitVector::from_bits(bits.iter().copied());
        for i in 0..bits.len() {
            prop_assert_eq!(idx.rank1(i), plain.rank1(i));
        }
        for k in 1..=plain.num_ones() {
            prop_assert_eq!(idx.select1(k), plain.select1(k));
        }
    }

    #[test]
    fn construction_is_deterministic(
        bits in prop::collection::vec(any::<bool>(), 0..800),
    ) {
        let a = RsBitVector::from_bits(bits.iter().copied()).unwrap();
        let b = RsBitVector::from_bits(bits.iter().copied()).unwrap();
        prop_assert_eq!(&a, &b);
        for i in 0..bits.len() {
            prop_assert_eq!(a.rank1(i), b.rank1(i));
        }
        for k in 1..=a.num_ones() {
            prop_assert_eq!(a.select1(k), b.select1(k));
        }
    }
}
