use anyhow::Result;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;

use sucbv::{RsBitVector, SizeInBytes};

const SEED_BITS: u64 = 113;
const NUM_BITS: usize = 1 << 20;

fn main() -> Result<()> {
    for p in [0.5, 0.1, 0.01] {
        show_memories(p)?;
    }
    Ok(())
}

fn gen_random_bits(len: usize, p: f64, seed: u64) -> Vec<bool> {
    let mut rng = ChaChaRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_bool(p)).collect()
}

fn show_memories(p: f64) -> Result<()> {
    let bits = gen_random_bits(NUM_BITS, p, SEED_BITS);
    let idx = RsBitVector::from_bits(bits)?;
    println!("[p = {}]", p);

    let layout = idx.layout();
    println!(
        "block widths: small = {} bits, large = {} bits, branching = {}",
        layout.small_len(),
        layout.large_len(),
        layout.branching(),
    );

    let raw = idx.bit_vector().size_in_bytes();
    print_memory("raw bits", raw);

    let rank = idx.rank_index();
    print_memory("rank directory", rank.size_in_bytes());
    println!(
        "  {} large blocks, {} small blocks, {} lookup entries",
        rank.num_large_blocks(),
        rank.num_small_blocks(),
        rank.num_lookup_entries(),
    );

    let select = idx.select_index();
    print_memory("select directory", select.size_in_bytes());
    println!(
        "  {} blocks ({} dense, {} sparse), {} tree bytes, {} position-array bytes",
        select.num_blocks(),
        select.num_dense_blocks(),
        select.num_sparse_blocks(),
        select.tree_size_in_bytes(),
        select.sparse_size_in_bytes(),
    );

    let total = idx.size_in_bytes();
    println!(
        "total: {} bytes = {:.2} KiB = {:.2} MiB",
        total,
        total as f64 / 1024.0,
        total as f64 / 1024.0 / 1024.0,
    );
    println!(
        "index overhead: {:.3} bits per input bit",
        ((total - raw) * 8) as f64 / NUM_BITS as f64,
    );
    println!();
    Ok(())
}

fn print_memory(name: &str, bytes: usize) {
    println!(
        "{}: {:.3} bits per bit",
        name,
        (bytes * 8) as f64 / NUM_BITS as f64
    );
}
