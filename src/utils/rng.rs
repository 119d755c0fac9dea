use rand_chacha::ChaCha20Rng;
use rand::SeedableRng;

/// SplitMix64 finalizer.
#[inline]
fn mix(mut x: u64) -> u64 {
    x = (x ^ (x >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94D049BB133111EB);
    x ^ (x >> 31)
}

/// Seed for stream `stream_id` under `master`.
pub fn stream_seed(master: u64, stream_id: usize) -> u64 {
    mix(master ^ (stream_id as u64).wrapping_mul(0x9E3779B97F4A7C15))
}

/// Independent, reproducible RNG for one run out of many.
pub fn stream_rng(master: u64, stream_id: usize) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(stream_seed(master, stream_id))
}
