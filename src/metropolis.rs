// metropolis.rs - Single-spin Metropolis update and random-site sweep

use crate::lattice::Lattice;
use rand::Rng;

/// Energy change of flipping the spin at (x, y).
///
/// `dE = (S1 - S0) · (-h - J Σ neighbours)` with `S1 = -S0`.
#[inline]
pub fn flip_delta(lattice: &Lattice, j: f64, h: f64, x: usize, y: usize) -> f64 {
    let s0 = lattice.spin(x, y) as i32;
    let s1 = -s0;
    let nb = lattice.neighbor_sum(x, y);
    (s1 - s0) as f64 * (-h - j * nb as f64)
}

/// Propose flipping (x, y) and accept with probability `min(1, exp(-dE/T))`.
///
/// One uniform is drawn per attempt whether or not the move is downhill,
/// so the stream advances identically for every proposal. `t` must be > 0.
pub fn attempt_flip(
    lattice: &mut Lattice,
    j: f64,
    h: f64,
    t: f64,
    x: usize,
    y: usize,
    rng: &mut impl Rng,
) -> bool {
    let de = flip_delta(lattice, j, h, x, y);
    let u: f64 = rng.gen();
    if u < (-de / t).exp() {
        let s0 = lattice.spin(x, y);
        lattice.set_spin(x, y, -s0);
        true
    } else {
        false
    }
}

/// L² update attempts at uniformly random sites, drawn with replacement.
///
/// Returns the number of accepted flips.
pub fn sweep(lattice: &mut Lattice, j: f64, h: f64, t: f64, rng: &mut impl Rng) -> usize {
    let l = lattice.side();
    let mut accepted = 0;
    for _ in 0..lattice.n_sites() {
        let x = rng.gen_range(0..l);
        let y = rng.gen_range(0..l);
        if attempt_flip(lattice, j, h, t, x, y, rng) {
            accepted += 1;
        }
    }
    accepted
}
