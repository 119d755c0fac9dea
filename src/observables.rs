// observables.rs - Lattice totals and per-temperature statistics

use crate::lattice::Lattice;

/// Total energy and signed magnetization of one lattice snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Totals {
    pub energy: f64,
    pub magnetization: f64,
}

/// Compute `E = -J Σ S_i S_j - h Σ S_i` and `M = Σ S_i`.
///
/// Each bond is counted once by pairing every site with its right and
/// bottom neighbour only.
pub fn compute_totals(lattice: &Lattice, j: f64, h: f64) -> Totals {
    let l = lattice.side();
    let mut energy = 0.0;
    let mut magnetization = 0.0;

    for x in 0..l {
        for y in 0..l {
            let s = lattice.spin(x, y) as f64;
            let s_r = lattice.right(x, y) as f64;
            let s_b = lattice.bottom(x, y) as f64;
            energy += -j * s * s_r;
            energy += -j * s * s_b;
            energy += -h * s;
            magnetization += s;
        }
    }

    Totals { energy, magnetization }
}

/// One finalized record per temperature point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResultRow {
    /// Temperature T.
    pub temperature: f64,
    /// Energy per site U.
    pub energy: f64,
    /// Mean absolute magnetization per site m.
    pub magnetization: f64,
    /// Specific heat per site C.
    pub specific_heat: f64,
    /// Susceptibility per site χ.
    pub susceptibility: f64,
}

/// Running sums of E, E², |M|, M² for a single temperature.
///
/// Every sample is pre-divided by `MSteps` and `Copies` as it is folded in,
/// so the sums are already the averages once all copies are measured.
#[derive(Debug, Clone)]
pub struct Accumulator {
    m_steps: f64,
    copies: f64,
    e: f64,
    e2: f64,
    m_abs: f64,
    m2: f64,
    samples: usize,
}

impl Accumulator {
    pub fn new(m_steps: usize, copies: usize) -> Self {
        Self {
            m_steps: m_steps as f64,
            copies: copies as f64,
            e: 0.0,
            e2: 0.0,
            m_abs: 0.0,
            m2: 0.0,
            samples: 0,
        }
    }

    /// Fold in one post-sweep measurement.
    pub fn accumulate(&mut self, energy: f64, magnetization: f64) {
        self.e += energy / self.m_steps / self.copies;
        self.e2 += energy * energy / self.m_steps / self.copies;
        self.m_abs += magnetization.abs() / self.m_steps / self.copies;
        self.m2 += magnetization * magnetization / self.m_steps / self.copies;
        self.samples += 1;
    }

    /// Number of measurements folded in so far.
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// ⟨E⟩ over steps and copies.
    pub fn mean_energy(&self) -> f64 {
        self.e
    }

    /// ⟨|M|⟩ over steps and copies.
    pub fn mean_abs_magnetization(&self) -> f64 {
        self.m_abs
    }

    /// Derive U, m, C and χ for temperature `t` on `n_sites` sites.
    ///
    /// `C = (⟨E²⟩ - ⟨E⟩²) / (T² N)` and `χ = (⟨M²⟩ - ⟨|M|⟩²) / (T N)`.
    pub fn finalize(&self, t: f64, n_sites: usize) -> ResultRow {
        let n = n_sites as f64;
        ResultRow {
            temperature: t,
            energy: self.e / n,
            magnetization: self.m_abs / n,
            specific_heat: (self.e2 - self.e * self.e) / (t * t * n),
            susceptibility: (self.m2 - self.m_abs * self.m_abs) / (t * n),
        }
    }
}
