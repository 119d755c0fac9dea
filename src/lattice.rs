// lattice.rs - Square spin lattice with periodic boundaries

/// Map a coordinate onto `[0, side)` with periodic boundaries.
///
/// Callers only ever pass an in-range index offset by ±1, so a single
/// wrap is enough for negative values; this is not a general modulo.
#[inline(always)]
pub fn wrap(coord: isize, side: usize) -> usize {
    if coord < 0 {
        (coord + side as isize) as usize
    } else {
        coord as usize % side
    }
}

/// An L×L grid of ±1 spins on a torus.
///
/// Sites are stored row-major with index `x * side + y`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lattice {
    side: usize,
    spins: Vec<i8>,
}

impl Lattice {
    /// Ordered start: every spin +1.
    pub fn all_up(side: usize) -> Self {
        Self {
            side,
            spins: vec![1; side * side],
        }
    }

    /// Side length L.
    #[inline(always)]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Number of sites N = L².
    #[inline(always)]
    pub fn n_sites(&self) -> usize {
        self.spins.len()
    }

    #[inline(always)]
    fn index(&self, x: usize, y: usize) -> usize {
        x * self.side + y
    }

    #[inline(always)]
    pub fn spin(&self, x: usize, y: usize) -> i8 {
        self.spins[self.index(x, y)]
    }

    #[inline(always)]
    pub fn set_spin(&mut self, x: usize, y: usize, s: i8) {
        let i = self.index(x, y);
        self.spins[i] = s;
    }

    /// Neighbour at (x+1, y).
    #[inline(always)]
    pub fn right(&self, x: usize, y: usize) -> i8 {
        self.spin(wrap(x as isize + 1, self.side), y)
    }

    /// Neighbour at (x, y+1).
    #[inline(always)]
    pub fn bottom(&self, x: usize, y: usize) -> i8 {
        self.spin(x, wrap(y as isize + 1, self.side))
    }

    /// Neighbour at (x-1, y).
    #[inline(always)]
    pub fn left(&self, x: usize, y: usize) -> i8 {
        self.spin(wrap(x as isize - 1, self.side), y)
    }

    /// Neighbour at (x, y-1).
    #[inline(always)]
    pub fn top(&self, x: usize, y: usize) -> i8 {
        self.spin(x, wrap(y as isize - 1, self.side))
    }

    /// Σ of the four periodic neighbours of (x, y).
    #[inline]
    pub fn neighbor_sum(&self, x: usize, y: usize) -> i32 {
        self.left(x, y) as i32
            + self.right(x, y) as i32
            + self.top(x, y) as i32
            + self.bottom(x, y) as i32
    }
}
