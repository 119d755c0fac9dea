// simulation.rs - Thermalize/measure protocol and the temperature sweep

use crate::lattice::Lattice;
use crate::metropolis::sweep;
use crate::observables::{compute_totals, Accumulator, ResultRow};
use crate::params::{PhysicalInputs, SimulationParameters, ValidationError};
use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Thermalize then measure one copy at temperature `t`.
///
/// `therm_sweeps` sweeps are discarded, then each of `measure_sweeps`
/// sweeps is followed by one measurement folded into `acc`. The lattice
/// is left in its evolved state. Returns the number of accepted flips.
pub fn run_ensemble(
    lattice: &mut Lattice,
    inputs: PhysicalInputs,
    t: f64,
    params: &SimulationParameters,
    acc: &mut Accumulator,
    rng: &mut impl Rng,
) -> usize {
    let PhysicalInputs { j, h } = inputs;
    let mut accepted = 0;

    for _ in 0..params.therm_sweeps {
        accepted += sweep(lattice, j, h, t, rng);
    }

    for _ in 0..params.measure_sweeps {
        accepted += sweep(lattice, j, h, t, rng);
        let totals = compute_totals(lattice, j, h);
        acc.accumulate(totals.energy, totals.magnetization);
    }

    accepted
}

/// Accepted flips over all attempts of one temperature point, in `f64` so
/// large sweep counts cannot overflow.
fn acceptance_ratio(accepted: usize, params: &SimulationParameters) -> f64 {
    let attempts = (params.therm_sweeps as f64 + params.measure_sweeps as f64)
        * params.size as f64
        * params.size as f64
        * params.copies as f64;
    accepted as f64 / attempts
}

/// Long-lived state of one (J, h) run: the parameters and every copy's lattice.
///
/// Lattices are created once, all spins +1, and carried through every
/// temperature point in order; they are never reset.
#[derive(Debug, Clone)]
pub struct Simulation {
    inputs: PhysicalInputs,
    params: SimulationParameters,
    lattices: Vec<Lattice>,
}

impl Simulation {
    /// Validate `params` and allocate `copies` ordered lattices.
    pub fn new(inputs: PhysicalInputs, params: SimulationParameters) -> Result<Self, ValidationError> {
        params.validate()?;
        let lattices = (0..params.copies)
            .map(|_| Lattice::all_up(params.size))
            .collect();
        Ok(Self { inputs, params, lattices })
    }

    /// Current state of every copy.
    pub fn lattices(&self) -> &[Lattice] {
        &self.lattices
    }

    /// Run all copies, in order, at temperature `t` and finalize the row.
    pub fn run_temperature(&mut self, t: f64, rng: &mut impl Rng) -> ResultRow {
        let mut acc = Accumulator::new(self.params.measure_sweeps, self.params.copies);
        let mut accepted = 0usize;

        for lattice in &mut self.lattices {
            accepted += run_ensemble(lattice, self.inputs, t, &self.params, &mut acc, rng);
        }

        let row = acc.finalize(t, self.params.n_sites());

        debug!(
            "J={} h={} T={:.4}: U={:.6} m={:.6} C={:.6} X={:.6} acc={:.3}",
            self.inputs.j,
            self.inputs.h,
            t,
            row.energy,
            row.magnetization,
            row.specific_heat,
            row.susceptibility,
            acceptance_ratio(accepted, &self.params),
        );

        row
    }

    /// Walk the whole temperature schedule and return one row per point.
    pub fn run(&mut self, rng: &mut impl Rng) -> Vec<ResultRow> {
        let schedule = self.params.temperatures();
        info!(
            "J={} h={}: L={} copies={} T {}→{} ({} points)",
            self.inputs.j,
            self.inputs.h,
            self.params.size,
            self.params.copies,
            self.params.t_start,
            self.params.t_end,
            schedule.len(),
        );

        schedule
            .into_iter()
            .map(|t| self.run_temperature(t, rng))
            .collect()
    }
}

/// Run the full schedule for (J, h) with a caller-supplied random stream.
pub fn run_simulation_with_rng(
    inputs: PhysicalInputs,
    params: &SimulationParameters,
    rng: &mut impl Rng,
) -> Result<Vec<ResultRow>, ValidationError> {
    let mut sim = Simulation::new(inputs, params.clone())?;
    Ok(sim.run(rng))
}

/// Run the full schedule for (J, h) with a freshly seeded stream.
pub fn run_simulation(
    j: f64,
    h: f64,
    params: &SimulationParameters,
) -> Result<Vec<ResultRow>, ValidationError> {
    params.validate()?;
    let mut rng = ChaCha20Rng::from_entropy();
    run_simulation_with_rng(PhysicalInputs { j, h }, params, &mut rng)
}
