pub mod lattice;
pub mod observables;
pub mod metropolis;
pub mod params;
pub mod simulation;
pub mod output;
pub mod scan;
pub mod utils;

pub use observables::ResultRow;
pub use params::{ParamField, PhysicalInputs, SimulationParameters, ValidationError};
pub use simulation::{run_simulation, run_simulation_with_rng, Simulation};
