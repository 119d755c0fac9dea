//! End-to-end checks of the temperature sweep.

use ising_scan::output::write_rows;
use ising_scan::{
    run_simulation, run_simulation_with_rng, ParamField, PhysicalInputs, SimulationParameters,
};

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn quick(size: usize) -> SimulationParameters {
    SimulationParameters {
        size,
        t_start:        4.0,
        t_end:          1.0,
        t_count:        7,
        therm_sweeps:   20,
        measure_sweeps: 40,
        copies:         3,
    }
}

#[test]
fn one_row_per_schedule_point() {
    let p = quick(4);
    let rows = run_simulation(1.0, 0.5, &p).unwrap();
    assert_eq!(rows.len(), p.t_count);
    for (i, row) in rows.iter().enumerate() {
        let t = p.t_start + i as f64 * (p.t_end - p.t_start) / (p.t_count - 1) as f64;
        assert_eq!(row.temperature, t);
        assert!(row.specific_heat.is_finite());
        assert!(row.susceptibility.is_finite());
        assert!(row.magnetization >= 0.0 && row.magnetization <= 1.0 + 1e-9);
    }
}

#[test]
fn validation_names_the_offending_field() {
    let cases = [
        (SimulationParameters { t_count: 1, ..quick(4) }, ParamField::TCount),
        (SimulationParameters { size: 0, ..quick(4) }, ParamField::Size),
        (SimulationParameters { copies: 0, ..quick(4) }, ParamField::Copies),
        (SimulationParameters { measure_sweeps: 0, ..quick(4) }, ParamField::MeasureSweeps),
        (SimulationParameters { t_end: 0.0, ..quick(4) }, ParamField::TEnd),
    ];
    for (p, field) in cases {
        let err = run_simulation(1.0, 0.0, &p).unwrap_err();
        assert_eq!(err.field, field, "{err}");
    }
}

#[test]
fn zero_thermalization_is_allowed() {
    let p = SimulationParameters { therm_sweeps: 0, ..quick(3) };
    assert_eq!(run_simulation(-1.0, 0.0, &p).unwrap().len(), p.t_count);
}

#[test]
fn same_seed_same_rows() {
    let p = quick(6);
    let inputs = PhysicalInputs { j: -1.0, h: 2.0 };

    let a = run_simulation_with_rng(inputs, &p, &mut ChaCha20Rng::seed_from_u64(1234)).unwrap();
    let b = run_simulation_with_rng(inputs, &p, &mut ChaCha20Rng::seed_from_u64(1234)).unwrap();
    assert_eq!(a, b);

    let mut out_a = Vec::new();
    let mut out_b = Vec::new();
    write_rows(&mut out_a, &a).unwrap();
    write_rows(&mut out_b, &b).unwrap();
    assert_eq!(out_a, out_b);

    let c = run_simulation_with_rng(inputs, &p, &mut ChaCha20Rng::seed_from_u64(4321)).unwrap();
    assert_ne!(a, c);
}

#[test]
fn free_spins_lose_magnetization_with_size() {
    let params = |size| SimulationParameters {
        size,
        t_start:        1.0,
        t_end:          2.0,
        t_count:        2,
        therm_sweeps:   100,
        measure_sweeps: 2_000,
        copies:         2,
    };
    let inputs = PhysicalInputs { j: 0.0, h: 0.0 };
    let mut rng = ChaCha20Rng::seed_from_u64(77);

    let small = run_simulation_with_rng(inputs, &params(4), &mut rng).unwrap();
    let large = run_simulation_with_rng(inputs, &params(16), &mut rng).unwrap();

    // <|M|>/N ~ sqrt(2 / (pi N)) for independent spins
    for (s, l) in small.iter().zip(&large) {
        assert!(l.magnetization < 0.1, "m = {}", l.magnetization);
        assert!(l.magnetization < s.magnetization);
        assert!(l.energy.abs() < 1e-12);
    }
}

#[test]
fn free_spins_follow_field() {
    // Independent spins: <s> = tanh(h / T), U = -h tanh(h / T)
    let p = SimulationParameters {
        size:           8,
        t_start:        1.0,
        t_end:          2.0,
        t_count:        2,
        therm_sweeps:   100,
        measure_sweeps: 2_000,
        copies:         2,
    };
    let mut rng = ChaCha20Rng::seed_from_u64(3);
    let rows = run_simulation_with_rng(PhysicalInputs { j: 0.0, h: 1.0 }, &p, &mut rng).unwrap();

    for row in &rows {
        let s = (1.0 / row.temperature).tanh();
        assert!((row.magnetization - s).abs() < 0.03, "T={} m={}", row.temperature, row.magnetization);
        assert!((row.energy + s).abs() < 0.03, "T={} U={}", row.temperature, row.energy);
    }
}

#[test]
fn ferromagnet_orders_below_critical_temperature() {
    let p = SimulationParameters {
        size:           8,
        t_start:        1.5,
        t_end:          1.0,
        t_count:        2,
        therm_sweeps:   200,
        measure_sweeps: 500,
        copies:         2,
    };
    let mut rng = ChaCha20Rng::seed_from_u64(8);
    let rows = run_simulation_with_rng(PhysicalInputs { j: 1.0, h: 0.0 }, &p, &mut rng).unwrap();

    let cold = rows.last().unwrap();
    assert!(cold.magnetization > 0.95, "m = {}", cold.magnetization);
    assert!(cold.energy < -1.9, "U = {}", cold.energy);
    assert!(cold.specific_heat > -1e-9);
    assert!(cold.susceptibility > -1e-9);
}
