// scan.rs - (J, h) grid for the driver

use anyhow::{bail, Result};

/// Tolerance that keeps `max` in the range despite accumulated rounding.
const ENDPOINT_EPS: f64 = 1e-9;

/// `min, min + step, …` up to and including `max`.
pub fn field_values(min: f64, max: f64, step: f64) -> Result<Vec<f64>> {
    if !step.is_finite() || step <= 0.0 {
        bail!("field step must be a positive number, got {step}");
    }
    if !min.is_finite() || !max.is_finite() {
        bail!("field range must be finite, got [{min}, {max}]");
    }
    if max < min {
        bail!("field range is empty: max {max} < min {min}");
    }

    let mut out = Vec::new();
    let mut h = min;
    while h <= max + ENDPOINT_EPS {
        out.push(h);
        h += step;
    }
    Ok(out)
}

/// All (J, h) pairs, J-major.
pub fn grid(couplings: &[f64], fields: &[f64]) -> Vec<(f64, f64)> {
    couplings
        .iter()
        .flat_map(|&j| fields.iter().map(move |&h| (j, h)))
        .collect()
}
