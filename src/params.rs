// params.rs - Run parameters, validation and the temperature schedule

use std::fmt;

/// Immutable run configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationParameters {
    /// Lattice side length L.
    pub size: usize,
    /// First temperature of the schedule.
    pub t_start: f64,
    /// Last temperature of the schedule (inclusive).
    pub t_end: f64,
    /// Number of schedule points.
    pub t_count: usize,
    /// Thermalization sweeps per copy and temperature.
    pub therm_sweeps: usize,
    /// Measurement sweeps per copy and temperature.
    pub measure_sweeps: usize,
    /// Independent lattice copies.
    pub copies: usize,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            size:           8,
            t_start:        5.0,
            t_end:          0.1,
            t_count:        10,
            therm_sweeps:   15_000,
            measure_sweeps: 20_000,
            copies:         25,
        }
    }
}

/// Coupling J and external field h for one temperature sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalInputs {
    pub j: f64,
    pub h: f64,
}

/// Which parameter failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamField {
    Size,
    TStart,
    TEnd,
    TCount,
    MeasureSweeps,
    Copies,
}

impl ParamField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamField::Size => "L",
            ParamField::TStart => "T1",
            ParamField::TEnd => "T2",
            ParamField::TCount => "Tcount",
            ParamField::MeasureSweeps => "MSteps",
            ParamField::Copies => "Copies",
        }
    }
}

/// Out-of-bound parameter, reported before any lattice is allocated.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub field: ParamField,
    pub reason: String,
}

impl ValidationError {
    fn new(field: ParamField, reason: impl Into<String>) -> Self {
        Self { field, reason: reason.into() }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}: {}", self.field.as_str(), self.reason)
    }
}

impl std::error::Error for ValidationError {}

impl SimulationParameters {
    /// Check every bound, first failure wins.
    ///
    /// Both temperature endpoints must be finite and > 0. The schedule is a
    /// linear interpolation between them, so no point can reach T = 0.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.size == 0 {
            return Err(ValidationError::new(ParamField::Size, "must be > 0"));
        }
        if self.t_count <= 1 {
            return Err(ValidationError::new(ParamField::TCount, "must be > 1"));
        }
        if self.measure_sweeps == 0 {
            return Err(ValidationError::new(ParamField::MeasureSweeps, "must be > 0"));
        }
        if self.copies == 0 {
            return Err(ValidationError::new(ParamField::Copies, "must be > 0"));
        }
        check_temperature(ParamField::TStart, self.t_start)?;
        check_temperature(ParamField::TEnd, self.t_end)?;
        Ok(())
    }

    /// `T_i = T1 + i (T2 - T1) / (Tcount - 1)` for `i in 0..Tcount`.
    pub fn temperatures(&self) -> Vec<f64> {
        let span = self.t_end - self.t_start;
        let steps = (self.t_count - 1) as f64;
        (0..self.t_count)
            .map(|i| self.t_start + i as f64 * span / steps)
            .collect()
    }

    /// Sites per lattice, N = L².
    pub fn n_sites(&self) -> usize {
        self.size * self.size
    }
}

fn check_temperature(field: ParamField, t: f64) -> Result<(), ValidationError> {
    if !t.is_finite() {
        return Err(ValidationError::new(field, format!("must be finite, got {t}")));
    }
    if t <= 0.0 {
        return Err(ValidationError::new(
            field,
            format!("T = 0 and negative temperatures are unsupported, got {t}"),
        ));
    }
    Ok(())
}
