// output.rs - Semicolon-delimited result files

use crate::observables::ResultRow;
use csv::WriterBuilder;
use std::io::Write;
use std::path::Path;

/// `results_J_{J}_h_{h}.csv`, with J and h truncated toward zero.
pub fn result_file_name(j: f64, h: f64) -> String {
    format!("results_J_{}_h_{}.csv", j as i64, h as i64)
}

/// Fixed-point, six decimals.
fn fixed(x: f64) -> String {
    format!("{x:.6}")
}

/// Write one `T;U;M;C;X` record per row, no header.
pub fn write_rows<W: Write>(writer: W, rows: &[ResultRow]) -> csv::Result<()> {
    let mut wtr = WriterBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .from_writer(writer);
    for r in rows {
        wtr.write_record([
            fixed(r.temperature),
            fixed(r.energy),
            fixed(r.magnetization),
            fixed(r.specific_heat),
            fixed(r.susceptibility),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Create (or truncate) `path` and write `rows` to it.
pub fn write_rows_to_path(path: &Path, rows: &[ResultRow]) -> csv::Result<()> {
    let file = std::fs::File::create(path)?;
    write_rows(file, rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_truncates() {
        assert_eq!(result_file_name(1.0, -5.0), "results_J_1_h_-5.csv");
        assert_eq!(result_file_name(-1.0, 0.0), "results_J_-1_h_0.csv");
        assert_eq!(result_file_name(1.0, 2.5), "results_J_1_h_2.csv");
    }

    #[test]
    fn rows_are_fixed_point_semicolon_records() {
        let rows = [
            ResultRow {
                temperature: 5.0,
                energy: -0.25,
                magnetization: 0.125,
                specific_heat: 0.0,
                susceptibility: 1.0 / 3.0,
            },
            ResultRow {
                temperature: 0.1,
                energy: -2.0,
                magnetization: 1.0,
                specific_heat: 1e-9,
                susceptibility: 0.0,
            },
        ];
        let mut buf = Vec::new();
        write_rows(&mut buf, &rows).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "5.000000;-0.250000;0.125000;0.000000;0.333333\n\
             0.100000;-2.000000;1.000000;0.000000;0.000000\n"
        );
    }
}
