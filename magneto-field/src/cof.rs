//! Reader for the `.COF` coefficient files distributed with the World Magnetic Model.
//!
//! ```text
//!     2020.0            WMM-2020        12/10/2019
//!   1  0   -29404.5       0.0        6.7       0.0
//!   1  1    -1450.7    4652.9        7.7     -25.1
//!   ...
//! 999999999999999999999999999999999999999999999999
//! ```
//!
//! The header holds the epoch, the model name and a release date. Each row is
//! `n m g h ġ ḣ` with Schmidt semi-normalized main-field coefficients (nT) and their secular
//! variation (nT/year). A line of `9`s ends the table.
//!
//! The evaluator works with Gauss-normalized functions, so every row is scaled by
//! [`schmidt_to_gauss`] on the way in.

use magneto_core::Real;
use magneto_time::DecimalYear;

use crate::{
    coefficient_count, coefficient_index, FieldError, FieldResult, GaussCoefficient,
    GeomagneticModel, ModelEpoch,
};

/// Geomagnetic reference radius of the WMM coefficients, in metres.
pub const WMM_REFERENCE_RADIUS: f64 = 6_371_200.0;

/// Spacing between WMM releases, in years.
pub const WMM_EPOCH_INTERVAL: f64 = 5.0;

/// Largest degree accepted from a file. `(2n)!` overflows `f64` beyond it.
pub const MAX_DEGREE: usize = 85;

/// Factor converting a Schmidt semi-normalized coefficient to Gauss normalization:
///
/// ```text
/// S(n,m) = sqrt((2 - δ(m,0)) (n-m)! / (n+m)!) · (2n-1)!! / (n-m)!
/// ```
///
/// ```
/// use magneto_field::cof::schmidt_to_gauss;
///
/// assert_eq!(schmidt_to_gauss(1, 0), 1.0);
/// assert!((schmidt_to_gauss(2, 0) - 1.5).abs() < 1e-15);
/// ```
pub fn schmidt_to_gauss(n: usize, m: usize) -> f64 {
    let delta = if m == 0 { 1.0 } else { 2.0 };
    let ratio = factorial(n - m) / factorial(n + m);
    (delta * ratio).sqrt() * double_factorial(2 * n - 1) / factorial(n - m)
}

fn factorial(k: usize) -> f64 {
    (2..=k).fold(1.0, |acc, i| acc * i as f64)
}

/// `k!!` for odd `k`.
fn double_factorial(k: usize) -> f64 {
    (1..=k).step_by(2).fold(1.0, |acc, i| acc * i as f64)
}

struct Row {
    line: usize,
    n: usize,
    m: usize,
    values: [f64; 4],
}

/// Parses a `.COF` file into a single-epoch model.
///
/// The maximum degree is the largest `n` present and every `(n, m)` up to it must appear
/// exactly once. `h` and `ḣ` are ignored for `m = 0`. The model carries the header name, the
/// WMM reference radius and a five-year epoch interval.
///
/// ```
/// use magneto_field::cof::parse_cof;
///
/// let text = "2025.0 DIPOLE 01/01/2025
///     1 0 -29000.0 0.0 10.0 0.0
///     1 1 -1500.0 4500.0 5.0 -20.0
/// 9999999999";
///
/// let model = parse_cof::<f64>(text)?;
/// assert_eq!(model.name(), "DIPOLE");
/// assert_eq!(model.nm_max(), 1);
/// assert_eq!(model.epochs()[0].get(1, 1).h, 4500.0);
/// # Ok::<(), magneto_field::FieldError>(())
/// ```
pub fn parse_cof<T: Real>(text: &str) -> FieldResult<GeomagneticModel<T>> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (header_line, header) = lines
        .next()
        .ok_or_else(|| FieldError::coefficient_parse(1, "missing header"))?;

    let header_fields: Vec<&str> = header.split_whitespace().collect();
    if header_fields.len() != 3 {
        return Err(FieldError::coefficient_parse(
            header_line,
            format!(
                "header needs epoch, name and date, found {} fields",
                header_fields.len()
            ),
        ));
    }
    let epoch = parse_value(header_fields[0], header_line, "epoch")?;
    let name = header_fields[1];

    let mut rows = Vec::new();
    for (line, row) in lines {
        if row.bytes().all(|b| b == b'9') {
            break;
        }
        rows.push(parse_row(row, line)?);
    }

    let nm_max = rows
        .iter()
        .map(|row| row.n)
        .max()
        .ok_or_else(|| FieldError::invalid_model("coefficient file has no rows"))?;

    let count = coefficient_count(nm_max);
    let mut main = vec![GaussCoefficient::default(); count];
    let mut secular = vec![GaussCoefficient::default(); count];
    let mut seen = vec![false; count];

    for row in &rows {
        let idx = coefficient_index(row.n, row.m);
        if seen[idx] {
            return Err(FieldError::coefficient_parse(
                row.line,
                format!("duplicate term ({}, {})", row.n, row.m),
            ));
        }
        seen[idx] = true;

        let s = schmidt_to_gauss(row.n, row.m);
        let [g, h, g_dot, h_dot] = row.values;
        let (h, h_dot) = if row.m == 0 { (0.0, 0.0) } else { (h, h_dot) };

        main[idx] = GaussCoefficient::new(T::from_f64(g * s), T::from_f64(h * s));
        secular[idx] = GaussCoefficient::new(T::from_f64(g_dot * s), T::from_f64(h_dot * s));
    }

    if let Some((n, m)) = (1..=nm_max)
        .flat_map(|n| (0..=n).map(move |m| (n, m)))
        .find(|&(n, m)| !seen[coefficient_index(n, m)])
    {
        return Err(FieldError::invalid_model(format!(
            "missing term ({}, {}) for degree {}",
            n, m, nm_max
        )));
    }

    GeomagneticModel::new(
        DecimalYear::new(T::from_f64(epoch)),
        nm_max,
        T::from_f64(WMM_EPOCH_INTERVAL),
        vec![ModelEpoch::new(main)],
        ModelEpoch::new(secular),
    )?
    .with_name(name)
    .with_reference_radius(T::from_f64(WMM_REFERENCE_RADIUS))
}

fn parse_row(text: &str, line: usize) -> FieldResult<Row> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    if fields.len() != 6 {
        return Err(FieldError::coefficient_parse(
            line,
            format!("expected 6 fields, found {}", fields.len()),
        ));
    }

    let n = parse_degree(fields[0], line, "degree")?;
    let m = parse_degree(fields[1], line, "order")?;
    if n == 0 {
        return Err(FieldError::coefficient_parse(line, "degree must be at least 1"));
    }
    if n > MAX_DEGREE {
        return Err(FieldError::coefficient_parse(
            line,
            format!("degree {} exceeds {}", n, MAX_DEGREE),
        ));
    }
    if m > n {
        return Err(FieldError::coefficient_parse(
            line,
            format!("order {} exceeds degree {}", m, n),
        ));
    }

    let mut values = [0.0; 4];
    for (value, (field, what)) in values
        .iter_mut()
        .zip(fields[2..].iter().zip(["g", "h", "g rate", "h rate"]))
    {
        *value = parse_value(field, line, what)?;
    }

    Ok(Row { line, n, m, values })
}

fn parse_degree(text: &str, line: usize, what: &str) -> FieldResult<usize> {
    text.parse::<usize>().map_err(|_| {
        FieldError::coefficient_parse(line, format!("invalid {}: '{}'", what, text))
    })
}

fn parse_value(text: &str, line: usize, what: &str) -> FieldResult<f64> {
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(FieldError::coefficient_parse(
            line,
            format!("invalid {}: '{}'", what, text),
        )),
    }
}
