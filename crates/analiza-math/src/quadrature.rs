// ─────────────────────────────────────────────────────────────────────
// Analiza Numerics — Quadrature
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Definite integrals on `[a, b]`: composite trapezoid, composite Simpson,
//! Romberg extrapolation.

use analiza_types::constants::MAX_ROMBERG_LEVELS;
use analiza_types::error::{NumericError, NumericResult};
use ndarray::Array2;

fn check_interval(a: f64, b: f64) -> NumericResult<()> {
    if !a.is_finite() || !b.is_finite() || b <= a {
        return Err(NumericError::InvalidInterval { a, b });
    }
    Ok(())
}

/// Composite trapezoidal rule with `subintervals >= 1` equal panels.
///
/// `h · [½(f(a) + f(b)) + Σ_{i=1}^{m−1} f(a + i·h)]`
pub fn trapezoidal_rule<F>(f: F, a: f64, b: f64, subintervals: usize) -> NumericResult<f64>
where
    F: Fn(f64) -> f64,
{
    check_interval(a, b)?;
    if subintervals < 1 {
        return Err(NumericError::InvalidSubdivision(
            "the segment cannot be divided into fewer than 1 subinterval".to_string(),
        ));
    }

    let h = (b - a) / subintervals as f64;
    let mut integral = 0.5 * (f(a) + f(b));
    for i in 1..subintervals {
        integral += f(a + i as f64 * h);
    }
    Ok(integral * h)
}

/// Composite Simpson's 1/3 rule; `subintervals` must be even and at least 2.
pub fn simpsons_rule<F>(f: F, a: f64, b: f64, subintervals: usize) -> NumericResult<f64>
where
    F: Fn(f64) -> f64,
{
    check_interval(a, b)?;
    if subintervals % 2 != 0 {
        return Err(NumericError::InvalidSubdivision(format!(
            "number of subintervals must be even for Simpson's rule, got {subintervals}"
        )));
    }
    if subintervals < 2 {
        return Err(NumericError::InvalidSubdivision(
            "number of subintervals must be at least 2".to_string(),
        ));
    }

    let h = (b - a) / subintervals as f64;
    let mut integral = f(a) + f(b);
    for i in 1..subintervals {
        let weight = if i % 2 == 0 { 2.0 } else { 4.0 };
        integral += weight * f(a + i as f64 * h);
    }
    Ok(integral * h / 3.0)
}

/// Romberg integration with `iterations` levels.
///
/// Column 0 halves the trapezoid step each row, reusing the previous row's
/// sum; column `j` applies Richardson extrapolation
/// `R[i][j] = R[i][j−1] + (R[i][j−1] − R[i−1][j−1]) / (4^j − 1)`.
/// Returns `R[k−1][k−1]`.
pub fn romberg_integration<F>(f: F, a: f64, b: f64, iterations: usize) -> NumericResult<f64>
where
    F: Fn(f64) -> f64,
{
    Ok(romberg_table(f, a, b, iterations)?[[iterations - 1, iterations - 1]])
}

/// Full lower-triangular Romberg table (entries above the diagonal are zero).
pub fn romberg_table<F>(f: F, a: f64, b: f64, iterations: usize) -> NumericResult<Array2<f64>>
where
    F: Fn(f64) -> f64,
{
    check_interval(a, b)?;
    if iterations < 1 {
        return Err(NumericError::InvalidSubdivision(
            "Romberg iterations cannot be smaller than 1".to_string(),
        ));
    }
    if iterations > MAX_ROMBERG_LEVELS {
        return Err(NumericError::InvalidSubdivision(format!(
            "Romberg iterations cannot exceed {MAX_ROMBERG_LEVELS}, got {iterations}"
        )));
    }

    let mut h = b - a;
    let mut r = Array2::<f64>::zeros((iterations, iterations));
    r[[0, 0]] = 0.5 * h * (f(a) + f(b));

    for i in 1..iterations {
        h /= 2.0;
        // New midpoints of this level: odd multiples of h
        let sum: f64 = (1..(1usize << i))
            .step_by(2)
            .map(|k| f(a + k as f64 * h))
            .sum();
        r[[i, 0]] = 0.5 * r[[i - 1, 0]] + h * sum;

        let mut factor = 1.0;
        for j in 1..=i {
            factor *= 4.0;
            r[[i, j]] = r[[i, j - 1]] + (r[[i, j - 1]] - r[[i - 1, j - 1]]) / (factor - 1.0);
        }
    }

    Ok(r)
}
