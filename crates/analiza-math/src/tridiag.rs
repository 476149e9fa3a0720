// ─────────────────────────────────────────────────────────────────────
// Analiza Numerics — Tridiag
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Thomas algorithm for tridiagonal systems.
//!
//! Used by the natural cubic spline to solve for the quadratic coefficients.

use analiza_types::error::{NumericError, NumericResult};

/// Solve tridiagonal system Ax = d using the Thomas algorithm.
///
/// - `a`: sub-diagonal \[n\] (a\[0\] unused)
/// - `b`: main diagonal \[n\]
/// - `c`: super-diagonal \[n\] (c\[n-1\] unused)
/// - `d`: right-hand side \[n\]
///
/// Returns: solution vector x \[n\]
///
/// Fails with `SingularMatrix` if a pivot of the forward sweep is zero.
pub fn thomas_solve(a: &[f64], b: &[f64], c: &[f64], d: &[f64]) -> NumericResult<Vec<f64>> {
    let n = d.len();
    if n == 0 {
        return Err(NumericError::InsufficientData {
            method: "thomas_solve",
            required: 1,
            found: 0,
        });
    }
    if a.len() != n || b.len() != n || c.len() != n {
        return Err(NumericError::ShapeMismatch(format!(
            "tridiagonal bands must all have length {n}, got a={}, b={}, c={}",
            a.len(),
            b.len(),
            c.len()
        )));
    }

    let mut c_prime = vec![0.0; n];
    let mut d_prime = vec![0.0; n];

    // Forward sweep
    if b[0] == 0.0 {
        return Err(NumericError::SingularMatrix { pivot: 0 });
    }
    c_prime[0] = c[0] / b[0];
    d_prime[0] = d[0] / b[0];

    for i in 1..n {
        let den = b[i] - a[i] * c_prime[i - 1];
        if den == 0.0 {
            return Err(NumericError::SingularMatrix { pivot: i });
        }
        if i < n - 1 {
            c_prime[i] = c[i] / den;
        }
        d_prime[i] = (d[i] - a[i] * d_prime[i - 1]) / den;
    }

    // Back substitution
    let mut x = vec![0.0; n];
    x[n - 1] = d_prime[n - 1];
    for i in (0..n - 1).rev() {
        x[i] = d_prime[i] - c_prime[i] * x[i + 1];
    }

    Ok(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thomas_identity() {
        let n = 5;
        let a = vec![0.0; n];
        let b = vec![1.0; n];
        let c = vec![0.0; n];
        let d = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let x = thomas_solve(&a, &b, &c, &d).unwrap();
        for i in 0..n {
            assert!((x[i] - d[i]).abs() < 1e-12, "x[{i}] should equal d[{i}]");
        }
    }

    #[test]
    fn test_thomas_spline_pattern() {
        // Natural-spline rows: identity at both ends, [h, 2(h+h), h] inside
        let a = vec![0.0, 1.0, 1.0, 0.0];
        let b = vec![1.0, 4.0, 4.0, 1.0];
        let c = vec![0.0, 1.0, 1.0, 0.0];
        let d = vec![0.0, 3.0, -3.0, 0.0];
        let x = thomas_solve(&a, &b, &c, &d).unwrap();

        let ax = [
            b[0] * x[0] + c[0] * x[1],
            a[1] * x[0] + b[1] * x[1] + c[1] * x[2],
            a[2] * x[1] + b[2] * x[2] + c[2] * x[3],
            a[3] * x[2] + b[3] * x[3],
        ];
        for i in 0..4 {
            assert!(
                (ax[i] - d[i]).abs() < 1e-10,
                "Ax[{i}] = {}, expected {}",
                ax[i],
                d[i]
            );
        }
        assert!(x[0].abs() < 1e-15 && x[3].abs() < 1e-15);
    }

    #[test]
    fn test_thomas_zero_pivot() {
        let a = vec![0.0, 1.0];
        let b = vec![1.0, 1.0];
        let c = vec![1.0, 0.0];
        let d = vec![1.0, 1.0];
        // b[1] - a[1] * c[0] / b[0] = 0
        let err = thomas_solve(&a, &b, &c, &d).unwrap_err();
        assert!(matches!(err, NumericError::SingularMatrix { pivot: 1 }));
    }

    #[test]
    fn test_thomas_rejects_bad_shapes() {
        assert!(matches!(
            thomas_solve(&[], &[], &[], &[]),
            Err(NumericError::InsufficientData { .. })
        ));
        assert!(matches!(
            thomas_solve(&[0.0], &[1.0, 1.0], &[0.0], &[1.0]),
            Err(NumericError::ShapeMismatch(_))
        ));
    }
}
