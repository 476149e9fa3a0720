//! One-dimensional interpolation on a sample table.
//!
//! Linear, Lagrange (two entry points), Neville's tableau and the natural
//! cubic spline. Every routine rejects queries outside `[min(x), max(x)]`.

use analiza_types::error::{NumericError, NumericResult};
use ndarray::Array2;

use crate::tridiag::thomas_solve;

/// Common shape checks: equal lengths, at least `required` points, finite values.
fn check_samples(
    method: &'static str,
    x_vals: &[f64],
    y_vals: &[f64],
    required: usize,
) -> NumericResult<()> {
    if x_vals.len() != y_vals.len() {
        return Err(NumericError::ShapeMismatch(format!(
            "x and y lists must be the same length ({} vs {})",
            x_vals.len(),
            y_vals.len()
        )));
    }
    if x_vals.len() < required {
        return Err(NumericError::InsufficientData {
            method,
            required,
            found: x_vals.len(),
        });
    }
    if x_vals.iter().chain(y_vals.iter()).any(|v| !v.is_finite()) {
        return Err(NumericError::InvalidParameter(
            "x and y values must be finite numbers".to_string(),
        ));
    }
    Ok(())
}

/// Reject `x` outside `[min(x_vals), max(x_vals)]`. Assumes `x_vals` is non-empty.
fn check_range(x_vals: &[f64], x: f64) -> NumericResult<()> {
    if !x.is_finite() {
        return Err(NumericError::InvalidParameter(format!(
            "query point must be finite, got {x}"
        )));
    }
    let min = x_vals.iter().copied().fold(f64::INFINITY, f64::min);
    let max = x_vals.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if x < min || x > max {
        return Err(NumericError::OutOfRange { x, min, max });
    }
    Ok(())
}

/// Piecewise-linear interpolation.
///
/// The segment is the first `[x_i, x_{i+1}]` (smallest `i`) that contains `x`.
/// Querying a breakpoint returns its `y` exactly.
pub fn linear_interpolation(x_vals: &[f64], y_vals: &[f64], x: f64) -> NumericResult<f64> {
    check_samples("linear interpolation", x_vals, y_vals, 2)?;
    check_range(x_vals, x)?;

    for i in 0..x_vals.len() - 1 {
        let (x0, x1) = (x_vals[i], x_vals[i + 1]);
        if x0 <= x && x <= x1 {
            let (y0, y1) = (y_vals[i], y_vals[i + 1]);
            if x0 == x1 {
                return Err(NumericError::DuplicateAbscissa { value: x0 });
            }
            if x == x0 {
                return Ok(y0);
            }
            if x == x1 {
                return Ok(y1);
            }
            return Ok(y0 + ((y1 - y0) / (x1 - x0)) * (x - x0));
        }
    }

    // In range but never bracketed: the table runs downhill somewhere.
    let index = x_vals
        .windows(2)
        .position(|w| w[1] < w[0])
        .map_or(0, |i| i + 1);
    Err(NumericError::UnsortedInput { index })
}

/// Σ_i y_i · Π_{j≠i} (x − x_j)/(x_i − x_j), failing on the first repeated abscissa.
fn lagrange_sum(x_vals: &[f64], y_vals: &[f64], x: f64) -> NumericResult<f64> {
    let n = x_vals.len();
    let mut result = 0.0;
    for i in 0..n {
        let mut term = y_vals[i];
        for j in 0..n {
            if j == i {
                continue;
            }
            if x_vals[i] == x_vals[j] {
                return Err(NumericError::DuplicateAbscissa { value: x_vals[i] });
            }
            term *= (x - x_vals[j]) / (x_vals[i] - x_vals[j]);
        }
        result += term;
    }
    Ok(result)
}

/// Interpolating polynomial through every sample, evaluated at `x`.
pub fn polynomial_interpolation(x_vals: &[f64], y_vals: &[f64], x: f64) -> NumericResult<f64> {
    check_samples("polynomial interpolation", x_vals, y_vals, 2)?;
    check_range(x_vals, x)?;
    lagrange_sum(x_vals, y_vals, x)
}

/// Lagrange form of the interpolating polynomial.
///
/// Same polynomial as [`polynomial_interpolation`]; kept as a separate entry
/// point for callers that name the method explicitly.
pub fn lagrange_interpolation(x_vals: &[f64], y_vals: &[f64], x: f64) -> NumericResult<f64> {
    check_samples("Lagrange interpolation", x_vals, y_vals, 2)?;
    check_range(x_vals, x)?;
    lagrange_sum(x_vals, y_vals, x)
}

/// Neville's algorithm.
///
/// `T[i][0] = y_i`,
/// `T[i][j] = ((x − x_{i+j}) T[i][j−1] − (x − x_i) T[i+1][j−1]) / (x_i − x_{i+j})`,
/// result `T[0][n−1]`.
pub fn neville(x_vals: &[f64], y_vals: &[f64], x: f64) -> NumericResult<f64> {
    check_samples("Neville interpolation", x_vals, y_vals, 2)?;
    check_range(x_vals, x)?;

    let n = x_vals.len();
    let mut tableau = Array2::<f64>::zeros((n, n));
    for i in 0..n {
        tableau[[i, 0]] = y_vals[i];
    }
    for j in 1..n {
        for i in 0..n - j {
            let den = x_vals[i] - x_vals[i + j];
            if den == 0.0 {
                return Err(NumericError::DuplicateAbscissa { value: x_vals[i] });
            }
            tableau[[i, j]] = ((x - x_vals[i + j]) * tableau[[i, j - 1]]
                - (x - x_vals[i]) * tableau[[i + 1, j - 1]])
                / den;
        }
    }
    Ok(tableau[[0, n - 1]])
}

/// Natural cubic spline coefficients.
///
/// Segment `i` on `[x_i, x_{i+1}]` evaluates
/// `a_i + b_i·dx + c_i·dx² + d_i·dx³` with `dx = x − x_i`.
/// `c` carries one extra trailing entry (the right boundary, always 0).
#[derive(Debug, Clone)]
pub struct CubicSpline {
    x: Vec<f64>,
    a: Vec<f64>,
    b: Vec<f64>,
    c: Vec<f64>,
    d: Vec<f64>,
}

impl CubicSpline {
    /// Fit a natural spline (zero second derivative at both ends).
    ///
    /// Needs at least 3 points with strictly ascending `x`.
    pub fn new(x_vals: &[f64], y_vals: &[f64]) -> NumericResult<Self> {
        check_samples("cubic spline", x_vals, y_vals, 3)?;
        for i in 1..x_vals.len() {
            if x_vals[i] < x_vals[i - 1] {
                return Err(NumericError::UnsortedInput { index: i });
            }
            if x_vals[i] == x_vals[i - 1] {
                return Err(NumericError::DuplicateAbscissa { value: x_vals[i] });
            }
        }

        let n = x_vals.len();
        let h: Vec<f64> = x_vals.windows(2).map(|w| w[1] - w[0]).collect();

        // Tridiagonal system for c; first and last rows pin c to zero.
        let mut sub = vec![0.0; n];
        let mut main = vec![1.0; n];
        let mut sup = vec![0.0; n];
        let mut rhs = vec![0.0; n];
        for i in 1..n - 1 {
            sub[i] = h[i - 1];
            main[i] = 2.0 * (h[i - 1] + h[i]);
            sup[i] = h[i];
            rhs[i] = (3.0 / h[i]) * (y_vals[i + 1] - y_vals[i])
                - (3.0 / h[i - 1]) * (y_vals[i] - y_vals[i - 1]);
        }
        let c = thomas_solve(&sub, &main, &sup, &rhs)?;

        let mut b = vec![0.0; n - 1];
        let mut d = vec![0.0; n - 1];
        for j in 0..n - 1 {
            b[j] = (y_vals[j + 1] - y_vals[j]) / h[j] - h[j] * (c[j + 1] + 2.0 * c[j]) / 3.0;
            d[j] = (c[j + 1] - c[j]) / (3.0 * h[j]);
        }

        Ok(CubicSpline {
            x: x_vals.to_vec(),
            a: y_vals[..n - 1].to_vec(),
            b,
            c,
            d,
        })
    }

    /// Value at `x`, from the first segment whose closed interval contains it.
    pub fn evaluate(&self, x: f64) -> NumericResult<f64> {
        check_range(&self.x, x)?;
        for i in 0..self.x.len() - 1 {
            if self.x[i] <= x && x <= self.x[i + 1] {
                let dx = x - self.x[i];
                return Ok(self.a[i] + self.b[i] * dx + self.c[i] * dx * dx + self.d[i] * dx * dx * dx);
            }
        }
        Err(NumericError::OutOfRange {
            x,
            min: self.x[0],
            max: self.x[self.x.len() - 1],
        })
    }

    /// Evaluate every point of `xs`, failing on the first out-of-range query.
    pub fn evaluate_many(&self, xs: &[f64]) -> NumericResult<Vec<f64>> {
        xs.iter().map(|&x| self.evaluate(x)).collect()
    }

    pub fn knots(&self) -> &[f64] {
        &self.x
    }

    /// `(a, b, c, d)` per segment; `c` has one extra trailing entry.
    pub fn coefficients(&self) -> (&[f64], &[f64], &[f64], &[f64]) {
        (&self.a, &self.b, &self.c, &self.d)
    }
}

/// Fit a natural cubic spline and evaluate it once.
pub fn cubic_spline_interpolation(x_vals: &[f64], y_vals: &[f64], x: f64) -> NumericResult<f64> {
    let spline = CubicSpline::new(x_vals, y_vals)?;
    spline.evaluate(x)
}
