// ─────────────────────────────────────────────────────────────────────
// Analiza Numerics — Root Finding
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Single-variable root finding: bisection, Newton-Raphson, secant.
//!
//! All three share the same contract: absolute tolerance `epsilon > 0`,
//! iteration cap `max_iter >= 1`, and an observer that receives one
//! `RootStep` per iteration plus a `RootConverged` on success.

use analiza_types::config::RootConfig;
use analiza_types::error::{NumericError, NumericResult};
use analiza_types::progress::{ProgressEvent, ProgressObserver};

fn validate(epsilon: f64, max_iter: usize, starts: &[f64]) -> NumericResult<()> {
    RootConfig { epsilon, max_iter }.validate()?;
    if starts.iter().any(|v| !v.is_finite()) {
        return Err(NumericError::InvalidParameter(
            "starting points must be finite numbers".to_string(),
        ));
    }
    Ok(())
}

fn report_step<O: ProgressObserver + ?Sized>(
    observer: &mut O,
    method: &str,
    iteration: usize,
    estimate: f64,
) {
    observer.on_event(&ProgressEvent::RootStep {
        method: method.to_string(),
        iteration,
        estimate,
    });
}

fn converged<O: ProgressObserver + ?Sized>(
    observer: &mut O,
    method: &str,
    iterations: usize,
    root: f64,
) -> NumericResult<f64> {
    observer.on_event(&ProgressEvent::RootConverged {
        method: method.to_string(),
        iterations,
        root,
    });
    Ok(root)
}

/// Bisection on `[a, b]`.
///
/// Requires `f(a)·f(b) < 0`. Stops as soon as `|f(mid)| < epsilon`, or once
/// the half-width `(b − a)/2` drops to `epsilon`, returning the midpoint.
///
/// # Errors
/// * `InvalidInterval` if `a >= b`
/// * `SignError` if there is no sign change on `[a, b]`
/// * `NonConvergence` after `max_iter` halvings; `last_estimate` is the
///   midpoint of the final bracket
pub fn bisection<F, O>(
    f: F,
    a: f64,
    b: f64,
    epsilon: f64,
    max_iter: usize,
    observer: &mut O,
) -> NumericResult<f64>
where
    F: Fn(f64) -> f64,
    O: ProgressObserver + ?Sized,
{
    const METHOD: &str = "bisection";
    validate(epsilon, max_iter, &[a, b])?;
    if a >= b {
        return Err(NumericError::InvalidInterval { a, b });
    }

    let mut f_left = f(a);
    let f_right = f(b);
    let product = f_left * f_right;
    if product.is_nan() || product >= 0.0 {
        return Err(NumericError::SignError { a, b });
    }

    let mut left = a;
    let mut right = b;
    let mut iteration = 0;

    loop {
        if (right - left) / 2.0 <= epsilon {
            return converged(observer, METHOD, iteration, (left + right) / 2.0);
        }
        if iteration >= max_iter {
            return Err(NumericError::NonConvergence {
                method: METHOD,
                iterations: iteration,
                last_estimate: (left + right) / 2.0,
            });
        }

        let mid = (left + right) / 2.0;
        let f_mid = f(mid);
        iteration += 1;
        report_step(observer, METHOD, iteration, mid);

        if f_mid.abs() < epsilon {
            return converged(observer, METHOD, iteration, mid);
        }

        if f_left * f_mid < 0.0 {
            right = mid;
        } else {
            left = mid;
            f_left = f_mid;
        }
    }
}

/// Newton-Raphson iteration `x ← x − f(x)/f'(x)` from `x0`.
///
/// Converged when two successive iterates differ by less than `epsilon`.
///
/// # Errors
/// * `ZeroDerivative` if `f'(x)` is exactly zero
/// * `NonConvergence` after `max_iter` steps, or when an iterate stops being finite
pub fn newton_raphson<F, DF, O>(
    f: F,
    f_prime: DF,
    x0: f64,
    epsilon: f64,
    max_iter: usize,
    observer: &mut O,
) -> NumericResult<f64>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
    O: ProgressObserver + ?Sized,
{
    const METHOD: &str = "newton_raphson";
    validate(epsilon, max_iter, &[x0])?;

    let mut x = x0;
    for iteration in 1..=max_iter {
        let fx = f(x);
        let fpx = f_prime(x);
        if fpx == 0.0 {
            return Err(NumericError::ZeroDerivative { x, iteration });
        }

        let x_new = x - fx / fpx;
        report_step(observer, METHOD, iteration, x_new);
        if !x_new.is_finite() {
            return Err(NumericError::NonConvergence {
                method: METHOD,
                iterations: iteration,
                last_estimate: x_new,
            });
        }

        if (x_new - x).abs() < epsilon {
            return converged(observer, METHOD, iteration, x_new);
        }
        x = x_new;
    }

    Err(NumericError::NonConvergence {
        method: METHOD,
        iterations: max_iter,
        last_estimate: x,
    })
}

/// Secant iteration from the two starting points `x0`, `x1`.
///
/// # Errors
/// * `DivisionByZero` if `f(x_k) == f(x_{k−1})` exactly
/// * `NonConvergence` after `max_iter` steps, or when an iterate stops being finite
pub fn secant<F, O>(
    f: F,
    x0: f64,
    x1: f64,
    epsilon: f64,
    max_iter: usize,
    observer: &mut O,
) -> NumericResult<f64>
where
    F: Fn(f64) -> f64,
    O: ProgressObserver + ?Sized,
{
    const METHOD: &str = "secant";
    validate(epsilon, max_iter, &[x0, x1])?;

    let mut x_prev = x0;
    let mut x_curr = x1;
    let mut f_prev = f(x_prev);

    for iteration in 1..=max_iter {
        let f_curr = f(x_curr);
        let denominator = f_curr - f_prev;
        if denominator == 0.0 {
            return Err(NumericError::DivisionByZero {
                method: METHOD,
                iteration,
            });
        }

        let x_next = x_curr - f_curr * (x_curr - x_prev) / denominator;
        report_step(observer, METHOD, iteration, x_next);
        if !x_next.is_finite() {
            return Err(NumericError::NonConvergence {
                method: METHOD,
                iterations: iteration,
                last_estimate: x_next,
            });
        }

        if (x_next - x_curr).abs() < epsilon {
            return converged(observer, METHOD, iteration, x_next);
        }

        x_prev = x_curr;
        f_prev = f_curr;
        x_curr = x_next;
    }

    Err(NumericError::NonConvergence {
        method: METHOD,
        iterations: max_iter,
        last_estimate: x_curr,
    })
}
