// ─────────────────────────────────────────────────────────────────────
// Analiza Numerics — Iterative Linear Solvers
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Jacobi and Gauss-Seidel fixed-point iteration for dense `Ax = b`.
//!
//! Both share one preamble: if `A` is not diagonally dominant, try the
//! greedy row repair (reordering `b` the same way) and carry on regardless,
//! with a warning event when dominance still fails.
//!
//! Stopping rule: `max_i |x_i^(k+1) − x_i^(k)| < tolerance`. The loop is
//! bounded by `IterativeConfig::max_iterations`; with `None` a divergent or
//! oscillating system never returns.

use analiza_types::config::IterativeConfig;
use analiza_types::error::{NumericError, NumericResult};
use analiza_types::progress::{ProgressEvent, ProgressObserver};
use ndarray::Array2;

use crate::linalg::{is_diagonally_dominant, repair_diagonal_dominance, DominanceRepair};

/// Fixed point found by [`jacobi_solve`] or [`gauss_seidel_solve`].
#[derive(Debug, Clone, PartialEq)]
pub struct IterativeSolution {
    pub solution: Vec<f64>,
    /// Number of full passes, counting the one that met the tolerance.
    pub iterations: usize,
    /// Whether the matrix actually iterated on was diagonally dominant.
    pub diagonally_dominant: bool,
    /// Row permutation applied by the repair step, if one was applied.
    pub permutation: Option<Vec<usize>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sweep {
    Jacobi,
    GaussSeidel,
}

impl Sweep {
    fn name(self) -> &'static str {
        match self {
            Sweep::Jacobi => "jacobi",
            Sweep::GaussSeidel => "gauss_seidel",
        }
    }
}

/// Jacobi iteration: every component of pass `k+1` uses only pass `k`.
pub fn jacobi_solve<O>(
    coefficients: &Array2<f64>,
    constants: &[f64],
    initial_guess: &[f64],
    config: &IterativeConfig,
    observer: &mut O,
) -> NumericResult<IterativeSolution>
where
    O: ProgressObserver + ?Sized,
{
    solve(Sweep::Jacobi, coefficients, constants, initial_guess, config, observer)
}

/// Gauss-Seidel iteration: components are overwritten in place, so later
/// rows of a pass already see the updated earlier components.
pub fn gauss_seidel_solve<O>(
    coefficients: &Array2<f64>,
    constants: &[f64],
    initial_guess: &[f64],
    config: &IterativeConfig,
    observer: &mut O,
) -> NumericResult<IterativeSolution>
where
    O: ProgressObserver + ?Sized,
{
    solve(
        Sweep::GaussSeidel,
        coefficients,
        constants,
        initial_guess,
        config,
        observer,
    )
}

fn validate(
    coefficients: &Array2<f64>,
    constants: &[f64],
    initial_guess: &[f64],
    config: &IterativeConfig,
) -> NumericResult<usize> {
    let (rows, cols) = coefficients.dim();
    if rows != cols {
        return Err(NumericError::InvalidParameter(format!(
            "coefficient matrix must be square, got {rows}x{cols}"
        )));
    }
    if rows == 0 {
        return Err(NumericError::InvalidParameter(
            "coefficient matrix must not be empty".to_string(),
        ));
    }
    if constants.len() != rows {
        return Err(NumericError::ShapeMismatch(format!(
            "constants must have one entry per equation ({rows}), got {}",
            constants.len()
        )));
    }
    if initial_guess.len() != rows {
        return Err(NumericError::ShapeMismatch(format!(
            "initial guess must have one entry per variable ({rows}), got {}",
            initial_guess.len()
        )));
    }
    let all_finite = coefficients
        .iter()
        .chain(constants.iter())
        .chain(initial_guess.iter())
        .all(|v| v.is_finite());
    if !all_finite {
        return Err(NumericError::InvalidParameter(
            "system entries must be finite numbers".to_string(),
        ));
    }
    config.validate()?;
    Ok(rows)
}

fn solve<O>(
    sweep: Sweep,
    coefficients: &Array2<f64>,
    constants: &[f64],
    initial_guess: &[f64],
    config: &IterativeConfig,
    observer: &mut O,
) -> NumericResult<IterativeSolution>
where
    O: ProgressObserver + ?Sized,
{
    let n = validate(coefficients, constants, initial_guess, config)?;
    let method = sweep.name();

    let mut a = coefficients.clone();
    let mut b = constants.to_vec();
    let mut permutation = None;
    let mut dominant = is_diagonally_dominant(&a);

    if !dominant {
        observer.on_event(&ProgressEvent::DominanceRepairAttempted);
        match repair_diagonal_dominance(&a) {
            DominanceRepair::Rearranged {
                matrix,
                permutation: perm,
            } => {
                let mut reordered = vec![0.0; n];
                for (i, &target) in perm.iter().enumerate() {
                    reordered[target] = b[i];
                }
                a = matrix;
                b = reordered;
                permutation = Some(perm);
            }
            DominanceRepair::Unchanged(_) => {
                observer.on_event(&ProgressEvent::DominanceRepairFailed);
            }
        }
        dominant = is_diagonally_dominant(&a);
        if !dominant {
            observer.on_event(&ProgressEvent::ConvergenceWarning);
        }
    }

    // A zero diagonal entry would divide by zero on the first pass.
    if (0..n).any(|i| a[[i, i]] == 0.0) {
        return Err(NumericError::DivisionByZero {
            method,
            iteration: 1,
        });
    }

    let mut previous = initial_guess.to_vec();
    let mut current = previous.clone();
    let mut iteration = 0usize;

    loop {
        iteration += 1;

        for i in 0..n {
            let source = match sweep {
                Sweep::Jacobi => &previous,
                Sweep::GaussSeidel => &current,
            };
            let mut sum_other = 0.0;
            for j in 0..n {
                if j != i {
                    sum_other += a[[i, j]] * source[j];
                }
            }
            current[i] = (b[i] - sum_other) / a[[i, i]];
        }

        observer.on_event(&ProgressEvent::LinearStep {
            method: method.to_string(),
            iteration,
            guess: current.clone(),
        });

        let max_change = current
            .iter()
            .zip(previous.iter())
            .map(|(c, p)| (c - p).abs())
            .fold(0.0_f64, f64::max);

        if current.iter().any(|v| !v.is_finite()) {
            return Err(NumericError::NonConvergence {
                method,
                iterations: iteration,
                last_estimate: max_change,
            });
        }

        if max_change < config.tolerance {
            observer.on_event(&ProgressEvent::LinearConverged {
                method: method.to_string(),
                iterations: iteration,
            });
            return Ok(IterativeSolution {
                solution: current,
                iterations: iteration,
                diagonally_dominant: dominant,
                permutation,
            });
        }

        if config.max_iterations.is_some_and(|cap| iteration >= cap) {
            return Err(NumericError::NonConvergence {
                method,
                iterations: iteration,
                last_estimate: max_change,
            });
        }

        previous.copy_from_slice(&current);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use analiza_types::progress::{NoopObserver, RecordingObserver};
    use ndarray::array;

    fn system() -> (Array2<f64>, Vec<f64>) {
        (
            array![[10.0, 2.0, -1.0], [-3.0, -6.0, 2.0], [1.0, 1.0, 5.0]],
            vec![27.0, -61.5, -21.5],
        )
    }

    const EXACT: [f64; 3] = [0.5, 8.0, -6.0];

    #[test]
    fn test_jacobi_converges() {
        let (a, b) = system();
        let cfg = IterativeConfig::with_tolerance(1e-10);
        let sol = jacobi_solve(&a, &b, &[0.0; 3], &cfg, &mut NoopObserver).unwrap();
        for i in 0..3 {
            assert!(
                (sol.solution[i] - EXACT[i]).abs() < 1e-8,
                "x[{i}] = {}",
                sol.solution[i]
            );
        }
        assert!(sol.diagonally_dominant);
        assert_eq!(sol.permutation, None);
    }

    #[test]
    fn test_gauss_seidel_not_slower_than_jacobi() {
        let (a, b) = system();
        let cfg = IterativeConfig::with_tolerance(1e-8);
        let j = jacobi_solve(&a, &b, &[0.0; 3], &cfg, &mut NoopObserver).unwrap();
        let gs = gauss_seidel_solve(&a, &b, &[0.0; 3], &cfg, &mut NoopObserver).unwrap();
        for i in 0..3 {
            assert!((gs.solution[i] - EXACT[i]).abs() < 1e-6);
            assert!((gs.solution[i] - j.solution[i]).abs() < 1e-6);
        }
        assert!(
            gs.iterations <= j.iterations,
            "Gauss-Seidel {} vs Jacobi {}",
            gs.iterations,
            j.iterations
        );
    }

    #[test]
    fn test_repair_reorders_constants_too() {
        let a = array![[1.0, 1.0, 5.0], [10.0, 2.0, -1.0], [-3.0, -6.0, 2.0]];
        let b = vec![-21.5, 27.0, -61.5];
        let mut rec = RecordingObserver::new();
        let cfg = IterativeConfig::with_tolerance(1e-10);
        let sol = gauss_seidel_solve(&a, &b, &[0.0; 3], &cfg, &mut rec).unwrap();
        assert_eq!(sol.permutation, Some(vec![2, 0, 1]));
        assert!(sol.diagonally_dominant);
        assert_eq!(rec.events()[0], ProgressEvent::DominanceRepairAttempted);
        for i in 0..3 {
            assert!((sol.solution[i] - EXACT[i]).abs() < 1e-8);
        }
    }

    #[test]
    fn test_non_dominant_still_iterates_with_warning() {
        // Not dominant and not repairable, but Gauss-Seidel converges (SPD)
        let a = array![[1.0, 1.2], [1.2, 2.0]];
        let b = vec![2.2, 3.2];
        let mut rec = RecordingObserver::new();
        let cfg = IterativeConfig::with_tolerance(1e-10);
        let sol = gauss_seidel_solve(&a, &b, &[0.0, 0.0], &cfg, &mut rec).unwrap();
        assert!(!sol.diagonally_dominant);
        assert!(rec.events().contains(&ProgressEvent::DominanceRepairFailed));
        assert!(rec.events().contains(&ProgressEvent::ConvergenceWarning));
        assert!((sol.solution[0] - 1.0).abs() < 1e-8);
        assert!((sol.solution[1] - 1.0).abs() < 1e-8);
    }

    #[test]
    fn test_divergent_system_hits_safety_cap() {
        // Repair fails and the Jacobi spectral radius is √1.5
        let a = array![[1.0, 2.0], [3.0, 4.0]];
        let b = vec![1.0, 1.0];
        let cfg = IterativeConfig {
            tolerance: 1e-8,
            max_iterations: Some(50),
        };
        let err = jacobi_solve(&a, &b, &[0.0, 0.0], &cfg, &mut NoopObserver).unwrap_err();
        assert!(matches!(
            err,
            NumericError::NonConvergence {
                method: "jacobi",
                iterations: 50,
                ..
            }
        ));
    }

    #[test]
    fn test_step_events_match_iterations() {
        let (a, b) = system();
        let mut rec = RecordingObserver::new();
        let sol = jacobi_solve(&a, &b, &[0.0; 3], &IterativeConfig::default(), &mut rec).unwrap();
        assert_eq!(rec.step_count(), sol.iterations);
        assert!(matches!(
            rec.events().last(),
            Some(ProgressEvent::LinearConverged { .. })
        ));
    }

    #[test]
    fn test_zero_diagonal_is_division_by_zero() {
        let a = array![[0.0, 0.0], [0.0, 1.0]];
        let cfg = IterativeConfig::default();
        let err = jacobi_solve(&a, &[1.0, 1.0], &[0.0, 0.0], &cfg, &mut NoopObserver).unwrap_err();
        assert!(matches!(err, NumericError::DivisionByZero { .. }));
    }

    #[test]
    fn test_shape_validation() {
        let (a, b) = system();
        let cfg = IterativeConfig::default();
        assert!(matches!(
            jacobi_solve(&a, &b[..2], &[0.0; 3], &cfg, &mut NoopObserver),
            Err(NumericError::ShapeMismatch(_))
        ));
        assert!(matches!(
            jacobi_solve(&a, &b, &[0.0; 2], &cfg, &mut NoopObserver),
            Err(NumericError::ShapeMismatch(_))
        ));
        let rect = Array2::<f64>::ones((2, 3));
        assert!(matches!(
            jacobi_solve(&rect, &[1.0, 1.0], &[0.0, 0.0], &cfg, &mut NoopObserver),
            Err(NumericError::InvalidParameter(_))
        ));
        let bad_tol = IterativeConfig::with_tolerance(-1.0);
        assert!(matches!(
            gauss_seidel_solve(&a, &b, &[0.0; 3], &bad_tol, &mut NoopObserver),
            Err(NumericError::InvalidParameter(_))
        ));
    }
}
