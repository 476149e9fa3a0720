// ─────────────────────────────────────────────────────────────────────
// Analiza Numerics — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Default absolute tolerance for the scalar root finders.
pub const DEFAULT_ROOT_EPSILON: f64 = 1e-4;

/// Default iteration cap for the scalar root finders.
pub const DEFAULT_ROOT_MAX_ITER: usize = 100;

/// Default convergence tolerance for Jacobi / Gauss-Seidel.
pub const DEFAULT_LINEAR_TOLERANCE: f64 = 1e-5;

/// Safety cap on Jacobi / Gauss-Seidel passes.
/// Large enough that any convergent system of reasonable size finishes first.
pub const DEFAULT_LINEAR_SAFETY_CAP: usize = 100_000;

/// Romberg level k evaluates the integrand 2^(k-1) + 1 times.
pub const MAX_ROMBERG_LEVELS: usize = 30;
