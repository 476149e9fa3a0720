//! Numerical-analysis primitives for Analiza Numerics.
//!
//! Root finding, interpolation, quadrature, dense matrix utilities and
//! iterative linear solvers. Every routine is a pure function of its inputs;
//! iterative routines additionally report progress to a caller-supplied
//! [`ProgressObserver`](analiza_types::progress::ProgressObserver).

pub mod interp;
pub mod iterative;
pub mod linalg;
pub mod precision;
pub mod quadrature;
pub mod roots;
pub mod tridiag;
