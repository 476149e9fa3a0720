use thiserror::Error;

#[derive(Error, Debug)]
pub enum NumericError {
    #[error("Shape mismatch: {0}")]
    ShapeMismatch(String),

    #[error("{method} requires at least {required} data points, got {found}")]
    InsufficientData {
        method: &'static str,
        required: usize,
        found: usize,
    },

    #[error("The point {x} is outside the range of the table [{min}, {max}]")]
    OutOfRange { x: f64, min: f64, max: f64 },

    #[error("x values must be sorted in ascending order (violated at index {index})")]
    UnsortedInput { index: usize },

    #[error("Duplicate x value {value} is not allowed")]
    DuplicateAbscissa { value: f64 },

    #[error("The function must change sign on [{a}, {b}]")]
    SignError { a: f64, b: f64 },

    #[error("Derivative equals 0 at x = {x} (iteration {iteration})")]
    ZeroDerivative { x: f64, iteration: usize },

    #[error("{method}: division by zero at iteration {iteration}")]
    DivisionByZero {
        method: &'static str,
        iteration: usize,
    },

    /// `last_estimate` is the final iterate for scalar methods and the final
    /// max-norm update for the linear solvers.
    #[error("{method} did not converge after {iterations} iterations (last estimate {last_estimate})")]
    NonConvergence {
        method: &'static str,
        iterations: usize,
        last_estimate: f64,
    },

    #[error("Matrix is singular: zero pivot at row {pivot}")]
    SingularMatrix { pivot: usize },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Invalid interval: b ({b}) must be bigger than a ({a})")]
    InvalidInterval { a: f64, b: f64 },

    #[error("Invalid subdivision: {0}")]
    InvalidSubdivision(String),

    #[error("Invalid index: {0}")]
    InvalidIndex(String),

    #[error("Scalar cannot be zero for row multiplication")]
    ZeroScalar,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type NumericResult<T> = Result<T, NumericError>;

/// Reject tolerances that are NaN, infinite, zero or negative.
pub fn ensure_positive_tolerance(name: &str, value: f64) -> NumericResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(NumericError::InvalidParameter(format!(
            "{name} must be a positive number, got {value}"
        )));
    }
    Ok(())
}
