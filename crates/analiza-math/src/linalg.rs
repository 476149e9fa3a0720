//! Dense matrix utilities.
//!
//! Diagonal dominance test and greedy row repair, infinity norm,
//! elementary matrices, Gauss-Jordan inversion without pivoting,
//! and the infinity-norm condition number.

use analiza_types::error::{NumericError, NumericResult};
use analiza_types::progress::{NoopObserver, ProgressEvent, ProgressObserver};
use ndarray::{Array2, ArrayView1};

/// Outcome of [`repair_diagonal_dominance`].
#[derive(Debug, Clone, PartialEq)]
pub enum DominanceRepair {
    /// Row `i` of the input now sits at row `permutation[i]`.
    Rearranged {
        matrix: Array2<f64>,
        permutation: Vec<usize>,
    },
    /// No assignment found; the input matrix, untouched.
    Unchanged(Array2<f64>),
}

impl DominanceRepair {
    pub fn matrix(&self) -> &Array2<f64> {
        match self {
            DominanceRepair::Rearranged { matrix, .. } => matrix,
            DominanceRepair::Unchanged(matrix) => matrix,
        }
    }

    pub fn into_matrix(self) -> Array2<f64> {
        match self {
            DominanceRepair::Rearranged { matrix, .. } => matrix,
            DominanceRepair::Unchanged(matrix) => matrix,
        }
    }

    pub fn permutation(&self) -> Option<&[usize]> {
        match self {
            DominanceRepair::Rearranged { permutation, .. } => Some(permutation),
            DominanceRepair::Unchanged(_) => None,
        }
    }
}

/// Would `row` be dominant if `col` were its diagonal position?
fn dominates_at(row: ArrayView1<f64>, col: usize) -> bool {
    let off: f64 = row
        .iter()
        .enumerate()
        .filter(|&(k, _)| k != col)
        .map(|(_, v)| v.abs())
        .sum();
    row[col].abs() >= off
}

/// `|A[i][i]| >= Σ_{j≠i} |A[i][j]|` for every row.
///
/// Non-square and empty matrices are never dominant.
pub fn is_diagonally_dominant(matrix: &Array2<f64>) -> bool {
    let (rows, cols) = matrix.dim();
    if rows == 0 || rows != cols {
        return false;
    }
    matrix
        .rows()
        .into_iter()
        .enumerate()
        .all(|(i, row)| dominates_at(row, i))
}

/// Greedy first-fit row rearrangement towards diagonal dominance.
///
/// Each row in order takes the first free column where it would dominate.
/// There is no backtracking, so a valid permutation can be missed; in that
/// case (and for non-square input) the matrix comes back unchanged.
pub fn repair_diagonal_dominance(matrix: &Array2<f64>) -> DominanceRepair {
    let (n, cols) = matrix.dim();
    if n == 0 || n != cols {
        return DominanceRepair::Unchanged(matrix.clone());
    }

    let mut taken = vec![false; n];
    let mut permutation = Vec::with_capacity(n);
    for row in matrix.rows() {
        match (0..n).find(|&j| !taken[j] && dominates_at(row, j)) {
            Some(j) => {
                taken[j] = true;
                permutation.push(j);
            }
            None => return DominanceRepair::Unchanged(matrix.clone()),
        }
    }

    let mut rearranged = Array2::zeros((n, n));
    for (i, &target) in permutation.iter().enumerate() {
        rearranged.row_mut(target).assign(&matrix.row(i));
    }
    DominanceRepair::Rearranged {
        matrix: rearranged,
        permutation,
    }
}

/// Maximum absolute row sum.
pub fn infinity_norm(matrix: &Array2<f64>) -> f64 {
    matrix
        .rows()
        .into_iter()
        .map(|row| row.iter().map(|v| v.abs()).sum::<f64>())
        .fold(0.0, f64::max)
}

/// Identity with entry `(target_row, source_row)` set to `scalar`.
///
/// Left-multiplying performs `R_target += scalar · R_source`.
pub fn row_addition_elementary(
    n: usize,
    target_row: usize,
    source_row: usize,
    scalar: f64,
) -> NumericResult<Array2<f64>> {
    if target_row >= n || source_row >= n {
        return Err(NumericError::InvalidIndex(format!(
            "row indices ({target_row}, {source_row}) out of range for size {n}"
        )));
    }
    if target_row == source_row {
        return Err(NumericError::InvalidIndex(
            "source and target rows cannot be the same".to_string(),
        ));
    }
    let mut e = Array2::eye(n);
    e[[target_row, source_row]] = scalar;
    Ok(e)
}

/// Identity with diagonal entry `row_index` set to `scalar`.
pub fn scalar_multiplication_elementary(
    n: usize,
    row_index: usize,
    scalar: f64,
) -> NumericResult<Array2<f64>> {
    if row_index >= n {
        return Err(NumericError::InvalidIndex(format!(
            "row index {row_index} out of range for size {n}"
        )));
    }
    if scalar == 0.0 {
        return Err(NumericError::ZeroScalar);
    }
    let mut e = Array2::eye(n);
    e[[row_index, row_index]] = scalar;
    Ok(e)
}

fn check_square(matrix: &Array2<f64>) -> NumericResult<usize> {
    let (rows, cols) = matrix.dim();
    if rows != cols {
        return Err(NumericError::InvalidParameter(format!(
            "input matrix must be square, got {rows}x{cols}"
        )));
    }
    if rows == 0 {
        return Err(NumericError::InvalidParameter(
            "input matrix must not be empty".to_string(),
        ));
    }
    if matrix.iter().any(|v| !v.is_finite()) {
        return Err(NumericError::InvalidParameter(
            "matrix entries must be finite numbers".to_string(),
        ));
    }
    Ok(rows)
}

/// Inverse by Gauss-Jordan elimination expressed as elementary matrices.
///
/// Pivots are taken in natural order with no row exchanges, so an exactly
/// zero diagonal entry when its turn comes is `SingularMatrix` even if a
/// row swap would have rescued it. Every applied row operation is reported
/// to `observer`.
pub fn matrix_inverse<O>(matrix: &Array2<f64>, observer: &mut O) -> NumericResult<Array2<f64>>
where
    O: ProgressObserver + ?Sized,
{
    let n = check_square(matrix)?;
    let mut work = matrix.clone();
    let mut inverse = Array2::<f64>::eye(n);

    for i in 0..n {
        let pivot = work[[i, i]];
        if pivot == 0.0 {
            return Err(NumericError::SingularMatrix { pivot: i });
        }

        if pivot != 1.0 {
            let scalar = 1.0 / pivot;
            let e = scalar_multiplication_elementary(n, i, scalar)?;
            work = e.dot(&work);
            inverse = e.dot(&inverse);
            observer.on_event(&ProgressEvent::RowOperation {
                target: i,
                source: i,
                scalar,
            });
        }

        for j in 0..n {
            if j == i || work[[j, i]] == 0.0 {
                continue;
            }
            let scalar = -work[[j, i]];
            let e = row_addition_elementary(n, j, i, scalar)?;
            work = e.dot(&work);
            inverse = e.dot(&inverse);
            observer.on_event(&ProgressEvent::RowOperation {
                target: j,
                source: i,
                scalar,
            });
        }
    }

    Ok(inverse)
}

/// `‖A‖∞ · ‖A⁻¹‖∞`. Inversion failures propagate unchanged.
pub fn condition_number(matrix: &Array2<f64>) -> NumericResult<f64> {
    let inverse = matrix_inverse(matrix, &mut NoopObserver)?;
    Ok(infinity_norm(matrix) * infinity_norm(&inverse))
}
