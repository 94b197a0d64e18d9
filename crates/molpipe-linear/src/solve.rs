use molpipe_core::error::CoreResult;
use molpipe_core::{CoreError, Matrix};

/// Solve the linear system Ax = b using LU decomposition with partial
/// pivoting (Gaussian elimination), A square.
pub fn solve(a: &Matrix<f64>, b: &[f64]) -> CoreResult<Vec<f64>> {
    let n = a.rows();
    if a.cols() != n {
        return Err(CoreError::InvalidOperation("solve: A must be square".into()));
    }
    if b.len() != n {
        return Err(CoreError::ShapeMismatch {
            expected: (n, 1),
            got: (b.len(), 1),
        });
    }

    // Augmented working copy.
    let mut m: Vec<Vec<f64>> = Vec::with_capacity(n);
    for i in 0..n {
        let mut row = a.row(i)?.to_vec();
        row.push(b[i]);
        m.push(row);
    }

    for col in 0..n {
        // Partial pivot: largest magnitude in this column.
        let mut pivot = col;
        for row in col + 1..n {
            if m[row][col].abs() > m[pivot][col].abs() {
                pivot = row;
            }
        }
        if m[pivot][col].abs() < 1e-12 {
            return Err(CoreError::SingularMatrix);
        }
        m.swap(col, pivot);

        for row in col + 1..n {
            let factor = m[row][col] / m[col][col];
            for k in col..=n {
                m[row][k] -= factor * m[col][k];
            }
        }
    }

    // Back substitution.
    let mut x = vec![0.0; n];
    for i in (0..n).rev() {
        let mut sum = m[i][n];
        for j in i + 1..n {
            sum -= m[i][j] * x[j];
        }
        x[i] = sum / m[i][i];
    }
    Ok(x)
}
