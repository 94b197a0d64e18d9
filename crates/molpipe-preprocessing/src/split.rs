use molpipe_core::error::CoreResult;
use molpipe_core::{CoreError, Matrix};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Split features and targets into training and test sets.
///
/// Returns `(x_train, x_test, y_train, y_test)`. Pass a seed for a
/// reproducible shuffle.
pub fn train_test_split(
    x: &Matrix<f64>,
    y: &[f64],
    test_ratio: f64,
    seed: Option<u64>,
) -> CoreResult<(Matrix<f64>, Matrix<f64>, Vec<f64>, Vec<f64>)> {
    if !(0.0..=1.0).contains(&test_ratio) {
        return Err(CoreError::InvalidOperation(format!(
            "test_ratio must be within [0, 1], got {test_ratio}"
        )));
    }
    let n = x.rows();
    if n != y.len() {
        return Err(CoreError::ShapeMismatch {
            expected: (n, 1),
            got: (y.len(), 1),
        });
    }

    let mut indices: Vec<usize> = (0..n).collect();
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    indices.shuffle(&mut rng);

    let test_size = (n as f64 * test_ratio).round() as usize;
    let train_size = n - test_size;

    let take = |idxs: &[usize]| -> CoreResult<(Matrix<f64>, Vec<f64>)> {
        let mut data = Vec::with_capacity(idxs.len() * x.cols());
        let mut targets = Vec::with_capacity(idxs.len());
        for &i in idxs {
            data.extend_from_slice(x.row(i)?);
            targets.push(y[i]);
        }
        Ok((Matrix::new(data, idxs.len(), x.cols())?, targets))
    };

    let (x_train, y_train) = take(&indices[..train_size])?;
    let (x_test, y_test) = take(&indices[train_size..])?;
    Ok((x_train, x_test, y_train, y_test))
}
