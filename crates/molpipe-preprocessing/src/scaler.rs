use molpipe_core::error::CoreResult;
use molpipe_core::{CoreError, Matrix};
use molpipe_pipeline::Transformer;

/// Standardize features by removing the mean and scaling to unit variance.
///
/// Stateful: `transform` before `fit` returns `CoreError::NotFitted`.
pub struct StandardScaler {
    mean: Option<Vec<f64>>,
    std: Option<Vec<f64>>,
}

impl StandardScaler {
    pub fn new() -> Self {
        StandardScaler {
            mean: None,
            std: None,
        }
    }
}

impl Default for StandardScaler {
    fn default() -> Self {
        Self::new()
    }
}

impl Transformer for StandardScaler {
    /// Compute per-column mean and std from training data.
    fn fit(&mut self, x: &Matrix<f64>) -> CoreResult<()> {
        self.mean = Some(x.column_mean()?);
        self.std = Some(x.column_std()?);
        Ok(())
    }

    fn transform(&self, x: &Matrix<f64>) -> CoreResult<Matrix<f64>> {
        let mean = self
            .mean
            .as_ref()
            .ok_or(CoreError::NotFitted("StandardScaler"))?;
        let std = self
            .std
            .as_ref()
            .ok_or(CoreError::NotFitted("StandardScaler"))?;
        if x.cols() != mean.len() {
            return Err(CoreError::ShapeMismatch {
                expected: (x.rows(), mean.len()),
                got: x.shape(),
            });
        }

        let mut out = x.clone();
        for i in 0..x.rows() {
            for j in 0..x.cols() {
                // Constant columns pass through centered only.
                let s = if std[j].abs() < f64::EPSILON { 1.0 } else { std[j] };
                out.set(i, j, (x.get(i, j)? - mean[j]) / s)?;
            }
        }
        Ok(out)
    }
}
