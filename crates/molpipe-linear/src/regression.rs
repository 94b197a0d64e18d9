use crate::solve::solve;
use molpipe_core::error::CoreResult;
use molpipe_core::{CoreError, Matrix};
use molpipe_pipeline::Estimator;

/// Ordinary Least Squares linear regression.
///
/// Fits `y = Xw + b` via the normal equations `XᵀX w = Xᵀy`, solved by LU
/// with partial pivoting. A rank-deficient design matrix surfaces as
/// `CoreError::SingularMatrix`.
pub struct LinearRegression {
    pub fit_intercept: bool,
    weights: Option<Vec<f64>>,
    bias: f64,
}

impl LinearRegression {
    pub fn new(fit_intercept: bool) -> Self {
        LinearRegression {
            fit_intercept,
            weights: None,
            bias: 0.0,
        }
    }

    /// Fitted coefficients, one per feature column.
    pub fn weights(&self) -> Option<&[f64]> {
        self.weights.as_deref()
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }
}

impl Default for LinearRegression {
    fn default() -> Self {
        LinearRegression::new(true)
    }
}

impl Estimator for LinearRegression {
    fn fit(&mut self, x: &Matrix<f64>, y: &[f64]) -> CoreResult<()> {
        let n = x.rows();
        if n != y.len() {
            return Err(CoreError::ShapeMismatch {
                expected: (n, 1),
                got: (y.len(), 1),
            });
        }
        if n == 0 {
            return Err(CoreError::EmptyMatrix);
        }

        // Optionally prepend a ones column for the intercept.
        let x_aug = if self.fit_intercept {
            Matrix::hstack(&[&Matrix::ones(n, 1), x])?
        } else {
            x.clone()
        };

        let xt = x_aug.transpose();
        let xtx = xt.matmul(&x_aug)?;
        let xty = xt.matvec(y)?;
        let w = solve(&xtx, &xty)?;

        if self.fit_intercept {
            self.bias = w[0];
            self.weights = Some(w[1..].to_vec());
        } else {
            self.bias = 0.0;
            self.weights = Some(w);
        }
        Ok(())
    }

    fn predict(&self, x: &Matrix<f64>) -> CoreResult<Vec<f64>> {
        let w = self
            .weights
            .as_ref()
            .ok_or(CoreError::NotFitted("LinearRegression"))?;
        let mut preds = x.matvec(w)?;
        for p in preds.iter_mut() {
            *p += self.bias;
        }
        Ok(preds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_exact_line() {
        // y = 2x + 1
        let x = Matrix::from_rows(&[vec![0.0], vec![1.0], vec![2.0], vec![3.0]]).unwrap();
        let y = [1.0, 3.0, 5.0, 7.0];

        let mut model = LinearRegression::new(true);
        model.fit(&x, &y).unwrap();
        assert_relative_eq!(model.weights().unwrap()[0], 2.0, epsilon = 1e-8);
        assert_relative_eq!(model.bias(), 1.0, epsilon = 1e-8);

        let preds = model.predict(&x).unwrap();
        for (&p, &t) in preds.iter().zip(&y) {
            assert_relative_eq!(p, t, epsilon = 1e-8);
        }
    }

    #[test]
    fn test_no_intercept() {
        // y = 3x through the origin.
        let x = Matrix::from_rows(&[vec![1.0], vec![2.0], vec![4.0]]).unwrap();
        let y = [3.0, 6.0, 12.0];

        let mut model = LinearRegression::new(false);
        model.fit(&x, &y).unwrap();
        assert_relative_eq!(model.weights().unwrap()[0], 3.0, epsilon = 1e-8);
        assert_eq!(model.bias(), 0.0);
    }

    #[test]
    fn test_two_features() {
        // y = x0 + 2*x1
        let x = Matrix::from_rows(&[
            vec![1.0, 0.0],
            vec![0.0, 1.0],
            vec![1.0, 1.0],
            vec![2.0, 3.0],
        ])
        .unwrap();
        let y = [1.0, 2.0, 3.0, 8.0];

        let mut model = LinearRegression::new(true);
        model.fit(&x, &y).unwrap();
        let w = model.weights().unwrap();
        assert_relative_eq!(w[0], 1.0, epsilon = 1e-8);
        assert_relative_eq!(w[1], 2.0, epsilon = 1e-8);
        assert_relative_eq!(model.bias(), 0.0, epsilon = 1e-8);
    }

    #[test]
    fn test_not_fitted() {
        let model = LinearRegression::new(true);
        let err = model.predict(&Matrix::zeros(1, 1)).unwrap_err();
        assert_eq!(err, CoreError::NotFitted("LinearRegression"));
    }

    #[test]
    fn test_rank_deficient() {
        // Duplicate columns make XᵀX singular.
        let x = Matrix::from_rows(&[vec![1.0, 1.0], vec![2.0, 2.0], vec![3.0, 3.0]]).unwrap();
        let y = [1.0, 2.0, 3.0];
        let mut model = LinearRegression::new(false);
        assert_eq!(model.fit(&x, &y), Err(CoreError::SingularMatrix));
    }
}
