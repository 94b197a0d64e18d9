use molpipe_core::error::CoreResult;
use molpipe_core::{CoreError, Matrix};
use molpipe_pipeline::Transformer;

/// Expand features with all monomials of total degree `1..=degree`,
/// optionally prefixed with a bias column.
///
/// For input columns `(a, b)` and degree 2 the output columns are
/// `[1,] a, b, a², ab, b²`. Stateless: `fit` is a no-op.
pub struct PolynomialFeatures {
    pub degree: usize,
    pub include_bias: bool,
}

impl PolynomialFeatures {
    pub fn new(degree: usize, include_bias: bool) -> Self {
        PolynomialFeatures {
            degree,
            include_bias,
        }
    }

    /// Monomials as sorted index multisets, degree 1 upward.
    fn monomials(&self, n_features: usize) -> Vec<Vec<usize>> {
        let mut all = Vec::new();
        let mut current: Vec<Vec<usize>> = (0..n_features).map(|j| vec![j]).collect();
        for _ in 0..self.degree {
            all.extend(current.iter().cloned());
            let mut next = Vec::new();
            for combo in &current {
                // Extend only with indices >= the last one to avoid duplicates.
                let last = *combo.last().expect("combos are non-empty");
                for j in last..n_features {
                    let mut longer = combo.clone();
                    longer.push(j);
                    next.push(longer);
                }
            }
            current = next;
        }
        all
    }
}

impl Transformer for PolynomialFeatures {
    fn fit(&mut self, _x: &Matrix<f64>) -> CoreResult<()> {
        Ok(())
    }

    fn transform(&self, x: &Matrix<f64>) -> CoreResult<Matrix<f64>> {
        if self.degree == 0 {
            return Err(CoreError::InvalidConfig {
                param: "degree",
                value: 0,
            });
        }
        let monomials = self.monomials(x.cols());
        let bias = self.include_bias as usize;
        let out_cols = bias + monomials.len();

        let mut out = Matrix::zeros(x.rows(), out_cols);
        for i in 0..x.rows() {
            let row = x.row(i)?;
            if self.include_bias {
                out.set(i, 0, 1.0)?;
            }
            for (k, combo) in monomials.iter().enumerate() {
                let value: f64 = combo.iter().map(|&j| row[j]).product();
                out.set(i, bias + k, value)?;
            }
        }
        Ok(out)
    }
}
