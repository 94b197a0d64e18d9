use molpipe_core::error::CoreResult;
use molpipe_core::{CoreError, Matrix};

/// Trait for featurizers: raw molecule identifiers in, feature matrix out.
///
/// Deterministic featurizers implement `fit` as a no-op returning `Ok(())`.
pub trait Featurizer {
    fn fit(&mut self, x: &[String], y: Option<&[f64]>) -> CoreResult<()>;
    fn featurize(&self, x: &[String]) -> CoreResult<Matrix<f64>>;
    fn fit_featurize(&mut self, x: &[String], y: Option<&[f64]>) -> CoreResult<Matrix<f64>> {
        self.fit(x, y)?;
        self.featurize(x)
    }
}

/// Trait for matrix-to-matrix transformers (scalers, feature expansions).
///
/// Stateful transformers must return `CoreError::NotFitted` from `transform`
/// when `fit` has not run yet.
pub trait Transformer {
    fn fit(&mut self, x: &Matrix<f64>) -> CoreResult<()>;
    fn transform(&self, x: &Matrix<f64>) -> CoreResult<Matrix<f64>>;
    fn fit_transform(&mut self, x: &Matrix<f64>) -> CoreResult<Matrix<f64>> {
        self.fit(x)?;
        self.transform(x)
    }
}

/// Trait for supervised estimators.
pub trait Estimator {
    fn fit(&mut self, x: &Matrix<f64>, y: &[f64]) -> CoreResult<()>;
    fn predict(&self, x: &Matrix<f64>) -> CoreResult<Vec<f64>>;
}

/// A modeling pipeline: optional featurizer front end, chained transformers,
/// and a final estimator, invoked as a single unit.
pub struct Pipeline {
    featurizer: Option<Box<dyn Featurizer>>,
    transformers: Vec<Box<dyn Transformer>>,
    estimator: Option<Box<dyn Estimator>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Pipeline {
            featurizer: None,
            transformers: Vec::new(),
            estimator: None,
        }
    }

    /// Set the featurizer front end (identifier strings → matrix).
    pub fn with_featurizer(mut self, featurizer: Box<dyn Featurizer>) -> Self {
        self.featurizer = Some(featurizer);
        self
    }

    /// Append a transformer step.
    pub fn with_transformer(mut self, transformer: Box<dyn Transformer>) -> Self {
        self.transformers.push(transformer);
        self
    }

    /// Set the final estimator.
    pub fn with_estimator(mut self, estimator: Box<dyn Estimator>) -> Self {
        self.estimator = Some(estimator);
        self
    }

    /// Fit the whole chain on raw identifiers and targets.
    pub fn fit(&mut self, x: &[String], y: &[f64]) -> CoreResult<()> {
        let features = match &mut self.featurizer {
            Some(f) => f.fit_featurize(x, Some(y))?,
            None => {
                return Err(CoreError::InvalidOperation(
                    "pipeline has no featurizer; use fit_matrix".into(),
                ))
            }
        };
        self.fit_matrix(&features, y)
    }

    /// Featurize and predict for raw identifiers.
    pub fn predict(&self, x: &[String]) -> CoreResult<Vec<f64>> {
        let features = match &self.featurizer {
            Some(f) => f.featurize(x)?,
            None => {
                return Err(CoreError::InvalidOperation(
                    "pipeline has no featurizer; use predict_matrix".into(),
                ))
            }
        };
        self.predict_matrix(&features)
    }

    /// Fit transformers and estimator starting from an existing matrix.
    pub fn fit_matrix(&mut self, x: &Matrix<f64>, y: &[f64]) -> CoreResult<()> {
        let mut current = x.clone();
        for t in &mut self.transformers {
            current = t.fit_transform(&current)?;
        }
        match &mut self.estimator {
            Some(est) => est.fit(&current, y),
            None => Ok(()),
        }
    }

    /// Transform an existing matrix through the chain and predict.
    pub fn predict_matrix(&self, x: &Matrix<f64>) -> CoreResult<Vec<f64>> {
        let mut current = x.clone();
        for t in &self.transformers {
            current = t.transform(&current)?;
        }
        match &self.estimator {
            Some(est) => est.predict(&current),
            None => Err(CoreError::InvalidOperation("no estimator set".into())),
        }
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts rows seen in fit; predicts the training-target mean.
    struct MeanEstimator {
        mean: Option<f64>,
    }

    impl Estimator for MeanEstimator {
        fn fit(&mut self, _x: &Matrix<f64>, y: &[f64]) -> CoreResult<()> {
            self.mean = Some(y.iter().sum::<f64>() / y.len() as f64);
            Ok(())
        }

        fn predict(&self, x: &Matrix<f64>) -> CoreResult<Vec<f64>> {
            let m = self.mean.ok_or(CoreError::NotFitted("MeanEstimator"))?;
            Ok(vec![m; x.rows()])
        }
    }

    /// Doubles every value; stateless.
    struct Doubler;

    impl Transformer for Doubler {
        fn fit(&mut self, _x: &Matrix<f64>) -> CoreResult<()> {
            Ok(())
        }
        fn transform(&self, x: &Matrix<f64>) -> CoreResult<Matrix<f64>> {
            Ok(x.map(|v| v * 2.0))
        }
    }

    #[test]
    fn test_matrix_pipeline() {
        let x = Matrix::from_rows(&[vec![1.0], vec![2.0], vec![3.0]]).unwrap();
        let y = [1.0, 2.0, 3.0];

        let mut p = Pipeline::new()
            .with_transformer(Box::new(Doubler))
            .with_estimator(Box::new(MeanEstimator { mean: None }));
        p.fit_matrix(&x, &y).unwrap();

        let preds = p.predict_matrix(&x).unwrap();
        assert_eq!(preds, vec![2.0, 2.0, 2.0]);
    }

    #[test]
    fn test_predict_without_estimator() {
        let x = Matrix::zeros(2, 2);
        let p = Pipeline::new().with_transformer(Box::new(Doubler));
        assert!(p.predict_matrix(&x).is_err());
    }

    #[test]
    fn test_unfitted_estimator_reports_not_fitted() {
        let est = MeanEstimator { mean: None };
        let err = est.predict(&Matrix::zeros(1, 1)).unwrap_err();
        assert_eq!(err, CoreError::NotFitted("MeanEstimator"));
    }

    #[test]
    fn test_string_entry_requires_featurizer() {
        let mut p = Pipeline::new().with_estimator(Box::new(MeanEstimator { mean: None }));
        assert!(p.fit(&["C".to_string()], &[1.0]).is_err());
    }
}
