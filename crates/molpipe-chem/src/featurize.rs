//! Batch featurization: SMILES identifiers → fingerprint matrix.

use crate::fingerprint::MorganFingerprint;
use crate::smiles;

use molpipe_core::error::CoreResult;
use molpipe_core::{CoreError, Matrix};
use molpipe_pipeline::Featurizer;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Converts molecule identifier strings into fixed-length circular
/// fingerprints, one row per input molecule.
///
/// Featurization is deterministic and data-independent: `fit` learns
/// nothing and `featurize` is a pure function of the input and the
/// `(n_bits, radius)` configuration. Changing the configuration only
/// affects later calls; matrices already returned are never touched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MorganFeaturizer {
    n_bits: usize,
    radius: usize,
}

impl MorganFeaturizer {
    pub fn new(n_bits: usize, radius: usize) -> Self {
        MorganFeaturizer { n_bits, radius }
    }

    pub fn n_bits(&self) -> usize {
        self.n_bits
    }

    pub fn radius(&self) -> usize {
        self.radius
    }

    /// Takes effect on the next `featurize` call.
    pub fn set_n_bits(&mut self, n_bits: usize) {
        self.n_bits = n_bits;
    }

    /// Takes effect on the next `featurize` call.
    pub fn set_radius(&mut self, radius: usize) {
        self.radius = radius;
    }

    /// Configuration is validated at call time, not construction: it may be
    /// mutated between calls.
    fn check_config(&self) -> CoreResult<()> {
        if self.n_bits == 0 {
            return Err(CoreError::InvalidConfig {
                param: "n_bits",
                value: self.n_bits,
            });
        }
        if self.radius == 0 {
            return Err(CoreError::InvalidConfig {
                param: "radius",
                value: self.radius,
            });
        }
        Ok(())
    }
}

impl Default for MorganFeaturizer {
    fn default() -> Self {
        MorganFeaturizer::new(2048, 2)
    }
}

impl Featurizer for MorganFeaturizer {
    /// No-op: fingerprints require no fitting.
    fn fit(&mut self, _x: &[String], _y: Option<&[f64]>) -> CoreResult<()> {
        Ok(())
    }

    fn featurize(&self, x: &[String]) -> CoreResult<Matrix<f64>> {
        self.check_config()?;
        if x.is_empty() {
            return Matrix::new(Vec::new(), 0, self.n_bits);
        }

        let fp = MorganFingerprint::new(self.n_bits, self.radius);

        // Embarrassingly parallel over elements; the indexed collect keeps
        // rows in input order. One malformed identifier fails the whole
        // batch, carrying its position.
        let rows: Vec<Vec<f64>> = x
            .par_iter()
            .enumerate()
            .map(|(index, smiles_str)| {
                let mol = smiles::parse(smiles_str).map_err(|e| CoreError::Decode {
                    index,
                    input: smiles_str.clone(),
                    reason: e.to_string(),
                })?;
                Ok(fp.compute(&mol))
            })
            .collect::<CoreResult<Vec<_>>>()?;

        Matrix::from_rows(&rows)
    }
}
