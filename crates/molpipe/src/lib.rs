//! # molpipe
//!
//! Molecular fingerprint featurization and model pipelines in pure Rust.
//!
//! ## Modules
//!
//! - **core** — Dense `Matrix` type and the shared error enum
//! - **chem** — SMILES decoding, molecular graphs, Morgan fingerprints,
//!   and the `MorganFeaturizer`
//! - **pipeline** — `Featurizer`/`Transformer`/`Estimator` traits and the
//!   `Pipeline` runner
//! - **preprocessing** — `StandardScaler`, `PolynomialFeatures`,
//!   train/test split
//! - **linear** — OLS linear regression
//! - **metrics** — MSE, RMSE, MAE, R²
//! - **data** — CSV / gzip-CSV molecule datasets, built-in sample set,
//!   weight persistence

/// Core matrix type and errors.
pub use molpipe_core as core;

/// SMILES decoding and fingerprint featurization.
pub use molpipe_chem as chem;

/// Pipeline traits and runner.
pub use molpipe_pipeline as pipeline;

/// Feature scaling, expansion, and splitting.
pub use molpipe_preprocessing as preprocessing;

/// Linear models.
pub use molpipe_linear as linear;

/// Evaluation metrics.
pub use molpipe_metrics as metrics;

/// Dataset loading and persistence.
pub use molpipe_data as data;
