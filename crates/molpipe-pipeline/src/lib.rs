pub mod pipeline;

pub use pipeline::{Estimator, Featurizer, Pipeline, Transformer};
