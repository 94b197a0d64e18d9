pub mod regression;

pub use regression::{mae, mse, r2_score, rmse};
