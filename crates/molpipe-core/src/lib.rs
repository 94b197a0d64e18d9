pub mod dtype;
pub mod error;
pub mod matrix;

pub use dtype::Float;
pub use error::{CoreError, CoreResult};
pub use matrix::Matrix;
