pub mod regression;
mod solve;

pub use regression::LinearRegression;
