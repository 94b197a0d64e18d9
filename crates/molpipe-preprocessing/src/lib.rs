pub mod polynomial;
pub mod scaler;
pub mod split;

pub use polynomial::PolynomialFeatures;
pub use scaler::StandardScaler;
pub use split::train_test_split;
