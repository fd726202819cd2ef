pub mod cross_entropy;
pub mod mse;


pub use cross_entropy::{binary_cross_entropy, negative_log_likelihood};
pub use mse::mean_squared_error;
