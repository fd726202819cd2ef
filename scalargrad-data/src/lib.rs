//! Data plumbing for ScalarGrad training loops: batch loaders over a
//! feature/target matrix pair, and column standardization.

pub mod loaders;
pub mod normalize;

#[cfg(test)]
mod normalize_test;

// Re-export main components
pub use loaders::{DataLoader, FullBatchLoader, MiniBatchLoader, StochasticLoader};
pub use normalize::ColumnNormalizer;
