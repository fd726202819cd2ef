use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use scalargrad_core::linalg::Matrix;
use scalargrad_core::ScalarGradError;

use super::{check_not_empty, check_row_counts, DataLoader};

/// Fixed-size batches drawn from a shuffled index permutation, so every
/// sample is visited exactly once per epoch. A batch that crosses the epoch
/// boundary stitches the tail of the old permutation to the head of a
/// fresh one.
#[derive(Debug)]
pub struct MiniBatchLoader {
    features: Matrix,
    targets: Matrix,
    batch_size: usize,
    cursor: usize,
    order: Vec<usize>,
    rng: StdRng,
}

impl MiniBatchLoader {
    pub fn new(
        features: Matrix,
        targets: Matrix,
        batch_size: usize,
    ) -> Result<Self, ScalarGradError> {
        Self::with_rng(features, targets, batch_size, StdRng::from_entropy())
    }

    /// Deterministic shuffling, for reproducible runs and tests.
    pub fn with_seed(
        features: Matrix,
        targets: Matrix,
        batch_size: usize,
        seed: u64,
    ) -> Result<Self, ScalarGradError> {
        Self::with_rng(features, targets, batch_size, StdRng::seed_from_u64(seed))
    }

    fn with_rng(
        features: Matrix,
        targets: Matrix,
        batch_size: usize,
        mut rng: StdRng,
    ) -> Result<Self, ScalarGradError> {
        check_row_counts(&features, &targets, "MiniBatchLoader::new")?;
        check_not_empty(&features, "MiniBatchLoader::new")?;
        let (rows, _) = features.dims();
        if batch_size == 0 || batch_size > rows {
            return Err(ScalarGradError::ConfigurationError(format!(
                "Batch size must be in 1..={}, got {}",
                rows, batch_size
            )));
        }
        let order = shuffled_indices(rows, &mut rng);
        Ok(MiniBatchLoader {
            features,
            targets,
            batch_size,
            cursor: 0,
            order,
            rng,
        })
    }
}

fn shuffled_indices(rows: usize, rng: &mut StdRng) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..rows).collect();
    indices.shuffle(rng);
    indices
}

impl DataLoader for MiniBatchLoader {
    fn next_batch(&mut self) -> Result<(Matrix, Matrix), ScalarGradError> {
        let (rows, _) = self.features.dims();
        let next = self.cursor + self.batch_size;

        let batch_indices = if next >= rows {
            let rest = next - rows;
            let mut batch = self.order[self.cursor..].to_vec();
            self.order = shuffled_indices(rows, &mut self.rng);
            log::trace!("epoch boundary: reshuffled {} indices", rows);
            batch.extend_from_slice(&self.order[..rest]);
            self.cursor = rest;
            batch
        } else {
            let batch = self.order[self.cursor..next].to_vec();
            self.cursor = next;
            batch
        };

        Ok((
            self.features.rows(&batch_indices)?,
            self.targets.rows(&batch_indices)?,
        ))
    }
}
