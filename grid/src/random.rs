use cellgrid::{Cell, Dimension};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::Grid;

impl Grid {
    /// A grid whose cells are independently alive with probability 1/2.
    pub fn random<R: Rng + ?Sized>(dimension: Dimension, rng: &mut R) -> Grid {
        let cells = (0..dimension.cell_count())
            .map(|_| Cell::from(rng.gen_bool(0.5)))
            .collect();
        Grid { dimension, cells }
    }

    /// Like [`Grid::random`], drawing from a ChaCha stream when `seed` is
    /// given and from the thread-local generator otherwise.
    pub fn random_seeded(dimension: Dimension, seed: Option<u64>) -> Grid {
        tracing::debug!(n = dimension.get(), ?seed, "generating random grid");
        match seed {
            Some(seed) => {
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                Grid::random(dimension, &mut rng)
            }
            None => Grid::random(dimension, &mut rand::thread_rng()),
        }
    }
}
