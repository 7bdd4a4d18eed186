//! Flat weight vector of the snake policy
//!
//! The trainer keeps every parameter in one contiguous array so that noise
//! can be added to the whole model at once. The array is split into three
//! consecutive blocks:
//!
//! ```text
//! [0, C*H)          board -> hidden weights, row-major (C, H)
//! [C*H, 2*C*H)      hidden bias, one row of H per apple position
//! [2*C*H, 2*C*H+H*A) hidden -> output weights, row-major (H, A)
//! ```
//!
//! where `C = game_size²` is the number of board cells, `H` the hidden size
//! and `A` the number of actions.

use anyhow::{Result, bail};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::ops::Range;

/// Board side length used by the trainer
pub const GAME_SIZE: usize = 4;

/// Hidden layer width used by the trainer
pub const HIDDEN_SIZE: usize = 32;

/// Turn left, turn right, no turn
pub const NUM_ACTIONS: usize = 3;

/// Dimensions of the policy network
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelShape {
    pub game_size: usize,
    pub hidden_size: usize,
    pub num_actions: usize,
}

impl ModelShape {
    pub fn new(game_size: usize, hidden_size: usize) -> Self {
        Self {
            game_size,
            hidden_size,
            num_actions: NUM_ACTIONS,
        }
    }

    /// Number of board cells, which is also the number of apple positions
    pub fn cells(&self) -> usize {
        self.game_size * self.game_size
    }

    pub fn input_block(&self) -> Range<usize> {
        0..self.cells() * self.hidden_size
    }

    /// Bias row for one apple position
    pub fn bias_row(&self, apple_pos: usize) -> Range<usize> {
        let start = self.input_block().end + apple_pos * self.hidden_size;
        start..start + self.hidden_size
    }

    pub fn output_block(&self) -> Range<usize> {
        let start = 2 * self.cells() * self.hidden_size;
        start..start + self.hidden_size * self.num_actions
    }

    /// Total parameter count, `2*C*H + H*A`
    ///
    /// # Example
    ///
    /// ```rust
    /// use snake_runs::model::ModelShape;
    ///
    /// assert_eq!(ModelShape::new(4, 32).num_params(), 1120);
    /// ```
    pub fn num_params(&self) -> usize {
        self.output_block().end
    }
}

impl Default for ModelShape {
    fn default() -> Self {
        Self::new(GAME_SIZE, HIDDEN_SIZE)
    }
}

/// Weight vector paired with the shape it was created for
#[derive(Debug, Clone, PartialEq)]
pub struct SnakeWeights {
    shape: ModelShape,
    values: Vec<f32>,
}

impl SnakeWeights {
    pub fn zeros(shape: ModelShape) -> Self {
        Self {
            shape,
            values: vec![0.0; shape.num_params()],
        }
    }

    /// Zero weights plus uniform noise in `[-sigma, sigma)` from a seeded RNG
    ///
    /// A non-positive `sigma` gives the zero vector. A `sigma` that is not
    /// finite, or so large that `2 * sigma` overflows, is an error.
    pub fn perturbed(shape: ModelShape, seed: u64, sigma: f32) -> Result<Self> {
        if !sigma.is_finite() || sigma > f32::MAX / 2.0 {
            bail!("sigma must be finite and at most {}, got {sigma}", f32::MAX / 2.0);
        }

        let mut weights = Self::zeros(shape);
        if sigma > 0.0 {
            let mut rng = StdRng::seed_from_u64(seed);
            for value in &mut weights.values {
                *value += rng.gen_range(-sigma..sigma);
            }
        }
        Ok(weights)
    }

    pub fn shape(&self) -> ModelShape {
        self.shape
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
