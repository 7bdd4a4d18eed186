//! Single-hidden-layer policy for the snake trainer
//!
//! # Architecture
//!
//! ```text
//! Input: board [1, C], apple position p
//!   ↓ board @ W_in                 [C, H]
//!   ↓ + bias[p]                    [H]
//!   ↓ tanh
//!   ↓ @ W_out                      [H, A]
//! Output: action scores [A]
//! ```
//!
//! The apple position does not enter through the board; it picks which bias
//! row is added to the hidden layer. All three blocks are read from one flat
//! weight vector, see [`super::weights`].
//!
//! # Example
//!
//! ```rust
//! use snake_runs::model::{
//!     InferenceBackend, ModelShape, SnakeModel, SnakeWeights, default_device,
//! };
//!
//! let shape = ModelShape::new(4, 32);
//! let model = SnakeModel::new(shape);
//! let weights = SnakeWeights::zeros(shape);
//! let board = vec![0.0; shape.cells()];
//!
//! let out = model
//!     .forward::<InferenceBackend>(weights.values(), &board, 5, &default_device())
//!     .unwrap();
//! assert_eq!(out, vec![0.0, 0.0, 0.0]);
//! ```

use anyhow::{Result, anyhow, bail};
use burn::tensor::{Tensor, TensorData, activation::tanh, backend::Backend};

use super::ModelShape;

/// Stateless forward pass over a flat weight vector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnakeModel {
    shape: ModelShape,
}

impl SnakeModel {
    pub fn new(shape: ModelShape) -> Self {
        Self { shape }
    }

    pub fn shape(&self) -> ModelShape {
        self.shape
    }

    /// Compute `tanh(board @ W_in + bias[apple_pos]) @ W_out`
    ///
    /// # Arguments
    ///
    /// * `weights` - Flat vector of exactly `shape.num_params()` values
    /// * `board` - One value per board cell
    /// * `apple_pos` - Cell index of the apple, selects the bias row
    /// * `device` - Device to run on
    ///
    /// # Returns
    ///
    /// One score per action, or an error if any input has the wrong size.
    pub fn forward<B: Backend>(
        &self,
        weights: &[f32],
        board: &[f32],
        apple_pos: usize,
        device: &B::Device,
    ) -> Result<Vec<f32>> {
        let shape = self.shape;
        let cells = shape.cells();

        if cells == 0 || shape.hidden_size == 0 || shape.num_actions == 0 {
            bail!(
                "model dimensions must be non-zero, got {cells} cells, hidden size {}, {} actions",
                shape.hidden_size,
                shape.num_actions
            );
        }
        if weights.len() != shape.num_params() {
            bail!(
                "weight vector has {} values, expected {}",
                weights.len(),
                shape.num_params()
            );
        }
        if board.len() != cells {
            bail!("board has {} cells, expected {}", board.len(), cells);
        }
        if apple_pos >= cells {
            bail!("apple position {apple_pos} outside board of {cells} cells");
        }

        let board = matrix::<B>(board, [1, cells], device);
        let w_in = matrix::<B>(
            &weights[shape.input_block()],
            [cells, shape.hidden_size],
            device,
        );
        let bias = matrix::<B>(
            &weights[shape.bias_row(apple_pos)],
            [1, shape.hidden_size],
            device,
        );
        let w_out = matrix::<B>(
            &weights[shape.output_block()],
            [shape.hidden_size, shape.num_actions],
            device,
        );

        let hidden = tanh(board.matmul(w_in) + bias);
        let out = hidden.matmul(w_out);

        out.into_data()
            .to_vec::<f32>()
            .map_err(|err| anyhow!("Failed to read network output: {err:?}"))
    }
}

impl Default for SnakeModel {
    fn default() -> Self {
        Self::new(ModelShape::default())
    }
}

fn matrix<B: Backend>(values: &[f32], dims: [usize; 2], device: &B::Device) -> Tensor<B, 2> {
    Tensor::from_data(TensorData::new(values.to_vec(), dims), device)
}
