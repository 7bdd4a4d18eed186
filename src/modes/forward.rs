//! Forward mode: run the policy once on an empty board
//!
//! Builds the trainer's initial weight vector (zeros, optionally perturbed)
//! and prints the action scores for the given apple position.

use anyhow::Result;
use log::info;

use crate::model::{InferenceBackend, ModelShape, SnakeModel, SnakeWeights, default_device};

/// Configuration for forward mode
#[derive(Debug, Clone)]
pub struct ForwardConfig {
    pub shape: ModelShape,

    /// Board cell holding the apple
    pub apple_pos: usize,

    /// Uniform noise scale added to the zero weights
    pub sigma: f32,

    /// Seed for the noise
    pub seed: u64,
}

impl Default for ForwardConfig {
    fn default() -> Self {
        Self {
            shape: ModelShape::default(),
            apple_pos: 0,
            sigma: 0.0,
            seed: 42,
        }
    }
}

pub struct ForwardMode {
    config: ForwardConfig,
    model: SnakeModel,
    weights: SnakeWeights,
}

impl ForwardMode {
    pub fn new(config: ForwardConfig) -> Result<Self> {
        let model = SnakeModel::new(config.shape);
        let weights = SnakeWeights::perturbed(config.shape, config.seed, config.sigma)?;

        Ok(Self {
            config,
            model,
            weights,
        })
    }

    /// Action scores for an empty board
    pub fn evaluate(&self) -> Result<Vec<f32>> {
        let board = vec![0.0; self.config.shape.cells()];
        self.model.forward::<InferenceBackend>(
            self.weights.values(),
            &board,
            self.config.apple_pos,
            &default_device(),
        )
    }

    pub fn run(&self) -> Result<()> {
        println!("Model has {} parameters", self.config.shape.num_params());
        info!(
            "game size {}, hidden size {}, sigma {}",
            self.config.shape.game_size, self.config.shape.hidden_size, self.config.sigma
        );

        let out = self.evaluate()?;
        let scores: Vec<String> = out.iter().map(|v| format!("{v:.6}")).collect();
        println!("Apple at {}: [{}]", self.config.apple_pos, scores.join(", "));

        Ok(())
    }
}
