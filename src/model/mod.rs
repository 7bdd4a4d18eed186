//! Snake policy network
//!
//! Provides:
//! - Flat weight vector layout and initialization
//! - Burn-backed forward pass, generic over the backend
//! - NdArray backend alias for CPU inference

pub mod backend;
pub mod network;
pub mod weights;

pub use backend::{InferenceBackend, default_device};
pub use network::SnakeModel;
pub use weights::{GAME_SIZE, HIDDEN_SIZE, ModelShape, NUM_ACTIONS, SnakeWeights};
