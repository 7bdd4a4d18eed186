//! Backend type alias and device management
//!
//! The policy network is tiny (a few thousand parameters) and only ever runs
//! one board at a time, so the plain NdArray CPU backend is all it needs.

use burn::backend::ndarray::{NdArray, NdArrayDevice};

/// Backend used to run the policy forward pass
pub type InferenceBackend = NdArray<f32>;

/// Get the default device for computation
///
/// # Example
///
/// ```rust
/// use snake_runs::model::default_device;
///
/// let device = default_device();
/// ```
pub fn default_device() -> NdArrayDevice {
    NdArrayDevice::default()
}
