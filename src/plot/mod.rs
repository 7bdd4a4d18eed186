//! Reward-curve figures
//!
//! Provides:
//! - X-axis modes (training step or games played)
//! - The figure model shared by the terminal chart and JSON export
//! - The prompt loop that collects runs into a figure

pub mod axis;
pub mod export;
pub mod figure;
pub mod session;

pub use axis::{ITERS_KEY, REWARD_LABEL, TRIALS_KEY, XAxis};
pub use export::{load_figure, save_figure};
pub use figure::{Figure, Series};
pub use session::{PROMPT, PlotSession};
