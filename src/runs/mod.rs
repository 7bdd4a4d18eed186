//! Training-run records on disk
//!
//! A run is a numbered folder holding the trainer's `config.txt` and
//! `log.txt`.

pub mod config;
pub mod loader;
pub mod reward_log;

pub use config::{ConfigValue, RunConfig};
pub use loader::{DEFAULT_RUNS_DIR, Run, RunLoader, parse_run_number};
pub use reward_log::parse_rewards;
