//! Snake Runs - tooling around the snake evolution-strategies trainer
//!
//! This library provides:
//! - Training-run loading from `trainingRuns/<n>/` (runs module)
//! - Reward statistics (metrics module)
//! - Reward-curve figures and the run prompt (plot module)
//! - Terminal chart rendering (render and input modules)
//! - The policy forward pass over a flat weight vector (model module)
//! - Plot and forward execution modes (modes module)

pub mod input;
pub mod metrics;
pub mod model;
pub mod modes;
pub mod plot;
pub mod render;
pub mod runs;
