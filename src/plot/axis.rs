use anyhow::{Context, Result};

use crate::runs::Run;

/// Y-axis label shared by every plot
pub const REWARD_LABEL: &str = "Avg. Reward (# Apples Eaten)";

/// Config key for the number of perturbed models evaluated per step
pub const TRIALS_KEY: &str = "nTrials";

/// Config key for the number of games each trial plays
pub const ITERS_KEY: &str = "itersPerTrial";

/// What the x-axis of a reward plot counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum XAxis {
    /// Raw training step index
    Steps,
    /// Cumulative games played, `step * nTrials * itersPerTrial`
    #[default]
    GamesPlayed,
}

impl XAxis {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Steps => "Training Step",
            Self::GamesPlayed => "# Games Played",
        }
    }

    /// X coordinate of every reward in `run`
    ///
    /// Fails in games-played mode if the run's config lacks a numeric
    /// `nTrials` or `itersPerTrial`.
    pub fn ticks(&self, run: &Run) -> Result<Vec<f64>> {
        let scale = match self {
            Self::Steps => 1.0,
            Self::GamesPlayed => {
                let trials = run.config.float(TRIALS_KEY)?;
                let iters = run.config.float(ITERS_KEY)?;
                trials * iters
            }
        };

        Ok((0..run.rewards.len()).map(|i| i as f64 * scale).collect())
    }

    /// Pair each reward of `run` with its tick
    pub fn points(&self, run: &Run) -> Result<Vec<(f64, f64)>> {
        let ticks = self
            .ticks(run)
            .with_context(|| format!("cannot place {} on the x-axis", run.label()))?;
        Ok(ticks.into_iter().zip(run.rewards.iter().copied()).collect())
    }
}
