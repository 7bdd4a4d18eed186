use anyhow::{Context, Result};
use log::{debug, info};
use std::io::Write;
use std::path::{Path, PathBuf};

use super::{RunConfig, parse_rewards};

/// Default directory holding one numbered folder per training run
pub const DEFAULT_RUNS_DIR: &str = "trainingRuns";

const CONFIG_FILE: &str = "config.txt";
const LOG_FILE: &str = "log.txt";

/// One training run loaded from disk
#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    pub number: i64,
    pub config: RunConfig,
    pub rewards: Vec<f64>,
}

impl Run {
    /// Legend label used for this run
    pub fn label(&self) -> String {
        format!("Run {}", self.number)
    }
}

/// Loads runs from `<root>/<number>/`
#[derive(Debug, Clone)]
pub struct RunLoader {
    root: PathBuf,
}

impl RunLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn run_dir(&self, number: i64) -> PathBuf {
        self.root.join(number.to_string())
    }

    /// Load the run named by free-text input
    ///
    /// Returns `None` when the input is not an integer or when anything about
    /// the run fails to load. The config is echoed to `out` as soon as it is
    /// read, even if the log turns out to be unreadable.
    pub fn load<W: Write>(&self, input: &str, out: &mut W) -> Option<Run> {
        let Some(number) = parse_run_number(input) else {
            debug!("not a run number: {:?}", input.trim());
            return None;
        };

        match self.read(number, out) {
            Ok(run) => {
                info!("loaded run {} ({} steps)", run.number, run.rewards.len());
                Some(run)
            }
            Err(err) => {
                debug!("run {number} invalid: {err:#}");
                None
            }
        }
    }

    /// Read both files of a run, echoing the config lines to `out`
    pub fn read<W: Write>(&self, number: i64, out: &mut W) -> Result<Run> {
        let dir = self.run_dir(number);

        let config_path = dir.join(CONFIG_FILE);
        let config_text = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {:?}", config_path))?;
        let config = RunConfig::parse(&config_text);
        for line in config.lines() {
            writeln!(out, "  {line}").context("Failed to echo config")?;
        }

        let log_path = dir.join(LOG_FILE);
        let log_text = std::fs::read_to_string(&log_path)
            .with_context(|| format!("Failed to read {:?}", log_path))?;
        let rewards =
            parse_rewards(&log_text).with_context(|| format!("Failed to parse {:?}", log_path))?;

        Ok(Run {
            number,
            config,
            rewards,
        })
    }
}

impl Default for RunLoader {
    fn default() -> Self {
        Self::new(DEFAULT_RUNS_DIR)
    }
}

/// Parse a run number the way a user types it at the prompt
pub fn parse_run_number(input: &str) -> Option<i64> {
    input.trim().parse().ok()
}
