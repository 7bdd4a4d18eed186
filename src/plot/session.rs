//! Interactive run collection
//!
//! Prompts for run numbers and adds one curve per valid run to a shared
//! figure. The first input that fails to produce a curve ends the session;
//! the reason is only logged, never reported at the prompt.

use anyhow::{Context, Result};
use log::debug;
use std::io::{BufRead, Write};

use super::{Figure, XAxis};
use crate::metrics::{DEFAULT_WINDOW, RewardStats};
use crate::runs::RunLoader;

pub const PROMPT: &str = "Enter training run #: ";

pub struct PlotSession {
    loader: RunLoader,
    axis: XAxis,
    figure: Figure,
}

impl PlotSession {
    pub fn new(loader: RunLoader, axis: XAxis) -> Self {
        Self {
            loader,
            axis,
            figure: Figure::new(axis),
        }
    }

    pub fn axis(&self) -> XAxis {
        self.axis
    }

    pub fn figure(&self) -> &Figure {
        &self.figure
    }

    pub fn into_figure(self) -> Figure {
        self.figure
    }

    /// Try to add the run named by `input`
    ///
    /// Returns `false` if the run is invalid for any reason.
    pub fn add_run<W: Write>(&mut self, input: &str, out: &mut W) -> bool {
        let Some(run) = self.loader.load(input, out) else {
            return false;
        };

        let points = match self.axis.points(&run) {
            Ok(points) => points,
            Err(err) => {
                debug!("{err:#}");
                return false;
            }
        };

        let stats = RewardStats::from_rewards(&run.rewards, DEFAULT_WINDOW);
        if let Err(err) = writeln!(out, "  {}", stats.format_summary()) {
            debug!("failed to print summary for {}: {err}", run.label());
        }

        self.figure.push(run.label(), points);
        true
    }

    /// Prompt until a run fails to load or input ends
    ///
    /// Returns the number of runs added.
    pub fn collect<R: BufRead, W: Write>(&mut self, mut input: R, out: &mut W) -> Result<usize> {
        let mut added = 0;

        loop {
            write!(out, "{PROMPT}").context("Failed to write prompt")?;
            out.flush().context("Failed to flush prompt")?;

            let mut line = String::new();
            let read = input.read_line(&mut line).context("Failed to read input")?;
            if read == 0 || !self.add_run(&line, out) {
                break;
            }
            added += 1;
        }

        Ok(added)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::path::Path;
    use tempfile::TempDir;

    fn write_run(root: &Path, number: i64, config: &str, log: &str) {
        let dir = root.join(number.to_string());
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("config.txt"), config).unwrap();
        std::fs::write(dir.join("log.txt"), log).unwrap();
    }

    #[test]
    fn test_collect_until_invalid() {
        let temp = TempDir::new().unwrap();
        write_run(temp.path(), 1, "nTrials: 10\nitersPerTrial: 5", "1.0\n2.0\n3.0\n");
        write_run(temp.path(), 2, "nTrials: 1\nitersPerTrial: 1", "0.5\n");
        write_run(temp.path(), 3, "nTrials: 1\nitersPerTrial: 1", "9.0\n");

        let mut session = PlotSession::new(RunLoader::new(temp.path()), XAxis::GamesPlayed);
        let mut out = Vec::new();
        let added = session
            .collect(Cursor::new("1\n2\nstop\n3\n"), &mut out)
            .unwrap();

        assert_eq!(added, 2);
        let figure = session.into_figure();
        assert_eq!(figure.series[0].label, "Run 1");
        assert_eq!(
            figure.series[0].points,
            vec![(0.0, 1.0), (50.0, 2.0), (100.0, 3.0)]
        );
        assert_eq!(figure.series[1].label, "Run 2");

        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.matches(PROMPT).count(), 3);
        assert!(out.contains("  nTrials: 10\n"));
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let temp = TempDir::new().unwrap();
        write_run(temp.path(), 1, "", "1.0\n");

        let mut session = PlotSession::new(RunLoader::new(temp.path()), XAxis::Steps);
        let added = session.collect(Cursor::new("1\n"), &mut Vec::new()).unwrap();

        assert_eq!(added, 1);
        assert_eq!(session.figure().len(), 1);
    }

    #[test]
    fn test_missing_config_key_invalid_in_games_mode() {
        let temp = TempDir::new().unwrap();
        write_run(temp.path(), 5, "name: test", "1.0\n2.0\n");

        let mut games = PlotSession::new(RunLoader::new(temp.path()), XAxis::GamesPlayed);
        assert!(!games.add_run("5", &mut Vec::new()));
        assert!(games.figure().is_empty());

        let mut steps = PlotSession::new(RunLoader::new(temp.path()), XAxis::Steps);
        assert!(steps.add_run("5", &mut Vec::new()));
        assert_eq!(steps.figure().series[0].points, vec![(0.0, 1.0), (1.0, 2.0)]);
    }

    struct ClosedOutput;

    impl Write for ClosedOutput {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_summary_write_failure_keeps_run() {
        let temp = TempDir::new().unwrap();
        write_run(temp.path(), 8, "", "1.0\n2.0\n");

        let mut session = PlotSession::new(RunLoader::new(temp.path()), XAxis::Steps);
        assert!(session.add_run("8", &mut ClosedOutput));
        assert_eq!(session.figure().series[0].label, "Run 8");
    }

    #[test]
    fn test_non_integer_first_input() {
        let temp = TempDir::new().unwrap();
        let mut session = PlotSession::new(RunLoader::new(temp.path()), XAxis::Steps);
        let added = session.collect(Cursor::new("abc\n"), &mut Vec::new()).unwrap();
        assert_eq!(added, 0);
        assert_eq!(session.axis(), XAxis::Steps);
        assert!(session.figure().is_empty());
    }
}
