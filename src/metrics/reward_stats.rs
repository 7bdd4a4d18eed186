//! Summary statistics for a run's reward series
//!
//! Tracks whole-run totals plus a rolling window over the most recent steps,
//! so a long run's summary shows where training ended up and not only its
//! overall average.

use std::collections::VecDeque;

/// Default number of trailing steps used for the recent mean
pub const DEFAULT_WINDOW: usize = 100;

/// Reward statistics with a rolling window
///
/// # Example
///
/// ```rust
/// use snake_runs::metrics::RewardStats;
///
/// let stats = RewardStats::from_rewards(&[1.0, 2.0, 3.0], 2);
///
/// assert_eq!(stats.steps(), 3);
/// assert!((stats.mean() - 2.0).abs() < 1e-9);
/// assert!((stats.recent_mean() - 2.5).abs() < 1e-9);
/// println!("{}", stats.format_summary());
/// ```
#[derive(Debug, Clone)]
pub struct RewardStats {
    /// Most recent rewards (rolling window)
    recent: VecDeque<f64>,

    /// Sum over every recorded step
    total: f64,

    /// Best reward seen
    max: Option<f64>,

    /// Last reward recorded
    last: Option<f64>,

    /// Number of recorded steps
    steps: usize,

    /// Window size for the recent mean
    window_size: usize,
}

impl RewardStats {
    /// Create an empty tracker keeping `window_size` recent rewards
    pub fn new(window_size: usize) -> Self {
        Self {
            recent: VecDeque::with_capacity(window_size),
            total: 0.0,
            max: None,
            last: None,
            steps: 0,
            window_size,
        }
    }

    /// Build stats over a whole reward series
    pub fn from_rewards(rewards: &[f64], window_size: usize) -> Self {
        let mut stats = Self::new(window_size);
        for &reward in rewards {
            stats.record(reward);
        }
        stats
    }

    /// Record the reward of one training step
    pub fn record(&mut self, reward: f64) {
        if self.window_size > 0 {
            if self.recent.len() >= self.window_size {
                self.recent.pop_front();
            }
            self.recent.push_back(reward);
        }
        self.total += reward;
        self.max = Some(self.max.map_or(reward, |max| max.max(reward)));
        self.last = Some(reward);
        self.steps += 1;
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Mean over the whole run, or 0.0 if nothing was recorded
    pub fn mean(&self) -> f64 {
        if self.steps == 0 {
            0.0
        } else {
            self.total / self.steps as f64
        }
    }

    /// Mean over the rolling window, or 0.0 if it is empty
    pub fn recent_mean(&self) -> f64 {
        if self.recent.is_empty() {
            0.0
        } else {
            self.recent.iter().sum::<f64>() / self.recent.len() as f64
        }
    }

    pub fn max(&self) -> f64 {
        self.max.unwrap_or(0.0)
    }

    pub fn last(&self) -> f64 {
        self.last.unwrap_or(0.0)
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// One-line summary printed after a run loads
    pub fn format_summary(&self) -> String {
        format!(
            "Steps: {} | Mean: {:.2} | Max: {:.2} | Final: {:.2} | Last {}: {:.2}",
            self.steps,
            self.mean(),
            self.max(),
            self.last(),
            self.recent.len(),
            self.recent_mean(),
        )
    }
}

impl Default for RewardStats {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_stats() {
        let stats = RewardStats::default();
        assert_eq!(stats.steps(), 0);
        assert_eq!(stats.window_size(), DEFAULT_WINDOW);
        assert_eq!(stats.mean(), 0.0);
        assert_eq!(stats.recent_mean(), 0.0);
        assert_eq!(stats.max(), 0.0);
        assert_eq!(stats.last(), 0.0);
    }

    #[test]
    fn test_whole_run() {
        let stats = RewardStats::from_rewards(&[1.0, 4.0, 2.5], 10);
        assert_eq!(stats.steps(), 3);
        assert!((stats.mean() - 2.5).abs() < 1e-9);
        assert_eq!(stats.max(), 4.0);
        assert_eq!(stats.last(), 2.5);
    }

    #[test]
    fn test_rolling_window() {
        let mut stats = RewardStats::new(3);
        stats.record(1.0);
        stats.record(2.0);
        stats.record(3.0);
        assert!((stats.recent_mean() - 2.0).abs() < 1e-9);

        // Fourth step evicts the first
        stats.record(4.0);
        assert!((stats.recent_mean() - 3.0).abs() < 1e-9);
        assert!((stats.mean() - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_negative_rewards_max() {
        let stats = RewardStats::from_rewards(&[-3.0, -1.0, -2.0], 10);
        assert_eq!(stats.max(), -1.0);
    }

    #[test]
    fn test_format_summary() {
        let stats = RewardStats::from_rewards(&[1.0, 2.5], 100);
        let summary = stats.format_summary();
        assert!(summary.contains("Steps: 2"));
        assert!(summary.contains("Mean: 1.75"));
        assert!(summary.contains("Max: 2.50"));
        assert!(summary.contains("Final: 2.50"));
        assert!(summary.contains("Last 2: 1.75"));
    }
}
