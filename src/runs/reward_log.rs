//! Reward series parsed from `log.txt`
//!
//! The trainer appends one line per training step. Fields are separated by
//! spaces and the first field is the average reward for that step.

use anyhow::{Context, Result};

/// Parse the reward series from the contents of a `log.txt`
///
/// Every line must start with a float. An empty log, a blank line in the
/// middle of the file, or a non-numeric first field is an error.
///
/// # Example
///
/// ```rust
/// use snake_runs::runs::parse_rewards;
///
/// let rewards = parse_rewards("1.0 x\n2.5 y\n").unwrap();
/// assert_eq!(rewards, vec![1.0, 2.5]);
/// ```
pub fn parse_rewards(contents: &str) -> Result<Vec<f64>> {
    contents
        .trim()
        .split('\n')
        .enumerate()
        .map(|(index, line)| {
            let field = line.split_whitespace().next().unwrap_or("");
            field
                .parse::<f64>()
                .with_context(|| format!("line {}: invalid reward {field:?}", index + 1))
        })
        .collect()
}
