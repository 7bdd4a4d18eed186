pub mod reward_stats;

pub use reward_stats::{DEFAULT_WINDOW, RewardStats};
