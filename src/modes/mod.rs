pub mod forward;
pub mod plot;

pub use forward::{ForwardConfig, ForwardMode};
pub use plot::{PlotConfig, PlotMode};
