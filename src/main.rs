use anyhow::Result;
use clap::{Parser, ValueEnum};
use snake_runs::model::ModelShape;
use snake_runs::modes::{ForwardConfig, ForwardMode, PlotConfig, PlotMode};
use snake_runs::plot::XAxis;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "snake_runs")]
#[command(version, about = "Plot snake training runs and run the policy forward pass")]
struct Cli {
    /// What to run
    #[arg(long, default_value = "plot")]
    mode: Mode,

    /// X-axis of the reward plot
    #[arg(long, default_value = "games")]
    x_axis: AxisArg,

    /// Directory holding one folder per training run
    #[arg(long, default_value = snake_runs::runs::DEFAULT_RUNS_DIR)]
    runs_dir: PathBuf,

    /// Also write the collected curves to this JSON file
    #[arg(long)]
    export: Option<PathBuf>,

    /// Skip the chart after collecting runs
    #[arg(long)]
    no_show: bool,

    /// Board side length
    #[arg(
        long,
        default_value_t = snake_runs::model::GAME_SIZE,
        value_parser = parse_dimension
    )]
    game_size: usize,

    /// Hidden layer width
    #[arg(
        long,
        default_value_t = snake_runs::model::HIDDEN_SIZE,
        value_parser = parse_dimension
    )]
    hidden_size: usize,

    /// Board cell holding the apple (forward mode)
    #[arg(long, default_value_t = 0)]
    apple_pos: usize,

    /// Noise scale for the initial weights (forward mode)
    #[arg(long, default_value_t = 0.0)]
    sigma: f32,

    /// Seed for the weight noise (forward mode)
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

#[derive(Clone, ValueEnum)]
enum Mode {
    /// Prompt for run numbers and chart their rewards
    Plot,
    /// Run the policy once and print its action scores
    Forward,
}

#[derive(Clone, ValueEnum)]
enum AxisArg {
    /// Training step index
    Steps,
    /// Games played, from nTrials and itersPerTrial
    Games,
}

impl From<AxisArg> for XAxis {
    fn from(arg: AxisArg) -> Self {
        match arg {
            AxisArg::Steps => XAxis::Steps,
            AxisArg::Games => XAxis::GamesPlayed,
        }
    }
}

/// Parse a model dimension, which must be at least 1
fn parse_dimension(arg: &str) -> Result<usize, String> {
    match arg.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(value) => Ok(value),
        Err(err) => Err(err.to_string()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.mode {
        Mode::Plot => {
            let config = PlotConfig {
                runs_dir: cli.runs_dir,
                axis: cli.x_axis.into(),
                export: cli.export,
                show: !cli.no_show,
            };
            let mut plot_mode = PlotMode::new(config);
            plot_mode.run().await?;
        }
        Mode::Forward => {
            let config = ForwardConfig {
                shape: ModelShape::new(cli.game_size, cli.hidden_size),
                apple_pos: cli.apple_pos,
                sigma: cli.sigma,
                seed: cli.seed,
            };
            ForwardMode::new(config)?.run()?;
        }
    }

    Ok(())
}
