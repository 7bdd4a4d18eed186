//! Plot mode: collect runs at the prompt, then show them in one chart
//!
//! The prompt loop runs on plain stdin/stdout. Only once it ends does the
//! terminal switch to the alternate screen to draw the figure.
//!
//! # Controls
//!
//! - Q/Esc/Ctrl+C: Close the chart

use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use log::info;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr, stdin, stdout};
use std::path::PathBuf;

use crate::input::{InputHandler, KeyAction};
use crate::plot::{Figure, PlotSession, XAxis, save_figure};
use crate::render::Renderer;
use crate::runs::RunLoader;

/// Configuration for plot mode
#[derive(Debug, Clone)]
pub struct PlotConfig {
    /// Directory holding the numbered run folders
    pub runs_dir: PathBuf,

    /// What the x-axis counts
    pub axis: XAxis,

    /// Write the collected figure here as JSON
    pub export: Option<PathBuf>,

    /// Show the chart once collection ends
    pub show: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            runs_dir: PathBuf::from(crate::runs::DEFAULT_RUNS_DIR),
            axis: XAxis::default(),
            export: None,
            show: true,
        }
    }
}

pub struct PlotMode {
    config: PlotConfig,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
}

impl PlotMode {
    pub fn new(config: PlotConfig) -> Self {
        Self {
            config,
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        let figure = self.collect()?;

        if let Some(path) = &self.config.export {
            save_figure(&figure, path)?;
            info!("figure written to {:?}", path);
        }

        if figure.is_empty() {
            println!("No runs loaded, nothing to plot.");
            return Ok(());
        }

        if self.config.show {
            self.show(&figure).await?;
        }

        Ok(())
    }

    /// Prompt for runs on stdin until one is invalid
    pub fn collect(&self) -> Result<Figure> {
        let loader = RunLoader::new(&self.config.runs_dir);
        let mut session = PlotSession::new(loader, self.config.axis);

        let added = session.collect(stdin().lock(), &mut stdout().lock())?;
        info!("collected {added} runs");

        Ok(session.into_figure())
    }

    async fn show(&mut self, figure: &Figure) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        let result = self.run_chart_loop(&mut terminal, figure).await;

        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_chart_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
        figure: &Figure,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        self.draw(terminal, figure)?;

        loop {
            tokio::select! {
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(terminal, figure, event)?,
                        Some(Err(err)) => return Err(err).context("Failed to read terminal event"),
                        None => self.should_quit = true,
                    }
                }

                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
        figure: &Figure,
        event: Event,
    ) -> Result<()> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if self.input_handler.handle_key_event(key) == KeyAction::Close {
                    self.should_quit = true;
                }
            }
            Event::Resize(_, _) => self.draw(terminal, figure)?,
            _ => {}
        }

        Ok(())
    }

    fn draw(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
        figure: &Figure,
    ) -> Result<()> {
        terminal
            .draw(|frame| self.renderer.render(frame, figure))
            .context("Failed to draw chart")?;
        Ok(())
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
