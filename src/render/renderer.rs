use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Axis, Block, BorderType, Borders, Chart, Dataset, GraphType, LegendPosition, Paragraph,
    },
};

use crate::plot::Figure;

/// Line colors, cycled when there are more runs than colors
const PALETTE: [Color; 6] = [
    Color::Cyan,
    Color::Yellow,
    Color::Green,
    Color::Magenta,
    Color::Red,
    Color::Blue,
];

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, figure: &Figure) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Chart
                Constraint::Length(1), // Footer
            ])
            .split(frame.area());

        self.render_chart(frame, chunks[0], figure);

        let controls = self.render_controls(chunks[1]);
        frame.render_widget(controls, chunks[1]);
    }

    fn render_chart(&self, frame: &mut Frame, area: Rect, figure: &Figure) {
        let ([x_min, x_max], [y_min, y_max]) = figure.bounds();

        let datasets: Vec<Dataset> = figure
            .series
            .iter()
            .enumerate()
            .map(|(i, series)| {
                Dataset::default()
                    .name(series.label.clone())
                    .marker(Marker::Braille)
                    .graph_type(GraphType::Line)
                    .style(Style::default().fg(PALETTE[i % PALETTE.len()]))
                    .data(&series.points)
            })
            .collect();

        let x_axis = Axis::default()
            .title(Span::styled(
                figure.x_label.clone(),
                Style::default().fg(Color::Yellow),
            ))
            .style(Style::default().fg(Color::Gray))
            .bounds([x_min, x_max])
            .labels(axis_labels(x_min, x_max));

        let y_axis = Axis::default()
            .title(Span::styled(
                figure.y_label.clone(),
                Style::default().fg(Color::Yellow),
            ))
            .style(Style::default().fg(Color::Gray))
            .bounds([y_min, y_max])
            .labels(axis_labels(y_min, y_max));

        let chart = Chart::new(datasets)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(Span::styled(
                        " Training Runs ",
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
            )
            .x_axis(x_axis)
            .y_axis(y_axis)
            .legend_position(Some(LegendPosition::TopLeft))
            .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)));

        frame.render_widget(chart, area);
    }

    fn render_controls(&self, _area: Rect) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" or "),
            Span::styled("Esc", Style::default().fg(Color::Red)),
            Span::raw(" to close"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Min, middle and max tick labels for an axis
fn axis_labels(min: f64, max: f64) -> Vec<Span<'static>> {
    [min, (min + max) / 2.0, max]
        .into_iter()
        .map(|value| Span::raw(format_tick(value)))
        .collect()
}

fn format_tick(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude >= 1e6 {
        format!("{:.1}M", value / 1e6)
    } else if magnitude >= 1e4 {
        format!("{:.0}k", value / 1e3)
    } else if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}
