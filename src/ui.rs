pub mod charting;

use std::io;

use ratatui::{
    backend::CrosstermBackend,
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Widget},
    Terminal, TerminalOptions, Viewport,
};

use crate::trial::TrialRecord;
use charting::{compute_chart_params, format_label, trial_axis_labels, ChartSeries};

pub const CHART_HEIGHT: u16 = 18;

pub const CHART_TITLE: &str = "Typing Performance: Time per Trial";

/// Elapsed time per trial: a connecting line plus points colored by correctness
pub struct TrialChart<'a> {
    trials: &'a [TrialRecord],
}

impl<'a> TrialChart<'a> {
    pub fn new(trials: &'a [TrialRecord]) -> Self {
        Self { trials }
    }
}

impl Widget for TrialChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bold_style = Style::default().add_modifier(Modifier::BOLD);

        let series = ChartSeries::from_trials(self.trials);
        let (last_trial, highest_time) = compute_chart_params(&series.all);

        let datasets = vec![
            Dataset::default()
                .marker(Marker::Braille)
                .style(Style::default().fg(Color::Blue))
                .graph_type(GraphType::Line)
                .data(&series.all),
            Dataset::default()
                .name("correct")
                .marker(Marker::Dot)
                .style(Style::default().fg(Color::Green))
                .graph_type(GraphType::Scatter)
                .data(&series.correct),
            Dataset::default()
                .name("incorrect")
                .marker(Marker::Dot)
                .style(Style::default().fg(Color::Red))
                .graph_type(GraphType::Scatter)
                .data(&series.incorrect),
        ];

        let chart = Chart::new(datasets)
            .block(Block::default().borders(Borders::ALL).title(CHART_TITLE))
            .x_axis(
                Axis::default()
                    .title("Trial Number")
                    .bounds([1.0, last_trial])
                    .labels(
                        trial_axis_labels(last_trial)
                            .into_iter()
                            .map(|l| Span::styled(l, bold_style))
                            .collect::<Vec<_>>(),
                    ),
            )
            .y_axis(
                Axis::default()
                    .title("Time Taken (seconds)")
                    .bounds([0.0, highest_time])
                    .labels(vec![
                        Span::styled("0", bold_style),
                        Span::styled(format_label(highest_time), bold_style),
                    ]),
            );

        chart.render(area, buf);
    }
}

/// Draw the chart inline below the current cursor position
pub fn render_inline(trials: &[TrialRecord]) -> io::Result<()> {
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::with_options(
        backend,
        TerminalOptions {
            viewport: Viewport::Inline(CHART_HEIGHT),
        },
    )?;

    let mut drawn = Rect::default();
    terminal.draw(|f| {
        drawn = f.area();
        f.render_widget(TrialChart::new(trials), f.area());
    })?;

    terminal.set_cursor_position((0, drawn.bottom().saturating_sub(1)))?;
    terminal.show_cursor()?;
    println!();

    Ok(())
}
