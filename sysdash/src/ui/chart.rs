//! One line chart per metric: x = position in the rolling window, y from zero.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols::Marker,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
};

use crate::types::Metric;

pub const CHART_COLOR: Color = Color::Rgb(75, 192, 192);

pub fn draw_metric_chart(
    f: &mut ratatui::Frame<'_>,
    area: Rect,
    metric: Metric,
    points: &[(f64, f64)],
) {
    let label = metric.label();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("{label} Usage"));
    if points.is_empty() {
        f.render_widget(block, area);
        return;
    }

    let x_max = (points.len() as f64).max(2.0);
    let y_max = y_ceiling(points);
    let dataset = Dataset::default()
        .name(label)
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(CHART_COLOR))
        .data(points);

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .bounds([1.0, x_max])
                .labels(vec![Span::raw("1"), Span::raw(format!("{}", points.len()))]),
        )
        .y_axis(Axis::default().bounds([0.0, y_max]).labels(vec![
            Span::raw("0"),
            Span::raw(format!("{:.0}", y_max / 2.0)),
            Span::raw(format!("{y_max:.0}")),
        ]));
    f.render_widget(chart, area);
}

// Headroom above the largest point, never below 1.
pub(crate) fn y_ceiling(points: &[(f64, f64)]) -> f64 {
    let max = points.iter().map(|p| p.1).fold(0.0_f64, f64::max);
    (max * 1.1).max(1.0).ceil()
}
