//! UI module root: lays out the dashboard and exposes per-panel drawing functions.

pub mod alerts;
pub mod chart;
pub mod header;
pub mod logs;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::dashboard::Dashboard;
use crate::types::Metric;

pub const LOG_PANEL_HEIGHT: u16 = 10;

/// Header, a 3x2 chart grid, then the log feed. The alert panel floats over everything.
pub fn draw_dashboard(f: &mut ratatui::Frame<'_>, d: &Dashboard, target: &str) {
    let area = f.area();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(8),
            Constraint::Length(LOG_PANEL_HEIGHT),
        ])
        .split(area);

    header::draw_header(f, rows[0], d, target);
    for (metric, cell) in Metric::ALL.iter().zip(chart_cells(rows[1])) {
        chart::draw_metric_chart(f, cell, *metric, &d.windows.points(*metric));
    }
    logs::draw_logs(f, rows[2], d);
    alerts::draw_alert_panel(f, area, d);
}

fn chart_cells(area: Rect) -> Vec<Rect> {
    let grid_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
        .split(area);
    grid_rows
        .iter()
        .flat_map(|row| {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Ratio(1, 3),
                    Constraint::Ratio(1, 3),
                    Constraint::Ratio(1, 3),
                ])
                .split(*row)
                .to_vec()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AlertEvent, MetricsSample, ServerEvent};
    use ratatui::{backend::TestBackend, Terminal};

    fn render(d: &Dashboard) -> String {
        let mut term = Terminal::new(TestBackend::new(150, 45)).unwrap();
        term.draw(|f| draw_dashboard(f, d, "ws://localhost:3002/ws"))
            .unwrap();
        term.backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    fn fed() -> Dashboard {
        let mut d = Dashboard::new();
        for i in 0..3 {
            d.apply(ServerEvent::Metrics(MetricsSample {
                cpu: 85.0,
                memory: 40.0 + i as f64,
                api_latency: 120.0,
                disk_usage: 30.0,
                network_usage: 20.0,
                temperature: 50.0,
            }));
            d.apply(ServerEvent::Log(format!("line-{i} - Metrics: {{}}\n")));
            d.apply(ServerEvent::Alert(AlertEvent {
                kind: Metric::Cpu,
                value: 85.0,
            }));
        }
        d
    }

    #[test]
    fn renders_every_chart_title_and_logs() {
        let mut d = fed();
        // keep the floating panel clear of the chart titles
        d.alert_panel.move_by(0, 20);
        let text = render(&d);
        for m in Metric::ALL {
            let title = format!("{} Usage", m.label());
            assert!(text.contains(&title), "missing {title}");
        }
        assert!(text.contains("line-2 - Metrics"));
        assert!(text.contains("cpu exceeded threshold: 85"));
    }

    #[test]
    fn closed_panel_is_not_drawn() {
        let mut d = fed();
        d.alert_panel.close();
        let text = render(&d);
        assert!(!text.contains("exceeded threshold"));
        assert!(text.contains("Cpu Usage"));
    }

    #[test]
    fn empty_dashboard_still_draws_frames() {
        let text = render(&Dashboard::new());
        assert!(text.contains("Temperature Usage"));
        assert!(text.contains("waiting for metrics"));
    }

    #[test]
    fn grid_has_six_cells() {
        assert_eq!(chart_cells(Rect::new(0, 0, 90, 20)).len(), 6);
    }
}
