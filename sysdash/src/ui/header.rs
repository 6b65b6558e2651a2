//! Top header with connection target, last update time and key help.

use ratatui::{
    layout::Rect,
    widgets::{Block, Borders},
};

use crate::dashboard::Dashboard;

pub fn draw_header(f: &mut ratatui::Frame<'_>, area: Rect, d: &Dashboard, target: &str) {
    let updated = d
        .last_update
        .map(|t| format!("last update {}", t.format("%H:%M:%S")))
        .unwrap_or_else(|| "waiting for metrics...".into());
    let title = format!(
        "System Monitoring Dashboard — {target} | {updated}  (q quit, c/a close/show alerts, hjkl move, ↑↓ logs)"
    );
    f.render_widget(Block::default().title(title).borders(Borders::BOTTOM), area);
}
