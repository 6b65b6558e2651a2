//! Scrolling log feed.

use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::dashboard::Dashboard;

/// Indices `[start, end)` of the log lines that fit in `rows`.
pub fn visible_range(total: usize, scroll: usize, rows: usize) -> (usize, usize) {
    let end = total.saturating_sub(scroll);
    (end.saturating_sub(rows), end)
}

pub fn draw_logs(f: &mut ratatui::Frame<'_>, area: Rect, d: &Dashboard) {
    let title = if d.log_scroll > 0 {
        format!("Logs ({} lines, scrolled back {}; End to follow)", d.logs.len(), d.log_scroll)
    } else {
        format!("Logs ({} lines)", d.logs.len())
    };
    let rows = area.height.saturating_sub(2) as usize;
    let (start, end) = visible_range(d.logs.len(), d.log_scroll, rows);
    let lines: Vec<Line> = d.logs[start..end]
        .iter()
        .map(|l| Line::raw(l.trim_end()))
        .collect();
    let p = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(p, area);
}

#[cfg(test)]
mod tests {
    use super::visible_range;

    #[test]
    fn tail_when_following() {
        assert_eq!(visible_range(20, 0, 5), (15, 20));
        assert_eq!(visible_range(3, 0, 5), (0, 3));
    }

    #[test]
    fn scrolled_back() {
        assert_eq!(visible_range(20, 4, 5), (11, 16));
        assert_eq!(visible_range(20, 30, 5), (0, 0));
    }
}
