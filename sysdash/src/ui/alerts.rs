//! Floating alert panel: anchored top-right, shifted by the user's drag offset.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::dashboard::Dashboard;

const PANEL_WIDTH: u16 = 46;
const PANEL_MAX_HEIGHT: u16 = 14;
const ANCHOR_RIGHT: i32 = 2;
const ANCHOR_TOP: i32 = 1;

/// Where the panel lands inside `area`, or `None` when it is hidden.
pub fn alert_panel_rect(area: Rect, d: &Dashboard) -> Option<Rect> {
    if !d.alert_panel_shown() || area.width == 0 || area.height == 0 {
        return None;
    }
    let width = PANEL_WIDTH.min(area.width);
    // borders + hint line + one row per alert
    let want = d.alerts.len().saturating_add(3).min(PANEL_MAX_HEIGHT as usize) as u16;
    let height = want.min(area.height);

    let (dx, dy) = d.alert_panel.offset;
    let x = area.right() as i32 - width as i32 - ANCHOR_RIGHT + dx;
    let y = area.y as i32 + ANCHOR_TOP + dy;
    let x = x.clamp(area.x as i32, (area.right() - width) as i32) as u16;
    let y = y.clamp(area.y as i32, (area.bottom() - height) as i32) as u16;
    Some(Rect::new(x, y, width, height))
}

pub fn draw_alert_panel(f: &mut ratatui::Frame<'_>, area: Rect, d: &Dashboard) {
    let Some(rect) = alert_panel_rect(area, d) else {
        return;
    };
    let style = Style::default().fg(Color::White).bg(Color::Red);
    let inner_rows = rect.height.saturating_sub(2) as usize;

    let mut lines = vec![Line::from(Span::styled(
        "[c] close  [a] show  drag title to move",
        style.add_modifier(Modifier::DIM),
    ))];
    // newest alerts stay visible when the list overflows
    let room = inner_rows.saturating_sub(1);
    let skip = d.alerts.len().saturating_sub(room);
    lines.extend(d.alerts.iter().skip(skip).map(|a| {
        Line::from(Span::styled(
            format!("{} exceeded threshold: {}", a.kind.key(), a.value),
            style,
        ))
    }));

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Alerts ({})", d.alerts.len()))
        .style(style)
        .border_style(style.add_modifier(Modifier::BOLD));
    f.render_widget(Clear, rect);
    f.render_widget(Paragraph::new(lines).block(block), rect);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AlertEvent, Metric, ServerEvent};

    fn with_alerts(n: usize) -> Dashboard {
        let mut d = Dashboard::new();
        for i in 0..n {
            d.apply(ServerEvent::Alert(AlertEvent {
                kind: Metric::Temperature,
                value: 80.0 + i as f64,
            }));
        }
        d
    }

    #[test]
    fn hidden_without_alerts_or_when_closed() {
        let area = Rect::new(0, 0, 120, 40);
        assert!(alert_panel_rect(area, &Dashboard::new()).is_none());
        let mut d = with_alerts(1);
        d.alert_panel.close();
        assert!(alert_panel_rect(area, &d).is_none());
    }

    #[test]
    fn anchored_top_right() {
        let area = Rect::new(0, 0, 120, 40);
        let r = alert_panel_rect(area, &with_alerts(2)).unwrap();
        assert_eq!(r, Rect::new(120 - 46 - 2, 1, 46, 5));
    }

    #[test]
    fn offset_moves_and_clamps() {
        let area = Rect::new(0, 0, 120, 40);
        let mut d = with_alerts(30);
        d.alert_panel.move_by(-10, 5);
        let r = alert_panel_rect(area, &d).unwrap();
        assert_eq!((r.x, r.y, r.height), (62, 6, PANEL_MAX_HEIGHT));

        d.alert_panel.move_by(-1000, 1000);
        let r = alert_panel_rect(area, &d).unwrap();
        assert_eq!((r.x, r.y), (0, 40 - PANEL_MAX_HEIGHT));
    }
}
