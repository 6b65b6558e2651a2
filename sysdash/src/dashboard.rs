//! Dashboard state fed by server events: rolling windows, alert list, log feed.

use chrono::{DateTime, Local};

use crate::history::MetricWindows;
use crate::types::{AlertEvent, ServerEvent};

/// Floating alert panel. Offset is relative to its top-right anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertPanel {
    pub visible: bool,
    pub offset: (i32, i32),
}

impl Default for AlertPanel {
    fn default() -> Self {
        Self {
            visible: true,
            offset: (0, 0),
        }
    }
}

impl AlertPanel {
    pub fn close(&mut self) {
        self.visible = false;
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn move_by(&mut self, dx: i32, dy: i32) {
        self.offset.0 = self.offset.0.saturating_add(dx);
        self.offset.1 = self.offset.1.saturating_add(dy);
    }
}

#[derive(Default)]
pub struct Dashboard {
    pub windows: MetricWindows,
    // Both lists only grow for the life of the session.
    pub alerts: Vec<AlertEvent>,
    pub logs: Vec<String>,
    pub alert_panel: AlertPanel,
    // Lines scrolled back from the newest log entry; 0 follows the tail.
    pub log_scroll: usize,
    pub last_update: Option<DateTime<Local>>,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, ev: ServerEvent) {
        match ev {
            ServerEvent::Metrics(s) => {
                self.windows.push_sample(&s);
                self.last_update = Some(Local::now());
            }
            ServerEvent::Alert(a) => self.alerts.push(a),
            ServerEvent::Log(line) => {
                self.logs.push(line);
                // keep the same lines on screen while scrolled back
                if self.log_scroll > 0 {
                    self.log_scroll += 1;
                }
            }
        }
    }

    pub fn alert_panel_shown(&self) -> bool {
        self.alert_panel.visible && !self.alerts.is_empty()
    }

    pub fn scroll_logs_up(&mut self, n: usize) {
        let max = self.logs.len().saturating_sub(1);
        self.log_scroll = self.log_scroll.saturating_add(n).min(max);
    }

    pub fn scroll_logs_down(&mut self, n: usize) {
        self.log_scroll = self.log_scroll.saturating_sub(n);
    }

    pub fn follow_logs(&mut self) {
        self.log_scroll = 0;
    }
}
