//! App state and main loop: input handling, draining pushed events, and drawing.

use std::{io, time::Duration};

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, MouseButton, MouseEvent,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures_util::{SinkExt, StreamExt};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use tokio::sync::mpsc::{self, error::TryRecvError, UnboundedReceiver};
use tokio::time::sleep;
use tokio_tungstenite::tungstenite::Message;

use crate::dashboard::Dashboard;
use crate::ui::{alerts::alert_panel_rect, draw_dashboard};
use crate::ws::{connect, forward_events};

const LOG_PAGE: usize = 8;

/// Mouse drag in progress on the alert panel's title row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelDrag {
    pub last: (u16, u16),
}

pub struct App {
    pub dashboard: Dashboard,
    pub drag: Option<PanelDrag>,
    target: String,
    disconnected: bool,
    should_quit: bool,
}

impl App {
    pub fn new(target: &str) -> Self {
        Self {
            dashboard: Dashboard::new(),
            drag: None,
            target: target.to_string(),
            disconnected: false,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub async fn run(&mut self, url: &str) -> Result<(), Box<dyn std::error::Error>> {
        // One connection for the life of the dashboard
        let ws = connect(url).await?;
        let (mut sink, stream) = ws.split();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let reader = tokio::spawn(forward_events(stream, tx));

        // Terminal setup
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        let res = self.event_loop(&mut terminal, &mut rx).await;

        // Tear down the channel before the terminal
        let _ = sink.send(Message::Close(None)).await;
        reader.abort();

        disable_raw_mode()?;
        let backend = terminal.backend_mut();
        execute!(backend, DisableMouseCapture, LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        res
    }

    async fn event_loop<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        rx: &mut UnboundedReceiver<crate::types::ServerEvent>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        loop {
            // Input (non-blocking)
            while event::poll(Duration::from_millis(10))? {
                match event::read()? {
                    Event::Key(k) => self.handle_key(k.code),
                    Event::Mouse(m) => {
                        let sz = terminal.size()?;
                        self.handle_mouse(m, Rect::new(0, 0, sz.width, sz.height));
                    }
                    _ => {}
                }
            }
            if self.should_quit {
                break;
            }

            self.drain(rx);

            let target = if self.disconnected {
                format!("{} (disconnected)", self.target)
            } else {
                self.target.clone()
            };
            terminal.draw(|f| draw_dashboard(f, &self.dashboard, &target))?;

            sleep(Duration::from_millis(100)).await;
        }
        Ok(())
    }

    /// Apply every event received so far, in arrival order.
    pub fn drain(&mut self, rx: &mut UnboundedReceiver<crate::types::ServerEvent>) {
        loop {
            match rx.try_recv() {
                Ok(ev) => self.dashboard.apply(ev),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    self.disconnected = true;
                    break;
                }
            }
        }
    }

    pub fn handle_key(&mut self, code: KeyCode) {
        let d = &mut self.dashboard;
        match code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') => d.alert_panel.close(),
            KeyCode::Char('a') => d.alert_panel.show(),
            KeyCode::Char('h') => d.alert_panel.move_by(-2, 0),
            KeyCode::Char('l') => d.alert_panel.move_by(2, 0),
            KeyCode::Char('k') => d.alert_panel.move_by(0, -1),
            KeyCode::Char('j') => d.alert_panel.move_by(0, 1),
            KeyCode::Up => d.scroll_logs_up(1),
            KeyCode::Down => d.scroll_logs_down(1),
            KeyCode::PageUp => d.scroll_logs_up(LOG_PAGE),
            KeyCode::PageDown => d.scroll_logs_down(LOG_PAGE),
            KeyCode::End => d.follow_logs(),
            _ => {}
        }
    }

    /// Left-drag on the panel's top border row moves it.
    pub fn handle_mouse(&mut self, m: MouseEvent, area: Rect) {
        match m.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let on_handle = alert_panel_rect(area, &self.dashboard).is_some_and(|r| {
                    m.row == r.y && m.column >= r.x && m.column < r.x + r.width
                });
                self.drag = on_handle.then_some(PanelDrag {
                    last: (m.column, m.row),
                });
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if let Some(drag) = self.drag.as_mut() {
                    let dx = m.column as i32 - drag.last.0 as i32;
                    let dy = m.row as i32 - drag.last.1 as i32;
                    self.dashboard.alert_panel.move_by(dx, dy);
                    drag.last = (m.column, m.row);
                }
            }
            MouseEventKind::Up(MouseButton::Left) => self.drag = None,
            MouseEventKind::ScrollUp => self.dashboard.scroll_logs_up(1),
            MouseEventKind::ScrollDown => self.dashboard.scroll_logs_down(1),
            _ => {}
        }
    }
}
