use std::io;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame, Terminal,
};
use tokio::sync::mpsc;

use super::events::{AppEvent, Notification, NotificationLevel};
use super::theme;
use super::views::registration::{RegistrationResult, RegistrationViewState};

/// Central application state (Elm architecture).
pub struct AppState {
    /// Whether the app is still running.
    pub running: bool,
    /// The registration wizard view.
    pub registration: RegistrationViewState,
    /// Active notifications (max 3 visible).
    pub notifications: Vec<Notification>,
    /// Monotonic counter for notification IDs.
    notification_counter: u64,
    /// Whether the help modal is open.
    pub show_help: bool,
    /// Receiver for app events.
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
    /// Sender for pushing events from within the app.
    #[allow(dead_code)]
    event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl AppState {
    pub fn new(
        event_rx: mpsc::UnboundedReceiver<AppEvent>,
        event_tx: mpsc::UnboundedSender<AppEvent>,
    ) -> Self {
        Self {
            running: true,
            registration: RegistrationViewState::new(),
            notifications: Vec::new(),
            notification_counter: 0,
            show_help: false,
            event_rx,
            event_tx,
        }
    }

    // ── Elm event loop ──────────────────────────────────────────────────

    /// Main event loop: render → select → update → loop.
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        tick_rate: Duration,
    ) -> io::Result<()> {
        let mut tick_interval = tokio::time::interval(tick_rate);
        let mut event_stream = EventStream::new();

        while self.running {
            // Render
            terminal.draw(|frame| self.render(frame))?;

            // Select next event
            tokio::select! {
                _ = tick_interval.tick() => {
                    self.on_tick();
                }
                Some(event) = self.event_rx.recv() => {
                    self.handle_event(event);
                }
                Some(Ok(crossterm_event)) = event_stream.next() => {
                    self.handle_event(AppEvent::Input(crossterm_event));
                }
            }
        }

        Ok(())
    }

    // ── Event handling ──────────────────────────────────────────────────

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Input(crossterm_event) => {
                // Priority 1: Help modal consumes all input when open
                if self.show_help {
                    if is_key_press(&crossterm_event, KeyCode::Esc)
                        || is_key_press(&crossterm_event, KeyCode::F(1))
                    {
                        self.show_help = false;
                    }
                    return;
                }

                // Priority 2: Global keybindings (modifier-based, so they
                // never collide with form typing)
                if let Some(handled) = self.handle_global_input(&crossterm_event) {
                    if handled {
                        return;
                    }
                }

                // Priority 3: The registration view
                if let Some(RegistrationResult::Completed(payload)) =
                    self.registration.handle_input(&crossterm_event)
                {
                    self.push_notification(
                        format!(
                            "Registration successful! Welcome, {}! Check {} for confirmation.",
                            payload.name, payload.email
                        ),
                        NotificationLevel::Success,
                    );
                }
            }
            AppEvent::Notification(notification) => {
                self.push_notification(notification.message, notification.level);
            }
            AppEvent::Tick => self.on_tick(),
            AppEvent::Quit => {
                self.running = false;
            }
        }
    }

    /// Handle global keys. `Some(true)` means consumed.
    fn handle_global_input(&mut self, event: &Event) -> Option<bool> {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return None;
        };

        match (*modifiers, *code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c'))
            | (KeyModifiers::CONTROL, KeyCode::Char('q')) => {
                self.running = false;
                Some(true)
            }
            (KeyModifiers::NONE, KeyCode::F(1)) => {
                self.show_help = true;
                Some(true)
            }
            _ => Some(false),
        }
    }

    // ── Notifications ───────────────────────────────────────────────────

    /// Push a notification (dedup by message, max 3).
    pub fn push_notification(&mut self, message: String, level: NotificationLevel) {
        if self.notifications.iter().any(|n| n.message == message) {
            return;
        }

        self.notification_counter += 1;
        self.notifications.push(Notification {
            id: self.notification_counter,
            message,
            level,
            ttl_ticks: 100,
        });

        while self.notifications.len() > 3 {
            self.notifications.remove(0);
        }
    }

    /// Tick: decrement notification TTLs, dismiss expired.
    fn on_tick(&mut self) {
        for n in &mut self.notifications {
            n.ttl_ticks = n.ttl_ticks.saturating_sub(1);
        }
        self.notifications.retain(|n| n.ttl_ticks > 0);
    }

    // ── Rendering ───────────────────────────────────────────────────────

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::vertical([Constraint::Min(10), Constraint::Length(1)]).split(area);

        self.registration.render(frame, chunks[0]);
        self.render_status_bar(frame, chunks[1]);

        // Overlays
        self.render_notifications(frame, area);

        if self.show_help {
            self.render_help_modal(frame, area);
        }
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let status = Line::from(vec![
            Span::styled(" ENROLL ", theme::brand_badge()),
            Span::raw(" "),
            Span::styled(
                self.registration.step().label(),
                Style::default()
                    .fg(theme::PRIMARY_LIGHT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" │ "),
            Span::styled("F1", theme::key_hint()),
            Span::raw(":help "),
            Span::styled("Ctrl+Q", theme::key_hint()),
            Span::raw(":quit"),
        ]);

        frame.render_widget(Paragraph::new(status), area);
    }

    fn render_notifications(&self, frame: &mut Frame, area: Rect) {
        if self.notifications.is_empty() {
            return;
        }

        let max_width = 60.min(area.width.saturating_sub(2));
        let height = self.notifications.len() as u16;
        let x = area.width.saturating_sub(max_width + 1);
        let y = 1;

        let notification_area = Rect::new(x, y, max_width, height);

        let lines: Vec<Line> = self
            .notifications
            .iter()
            .map(|n| {
                let (prefix, color) = match n.level {
                    NotificationLevel::Info => ("ℹ", theme::INFO),
                    NotificationLevel::Success => ("✓", theme::SUCCESS),
                    NotificationLevel::Warning => ("⚠", theme::WARNING),
                    NotificationLevel::Error => ("✗", theme::ERROR),
                };
                Line::from(vec![
                    Span::styled(
                        format!(" {prefix} "),
                        Style::default().fg(color).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(&n.message),
                ])
            })
            .collect();

        frame.render_widget(Clear, notification_area);
        frame.render_widget(Paragraph::new(lines), notification_area);
    }

    fn render_help_modal(&self, frame: &mut Frame, area: Rect) {
        let modal = centered_rect(50, 60, area);

        let keybindings = [
            ("Details step:", ""),
            ("Tab / Shift+Tab", "Switch between fields"),
            ("Enter", "Next field / submit"),
            ("Ctrl+Enter", "Submit from any field"),
            ("", ""),
            ("Summary step:", ""),
            ("y / Enter", "Confirm registration"),
            ("n / Esc", "Back to the form"),
            ("", ""),
            ("Global:", ""),
            ("F1", "Toggle this help"),
            ("Ctrl+Q / Ctrl+C", "Quit"),
        ];

        let mut lines = vec![Line::raw("")];
        for (key, desc) in &keybindings {
            if key.is_empty() {
                lines.push(Line::raw(""));
            } else if desc.is_empty() {
                lines.push(Line::from(Span::styled(
                    format!("  {key}"),
                    Style::default()
                        .fg(theme::ACCENT)
                        .add_modifier(Modifier::BOLD),
                )));
            } else {
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(
                        format!("{:<18}", key),
                        Style::default()
                            .fg(theme::PRIMARY_LIGHT)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(*desc),
                ]));
            }
        }

        let block = Block::default()
            .title(" Help ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT));

        frame.render_widget(Clear, modal);
        frame.render_widget(Paragraph::new(lines).block(block), modal);
    }
}

/// Calculate a centered rect using percentage of parent area.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(area);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}

fn is_key_press(event: &Event, code: KeyCode) -> bool {
    matches!(
        event,
        Event::Key(KeyEvent { code: c, kind: KeyEventKind::Press, .. }) if *c == code
    )
}
