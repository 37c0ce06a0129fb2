use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use ratatui_textarea::{CursorMove, TextArea};

use crate::core::validator::{Candidate, Field, FieldErrors};
use crate::core::wizard::{CompletionPayload, Step, Wizard, WizardError};

use super::super::theme;

/// Outcome of feeding an input event to the registration view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationResult {
    /// Input was consumed; nothing for the app to do.
    Consumed,
    /// The wizard completed; the app should notify the user.
    Completed(CompletionPayload),
}

/// The two-step registration form: Details (name + email inputs with
/// field-level errors) and Summary (read-only review with confirm/back).
pub struct RegistrationViewState {
    wizard: Wizard,

    // Details step inputs
    name_input: TextArea<'static>,
    email_input: TextArea<'static>,
    focus_index: usize, // 0 = Name, 1 = Email

    /// Errors from the last rejected submit, shown under the form.
    errors: Option<FieldErrors>,
}

impl RegistrationViewState {
    pub fn new() -> Self {
        let mut state = Self {
            wizard: Wizard::new(),
            name_input: TextArea::default(),
            email_input: TextArea::default(),
            focus_index: 0,
            errors: None,
        };
        state.name_input.set_placeholder_text("Enter your full name");
        state.email_input.set_placeholder_text("Enter your email address");
        state.update_focus_styles();
        state
    }

    pub fn step(&self) -> Step {
        self.wizard.step()
    }

    pub fn wizard(&self) -> &Wizard {
        &self.wizard
    }

    pub fn field_errors(&self) -> Option<&FieldErrors> {
        self.errors.as_ref()
    }

    // ── Input handling ──────────────────────────────────────────────────

    pub fn handle_input(&mut self, event: &Event) -> Option<RegistrationResult> {
        let key = match event {
            Event::Key(k) if k.kind == KeyEventKind::Press => *k,
            _ => return None,
        };

        match self.wizard.step() {
            Step::Details => self.handle_details_input(key, event),
            Step::Summary => self.handle_summary_input(key),
        }
    }

    fn handle_details_input(&mut self, key: KeyEvent, event: &Event) -> Option<RegistrationResult> {
        // Field cycling; with two fields, forward and backward coincide
        if matches!(
            key.code,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Down | KeyCode::Up
        ) {
            self.focus_index = (self.focus_index + 1) % 2;
            self.update_focus_styles();
            return Some(RegistrationResult::Consumed);
        }

        // Ctrl+Enter submits from either field
        if key.modifiers == KeyModifiers::CONTROL && key.code == KeyCode::Enter {
            self.submit_details();
            return Some(RegistrationResult::Consumed);
        }

        if key.code == KeyCode::Enter {
            if self.focus_index == 0 {
                // Name field: advance to email
                self.focus_index = 1;
                self.update_focus_styles();
            } else {
                self.submit_details();
            }
            return Some(RegistrationResult::Consumed);
        }

        // Everything else edits the focused field
        let input = if self.focus_index == 0 {
            &mut self.name_input
        } else {
            &mut self.email_input
        };
        input.input(event.clone());
        Some(RegistrationResult::Consumed)
    }

    fn handle_summary_input(&mut self, key: KeyEvent) -> Option<RegistrationResult> {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                match self.wizard.confirm() {
                    Ok(payload) => {
                        self.reset_inputs();
                        Some(RegistrationResult::Completed(payload))
                    }
                    Err(e) => {
                        // Wrong-step confirm is a wiring defect, not user error
                        log::error!("confirm failed: {e}");
                        Some(RegistrationResult::Consumed)
                    }
                }
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                if let Err(e) = self.wizard.go_back() {
                    log::error!("go_back failed: {e}");
                } else {
                    self.prefill_from_pending();
                }
                Some(RegistrationResult::Consumed)
            }
            _ => Some(RegistrationResult::Consumed),
        }
    }

    // ── Wizard wiring ───────────────────────────────────────────────────

    fn submit_details(&mut self) {
        let candidate = Candidate::new(
            self.name_input.lines().join(" "),
            self.email_input.lines().join(" "),
        );

        match self.wizard.submit_details(&candidate) {
            Ok(()) => {
                self.errors = None;
            }
            Err(WizardError::Validation(errors)) => {
                self.errors = Some(errors);
            }
            Err(e) => {
                log::error!("submit_details failed: {e}");
            }
        }
    }

    /// Re-seed the input fields from the retained record after Back.
    fn prefill_from_pending(&mut self) {
        if let Some(record) = self.wizard.pending_record() {
            self.name_input = TextArea::new(vec![record.name().to_string()]);
            self.email_input = TextArea::new(vec![record.email().to_string()]);
        }
        self.name_input.move_cursor(CursorMove::End);
        self.email_input.move_cursor(CursorMove::End);
        self.name_input.set_placeholder_text("Enter your full name");
        self.email_input.set_placeholder_text("Enter your email address");
        self.errors = None;
        self.focus_index = 0;
        self.update_focus_styles();
    }

    fn reset_inputs(&mut self) {
        self.name_input = TextArea::default();
        self.email_input = TextArea::default();
        self.name_input.set_placeholder_text("Enter your full name");
        self.email_input.set_placeholder_text("Enter your email address");
        self.errors = None;
        self.focus_index = 0;
        self.update_focus_styles();
    }

    fn update_focus_styles(&mut self) {
        self.name_input
            .set_block(field_block(Field::Name.label(), self.focus_index == 0));
        self.email_input
            .set_block(field_block(Field::Email.label(), self.focus_index == 1));
    }

    // ── Rendering ───────────────────────────────────────────────────────

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" Student Registration ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::TEXT_MUTED));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::vertical([
            Constraint::Length(1), // Step indicator
            Constraint::Length(1),
            Constraint::Min(5), // Step content
        ])
        .split(inner);

        self.render_step_indicator(frame, chunks[0]);

        match self.wizard.step() {
            Step::Details => self.render_details(frame, chunks[2]),
            Step::Summary => self.render_summary(frame, chunks[2]),
        }
    }

    fn render_step_indicator(&self, frame: &mut Frame, area: Rect) {
        let step = self.wizard.step();
        let details_marker = match step {
            Step::Details => Span::styled(" (1) Details ", theme::title()),
            Step::Summary => Span::styled(" (✓) Details ", Style::default().fg(theme::SUCCESS)),
        };
        let summary_marker = match step {
            Step::Details => Span::styled(" (2) Summary ", theme::muted()),
            Step::Summary => Span::styled(" (2) Summary ", theme::title()),
        };

        let line = Line::from(vec![
            details_marker,
            Span::styled("──────", theme::key_hint()),
            summary_marker,
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_details(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::vertical([
            Constraint::Length(3), // Name
            Constraint::Length(1), // Name error
            Constraint::Length(3), // Email
            Constraint::Length(1), // Email error
            Constraint::Min(0),
            Constraint::Length(1), // Help
        ])
        .split(area);

        frame.render_widget(&self.name_input, chunks[0]);
        self.render_field_error(frame, chunks[1], Field::Name);
        frame.render_widget(&self.email_input, chunks[2]);
        self.render_field_error(frame, chunks[3], Field::Email);

        let help = Paragraph::new(Line::from(vec![
            Span::styled("  Tab", theme::key_hint()),
            Span::raw(":next field  "),
            Span::styled("Enter", theme::key_hint()),
            Span::raw(":next  "),
            Span::styled("Ctrl+Enter", theme::key_hint()),
            Span::raw(":submit"),
        ]));
        frame.render_widget(help, chunks[5]);
    }

    fn render_field_error(&self, frame: &mut Frame, area: Rect, field: Field) {
        let Some(message) = self.errors.as_ref().and_then(|e| e.message(field)) else {
            return;
        };
        let line = Line::from(vec![
            Span::raw("  "),
            Span::styled(message, theme::field_error()),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_summary(&self, frame: &mut Frame, area: Rect) {
        let Some(record) = self.wizard.pending_record() else {
            // Unreachable via the wizard invariants; render nothing rather than panic
            return;
        };

        let lines = vec![
            Line::raw(""),
            Line::from(Span::styled("  Review your information", theme::heading())),
            Line::raw(""),
            Line::from(vec![
                Span::styled(format!("  {:<16}", Field::Name.label()), theme::muted()),
                Span::styled(
                    record.name().to_string(),
                    Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled(format!("  {:<16}", Field::Email.label()), theme::muted()),
                Span::styled(
                    record.email().to_string(),
                    Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::raw(""),
            Line::from(vec![
                Span::styled("  y/Enter", Style::default().fg(theme::SUCCESS)),
                Span::raw(" to submit, "),
                Span::styled("n/Esc", Style::default().fg(theme::ERROR)),
                Span::raw(" to go back."),
            ]),
        ];

        frame.render_widget(Paragraph::new(lines), area);
    }
}

impl Default for RegistrationViewState {
    fn default() -> Self {
        Self::new()
    }
}

fn field_block(title: &str, focused: bool) -> Block<'static> {
    if focused {
        theme::block_focused(title)
    } else {
        theme::block_default(title)
    }
}
