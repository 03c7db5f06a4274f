//! Detail modal: centered overlay describing the selected user.
//!
//! Visible only while the store says so. Closing just emits an action; the
//! selection itself stays in the store.

use std::cell::Cell;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use roster_core::User;

use crate::action::Action;
use crate::component::Component;
use crate::theme;
use crate::widgets::{centered, hit};

const PANEL_WIDTH: u16 = 64;
const LABEL_WIDTH: usize = 14;

#[derive(Default)]
pub struct DetailModal {
    user: Option<User>,
    panel: Cell<Rect>,
}

impl DetailModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.user.is_some()
    }

    /// `(label, value)` rows shown for `user`.
    pub fn fields(user: &User) -> Vec<(&'static str, String)> {
        vec![
            ("Full Name", user.full_name()),
            ("Age", user.age.map(|a| a.to_string()).unwrap_or_default()),
            ("Gender", user.gender.clone().unwrap_or_default()),
            ("Address", user.address_line()),
            ("Height", user.height_label()),
            ("Weight", user.weight_label()),
            ("Phone Number", user.phone.clone().unwrap_or_default()),
            ("Email", user.email.clone().unwrap_or_default()),
            ("Image", user.image.clone().unwrap_or_default()),
        ]
    }
}

impl Component for DetailModal {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if !self.is_open() {
            return Ok(None);
        }
        Ok(match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => Some(Action::CloseModal),
            _ => None,
        })
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if !self.is_open() || mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(None);
        }
        if hit(self.panel.get(), mouse.column, mouse.row) {
            return Ok(None);
        }
        Ok(Some(Action::CloseModal))
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        if let Action::ViewUpdated(view) = action {
            self.user = view.modal_user().cloned();
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let Some(user) = &self.user else {
            return;
        };

        let fields = Self::fields(user);
        let height = u16::try_from(fields.len()).unwrap_or(u16::MAX) + 4;
        let panel = centered(area, PANEL_WIDTH, height);
        self.panel.set(panel);

        frame.render_widget(Clear, panel);
        frame.render_widget(
            Block::default().style(Style::default().bg(theme::BG_DARK)),
            panel,
        );

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(format!("User #{}", user.id), theme::title_style()),
                Span::raw(" "),
            ]))
            .title_alignment(Alignment::Center)
            .title_bottom(Line::from(Span::styled(" Esc close ", theme::key_hint())).centered())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_focused());

        let lines: Vec<Line> = fields
            .into_iter()
            .map(|(label, value)| {
                Line::from(vec![
                    Span::styled(format!(" {label:<LABEL_WIDTH$}"), theme::detail_label()),
                    Span::styled(value, theme::detail_value()),
                ])
            })
            .collect();

        let inner = block.inner(panel);
        frame.render_widget(block, panel);
        frame.render_widget(
            Paragraph::new(lines).wrap(Wrap { trim: false }),
            inner.inner(ratatui::layout::Margin::new(0, 1)),
        );
    }

    fn focused(&self) -> bool {
        self.is_open()
    }

    fn id(&self) -> &'static str {
        "detail"
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crossterm::event::KeyModifiers;
    use pretty_assertions::assert_eq;
    use ratatui::{Terminal, backend::TestBackend};
    use roster_core::{Address, ViewState};

    use super::*;

    fn emily() -> User {
        User {
            first_name: Some("Emily".into()),
            last_name: Some("Johnson".into()),
            age: Some(28),
            height: Some(193.24),
            weight: Some(63.16),
            email: Some("emily.johnson@x.dummyjson.com".into()),
            address: Some(Address {
                address: Some("626 Main Street".into()),
                city: Some("Phoenix".into()),
                state: Some("Mississippi".into()),
                country: Some("United States".into()),
            }),
            ..User::with_id(1)
        }
    }

    fn open(user: User) -> DetailModal {
        let mut modal = DetailModal::new();
        let view = ViewState {
            selected: Some(user),
            modal_visible: true,
            ..ViewState::default()
        };
        modal
            .update(&Action::ViewUpdated(Arc::new(view)))
            .expect("update");
        modal
    }

    fn screen(modal: &DetailModal) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).expect("terminal");
        terminal
            .draw(|frame| modal.render(frame, frame.area()))
            .expect("draw");
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn field_rows_format_values() {
        let fields = DetailModal::fields(&emily());
        assert_eq!(fields[0], ("Full Name", "Emily Johnson".to_owned()));
        assert_eq!(
            fields[3],
            (
                "Address",
                "626 Main Street, Phoenix, Mississippi, United States".to_owned()
            )
        );
        assert_eq!(fields[4], ("Height", "193.24 cm".to_owned()));
        assert_eq!(fields[5], ("Weight", "63.16 kg".to_owned()));
    }

    #[test]
    fn renders_when_visible() {
        let modal = open(emily());
        let text = screen(&modal);
        assert!(text.contains("User #1"), "{text}");
        assert!(text.contains("Emily Johnson"));
        assert!(text.contains("193.24 cm"));
    }

    #[test]
    fn hidden_after_close() {
        let mut modal = open(emily());
        let view = ViewState {
            selected: Some(emily()),
            modal_visible: false,
            ..ViewState::default()
        };
        modal
            .update(&Action::ViewUpdated(Arc::new(view)))
            .expect("update");
        assert!(!modal.is_open());
        assert!(!screen(&modal).contains("Emily"));
    }

    #[test]
    fn close_keys_and_outside_click() {
        let mut modal = open(emily());
        for code in [KeyCode::Esc, KeyCode::Enter, KeyCode::Char('q')] {
            let action = modal
                .handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
                .expect("key");
            assert!(matches!(action, Some(Action::CloseModal)));
        }

        screen(&modal);
        let panel = modal.panel.get();
        let inside = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: panel.x + 2,
            row: panel.y + 2,
            modifiers: KeyModifiers::NONE,
        };
        assert!(modal.handle_mouse_event(inside).expect("mouse").is_none());
        let outside = MouseEvent {
            column: 0,
            row: 0,
            ..inside
        };
        assert!(matches!(
            modal.handle_mouse_event(outside).expect("mouse"),
            Some(Action::CloseModal)
        ));
    }
}
