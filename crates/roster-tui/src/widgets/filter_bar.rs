//! Filter control: field selector plus free-text value.
//!
//! Mirrors the store's `FilterSpec`. Every edit is emitted as a partial
//! patch; the text is sent to the API as typed (URL-encoded by the client).

use std::cell::Cell;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use roster_core::{ColumnKey, FilterPatch};

use crate::action::Action;
use crate::component::Component;
use crate::theme;
use crate::widgets::hit;

const PREFIX: &str = " Filter ";

#[derive(Default)]
pub struct FilterBar {
    field: ColumnKey,
    text: String,
    editing: bool,
    field_rect: Cell<Rect>,
    text_rect: Cell<Rect>,
}

impl FilterBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self) -> ColumnKey {
        self.field
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    fn start_editing(&mut self) -> Option<Action> {
        self.editing = true;
        Some(Action::FilterEditing(true))
    }

    fn stop_editing(&mut self) -> Option<Action> {
        self.editing = false;
        Some(Action::FilterEditing(false))
    }

    fn select_field(&mut self, field: ColumnKey) -> Option<Action> {
        self.field = field;
        Some(Action::PatchFilter(FilterPatch::field(field)))
    }

    fn set_text(&mut self, text: String) -> Option<Action> {
        if text == self.text {
            return None;
        }
        self.text.clone_from(&text);
        Some(Action::PatchFilter(FilterPatch::text(text)))
    }

    fn handle_editing_key(&mut self, key: KeyEvent) -> Option<Action> {
        match (key.modifiers, key.code) {
            (_, KeyCode::Enter | KeyCode::Esc) => self.stop_editing(),
            (_, KeyCode::Tab) => self.select_field(self.field.next()),
            (_, KeyCode::BackTab) => self.select_field(self.field.prev()),
            (KeyModifiers::CONTROL, KeyCode::Char('u')) => self.set_text(String::new()),
            (_, KeyCode::Backspace) => {
                let mut text = self.text.clone();
                text.pop();
                self.set_text(text)
            }
            (m, KeyCode::Char(c)) if !m.contains(KeyModifiers::CONTROL) => {
                let mut text = self.text.clone();
                text.push(c);
                self.set_text(text)
            }
            _ => None,
        }
    }
}

impl Component for FilterBar {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if self.editing {
            return Ok(self.handle_editing_key(key));
        }
        Ok(match key.code {
            KeyCode::Char('f' | '/') => self.start_editing(),
            _ => None,
        })
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(None);
        }
        if hit(self.field_rect.get(), mouse.column, mouse.row) {
            return Ok(self.select_field(self.field.next()));
        }
        if hit(self.text_rect.get(), mouse.column, mouse.row) && !self.editing {
            return Ok(self.start_editing());
        }
        Ok(None)
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        if let Action::ViewUpdated(view) = action {
            self.field = view.filter.field;
            self.text.clone_from(&view.filter.text);
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        if area.height == 0 {
            return;
        }

        let selector = format!("[{} ▾]", self.field.label());
        let selector_style = if self.editing {
            Style::default()
                .fg(theme::WARN_AMBER)
                .add_modifier(Modifier::BOLD)
        } else {
            theme::title_style()
        };

        let mut text_spans = vec![Span::styled(self.text.clone(), theme::table_row())];
        if self.editing {
            text_spans.push(Span::styled("▏", Style::default().fg(theme::WARN_AMBER)));
        } else if self.text.is_empty() {
            text_spans = vec![Span::styled("press f to filter", theme::key_hint())];
        }

        let prefix = Span::styled(PREFIX, theme::key_hint());
        let selector = Span::styled(selector, selector_style);
        let prefix_w = u16::try_from(prefix.width()).unwrap_or(u16::MAX);
        let selector_w = u16::try_from(selector.width()).unwrap_or(u16::MAX);

        let field_rect =
            Rect::new(area.x.saturating_add(prefix_w), area.y, selector_w, 1).intersection(area);
        let text_x = field_rect.right().saturating_add(1);
        let text_rect = Rect::new(
            text_x,
            area.y,
            area.right().saturating_sub(text_x),
            1,
        )
        .intersection(area);

        let mut spans = vec![prefix, selector, Span::raw(" ")];
        spans.extend(text_spans);
        frame.render_widget(Paragraph::new(Line::from(spans)), area);

        self.field_rect.set(field_rect);
        self.text_rect.set(text_rect);
    }

    fn focused(&self) -> bool {
        self.editing
    }

    fn set_focused(&mut self, focused: bool) {
        self.editing = focused;
    }

    fn id(&self) -> &'static str {
        "filter"
    }
}
