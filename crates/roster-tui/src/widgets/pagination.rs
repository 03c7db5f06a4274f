//! Pagination control: `◀ Prev   Page X of Y   Next ▶`.
//!
//! Pure display over a [`PageInfo`]; the only output is a page request,
//! emitted only while the matching button is enabled.

use std::cell::Cell;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Span,
    widgets::Paragraph,
};

use roster_core::PageInfo;

use crate::action::Action;
use crate::component::Component;
use crate::theme;
use crate::widgets::hit;

const PREV_LABEL: &str = "◀ Prev";
const NEXT_LABEL: &str = "Next ▶";
const GAP: u16 = 3;

pub struct Pagination {
    info: PageInfo,
    prev_rect: Cell<Rect>,
    next_rect: Cell<Rect>,
}

impl Pagination {
    pub fn new(per_page: usize) -> Self {
        Self {
            info: PageInfo::new(0, per_page, 0),
            prev_rect: Cell::new(Rect::default()),
            next_rect: Cell::new(Rect::default()),
        }
    }

    pub fn info(&self) -> PageInfo {
        self.info
    }

    fn prev(&self) -> Option<Action> {
        self.info.prev().map(Action::RequestPage)
    }

    fn next(&self) -> Option<Action> {
        self.info.next().map(Action::RequestPage)
    }

    fn button_style(enabled: bool) -> Style {
        if enabled {
            theme::button_enabled()
        } else {
            theme::button_disabled()
        }
    }
}

impl Component for Pagination {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        Ok(match key.code {
            KeyCode::Char('n') | KeyCode::Right | KeyCode::PageDown => self.next(),
            KeyCode::Char('p') | KeyCode::Left | KeyCode::PageUp => self.prev(),
            _ => None,
        })
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(None);
        }
        if hit(self.prev_rect.get(), mouse.column, mouse.row) {
            return Ok(self.prev());
        }
        if hit(self.next_rect.get(), mouse.column, mouse.row) {
            return Ok(self.next());
        }
        Ok(None)
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        if let Action::ViewUpdated(view) = action {
            self.info = view.page_info(self.info.per_page);
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        if area.height == 0 {
            return;
        }
        let label = self.info.label();
        let prev = Span::styled(PREV_LABEL, Self::button_style(self.info.has_prev()));
        let next = Span::styled(NEXT_LABEL, Self::button_style(self.info.has_next()));
        let middle = Span::styled(label, theme::title_style());

        let widths = [prev.width(), middle.width(), next.width()]
            .map(|w| u16::try_from(w).unwrap_or(u16::MAX));
        let total = widths[0] + widths[1] + widths[2] + 2 * GAP;
        let mut x = area.x + area.width.saturating_sub(total) / 2;
        let y = area.y;

        let prev_rect = Rect::new(x, y, widths[0], 1).intersection(area);
        x += widths[0] + GAP;
        let label_rect = Rect::new(x, y, widths[1], 1).intersection(area);
        x += widths[1] + GAP;
        let next_rect = Rect::new(x, y, widths[2], 1).intersection(area);

        frame.render_widget(Paragraph::new(prev), prev_rect);
        frame.render_widget(Paragraph::new(middle), label_rect);
        frame.render_widget(Paragraph::new(next), next_rect);

        self.prev_rect.set(prev_rect);
        self.next_rect.set(next_rect);
    }

    fn id(&self) -> &'static str {
        "pagination"
    }
}
