//! Users screen — filter line, resizable table, pagination, and the
//! detail modal, driven by store snapshots.

use std::cell::Cell;
use std::sync::Arc;

use color_eyre::eyre::Result;
use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};
use tokio::sync::mpsc::UnboundedSender;

use roster_core::{FetchState, PointerCapture, ViewState};

use crate::action::Action;
use crate::component::Component;
use crate::theme;
use crate::widgets::detail_modal::DetailModal;
use crate::widgets::filter_bar::FilterBar;
use crate::widgets::hit;
use crate::widgets::pagination::Pagination;
use crate::widgets::resizable_table::ResizableTable;

pub struct UsersScreen {
    focused: bool,
    view: Arc<ViewState>,
    filter: FilterBar,
    table: ResizableTable,
    pagination: Pagination,
    modal: DetailModal,
    throbber_state: throbber_widgets_tui::ThrobberState,
    filter_area: Cell<Rect>,
    table_area: Cell<Rect>,
    pagination_area: Cell<Rect>,
}

impl UsersScreen {
    pub fn new(capture: PointerCapture, per_page: usize, min_column_width: u16) -> Self {
        Self {
            focused: true,
            view: Arc::new(ViewState::default()),
            filter: FilterBar::new(),
            table: ResizableTable::new(capture, min_column_width),
            pagination: Pagination::new(per_page),
            modal: DetailModal::new(),
            throbber_state: throbber_widgets_tui::ThrobberState::default(),
            filter_area: Cell::new(Rect::default()),
            table_area: Cell::new(Rect::default()),
            pagination_area: Cell::new(Rect::default()),
        }
    }

    fn is_ready(&self) -> bool {
        matches!(self.view.fetch, FetchState::Ready(_))
    }

    fn is_failed(&self) -> bool {
        matches!(self.view.fetch, FetchState::Failed(_))
    }

    fn render_loading(&self, frame: &mut Frame, area: Rect) {
        let layout = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

        let throbber = throbber_widgets_tui::Throbber::default()
            .label(" Loading users...")
            .style(Style::default().fg(theme::ACCENT_TEAL))
            .throbber_style(Style::default().fg(theme::ACCENT_VIOLET));

        let width = 20u16.min(layout[1].width);
        let x = layout[1].x + (layout[1].width - width) / 2;
        frame.render_stateful_widget(
            throbber,
            Rect::new(x, layout[1].y, width, 1),
            &mut self.throbber_state.clone(),
        );
    }

    fn render_failed(frame: &mut Frame, area: Rect, message: &str) {
        let layout = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .split(area);

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(message.to_owned(), theme::error_text())))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            layout[1],
        );
    }

    fn render_hints(frame: &mut Frame, area: Rect) {
        let hints = [
            ("f", "filter"),
            ("1-9", "sort"),
            ("n/p", "page"),
            ("</>", "resize"),
            ("Enter", "details"),
            ("?", "help"),
            ("q", "quit"),
        ];
        let mut spans = vec![Span::raw(" ")];
        for (key, label) in hints {
            spans.push(Span::styled(key, theme::key_hint_key()));
            spans.push(Span::styled(format!(" {label}  "), theme::key_hint()));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

impl Component for UsersScreen {
    fn init(&mut self, action_tx: UnboundedSender<Action>) -> Result<()> {
        self.filter.init(action_tx.clone())?;
        self.table.init(action_tx.clone())?;
        self.pagination.init(action_tx.clone())?;
        self.modal.init(action_tx)
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if self.is_ready() && self.modal.is_open() {
            return self.modal.handle_key_event(key);
        }
        if self.filter.focused() {
            return self.filter.handle_key_event(key);
        }
        if !self.is_ready() {
            // Rows are hidden: only sort keys reach the table, so a new sort
            // is a way out of an error. The filter line is drawn while
            // loading and can still be opened then.
            let action = if self.is_failed() {
                None
            } else {
                self.filter.handle_key_event(key)?
            };
            return Ok(action.or_else(|| self.table.handle_sort_key(key)));
        }
        if let Some(action) = self.filter.handle_key_event(key)? {
            return Ok(Some(action));
        }
        if let Some(action) = self.pagination.handle_key_event(key)? {
            return Ok(Some(action));
        }
        self.table.handle_key_event(key)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        // An active resize owns the pointer until release.
        if self.table.is_resizing() {
            return self.table.handle_mouse_event(mouse);
        }
        if self.is_ready() && self.modal.is_open() {
            return self.modal.handle_mouse_event(mouse);
        }

        let (col, row) = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if hit(self.filter_area.get(), col, row) {
                    return self.filter.handle_mouse_event(mouse);
                }
                if !self.is_ready() {
                    return Ok(None);
                }
                if hit(self.table_area.get(), col, row) {
                    return self.table.handle_mouse_event(mouse);
                }
                if hit(self.pagination_area.get(), col, row) {
                    return self.pagination.handle_mouse_event(mouse);
                }
                Ok(None)
            }
            MouseEventKind::ScrollDown | MouseEventKind::ScrollUp
                if self.is_ready() && hit(self.table_area.get(), col, row) =>
            {
                self.table.handle_mouse_event(mouse)
            }
            _ => Ok(None),
        }
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        match action {
            Action::Tick => {
                if self.view.fetch.is_loading() {
                    self.throbber_state.calc_next();
                }
            }
            Action::ViewUpdated(view) => {
                self.view = Arc::clone(view);
                self.filter.update(action)?;
                self.table.update(action)?;
                self.pagination.update(action)?;
                self.modal.update(action)?;
                // The filter line is not drawn in failed mode.
                if self.is_failed() && self.filter.focused() {
                    self.filter.set_focused(false);
                    return Ok(Some(Action::FilterEditing(false)));
                }
            }
            _ => {}
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let layout = Layout::vertical([
            Constraint::Length(1), // Filter line
            Constraint::Min(3),    // Table / status
            Constraint::Length(1), // Pagination
            Constraint::Length(1), // Key hints
        ])
        .split(area);

        match &self.view.fetch {
            FetchState::Loading => {
                self.filter.render(frame, layout[0]);
                self.filter_area.set(layout[0]);
                self.render_loading(frame, layout[1]);
                self.table_area.set(Rect::default());
                self.pagination_area.set(Rect::default());
            }
            FetchState::Failed(message) => {
                Self::render_failed(frame, layout[1], message);
                self.filter_area.set(Rect::default());
                self.table_area.set(Rect::default());
                self.pagination_area.set(Rect::default());
            }
            FetchState::Ready(_) => {
                self.filter.render(frame, layout[0]);
                self.table.render(frame, layout[1]);
                self.pagination.render(frame, layout[2]);
                self.filter_area.set(layout[0]);
                self.table_area.set(layout[1]);
                self.pagination_area.set(layout[2]);
            }
        }
        Self::render_hints(frame, layout[3]);

        if self.is_ready() {
            self.modal.render(frame, area);
        }
    }

    fn focused(&self) -> bool {
        self.focused
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        self.table.set_focused(focused);
    }

    fn id(&self) -> &'static str {
        "Users"
    }
}
