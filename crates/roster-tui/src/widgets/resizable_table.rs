//! Resizable table: sortable headers, per-column widths, drag-to-resize.
//!
//! Each header cell ends in a `┆` handle. Mouse-down on a handle starts a
//! resize session that holds the pointer capture until mouse-up, `Esc`, or
//! the table is dropped. Mouse-down anywhere else on a header toggles that
//! column's sort; on a row, selects the user.

use std::cell::{Cell, RefCell};

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell as TableCell, Row, Table, TableState},
};
use tracing::trace;

use roster_core::{
    COLUMNS, ColumnResizer, ColumnWidths, PointerCapture, SortOrder, SortSpec, User,
};

use crate::action::Action;
use crate::component::Component;
use crate::theme;
use crate::widgets::hit;

const HANDLE: &str = "┆";

pub struct ResizableTable {
    users: Vec<User>,
    sort: SortSpec,
    /// Interior mutability: widths are first distributed during render,
    /// when the container width becomes known.
    widths: RefCell<ColumnWidths>,
    resizer: ColumnResizer,
    table_state: TableState,
    /// Scroll offset from the last render, for mapping clicks to rows.
    offset: Cell<usize>,
    /// Column under the keyboard cursor.
    cursor: usize,
    /// Table interior (inside the border) from the last render.
    inner: Cell<Rect>,
    focused: bool,
}

impl ResizableTable {
    pub fn new(capture: PointerCapture, min_width: u16) -> Self {
        Self {
            users: Vec::new(),
            sort: SortSpec::default(),
            widths: RefCell::new(ColumnWidths::new(min_width)),
            resizer: ColumnResizer::new(capture),
            table_state: TableState::default(),
            offset: Cell::new(0),
            cursor: 0,
            inner: Cell::new(Rect::default()),
            focused: true,
        }
    }

    pub fn is_resizing(&self) -> bool {
        self.resizer.is_resizing()
    }

    pub fn column_widths(&self) -> Vec<u16> {
        self.widths.borrow().as_slice().to_vec()
    }

    pub fn selected(&self) -> Option<&User> {
        self.table_state.selected().and_then(|i| self.users.get(i))
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Column cursor and sort keys only. The screen routes these here even
    /// when no rows are shown.
    pub fn handle_sort_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char('h') => {
                self.move_cursor(-1);
                None
            }
            KeyCode::Char('l') => {
                self.move_cursor(1);
                None
            }
            KeyCode::Char('s') => Self::sort_column(self.cursor),
            KeyCode::Char(c @ '1'..='9') => c
                .to_digit(10)
                .and_then(|d| usize::try_from(d).ok())
                .and_then(|d| Self::sort_column(d - 1)),
            _ => None,
        }
    }

    fn move_selection(&mut self, delta: isize) {
        if self.users.is_empty() {
            self.table_state.select(None);
            return;
        }
        let current = self.table_state.selected().unwrap_or(0);
        let last = self.users.len() - 1;
        let next = current.saturating_add_signed(delta).min(last);
        self.table_state.select(Some(next));
    }

    fn move_cursor(&mut self, delta: isize) {
        self.cursor = self
            .cursor
            .saturating_add_signed(delta)
            .min(COLUMNS.len() - 1);
    }

    fn sort_column(index: usize) -> Option<Action> {
        COLUMNS.get(index).map(|c| Action::SortBy(c.key))
    }

    fn nudge_cursor_column(&mut self, delta: i32) {
        let container = self.inner.get().width;
        if container == 0 {
            return;
        }
        let width = self
            .widths
            .borrow_mut()
            .nudge(self.cursor, delta, container);
        trace!(column = self.cursor, width, "column nudged");
    }

    fn redistribute(&mut self) {
        let container = self.inner.get().width;
        if container > 0 {
            self.widths.borrow_mut().distribute(COLUMNS.len(), container);
        }
    }

    fn on_mouse_down(&mut self, column: u16, row: u16) -> Option<Action> {
        let inner = self.inner.get();
        if !hit(inner, column, row) {
            return None;
        }
        let x = column - inner.x;

        if row == inner.y {
            let widths = self.widths.borrow();
            if let Some(index) = widths.handle_at(x, inner.width) {
                self.resizer.begin(index, column, &widths, inner.width);
                return None;
            }
            let index = widths.column_at(x, inner.width)?;
            drop(widths);
            self.cursor = index;
            return Self::sort_column(index);
        }

        let index = self.offset.get() + usize::from(row - inner.y - 1);
        let user = self.users.get(index)?.clone();
        self.table_state.select(Some(index));
        Some(Action::SelectUser(user))
    }

    fn header_cell(&self, index: usize, width: u16) -> TableCell<'static> {
        let Some(column) = COLUMNS.get(index) else {
            return TableCell::from("");
        };
        if width == 0 {
            return TableCell::from("");
        }

        let mut label = column.label.to_owned();
        match self.sort.indicator(column.key) {
            Some(SortOrder::Asc) => label.push_str(" ▲"),
            Some(SortOrder::Desc) => label.push_str(" ▼"),
            None => {}
        }

        let body_width = usize::from(width - 1);
        let body: String = label
            .chars()
            .chain(std::iter::repeat(' '))
            .take(body_width)
            .collect();

        let style = if self.focused && index == self.cursor {
            theme::table_header_cursor()
        } else {
            theme::table_header()
        };
        let dragging = self.resizer.active_column() == Some(index);

        TableCell::from(Line::from(vec![
            Span::styled(body, style),
            Span::styled(HANDLE, theme::resize_handle(dragging)),
        ]))
    }
}

impl Component for ResizableTable {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.move_selection(1);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.move_selection(-1);
                None
            }
            KeyCode::Char('g') | KeyCode::Home => {
                self.move_selection(isize::MIN);
                None
            }
            KeyCode::Char('G') | KeyCode::End => {
                self.move_selection(isize::MAX);
                None
            }
            KeyCode::Char('<') => {
                self.nudge_cursor_column(-1);
                None
            }
            KeyCode::Char('>') => {
                self.nudge_cursor_column(1);
                None
            }
            KeyCode::Char('=') => {
                self.redistribute();
                None
            }
            KeyCode::Enter => self.selected().cloned().map(Action::SelectUser),
            KeyCode::Esc => {
                self.resizer.end();
                None
            }
            _ => self.handle_sort_key(key),
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        let action = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.on_mouse_down(mouse.column, mouse.row),
            MouseEventKind::Drag(MouseButton::Left) => {
                self.resizer
                    .drag_to(mouse.column, &mut self.widths.borrow_mut());
                None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.resizer.end();
                None
            }
            MouseEventKind::ScrollDown => {
                self.move_selection(1);
                None
            }
            MouseEventKind::ScrollUp => {
                self.move_selection(-1);
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        if let Action::ViewUpdated(view) = action {
            self.sort = view.sort;
            if let Some(page) = view.fetch.page() {
                if self.users != page.users {
                    self.users.clone_from(&page.users);
                    self.table_state = TableState::default()
                        .with_selected((!self.users.is_empty()).then_some(0));
                }
            } else {
                // Rows are hidden while loading or failed; nothing to select.
                self.users.clear();
                self.table_state.select(None);
                self.resizer.end();
            }
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(Line::from(Span::styled(" Users ", theme::title_style())))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if self.focused {
                theme::border_focused()
            } else {
                theme::border_default()
            });
        let inner = block.inner(area);
        frame.render_widget(block, area);
        self.inner.set(inner);

        let fitted = {
            let mut widths = self.widths.borrow_mut();
            widths.ensure(COLUMNS.len(), inner.width);
            widths.fit(inner.width)
        };

        let header = Row::new(
            fitted
                .iter()
                .enumerate()
                .map(|(i, &w)| self.header_cell(i, w)),
        );

        let rows: Vec<Row> = self
            .users
            .iter()
            .map(|user| {
                Row::new(COLUMNS.iter().map(|c| TableCell::from(c.value(user))))
                    .style(theme::table_row())
            })
            .collect();

        let table = Table::new(rows, fitted.iter().map(|&w| Constraint::Length(w)))
            .header(header)
            .column_spacing(0)
            .flex(Flex::Start)
            .row_highlight_style(theme::table_selected());

        let mut state = self.table_state.clone();
        frame.render_stateful_widget(table, inner, &mut state);
        self.offset.set(state.offset());
    }

    fn focused(&self) -> bool {
        self.focused
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn id(&self) -> &'static str {
        "table"
    }
}
