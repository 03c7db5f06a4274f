//! Application core — event loop, store ownership, action dispatch.

use std::sync::Arc;
use std::time::Duration;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};
use tokio::sync::mpsc;
use tracing::{debug, info};

use roster_core::{FetchState, Msg, PointerCapture, Store, UserDirectory};

use crate::action::Action;
use crate::component::Component;
use crate::event::{Event, EventReader};
use crate::fetch::spawn_fetch;
use crate::screens::users::UsersScreen;
use crate::theme;
use crate::tui::Tui;
use crate::widgets::centered;

/// Top-level application state and event loop.
pub struct App {
    /// Owner of view state; every intent goes through `Store::dispatch`.
    store: Store,
    directory: UserDirectory,
    /// Shared with the table; held while a column resize is in progress.
    capture: PointerCapture,
    screen: UsersScreen,
    running: bool,
    help_visible: bool,
    /// While the filter line has focus, printable keys belong to it.
    filter_editing: bool,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
}

impl App {
    pub fn new(directory: UserDirectory, page_size: usize, min_column_width: u16) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let capture = PointerCapture::new();
        Self {
            store: Store::new(page_size),
            directory,
            screen: UsersScreen::new(capture.clone(), page_size, min_column_width),
            capture,
            running: true,
            help_visible: false,
            filter_editing: false,
            action_tx,
            action_rx,
        }
    }

    /// Run the main event loop.
    pub async fn run(&mut self) -> Result<()> {
        let mut tui = Tui::new()?;
        tui.enter()?;
        self.screen.init(self.action_tx.clone())?;
        self.screen.set_focused(true);

        let mut events = EventReader::new(
            Duration::from_millis(250), // 4 Hz tick
            Duration::from_millis(33),  // ~30 FPS render
        );

        info!(base_url = %self.directory.base_url(), "TUI event loop started");
        self.dispatch(Msg::Mounted)?;

        while self.running {
            let Some(event) = events.next().await else {
                break;
            };

            match event {
                Event::Key(key) => {
                    if let Some(action) = self.handle_key_event(key)? {
                        self.action_tx.send(action)?;
                    }
                }
                Event::Mouse(mouse) => {
                    if let Some(action) = self.handle_mouse_event(mouse)? {
                        self.action_tx.send(action)?;
                    }
                }
                Event::Resize(w, h) => self.action_tx.send(Action::Resize(w, h))?,
                Event::Tick => self.action_tx.send(Action::Tick)?,
                Event::Render => self.action_tx.send(Action::Render)?,
            }

            while let Ok(action) = self.action_rx.try_recv() {
                self.process_action(&action)?;

                if let Action::Render = action {
                    tui.draw(|frame| self.render(frame))?;
                }
            }
        }

        events.stop();
        info!("TUI event loop ended");
        Ok(())
    }

    /// Global keys first, then the screen.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.modifiers == KeyModifiers::CONTROL && key.code == KeyCode::Char('c') {
            return Ok(Some(Action::Quit));
        }

        if self.help_visible {
            return Ok(match key.code {
                KeyCode::Esc | KeyCode::Char('?') => Some(Action::ToggleHelp),
                _ => None,
            });
        }

        // The modal only exists on screen over a loaded page.
        let state = self.store.state();
        let modal_open = state.modal_visible && matches!(state.fetch, FetchState::Ready(_));
        if !self.filter_editing && !modal_open {
            match (key.modifiers, key.code) {
                (KeyModifiers::NONE, KeyCode::Char('q')) => return Ok(Some(Action::Quit)),
                (KeyModifiers::NONE, KeyCode::Char('?')) => {
                    return Ok(Some(Action::ToggleHelp));
                }
                _ => {}
            }
        }

        self.screen.handle_key_event(key)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if self.help_visible && !self.capture.is_held() {
            return Ok(None);
        }
        self.screen.handle_mouse_event(mouse)
    }

    /// Process a single action — update app state and propagate to the screen.
    fn process_action(&mut self, action: &Action) -> Result<()> {
        match action {
            Action::Quit => self.running = false,
            Action::ToggleHelp => self.help_visible = !self.help_visible,
            Action::FilterEditing(editing) => self.filter_editing = *editing,
            Action::Render | Action::Resize(..) => {}
            Action::Tick | Action::ViewUpdated(_) => {
                if let Some(follow_up) = self.screen.update(action)? {
                    self.action_tx.send(follow_up)?;
                }
            }
            _ => {
                if let Some(msg) = action.to_msg() {
                    self.dispatch(msg)?;
                }
            }
        }
        Ok(())
    }

    /// Feed `msg` to the store, start any fetch it asks for, and publish the
    /// new state if it changed.
    fn dispatch(&mut self, msg: Msg) -> Result<()> {
        let before = self.store.state().clone();
        if let Some(request) = self.store.dispatch(msg) {
            debug!(seq = %request.seq, "issuing fetch");
            spawn_fetch(self.directory.clone(), request, self.action_tx.clone());
        }
        if *self.store.state() != before {
            self.action_tx
                .send(Action::ViewUpdated(Arc::new(self.store.state().clone())))?;
        }
        Ok(())
    }

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Block::default().style(Style::default().bg(theme::BG_DARK)), area);
        self.screen.render(frame, area);
        if self.help_visible {
            Self::render_help_overlay(frame, area);
        }
    }

    fn render_help_overlay(frame: &mut Frame, area: Rect) {
        const KEYS: &[(&str, &str)] = &[
            ("j/k ↑/↓", "Move selection"),
            ("Enter", "Show details"),
            ("h/l", "Move column cursor"),
            ("s  1-9", "Sort column (asc, desc, off)"),
            ("< / >", "Narrow / widen column"),
            ("=", "Reset column widths"),
            ("n/p ←/→", "Next / previous page"),
            ("f  /", "Edit filter"),
            ("Tab", "Cycle filter field"),
            ("Ctrl+U", "Clear filter text"),
            ("Esc", "Close / stop editing"),
            ("?", "Toggle help"),
            ("q", "Quit"),
        ];

        let height = u16::try_from(KEYS.len()).unwrap_or(u16::MAX) + 4;
        let help_area = centered(area, 50, height);
        frame.render_widget(Clear, help_area);
        frame.render_widget(
            Block::default().style(Style::default().bg(theme::BG_DARK)),
            help_area,
        );

        let block = Block::default()
            .title(" Keyboard Shortcuts ")
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_focused());
        let inner = block.inner(help_area);
        frame.render_widget(block, help_area);

        let mut lines = vec![Line::from("")];
        lines.extend(KEYS.iter().map(|(key, what)| {
            Line::from(vec![
                Span::styled(format!("  {key:<10}"), theme::key_hint_key()),
                Span::styled(*what, theme::key_hint()),
            ])
        }));
        frame.render_widget(Paragraph::new(lines), inner);
    }
}

#[cfg(test)]
mod tests {
    use roster_core::ViewerConfig;
    use url::Url;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn app_at(base: &str) -> App {
        let url = Url::parse(base).expect("valid URL");
        let directory = UserDirectory::new(&ViewerConfig::new(url)).expect("valid config");
        App::new(directory, 10, 6)
    }

    /// Never mounted, so never fetches.
    fn app() -> App {
        app_at("https://dummyjson.com")
    }

    fn key(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    #[test]
    fn q_quits_unless_filter_is_editing() {
        let mut app = app();
        assert!(matches!(
            app.handle_key_event(key('q')).expect("key"),
            Some(Action::Quit)
        ));

        app.process_action(&Action::FilterEditing(true))
            .expect("action");
        assert!(!matches!(
            app.handle_key_event(key('q')).expect("key"),
            Some(Action::Quit)
        ));

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(matches!(
            app.handle_key_event(ctrl_c).expect("key"),
            Some(Action::Quit)
        ));
    }

    #[test]
    fn help_swallows_other_keys() {
        let mut app = app();
        app.process_action(&Action::ToggleHelp).expect("action");
        assert!(app.handle_key_event(key('n')).expect("key").is_none());
        assert!(matches!(
            app.handle_key_event(key('?')).expect("key"),
            Some(Action::ToggleHelp)
        ));
    }

    #[tokio::test]
    async fn mount_fetches_and_failure_reaches_the_view() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let mut app = app_at(&server.uri());
        app.dispatch(Msg::Mounted).expect("dispatch");
        assert!(app.store.latest_request().is_some());

        let mut failed = None;
        for _ in 0..8 {
            let next = tokio::time::timeout(Duration::from_secs(10), app.action_rx.recv()).await;
            let Ok(Some(action)) = next else { break };
            app.process_action(&action).expect("action");
            if let FetchState::Failed(message) = &app.store.state().fetch {
                failed = Some(message.clone());
                break;
            }
        }
        let message = failed.expect("fetch failure never reached the store");
        assert!(message.contains("500"), "{message}");
    }
}
