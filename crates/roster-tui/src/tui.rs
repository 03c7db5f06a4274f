//! Terminal setup and teardown for the viewer.
//!
//! Mouse reporting is limited to button-event tracking (press, release and
//! motion while a button is held). Column resizing needs drags; bare pointer
//! motion is never requested, so the event reader is not flooded while the
//! cursor merely hovers over the table.

use std::fmt;
use std::io::{Stdout, stdout};

use color_eyre::eyre::Result;
use crossterm::{
    Command, ExecutableCommand, cursor,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::debug;

pub type Backend = CrosstermBackend<Stdout>;

/// Normal (1000) and button-event (1002) tracking with SGR coordinates (1006).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnableDragTracking;

impl Command for EnableDragTracking {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        f.write_str("\x1b[?1000h\x1b[?1002h\x1b[?1006h")
    }

    #[cfg(windows)]
    fn execute_winapi(&self) -> std::io::Result<()> {
        crossterm::event::EnableMouseCapture.execute_winapi()
    }

    #[cfg(windows)]
    fn is_ansi_code_supported(&self) -> bool {
        false
    }
}

/// Inverse of [`EnableDragTracking`], in reverse order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisableDragTracking;

impl Command for DisableDragTracking {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        f.write_str("\x1b[?1006l\x1b[?1002l\x1b[?1000l")
    }

    #[cfg(windows)]
    fn execute_winapi(&self) -> std::io::Result<()> {
        crossterm::event::DisableMouseCapture.execute_winapi()
    }

    #[cfg(windows)]
    fn is_ansi_code_supported(&self) -> bool {
        false
    }
}

/// Owns the terminal while the viewer runs; restores it on drop.
pub struct Tui {
    pub terminal: Terminal<Backend>,
    entered: bool,
}

impl Tui {
    pub fn new() -> Result<Self> {
        let terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
        Ok(Self {
            terminal,
            entered: false,
        })
    }

    /// Raw mode, alternate screen, drag tracking, hidden cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.entered = true;
        stdout()
            .execute(EnterAlternateScreen)?
            .execute(EnableDragTracking)?
            .execute(cursor::Hide)?;
        self.terminal.clear()?;
        debug!("terminal entered");
        Ok(())
    }

    pub fn draw<F>(&mut self, render: F) -> Result<()>
    where
        F: FnOnce(&mut ratatui::Frame),
    {
        self.terminal.draw(render)?;
        Ok(())
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        if self.entered {
            restore_terminal();
            debug!("terminal restored");
        }
    }
}

/// Best-effort; each step runs even if an earlier one failed.
fn restore_terminal() {
    let _ = stdout().execute(cursor::Show);
    let _ = stdout().execute(DisableDragTracking);
    let _ = stdout().execute(LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
}

/// Install panic and error hooks that restore the terminal before printing.
///
/// Call before [`Tui::enter`] so a panic during setup still leaves a usable
/// shell.
pub fn install_hooks() -> Result<()> {
    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default()
        .display_env_section(false)
        .into_hooks();

    eyre_hook.install()?;

    let panic_hook = panic_hook.into_panic_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal();
        panic_hook(info);
    }));

    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn ansi(command: &impl Command) -> String {
        let mut out = String::new();
        command.write_ansi(&mut out).expect("write to String");
        out
    }

    #[test]
    fn drag_tracking_never_requests_bare_motion() {
        let enable = ansi(&EnableDragTracking);
        assert_eq!(enable, "\x1b[?1000h\x1b[?1002h\x1b[?1006h");
        assert!(!enable.contains("1003"));
    }

    #[test]
    fn disable_reverses_enable() {
        let modes = |s: &str| {
            s.split("\x1b[?")
                .filter(|m| !m.is_empty())
                .map(|m| m[..4].to_owned())
                .collect::<Vec<_>>()
        };
        let mut enabled = modes(&ansi(&EnableDragTracking));
        enabled.reverse();
        assert_eq!(modes(&ansi(&DisableDragTracking)), enabled);
    }
}
