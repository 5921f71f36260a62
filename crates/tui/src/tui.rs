//! Terminal UI initialization and event handling.
//!
//! This module provides the `Tui` wrapper around ratatui's Terminal,
//! handling raw mode setup and event streaming.

use anyhow::Result;
use crossterm::event::DisableBracketedPaste;
use crossterm::event::EnableBracketedPaste;
use crossterm::event::Event;
use crossterm::event::KeyEvent;
use crossterm::execute;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::stdout;
use std::io::Stdout;
use std::pin::Pin;
use tokio_stream::Stream;
use tokio_stream::StreamExt;

/// Type alias for the terminal backend we're using.
pub type TerminalBackend = CrosstermBackend<Stdout>;

/// TUI events that can be emitted.
#[derive(Debug)]
pub enum TuiEvent {
    /// Keyboard event.
    Key(KeyEvent),
    /// Paste event (from bracketed paste).
    Paste(String),
    /// The terminal was resized and must be redrawn.
    Resize,
}

/// Owns the terminal while the host is running.
///
/// Raw mode, bracketed paste and the alternate screen are switched on in
/// [`Tui::init`] and off again exactly once, by [`Tui::restore`] or on drop.
pub struct Tui {
    terminal: Terminal<TerminalBackend>,
    restored: bool,
}

impl Tui {
    /// Take over the terminal.
    pub fn init() -> Result<Self> {
        enable_raw_mode()?;
        execute!(stdout(), EnableBracketedPaste, EnterAlternateScreen)?;
        set_panic_hook();

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
        terminal.clear()?;
        tracing::debug!(size = ?terminal.size()?, "terminal initialized");

        Ok(Self {
            terminal,
            restored: false,
        })
    }

    /// Hand the terminal back. Later calls do nothing.
    pub fn restore(&mut self) -> Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;

        disable_raw_mode()?;
        execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        tracing::debug!("terminal restored");
        Ok(())
    }

    /// Terminal events the host reacts to. Mouse and focus events are
    /// dropped; the stream ends on the first read error.
    pub fn event_stream(&self) -> Pin<Box<dyn Stream<Item = TuiEvent> + Send + 'static>> {
        let mut crossterm_events = crossterm::event::EventStream::new();

        let event_stream = async_stream::stream! {
            while let Some(result) = crossterm_events.next().await {
                match result {
                    Ok(Event::Key(key_event)) => yield TuiEvent::Key(key_event),
                    Ok(Event::Resize(_, _)) => yield TuiEvent::Resize,
                    Ok(Event::Paste(pasted)) => yield TuiEvent::Paste(pasted),
                    Ok(_) => {}
                    Err(err) => {
                        tracing::warn!(error = %err, "terminal event stream failed");
                        break;
                    }
                }
            }
        };

        Box::pin(event_stream)
    }

    /// Draw the UI with the provided function.
    pub fn draw<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut ratatui::Frame),
    {
        self.terminal.draw(f)?;
        Ok(())
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

/// Set a panic hook that restores the terminal before panicking.
fn set_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}
