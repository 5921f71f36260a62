//! TUI application state and event loop.
//!
//! This module defines the main `App` struct. It owns the step indicator
//! bound to an in-memory host, turns key presses into [`Op`]s, and draws
//! the indicator, its markings, a status line and the command composer.

use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::layout::Constraint;
use ratatui::layout::Direction;
use ratatui::layout::Layout;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui::widgets::Clear;
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use si_core::config::models::AppConfig;
use si_core::host::MemoryHost;
use si_core::StepIndicator;
use si_core::SyncOutcome;
use si_protocol::Op;
use si_protocol::RawStepIndex;
use si_protocol::StepIndex;
use si_protocol::StepState;
use si_protocol::Theme;
use tokio_stream::Stream;
use tokio_stream::StreamExt;

use crate::event_handler;
use crate::event_handler::KeyAction;
use crate::tui::Tui;
use crate::tui::TuiEvent;
use crate::widgets::CommandComposer;
use crate::widgets::StepDetail;
use crate::widgets::StepIndicatorWidget;

/// Main TUI application state.
pub struct App {
    /// The indicator and the steps it marks.
    pub indicator: StepIndicator<MemoryHost>,
    /// Presentational settings.
    pub theme: Theme,
    /// Slash command input.
    pub composer: CommandComposer,
    /// Scroll state of the markings panel.
    pub detail: StepDetail,
    /// Message shown under the markings panel.
    pub status: String,
    /// Flag to indicate if the application should exit.
    pub should_exit: bool,
}

impl App {
    /// Create an inactive App over `steps`, starting at `initial`.
    pub fn new(config: &AppConfig, steps: Vec<String>, initial: RawStepIndex) -> Self {
        let host = MemoryHost::with_labels(steps);
        let indicator = StepIndicator::with_config(host, &config.indicator).initial_index(initial);

        Self {
            indicator,
            theme: config.theme(),
            composer: CommandComposer::new(),
            detail: StepDetail::new(),
            status: String::new(),
            should_exit: false,
        }
    }

    /// Attach the indicator and describe the first classification.
    pub fn activate(&mut self) {
        let outcome = self.indicator.activate();
        self.status = self.describe(&outcome);
    }

    /// Detach the indicator, releasing its list subscription.
    pub fn deactivate(&mut self) {
        self.indicator.deactivate();
    }

    /// Main event loop.
    ///
    /// Redraws after every terminal event until a quit is requested or the
    /// event stream ends.
    pub async fn run(&mut self, tui: &mut Tui) -> Result<()> {
        let events = tui.event_stream();
        self.run_with(events, |app| tui.draw(|frame| app.render(frame)))
            .await
    }

    /// Event loop over any event source, calling `draw` once up front and
    /// after each event.
    pub async fn run_with<S, D>(&mut self, mut events: S, mut draw: D) -> Result<()>
    where
        S: Stream<Item = TuiEvent> + Unpin,
        D: FnMut(&App) -> Result<()>,
    {
        draw(self)?;

        while !self.should_exit {
            let Some(event) = events.next().await else {
                break;
            };
            self.handle_tui_event(event);
            draw(self)?;
        }

        Ok(())
    }

    /// Handle TUI events (keyboard input, paste, resize).
    fn handle_tui_event(&mut self, event: TuiEvent) {
        match event {
            TuiEvent::Key(key_event) => self.handle_key_event(key_event),
            TuiEvent::Paste(text) => {
                if self.composer.is_open() {
                    text.chars()
                        .filter(|c| !c.is_control())
                        .for_each(|c| self.composer.insert_char(c));
                }
            }
            TuiEvent::Resize => {}
        }
    }

    /// Handle keyboard events.
    fn handle_key_event(&mut self, key_event: KeyEvent) {
        let step_count = self.indicator.host().len();
        match event_handler::handle_keyboard_event(key_event, &mut self.composer, step_count) {
            KeyAction::Op(op) => self.apply_op(op),
            KeyAction::ScrollUp => self.detail.scroll_up(),
            KeyAction::ScrollDown => self.detail.scroll_down(step_count),
            KeyAction::Error(message) => self.status = message,
            KeyAction::None => {}
        }
    }

    /// Apply one operation to the indicator or its steps.
    pub fn apply_op(&mut self, op: Op) {
        tracing::debug!(?op, "applying op");

        let outcome = match op {
            Op::SetStep(raw) => self.indicator.set_step_attr(&raw),
            Op::Next => {
                let target = self.step_target(1);
                self.indicator.on_index_changed(target)
            }
            Op::Previous => {
                let target = self.step_target(-1);
                self.indicator.on_index_changed(target)
            }
            Op::AddStep(label) => {
                self.indicator.host_mut().push_step(label);
                self.sync_list()
            }
            Op::RemoveStep => {
                if self.indicator.host_mut().pop_step().is_none() {
                    self.status = "No steps to remove".to_string();
                    return;
                }
                self.sync_list()
            }
            Op::Quit => {
                self.should_exit = true;
                return;
            }
        };

        self.status = self.describe(&outcome);
    }

    /// Resync after a structural change reported by the host.
    fn sync_list(&mut self) -> SyncOutcome {
        self.detail.clamp(self.indicator.host().len());
        self.indicator
            .poll_list_changes()
            .unwrap_or(SyncOutcome::Inactive)
    }

    /// The index `delta` steps from the current one, kept within
    /// `0..=len + 1` so that one step past either end is reachable.
    fn step_target(&self, delta: i64) -> StepIndex {
        let len = self.indicator.host().len() as i64;
        let current = self
            .indicator
            .effective_index()
            .unwrap_or_else(|| self.indicator.default_index());
        StepIndex(current.get().saturating_add(delta).clamp(0, len + 1))
    }

    /// Status line text for a sync outcome.
    fn describe(&self, outcome: &SyncOutcome) -> String {
        match outcome {
            SyncOutcome::Applied(states) if states.is_empty() => "No steps".to_string(),
            SyncOutcome::Applied(states) => {
                let len = states.len();
                match states.iter().position(|state| *state == StepState::Active) {
                    Some(position) => format!("Step {} of {len}", position + 1),
                    None if states.iter().all(|state| *state == StepState::Completed) => {
                        format!("All {len} steps completed")
                    }
                    None => "Not started".to_string(),
                }
            }
            SyncOutcome::Skipped => match self.indicator.raw_index() {
                RawStepIndex::Invalid(raw) => format!("Ignored non-numeric step {raw:?}"),
                _ => "Ignored step value".to_string(),
            },
            SyncOutcome::Inactive => "Indicator inactive".to_string(),
        }
    }

    /// Render the TUI.
    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let indicator_height =
            StepIndicatorWidget::required_height(&self.theme).saturating_add(2); // borders

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(indicator_height), // Steps
                Constraint::Min(3),                   // Markings
                Constraint::Length(1),                // Status
                Constraint::Length(3),                // Command input
            ])
            .split(area);

        self.render_steps(frame, chunks[0]);
        self.detail
            .render(frame, chunks[1], self.indicator.host().steps(), &self.theme);
        self.render_status(frame, chunks[2]);
        self.composer.render(chunks[3], frame.buffer_mut());
        self.render_popup(frame, chunks[1]);
    }

    /// Render the indicator inside a bordered block.
    fn render_steps(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title("Steps (←/→ move, a add, d remove)");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let widget = StepIndicatorWidget::new(self.indicator.host().steps(), &self.theme);
        frame.render_widget(widget, inner);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new(self.status.as_str()).style(Style::default().fg(Color::Cyan));
        frame.render_widget(paragraph, area);
    }

    /// Render autocomplete suggestions over the bottom of `area`.
    fn render_popup(&self, frame: &mut Frame, area: Rect) {
        if !self.composer.should_show_popup() {
            return;
        }
        let rows = self.composer.suggestions().len() as u16 + 2;
        let height = rows.min(area.height);
        let popup = Rect {
            x: area.x,
            y: area.y + area.height - height,
            width: area.width,
            height,
        };
        frame.render_widget(Clear, popup);
        self.composer.render_popup(popup, frame.buffer_mut());
    }
}
