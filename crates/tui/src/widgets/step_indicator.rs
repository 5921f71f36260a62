//! Step indicator widget.
//!
//! Draws steps side by side in equal-width segments. Each segment has a
//! rule along its top edge and the step label below it, both colored by
//! the step's state.

use std::str::FromStr;

use ratatui::buffer::Buffer;
use ratatui::layout::Constraint;
use ratatui::layout::Layout;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::widgets::Widget;
use si_core::host::memory::MemoryStep;
use si_protocol::StepState;
use si_protocol::Theme;

/// Symbol used for the rule above each step.
const RULE_SYMBOL: &str = "━";

/// Renders a list of marked steps with a theme.
pub struct StepIndicatorWidget<'a> {
    steps: &'a [MemoryStep],
    theme: &'a Theme,
}

impl<'a> StepIndicatorWidget<'a> {
    pub fn new(steps: &'a [MemoryStep], theme: &'a Theme) -> Self {
        Self { steps, theme }
    }

    /// Rows needed to draw rule, padding and label.
    pub fn required_height(theme: &Theme) -> u16 {
        theme
            .border_width
            .saturating_add(theme.padding_block)
            .saturating_add(1)
    }

    /// Style for a step in `state`.
    pub fn state_style(theme: &Theme, state: StepState) -> Style {
        let color = match state {
            StepState::Active => parse_color(&theme.active_color),
            StepState::Completed => parse_color(&theme.completed_color),
            StepState::Pending => parse_color(&theme.default_color),
        };
        let style = Style::default().fg(color);
        if state == StepState::Active && theme.active_bold {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }
}

impl Widget for StepIndicatorWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        if self.steps.is_empty() {
            let style = Self::state_style(self.theme, StepState::Pending);
            buf.set_stringn(area.x, area.y, "No steps.", area.width as usize, style);
            return;
        }

        let count = self.steps.len() as u32;
        let segments = Layout::horizontal(
            self.steps
                .iter()
                .map(|_| Constraint::Ratio(1, count)),
        )
        .spacing(self.theme.gap)
        .split(area);

        for (step, segment) in self.steps.iter().zip(segments.iter()) {
            render_step(step, *segment, self.theme, buf);
        }
    }
}

fn render_step(step: &MemoryStep, area: Rect, theme: &Theme, buf: &mut Buffer) {
    if area.width == 0 {
        return;
    }

    let state = step.marking.state;
    let style = StepIndicatorWidget::state_style(theme, state);
    let rule_style = Style::default().fg(style.fg.unwrap_or(Color::Reset));

    let rule = RULE_SYMBOL.repeat(area.width as usize);
    let rule_rows = theme.border_width.min(area.height);
    for row in 0..rule_rows {
        buf.set_stringn(area.x, area.y + row, &rule, area.width as usize, rule_style);
    }

    let label_row = theme.border_width.saturating_add(theme.padding_block);
    if label_row < area.height {
        buf.set_stringn(
            area.x,
            area.y + label_row,
            step.label.trim(),
            area.width as usize,
            style,
        );
    }
}

/// Interprets a theme color name; unknown names fall back to the terminal
/// default.
pub fn parse_color(name: &str) -> Color {
    Color::from_str(name).unwrap_or(Color::Reset)
}
