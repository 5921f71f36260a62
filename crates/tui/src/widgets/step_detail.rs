//! Detail view listing each step's marking.
//!
//! Shows the classification and accessibility metadata the indicator
//! applied, one line per step, in a scrollable view. It supports keyboard
//! navigation (j/k) and shows a scrollbar when the list overflows.

use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Scrollbar;
use ratatui::widgets::ScrollbarOrientation;
use ratatui::widgets::ScrollbarState;
use ratatui::Frame;
use si_core::host::memory::MemoryStep;
use si_protocol::Theme;

use super::step_indicator::StepIndicatorWidget;

/// Widget for displaying step markings with scrolling support.
#[derive(Debug, Default)]
pub struct StepDetail {
    /// Current scroll offset (number of lines scrolled from the top).
    pub scroll_offset: usize,
}

impl StepDetail {
    pub fn new() -> Self {
        Self::default()
    }

    /// One line per step: number, label, state and accessibility fields.
    pub fn lines<'a>(steps: &'a [MemoryStep], theme: &Theme) -> Vec<Line<'a>> {
        steps
            .iter()
            .enumerate()
            .map(|(position, step)| {
                let marking = &step.marking;
                let style = StepIndicatorWidget::state_style(theme, marking.state);

                let mut spans = vec![
                    Span::raw(format!("{:>2}. ", position + 1)),
                    Span::styled(format!("{:<10}", marking.state.as_str()), style),
                    Span::raw(step.label.as_str()),
                ];
                if marking.aria_current {
                    spans.push(Span::raw("  aria-current"));
                }
                if let Some(label) = &marking.aria_label {
                    spans.push(Span::raw(format!("  aria-label={label:?}")));
                }
                Line::from(spans)
            })
            .collect()
    }

    /// Render the detail view for the given steps.
    pub fn render(&self, frame: &mut Frame, area: Rect, steps: &[MemoryStep], theme: &Theme) {
        let block = Block::default().borders(Borders::ALL).title("Markings");

        let paragraph = if steps.is_empty() {
            Paragraph::new("No steps. Press 'a' to add one.")
        } else {
            Paragraph::new(Self::lines(steps, theme))
        };
        let paragraph = paragraph
            .block(block)
            .scroll((self.scroll_offset as u16, 0));

        frame.render_widget(paragraph, area);

        let total_lines = steps.len();
        let visible_lines = area.height.saturating_sub(2) as usize; // Subtract 2 for borders

        // Only show scrollbar if content exceeds visible area
        if total_lines > visible_lines {
            let mut scrollbar_state = ScrollbarState::default()
                .content_length(total_lines)
                .viewport_content_length(visible_lines)
                .position(self.scroll_offset);

            let scrollbar = Scrollbar::default()
                .orientation(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓"));

            frame.render_stateful_widget(scrollbar, area, &mut scrollbar_state);
        }
    }

    /// Scroll up by one line.
    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll down by one line, stopping at the last step.
    pub fn scroll_down(&mut self, total_lines: usize) {
        if self.scroll_offset + 1 < total_lines {
            self.scroll_offset += 1;
        }
    }

    /// Keep the offset inside a list that may have shrunk.
    pub fn clamp(&mut self, total_lines: usize) {
        self.scroll_offset = self.scroll_offset.min(total_lines.saturating_sub(1));
    }
}
