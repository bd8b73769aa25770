//! Screenshot preview overlay widget

use crate::config::Screenshot;
use crate::ui::colors;
use ratatui::{
    style::Style,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Widget shown after the screenshot row is tapped
///
/// Terminals cannot draw the image itself, so the overlay describes it.
#[derive(Debug)]
pub struct Widget<'a> {
    screenshot: &'a Screenshot,
}

impl<'a> Widget<'a> {
    /// Create a new preview widget
    #[must_use]
    pub const fn new(screenshot: &'a Screenshot) -> Self {
        Self { screenshot }
    }

    /// Convert to a Paragraph widget
    #[must_use]
    pub fn to_paragraph(&self) -> Paragraph<'a> {
        let label = Style::default().fg(colors::TEXT_DIM);
        let value = Style::default().fg(colors::TEXT_PRIMARY);
        let lines = vec![
            Line::from(vec![
                Span::styled("File:       ", label),
                Span::styled(self.screenshot.label.as_str(), value),
            ]),
            Line::from(vec![
                Span::styled("Dimensions: ", label),
                Span::styled(self.screenshot.dimensions(), value),
            ]),
            Line::from(vec![
                Span::styled("Size:       ", label),
                Span::styled(format!("{} bytes", self.screenshot.bytes.len()), value),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "Esc close",
                Style::default().fg(colors::TEXT_MUTED),
            )),
        ];

        Paragraph::new(Text::from(lines))
            .block(
                Block::default()
                    .title(" Screenshot ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(colors::SELECTED))
                    .border_type(colors::BORDER_TYPE),
            )
            .style(Style::default().bg(colors::MODAL_BG))
            .wrap(Wrap { trim: false })
    }
}
