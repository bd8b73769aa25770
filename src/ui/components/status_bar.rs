//! Status bar widget

use crate::ui::colors;
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Widget for displaying the status bar
#[derive(Debug)]
pub struct Widget {
    content: StatusContent,
}

/// Content type for the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusContent {
    /// Key help
    Normal,
    /// Status message
    Status(String),
}

impl Widget {
    /// Create a new status bar with key help
    #[must_use]
    pub const fn normal() -> Self {
        Self {
            content: StatusContent::Normal,
        }
    }

    /// Create a new status bar with a status message
    #[must_use]
    pub fn status(message: impl Into<String>) -> Self {
        Self {
            content: StatusContent::Status(message.into()),
        }
    }

    /// Create a status bar from existing content
    #[must_use]
    pub const fn from_content(content: StatusContent) -> Self {
        Self { content }
    }

    /// Convert to a Paragraph widget
    #[must_use]
    pub fn to_paragraph(&self) -> Paragraph<'_> {
        let span = match &self.content {
            StatusContent::Status(msg) => Span::styled(
                format!(" {msg} "),
                Style::default().fg(colors::ACCENT_POSITIVE),
            ),
            StatusContent::Normal => Span::styled(
                " ↑/↓ select • Enter toggle • → view logs • q quit ",
                Style::default().fg(colors::TEXT_MUTED),
            ),
        };

        Paragraph::new(Line::from(span)).style(Style::default().bg(Color::Reset))
    }
}
