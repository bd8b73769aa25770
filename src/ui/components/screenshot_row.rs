//! Screenshot preview row widget

use super::{checkmark_row::row_style, font_style};
use crate::layout::ScreenshotCell;
use crate::ui::colors;
use ratatui::{
    style::Style,
    text::{Line, Span, Text},
    widgets::ListItem,
};

/// Widget for the screenshot cell
#[derive(Debug)]
pub struct Widget<'a, 'l> {
    cell: &'a ScreenshotCell<'l>,
    selected: bool,
}

impl<'a, 'l> Widget<'a, 'l> {
    /// Create a widget for `cell`
    #[must_use]
    pub const fn new(cell: &'a ScreenshotCell<'l>) -> Self {
        Self {
            cell,
            selected: false,
        }
    }

    /// Mark the row as highlighted
    #[must_use]
    pub const fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Convert to a list item: the image summary, then the hint if any
    #[must_use]
    pub fn to_list_item(&self) -> ListItem<'static> {
        let image = &self.cell.image;
        let mut lines = vec![Line::from(vec![
            Span::styled("▣ ", Style::default().fg(colors::SELECTED)),
            Span::styled(image.label.clone(), Style::default().fg(colors::TEXT_PRIMARY)),
            Span::styled(
                format!(" ({})", image.dimensions()),
                Style::default().fg(colors::TEXT_DIM),
            ),
        ])];

        if let Some(hint) = &self.cell.hint_text {
            lines.push(Line::from(Span::styled(
                format!("  {hint}"),
                font_style(&self.cell.hint_font).fg(colors::TEXT_DIM),
            )));
        }

        ListItem::new(Text::from(lines)).style(row_style(self.selected))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Appearance, Screenshot, Snapshot};
    use crate::layout::{FeedbackFormLayout, LayoutError};
    use crate::ui::test_support::render_rows;
    use ratatui::widgets::List;
    use std::rc::Rc;

    fn layout(hint: Option<&str>) -> FeedbackFormLayout {
        let appearance = Appearance {
            screenshot_hint: hint.map(str::to_string),
            ..Appearance::default()
        };
        FeedbackFormLayout::build(&Snapshot {
            appearance,
            screenshot: Rc::new(Screenshot::new("capture.png", 390, 844, Vec::new())),
            has_log_collector: false,
            has_log_viewer: false,
            user_enabled_log_collection: false,
            include_screenshot: true,
        })
    }

    #[test]
    fn test_renders_label_and_hint() -> Result<(), LayoutError> {
        let layout = layout(Some("Tap to preview"));
        let cell = layout.screenshot_cell(1, 0)?;
        let item = Widget::new(&cell).to_list_item();
        assert_eq!(item.height(), 2);

        let rows = render_rows(List::new(vec![item]), 40, 2);
        assert_eq!(rows[0], "▣ capture.png (390x844)");
        assert_eq!(rows[1], "  Tap to preview");
        Ok(())
    }

    #[test]
    fn test_no_hint_is_single_line() -> Result<(), LayoutError> {
        let layout = layout(None);
        let cell = layout.screenshot_cell(1, 0)?;
        let item = Widget::new(&cell).selected(true).to_list_item();
        assert_eq!(item.height(), 1);
        Ok(())
    }
}
