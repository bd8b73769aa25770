//! Whole-form list widget

use crate::layout::{Cell, FeedbackFormLayout, LayoutError};
use crate::ui::colors;
use crate::ui::{CheckmarkRowWidget, ScreenshotRowWidget};
use ratatui::{
    style::Style,
    widgets::{Block, Borders, List, ListItem},
};

/// Widget for displaying every row of a layout
#[derive(Debug)]
pub struct Widget<'a> {
    layout: &'a FeedbackFormLayout,
    selected: usize,
}

impl<'a> Widget<'a> {
    /// Create a new form list; `selected` is a flat row index
    #[must_use]
    pub const fn new(layout: &'a FeedbackFormLayout, selected: usize) -> Self {
        Self { layout, selected }
    }

    /// Build one list item per row, with a blank spacer between sections
    ///
    /// # Errors
    ///
    /// Propagates layout errors from building the row view models
    pub fn items(&self) -> Result<Vec<ListItem<'static>>, LayoutError> {
        let mut items = Vec::with_capacity(self.layout.total_row_count() * 2);

        for (index, (section, row)) in self.layout.positions().enumerate() {
            if section > 0 && row == 0 {
                items.push(ListItem::new(""));
            }

            let selected = index == self.selected;
            let item = match self.layout.cell(section, row)? {
                Cell::Checkmark(cell) => CheckmarkRowWidget::new(&cell)
                    .selected(selected)
                    .to_list_item(),
                Cell::Screenshot(cell) => ScreenshotRowWidget::new(&cell)
                    .selected(selected)
                    .to_list_item(),
            };
            items.push(item);
        }

        Ok(items)
    }

    /// Convert to a bordered List widget
    ///
    /// # Errors
    ///
    /// Propagates layout errors from building the row view models
    pub fn to_list(&self) -> Result<List<'static>, LayoutError> {
        Ok(List::new(self.items()?).block(
            Block::default()
                .title(" Report a Problem ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::BORDER))
                .border_type(colors::BORDER_TYPE),
        ))
    }
}
