//! Toggle row widget

use super::font_style;
use crate::layout::CheckmarkCell;
use crate::ui::colors;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::ListItem,
};

/// Marker drawn for a checked row
pub const CHECKED: &str = "[x]";
/// Marker drawn for an unchecked row
pub const UNCHECKED: &str = "[ ]";
/// Disclosure affordance drawn after the title
pub const DISCLOSURE: &str = "›";

/// Widget for one checkmark cell
#[derive(Debug)]
pub struct Widget<'a> {
    cell: &'a CheckmarkCell,
    selected: bool,
}

impl<'a> Widget<'a> {
    /// Create a widget for `cell`
    #[must_use]
    pub const fn new(cell: &'a CheckmarkCell) -> Self {
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

    /// Convert to a list item
    #[must_use]
    pub fn to_list_item(&self) -> ListItem<'static> {
        let (marker, marker_color) = if self.cell.checked {
            (CHECKED, colors::ACCENT_POSITIVE)
        } else {
            (UNCHECKED, colors::TEXT_DIM)
        };

        let mut spans = vec![
            Span::styled(format!("{marker} "), Style::default().fg(marker_color)),
            Span::styled(
                self.cell.title.clone(),
                font_style(&self.cell.font).fg(colors::TEXT_PRIMARY),
            ),
        ];
        if self.cell.show_disclosure {
            spans.push(Span::styled(
                format!(" {DISCLOSURE}"),
                Style::default().fg(colors::TEXT_DIM),
            ));
        }

        ListItem::new(Line::from(spans)).style(row_style(self.selected))
    }
}

pub(super) fn row_style(selected: bool) -> Style {
    if selected {
        Style::default()
            .bg(colors::SURFACE_HIGHLIGHT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}
