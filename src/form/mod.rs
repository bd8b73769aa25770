//! Interactive state of one feedback form presentation
//!
//! [`FeedbackForm`] keeps the current [`Snapshot`], the layout derived from
//! it and a row cursor. Toggling a row changes the snapshot and derives a new
//! layout; the layout itself is never edited.

use crate::config::Snapshot;
use crate::layout::{Cell, FeedbackFormLayout, LayoutError, Row, ScreenshotObserver};
use serde::Serialize;
use std::rc::Weak;
use tracing::{debug, info};

/// Outcome of acting on the selected row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    /// Log collection was switched to the given value
    LogCollectionToggled(bool),
    /// Screenshot inclusion was switched to the given value
    ScreenshotToggled(bool),
    /// The screenshot preview was tapped and the observer notified
    ScreenshotTapped,
    /// The user asked to see the collected logs
    ViewLogsRequested,
}

/// What the user chose to attach to the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeedbackChoices {
    /// Attach collected logs
    pub collect_logs: bool,
    /// Attach the screenshot
    pub include_screenshot: bool,
}

/// A presented feedback form
#[derive(Debug)]
pub struct FeedbackForm {
    snapshot: Snapshot,
    layout: FeedbackFormLayout,
    selected: usize,
}

impl FeedbackForm {
    /// Present a form for `snapshot`
    #[must_use]
    pub fn new(snapshot: Snapshot) -> Self {
        let layout = FeedbackFormLayout::build(&snapshot);
        Self {
            snapshot,
            layout,
            selected: 0,
        }
    }

    /// Register the screenshot observer on this and every rebuilt layout
    pub fn set_observer<O: ScreenshotObserver + 'static>(&mut self, observer: Weak<O>) {
        self.layout.set_observer(observer);
    }

    /// The current layout
    #[must_use]
    pub const fn layout(&self) -> &FeedbackFormLayout {
        &self.layout
    }

    /// The snapshot the current layout was derived from
    #[must_use]
    pub const fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Flat index of the highlighted row
    #[must_use]
    pub const fn selected(&self) -> usize {
        self.selected
    }

    /// `(section, row)` of the highlighted row
    #[must_use]
    pub fn selected_position(&self) -> Option<(usize, usize)> {
        self.layout.positions().nth(self.selected)
    }

    /// Move the highlight down, wrapping to the top
    pub fn select_next(&mut self) {
        let count = self.layout.total_row_count();
        if count > 0 {
            self.selected = (self.selected + 1) % count;
        } else {
            self.selected = 0;
        }
    }

    /// Move the highlight up, wrapping to the bottom
    pub fn select_prev(&mut self) {
        let count = self.layout.total_row_count();
        if count == 0 {
            self.selected = 0;
            return;
        }

        if self.selected == 0 {
            self.selected = count - 1;
        } else {
            self.selected -= 1;
        }
    }

    /// Act on the highlighted row: flip a toggle or tap the screenshot
    ///
    /// # Errors
    ///
    /// Returns a layout error if the cursor no longer points at a row
    pub fn activate(&mut self) -> Result<FormEvent, LayoutError> {
        let (section, row) = self.position()?;

        let event = match self.layout.row_at(section, row)? {
            Row::CollectLogs { enabled, .. } => {
                let enabled = !*enabled;
                self.snapshot.user_enabled_log_collection = enabled;
                FormEvent::LogCollectionToggled(enabled)
            }
            Row::IncludeScreenshot { enabled, .. } => {
                let enabled = !*enabled;
                self.snapshot.include_screenshot = enabled;
                FormEvent::ScreenshotToggled(enabled)
            }
            Row::Screenshot { .. } => {
                self.layout.screenshot_cell(section, row)?.tap();
                return Ok(FormEvent::ScreenshotTapped);
            }
        };

        info!(?event, "Feedback form toggled");
        self.rebuild();
        Ok(event)
    }

    /// Follow the disclosure of the highlighted row, if it has one
    ///
    /// # Errors
    ///
    /// Returns a layout error if the cursor no longer points at a row
    pub fn open_detail(&self) -> Result<Option<FormEvent>, LayoutError> {
        let (section, row) = self.position()?;
        match self.layout.cell(section, row)? {
            Cell::Checkmark(cell) if cell.show_disclosure => {
                debug!(title = %cell.title, "Opening row detail");
                Ok(Some(FormEvent::ViewLogsRequested))
            }
            Cell::Checkmark(_) | Cell::Screenshot(_) => Ok(None),
        }
    }

    /// The user's current selections
    #[must_use]
    pub const fn choices(&self) -> FeedbackChoices {
        FeedbackChoices {
            collect_logs: self.snapshot.has_log_collector
                && self.snapshot.user_enabled_log_collection,
            include_screenshot: self.snapshot.include_screenshot,
        }
    }

    fn position(&self) -> Result<(usize, usize), LayoutError> {
        self.selected_position()
            .ok_or(LayoutError::CursorOutOfRange {
                index: self.selected,
                count: self.layout.total_row_count(),
            })
    }

    fn rebuild(&mut self) {
        let observer = self.layout.observer().cloned();
        let mut layout = FeedbackFormLayout::build(&self.snapshot);
        if let Some(observer) = observer {
            layout.set_observer_handle(observer);
        }
        self.layout = layout;
    }
}
