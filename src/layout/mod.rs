//! Section and row layout of the feedback form
//!
//! A [`FeedbackFormLayout`] is derived once from a [`Snapshot`] and never
//! changes afterwards. The list widget asks it how many sections and rows
//! exist and which view model to draw for each position.
//!
//! Sections always appear in this order, each holding a single row:
//!
//! 1. collect logs, when a log collector is available
//! 2. include screenshot, always
//! 3. the screenshot preview, when the screenshot is included

mod cell;
mod error;
mod observer;
mod row;

pub use cell::{Cell, CheckmarkCell, ScreenshotCell};
pub use error::LayoutError;
pub use observer::ScreenshotObserver;
pub use row::{CellKind, INCLUDE_SCREENSHOT_TITLE, Row, RowKind, Section};

use crate::config::{Screenshot, Snapshot};
use std::rc::{Rc, Weak};
use tracing::{debug, error, warn};

/// The immutable sections of one presentation of the form
#[derive(Debug)]
pub struct FeedbackFormLayout {
    sections: Vec<Section>,
    observer: Option<Weak<dyn ScreenshotObserver>>,
}

impl FeedbackFormLayout {
    /// Derive the sections from a configuration snapshot
    #[must_use]
    pub fn build(snapshot: &Snapshot) -> Self {
        let appearance = &snapshot.appearance;
        let mut sections = Vec::with_capacity(3);

        if snapshot.has_log_collector {
            sections.push(Section::single(Row::CollectLogs {
                enabled: snapshot.user_enabled_log_collection,
                title: appearance.collect_logs_title.clone(),
                font: appearance.body_font.clone(),
                can_view: snapshot.has_log_viewer,
            }));
        }

        sections.push(Section::single(Row::IncludeScreenshot {
            enabled: snapshot.include_screenshot,
            title: INCLUDE_SCREENSHOT_TITLE.to_string(),
            font: appearance.body_font.clone(),
        }));

        if snapshot.include_screenshot {
            sections.push(Section::single(Row::Screenshot {
                image: Rc::clone(&snapshot.screenshot),
                hint_text: appearance.screenshot_hint.clone(),
                hint_font: appearance.hint_font.clone(),
            }));
        }

        debug!(
            sections = sections.len(),
            log_collector = snapshot.has_log_collector,
            include_screenshot = snapshot.include_screenshot,
            "Built feedback form layout"
        );

        Self {
            sections,
            observer: None,
        }
    }

    /// Register the observer notified when the screenshot row is tapped
    ///
    /// Replaces any previous observer. The layout only keeps a weak handle.
    pub fn set_observer<O: ScreenshotObserver + 'static>(&mut self, observer: Weak<O>) {
        let observer: Weak<dyn ScreenshotObserver> = observer;
        self.set_observer_handle(observer);
    }

    /// Builder form of [`Self::set_observer`]
    #[must_use]
    pub fn with_observer<O: ScreenshotObserver + 'static>(mut self, observer: Weak<O>) -> Self {
        self.set_observer(observer);
        self
    }

    pub(crate) fn set_observer_handle(&mut self, observer: Weak<dyn ScreenshotObserver>) {
        self.observer = Some(observer);
    }

    /// The registered observer handle, if any
    #[must_use]
    pub const fn observer(&self) -> Option<&Weak<dyn ScreenshotObserver>> {
        self.observer.as_ref()
    }

    /// All sections in display order
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Number of sections
    #[must_use]
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Number of rows across all sections
    #[must_use]
    pub fn total_row_count(&self) -> usize {
        self.sections.iter().map(Section::len).sum()
    }

    /// Number of rows in `section`
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::SectionOutOfRange`] for an unknown section
    pub fn row_count(&self, section: usize) -> Result<usize, LayoutError> {
        self.section(section).map(Section::len)
    }

    /// The row at `(section, row)`
    ///
    /// # Errors
    ///
    /// Returns an out-of-range error when either index is invalid
    pub fn row_at(&self, section: usize, row: usize) -> Result<&Row, LayoutError> {
        let rows = self.section(section)?.rows();
        rows.get(row).ok_or_else(|| {
            let err = LayoutError::RowOutOfRange {
                section,
                row,
                count: rows.len(),
            };
            error!(%err, "Invalid row lookup");
            err
        })
    }

    /// Every valid `(section, row)` position in display order
    pub fn positions(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.sections
            .iter()
            .enumerate()
            .flat_map(|(s, section)| (0..section.len()).map(move |r| (s, r)))
    }

    /// Checkmark view model for a toggle row
    ///
    /// # Errors
    ///
    /// Returns an out-of-range error for invalid indices, and
    /// [`LayoutError::CellKindMismatch`] if the row is the screenshot preview
    pub fn checkmark_cell(&self, section: usize, row: usize) -> Result<CheckmarkCell, LayoutError> {
        match self.row_at(section, row)? {
            Row::CollectLogs {
                enabled,
                title,
                font,
                can_view,
            } => Ok(CheckmarkCell {
                title: title.clone(),
                font: font.clone(),
                checked: *enabled,
                show_disclosure: *can_view,
            }),
            Row::IncludeScreenshot {
                enabled,
                title,
                font,
            } => Ok(CheckmarkCell {
                title: title.clone(),
                font: font.clone(),
                checked: *enabled,
                show_disclosure: false,
            }),
            other @ Row::Screenshot { .. } => Err(mismatch(CellKind::Checkmark, other.kind())),
        }
    }

    /// Screenshot view model for the preview row
    ///
    /// # Errors
    ///
    /// Returns an out-of-range error for invalid indices, and
    /// [`LayoutError::CellKindMismatch`] if the row is a toggle
    pub fn screenshot_cell(
        &self,
        section: usize,
        row: usize,
    ) -> Result<ScreenshotCell<'_>, LayoutError> {
        match self.row_at(section, row)? {
            Row::Screenshot {
                image,
                hint_text,
                hint_font,
            } => Ok(ScreenshotCell::new(
                self,
                Rc::clone(image),
                hint_text.clone(),
                hint_font.clone(),
            )),
            other @ (Row::CollectLogs { .. } | Row::IncludeScreenshot { .. }) => {
                Err(mismatch(CellKind::Screenshot, other.kind()))
            }
        }
    }

    /// The view model matching the row at `(section, row)`
    ///
    /// # Errors
    ///
    /// Returns an out-of-range error when either index is invalid
    pub fn cell(&self, section: usize, row: usize) -> Result<Cell<'_>, LayoutError> {
        match self.row_at(section, row)?.kind().cell_kind() {
            CellKind::Checkmark => self.checkmark_cell(section, row).map(Cell::Checkmark),
            CellKind::Screenshot => self.screenshot_cell(section, row).map(Cell::Screenshot),
        }
    }

    fn section(&self, section: usize) -> Result<&Section, LayoutError> {
        self.sections.get(section).ok_or_else(|| {
            let err = LayoutError::SectionOutOfRange {
                section,
                count: self.sections.len(),
            };
            error!(%err, "Invalid section lookup");
            err
        })
    }

    fn notify_screenshot_tapped(&self, image: &Rc<Screenshot>) {
        match self.observer.as_ref().and_then(Weak::upgrade) {
            Some(observer) => {
                debug!(label = %image.label, "Screenshot tapped");
                observer.on_screenshot_tapped(self, image);
            }
            None => warn!(label = %image.label, "Screenshot tapped with no observer, dropping"),
        }
    }
}

fn mismatch(expected: CellKind, found: RowKind) -> LayoutError {
    let err = LayoutError::CellKindMismatch { expected, found };
    error!(%err, "Cell requested for the wrong row kind");
    err
}
