//! View models built from rows

use super::FeedbackFormLayout;
use crate::config::{Font, Screenshot};
use std::rc::Rc;

/// View model for the toggle rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckmarkCell {
    /// Row title
    pub title: String,
    /// Title font
    pub font: Font,
    /// Draw the checkmark
    pub checked: bool,
    /// Draw a disclosure affordance leading to a detail view
    pub show_disclosure: bool,
}

/// View model for the screenshot row
///
/// Borrows the layout it was built from so [`ScreenshotCell::tap`] can
/// report which layout fired.
#[derive(Debug, Clone)]
pub struct ScreenshotCell<'a> {
    layout: &'a FeedbackFormLayout,
    /// The captured image
    pub image: Rc<Screenshot>,
    /// Hint shown with the preview
    pub hint_text: Option<String>,
    /// Font for the hint
    pub hint_font: Font,
}

impl<'a> ScreenshotCell<'a> {
    pub(super) const fn new(
        layout: &'a FeedbackFormLayout,
        image: Rc<Screenshot>,
        hint_text: Option<String>,
        hint_font: Font,
    ) -> Self {
        Self {
            layout,
            image,
            hint_text,
            hint_font,
        }
    }

    /// Notify the layout's observer that the preview was tapped
    pub fn tap(&self) {
        self.layout.notify_screenshot_tapped(&self.image);
    }

    /// The layout this cell belongs to
    #[must_use]
    pub const fn layout(&self) -> &'a FeedbackFormLayout {
        self.layout
    }
}

/// Either view model, chosen by row kind
#[derive(Debug, Clone)]
pub enum Cell<'a> {
    /// A toggle row
    Checkmark(CheckmarkCell),
    /// The screenshot row
    Screenshot(ScreenshotCell<'a>),
}
