//! Screenshot tap notifications

use super::FeedbackFormLayout;
use crate::config::Screenshot;
use std::rc::Rc;

/// Listener for taps on the screenshot row
///
/// Layouts hold their observer through a `Weak`, so registering does not keep
/// the observer alive. Taps that arrive after it is dropped are discarded.
pub trait ScreenshotObserver {
    /// The screenshot row of `layout` was tapped
    fn on_screenshot_tapped(&self, layout: &FeedbackFormLayout, image: &Rc<Screenshot>);
}
