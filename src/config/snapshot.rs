//! Read-only configuration snapshot the form layout is derived from

use super::Appearance;
use std::fmt;
use std::rc::Rc;

/// A captured screenshot
///
/// Shared as `Rc<Screenshot>`; observers receive the same allocation the
/// snapshot was captured with.
#[derive(Clone, PartialEq, Eq)]
pub struct Screenshot {
    /// Human readable label (usually the capture file name)
    pub label: String,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Encoded image bytes
    pub bytes: Vec<u8>,
}

impl Screenshot {
    /// Create a screenshot from encoded bytes
    #[must_use]
    pub fn new(label: impl Into<String>, width: u32, height: u32, bytes: Vec<u8>) -> Self {
        Self {
            label: label.into(),
            width,
            height,
            bytes,
        }
    }

    /// Dimensions formatted as `WxH`
    #[must_use]
    pub fn dimensions(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }
}

impl fmt::Debug for Screenshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Screenshot")
            .field("label", &self.label)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}

/// What the log collection subsystem supports
pub trait LogSupport {
    /// Whether logs can be collected and attached to a report
    fn has_log_collector(&self) -> bool;

    /// Whether collected logs can be viewed before sending
    fn has_log_viewer(&self) -> bool;
}

/// Fixed answers for [`LogSupport`]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StaticLogSupport {
    /// Answer for [`LogSupport::has_log_collector`]
    pub collector: bool,
    /// Answer for [`LogSupport::has_log_viewer`]
    pub viewer: bool,
}

impl LogSupport for StaticLogSupport {
    fn has_log_collector(&self) -> bool {
        self.collector
    }

    fn has_log_viewer(&self) -> bool {
        self.viewer
    }
}

/// Everything the form layout is derived from
#[derive(Debug, Clone, PartialEq, Eq)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "each flag is an independent input of the layout"
)]
pub struct Snapshot {
    /// Interface texts and fonts
    pub appearance: Appearance,
    /// The screenshot attached to the report
    pub screenshot: Rc<Screenshot>,
    /// Log collection is available
    pub has_log_collector: bool,
    /// Collected logs can be viewed
    pub has_log_viewer: bool,
    /// The user previously opted into log collection
    pub user_enabled_log_collection: bool,
    /// The screenshot is attached to the report
    pub include_screenshot: bool,
}

impl Snapshot {
    /// Read the collaborators once and freeze their answers
    #[must_use]
    pub fn capture(
        appearance: &Appearance,
        logs: &dyn LogSupport,
        screenshot: Rc<Screenshot>,
        user_enabled_log_collection: bool,
        include_screenshot: bool,
    ) -> Self {
        Self {
            appearance: appearance.clone(),
            screenshot,
            has_log_collector: logs.has_log_collector(),
            has_log_viewer: logs.has_log_viewer(),
            user_enabled_log_collection,
            include_screenshot,
        }
    }
}
