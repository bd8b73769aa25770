//! Rows and sections of the feedback form

use crate::config::{Font, Screenshot};
use std::fmt;
use std::rc::Rc;

/// Title of the screenshot inclusion toggle
pub const INCLUDE_SCREENSHOT_TITLE: &str = "Include Screenshot";

/// One renderable unit of the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    /// Preview of the captured screenshot
    Screenshot {
        /// The captured image
        image: Rc<Screenshot>,
        /// Hint shown with the preview
        hint_text: Option<String>,
        /// Font for the hint
        hint_font: Font,
    },
    /// Toggle for attaching collected logs
    CollectLogs {
        /// Logs will be attached
        enabled: bool,
        /// Row title
        title: String,
        /// Title font
        font: Font,
        /// Logs can be opened for viewing
        can_view: bool,
    },
    /// Toggle for attaching the screenshot
    IncludeScreenshot {
        /// Screenshot will be attached
        enabled: bool,
        /// Row title
        title: String,
        /// Title font
        font: Font,
    },
}

impl Row {
    /// The kind of this row
    #[must_use]
    pub const fn kind(&self) -> RowKind {
        match self {
            Self::Screenshot { .. } => RowKind::Screenshot,
            Self::CollectLogs { .. } => RowKind::CollectLogs,
            Self::IncludeScreenshot { .. } => RowKind::IncludeScreenshot,
        }
    }
}

/// Discriminant of [`Row`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowKind {
    /// [`Row::Screenshot`]
    Screenshot,
    /// [`Row::CollectLogs`]
    CollectLogs,
    /// [`Row::IncludeScreenshot`]
    IncludeScreenshot,
}

impl RowKind {
    /// Cell style used to present rows of this kind
    #[must_use]
    pub const fn cell_kind(self) -> CellKind {
        match self {
            Self::Screenshot => CellKind::Screenshot,
            Self::CollectLogs | Self::IncludeScreenshot => CellKind::Checkmark,
        }
    }
}

impl fmt::Display for RowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Screenshot => "screenshot",
            Self::CollectLogs => "collect-logs",
            Self::IncludeScreenshot => "include-screenshot",
        };
        write!(f, "{s}")
    }
}

/// Cell styles the list can present
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// Title with a checkmark and optional disclosure
    Checkmark,
    /// Screenshot preview with hint
    Screenshot,
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Checkmark => "checkmark",
            Self::Screenshot => "screenshot",
        };
        write!(f, "{s}")
    }
}

/// A group of rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    rows: Vec<Row>,
}

impl Section {
    /// A section holding a single row
    #[must_use]
    pub fn single(row: Row) -> Self {
        Self { rows: vec![row] }
    }

    /// Rows in display order
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the section has no rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
