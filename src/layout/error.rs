//! Contract violations reported by the form layout

use super::{CellKind, RowKind};
use thiserror::Error;

/// A query the layout cannot answer
///
/// Every variant is a defect in the calling code: indices must come from the
/// layout's own counts, and cell requests from [`RowKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// The section index is past the end of the layout
    #[error("section {section} out of range (layout has {count} sections)")]
    SectionOutOfRange {
        /// Requested section
        section: usize,
        /// Number of sections in the layout
        count: usize,
    },

    /// The row index is past the end of its section
    #[error("row {row} out of range in section {section} (section has {count} rows)")]
    RowOutOfRange {
        /// Section the row was looked up in
        section: usize,
        /// Requested row
        row: usize,
        /// Number of rows in that section
        count: usize,
    },

    /// A flat row index is past the last row of the layout
    #[error("row index {index} out of range (layout has {count} rows)")]
    CursorOutOfRange {
        /// Requested flat row index
        index: usize,
        /// Number of rows across all sections
        count: usize,
    },

    /// A cell was requested for a row of a different kind
    #[error("requested a {expected} cell for a {found} row")]
    CellKindMismatch {
        /// Cell style that was requested
        expected: CellKind,
        /// Kind of the row at that position
        found: RowKind,
    },
}
