//! Feedback form layout
//!
//! Derives the sections and rows of a feedback report form from a
//! configuration snapshot (log collection support, screenshot, theming) and
//! builds the view models a list widget draws for each row.

pub mod config;
pub mod form;
pub mod layout;
pub mod paths;
pub mod ui;

pub use config::{Appearance, Snapshot};
pub use form::FeedbackForm;
pub use layout::{FeedbackFormLayout, Row};
