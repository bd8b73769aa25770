//! UI components for the feedback form
//!
//! Widgets that turn layout view models into ratatui list items and
//! paragraphs. The terminal loop lives in the binary crate's `tui` module.

pub mod colors;
mod components;

pub use components::{
    checkmark_row::Widget as CheckmarkRowWidget, font_style, form_list::Widget as FormListWidget,
    screenshot_preview::Widget as ScreenshotPreviewWidget,
    screenshot_row::Widget as ScreenshotRowWidget, status_bar::StatusContent,
    status_bar::Widget as StatusBarWidget,
};
