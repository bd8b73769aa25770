//! Front-end state wrapped around the feedback form

use feedback_form::config::{Screenshot, Snapshot};
use feedback_form::form::{FeedbackForm, FormEvent};
use feedback_form::layout::{FeedbackFormLayout, LayoutError, ScreenshotObserver};
use feedback_form::ui::StatusContent;
use ratatui::crossterm::event::KeyCode;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;

/// Observer that opens the preview overlay when the screenshot is tapped
#[derive(Debug, Default)]
pub struct PreviewSlot {
    shown: RefCell<Option<Rc<Screenshot>>>,
}

impl ScreenshotObserver for PreviewSlot {
    fn on_screenshot_tapped(&self, _layout: &FeedbackFormLayout, image: &Rc<Screenshot>) {
        *self.shown.borrow_mut() = Some(Rc::clone(image));
    }
}

/// Terminal front-end state
#[derive(Debug)]
pub struct App {
    pub form: FeedbackForm,
    pub status: StatusContent,
    pub should_quit: bool,
    preview: Rc<PreviewSlot>,
}

impl App {
    pub fn new(snapshot: Snapshot) -> Self {
        let preview = Rc::new(PreviewSlot::default());
        let mut form = FeedbackForm::new(snapshot);
        form.set_observer(Rc::downgrade(&preview));

        Self {
            form,
            status: StatusContent::Normal,
            should_quit: false,
            preview,
        }
    }

    /// Screenshot currently shown in the preview overlay
    pub fn preview(&self) -> Option<Rc<Screenshot>> {
        self.preview.shown.borrow().clone()
    }

    fn close_preview(&self) {
        *self.preview.shown.borrow_mut() = None;
    }

    pub fn handle_key(&mut self, code: KeyCode) -> Result<(), LayoutError> {
        if self.preview().is_some() {
            if matches!(code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
                self.close_preview();
            }
            return Ok(());
        }

        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Down | KeyCode::Char('j') => self.form.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.form.select_prev(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                let event = self.form.activate()?;
                self.status = status_for(event);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if let Some(event) = self.form.open_detail()? {
                    self.status = status_for(event);
                }
            }
            other => debug!(?other, "Unbound key"),
        }
        Ok(())
    }
}

fn status_for(event: FormEvent) -> StatusContent {
    let message = match event {
        FormEvent::LogCollectionToggled(true) => "Logs will be attached",
        FormEvent::LogCollectionToggled(false) => "Logs will not be attached",
        FormEvent::ScreenshotToggled(true) => "Screenshot will be attached",
        FormEvent::ScreenshotToggled(false) => "Screenshot will not be attached",
        FormEvent::ViewLogsRequested => "Log viewer requested",
        FormEvent::ScreenshotTapped => return StatusContent::Normal,
    };
    StatusContent::Status(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use feedback_form::config::Appearance;

    fn snapshot(collector: bool, include: bool) -> Snapshot {
        Snapshot {
            appearance: Appearance::default(),
            screenshot: Rc::new(Screenshot::new("capture.png", 390, 844, vec![1, 2, 3])),
            has_log_collector: collector,
            has_log_viewer: true,
            user_enabled_log_collection: false,
            include_screenshot: include,
        }
    }

    #[test]
    fn test_quit_keys() -> Result<(), LayoutError> {
        let mut app = App::new(snapshot(false, false));
        app.handle_key(KeyCode::Char('q'))?;
        assert!(app.should_quit);
        Ok(())
    }

    #[test]
    fn test_enter_toggles_and_reports() -> Result<(), LayoutError> {
        let mut app = App::new(snapshot(true, false));
        app.handle_key(KeyCode::Enter)?;
        assert!(app.form.choices().collect_logs);
        assert_eq!(
            app.status,
            StatusContent::Status("Logs will be attached".to_string())
        );
        Ok(())
    }

    #[test]
    fn test_tap_opens_and_q_closes_preview() -> Result<(), LayoutError> {
        let mut app = App::new(snapshot(false, true));
        app.handle_key(KeyCode::Down)?;
        app.handle_key(KeyCode::Enter)?;

        let screenshot = Rc::clone(&app.form.snapshot().screenshot);
        assert!(app.preview().is_some_and(|shown| Rc::ptr_eq(&shown, &screenshot)));

        app.handle_key(KeyCode::Char('q'))?;
        assert!(app.preview().is_none());
        assert!(!app.should_quit);
        Ok(())
    }

    #[test]
    fn test_right_opens_log_viewer() -> Result<(), LayoutError> {
        let mut app = App::new(snapshot(true, false));
        app.handle_key(KeyCode::Right)?;
        assert_eq!(
            app.status,
            StatusContent::Status("Log viewer requested".to_string())
        );
        Ok(())
    }
}
