//! Drawing the form into a terminal frame

use super::App;
use feedback_form::layout::LayoutError;
use feedback_form::ui::{FormListWidget, ScreenshotPreviewWidget, StatusBarWidget};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Clear,
};

/// Draw the whole screen
pub fn render(frame: &mut Frame<'_>, app: &App) -> Result<(), LayoutError> {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(frame.area());

    let list = FormListWidget::new(app.form.layout(), app.form.selected()).to_list()?;
    frame.render_widget(list, chunks[0]);
    frame.render_widget(
        StatusBarWidget::from_content(app.status.clone()).to_paragraph(),
        chunks[1],
    );

    if let Some(screenshot) = app.preview() {
        let area = centered_rect_absolute(60, 7, frame.area());
        frame.render_widget(Clear, area);
        frame.render_widget(ScreenshotPreviewWidget::new(&screenshot).to_paragraph(), area);
    }

    Ok(())
}

/// A rect of `percent_x` width and fixed `height`, centered in `area`
fn centered_rect_absolute(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical_padding = area.height.saturating_sub(height) / 2;
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(vertical_padding),
            Constraint::Length(height),
            Constraint::Length(vertical_padding),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use feedback_form::config::{Appearance, Screenshot, Snapshot};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::crossterm::event::KeyCode;
    use std::rc::Rc;

    fn create_test_app(collector: bool, include: bool) -> App {
        App::new(Snapshot {
            appearance: Appearance::default(),
            screenshot: Rc::new(Screenshot::new("capture.png", 390, 844, vec![7; 32])),
            has_log_collector: collector,
            has_log_viewer: true,
            user_enabled_log_collection: false,
            include_screenshot: include,
        })
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer.content.iter().map(ratatui::buffer::Cell::symbol).collect()
    }

    #[test]
    fn test_render_form() -> Result<(), Box<dyn std::error::Error>> {
        let mut terminal = Terminal::new(TestBackend::new(60, 16))?;
        let app = create_test_app(true, true);

        let mut result = Ok(());
        terminal.draw(|frame| result = render(frame, &app))?;
        result?;

        let text = screen_text(&terminal);
        assert!(text.contains("[ ] Collect Logs ›"));
        assert!(text.contains("[x] Include Screenshot"));
        assert!(text.contains("capture.png (390x844)"));
        assert!(text.contains("Enter toggle"));
        Ok(())
    }

    #[test]
    fn test_render_preview_overlay() -> Result<(), Box<dyn std::error::Error>> {
        let mut terminal = Terminal::new(TestBackend::new(60, 16))?;
        let mut app = create_test_app(false, true);
        app.handle_key(KeyCode::Down)?;
        app.handle_key(KeyCode::Enter)?;

        let mut result = Ok(());
        terminal.draw(|frame| result = render(frame, &app))?;
        result?;

        let text = screen_text(&terminal);
        assert!(text.contains("Dimensions: 390x844"));
        assert!(text.contains("32 bytes"));
        Ok(())
    }

    #[test]
    fn test_centered_rect_absolute() {
        let area = Rect::new(0, 0, 100, 20);
        let rect = centered_rect_absolute(60, 6, area);
        assert_eq!(rect.height, 6);
        assert_eq!(rect.y, 7);
        assert_eq!(rect.width, 60);
    }
}
