//! Row and chrome widgets

pub mod checkmark_row;
pub mod form_list;
pub mod screenshot_preview;
pub mod screenshot_row;
pub mod status_bar;

use crate::config::Font;
use ratatui::style::{Modifier, Style};

/// Terminal style approximating a font
///
/// Terminals have a single face and size, so only weight and slant carry over.
#[must_use]
pub fn font_style(font: &Font) -> Style {
    let mut style = Style::default();
    if font.bold {
        style = style.add_modifier(Modifier::BOLD);
    }
    if font.italic {
        style = style.add_modifier(Modifier::ITALIC);
    }
    style
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_style_plain() {
        assert_eq!(font_style(&Font::default()), Style::default());
    }

    #[test]
    fn test_font_style_modifiers() {
        let font = Font {
            bold: true,
            ..Font::hint()
        };
        let style = font_style(&font);
        assert!(style.add_modifier.contains(Modifier::BOLD));
        assert!(style.add_modifier.contains(Modifier::ITALIC));
    }
}
