//! Keymap help bar UI component.

use crate::shared::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the keymap help bar.
pub fn draw_keymap(f: &mut Frame<'_>, area: Rect, dropdown_open: bool, colors: &ThemeColors) {
    let keymap_text = if dropdown_open {
        "jk/↑↓:choose | Enter:select | Esc:cancel"
    } else {
        "Tab/S-Tab:focus | Enter:open/press | g:generate | c:palette | T:theme | q:quit"
    };

    let paragraph =
        Paragraph::new(keymap_text).style(Style::default().fg(colors.fg0).bg(colors.bg0));

    f.render_widget(paragraph, area);
}
