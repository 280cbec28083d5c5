//! Dashboard layout.
//!
//! Top to bottom: header, file picker, a row holding the head preview next
//! to the axis and plot pickers, the "Generate Plot" button, the figure, and
//! the status and keymap bars. An open picker is drawn last so its option
//! list floats over the rest.

mod preview;

use crate::app::{App, Focus};
use crate::selector::ui::{draw_dropdown, draw_options};
use crate::shared::{draw_keymap, draw_status, ThemeColors};
use crate::viewer::ui::draw_viewer;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Dashboard heading.
pub const HEADER: &str = "📊 Data Visualizer";

/// Label of the generate button.
pub const GENERATE_LABEL: &str = "Generate Plot";

const PICKER_HEIGHT: u16 = 3;

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &mut App) {
    let colors = ThemeColors::from_theme(&app.theme);

    // Preview needs two header lines plus borders on top of its data rows
    let middle_height = u16::try_from(app.layout.preview.rows)
        .unwrap_or(u16::MAX)
        .saturating_add(4)
        .max(PICKER_HEIGHT * 3);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(PICKER_HEIGHT),
            Constraint::Length(middle_height),
            Constraint::Length(PICKER_HEIGHT),
            Constraint::Min(8),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    draw_header(f, chunks[0], &colors);

    let file_area = chunks[1];
    draw_dropdown(f, &app.files, file_area, app.focus == Focus::File, &colors);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[2]);

    preview::draw_preview(f, app, middle[0], &colors);

    let pickers = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(PICKER_HEIGHT),
            Constraint::Length(PICKER_HEIGHT),
            Constraint::Length(PICKER_HEIGHT),
            Constraint::Min(0),
        ])
        .split(middle[1]);

    draw_dropdown(f, &app.x_axis, pickers[0], app.focus == Focus::XAxis, &colors);
    draw_dropdown(f, &app.y_axis, pickers[1], app.focus == Focus::YAxis, &colors);
    draw_dropdown(f, &app.plot, pickers[2], app.focus == Focus::Plot, &colors);

    draw_generate_button(f, chunks[3], app.focus == Focus::Generate, &colors);

    draw_viewer(f, &app.viewer, chunks[4], &app.layout, &colors);

    draw_status(f, chunks[5], &app.status, &colors);
    draw_keymap(f, chunks[6], app.dropdown_open(), &colors);

    // Popups
    match app.focus {
        Focus::File => draw_options(f, &mut app.files, file_area, &colors),
        Focus::XAxis => draw_options(f, &mut app.x_axis, pickers[0], &colors),
        Focus::YAxis => draw_options(f, &mut app.y_axis, pickers[1], &colors),
        Focus::Plot => draw_options(f, &mut app.plot, pickers[2], &colors),
        Focus::Generate => {},
    }
}

fn draw_header(f: &mut Frame<'_>, area: Rect, colors: &ThemeColors) {
    let header = Paragraph::new(Line::from(Span::styled(
        HEADER,
        Style::default().fg(colors.yellow).add_modifier(Modifier::BOLD),
    )))
    .style(Style::default().bg(colors.bg0));

    f.render_widget(header, area);
}

fn draw_generate_button(f: &mut Frame<'_>, area: Rect, focused: bool, colors: &ThemeColors) {
    let width = (GENERATE_LABEL.len() as u16 + 6).min(area.width);
    let button = Rect { width, ..area };

    let (border, text) = if focused {
        (colors.yellow, Style::default().fg(colors.bg0).bg(colors.yellow))
    } else {
        (colors.bg2, Style::default().fg(colors.fg0))
    };

    let paragraph = Paragraph::new(Span::styled(GENERATE_LABEL, text.add_modifier(Modifier::BOLD)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .style(Style::default().bg(colors.bg0)),
        );

    f.render_widget(paragraph, button);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::LayoutConfig;
    use ratatui::{backend::TestBackend, Terminal};
    use std::fs;

    fn screen(app: &mut App) -> String {
        let backend = TestBackend::new(120, 60);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn tips_app() -> (tempfile::TempDir, App) {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("tips.csv"),
            "total_bill,tip,day\n16.99,1.01,Sun\n10.34,1.66,Sat\n",
        )
        .unwrap();
        let app = App::new(dir.path().to_path_buf(), LayoutConfig::default()).unwrap();
        (dir, app)
    }

    #[test]
    fn fresh_dashboard_shows_pickers() {
        let (_dir, mut app) = tips_app();
        let text = screen(&mut app);
        assert!(text.contains("Data Visualizer"));
        assert!(text.contains("Select a file"));
        assert!(text.contains("Select the X-axis"));
        assert!(text.contains("Select a Plot"));
        assert!(text.contains(GENERATE_LABEL));
        assert!(text.contains("Choose an option"));
    }

    #[test]
    fn loaded_file_shows_preview() {
        let (_dir, mut app) = tips_app();
        app.select_file(0);
        let text = screen(&mut app);
        assert!(text.contains("tips.csv (2 rows x 3 columns)"));
        assert!(text.contains("total_bill"));
        assert!(text.contains("16.99"));
        assert!(text.contains("Sat"));
        assert!(text.contains("num"));
        assert!(text.contains("cat"));
    }

    #[test]
    fn oversized_preview_setting_still_draws() {
        let (_dir, mut app) = tips_app();
        app.layout.preview.rows = usize::MAX;
        app.select_file(0);
        let text = screen(&mut app);
        assert!(text.contains("Data Visualizer"));
        assert!(text.contains("total_bill"));
    }

    #[test]
    fn open_picker_lists_options() {
        let (_dir, mut app) = tips_app();
        app.select_file(0);
        app.focus = Focus::XAxis;
        app.activate();
        let text = screen(&mut app);
        assert!(text.contains("None"));
        assert!(text.contains("Enter:select"));
    }
}
