//! Dropdown UI rendering.

use super::Dropdown;
use crate::shared::{truncate_to_width, ThemeColors};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};
use std::fmt::Display;

/// Placeholder shown while nothing is selected.
pub const PLACEHOLDER: &str = "Choose an option";

/// Draw the closed select box.
pub fn draw_dropdown<T: Display>(
    f: &mut Frame<'_>,
    dropdown: &Dropdown<T>,
    area: Rect,
    focused: bool,
    colors: &ThemeColors,
) {
    let border = if focused { colors.yellow } else { colors.bg2 };
    let inner_width = area.width.saturating_sub(4) as usize;

    let content = match dropdown.selected() {
        Some(option) => Span::styled(
            truncate_to_width(&option.to_string(), inner_width),
            Style::default().fg(colors.fg0),
        ),
        None => Span::styled(PLACEHOLDER, Style::default().fg(colors.gray)),
    };

    let arrow = if dropdown.open { " ▲" } else { " ▼" };
    let paragraph = Paragraph::new(Line::from(vec![content])).block(
        Block::default()
            .title(format!(" {} ", dropdown.label))
            .title_bottom(Line::from(arrow).right_aligned())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(colors.bg0)),
    );

    f.render_widget(paragraph, area);
}

/// Draw the open option list as a popup anchored below `anchor`.
pub fn draw_options<T: Display>(
    f: &mut Frame<'_>,
    dropdown: &mut Dropdown<T>,
    anchor: Rect,
    colors: &ThemeColors,
) {
    if !dropdown.open {
        return;
    }

    let screen = f.area();
    let below = anchor.y + anchor.height;
    let room = screen.height.saturating_sub(below);
    let wanted = u16::try_from(dropdown.options().len())
        .unwrap_or(u16::MAX)
        .saturating_add(2);
    let height = wanted.min(room.max(3));
    let y = if room >= 3 { below } else { anchor.y.saturating_sub(height) };
    let area = Rect {
        x: anchor.x,
        y,
        width: anchor.width,
        height,
    }
    .intersection(screen);

    // Adjust scroll to keep cursor visible (subtract 2 for borders)
    let viewport_height = area.height.saturating_sub(2) as usize;
    dropdown.adjust_scroll(viewport_height);

    let inner_width = area.width.saturating_sub(2) as usize;
    let items: Vec<ListItem<'_>> = dropdown
        .options()
        .iter()
        .enumerate()
        .skip(dropdown.scroll)
        .take(viewport_height)
        .map(|(idx, option)| {
            let text = truncate_to_width(&option.to_string(), inner_width);
            let style = if idx == dropdown.cursor() {
                Style::default()
                    .fg(colors.bg0)
                    .bg(colors.yellow)
                    .add_modifier(Modifier::BOLD)
            } else if Some(idx) == dropdown.selected_index() {
                Style::default().fg(colors.aqua)
            } else {
                Style::default().fg(colors.fg0)
            };
            ListItem::new(Line::from(text)).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.yellow))
            .style(Style::default().bg(colors.bg1)),
    );

    f.render_widget(Clear, area);
    f.render_widget(list, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Theme;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(dropdown: &mut Dropdown<String>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(40, 20)).unwrap();
        let colors = ThemeColors::from_theme(&Theme::GruvboxDark);
        terminal
            .draw(|f| {
                let anchor = Rect::new(0, 0, 40, 3);
                draw_dropdown(f, dropdown, anchor, true, &colors);
                draw_options(f, dropdown, anchor, &colors);
            })
            .unwrap();
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

    #[test]
    fn closed_box_shows_placeholder() {
        let mut dropdown = Dropdown::new("Select a file", vec!["tips.csv".to_string()]);
        let text = render(&mut dropdown);
        assert!(text.contains("Select a file"));
        assert!(text.contains(PLACEHOLDER));
    }

    #[test]
    fn huge_option_list_fits_the_screen() {
        let options: Vec<String> = (0..70_000).map(|i| format!("file_{}.csv", i)).collect();
        let mut dropdown = Dropdown::new("Select a file", options);
        dropdown.open();
        for _ in 0..30 {
            dropdown.cursor_down();
        }
        let text = render(&mut dropdown);
        assert!(text.contains("file_30.csv"));
        assert!(!text.contains("file_0.csv"));
    }
}
