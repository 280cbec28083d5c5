//! Head preview of the loaded dataset.

use crate::app::App;
use crate::shared::{format_number, truncate_to_width, ThemeColors};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
    Frame,
};

pub(super) fn draw_preview(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.bg2))
        .style(Style::default().bg(colors.bg0));

    let Some(ref dataset) = app.dataset else {
        let line = match &app.error_message {
            Some(msg) => Line::from(Span::styled(msg.as_str(), Style::default().fg(colors.red))),
            None => Line::from(Span::styled(
                "Select a file to preview its first rows",
                Style::default().fg(colors.gray),
            )),
        };
        let paragraph = Paragraph::new(line)
            .block(block.title(" Preview "))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
        return;
    };

    let preview = &app.layout.preview;
    let width = preview.column_width as usize;
    let rows = dataset.head(preview.rows);

    // Column name over its inferred kind
    let header = Row::new(
        std::iter::once(Cell::from(""))
            .chain(dataset.columns.iter().map(|c| {
                Cell::from(Text::from(vec![
                    Line::from(Span::styled(
                        truncate_to_width(&c.name, width),
                        Style::default().fg(colors.green).add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(c.kind.name(), Style::default().fg(colors.gray))),
                ]))
            }))
            .collect::<Vec<_>>(),
    )
    .height(2);

    let body: Vec<Row<'_>> = rows
        .iter()
        .enumerate()
        .map(|(idx, values)| {
            let cells = std::iter::once(
                Cell::from(idx.to_string()).style(Style::default().fg(colors.gray)),
            )
            .chain(values.iter().map(|v| {
                let style = if v.is_null() {
                    Style::default().fg(colors.gray)
                } else {
                    Style::default().fg(colors.fg0)
                };
                Cell::from(truncate_to_width(&v.to_string(), width)).style(style)
            }));
            Row::new(cells.collect::<Vec<_>>())
        })
        .collect();

    let widths: Vec<Constraint> = std::iter::once(Constraint::Length(preview.index_width))
        .chain(dataset.columns.iter().map(|_| Constraint::Length(preview.column_width)))
        .collect();

    let title = format!(
        " {} ({} rows x {} columns) ",
        dataset.file_name(),
        format_number(dataset.rows),
        dataset.columns.len()
    );

    let table = Table::new(body, widths)
        .header(header)
        .column_spacing(1)
        .block(block.title(title));

    f.render_widget(table, area);
}
