//! TUI rendering for the lab simulator using ratatui.

mod input;
mod plot;
mod theme;

pub use input::{InputPump, apply_event, handle_events};
pub use plot::{axis_bounds, axis_labels, plot_bounds};
pub use theme::{Glyphs, Palette, glyphs, palette, styles};

use std::mem;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        Axis, Block as Panel, BorderType, Borders, Cell, Chart, Dataset, GraphType, Paragraph,
        Row, Table, Wrap,
    },
};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use labsim_engine::{
    App, Block, ButtonView, FieldView, NoticeKind, Page, PlotView, Screen, StatusKind, TableView,
};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App, screen: &Screen) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);
    // Clear with background color
    let bg_block = Panel::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let form_height = if screen.fields.is_empty() {
        3
    } else {
        screen.fields.len() as u16 + 4
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1),           // Title
            Constraint::Min(3),              // Body
            Constraint::Length(form_height), // Fields and buttons
            Constraint::Length(1),           // Status bar
        ])
        .split(frame.area());

    draw_title(frame, screen, chunks[0], &palette);
    draw_body(frame, screen, chunks[1], &palette, &glyphs);
    draw_form(frame, screen, chunks[2], &palette, &glyphs);
    draw_status_bar(frame, app, chunks[3], &palette, &glyphs);
}

fn draw_title(frame: &mut Frame, screen: &Screen, area: Rect, palette: &Palette) {
    let title = Paragraph::new(Line::from(Span::styled(
        format!(" {} ", screen.title),
        styles::title(palette),
    )));
    frame.render_widget(title, area);
}

/// Consecutive text-like blocks share one paragraph; tables and plots get their own area.
enum Section<'a> {
    Lines(Vec<Line<'a>>),
    Table(&'a TableView),
    Plot(&'a PlotView),
}

impl Section<'_> {
    fn constraint(&self) -> Constraint {
        match self {
            Section::Lines(lines) => Constraint::Length(lines.len() as u16 + 1),
            // Header, its separator and the two borders.
            Section::Table(table) => Constraint::Length(table.rows.len() as u16 + 4),
            Section::Plot(_) => Constraint::Min(10),
        }
    }
}

fn sections<'a>(screen: &'a Screen, palette: &Palette, glyphs: &Glyphs) -> Vec<Section<'a>> {
    let mut sections = Vec::new();
    let mut lines: Vec<Line<'a>> = Vec::new();
    for block in &screen.blocks {
        match block {
            Block::Text(text) => {
                lines.push(Line::from(Span::styled(
                    text.as_str(),
                    Style::default().fg(palette.text_secondary),
                )));
            }
            Block::Observation { label, value } => lines.push(Line::from(vec![
                Span::styled(
                    format!("{} {label}: ", glyphs.bullet),
                    Style::default().fg(palette.text_secondary),
                ),
                Span::styled(value.as_str(), styles::observation_value(palette)),
            ])),
            Block::Notice { kind, text } => {
                let (prefix, color) = match kind {
                    NoticeKind::Success => (glyphs.success, palette.success),
                    NoticeKind::Info => (glyphs.bullet, palette.accent),
                };
                lines.push(Line::from(Span::styled(
                    format!("{prefix} {text}"),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                )));
            }
            Block::Table(table) => {
                if !lines.is_empty() {
                    sections.push(Section::Lines(mem::take(&mut lines)));
                }
                sections.push(Section::Table(table));
            }
            Block::Plot(plot) => {
                if !lines.is_empty() {
                    sections.push(Section::Lines(mem::take(&mut lines)));
                }
                sections.push(Section::Plot(plot));
            }
        }
    }
    if !lines.is_empty() {
        sections.push(Section::Lines(lines));
    }
    sections
}

fn draw_body(frame: &mut Frame, screen: &Screen, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let sections = sections(screen, palette, glyphs);
    if sections.is_empty() {
        return;
    }
    let areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(sections.iter().map(Section::constraint))
        .split(area);

    for (section, &area) in sections.into_iter().zip(areas.iter()) {
        match section {
            Section::Lines(lines) => {
                frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
            }
            Section::Table(table) => draw_table(frame, table, area, palette),
            Section::Plot(plot) => draw_plot(frame, plot, area, palette, glyphs),
        }
    }
}

fn draw_table(frame: &mut Frame, table: &TableView, area: Rect, palette: &Palette) {
    let widths: Vec<Constraint> = table
        .headers
        .iter()
        .enumerate()
        .map(|(col, header)| {
            let cells = table
                .rows
                .iter()
                .filter_map(|row| row.get(col))
                .map(|cell| cell.width());
            let width = cells.fold(header.width(), usize::max);
            Constraint::Length(width as u16)
        })
        .collect();

    let header = Row::new(
        table
            .headers
            .iter()
            .map(|h| Cell::from(*h).style(styles::table_header(palette))),
    )
    .bottom_margin(1);
    let rows = table.rows.iter().map(|row| {
        Row::new(row.iter().map(|cell| Cell::from(cell.as_str())))
            .style(Style::default().fg(palette.text_primary))
    });

    let widget = Table::new(rows, widths)
        .header(header)
        .column_spacing(2)
        .block(
            Panel::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(palette.bg_border)),
        );
    frame.render_widget(widget, area);
}

fn draw_plot(frame: &mut Frame, plot: &PlotView, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let (x_bounds, y_bounds) = plot_bounds(&plot.points);
    let highlight_point = plot.highlight.as_ref().map(|h| [(h.x, h.y)]);

    let mut datasets = vec![
        Dataset::default()
            .name(plot.series_label)
            .marker(glyphs.line_marker)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(palette.text_primary))
            .data(&plot.points),
    ];
    if let (Some(point), Some(highlight)) = (&highlight_point, &plot.highlight) {
        datasets.push(
            Dataset::default()
                .name(highlight.label.as_str())
                .marker(glyphs.point_marker)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(palette.red))
                .data(point),
        );
    }

    let axis_style = Style::default().fg(palette.text_muted);
    let chart = Chart::new(datasets)
        .hidden_legend_constraints((Constraint::Ratio(1, 1), Constraint::Ratio(1, 1)))
        .block(
            Panel::default()
                .title(Line::from(Span::styled(
                    format!(" {} ", plot.title),
                    styles::title(palette),
                )))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(palette.bg_border)),
        )
        .x_axis(
            Axis::default()
                .title(plot.x_label)
                .style(axis_style)
                .bounds(x_bounds)
                .labels(axis_labels(x_bounds, 1)),
        )
        .y_axis(
            Axis::default()
                .title(plot.y_label)
                .style(axis_style)
                .bounds(y_bounds)
                .labels(axis_labels(y_bounds, 2)),
        );
    frame.render_widget(chart, area);
}

fn draw_form(frame: &mut Frame, screen: &Screen, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let panel = Panel::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.bg_border));
    let inner = panel.inner(area);
    frame.render_widget(panel, area);

    let mut lines: Vec<Line> = screen
        .fields
        .iter()
        .map(|field| field_line(field, palette, glyphs))
        .collect();
    if !lines.is_empty() {
        lines.push(Line::from(""));
    }
    lines.push(button_line(&screen.buttons, palette, glyphs));
    frame.render_widget(Paragraph::new(lines), inner);

    if let Some((row, field)) = screen.fields.iter().enumerate().find(|(_, f)| f.focused) {
        let prefix = field_prefix(field, glyphs).width();
        let typed: usize = field
            .text
            .graphemes(true)
            .take(field.cursor)
            .map(UnicodeWidthStr::width)
            .sum();
        frame.set_cursor_position(Position::new(
            inner.x + (prefix + typed) as u16,
            inner.y + row as u16,
        ));
    }
}

fn field_prefix(field: &FieldView, glyphs: &Glyphs) -> String {
    let marker = if field.focused { glyphs.selected } else { " " };
    format!("{marker} {} ({}-{}): ", field.label, field.min, field.max)
}

fn field_line<'a>(field: &'a FieldView, palette: &Palette, glyphs: &Glyphs) -> Line<'a> {
    let value_style = if field.focused {
        styles::field_focused(palette)
    } else {
        Style::default().fg(palette.text_primary)
    };
    Line::from(vec![
        Span::styled(
            field_prefix(field, glyphs),
            Style::default().fg(palette.text_secondary),
        ),
        Span::styled(field.text.as_str(), value_style),
    ])
}

fn button_line<'a>(buttons: &[ButtonView], palette: &Palette, glyphs: &Glyphs) -> Line<'a> {
    let mut spans = Vec::new();
    for (index, button) in buttons.iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw("  "));
        }
        let (text, style) = if button.focused {
            (
                format!("{} {} ", glyphs.selected, button.label),
                styles::button_focused(palette),
            )
        } else {
            (format!("[ {} ]", button.label), styles::button(palette))
        };
        spans.push(Span::styled(text, style));
    }
    Line::from(spans)
}

pub(crate) fn draw_status_bar(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let line = if let Some(status) = app.status() {
        let (prefix, color) = match status.kind {
            StatusKind::Warning => ("Warning: ", palette.warning),
            StatusKind::Info => ("", palette.text_secondary),
        };
        Line::from(vec![
            Span::raw(" "),
            Span::styled(
                format!("{prefix}{}", status.text),
                Style::default().fg(color),
            ),
        ])
    } else {
        let quit_key = if app.page() == Page::Home { "q" } else { "Ctrl+C" };
        let hints = [
            ("Tab", "focus"),
            ("Enter", "press"),
            (glyphs.step_keys, "step"),
            (quit_key, "quit"),
        ];
        let mut spans = vec![Span::raw(" ")];
        for (index, (key, action)) in hints.into_iter().enumerate() {
            if index > 0 {
                spans.push(Span::styled(
                    format!(" {} ", glyphs.separator),
                    styles::key_hint(palette),
                ));
            }
            spans.push(Span::styled(key, styles::key_highlight(palette)));
            spans.push(Span::styled(format!(" {action}"), styles::key_hint(palette)));
        }
        Line::from(spans)
    };
    frame.render_widget(Paragraph::new(line), area);
}
