use crate::model::{Category, Filter, GridCell, month_label};
use crate::tui::state::{AppState, Focus};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, List, ListItem, Paragraph, Row, Table},
};

const EMPTY_LIST_MESSAGE: &str = "No events added to the calendar.";

fn category_color(category: Category) -> Color {
    match category {
        Category::Work => Color::LightBlue,
        Category::Personal => Color::LightGreen,
    }
}

pub fn draw(f: &mut Frame, state: &mut AppState) {
    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    // --- Month header ---
    let cursor = state.store.cursor();
    let header = Paragraph::new(Line::from(vec![
        Span::styled("< p ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            month_label(cursor.year, cursor.month),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(" n >", Style::default().fg(Color::DarkGray)),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, v_chunks[0]);

    let body = if state.details_open {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(v_chunks[1])
    } else {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(100)])
            .split(v_chunks[1])
    };

    draw_grid(f, state, body[0]);
    if state.details_open {
        draw_details(f, state, body[1]);
    }
    draw_footer(f, state, v_chunks[2]);
}

fn draw_grid(f: &mut Frame, state: &AppState, area: Rect) {
    let cursor = state.store.cursor();
    let grid = state.store.grid();

    let header = Row::new(grid.iter().take(7).map(|cell| match cell {
        GridCell::DayName(name) => Cell::from(*name),
        _ => Cell::from(""),
    }))
    .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

    let day_cells: Vec<Cell> = grid
        .iter()
        .skip(7)
        .map(|cell| match *cell {
            GridCell::Day(day) => {
                let date = cursor.date_of(day);
                let marker = if state.store.events().has_events(date) {
                    "•"
                } else {
                    " "
                };
                let mut style = Style::default();
                if date == state.today {
                    style = style.add_modifier(Modifier::UNDERLINED);
                }
                if day == state.selected_day {
                    style = style.bg(Color::Blue).add_modifier(Modifier::BOLD);
                }
                Cell::from(format!("{:>2}{}", day, marker)).style(style)
            }
            _ => Cell::from(""),
        })
        .collect();

    let mut rows = Vec::new();
    let mut iter = day_cells.into_iter().peekable();
    while iter.peek().is_some() {
        let week: Vec<Cell> = iter.by_ref().take(7).collect();
        rows.push(Row::new(week).height(2));
    }

    let border_style = if state.active_focus == Focus::Grid && !state.form_open() {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let table = Table::new(rows, [Constraint::Ratio(1, 7); 7])
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Calendar ")
                .border_style(border_style),
        );
    f.render_widget(table, area);
}

fn draw_details(f: &mut Frame, state: &mut AppState, area: Rect) {
    let border_style = if state.active_focus == Focus::Details && !state.form_open() {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" All Events ")
        .border_style(border_style);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = if state.filter_open {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(inner)
    } else {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(0), Constraint::Min(0)])
            .split(inner)
    };

    if state.filter_open {
        let active = state.store.filter();
        let mut spans = vec![Span::raw("Filter: ")];
        for filter in [Filter::All, Filter::Work, Filter::Personal] {
            let label = format!(" {} ", filter);
            if filter == active {
                spans.push(Span::styled(
                    label,
                    Style::default().bg(Color::Blue).add_modifier(Modifier::BOLD),
                ));
            } else {
                spans.push(Span::styled(label, Style::default().fg(Color::DarkGray)));
            }
        }
        f.render_widget(Paragraph::new(Line::from(spans)), chunks[0]);
    }

    let items: Vec<ListItem> = state
        .store
        .listed()
        .map(|e| {
            ListItem::new(Line::from(vec![
                Span::raw(format!("{}: {} ", e.date, e.description)),
                Span::styled(
                    format!("({})", e.category),
                    Style::default().fg(category_color(e.category)),
                ),
            ]))
        })
        .collect();

    if items.is_empty() {
        let empty = Paragraph::new(EMPTY_LIST_MESSAGE).style(Style::default().fg(Color::DarkGray));
        f.render_widget(empty, chunks[1]);
        return;
    }

    let list = List::new(items).highlight_style(
        Style::default()
            .add_modifier(Modifier::BOLD)
            .bg(Color::DarkGray),
    );
    f.render_stateful_widget(list, chunks[1], &mut state.list_state);
}

fn draw_footer(f: &mut Frame, state: &AppState, footer_area: Rect) {
    if let Some(selection) = state.store.selection() {
        let editing = selection.edit_index.is_some();
        let title = format!(
            " {} {} ({}) ",
            if editing { "Edit Event" } else { "Add Event" },
            selection.date,
            state.form_category
        );
        let prefix = "> ";
        // Scroll sideways so the cursor column always stays inside the box.
        let inner_width = footer_area.width.saturating_sub(2) as usize;
        let cursor_col = prefix.chars().count() + state.cursor_position;
        let offset = (cursor_col + 1).saturating_sub(inner_width);
        let input = Paragraph::new(format!("{}{}", prefix, state.input_buffer))
            .style(Style::default().fg(category_color(state.form_category)))
            .scroll((0, u16::try_from(offset).unwrap_or(u16::MAX)))
            .block(Block::default().borders(Borders::ALL).title(title));
        f.render_widget(input, footer_area);
        let visible_col = u16::try_from(cursor_col.saturating_sub(offset)).unwrap_or(u16::MAX);
        let cursor_x = footer_area.x + 1 + visible_col.min(footer_area.width.saturating_sub(3));
        let cursor_y = footer_area.y + 1;
        f.set_cursor_position((cursor_x, cursor_y));
        return;
    }

    let f_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(footer_area);
    let status = Paragraph::new(state.message.clone())
        .style(Style::default().fg(Color::Cyan))
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::TOP | Borders::BOTTOM)
                .title(" Status "),
        );
    let help_text = match state.active_focus {
        Focus::Details if state.filter_open => "j/k:Move | e:Edit | d:Del | Tab:Filter | v:Close",
        Focus::Details => "j/k:Move | e:Edit | d:Del | f:Filter | v:Close",
        Focus::Grid => "Arrows:Day | p/n:Month | Enter:Add | v:Details | q:Quit",
    };
    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .borders(Borders::RIGHT | Borders::TOP | Borders::BOTTOM)
                .title(" Actions "),
        );
    f.render_widget(status, f_chunks[0]);
    f.render_widget(help, f_chunks[1]);
}
