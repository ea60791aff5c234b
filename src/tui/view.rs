// File: src/tui/view.rs
use crate::color_utils;
use crate::editor::{FormField, ShiftForm};
use crate::model::{DAYS_PER_WEEK, ShiftType};
use crate::route::Route;
use crate::store::UiStore;
use crate::tui::state::AppState;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, List, ListItem, Paragraph, Row, Table, Wrap},
};

const KEYPAD: [[&str; 3]; 4] = [
    ["1", "2", "3"],
    ["4", "5", "6"],
    ["7", "8", "9"],
    ["", "0", "⌫"],
];

pub fn draw(f: &mut Frame, state: &AppState, store: &UiStore) {
    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(f.area());

    match state.route {
        Route::Dashboard => draw_dashboard(f, state, v_chunks[0]),
        Route::Admin => draw_admin(f, state, store, v_chunks[0]),
    }

    draw_footer(f, state, v_chunks[1]);

    if state.route == Route::Admin
        && store.is_modal_open()
        && let Some(form) = state.editor.form()
    {
        draw_shift_modal(f, form);
    }
}

fn rgb(c: (f32, f32, f32)) -> Color {
    let (r, g, b) = color_utils::to_rgb8(c);
    Color::Rgb(r, g, b)
}

/// Readable text colour on top of `bg`.
fn text_on((r, g, b): (f32, f32, f32)) -> Color {
    if color_utils::is_dark(r, g, b) {
        Color::White
    } else {
        Color::Black
    }
}

// --- Dashboard ---

fn draw_dashboard(f: &mut Frame, state: &AppState, area: Rect) {
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let welcome = Paragraph::new(vec![
        Line::from(Span::styled(
            state.config.greeting.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "a: admin",
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::UNDERLINED),
        )),
    ])
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(welcome, h_chunks[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(h_chunks[1]);

    let clock = Paragraph::new(vec![
        Line::from(Span::styled(
            state.format.format_date(&state.now),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            state.format.format_time(&state.now),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::TOP | Borders::LEFT | Borders::RIGHT));
    f.render_widget(clock, right[0]);

    let dots: Vec<Span> = state
        .pincode
        .dots()
        .map(|filled| {
            if filled {
                Span::styled(" ● ", Style::default().fg(Color::Green))
            } else {
                Span::styled(" ○ ", Style::default().fg(Color::DarkGray))
            }
        })
        .collect();
    let dots = Paragraph::new(Line::from(dots))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::LEFT | Borders::RIGHT));
    f.render_widget(dots, right[1]);

    let keypad: Vec<Line> = KEYPAD
        .iter()
        .flat_map(|row| {
            let keys: Vec<Span> = row
                .iter()
                .map(|k| {
                    if k.is_empty() {
                        Span::raw("       ")
                    } else {
                        Span::styled(
                            format!("[ {} ]  ", k),
                            Style::default().add_modifier(Modifier::BOLD),
                        )
                    }
                })
                .collect();
            [Line::from(keys), Line::from("")]
        })
        .collect();
    let keypad = Paragraph::new(keypad)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM | Borders::LEFT | Borders::RIGHT));
    f.render_widget(keypad, right[2]);
}

// --- Admin ---

fn draw_admin(f: &mut Frame, state: &AppState, store: &UiStore, area: Rect) {
    let week = state.calendar_week();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let header = Paragraph::new(Line::from(vec![
        Span::styled("b:back  ", Style::default().fg(Color::Blue)),
        Span::styled("c:current  p:prev  n:next  ", Style::default().fg(Color::Blue)),
        Span::raw(format!(
            "{} (week {})",
            week.month_label(),
            week.week_number()
        )),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", store.title())),
    );
    f.render_widget(header, chunks[0]);

    let Some(board) = state.board.as_ref() else {
        return;
    };

    let today = state.now.date_naive();
    let mut header_cells = vec![Cell::from("")];
    header_cells.extend(week.days.iter().map(|day| {
        let mut style = Style::default().add_modifier(Modifier::BOLD);
        if day.date == today {
            style = style.fg(Color::Yellow);
        }
        Cell::from(day.header()).style(style)
    }));

    let rows: Vec<Row> = board
        .staff()
        .iter()
        .enumerate()
        .map(|(row_idx, name)| {
            let avatar = color_utils::avatar_color(name);
            let mut cells = vec![Cell::from(Line::from(vec![
                Span::styled(
                    format!(" {} ", color_utils::initials(name)),
                    Style::default().bg(rgb(avatar)).fg(text_on(avatar)),
                ),
                Span::raw(format!(" {}", name)),
            ]))];

            cells.extend(board.row(name).into_iter().enumerate().map(|(col, slot)| {
                let fill = color_utils::shift_color(slot.map(|a| a.shift_type));
                let text = match slot {
                    Some(a) => format!("{} {}", a.shift_type.short_code(), a.time_range_label()),
                    None => ".".to_string(),
                };
                let mut style = Style::default().bg(rgb(fill)).fg(text_on(fill));
                if row_idx == state.cursor.row && col == state.cursor.col {
                    style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
                }
                Cell::from(text).style(style)
            }));
            Row::new(cells).height(1)
        })
        .collect();

    let mut widths = vec![Constraint::Length(14)];
    widths.extend([Constraint::Ratio(1, DAYS_PER_WEEK as u32); DAYS_PER_WEEK]);

    let table = Table::new(rows, widths)
        .header(Row::new(header_cells))
        .column_spacing(1)
        .block(Block::default().borders(Borders::ALL).title(" Staff "));
    f.render_widget(table, chunks[1]);
}

fn draw_shift_modal(f: &mut Frame, form: &ShiftForm) {
    let area = bottom_sheet(12, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} / day {} ", form.cell.staff, form.cell.weekday + 1))
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(inner);

    let type_focused = form.focus == FormField::ShiftType;
    let items: Vec<ListItem> = ShiftType::ALL
        .iter()
        .map(|t| {
            let selected = *t == form.value.shift_type;
            let marker = if selected { "(•)" } else { "( )" };
            let mut style = Style::default();
            if selected {
                style = style.add_modifier(Modifier::BOLD);
                if type_focused {
                    style = style.bg(Color::Blue);
                }
            }
            ListItem::new(format!("{} {}", marker, t.label())).style(style)
        })
        .collect();
    f.render_widget(
        List::new(items).block(Block::default().borders(Borders::RIGHT).title("Shift")),
        cols[0],
    );

    let editable = form.fields_editable();
    let fmt_time = |t: Option<chrono::NaiveTime>| {
        t.map(|t| t.format("%H:%M").to_string())
            .unwrap_or_else(|| "--:--".to_string())
    };
    let field = |label: &str, value: String, which: FormField| {
        let mut style = if editable {
            Style::default()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        if form.focus == which {
            style = style.add_modifier(Modifier::REVERSED);
        }
        Line::from(vec![
            Span::raw(format!(" {:<12}", label)),
            Span::styled(format!(" {} ", value), style),
        ])
    };

    let mut lines = vec![
        field("Start time", fmt_time(form.value.start_time), FormField::StartTime),
        field("End time", fmt_time(form.value.end_time), FormField::EndTime),
        field(
            "Break time",
            format!("{} min", form.value.break_minutes),
            FormField::BreakMinutes,
        ),
        Line::from(""),
    ];
    if let Some(mins) = form.value.worked_minutes() {
        lines.push(Line::from(format!(" Worked: {}h{:02}", mins / 60, mins % 60)));
    }
    lines.push(Line::from(Span::styled(
        " Enter:Accept changes  Esc:Cancel  Tab:Field  +/-:Adjust",
        Style::default().fg(Color::DarkGray),
    )));

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), cols[1]);
}

fn draw_footer(f: &mut Frame, state: &AppState, area: Rect) {
    let f_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let status = Paragraph::new(state.message.clone())
        .style(Style::default().fg(Color::Cyan))
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::TOP | Borders::BOTTOM)
                .title(" Status "),
        );

    let help_str = match state.route {
        Route::Dashboard => "0-9:Digit Bksp:Clear a:Admin q:Quit",
        Route::Admin if state.editor.is_open() => "↑/↓:Type Tab:Field +/-:Adjust Ret:Accept Esc:Cancel",
        Route::Admin => "arrows:Move Ret:Edit p/n/c:Week b:Back q:Quit",
    };
    let help = Paragraph::new(help_str)
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

/// Full-width strip anchored to the bottom edge, `height` rows tall.
fn bottom_sheet(height: u16, r: Rect) -> Rect {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(height)])
        .split(r);
    layout[1]
}
