use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::app::{App, InputMode, Screen};
use super::commands;
use super::theme;
use super::util::centered_rect;
use crate::ledger::EditSlot;

pub(crate) const APP_TITLE: &str = "My Personal Finance Management App";

pub(crate) fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Min(5),    // Main content
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Command bar
        ])
        .split(f.area());

    render_title_bar(f, chunks[0], app);
    match app.screen() {
        Screen::Login => super::screens::login::render(f, chunks[1], app),
        Screen::Expenses => {
            super::screens::expenses::render(f, chunks[1], app);
            if let Some(form) = &app.form {
                super::screens::expense_form::render(f, chunks[1], form);
            }
        }
    }
    render_status_bar(f, chunks[2], app);
    render_command_bar(f, chunks[3], app);

    if app.show_help {
        render_help_overlay(f, f.area());
    }
}

fn render_title_bar(f: &mut Frame, area: Rect, app: &App) {
    let session = if app.session.is_authenticated() {
        format!("{} ", app.user)
    } else {
        "not logged in ".to_string()
    };
    let title = format!(" {APP_TITLE}");
    let pad = (area.width as usize).saturating_sub(title.chars().count() + session.chars().count());

    let bar = Paragraph::new(Line::from(vec![
        Span::styled(title, theme::header_style()),
        Span::styled(" ".repeat(pad), theme::header_style()),
        Span::styled(session, Style::default().fg(theme::TEXT_DIM).bg(theme::HEADER_BG)),
    ]));
    f.render_widget(bar, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mode_label = format!(" {} ", app.input_mode);
    let mode_bg = match app.input_mode {
        InputMode::Normal => theme::ACCENT,
        InputMode::Command => theme::GREEN,
        InputMode::Form => theme::YELLOW,
    };
    let mode_style = Style::default()
        .fg(theme::HEADER_BG)
        .bg(mode_bg)
        .add_modifier(Modifier::BOLD);

    let screen = app.screen();
    let mut info = match screen {
        Screen::Login => format!(" {screen}"),
        Screen::Expenses => format!(" {screen} | {} expenses", app.ledger.len()),
    };
    if let EditSlot::Editing(id) = app.ledger.slot() {
        info.push_str(&format!(" | editing #{id}"));
    }

    let right = match (screen, app.input_mode) {
        (Screen::Login, _) => " Enter log in | ? help ",
        (_, InputMode::Form) => " Enter submit | Esc cancel | Tab next ",
        _ => " a add | e edit | :logout | ? help ",
    };

    let used = mode_label.len() + info.len() + right.len();
    let pad = (area.width as usize).saturating_sub(used);

    let bar = Paragraph::new(Line::from(vec![
        Span::styled(&mode_label, mode_style),
        Span::styled(&info, theme::status_bar_style()),
        Span::styled(" ".repeat(pad), theme::status_bar_style()),
        Span::styled(right, theme::status_bar_style()),
    ]));
    f.render_widget(bar, area);
}

fn render_command_bar(f: &mut Frame, area: Rect, app: &App) {
    let (content, cursor_offset) = match app.input_mode {
        InputMode::Command => (
            Line::from(vec![
                Span::styled(":", Style::default().fg(theme::ACCENT)),
                Span::styled(&app.command_input, theme::command_bar_style()),
            ]),
            Some(1 + app.command_input.chars().count() as u16),
        ),
        InputMode::Normal | InputMode::Form => (
            if app.status_message.is_empty() {
                Line::from(Span::styled(
                    " Press : for commands, ? for help",
                    theme::dim_style(),
                ))
            } else if app.input_mode == InputMode::Form {
                Line::from(Span::styled(&app.status_message, theme::error_style()))
            } else {
                Line::from(Span::styled(&app.status_message, theme::command_bar_style()))
            },
            None,
        ),
    };

    let bar = Paragraph::new(content).style(Style::default().bg(theme::COMMAND_BG));
    f.render_widget(bar, area);

    if let Some(offset) = cursor_offset {
        f.set_cursor_position((area.x + offset, area.y));
    }
}

fn render_help_overlay(f: &mut Frame, area: Rect) {
    let mut help_text = vec![
        Line::from(Span::styled(" Fintrack Help ", theme::title_style())),
        Line::from(""),
        Line::from(Span::styled(" Expenses", theme::section_style())),
        Line::from(Span::styled(
            "  j/k or Up/Down   Move cursor           g/G        Top/Bottom",
            theme::normal_style(),
        )),
        Line::from(Span::styled(
            "  a                Add expense           e/Enter    Edit expense",
            theme::normal_style(),
        )),
        Line::from(Span::styled(
            "  Ctrl-d/u         Page Down/Up          Ctrl-q     Quit",
            theme::normal_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(" Forms", theme::section_style())),
        Line::from(Span::styled(
            "  Tab/Shift-Tab    Next/Prev field       Enter      Submit",
            theme::normal_style(),
        )),
        Line::from(Span::styled(
            "  +/- or Left/Right Cycle category       Esc        Cancel",
            theme::normal_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(" Commands", theme::section_style())),
    ];

    // One line per command, skipping short aliases
    let mut seen = std::collections::HashSet::new();
    let mut cmd_lines: Vec<(&str, &str)> = commands::COMMANDS
        .iter()
        .filter(|(name, _)| name.len() > 1)
        .filter(|(_, cmd)| seen.insert(cmd.description))
        .map(|(&name, cmd)| (name, cmd.description))
        .collect();
    cmd_lines.sort_by_key(|(name, _)| *name);
    for (name, desc) in &cmd_lines {
        help_text.push(Line::from(Span::styled(
            format!("  :{name:<10} {desc}"),
            theme::normal_style(),
        )));
    }

    help_text.push(Line::from(""));
    help_text.push(Line::from(Span::styled(
        " Press any key to close ",
        theme::dim_style(),
    )));

    let popup_area = centered_rect(
        area,
        72.min(area.width.saturating_sub(4)),
        (help_text.len() as u16 + 2).min(area.height.saturating_sub(2)),
    );

    f.render_widget(Clear, popup_area);
    let help = Paragraph::new(help_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT))
            .style(Style::default().bg(theme::HEADER_BG)),
    );
    f.render_widget(help, popup_area);
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
