use ratatui::{
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, truncate};

const COLUMNS: [&str; 6] = [
    "Name",
    "Category",
    "Date of Expense",
    "Amount",
    "Updated at",
    "Created by",
];

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let expenses = app.ledger.list();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_style())
        .title(Span::styled(
            format!(" View Expenses ({}) ", expenses.len()),
            theme::title_style(),
        ))
        .title_bottom(Span::styled(
            " a Add Expense | e Edit ",
            theme::dim_style(),
        ));

    if app.ledger.is_empty() {
        let msg = vec![
            Line::from(""),
            Line::from(Span::styled("No expenses yet", theme::dim_style())),
            Line::from(""),
            Line::from(Span::styled(
                "Press a to add one, or :add <date> <amount> <category> <name>",
                theme::dim_style(),
            )),
        ];
        f.render_widget(Paragraph::new(msg).centered().block(block), area);
        return;
    }

    let header = Row::new(
        COLUMNS
            .iter()
            .map(|h| Cell::from(*h).style(theme::header_style())),
    )
    .height(1);

    let rows: Vec<Row> = expenses
        .iter()
        .enumerate()
        .skip(app.expense_scroll)
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, exp)| {
            let style = if i == app.expense_index {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            Row::new(vec![
                Cell::from(truncate(&exp.name, 32)),
                Cell::from(truncate(&exp.category, 16)),
                Cell::from(exp.date.as_str()),
                Cell::from(Span::styled(format_amount(exp.amount), theme::amount_style())),
                Cell::from(exp.updated_at.as_str()),
                Cell::from(truncate(&exp.created_by, 24)),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Min(16),
        Constraint::Length(16),
        Constraint::Length(15),
        Constraint::Length(14),
        Constraint::Length(12),
        Constraint::Length(24),
    ];

    f.render_widget(Table::new(rows, widths).header(header).block(block), area);
}
