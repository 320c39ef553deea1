use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::ui::form::{ExpenseForm, FormField, FormKind};
use crate::ui::theme;
use crate::ui::util::centered_rect;

/// Add/edit overlay drawn over the expense table.
pub(crate) fn render(f: &mut Frame, area: Rect, form: &ExpenseForm) {
    let title = match form.kind {
        FormKind::Add => " Add Expense ".to_string(),
        FormKind::Edit { id } => format!(" Edit Expense #{id} "),
    };

    let focused = form.focused();
    let mut lines = vec![Line::from("")];
    for &field in form.fields() {
        let label = format!("  {:<16}", format!("{}:", field.label(form.kind)));
        let value = form.value(field);
        let is_focused = field == focused;

        let shown = if field == FormField::Category && form.category_is_picker() {
            format!("< {value} >")
        } else if is_focused {
            format!("{value}_")
        } else {
            value.to_string()
        };

        let value_style = if is_focused {
            theme::focused_field_style()
        } else {
            theme::normal_style()
        };
        let label_style = if is_focused {
            theme::title_style()
        } else {
            theme::dim_style()
        };

        lines.push(Line::from(vec![
            Span::styled(label, label_style),
            Span::styled(shown, value_style),
        ]));
    }

    let submit = match form.kind {
        FormKind::Add => "Add Expense",
        FormKind::Edit { .. } => "Update",
    };
    lines.push(Line::from(""));
    let mut hint = format!("  Enter {submit} | Esc Cancel | Tab next field");
    if form.category_is_picker() {
        hint.push_str(" | +/- category");
    }
    lines.push(Line::from(Span::styled(hint, theme::dim_style())));

    let popup = centered_rect(area, 72, lines.len() as u16 + 2);
    f.render_widget(Clear, popup);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_style())
        .style(ratatui::style::Style::default().bg(theme::HEADER_BG))
        .title(Span::styled(title, theme::title_style()));
    f.render_widget(Paragraph::new(lines).block(block), popup);
}
