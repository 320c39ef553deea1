use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::centered_rect;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("Welcome back", theme::title_style())),
        Line::from(""),
        Line::from(Span::styled(
            format!("You will be signed in as {}", app.user),
            theme::normal_style(),
        )),
        Line::from(""),
        Line::from(Span::styled("Press Enter to log in", theme::dim_style())),
        Line::from(Span::styled("Ctrl-q to quit", theme::dim_style())),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_style())
        .title(Span::styled(" Login ", theme::title_style()));

    let popup = centered_rect(area, 48, lines.len() as u16 + 2);
    f.render_widget(Paragraph::new(lines).centered().block(block), popup);
}
