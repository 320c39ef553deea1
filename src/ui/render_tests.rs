#![allow(clippy::unwrap_used)]

use ratatui::{backend::TestBackend, Terminal};

use super::*;

fn draw(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
    terminal.draw(|f| render(f, app)).unwrap();
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_login_screen() {
    let app = App::new("alice");
    let screen = draw(&app);
    assert!(screen.contains(APP_TITLE));
    assert!(screen.contains("Press Enter to log in"));
    assert!(screen.contains("signed in as alice"));
    assert!(!screen.contains("View Expenses"));
}

#[test]
fn test_expense_table() {
    let mut app = App::new("me");
    app.login();
    let screen = draw(&app);
    assert!(screen.contains("View Expenses (3)"));
    assert!(screen.contains("Date of Expense"));
    assert!(screen.contains("Expense 1"));
    assert!(screen.contains("Transport"));
    assert!(screen.contains("$50.00"));
    assert!(screen.contains("user@example.com"));
    assert!(screen.contains("3 expenses"));
}

#[test]
fn test_add_form_overlay() {
    let mut app = App::new("me");
    app.login();
    app.open_add_form();
    let screen = draw(&app);
    assert!(screen.contains("Add Expense"));
    assert!(screen.contains("Amount:"));
    assert!(screen.contains("FORM"));
}

#[test]
fn test_edit_form_overlay() {
    let mut app = App::new("me");
    app.login();
    app.open_edit(2);
    let screen = draw(&app);
    assert!(screen.contains("Edit Expense #2"));
    assert!(screen.contains("Date of Expense:"));
    assert!(screen.contains("< Transport >"));
}

#[test]
fn test_help_overlay_lists_commands() {
    let mut app = App::new("me");
    app.show_help = true;
    let screen = draw(&app);
    assert!(screen.contains("Fintrack Help"));
    assert!(screen.contains(":logout"));
    assert!(screen.contains(":edit"));
}

#[test]
fn test_small_terminal_does_not_panic() {
    let mut app = App::new("me");
    app.login();
    app.open_edit(1);
    app.show_help = true;
    let mut terminal = Terminal::new(TestBackend::new(20, 6)).unwrap();
    terminal.draw(|f| render(f, &app)).unwrap();
}
