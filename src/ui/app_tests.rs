#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use super::app::*;
use super::form::{ExpenseForm, FormKind};
use crate::ledger::EditSlot;

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn logged_in() -> App {
    let mut app = App::new("me");
    app.login();
    app
}

// ── Session gate ──────────────────────────────────────────────

#[test]
fn test_starts_on_login_screen() {
    let app = App::new("me");
    assert_eq!(app.screen(), Screen::Login);
    assert!(app.running);
}

#[test]
fn test_login_switches_view() {
    let app = logged_in();
    assert_eq!(app.screen(), Screen::Expenses);
    assert_eq!(app.ledger.len(), 3);
    assert_eq!(app.status_message, "Logged in as me");
}

#[test]
fn test_logout_discards_expense_view() {
    let mut app = logged_in();
    app.open_add_form();
    let form = app.form.as_mut().unwrap();
    form.name = "Tea".into();
    form.category = "Food".into();
    form.date = "2024-05-01".into();
    form.amount = "3".into();
    app.submit_form_on(day("2024-05-01"));
    assert_eq!(app.ledger.len(), 4);

    app.logout();
    assert_eq!(app.screen(), Screen::Login);
    app.login();
    assert_eq!(app.ledger.len(), 3);
    assert_eq!(app.expense_index, 0);
}

#[test]
fn test_logout_closes_open_edit() {
    let mut app = logged_in();
    app.open_edit(1);
    app.logout();
    assert!(app.form.is_none());
    assert_eq!(app.ledger.slot(), EditSlot::Idle);
    assert_eq!(app.input_mode, InputMode::Normal);
}

#[test]
fn test_login_twice_keeps_state() {
    let mut app = logged_in();
    app.expense_index = 2;
    app.login();
    assert_eq!(app.expense_index, 2);
    assert_eq!(app.status_message, "Already logged in as me");
}

// ── Add ───────────────────────────────────────────────────────

#[test]
fn test_add_flow() {
    let mut app = logged_in();
    app.open_add_form();
    assert_eq!(app.input_mode, InputMode::Form);
    assert_eq!(app.form.as_ref().unwrap().kind, FormKind::Add);

    let form = app.form.as_mut().unwrap();
    form.name = "Coffee".into();
    form.category = "Food".into();
    form.date = "2024-05-01".into();
    form.amount = "5".into();
    app.submit_form_on(day("2024-05-02"));

    assert!(app.form.is_none());
    assert_eq!(app.input_mode, InputMode::Normal);
    let added = app.ledger.list().last().unwrap();
    assert_eq!(added.id, 4);
    assert_eq!(added.updated_at, "2024-05-02");
    assert_eq!(added.created_by, "me");
    assert_eq!(app.expense_index, 3);
}

#[test]
fn test_add_invalid_keeps_form() {
    let mut app = logged_in();
    app.open_add_form();
    app.submit_form_on(day("2024-05-02"));
    assert!(app.form.is_some());
    assert_eq!(app.input_mode, InputMode::Form);
    assert_eq!(app.status_message, "Name is required");
    assert_eq!(app.ledger.len(), 3);
}

#[test]
fn test_cancel_add() {
    let mut app = logged_in();
    app.open_add_form();
    app.cancel_form();
    assert!(app.form.is_none());
    assert_eq!(app.status_message, "Add cancelled");
    assert_eq!(app.ledger.len(), 3);
}

// ── Edit ──────────────────────────────────────────────────────

#[test]
fn test_edit_flow_changes_only_target() {
    let mut app = logged_in();
    let before = app.ledger.list().to_vec();

    app.open_edit(2);
    assert_eq!(app.ledger.slot(), EditSlot::Editing(2));
    let form = app.form.as_mut().unwrap();
    assert_eq!(form.kind, FormKind::Edit { id: 2 });
    assert_eq!(form.category, "Transport");
    form.name = "Bus".into();
    form.amount = "35".into();
    app.submit_form_on(day("2024-06-01"));

    assert_eq!(app.ledger.slot(), EditSlot::Idle);
    assert!(app.form.is_none());
    let edited = &app.ledger.list()[1];
    assert_eq!(edited.id, 2);
    assert_eq!(edited.name, "Bus");
    assert_eq!(edited.category, "Transport");
    assert_eq!(edited.date, "2024-04-02");
    assert_eq!(edited.amount, dec!(35));
    assert_eq!(edited.updated_at, "2024-06-01");
    assert_eq!(edited.created_by, "user@example.com");
    assert_eq!(app.ledger.list()[0], before[0]);
    assert_eq!(app.ledger.list()[2], before[2]);
    assert_eq!(app.status_message, "Updated expense #2");
}

#[test]
fn test_edit_keeps_category_outside_set() {
    let mut app = logged_in();
    app.open_edit(1);
    app.submit_form_on(day("2024-06-01"));
    assert!(app.form.is_none());
    assert_eq!(app.ledger.slot(), EditSlot::Idle);
    assert_eq!(app.ledger.list()[0].category, "Food");
    assert_eq!(app.status_message, "Updated expense #1");
}

#[test]
fn test_edit_category_moved_into_set() {
    let mut app = logged_in();
    app.open_edit(3);
    app.form.as_mut().unwrap().cycle_category(1);
    app.submit_form_on(day("2024-06-01"));
    assert_eq!(app.ledger.list()[2].category, "Health");
}

#[test]
fn test_edit_unknown_id_is_silent() {
    let mut app = logged_in();
    app.open_edit(99);
    assert!(app.form.is_none());
    assert_eq!(app.ledger.slot(), EditSlot::Idle);
    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(app.status_message, "Logged in as me");
}

#[test]
fn test_cancel_edit_restores_idle() {
    let mut app = logged_in();
    let before = app.ledger.list().to_vec();
    app.open_edit(3);
    app.form.as_mut().unwrap().name = "scratch".into();
    app.cancel_form();
    assert_eq!(app.ledger.slot(), EditSlot::Idle);
    assert_eq!(app.ledger.list(), before.as_slice());
    assert_eq!(app.status_message, "Edit cancelled");
}

#[test]
fn test_edit_selected_uses_cursor() {
    let mut app = logged_in();
    app.expense_index = 1;
    app.open_edit_selected();
    assert_eq!(app.ledger.slot(), EditSlot::Editing(2));
}

#[test]
fn test_no_second_form_while_one_is_open() {
    let mut app = logged_in();
    app.open_edit(1);
    app.open_edit(2);
    assert_eq!(app.ledger.slot(), EditSlot::Editing(1));
    app.open_add_form();
    assert!(app.form.as_ref().unwrap().is_edit());
}

#[test]
fn test_submit_without_form_is_noop() {
    let mut app = logged_in();
    app.submit_form_on(day("2024-06-01"));
    assert_eq!(app.ledger.len(), 3);
}

#[test]
fn test_edit_form_prefill_matches_record() {
    let mut app = logged_in();
    app.open_edit(1);
    let expected = ExpenseForm::edit(&app.ledger.list()[0]);
    assert_eq!(app.form.as_ref().unwrap(), &expected);
}
