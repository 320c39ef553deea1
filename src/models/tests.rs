#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::*;

fn make_expense() -> Expense {
    Expense {
        id: 7,
        name: "Groceries".into(),
        category: "Food".into(),
        date: "2024-04-01".into(),
        amount: dec!(50),
        updated_at: "2024-04-02".into(),
        created_by: "me".into(),
    }
}

fn make_draft() -> ExpenseDraft {
    ExpenseDraft {
        name: "Laptop".into(),
        category: "Electronics".into(),
        date: "2024-06-10".into(),
        amount: dec!(999.99),
    }
}

// ── Expense ───────────────────────────────────────────────────

#[test]
fn test_from_draft() {
    let exp = Expense::from_draft(4, make_draft(), "2024-06-11".into(), "me".into());
    assert_eq!(exp.id, 4);
    assert_eq!(exp.name, "Laptop");
    assert_eq!(exp.category, "Electronics");
    assert_eq!(exp.date, "2024-06-10");
    assert_eq!(exp.amount, dec!(999.99));
    assert_eq!(exp.updated_at, "2024-06-11");
    assert_eq!(exp.created_by, "me");
}

#[test]
fn test_with_draft_keeps_id_and_creator() {
    let original = make_expense();
    let updated = original.with_draft(make_draft(), "2024-06-12".into());
    assert_eq!(updated.id, 7);
    assert_eq!(updated.created_by, "me");
    assert_eq!(updated.name, "Laptop");
    assert_eq!(updated.amount, dec!(999.99));
    assert_eq!(updated.updated_at, "2024-06-12");
    // The source record is untouched
    assert_eq!(original.name, "Groceries");
}

// ── ExpenseCategory ───────────────────────────────────────────

#[test]
fn test_category_all() {
    let all = ExpenseCategory::all();
    assert_eq!(all.len(), 6);
    assert_eq!(all[0], ExpenseCategory::Health);
    assert_eq!(all[5], ExpenseCategory::Others);
}

#[test]
fn test_category_roundtrip() {
    for c in ExpenseCategory::all() {
        assert_eq!(ExpenseCategory::parse(c.as_str()), Some(*c));
    }
}

#[test]
fn test_category_parse_rejects_free_text() {
    assert_eq!(ExpenseCategory::parse("Food"), None);
    assert_eq!(ExpenseCategory::parse("health"), None);
    assert_eq!(ExpenseCategory::parse(""), None);
}

#[test]
fn test_category_position() {
    assert_eq!(ExpenseCategory::position("Health"), Some(0));
    assert_eq!(ExpenseCategory::position("Books"), Some(4));
    assert_eq!(ExpenseCategory::position("Transport"), None);
}

#[test]
fn test_category_display() {
    assert_eq!(format!("{}", ExpenseCategory::Travel), "Travel");
}
