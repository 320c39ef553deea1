mod error;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{Expense, ExpenseDraft};

pub use error::LedgerError;

/// Which record, if any, is open for in-place editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditSlot {
    #[default]
    Idle,
    Editing(i64),
}

/// In-memory, insertion-ordered expense collection with a single edit slot.
///
/// Records are never removed, so "last id + 1" stays unique.
#[derive(Debug, Clone)]
pub struct ExpenseLedger {
    expenses: Vec<Expense>,
    slot: EditSlot,
    creator: String,
}

impl ExpenseLedger {
    pub fn new(creator: impl Into<String>) -> Self {
        Self {
            expenses: Vec::new(),
            slot: EditSlot::Idle,
            creator: creator.into(),
        }
    }

    /// A ledger holding the three starter records a fresh session shows.
    pub fn with_sample_data(creator: impl Into<String>) -> Self {
        let sample = |id: i64, category: &str, date: &str, amount: i64, updated_at: &str, by: &str| {
            Expense {
                id,
                name: format!("Expense {id}"),
                category: category.into(),
                date: date.into(),
                amount: Decimal::from(amount),
                updated_at: updated_at.into(),
                created_by: by.into(),
            }
        };
        let mut ledger = Self::new(creator);
        ledger.expenses = vec![
            sample(1, "Food", "2024-04-01", 50, "2024-04-02", "me"),
            sample(2, "Transport", "2024-04-02", 30, "2024-04-03", "user@example.com"),
            sample(3, "Entertainment", "2024-04-03", 20, "2024-04-04", "me"),
        ];
        ledger
    }

    pub fn list(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// One more than the last record's id (not the maximum), or 1.
    pub fn next_id(&self) -> i64 {
        self.expenses.last().map_or(1, |e| e.id + 1)
    }

    /// Append a new record stamped with `today`. Returns its id.
    pub fn add(&mut self, draft: ExpenseDraft, today: NaiveDate) -> i64 {
        let id = self.next_id();
        let expense = Expense::from_draft(
            id,
            draft,
            today.format("%Y-%m-%d").to_string(),
            self.creator.clone(),
        );
        tracing::info!(id, name = %expense.name, amount = %expense.amount, "expense added");
        self.expenses.push(expense);
        id
    }

    pub fn slot(&self) -> EditSlot {
        self.slot
    }

    /// The record currently open for editing.
    pub fn editing(&self) -> Option<&Expense> {
        match self.slot {
            EditSlot::Idle => None,
            EditSlot::Editing(id) => self.get(id),
        }
    }

    /// Open the record with `id` for editing. Leaves all state untouched
    /// when no such record exists.
    pub fn begin_edit(&mut self, id: i64) -> Result<&Expense, LedgerError> {
        let idx = self
            .expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or(LedgerError::NotFound(id))?;
        self.slot = EditSlot::Editing(id);
        tracing::debug!(id, "editing expense");
        Ok(&self.expenses[idx])
    }

    /// Replace the record whose id matches `expense.id` and close the edit
    /// slot. Returns whether a record was replaced.
    pub fn update(&mut self, expense: Expense) -> bool {
        self.slot = EditSlot::Idle;
        let id = expense.id;
        match self.expenses.iter_mut().find(|e| e.id == id) {
            Some(slot) => {
                *slot = expense;
                tracing::info!(id, "expense updated");
                true
            }
            None => {
                tracing::warn!(id, "update matched no expense");
                false
            }
        }
    }

    pub fn cancel_edit(&mut self) {
        if let EditSlot::Editing(id) = self.slot {
            tracing::debug!(id, "edit cancelled");
        }
        self.slot = EditSlot::Idle;
    }
}
