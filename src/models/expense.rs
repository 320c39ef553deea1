use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expense {
    pub id: i64,
    pub name: String,
    /// Free text; only the edit form restricts it to `ExpenseCategory`.
    pub category: String,
    /// Format: "YYYY-MM-DD"
    pub date: String,
    pub amount: Decimal,
    pub updated_at: String,
    pub created_by: String,
}

/// The user-supplied part of an expense, as submitted by a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseDraft {
    pub name: String,
    pub category: String,
    pub date: String,
    pub amount: Decimal,
}

impl Expense {
    pub fn from_draft(id: i64, draft: ExpenseDraft, updated_at: String, created_by: String) -> Self {
        Self {
            id,
            name: draft.name,
            category: draft.category,
            date: draft.date,
            amount: draft.amount,
            updated_at,
            created_by,
        }
    }

    /// Copy of this record with the draft's fields replaced. `id` and
    /// `created_by` are kept.
    pub fn with_draft(&self, draft: ExpenseDraft, updated_at: String) -> Self {
        Self {
            id: self.id,
            name: draft.name,
            category: draft.category,
            date: draft.date,
            amount: draft.amount,
            updated_at,
            created_by: self.created_by.clone(),
        }
    }
}
