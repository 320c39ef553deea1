use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;
use thiserror::Error;

use crate::models::{Expense, ExpenseCategory, ExpenseDraft};

/// Longest name the edit form accepts.
pub(crate) const NAME_MAX_LEN: usize = 140;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormKind {
    Add,
    Edit { id: i64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormField {
    Name,
    Category,
    Date,
    Amount,
}

impl FormField {
    pub(crate) fn label(&self, kind: FormKind) -> &'static str {
        match (self, kind) {
            (Self::Name, _) => "Name",
            (Self::Category, _) => "Category",
            (Self::Date, FormKind::Add) => "Date",
            (Self::Date, FormKind::Edit { .. }) => "Date of Expense",
            (Self::Amount, _) => "Amount",
        }
    }
}

/// A constraint the form refuses to submit past.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub(crate) enum FormError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },
    #[error("Amount must be a number: {0}")]
    InvalidAmount(String),
    #[error("Amount must be 0 or more")]
    NegativeAmount,
    #[error("Date must be YYYY-MM-DD: {0}")]
    InvalidDate(String),
    #[error("Category must be one of: {0}")]
    UnknownCategory(String),
}

/// Field buffers for the add and edit overlays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ExpenseForm {
    pub(crate) kind: FormKind,
    pub(crate) name: String,
    pub(crate) category: String,
    pub(crate) date: String,
    pub(crate) amount: String,
    pub(crate) focus: usize,
    /// Category of the record being edited. Submitted as-is until the
    /// picker moves it, even when it is outside the fixed set.
    pub(crate) opened_category: String,
}

impl ExpenseForm {
    pub(crate) fn add() -> Self {
        Self {
            kind: FormKind::Add,
            name: String::new(),
            category: String::new(),
            date: String::new(),
            amount: String::new(),
            focus: 0,
            opened_category: String::new(),
        }
    }

    pub(crate) fn edit(expense: &Expense) -> Self {
        Self {
            kind: FormKind::Edit { id: expense.id },
            name: expense.name.clone(),
            category: expense.category.clone(),
            date: expense.date.clone(),
            amount: expense.amount.to_string(),
            focus: 0,
            opened_category: expense.category.clone(),
        }
    }

    /// Field order differs between the two forms.
    pub(crate) fn fields(&self) -> &'static [FormField] {
        match self.kind {
            FormKind::Add => &[
                FormField::Name,
                FormField::Category,
                FormField::Date,
                FormField::Amount,
            ],
            FormKind::Edit { .. } => &[
                FormField::Name,
                FormField::Date,
                FormField::Category,
                FormField::Amount,
            ],
        }
    }

    pub(crate) fn focused(&self) -> FormField {
        self.fields()
            .get(self.focus)
            .copied()
            .unwrap_or(FormField::Name)
    }

    pub(crate) fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.fields().len();
    }

    pub(crate) fn focus_prev(&mut self) {
        let len = self.fields().len();
        self.focus = (self.focus + len - 1) % len;
    }

    pub(crate) fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Category => &self.category,
            FormField::Date => &self.date,
            FormField::Amount => &self.amount,
        }
    }

    fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Category => &mut self.category,
            FormField::Date => &mut self.date,
            FormField::Amount => &mut self.amount,
        }
    }

    pub(crate) fn is_edit(&self) -> bool {
        matches!(self.kind, FormKind::Edit { .. })
    }

    /// The edit form's category is a picker, not a text box.
    pub(crate) fn category_is_picker(&self) -> bool {
        self.is_edit()
    }

    /// Type a character into the focused field, dropping characters the
    /// field's input widget would not accept.
    pub(crate) fn input_char(&mut self, c: char) {
        let field = self.focused();
        let accepted = match field {
            FormField::Amount => c.is_ascii_digit() || c == '.',
            FormField::Date => c.is_ascii_digit() || c == '-',
            FormField::Category => !self.category_is_picker(),
            FormField::Name => true,
        };
        if accepted {
            self.value_mut(field).push(c);
        }
    }

    pub(crate) fn backspace(&mut self) {
        let field = self.focused();
        if field == FormField::Category && self.category_is_picker() {
            return;
        }
        self.value_mut(field).pop();
    }

    /// Step the edit form's category through `ExpenseCategory::all()`. A
    /// category outside the set moves to the first (or last) option.
    pub(crate) fn cycle_category(&mut self, delta: i32) {
        if !self.category_is_picker() {
            return;
        }
        let options = ExpenseCategory::all();
        let len = options.len();
        let next = match ExpenseCategory::position(&self.category) {
            Some(pos) if delta >= 0 => (pos + 1) % len,
            Some(pos) => (pos + len - 1) % len,
            None if delta >= 0 => 0,
            None => len - 1,
        };
        self.category = options[next].as_str().to_string();
    }

    /// Check every field and produce the draft to submit.
    pub(crate) fn validate(&self) -> Result<ExpenseDraft, FormError> {
        for &field in self.fields() {
            if self.value(field).trim().is_empty() {
                return Err(FormError::Required(field.label(self.kind)));
            }
        }

        let name = self.name.trim().to_string();
        if self.is_edit() && name.chars().count() > NAME_MAX_LEN {
            return Err(FormError::TooLong {
                field: FormField::Name.label(self.kind),
                max: NAME_MAX_LEN,
            });
        }

        let category = self.category.trim().to_string();
        if self.category_is_picker()
            && ExpenseCategory::parse(&category).is_none()
            && category != self.opened_category.trim()
        {
            let names: Vec<&str> = ExpenseCategory::all().iter().map(|c| c.as_str()).collect();
            return Err(FormError::UnknownCategory(names.join(", ")));
        }

        let date = self.date.trim().to_string();
        if NaiveDate::parse_from_str(&date, "%Y-%m-%d").is_err() {
            return Err(FormError::InvalidDate(date));
        }

        let amount_str = self.amount.trim();
        let amount = Decimal::from_str(amount_str)
            .map_err(|_| FormError::InvalidAmount(amount_str.to_string()))?;
        if amount < Decimal::ZERO {
            return Err(FormError::NegativeAmount);
        }

        Ok(ExpenseDraft {
            name,
            category,
            date,
            amount,
        })
    }
}
