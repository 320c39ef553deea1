mod category;
mod expense;

pub use category::ExpenseCategory;
pub use expense::{Expense, ExpenseDraft};

#[cfg(test)]
mod tests;
