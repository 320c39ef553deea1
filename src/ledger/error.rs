use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Expense with id {0} not found.")]
    NotFound(i64),
}
