use chrono::{Local, NaiveDate};

use super::form::{ExpenseForm, FormKind};
use crate::ledger::ExpenseLedger;
use crate::models::Expense;
use crate::session::Session;

/// Which view is on screen. Follows the session flag; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Login,
    Expenses,
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Login => write!(f, "Login"),
            Self::Expenses => write!(f, "Expenses"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
    Form,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
            Self::Form => write!(f, "FORM"),
        }
    }
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,
    pub(crate) user: String,

    pub(crate) session: Session,
    pub(crate) ledger: ExpenseLedger,

    // Expense table
    pub(crate) expense_index: usize,
    pub(crate) expense_scroll: usize,

    /// Add or edit overlay. An edit form is open exactly when the ledger's
    /// edit slot is.
    pub(crate) form: Option<ExpenseForm>,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new(user: impl Into<String>) -> Self {
        let user = user.into();
        Self {
            running: true,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            status_message: String::new(),
            show_help: false,
            ledger: ExpenseLedger::with_sample_data(user.clone()),
            user,

            session: Session::default(),

            expense_index: 0,
            expense_scroll: 0,

            form: None,

            visible_rows: 20,
        }
    }

    pub(crate) fn screen(&self) -> Screen {
        if self.session.is_authenticated() {
            Screen::Expenses
        } else {
            Screen::Login
        }
    }

    /// Sign in and open a fresh expense view.
    pub(crate) fn login(&mut self) {
        if self.session.is_authenticated() {
            self.set_status(format!("Already logged in as {}", self.user));
            return;
        }
        self.session.login();
        self.ledger = ExpenseLedger::with_sample_data(self.user.clone());
        self.expense_index = 0;
        self.expense_scroll = 0;
        self.form = None;
        self.input_mode = InputMode::Normal;
        self.set_status(format!("Logged in as {}", self.user));
    }

    /// Sign out. The expense view and everything in it is dropped.
    pub(crate) fn logout(&mut self) {
        if !self.session.is_authenticated() {
            return;
        }
        self.ledger.cancel_edit();
        self.form = None;
        self.input_mode = InputMode::Normal;
        self.session.logout();
        self.set_status("Logged out");
    }

    pub(crate) fn selected_expense(&self) -> Option<&Expense> {
        self.ledger.list().get(self.expense_index)
    }

    pub(crate) fn open_add_form(&mut self) {
        if self.form.is_some() {
            return;
        }
        self.form = Some(ExpenseForm::add());
        self.input_mode = InputMode::Form;
        self.set_status("Add Expense");
    }

    /// Open the edit form for `id`. An unknown id is logged and otherwise
    /// ignored.
    pub(crate) fn open_edit(&mut self, id: i64) {
        if self.form.is_some() {
            return;
        }
        match self.ledger.begin_edit(id) {
            Ok(expense) => {
                self.form = Some(ExpenseForm::edit(expense));
                self.input_mode = InputMode::Form;
                self.set_status(format!("Edit Expense #{id}"));
            }
            Err(e) => tracing::error!("{e}"),
        }
    }

    pub(crate) fn open_edit_selected(&mut self) {
        if let Some(id) = self.selected_expense().map(|e| e.id) {
            self.open_edit(id);
        }
    }

    pub(crate) fn submit_form(&mut self) {
        self.submit_form_on(Local::now().date_naive());
    }

    /// Validate and apply the open form, stamping the record with `today`.
    /// On a constraint failure the form stays open and the message goes to
    /// the status line.
    pub(crate) fn submit_form_on(&mut self, today: NaiveDate) {
        let Some(form) = self.form.take() else {
            return;
        };
        let draft = match form.validate() {
            Ok(draft) => draft,
            Err(e) => {
                self.set_status(e.to_string());
                self.form = Some(form);
                return;
            }
        };

        match form.kind {
            FormKind::Add => {
                let id = self.ledger.add(draft, today);
                self.expense_index = self.ledger.len().saturating_sub(1);
                self.expense_scroll = self
                    .expense_index
                    .saturating_sub(self.visible_rows.saturating_sub(1));
                self.set_status(format!("Added expense #{id}"));
            }
            FormKind::Edit { id } => match self.ledger.get(id).cloned() {
                Some(original) => {
                    let stamp = today.format("%Y-%m-%d").to_string();
                    self.ledger.update(original.with_draft(draft, stamp));
                    self.set_status(format!("Updated expense #{id}"));
                }
                None => {
                    tracing::error!(id, "edited expense disappeared");
                    self.ledger.cancel_edit();
                }
            },
        }
        self.input_mode = InputMode::Normal;
    }

    pub(crate) fn cancel_form(&mut self) {
        if let Some(form) = self.form.take() {
            if form.is_edit() {
                self.ledger.cancel_edit();
                self.set_status("Edit cancelled");
            } else {
                self.set_status("Add cancelled");
            }
        }
        self.input_mode = InputMode::Normal;
    }

    pub(crate) fn expense_page(&self) -> usize {
        self.visible_rows.max(1)
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}
