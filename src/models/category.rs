/// The fixed category set offered by the edit form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpenseCategory {
    Health,
    Electronics,
    Travel,
    Education,
    Books,
    Others,
}

impl ExpenseCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Health => "Health",
            Self::Electronics => "Electronics",
            Self::Travel => "Travel",
            Self::Education => "Education",
            Self::Books => "Books",
            Self::Others => "Others",
        }
    }

    /// Exact, case-sensitive match against the set. Free-text categories
    /// from the add form return `None`.
    pub fn parse(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|c| c.as_str() == s)
    }

    pub fn all() -> &'static [ExpenseCategory] {
        &[
            Self::Health,
            Self::Electronics,
            Self::Travel,
            Self::Education,
            Self::Books,
            Self::Others,
        ]
    }

    /// Position of `s` in `all()`, if it names one of the set.
    pub fn position(s: &str) -> Option<usize> {
        Self::all().iter().position(|c| c.as_str() == s)
    }
}

impl std::fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
