use sea_orm::DeriveIden;

/// An expense.
///
/// `id` is the surrogate key assigned by the store on creation. Whatever a
/// caller puts there before [`ExpenseStore::create`] is discarded.
///
/// [`ExpenseStore::create`]: crate::ExpenseStore::create
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Expense {
    pub id: i64,
    pub title: String,
    pub amount: f64,
    pub note: String,
    /// Ordered labels. Duplicates are kept as given.
    pub tags: Vec<String>,
}

impl Expense {
    /// Build an expense that has not been stored yet.
    pub fn new(
        title: impl Into<String>,
        amount: f64,
        note: impl Into<String>,
        tags: Vec<String>,
    ) -> Self {
        Self {
            id: 0,
            title: title.into(),
            amount,
            note: note.into(),
            tags,
        }
    }
}

/// Result of [`ExpenseStore::list_all`].
///
/// Rows that could not be decoded are left out of `expenses` and counted in
/// `dropped`.
///
/// [`ExpenseStore::list_all`]: crate::ExpenseStore::list_all
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExpenseList {
    pub expenses: Vec<Expense>,
    pub dropped: usize,
}

impl ExpenseList {
    pub fn is_complete(&self) -> bool {
        self.dropped == 0
    }
}

#[derive(DeriveIden, Clone, Copy)]
pub(crate) enum Expenses {
    Table,
    Id,
    Title,
    Amount,
    Note,
    Tags,
}

/// Columns in the order every read path selects them.
pub(crate) const COLUMNS: [Expenses; 5] = [
    Expenses::Id,
    Expenses::Title,
    Expenses::Amount,
    Expenses::Note,
    Expenses::Tags,
];
