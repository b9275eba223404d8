use serde::{Deserialize, Serialize};

/// A single signed monetary movement.
///
/// The sign of `amount` classifies the transaction: positive is income,
/// negative is expense. Transactions are never edited in place; the list
/// they live in is append/remove only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u64,
    pub description: String,
    pub amount: f64,
}

impl Transaction {
    pub fn new(id: u64, description: impl Into<String>, amount: f64) -> Self {
        Self {
            id,
            description: description.into(),
            amount,
        }
    }

    pub fn is_income(&self) -> bool {
        self.amount > 0.0
    }
}
