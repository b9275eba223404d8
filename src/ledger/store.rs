use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::StoreError;
use crate::storage::{Result, StorageBackend, LEDGER_KEY};

use super::Transaction;

/// Derived totals over the transaction list, rounded for display.
///
/// `income` and `expense` are both non-negative; `expense` reports the
/// magnitude of negative amounts. `balance == income - expense` holds for
/// every reachable state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LedgerSummary {
    pub balance: f64,
    pub income: f64,
    pub expense: f64,
}

/// Owns the ordered transaction list and persists it after every mutation.
pub struct LedgerStore<B: StorageBackend> {
    backend: B,
    transactions: Vec<Transaction>,
    next_id: u64,
}

impl<B: StorageBackend> LedgerStore<B> {
    /// Loads the persisted list from `backend`. Corrupt or missing data
    /// recovers as an empty ledger rather than an error.
    pub fn load(backend: B) -> Result<Self> {
        let transactions = match backend.read(LEDGER_KEY)? {
            Some(raw) => match serde_json::from_str::<Vec<Transaction>>(&raw) {
                Ok(list) => list,
                Err(err) => {
                    warn!(%err, "discarding corrupt ledger data");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
        let next_id = transactions.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        Ok(Self {
            backend,
            transactions,
            next_id,
        })
    }

    /// Validates and appends a new transaction, assigning it a fresh id.
    ///
    /// `amount_input` is the raw user-entered amount string; it must parse
    /// as a finite number. The list is persisted before this returns.
    pub fn add_transaction(
        &mut self,
        description: &str,
        amount_input: &str,
    ) -> Result<&Transaction> {
        let description = description.trim();
        if description.is_empty() {
            return Err(StoreError::InvalidInput("description is required".into()));
        }
        let amount_input = amount_input.trim();
        if amount_input.is_empty() {
            return Err(StoreError::InvalidInput("amount is required".into()));
        }
        let amount: f64 = amount_input
            .parse()
            .map_err(|_| StoreError::InvalidInput(format!("`{amount_input}` is not a number")))?;
        if !amount.is_finite() {
            return Err(StoreError::InvalidInput(format!(
                "`{amount_input}` is not a finite amount"
            )));
        }

        let id = self.next_id;
        self.next_id += 1;
        self.transactions.push(Transaction::new(id, description, amount));
        self.persist()?;
        debug!(id, amount, "transaction added");
        Ok(self.transactions.last().expect("just pushed"))
    }

    /// Removes the transaction with `id`. Absent ids are a no-op.
    pub fn remove_transaction(&mut self, id: u64) -> Result<()> {
        let before = self.transactions.len();
        self.transactions.retain(|t| t.id != id);
        if self.transactions.len() != before {
            self.persist()?;
            debug!(id, "transaction removed");
        }
        Ok(())
    }

    /// Computes balance, income, and expense totals over the current list.
    pub fn summary(&self) -> LedgerSummary {
        let balance: f64 = self.transactions.iter().map(|t| t.amount).sum();
        let income: f64 = self
            .transactions
            .iter()
            .map(|t| t.amount)
            .filter(|a| *a > 0.0)
            .sum();
        let expense: f64 = -self
            .transactions
            .iter()
            .map(|t| t.amount)
            .filter(|a| *a < 0.0)
            .sum::<f64>();
        LedgerSummary {
            balance: round2(balance),
            income: round2(income),
            expense: round2(expense),
        }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    fn persist(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.transactions)?;
        self.backend.write(LEDGER_KEY, &json)
    }
}

/// Rounds to two decimal places for display.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn empty_store() -> LedgerStore<MemoryStorage> {
        LedgerStore::load(MemoryStorage::new()).unwrap()
    }

    #[test]
    fn empty_description_is_rejected_without_state_change() {
        let mut store = empty_store();
        let err = store.add_transaction("   ", "5").unwrap_err();
        assert!(matches!(err, StoreError::InvalidInput(_)));
        assert!(store.transactions().is_empty());
    }

    #[test]
    fn unparseable_amount_is_rejected() {
        let mut store = empty_store();
        for bad in ["", "  ", "abc", "NaN", "inf"] {
            let err = store.add_transaction("desc", bad).unwrap_err();
            assert!(matches!(err, StoreError::InvalidInput(_)), "input {bad:?}");
        }
        assert!(store.transactions().is_empty());
    }

    #[test]
    fn ids_are_unique_and_increasing() {
        let mut store = empty_store();
        let first = store.add_transaction("a", "1").unwrap().id;
        let second = store.add_transaction("b", "2").unwrap().id;
        assert!(second > first);
    }

    #[test]
    fn balance_identity_holds_after_every_call() {
        let mut store = empty_store();
        let inputs = [("salary", "1200.50"), ("rent", "-800"), ("tip", "12.3")];
        for (desc, amount) in inputs {
            store.add_transaction(desc, amount).unwrap();
            let s = store.summary();
            assert!((s.balance - (s.income - s.expense)).abs() < 0.011);
        }
        let id = store.transactions()[0].id;
        store.remove_transaction(id).unwrap();
        let s = store.summary();
        assert!((s.balance - (s.income - s.expense)).abs() < 0.011);
    }

    #[test]
    fn expense_is_reported_as_positive_magnitude() {
        let mut store = empty_store();
        store.add_transaction("rent", "-800").unwrap();
        let s = store.summary();
        assert_eq!(s.expense, 800.0);
        assert_eq!(s.income, 0.0);
        assert_eq!(s.balance, -800.0);
    }

    #[test]
    fn removing_unknown_id_is_a_no_op() {
        let mut store = empty_store();
        store.add_transaction("a", "1").unwrap();
        store.remove_transaction(999).unwrap();
        assert_eq!(store.transactions().len(), 1);
    }

    #[test]
    fn corrupt_persisted_data_recovers_as_empty() {
        let storage = MemoryStorage::new();
        storage.write(LEDGER_KEY, "{not json").unwrap();
        let store = LedgerStore::load(storage).unwrap();
        assert!(store.transactions().is_empty());
    }
}
