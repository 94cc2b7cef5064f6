use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::repositories::{Ledger, LedgerError};

/// In-memory account ledger keyed by user id
pub struct InMemoryLedger {
    balances: RwLock<HashMap<String, u32>>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self {
            balances: RwLock::new(HashMap::new()),
        }
    }

    /// Seed an account balance
    pub async fn set_balance(&self, user_id: &str, amount: u32) {
        let mut balances = self.balances.write().await;
        balances.insert(user_id.to_string(), amount);
    }

    pub async fn balance(&self, user_id: &str) -> Option<u32> {
        let balances = self.balances.read().await;
        balances.get(user_id).copied()
    }
}

impl Default for InMemoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Ledger for InMemoryLedger {
    async fn debit(&self, user_id: &str, amount: u32) -> Result<(), LedgerError> {
        let mut balances = self.balances.write().await;
        let balance = balances
            .get_mut(user_id)
            .ok_or_else(|| LedgerError::UnknownAccount(user_id.to_string()))?;
        if *balance < amount {
            return Err(LedgerError::InsufficientBalance);
        }
        *balance -= amount;
        Ok(())
    }

    async fn credit(&self, user_id: &str, amount: u32) -> Result<(), LedgerError> {
        let mut balances = self.balances.write().await;
        let balance = balances
            .entry(user_id.to_string())
            .or_insert(0);
        *balance += amount;
        Ok(())
    }
}
