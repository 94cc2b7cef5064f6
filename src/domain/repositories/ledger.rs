use async_trait::async_trait;

/// Error type for account ledger operations
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("Insufficient balance")]
    InsufficientBalance,
    #[error("Unknown account: {0}")]
    UnknownAccount(String),
    #[error("Ledger unavailable: {0}")]
    Unavailable(String),
}

/// Account ledger trait. The engine touches balances at exactly two points:
/// stake debit on create/join and winner payout at game end.
#[async_trait]
pub trait Ledger: Send + Sync {
    /// Take the stake out of a user's balance
    async fn debit(&self, user_id: &str, amount: u32) -> Result<(), LedgerError>;

    /// Pay winnings into a user's balance
    async fn credit(&self, user_id: &str, amount: u32) -> Result<(), LedgerError>;
}
