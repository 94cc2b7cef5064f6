mod game_repository;
mod ledger;

pub use game_repository::{GameRepository, RepositoryError};
pub use ledger::{Ledger, LedgerError};
