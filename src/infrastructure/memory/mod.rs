mod game_repo;
mod ledger;

pub use game_repo::InMemoryGameRepository;
pub use ledger::InMemoryLedger;
