use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::Game;
use crate::domain::repositories::{GameRepository, RepositoryError};

/// In-memory game store with optimistic version checking. Suitable for
/// tests and single-process deployments; a real store only needs to honor
/// the same version contract.
pub struct InMemoryGameRepository {
    games: RwLock<HashMap<String, Game>>,
}

impl InMemoryGameRepository {
    pub fn new() -> Self {
        Self {
            games: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryGameRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GameRepository for InMemoryGameRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Game>, RepositoryError> {
        let games = self.games.read().await;
        Ok(games.get(id).cloned())
    }

    async fn insert(&self, game: &Game) -> Result<(), RepositoryError> {
        let mut games = self.games.write().await;
        if games.contains_key(&game.id) {
            return Err(RepositoryError::AlreadyExists(game.id.clone()));
        }
        games.insert(game.id.clone(), game.clone());
        Ok(())
    }

    async fn save(&self, game: &Game) -> Result<(), RepositoryError> {
        let mut games = self.games.write().await;
        match games.get(&game.id) {
            None => Err(RepositoryError::NotFound(game.id.clone())),
            Some(existing) if existing.version + 1 != game.version => {
                Err(RepositoryError::Conflict(game.id.clone()))
            }
            Some(_) => {
                games.insert(game.id.clone(), game.clone());
                Ok(())
            }
        }
    }

    async fn purge_expired(&self, now: i64) -> Result<usize, RepositoryError> {
        let mut games = self.games.write().await;
        let before = games.len();
        games.retain(|_, game| !game.is_expired(now));
        Ok(before - games.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::GAME_RETENTION_SECS;

    #[tokio::test]
    async fn test_insert_and_find() {
        let repo = InMemoryGameRepository::new();
        let game = Game::new("g1".into(), 5);

        repo.insert(&game).await.unwrap();
        let loaded = repo.find_by_id("g1").await.unwrap().unwrap();
        assert_eq!(loaded.id, "g1");
        assert_eq!(loaded.version, 1);

        assert!(matches!(
            repo.insert(&game).await,
            Err(RepositoryError::AlreadyExists(_))
        ));
    }

    #[tokio::test]
    async fn test_save_requires_next_version() {
        let repo = InMemoryGameRepository::new();
        let mut game = Game::new("g1".into(), 5);
        repo.insert(&game).await.unwrap();

        game.version = 2;
        repo.save(&game).await.unwrap();

        // a second writer holding the stale version loses the race
        let mut stale = repo.find_by_id("g1").await.unwrap().unwrap();
        stale.version = 2;
        assert!(matches!(
            repo.save(&stale).await,
            Err(RepositoryError::Conflict(_))
        ));
    }

    #[tokio::test]
    async fn test_purge_expired() {
        let repo = InMemoryGameRepository::new();
        let now = chrono::Utc::now().timestamp();

        let mut old = Game::new("old".into(), 5);
        old.last_action_at = now - GAME_RETENTION_SECS - 10;
        let fresh = Game::new("fresh".into(), 5);

        repo.insert(&old).await.unwrap();
        repo.insert(&fresh).await.unwrap();

        assert_eq!(repo.purge_expired(now).await.unwrap(), 1);
        assert!(repo.find_by_id("old").await.unwrap().is_none());
        assert!(repo.find_by_id("fresh").await.unwrap().is_some());
    }
}
