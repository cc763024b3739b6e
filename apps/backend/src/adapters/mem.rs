//! In-memory store adapter.
//!
//! Backs all three store contracts with process-local maps behind a single
//! `RwLock`, standing in for the excluded persistence layer. Holding one
//! write lock across each mutation makes the check-then-act constraints
//! atomic: the single-active-game scan happens under the same lock as the
//! insert that depends on it, and every update is version-checked against
//! the stored record before it lands.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use time::OffsetDateTime;

use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};
use crate::repos::games::{Game, GameId, GameStore};
use crate::repos::players::{Player, PlayerId, PlayerLookup};
use crate::repos::turns::{Turn, TurnStore};

#[derive(Default)]
pub struct InMemoryStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    games: HashMap<GameId, Game>,
    // Insertion order is creation order, which find_last_by_game relies on.
    turns: Vec<Turn>,
    players: HashMap<PlayerId, Player>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a player record. Player profiles are externally owned; this is
    /// the hook tests and bootstrap code use to stand that service up.
    pub fn put_player(&self, player: Player) {
        self.inner.write().players.insert(player.id, player);
    }

    fn has_ongoing_game(inner: &Inner, player: PlayerId, excluding: GameId) -> bool {
        inner
            .games
            .values()
            .any(|g| g.id != excluding && g.stage.is_ongoing() && g.has_player(player))
    }
}

#[async_trait]
impl GameStore for InMemoryStore {
    async fn find_by_id(&self, id: GameId) -> Result<Option<Game>, DomainError> {
        Ok(self.inner.read().games.get(&id).cloned())
    }

    async fn create(&self, game: Game) -> Result<Game, DomainError> {
        let mut inner = self.inner.write();
        if Self::has_ongoing_game(&inner, game.home, game.id) {
            return Err(DomainError::conflict(
                ConflictKind::PlayerInOngoingGame,
                format!("player {} already has an ongoing game", game.home),
            ));
        }
        inner.games.insert(game.id, game.clone());
        Ok(game)
    }

    async fn update(&self, mut game: Game, expected_lock_version: i32) -> Result<Game, DomainError> {
        let mut inner = self.inner.write();
        let current = inner.games.get(&game.id).ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Game, format!("no game {}", game.id))
        })?;
        if current.lock_version != expected_lock_version {
            return Err(DomainError::conflict(
                ConflictKind::OptimisticLock,
                format!(
                    "game lock version mismatch: expected {expected_lock_version}, found {}",
                    current.lock_version
                ),
            ));
        }
        // Seating the away player is the uniqueness-sensitive write.
        if let (Some(away), None) = (game.away, current.away) {
            if Self::has_ongoing_game(&inner, away, game.id) {
                return Err(DomainError::conflict(
                    ConflictKind::PlayerInOngoingGame,
                    format!("player {away} already has an ongoing game"),
                ));
            }
        }
        game.lock_version = expected_lock_version + 1;
        game.updated_at = OffsetDateTime::now_utc();
        inner.games.insert(game.id, game.clone());
        Ok(game)
    }

    async fn delete(&self, id: GameId, expected_lock_version: i32) -> Result<(), DomainError> {
        let mut inner = self.inner.write();
        match inner.games.get(&id) {
            None => Ok(()),
            Some(current) if current.lock_version != expected_lock_version => {
                Err(DomainError::conflict(
                    ConflictKind::OptimisticLock,
                    format!(
                        "game lock version mismatch: expected {expected_lock_version}, found {}",
                        current.lock_version
                    ),
                ))
            }
            Some(_) => {
                inner.games.remove(&id);
                Ok(())
            }
        }
    }

    async fn find_ongoing_by_player(&self, player: PlayerId) -> Result<Vec<Game>, DomainError> {
        let inner = self.inner.read();
        Ok(inner
            .games
            .values()
            .filter(|g| g.stage.is_ongoing() && g.has_player(player))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl TurnStore for InMemoryStore {
    async fn save(&self, turn: Turn) -> Result<Turn, DomainError> {
        self.inner.write().turns.push(turn.clone());
        Ok(turn)
    }

    async fn find_last_by_game(&self, game_id: GameId) -> Result<Option<Turn>, DomainError> {
        let inner = self.inner.read();
        Ok(inner
            .turns
            .iter()
            .rev()
            .find(|t| t.game_id == game_id)
            .cloned())
    }

    async fn delete_all_by_game(&self, game_id: GameId) -> Result<u64, DomainError> {
        let mut inner = self.inner.write();
        let before = inner.turns.len();
        inner.turns.retain(|t| t.game_id != game_id);
        Ok((before - inner.turns.len()) as u64)
    }
}

#[async_trait]
impl PlayerLookup for InMemoryStore {
    async fn find_by_id(&self, id: PlayerId) -> Result<Option<Player>, DomainError> {
        Ok(self.inner.read().players.get(&id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::domain::bitboard::Bitboard;
    use crate::domain::rules::RuleKind;

    #[tokio::test]
    async fn create_enforces_single_active_game() {
        let store = InMemoryStore::new();
        let player = Uuid::new_v4();
        store.create(Game::open(RuleKind::TicTacToe, player)).await.unwrap();

        let err = store
            .create(Game::open(RuleKind::TicTacToe, player))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DomainError::Conflict(ConflictKind::PlayerInOngoingGame, _)
        ));
    }

    #[tokio::test]
    async fn update_rejects_stale_lock_version() {
        let store = InMemoryStore::new();
        let game = store
            .create(Game::open(RuleKind::TicTacToe, Uuid::new_v4()))
            .await
            .unwrap();

        let updated = store.update(game.clone(), 0).await.unwrap();
        assert_eq!(updated.lock_version, 1);

        let err = store.update(game, 0).await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::Conflict(ConflictKind::OptimisticLock, _)
        ));
    }

    #[tokio::test]
    async fn seating_away_checks_their_ongoing_games() {
        let store = InMemoryStore::new();
        let busy = Uuid::new_v4();
        store.create(Game::open(RuleKind::TicTacToe, busy)).await.unwrap();

        let mut other = store
            .create(Game::open(RuleKind::TicTacToe, Uuid::new_v4()))
            .await
            .unwrap();
        other.admit(busy);
        let err = store.update(other, 0).await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::Conflict(ConflictKind::PlayerInOngoingGame, _)
        ));
    }

    #[tokio::test]
    async fn last_turn_follows_creation_order() {
        let store = InMemoryStore::new();
        let game_id = Uuid::new_v4();
        let (p1, p2) = (Uuid::new_v4(), Uuid::new_v4());

        store
            .save(Turn::record(game_id, p1, Bitboard::new(0b1)))
            .await
            .unwrap();
        let second = store
            .save(Turn::record(game_id, p2, Bitboard::new(0b11)))
            .await
            .unwrap();

        let last = store.find_last_by_game(game_id).await.unwrap().unwrap();
        assert_eq!(last.id, second.id);

        assert_eq!(store.delete_all_by_game(game_id).await.unwrap(), 2);
        assert!(store.find_last_by_game(game_id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_is_idempotent_but_version_checked() {
        let store = InMemoryStore::new();
        let game = store
            .create(Game::open(RuleKind::TicTacToe, Uuid::new_v4()))
            .await
            .unwrap();

        let err = store.delete(game.id, 7).await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::Conflict(ConflictKind::OptimisticLock, _)
        ));

        store.delete(game.id, 0).await.unwrap();
        store.delete(game.id, 0).await.unwrap();
        assert!(GameStore::find_by_id(&store, game.id)
            .await
            .unwrap()
            .is_none());
    }
}
