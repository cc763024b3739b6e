//! Turn store contract and domain model.

use async_trait::async_trait;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::bitboard::Bitboard;
use crate::errors::domain::DomainError;
use crate::repos::games::GameId;
use crate::repos::players::PlayerId;

pub type TurnId = Uuid;

/// One accepted move: the mover and the board state it produced.
///
/// Turns are append-only, ordered by creation time, and purged in bulk once
/// their game resolves; history is not kept past resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub id: TurnId,
    pub game_id: GameId,
    pub player_id: PlayerId,
    pub state: Bitboard,
    pub created_at: OffsetDateTime,
}

impl Turn {
    pub fn record(game_id: GameId, player_id: PlayerId, state: Bitboard) -> Self {
        Self {
            id: Uuid::new_v4(),
            game_id,
            player_id,
            state,
            created_at: OffsetDateTime::now_utc(),
        }
    }
}

/// Narrow persistence contract for turn history.
#[async_trait]
pub trait TurnStore: Send + Sync {
    async fn save(&self, turn: Turn) -> Result<Turn, DomainError>;

    /// Most recently created turn for the game, if any. Concurrent
    /// submissions for one game must observe a consistent snapshot here;
    /// the boundary serializes per game.
    async fn find_last_by_game(&self, game_id: GameId) -> Result<Option<Turn>, DomainError>;

    /// Drop the game's whole history. Returns how many turns were removed.
    async fn delete_all_by_game(&self, game_id: GameId) -> Result<u64, DomainError>;
}
