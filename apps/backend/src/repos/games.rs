//! Game store contract and domain model.

use async_trait::async_trait;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::rules::{GameResult, RuleKind};
use crate::domain::stage::Stage;
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};
use crate::repos::players::PlayerId;

pub type GameId = Uuid;

/// Game domain model: a match between two players.
///
/// `away` and `winner` stay unset until the join and finish transitions
/// occur, and `home != away` once both seats are taken. `lock_version`
/// guards concurrent writers (see [`GameStore::update`]).
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub id: GameId,
    pub kind: RuleKind,
    pub stage: Stage,
    pub home: PlayerId,
    pub away: Option<PlayerId>,
    pub winner: Option<PlayerId>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
    pub lock_version: i32,
}

impl Game {
    /// Fresh record for the open operation: requester seated as home,
    /// awaiting an opponent.
    pub fn open(kind: RuleKind, home: PlayerId) -> Self {
        let now = OffsetDateTime::now_utc();
        Self {
            id: Uuid::new_v4(),
            kind,
            stage: Stage::Awaits,
            home,
            away: None,
            winner: None,
            created_at: now,
            updated_at: now,
            lock_version: 0,
        }
    }

    pub fn has_player(&self, player: PlayerId) -> bool {
        self.home == player || self.away == Some(player)
    }

    /// The seated opponent of `player`, if `player` is enrolled and both
    /// seats are taken.
    pub fn opponent_of(&self, player: PlayerId) -> Option<PlayerId> {
        if self.home == player {
            self.away
        } else if self.away == Some(player) {
            Some(self.home)
        } else {
            None
        }
    }

    /// Seat the away player and advance to in-progress. Preconditions are
    /// the lifecycle service's job.
    pub(crate) fn admit(&mut self, away: PlayerId) {
        self.away = Some(away);
        self.stage = Stage::InProgress;
    }

    /// Apply a rule-engine outcome: any over result awards the winner (none
    /// for a tie) and advances to finished. Returns whether the game ended.
    pub(crate) fn resolve(&mut self, result: GameResult) -> bool {
        if !result.is_over() {
            return false;
        }
        self.winner = match result {
            GameResult::Home => Some(self.home),
            GameResult::Away => self.away,
            GameResult::Tie | GameResult::NotOver => None,
        };
        self.stage = Stage::Finished;
        true
    }

    /// Finish by surrender: victory goes to the opponent of `player`.
    pub(crate) fn finish_surrendered(&mut self, player: PlayerId) -> Result<(), DomainError> {
        if self.away.is_none() || self.stage != Stage::InProgress {
            return Err(DomainError::conflict(
                ConflictKind::GameNotInProgress,
                format!("game {} is not in progress", self.id),
            ));
        }
        let Some(opponent) = self.opponent_of(player) else {
            return Err(DomainError::conflict(
                ConflictKind::PlayerNotInGame,
                "surrendering player holds no seat in this game",
            ));
        };
        self.winner = Some(opponent);
        self.stage = Stage::Finished;
        Ok(())
    }
}

/// Narrow persistence contract for games, implemented by the boundary layer.
///
/// Two invariants must hold atomically with the write, not as separate
/// reads: the single-active-game constraint (no player seated in two games
/// that are both awaiting or in progress) on [`GameStore::create`] and on an
/// update that seats the away player, and the `expected_lock_version` check
/// on [`GameStore::update`] and [`GameStore::delete`]. A SQL implementation
/// gets these from a partial unique index and guarded writes.
#[async_trait]
pub trait GameStore: Send + Sync {
    async fn find_by_id(&self, id: GameId) -> Result<Option<Game>, DomainError>;

    /// Persist a new game. Fails with `Conflict(PlayerInOngoingGame)` if the
    /// home player already has an ongoing game.
    async fn create(&self, game: Game) -> Result<Game, DomainError>;

    /// Persist changed fields, bumping the lock version. Fails with
    /// `Conflict(OptimisticLock)` if the stored version differs from
    /// `expected_lock_version`.
    async fn update(&self, game: Game, expected_lock_version: i32) -> Result<Game, DomainError>;

    /// Remove a game record. Deleting an absent game is a no-op.
    async fn delete(&self, id: GameId, expected_lock_version: i32) -> Result<(), DomainError>;

    /// All games where `player` holds a seat and the stage is awaiting or
    /// in progress.
    async fn find_ongoing_by_player(&self, player: PlayerId) -> Result<Vec<Game>, DomainError>;
}

/// Find game by id or fail with the domain's not-found kind.
pub async fn require_game(games: &dyn GameStore, id: GameId) -> Result<Game, DomainError> {
    games
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found(NotFoundKind::Game, format!("no game {id}")))
}
