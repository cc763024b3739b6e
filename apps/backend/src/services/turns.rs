//! Turn orchestration: move ordering, rule validation and result
//! application for a submitted board state.

use tracing::{debug, info};

use crate::domain::bitboard::Bitboard;
use crate::domain::stage::Stage;
use crate::errors::domain::{ConflictKind, DomainError};
use crate::repos::games::{self, GameId, GameStore};
use crate::repos::players::{self, PlayerId, PlayerLookup};
use crate::repos::turns::{Turn, TurnId, TurnStore};
use crate::services::games::GameService;

/// Outcome of a submitted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Move accepted and recorded; the game continues.
    Accepted(TurnId),
    /// Move accepted and it resolved the game; the history was purged
    /// instead of a new turn being recorded.
    Finished,
}

/// Turn service.
pub struct TurnService {
    lifecycle: GameService,
}

impl TurnService {
    pub fn new() -> Self {
        Self {
            lifecycle: GameService::new(),
        }
    }

    /// Submit a move for `requester` on `game_id`.
    ///
    /// Checks run in order, before any mutation: the game must be in
    /// progress, the requester enrolled and different from the last mover;
    /// the board must be structurally legal and a legal successor of the
    /// previous turn's board (the first turn compares against the empty
    /// baseline). Concurrent submissions for one game are serialized by the
    /// boundary so the last-turn snapshot stays stable.
    pub async fn create(
        &self,
        games: &dyn GameStore,
        turns: &dyn TurnStore,
        players: &dyn PlayerLookup,
        game_id: GameId,
        requester: PlayerId,
        state: u64,
    ) -> Result<MoveOutcome, DomainError> {
        let mut game = games::require_game(games, game_id).await?;
        if game.stage != Stage::InProgress {
            return Err(DomainError::conflict(
                ConflictKind::GameNotInProgress,
                format!("game {game_id} is not in progress"),
            ));
        }
        let player = players::require_player(players, requester).await?;
        if !game.has_player(player.id) {
            return Err(DomainError::conflict(
                ConflictKind::PlayerNotInGame,
                "requester holds no seat in this game",
            ));
        }

        let last = turns.find_last_by_game(game_id).await?;
        if last.as_ref().is_some_and(|t| t.player_id == player.id) {
            return Err(DomainError::conflict(
                ConflictKind::LastMoverRepeated,
                "requester also made the previous turn",
            ));
        }

        let board = Bitboard::new(state);
        game.kind.validate(board)?;
        let previous = last.as_ref().map_or(Bitboard::EMPTY, |t| t.state);
        game.kind.validate_transition(previous, board)?;

        if self.lifecycle.apply_result(games, &mut game, board).await? {
            let purged = turns.delete_all_by_game(game_id).await?;
            info!(game_id = %game_id, purged, "Game resolved, history purged");
            return Ok(MoveOutcome::Finished);
        }

        let recorded = turns.save(Turn::record(game_id, player.id, board)).await?;
        debug!(game_id = %game_id, turn_id = %recorded.id, player_id = %player.id, "Turn recorded");
        Ok(MoveOutcome::Accepted(recorded.id))
    }
}

impl Default for TurnService {
    fn default() -> Self {
        Self::new()
    }
}
