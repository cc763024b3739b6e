//! Game lifecycle service: open, join, close, surrender and result
//! application.
//!
//! Preconditions are checked here for precise error kinds; the store
//! contract re-enforces the race-sensitive ones atomically with the write
//! (see [`GameStore`]).

use tracing::{debug, info};

use crate::domain::bitboard::Bitboard;
use crate::domain::rules::RuleKind;
use crate::domain::stage::Stage;
use crate::errors::domain::{ConflictKind, DomainError};
use crate::repos::games::{self, Game, GameId, GameStore};
use crate::repos::players::{self, PlayerId, PlayerLookup};
use crate::repos::turns::TurnStore;

/// Game lifecycle service.
pub struct GameService;

impl GameService {
    pub fn new() -> Self {
        Self
    }

    /// Open a game: the requester is seated as home and awaits an opponent.
    ///
    /// Fails with `Conflict(PlayerInOngoingGame)` if the requester already
    /// has a game that is awaiting or in progress.
    pub async fn open(
        &self,
        games: &dyn GameStore,
        players: &dyn PlayerLookup,
        kind: RuleKind,
        requester: PlayerId,
    ) -> Result<GameId, DomainError> {
        let player = players::require_player(players, requester).await?;
        self.ensure_no_ongoing_game(games, player.id).await?;

        let created = games.create(Game::open(kind, player.id)).await?;
        info!(game_id = %created.id, player_id = %player.id, "Game opened");
        Ok(created.id)
    }

    /// Join an awaiting game as the away player and start the match.
    pub async fn join(
        &self,
        games: &dyn GameStore,
        players: &dyn PlayerLookup,
        game_id: GameId,
        requester: PlayerId,
    ) -> Result<(), DomainError> {
        let mut game = games::require_game(games, game_id).await?;
        if game.stage != Stage::Awaits {
            return Err(DomainError::conflict(
                ConflictKind::GameNotInAwaits,
                format!("game {game_id} is not awaiting an opponent"),
            ));
        }
        let player = players::require_player(players, requester).await?;
        if game.has_player(player.id) {
            return Err(DomainError::conflict(
                ConflictKind::PlayerAlreadyInGame,
                "requester already holds a seat in this game",
            ));
        }
        self.ensure_no_ongoing_game(games, player.id).await?;

        let version = game.lock_version;
        game.admit(player.id);
        games.update(game, version).await?;
        info!(game_id = %game_id, player_id = %player.id, "Away player joined, game started");
        Ok(())
    }

    /// Close an awaiting game. Only the home player may close it; the
    /// record is removed outright.
    pub async fn close(
        &self,
        games: &dyn GameStore,
        players: &dyn PlayerLookup,
        game_id: GameId,
        requester: PlayerId,
    ) -> Result<(), DomainError> {
        let game = games::require_game(games, game_id).await?;
        if game.stage != Stage::Awaits {
            return Err(DomainError::conflict(
                ConflictKind::GameNotInAwaits,
                format!("game {game_id} is not awaiting an opponent"),
            ));
        }
        let player = players::require_player(players, requester).await?;
        if game.home != player.id {
            return Err(DomainError::conflict(
                ConflictKind::PlayerNotInGame,
                "only the home player may close an awaiting game",
            ));
        }

        games.delete(game.id, game.lock_version).await?;
        info!(game_id = %game_id, "Game closed");
        Ok(())
    }

    /// Surrender an in-progress game: victory goes to the opponent and the
    /// turn history is purged.
    pub async fn surrender(
        &self,
        games: &dyn GameStore,
        turns: &dyn TurnStore,
        players: &dyn PlayerLookup,
        game_id: GameId,
        requester: PlayerId,
    ) -> Result<(), DomainError> {
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

        let version = game.lock_version;
        game.finish_surrendered(player.id)?;
        games.update(game, version).await?;
        let purged = turns.delete_all_by_game(game_id).await?;
        info!(game_id = %game_id, player_id = %player.id, purged, "Game surrendered");
        Ok(())
    }

    /// Evaluate `board` for `game` and persist the outcome: a decisive or
    /// tied result awards the winner and advances the stage to finished.
    /// Returns whether the game ended.
    pub(crate) async fn apply_result(
        &self,
        games: &dyn GameStore,
        game: &mut Game,
        board: Bitboard,
    ) -> Result<bool, DomainError> {
        if game.stage != Stage::InProgress {
            return Err(DomainError::conflict(
                ConflictKind::GameNotInProgress,
                format!("game {} is not in progress", game.id),
            ));
        }
        let result = game.kind.result_of(board);
        let over = game.resolve(result);
        let version = game.lock_version;
        *game = games.update(game.clone(), version).await?;
        debug!(game_id = %game.id, ?result, over, "Result applied");
        Ok(over)
    }

    async fn ensure_no_ongoing_game(
        &self,
        games: &dyn GameStore,
        player: PlayerId,
    ) -> Result<(), DomainError> {
        if games.find_ongoing_by_player(player).await?.is_empty() {
            Ok(())
        } else {
            Err(DomainError::conflict(
                ConflictKind::PlayerInOngoingGame,
                format!("player {player} already has an ongoing game"),
            ))
        }
    }
}

impl Default for GameService {
    fn default() -> Self {
        Self::new()
    }
}
