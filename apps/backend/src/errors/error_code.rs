//! Error codes for the match backend boundary.
//!
//! This module defines all error codes exposed to the transport layer.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings that
//! appear in HTTP responses, together with the status the boundary should
//! answer with.

use core::fmt;

use crate::errors::domain::{
    ConflictKind, DomainError, InfraErrorKind, InvalidInputKind, NotFoundKind,
};

/// Centralized error codes for the match backend boundary.
///
/// This enum ensures type safety and prevents the use of ad-hoc error codes.
/// Each variant maps to a canonical SCREAMING_SNAKE_CASE string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Player
    /// Player could not be found
    PlayerNotFound,
    /// Player is in an ongoing game
    PlayerInAnOngoingGame,
    /// Player is not in the game
    PlayerNotInGame,
    /// Player is already in the game
    PlayerAlreadyInGame,

    // Game
    /// Game could not be found
    GameNotFound,
    /// Game is not in the awaiting stage
    GameNotInAwaits,
    /// Game is not in the in-progress stage
    GameNotInProgress,

    // Turn
    /// Turn could not be found
    TurnNotFound,
    /// The same player made the previous turn
    TurnLastSamePlayer,

    // Bitboard
    /// Bitboard has no bit set
    BitboardUnsetState,
    /// Bitboard has more bits than the game's rules predict
    BitboardExcessiveBits,
    /// Bitboard has both players' pieces in the same tile
    BitboardPieceInSameTile,
    /// Bitboard grew by more bits than the rules allow between rounds
    BitboardExcessiveBitsPerRound,

    // Concurrency
    /// Optimistic lock conflict
    OptimisticLock,

    // System
    /// Backing store unavailable
    StoreUnavailable,
    /// Data corruption detected
    DataCorruption,
    /// Internal server error
    InternalError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PlayerNotFound => "PLAYER_NOT_FOUND",
            Self::PlayerInAnOngoingGame => "PLAYER_IN_AN_ONGOING_GAME",
            Self::PlayerNotInGame => "PLAYER_NOT_IN_GAME",
            Self::PlayerAlreadyInGame => "PLAYER_ALREADY_IN_GAME",

            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::GameNotInAwaits => "GAME_NOT_IN_AWAITS",
            Self::GameNotInProgress => "GAME_NOT_IN_PROGRESS",

            Self::TurnNotFound => "TURN_NOT_FOUND",
            Self::TurnLastSamePlayer => "TURN_LAST_SAME_PLAYER",

            Self::BitboardUnsetState => "BITBOARD_UNSET_STATE",
            Self::BitboardExcessiveBits => "BITBOARD_EXCESSIVE_BITS",
            Self::BitboardPieceInSameTile => "BITBOARD_PIECE_IN_SAME_TILE",
            Self::BitboardExcessiveBitsPerRound => "BITBOARD_EXCESSIVE_BITS_PER_ROUND",

            Self::OptimisticLock => "OPTIMISTIC_LOCK",

            Self::StoreUnavailable => "STORE_UNAVAILABLE",
            Self::DataCorruption => "DATA_CORRUPTION",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }

    /// HTTP status the boundary should answer with for this code.
    pub const fn http_status(&self) -> u16 {
        match self {
            Self::PlayerNotFound | Self::GameNotFound | Self::TurnNotFound => 404,

            Self::PlayerInAnOngoingGame
            | Self::PlayerNotInGame
            | Self::PlayerAlreadyInGame
            | Self::GameNotInAwaits
            | Self::GameNotInProgress
            | Self::TurnLastSamePlayer
            | Self::OptimisticLock => 409,

            Self::BitboardUnsetState
            | Self::BitboardExcessiveBits
            | Self::BitboardPieceInSameTile
            | Self::BitboardExcessiveBitsPerRound => 400,

            Self::StoreUnavailable => 503,
            Self::DataCorruption | Self::InternalError => 500,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&DomainError> for ErrorCode {
    fn from(err: &DomainError) -> Self {
        match err {
            DomainError::InvalidInput(kind, _) => match kind {
                InvalidInputKind::UnsetBitboardState => Self::BitboardUnsetState,
                InvalidInputKind::ExcessiveBits => Self::BitboardExcessiveBits,
                InvalidInputKind::OverlappingTile => Self::BitboardPieceInSameTile,
                InvalidInputKind::ExcessiveBitsPerRound => Self::BitboardExcessiveBitsPerRound,
            },
            DomainError::Conflict(kind, _) => match kind {
                ConflictKind::GameNotInAwaits => Self::GameNotInAwaits,
                ConflictKind::GameNotInProgress => Self::GameNotInProgress,
                ConflictKind::PlayerAlreadyInGame => Self::PlayerAlreadyInGame,
                ConflictKind::PlayerNotInGame => Self::PlayerNotInGame,
                ConflictKind::PlayerInOngoingGame => Self::PlayerInAnOngoingGame,
                ConflictKind::LastMoverRepeated => Self::TurnLastSamePlayer,
                ConflictKind::OptimisticLock => Self::OptimisticLock,
            },
            DomainError::NotFound(kind, _) => match kind {
                NotFoundKind::Game => Self::GameNotFound,
                NotFoundKind::Player => Self::PlayerNotFound,
                NotFoundKind::Turn => Self::TurnNotFound,
            },
            DomainError::Infra(kind, _) => match kind {
                InfraErrorKind::StoreUnavailable => Self::StoreUnavailable,
                InfraErrorKind::DataCorruption => Self::DataCorruption,
                InfraErrorKind::Other(_) => Self::InternalError,
            },
        }
    }
}
