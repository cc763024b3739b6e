//! Domain-level error type used across services and adapters.
//!
//! This error type is HTTP- and storage-agnostic. The boundary layer maps it
//! to a transport response through [`crate::errors::ErrorCode`]. Every
//! precondition is checked before any mutation, so a returned error implies
//! no partial state change.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Infra error kinds to distinguish operational failures
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InfraErrorKind {
    StoreUnavailable,
    DataCorruption,
    Other(String),
}

/// Domain-level not found entities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Game,
    Player,
    Turn,
}

/// Domain-level conflict kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConflictKind {
    GameNotInAwaits,
    GameNotInProgress,
    PlayerAlreadyInGame,
    PlayerNotInGame,
    PlayerInOngoingGame,
    LastMoverRepeated,
    OptimisticLock,
}

/// Structural bitboard rejections raised by the rule engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvalidInputKind {
    UnsetBitboardState,
    ExcessiveBits,
    OverlappingTile,
    ExcessiveBitsPerRound,
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Structurally illegal input, rejected by the rule engine
    InvalidInput(InvalidInputKind, String),
    /// Semantic conflict with current game or player state
    Conflict(ConflictKind, String),
    /// Missing resource in domain terms
    NotFound(NotFoundKind, String),
    /// Infrastructure/operational failures
    Infra(InfraErrorKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::InvalidInput(kind, d) => write!(f, "invalid input {kind:?}: {d}"),
            DomainError::Conflict(kind, d) => write!(f, "conflict {kind:?}: {d}"),
            DomainError::NotFound(kind, d) => write!(f, "not found {kind:?}: {d}"),
            DomainError::Infra(kind, d) => write!(f, "infra {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn invalid_input(kind: InvalidInputKind, detail: impl Into<String>) -> Self {
        Self::InvalidInput(kind, detail.into())
    }
    pub fn conflict(kind: ConflictKind, detail: impl Into<String>) -> Self {
        Self::Conflict(kind, detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra(kind, detail.into())
    }
}
