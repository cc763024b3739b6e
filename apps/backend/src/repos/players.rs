//! Player lookup contract for the domain layer.
//!
//! Player profiles are owned by an external service; the core only resolves
//! references into it.

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::domain::{DomainError, NotFoundKind};

pub type PlayerId = Uuid;

/// Player record as seen by the game core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub username: String,
    /// Inactive players cannot open or join games.
    pub active: bool,
}

#[async_trait]
pub trait PlayerLookup: Send + Sync {
    async fn find_by_id(&self, id: PlayerId) -> Result<Option<Player>, DomainError>;
}

/// Resolve an active player reference or fail with the domain's not-found
/// kind. Inactive players are treated as absent.
pub async fn require_player(
    players: &dyn PlayerLookup,
    id: PlayerId,
) -> Result<Player, DomainError> {
    match players.find_by_id(id).await? {
        Some(player) if player.active => Ok(player),
        Some(_) => Err(DomainError::not_found(
            NotFoundKind::Player,
            format!("player {id} is inactive"),
        )),
        None => Err(DomainError::not_found(
            NotFoundKind::Player,
            format!("no player {id}"),
        )),
    }
}
