#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod domain;
pub mod errors;
pub mod repos;
pub mod services;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use adapters::mem::InMemoryStore;
pub use domain::bitboard::Bitboard;
pub use domain::rules::{GameResult, RuleKind};
pub use domain::stage::Stage;
pub use errors::domain::{ConflictKind, DomainError, InvalidInputKind, NotFoundKind};
pub use errors::ErrorCode;
pub use repos::games::{Game, GameId, GameStore};
pub use repos::players::{Player, PlayerId, PlayerLookup};
pub use repos::turns::{Turn, TurnId, TurnStore};
pub use services::games::GameService;
pub use services::turns::{MoveOutcome, TurnService};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
