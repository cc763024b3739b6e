//! Domain layer: pure game logic, no I/O.

pub mod bitboard;
pub mod rules;
pub mod stage;

#[cfg(test)]
mod tests_props;

// Re-exports for ergonomics
pub use bitboard::Bitboard;
pub use rules::{GameResult, RuleKind};
pub use stage::Stage;
