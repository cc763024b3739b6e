use serde::{Deserialize, Serialize};

/// A game's life-cycle stage. Starts at [`Stage::Awaits`], only ever advances,
/// and [`Stage::Finished`] is absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Stage {
    /// Created; the opening player awaits an opponent.
    Awaits,
    /// Both seats taken; turns are being exchanged.
    InProgress,
    /// Resolved by result or surrender. No further transitions.
    Finished,
}

impl Stage {
    /// The stage this one advances to, if any.
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Awaits => Some(Self::InProgress),
            Self::InProgress => Some(Self::Finished),
            Self::Finished => None,
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Finished)
    }

    /// Awaiting or in-progress games count against a player's single active
    /// game.
    pub const fn is_ongoing(self) -> bool {
        matches!(self, Self::Awaits | Self::InProgress)
    }
}
