use serde::{Deserialize, Serialize};

/// Board state in bitboard notation: one bit per occupied tile, the two
/// player planes packed into disjoint ranges of a single integer. The away
/// plane occupies the low `tiles` bits, the home plane the next `tiles` bits.
///
/// A `Bitboard` is a plain value, compared by its numeric state. Each
/// accepted turn constructs a new one; an existing board is never mutated.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Bitboard(u64);

impl Bitboard {
    /// All-zero baseline the first turn of a game is compared against.
    pub const EMPTY: Self = Self(0);

    pub const fn new(state: u64) -> Self {
        Self(state)
    }

    pub const fn state(self) -> u64 {
        self.0
    }

    /// Number of occupied tiles across both player planes.
    pub const fn count_ones(self) -> u32 {
        self.0.count_ones()
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Home plane: the board shifted down past the away plane.
    pub const fn home_plane(self, tiles: u32) -> u64 {
        self.0 >> tiles
    }

    /// Away plane: the low `tiles` bits.
    pub const fn away_plane(self, tiles: u32) -> u64 {
        self.0 & ((1u64 << tiles) - 1)
    }
}

impl From<u64> for Bitboard {
    fn from(state: u64) -> Self {
        Self(state)
    }
}
