use serde::{Deserialize, Serialize};

use crate::error::LottoResult;
use crate::jackpot::check_drawable;
use crate::Number;

/// Rules shared by every ticket and the draw.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct GameConfig {
    /// Lowest number allowed
    pub lower: Number,
    /// Highest number allowed
    pub upper: Number,
    /// Numbers per ticket and per draw
    pub entries: usize,
}

impl GameConfig {
    pub const fn new(lower: Number, upper: Number, entries: usize) -> Self {
        Self {
            lower,
            upper,
            entries,
        }
    }

    /// A game is playable only if a jackpot can be drawn.
    pub fn validate(&self) -> LottoResult<()> {
        check_drawable(self.lower, self.upper, self.entries)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(1, 49, 6)
    }
}
