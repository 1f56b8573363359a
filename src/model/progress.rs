use serde::{Deserialize, Serialize};

pub const DEFAULT_FUN_RATING: u8 = 5;
pub const DEFAULT_GAMES_REMAINING: u32 = 1;
pub const MIN_FUN_RATING: u8 = 1;
pub const MAX_FUN_RATING: u8 = 10;

/// What the user wrote down about one champion. Field names on disk are
/// short: `fun`, `games` and `notes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressRecord {
    #[serde(rename = "fun")]
    pub fun_rating: u8,
    #[serde(rename = "games")]
    pub games_remaining: u32,
    pub notes: String,
}

impl ProgressRecord {
    /// A champion counts as completed while its counter is still positive.
    ///
    /// The counter is labelled "games until win", so zero would be the natural
    /// finish line. Existing progress files were recorded under this rule and
    /// it is kept as is until the intended meaning is confirmed.
    pub fn is_done(&self) -> bool {
        self.games_remaining > 0
    }
}

impl Default for ProgressRecord {
    fn default() -> Self {
        Self {
            fun_rating: DEFAULT_FUN_RATING,
            games_remaining: DEFAULT_GAMES_REMAINING,
            notes: String::new(),
        }
    }
}
