/// Game-wide display settings consumed by presentation helpers.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Label turns with the in-game year instead of the turn number.
    pub display_year: bool,
    /// In-game year of turn 1.
    pub start_year: i32,
}

impl GameConfig {
    pub const DEFAULT_START_YEAR: i32 = 2300;

    pub fn new() -> Self {
        Self {
            display_year: false,
            start_year: Self::DEFAULT_START_YEAR,
        }
    }

    pub fn with_display_year(start_year: i32) -> Self {
        Self {
            display_year: true,
            start_year,
        }
    }

    /// In-game year for a one-based turn number.
    pub const fn year_of_turn(&self, turn: u32) -> i32 {
        self.start_year + turn as i32 - 1
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
