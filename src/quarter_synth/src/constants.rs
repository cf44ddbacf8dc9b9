/// Number of sub-periods a game total is split into
pub const NUM_QUARTERS: usize = 4;

/// Quarter labels, used as output column prefixes
pub const QUARTERS: [&str; NUM_QUARTERS] = ["Q1", "Q2", "Q3", "Q4"];

/// Identifying columns every input table must carry
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "season_id",
    "game_id",
    "game_date",
    "matchup_home",
    "wl_home",
    "wl_away",
];

/// Decimal places kept for shooting percentages
pub const PCT_DECIMALS: u32 = 3;

/// Win/loss flag value marking a win
pub const WIN_FLAG: &str = "W";

