//! Stat configuration: which stats get split, and which are paired with a
//! "made" stat.

/// One configured stat.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatSpec {
    /// Attempts stat (paired) or the standalone count
    pub name: &'static str,
    /// Paired "made" stat, if any
    pub made: Option<&'static str>,
}

impl StatSpec {
    pub const fn paired(name: &'static str, made: &'static str) -> Self {
        StatSpec {
            name,
            made: Some(made),
        }
    }

    pub const fn standalone(name: &'static str) -> Self {
        StatSpec { name, made: None }
    }

    pub fn is_paired(&self) -> bool {
        self.made.is_some()
    }

    /// Prefix of the shooting percentage column: `fga` -> `fg`, `fg3a` -> `fg3`.
    pub fn pct_prefix(&self) -> &'static str {
        self.name.strip_suffix('a').unwrap_or(self.name)
    }
}

/// Stats split by quarter, in output column order.
///
/// Points are not listed: they are derived per quarter from the made stats.
pub const SPLIT_STATS: [StatSpec; 10] = [
    StatSpec::paired("fga", "fgm"),
    StatSpec::paired("fg3a", "fg3m"),
    StatSpec::paired("fta", "ftm"),
    StatSpec::standalone("oreb"),
    StatSpec::standalone("dreb"),
    StatSpec::standalone("ast"),
    StatSpec::standalone("stl"),
    StatSpec::standalone("blk"),
    StatSpec::standalone("tov"),
    StatSpec::standalone("pf"),
];

/// Made stats feeding the points formula
pub const FIELD_GOALS_MADE: &str = "fgm";
pub const THREES_MADE: &str = "fg3m";
pub const FREE_THROWS_MADE: &str = "ftm";

/// Team side of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Home,
    Away,
}

impl Side {
    /// Processing order
    pub const ALL: [Side; 2] = [Side::Home, Side::Away];

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Home => "home",
            Side::Away => "away",
        }
    }
}

/// Input column holding a game total, e.g. `fga_home`.
pub fn input_column(stat: &str, side: Side) -> String {
    format!("{}_{}", stat, side.as_str())
}

/// Output column for one quarter, e.g. `Q1_home_fga`.
pub fn output_column(quarter: &str, side: Side, stat: &str) -> String {
    format!("{}_{}_{}", quarter, side.as_str(), stat)
}
