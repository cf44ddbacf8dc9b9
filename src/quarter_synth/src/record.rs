//! Synthetic quarter records and their flat output schema.
//!
//! Column order follows the allocation order: for each side, every
//! configured stat quarter by quarter (attempts, made, percentage for paired
//! stats), then the four points columns.

use crate::constants::{NUM_QUARTERS, QUARTERS};
use crate::paired::{shooting_pct, PairedSplit, QuarterSplit};
use crate::points::QuarterPoints;
use crate::stats::{output_column, Side, StatSpec, SPLIT_STATS};
use crate::table::Table;

/// Quarter values of one stat for one side.
#[derive(Clone, Debug, PartialEq)]
pub struct StatQuarters {
    pub spec: StatSpec,
    /// Attempts for paired stats, the count for standalone ones
    pub values: QuarterSplit,
    pub made: Option<QuarterSplit>,
    /// Made / attempts per quarter; `None` where attempts are zero
    pub pct: [Option<f64>; NUM_QUARTERS],
}

impl StatQuarters {
    pub fn standalone(spec: StatSpec, values: QuarterSplit) -> Self {
        StatQuarters {
            spec,
            values,
            made: None,
            pct: [None; NUM_QUARTERS],
        }
    }

    pub fn paired(spec: StatSpec, split: PairedSplit) -> Self {
        StatQuarters {
            spec,
            values: split.attempts,
            made: Some(split.made),
            pct: std::array::from_fn(|i| shooting_pct(split.made[i], split.attempts[i])),
        }
    }
}

/// Every allocated stat for one side, plus derived points.
#[derive(Clone, Debug, PartialEq)]
pub struct SideQuarters {
    pub stats: Vec<StatQuarters>,
    pub points: QuarterPoints,
}

impl SideQuarters {
    /// Quarter values by stat name, attempts/standalone or made.
    pub fn values(&self, stat: &str) -> Option<QuarterSplit> {
        self.stats.iter().find_map(|s| {
            if s.spec.name == stat {
                Some(s.values)
            } else if s.spec.made == Some(stat) {
                s.made
            } else {
                None
            }
        })
    }

    pub fn stat(&self, name: &str) -> Option<&StatQuarters> {
        self.stats.iter().find(|s| s.spec.name == name)
    }
}

/// One synthesized game.
#[derive(Clone, Debug, PartialEq)]
pub struct QuarterRecord {
    pub season_id: String,
    pub game_id: String,
    pub game_date: String,
    pub matchup: String,
    pub home_win: bool,
    pub away_win: bool,
    pub home: SideQuarters,
    pub away: SideQuarters,
}

impl QuarterRecord {
    pub fn side(&self, side: Side) -> &SideQuarters {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }

    /// Output column names.
    pub fn header() -> Vec<String> {
        let mut columns: Vec<String> = [
            "season_id",
            "game_id",
            "game_date",
            "matchup",
            "home_win",
            "away_win",
        ]
        .iter()
        .map(|c| c.to_string())
        .collect();

        for side in Side::ALL {
            for spec in SPLIT_STATS.iter() {
                for quarter in QUARTERS {
                    columns.push(output_column(quarter, side, spec.name));
                    if let Some(made) = spec.made {
                        columns.push(output_column(quarter, side, made));
                        columns.push(pct_column(quarter, side, spec));
                    }
                }
            }
            for quarter in QUARTERS {
                columns.push(output_column(quarter, side, "pts"));
            }
        }
        columns
    }

    /// Flatten to cells matching [`QuarterRecord::header`].
    pub fn to_row(&self) -> Vec<String> {
        let mut row = vec![
            self.season_id.clone(),
            self.game_id.clone(),
            self.game_date.clone(),
            self.matchup.clone(),
            format_bool(self.home_win),
            format_bool(self.away_win),
        ];

        for side in Side::ALL {
            let quarters = self.side(side);
            for stat in &quarters.stats {
                for i in 0..NUM_QUARTERS {
                    row.push(stat.values[i].to_string());
                    if let Some(made) = stat.made {
                        row.push(made[i].to_string());
                        row.push(stat.pct[i].map(|p| format!("{:?}", p)).unwrap_or_default());
                    }
                }
            }
            row.extend(quarters.points.iter().map(|p| p.to_string()));
        }
        row
    }
}

/// Percentage column, e.g. `Q1_home_fg3_pct`.
pub fn pct_column(quarter: &str, side: Side, spec: &StatSpec) -> String {
    format!("{}_{}_{}_pct", quarter, side.as_str(), spec.pct_prefix())
}

/// Collect records into the output table.
pub fn records_to_table(records: &[QuarterRecord]) -> Table {
    let mut table = Table::new(QuarterRecord::header());
    for record in records {
        table.push_row(record.to_row());
    }
    table
}

fn format_bool(value: bool) -> String {
    let text = if value { "True" } else { "False" };
    text.to_string()
}
