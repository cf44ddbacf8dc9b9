use std::collections::HashMap;

use crate::constants::REQUIRED_COLUMNS;
use crate::error::Result;
use crate::stats::{input_column, Side, SPLIT_STATS};
use crate::table::{parse_count, Table};

/// One historical game with per-side totals.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GameRow {
    pub season_id: String,
    pub game_id: String,
    pub game_date: String,
    pub matchup: String,
    pub wl_home: String,
    pub wl_away: String,

    /// Normalized totals keyed by input column, e.g. `fga_home`
    pub totals: HashMap<String, u32>,
}

impl GameRow {
    pub fn new(
        season_id: &str,
        game_id: &str,
        game_date: &str,
        matchup: &str,
        wl_home: &str,
        wl_away: &str,
    ) -> Self {
        GameRow {
            season_id: season_id.to_string(),
            game_id: game_id.to_string(),
            game_date: game_date.to_string(),
            matchup: matchup.to_string(),
            wl_home: wl_home.to_string(),
            wl_away: wl_away.to_string(),
            totals: HashMap::new(),
        }
    }

    /// Set a total by input column name.
    pub fn with_total(mut self, column: &str, value: u32) -> Self {
        self.totals.insert(column.to_string(), value);
        self
    }

    /// Game total for a stat and side; missing totals are zero.
    pub fn total(&self, stat: &str, side: Side) -> u32 {
        self.totals
            .get(&input_column(stat, side))
            .copied()
            .unwrap_or(0)
    }

    /// Build the row at `index` of an already validated table.
    ///
    /// Only the configured stat columns are read; their cells are normalized
    /// with [`parse_count`].
    pub fn from_table(table: &Table, index: usize) -> Result<Self> {
        let text = |column: &str| table.cell(index, column).unwrap_or("").to_string();

        let mut totals = HashMap::new();
        for side in Side::ALL {
            for spec in SPLIT_STATS.iter() {
                for stat in std::iter::once(spec.name).chain(spec.made) {
                    let column = input_column(stat, side);
                    let value = parse_count(table.cell(index, &column), &column, index)?;
                    totals.insert(column, value);
                }
            }
        }

        Ok(GameRow {
            season_id: text("season_id"),
            game_id: text("game_id"),
            game_date: text("game_date"),
            matchup: text("matchup_home"),
            wl_home: text("wl_home"),
            wl_away: text("wl_away"),
            totals,
        })
    }

    /// Validate the schema, then read every row.
    pub fn all_from_table(table: &Table) -> Result<Vec<Self>> {
        table.require_columns(&REQUIRED_COLUMNS)?;
        (0..table.len())
            .map(|index| GameRow::from_table(table, index))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SynthError;

    fn sample_table() -> Table {
        let csv = "season_id,game_id,game_date,matchup_home,wl_home,wl_away,fga_home,fgm_home,oreb_away\n\
                   22015,21500001,2015-10-27,DET @ ATL,L,W,40.0,18,NaN\n";
        Table::from_reader(csv.as_bytes()).unwrap()
    }

    #[test]
    fn test_from_table() {
        let rows = GameRow::all_from_table(&sample_table()).unwrap();
        assert_eq!(rows.len(), 1);

        let row = &rows[0];
        assert_eq!(row.game_id, "21500001");
        assert_eq!(row.matchup, "DET @ ATL");
        assert_eq!(row.total("fga", Side::Home), 40);
        assert_eq!(row.total("fgm", Side::Home), 18);
        assert_eq!(row.total("oreb", Side::Away), 0);
        // Column absent from the table entirely
        assert_eq!(row.total("tov", Side::Home), 0);
    }

    #[test]
    fn test_missing_required_column() {
        let csv = "season_id,game_id,game_date,wl_home,wl_away\n1,2,2020-01-01,W,L\n";
        let table = Table::from_reader(csv.as_bytes()).unwrap();

        let err = GameRow::all_from_table(&table).unwrap_err();
        assert!(matches!(err, SynthError::MissingColumn { ref column } if column == "matchup_home"));
    }

    #[test]
    fn test_builder() {
        let row = GameRow::new("1", "2", "2020-01-01", "A vs. B", "W", "L").with_total("ast_away", 21);
        assert_eq!(row.total("ast", Side::Away), 21);
        assert_eq!(row.total("ast", Side::Home), 0);
    }
}
