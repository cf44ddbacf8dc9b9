use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::config::SynthConfig;
use crate::constants::{NUM_QUARTERS, WIN_FLAG};
use crate::error::Result;
use crate::game::GameRow;
use crate::paired::{split_attempts_and_made, split_quarters, QuarterSplit};
use crate::points::quarter_points;
use crate::record::{records_to_table, QuarterRecord, SideQuarters, StatQuarters};
use crate::stats::{Side, FIELD_GOALS_MADE, FREE_THROWS_MADE, SPLIT_STATS, THREES_MADE};
use crate::table::Table;

/// Turns per-game totals into per-quarter records.
#[derive(Clone, Debug, Default)]
pub struct QuarterSynthesizer {
    config: SynthConfig,
}

impl QuarterSynthesizer {
    pub fn new(config: SynthConfig) -> Self {
        QuarterSynthesizer { config }
    }

    pub fn config(&self) -> &SynthConfig {
        &self.config
    }

    /// Allocate every configured stat for one side, then derive points.
    pub fn synthesize_side<R: Rng + ?Sized>(
        &self,
        row: &GameRow,
        side: Side,
        rng: &mut R,
    ) -> Result<SideQuarters> {
        let method = self.config.split_method;
        let mut stats = Vec::with_capacity(SPLIT_STATS.len());

        for &spec in SPLIT_STATS.iter() {
            let total = row.total(spec.name, side);
            let quarters = match spec.made {
                Some(made) => {
                    let made_total = row.total(made, side);
                    let split = split_attempts_and_made(total, made_total, method, rng)?;
                    StatQuarters::paired(spec, split)
                }
                None => StatQuarters::standalone(spec, split_quarters(total, method, rng)?),
            };
            stats.push(quarters);
        }

        let mut quarters = SideQuarters {
            stats,
            points: [0; NUM_QUARTERS],
        };
        // Points only once all made values are final
        let made = |stat: &str| -> QuarterSplit { quarters.values(stat).unwrap_or_default() };
        let points = quarter_points(
            &made(FIELD_GOALS_MADE),
            &made(THREES_MADE),
            &made(FREE_THROWS_MADE),
        );
        quarters.points = points;

        Ok(quarters)
    }

    /// Synthesize one game: home side first, then away.
    pub fn synthesize_game<R: Rng + ?Sized>(
        &self,
        row: &GameRow,
        rng: &mut R,
    ) -> Result<QuarterRecord> {
        let home = self.synthesize_side(row, Side::Home, rng)?;
        let away = self.synthesize_side(row, Side::Away, rng)?;

        Ok(QuarterRecord {
            season_id: row.season_id.clone(),
            game_id: row.game_id.clone(),
            game_date: row.game_date.clone(),
            matchup: row.matchup.clone(),
            home_win: row.wl_home == WIN_FLAG,
            away_win: row.wl_away == WIN_FLAG,
            home,
            away,
        })
    }

    /// Synthesize every game.
    ///
    /// A master RNG hands each game its own seed in input order, so results
    /// for a given seed do not depend on whether games run in parallel.
    pub fn synthesize_rows(&self, rows: &[GameRow]) -> Result<Vec<QuarterRecord>> {
        let mut master = match self.config.seed {
            Some(s) => ChaCha8Rng::seed_from_u64(s),
            None => ChaCha8Rng::from_entropy(),
        };
        let seeds: Vec<u64> = rows.iter().map(|_| master.gen::<u64>()).collect();

        info!(
            games = rows.len(),
            seed = ?self.config.seed,
            parallel = self.config.parallel,
            "synthesizing quarter stats"
        );

        let run = |(row, &seed): (&GameRow, &u64)| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let record = self.synthesize_game(row, &mut rng);
            debug!(game_id = %row.game_id, "game synthesized");
            record
        };

        if self.config.parallel {
            rows.par_iter().zip(seeds.par_iter()).map(run).collect()
        } else {
            rows.iter().zip(seeds.iter()).map(run).collect()
        }
    }

    /// Validate the input schema, synthesize all games and build the output table.
    ///
    /// Any error aborts the whole run; no partial table is returned.
    pub fn synthesize_table(&self, table: &Table) -> Result<Table> {
        let rows = GameRow::all_from_table(table).map_err(|err| {
            if err.is_schema_error() {
                warn!(%err, columns = table.columns.len(), "input table rejected");
            }
            err
        })?;
        let records = self.synthesize_rows(&rows)?;
        info!(records = records.len(), "quarter table built");
        Ok(records_to_table(&records))
    }
}

/// Synthesize a quarter table from a game table with the given config.
pub fn synthesize_quarters(table: &Table, config: SynthConfig) -> Result<Table> {
    QuarterSynthesizer::new(config).synthesize_table(table)
}
