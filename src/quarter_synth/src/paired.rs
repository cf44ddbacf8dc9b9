use rand::seq::SliceRandom;
use rand::Rng;
use std::cmp::Ordering;
use tracing::debug;

use crate::constants::{NUM_QUARTERS, PCT_DECIMALS};
use crate::error::{Result, SynthError};
use crate::split::{split_total, SplitMethod};

/// One stat's values for each quarter.
pub type QuarterSplit = [u32; NUM_QUARTERS];

/// Attempts and made values per quarter, with made <= attempts in every quarter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PairedSplit {
    pub attempts: QuarterSplit,
    pub made: QuarterSplit,
}

/// Split a total across the four quarters.
pub fn split_quarters<R: Rng + ?Sized>(
    value: u32,
    method: SplitMethod,
    rng: &mut R,
) -> Result<QuarterSplit> {
    split_total(value, NUM_QUARTERS, method, rng)?
        .try_into()
        .map_err(|_| SynthError::InvalidPartCount {
            parts: NUM_QUARTERS,
        })
}

/// Split attempts first, then allocate made so that made <= attempts each quarter.
///
/// A made total above the attempts total is clamped down to it. The made
/// proportions are drawn independently of the attempts proportions, clipped
/// to each quarter's attempts, and any clipped units are handed out one at a
/// time to quarters with spare capacity, visiting quarters in a fresh random
/// order on every pass.
///
/// # Returns
/// The per-quarter split, or `SynthError::UnplacedMade` if a pass over all
/// quarters finds no spare capacity while units remain.
pub fn split_attempts_and_made<R: Rng + ?Sized>(
    attempts_total: u32,
    made_total: u32,
    method: SplitMethod,
    rng: &mut R,
) -> Result<PairedSplit> {
    let attempts = split_quarters(attempts_total, method, rng)?;

    let made_total = if made_total > attempts_total {
        debug!(attempts_total, made_total, "made exceeds attempts, clamping");
        attempts_total
    } else {
        made_total
    };

    let mut made = [0; NUM_QUARTERS];
    if made_total == 0 {
        return Ok(PairedSplit { attempts, made });
    }

    let raw = split_quarters(made_total, method, rng)?;
    for i in 0..NUM_QUARTERS {
        made[i] = raw[i].min(attempts[i]);
    }

    let mut leftover = made_total - made.iter().sum::<u32>();
    let mut order: [usize; NUM_QUARTERS] = [0, 1, 2, 3];
    while leftover > 0 {
        order.shuffle(rng);
        let mut placed = false;
        for &i in &order {
            if made[i] < attempts[i] {
                made[i] += 1;
                leftover -= 1;
                placed = true;
                if leftover == 0 {
                    break;
                }
            }
        }
        if !placed {
            return Err(SynthError::UnplacedMade { leftover });
        }
    }

    Ok(PairedSplit { attempts, made })
}

/// Shooting percentage for one quarter, `None` when there were no attempts.
///
/// `made / attempts` rounded to `PCT_DECIMALS` places, ties to even. The
/// rounding is done on the exact ratio in integers, so ties such as
/// 1/16 = 0.0625 are seen as ties.
pub fn shooting_pct(made: u32, attempts: u32) -> Option<f64> {
    if attempts == 0 {
        return None;
    }

    let scale = 10u128.pow(PCT_DECIMALS);
    let scaled = made as u128 * scale;
    let attempts = attempts as u128;
    let (mut units, rem) = (scaled / attempts, scaled % attempts);
    match (2 * rem).cmp(&attempts) {
        Ordering::Greater => units += 1,
        Ordering::Equal if units % 2 == 1 => units += 1,
        _ => {}
    }
    Some(units as f64 / scale as f64)
}
