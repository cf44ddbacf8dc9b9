use crate::constants::NUM_QUARTERS;
use crate::paired::QuarterSplit;

/// Points per quarter. Wider than the counts: three `u32` makes can add up
/// past `u32::MAX`.
pub type QuarterPoints = [u64; NUM_QUARTERS];

/// Points scored from made shots.
///
/// `2 * (fgm - fg3m) + 3 * fg3m + ftm`, written as `2 * fgm + fg3m + ftm` so
/// a malformed row with fg3m > fgm cannot underflow. Computed in `u64`, which
/// holds the largest possible result (4 * `u32::MAX`).
pub fn points(made_field_goals: u32, made_threes: u32, made_free_throws: u32) -> u64 {
    2 * made_field_goals as u64 + made_threes as u64 + made_free_throws as u64
}

/// Points for each quarter from already-allocated made values.
pub fn quarter_points(
    made_field_goals: &QuarterSplit,
    made_threes: &QuarterSplit,
    made_free_throws: &QuarterSplit,
) -> QuarterPoints {
    std::array::from_fn(|i| points(made_field_goals[i], made_threes[i], made_free_throws[i]))
}
