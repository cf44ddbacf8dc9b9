//! Python bindings via PyO3.

use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::SynthConfig;
use crate::constants::{NUM_QUARTERS, QUARTERS};
use crate::error::SynthError;
use crate::paired::split_attempts_and_made;
use crate::points::points;
use crate::split::{split_total, SplitMethod};
use crate::synth::synthesize_quarters;
use crate::table::Table;

impl From<SynthError> for PyErr {
    fn from(err: SynthError) -> PyErr {
        match &err {
            SynthError::Io(_) => PyIOError::new_err(err.to_string()),
            _ => PyValueError::new_err(err.to_string()),
        }
    }
}

fn rng_from(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Split a total into `n` random parts that sum exactly to it.
#[pyfunction]
#[pyo3(name = "split_total", signature = (value, n = 4, seed = None, split_method = "floor_fill"))]
fn py_split_total(
    value: u32,
    n: usize,
    seed: Option<u64>,
    split_method: &str,
) -> PyResult<Vec<u32>> {
    let method: SplitMethod = split_method.parse()?;
    let mut rng = rng_from(seed);
    Ok(split_total(value, n, method, &mut rng)?)
}

/// Split attempts and made totals into quarters with made <= attempts.
///
/// Returns (attempts_quarters, made_quarters).
#[pyfunction]
#[pyo3(
    name = "split_attempts_and_made",
    signature = (attempts_total, made_total, seed = None, split_method = "floor_fill")
)]
fn py_split_attempts_and_made(
    attempts_total: u32,
    made_total: u32,
    seed: Option<u64>,
    split_method: &str,
) -> PyResult<(Vec<u32>, Vec<u32>)> {
    let method: SplitMethod = split_method.parse()?;
    let mut rng = rng_from(seed);
    let split = split_attempts_and_made(attempts_total, made_total, method, &mut rng)?;
    Ok((split.attempts.to_vec(), split.made.to_vec()))
}

/// Points from made field goals, made threes and made free throws.
#[pyfunction]
#[pyo3(name = "points")]
fn py_points(made_field_goals: u32, made_threes: u32, made_free_throws: u32) -> u64 {
    points(made_field_goals, made_threes, made_free_throws)
}

/// Read a games CSV, synthesize quarters and write the result.
///
/// Returns the number of games written.
#[pyfunction]
#[pyo3(
    name = "synthesize_csv",
    signature = (input, output, seed = None, parallel = true, split_method = "floor_fill")
)]
fn py_synthesize_csv(
    py: Python<'_>,
    input: &str,
    output: &str,
    seed: Option<u64>,
    parallel: bool,
    split_method: &str,
) -> PyResult<usize> {
    let config = SynthConfig {
        seed,
        split_method: split_method.parse()?,
        parallel,
    };

    let written = py.allow_threads(|| -> Result<usize, SynthError> {
        let games = Table::from_path(input)?;
        let quarters = synthesize_quarters(&games, config)?;
        quarters.to_path(output)?;
        Ok(quarters.len())
    })?;
    Ok(written)
}

/// Python module definition
#[pymodule]
fn quarter_synth(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_split_total, m)?)?;
    m.add_function(wrap_pyfunction!(py_split_attempts_and_made, m)?)?;
    m.add_function(wrap_pyfunction!(py_points, m)?)?;
    m.add_function(wrap_pyfunction!(py_synthesize_csv, m)?)?;

    m.add("NUM_QUARTERS", NUM_QUARTERS)?;
    m.add("QUARTERS", QUARTERS.to_vec())?;

    Ok(())
}
