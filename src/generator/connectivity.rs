// src/generator/connectivity.rs
// Acceptance rules for a candidate corridor against the columns already carved.

use crate::map::Cell;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Which earlier columns a new corridor must line up with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectivityRule {
    /// Some row of the candidate must be open on rows `i-1..=i+1` of the
    /// previous column and sit in a mostly open window of the column before.
    #[default]
    TwoBack,
    /// The candidate only has to overlap the previous column's corridor.
    OneBack,
}

/// Thresholds for the two-back window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowParams {
    /// Largest row offset probed on either side of a candidate row.
    pub radius: usize,
    /// Open cells the window must contain.
    pub required: usize,
}

/// Decides whether `candidate` rows may become the corridor of the next
/// column, given the two previously finalized columns.
///
/// `two_back` is ignored by [`ConnectivityRule::OneBack`] and may be `None`
/// when the candidate column is the second one.
pub fn accepts(
    rule: ConnectivityRule,
    two_back: Option<&[Cell]>,
    one_back: &[Cell],
    candidate: Range<usize>,
    params: WindowParams,
) -> bool {
    match rule {
        ConnectivityRule::OneBack => overlaps(one_back, candidate),
        ConnectivityRule::TwoBack => match two_back {
            Some(two_back) => candidate
                .into_iter()
                .any(|row| row_accepted(two_back, one_back, row, params)),
            None => false,
        },
    }
}

fn overlaps(one_back: &[Cell], candidate: Range<usize>) -> bool {
    candidate
        .into_iter()
        .any(|row| one_back.get(row).is_some_and(|c| c.is_path()))
}

fn row_accepted(two_back: &[Cell], one_back: &[Cell], row: usize, params: WindowParams) -> bool {
    // Rows off either end of the column fail continuity.
    let Some(above) = row.checked_sub(1) else {
        return false;
    };
    let continuous = [above, row, row + 1]
        .iter()
        .all(|&r| one_back.get(r).is_some_and(|c| c.is_path()));

    continuous && window_matches(two_back, row, params.radius) >= params.required
}

/// Counts open cells at `row + j` and `row - j` for `j` in `0..=radius`.
/// Offset zero is probed from both sides and so counts twice. Probes that
/// fall outside the column count as nothing.
pub fn window_matches(column: &[Cell], row: usize, radius: usize) -> usize {
    let is_open = |r: Option<usize>| {
        r.and_then(|r| column.get(r))
            .is_some_and(|c| c.is_path()) as usize
    };
    (0..=radius)
        .map(|j| is_open(row.checked_add(j)) + is_open(row.checked_sub(j)))
        .sum()
}
