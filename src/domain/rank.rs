//! Dense ranking.
//!
//! Highest score gets rank 1, ties share a rank, and the next distinct
//! score continues at `previous + 1` with no gaps. This is the same
//! ordering SQLite's `DENSE_RANK() OVER (ORDER BY sat_score DESC)` yields.

use super::score::Score;

/// Dense rank for each score, in input order.
///
/// ```
/// use satboard::domain::{dense_ranks, Score};
///
/// let scores: Vec<Score> = [90, 90, 70].into_iter().map(|s| Score::try_new(s).unwrap()).collect();
/// assert_eq!(dense_ranks(&scores), vec![1, 1, 2]);
/// ```
#[must_use]
pub fn dense_ranks(scores: &[Score]) -> Vec<u32> {
    let mut distinct: Vec<Score> = scores.to_vec();
    distinct.sort_unstable_by(|a, b| b.cmp(a));
    distinct.dedup();

    scores
        .iter()
        .map(|score| {
            // `distinct` is sorted descending; position + 1 is the rank.
            let position = distinct.partition_point(|d| d > score);
            position as u32 + 1
        })
        .collect()
}
