use crate::analyzers::types::RaceResult;

/// Returns the results ordered by ascending round.
///
/// The sort is stable, so entries within a round keep their upstream
/// (finishing) order.
pub fn sorted_by_round(results: &[RaceResult]) -> Vec<&RaceResult> {
    let mut sorted: Vec<&RaceResult> = results.iter().collect();
    sorted.sort_by_key(|r| r.round);
    sorted
}
