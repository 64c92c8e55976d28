use crate::solve::RunResult;

/// Orders results ascending by visited count, elapsed time breaking ties.
/// Fewest expansions wins; the clock only decides between equally thorough
/// runs. The sort is stable, so fully tied results keep their input order.
pub fn rank(mut results: Vec<RunResult>) -> Vec<RunResult> {
    results.sort_by_key(|result| (result.visited.len(), result.elapsed));
    results
}
