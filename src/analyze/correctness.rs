use crate::types::facts::Issue;

/// One minus the fraction of known bugs that are still open.
/// A tracker with no bugs scores 1.
pub fn correctness(issues: &[Issue]) -> f64 {
    let (total_bugs, open_bugs) = issues
        .iter()
        .filter(|issue| issue.is_bug)
        .fold((0usize, 0usize), |(total, open), issue| {
            (total + 1, open + usize::from(issue.is_open()))
        });

    if total_bugs == 0 {
        return 1.0;
    }
    1.0 - open_bugs as f64 / total_bugs as f64
}
