/// Level derived from cumulative score.
///
/// Brackets are evaluated top-down; first match wins, ties resolve to the
/// higher bracket. The table is non-contiguous — levels 4 and 6 through 9
/// are unreachable. That is the tuning the game shipped with; keep the gaps.
pub fn level_for_score(total_score: u64) -> u32 {
    if total_score >= 10_000 {
        10
    } else if total_score >= 5_000 {
        5
    } else if total_score >= 2_000 {
        3
    } else if total_score >= 1_000 {
        2
    } else {
        1
    }
}
