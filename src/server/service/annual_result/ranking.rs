//! Class ranking within a cohort.
//!
//! A cohort is the set of results sharing a specialization and study level. Ranks use
//! standard competition ranking: equal averages share a rank and the next rank skips
//! ahead, so averages 15, 14, 14, 12 rank 1, 2, 2, 4.

use std::collections::BTreeMap;

/// One annual result to be ranked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankingEntry {
    pub result_id: i32,
    pub specialization_id: i32,
    pub study_level: i32,
    pub average: Option<f64>,
}

/// Computes the rank of every entry, keyed by result ID.
///
/// Entries without an average get no rank.
pub fn rank(entries: &[RankingEntry]) -> BTreeMap<i32, Option<i32>> {
    let mut cohorts: BTreeMap<(i32, i32), Vec<(i32, f64)>> = BTreeMap::new();
    let mut ranks = BTreeMap::new();

    for entry in entries {
        match entry.average {
            Some(average) => cohorts
                .entry((entry.specialization_id, entry.study_level))
                .or_default()
                .push((entry.result_id, average)),
            None => {
                ranks.insert(entry.result_id, None);
            }
        }
    }

    for mut cohort in cohorts.into_values() {
        cohort.sort_by(|(a_id, a), (b_id, b)| b.total_cmp(a).then(a_id.cmp(b_id)));

        let mut current_rank = 0;
        let mut previous: Option<f64> = None;
        for (position, (result_id, average)) in cohort.into_iter().enumerate() {
            if previous != Some(average) {
                current_rank = position as i32 + 1;
                previous = Some(average);
            }
            ranks.insert(result_id, Some(current_rank));
        }
    }

    ranks
}
