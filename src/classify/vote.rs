use fxhash::FxHashMap;

use super::types::TieBreak;
use crate::sequence::Neighbor;

/// Order neighbors by descending similarity and keep the first `k`.
///
/// Equal scores keep their training-set order.
pub fn rank_neighbors(neighbors: &[Neighbor], k: usize) -> Vec<Neighbor> {
    let mut ranked = neighbors.to_vec();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked.truncate(k);
    ranked
}

/// Most common label among `labels`, given nearest first.
///
/// Returns `None` when there are no labels to vote with.
pub fn majority_vote<'a, I>(labels: I, tie_break: &TieBreak) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
    let mut order: Vec<&str> = Vec::new();
    for label in labels {
        let count = counts.entry(label).or_insert(0);
        if *count == 0 {
            order.push(label);
        }
        *count += 1;
    }

    let top = counts.values().copied().max()?;
    let tied: Vec<&str> = order
        .into_iter()
        .filter(|label| counts[label] == top)
        .collect();

    let winner = match tie_break {
        TieBreak::Prefer(preferred) if tied.contains(&preferred.as_str()) => preferred.as_str(),
        _ => tied[0],
    };
    Some(winner.to_string())
}
