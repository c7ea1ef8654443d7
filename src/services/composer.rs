use rand::{seq::SliceRandom, Rng};

use crate::models::RecommendationSlot;

/// Reference slots shown next to the statistical match
const REFERENCE_SLOTS: usize = 2;

/// Picks the reference interests that accompany `statistical`
///
/// Entries equal to the statistical interest (case-insensitive) are dropped
/// before the first two are taken.
pub fn select_references<'a>(statistical: &str, references: &[&'a str]) -> Vec<&'a str> {
    let statistical = statistical.to_lowercase();
    let candidates: Vec<&str> = references
        .iter()
        .copied()
        .filter(|r| r.to_lowercase() != statistical)
        .collect();

    let mut selected: Vec<&str> = candidates.iter().copied().take(REFERENCE_SLOTS).collect();
    if selected.len() < REFERENCE_SLOTS && candidates.len() > REFERENCE_SLOTS {
        selected.push(candidates[REFERENCE_SLOTS]);
    }

    selected
}

/// Combines one statistical match with catalog entries into shuffled slots
///
/// Returns three slots unless the reference list is too short to supply two
/// distinct entries. The order is a uniform permutation drawn from `rng`, so
/// position says nothing about provenance.
pub fn compose<R: Rng + ?Sized>(
    statistical: &str,
    references: &[&str],
    rng: &mut R,
) -> Vec<RecommendationSlot> {
    let mut slots = Vec::with_capacity(REFERENCE_SLOTS + 1);
    slots.push(RecommendationSlot::statistical(statistical));
    slots.extend(
        select_references(statistical, references)
            .into_iter()
            .map(RecommendationSlot::reference),
    );

    slots.shuffle(rng);
    slots
}
