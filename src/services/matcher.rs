use std::collections::HashMap;

use crate::models::InterestRecord;

/// Returned when no record matches the personality code
pub const FALLBACK_INTEREST: &str = "General Interest";

/// Low-information categories that should not win on volume alone
pub const PLACEHOLDER_INTERESTS: &[&str] = &["Unknown", "Others"];

/// Removes every single and double quote from an interest value
fn normalize_interest(interest: &str) -> String {
    interest.chars().filter(|c| !matches!(c, '\'' | '"')).collect()
}

/// Counts interests for one personality, in first-encountered order
fn count_interests<'a>(
    personality: &str,
    records: impl IntoIterator<Item = &'a InterestRecord>,
) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records
        .into_iter()
        .filter(|r| r.personality == personality)
    {
        let interest = normalize_interest(&record.interest);
        match index.get(&interest) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(interest.clone(), counts.len());
                counts.push((interest, 1));
            }
        }
    }

    counts
}

/// Finds the most frequent interest for `personality` in the dataset
///
/// `personality` is expected upper-cased. Ties go to whichever interest was
/// seen first. A top-ranked placeholder ("Unknown", "Others") is demoted in
/// favour of the runner-up when there is one; the runner-up is taken as-is.
pub fn statistical_match<'a>(
    personality: &str,
    records: impl IntoIterator<Item = &'a InterestRecord>,
) -> String {
    let mut ranked = count_interests(personality, records);
    if ranked.is_empty() {
        return FALLBACK_INTEREST.to_string();
    }

    // Stable: equal counts keep insertion order
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    let top = if PLACEHOLDER_INTERESTS.contains(&ranked[0].0.as_str()) && ranked.len() > 1 {
        1
    } else {
        0
    };

    ranked.swap_remove(top).0
}
