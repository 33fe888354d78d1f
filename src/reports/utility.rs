use std::collections::BTreeMap;

/// Returns the most frequent value and its count, breaking ties toward the
/// smallest value. Returns `None` for empty input.
pub fn mode_min<T, I>(values: I) -> Option<(T, usize)>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut counts: BTreeMap<T, usize> = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_default() += 1;
    }

    let best = counts.values().copied().max()?;

    // The map iterates in ascending key order, so the first entry at the
    // winning count is the smallest tied candidate.
    counts.into_iter().find(|(_, count)| *count == best)
}

/// Counts occurrences of each present value, skipping missing ones.
pub fn count_values<'a, I>(values: I) -> BTreeMap<String, usize>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut counts = BTreeMap::new();
    for value in values.into_iter().flatten() {
        *counts.entry(value.to_string()).or_default() += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_min_single_winner() {
        assert_eq!(mode_min([2u32, 1, 2, 3]), Some((2, 2)));
    }

    #[test]
    fn test_mode_min_tie_resolves_to_smallest() {
        assert_eq!(mode_min([1995, 1990, 1995, 1990]), Some((1990, 2)));
    }

    #[test]
    fn test_mode_min_empty() {
        assert_eq!(mode_min(Vec::<u32>::new()), None);
    }

    #[test]
    fn test_mode_min_string_tie_is_lexicographic() {
        assert_eq!(mode_min(["b", "a", "a", "b"]), Some(("a", 2)));
    }

    #[test]
    fn test_mode_min_pair_compares_start_first() {
        let pairs = [("b", "a"), ("a", "z"), ("b", "a"), ("a", "z")];
        assert_eq!(mode_min(pairs), Some((("a", "z"), 2)));
    }

    #[test]
    fn test_count_values_skips_missing() {
        let counts = count_values([Some("Male"), None, Some("Female"), Some("Male")]);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts["Male"], 2);
        assert_eq!(counts["Female"], 1);
    }
}
