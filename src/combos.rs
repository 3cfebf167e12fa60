//! Marker combinations.
//!
//! [`power_set`] enumerates subsets by bit mask, so subset `m` contains item
//! `i` exactly when bit `i` of `m` is set. [`ordered_combinations`] then sorts
//! the marker subsets longest first. Rules are later tried in that order, and
//! a longer prefix such as `\$` must be attempted before `\` or `$` alone can
//! claim the same characters.

use crate::marker::{Marker, MarkerSet};

/// Every subset of `items` with at most `max_len` elements.
///
/// Subsets keep the relative order of `items` and come out in mask order
/// (`0..2^n`), so the empty subset is always first.
///
/// # Panics
///
/// Panics if `items` has `usize::BITS` or more elements.
///
/// # Examples
///
/// ```rust
/// use string_grammar::combos::power_set;
///
/// let subsets = power_set(&['a', 'b'], None);
/// assert_eq!(subsets, vec![vec![], vec!['a'], vec!['b'], vec!['a', 'b']]);
///
/// let capped = power_set(&['a', 'b', 'c'], Some(1));
/// assert_eq!(capped.len(), 4);
/// ```
#[must_use]
pub fn power_set<T: Clone>(items: &[T], max_len: Option<usize>) -> Vec<Vec<T>> {
    assert!(
        items.len() < usize::BITS as usize,
        "power_set supports fewer than {} items",
        usize::BITS
    );
    let max_len = max_len.unwrap_or(items.len());

    (0..1usize << items.len())
        .map(|mask| {
            items
                .iter()
                .enumerate()
                .filter(|(i, _)| (mask >> i) & 1 == 1)
                .map(|(_, item)| item.clone())
                .collect::<Vec<_>>()
        })
        .filter(|subset| subset.len() <= max_len)
        .collect()
}

/// All marker sets of at most `max_len` markers, longest first.
///
/// The sort is stable: sets of equal size keep their enumeration order.
///
/// # Examples
///
/// ```rust
/// use string_grammar::combos::ordered_combinations;
/// use string_grammar::MarkerSet;
///
/// let combos = ordered_combinations(4);
/// assert_eq!(combos.len(), 16);
/// assert_eq!(combos.first(), Some(&MarkerSet::full()));
/// assert_eq!(combos.last(), Some(&MarkerSet::empty()));
/// ```
#[must_use]
pub fn ordered_combinations(max_len: usize) -> Vec<MarkerSet> {
    let mut combos: Vec<MarkerSet> = power_set(&Marker::ALL, Some(max_len))
        .into_iter()
        .map(|subset| subset.into_iter().collect())
        .collect();
    combos.sort_by(|a, b| b.len().cmp(&a.len()));
    combos
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_set_of_markers() {
        let subsets = power_set(&Marker::ALL, None);
        assert_eq!(subsets.len(), 16);
        assert_eq!(subsets.iter().filter(|s| s.is_empty()).count(), 1);
        assert_eq!(subsets.iter().filter(|s| s.len() == 4).count(), 1);
    }

    #[test]
    fn test_power_set_preserves_order() {
        let items = ['c', 'a', 'b'];
        for subset in power_set(&items, None) {
            let positions: Vec<usize> = subset
                .iter()
                .filter_map(|x| items.iter().position(|y| y == x))
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_power_set_empty_input() {
        let subsets: Vec<Vec<u8>> = power_set(&[], None);
        assert_eq!(subsets, vec![Vec::<u8>::new()]);
    }

    #[test]
    #[should_panic(expected = "power_set supports fewer than")]
    fn test_power_set_rejects_oversized_input() {
        let items = vec![0u8; usize::BITS as usize];
        let _ = power_set(&items, Some(1));
    }

    #[test]
    fn test_ordering_is_stable() {
        let combos = ordered_combinations(4);
        let singles: Vec<String> = combos
            .iter()
            .filter(|s| s.len() == 1)
            .map(|s| s.to_string())
            .collect();
        assert_eq!(singles, vec!["\\", "$", "%", "#"]);

        let pairs: Vec<String> = combos
            .iter()
            .filter(|s| s.len() == 2)
            .map(|s| s.to_string())
            .collect();
        assert_eq!(pairs, vec!["\\$", "\\%", "$%", "\\#", "$#", "%#"]);
    }

    #[test]
    fn test_capped_combinations() {
        let combos = ordered_combinations(2);
        assert_eq!(combos.len(), 11);
        assert!(combos.iter().all(|s| s.len() <= 2));
        assert_eq!(ordered_combinations(0), vec![MarkerSet::empty()]);
    }
}
