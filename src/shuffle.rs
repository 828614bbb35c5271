//! Option shuffling with a map back to the original answer-key order.

use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ShuffleMapping {
    pub shuffled_options: Vec<String>,
    /// `original_index_map[i]` is the 0-based original index of the option
    /// displayed at shuffled position `i`.
    pub original_index_map: Vec<usize>,
}

/// Fisher–Yates from the last index down to 1; every permutation is equally likely.
pub fn shuffle_options<R: Rng + ?Sized>(options: &[String], rng: &mut R) -> ShuffleMapping {
    let mut map: Vec<usize> = (0..options.len()).collect();
    for i in (1..map.len()).rev() {
        let j = rng.gen_range(0..=i);
        map.swap(i, j);
    }
    ShuffleMapping {
        shuffled_options: map.iter().map(|&o| options[o].clone()).collect(),
        original_index_map: map,
    }
}

impl ShuffleMapping {
    /// Builds a mapping from an explicit index map, `None` unless it is a
    /// permutation of the option indices.
    pub fn from_index_map(options: &[String], map: Vec<usize>) -> Option<Self> {
        if !is_permutation(&map, options.len()) {
            return None;
        }
        Some(Self {
            shuffled_options: map.iter().map(|&o| options[o].clone()).collect(),
            original_index_map: map,
        })
    }

    /// Accepts a stored mapping only if it still describes `options`.
    pub fn restore(options: &[String], map: Vec<usize>, shuffled: Vec<String>) -> Option<Self> {
        let mapping = Self::from_index_map(options, map)?;
        (mapping.shuffled_options == shuffled).then_some(mapping)
    }

    pub fn len(&self) -> usize {
        self.original_index_map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.original_index_map.is_empty()
    }

    pub fn original_index(&self, shuffled: usize) -> Option<usize> {
        self.original_index_map.get(shuffled).copied()
    }

    pub fn shuffled_position(&self, original: usize) -> Option<usize> {
        self.original_index_map.iter().position(|&o| o == original)
    }
}

fn is_permutation(map: &[usize], n: usize) -> bool {
    if map.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &o in map {
        match seen.get_mut(o) {
            Some(slot) if !*slot => *slot = true,
            _ => return false,
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn opts(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("opt{i}")).collect()
    }

    #[test]
    fn shuffle_yields_consistent_permutation() {
        let mut rng = StdRng::seed_from_u64(42);
        for n in 0..8 {
            let options = opts(n);
            for _ in 0..20 {
                let m = shuffle_options(&options, &mut rng);
                assert!(is_permutation(&m.original_index_map, n));
                for (i, text) in m.shuffled_options.iter().enumerate() {
                    assert_eq!(text, &options[m.original_index_map[i]]);
                }
            }
        }
    }

    #[test]
    fn shuffle_reaches_every_permutation_of_three() {
        let mut rng = StdRng::seed_from_u64(7);
        let options = opts(3);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..600 {
            seen.insert(shuffle_options(&options, &mut rng).original_index_map);
        }
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn from_index_map_rejects_non_permutations() {
        let options = opts(3);
        assert!(ShuffleMapping::from_index_map(&options, vec![2, 0, 1]).is_some());
        assert!(ShuffleMapping::from_index_map(&options, vec![0, 0, 1]).is_none());
        assert!(ShuffleMapping::from_index_map(&options, vec![0, 1]).is_none());
        assert!(ShuffleMapping::from_index_map(&options, vec![0, 1, 3]).is_none());
    }

    #[test]
    fn restore_requires_matching_texts() {
        let options = opts(3);
        let good = vec!["opt2".to_string(), "opt0".into(), "opt1".into()];
        assert!(ShuffleMapping::restore(&options, vec![2, 0, 1], good).is_some());
        let stale = vec!["x".to_string(), "opt0".into(), "opt1".into()];
        assert!(ShuffleMapping::restore(&options, vec![2, 0, 1], stale).is_none());
    }

    #[test]
    fn positions_round_trip() {
        let m = ShuffleMapping::from_index_map(&opts(3), vec![2, 0, 1]).unwrap();
        assert_eq!(m.original_index(0), Some(2));
        assert_eq!(m.shuffled_position(1), Some(2));
        assert_eq!(m.original_index(3), None);
    }
}
