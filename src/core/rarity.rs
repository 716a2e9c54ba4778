use std::collections::{HashMap, HashSet};

use crate::models::Profile;

/// Weight used for tags the corpus has never seen
pub const DEFAULT_RARITY: f64 = 1.0;

/// Inverse-document-frequency weights for interest tags
///
/// `weight(tag) = ln((N + 1) / (df(tag) + 1)) + 1`, where `df` counts the
/// profiles listing the tag in either tier. Weights decrease with popularity
/// and never drop below 1 for tags present in the corpus.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RarityIndex {
    weights: HashMap<String, f64>,
    corpus_size: usize,
}

impl RarityIndex {
    /// Build the index from a corpus snapshot
    pub fn build(corpus: &[Profile]) -> Self {
        let mut document_frequency: HashMap<&str, usize> = HashMap::new();

        for profile in corpus {
            // A tag repeated within one profile counts once
            let tags: HashSet<&str> = profile
                .top_interests
                .iter()
                .chain(profile.extra_interests.iter())
                .map(String::as_str)
                .collect();

            for tag in tags {
                *document_frequency.entry(tag).or_insert(0) += 1;
            }
        }

        let total = corpus.len() as f64;
        let weights = document_frequency
            .into_iter()
            .map(|(tag, df)| {
                let weight = ((total + 1.0) / (df as f64 + 1.0)).ln() + 1.0;
                (tag.to_string(), weight)
            })
            .collect();

        Self {
            weights,
            corpus_size: corpus.len(),
        }
    }

    /// Rarity weight for a tag, [`DEFAULT_RARITY`] when unseen
    #[inline]
    pub fn weight(&self, tag: &str) -> f64 {
        self.weights.get(tag).copied().unwrap_or(DEFAULT_RARITY)
    }

    pub fn corpus_size(&self) -> usize {
        self.corpus_size
    }

    /// Number of distinct tags in the corpus
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

/// Build a rarity mapping for a corpus
pub fn build_rarity(corpus: &[Profile]) -> RarityIndex {
    RarityIndex::build(corpus)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(id: &str, top: &[&str], extra: &[&str]) -> Profile {
        Profile {
            id: id.to_string(),
            top_interests: top.iter().map(|s| s.to_string()).collect(),
            extra_interests: extra.iter().map(|s| s.to_string()).collect(),
            ..Profile::default()
        }
    }

    #[test]
    fn test_rarity_formula() {
        let corpus = vec![
            profile("1", &["coffee", "hiking"], &[]),
            profile("2", &["coffee"], &["chess"]),
            profile("3", &["coffee"], &[]),
        ];

        let index = build_rarity(&corpus);

        // coffee: df = 3, N = 3
        assert!((index.weight("coffee") - 1.0).abs() < 1e-12);
        // chess: df = 1
        let expected = (4.0_f64 / 2.0).ln() + 1.0;
        assert!((index.weight("chess") - expected).abs() < 1e-12);
        assert!(index.weight("chess") > index.weight("coffee"));
        assert_eq!(index.corpus_size(), 3);
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn test_repeats_within_profile_count_once() {
        let corpus = vec![
            profile("1", &["coffee"], &["coffee"]),
            profile("2", &["music"], &[]),
        ];

        let index = build_rarity(&corpus);
        let expected = (3.0_f64 / 2.0).ln() + 1.0;
        assert!((index.weight("coffee") - expected).abs() < 1e-12);
    }

    #[test]
    fn test_unseen_and_empty_corpus() {
        let index = build_rarity(&[]);
        assert!(index.is_empty());
        assert_eq!(index.weight("anything"), DEFAULT_RARITY);
    }
}
