use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use splaydict::spelling::{SplayTree, levenshtein_distance};

const ALPHABET: &[u8] = b"abcde";

fn random_word(rng: &mut StdRng) -> String {
    let len = rng.random_range(0..=4);
    (0..len)
        .map(|_| char::from(ALPHABET[rng.random_range(0..ALPHABET.len())]))
        .collect()
}

fn assert_matches_model(tree: &SplayTree, model: &BTreeMap<String, u32>) {
    let actual: Vec<(&str, u32)> = tree.iter().collect();
    let expected: Vec<(&str, u32)> = model.iter().map(|(k, v)| (k.as_str(), *v)).collect();

    assert_eq!(actual, expected);
    assert_eq!(tree.len(), model.len());
}

#[test]
fn test_random_operations_match_ordered_map() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut tree = SplayTree::new();
    let mut model: BTreeMap<String, u32> = BTreeMap::new();

    for step in 0..5_000 {
        let word = random_word(&mut rng);
        match rng.random_range(0..10) {
            0..=4 => {
                let count = tree.insert(&word);
                let expected = model.entry(word.clone()).or_insert(0);
                *expected += 1;
                assert_eq!(count, *expected, "insert {word:?} at step {step}");
                assert_eq!(tree.root_key(), Some(word.as_str()));
            }
            5..=6 => {
                let removed = tree.delete(&word);
                assert_eq!(removed, model.remove(&word).is_some(), "delete {word:?}");
                assert_eq!(tree.get(&word), 0);
            }
            _ => {
                let expected = model.get(&word).copied().unwrap_or(0);
                assert_eq!(tree.get(&word), expected, "get {word:?} at step {step}");
                if expected > 0 {
                    assert_eq!(tree.root_key(), Some(word.as_str()));
                }
            }
        }

        if step % 250 == 0 {
            assert_matches_model(&tree, &model);
        }
    }

    assert_matches_model(&tree, &model);
}

#[test]
fn test_in_order_walk_is_strictly_ascending() {
    let mut rng = StdRng::seed_from_u64(17);
    let mut tree = SplayTree::new();

    for _ in 0..2_000 {
        let word = random_word(&mut rng);
        if rng.random_bool(0.3) {
            tree.delete(&word);
        } else {
            tree.insert(&word);
        }
    }

    let keys = tree.traverse();
    assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_counts_survive_unrelated_deletes() {
    let mut tree = SplayTree::new();
    let words = ["berlin", "cairo", "delhi", "lima", "oslo", "quito", "rome"];

    for (i, word) in words.iter().enumerate() {
        for _ in 0..=i {
            tree.insert(word);
        }
    }

    assert!(tree.delete("delhi"));
    assert!(tree.delete("berlin"));
    assert!(!tree.delete("madrid"));

    for (i, word) in words.iter().enumerate() {
        let expected = match *word {
            "delhi" | "berlin" => 0,
            _ => i as u32 + 1,
        };
        assert_eq!(tree.get(word), expected, "{word}");
    }
}

#[test]
fn test_similar_words_is_exact_threshold_filter() {
    let mut rng = StdRng::seed_from_u64(99);
    let tree: SplayTree = (0..400).map(|_| random_word(&mut rng)).collect();

    for query in ["", "a", "abc", "edcb", "aaaa", "bead"] {
        for threshold in 0..=4 {
            let expected: Vec<String> = tree
                .keys()
                .filter(|key| levenshtein_distance(key, query) <= threshold)
                .map(str::to_owned)
                .collect();

            assert_eq!(
                tree.similar_words(query, threshold),
                expected,
                "{query:?} within {threshold}"
            );
        }
    }
}

#[test]
fn test_paris_scenario() {
    let mut tree = SplayTree::new();
    for word in ["paris", "pari", "parish", "london"] {
        tree.insert(word);
    }

    assert_eq!(tree.get("paris"), 1);

    let similar = tree.similar_words("paris", 1);
    assert_eq!(similar, vec!["pari", "paris", "parish"]);
    assert!(!similar.contains(&"london".to_string()));
}

#[test]
fn test_tokyo_scenario() {
    let mut tree = SplayTree::new();
    for _ in 0..3 {
        tree.insert("tokyo");
    }

    assert_eq!(tree.get("tokyo"), 3);
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.keys().filter(|key| *key == "tokyo").count(), 1);
}

#[test]
fn test_rome_on_empty_tree() {
    let mut tree = SplayTree::new();

    assert_eq!(tree.get("rome"), 0);
    assert!(tree.similar_words("rome", 2).is_empty());
    assert!(!tree.delete("rome"));
    assert!(tree.is_empty());
}

#[test]
fn test_sorted_load_then_lookup_rebalances() {
    let words: Vec<String> = (0..10_000).map(|i| format!("city{i:05}")).collect();
    let mut tree: SplayTree = words.iter().collect();
    assert_eq!(tree.height(), 10_000);

    for word in words.iter().step_by(97) {
        assert_eq!(tree.get(word), 1);
    }

    assert!(tree.height() < 10_000 / 2);
    assert_eq!(tree.len(), 10_000);
}
