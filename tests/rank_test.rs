//! Tests for rank lookups: indexing, factorial decoding, tree search

use rayon::prelude::*;
use rstest::rstest;

use pmtree::util::testing::init_test_setup;
use pmtree::{build_tree, decode_rank, enumerate_all, index_rank, search_rank, BuildStrategy, PermTree};

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

// ============================================================
// Concrete Scenarios
// ============================================================

#[rstest]
#[case(1, "123")]
#[case(2, "132")]
#[case(3, "213")]
#[case(4, "231")]
#[case(5, "312")]
#[case(6, "321")]
fn given_sorted_three_symbols_when_looking_up_rank_then_all_strategies_agree(
    #[case] rank: i64,
    #[case] expected: &str,
) {
    init_test_setup();
    // Arrange
    let tree = build_tree(&['1', '2', '3']);

    // Act & Assert
    assert_eq!(decode_rank(&tree, rank), chars(expected));
    assert_eq!(search_rank(&tree, rank), chars(expected));
    assert_eq!(index_rank(&tree, rank), chars(expected));
}

// ============================================================
// Boundary Behavior
// ============================================================

#[rstest]
#[case(0)]
#[case(-1)]
#[case(i64::MIN)]
#[case(7)]
#[case(i64::MAX)]
fn given_out_of_range_rank_when_looking_up_then_returns_empty(#[case] rank: i64) {
    let tree = build_tree(&['1', '2', '3']);

    assert!(decode_rank(&tree, rank).is_empty());
    assert!(search_rank(&tree, rank).is_empty());
    assert!(index_rank(&tree, rank).is_empty());
}

#[rstest]
#[case(-1)]
#[case(0)]
#[case(1)]
#[case(2)]
fn given_empty_tree_when_looking_up_any_rank_then_returns_empty(#[case] rank: i64) {
    let tree = build_tree::<char>(&[]);

    assert_eq!(tree.total_permutations(), 0);
    assert!(decode_rank(&tree, rank).is_empty());
    assert!(search_rank(&tree, rank).is_empty());
    assert!(index_rank(&tree, rank).is_empty());
}

// ============================================================
// Cross-Agreement
// ============================================================

#[rstest]
#[case("a")]
#[case("ab")]
#[case("abcd")]
#[case("abcdef")]
fn given_ascending_input_when_looking_up_every_rank_then_matches_enumeration(#[case] input: &str) {
    // Arrange
    let tree = build_tree(&chars(input));
    let all = enumerate_all(&tree);

    // Act & Assert
    for (i, expected) in all.iter().enumerate() {
        let rank = i as i64 + 1;
        assert_eq!(&decode_rank(&tree, rank), expected, "decode rank {rank}");
        assert_eq!(&search_rank(&tree, rank), expected, "search rank {rank}");
    }
}

#[test]
fn given_unsorted_input_when_decoding_then_ranks_follow_construction_order() {
    // Arrange
    let tree = build_tree(&['3', '1', '2']);
    let sorted = enumerate_all(&tree);

    // Act
    let decoded: Vec<Vec<char>> = (1..=6).map(|r| decode_rank(&tree, r)).collect();
    let searched: Vec<Vec<char>> = (1..=6).map(|r| search_rank(&tree, r)).collect();

    // Assert
    assert_eq!(decoded, tree.construction_order());
    assert_eq!(searched, decoded);
    assert_eq!(decoded[0], chars("312"));
    assert_ne!(decoded, sorted, "unsorted input ranks differ from sorted enumeration");
    assert_eq!(index_rank(&tree, 1), chars("123"));
}

#[test]
fn given_iterative_tree_when_looking_up_every_rank_then_matches_recursive_tree() {
    let input = chars("pmtre");
    let recursive = PermTree::with_strategy(&input, BuildStrategy::Recursive);
    let iterative = PermTree::with_strategy(&input, BuildStrategy::Iterative);

    for rank in 1..=120 {
        assert_eq!(search_rank(&recursive, rank), search_rank(&iterative, rank));
        assert_eq!(decode_rank(&recursive, rank), decode_rank(&iterative, rank));
    }
    assert_eq!(enumerate_all(&recursive), enumerate_all(&iterative));
}

// ============================================================
// Idempotence and Shared Access
// ============================================================

#[test]
fn given_same_rank_when_queried_repeatedly_then_returns_identical_results() {
    let tree = build_tree(&chars("wxyz"));

    let first = (decode_rank(&tree, 13), search_rank(&tree, 13));
    for _ in 0..5 {
        assert_eq!((decode_rank(&tree, 13), search_rank(&tree, 13)), first);
    }
    assert_eq!(enumerate_all(&tree), enumerate_all(&tree));
}

#[test]
fn given_shared_tree_when_queried_in_parallel_then_matches_sequential_results() {
    // Arrange
    let tree = build_tree(&chars("abcdefg"));
    let ranks: Vec<i64> = (1..=5040).step_by(7).collect();
    let sequential: Vec<Vec<char>> = ranks.iter().map(|&r| search_rank(&tree, r)).collect();

    // Act
    let parallel: Vec<Vec<char>> = ranks
        .par_iter()
        .map(|&r| {
            let decoded = decode_rank(&tree, r);
            assert_eq!(decoded, search_rank(&tree, r));
            decoded
        })
        .collect();

    // Assert
    assert_eq!(parallel, sequential);
}
