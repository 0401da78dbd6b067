use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;

use doublets::{Doublets, Lexicon, NeighborStrategy, SearchError, SearchLimits};

fn get_test_words() -> Vec<&'static str> {
    vec!["cat", "cot", "cog", "dog", "dot", "hot", "hat"]
}

fn get_test_game() -> Doublets {
    Doublets::new(Lexicon::from_words(get_test_words()))
}

#[test]
fn test_min_ladder_cat_dog() {
    let game = get_test_game();
    let ladder = game.min_ladder("cat", "dog");

    assert_eq!(ladder.len(), 4);
    assert!(game.is_word_ladder(&ladder));
    assert_eq!(ladder, vec!["cat", "cot", "cog", "dog"]);
}

#[test]
fn test_min_ladder_same_word() {
    let game = get_test_game();
    assert_eq!(game.min_ladder("cat", "cat"), vec!["cat"]);
    assert_eq!(game.min_ladder("cat", "CAT"), vec!["cat"]);
}

#[test]
fn test_min_ladder_returns_lexicon_spelling() {
    let game = get_test_game();
    assert_eq!(game.min_ladder("CAT", "cat"), vec!["cat"]);

    let ladder = game.min_ladder("Hat", "HOT");
    assert_eq!(ladder.first().map(String::as_str), Some("hat"));
    assert_eq!(ladder.last().map(String::as_str), Some("hot"));
}

#[test]
fn test_min_ladder_unknown_word() {
    let game = get_test_game();
    assert!(game.min_ladder("cat", "xyz").is_empty());
    assert!(game.min_ladder("xyz", "cat").is_empty());
}

#[test]
fn test_min_ladder_different_lengths() {
    let game = Doublets::new(Lexicon::from_words(["cat", "cats", "cot"]));
    assert!(game.min_ladder("cat", "cats").is_empty());
}

#[test]
fn test_min_ladder_no_path() {
    let game = Doublets::new(Lexicon::from_words(["cat", "cot", "ink", "irk"]));
    assert!(game.min_ladder("cat", "ink").is_empty());
    assert_eq!(game.min_ladder("ink", "irk"), vec!["ink", "irk"]);
}

#[test]
fn test_min_ladder_mixed_case() {
    let game = get_test_game();
    assert_eq!(
        game.min_ladder("CAT", "Dog"),
        vec!["cat", "cot", "cog", "dog"]
    );
}

#[test]
fn test_min_ladder_adjacent_words() {
    let game = get_test_game();
    assert_eq!(game.min_ladder("hat", "hot"), vec!["hat", "hot"]);
}

#[test]
fn test_min_ladder_is_shortest() {
    // The detour through the "b" words is discovered first but is longer.
    let game = Doublets::new(Lexicon::from_words([
        "aaa", "aab", "abb", "bbb", "bbc", "bcc", "ccc", "aac", "acc",
    ]));
    let ladder = game.min_ladder("aaa", "ccc");
    assert_eq!(ladder.len(), 4);
    assert!(game.is_word_ladder(&ladder));
    assert_eq!(ladder.first().map(String::as_str), Some("aaa"));
    assert_eq!(ladder.last().map(String::as_str), Some("ccc"));
}

#[test]
fn test_tie_break_follows_lexicon_order() {
    let game = Doublets::new(Lexicon::from_words(["aa", "ab", "ba", "bb"]));
    assert_eq!(game.min_ladder("aa", "bb"), vec!["aa", "ab", "bb"]);
}

#[test]
fn test_indexed_search_matches_scan() {
    let scan = get_test_game();
    let indexed = scan.clone().with_strategy(NeighborStrategy::Indexed);

    for start in get_test_words() {
        for end in get_test_words() {
            assert_eq!(
                scan.min_ladder(start, end),
                indexed.min_ladder(start, end),
                "{} -> {}",
                start,
                end
            );
        }
    }
}

#[test]
fn test_unbounded_limits() {
    let game = get_test_game();
    let limits = SearchLimits::default();
    assert!(limits.is_unbounded());
    assert_eq!(
        game.min_ladder_within("cat", "dog", &limits),
        Ok(game.min_ladder("cat", "dog"))
    );
}

#[test]
fn test_expansion_limit() {
    let game = get_test_game();

    let tight = SearchLimits::new().with_max_expansions(1);
    assert_eq!(
        game.min_ladder_within("cat", "dog", &tight),
        Err(SearchError::ExpansionLimitReached { limit: 1 })
    );

    let loose = SearchLimits::new().with_max_expansions(100);
    let ladder = game.min_ladder_within("cat", "dog", &loose).unwrap();
    assert_eq!(ladder.len(), 4);
}

#[test]
fn test_cancel_flag() {
    let game = get_test_game();
    let flag = Arc::new(AtomicBool::new(true));
    let limits = SearchLimits::new().with_cancel_flag(flag);

    assert!(!limits.is_unbounded());
    assert_eq!(
        game.min_ladder_within("cat", "dog", &limits),
        Err(SearchError::Cancelled)
    );
}

#[test]
fn test_zero_deadline() {
    let game = get_test_game();
    let limits = SearchLimits::new().with_deadline(Duration::ZERO);
    let result = game.min_ladder_within("cat", "dog", &limits);
    assert!(matches!(result, Err(SearchError::DeadlineExceeded { .. })));
}

#[test]
fn test_limits_skip_trivial_queries() {
    let game = get_test_game();
    let limits = SearchLimits::new().with_max_expansions(0);
    assert_eq!(
        game.min_ladder_within("cat", "cat", &limits),
        Ok(vec!["cat".to_string()])
    );
    assert_eq!(game.min_ladder_within("cat", "xyz", &limits), Ok(vec![]));
}

#[test]
fn test_min_ladders_batch() {
    let game = get_test_game();
    let pairs = [
        ("cat", "dog"),
        ("cat", "cat"),
        ("cat", "xyz"),
        ("hat", "hot"),
    ];
    let ladders = game.min_ladders(&pairs);

    assert_eq!(ladders.len(), pairs.len());
    for ((start, end), ladder) in pairs.iter().zip(&ladders) {
        assert_eq!(*ladder, game.min_ladder(start, end));
    }
}
