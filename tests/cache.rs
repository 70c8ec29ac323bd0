use ananke_extraction_core::cache::{fingerprint, ConstraintCache, DEFAULT_CACHE_CAPACITY};
use ananke_extraction_core::{Constraint, ConstraintSet, Kind, LanguageTag, SourceTag, Strategy};

#[test]
fn default_capacity_matches_spec() {
    assert_eq!(DEFAULT_CACHE_CAPACITY, 256);
}

#[test]
fn fingerprint_folds_in_strategy_and_language() {
    let source = b"fn main() {}";
    let a = fingerprint(source, LanguageTag::Rust, Strategy::Combined);
    let b = fingerprint(source, LanguageTag::Rust, Strategy::TreeSitterOnly);
    let c = fingerprint(source, LanguageTag::Python, Strategy::Combined);
    assert_ne!(a, b);
    assert_ne!(a, c);
}

#[test]
fn independent_facade_instances_do_not_share_cache_state() {
    let cache_a = ConstraintCache::new(4);
    let cache_b = ConstraintCache::new(4);

    let set = ConstraintSet::new(vec![Constraint::new(
        "functions_foo",
        Kind::Semantic,
        SourceTag::AstPattern,
        0.95,
        "test",
    )]);

    cache_a.insert("key".to_string(), set);
    assert!(cache_b.get("key").is_none());
}

#[test]
fn eviction_never_invalidates_previously_returned_copies() {
    let cache = ConstraintCache::new(1);
    let set = ConstraintSet::new(vec![Constraint::new(
        "functions_foo",
        Kind::Semantic,
        SourceTag::AstPattern,
        0.95,
        "test",
    )]);
    cache.insert("a".to_string(), set);
    let held = cache.get("a").unwrap();

    cache.insert("b".to_string(), ConstraintSet::empty());
    assert!(cache.get("a").is_none(), "a should have been evicted");
    assert_eq!(held.len(), 1, "a previously returned copy is unaffected by eviction");
}
