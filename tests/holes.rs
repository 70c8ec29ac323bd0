use ananke_extraction_core::{holes, HoleOrigin, LanguageTag, ParserFacade};

#[test]
fn typescript_empty_arrow_body_is_a_hole() {
    let parser = ParserFacade::new();
    let tree = parser
        .parse(b"const f = () => {};", LanguageTag::JavaScript, None)
        .unwrap();
    let found = holes::empty_function_body(&tree);
    assert!(!found.is_empty());
}

#[test]
fn typescript_switch_without_default_is_incomplete() {
    let parser = ParserFacade::new();
    let source = b"switch (x) { case 1: doA(); break; case 2: doB(); break; }";
    let tree = parser.parse(source, LanguageTag::JavaScript, None).unwrap();
    let found = holes::incomplete_match(&tree);
    assert_eq!(found.len(), 1);
}

#[test]
fn typescript_switch_with_default_is_not_incomplete() {
    let parser = ParserFacade::new();
    let source =
        b"switch (x) { case 1: doA(); break; case 2: doB(); break; default: doC(); break; }";
    let tree = parser.parse(source, LanguageTag::JavaScript, None).unwrap();
    let found = holes::incomplete_match(&tree);
    assert!(found.is_empty(), "switch with an explicit default clause must not be flagged");
}

#[test]
fn zig_hole_detection_may_underreport_but_not_fail() {
    let parser = ParserFacade::new();
    let tree = parser
        .parse(b"fn foo() void { unreachable; }", LanguageTag::Zig, None)
        .unwrap();
    // Zig grammar coverage for function prototypes is narrower than the
    // other languages'; this is only asserting the detector runs without
    // panicking and returns a bounded (possibly empty) result, per the
    // accepted under-reporting design note.
    let found = holes::empty_function_body(&tree);
    assert!(found.len() <= 1);
}

#[test]
fn user_marked_todo_scans_raw_source_including_comments() {
    let parser = ParserFacade::new();
    let tree = parser
        .parse(b"// TODO: refactor this\nfn main() {}", LanguageTag::Rust, None)
        .unwrap();
    let found = holes::user_marked_todo(&tree);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].origin, HoleOrigin::UserMarked);
}

#[test]
fn detect_all_merges_overlapping_same_kind_holes() {
    let parser = ParserFacade::new();
    let source = b"def f():\n    pass\n";
    let tree = parser.parse(source, LanguageTag::Python, None).unwrap();
    let found = holes::detect_all(&tree);

    let mut seen_spans: Vec<(usize, usize, ananke_extraction_core::HoleKind)> = Vec::new();
    for hole in &found {
        for (s, e, kind) in &seen_spans {
            let overlaps = hole.location.start_byte < *e && *s < hole.location.end_byte;
            assert!(
                !(overlaps && *kind == hole.kind),
                "detect_all left an un-merged duplicate same-kind span"
            );
        }
        seen_spans.push((hole.location.start_byte, hole.location.end_byte, hole.kind));
    }
}
