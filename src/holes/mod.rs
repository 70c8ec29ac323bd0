use regex::Regex;

use crate::language::LanguageTag;
use crate::model::{Hole, HoleKind, HoleOrigin, Location};
use crate::parser::{Node, SyntaxTree};
use crate::traversal;

fn location(node: &Node<'_>) -> Location {
    let (line, col) = node.start_position();
    Location {
        file: None,
        line,
        col,
        start_byte: node.start_byte(),
        end_byte: node.end_byte(),
    }
}

fn function_body<'tree>(node: &Node<'tree>) -> Option<Node<'tree>> {
    node.child_by_field_name("body")
}

fn body_is_placeholder(body: &Node<'_>, language: LanguageTag) -> bool {
    let text = body.text().trim();
    match language {
        LanguageTag::Python => text == "pass" || text == "...",
        LanguageTag::Rust => body.children().is_empty() || text.contains("todo!()") || text.contains("unimplemented!()"),
        LanguageTag::Zig => text.contains("unreachable"),
        LanguageTag::TypeScript | LanguageTag::JavaScript => text == "{}" || body.children().is_empty(),
        _ => body.children().is_empty(),
    }
}

/// A function-like node whose body has no executable statements, or is
/// exactly a recognized placeholder form.
pub fn empty_function_body(tree: &SyntaxTree) -> Vec<Hole> {
    let language = tree.language();
    traversal::extract_functions(tree.root(), language)
        .into_iter()
        .filter_map(|func| {
            let body = function_body(&func).unwrap_or(func);
            if body_is_placeholder(&body, language) {
                Some(Hole {
                    kind: HoleKind::EmptyFunctionBody,
                    location: location(&func),
                    confidence: 0.92,
                    origin: HoleOrigin::Inferred,
                    hint: None,
                })
            } else {
                None
            }
        })
        .collect()
}

fn not_implemented_marker(text: &str, language: LanguageTag) -> bool {
    match language {
        LanguageTag::Python => text.contains("raise NotImplementedError"),
        LanguageTag::Rust => text.contains("unimplemented!()") || text.contains("todo!()"),
        LanguageTag::TypeScript | LanguageTag::JavaScript => {
            text.contains("throw new Error('TODO')")
                || text.contains("throw new Error(\"TODO\")")
                || text.to_lowercase().contains("throw new error('not implemented')")
                || text.to_lowercase().contains("throw new error(\"not implemented\")")
        }
        _ => false,
    }
}

/// Body raises/panics a recognized "not implemented" marker.
pub fn unimplemented_method(tree: &SyntaxTree) -> Vec<Hole> {
    let language = tree.language();
    traversal::extract_functions(tree.root(), language)
        .into_iter()
        .filter_map(|func| {
            let body = function_body(&func).unwrap_or(func);
            if not_implemented_marker(body.text(), language) {
                Some(Hole {
                    kind: HoleKind::UnimplementedMethod,
                    location: location(&func),
                    confidence: 0.96,
                    origin: HoleOrigin::Inferred,
                    hint: None,
                })
            } else {
                None
            }
        })
        .collect()
}

/// Language-specific "switch/match without exhaustive default/arm
/// coverage" detection.
pub fn incomplete_match(tree: &SyntaxTree) -> Vec<Hole> {
    let language = tree.language();
    let match_node_type = match language {
        LanguageTag::Rust => "match_expression",
        LanguageTag::TypeScript | LanguageTag::JavaScript => "switch_statement",
        _ => return Vec::new(),
    };

    traversal::find_by_type(tree.root(), match_node_type)
        .into_iter()
        .filter_map(|node| match language {
            LanguageTag::Rust => {
                let placeholder_arm = node
                    .children()
                    .iter()
                    .any(|arm| {
                        let text = arm.text();
                        text.contains("todo!()") || text.contains("unimplemented!()")
                    });
                placeholder_arm.then(|| Hole {
                    kind: HoleKind::IncompleteMatch,
                    location: location(&node),
                    confidence: 0.92,
                    origin: HoleOrigin::Inferred,
                    hint: None,
                })
            }
            LanguageTag::TypeScript | LanguageTag::JavaScript => {
                // `switch_case`/`switch_default` are children of the
                // intermediate `switch_body` field, not direct children
                // of `switch_statement` (whose only named children are
                // `value` and `body`).
                let has_default = node
                    .child_by_field_name("body")
                    .map(|body| body.children().iter().any(|c| c.kind() == "switch_default"))
                    .unwrap_or(false);
                (!has_default).then(|| Hole {
                    kind: HoleKind::IncompleteMatch,
                    location: location(&node),
                    confidence: 0.9,
                    origin: HoleOrigin::Inferred,
                    hint: Some("missing default clause".to_string()),
                })
            }
            _ => None,
        })
        .collect()
}

/// Language-specific missing-type-annotation heuristics.
pub fn missing_type_annotation(tree: &SyntaxTree) -> Vec<Hole> {
    let language = tree.language();
    match language {
        LanguageTag::Zig => traversal::find_by_type(tree.root(), "anytype")
            .into_iter()
            .map(|n| Hole {
                kind: HoleKind::MissingTypeAnnotation,
                location: location(&n),
                confidence: 0.85,
                origin: HoleOrigin::Inferred,
                hint: None,
            })
            .collect(),
        LanguageTag::TypeScript => traversal::find_all(tree.root(), |n| n.kind() == "predefined_type" && n.text() == "any")
            .into_iter()
            .map(|n| Hole {
                kind: HoleKind::MissingTypeAnnotation,
                location: location(&n),
                confidence: 0.8,
                origin: HoleOrigin::Inferred,
                hint: None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

const MARKER_PATTERNS: &[&str] = &[
    r"\bTODO\b",
    r"\bFIXME\b",
    r"\bXXX\b",
    r#"@panic\("TODO"\)"#,
    r"todo!\s*\(",
];

/// Comment/marker scan across raw source text. Holes emitted here carry
/// `origin = user_marked`; all other detectors emit `origin = inferred`.
pub fn user_marked_todo(tree: &SyntaxTree) -> Vec<Hole> {
    let source = tree.source_str();
    let mut holes = Vec::new();
    for pattern in MARKER_PATTERNS {
        let re = match Regex::new(pattern) {
            Ok(re) => re,
            Err(_) => continue,
        };
        for m in re.find_iter(source) {
            let line = source[..m.start()].matches('\n').count();
            holes.push(Hole {
                kind: HoleKind::UserMarkedTodo,
                location: Location {
                    file: None,
                    line,
                    col: 0,
                    start_byte: m.start(),
                    end_byte: m.end(),
                },
                confidence: 0.98,
                origin: HoleOrigin::UserMarked,
                hint: Some(m.as_str().to_string()),
            });
        }
    }
    holes
}

/// Composes the five detectors. The returned list has no positional
/// duplicates: two holes whose byte spans overlap and whose kinds match
/// are merged, keeping the higher confidence.
pub fn detect_all(tree: &SyntaxTree) -> Vec<Hole> {
    let mut holes = Vec::new();
    holes.extend(empty_function_body(tree));
    holes.extend(unimplemented_method(tree));
    holes.extend(incomplete_match(tree));
    holes.extend(missing_type_annotation(tree));
    holes.extend(user_marked_todo(tree));

    dedup_by_overlap(holes)
}

fn dedup_by_overlap(holes: Vec<Hole>) -> Vec<Hole> {
    let mut kept: Vec<Hole> = Vec::new();
    'outer: for hole in holes {
        for existing in kept.iter_mut() {
            if existing.kind == hole.kind && existing.overlaps(&hole) {
                if hole.confidence > existing.confidence {
                    *existing = hole;
                }
                continue 'outer;
            }
        }
        kept.push(hole);
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ParserFacade;

    #[test]
    fn python_not_implemented_error_yields_exactly_one_hole() {
        let facade = ParserFacade::new();
        let source = b"def unimplemented_method():\n    raise NotImplementedError(\"TODO\")\ndef implemented():\n    return True";
        let tree = facade.parse(source, LanguageTag::Python, None).unwrap();
        let holes = unimplemented_method(&tree);
        assert_eq!(holes.len(), 1);
        assert_eq!(holes[0].kind, HoleKind::UnimplementedMethod);
        assert!(holes[0].confidence >= 0.95);
    }

    #[test]
    fn rust_match_with_todo_yields_incomplete_match_hole() {
        let facade = ParserFacade::new();
        let source = b"fn f(x: Option<i32>) { match x { Some(v) => println!(\"{}\", v), _ => todo!() } }";
        let tree = facade.parse(source, LanguageTag::Rust, None).unwrap();
        let holes = incomplete_match(&tree);
        assert_eq!(holes.len(), 1);
        assert_eq!(holes[0].kind, HoleKind::IncompleteMatch);
        assert!(holes[0].confidence >= 0.9);
    }

    #[test]
    fn empty_source_yields_no_holes() {
        let facade = ParserFacade::new();
        let tree = facade.parse(b"", LanguageTag::Python, None).unwrap();
        assert!(detect_all(&tree).is_empty());
    }

    #[test]
    fn comment_only_source_yields_only_user_marked_holes() {
        let facade = ParserFacade::new();
        let tree = facade.parse(b"# TODO: finish this\n", LanguageTag::Python, None).unwrap();
        let holes = detect_all(&tree);
        assert!(holes.iter().all(|h| h.origin == HoleOrigin::UserMarked));
        assert!(!holes.is_empty());
    }

    #[test]
    fn detect_all_dedups_overlapping_same_kind_holes() {
        let facade = ParserFacade::new();
        let source = b"def f():\n    pass\n";
        let tree = facade.parse(source, LanguageTag::Python, None).unwrap();
        let holes = detect_all(&tree);
        let empty_body_holes: Vec<_> = holes.iter().filter(|h| h.kind == HoleKind::EmptyFunctionBody).collect();
        assert_eq!(empty_body_holes.len(), 1);
    }
}
