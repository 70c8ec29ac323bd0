use std::collections::HashMap;
use std::time::Instant;

use crate::extractor::ast;
use crate::language::LanguageTag;
use crate::model::{Constraint, ConstraintSet, ExtractionResult, Strategy};
use crate::parser::ParserFacade;
use crate::pattern;

/// Runs the orchestration state machine `Start -> Parse? -> Extract(AST)
/// -> Extract(Patterns) -> Merge -> Emit` for a single extraction call.
/// `Parse?` is skipped for `Strategy::PatternOnly`.
pub fn extract(
    source: &[u8],
    language: LanguageTag,
    strategy: Strategy,
    parser: &ParserFacade,
    timeout_micros: Option<u64>,
) -> ExtractionResult {
    let started = Instant::now();
    let source_str = std::str::from_utf8(source).unwrap_or("");

    let mut tree_sitter_available = false;
    let mut tree_sitter_errors = None;
    let mut ast_constraints: Vec<Constraint> = Vec::new();
    let mut pattern_constraints: Vec<Constraint> = Vec::new();

    let run_ast = !matches!(strategy, Strategy::PatternOnly);
    let run_pattern = !matches!(strategy, Strategy::TreeSitterOnly);

    if run_ast {
        match parser.parse(source, language, timeout_micros) {
            Ok(tree) => {
                tree_sitter_available = true;
                if tree.has_error() {
                    tree_sitter_errors = Some("parsed with recovered syntax errors".to_string());
                }
                ast_constraints = ast::extract(tree.root(), tree.language());

                let fallback_empty = matches!(strategy, Strategy::TreeSitterWithFallback) && ast_constraints.is_empty();
                if fallback_empty {
                    pattern_constraints = pattern::scan(source_str, language);
                }
            }
            Err(err) => {
                tree_sitter_errors = Some(err.to_string());
                if matches!(strategy, Strategy::TreeSitterWithFallback) {
                    pattern_constraints = pattern::scan(source_str, language);
                }
            }
        }
    }

    if run_pattern && matches!(strategy, Strategy::PatternOnly | Strategy::Combined) {
        pattern_constraints = pattern::scan(source_str, language);
    }

    let merged = merge(ast_constraints, pattern_constraints);

    ExtractionResult {
        constraints: ConstraintSet::new(merged),
        strategy_used: strategy,
        tree_sitter_available,
        tree_sitter_errors,
        extraction_ms: started.elapsed().as_secs_f64() * 1000.0,
    }
}

/// Two Constraints with the same `(name, kind)` are duplicates; the one
/// with higher confidence wins, AST wins ties. Surviving constraints are
/// ordered AST-path pre-order first, then pattern-only additions in
/// source order.
fn merge(ast_constraints: Vec<Constraint>, pattern_constraints: Vec<Constraint>) -> Vec<Constraint> {
    let mut by_key: HashMap<(String, crate::model::Kind), Constraint> = HashMap::new();
    let mut order: Vec<(String, crate::model::Kind)> = Vec::new();

    for c in ast_constraints {
        let key = (c.name.clone(), c.kind);
        order.push(key.clone());
        by_key.insert(key, c);
    }

    for c in pattern_constraints {
        let key = (c.name.clone(), c.kind);
        match by_key.get(&key) {
            Some(existing) if existing.confidence >= c.confidence => {
                // AST (or an earlier, equally-confident entry) wins ties.
            }
            _ => {
                if !by_key.contains_key(&key) {
                    order.push(key.clone());
                }
                by_key.insert(key, c);
            }
        }
    }

    order.into_iter().filter_map(|key| by_key.remove(&key)).collect()
}
