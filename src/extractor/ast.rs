use crate::language::LanguageTag;
use crate::model::{Constraint, Kind, SourceTag};
use crate::parser::Node;
use crate::traversal;

/// Builds Constraints from the curated function/type/import node sets,
/// in pre-order of source position. Each node becomes exactly one
/// Constraint at the fixed AST confidence, `0.95`.
pub fn extract(root: Node<'_>, language: LanguageTag) -> Vec<Constraint> {
    let mut constraints = Vec::new();

    for node in traversal::extract_functions(root, language) {
        constraints.push(function_constraint(node, language));
    }
    for node in traversal::extract_types(root, language) {
        constraints.push(type_constraint(node, language));
    }
    for node in traversal::extract_imports(root, language) {
        constraints.push(import_constraint(node));
    }

    constraints.extend(language_refinements(root, language));

    constraints.sort_by_key(|c| c.metadata.get("start_byte").and_then(|v| v.as_u64()).unwrap_or(0));
    constraints
}

fn stable_name(prefix: &str, node: &Node<'_>) -> String {
    let identity = node
        .child_by_field_name("name")
        .map(|n| n.text().to_string())
        .unwrap_or_else(|| format!("{}", node.start_byte()));
    format!("{prefix}_{identity}")
}

fn with_span(c: Constraint, node: &Node<'_>) -> Constraint {
    c.with_metadata("start_byte", serde_json::json!(node.start_byte()))
        .with_metadata("end_byte", serde_json::json!(node.end_byte()))
}

fn function_constraint(node: Node<'_>, _language: LanguageTag) -> Constraint {
    let c = Constraint::new(
        stable_name("functions", &node),
        Kind::Semantic,
        SourceTag::AstPattern,
        0.95,
        format!("function-like node `{}`", node.kind()),
    );
    with_span(c, &node)
}

fn type_constraint(node: Node<'_>, _language: LanguageTag) -> Constraint {
    let c = Constraint::new(
        stable_name("types", &node),
        Kind::TypeSafety,
        SourceTag::AstPattern,
        0.95,
        format!("type-like node `{}`", node.kind()),
    );
    with_span(c, &node)
}

fn import_constraint(node: Node<'_>) -> Constraint {
    let c = Constraint::new(
        format!("imports_{}", node.start_byte()),
        Kind::Structural,
        SourceTag::AstPattern,
        0.95,
        format!("import-like node `{}`", node.kind()),
    );
    with_span(c, &node)
}

/// Per-language specializations named in the AST extractor's component
/// design: TS interfaces/type aliases already land in `type_constraint`
/// via the curated table; the remaining ones (Rust Result/Option, Zig
/// error unions, Python decorators, Go struct tags, TS/JS async/Promise
/// surfaces) need dedicated recognizers since they aren't top-level
/// declaration nodes.
fn language_refinements(root: Node<'_>, language: LanguageTag) -> Vec<Constraint> {
    match language {
        LanguageTag::Rust => rust_result_option(root),
        LanguageTag::Zig => zig_error_unions(root),
        LanguageTag::Python => python_decorators(root),
        LanguageTag::Go => go_struct_tags(root),
        LanguageTag::TypeScript | LanguageTag::JavaScript => typescript_async_surfaces(root, language),
        _ => Vec::new(),
    }
}

fn rust_result_option(root: Node<'_>) -> Vec<Constraint> {
    traversal::find_all(root, |n| n.kind() == "generic_type")
        .into_iter()
        .filter(|n| {
            n.child_by_field_name("type")
                .map(|t| matches!(t.text(), "Result" | "Option"))
                .unwrap_or(false)
        })
        .map(|n| {
            let c = Constraint::new(
                format!("error_handling_{}", n.start_byte()),
                Kind::Operational,
                SourceTag::AstPattern,
                0.95,
                "Result/Option error-handling surface",
            );
            with_span(c, &n)
        })
        .collect()
}

fn zig_error_unions(root: Node<'_>) -> Vec<Constraint> {
    traversal::find_all(root, |n| n.kind() == "ErrorUnionExpr" || n.kind() == "try")
        .into_iter()
        .map(|n| {
            let c = Constraint::new(
                format!("error_handling_{}", n.start_byte()),
                Kind::Operational,
                SourceTag::AstPattern,
                0.95,
                "error-union/try error-handling surface",
            );
            with_span(c, &n)
        })
        .collect()
}

fn python_decorators(root: Node<'_>) -> Vec<Constraint> {
    traversal::find_all(root, |n| n.kind() == "decorator")
        .into_iter()
        .map(|n| {
            let c = Constraint::new(
                format!("structural_decorator_{}", n.start_byte()),
                Kind::Structural,
                SourceTag::AstPattern,
                0.95,
                "decorator surface",
            );
            with_span(c, &n)
        })
        .collect()
}

fn go_struct_tags(root: Node<'_>) -> Vec<Constraint> {
    traversal::find_all(root, |n| n.kind() == "raw_string_literal" && n.text().contains(':'))
        .into_iter()
        .map(|n| {
            let c = Constraint::new(
                format!("struct_tag_{}", n.start_byte()),
                Kind::Operational,
                SourceTag::AstPattern,
                0.95,
                "struct tag surface",
            );
            with_span(c, &n)
        })
        .collect()
}

/// Async function/method surfaces and `Promise<T>` type surfaces. Both
/// are operational (asynchronous control flow, deferred error
/// propagation) rather than merely semantic/type-safety surfaces, so
/// they land in `Kind::Operational` instead of piggybacking on
/// `function_constraint`/`type_constraint`'s defaults.
fn typescript_async_surfaces(root: Node<'_>, language: LanguageTag) -> Vec<Constraint> {
    let mut constraints = Vec::new();

    for node in traversal::extract_functions(root, language) {
        if node.text().trim_start().starts_with("async") {
            let c = Constraint::new(
                format!("async_surface_{}", node.start_byte()),
                Kind::Operational,
                SourceTag::AstPattern,
                0.95,
                "async function/method surface",
            );
            constraints.push(with_span(c, &node));
        }
    }

    for node in traversal::find_all(root, |n| matches!(n.kind(), "generic_type" | "type_annotation")) {
        if node.text().contains("Promise") {
            let c = Constraint::new(
                format!("promise_surface_{}", node.start_byte()),
                Kind::Operational,
                SourceTag::AstPattern,
                0.95,
                "Promise-typed async surface",
            );
            constraints.push(with_span(c, &node));
        }
    }

    constraints
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ParserFacade;

    #[test]
    fn rust_function_yields_semantic_constraint() {
        let facade = ParserFacade::new();
        let tree = facade.parse(b"fn getUser() {}", LanguageTag::Rust, None).unwrap();
        let constraints = extract(tree.root(), LanguageTag::Rust);
        assert!(constraints
            .iter()
            .any(|c| c.name.contains("functions") && c.kind == Kind::Semantic && c.confidence == 0.95));
    }

    #[test]
    fn typescript_interface_yields_type_safety_constraint() {
        let facade = ParserFacade::new();
        let source = b"interface User { id: number; }\nclass Svc { async getUser(): Promise<User> {} }";
        let tree = facade.parse(source, LanguageTag::TypeScript, None).unwrap();
        let constraints = extract(tree.root(), LanguageTag::TypeScript);
        assert!(constraints.iter().any(|c| c.kind == Kind::TypeSafety));
        assert!(constraints.iter().any(|c| c.name.contains("functions")));
    }

    #[test]
    fn typescript_async_method_and_promise_yield_operational_constraints() {
        let facade = ParserFacade::new();
        let source = b"class UserService extends EventEmitter { async getUser(id: number): Promise<User> { return null; } }";
        let tree = facade.parse(source, LanguageTag::TypeScript, None).unwrap();
        let constraints = extract(tree.root(), LanguageTag::TypeScript);
        assert!(constraints.iter().any(|c| c.kind == Kind::Operational));
    }
}
