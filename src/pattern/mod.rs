pub mod catalogue;

use regex::Regex;

use crate::language::LanguageTag;
use crate::model::Constraint;

/// Runs the per-language textual pattern catalogue over raw source
/// bytes. No grammar is required; this is both the fallback path when no
/// grammar is available and a faster first pass when combined with the
/// AST path.
///
/// It is a known, deliberate limitation that this matcher cannot
/// distinguish code from comments or string literals — it scans the
/// source string verbatim.
pub fn scan(source: &str, language: LanguageTag) -> Vec<Constraint> {
    let mut constraints = Vec::new();
    for entry in catalogue::catalogue(language) {
        let re = match Regex::new(entry.regex) {
            Ok(re) => re,
            Err(_) => continue,
        };
        if re.is_match(source) {
            constraints.push(entry.to_constraint());
        }
    }
    constraints
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_pattern_constraint_has_fixed_confidence() {
        let source = "fn main() { let x: Option<i32> = None; todo!() }";
        let constraints = scan(source, LanguageTag::Rust);
        assert!(!constraints.is_empty());
        for c in &constraints {
            assert_eq!(c.confidence, 0.75);
        }
    }

    #[test]
    fn matches_inside_comments_are_a_preserved_known_limitation() {
        let source = "// async function ghost() {}\nfunction real() {}";
        let constraints = scan(source, LanguageTag::JavaScript);
        assert!(
            constraints.iter().any(|c| c.name == "patterns_async_function"),
            "pattern matcher is documented to match inside comments"
        );
    }

    #[test]
    fn python_not_implemented_pattern_detected() {
        let source = "def foo():\n    raise NotImplementedError(\"TODO\")\n";
        let constraints = scan(source, LanguageTag::Python);
        assert!(constraints.iter().any(|c| c.name == "patterns_not_implemented"));
    }

    #[test]
    fn async_method_shorthand_without_function_keyword_matches() {
        let source = "class UserService { async getUser(id: number): Promise<User> { return null; } }";
        let constraints = scan(source, LanguageTag::TypeScript);
        assert!(constraints.iter().any(|c| c.name == "patterns_async_function"));
    }
}
