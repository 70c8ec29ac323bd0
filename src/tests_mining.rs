use regex::Regex;

use crate::language::LanguageTag;
use crate::model::{Constraint, ConstraintSet, Kind, SourceTag};

/// One assertion family recognized in test source, paired with the
/// confidence its specificity earns. The eight families named in the
/// facade's component design: equality, truthiness, type-check,
/// error-expected, property-check, regex-match, comparison, membership.
struct AssertionPattern {
    regex: &'static str,
    name: &'static str,
    confidence: f64,
}

fn patterns_for(language: LanguageTag) -> Option<&'static [AssertionPattern]> {
    match language {
        LanguageTag::Python => Some(&[
            AssertionPattern {
                regex: r"\bassert\s+\S+\s*==\s*\S+",
                name: "assertions_equality",
                confidence: 0.9,
            },
            AssertionPattern {
                regex: r"\bpytest\.raises\s*\(",
                name: "assertions_error_expected",
                confidence: 0.95,
            },
            AssertionPattern {
                regex: r"\bassert\s+isinstance\s*\(",
                name: "assertions_type_check",
                confidence: 0.9,
            },
            AssertionPattern {
                regex: r"\bassert\s+\w+\b",
                name: "assertions_truthiness",
                confidence: 0.85,
            },
            AssertionPattern {
                regex: r"@given\s*\(",
                name: "assertions_property_check",
                confidence: 0.88,
            },
            AssertionPattern {
                regex: r"\bassertRegex\s*\(",
                name: "assertions_regex_match",
                confidence: 0.88,
            },
            AssertionPattern {
                regex: r"\bassert\s+\S+\s*(<=|>=|<|>)\s*\S+",
                name: "assertions_comparison",
                confidence: 0.87,
            },
            AssertionPattern {
                regex: r"\bassert\s+\S+\s+in\s+\S+",
                name: "assertions_membership",
                confidence: 0.88,
            },
        ]),
        LanguageTag::TypeScript | LanguageTag::JavaScript => Some(&[
            AssertionPattern {
                regex: r"\.toBe\s*\(",
                name: "assertions_equality",
                confidence: 0.9,
            },
            AssertionPattern {
                regex: r"\.toThrow\s*\(",
                name: "assertions_error_expected",
                confidence: 0.95,
            },
            AssertionPattern {
                regex: r"\.toBeInstanceOf\s*\(",
                name: "assertions_type_check",
                confidence: 0.9,
            },
            AssertionPattern {
                regex: r"\.toBeTruthy\s*\(\)",
                name: "assertions_truthiness",
                confidence: 0.85,
            },
            AssertionPattern {
                regex: r"\bfc\.assert\s*\(|\bfc\.property\s*\(",
                name: "assertions_property_check",
                confidence: 0.88,
            },
            AssertionPattern {
                regex: r"\.toMatch\s*\(",
                name: "assertions_regex_match",
                confidence: 0.88,
            },
            AssertionPattern {
                regex: r"\.toBeGreaterThan\s*\(|\.toBeLessThan\s*\(|\.toBeGreaterThanOrEqual\s*\(|\.toBeLessThanOrEqual\s*\(",
                name: "assertions_comparison",
                confidence: 0.87,
            },
            AssertionPattern {
                regex: r"\.toContain\s*\(",
                name: "assertions_membership",
                confidence: 0.88,
            },
        ]),
        LanguageTag::Rust => Some(&[
            AssertionPattern {
                regex: r"\bassert_eq!\s*\(",
                name: "assertions_equality",
                confidence: 0.92,
            },
            AssertionPattern {
                regex: r"#\[should_panic",
                name: "assertions_error_expected",
                confidence: 0.95,
            },
            AssertionPattern {
                regex: r"\bmatches!\s*\(",
                name: "assertions_type_check",
                confidence: 0.88,
            },
            AssertionPattern {
                regex: r"\bassert!\s*\(",
                name: "assertions_truthiness",
                confidence: 0.85,
            },
            AssertionPattern {
                regex: r"\bproptest!\s*\(|#\[quickcheck\]",
                name: "assertions_property_check",
                confidence: 0.88,
            },
            AssertionPattern {
                regex: r"\bis_match\s*\(",
                name: "assertions_regex_match",
                confidence: 0.85,
            },
            AssertionPattern {
                regex: r"\bassert!\s*\([^()]*[<>]=?[^()]*\)",
                name: "assertions_comparison",
                confidence: 0.86,
            },
            AssertionPattern {
                regex: r"\.contains\s*\(",
                name: "assertions_membership",
                confidence: 0.85,
            },
        ]),
        _ => None,
    }
}

/// Mines assertions from a test file and converts each to a Constraint
/// with `source_tag = Test_Mining`. When no assertion parser exists for
/// the file's language, returns an empty ConstraintSet, not an error.
pub fn extract(test_source: &str, language: LanguageTag) -> ConstraintSet {
    let Some(patterns) = patterns_for(language) else {
        return ConstraintSet::empty();
    };

    let mut constraints = Vec::new();
    for pattern in patterns {
        let Ok(re) = Regex::new(pattern.regex) else {
            continue;
        };
        let count = re.find_iter(test_source).count();
        if count > 0 {
            constraints.push(
                Constraint::new(
                    pattern.name,
                    Kind::Semantic,
                    SourceTag::TestMining,
                    pattern.confidence,
                    format!("{} assertion(s) mined from test source", count),
                )
                .with_metadata("occurrences", serde_json::json!(count)),
            );
        }
    }
    ConstraintSet::new(constraints)
}
