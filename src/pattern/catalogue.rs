use crate::language::LanguageTag;
use crate::model::{Constraint, Kind, SourceTag};

/// One entry in a language's textual pattern catalogue: a regex and the
/// Constraint template it produces on a match.
pub struct PatternEntry {
    pub regex: &'static str,
    pub name: &'static str,
    pub kind: Kind,
    pub description: &'static str,
}

impl PatternEntry {
    pub fn to_constraint(&self) -> Constraint {
        Constraint::new(self.name, self.kind, SourceTag::AstPattern, 0.75, self.description)
    }
}

/// Per-language catalogues. Deliberately operates on the raw source
/// string with no comment/string-literal awareness — matches found
/// inside a comment or string literal are a known, preserved limitation
/// of this matcher, not a bug.
pub fn catalogue(language: LanguageTag) -> &'static [PatternEntry] {
    match language {
        LanguageTag::TypeScript | LanguageTag::JavaScript => &[
            PatternEntry {
                regex: r"\basync\s+function\b|\basync\s+\w+\s*\(|\basync\s*\(",
                name: "patterns_async_function",
                kind: Kind::Operational,
                description: "async function surface detected by textual match",
            },
            PatternEntry {
                regex: r"\bPromise\s*<",
                name: "patterns_promise_type",
                kind: Kind::TypeSafety,
                description: "Promise-typed surface detected by textual match",
            },
            PatternEntry {
                regex: r"\binterface\s+\w+",
                name: "patterns_interface_decl",
                kind: Kind::TypeSafety,
                description: "interface declaration detected by textual match",
            },
        ],
        LanguageTag::Python => &[
            PatternEntry {
                regex: r"\bdef\s+\w+\s*\(",
                name: "patterns_function_def",
                kind: Kind::Semantic,
                description: "function definition detected by textual match",
            },
            PatternEntry {
                regex: r"\braise\s+NotImplementedError\b",
                name: "patterns_not_implemented",
                kind: Kind::Operational,
                description: "NotImplementedError raise detected by textual match",
            },
        ],
        LanguageTag::Rust => &[
            PatternEntry {
                regex: r"\bResult\s*<",
                name: "patterns_result_type",
                kind: Kind::Operational,
                description: "Result-typed surface detected by textual match",
            },
            PatternEntry {
                regex: r"\bOption\s*<",
                name: "patterns_option_type",
                kind: Kind::Operational,
                description: "Option-typed surface detected by textual match",
            },
            PatternEntry {
                regex: r"\btodo!\s*\(|\bunimplemented!\s*\(",
                name: "patterns_placeholder_macro",
                kind: Kind::Semantic,
                description: "todo!/unimplemented! placeholder detected by textual match",
            },
        ],
        LanguageTag::Go => &[
            PatternEntry {
                regex: r"\bfunc\s+\w+\s*\(",
                name: "patterns_function_decl",
                kind: Kind::Semantic,
                description: "function declaration detected by textual match",
            },
            PatternEntry {
                regex: r#"`[^`]*\bjson:"[^"]*"[^`]*`"#,
                name: "patterns_struct_tag",
                kind: Kind::Operational,
                description: "struct tag detected by textual match",
            },
        ],
        LanguageTag::Zig => &[
            PatternEntry {
                regex: r"!\s*\w+\s*\{",
                name: "patterns_error_union",
                kind: Kind::Operational,
                description: "error union return type detected by textual match",
            },
            PatternEntry {
                regex: r"\bunreachable\b",
                name: "patterns_unreachable",
                kind: Kind::Semantic,
                description: "unreachable placeholder detected by textual match",
            },
        ],
        LanguageTag::C | LanguageTag::Cpp => &[PatternEntry {
            regex: r"\b\w[\w\s\*]*\(\s*[\w\s,\*]*\)\s*\{",
            name: "patterns_function_def",
            kind: Kind::Semantic,
            description: "function definition detected by textual match",
        }],
        LanguageTag::Java => &[PatternEntry {
            regex: r"\b(public|private|protected)\s+[\w<>\[\]]+\s+\w+\s*\(",
            name: "patterns_method_decl",
            kind: Kind::Semantic,
            description: "method declaration detected by textual match",
        }],
    }
}
