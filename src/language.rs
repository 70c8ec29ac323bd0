use std::collections::HashMap;

/// Closed set of languages the extraction core understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LanguageTag {
    TypeScript,
    JavaScript,
    Python,
    Rust,
    Go,
    Zig,
    C,
    Cpp,
    Java,
}

impl LanguageTag {
    /// Case-insensitive parse from a tag string, honoring the `ts`/`js`
    /// aliases named in the external-interface contract.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag.to_ascii_lowercase().as_str() {
            "typescript" | "ts" => Some(Self::TypeScript),
            "javascript" | "js" => Some(Self::JavaScript),
            "python" | "py" => Some(Self::Python),
            "rust" | "rs" => Some(Self::Rust),
            "go" | "golang" => Some(Self::Go),
            "zig" => Some(Self::Zig),
            "c" => Some(Self::C),
            "cpp" | "c++" | "cxx" => Some(Self::Cpp),
            "java" => Some(Self::Java),
            _ => None,
        }
    }

    /// Derive a tag from a file extension (without the leading dot),
    /// honoring `user_extensions` overrides first.
    pub fn from_extension(extension: &str, user_extensions: &HashMap<String, LanguageTag>) -> Option<Self> {
        let normalized = extension.trim_start_matches('.').to_ascii_lowercase();
        if let Some(tag) = user_extensions.get(&normalized) {
            return Some(*tag);
        }
        match normalized.as_str() {
            "ts" | "tsx" => Some(Self::TypeScript),
            "js" | "jsx" => Some(Self::JavaScript),
            "py" => Some(Self::Python),
            "rs" => Some(Self::Rust),
            "go" => Some(Self::Go),
            "zig" => Some(Self::Zig),
            "c" | "h" => Some(Self::C),
            "cpp" | "cc" | "hpp" | "cxx" | "hh" => Some(Self::Cpp),
            "java" => Some(Self::Java),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::TypeScript => "typescript",
            Self::JavaScript => "javascript",
            Self::Python => "python",
            Self::Rust => "rust",
            Self::Go => "go",
            Self::Zig => "zig",
            Self::C => "c",
            Self::Cpp => "cpp",
            Self::Java => "java",
        }
    }

    pub const ALL: [LanguageTag; 9] = [
        Self::TypeScript,
        Self::JavaScript,
        Self::Python,
        Self::Rust,
        Self::Go,
        Self::Zig,
        Self::C,
        Self::Cpp,
        Self::Java,
    ];
}

impl std::fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_aliases() {
        assert_eq!(LanguageTag::parse("ts"), Some(LanguageTag::TypeScript));
        assert_eq!(LanguageTag::parse("js"), Some(LanguageTag::JavaScript));
        assert_eq!(LanguageTag::parse("TypeScript"), Some(LanguageTag::TypeScript));
    }

    #[test]
    fn parse_unknown_is_none() {
        assert_eq!(LanguageTag::parse("cobol"), None);
    }

    #[test]
    fn extension_table_is_total_over_known_extensions() {
        let empty = HashMap::new();
        assert_eq!(
            LanguageTag::from_extension(".tsx", &empty),
            Some(LanguageTag::TypeScript)
        );
        assert_eq!(LanguageTag::from_extension("zig", &empty), Some(LanguageTag::Zig));
        assert_eq!(LanguageTag::from_extension("hpp", &empty), Some(LanguageTag::Cpp));
    }

    #[test]
    fn unknown_extension_returns_none_not_error() {
        let empty = HashMap::new();
        assert_eq!(LanguageTag::from_extension("exe", &empty), None);
    }

    #[test]
    fn user_extensions_take_priority() {
        let mut overrides = HashMap::new();
        overrides.insert("mjs".to_string(), LanguageTag::JavaScript);
        assert_eq!(
            LanguageTag::from_extension("mjs", &overrides),
            Some(LanguageTag::JavaScript)
        );
    }
}
