use crate::language::LanguageTag;

/// Version stamp for the curated node-type tables. Folded into the
/// Constraint Cache fingerprint so a table revision invalidates stale
/// cache entries.
pub const CURATED_NODE_TABLE_VERSION: u32 = 1;

/// Curated, hard-coded node-type names recognized as "function-like"
/// per language. Hard-coded and versioned with the core, per the
/// traversal engine's contract — never loaded from an external mapping
/// file.
pub fn function_node_types(language: LanguageTag) -> &'static [&'static str] {
    match language {
        LanguageTag::TypeScript => &[
            "function_declaration",
            "method_definition",
            "arrow_function",
            "function_signature",
        ],
        LanguageTag::JavaScript => &["function_declaration", "method_definition", "arrow_function"],
        LanguageTag::Python => &["function_definition"],
        LanguageTag::Rust => &["function_item"],
        LanguageTag::Go => &["function_declaration", "method_declaration"],
        LanguageTag::Zig => &["FnProto", "function_declaration"],
        LanguageTag::C => &["function_definition"],
        LanguageTag::Cpp => &["function_definition"],
        LanguageTag::Java => &["method_declaration", "constructor_declaration"],
    }
}

/// Curated "type-like" node types (classes, interfaces, structs, enums,
/// type aliases).
pub fn type_node_types(language: LanguageTag) -> &'static [&'static str] {
    match language {
        LanguageTag::TypeScript => &[
            "interface_declaration",
            "class_declaration",
            "type_alias_declaration",
            "enum_declaration",
        ],
        LanguageTag::JavaScript => &["class_declaration"],
        LanguageTag::Python => &["class_definition"],
        LanguageTag::Rust => &["struct_item", "enum_item", "trait_item", "type_item"],
        LanguageTag::Go => &["type_declaration", "type_spec"],
        LanguageTag::Zig => &["ContainerDecl"],
        LanguageTag::C => &["struct_specifier", "enum_specifier", "type_definition"],
        LanguageTag::Cpp => &["class_specifier", "struct_specifier", "enum_specifier"],
        LanguageTag::Java => &["class_declaration", "interface_declaration", "enum_declaration"],
    }
}

/// Curated "import-like" node types.
pub fn import_node_types(language: LanguageTag) -> &'static [&'static str] {
    match language {
        LanguageTag::TypeScript | LanguageTag::JavaScript => &["import_statement"],
        LanguageTag::Python => &["import_statement", "import_from_statement"],
        LanguageTag::Rust => &["use_declaration"],
        LanguageTag::Go => &["import_declaration", "import_spec"],
        LanguageTag::Zig => &["VarDecl"],
        LanguageTag::C | LanguageTag::Cpp => &["preproc_include"],
        LanguageTag::Java => &["import_declaration"],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_language_has_function_nodes() {
        for lang in LanguageTag::ALL {
            assert!(!function_node_types(lang).is_empty(), "{lang} has no function nodes");
        }
    }

    #[test]
    fn rust_function_nodes_include_function_item() {
        assert!(function_node_types(LanguageTag::Rust).contains(&"function_item"));
    }

    #[test]
    fn typescript_type_nodes_include_interface() {
        assert!(type_node_types(LanguageTag::TypeScript).contains(&"interface_declaration"));
    }
}
