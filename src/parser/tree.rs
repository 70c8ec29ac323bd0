use std::sync::Arc;

use crate::language::LanguageTag;

use super::node::Node;

/// An immutable parse tree pinned to the source bytes it was parsed from.
///
/// The tree and its bytes are co-owned (`Arc<[u8]>`) rather than split
/// apart, so a `SyntaxTree` can be handed across threads or held
/// independently of the caller's original buffer while still upholding
/// "bytes must outlive tree" by construction: there is no way to obtain
/// one without the other.
#[derive(Clone)]
pub struct SyntaxTree {
    tree: Arc<tree_sitter::Tree>,
    source: Arc<[u8]>,
    language: LanguageTag,
}

impl SyntaxTree {
    pub(crate) fn new(tree: tree_sitter::Tree, source: Arc<[u8]>, language: LanguageTag) -> Self {
        Self {
            tree: Arc::new(tree),
            source,
            language,
        }
    }

    pub fn language(&self) -> LanguageTag {
        self.language
    }

    pub fn source(&self) -> &[u8] {
        &self.source
    }

    pub fn source_str(&self) -> &str {
        std::str::from_utf8(&self.source).unwrap_or("")
    }

    pub fn root(&self) -> Node<'_> {
        Node::new(self.tree.root_node(), self)
    }

    pub fn has_error(&self) -> bool {
        self.tree.root_node().has_error()
    }
}

/// Slice `source[node.start_byte..node.end_byte)`.
///
/// Always matches the invariant `len(get_node_text(...)) == end_byte -
/// start_byte` since it is a direct byte-range slice with no decoding
/// involved.
pub fn get_node_text<'a>(tree: &'a SyntaxTree, node: &Node<'_>) -> &'a [u8] {
    &tree.source()[node.start_byte()..node.end_byte()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ParserFacade;

    #[test]
    fn root_has_no_error_on_well_formed_input() {
        let facade = ParserFacade::new();
        let tree = facade.parse(b"fn main() {}", LanguageTag::Rust, None).unwrap();
        assert!(!tree.has_error());
    }

    #[test]
    fn node_text_matches_byte_span() {
        let facade = ParserFacade::new();
        let tree = facade.parse(b"fn main() {}", LanguageTag::Rust, None).unwrap();
        let root = tree.root();
        let text = get_node_text(&tree, &root);
        assert_eq!(text.len(), root.end_byte() - root.start_byte());
    }
}
