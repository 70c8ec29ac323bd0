use super::tree::SyntaxTree;

/// A non-owning handle into a `SyntaxTree`.
///
/// The lifetime parameter ties every `Node` to the `SyntaxTree` borrow
/// that produced it, so a node cannot outlive its tree at the type
/// level — the compiler rejects any attempt to stash a `Node<'tree>`
/// somewhere that outlives `'tree`.
#[derive(Clone, Copy)]
pub struct Node<'tree> {
    inner: tree_sitter::Node<'tree>,
    tree: &'tree SyntaxTree,
}

impl<'tree> Node<'tree> {
    pub(crate) fn new(inner: tree_sitter::Node<'tree>, tree: &'tree SyntaxTree) -> Self {
        Self { inner, tree }
    }

    pub fn kind(&self) -> &'static str {
        self.inner.kind()
    }

    pub fn is_named(&self) -> bool {
        self.inner.is_named()
    }

    pub fn has_error(&self) -> bool {
        self.inner.has_error()
    }

    pub fn start_byte(&self) -> usize {
        self.inner.start_byte()
    }

    pub fn end_byte(&self) -> usize {
        self.inner.end_byte()
    }

    pub fn start_position(&self) -> (usize, usize) {
        let p = self.inner.start_position();
        (p.row, p.column)
    }

    pub fn text(&self) -> &'tree str {
        let bytes = &self.tree.source()[self.start_byte()..self.end_byte()];
        std::str::from_utf8(bytes).unwrap_or("")
    }

    pub fn child_count(&self) -> usize {
        self.inner.named_child_count()
    }

    pub fn children(&self) -> Vec<Node<'tree>> {
        let mut cursor = self.inner.walk();
        self.inner
            .named_children(&mut cursor)
            .map(|n| Node::new(n, self.tree))
            .collect()
    }

    pub fn child_by_field_name(&self, name: &str) -> Option<Node<'tree>> {
        self.inner
            .child_by_field_name(name)
            .map(|n| Node::new(n, self.tree))
    }

    pub fn parent(&self) -> Option<Node<'tree>> {
        self.inner.parent().map(|n| Node::new(n, self.tree))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::LanguageTag;
    use crate::parser::ParserFacade;

    #[test]
    fn children_are_named_only() {
        let facade = ParserFacade::new();
        let tree = facade
            .parse(b"fn main() { let x = 1; }", LanguageTag::Rust, None)
            .unwrap();
        let root = tree.root();
        assert!(root.child_count() >= 1);
        for child in root.children() {
            assert!(child.is_named());
        }
    }

    #[test]
    fn text_matches_source_slice() {
        let facade = ParserFacade::new();
        let source = b"fn main() {}";
        let tree = facade.parse(source, LanguageTag::Rust, None).unwrap();
        let root = tree.root();
        assert_eq!(root.text().as_bytes(), &source[root.start_byte()..root.end_byte()]);
    }
}
