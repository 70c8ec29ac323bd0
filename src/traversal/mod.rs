pub mod curated;

pub use curated::CURATED_NODE_TABLE_VERSION;

use crate::language::LanguageTag;
use crate::parser::Node;

/// Whether a visitor wants the walk to continue or stop globally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Walk {
    Continue,
    Stop,
}

#[derive(Clone, Copy)]
enum Order {
    Pre,
    Post,
}

/// Depth-first traversal kernel shared by `pre_order` and `post_order`.
/// Root depth is 0. Returning `Walk::Stop` from the visitor terminates
/// the walk globally — no further nodes in any order are visited.
fn depth_first<'tree>(
    node: Node<'tree>,
    depth: usize,
    order: Order,
    visit: &mut impl FnMut(Node<'tree>, usize) -> Walk,
) -> Walk {
    if matches!(order, Order::Pre) && visit(node, depth) == Walk::Stop {
        return Walk::Stop;
    }
    for child in node.children() {
        if depth_first(child, depth + 1, order, visit) == Walk::Stop {
            return Walk::Stop;
        }
    }
    if matches!(order, Order::Post) && visit(node, depth) == Walk::Stop {
        return Walk::Stop;
    }
    Walk::Continue
}

pub fn pre_order<'tree>(root: Node<'tree>, mut visit: impl FnMut(Node<'tree>, usize) -> Walk) {
    depth_first(root, 0, Order::Pre, &mut visit);
}

pub fn post_order<'tree>(root: Node<'tree>, mut visit: impl FnMut(Node<'tree>, usize) -> Walk) {
    depth_first(root, 0, Order::Post, &mut visit);
}

pub fn level_order<'tree>(root: Node<'tree>, mut visit: impl FnMut(Node<'tree>, usize) -> Walk) {
    let mut queue = std::collections::VecDeque::new();
    queue.push_back((root, 0usize));
    while let Some((node, depth)) = queue.pop_front() {
        if visit(node, depth) == Walk::Stop {
            return;
        }
        for child in node.children() {
            queue.push_back((child, depth + 1));
        }
    }
}

/// Collect every descendant (root included) whose node-type string
/// equals `type_name` into `sink`, without allocating a fresh `Vec`.
pub fn find_by_type_into<'tree>(root: Node<'tree>, type_name: &str, sink: &mut Vec<Node<'tree>>) {
    pre_order(root, |node, _depth| {
        if node.kind() == type_name {
            sink.push(node);
        }
        Walk::Continue
    });
}

pub fn find_by_type<'tree>(root: Node<'tree>, type_name: &str) -> Vec<Node<'tree>> {
    let mut found = Vec::new();
    find_by_type_into(root, type_name, &mut found);
    found
}

pub fn find_all_into<'tree>(root: Node<'tree>, predicate: impl Fn(&Node<'tree>) -> bool, sink: &mut Vec<Node<'tree>>) {
    pre_order(root, |node, _depth| {
        if predicate(&node) {
            sink.push(node);
        }
        Walk::Continue
    });
}

pub fn find_all<'tree>(root: Node<'tree>, predicate: impl Fn(&Node<'tree>) -> bool) -> Vec<Node<'tree>> {
    let mut found = Vec::new();
    find_all_into(root, predicate, &mut found);
    found
}

pub fn find_first<'tree>(root: Node<'tree>, predicate: impl Fn(&Node<'tree>) -> bool) -> Option<Node<'tree>> {
    let mut found = None;
    pre_order(root, |node, _depth| {
        if predicate(&node) {
            found = Some(node);
            return Walk::Stop;
        }
        Walk::Continue
    });
    found
}

fn find_by_types_into<'tree>(root: Node<'tree>, type_names: &[&str], sink: &mut Vec<Node<'tree>>) {
    find_all_into(root, |node| type_names.contains(&node.kind()), sink);
}

fn find_by_types<'tree>(root: Node<'tree>, type_names: &[&str]) -> Vec<Node<'tree>> {
    let mut found = Vec::new();
    find_by_types_into(root, type_names, &mut found);
    found
}

pub fn extract_functions_into<'tree>(root: Node<'tree>, language: LanguageTag, sink: &mut Vec<Node<'tree>>) {
    find_by_types_into(root, curated::function_node_types(language), sink);
}

pub fn extract_functions<'tree>(root: Node<'tree>, language: LanguageTag) -> Vec<Node<'tree>> {
    find_by_types(root, curated::function_node_types(language))
}

pub fn extract_types_into<'tree>(root: Node<'tree>, language: LanguageTag, sink: &mut Vec<Node<'tree>>) {
    find_by_types_into(root, curated::type_node_types(language), sink);
}

pub fn extract_types<'tree>(root: Node<'tree>, language: LanguageTag) -> Vec<Node<'tree>> {
    find_by_types(root, curated::type_node_types(language))
}

pub fn extract_imports_into<'tree>(root: Node<'tree>, language: LanguageTag, sink: &mut Vec<Node<'tree>>) {
    find_by_types_into(root, curated::import_node_types(language), sink);
}

pub fn extract_imports<'tree>(root: Node<'tree>, language: LanguageTag) -> Vec<Node<'tree>> {
    find_by_types(root, curated::import_node_types(language))
}
