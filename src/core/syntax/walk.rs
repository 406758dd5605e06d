//! Pre-order depth-first traversal with parent tracking.

use super::{Field, NodeRef, SyntaxTree};

/// Field names that hold a link back up the tree and are never followed.
pub const BACK_REFERENCE_FIELDS: &[&str] = &["parent"];

/// Visit every node of `tree`, each before its children.
///
/// The visitor receives `(node, parent)`, where `parent` is the node the
/// traversal descended from (`None` for the root). Fields are visited in
/// their stored order and list fields in index order.
pub fn walk<'a, F>(tree: &'a SyntaxTree, mut visit: F)
where
    F: FnMut(NodeRef<'a>, Option<NodeRef<'a>>),
{
    let mut stack: Vec<(NodeRef<'a>, Option<NodeRef<'a>>)> = vec![(tree.root(), None)];
    let mut pending = Vec::new();

    while let Some((node, parent)) = stack.pop() {
        visit(node, parent);

        pending.clear();
        for (name, value) in node.fields() {
            if BACK_REFERENCE_FIELDS.contains(&name) {
                continue;
            }
            collect_children(tree, value, &mut pending);
        }
        // Reverse so the first child is popped first.
        stack.extend(pending.drain(..).rev().map(|child| (child, Some(node))));
    }
}

fn collect_children<'a>(tree: &'a SyntaxTree, value: &'a Field, out: &mut Vec<NodeRef<'a>>) {
    match value {
        Field::Node(id) => out.push(tree.node(*id)),
        Field::List(items) => {
            for item in items {
                collect_children(tree, item, out);
            }
        }
        Field::Value(_) => {}
    }
}
