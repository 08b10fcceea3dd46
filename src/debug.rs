//! A minimal, indentation-based pretty printer, gated behind the `debug`
//! feature -- spec treats this purely as an external collaborator ("pretty
//! printing... contains no original design work beyond field plumbing").
//!
//! Shaped after the teacher's own `NODE_LOGGER`: push/pop a node, log
//! labelled values, never touch layout semantics.

use core::fmt;

use crate::node::Node;
use crate::tree::Taffy;

/// A node's print callback, invoked once per visited node with the node
/// itself; the callback is expected to call back into `Taffy` accessors to
/// format whatever it wants logged.
pub fn print_tree(tree: &Taffy, root: Node) {
    print_node(tree, root, 0);
}

fn print_node(tree: &Taffy, node: Node, depth: usize) {
    let Ok(layout) = tree.layout(node) else { return };
    log_line(depth, format_args!(
        "{{x: {:.2} y: {:.2} w: {:.2} h: {:.2}}}",
        layout.position.left, layout.position.top, layout.dimensions.width, layout.dimensions.height
    ));
    if let Ok(children) = tree.children(node) {
        for &child in children {
            print_node(tree, child, depth + 1);
        }
    }
}

fn log_line(depth: usize, args: fmt::Arguments<'_>) {
    #[cfg(feature = "std")]
    {
        println!("{:indent$}{}", "", args, indent = depth * 2);
    }
    #[cfg(not(feature = "std"))]
    {
        let _ = (depth, args);
    }
}
