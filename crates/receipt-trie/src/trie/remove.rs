//! Removal with re-canonicalisation.
//!
//! Deleting an entry can leave a branch with a single child or none at all;
//! such branches fold back into extensions and leaves so that every
//! reachable shape stays canonical.
use alloy_trie::Nibbles;

use super::nodes::{BranchNode, ExtensionNode, LeafNode, Node};

impl Node {
    // Returns the replacement for this node after removing `path`, or
    // `None` when the subtree becomes empty.
    pub(super) fn removed(mut self, path: Nibbles) -> Option<Node> {
        self.clear_cache();
        match self {
            Node::Leaf(leaf) => {
                if leaf.path == path {
                    None
                } else {
                    Some(Node::Leaf(leaf))
                }
            }
            Node::Extension(mut ext) => {
                if !path.starts_with(&ext.path) {
                    return Some(Node::Extension(ext));
                }
                let child = (*ext.child).removed(path.slice(ext.path.len()..))?;
                Some(match child {
                    Node::Branch(branch) => {
                        ext.child = Box::new(Node::Branch(branch));
                        Node::Extension(ext)
                    }
                    // A collapsed child absorbs the extension prefix.
                    Node::Leaf(leaf) => {
                        Node::Leaf(LeafNode::new(ext.path.join(&leaf.path), leaf.value))
                    }
                    Node::Extension(inner) => Node::Extension(ExtensionNode::new(
                        ext.path.join(&inner.path),
                        inner.child,
                    )),
                    Node::Digest(_) => panic!("trie: unresolved digest node access"),
                })
            }
            Node::Branch(mut branch) => {
                if path.is_empty() {
                    branch.value = None;
                } else {
                    let idx = path.at(0);
                    match branch.children.take(idx) {
                        Some(child) => {
                            if let Some(child) = child.removed(path.slice(1..)) {
                                branch.children.insert(idx, Box::new(child));
                            }
                        }
                        None => return Some(Node::Branch(branch)),
                    }
                }
                branch.collapse()
            }
            Node::Digest(_) => panic!("trie: unresolved digest node access"),
        }
    }
}

impl BranchNode {
    // Restores the canonical shape after a removal below this branch.
    fn collapse(mut self) -> Option<Node> {
        if self.children.is_empty() {
            // Zero children: the branch value, if any, is all that is left.
            return self
                .value
                .map(|value| Node::Leaf(LeafNode::new(Nibbles::default(), value)));
        }
        if self.value.is_none() {
            if let Some((idx, child)) = self.children.take_single() {
                return Some(match *child {
                    Node::Leaf(leaf) => {
                        Node::Leaf(LeafNode::new(prefixed(idx, &leaf.path), leaf.value))
                    }
                    Node::Extension(ext) => {
                        Node::Extension(ExtensionNode::new(prefixed(idx, &ext.path), ext.child))
                    }
                    branch @ Node::Branch(_) => Node::Extension(ExtensionNode::new(
                        Nibbles::from_nibbles([idx as u8]),
                        Box::new(branch),
                    )),
                    Node::Digest(_) => panic!("trie: unresolved digest node access"),
                });
            }
        }
        Some(Node::Branch(self))
    }
}

// The nibble a child was slotted under, followed by the child's own path.
fn prefixed(idx: usize, rest: &Nibbles) -> Nibbles {
    Nibbles::from_nibbles([idx as u8]).join(rest)
}
