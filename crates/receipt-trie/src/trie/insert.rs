//! Structural insertion for each node variant.
use alloy_primitives::Bytes;
use alloy_trie::Nibbles;

use super::nodes::{BranchNode, ExtensionNode, LeafNode, Node};

impl BranchNode {
    // Slots the remainder of a key below this branch: an empty remainder
    // becomes the branch value, anything else a leaf under its first nibble.
    fn slot(&mut self, rest: Nibbles, value: Bytes) {
        if rest.is_empty() {
            self.value = Some(value);
        } else {
            let leaf = LeafNode::new(rest.slice(1..), value);
            self.children.insert(rest.at(0), Box::new(Node::Leaf(leaf)));
        }
    }
}

// A branch with an empty prefix stands on its own, otherwise it hangs below
// an extension carrying the prefix.
fn prefixed_branch(prefix: Nibbles, branch: BranchNode) -> Node {
    if prefix.is_empty() {
        Node::Branch(branch)
    } else {
        Node::Extension(ExtensionNode::new(prefix, Box::new(Node::Branch(branch))))
    }
}

impl Node {
    pub(super) fn insert(&mut self, path: Nibbles, value: Bytes) {
        self.clear_cache();
        match self {
            Node::Leaf(leaf) => {
                if leaf.path == path {
                    leaf.value = value;
                    return;
                }
                // Fork the two keys at the end of their shared prefix. One
                // of them may end exactly there and become the branch value.
                let split = leaf.path.common_prefix_length(&path);
                let mut branch = BranchNode::empty();
                let old_value = core::mem::take(&mut leaf.value);
                branch.slot(leaf.path.slice(split..), old_value);
                branch.slot(path.slice(split..), value);
                *self = prefixed_branch(path.slice(..split), branch);
            }
            Node::Extension(ext) => {
                let split = ext.path.common_prefix_length(&path);
                if split == ext.path.len() {
                    ext.child.insert(path.slice(split..), value);
                    return;
                }
                // The key leaves the extension path early: fork at the split
                // point, keeping the tail of the extension on its own side.
                let idx = ext.path.at(split);
                let tail = ext.path.slice(split + 1..);
                let child =
                    core::mem::replace(&mut ext.child, Box::new(Node::Branch(BranchNode::empty())));
                let moved = if tail.is_empty() {
                    child
                } else {
                    Box::new(Node::Extension(ExtensionNode::new(tail, child)))
                };
                let mut branch = BranchNode::empty();
                branch.children.insert(idx, moved);
                branch.slot(path.slice(split..), value);
                *self = prefixed_branch(path.slice(..split), branch);
            }
            Node::Branch(branch) => {
                if path.is_empty() {
                    branch.value = Some(value);
                    return;
                }
                let idx = path.at(0);
                match branch.children.get_mut(idx) {
                    Some(child) => child.insert(path.slice(1..), value),
                    None => {
                        let leaf = LeafNode::new(path.slice(1..), value);
                        branch.children.insert(idx, Box::new(Node::Leaf(leaf)));
                    }
                }
            }
            Node::Digest(_) => panic!("trie: unresolved digest node access"),
        }
    }
}
