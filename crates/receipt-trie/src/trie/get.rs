//! Lookup by nibble path, without structural change.
use alloy_primitives::Bytes;
use alloy_trie::Nibbles;

use super::nodes::Node;

impl Node {
    pub(super) fn get(&self, path: Nibbles) -> Option<&Bytes> {
        match self {
            Node::Leaf(leaf) => (leaf.path == path).then_some(&leaf.value),
            Node::Extension(ext) => {
                if path.starts_with(&ext.path) {
                    ext.child.get(path.slice(ext.path.len()..))
                } else {
                    None
                }
            }
            Node::Branch(branch) => {
                if path.is_empty() {
                    return branch.value.as_ref();
                }
                branch.children.get(path.at(0))?.get(path.slice(1..))
            }
            Node::Digest(_) => panic!("trie: unresolved digest node access"),
        }
    }
}
