//! Indented tree rendering, for tests and debugging.
use std::fmt::Display;

use super::nodes::Node;
use super::Trie;

impl Display for Trie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Some(root) = &self.root else {
            return write!(f, "Trie {{ EMPTY }}");
        };

        fn fmt_node(
            f: &mut std::fmt::Formatter<'_>,
            node: &Node,
            indent: usize,
        ) -> std::fmt::Result {
            write!(f, "{}", " ".repeat(indent))?;
            match node {
                Node::Leaf(leaf) => write!(
                    f,
                    "Leaf {{ path: {:?}, value: {:?} }}",
                    leaf.path.to_vec(),
                    leaf.value
                ),
                Node::Extension(ext) => {
                    write!(f, "Extension {:?}\n", ext.path.to_vec())?;
                    fmt_node(f, &ext.child, indent + 4)
                }
                Node::Branch(branch) => {
                    write!(f, "Branch")?;
                    for child in branch.children.iter() {
                        match child {
                            Some(child) => {
                                write!(f, "\n")?;
                                fmt_node(f, child, indent + 4)?;
                            }
                            None => write!(f, "\n{}None", " ".repeat(indent + 4))?,
                        }
                    }
                    if let Some(value) = &branch.value {
                        write!(f, "\n{}value: {:?}", " ".repeat(indent + 4), value)?;
                    }
                    Ok(())
                }
                Node::Digest(digest) => write!(f, "Digest {{ {:?} }}", digest.digest),
            }
        }

        fmt_node(f, root, 0)
    }
}
