//! RLP decoding of trie nodes, the inverse of the encoders in `hash`.
use alloy_primitives::{Bytes, B256};
use alloy_rlp::{Decodable, Header, PayloadView, EMPTY_STRING_CODE};
use alloy_trie::Nibbles;

use super::nodes::{BranchNode, DigestNode, ExtensionNode, LeafNode, Node};
use crate::error::TrieError;

impl Node {
    /// Rebuilds a node from its RLP encoding, dispatching on the payload
    /// shape: a 32-byte string is a digest reference, a two-element list a
    /// leaf or extension, a seventeen-element list a branch.
    ///
    /// Children referenced by digest decode to [`Node::Digest`]
    /// placeholders; inlined children decode eagerly. `Ok(None)` is the
    /// empty string, i.e. an empty slot.
    pub(super) fn decode(buf: &mut &[u8]) -> Result<Option<Self>, TrieError> {
        match Header::decode_raw(buf)? {
            PayloadView::String(payload) => {
                if payload.is_empty() {
                    Ok(None)
                } else if payload.len() == 32 {
                    Ok(Some(Node::Digest(DigestNode {
                        digest: B256::from_slice(payload),
                    })))
                } else {
                    Err(TrieError::InvalidNode(
                        "string payload is not a 32-byte digest",
                    ))
                }
            }
            PayloadView::List(items) => match items.len() {
                2 => {
                    let (path, is_leaf) = decode_path(&mut &items[0][..])?;
                    if is_leaf {
                        let value = Bytes::decode(&mut &items[1][..])?;
                        Ok(Some(Node::Leaf(LeafNode::new(path, value))))
                    } else {
                        let child = decode_child(items[1])?;
                        if !matches!(child, Node::Branch(_) | Node::Digest(_)) {
                            return Err(TrieError::InvalidNode(
                                "extension child must be a branch",
                            ));
                        }
                        Ok(Some(Node::Extension(ExtensionNode::new(
                            path,
                            Box::new(child),
                        ))))
                    }
                }
                17 => {
                    let mut branch = BranchNode::empty();
                    for (idx, item) in items[..16].iter().enumerate() {
                        if *item != &[EMPTY_STRING_CODE] {
                            branch.children.insert(idx, Box::new(decode_child(item)?));
                        }
                    }
                    let value = Bytes::decode(&mut &items[16][..])?;
                    if !value.is_empty() {
                        branch.value = Some(value);
                    }
                    Ok(Some(Node::Branch(branch)))
                }
                _ => Err(TrieError::InvalidNode("list arity matches no node shape")),
            },
        }
    }
}

// A child slot holds either an inlined node encoding (shorter than 32
// bytes) or a 32-byte digest string; larger inlined nodes are never
// canonical. This also bounds the depth of the eager decode.
fn decode_child(item: &[u8]) -> Result<Node, TrieError> {
    let child = Node::decode(&mut &item[..])?
        .ok_or(TrieError::InvalidNode("child slot decodes to an empty node"))?;
    if item.len() >= 32 && !matches!(child, Node::Digest(_)) {
        return Err(TrieError::InvalidNode("child node too large to inline"));
    }
    Ok(child)
}

// Unpacks a hex-prefix encoded path: the first nibble carries the leaf and
// parity flags, an even path is padded with one zero nibble.
fn decode_path(buf: &mut &[u8]) -> Result<(Nibbles, bool), TrieError> {
    let path = Nibbles::unpack(Header::decode_bytes(buf, false)?);
    if path.len() < 2 {
        return Err(TrieError::InvalidNode("hex-prefix encoding is too short"));
    }
    let (is_leaf, odd) = match path.at(0) {
        0b0000 => (false, false),
        0b0001 => (false, true),
        0b0010 => (true, false),
        0b0011 => (true, true),
        _ => return Err(TrieError::InvalidNode("invalid hex-prefix flag nibble")),
    };
    let path = if odd { path.slice(1..) } else { path.slice(2..) };
    Ok((path, is_leaf))
}

// Encodes a list header for a known payload length, reserving the buffer.
pub(super) fn encode_list_header(payload_length: usize) -> Vec<u8> {
    debug_assert!(payload_length > 1);
    let header = Header {
        list: true,
        payload_length,
    };
    let mut out = Vec::with_capacity(header.length() + payload_length);
    header.encode(&mut out);
    out
}
