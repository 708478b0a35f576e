#![no_main]

use std::collections::BTreeMap;

use alloy_primitives::Bytes;
use alloy_trie::{HashBuilder, Nibbles};
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use receipt_trie::Trie;

#[derive(Debug, Arbitrary)]
enum Op {
    Insert { key: [u8; 8], value: Vec<u8> },
    Remove { key: [u8; 8] },
}

#[derive(Debug, Arbitrary)]
struct Input {
    ops: Vec<Op>,
}

fuzz_target!(|input: Input| {
    let mut trie = Trie::default();
    let mut model = BTreeMap::<[u8; 8], Bytes>::new();

    for op in &input.ops {
        match op {
            Op::Insert { key, value } => {
                if value.is_empty() {
                    continue;
                }
                let value = Bytes::copy_from_slice(value);
                trie.insert(key.as_slice(), value.clone());
                model.insert(*key, value);
            }
            Op::Remove { key } => {
                trie.remove(key.as_slice());
                model.remove(key);
            }
        }
    }

    for (key, value) in &model {
        assert_eq!(trie.get(key.as_slice()), Some(value));
    }

    let mut hash_builder = HashBuilder::default();
    for (key, value) in &model {
        hash_builder.add_leaf(Nibbles::unpack(key), value);
    }
    assert_eq!(trie.hash(), hash_builder.root(), "root diverged from the reference");
});
