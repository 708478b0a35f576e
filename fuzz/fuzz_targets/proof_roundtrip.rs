#![no_main]

use std::collections::BTreeMap;

use alloy_primitives::Bytes;
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use receipt_trie::Trie;

#[derive(Debug, Arbitrary)]
struct Input {
    entries: Vec<([u8; 8], Vec<u8>)>,
}

fuzz_target!(|input: Input| {
    let entries: BTreeMap<[u8; 8], Bytes> = input
        .entries
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| (key, Bytes::from(value)))
        .collect();
    if entries.is_empty() {
        return;
    }

    let mut trie = Trie::default();
    for (key, value) in &entries {
        trie.insert(key.as_slice(), value.clone());
    }
    let root = trie.hash();

    for (key, value) in &entries {
        let proof = trie.prove(key.as_slice()).expect("present key must prove");
        assert_eq!(
            Trie::verify_proof(root, key.as_slice(), value, &proof),
            Ok(true),
            "generated proof failed to verify"
        );
        assert_ne!(
            Trie::verify_proof(root, key.as_slice(), b"\xde\xad\xbe\xef not stored", &proof),
            Ok(true),
            "proof accepted a foreign value"
        );
    }
});
