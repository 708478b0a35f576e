#![allow(missing_docs)]

#[cfg(test)]
mod tests {
    use alloy_primitives::{address, keccak256, Bytes, U256};
    use evm_events::{encode_event, AbiValue, EventParam, TransactionReceipt};
    use receipt_trie::{index_key, Trie, TrieError, EMPTY_ROOT_HASH};

    // A block's worth of opaque receipt payloads, keyed by transaction
    // index the way the receipts trie is.
    fn receipts_trie(count: u64) -> (Trie, Vec<Bytes>) {
        let payloads: Vec<Bytes> = (0..count)
            .map(|i| Bytes::copy_from_slice(&keccak256(i.to_be_bytes()).repeat(4)))
            .collect();
        let mut trie = Trie::new();
        for (i, payload) in payloads.iter().enumerate() {
            trie.insert(&index_key(i as u64), payload.clone());
        }
        (trie, payloads)
    }

    #[test]
    fn receipt_inclusion_end_to_end() {
        let (mut trie, payloads) = receipts_trie(150);
        let root = trie.hash();
        assert_ne!(root, EMPTY_ROOT_HASH);

        for index in [0u64, 1, 64, 127, 128, 149] {
            let key = index_key(index);
            let payload = &payloads[index as usize];

            let proof = trie.prove(&key).expect("present key must prove");
            assert_eq!(Trie::verify_proof(root, &key, payload, &proof), Ok(true));

            // The proof answers for exactly this entry.
            assert_eq!(
                Trie::verify_proof(root, &key, b"a different receipt", &proof),
                Ok(false)
            );
        }

        assert_eq!(trie.prove(&index_key(150)).unwrap_err(), TrieError::KeyNotFound);
    }

    #[test]
    fn proofs_are_self_contained() {
        // Verification sees only the root hash and the proof nodes; the
        // trie itself is gone by the time it runs.
        let (root, key, payload, proof) = {
            let (mut trie, payloads) = receipts_trie(40);
            let key = index_key(17);
            let proof = trie.prove(&key).unwrap();
            (trie.hash(), key, payloads[17].clone(), proof)
        };
        assert_eq!(Trie::verify_proof(root, &key, &payload, &proof), Ok(true));
    }

    #[test]
    fn emitted_event_is_located_and_proved() {
        // The full primitive: the receipt carries the expected emission,
        // and the receipt itself is committed to by the trie root.
        let event = encode_event(
            address!("5FbDB2315678afecb367f032d93F642f64180aa3"),
            "Transfer(address,address,uint256)",
            &[
                EventParam::indexed(AbiValue::Address(address!(
                    "70997970C51812dc3A010C7d01b50e0d17dc79C8"
                ))),
                EventParam::indexed(AbiValue::Address(address!(
                    "3C44CdDdB6a900fa2b585dd299e03d12FA4293BC"
                ))),
                EventParam::unindexed(AbiValue::Uint(U256::from(1u64))),
            ],
        )
        .unwrap();

        // The receipt as an endpoint would return it, hex case and all.
        let receipt_json = serde_json::json!({
            "status": "0x1",
            "logs": [{
                "address": "0x5FBDB2315678AFECB367F032D93F642F64180AA3",
                "topics": event.topics,
                "data": event.data,
                "removed": false
            }]
        })
        .to_string();
        let receipt: TransactionReceipt = serde_json::from_str(&receipt_json).unwrap();
        assert!(event.is_found_in(&receipt));

        // Commit the raw receipt into a block's trie and prove it.
        let (mut trie, _) = receipts_trie(10);
        let key = index_key(3);
        let payload = Bytes::from(receipt_json.into_bytes());
        trie.insert(&key, payload.clone());
        let root = trie.hash();

        let proof = trie.prove(&key).unwrap();
        assert_eq!(Trie::verify_proof(root, &key, &payload, &proof), Ok(true));
    }

    #[test]
    fn tampered_proofs_are_rejected_by_the_reference_verifier() {
        use alloy_trie::Nibbles;

        let (mut trie, payloads) = receipts_trie(80);
        let root = trie.hash();
        let key = index_key(42);
        let proof = trie.prove(&key).unwrap();
        let nodes: Vec<Bytes> = proof.nodes().cloned().collect();

        alloy_trie::proof::verify_proof(
            root,
            Nibbles::unpack(&key),
            Some(payloads[42].to_vec()),
            &nodes,
        )
        .expect("reference verifier must accept a generated proof");

        assert!(alloy_trie::proof::verify_proof(
            root,
            Nibbles::unpack(&key),
            Some(b"wrong".to_vec()),
            &nodes,
        )
        .is_err());
    }
}
