#![no_main]

use alloy_primitives::keccak256;
use libfuzzer_sys::fuzz_target;
use receipt_trie::{ProofNodes, Trie};

// Arbitrary bytes presented as a proof node must never panic the verifier;
// every malformed input has to surface as a typed error or a mismatch.
fuzz_target!(|data: &[u8]| {
    let digest = keccak256(data);
    let mut proof = ProofNodes::default();
    proof.insert(digest, data.to_vec().into());

    let _ = Trie::verify_proof(digest, &[0x01], &[0x02], &proof);
    let _ = Trie::verify_proof(digest, &[], &[], &proof);
});
