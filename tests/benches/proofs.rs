use alloy_primitives::{keccak256, Bytes};
use criterion::{criterion_group, criterion_main, Criterion};
use receipt_trie::{index_key, Trie};

fn proof_benchmark(c: &mut Criterion) {
    let payloads: Vec<Bytes> = (0u64..200)
        .map(|i| Bytes::copy_from_slice(&keccak256(i.to_be_bytes()).repeat(4)))
        .collect();

    let mut trie = Trie::new();
    for (i, payload) in payloads.iter().enumerate() {
        trie.insert(&index_key(i as u64), payload.clone());
    }
    let root = trie.hash();
    let key = index_key(57);

    let mut group = c.benchmark_group("receipt_proofs");

    group.bench_function("build_root", |b| {
        b.iter(|| {
            let mut fresh = Trie::new();
            for (i, payload) in payloads.iter().enumerate() {
                fresh.insert(&index_key(i as u64), payload.clone());
            }
            fresh.hash()
        });
    });

    group.bench_function("prove", |b| {
        b.iter(|| trie.prove(&key).expect("key is present"));
    });

    let proof = trie.prove(&key).expect("key is present");
    group.bench_function("verify", |b| {
        b.iter(|| {
            Trie::verify_proof(root, &key, &payloads[57], &proof).expect("proof is well-formed")
        });
    });

    group.finish();
}

criterion_group!(benches, proof_benchmark);
criterion_main!(benches);
