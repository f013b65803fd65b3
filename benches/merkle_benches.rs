use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use merkle_log::{Digest, HashAlgo, MerkleTree, ProofBuilder};

fn make_digest(algo: HashAlgo, seed: usize) -> Digest {
    let width = algo.digest_width();
    let mut bytes = Vec::with_capacity(width);
    for j in 0..width {
        bytes.push((seed.wrapping_mul(131).wrapping_add(j)) as u8);
    }
    Digest::new(bytes)
}

fn build_tree(algo: HashAlgo, count: usize) -> MerkleTree {
    let mut tree = MerkleTree::new(algo);
    for i in 0..count {
        tree.add(make_digest(algo, i)).unwrap();
    }
    tree
}

fn bench_add(c: &mut Criterion) {
    let sizes = [1024usize, 16_384, 65_536];
    for algo in [HashAlgo::Blake2s128, HashAlgo::Blake3] {
        let mut group = c.benchmark_group(format!("add_{:?}", algo));
        for &size in &sizes {
            let leaves: Vec<Digest> = (0..size).map(|i| make_digest(algo, i)).collect();
            group.throughput(Throughput::Bytes((size * algo.digest_width()) as u64));
            group.bench_with_input(BenchmarkId::from_parameter(size), &leaves, |b, leaves| {
                b.iter_batched(
                    || leaves.clone(),
                    |leaves| {
                        let mut tree = MerkleTree::new(algo);
                        for leaf in leaves {
                            tree.add(leaf).unwrap();
                        }
                        tree.root().unwrap()
                    },
                    BatchSize::SmallInput,
                );
            });
        }
        group.finish();
    }
}

fn bench_proof(c: &mut Criterion) {
    let algo = HashAlgo::Blake3;
    let size = 65_536usize;
    let tree = build_tree(algo, size);
    let root = tree.root().unwrap();
    let leaf = make_digest(algo, size / 2);

    let mut group = c.benchmark_group("proof");
    group.bench_function("build", |b| {
        b.iter(|| ProofBuilder::build_at(&tree, size / 2).unwrap());
    });
    let proof = ProofBuilder::build_at(&tree, size / 2).unwrap();
    group.bench_function("validate", |b| {
        b.iter(|| assert!(proof.validate(&leaf, &root)));
    });
    group.finish();
}

criterion_group!(benches, bench_add, bench_proof);
criterion_main!(benches);
