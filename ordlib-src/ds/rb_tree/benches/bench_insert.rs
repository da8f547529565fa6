use std::collections::BTreeSet;

use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion,
};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use randgen::{Gen, Permutation};
use rb_tree::RbTree;

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    let mut rng = ChaCha20Rng::from_seed([
        0x3A, 0x91, 0x0C, 0xE7, 0x55, 0x12, 0xB8, 0x6F, 0xD4, 0x27, 0x80, 0x1B,
        0xC3, 0x9E, 0x46, 0xF1, 0x08, 0x7D, 0xA2, 0x5B, 0xE0, 0x34, 0x99, 0x6C,
        0x1F, 0xD8, 0x43, 0xBE, 0x72, 0x05, 0xCA, 0x6E,
    ]);

    for len in [1_000, 10_000, 100_000] {
        let shuffled = Permutation { len }.generate(&mut rng);
        let ascending: Vec<_> = (0..len as i32).collect();

        for (name, input) in [("shuffled", &shuffled), ("ascending", &ascending)]
        {
            group.bench_with_input(
                BenchmarkId::new(format!("rb_tree/{name}"), len),
                input,
                |b, input| {
                    b.iter(|| {
                        let mut tree = RbTree::new();
                        for &x in input {
                            tree.insert(black_box(x));
                        }
                        tree
                    })
                },
            );
            group.bench_with_input(
                BenchmarkId::new(format!("btree_set/{name}"), len),
                input,
                |b, input| {
                    b.iter(|| {
                        let mut set = BTreeSet::new();
                        for &x in input {
                            set.insert(black_box(x));
                        }
                        set
                    })
                },
            );
        }
    }
    group.finish();
}

fn bench_contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("contains");

    let mut rng = ChaCha20Rng::from_seed([0x5C; 32]);
    let len = 100_000;
    let a = Permutation { len }.generate(&mut rng);
    let probe = Permutation { len: 2 * len }.generate(&mut rng);
    let tree: RbTree<_> = a.iter().copied().collect();
    let set: BTreeSet<_> = a.iter().copied().collect();

    group.bench_function("rb_tree", |b| {
        b.iter(|| probe.iter().filter(|&&x| tree.contains(&x)).count())
    });
    group.bench_function("btree_set", |b| {
        b.iter(|| probe.iter().filter(|&&x| set.contains(&x)).count())
    });
    group.finish();
}

criterion_group!(benches, bench_insert, bench_contains);
criterion_main!(benches);
