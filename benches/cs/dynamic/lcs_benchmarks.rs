use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use lcsdiff::{LcsTable, ListSequence, Sequence};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_dna(rng: &mut StdRng, len: usize) -> Vec<u8> {
    const ALPHABET: &[u8] = b"ACGT";
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())])
        .collect()
}

fn bench_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("lcs_table");
    for &len in &[100usize, 500, 1_000] {
        let mut rng = StdRng::seed_from_u64(42);
        let s = random_dna(&mut rng, len);
        let t = random_dna(&mut rng, len);
        group.bench_with_input(BenchmarkId::new("grid", len), &len, |b, _| {
            b.iter(|| {
                let table = LcsTable::new(ListSequence::new(&s), ListSequence::new(&t));
                black_box(table.lcs_len())
            })
        });
    }
    group.finish();
}

fn bench_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("lcs_path");
    for &len in &[100usize, 500, 1_000] {
        let mut rng = StdRng::seed_from_u64(7);
        let s = random_dna(&mut rng, len);
        let t = random_dna(&mut rng, len);
        group.bench_with_input(BenchmarkId::new("backtrack", len), &len, |b, _| {
            b.iter_batched(
                || {
                    let table = LcsTable::new(ListSequence::new(&s), ListSequence::new(&t));
                    table.grid();
                    table
                },
                |table| black_box(table.path().len()),
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_table, bench_path);
criterion_main!(benches);
