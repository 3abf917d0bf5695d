use criterion::{black_box, criterion_group, criterion_main, Criterion};
use spectrum_knn::{ClassifierConfig, KnnClassifier, Scoring, Sequence, SpectrumKernel};

const BASES: [char; 4] = ['A', 'C', 'G', 'T'];

/// Deterministic pseudo-random sequence
fn synthetic(len: usize, seed: u64) -> String {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            BASES[(state >> 62) as usize]
        })
        .collect()
}

fn dataset(count: usize, offset: u64) -> Vec<Sequence> {
    (0..count)
        .map(|i| {
            let label = if i % 2 == 0 { "exon" } else { "intron" };
            Sequence::new(synthetic(200, i as u64 + offset), label)
        })
        .collect()
}

fn bench_build_kmers(c: &mut Criterion) {
    let mut seq = Sequence::new(synthetic(1000, 7), "exon");
    c.bench_function("build_kmers_k8", |b| {
        b.iter(|| seq.build_kmers(black_box(8)).unwrap())
    });
}

fn bench_similarity(c: &mut Criterion) {
    let kernel = SpectrumKernel::new(6).unwrap();
    let mut a = Sequence::new(synthetic(200, 1), "exon");
    let mut b = Sequence::new(synthetic(200, 2), "intron");
    a.build_kmers(6).unwrap();
    b.build_kmers(6).unwrap();
    c.bench_function("per_pair_similarity_k6", |bench| {
        bench.iter(|| kernel.similarity(&mut a, &mut b).unwrap())
    });
}

fn bench_classify(c: &mut Criterion) {
    let train = dataset(20, 100);
    let test = dataset(10, 1000);

    for (name, scoring) in [("classify_per_pair", Scoring::PerPair), ("classify_sparse", Scoring::Sparse)] {
        c.bench_function(name, |b| {
            b.iter(|| {
                let config = ClassifierConfig::new(3).with_scoring(scoring);
                let kernel = SpectrumKernel::new(4).unwrap();
                let mut knn = KnnClassifier::new(train.clone(), test.clone(), kernel, config).unwrap();
                black_box(knn.accuracy().unwrap())
            })
        });
    }
}

criterion_group!(benches, bench_build_kmers, bench_similarity, bench_classify);
criterion_main!(benches);
