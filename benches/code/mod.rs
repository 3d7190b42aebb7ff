use criterion::{BenchmarkId, Criterion, criterion_group};
use itertools::kmerge_by;
use rand::prelude::*;
use sorted_merge::Merged;

fn closest_divisible<I>(iter: I, target: usize) -> usize
where
    I: Iterator<Item = usize>,
{
    fn gcd(mut a: usize, mut b: usize) -> usize {
        while b != 0 {
            let t = b;
            b = a % b;
            a = t;
        }
        a
    }
    fn lcm(a: usize, b: usize) -> usize {
        a.checked_mul(b).unwrap() / gcd(a, b)
    }

    let lcm = iter.fold(1, lcm);
    ((target as f64) / (lcm as f64)).round() as usize * lcm
}

/// Random items, split into `n_iters` inputs that are sorted individually
fn sorted_chunks(rng: &mut StdRng, n_els: usize, n_iters: usize) -> Vec<u64> {
    let mut vec = rng.random_iter().take(n_els).collect::<Vec<u64>>();
    vec.chunks_mut(n_els / n_iters).for_each(<[u64]>::sort_unstable);
    vec
}

fn bench_itertools(c: &mut Criterion) {
    let iter_counts = [8, 32, 128, 256, 512, 1024, 1536, 2048, 3072, 4096];
    let n_els = closest_divisible(iter_counts.iter().copied(), 2_usize.pow(20));
    let mut rng = StdRng::seed_from_u64(0);

    let mut group = c.benchmark_group("Sorted random chunks VS Itertools");
    for n_iters in iter_counts.iter().copied() {
        let it_len = n_els / n_iters;
        let vec = sorted_chunks(&mut rng, n_els, n_iters);
        group.bench_function(BenchmarkId::new("SortedMerge", n_iters), |b| {
            b.iter(|| {
                Merged::new(vec.chunks(it_len).map(|chunk| chunk.iter().copied()))
                    .build()
                    .unwrap()
                    .try_into_vec()
                    .unwrap()
            });
        });
        group.bench_function(BenchmarkId::new("Itertools kmerge_by", n_iters), |b| {
            b.iter(|| {
                kmerge_by(
                    vec.chunks(it_len).map(|chunk| chunk.iter().copied()),
                    |a: &u64, b: &u64| a < b,
                )
                .collect::<Vec<_>>()
            });
        });
    }
    group.finish();

    let vec = (0..(n_els as u64)).collect::<Vec<u64>>();

    let mut group = c.benchmark_group("Fully ordered VS Itertools");
    for n_iters in iter_counts.iter().copied() {
        let it_len = n_els / n_iters;
        group.bench_function(BenchmarkId::new("SortedMerge", n_iters), |b| {
            b.iter(|| {
                Merged::new(vec.chunks(it_len).map(|chunk| chunk.iter().copied()))
                    .build()
                    .unwrap()
                    .try_into_vec()
                    .unwrap()
            });
        });
        group.bench_function(BenchmarkId::new("Itertools kmerge_by", n_iters), |b| {
            b.iter(|| {
                kmerge_by(
                    vec.chunks(it_len).map(|chunk| chunk.iter().copied()),
                    |a: &u64, b: &u64| a < b,
                )
                .collect::<Vec<_>>()
            });
        });
    }
    group.finish();
}

fn bench_configs(c: &mut Criterion) {
    const N_ITERS: usize = 64;
    let n_els = 2_usize.pow(20);
    let it_len = n_els / N_ITERS;
    let vec = sorted_chunks(&mut StdRng::seed_from_u64(0), n_els, N_ITERS);

    let mut group = c.benchmark_group(format!("Configs ({n_els} items; {N_ITERS} inputs)"));

    group.bench_function("Insertion order", |b| {
        b.iter(|| {
            Merged::new(vec.chunks(it_len).map(|chunk| chunk.iter().copied()))
                .build()
                .unwrap()
                .try_into_vec()
                .unwrap()
        });
    });
    group.bench_function("Reverse insertion order", |b| {
        b.iter(|| {
            Merged::new(vec.chunks(it_len).map(|chunk| chunk.iter().copied()))
                .reverse_tie_breaking()
                .build()
                .unwrap()
                .try_into_vec()
                .unwrap()
        });
    });
    group.bench_function("Iterator, insertion order", |b| {
        b.iter(|| {
            Merged::new(vec.chunks(it_len).map(|chunk| chunk.iter().copied()))
                .build()
                .unwrap()
                .map(Result::unwrap)
                .collect::<Vec<_>>()
        });
    });
    #[cfg(feature = "stackvec_storage")]
    group.bench_function("Insertion order, stackvec", |b| {
        b.iter(|| {
            Merged::new_stackvec::<N_ITERS>(vec.chunks(it_len).map(|chunk| chunk.iter().copied()))
                .build()
                .unwrap()
                .try_into_vec()
                .unwrap()
        });
    });
    #[cfg(feature = "stackvec_storage")]
    group.bench_function("Reverse insertion order, stackvec", |b| {
        b.iter(|| {
            Merged::new_stackvec::<N_ITERS>(vec.chunks(it_len).map(|chunk| chunk.iter().copied()))
                .reverse_tie_breaking()
                .build()
                .unwrap()
                .try_into_vec()
                .unwrap()
        });
    });
    group.finish();
}

criterion_group!(benches, bench_itertools, bench_configs);
