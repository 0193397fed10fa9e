use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use sort_test_tools::{config, patterns, Sort};

use insertion_sort::stable;

// Quadratic sorts get expensive fast, larger sizes only with config::BENCH_LARGE set.
const TEST_SIZES: [usize; 12] = [0, 1, 2, 3, 5, 8, 16, 20, 32, 64, 128, 256];
const LARGE_TEST_SIZES: [usize; 3] = [1_024, 4_096, 10_000];

#[inline(never)]
fn bench_sort(
    c: &mut Criterion,
    test_size: usize,
    pattern_name: &str,
    pattern_provider: &fn(usize) -> Vec<i32>,
    bench_name: &str,
    sort_func: impl Fn(&mut [i32]),
) {
    let batch_size = if test_size > 30 {
        BatchSize::LargeInput
    } else {
        BatchSize::SmallInput
    };

    c.bench_function(&format!("{bench_name}-hot-i32-{pattern_name}-{test_size}"), |b| {
        b.iter_batched(
            || pattern_provider(test_size),
            |mut test_data| sort_func(black_box(test_data.as_mut_slice())),
            batch_size,
        )
    });
}

fn measure_comp_count<S: Sort>(
    name: &str,
    test_size: usize,
    pattern_provider: &fn(usize) -> Vec<i32>,
) {
    // Measure how many comparisons are performed by a specific implementation and input
    // combination.
    let run_count: usize = if test_size <= 20 {
        100_000
    } else if test_size < 1_000 {
        3000
    } else {
        100
    };

    let mut comp_count = 0u64;

    for _ in 0..run_count {
        let mut test_data = pattern_provider(test_size);
        S::sort_by(black_box(test_data.as_mut_slice()), |a, b| {
            comp_count += 1;
            a.cmp(b)
        });
    }

    // If there is on average less than a single comparison this will be wrong.
    // But that's such a corner case I don't care about it.
    let total = comp_count / (run_count as u64);
    println!("{name}: mean comparisons: {total}");
}

#[inline(never)]
fn bench_impl<S: Sort>(
    c: &mut Criterion,
    test_size: usize,
    pattern_name: &str,
    pattern_provider: &fn(usize) -> Vec<i32>,
    _sort_impl: S,
) {
    let bench_name = S::name();

    if config::measure_comp() {
        let name = format!("{bench_name}-comp-i32-{pattern_name}-{test_size}");
        measure_comp_count::<S>(&name, test_size, pattern_provider);
    } else {
        bench_sort(
            c,
            test_size,
            pattern_name,
            pattern_provider,
            &bench_name,
            S::sort,
        );
    }
}

fn shuffle_vec<T>(mut v: Vec<T>) -> Vec<T> {
    use rand::seq::SliceRandom;
    use rand::thread_rng;

    let mut rng = thread_rng();
    v.shuffle(&mut rng);

    v
}

fn split_len(size: usize, part_a_percent: f64) -> (usize, usize) {
    let len_a = ((size as f64 / 100.0) * part_a_percent).round() as usize;
    let len_b = size - len_a;

    (len_a, len_b)
}

fn bench_patterns(c: &mut Criterion, test_size: usize) {
    let pattern_providers: Vec<(&'static str, fn(usize) -> Vec<i32>)> = vec![
        ("random", patterns::random),
        ("random_dense", |size| {
            patterns::random_uniform(size, 0..=(((size as f64).log2().round()) as i32))
        }),
        ("random_binary", |size| patterns::random_uniform(size, 0..=1)),
        ("random_5p", |size| {
            let (len_95p, len_5p) = split_len(size, 95.0);
            let v: Vec<i32> = std::iter::repeat(0)
                .take(len_95p)
                .chain(patterns::random(len_5p))
                .collect();

            shuffle_vec(v)
        }),
        ("random_s95", |size| patterns::random_sorted(size, 95.0)),
        ("ascending", patterns::ascending),
        ("descending", patterns::descending),
        ("saws_long", |size| {
            patterns::saw_mixed(size, ((size as f64).log2().round()) as usize)
        }),
        ("saws_short", |size| {
            patterns::saw_mixed(size, (size as f64 / 22.0).round() as usize)
        }),
        ("pipe_organ", patterns::pipe_organ),
    ];

    for (pattern_name, pattern_provider) in pattern_providers.iter() {
        if test_size < 3 && *pattern_name != "random" {
            continue;
        }

        bench_impl(
            c,
            test_size,
            pattern_name,
            pattern_provider,
            stable::rust_insertion::SortImpl,
        );

        bench_impl(
            c,
            test_size,
            pattern_name,
            pattern_provider,
            stable::rust_std::SortImpl,
        );
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    config::init_logging();

    // Distribute new random values across benchmark runs.
    if let Err(err) = patterns::try_use_random_seed_each_time() {
        tracing::warn!(%err, "keeping the fixed pattern seed");
    }

    let large = config::bench_large();
    let test_sizes = TEST_SIZES
        .iter()
        .chain(LARGE_TEST_SIZES.iter().filter(|_| large));

    for test_size in test_sizes {
        bench_patterns(c, *test_size);
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
