use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use secureinput::compare::{ConstantTimeCompare, FoldComparator, SubtleComparator};

const LENGTH: usize = 64;

fn bench_comparators(c: &mut Criterion) {
    let reference = [0x5Au8; LENGTH];

    // Equal, mismatch in the first byte, mismatch in the last byte: the
    // three cases should cost the same for a constant-time comparator.
    let equal = reference;
    let mut first_differs = reference;
    first_differs[0] ^= 0xFF;
    let mut last_differs = reference;
    last_differs[LENGTH - 1] ^= 0xFF;

    let cases = [
        ("equal", equal),
        ("first_byte_differs", first_differs),
        ("last_byte_differs", last_differs),
    ];

    let mut group = c.benchmark_group("constant_time_compare");
    for (name, candidate) in cases {
        group.bench_with_input(BenchmarkId::new("subtle", name), &candidate, |b, cand| {
            b.iter(|| SubtleComparator::bytes_eq(&reference, cand))
        });
        group.bench_with_input(BenchmarkId::new("fold", name), &candidate, |b, cand| {
            b.iter(|| FoldComparator::bytes_eq(&reference, cand))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_comparators);
criterion_main!(benches);
