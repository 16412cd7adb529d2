use criterion::{criterion_group, criterion_main, Criterion};
use smackoff::data::{smackoff_30, SMACKOFF_SEED};
use smackoff::odds::convert;
use smackoff::selector;
use tinyrand::{Seeded, StdRand, Wyrand};
use tinyrand_alloc::Mock;

fn criterion_benchmark(c: &mut Criterion) {
    let field = smackoff_30();
    let dist = convert(&field).unwrap();

    // sanity check
    let winner = selector::select(&dist, &mut StdRand::seed(SMACKOFF_SEED)).unwrap();
    assert!(dist.get(winner).is_some());

    c.bench_function("cri_convert", |b| {
        b.iter(|| convert(&field).unwrap());
    });

    c.bench_function("cri_select_wyrand", |b| {
        let mut rand = Wyrand::default();
        b.iter(|| selector::select(&dist, &mut rand).unwrap());
    });

    c.bench_function("cri_select_mock", |b| {
        let mut rand = Mock::default();
        b.iter(|| selector::select(&dist, &mut rand).unwrap());
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
