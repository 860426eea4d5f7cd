use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use refraction_correction::correction::Corrector;
use refraction_correction::fixtures::{StationAxis, series};
use refraction_correction::physics::refraction::RefractionParams;

fn correction_benchmark(c: &mut Criterion) {
    let corrector = Corrector::new(RefractionParams::default());
    let cases = series(StationAxis::X);
    let pairs: Vec<_> = cases
        .iter()
        .map(|case| (case.satellite, case.ground_station))
        .collect();

    c.bench_function("correct_single", |b| {
        let mid = cases[45];
        b.iter(|| {
            corrector
                .correct(black_box(mid.satellite), black_box(mid.ground_station))
                .unwrap()
        })
    });

    c.bench_function("correct_batch_88", |b| {
        b.iter(|| corrector.correct_batch(black_box(&pairs)))
    });
}

criterion_group!(benches, correction_benchmark);
criterion_main!(benches);
