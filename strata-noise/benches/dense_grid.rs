use criterion::{Criterion, criterion_group, criterion_main};
use strata_noise::{FadeCoefficients, GradientNoiseSampler};

fn criterion_benchmark(c: &mut Criterion) {
    let sampler = GradientNoiseSampler::new(341873128712, 132897987541, FadeCoefficients::CLASSIC);

    c.bench_function("dense grid sample", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for i in 0..128 {
                for j in 0..128 {
                    acc += sampler.sample(i as f64 * 0.0625, j as f64 * 0.0625);
                }
            }
            acc
        });
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
