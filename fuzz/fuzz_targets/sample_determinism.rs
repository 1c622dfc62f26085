#![no_main]

use libfuzzer_sys::fuzz_target;
use strata_noise::{FadeCoefficients, GradientNoiseSampler};

fuzz_target!(|data: &[u8]| {
    if data.len() < 32 {
        return;
    }

    let f64_at = |i: usize| f64::from_le_bytes(data[i..i + 8].try_into().unwrap());
    let i64_at = |i: usize| i64::from_le_bytes(data[i..i + 8].try_into().unwrap());

    let x = f64_at(0);
    let y = f64_at(8);
    let sampler = GradientNoiseSampler::new(i64_at(16), i64_at(24), FadeCoefficients::CLASSIC);

    let first = sampler.sample(x, y);
    let second = sampler.sample(x, y);
    assert_eq!(first.to_bits(), second.to_bits());
});
