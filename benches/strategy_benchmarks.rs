use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use sectoolbox::strategies::{capture, pentest, phishing, risk};

fn bench_risk_assess(c: &mut Criterion) {
    c.bench_function("risk_assess", |b| {
        b.iter(|| risk::assess(black_box(8), black_box(4), black_box(6), black_box(2)));
    });
}

fn bench_phishing_lookup(c: &mut Criterion) {
    c.bench_function("phishing_scenario", |b| {
        b.iter(|| phishing::scenario(black_box("banking"), black_box("medium")));
    });
}

fn bench_pentest_simulate(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    c.bench_function("pentest_simulate", |b| {
        b.iter(|| pentest::simulate(&mut rng, black_box("192.168.1.100")));
    });
}

fn bench_capture_simulate(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    c.bench_function("capture_simulate", |b| {
        b.iter(|| capture::simulate(&mut rng, black_box("eth0"), black_box("5 minutes")));
    });
}

criterion_group!(
    benches,
    bench_risk_assess,
    bench_phishing_lookup,
    bench_pentest_simulate,
    bench_capture_simulate
);
criterion_main!(benches);
