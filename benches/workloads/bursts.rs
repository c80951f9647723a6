use criterion::{black_box, Criterion, Throughput};
use runlength_buffer::{Id, RunLengthBuffer};
use std::num::NonZeroUsize;

const EVENTS: u64 = 4096;

pub fn run(c: &mut Criterion) {
    bench_bursts(c, 1);
    bench_bursts(c, 16);
    bench_bursts(c, 256);
}

/// Appends `EVENTS` keys arriving in bursts of `burst` and drains once.
fn bench_bursts(c: &mut Criterion, burst: u64) {
    let mut group = c.benchmark_group(format!("bursts_{burst}"));
    group.throughput(Throughput::Elements(EVENTS));
    group.sample_size(20);

    // Warm buffer: capacity already covers the run count after the first pass.
    group.bench_function("warm_buffer", |b| {
        let mut buffer = RunLengthBuffer::with_capacity(16).unwrap();
        b.iter(|| {
            for i in 0..EVENTS {
                buffer.append(Id(black_box(i / burst))).unwrap();
            }
            let mut total = 0;
            buffer.drain_to(|_: Id<u64>, count: NonZeroUsize| total += count.get());
            black_box(total);
        });
    });

    // Cold buffer: every iteration pays for growth.
    group.bench_function("cold_buffer", |b| {
        b.iter(|| {
            let mut buffer = RunLengthBuffer::with_capacity(16).unwrap();
            for i in 0..EVENTS {
                buffer.append(Id(black_box(i / burst))).unwrap();
            }
            black_box(buffer.drain_runs());
        });
    });

    group.finish();
}
