use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use runlength_buffer::{Id, RunLengthBuffer};

pub fn run(c: &mut Criterion) {
    let mut group = c.benchmark_group("growth");

    // Distinct keys only: one new run per append, doubling from capacity 1.
    for runs in [64_u64, 1024, 16384] {
        group.throughput(Throughput::Elements(runs));
        group.bench_with_input(BenchmarkId::from_parameter(runs), &runs, |b, &runs| {
            b.iter(|| {
                let mut buffer = RunLengthBuffer::with_capacity(1).unwrap();
                for i in 0..runs {
                    buffer.append(Id(black_box(i))).unwrap();
                }
                black_box(buffer.capacity());
            });
        });
    }

    group.finish();
}
