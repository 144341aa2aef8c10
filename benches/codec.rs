use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rask_log_chain::codec::encode_buffer;
use rask_log_chain::{ExceptionInfo, LogEntry, LogKind};
use std::hint::black_box;

fn create_entries(count: usize) -> Vec<LogEntry> {
    (0..count)
        .map(|i| {
            let builder = LogEntry::builder(LogKind::Warning, format!("request {i} took too long"))
                .severity((i % 10) as i32);
            match i % 3 {
                0 => builder.data(i as i64).build(),
                1 => builder
                    .data(ExceptionInfo::new("timeout", Some("http".to_string())))
                    .build(),
                _ => builder.build(),
            }
        })
        .collect()
}

fn bench_encode_buffer(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_buffer");

    for size in [10, 100, 1000] {
        let entries = create_entries(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &entries, |b, entries| {
            b.iter(|| encode_buffer(black_box(entries)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_encode_buffer);
criterion_main!(benches);
