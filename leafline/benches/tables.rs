use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use leafline::*;

fn table_benchmark(c: &mut Criterion) {
    c.bench_function("Pony movement table", |b| {
        b.iter(|| black_box(movement_table(black_box(MovementPattern::PONY.offsets))));
    });

    c.bench_function("File bands", |b| {
        b.iter(|| black_box(file_bands()));
    });

    c.bench_function("Decode full scoring buffer", |b| {
        let mut buffer = ScoringBuffer::new();
        for (i, slot) in buffer.slots_mut().iter_mut().enumerate() {
            *slot = RawScoring::new(&format!("m{i}"), i as f32).unwrap();
        }

        b.iter(|| black_box(black_box(&buffer).decode().unwrap()));
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(100).measurement_time(Duration::from_secs(5));
    targets = table_benchmark
}
criterion_main!(benches);
