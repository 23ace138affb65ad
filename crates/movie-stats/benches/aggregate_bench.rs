use criterion::{black_box, criterion_group, criterion_main, Criterion};
use movie_stats::{director_averages, yearly_gross, PipelineConfig, Record, Summary};

fn synthetic_records(n: usize) -> Vec<Record> {
    (0..n)
        .map(|i| Record {
            director: format!("director {}", i % 1_500),
            score: if i % 17 == 0 { None } else { Some((i % 90) as f64 / 10.0 + 1.0) },
            year: Some(1990 + (i % 30) as i32),
            gross: if i % 9 == 0 { None } else { Some((i * 7_919 % 500_000_000) as f64) },
        })
        .collect()
}

fn bench_aggregate(c: &mut Criterion) {
    let records = synthetic_records(5_000);
    let config = PipelineConfig::default();
    c.bench_function("yearly_gross_5k", |b| b.iter(|| yearly_gross(black_box(&records), 2010)));
    c.bench_function("director_averages_5k", |b| b.iter(|| director_averages(black_box(&records))));
    c.bench_function("summary_5k", |b| b.iter(|| Summary::compute(black_box(&records), &config)));
}

criterion_group!(benches, bench_aggregate);
criterion_main!(benches);
