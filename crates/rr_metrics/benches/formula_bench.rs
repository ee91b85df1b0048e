use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rr_metrics::{indices, stats, TextStats};
use rr_tokenize::PlainDocument;

fn document(sentences: usize) -> PlainDocument {
    let sentence = ["рибоза", "восстанавливается", "водородом", "или", "амальгамой", "натрия"];
    (0..sentences).map(|_| sentence.to_vec()).collect()
}

fn bench_formulas(c: &mut Criterion) {
    let mut group = c.benchmark_group("formulas");

    for size in [10, 100, 1000].iter() {
        let doc = document(*size);
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_function(format!("stats_{size}"), |b| {
            b.iter(|| TextStats::from_document(black_box(&doc)))
        });
        group.bench_function(format!("indices_{size}"), |b| {
            b.iter(|| {
                let doc = black_box(&doc);
                (
                    indices::flesch_kincaid(doc),
                    indices::coleman_liau(doc),
                    indices::smog(doc),
                    indices::ari(doc),
                )
            })
        });
        group.bench_function(format!("syllables_{size}"), |b| {
            b.iter(|| stats::syllable_count(black_box(&doc)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_formulas);
criterion_main!(benches);
