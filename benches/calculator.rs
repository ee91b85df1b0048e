use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use ru_readability::{Calculator, Catalog, StubParser, TokenizeConfig, Tokenizer};

const PARAGRAPH: &str = "Рибоза восстанавливается водородом или амальгамой натрия до соответствующего альдита (рибита) и окисляется по альдегидной группе до соответствующей альдоновой (рибоновой) кислоты, способной циклизоваться в условиях синтеза в рибонолактон[2]. С гидразинами образует озазоны. ";

fn bench_calculator(c: &mut Criterion) {
    let tokenizer = Arc::new(Tokenizer::new(
        TokenizeConfig::default(),
        Arc::new(StubParser::default()),
    ));
    let mut group = c.benchmark_group("calculator");

    for paragraphs in [1usize, 10, 50] {
        let text = PARAGRAPH.repeat(paragraphs);
        group.throughput(Throughput::Bytes(text.len() as u64));

        for catalog in [Catalog::Elementary, Catalog::Composite] {
            let sequential = Calculator::new(catalog, tokenizer.clone());
            let parallel = Calculator::new(catalog, tokenizer.clone()).with_parallel(true);

            group.bench_function(format!("{catalog}_sequential_{paragraphs}"), |b| {
                b.iter(|| sequential.compute(black_box(&text)).expect("compute"))
            });
            group.bench_function(format!("{catalog}_parallel_{paragraphs}"), |b| {
                b.iter(|| parallel.compute(black_box(&text)).expect("compute"))
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_calculator);
criterion_main!(benches);
