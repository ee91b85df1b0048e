use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rr_tokenize::{PlainTokenizer, TokenizeConfig};

const SENTENCE: &str = "Жизнь пренеприятная штука, но сделать ее прекрасной очень нетрудно. ";

fn bench_tokenize(c: &mut Criterion) {
    let tokenizer = PlainTokenizer::new(TokenizeConfig::default()).expect("valid config");
    let mut group = c.benchmark_group("tokenize_words");

    for sentences in [1, 16, 128, 1024].iter() {
        let text = SENTENCE.repeat(*sentences);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_function(format!("sentences_{sentences}"), |b| {
            b.iter(|| tokenizer.tokenize(black_box(&text)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_tokenize);
criterion_main!(benches);
