use criterion::{criterion_group, criterion_main, Criterion};

use twinphone::matching::sounds_like;
use twinphone::metaphone::Word;

fn encode(word: &Word) {
    drop(word.encode())
}

fn criterion_benchmark(c: &mut Criterion) {
    let smith = Word::new("smith");
    let schermerhorn = Word::new("schermerhorn");
    let jankelowicz = Word::new("jankelowicz");
    let long = Word::new("supercalifragilisticexpialidocious");

    c.bench_function("encode smith", |b| b.iter(|| encode(&smith)));
    c.bench_function("encode schermerhorn", |b| b.iter(|| encode(&schermerhorn)));
    c.bench_function("encode jankelowicz", |b| b.iter(|| encode(&jankelowicz)));
    c.bench_function("encode long word", |b| b.iter(|| encode(&long)));
    c.bench_function("normalize smith", |b| b.iter(|| Word::new("smith")));
    c.bench_function("sounds_like smith schmidt", |b| {
        b.iter(|| sounds_like("smith", "schmidt"))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
