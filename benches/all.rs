use criterion::{black_box, criterion_group, criterion_main, Criterion};

use titlecase::{title_case, TitleCaseOptions, TitleCaser};

const SENTENCE: &str = "   TEST tEsT, (TEST.TEST), <<teSt<<, teSt_tEst,   mc.beTh, hU-zIn-xun,   \
                        d'marcO'aires, tes!te, tESt.. tEsT!! TEST??? 'test' `test` 'test' \"test\"   ";

fn bench_title_case(c: &mut Criterion) {
    c.bench_function("title case without exceptions", |b| {
        b.iter(|| title_case(black_box(SENTENCE)))
    });

    let caser = TitleCaser::new(
        TitleCaseOptions::new()
            .with_exceptions(vec!["<<teSt<<", "teSt_tEst", "the"])
            .case_sensitive(true)
            .skip_capital_words(true),
    );
    c.bench_function("title case with prebuilt exceptions", |b| {
        b.iter(|| caser.convert(black_box(SENTENCE)))
    });
}

criterion_group!(benches, bench_title_case);
criterion_main!(benches);
