use std::hint::black_box;
use std::io;

use criterion::{criterion_group, criterion_main, Criterion};
use failcode::prelude::*;

const CODE_IO: StringCode = StringCode("io");
const CODE_STORAGE: StringCode = StringCode("storage");

fn bench_construction(c: &mut Criterion) {
    c.bench_function("construct/new_translate_wrap", |b| {
        b.iter(|| black_box(wrap(translate(new(CODE_IO), CODE_STORAGE))))
    });

    c.bench_function("construct/with_fields", |b| {
        b.iter(|| {
            black_box(
                new(CODE_IO)
                    .with(message("primary is unreachable"))
                    .with(kv! { "host" => "db-1", "attempt" => "3" }),
            )
        })
    });

    c.bench_function("construct/custom", |b| {
        b.iter(|| black_box(custom(io::Error::other("unexpected eof"))))
    });
}

fn bench_queries(c: &mut Criterion) {
    let err = wrap(translate(
        new(CODE_IO).with(kv! { "host" => "db-1" }),
        CODE_STORAGE,
    ));

    c.bench_function("query/code_of", |b| {
        b.iter(|| black_box(code_of(black_box(&err))))
    });

    c.bench_function("query/debugs_of", |b| {
        b.iter(|| black_box(debugs_of(black_box(&err))))
    });

    c.bench_function("query/callstack_of", |b| {
        b.iter(|| black_box(callstack_of(black_box(&err))))
    });

    c.bench_function("query/cause_of", |b| {
        b.iter(|| black_box(cause_of(black_box(&err))))
    });
}

fn bench_formatting(c: &mut Criterion) {
    let err = wrap(translate(
        new(CODE_IO)
            .with(message("primary is unreachable"))
            .with(kv! { "host" => "db-1" }),
        CODE_STORAGE,
    ));

    c.bench_function("format/short", |b| b.iter(|| black_box(err.to_string())));

    c.bench_function("format/report", |b| {
        b.iter(|| black_box(report(black_box(&err))))
    });
}

criterion_group!(benches, bench_construction, bench_queries, bench_formatting);
criterion_main!(benches);
