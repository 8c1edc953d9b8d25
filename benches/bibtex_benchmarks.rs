#![allow(missing_docs)]
//! Benchmarks for the bibrec library.
//!
//! Measures parsing, serialization, and id lookup over synthetic
//! multi-entry BibTeX blobs using Criterion.rs.

use bibrec::{parse_many, Database};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Build a blob of `count` entries in the shape hand-curated exports have.
fn generate_entries(count: usize) -> String {
    let mut text = String::new();
    for i in 0..count {
        text.push_str(&format!(
            "@article{{entry{i},\n  \
             author = {{Author {} and Author {}}},\n  \
             title = {{Title of Paper Number {i}}},\n  \
             journal = {{Journal {}}},\n  \
             volume = {{{}}},\n  \
             pages = {{1-10}},\n  \
             year = {{19{:02}}}\n}}\n\n",
            i % 7,
            (i + 1) % 7,
            i % 10,
            i % 50,
            i % 100,
        ));
    }
    text
}

fn benchmark_parse_1k(c: &mut Criterion) {
    let blob = generate_entries(1_000);

    c.bench_function("parse_1k_entries", |b| {
        b.iter(|| parse_many(black_box(&blob)).len());
    });
}

fn benchmark_serialize_1k(c: &mut Criterion) {
    let db = Database::from_text(&generate_entries(1_000));

    c.bench_function("serialize_1k_entries", |b| {
        b.iter(|| black_box(&db).to_bibtex().len());
    });
}

fn benchmark_lookup_by_id(c: &mut Criterion) {
    let db = Database::from_text(&generate_entries(1_000));
    // Force the keymap build out of the measured loop.
    db.get_by_id("entry0").expect("entry0 exists");

    c.bench_function("lookup_by_id_1k_entries", |b| {
        b.iter(|| db.get_by_id(black_box("entry999")).is_ok());
    });
}

criterion_group!(
    benches,
    benchmark_parse_1k,
    benchmark_serialize_1k,
    benchmark_lookup_by_id
);
criterion_main!(benches);
