//! Benchmarks for specdoc rendering performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks render synthetic catalogues into memory and into DOCX
//! bytes.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::io::Cursor;

use specdoc::render::render;
use specdoc::sink::write_docx;
use specdoc::{Catalogue, Entity, MemorySink, RenderOptions};

/// Creates a catalogue with `entity_count` entities of a dozen items each.
fn create_catalogue(entity_count: usize) -> Catalogue {
    let entities = (0..entity_count)
        .map(|i| {
            let mut entity = Entity::class(format!("Widget{}", i), "Benchmark entity.");
            for f in 0..6 {
                entity = entity.with_field(format!("int field{}", f), "benchmark field");
            }
            for m in 0..6 {
                let desc = if m % 2 == 0 { "benchmark method" } else { "" };
                entity = entity.with_method(format!("void method{}() const", m), desc);
            }
            entity
        })
        .collect();
    Catalogue::new("Benchmark", entities)
}

/// Benchmark the formatting engine against the in-memory sink.
fn bench_render_memory(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_memory");
    let options = RenderOptions::default();

    for entity_count in [10, 35, 100].iter() {
        let catalogue = create_catalogue(*entity_count);

        group.bench_function(format!("{}_entities", entity_count), |b| {
            b.iter(|| {
                let mut sink = MemorySink::new();
                render(
                    &mut sink,
                    &catalogue.title,
                    black_box(&catalogue.entities),
                    &options,
                )
                .unwrap();
                sink
            });
        });
    }

    group.finish();
}

/// Benchmark DOCX package serialization.
fn bench_write_docx(c: &mut Criterion) {
    let catalogue = create_catalogue(35);
    let (paragraphs, _) =
        specdoc::render_to_paragraphs(&catalogue, &RenderOptions::default()).unwrap();

    c.bench_function("write_docx_35_entities", |b| {
        b.iter(|| write_docx(Cursor::new(Vec::new()), black_box(&paragraphs)).unwrap());
    });
}

criterion_group!(benches, bench_render_memory, bench_write_docx);
criterion_main!(benches);
