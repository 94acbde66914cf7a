//! Benchmarks for deck persistence and rendering
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use flipdeck::deck::{render_container, Card, Deck};
use flipdeck::editor::{data_url, UiState};
use flipdeck::store::{CardStore, FileStore, MemoryStore};
use tempfile::tempdir;

fn create_test_cards(count: usize) -> Vec<Card> {
    let image = data_url("image/png", &[0x89; 2048]);
    (0..count)
        .map(|i| {
            if i % 10 == 0 {
                Card::new(format!("<p>Question {}</p>", i), format!(r#"<img src="{}" alt="x">"#, image))
            } else {
                Card::new(format!("<p>Question {}</p>", i), format!("<p>Answer {}</p>", i))
            }
        })
        .collect()
}

fn bench_store(c: &mut Criterion) {
    let mut group = c.benchmark_group("store");

    for size in [10, 100, 1000] {
        let cards = create_test_cards(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("save_all_memory_{}", size), |b| {
            let mut store = CardStore::new(MemoryStore::new());
            b.iter(|| store.save_all(black_box(&cards)).unwrap())
        });

        let mut store = CardStore::new(MemoryStore::new());
        store.save_all(&cards).unwrap();

        group.bench_function(format!("load_memory_{}", size), |b| {
            b.iter(|| black_box(store.load().unwrap()))
        });
    }

    group.bench_function("save_all_file_100", |b| {
        let dir = tempdir().unwrap();
        let cards = create_test_cards(100);
        let mut store = CardStore::new(FileStore::new(dir.path().join("storage.json")));
        b.iter(|| store.save_all(black_box(&cards)).unwrap())
    });

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    for size in [10, 100, 1000] {
        let deck = Deck::from_cards(create_test_cards(size));
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("container_{}", size), |b| {
            b.iter(|| render_container(black_box(&deck), UiState::EditSelected(0)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_store, bench_render);
criterion_main!(benches);
