// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the filter/sort/paginate derivation.
//!
//! The visible page is recomputed on every render, so this is the hot path
//! of the gallery view.

use criterion::{criterion_group, criterion_main, Criterion};
use reports_gallery::application::query::{derive_page, page_links, GalleryQuery};
use reports_gallery::domain::content::{ContentItem, ContentType, ContentTypeFilter, SortOrder};
use std::hint::black_box;

fn sample_items(count: usize) -> Vec<ContentItem> {
    (0..count)
        .map(|i| {
            let year = 1990 + (i * 37 % 35) as i32;
            ContentItem::new(
                format!("item-{i}"),
                format!("Report {i}"),
                year,
                ContentType::ALL[i % ContentType::ALL.len()],
            )
        })
        .collect()
}

fn bench_derive_page(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_pipeline");

    for count in [100usize, 1_000, 10_000] {
        let items = sample_items(count);

        group.bench_function(format!("all_latest_{count}"), |b| {
            let query = GalleryQuery::default();
            b.iter(|| black_box(derive_page(black_box(&items), &query).filtered_count));
        });

        group.bench_function(format!("videos_oldest_last_page_{count}"), |b| {
            let mut query = GalleryQuery::default();
            query.set_filter(ContentTypeFilter::Only(ContentType::Video));
            query.set_sort(SortOrder::Oldest);
            let total = derive_page(&items, &query).total_pages;
            query.go_to(total, total);
            b.iter(|| black_box(derive_page(black_box(&items), &query).items.len()));
        });
    }

    group.finish();
}

fn bench_page_links(c: &mut Criterion) {
    c.bench_function("page_links_middle_of_500", |b| {
        b.iter(|| black_box(page_links(black_box(250), black_box(500))));
    });
}

criterion_group!(benches, bench_derive_page, bench_page_links);
criterion_main!(benches);
