// ListBox navigation and rendering benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use listbox::widget::Overflow;
use std::hint::black_box;

mod common;

fn bench_page_down_through_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_page_down");
    for overflow in [Overflow::Truncate, Overflow::Wrap] {
        let list = common::generate_list(10_000, overflow);
        group.bench_with_input(
            BenchmarkId::new("overflow", overflow),
            &list,
            |b, list| {
                b.iter(|| {
                    let mut list = list.clone();
                    for _ in 0..50 {
                        list.page_down();
                    }
                    black_box(list.selected())
                });
            },
        );
    }
    group.finish();
}

fn bench_center_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_center");
    for size in [1_000, 10_000, 100_000] {
        let mut list = common::generate_list(size, Overflow::Wrap);
        for _ in 0..200 {
            list.down();
        }
        group.bench_with_input(
            BenchmarkId::new("items", size),
            &list,
            |b, list| {
                b.iter(|| {
                    let mut list = list.clone();
                    list.center_selection();
                    black_box(list.lower_bound())
                });
            },
        );
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_render");
    for size in [100, 10_000, 100_000] {
        for overflow in [Overflow::Truncate, Overflow::Wrap] {
            let mut list = common::generate_list(size, overflow);
            list.page_down();
            group.bench_with_input(
                BenchmarkId::new(format!("{}", overflow), size),
                &list,
                |b, list| b.iter(|| black_box(list.buffer())),
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_page_down_through_list, bench_center_selection, bench_render);
criterion_main!(benches);
