//! Benchmarks a moderately deep, wide flex tree end to end, the way the
//! teacher's own `complex` bench exercises its recursive core.

use criterion::{criterion_group, criterion_main, Criterion};
use flexcore::{AlignItems, FlexDirection, JustifyContent, Size, Style, Taffy};

fn build_tree(taffy: &mut Taffy, depth: usize, children_per_node: usize) -> flexcore::Node {
    if depth == 0 {
        return taffy
            .new_leaf(Style { flex_grow: 1.0, ..Default::default() })
            .unwrap();
    }

    let children: Vec<_> = (0..children_per_node)
        .map(|_| build_tree(taffy, depth - 1, children_per_node))
        .collect();

    taffy
        .new_with_children(
            Style {
                flex_direction: FlexDirection::Row,
                justify_content: JustifyContent::SpaceBetween,
                align_items: AlignItems::Stretch,
                flex_grow: 1.0,
                ..Default::default()
            },
            &children,
        )
        .unwrap()
}

fn complex_benchmark(c: &mut Criterion) {
    c.bench_function("build and layout a deep flex tree", |b| {
        b.iter(|| {
            let mut taffy = Taffy::new();
            let root = build_tree(&mut taffy, 6, 4);
            taffy
                .compute_layout(root, Size { width: Some(1280.0), height: Some(720.0) })
                .unwrap();
        });
    });

    c.bench_function("re-layout after dirtying a single leaf", |b| {
        let mut taffy = Taffy::new();
        let root = build_tree(&mut taffy, 6, 4);
        taffy
            .compute_layout(root, Size { width: Some(1280.0), height: Some(720.0) })
            .unwrap();

        b.iter(|| {
            taffy
                .compute_layout(root, Size { width: Some(1280.0), height: Some(720.0) })
                .unwrap();
        });
    });
}

criterion_group!(benches, complex_benchmark);
criterion_main!(benches);
