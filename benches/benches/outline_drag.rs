// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use understory_outline::{Forest, MoveRequest, Node, Position, Target};
use understory_outline_drag::{DragSession, HoverTarget, OutlineConfig, RowLayout, evaluate_hover};

/// `n` roots, each with `fanout` leaf children.
fn gen_forest(n: usize, fanout: usize) -> Forest<usize, ()> {
    Forest::from_roots(
        (0..n)
            .map(|i| {
                let children = (0..fanout)
                    .map(|j| Node::leaf(n + i * fanout + j, ()))
                    .collect();
                Node::with_children(i, (), children)
            })
            .collect(),
    )
}

fn bench_commit_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("commit_move");
    for &n in &[16_usize, 256, 4096] {
        let forest = gen_forest(n, 4);
        group.throughput(Throughput::Elements(1));
        group.bench_function(format!("swap_roots_{n}"), |b| {
            b.iter_batched(
                || forest.clone(),
                |mut f| {
                    let request = MoveRequest {
                        item: 0,
                        from: Position::from([0]),
                        to: Target::at(&[n - 1]).unwrap(),
                    };
                    black_box(f.commit_move(&request, 3).unwrap());
                    f
                },
                BatchSize::LargeInput,
            );
        });
        group.bench_function(format!("reparent_leaf_{n}"), |b| {
            b.iter_batched(
                || forest.clone(),
                |mut f| {
                    let request = MoveRequest {
                        item: n,
                        from: Position::from([0, 0]),
                        to: Target::append_to(Position::from([n / 2])),
                    };
                    black_box(f.commit_move(&request, 3).unwrap());
                    f
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn bench_evaluate_hover(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate_hover");
    let forest = gen_forest(64, 4);
    let outline = RowLayout::default().measure(&forest);
    let config = OutlineConfig::default().with_max_depth(3);
    let rows = outline.rows();
    group.throughput(Throughput::Elements(rows.len() as u64));
    group.bench_function("sweep_all_rows", |b| {
        b.iter(|| {
            let mut session = DragSession::new(5_usize, Position::from([5]), 2, 150.0).unwrap();
            let mut moves = 0_usize;
            for row in rows {
                let target = HoverTarget {
                    position: &row.position,
                    sibling_count: row.sibling_count,
                };
                let pointer = Point::new(150.0, row.row.center().y);
                if evaluate_hover(&mut session, target, pointer, &row.geometry(), &config).is_move() {
                    moves += 1;
                }
            }
            black_box(moves)
        });
    });
    group.bench_function("measure", |b| {
        b.iter(|| black_box(RowLayout::default().measure(black_box(&forest))));
    });
    group.finish();
}

criterion_group!(benches, bench_commit_move, bench_evaluate_hover);
criterion_main!(benches);
