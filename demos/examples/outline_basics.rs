// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Outline basics.
//!
//! Build a small outline, move subtrees around, and watch the depth ceiling refuse a move.
//!
//! Run:
//! - `cargo run -p understory_outline_demos --example outline_basics`

use understory_outline::{Forest, MoveRequest, Node, Position, Target, conflicting_index};

const MAX_DEPTH: usize = 3;

fn print(forest: &Forest<u32, &str>) {
    for (position, node) in forest.walk() {
        let indent = "  ".repeat(position.depth() - 1);
        println!("{indent}{} {position}", node.data);
    }
    println!();
}

fn main() {
    let mut forest = Forest::from_roots(vec![
        Node::leaf(1, "Item #1"),
        Node::leaf(2, "Item #2"),
        Node::leaf(3, "Item #3"),
        Node::with_children(4, "Item #4", vec![Node::leaf(5, "Item #5")]),
    ]);
    print(&forest);

    // Item #1 takes the place of Item #2.
    let settled = forest
        .commit_move(
            &MoveRequest {
                item: 1,
                from: Position::from([0]),
                to: Target::at(&[1]).unwrap(),
            },
            MAX_DEPTH,
        )
        .unwrap();
    assert_eq!(settled.position, [1]);
    print(&forest);

    // Nest Item #3 under Item #1.
    let from = forest.position_of(&3).unwrap();
    let settled = forest
        .commit_move(
            &MoveRequest {
                item: 3,
                from: from.clone(),
                to: Target::append_to(Position::from([1])),
            },
            MAX_DEPTH,
        )
        .unwrap();
    println!(
        "moved {from} -> {} (first difference at level {:?})",
        settled.position,
        conflicting_index(&from, &settled.position)
    );
    print(&forest);

    // Item #4 carries Item #5, so it cannot go below depth 2.
    let from = forest.position_of(&4).unwrap();
    let err = forest
        .commit_move(
            &MoveRequest {
                item: 4,
                from,
                to: Target::append_to(Position::from([1, 0])),
            },
            MAX_DEPTH,
        )
        .unwrap_err();
    println!("refused: {err}");
    assert!(err.is_depth_violation());
    assert!(forest.fits_depth(MAX_DEPTH));
}
