// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Outline drag.
//!
//! Replay a pointer path over an outline laid out as 40px rows. At every sample, each row whose
//! bounds contain the pointer is reported as hovered, outermost first, the way nested drop
//! targets are notified by a pointer backend.
//!
//! Run:
//! - `cargo run -p understory_outline_demos --example outline_drag`

use kurbo::Point;
use understory_outline::{Forest, Node};
use understory_outline_drag::{
    DragController, DropOutcome, Grab, HoverTarget, OutlineConfig, RowLayout,
};

fn ids(forest: &Forest<u32, ()>) -> Vec<(Vec<usize>, u32)> {
    forest.walk().map(|(p, n)| (p.into_vec(), n.id)).collect()
}

fn replay(
    drag: &mut DragController<u32>,
    forest: &mut Forest<u32, ()>,
    layout: &RowLayout,
    path: &[Point],
) {
    for &pointer in path {
        // Layout follows the forest, so measure after every settled move.
        let outline = layout.measure(forest);
        for row in outline.targets_at(pointer) {
            let target = HoverTarget {
                position: &row.position,
                sibling_count: row.sibling_count,
            };
            match drag.hover_measured(forest, &outline, target, pointer) {
                Ok(Some(settled)) => println!("{pointer:?}: moved to {}", settled.position),
                Ok(None) => {}
                Err(err) => println!("{pointer:?}: {err}"),
            }
        }
    }
}

fn main() {
    // 1, 2, 3, 4[5]
    let mut forest = Forest::from_roots(vec![
        Node::leaf(1, ()),
        Node::leaf(2, ()),
        Node::leaf(3, ()),
        Node::with_children(4, (), vec![Node::leaf(5, ())]),
    ]);
    let layout = RowLayout::default();
    let mut drag = DragController::new(OutlineConfig::default().with_max_depth(3)).unwrap();

    // Drag item 1 down past the middle of item 2.
    drag.begin(&forest, 1, Point::new(100.0, 20.0), Grab::Row).unwrap();
    replay(
        &mut drag,
        &mut forest,
        &layout,
        &[
            Point::new(100.0, 30.0),
            Point::new(100.0, 50.0),
            Point::new(100.0, 65.0),
        ],
    );
    let outcome = drag.end_drag(true);
    assert!(matches!(outcome, Some(DropOutcome::Kept { item: 1, .. })));
    assert_eq!(
        ids(&forest),
        vec![
            (vec![0], 2),
            (vec![1], 1),
            (vec![2], 3),
            (vec![3], 4),
            (vec![3, 0], 5)
        ]
    );

    // Drag item 3 right by more than the threshold: it nests under item 1.
    drag.begin(&forest, 3, Point::new(100.0, 100.0), Grab::Row).unwrap();
    replay(&mut drag, &mut forest, &layout, &[Point::new(135.0, 100.0)]);
    drag.end_drag(true);
    assert_eq!(forest.get(&[1, 0]).map(|n| n.id), Some(3));

    // Item 4 carries item 5, so dropping it next to item 3 fills the outline to the ceiling.
    drag.begin(&forest, 4, Point::new(100.0, 140.0), Grab::Row).unwrap();
    replay(&mut drag, &mut forest, &layout, &[Point::new(100.0, 100.0)]);
    drag.end_drag(true);
    assert_eq!(forest.get(&[1, 0, 0]).map(|n| n.id), Some(5));

    // Item 3 indents once under item 4; a second indent would pass depth 3.
    drag.begin(&forest, 3, Point::new(100.0, 180.0), Grab::Row).unwrap();
    replay(
        &mut drag,
        &mut forest,
        &layout,
        &[Point::new(140.0, 180.0), Point::new(180.0, 180.0)],
    );
    drag.end_drag(true);
    assert_eq!(forest.get(&[1, 0, 1]).map(|n| n.id), Some(3));
    assert!(forest.fits_depth(3));

    // Item 2 never gets past the middle of item 1's block, and the drag is cancelled.
    drag.begin(&forest, 2, Point::new(100.0, 20.0), Grab::Row).unwrap();
    replay(&mut drag, &mut forest, &layout, &[Point::new(100.0, 70.0)]);
    let outcome = drag.cancel();
    println!("cancelled: {outcome:?}");
    assert!(matches!(outcome, Some(DropOutcome::Revert { item: 2, .. })));

    for (position, id) in ids(&forest) {
        println!("{}{id}", "  ".repeat(position.len() - 1));
    }
}
