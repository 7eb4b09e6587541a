// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry for hover evaluation.
//!
//! [`GeometryProvider`] is the seam to whatever measures rendered rows. The
//! [`RowLayout`] provider lays an outline out as uniform stacked rows, with
//! each level indented by a fixed amount, which is enough for tests, demos,
//! and toolkits that render outlines that way.

use alloc::vec::Vec;

use kurbo::{Point, Rect};
use understory_outline::{Forest, Position};

use crate::hover::HoverGeometry;

/// Source of measured geometry for rendered nodes.
pub trait GeometryProvider {
    /// Full and own-row rectangles of the node at `position`.
    fn geometry_of(&self, position: &[usize]) -> Option<HoverGeometry>;
}

/// Uniform row layout parameters.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RowLayout {
    /// Top-left corner of the first row.
    pub origin: Point,
    /// Height of every row.
    pub row_height: f64,
    /// Horizontal offset added per nesting level.
    pub indent: f64,
    /// Right edge of every row, relative to `origin.x`.
    pub width: f64,
}

impl Default for RowLayout {
    fn default() -> Self {
        Self {
            origin: Point::ZERO,
            row_height: 40.0,
            indent: 30.0,
            width: 300.0,
        }
    }
}

/// One measured node.
#[derive(Clone, Debug, PartialEq)]
pub struct MeasuredRow {
    /// Position of the node.
    pub position: Position,
    /// Number of siblings at the node's level, itself included.
    pub sibling_count: usize,
    /// The node's own row.
    pub row: Rect,
    /// The row together with all descendant rows.
    pub bounds: Rect,
}

impl MeasuredRow {
    /// Geometry in the form the hover engine consumes.
    pub fn geometry(&self) -> HoverGeometry {
        HoverGeometry {
            bounds: self.bounds,
            row: self.row,
        }
    }
}

/// Rows of a forest in preorder, as laid out by [`RowLayout::measure`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeasuredOutline {
    rows: Vec<MeasuredRow>,
}

impl RowLayout {
    /// Lay out every node of `forest`.
    pub fn measure<K, T>(&self, forest: &Forest<K, T>) -> MeasuredOutline {
        let mut rows = Vec::with_capacity(forest.len());
        for (i, (position, node)) in forest.walk().enumerate() {
            let top = self.origin.y + i as f64 * self.row_height;
            let left = self.origin.x + (position.depth() - 1) as f64 * self.indent;
            let right = self.origin.x + self.width;
            let span = node.subtree_len() as f64 * self.row_height;
            let sibling_count = forest.sibling_count(&position).unwrap_or(1);
            rows.push(MeasuredRow {
                row: Rect::new(left, top, right, top + self.row_height),
                bounds: Rect::new(left, top, right, top + span),
                sibling_count,
                position,
            });
        }
        MeasuredOutline { rows }
    }
}

impl MeasuredOutline {
    /// All rows in preorder.
    pub fn rows(&self) -> &[MeasuredRow] {
        &self.rows
    }

    /// The row for `position`, if measured.
    pub fn row(&self, position: &[usize]) -> Option<&MeasuredRow> {
        self.rows.iter().find(|r| r.position == *position)
    }

    /// Rows whose full bounds contain `pt`, outer to inner.
    ///
    /// These are the nested drop targets a pointer backend reports as hovered.
    pub fn targets_at(&self, pt: Point) -> impl Iterator<Item = &MeasuredRow> + '_ {
        self.rows.iter().filter(move |r| r.bounds.contains(pt))
    }

    /// The row whose own rectangle contains `pt`.
    pub fn row_at(&self, pt: Point) -> Option<&MeasuredRow> {
        self.rows.iter().find(|r| r.row.contains(pt))
    }
}

impl GeometryProvider for MeasuredOutline {
    fn geometry_of(&self, position: &[usize]) -> Option<HoverGeometry> {
        self.row(position).map(MeasuredRow::geometry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use understory_outline::Node;

    fn sample() -> Forest<char, ()> {
        Forest::from_roots(vec![
            Node::leaf('A', ()),
            Node::with_children(
                'B',
                (),
                vec![Node::leaf('C', ()), Node::leaf('D', ())],
            ),
            Node::leaf('E', ()),
        ])
    }

    #[test]
    fn rows_stack_and_indent() {
        let m = RowLayout::default().measure(&sample());
        assert_eq!(m.rows().len(), 5);
        let b = m.row(&[1]).unwrap();
        assert_eq!(b.row, Rect::new(0.0, 40.0, 300.0, 80.0));
        assert_eq!(b.bounds, Rect::new(0.0, 40.0, 300.0, 160.0));
        assert_eq!(b.sibling_count, 3);
        let d = m.row(&[1, 1]).unwrap();
        assert_eq!(d.row, Rect::new(30.0, 120.0, 300.0, 160.0));
        assert_eq!(d.sibling_count, 2);
        assert_eq!(
            m.geometry_of(&[1, 1]),
            Some(HoverGeometry {
                bounds: d.bounds,
                row: d.row
            })
        );
        assert_eq!(m.geometry_of(&[4]), None);
    }

    // A pointer over a nested row also hovers every ancestor.
    #[test]
    fn nested_targets_outer_to_inner() {
        let m = RowLayout::default().measure(&sample());
        let hits: Vec<Position> = m
            .targets_at(Point::new(100.0, 130.0))
            .map(|r| r.position.clone())
            .collect();
        assert_eq!(hits, vec![Position::from([1]), Position::from([1, 1])]);
        assert_eq!(
            m.row_at(Point::new(100.0, 130.0)).map(|r| r.position.clone()),
            Some(Position::from([1, 1]))
        );
        assert!(m.row_at(Point::new(100.0, 500.0)).is_none());
    }
}
