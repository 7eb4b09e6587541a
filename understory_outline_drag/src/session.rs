// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-drag state: where the dragged node is now, and the horizontal tracker.
//!
//! A [`DragSession`] lives from drag start to drop or cancel. Its position is
//! only updated by [`DragSession::apply_settled`], once a move has been
//! committed, so hover evaluation always reads the last settled state.

use understory_outline::{Position, Settled};

/// Reference x coordinate for measuring deliberate sideways motion.
///
/// A depth change needs the pointer to travel the full threshold away from
/// the reference. When it does, the reference moves to the pointer, so the
/// next depth change needs another full threshold of travel.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct HorizontalTracker {
    last_x: Option<f64>,
}

impl HorizontalTracker {
    /// A tracker without a reference.
    pub fn new() -> Self {
        Self { last_x: None }
    }

    /// The current reference, if any.
    pub fn last_x(&self) -> Option<f64> {
        self.last_x
    }

    /// Set the reference to `x` unless one is already set.
    pub fn seed(&mut self, x: f64) {
        if self.last_x.is_none() {
            self.last_x = Some(x);
        }
    }

    // Signed distance from the reference to `x`; zero without a reference.
    fn delta(&self, x: f64) -> f64 {
        self.last_x.map_or(0.0, |last| x - last)
    }

    /// If `x` is at least `threshold` away from the reference, move the
    /// reference to `x` and return the signed distance travelled.
    pub fn cross(&mut self, x: f64, threshold: f64) -> Option<f64> {
        let dx = self.delta(x);
        if self.last_x.is_some() && dx.abs() >= threshold {
            self.last_x = Some(x);
            Some(dx)
        } else {
            None
        }
    }

    /// Forget the reference.
    pub fn clear(&mut self) {
        self.last_x = None;
    }
}

/// State of one drag gesture.
#[derive(Clone, Debug, PartialEq)]
pub struct DragSession<K> {
    item: K,
    origin: Position,
    position: Position,
    index: usize,
    height: usize,
    initial_x: f64,
    pub(crate) tracker: HorizontalTracker,
}

impl<K> DragSession<K> {
    /// Start tracking `item`, currently at `position`, whose subtree has `height`.
    ///
    /// `initial_x` is the pointer's x coordinate at drag start; it seeds the
    /// horizontal tracker on the first hover. Returns `None` for the empty
    /// position, which addresses no node.
    pub fn new(item: K, position: Position, height: usize, initial_x: f64) -> Option<Self> {
        let index = position.index()?;
        Some(Self {
            item,
            origin: position.clone(),
            index,
            position,
            height,
            initial_x,
            tracker: HorizontalTracker::new(),
        })
    }

    /// The dragged node's identifier.
    pub fn item(&self) -> &K {
        &self.item
    }

    /// Position at drag start.
    pub fn origin(&self) -> &Position {
        &self.origin
    }

    /// Last settled position.
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Last settled sibling index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Height of the dragged subtree.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Pointer x at drag start.
    pub fn initial_x(&self) -> f64 {
        self.initial_x
    }

    /// The horizontal tracker.
    pub fn tracker(&self) -> &HorizontalTracker {
        &self.tracker
    }

    /// Record a committed move.
    pub fn apply_settled(&mut self, settled: &Settled) {
        self.position.clone_from(&settled.position);
        self.index = settled.index;
    }

    /// Consume the session, returning the dragged item.
    pub fn into_item(self) -> K {
        self.item
    }
}
