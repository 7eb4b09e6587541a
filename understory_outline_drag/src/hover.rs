// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover decision engine: turn one "pointer over node T while dragging D"
//! notification into either a hold or a move request.
//!
//! ## Decision order
//!
//! Each step can end the evaluation with a [`Hold`]:
//!
//! 1. Depth: placing the dragged subtree at the hovered node's level must not
//!    reach past `max_depth` ([`Hold::DepthLimit`]). A node inside the dragged
//!    subtree is never a destination ([`Hold::OwnSubtree`]).
//! 2. Row: unless the pointer is over the dragged node itself, it must not be
//!    below the hovered node's own row. A nested list reports every ancestor
//!    of the row under the pointer as hovered too; only the row itself counts
//!    ([`Hold::OutsideRow`]).
//! 3. The horizontal tracker is seeded with the drag start x.
//! 4. Over the dragged node itself, sideways travel of at least `threshold`
//!    changes depth. Rightward indents into the previous sibling (appending to
//!    its children); leftward outdents the last child of a nested list to
//!    right after its parent. The tracker is rebased either way.
//! 5. A target equal to the current position is a no-op ([`Hold::Unchanged`]).
//! 6. A pure swap with a sibling waits until the pointer crosses the middle
//!    of the hovered node ([`Hold::Midpoint`]): downward swaps need the pointer
//!    below it, upward swaps above it.
//! 7. Otherwise the move is requested.
//!
//! ## Example
//!
//! ```
//! use kurbo::{Point, Rect};
//! use understory_outline::Position;
//! use understory_outline_drag::config::OutlineConfig;
//! use understory_outline_drag::hover::{evaluate_hover, Hold, HoverDecision, HoverGeometry, HoverTarget};
//! use understory_outline_drag::session::DragSession;
//!
//! let config = OutlineConfig::default();
//! // Dragging the first root row (40px tall) over the second one.
//! let mut session = DragSession::new("a", Position::from([0]), 1, 100.0).unwrap();
//! let target = HoverTarget { position: &[1], sibling_count: 3 };
//! let geometry = HoverGeometry {
//!     bounds: Rect::new(0.0, 40.0, 300.0, 80.0),
//!     row: Rect::new(0.0, 40.0, 300.0, 80.0),
//! };
//!
//! // Above the middle of the second row: hold.
//! let d = evaluate_hover(&mut session, target, Point::new(100.0, 55.0), &geometry, &config);
//! assert_eq!(d, HoverDecision::Hold(Hold::Midpoint));
//!
//! // Past the middle: swap.
//! let d = evaluate_hover(&mut session, target, Point::new(100.0, 65.0), &geometry, &config);
//! let request = d.into_request().unwrap();
//! assert_eq!(request.to.concrete(), Some(Position::from([1])));
//! ```

use kurbo::{Point, Rect};
use understory_outline::{MoveRequest, Position, Target, conflicting_index, same_position};

use crate::config::OutlineConfig;
use crate::session::DragSession;

/// The node under the pointer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HoverTarget<'a> {
    /// Position of the hovered node.
    pub position: &'a [usize],
    /// Number of siblings at the hovered node's level, itself included.
    pub sibling_count: usize,
}

/// Measured geometry of the hovered node.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HoverGeometry {
    /// Full extent, including rendered children.
    pub bounds: Rect,
    /// Extent of the node's own row, excluding children.
    pub row: Rect,
}

/// Which guard held a hover back.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Hold {
    /// The dragged subtree would reach past the depth ceiling.
    DepthLimit,
    /// The hovered node is a descendant of the dragged node.
    OwnSubtree,
    /// The pointer is below the hovered node's own row.
    OutsideRow,
    /// The candidate is the dragged node's current position.
    Unchanged,
    /// The pointer has not crossed the hovered node's midpoint yet.
    Midpoint,
}

/// Outcome of [`evaluate_hover`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HoverDecision<K> {
    /// No structural change.
    Hold(Hold),
    /// Move the dragged node.
    Move(MoveRequest<K>),
}

impl<K> HoverDecision<K> {
    /// Returns true for [`HoverDecision::Move`].
    pub fn is_move(&self) -> bool {
        matches!(self, Self::Move(_))
    }

    /// The move request, if any.
    pub fn into_request(self) -> Option<MoveRequest<K>> {
        match self {
            Self::Move(request) => Some(request),
            Self::Hold(_) => None,
        }
    }
}

fn hold<K>(reason: Hold) -> HoverDecision<K> {
    #[cfg(feature = "tracing")]
    tracing::trace!(?reason, "hover held");
    HoverDecision::Hold(reason)
}

/// Evaluate one hover notification.
///
/// Reads the session's last settled position and updates only its
/// horizontal tracker; the caller applies the settled result of any move.
pub fn evaluate_hover<K: Clone>(
    session: &mut DragSession<K>,
    target: HoverTarget<'_>,
    pointer: Point,
    geometry: &HoverGeometry,
    config: &OutlineConfig,
) -> HoverDecision<K> {
    let hover = target.position;
    let max_depth = config.max_depth;

    let hover_depth = hover.len().saturating_sub(1);
    if hover_depth + session.height() > max_depth {
        return hold(Hold::DepthLimit);
    }
    if session.position().is_ancestor_of(hover) {
        return hold(Hold::OwnSubtree);
    }

    let over_self = same_position(session.position(), hover);
    if !over_self && pointer.y > geometry.row.y1 {
        return hold(Hold::OutsideRow);
    }

    let initial_x = session.initial_x();
    session.tracker.seed(initial_x);

    let Some(mut next) = Target::at(hover) else {
        return hold(Hold::Unchanged);
    };

    if over_self {
        if let Some(dx) = session.tracker.cross(pointer.x, config.threshold) {
            let prev = session.position();
            let index = session.index();
            if dx > 0.0 && index > 0 && prev.depth() + session.height() - 1 < max_depth {
                next = Target::append_to(prev.with_index(index - 1));
            }
            if dx < 0.0 && hover.len() > 1 && index + 1 == target.sibling_count {
                let parent = Position::from(prev.parent());
                if let Some(parent_index) = parent.index() {
                    if let Some(after_parent) = Target::at(&parent.with_index(parent_index + 1)) {
                        next = after_parent;
                    }
                }
            }
        }
    }

    let prev = session.position();
    if next.is_position(prev) {
        return hold(Hold::Unchanged);
    }

    if let Some(concrete) = next.concrete() {
        if concrete.len() == prev.len()
            && conflicting_index(prev, &concrete) == Some(concrete.len() - 1)
        {
            let level = concrete.len() - 1;
            let (from, to) = (prev[level], concrete[level]);
            let middle = geometry.bounds.height() / 2.0;
            let client_y = pointer.y - geometry.bounds.y0;
            if (from < to && client_y < middle) || (from > to && client_y > middle) {
                return hold(Hold::Midpoint);
            }
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(from = %prev, to = %next, "hover requests move");
    HoverDecision::Move(MoveRequest {
        item: session.item().clone(),
        from: prev.clone(),
        to: next,
    })
}
