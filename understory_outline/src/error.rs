// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by [`Forest::commit_move`](crate::Forest::commit_move).

use thiserror::Error;

use crate::position::{Position, Target};

/// Why a move was refused. The forest is never mutated when one is returned.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    /// The moved subtree would reach past the depth ceiling.
    #[error("moving to {target} would reach depth {depth}, past the limit of {max_depth}")]
    DepthExceeded {
        /// Requested destination.
        target: Target,
        /// Deepest level the moved subtree would occupy.
        depth: usize,
        /// Configured ceiling.
        max_depth: usize,
    },
    /// The source position has no components.
    #[error("cannot move from the empty position")]
    EmptyPosition,
    /// Nothing lives at the source position.
    #[error("no node at {position}")]
    NotFound {
        /// Source position.
        position: Position,
    },
    /// The node at the source position is not the one being moved.
    #[error("node at {position} is not the moved item")]
    ItemMismatch {
        /// Source position.
        position: Position,
    },
    /// The destination parent does not exist.
    #[error("destination parent {parent} does not exist")]
    MissingParent {
        /// Destination parent path.
        parent: Position,
    },
    /// The destination index is past the end of the parent's children.
    #[error("index {index} is out of bounds for {len} children of {parent}")]
    SlotOutOfBounds {
        /// Destination parent path.
        parent: Position,
        /// Requested index.
        index: usize,
        /// Child count the index was checked against (after removal).
        len: usize,
    },
    /// The destination lies inside the moved subtree.
    #[error("cannot move {position} into its own subtree at {parent}")]
    IntoOwnSubtree {
        /// Source position.
        position: Position,
        /// Destination parent path.
        parent: Position,
    },
}

impl MoveError {
    /// True for depth-ceiling violations.
    pub fn is_depth_violation(&self) -> bool {
        matches!(self, Self::DepthExceeded { .. })
    }

    /// True when the request does not match the live forest (for example
    /// after a concurrent external mutation).
    pub fn is_structural(&self) -> bool {
        !self.is_depth_violation()
    }
}
