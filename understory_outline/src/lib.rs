// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_outline --heading-base-level=0

//! Understory Outline: positions, an owned forest, and subtree moves for nested lists.
//!
//! Understory Outline is the structural half of outline-style list editing (task lists,
//! nested menus, file trees) where items are re-ordered and re-parented by dragging.
//!
//! - [`Position`]: index path from the roots to a node, with [`conflicting_index`] and
//!   [`same_position`] comparisons.
//! - [`Target`]: destination of a move, either an explicit [`Slot::At`] index or [`Slot::Append`].
//! - [`Forest`] / [`Node`]: ordered, exclusively owned tree of caller payloads.
//! - [`Forest::commit_move`]: the move executor. It validates a [`MoveRequest`], resolves the
//!   target against the forest as it will look after the node is removed, enforces the depth
//!   ceiling, and returns the [`Settled`] position.
//!
//! It does not deal with pointers or geometry. See `understory_outline_drag` for the hover
//! decision engine that produces [`MoveRequest`]s from pointer motion.
//!
//! ## Depth
//!
//! Depth is 1-based: roots have depth 1. The height of a subtree is 1 for a leaf. A forest
//! respects a ceiling `max_depth` when, for every node, `depth + height - 1 <= max_depth`.
//! [`Forest::commit_move`] refuses moves that would break this for the moved subtree.
//!
//! ## Example
//!
//! ```rust
//! use understory_outline::{Forest, MoveRequest, Node, Target};
//!
//! // A, B, C, D[E]
//! let mut forest = Forest::from_roots(vec![
//!     Node::leaf('A', "first"),
//!     Node::leaf('B', "second"),
//!     Node::leaf('C', "third"),
//!     Node::with_children('D', "fourth", vec![Node::leaf('E', "nested")]),
//! ]);
//!
//! // Indent C under B.
//! let settled = forest
//!     .commit_move(
//!         &MoveRequest { item: 'C', from: [2].into(), to: Target::append_to([1].into()) },
//!         3,
//!     )
//!     .unwrap();
//! assert_eq!(settled.position, [1, 0]);
//! assert_eq!(forest.get(&[1, 0]).unwrap().data, "third");
//!
//! // D has a child, so it cannot go under C at depth 3 when the ceiling is 3.
//! let err = forest
//!     .commit_move(
//!         &MoveRequest { item: 'D', from: [2].into(), to: Target::append_to([1, 0].into()) },
//!         3,
//!     )
//!     .unwrap_err();
//! assert!(err.is_depth_violation());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod error;
pub mod moves;
pub mod position;
pub mod tree;

pub use error::MoveError;
pub use moves::{MoveRequest, Settled};
pub use position::{Position, Slot, Target, conflicting_index, same_position};
pub use tree::{Forest, Node, Walk};
