// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_outline_drag --heading-base-level=0

//! Understory Outline Drag: pointer-driven reordering and re-parenting for nested lists.
//!
//! This crate turns "the pointer is over node T while node D is being dragged" notifications
//! into [`MoveRequest`](understory_outline::MoveRequest)s for the move executor in
//! `understory_outline`, with two kinds of hysteresis so the list does not jitter:
//!
//! - Vertical: swapping with a sibling waits until the pointer crosses the sibling's midpoint.
//! - Horizontal: indenting and outdenting need deliberate sideways travel of at least
//!   [`OutlineConfig::threshold`], measured from a reference that moves each time a depth change
//!   is triggered.
//!
//! A depth ceiling ([`OutlineConfig::max_depth`]) is enforced on every decision.
//!
//! ## Pieces
//!
//! - [`hover::evaluate_hover`]: the pure decision function, over a [`session::DragSession`].
//! - [`controller::DragController`]: drag lifecycle and sequencing. A hover that produces a move
//!   yields a ticket, and no further hover is evaluated until that ticket is settled, so every
//!   decision sees the result of the previous one.
//! - [`layout::RowLayout`]: geometry for uniformly stacked, indented rows, implementing
//!   [`layout::GeometryProvider`]. Toolkits with their own measurement implement the trait instead.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Point;
//! use understory_outline::{Forest, Node};
//! use understory_outline_drag::{DragController, Grab, HoverTarget, OutlineConfig, RowLayout};
//!
//! let mut forest = Forest::from_roots(vec![
//!     Node::leaf("a", ()),
//!     Node::leaf("b", ()),
//!     Node::with_children("c", (), vec![Node::leaf("d", ())]),
//! ]);
//! let mut drag = DragController::new(OutlineConfig::default().with_max_depth(3)).unwrap();
//!
//! // Rows are 40px tall; grab "b" in the middle of its row.
//! let layout = RowLayout::default();
//! drag.begin(&forest, "b", Point::new(100.0, 60.0), Grab::Row).unwrap();
//!
//! // Slide right over "b" itself: it becomes the last child of "a".
//! let outline = layout.measure(&forest);
//! let row = outline.row(&[1]).unwrap();
//! let target = HoverTarget { position: &[1], sibling_count: row.sibling_count };
//! let settled = drag
//!     .hover_and_commit(&mut forest, target, Point::new(140.0, 60.0), &row.geometry())
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(settled.position, [0, 0]);
//! assert_eq!(forest.get(&[0, 0]).unwrap().id, "b");
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwards to Kurbo's `std`.
//! - `libm`: forwards to Kurbo's `libm` for `no_std` builds.
//! - `tracing`: emit `tracing` events for hover decisions, move settlement, and the drag lifecycle.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod config;
pub mod controller;
pub mod error;
pub mod hover;
pub mod layout;
pub mod session;

pub use config::{Grab, OutlineConfig};
pub use controller::{DragController, DropOutcome, MoveTicket, PendingMove};
pub use error::{ConfigError, DragError};
pub use hover::{Hold, HoverDecision, HoverGeometry, HoverTarget, evaluate_hover};
pub use layout::{GeometryProvider, MeasuredOutline, MeasuredRow, RowLayout};
pub use session::{DragSession, HorizontalTracker};
