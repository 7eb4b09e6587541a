// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag lifecycle and move sequencing.
//!
//! The [`DragController`] owns the running [`DragSession`] and makes sure
//! every hover is evaluated against the last *settled* state. When a hover
//! produces a move, the controller hands out a [`PendingMove`] with a
//! [`MoveTicket`] and refuses to evaluate further hovers until the consumer
//! reports the outcome through [`DragController::settle`]. Hovers arriving in
//! the meantime are dropped and counted; the pointer backend notifies again
//! on the next motion, so nothing is lost by coalescing them.
//!
//! Tickets are single-use. Cancelling or ending the drag invalidates the
//! pending ticket, and a late [`settle`](DragController::settle) for it is
//! discarded without touching any session.
//!
//! Consumers that own the forest in memory can use
//! [`DragController::hover_and_commit`], which evaluates, commits, and
//! settles in one call.

use kurbo::Point;
use understory_outline::{Forest, MoveError, MoveRequest, Position, Settled};

use crate::config::{Grab, OutlineConfig};
use crate::error::{ConfigError, DragError};
use crate::hover::{HoverDecision, HoverGeometry, HoverTarget, evaluate_hover};
use crate::layout::GeometryProvider;
use crate::session::DragSession;

/// Identifies one in-flight move request.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct MoveTicket(u64);

/// A move the consumer must commit and then report back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingMove<K> {
    /// Ticket to pass to [`DragController::settle`].
    pub ticket: MoveTicket,
    /// The requested move.
    pub request: MoveRequest<K>,
}

/// How a drag ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DropOutcome<K> {
    /// The drop landed; the node stays where the last settled move put it.
    Kept {
        /// The dragged item.
        item: K,
        /// Its final position.
        position: Position,
    },
    /// The drag was cancelled or landed nowhere. Consumers that want the
    /// node back where it started move it to `origin`.
    Revert {
        /// The dragged item.
        item: K,
        /// Position at drag start.
        origin: Position,
    },
}

/// Drives one outline's drag gestures.
#[derive(Clone, Debug)]
pub struct DragController<K> {
    config: OutlineConfig,
    session: Option<DragSession<K>>,
    pending: Option<MoveTicket>,
    next_ticket: u64,
    dropped_hovers: u64,
}

impl<K> Default for DragController<K> {
    fn default() -> Self {
        Self {
            config: OutlineConfig::default(),
            session: None,
            pending: None,
            next_ticket: 0,
            dropped_hovers: 0,
        }
    }
}

impl<K> DragController<K> {
    /// Create a controller after validating `config`.
    pub fn new(config: OutlineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::default()
        })
    }

    /// The configuration in use.
    pub fn config(&self) -> &OutlineConfig {
        &self.config
    }

    /// The running session, if any.
    pub fn session(&self) -> Option<&DragSession<K>> {
        self.session.as_ref()
    }

    /// Returns true while a drag is running.
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Ticket of the move awaiting settlement, if any.
    pub fn pending(&self) -> Option<MoveTicket> {
        self.pending
    }

    /// Hovers dropped because a move was pending, over the controller's lifetime.
    pub fn dropped_hovers(&self) -> u64 {
        self.dropped_hovers
    }

    /// Report the outcome of committing the pending move.
    ///
    /// Returns `Ok(Some(_))` once the session has adopted the settled
    /// position, `Ok(None)` when `ticket` is stale, and the move error
    /// otherwise. A failed move leaves the session at its last settled
    /// position.
    pub fn settle(
        &mut self,
        ticket: MoveTicket,
        result: Result<Settled, MoveError>,
    ) -> Result<Option<Settled>, MoveError> {
        if self.pending != Some(ticket) {
            #[cfg(feature = "tracing")]
            tracing::debug!(?ticket, "stale move ticket discarded");
            return Ok(None);
        }
        self.pending = None;
        let settled = result?;
        let Some(session) = self.session.as_mut() else {
            return Ok(None);
        };
        session.apply_settled(&settled);
        #[cfg(feature = "tracing")]
        tracing::debug!(position = %settled.position, "move settled");
        Ok(Some(settled))
    }

    /// End the drag. `landed` is false when the pointer was released outside
    /// any drop target.
    pub fn end_drag(&mut self, landed: bool) -> Option<DropOutcome<K>> {
        self.pending = None;
        let mut session = self.session.take()?;
        session.tracker.clear();
        let outcome = if landed {
            let position = session.position().clone();
            DropOutcome::Kept {
                item: session.into_item(),
                position,
            }
        } else {
            let origin = session.origin().clone();
            DropOutcome::Revert {
                item: session.into_item(),
                origin,
            }
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(landed, "drag ended");
        Some(outcome)
    }

    /// Abort the drag, invalidating any pending move.
    pub fn cancel(&mut self) -> Option<DropOutcome<K>> {
        #[cfg(feature = "tracing")]
        tracing::debug!(pending = self.pending.is_some(), "drag cancelled");
        self.end_drag(false)
    }
}

impl<K: Clone + PartialEq> DragController<K> {
    /// Start dragging `item`.
    ///
    /// `pointer` is where the pointer went down and `grab` what it went down
    /// on. The dragged node's position and subtree height are read from
    /// `forest`.
    pub fn begin<T>(
        &mut self,
        forest: &Forest<K, T>,
        item: K,
        pointer: Point,
        grab: Grab,
    ) -> Result<(), DragError> {
        if self.session.is_some() {
            return Err(DragError::AlreadyDragging);
        }
        if !self.config.allows_grab(grab) {
            return Err(DragError::HandleRequired);
        }
        let position = forest.position_of(&item).ok_or(DragError::UnknownItem)?;
        let height = forest.get(&position).map_or(1, |node| node.height());
        #[cfg(feature = "tracing")]
        tracing::debug!(%position, height, "drag started");
        let session =
            DragSession::new(item, position, height, pointer.x).ok_or(DragError::UnknownItem)?;
        self.session = Some(session);
        self.pending = None;
        Ok(())
    }

    /// Evaluate a hover notification.
    ///
    /// Returns the move to commit, or `None` when the hover is held, when no
    /// drag is running, or when a previous move is still pending.
    pub fn hover(
        &mut self,
        target: HoverTarget<'_>,
        pointer: Point,
        geometry: &HoverGeometry,
    ) -> Option<PendingMove<K>> {
        let session = self.session.as_mut()?;
        if self.pending.is_some() {
            self.dropped_hovers += 1;
            return None;
        }
        match evaluate_hover(session, target, pointer, geometry, &self.config) {
            HoverDecision::Hold(_) => None,
            HoverDecision::Move(request) => {
                let ticket = MoveTicket(self.next_ticket);
                self.next_ticket += 1;
                self.pending = Some(ticket);
                Some(PendingMove { ticket, request })
            }
        }
    }

    /// Evaluate a hover and, if it produces a move, commit it to `forest`
    /// and settle it.
    pub fn hover_and_commit<T>(
        &mut self,
        forest: &mut Forest<K, T>,
        target: HoverTarget<'_>,
        pointer: Point,
        geometry: &HoverGeometry,
    ) -> Result<Option<Settled>, MoveError> {
        let Some(pending) = self.hover(target, pointer, geometry) else {
            return Ok(None);
        };
        let result = forest.commit_move(&pending.request, self.config.max_depth);
        self.settle(pending.ticket, result)
    }

    /// Like [`hover_and_commit`](Self::hover_and_commit), reading the hovered
    /// node's geometry from `provider`. A node without geometry is ignored.
    pub fn hover_measured<T, G>(
        &mut self,
        forest: &mut Forest<K, T>,
        provider: &G,
        target: HoverTarget<'_>,
        pointer: Point,
    ) -> Result<Option<Settled>, MoveError>
    where
        G: GeometryProvider + ?Sized,
    {
        let Some(geometry) = provider.geometry_of(target.position) else {
            return Ok(None);
        };
        self.hover_and_commit(forest, target, pointer, &geometry)
    }
}
