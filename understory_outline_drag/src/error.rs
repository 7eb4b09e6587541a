// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors for configuration and drag start.

use thiserror::Error;

/// An [`OutlineConfig`](crate::config::OutlineConfig) value that cannot be used.
#[derive(Copy, Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// `max_depth` must be at least 1.
    #[error("max depth must be at least 1")]
    ZeroMaxDepth,
    /// `threshold` must be finite and positive.
    #[error("horizontal threshold must be finite and positive, got {0}")]
    InvalidThreshold(f64),
}

/// Why a drag could not start.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum DragError {
    /// A drag session is already running.
    #[error("a drag is already in progress")]
    AlreadyDragging,
    /// The outline requires drags to start from a handle.
    #[error("drags must start from the drag handle")]
    HandleRequired,
    /// The dragged item is not in the forest.
    #[error("the dragged item is not in the outline")]
    UnknownItem,
}
