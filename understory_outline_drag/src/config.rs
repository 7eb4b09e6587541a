// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration shared by every item of an outline.

use crate::error::ConfigError;

/// Where the pointer went down when a drag started.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Grab {
    /// Anywhere on the item's row.
    Row,
    /// On the item's drag handle.
    Handle,
}

/// Options consumed by the hover decision engine and the drag controller.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OutlineConfig {
    /// Deepest level any node may occupy. Roots have depth 1.
    pub max_depth: usize,
    /// Horizontal pointer travel, in pixels, that triggers an indent or outdent.
    pub threshold: f64,
    /// If true, drags may only start from an item's handle.
    pub use_drag_handle: bool,
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            max_depth: 10,
            threshold: 30.0,
            use_drag_handle: false,
        }
    }
}

impl OutlineConfig {
    /// Set the depth ceiling.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set the horizontal threshold.
    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Require drags to start from a handle.
    #[must_use]
    pub fn with_drag_handle(mut self, use_drag_handle: bool) -> Self {
        self.use_drag_handle = use_drag_handle;
        self
    }

    /// Check that the depth ceiling is positive and the threshold is a
    /// finite, positive distance.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::ZeroMaxDepth);
        }
        if !self.threshold.is_finite() || self.threshold <= 0.0 {
            return Err(ConfigError::InvalidThreshold(self.threshold));
        }
        Ok(())
    }

    /// Returns true if a drag may start from `grab`.
    pub fn allows_grab(&self, grab: Grab) -> bool {
        !self.use_drag_handle || grab == Grab::Handle
    }
}
