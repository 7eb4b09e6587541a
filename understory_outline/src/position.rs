// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Index paths into an outline forest, and insertion targets.
//!
//! A [`Position`] locates a node by the sibling index it occupies at every
//! level, starting from the forest roots. Because sibling indices are derived
//! from the order of the owning `Vec`, the positions of siblings are always
//! identical except for their last component, and those last components
//! enumerate `0..len` without gaps.
//!
//! A [`Target`] names where a moved node should land: a concrete slot among a
//! parent's children, or "after the last child".
//!
//! ```
//! use understory_outline::position::{conflicting_index, same_position, Position};
//!
//! let a = Position::from([0, 2, 1]);
//! let b = Position::from([0, 3, 1]);
//! assert_eq!(conflicting_index(&a, &b), Some(1));
//! assert_eq!(conflicting_index(&a, &[0, 2]), None);
//! assert!(same_position(&a, &[0, 2, 1]));
//! assert!(!same_position(&a, &[0, 2]));
//! ```

use alloc::vec::Vec;
use core::fmt;
use core::ops::Deref;

/// Index path from the forest roots to a node.
///
/// `position[i]` is the node's index among its siblings at depth `i`. The
/// length of the path is the node's depth, counted from 1 at the root level.
/// The empty path addresses the (virtual) parent of the roots.
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position(Vec<usize>);

impl Position {
    /// The empty path, addressing the parent of the root level.
    #[must_use]
    pub const fn empty() -> Self {
        Self(Vec::new())
    }

    /// Position of the root at `index`.
    #[must_use]
    pub fn root(index: usize) -> Self {
        Self(alloc::vec![index])
    }

    /// Borrow the components.
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Depth of the addressed node (1 for roots).
    #[must_use]
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// Sibling index of the addressed node, or `None` for the empty path.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        self.0.last().copied()
    }

    /// Path of the parent. Empty for roots.
    #[must_use]
    pub fn parent(&self) -> &[usize] {
        match self.0.split_last() {
            Some((_, parent)) => parent,
            None => &[],
        }
    }

    /// Position of this node's child at `index`.
    #[must_use]
    pub fn child(&self, index: usize) -> Self {
        let mut out = Vec::with_capacity(self.0.len() + 1);
        out.extend_from_slice(&self.0);
        out.push(index);
        Self(out)
    }

    /// Position of the sibling at `index` (same parent, different last component).
    ///
    /// On the empty path this yields the root at `index`.
    #[must_use]
    pub fn with_index(&self, index: usize) -> Self {
        let mut out = self.parent().to_vec();
        out.push(index);
        Self(out)
    }

    /// Returns true if `other` lies strictly inside this node's subtree.
    #[must_use]
    pub fn is_ancestor_of(&self, other: &[usize]) -> bool {
        other.len() > self.0.len() && other.starts_with(&self.0)
    }

    /// Consume into the underlying components.
    #[must_use]
    pub fn into_vec(self) -> Vec<usize> {
        self.0
    }
}

impl Deref for Position {
    type Target = [usize];

    fn deref(&self) -> &[usize] {
        &self.0
    }
}

impl AsRef<[usize]> for Position {
    fn as_ref(&self) -> &[usize] {
        &self.0
    }
}

impl From<Vec<usize>> for Position {
    fn from(v: Vec<usize>) -> Self {
        Self(v)
    }
}

impl From<&[usize]> for Position {
    fn from(v: &[usize]) -> Self {
        Self(v.to_vec())
    }
}

impl<const N: usize> From<[usize; N]> for Position {
    fn from(v: [usize; N]) -> Self {
        Self(v.to_vec())
    }
}

impl PartialEq<[usize]> for Position {
    fn eq(&self, other: &[usize]) -> bool {
        self.0 == other
    }
}

impl<const N: usize> PartialEq<[usize; N]> for Position {
    fn eq(&self, other: &[usize; N]) -> bool {
        self.0 == other
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.0).finish()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{c}")?;
        }
        f.write_str("]")
    }
}

/// First level at which two positions disagree on the sibling index.
///
/// Only the shared prefix is compared: if one position is a prefix of the
/// other (or they are equal) there is no conflict and `None` is returned.
pub fn conflicting_index(a: &[usize], b: &[usize]) -> Option<usize> {
    a.iter().zip(b).position(|(x, y)| x != y)
}

/// Componentwise equality. Positions of different depth are never equal.
pub fn same_position(a: &[usize], b: &[usize]) -> bool {
    a == b
}

/// Where among a parent's children a moved node lands.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    /// The node ends up at this sibling index.
    At(usize),
    /// The node becomes the last child.
    Append,
}

/// Destination of a move: a parent path and a slot among its children.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Target {
    /// Path of the new parent. Empty for the root level.
    pub parent: Position,
    /// Slot among the parent's children.
    pub slot: Slot,
}

impl Target {
    /// Create a target from its parts.
    #[must_use]
    pub fn new(parent: Position, slot: Slot) -> Self {
        Self { parent, slot }
    }

    /// Target the concrete `position`. Returns `None` for the empty path.
    #[must_use]
    pub fn at(position: &[usize]) -> Option<Self> {
        let (&index, parent) = position.split_last()?;
        Some(Self {
            parent: parent.into(),
            slot: Slot::At(index),
        })
    }

    /// Target the end of `parent`'s children.
    #[must_use]
    pub fn append_to(parent: Position) -> Self {
        Self {
            parent,
            slot: Slot::Append,
        }
    }

    /// Depth the moved node itself would have.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.parent.depth() + 1
    }

    /// The concrete position, if the slot is an explicit index.
    #[must_use]
    pub fn concrete(&self) -> Option<Position> {
        match self.slot {
            Slot::At(index) => Some(self.parent.child(index)),
            Slot::Append => None,
        }
    }

    /// Returns true if this target is exactly `position`.
    ///
    /// An append target never equals a concrete position.
    #[must_use]
    pub fn is_position(&self, position: &[usize]) -> bool {
        match (self.slot, position.split_last()) {
            (Slot::At(index), Some((&last, parent))) => {
                index == last && same_position(&self.parent, parent)
            }
            _ => false,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.slot {
            Slot::At(index) => fmt::Display::fmt(&self.parent.child(index), f),
            Slot::Append => write!(f, "end of {}", self.parent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    // Differences are reported at the first diverging level only.
    #[test]
    fn conflicting_index_first_divergence() {
        assert_eq!(conflicting_index(&[0, 1, 2], &[0, 1, 3]), Some(2));
        assert_eq!(conflicting_index(&[0, 1, 2], &[1, 1, 2]), Some(0));
        assert_eq!(conflicting_index(&[4, 5], &[4, 6, 0]), Some(1));
    }

    // Prefixes and equal paths have no conflict.
    #[test]
    fn conflicting_index_prefix_is_none() {
        assert_eq!(conflicting_index(&[0, 1], &[0, 1, 7]), None);
        assert_eq!(conflicting_index(&[0, 1, 7], &[0, 1]), None);
        assert_eq!(conflicting_index(&[3], &[3]), None);
        assert_eq!(conflicting_index(&[], &[3]), None);
    }

    #[test]
    fn same_position_is_strict() {
        assert!(same_position(&[1, 2], &[1, 2]));
        assert!(!same_position(&[1, 2], &[1]));
        assert!(!same_position(&[1], &[1, 2]));
        assert!(same_position(&[], &[]));
    }

    #[test]
    fn position_helpers() {
        let p = Position::from([2, 0, 3]);
        assert_eq!(p.depth(), 3);
        assert_eq!(p.index(), Some(3));
        assert_eq!(p.parent(), &[2, 0]);
        assert_eq!(p.child(1), [2, 0, 3, 1]);
        assert_eq!(p.with_index(0), [2, 0, 0]);
        assert_eq!(Position::empty().with_index(4), [4]);
        assert_eq!(Position::root(1).parent(), &[] as &[usize]);
        assert!(Position::from([2]).is_ancestor_of(&p));
        assert!(!p.is_ancestor_of(&p));
        assert_eq!(p.to_string(), "[2, 0, 3]");
    }

    #[test]
    fn target_forms() {
        let t = Target::at(&[1, 4]).unwrap();
        assert_eq!(t.parent, [1]);
        assert_eq!(t.slot, Slot::At(4));
        assert_eq!(t.depth(), 2);
        assert!(t.is_position(&[1, 4]));
        assert!(!t.is_position(&[1]));
        assert_eq!(t.concrete(), Some(Position::from([1, 4])));
        assert!(Target::at(&[]).is_none());

        let a = Target::append_to(Position::from([0]));
        assert_eq!(a.concrete(), None);
        assert!(!a.is_position(&[0, 0]));
        assert_eq!(a.to_string(), "end of [0]");
    }
}
