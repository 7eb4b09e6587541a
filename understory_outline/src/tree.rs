// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Owned outline forest: nodes, path lookups, and preorder walks.

use alloc::vec::Vec;

use crate::position::Position;

/// An item of the outline.
///
/// A node is exclusively owned by its parent's `children`, or by the
/// [`Forest`] when it is a root. Child order is meaningful.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node<K, T> {
    /// Caller-chosen identifier.
    pub id: K,
    /// Caller-owned payload.
    pub data: T,
    /// Ordered children.
    pub children: Vec<Self>,
}

impl<K, T> Node<K, T> {
    /// A node without children.
    pub fn leaf(id: K, data: T) -> Self {
        Self {
            id,
            data,
            children: Vec::new(),
        }
    }

    /// A node with the given children.
    pub fn with_children(id: K, data: T, children: Vec<Self>) -> Self {
        Self { id, data, children }
    }

    /// Height of the subtree rooted here: 1 for a leaf.
    pub fn height(&self) -> usize {
        1 + self.children.iter().map(Self::height).max().unwrap_or(0)
    }

    /// Returns true if the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in this subtree, including this one.
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(Self::subtree_len).sum::<usize>()
    }
}

/// An ordered sequence of root nodes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Forest<K, T> {
    roots: Vec<Node<K, T>>,
}

impl<K, T> Default for Forest<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, T> Forest<K, T> {
    /// Create an empty forest.
    pub fn new() -> Self {
        Self { roots: Vec::new() }
    }

    /// Create a forest from its roots.
    pub fn from_roots(roots: Vec<Node<K, T>>) -> Self {
        Self { roots }
    }

    /// The root nodes, in order.
    pub fn roots(&self) -> &[Node<K, T>] {
        &self.roots
    }

    /// Consume the forest, returning its roots.
    pub fn into_roots(self) -> Vec<Node<K, T>> {
        self.roots
    }

    /// Total number of nodes.
    pub fn len(&self) -> usize {
        self.roots.iter().map(Node::subtree_len).sum()
    }

    /// Returns true if there are no nodes.
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Height of the tallest root subtree; 0 when empty.
    ///
    /// Every node satisfies `depth + height - 1 <= max_depth` exactly when
    /// this value is at most `max_depth`.
    pub fn height(&self) -> usize {
        self.roots.iter().map(Node::height).max().unwrap_or(0)
    }

    /// Returns true if no node reaches past `max_depth`.
    pub fn fits_depth(&self, max_depth: usize) -> bool {
        self.height() <= max_depth
    }

    /// The node at `position`, if any.
    pub fn get(&self, position: &[usize]) -> Option<&Node<K, T>> {
        let (&first, rest) = position.split_first()?;
        let mut node = self.roots.get(first)?;
        for &i in rest {
            node = node.children.get(i)?;
        }
        Some(node)
    }

    /// Mutable access to the node at `position`, if any.
    pub fn get_mut(&mut self, position: &[usize]) -> Option<&mut Node<K, T>> {
        let (&first, rest) = position.split_first()?;
        let mut node = self.roots.get_mut(first)?;
        for &i in rest {
            node = node.children.get_mut(i)?;
        }
        Some(node)
    }

    /// Children of the node at `parent`; the roots for the empty path.
    pub fn children_of(&self, parent: &[usize]) -> Option<&[Node<K, T>]> {
        if parent.is_empty() {
            return Some(&self.roots);
        }
        self.get(parent).map(|n| n.children.as_slice())
    }

    pub(crate) fn children_of_mut(&mut self, parent: &[usize]) -> Option<&mut Vec<Node<K, T>>> {
        if parent.is_empty() {
            return Some(&mut self.roots);
        }
        self.get_mut(parent).map(|n| &mut n.children)
    }

    /// Number of siblings at `position`'s level (including the node itself).
    pub fn sibling_count(&self, position: &[usize]) -> Option<usize> {
        let (_, parent) = position.split_last()?;
        self.children_of(parent).map(<[_]>::len)
    }

    /// Preorder walk yielding every node with its position.
    pub fn walk(&self) -> Walk<'_, K, T> {
        let mut stack = Vec::with_capacity(self.roots.len());
        for (i, node) in self.roots.iter().enumerate().rev() {
            stack.push((Position::root(i), node));
        }
        Walk { stack }
    }
}

impl<K: PartialEq, T> Forest<K, T> {
    /// Find the position of the node with `id` by a preorder search.
    ///
    /// This is linear in the size of the forest; drag sessions call it once
    /// at drag start and track the position themselves afterwards.
    pub fn position_of(&self, id: &K) -> Option<Position> {
        self.walk()
            .find(|(_, node)| node.id == *id)
            .map(|(position, _)| position)
    }
}

/// Preorder iterator returned by [`Forest::walk`].
#[derive(Debug)]
pub struct Walk<'a, K, T> {
    stack: Vec<(Position, &'a Node<K, T>)>,
}

impl<'a, K, T> Iterator for Walk<'a, K, T> {
    type Item = (Position, &'a Node<K, T>);

    fn next(&mut self) -> Option<Self::Item> {
        let (position, node) = self.stack.pop()?;
        for (i, child) in node.children.iter().enumerate().rev() {
            self.stack.push((position.child(i), child));
        }
        Some((position, node))
    }
}
