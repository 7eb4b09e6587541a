// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Subtree moves.
//!
//! A move is validated and resolved against the forest first, without
//! touching it, and only then applied as a remove followed by an insert.
//!
//! ## Resolution
//!
//! Targets are given in the coordinates of the forest *before* the removal.
//! Removing the moved node shifts every later sibling in its list down by one,
//! so a destination parent path that passes through that list after the
//! removal point is corrected by one at that level. An append resolves to the
//! child count of the destination parent after removal. An explicit slot in
//! the node's own sibling list is the final index: the node takes the place
//! of the sibling that occupied it.

use crate::error::MoveError;
use crate::position::{Position, Slot, Target};
use crate::tree::Forest;

/// A request to move the node `item` from `from` to `to`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveRequest<K> {
    /// Identifier of the moved node, checked against the node at `from`.
    pub item: K,
    /// Current position of the moved node.
    pub from: Position,
    /// Destination, in pre-removal coordinates.
    pub to: Target,
}

/// Where a committed move actually put the node.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Settled {
    /// Position of the node in the mutated forest.
    pub position: Position,
    /// Sibling index of the node (the last component of `position`).
    pub index: usize,
}

impl<K: PartialEq, T> Forest<K, T> {
    /// Validate `request` and compute where it would settle, without mutating.
    ///
    /// `max_depth` is the ceiling for the deepest level of the moved subtree.
    pub fn resolve_move(
        &self,
        request: &MoveRequest<K>,
        max_depth: usize,
    ) -> Result<Settled, MoveError> {
        let (&from_index, from_parent) = request
            .from
            .split_last()
            .ok_or(MoveError::EmptyPosition)?;
        let node = self.get(&request.from).ok_or_else(|| MoveError::NotFound {
            position: request.from.clone(),
        })?;
        if node.id != request.item {
            return Err(MoveError::ItemMismatch {
                position: request.from.clone(),
            });
        }

        let to_parent = request.to.parent.as_slice();
        if to_parent.starts_with(&request.from) {
            return Err(MoveError::IntoOwnSubtree {
                position: request.from.clone(),
                parent: request.to.parent.clone(),
            });
        }
        let dest_len = self
            .children_of(to_parent)
            .ok_or_else(|| MoveError::MissingParent {
                parent: request.to.parent.clone(),
            })?
            .len();

        let same_parent = to_parent == from_parent;
        let len_after = if same_parent { dest_len - 1 } else { dest_len };
        let index = match request.to.slot {
            Slot::At(index) if index <= len_after => index,
            Slot::At(index) => {
                return Err(MoveError::SlotOutOfBounds {
                    parent: request.to.parent.clone(),
                    index,
                    len: len_after,
                });
            }
            Slot::Append => len_after,
        };

        let mut parent = to_parent.to_vec();
        let level = from_parent.len();
        if parent.len() > level && parent.starts_with(from_parent) && parent[level] > from_index {
            parent[level] -= 1;
        }

        let depth = parent.len() + node.height();
        if depth > max_depth {
            return Err(MoveError::DepthExceeded {
                target: request.to.clone(),
                depth,
                max_depth,
            });
        }

        Ok(Settled {
            position: Position::from(parent).child(index),
            index,
        })
    }

    /// Move a subtree and report where it settled.
    ///
    /// Fails without mutating the forest if the request does not match the
    /// live forest or if the moved subtree would reach past `max_depth`.
    pub fn commit_move(
        &mut self,
        request: &MoveRequest<K>,
        max_depth: usize,
    ) -> Result<Settled, MoveError> {
        let settled = match self.resolve_move(request, max_depth) {
            Ok(settled) => settled,
            Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(from = %request.from, to = %request.to, error = %err, "move rejected");
                return Err(err);
            }
        };

        let (&from_index, from_parent) = request
            .from
            .split_last()
            .ok_or(MoveError::EmptyPosition)?;
        let siblings = self
            .children_of_mut(from_parent)
            .ok_or_else(|| MoveError::NotFound {
                position: request.from.clone(),
            })?;
        let node = siblings.remove(from_index);

        match self.children_of_mut(settled.position.parent()) {
            Some(dest) if settled.index <= dest.len() => dest.insert(settled.index, node),
            _ => {
                // Unreachable after a successful resolve; put the node back.
                if let Some(siblings) = self.children_of_mut(from_parent) {
                    siblings.insert(from_index, node);
                }
                return Err(MoveError::MissingParent {
                    parent: settled.position.parent().into(),
                });
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(from = %request.from, to = %settled.position, "move committed");
        Ok(settled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Node;
    use alloc::vec;
    use alloc::vec::Vec;

    // A, B, C, D[E]
    fn sample() -> Forest<char, ()> {
        Forest::from_roots(vec![
            Node::leaf('A', ()),
            Node::leaf('B', ()),
            Node::leaf('C', ()),
            Node::with_children('D', (), vec![Node::leaf('E', ())]),
        ])
    }

    fn ids(f: &Forest<char, ()>) -> Vec<(Vec<usize>, char)> {
        f.walk().map(|(p, n)| (p.into_vec(), n.id)).collect()
    }

    fn request(item: char, from: &[usize], to: Target) -> MoveRequest<char> {
        MoveRequest {
            item,
            from: from.into(),
            to,
        }
    }

    // Moving down among siblings lands on the hovered index.
    #[test]
    fn sibling_move_down() {
        let mut f = sample();
        let s = f
            .commit_move(&request('A', &[0], Target::at(&[1]).unwrap()), 3)
            .unwrap();
        assert_eq!(s.position, [1]);
        assert_eq!(s.index, 1);
        let roots: Vec<char> = f.roots().iter().map(|n| n.id).collect();
        assert_eq!(roots, vec!['B', 'A', 'C', 'D']);
    }

    #[test]
    fn sibling_move_up() {
        let mut f = sample();
        let s = f
            .commit_move(&request('C', &[2], Target::at(&[0]).unwrap()), 3)
            .unwrap();
        assert_eq!(s.position, [0]);
        let roots: Vec<char> = f.roots().iter().map(|n| n.id).collect();
        assert_eq!(roots, vec!['C', 'A', 'B', 'D']);
    }

    // Indent: append to the previous sibling's children.
    #[test]
    fn append_into_previous_sibling() {
        let mut f = sample();
        let s = f
            .commit_move(&request('C', &[2], Target::append_to([1].into())), 3)
            .unwrap();
        assert_eq!(s.position, [1, 0]);
        assert_eq!(
            ids(&f),
            vec![
                (vec![0], 'A'),
                (vec![1], 'B'),
                (vec![1, 0], 'C'),
                (vec![2], 'D'),
                (vec![2, 0], 'E'),
            ]
        );
    }

    // Outdent: become the sibling right after the former parent.
    #[test]
    fn outdent_after_parent() {
        let mut f = sample();
        let s = f
            .commit_move(&request('E', &[3, 0], Target::at(&[4]).unwrap()), 3)
            .unwrap();
        assert_eq!(s.position, [4]);
        assert_eq!(f.roots().len(), 5);
        assert!(f.get(&[3]).unwrap().is_leaf());
    }

    // A target parent after the removal point shifts down by one.
    #[test]
    fn parent_path_corrected_after_removal() {
        let mut f = sample();
        let s = f
            .commit_move(&request('A', &[0], Target::at(&[3, 0]).unwrap()), 3)
            .unwrap();
        assert_eq!(s.position, [2, 0]);
        assert_eq!(f.get(&[2]).unwrap().id, 'D');
        assert_eq!(f.get(&[2, 0]).unwrap().id, 'A');
        assert_eq!(f.get(&[2, 1]).unwrap().id, 'E');
    }

    // Appending to the node's own parent resolves against the shortened list.
    #[test]
    fn append_to_own_parent() {
        let mut f = sample();
        let s = f
            .commit_move(&request('A', &[0], Target::append_to(Position::empty())), 3)
            .unwrap();
        assert_eq!(s.position, [3]);
        assert_eq!(f.roots().last().unwrap().id, 'A');
    }

    // [0, 1] -> [2, 0] and back restores the original order.
    #[test]
    fn round_trip_restores_order() {
        let original = Forest::from_roots(vec![
            Node::with_children(
                'X',
                (),
                vec![Node::leaf('a', ()), Node::leaf('b', ()), Node::leaf('c', ())],
            ),
            Node::leaf('Y', ()),
            Node::with_children('Z', (), vec![Node::leaf('d', ())]),
        ]);
        let mut f = original.clone();
        let there = f
            .commit_move(&request('b', &[0, 1], Target::at(&[2, 0]).unwrap()), 4)
            .unwrap();
        assert_eq!(there.position, [2, 0]);
        let back = f
            .commit_move(&request('b', &there.position, Target::at(&[0, 1]).unwrap()), 4)
            .unwrap();
        assert_eq!(back.position, [0, 1]);
        assert_eq!(f, original);
    }

    // Depth ceiling is checked against the full height of the moved subtree.
    #[test]
    fn depth_exceeded_leaves_forest_untouched() {
        let mut f = sample();
        let before = f.clone();
        // D has height 2; as a child of A it would reach depth 3.
        let err = f
            .commit_move(&request('D', &[3], Target::append_to([0].into())), 2)
            .unwrap_err();
        assert_eq!(
            err,
            MoveError::DepthExceeded {
                target: Target::append_to([0].into()),
                depth: 3,
                max_depth: 2,
            }
        );
        assert!(err.is_depth_violation());
        assert_eq!(f, before);
        assert!(
            f.commit_move(&request('D', &[3], Target::append_to([0].into())), 3)
                .is_ok()
        );
    }

    #[test]
    fn structural_errors_do_not_mutate() {
        let mut f = sample();
        let before = f.clone();
        let cases = [
            (request('A', &[], Target::at(&[1]).unwrap()), MoveError::EmptyPosition),
            (
                request('A', &[9], Target::at(&[1]).unwrap()),
                MoveError::NotFound {
                    position: [9].into(),
                },
            ),
            (
                request('B', &[0], Target::at(&[1]).unwrap()),
                MoveError::ItemMismatch {
                    position: [0].into(),
                },
            ),
            (
                request('A', &[0], Target::append_to([7].into())),
                MoveError::MissingParent {
                    parent: [7].into(),
                },
            ),
            (
                request('A', &[0], Target::at(&[4]).unwrap()),
                MoveError::SlotOutOfBounds {
                    parent: Position::empty(),
                    index: 4,
                    len: 3,
                },
            ),
            (
                request('D', &[3], Target::append_to([3, 0].into())),
                MoveError::IntoOwnSubtree {
                    position: [3].into(),
                    parent: [3, 0].into(),
                },
            ),
        ];
        for (req, expected) in cases {
            let err = f.commit_move(&req, 5).unwrap_err();
            assert_eq!(err, expected);
            assert!(err.is_structural());
            assert_eq!(f, before, "failed move must not mutate");
        }
    }

    // Cross-parent slots may point one past the end.
    #[test]
    fn cross_parent_slot_at_end() {
        let mut f = sample();
        let s = f
            .commit_move(&request('B', &[1], Target::at(&[3, 1]).unwrap()), 3)
            .unwrap();
        assert_eq!(s.position, [2, 1]);
        assert_eq!(f.get(&[2, 1]).unwrap().id, 'B');
    }
}
