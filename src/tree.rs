//! A linked, unbalanced Binary Search Tree holding an ordered multiset of values.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::{Error, OrderedTree};
//!
//! let mut tree: OrderedTree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
//!
//! assert_eq!(tree.find(&4), Some(&4));
//! assert!(!tree.contains(&6));
//!
//! // Removing a node with two children lifts the largest value of its left subtree.
//! assert_eq!(tree.remove(&5), Ok(5));
//! assert_eq!(tree.iter().next(), Some(&4));
//! assert_eq!(tree.remove(&5), Err(Error::NotFound));
//!
//! assert_eq!(tree.successor(&4), Some(&7));
//! assert_eq!(tree.predecessor(&4), Some(&3));
//! assert_eq!(tree.range_find(&3, &8).len(), 4);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use log::{debug, log_enabled, trace, Level};

use crate::error::{Error, Result};
use crate::iter::{Inorder, IntoIter, Iter, LevelOrder, Postorder};
use crate::node::{Link, Node};

/// An ordered container backed by a plain Binary Search Tree.
///
/// Values smaller than a node live in its left subtree and values greater than *or equal to* it
/// live in its right subtree, so duplicates are kept. The tree never rebalances on its own; call
/// [`rebalance`](Self::rebalance) to rebuild it at minimum height.
///
/// All operations walk the tree iteratively, so a degenerate tree (e.g. from sorted inserts)
/// costs time but never call-stack depth.
pub struct OrderedTree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for OrderedTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for OrderedTree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> OrderedTree<T> {
    /// Generates a new, empty `OrderedTree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The number of values stored, duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        drop(IntoIter::new(self.root.take(), self.len));
        self.len = 0;
    }

    /// Iterates the values in preorder: node, then left subtree, then right subtree.
    ///
    /// This is the default iteration order of the tree. Re-inserting the values in this order
    /// into an empty tree reproduces the same shape.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.root, self.len)
    }

    /// Same as [`iter`](Self::iter).
    pub fn preorder(&self) -> Iter<'_, T> {
        self.iter()
    }

    /// Iterates the values in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = [3, 1, 2, 1].into_iter().collect();
    /// assert!(tree.inorder().eq(&[1, 1, 2, 3]));
    /// ```
    pub fn inorder(&self) -> Inorder<'_, T> {
        Inorder::new(&self.root, self.len)
    }

    /// Iterates the values in postorder: left subtree, right subtree, then node.
    pub fn postorder(&self) -> Postorder<'_, T> {
        Postorder::new(&self.root, self.len)
    }

    /// Iterates the values level by level from the root, left to right within a level.
    pub fn levelorder(&self) -> LevelOrder<'_, T> {
        LevelOrder::new(&self.root, self.len)
    }

    /// The number of edges on the longest path from the root down to a leaf. A lone root has
    /// height `0` and an empty tree has height `-1`.
    pub fn height(&self) -> isize {
        let mut height = -1;
        let mut stack: Vec<(&Node<T>, isize)> =
            self.root.as_deref().map(|root| (root, 0)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left.as_deref().map(|n| (n, depth + 1)));
            stack.extend(node.right.as_deref().map(|n| (n, depth + 1)));
        }
        height
    }

    /// Whether the tree is not much taller than a minimum-height tree with as many nodes,
    /// i.e. `height < 2 * log2(n + 1) - 1`. An empty tree counts as balanced.
    ///
    /// This is a global criterion, not a per-node balance factor.
    pub fn is_balanced(&self) -> bool {
        let n = self.iter().count();
        if n == 0 {
            return true;
        }
        (self.height() as f64) < 2.0 * ((n + 1) as f64).log2() - 1.0
    }
}

impl<T: Ord> OrderedTree<T> {
    /// Adds `value` to the tree. Equal values are kept side by side, each new one landing to the
    /// right of those already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(1);
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.len(), 2);
    /// assert_eq!(tree.find(&1), Some(&1));
    /// ```
    pub fn insert(&mut self, value: T) {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = if value < node.data {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *slot = Some(Node::new_boxed(value));
        self.len += 1;
    }

    /// Potentially finds the stored value equal to `value`. If no node holds an equal value,
    /// `None` is returned.
    pub fn find(&self, value: &T) -> Option<&T> {
        let mut link = &self.root;
        while let Some(node) = link.as_deref() {
            link = match value.cmp(&node.data) {
                Ordering::Less => &node.left,
                Ordering::Equal => return Some(&node.data),
                Ordering::Greater => &node.right,
            };
        }
        None
    }

    /// Whether some stored value is equal to `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Removes one stored value equal to `value` and returns it.
    ///
    /// When the matching node has two children it stays in place: the largest value of its left
    /// subtree is moved up into it and that (childless on the right) node is unlinked instead.
    /// Otherwise the node's only child, if any, takes its place.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if no stored value is equal to `value`. The tree is left untouched.
    pub fn remove(&mut self, value: &T) -> Result<T> {
        let slot = Node::find_slot(&mut self.root, value);
        let Some(mut target) = slot.take() else {
            trace!("remove missed; {} values stored", self.len);
            return Err(Error::NotFound);
        };

        let removed = if target.left.is_some() && target.right.is_some() {
            let max =
                Node::take_max(&mut target.left).expect("two children implies a left child");
            let removed = mem::replace(&mut target.data, max);
            *slot = Some(target);
            removed
        } else {
            // At most one child is present.
            let Node { data, left, right } = *target;
            *slot = left.or(right);
            data
        };

        self.len -= 1;
        Ok(removed)
    }

    /// Overwrites the data of the node holding a value equal to `old` with `new` and returns the
    /// previous data, or `None` (changing nothing) if there is no such node.
    ///
    /// The node is found by ordered descent and is not moved, so `new` must order the same way
    /// `old` did relative to the rest of the tree; otherwise later lookups may miss values. This
    /// is meant for updating data that compares equal but carries other information.
    pub fn replace(&mut self, old: &T, new: T) -> Option<T> {
        Node::find_slot(&mut self.root, old)
            .as_mut()
            .map(|node| mem::replace(&mut node.data, new))
    }

    /// Every stored value `v` with `low <= v <= high`, in preorder. Empty if `low > high`.
    ///
    /// Every node is visited, so a value that [`replace`](Self::replace) left out of order is
    /// still reported.
    pub fn range_find(&self, low: &T, high: &T) -> Vec<&T> {
        self.iter().filter(|v| low <= *v && *v <= high).collect()
    }

    /// The smallest stored value strictly greater than `value`. Scans the whole tree, like
    /// [`range_find`](Self::range_find).
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = [1, 3, 4, 7, 8, 9].into_iter().collect();
    /// assert_eq!(tree.successor(&4), Some(&7));
    /// assert_eq!(tree.successor(&9), None);
    /// ```
    pub fn successor(&self, value: &T) -> Option<&T> {
        self.iter().filter(|v| *v > value).min()
    }

    /// The largest stored value strictly less than `value`. Scans the whole tree.
    pub fn predecessor(&self, value: &T) -> Option<&T> {
        self.iter().filter(|v| *v < value).max()
    }

    /// Rebuilds the tree at minimum height, keeping every stored value.
    ///
    /// The values are pulled out, sorted, and re-inserted median first: the middle of each
    /// sorted range goes in before the two halves around it. With distinct values the result has
    /// height `ceil(log2(n + 1)) - 1`. Runs of duplicates still chain to the right.
    pub fn rebalance(&mut self) {
        let height_before = log_enabled!(Level::Debug).then(|| self.height());

        let mut values: Vec<T> = IntoIter::new(self.root.take(), self.len).collect();
        self.len = 0;
        values.sort();

        let mut order = median_order(values.len());
        permute(&mut values, &mut order);
        self.extend(values);

        if let Some(height_before) = height_before {
            debug!(
                "rebalanced {} values: height {} -> {}",
                self.len,
                height_before,
                self.height()
            );
        }
    }
}

/// Indices into a sorted slice of length `len` in the order they are re-inserted by
/// [`OrderedTree::rebalance`]: the middle of a range, then its lower half, then its upper half.
fn median_order(len: usize) -> Vec<usize> {
    let mut order = Vec::with_capacity(len);
    // Half-open ranges still to visit; the lower half sits on top.
    let mut ranges = vec![(0, len)];
    while let Some((lo, hi)) = ranges.pop() {
        if lo == hi {
            continue;
        }
        let mid = lo + (hi - lo) / 2;
        order.push(mid);
        ranges.push((mid + 1, hi));
        ranges.push((lo, mid));
    }
    order
}

/// Rearranges `values` so that position `k` holds what was at `order[k]`, one cycle of the
/// permutation at a time. `order` is left as the identity.
fn permute<T>(values: &mut [T], order: &mut [usize]) {
    for start in 0..order.len() {
        let mut current = start;
        loop {
            let next = mem::replace(&mut order[current], current);
            if next == start {
                break;
            }
            values.swap(current, next);
            current = next;
        }
    }
}

impl<T: Ord> FromIterator<T> for OrderedTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for OrderedTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> From<Vec<T>> for OrderedTree<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<'a, T> IntoIterator for &'a OrderedTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for OrderedTree<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        let len = mem::take(&mut self.len);
        IntoIter::new(self.root.take(), len)
    }
}

/// Copies node by node into the matching slot of the new tree, so the shape is kept and no
/// ordering is needed.
impl<T: Clone> Clone for OrderedTree<T> {
    fn clone(&self) -> Self {
        let mut root = None;
        {
            let mut stack: Vec<(&Node<T>, &mut Link<T>)> =
                self.root.as_deref().map(|node| (node, &mut root)).into_iter().collect();
            while let Some((node, slot)) = stack.pop() {
                let copy = slot.insert(Node::new_boxed(node.data.clone()));
                let Node { left, right, .. } = &mut **copy;
                stack.extend(node.left.as_deref().map(|n| (n, left)));
                stack.extend(node.right.as_deref().map(|n| (n, right)));
            }
        }
        Self {
            root,
            len: self.len,
        }
    }
}

impl<T: PartialEq> PartialEq for OrderedTree<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.inorder().eq(other.inorder())
    }
}

impl<T: Eq> Eq for OrderedTree<T> {}

impl<T: fmt::Debug> fmt::Debug for OrderedTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.inorder()).finish()
    }
}

/// Draws the tree rotated a quarter turn counter-clockwise: one value per line, the right
/// subtree above its parent and the left one below, indented by one `"| "` per level.
impl<T: fmt::Display> fmt::Display for OrderedTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Reverse inorder with the depth carried alongside each node.
        let mut stack: Vec<(&Node<T>, usize)> = Vec::new();
        let mut link = self.root.as_deref().map(|root| (root, 0));
        loop {
            while let Some((node, level)) = link {
                stack.push((node, level));
                link = node.right.as_deref().map(|n| (n, level + 1));
            }
            let Some((node, level)) = stack.pop() else {
                return Ok(());
            };
            writeln!(f, "{}{}", "| ".repeat(level), node.data)?;
            link = node.left.as_deref().map(|n| (n, level + 1));
        }
    }
}
