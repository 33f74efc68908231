//! Lazy traversals over an [`OrderedTree`](crate::OrderedTree).
//!
//! Every iterator here walks the tree with an explicit stack (or queue) so that the depth of a
//! degenerate tree never turns into call-stack depth. Each one is created fresh by the matching
//! method on the tree, so a traversal is restarted simply by asking for a new iterator.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::node::{Link, Node};

/// Preorder (node, left, right) iterator returned by
/// [`OrderedTree::iter`](crate::OrderedTree::iter).
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(root: &'a Link<T>, len: usize) -> Self {
        Self {
            stack: root.as_deref().into_iter().collect(),
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.remaining -= 1;
        // Right goes on first so that left is popped first.
        self.stack.extend(node.right.as_deref());
        self.stack.extend(node.left.as_deref());
        Some(&node.data)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}
impl<'a, T> FusedIterator for Iter<'a, T> {}

/// Ascending iterator returned by [`OrderedTree::inorder`](crate::OrderedTree::inorder).
pub struct Inorder<'a, T> {
    /// The left spine still waiting to be visited, deepest node on top.
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Inorder<'a, T> {
    pub(crate) fn new(root: &'a Link<T>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut link: &'a Link<T>) {
        while let Some(node) = link.as_deref() {
            self.stack.push(node);
            link = &node.left;
        }
    }
}

impl<'a, T> Iterator for Inorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.remaining -= 1;
        self.push_left_spine(&node.right);
        Some(&node.data)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for Inorder<'a, T> {}
impl<'a, T> FusedIterator for Inorder<'a, T> {}

/// Postorder (left, right, node) iterator returned by
/// [`OrderedTree::postorder`](crate::OrderedTree::postorder).
pub struct Postorder<'a, T> {
    /// Nodes paired with whether their children have already been scheduled.
    stack: Vec<(&'a Node<T>, bool)>,
    remaining: usize,
}

impl<'a, T> Postorder<'a, T> {
    pub(crate) fn new(root: &'a Link<T>, len: usize) -> Self {
        Self {
            stack: root.as_deref().map(|node| (node, false)).into_iter().collect(),
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for Postorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                self.remaining -= 1;
                return Some(&node.data);
            }
            self.stack.push((node, true));
            self.stack.extend(node.right.as_deref().map(|n| (n, false)));
            self.stack.extend(node.left.as_deref().map(|n| (n, false)));
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for Postorder<'a, T> {}
impl<'a, T> FusedIterator for Postorder<'a, T> {}

/// Breadth-first iterator returned by
/// [`OrderedTree::levelorder`](crate::OrderedTree::levelorder).
pub struct LevelOrder<'a, T> {
    queue: VecDeque<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> LevelOrder<'a, T> {
    pub(crate) fn new(root: &'a Link<T>, len: usize) -> Self {
        Self {
            queue: root.as_deref().into_iter().collect(),
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for LevelOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.remaining -= 1;
        self.queue.extend(node.left.as_deref());
        self.queue.extend(node.right.as_deref());
        Some(&node.data)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for LevelOrder<'a, T> {}
impl<'a, T> FusedIterator for LevelOrder<'a, T> {}

/// Owning preorder iterator returned by `OrderedTree::into_iter`.
///
/// Nodes are unlinked one at a time as they are visited. Dropping the iterator early frees the
/// rest the same way.
pub struct IntoIter<T> {
    stack: Vec<Box<Node<T>>>,
    remaining: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(root: Link<T>, len: usize) -> Self {
        Self {
            stack: root.into_iter().collect(),
            remaining: len,
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.remaining -= 1;
        let Node { data, left, right } = *node;
        self.stack.extend(right);
        self.stack.extend(left);
        Some(data)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // Unlink iteratively; dropping a `Box<Node>` directly recurses once per level.
        for _ in &mut *self {}
    }
}
