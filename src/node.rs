use std::cmp::Ordering;

/// An owning child slot. `None` marks the empty pointer at the bottom of a subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A plain storage cell: one value and the two subtrees hanging off it.
pub(crate) struct Node<T> {
    pub(crate) data: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    pub(crate) fn new_boxed(data: T) -> Box<Self> {
        Box::new(Node {
            data,
            left: None,
            right: None,
        })
    }

    /// The child slot a value ordered as `ordering` relative to this node's data belongs in.
    /// Equal values live to the right.
    fn child_mut(&mut self, ordering: Ordering) -> &mut Link<T> {
        match ordering {
            Ordering::Less => &mut self.left,
            Ordering::Equal | Ordering::Greater => &mut self.right,
        }
    }

    /// Walks down from `slot` and returns the slot owning the first node whose data equals
    /// `value`, or the empty slot where the descent ran out.
    ///
    /// Returning the owning slot rather than the node lets callers splice a replacement in
    /// without knowing whether it hangs from a parent or is the root.
    pub(crate) fn find_slot<'a>(mut slot: &'a mut Link<T>, value: &T) -> &'a mut Link<T>
    where
        T: Ord,
    {
        while let Some(ordering) = slot
            .as_deref()
            .map(|node| value.cmp(&node.data))
            .filter(|ordering| ordering.is_ne())
        {
            let node = slot.as_mut().expect("ordering implies a node");
            slot = node.child_mut(ordering);
        }
        slot
    }

    /// Detaches the largest node of the subtree in `slot` and returns its value. The largest
    /// node never has a right child so its left child takes its place.
    ///
    /// Returns `None` if `slot` is empty.
    pub(crate) fn take_max(mut slot: &mut Link<T>) -> Option<T> {
        while slot.as_ref().map_or(false, |node| node.right.is_some()) {
            slot = &mut slot.as_mut()?.right;
        }
        let max = slot.take()?;
        let Node { data, left, .. } = *max;
        *slot = left;
        Some(data)
    }
}
