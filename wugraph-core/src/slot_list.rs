//! Doubly linked list addressed by stable handles.
//!
//! Nodes live in an [`Arena`], so `push_back` hands out a [`ListHandle`] that
//! stays valid until that node is removed. Removal by handle and insertion at
//! the back are both O(1); iteration follows insertion order.

use crate::arena::Arena;

/// Stable position of a value inside a [`SlotList`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct ListHandle(usize);

#[derive(Clone, Debug)]
struct ListNode<T> {
    value: T,
    prev: Option<usize>,
    next: Option<usize>,
}

#[derive(Clone, Debug)]
pub(crate) struct SlotList<T> {
    nodes: Arena<ListNode<T>>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl<T> Default for SlotList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SlotList<T> {
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            head: None,
            tail: None,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            head: None,
            tail: None,
        }
    }

    pub(crate) const fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub(crate) fn push_back(&mut self, value: T) -> ListHandle {
        let index = self.nodes.insert(ListNode {
            value,
            prev: self.tail,
            next: None,
        });
        match self.tail.and_then(|tail| self.nodes.get_mut(tail)) {
            Some(tail) => tail.next = Some(index),
            None => self.head = Some(index),
        }
        self.tail = Some(index);
        ListHandle(index)
    }

    /// Unlinks the node at `handle`, returning its value.
    ///
    /// Returns `None` when the handle no longer names a live node.
    pub(crate) fn remove(&mut self, handle: ListHandle) -> Option<T> {
        let node = self.nodes.remove(handle.0)?;
        match node.prev.and_then(|prev| self.nodes.get_mut(prev)) {
            Some(prev) => prev.next = node.next,
            None => self.head = node.next,
        }
        match node.next.and_then(|next| self.nodes.get_mut(next)) {
            Some(next) => next.prev = node.prev,
            None => self.tail = node.prev,
        }
        Some(node.value)
    }

    pub(crate) fn get(&self, handle: ListHandle) -> Option<&T> {
        self.nodes.get(handle.0).map(|node| &node.value)
    }

    pub(crate) fn front(&self) -> Option<ListHandle> {
        self.head.map(ListHandle)
    }

    pub(crate) fn next(&self, handle: ListHandle) -> Option<ListHandle> {
        self.nodes.get(handle.0)?.next.map(ListHandle)
    }

    /// Iterates values front to back.
    pub(crate) fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.front(),
        }
    }
}

pub(crate) struct Iter<'a, T> {
    list: &'a SlotList<T>,
    cursor: Option<ListHandle>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (ListHandle, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let handle = self.cursor?;
        let value = self.list.get(handle)?;
        self.cursor = self.list.next(handle);
        Some((handle, value))
    }
}
