//! Doubly linked node chain backing [`BoundedDeque`](super::BoundedDeque).
//!
//! The chain is not synchronized; the deque owns it behind its lock. Nodes are
//! boxed individually so insertion and removal at either end never move other
//! elements.

use core::marker::PhantomData;
use core::ptr::NonNull;

type Link<T> = Option<NonNull<Node<T>>>;

struct Node<T> {
    value: T,
    prev: Link<T>,
    next: Link<T>,
}

pub(crate) struct Chain<T> {
    head: Link<T>,
    tail: Link<T>,
    len: usize,
    // The chain owns its nodes.
    _owns: PhantomData<Box<Node<T>>>,
}

// SAFETY: the chain exclusively owns every node it links; moving or sharing it
// is the same as moving or sharing a collection of `T`.
unsafe impl<T: Send> Send for Chain<T> {}
// SAFETY: shared access only hands out `&T`.
unsafe impl<T: Sync> Sync for Chain<T> {}

impl<T> Chain<T> {
    pub(crate) const fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            _owns: PhantomData,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn push_back(&mut self, value: T) {
        let node = NonNull::from(Box::leak(Box::new(Node {
            value,
            prev: self.tail,
            next: None,
        })));

        match self.tail {
            // SAFETY: `tail` is a live node owned by this chain and we hold `&mut self`.
            Some(mut tail) => unsafe { tail.as_mut().next = Some(node) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    pub(crate) fn push_front(&mut self, value: T) {
        let node = NonNull::from(Box::leak(Box::new(Node {
            value,
            prev: None,
            next: self.head,
        })));

        match self.head {
            // SAFETY: `head` is a live node owned by this chain and we hold `&mut self`.
            Some(mut head) => unsafe { head.as_mut().prev = Some(node) },
            None => self.tail = Some(node),
        }
        self.head = Some(node);
        self.len += 1;
    }

    pub(crate) fn pop_back(&mut self) -> Option<T> {
        self.tail.map(|tail| {
            // SAFETY: every node was leaked from a `Box` on insert and is
            // reclaimed exactly once, here or in `pop_front`.
            let node = unsafe { Box::from_raw(tail.as_ptr()) };
            self.tail = node.prev;
            match self.tail {
                // SAFETY: the new tail is still linked and owned by this chain.
                Some(mut prev) => unsafe { prev.as_mut().next = None },
                None => self.head = None,
            }
            self.len -= 1;
            node.value
        })
    }

    pub(crate) fn pop_front(&mut self) -> Option<T> {
        self.head.map(|head| {
            // SAFETY: see `pop_back`.
            let node = unsafe { Box::from_raw(head.as_ptr()) };
            self.head = node.next;
            match self.head {
                // SAFETY: the new head is still linked and owned by this chain.
                Some(mut next) => unsafe { next.as_mut().prev = None },
                None => self.tail = None,
            }
            self.len -= 1;
            node.value
        })
    }

    pub(crate) fn front(&self) -> Option<&T> {
        // SAFETY: the node lives as long as the chain borrow.
        self.head.map(|node| unsafe { &(*node.as_ptr()).value })
    }

    pub(crate) fn back(&self) -> Option<&T> {
        // SAFETY: the node lives as long as the chain borrow.
        self.tail.map(|node| unsafe { &(*node.as_ptr()).value })
    }

    pub(crate) fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head,
            remaining: self.len,
            _chain: PhantomData,
        }
    }

    /// Walk the chain in both directions and confirm the links agree with `len`.
    #[cfg(test)]
    pub(crate) fn links_consistent(&self) -> bool {
        let mut count = 0;
        let mut prev: Link<T> = None;
        let mut cursor = self.head;

        while let Some(node) = cursor {
            // SAFETY: test-only walk over nodes owned by this chain.
            let node_ref = unsafe { node.as_ref() };
            if node_ref.prev != prev {
                return false;
            }
            count += 1;
            if count > self.len {
                return false;
            }
            prev = Some(node);
            cursor = node_ref.next;
        }

        count == self.len && prev == self.tail
    }
}

impl<T> Drop for Chain<T> {
    fn drop(&mut self) {
        while self.pop_front().is_some() {}
    }
}

/// Head-to-tail borrowing iterator.
pub(crate) struct Iter<'a, T> {
    next: Link<T>,
    remaining: usize,
    _chain: PhantomData<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.next.map(|node| {
            // SAFETY: the chain is borrowed for 'a and cannot be mutated meanwhile.
            let node = unsafe { &*node.as_ptr() };
            self.next = node.next;
            self.remaining -= 1;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
