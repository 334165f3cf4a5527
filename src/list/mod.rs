use std::collections::TryReserveError;
use std::fmt::{Debug, Formatter};
use std::ptr::NonNull;

use crate::list::cursor::{Cursor, CursorMut};
use crate::{IntoIter, Iter, IterMut};

pub mod cursor;
pub mod iterator;

mod algorithms;

pub use self::algorithms::drain::Drain;

/// The slot of the ghost node in every list arena.
pub(crate) const GHOST: usize = 0;

/// Slots an emptied list keeps allocated for its next elements.
const RETAINED_SLOTS: usize = 8;

/// A cyclic doubly-linked list around a ghost node.
///
/// Nodes live in an arena owned by the list and link to each other by slot;
/// slot 0 is the ghost node, which never holds an element. Slots freed by
/// removals are kept on a `vacant` stack and reused by later insertions.
/// With the `length` feature (on by default) the list also caches its
/// length.
///
/// Linking changes only go through a few private primitives: attach a
/// node, detach a node, move a run of nodes, flip a node's links.
///
/// Ranges of nodes are written `front..=back` (both inclusive) or
/// `start..end` (end exclusive, often the ghost node).
pub struct List<T> {
    nodes: Vec<Node<T>>,
    vacant: Vec<usize>,
    #[cfg(feature = "length")]
    /// the length of the list
    pub(crate) len: usize,
}

pub(crate) struct Node<T> {
    pub(crate) next: usize,
    pub(crate) prev: usize,
    pub(crate) element: Option<T>,
}

// private methods
impl<T> List<T> {
    pub(crate) fn ghost_node(&self) -> usize {
        GHOST
    }
    pub(crate) fn front_node(&self) -> usize {
        self.nodes[GHOST].next
    }
    pub(crate) fn back_node(&self) -> usize {
        self.nodes[GHOST].prev
    }
    pub(crate) fn next_node(&self, node: usize) -> usize {
        self.nodes[node].next
    }
    pub(crate) fn prev_node(&self, node: usize) -> usize {
        self.nodes[node].prev
    }

    /// Returns the element of `node`, or `None` for the ghost node.
    pub(crate) fn get(&self, node: usize) -> Option<&T> {
        self.nodes[node].element.as_ref()
    }

    pub(crate) fn get_mut(&mut self, node: usize) -> Option<&mut T> {
        self.nodes[node].element.as_mut()
    }

    /// Returns the element of a linked, non-ghost node.
    pub(crate) fn element(&self, node: usize) -> &T {
        match &self.nodes[node].element {
            Some(element) => element,
            None => unreachable!("node {} holds no element", node),
        }
    }

    pub(crate) fn element_mut(&mut self, node: usize) -> &mut T {
        match &mut self.nodes[node].element {
            Some(element) => element,
            None => unreachable!("node {} holds no element", node),
        }
    }

    /// Borrows the elements of two distinct nodes mutably at the same time.
    pub(crate) fn elements_mut(&mut self, a: usize, b: usize) -> (&mut T, &mut T) {
        assert_ne!(a, b, "Cannot borrow the same node twice");
        let (low, high) = (a.min(b), a.max(b));
        let (left, right) = self.nodes.split_at_mut(high);
        let (low, high) = match (&mut left[low].element, &mut right[0].element) {
            (Some(low), Some(high)) => (low, high),
            _ => unreachable!("the ghost node holds no element"),
        };
        if a < b {
            (low, high)
        } else {
            (high, low)
        }
    }

    /// Base pointer of the arena, used by [`IterMut`].
    pub(crate) fn nodes_ptr(&mut self) -> NonNull<Node<T>> {
        NonNull::from(self.nodes.as_mut_slice()).cast()
    }

    fn connect(&mut self, prev: usize, next: usize) {
        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
    }

    /// Create a detached node with given element, reusing a vacant slot if any.
    pub(crate) fn new_detached(&mut self, element: T) -> usize {
        match self.vacant.pop() {
            Some(node) => {
                self.nodes[node] = Node::detached(node, element);
                node
            }
            None => {
                let node = self.nodes.len();
                self.nodes.push(Node::detached(node, element));
                node
            }
        }
    }

    /// Like [`List::new_detached`], but reports a failed allocation instead
    /// of aborting. The element is dropped on failure.
    pub(crate) fn try_new_detached(&mut self, element: T) -> Result<usize, TryReserveError> {
        if self.vacant.is_empty() {
            self.nodes.try_reserve(1)?;
        }
        Ok(self.new_detached(element))
    }

    /// Attach a single detached node `node` to the list, between `prev` and `next`.
    ///
    /// `prev` and `next` must be adjacent nodes of this list (only checked in
    /// `#[cfg(debug_assertions)]`).
    pub(crate) fn attach_node(&mut self, prev: usize, next: usize, node: usize) {
        #[cfg(debug_assertions)]
        self.assert_adjacent(prev, next);
        self.connect(prev, node);
        self.connect(node, next);
        #[cfg(feature = "length")]
        {
            self.len += 1;
        }
    }

    /// Detach a single node `node` from the list, free its slot and return
    /// its element.
    ///
    /// # Panics
    ///
    /// Panics if `node` is the ghost node or a vacant slot.
    pub(crate) fn detach_node(&mut self, node: usize) -> T {
        assert_ne!(node, GHOST, "Cannot detach the ghost node");
        let (prev, next) = (self.nodes[node].prev, self.nodes[node].next);
        self.connect(prev, next);
        #[cfg(feature = "length")]
        {
            self.len -= 1;
        }
        let element = self.nodes[node].element.take();
        self.nodes[node].next = node;
        self.nodes[node].prev = node;
        self.vacant.push(node);
        match element {
            Some(element) => element,
            None => unreachable!("vacant node {} was linked", node),
        }
    }

    /// Move the range `front..=back` of the list to the position right before
    /// `to`.
    ///
    /// `to` must not be inside `front..=back`.
    pub(crate) fn move_nodes(&mut self, front: usize, back: usize, to: usize) {
        debug_assert!(to != front && to != back, "Cannot move nodes before themselves");
        let (prev, next) = (self.prev_node(front), self.next_node(back));
        self.connect(prev, next);
        let to_prev = self.prev_node(to);
        self.connect(to_prev, front);
        self.connect(back, to);
    }

    /// Once the last element is gone, drop the vacant slots and hand the
    /// arena back down to [`RETAINED_SLOTS`].
    fn release_if_empty(&mut self) {
        if self.nodes[GHOST].next == GHOST {
            self.nodes.truncate(1);
            self.nodes.shrink_to(RETAINED_SLOTS);
            self.vacant = Vec::new();
        }
    }

    pub(crate) fn move_node(&mut self, node: usize, to: usize) {
        self.move_nodes(node, node, to);
    }

    /// Swap the `next` and `prev` links of a single node. The list is only
    /// well-formed again once every node of the cycle has been flipped.
    pub(crate) fn flip_links(&mut self, node: usize) {
        let node = &mut self.nodes[node];
        std::mem::swap(&mut node.next, &mut node.prev);
    }

    #[cfg(debug_assertions)]
    fn assert_adjacent(&self, prev: usize, next: usize) {
        assert_eq!(self.nodes[prev].next, next);
        assert_eq!(self.nodes[next].prev, prev);
    }
}

impl<T> List<T> {
    /// Create an empty list: a lone ghost node linked to itself.
    #[inline]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::ghost()],
            vacant: Vec::new(),
            #[cfg(feature = "length")]
            len: 0,
        }
    }

    /// Like [`List::new`], but reports a failed allocation of the ghost node.
    pub fn try_new() -> Result<Self, TryReserveError> {
        let mut nodes = Vec::new();
        nodes.try_reserve(1)?;
        nodes.push(Node::ghost());
        Ok(Self {
            nodes,
            vacant: Vec::new(),
            #[cfg(feature = "length")]
            len: 0,
        })
    }

    /// Whether the ghost node is the only node. *O*(1).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.front_node() == GHOST
    }

    /// Whether the list holds exactly one element. *O*(1).
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list = List::new();
    /// assert!(!list.is_singular());
    /// list.push_back("emu");
    /// assert!(list.is_singular());
    /// list.push_back("gnu");
    /// assert!(!list.is_singular());
    /// ```
    #[inline]
    pub fn is_singular(&self) -> bool {
        !self.is_empty() && self.front_node() == self.back_node()
    }

    /// Number of elements. *O*(1) with the `length` feature.
    #[cfg(feature = "length")]
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of elements, counted by walking the list.
    #[cfg(not(feature = "length"))]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Drop every element, front to back, and release the arena.
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
        self.release_if_empty();
    }

    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.get(self.front_node())
    }

    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        let front = self.front_node();
        self.get_mut(front)
    }

    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.get(self.back_node())
    }

    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        let back = self.back_node();
        self.get_mut(back)
    }

    /// Insert `elt` before the first element. Amortized *O*(1).
    pub fn push_front(&mut self, elt: T) {
        self.cursor_start_mut().insert(elt);
    }

    /// Insert `elt` after the last element. Amortized *O*(1).
    pub fn push_back(&mut self, elt: T) {
        self.cursor_end_mut().insert(elt);
    }

    /// Like [`List::push_front`], but reports a failed allocation instead of
    /// aborting. The list is left as it was on error.
    pub fn try_push_front(&mut self, elt: T) -> Result<(), TryReserveError> {
        let node = self.try_new_detached(elt)?;
        let front = self.front_node();
        self.attach_node(GHOST, front, node);
        Ok(())
    }

    /// Like [`List::push_back`], but reports a failed allocation instead of
    /// aborting. The list is left as it was on error.
    pub fn try_push_back(&mut self, elt: T) -> Result<(), TryReserveError> {
        let node = self.try_new_detached(elt)?;
        let back = self.back_node();
        self.attach_node(back, GHOST, node);
        Ok(())
    }

    /// Take out the first element. *O*(1).
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter(["fox", "hen"]);
    /// assert_eq!(list.pop_front(), Some("fox"));
    /// assert_eq!(list.pop_back(), Some("hen"));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        let element = self.cursor_start_mut().remove();
        self.release_if_empty();
        element
    }

    /// Take out the last element. *O*(1).
    pub fn pop_back(&mut self) -> Option<T> {
        let element = self.cursor_end_mut().backspace();
        self.release_if_empty();
        element
    }

    /// A cursor at position `at`; `at == len` is the ghost node.
    ///
    /// # Panics
    ///
    /// Panics if `at > len`.
    pub fn cursor(&self, at: usize) -> Cursor<'_, T> {
        let mut cursor = self.cursor_start();
        if cursor.seek_to(at).is_err() {
            panic!("Cannot create cursor at a nonexistent index");
        }
        cursor
    }

    /// A cursor at the front, or at the ghost node of an empty list.
    pub fn cursor_start(&self) -> Cursor<'_, T> {
        Cursor::new(
            self,
            self.front_node(),
            #[cfg(feature = "length")]
            0,
        )
    }

    /// A cursor at the ghost node.
    pub fn cursor_end(&self) -> Cursor<'_, T> {
        Cursor::new(
            self,
            GHOST,
            #[cfg(feature = "length")]
            self.len,
        )
    }

    /// An editing cursor at position `at`; `at == len` is the ghost node.
    ///
    /// # Panics
    ///
    /// Panics if `at > len`.
    pub fn cursor_mut(&mut self, at: usize) -> CursorMut<'_, T> {
        let mut cursor = self.cursor_start_mut();
        if cursor.seek_to(at).is_err() {
            panic!("Cannot create cursor at a nonexistent index");
        }
        cursor
    }

    /// An editing cursor at the front, or at the ghost node of an empty list.
    pub fn cursor_start_mut(&mut self) -> CursorMut<'_, T> {
        let front = self.front_node();
        CursorMut::new(
            self,
            front,
            #[cfg(feature = "length")]
            0,
        )
    }

    /// An editing cursor at the ghost node.
    pub fn cursor_end_mut(&mut self) -> CursorMut<'_, T> {
        #[cfg(feature = "length")]
        let len = self.len;
        CursorMut::new(
            self,
            GHOST,
            #[cfg(feature = "length")]
            len,
        )
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }

    /// Empty the list through an iterator yielding its elements front to
    /// back. Whatever the iterator does not yield is dropped with it.
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain::new(self)
    }

    /// Move every element of `other` after the last element of `self`,
    /// leaving `other` empty.
    ///
    /// If `self` is empty the two lists just trade places, in *O*(1).
    /// Otherwise each list owns its arena, so the elements travel one at a
    /// time, *O*(*m*) for an `other` of length *m*: every one takes a slot
    /// in `self`, and the arena of `other` is released once it is empty.
    /// Nothing is cloned.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut birds = List::from_iter(["jay", "kea"]);
    /// let mut more = List::from_iter(["owl"]);
    /// birds.append(&mut more);
    /// assert!(more.is_empty());
    /// assert_eq!(Vec::from_iter(birds), ["jay", "kea", "owl"]);
    /// ```
    pub fn append(&mut self, other: &mut Self) {
        if self.is_empty() {
            std::mem::swap(self, other);
            return;
        }
        for elt in other.drain() {
            self.push_back(elt);
        }
    }

    /// Move every element of `other` before the first element of `self`,
    /// leaving `other` empty. *O*(1) if `self` is empty, *O*(*m*) otherwise.
    pub fn prepend(&mut self, other: &mut Self) {
        if self.is_empty() {
            std::mem::swap(self, other);
            return;
        }
        while let Some(elt) = other.pop_back() {
            self.push_front(elt);
        }
    }

    /// Keep the elements before position `at` and return the rest as a new
    /// list.
    ///
    /// # Panics
    ///
    /// Panics if `at > len`.
    pub fn split_off(&mut self, at: usize) -> List<T> {
        self.cursor_mut(at).split().unwrap_or_default()
    }

    /// Take out the element at position `at`.
    ///
    /// # Panics
    ///
    /// Panics if `at >= len`.
    pub fn remove(&mut self, at: usize) -> T {
        match self.cursor_mut(at).remove() {
            Some(elt) => elt,
            None => panic!("Cannot remove at an index outside of the list bounds"),
        }
    }

    /// Insert `elm` so that it ends up at position `at`.
    ///
    /// # Panics
    ///
    /// Panics if `at > len`.
    pub fn insert(&mut self, at: usize, elm: T) {
        self.cursor_mut(at).insert(elm);
    }

    /// Insert the elements of `other` so that its first one ends up at
    /// position `at`.
    ///
    /// # Panics
    ///
    /// Panics if `at > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 5]);
    /// list.splice_at(1, List::from_iter(2..5));
    /// assert_eq!(Vec::from_iter(list), [1, 2, 3, 4, 5]);
    /// ```
    pub fn splice_at(&mut self, at: usize, other: Self) {
        self.cursor_mut(at).splice(other);
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Node<T> {
    fn ghost() -> Self {
        Node {
            next: GHOST,
            prev: GHOST,
            element: None,
        }
    }

    /// A node linked to itself only, holding `element`.
    fn detached(slot: usize, element: T) -> Self {
        Node {
            next: slot,
            prev: slot,
            element: Some(element),
        }
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

// Ensure that `List` and its read-only iterators are covariant in their type parameters.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: List<&'static str>) -> List<&'a str> {
        x
    }
    fn b<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
    fn c<'a>(x: IntoIter<&'static str>) -> IntoIter<&'a str> {
        x
    }
}

#[cfg(test)]
impl<T> List<T> {
    /// Walks the cycle in both directions and checks that every link is
    /// mirrored, that both walks agree, and that the cached length matches.
    pub(crate) fn assert_well_formed(&self) {
        let mut forward = Vec::new();
        let mut node = self.front_node();
        while node != GHOST {
            assert_eq!(self.prev_node(self.next_node(node)), node);
            assert_eq!(self.next_node(self.prev_node(node)), node);
            assert!(self.get(node).is_some(), "linked node {} is vacant", node);
            forward.push(node);
            node = self.next_node(node);
        }
        let mut backward = Vec::new();
        let mut node = self.back_node();
        while node != GHOST {
            backward.push(node);
            node = self.prev_node(node);
        }
        backward.reverse();
        assert_eq!(forward, backward);
        assert!(self.get(GHOST).is_none());
        #[cfg(feature = "length")]
        assert_eq!(self.len, forward.len());
        assert_eq!(forward.len() + self.vacant.len() + 1, self.nodes.len());
    }
}

#[cfg(test)]
mod tests {
    use crate::list::List;
    use std::cell::RefCell;
    use std::iter::FromIterator;

    fn contents<T: Copy>(list: &List<T>) -> Vec<T> {
        list.assert_well_formed();
        list.iter().copied().collect()
    }

    #[test]
    fn list_create() {
        let mut list = List::<i32>::new();
        assert!(list.is_empty());
        assert!(!list.is_singular());
        assert_eq!((list.front(), list.back()), (None, None));
        list.push_back(1);
        assert!(list.is_singular());
        assert_eq!(list.pop_back(), Some(1));
        assert!(list.is_empty());
        assert_eq!(list.pop_back(), None);
        assert_eq!(list.pop_front(), None);
        assert!(List::<i32>::try_new().unwrap().is_empty());
        list.assert_well_formed();
    }

    #[test]
    fn list_drop_in_order() {
        struct Noisy<'a>(u8, &'a RefCell<Vec<u8>>);
        impl Drop for Noisy<'_> {
            fn drop(&mut self) {
                self.1.borrow_mut().push(self.0);
            }
        }
        let dropped = RefCell::new(Vec::new());
        let mut list = List::new();
        list.push_back(Noisy(2, &dropped));
        list.push_front(Noisy(1, &dropped));
        list.push_back(Noisy(3, &dropped));
        drop(list.remove(1));
        list.push_front(Noisy(0, &dropped));
        drop(list);
        // the slot of 2 was reused by 0, yet list order wins
        assert_eq!(*dropped.borrow(), [2, 0, 1, 3]);
    }

    #[test]
    fn list_push_pop_both_ends() {
        let mut list = List::new();
        for i in 0..4 {
            list.push_back(i);
            list.push_front(-i);
        }
        assert_eq!(contents(&list), [-3, -2, -1, 0, 0, 1, 2, 3]);
        assert_eq!(list.len(), 8);
        if let Some(x) = list.front_mut() {
            *x = -30;
        }
        if let Some(x) = list.back_mut() {
            *x = 30;
        }
        assert_eq!(list.pop_front(), Some(-30));
        assert_eq!(list.pop_back(), Some(30));
        assert!(list.try_push_front(-9).is_ok());
        assert!(list.try_push_back(9).is_ok());
        assert_eq!(contents(&list), [-9, -2, -1, 0, 0, 1, 2, 9]);
    }

    #[test]
    fn list_reuses_vacant_slots() {
        let mut list = List::from_iter(0..4);
        assert_eq!(list.pop_front(), Some(0));
        assert_eq!(list.pop_back(), Some(3));
        list.assert_well_formed();
        let slots = list.nodes.len();
        list.push_back(4);
        list.push_front(5);
        assert_eq!(list.nodes.len(), slots);
        assert_eq!(contents(&list), [5, 1, 2, 4]);

        list.clear();
        assert_eq!(list.nodes.len(), 1);
        list.assert_well_formed();
    }

    #[test]
    fn list_releases_arena_when_emptied() {
        let mut list = List::from_iter(0..100);
        for expected in 0..99 {
            assert_eq!(list.pop_front(), Some(expected));
        }
        assert_eq!(list.nodes.len(), 100);
        assert_eq!(list.pop_back(), Some(99));
        assert_eq!(list.nodes.len(), 1);
        assert!(list.vacant.is_empty());
        assert!(list.nodes.capacity() <= super::RETAINED_SLOTS);
        list.assert_well_formed();

        list.push_back(7);
        assert_eq!(list.nodes.len(), 2);
        assert_eq!(contents(&list), [7]);
    }

    #[test]
    fn list_append_into_empty_swaps() {
        let mut empty = List::new();
        let mut other = List::from_iter(0..5);
        let slots = other.nodes.len();
        empty.append(&mut other);
        assert_eq!(empty.nodes.len(), slots);
        assert_eq!(contents(&empty), [0, 1, 2, 3, 4]);
        assert!(other.is_empty());
        other.assert_well_formed();

        let mut front = List::new();
        front.prepend(&mut empty);
        assert_eq!(contents(&front), [0, 1, 2, 3, 4]);

        let mut more = List::from_iter(5..8);
        front.append(&mut more);
        assert_eq!(more.nodes.len(), 1);
        more.assert_well_formed();
        assert_eq!(contents(&front), [0, 1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn list_elements_mut() {
        let mut list = List::from_iter(vec![String::from("a"), String::from("b")]);
        let (front, back) = (list.front_node(), list.back_node());
        let (b, a) = list.elements_mut(back, front);
        b.push('!');
        std::mem::swap(a, b);
        assert_eq!(Vec::from_iter(list.iter().map(String::as_str)), ["b!", "a"]);
    }

    #[test]
    fn list_positional_edits() {
        let mut list = List::from_iter(0..6);
        list.insert(3, 30);
        list.insert(7, 70);
        list.insert(0, -1);
        assert_eq!(contents(&list), [-1, 0, 1, 2, 30, 3, 4, 5, 70]);
        assert_eq!(list.remove(4), 30);
        assert_eq!(list.remove(7), 70);
        assert_eq!(list.remove(0), -1);
        assert_eq!(contents(&list), [0, 1, 2, 3, 4, 5]);

        list.splice_at(6, List::from_iter(6..8));
        list.splice_at(0, List::from_iter(Some(-1)));
        list.splice_at(3, List::new());
        assert_eq!(contents(&list), [-1, 0, 1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    #[should_panic(expected = "Cannot create cursor at a nonexistent index")]
    fn list_remove_out_of_bounds() {
        let mut list = List::from_iter(0..3);
        list.remove(4);
    }

    #[test]
    #[should_panic(expected = "Cannot remove at an index outside of the list bounds")]
    fn list_remove_ghost() {
        let mut list = List::from_iter(0..3);
        list.remove(3);
    }

    #[test]
    fn list_split_append_prepend() {
        for len in 0..5 {
            for at in 0..=len {
                let mut list = List::from_iter(0..len);
                let mut tail = list.split_off(at);
                assert_eq!(contents(&list), Vec::from_iter(0..at));
                assert_eq!(contents(&tail), Vec::from_iter(at..len));

                let mut head = list.clone();
                list.append(&mut tail);
                assert!(tail.is_empty());
                assert_eq!(contents(&list), Vec::from_iter(0..len));

                let mut rest = list.split_off(at);
                rest.prepend(&mut head);
                assert!(head.is_empty());
                assert_eq!(contents(&rest), Vec::from_iter(0..len));
                assert_eq!(rest.len(), len);
            }
        }
    }
}
