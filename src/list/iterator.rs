use crate::list::{List, Node};
use std::fmt;
use std::iter::{FromIterator, FusedIterator};
use std::marker::PhantomData;
use std::ptr::NonNull;

/// The not yet visited nodes `start..end` of a double-ended walk.
#[derive(Clone, Copy)]
struct Span {
    start: usize,
    end: usize,
    #[cfg(feature = "length")]
    remaining: usize,
}

impl Span {
    fn of<T>(list: &List<T>) -> Self {
        Self {
            start: list.front_node(),
            end: list.ghost_node(),
            #[cfg(feature = "length")]
            remaining: list.len(),
        }
    }

    /// Hand out `start` and advance it with `next`.
    fn take_front(&mut self, next: impl FnOnce(usize) -> usize) -> Option<usize> {
        if self.start == self.end {
            return None;
        }
        let node = self.start;
        self.start = next(node);
        #[cfg(feature = "length")]
        {
            self.remaining -= 1;
        }
        Some(node)
    }

    /// Pull `end` back with `prev` and hand it out.
    fn take_back(&mut self, prev: impl FnOnce(usize) -> usize) -> Option<usize> {
        if self.start == self.end {
            return None;
        }
        self.end = prev(self.end);
        #[cfg(feature = "length")]
        {
            self.remaining -= 1;
        }
        Some(self.end)
    }

    #[cfg(feature = "length")]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

/// Borrowing iterator over a [`List`], front to back (or back to front
/// through [`DoubleEndedIterator`]).
///
/// ```compile_fail
/// use cyclic_queue::List;
/// use std::iter::FromIterator;
///
/// let mut list = List::from_iter(["elk"]);
/// let mut iter = list.iter();
/// list.push_back("yak"); // the list is borrowed by `iter`
/// println!("{:?}", iter.next());
/// ```
pub struct Iter<'a, T: 'a> {
    list: &'a List<T>,
    span: Span,
}

impl<'a, T: 'a> Iter<'a, T> {
    pub(crate) fn new(list: &'a List<T>) -> Self {
        Self {
            list,
            span: Span::of(list),
        }
    }
}

impl<'a, T: 'a> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            span: self.span,
        }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.clone().collect::<Vec<_>>()).finish()
    }
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let list: &'a List<T> = self.list;
        let node = self.span.take_front(|node| list.next_node(node))?;
        Some(list.element(node))
    }

    #[cfg(feature = "length")]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.span.size_hint()
    }

    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl<'a, T: 'a> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let list: &'a List<T> = self.list;
        let node = self.span.take_back(|node| list.prev_node(node))?;
        Some(list.element(node))
    }
}

#[cfg(feature = "length")]
impl<'a, T: 'a> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: 'a> FusedIterator for Iter<'a, T> {}

/// Iterator over mutable references to the elements of a [`List`].
///
/// Every element is handed out at most once, so the references never
/// alias; the links themselves cannot be changed through it.
///
/// ```compile_fail
/// use cyclic_queue::List;
/// use std::iter::FromIterator;
///
/// let mut list = List::from_iter([1, 2, 3]);
/// let mut iter = list.iter_mut();
/// println!("{:?}", list.len()); // the list is borrowed mutably by `iter`
/// println!("{:?}", iter.next());
/// ```
pub struct IterMut<'a, T: 'a> {
    nodes: NonNull<Node<T>>,
    span: Span,
    _marker: PhantomData<&'a mut List<T>>,
}

impl<'a, T: 'a> IterMut<'a, T> {
    pub(crate) fn new(list: &'a mut List<T>) -> Self {
        let span = Span::of(list);
        Self {
            nodes: list.nodes_ptr(),
            span,
            _marker: PhantomData,
        }
    }

    fn node(nodes: NonNull<Node<T>>, slot: usize) -> *mut Node<T> {
        // SAFETY: every slot reached through the links is inside the arena,
        // and the arena cannot be resized while the list is borrowed.
        unsafe { nodes.as_ptr().add(slot) }
    }

    /// Hand out the element of `slot` for the rest of the borrow.
    ///
    /// # Safety
    ///
    /// `slot` must be a linked, non-ghost node not handed out before.
    unsafe fn element(&mut self, slot: usize) -> Option<&'a mut T> {
        (*Self::node(self.nodes, slot)).element.as_mut()
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for IterMut<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_tuple("IterMut");
        let mut span = self.span;
        let nodes = self.nodes;
        // SAFETY: only the nodes not handed out yet are read.
        while let Some(slot) = span.take_front(|slot| unsafe { (*Self::node(nodes, slot)).next }) {
            if let Some(element) = unsafe { (*Self::node(nodes, slot)).element.as_ref() } {
                f.field(element);
            }
        }
        f.finish()
    }
}

impl<'a, T: 'a> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        let nodes = self.nodes;
        // SAFETY: reading the `next` link of a node never touches an
        // element already handed out.
        let slot = self
            .span
            .take_front(|slot| unsafe { (*Self::node(nodes, slot)).next })?;
        // SAFETY: `slot` just left the span, so it is handed out only once.
        unsafe { self.element(slot) }
    }

    #[cfg(feature = "length")]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.span.size_hint()
    }

    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl<'a, T: 'a> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let nodes = self.nodes;
        // SAFETY: same as in `next`.
        let slot = self
            .span
            .take_back(|slot| unsafe { (*Self::node(nodes, slot)).prev })?;
        unsafe { self.element(slot) }
    }
}

#[cfg(feature = "length")]
impl<'a, T: 'a> ExactSizeIterator for IterMut<'a, T> {}

impl<'a, T: 'a> FusedIterator for IterMut<'a, T> {}

unsafe impl<T: Send> Send for IterMut<'_, T> {}

unsafe impl<T: Sync> Sync for IterMut<'_, T> {}

/// Owning iterator over a [`List`], popping from either end.
pub struct IntoIter<T> {
    list: List<T>,
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.list).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    #[cfg(feature = "length")]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }

    fn last(mut self) -> Option<T> {
        self.list.pop_back()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.list.pop_back()
    }
}

#[cfg(feature = "length")]
impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut List<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for List<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

#[cfg(test)]
mod tests {
    use crate::List;
    use std::collections::VecDeque;
    use std::iter::FromIterator;

    /// Pull from both ends at random and compare with a `VecDeque` walk.
    #[test]
    fn iter_from_both_ends() {
        for len in 0..12 {
            let expected = Vec::from_iter(0..len);
            let mut list = List::from_iter(expected.iter().copied());

            let mut iter = list.iter();
            let mut model = expected.iter();
            loop {
                #[cfg(feature = "length")]
                assert_eq!(iter.len(), model.len());
                let (got, want) = if rand::random_bool(0.5) {
                    (iter.next(), model.next())
                } else {
                    (iter.next_back(), model.next_back())
                };
                assert_eq!(got, want);
                if got.is_none() {
                    break;
                }
            }
            assert_eq!(iter.next(), None);

            let mut deque = VecDeque::from(expected.clone());
            let mut iter = list.iter_mut();
            let mut model = deque.iter_mut();
            loop {
                let (got, want) = if rand::random_bool(0.5) {
                    (iter.next(), model.next())
                } else {
                    (iter.next_back(), model.next_back())
                };
                match (got, want) {
                    (Some(got), Some(want)) => {
                        assert_eq!(got, want);
                        *got += 100;
                        *want += 100;
                    }
                    (got, want) => {
                        assert_eq!((got, want), (None, None));
                        break;
                    }
                }
            }
            assert_eq!(Vec::from_iter(list.iter().copied()), Vec::from(deque));
        }
    }

    #[test]
    fn iter_after_removals() {
        let mut list = List::from_iter(0..6);
        list.remove(2);
        list.push_front(10);
        for x in &mut list {
            *x *= 2;
        }
        assert_eq!(Vec::from_iter(&list), [&20, &0, &2, &6, &8, &10]);
        assert_eq!(format!("{:?}", list.iter()), "Iter([20, 0, 2, 6, 8, 10])");
        assert_eq!(format!("{:?}", list.iter_mut()), "IterMut(20, 0, 2, 6, 8, 10)");
        assert_eq!(list.iter().last(), Some(&10));

        let mut into_iter = list.into_iter();
        assert_eq!(into_iter.next_back(), Some(10));
        assert_eq!(into_iter.next(), Some(20));
        assert_eq!(Vec::from_iter(into_iter.rev()), [8, 6, 2, 0]);
    }

    #[test]
    fn extend_with_copies() {
        let mut list = List::from_iter(vec![1]);
        list.extend(&[2, 3]);
        list.extend(vec![4]);
        assert_eq!(Vec::from_iter(list), [1, 2, 3, 4]);
    }
}
