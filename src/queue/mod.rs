//! A queue of owned strings on top of [`List`].
//!
//! Every operation of [`Queue`] is a composition of the list's node
//! surgery: nothing is ever copied between nodes, elements only change
//! their links. The absent queue of a C-style API (`NULL`) is modelled as
//! `Option<Queue>`; see [`MaybeQueue`].

use crate::error::QueueError;
use crate::list::List;
use crate::Iter;
use std::fmt;
use std::iter::FromIterator;

mod element;
mod group;
mod maybe;

pub use self::element::Element;
pub use self::group::{merge_all, QueueGroup};
pub use self::maybe::MaybeQueue;

/// A double-ended queue of strings.
///
/// # Examples
///
/// ```
/// use cyclic_queue::Queue;
///
/// let mut queue = Queue::new();
/// queue.insert_tail("b").unwrap();
/// queue.insert_head("a").unwrap();
/// queue.insert_tail("c").unwrap();
/// assert_eq!(queue.size(), 3);
///
/// let mut buf = [0_u8; 8];
/// let head = queue.remove_head(Some(&mut buf)).unwrap();
/// assert_eq!(head.value(), "a");
/// assert_eq!(&buf[..2], b"a\0");
///
/// queue.reverse();
/// assert_eq!(queue.values().collect::<Vec<_>>(), ["c", "b"]);
/// ```
#[derive(Default, Clone, PartialEq, Eq, Hash)]
pub struct Queue {
    list: List<Element>,
}

impl Queue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self { list: List::new() }
    }

    /// Create an empty queue, or return an error if it cannot be allocated.
    pub fn try_new() -> Result<Self, QueueError> {
        Ok(Self {
            list: List::try_new()?,
        })
    }

    /// Release the queue and every element in it.
    ///
    /// Dropping the queue releases every element, so this only consumes
    /// `self`.
    pub fn free(self) {}

    /// Insert a copy of `value` at the head of the queue.
    ///
    /// On error the queue is unchanged.
    pub fn insert_head(&mut self, value: &str) -> Result<(), QueueError> {
        let element = Element::try_new(value)?;
        self.list.try_push_front(element)?;
        Ok(())
    }

    /// Insert a copy of `value` at the tail of the queue.
    ///
    /// On error the queue is unchanged.
    pub fn insert_tail(&mut self, value: &str) -> Result<(), QueueError> {
        let element = Element::try_new(value)?;
        self.list.try_push_back(element)?;
        Ok(())
    }

    /// Remove the head element and hand it back, or return `None` if the
    /// queue is empty.
    ///
    /// If `buf` is given, the removed value is also copied into it, see
    /// [`Element::copy_to`].
    pub fn remove_head(&mut self, buf: Option<&mut [u8]>) -> Option<Element> {
        let element = self.list.pop_front()?;
        if let Some(buf) = buf {
            element.copy_to(buf);
        }
        Some(element)
    }

    /// Remove the tail element and hand it back, or return `None` if the
    /// queue is empty.
    ///
    /// If `buf` is given, the removed value is also copied into it, see
    /// [`Element::copy_to`].
    pub fn remove_tail(&mut self, buf: Option<&mut [u8]>) -> Option<Element> {
        let element = self.list.pop_back()?;
        if let Some(buf) = buf {
            element.copy_to(buf);
        }
        Some(element)
    }

    /// Count the elements by walking the queue.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    pub fn size(&self) -> usize {
        self.list.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn is_singular(&self) -> bool {
        self.list.is_singular()
    }

    /// Delete the middle element, the one at index `size / 2`.
    ///
    /// Returns `false` if the queue is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    /// use std::iter::FromIterator;
    ///
    /// let mut queue = Queue::from_iter(["a", "b", "c", "d"]);
    /// assert!(queue.delete_mid());
    /// assert_eq!(queue.values().collect::<Vec<_>>(), ["a", "b", "d"]);
    /// ```
    pub fn delete_mid(&mut self) -> bool {
        self.list.remove_middle().is_some()
    }

    /// Delete every element whose value occurs more than once in a row,
    /// keeping none of its copies. Meant for sorted queues.
    ///
    /// Returns `true` for an empty or singular queue; otherwise whether any
    /// element was deleted.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    /// use std::iter::FromIterator;
    ///
    /// let mut queue = Queue::from_iter(["a", "a", "b", "c", "c"]);
    /// assert!(queue.delete_duplicates());
    /// assert_eq!(queue.values().collect::<Vec<_>>(), ["b"]);
    /// ```
    pub fn delete_duplicates(&mut self) -> bool {
        if self.list.is_empty() || self.list.is_singular() {
            return true;
        }
        self.list.remove_duplicates()
    }

    /// Swap every two adjacent elements.
    pub fn swap_pairs(&mut self) {
        self.list.swap_pairs();
    }

    /// Reverse the queue in place.
    pub fn reverse(&mut self) {
        self.list.reverse();
    }

    /// Reverse the elements in consecutive groups of `k`; a trailing group
    /// shorter than `k` keeps its order.
    pub fn reverse_k_group(&mut self, k: usize) {
        self.list.reverse_k_group(k);
    }

    /// Stable sort, in non-decreasing order or, with `descend`, in
    /// non-increasing order.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    /// use std::iter::FromIterator;
    ///
    /// let mut queue = Queue::from_iter(["b", "c", "a"]);
    /// queue.sort(true);
    /// assert_eq!(queue.values().collect::<Vec<_>>(), ["c", "b", "a"]);
    /// ```
    pub fn sort(&mut self, descend: bool) {
        if descend {
            self.list.sort_by(|a, b| b.cmp(a));
        } else {
            self.list.sort();
        }
    }

    /// Merge the sorted queue `other` into this sorted queue, both sorted
    /// in the direction given by `descend`. `other` ends empty; on ties the
    /// elements of `self` come first.
    pub fn merge(&mut self, other: &mut Queue, descend: bool) {
        if descend {
            self.list.merge_by(&mut other.list, |a, b| a > b);
        } else {
            self.list.merge_by(&mut other.list, |a, b| a < b);
        }
    }

    /// Delete every element that has a strictly smaller element somewhere
    /// after it. Returns the number of elements remaining.
    ///
    /// Values compare with [`Element::cmp_numeric`], so integers keep their
    /// numeric order.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    /// use std::iter::FromIterator;
    ///
    /// let mut queue = Queue::from_iter(["5", "2", "13", "3", "8"]);
    /// assert_eq!(queue.filter_ascend(), 3);
    /// assert_eq!(queue.values().collect::<Vec<_>>(), ["2", "3", "8"]);
    /// ```
    pub fn filter_ascend(&mut self) -> usize {
        self.list.retain_running_by(Element::cmp_numeric)
    }

    /// Delete every element that has a strictly greater element somewhere
    /// after it. Returns the number of elements remaining.
    ///
    /// Values compare with [`Element::cmp_numeric`].
    pub fn filter_descend(&mut self) -> usize {
        self.list.retain_running_by(|a, b| b.cmp_numeric(a))
    }

    /// Iterate over the elements from head to tail.
    pub fn iter(&self) -> Iter<'_, Element> {
        self.list.iter()
    }

    /// Iterate over the values from head to tail.
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &str> + '_ {
        self.list.iter().map(Element::value)
    }

    pub fn as_list(&self) -> &List<Element> {
        &self.list
    }
}

/// Merge the sorted queues `first` and `second` into `result`, leaving both
/// empty.
///
/// Elements already in `result` must be sorted the same way and are merged
/// in too. On ties the elements of `result` come first, then those of
/// `first`, then those of `second`.
///
/// # Examples
///
/// ```
/// use cyclic_queue::{merge_two, Queue};
/// use std::iter::FromIterator;
///
/// let mut result = Queue::new();
/// let mut first = Queue::from_iter(["a", "c"]);
/// let mut second = Queue::from_iter(["b", "d"]);
/// merge_two(&mut result, &mut first, &mut second, false);
/// assert_eq!(result.values().collect::<Vec<_>>(), ["a", "b", "c", "d"]);
/// assert!(first.is_empty() && second.is_empty());
/// ```
pub fn merge_two(result: &mut Queue, first: &mut Queue, second: &mut Queue, descend: bool) {
    result.merge(first, descend);
    result.merge(second, descend);
}

impl fmt::Debug for Queue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.values()).finish()
    }
}

impl<'a> FromIterator<&'a str> for Queue {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self {
            list: iter.into_iter().map(Element::new).collect(),
        }
    }
}

impl From<List<Element>> for Queue {
    fn from(list: List<Element>) -> Self {
        Self { list }
    }
}

impl IntoIterator for Queue {
    type Item = Element;
    type IntoIter = crate::IntoIter<Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.into_iter()
    }
}
