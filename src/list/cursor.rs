use crate::list::{List, GHOST};
use std::fmt;

/// A read-only position inside a [`List`].
///
/// A list of length *n* has *n* + 1 positions: one per element, numbered
/// from 0, and the ghost node at position *n*. Plain moves stop at the
/// ghost node; the `_cyclic` moves step over it and wrap around.
///
/// # Examples
///
/// ```
/// use cyclic_queue::List;
/// use std::iter::FromIterator;
///
/// let list = List::from_iter(["ant", "bee", "cat"]);
///
/// let mut cursor = list.cursor_start();
/// assert_eq!(cursor.current(), Some(&"ant"));
/// assert!(cursor.move_prev().is_err()); // nothing before the front
///
/// cursor.move_to_end();
/// assert!(cursor.is_ghost());
/// assert_eq!(cursor.previous(), Some(&"cat"));
///
/// cursor.move_next_cyclic(); // wraps to the front
/// assert_eq!(cursor.current(), Some(&"ant"));
/// ```
pub struct Cursor<'a, T: 'a> {
    list: &'a List<T>,
    node: usize,
    #[cfg(feature = "length")]
    index: usize,
}

impl<'a, T: 'a> Clone for Cursor<'a, T> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            node: self.node,
            #[cfg(feature = "length")]
            index: self.index,
        }
    }
}

/// Two cursors are equal when they sit on the same node of the same list.
impl<'a, T: 'a> PartialEq for Cursor<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.list, other.list) && self.node == other.node
    }
}

impl<'a, T: 'a> Eq for Cursor<'a, T> {}

/// A position inside a [`List`] that can also edit the list around it.
///
/// The references it hands out borrow the cursor itself, so only one of
/// them can be alive at a time, and the list stays mutably borrowed for as
/// long as the cursor lives.
///
/// ```compile_fail
/// use cyclic_queue::List;
/// use std::iter::FromIterator;
///
/// let mut list = List::from_iter([1, 2, 3]);
/// let cursor = list.cursor_start_mut();
/// println!("{:?}", list.front());
/// println!("{:?}", cursor.current());
/// ```
pub struct CursorMut<'a, T: 'a> {
    list: &'a mut List<T>,
    node: usize,
    #[cfg(feature = "length")]
    index: usize,
}

macro_rules! impl_cursor {
    ($CURSOR:ident) => {
        impl<'a, T: 'a> $CURSOR<'a, T> {
            fn step_forward(&mut self, steps: usize) {
                for _ in 0..steps {
                    self.node = self.list.next_node(self.node);
                }
                #[cfg(feature = "length")]
                {
                    self.index += steps;
                }
            }

            fn step_backward(&mut self, steps: usize) {
                for _ in 0..steps {
                    self.node = self.list.prev_node(self.node);
                }
                #[cfg(feature = "length")]
                {
                    self.index -= steps;
                }
            }

            /// Position of the cursor; the ghost node is at `len`.
            #[cfg(feature = "length")]
            pub fn index(&self) -> usize {
                self.index
            }

            /// Whether the cursor sits on the ghost node.
            pub fn is_ghost(&self) -> bool {
                self.node == GHOST
            }

            pub fn is_empty(&self) -> bool {
                self.list.is_empty()
            }

            /// Step to the next position, or fail when standing on the ghost node.
            pub fn move_next(&mut self) -> Result<(), &'static str> {
                if self.is_ghost() {
                    return Err("cannot move past the ghost node");
                }
                self.step_forward(1);
                Ok(())
            }

            /// Step to the previous position, or fail when standing on the
            /// front node (or on the ghost node of an empty list).
            pub fn move_prev(&mut self) -> Result<(), &'static str> {
                if self.list.prev_node(self.node) == GHOST {
                    return Err("cannot move before the front node");
                }
                self.step_backward(1);
                Ok(())
            }

            /// Step to the next position, wrapping from the ghost node to
            /// the front. Does nothing on an empty list.
            pub fn move_next_cyclic(&mut self) {
                if self.is_ghost() {
                    self.move_to_start();
                } else {
                    self.step_forward(1);
                }
            }

            /// Step to the previous position, wrapping from the front to
            /// the ghost node. Does nothing on an empty list.
            pub fn move_prev_cyclic(&mut self) {
                if self.list.prev_node(self.node) == GHOST {
                    self.move_to_end();
                } else {
                    self.step_backward(1);
                }
            }

            /// Move `steps` positions forward, stopping at the ghost node.
            /// On failure returns how many steps were taken.
            pub fn seek_forward(&mut self, steps: usize) -> Result<(), usize> {
                for taken in 0..steps {
                    self.move_next().map_err(|_| taken)?;
                }
                Ok(())
            }

            /// Move `steps` positions backward, stopping at the front node.
            /// On failure returns how many steps were taken.
            pub fn seek_backward(&mut self, steps: usize) -> Result<(), usize> {
                for taken in 0..steps {
                    self.move_prev().map_err(|_| taken)?;
                }
                Ok(())
            }

            /// Jump to position `target`. A target past the ghost node is
            /// refused with the overshoot, and the cursor stays where it was.
            ///
            /// # Examples
            ///
            /// ```
            /// use cyclic_queue::List;
            /// use std::iter::FromIterator;
            ///
            /// let list = List::from_iter(10..20);
            /// let mut cursor = list.cursor_start();
            /// assert!(cursor.seek_to(7).is_ok());
            /// assert_eq!(cursor.current(), Some(&17));
            /// assert_eq!(cursor.seek_to(12), Err(2));
            /// assert_eq!(cursor.current(), Some(&17));
            /// ```
            #[cfg(feature = "length")]
            pub fn seek_to(&mut self, target: usize) -> Result<(), usize> {
                let len = self.list.len();
                if target > len {
                    return Err(target - len);
                }
                // Walk from whichever of the front, the ghost node and the
                // cursor itself is closest.
                let from_cursor = if target >= self.index {
                    target - self.index
                } else {
                    self.index - target
                };
                if target <= from_cursor && target <= len - target {
                    self.move_to_start();
                    self.step_forward(target);
                } else if len - target <= from_cursor {
                    self.move_to_end();
                    self.step_backward(len - target);
                } else if target >= self.index {
                    self.step_forward(from_cursor);
                } else {
                    self.step_backward(from_cursor);
                }
                Ok(())
            }

            /// Jump to position `target`. A target past the ghost node is
            /// refused with the overshoot, and the cursor stays where it was.
            #[cfg(not(feature = "length"))]
            pub fn seek_to(&mut self, target: usize) -> Result<(), usize> {
                let node = self.node;
                self.move_to_start();
                if let Err(taken) = self.seek_forward(target) {
                    self.node = node;
                    return Err(target - taken);
                }
                Ok(())
            }

            pub fn move_to_start(&mut self) {
                self.node = self.list.front_node();
                #[cfg(feature = "length")]
                {
                    self.index = 0;
                }
            }

            pub fn move_to_end(&mut self) {
                self.node = GHOST;
                #[cfg(feature = "length")]
                {
                    self.index = self.list.len();
                }
            }

            /// The element under the cursor, `None` on the ghost node.
            pub fn current(&self) -> Option<&T> {
                self.list.get(self.node)
            }

            /// The element before the cursor, `None` at the front.
            pub fn previous(&self) -> Option<&T> {
                self.list.get(self.list.prev_node(self.node))
            }
        }

        impl<'a, T: fmt::Debug + 'a> fmt::Debug for $CURSOR<'a, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let mut f = f.debug_struct(stringify!($CURSOR));
                f.field("current", &self.current());
                #[cfg(feature = "length")]
                f.field("index", &self.index);
                f.field("list", &self.list).finish()
            }
        }
    };
}

impl_cursor!(Cursor);
impl_cursor!(CursorMut);

impl<'a, T: 'a> Cursor<'a, T> {
    pub(crate) fn new(list: &'a List<T>, node: usize, #[cfg(feature = "length")] index: usize) -> Self {
        Self {
            list,
            node,
            #[cfg(feature = "length")]
            index,
        }
    }
}

impl<'a, T: 'a> CursorMut<'a, T> {
    pub(crate) fn new(
        list: &'a mut List<T>,
        node: usize,
        #[cfg(feature = "length")] index: usize,
    ) -> Self {
        Self {
            list,
            node,
            #[cfg(feature = "length")]
            index,
        }
    }

    /// The element under the cursor, mutably; `None` on the ghost node.
    pub fn current_mut(&mut self) -> Option<&mut T> {
        self.list.get_mut(self.node)
    }

    /// A read-only cursor at the same position, borrowing this one.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(
            self.list,
            self.node,
            #[cfg(feature = "length")]
            self.index,
        )
    }

    /// The whole list, read-only.
    pub fn view(&self) -> &List<T> {
        self.list
    }

    /// Insert `item` right before the cursor. The cursor keeps its node,
    /// which is now one position further.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter(["owl", "yak"]);
    /// let mut cursor = list.cursor_mut(1);
    /// cursor.insert("pig");
    /// assert_eq!(cursor.current(), Some(&"yak"));
    /// assert_eq!(cursor.previous(), Some(&"pig"));
    /// assert_eq!(Vec::from_iter(list), ["owl", "pig", "yak"]);
    /// ```
    pub fn insert(&mut self, item: T) {
        let node = self.list.new_detached(item);
        let prev = self.list.prev_node(self.node);
        self.list.attach_node(prev, self.node, node);
        #[cfg(feature = "length")]
        {
            self.index += 1;
        }
    }

    /// Take the element under the cursor out of the list; the cursor lands
    /// on the following node. `None` on the ghost node.
    pub fn remove(&mut self) -> Option<T> {
        if self.is_ghost() {
            return None;
        }
        let next = self.list.next_node(self.node);
        let element = self.list.detach_node(self.node);
        self.node = next;
        Some(element)
    }

    /// Take the element before the cursor out of the list; the cursor stays
    /// on its node. `None` at the front.
    pub fn backspace(&mut self) -> Option<T> {
        self.move_prev().ok()?;
        self.remove()
    }

    /// Cut the list at the cursor: the cursor's node and everything after
    /// it move to a new list, and the cursor ends on the ghost node.
    /// `None` if the cursor already sits on the ghost node.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter(1..=6);
    /// let tail = list.cursor_mut(4).split().unwrap();
    /// assert_eq!(Vec::from_iter(tail), [5, 6]);
    /// assert_eq!(Vec::from_iter(list), [1, 2, 3, 4]);
    /// ```
    pub fn split(&mut self) -> Option<List<T>> {
        if self.is_ghost() {
            return None;
        }
        let mut tail = List::new();
        while let Some(element) = self.remove() {
            tail.push_back(element);
        }
        Some(tail)
    }

    /// Insert every element of `other`, in order, right before the cursor.
    pub fn splice(&mut self, other: List<T>) {
        other.into_iter().for_each(|element| self.insert(element));
    }
}

#[cfg(test)]
mod tests {
    use crate::List;
    use std::iter::FromIterator;

    #[test]
    fn cursor_cyclic_moves() {
        let list = List::from_iter([1, 2, 3]);
        let mut cursor = list.cursor_start();
        cursor.move_prev_cyclic();
        assert!(cursor.is_ghost());
        assert_eq!(cursor.previous(), Some(&3));
        #[cfg(feature = "length")]
        assert_eq!(cursor.index(), 3);
        cursor.move_next_cyclic();
        assert_eq!(cursor.current(), Some(&1));
        assert_eq!(cursor, list.cursor(0));
        let copy = list.clone();
        assert_ne!(cursor, copy.cursor(0));

        let empty = List::<i32>::new();
        let mut cursor = empty.cursor_start();
        cursor.move_next_cyclic();
        cursor.move_prev_cyclic();
        assert!(cursor.is_ghost());
        assert!(cursor.move_next().is_err());
        assert!(cursor.move_prev().is_err());
    }

    #[test]
    fn cursor_seek() {
        let list = List::from_iter(0..10);
        let mut cursor = list.cursor_start();
        for &target in &[7, 2, 9, 10, 0, 5, 4, 6] {
            assert!(cursor.seek_to(target).is_ok());
            assert_eq!(cursor.current().copied(), (0..10).nth(target));
            #[cfg(feature = "length")]
            assert_eq!(cursor.index(), target);
        }
        assert_eq!(cursor.seek_to(11), Err(1));
        assert_eq!(cursor.current(), Some(&6));

        let mut cursor = list.cursor_start();
        assert_eq!(cursor.seek_forward(12), Err(10));
        assert!(cursor.is_ghost());
        assert_eq!(cursor.seek_backward(12), Err(10));
        assert_eq!(cursor.current(), Some(&0));
    }

    #[test]
    fn cursor_mut_edits() {
        let mut list = List::from_iter([1, 2, 3]);
        let mut cursor = list.cursor_start_mut();
        cursor.insert(0);
        assert_eq!(cursor.current(), Some(&1));
        if let Some(x) = cursor.current_mut() {
            *x = 10;
        }
        assert!(cursor.move_next().is_ok());
        assert_eq!(cursor.remove(), Some(2));
        assert_eq!(cursor.as_cursor().current(), Some(&3));
        assert_eq!(cursor.backspace(), Some(10));
        cursor.splice(List::from_iter([7, 8]));
        assert_eq!(cursor.current(), Some(&3));
        #[cfg(feature = "length")]
        assert_eq!(cursor.index(), 3);
        assert_eq!(cursor.view().len(), 4);
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![0, 7, 8, 3]);
        list.assert_well_formed();

        let mut cursor = list.cursor_start_mut();
        assert_eq!(cursor.backspace(), None);
        cursor.move_to_end();
        assert_eq!(cursor.remove(), None);
        assert!(cursor.split().is_none());
    }
}
