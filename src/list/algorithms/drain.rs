use crate::List;
use std::fmt;

/// A draining iterator over the elements of a `List`, created by
/// [`List::drain`]. Elements are yielded front to back; the ones left
/// when it is dropped are dropped with it.
pub struct Drain<'a, T: 'a> {
    list: &'a mut List<T>,
}

impl<'a, T: 'a> Drain<'a, T> {
    pub(crate) fn new(list: &'a mut List<T>) -> Self {
        Self { list }
    }
}

impl<T> Iterator for Drain<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    #[cfg(feature = "length")]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T> DoubleEndedIterator for Drain<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back()
    }
}

#[cfg(feature = "length")]
impl<T> ExactSizeIterator for Drain<'_, T> {}

impl<T> Drop for Drain<'_, T> {
    fn drop(&mut self) {
        self.list.clear();
    }
}

impl<T: fmt::Debug> fmt::Debug for Drain<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Drain").field(self.list).finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::List;
    use std::iter::FromIterator;

    #[test]
    fn drain_partially() {
        let mut list = List::from_iter(0..5);
        {
            let mut drain = list.drain();
            assert_eq!(drain.next(), Some(0));
            assert_eq!(drain.next_back(), Some(4));
        }
        assert!(list.is_empty());
        list.assert_well_formed();
        list.push_back(7);
        assert_eq!(list.front(), Some(&7));
    }
}
