use crate::list::{List, GHOST};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

pub mod drain;
pub(crate) mod sort;

use self::sort::{merge_range, merge_sort, mid_of_range};

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other)
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: PartialOrd> PartialOrd for List<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for List<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut len = 0_usize;
        for elt in self {
            elt.hash(state);
            len += 1;
        }
        len.hash(state);
    }
}

impl<T> List<T> {
    /// Returns `true` if the `List` contains an element equal to the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_back(0);
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }

    /// Reverse the list in place by flipping the links of every node,
    /// the ghost node included. No element is moved.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// list.reverse();
    /// assert_eq!(Vec::from_iter(list), vec![3, 2, 1]);
    /// ```
    pub fn reverse(&mut self) {
        let mut node = GHOST;
        loop {
            let next = self.next_node(node);
            self.flip_links(node);
            node = next;
            if node == GHOST {
                break;
            }
        }
    }

    /// Swap every two adjacent nodes. A trailing unpaired node stays in place.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter(1..=5);
    /// list.swap_pairs();
    /// assert_eq!(Vec::from_iter(list), vec![2, 1, 4, 3, 5]);
    /// ```
    pub fn swap_pairs(&mut self) {
        let mut anchor = GHOST;
        loop {
            let first = self.next_node(anchor);
            if first == GHOST {
                break;
            }
            let second = self.next_node(first);
            if second == GHOST {
                break;
            }
            self.move_node(second, first);
            anchor = first;
        }
    }

    /// Reverse the nodes in consecutive groups of `k`. A final group shorter
    /// than `k` keeps its order; `k <= 1` leaves the list untouched.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter(1..=8);
    /// list.reverse_k_group(3);
    /// assert_eq!(Vec::from_iter(list), vec![3, 2, 1, 6, 5, 4, 7, 8]);
    /// ```
    pub fn reverse_k_group(&mut self, k: usize) {
        if k <= 1 {
            return;
        }
        let mut anchor = GHOST;
        loop {
            let first = self.next_node(anchor);
            let mut probe = first;
            for _ in 0..k {
                if probe == GHOST {
                    return;
                }
                probe = self.next_node(probe);
            }
            // `first` sinks to the back of its group as the others are
            // pulled in front of the group one by one.
            for _ in 1..k {
                let node = self.next_node(first);
                let head = self.next_node(anchor);
                self.move_node(node, head);
            }
            anchor = first;
        }
    }

    /// Remove every element that is equal to one of its neighbours, so that
    /// no copy of a repeated value survives. On a sorted list this keeps
    /// exactly the values that occur once.
    ///
    /// Returns `true` if any element was removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 1, 2, 3, 3, 3, 4]);
    /// assert!(list.remove_duplicates());
    /// assert_eq!(Vec::from_iter(list), vec![2, 4]);
    /// ```
    pub fn remove_duplicates(&mut self) -> bool
    where
        T: PartialEq,
    {
        self.remove_duplicates_by(|a, b| a == b)
    }

    /// Like [`List::remove_duplicates`], with `same` deciding whether two
    /// adjacent elements are duplicates.
    pub fn remove_duplicates_by<F>(&mut self, mut same: F) -> bool
    where
        F: FnMut(&T, &T) -> bool,
    {
        let mut removed = false;
        let mut node = self.front_node();
        while node != GHOST {
            let mut run_end = self.next_node(node);
            let mut repeated = false;
            while run_end != GHOST && same(self.element(node), self.element(run_end)) {
                let next = self.next_node(run_end);
                self.detach_node(run_end);
                run_end = next;
                repeated = true;
            }
            if repeated {
                self.detach_node(node);
                removed = true;
            }
            node = run_end;
        }
        removed
    }

    /// Remove the middle element, the one at index `len / 2`, and return it,
    /// or `None` if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter(0..6);
    /// assert_eq!(list.remove_middle(), Some(3));
    /// assert_eq!(list.remove_middle(), Some(2));
    /// ```
    pub fn remove_middle(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let (mid, _) = mid_of_range(self, self.front_node(), GHOST);
        Some(self.detach_node(mid))
    }

    /// Keep only the elements that no element to their right beats, scanning
    /// from the back and comparing each element with the nearest kept one.
    /// An element is removed when `compare(element, kept)` is
    /// [`Ordering::Greater`].
    ///
    /// Returns the number of elements remaining.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    pub fn retain_running_by<F>(&mut self, mut compare: F) -> usize
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        if self.is_empty() {
            return 0;
        }
        let mut kept = self.back_node();
        let mut remaining = 1;
        let mut node = self.prev_node(kept);
        while node != GHOST {
            let prev = self.prev_node(node);
            if compare(self.element(node), self.element(kept)) == Ordering::Greater {
                self.detach_node(node);
            } else {
                kept = node;
                remaining += 1;
            }
            node = prev;
        }
        remaining
    }

    /// Remove every element that has a strictly smaller element somewhere to
    /// its right; the list becomes non-decreasing. Returns the number of
    /// elements remaining.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([5, 2, 13, 3, 8]);
    /// assert_eq!(list.retain_running_min(), 3);
    /// assert_eq!(Vec::from_iter(list), vec![2, 3, 8]);
    /// ```
    pub fn retain_running_min(&mut self) -> usize
    where
        T: Ord,
    {
        self.retain_running_by(Ord::cmp)
    }

    /// Remove every element that has a strictly greater element somewhere to
    /// its right; the list becomes non-increasing. Returns the number of
    /// elements remaining.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([5, 2, 13, 3, 8]);
    /// assert_eq!(list.retain_running_max(), 2);
    /// assert_eq!(Vec::from_iter(list), vec![13, 8]);
    /// ```
    pub fn retain_running_max(&mut self) -> usize
    where
        T: Ord,
    {
        self.retain_running_by(|a, b| b.cmp(a))
    }

    /// Sort the list.
    ///
    /// This sort is stable (i.e., does not reorder equal elements).
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n* * log(*n*)) time and
    /// *O*(log(*n*)) memory for the recursion.
    ///
    /// # Current Implementation
    ///
    /// The current algorithm is a top-down merge sort that only relinks
    /// nodes; short runs are finished by an insertion sort.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    /// use std::iter::FromIterator;
    /// let mut list = List::from_iter([5, 2, 4, 3, 1]);
    ///
    /// list.sort();
    ///
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 3, 4, 5]);
    /// ```
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        merge_sort(self, |a, b| a.lt(b));
    }

    /// Sort the list with a comparator function.
    ///
    /// This sort is stable (i.e., does not reorder equal elements).
    ///
    /// The comparator function must define a total ordering for the
    /// elements in the list. If the ordering is not total, the order
    /// of the elements is unspecified.
    ///
    /// For example, while [`f64`] doesn’t implement [`Ord`] because
    /// `NaN != NaN`, we can use `partial_cmp` as our sort function
    /// when we know the list doesn’t contain a `NaN`.
    /// ```
    /// use cyclic_queue::List;
    /// use std::iter::FromIterator;
    /// let mut floats = List::from_iter([5f64, 4.0, 1.0, 3.0, 2.0]);
    /// floats.sort_by(|a, b| a.partial_cmp(b).unwrap());
    /// assert_eq!(Vec::from_iter(floats), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    /// ```
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    /// use std::iter::FromIterator;
    /// let mut v = List::from_iter([5, 4, 1, 3, 2]);
    /// v.sort_by(|a, b| a.cmp(b));
    /// assert_eq!(Vec::from_iter(v.iter().copied()), vec![1, 2, 3, 4, 5]);
    ///
    /// // reverse sorting
    /// v.sort_by(|a, b| b.cmp(a));
    /// assert_eq!(Vec::from_iter(v.iter().copied()), vec![5, 4, 3, 2, 1]);
    /// ```
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        merge_sort(self, |a, b| compare(a, b) == Ordering::Less)
    }

    /// Sorts the list with a key extraction function.
    ///
    /// This sort is stable (i.e., does not reorder equal elements)
    /// and *O*(*m* \* *n* \* log(*n*)) worst-case, where the
    /// key function is *O*(*m*).
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    /// use std::iter::FromIterator;
    /// let mut v = List::from_iter([-5i32, 4, 1, -3, 2]);
    ///
    /// v.sort_by_key(|k| k.abs());
    /// assert_eq!(Vec::from_iter(v), vec![1, 2, -3, 4, -5]);
    /// ```
    pub fn sort_by_key<K, F>(&mut self, mut f: F)
    where
        F: FnMut(&T) -> K,
        K: Ord,
    {
        merge_sort(self, |a, b| f(a).lt(&f(b)));
    }

    /// Merge the sorted list `other` into this sorted list, leaving `other`
    /// empty. On ties the elements of `self` come first.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 4, 6]);
    /// let mut other = List::from_iter([2, 3, 7]);
    /// list.merge(&mut other);
    /// assert!(other.is_empty());
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 3, 4, 6, 7]);
    /// ```
    pub fn merge(&mut self, other: &mut Self)
    where
        T: Ord,
    {
        self.merge_by(other, |a, b| a.lt(b));
    }

    /// Like [`List::merge`], with `less` as the strict ordering both lists
    /// are sorted by.
    pub fn merge_by<F>(&mut self, other: &mut Self, mut less: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        let back = self.back_node();
        self.append(other);
        if back == GHOST {
            return;
        }
        let (front, mid) = (self.front_node(), self.next_node(back));
        if mid != GHOST {
            merge_range(self, front, mid, GHOST, &mut less);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::List;
    use std::iter::FromIterator;

    fn random_list(len: usize, max: i32) -> Vec<i32> {
        (0..len).map(|_| rand::random_range(0..max)).collect()
    }

    #[test]
    fn test_reverse() {
        for len in 0..6 {
            let mut list = List::from_iter(0..len);
            list.reverse();
            assert_eq!(Vec::from_iter(list.iter().copied()), Vec::from_iter((0..len).rev()));
            list.assert_well_formed();
            list.reverse();
            assert_eq!(list, List::from_iter(0..len));
        }
    }

    #[test]
    fn test_swap_pairs() {
        let mut list = List::from_iter(1..=4);
        list.swap_pairs();
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![2, 1, 4, 3]);
        list.assert_well_formed();

        let mut list = List::from_iter(Some(1));
        list.swap_pairs();
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![1]);

        let mut list = List::<i32>::new();
        list.swap_pairs();
        assert!(list.is_empty());
    }

    #[test]
    fn test_reverse_k_group() {
        for len in 0..12 {
            for k in 0..6 {
                let mut list = List::from_iter(0..len);
                list.reverse_k_group(k);
                let mut expected = Vec::from_iter(0..len);
                if k > 1 {
                    expected.chunks_exact_mut(k).for_each(|chunk| chunk.reverse());
                }
                assert_eq!(Vec::from_iter(list.iter().copied()), expected);
                list.assert_well_formed();
            }
        }
    }

    #[test]
    fn test_remove_duplicates() {
        let mut list = List::from_iter([1, 1, 2, 3, 3]);
        assert!(list.remove_duplicates());
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![2]);
        list.assert_well_formed();

        let mut list = List::from_iter([1, 2, 3]);
        assert!(!list.remove_duplicates());
        assert_eq!(list.len(), 3);

        let mut list = List::from_iter([4, 4, 4]);
        assert!(list.remove_duplicates());
        assert!(list.is_empty());
        list.assert_well_formed();

        let mut list = List::from_iter(["a", "A", "b"]);
        assert!(list.remove_duplicates_by(|a, b| a.eq_ignore_ascii_case(b)));
        assert_eq!(Vec::from_iter(list), vec!["b"]);
    }

    #[test]
    fn test_remove_duplicates_random() {
        for _ in 0..20 {
            let mut vec = random_list(rand::random_range(0..40), 10);
            vec.sort_unstable();
            let mut list = List::from_iter(vec.iter().copied());
            list.remove_duplicates();
            let expected: Vec<i32> = vec
                .iter()
                .copied()
                .filter(|x| vec.iter().filter(|y| *y == x).count() == 1)
                .collect();
            assert_eq!(Vec::from_iter(list.iter().copied()), expected);
            list.assert_well_formed();
        }
    }

    #[test]
    fn test_remove_middle() {
        let mut list = List::from_iter(0..5);
        assert_eq!(list.remove_middle(), Some(2));
        assert_eq!(list.remove_middle(), Some(3));
        assert_eq!(list.remove_middle(), Some(1));
        assert_eq!(list.remove_middle(), Some(4));
        assert_eq!(list.remove_middle(), Some(0));
        assert_eq!(list.remove_middle(), None);
        list.assert_well_formed();
    }

    #[test]
    fn test_retain_running() {
        let mut list = List::from_iter([5, 2, 13, 3, 8]);
        assert_eq!(list.retain_running_min(), 3);
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![2, 3, 8]);
        list.assert_well_formed();

        let mut list = List::from_iter([1, 3, 3, 2]);
        assert_eq!(list.retain_running_max(), 3);
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![3, 3, 2]);

        let mut list = List::<i32>::new();
        assert_eq!(list.retain_running_min(), 0);
        assert_eq!(list.retain_running_max(), 0);

        for _ in 0..20 {
            let vec = random_list(rand::random_range(1..30), 20);
            let mut list = List::from_iter(vec.iter().copied());
            let remaining = list.retain_running_min();
            let expected: Vec<i32> = (0..vec.len())
                .filter(|&i| vec[i + 1..].iter().all(|x| *x >= vec[i]))
                .map(|i| vec[i])
                .collect();
            assert_eq!(remaining, expected.len());
            assert_eq!(Vec::from_iter(list.iter().copied()), expected);
            list.assert_well_formed();
        }
    }

    #[test]
    fn test_sort_stable() {
        for _ in 0..20 {
            let len = rand::random_range(0..200);
            let vec: Vec<(i32, usize)> = random_list(len, 16).into_iter().zip(0..).collect();
            let mut list = List::from_iter(vec.iter().copied());
            list.sort_by_key(|&(key, _)| key);
            let mut expected = vec.clone();
            expected.sort_by_key(|&(key, _)| key);
            assert_eq!(Vec::from_iter(list.iter().copied()), expected);
            list.assert_well_formed();

            list.sort_by(|a, b| b.0.cmp(&a.0));
            expected.sort_by(|a, b| b.0.cmp(&a.0));
            assert_eq!(Vec::from_iter(list.iter().copied()), expected);
            list.assert_well_formed();
        }
    }

    #[test]
    fn test_merge() {
        for _ in 0..20 {
            let mut a = random_list(rand::random_range(0..30), 50);
            let mut b = random_list(rand::random_range(0..30), 50);
            a.sort_unstable();
            b.sort_unstable();
            let mut list = List::from_iter(a.iter().copied());
            let mut other = List::from_iter(b.iter().copied());
            list.merge(&mut other);
            assert!(other.is_empty());
            let mut expected = [a, b].concat();
            expected.sort_unstable();
            assert_eq!(Vec::from_iter(list.iter().copied()), expected);
            list.assert_well_formed();
            other.assert_well_formed();
        }
    }

    #[test]
    fn test_merge_ties_keep_self_first() {
        let mut list = List::from_iter([(1, 'a'), (2, 'a')]);
        let mut other = List::from_iter([(1, 'b'), (2, 'b')]);
        list.merge_by(&mut other, |x, y| x.0 < y.0);
        assert_eq!(
            Vec::from_iter(list),
            vec![(1, 'a'), (1, 'b'), (2, 'a'), (2, 'b')]
        );
    }
}
