use crate::list::List;

const INSERTION_SORT_THRESHOLD: usize = 8;

/// Sort the whole list with the strict comparison `less`. Stable.
pub(crate) fn merge_sort<T, F>(list: &mut List<T>, mut less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    if list.is_empty() || list.is_singular() {
        return;
    }
    let (start, end) = (list.front_node(), list.ghost_node());
    merge_sort_range(list, start, end, &mut less);
}

/// Find the middle node of `start..end` by a slow/fast walk, together
/// with the length of the range. The middle of a range of length `n` is
/// its `n / 2`-th node.
pub(crate) fn mid_of_range<T>(list: &List<T>, mut start: usize, end: usize) -> (usize, usize) {
    let mut mid = start;
    let mut len = 0;
    while start != end {
        len += 1;
        start = list.next_node(start);
        if start != end {
            len += 1;
            start = list.next_node(start);
            mid = list.next_node(mid);
        }
    }
    (mid, len)
}

/// Sort `start..end` and return the new first node of the range.
fn merge_sort_range<T, F>(list: &mut List<T>, mut start: usize, end: usize, less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let (mut mid, len) = mid_of_range(list, start, end);
    if len <= INSERTION_SORT_THRESHOLD {
        return insertion_sort_range(list, start, end, less);
    }

    if start != mid && list.next_node(start) != mid {
        start = merge_sort_range(list, start, mid, less);
    }
    if mid != end && list.next_node(mid) != end {
        mid = merge_sort_range(list, mid, end, less);
    }

    if start != mid && mid != end {
        start = merge_range(list, start, mid, end, less);
    }
    start
}

/// Merge the sorted runs `start..mid` and `mid..end` in place and return the
/// new first node of `start..end`.
///
/// On ties the node from `start..mid` stays in front.
pub(crate) fn merge_range<T, F>(
    list: &mut List<T>,
    mut start: usize,
    mid: usize,
    end: usize,
    less: &mut F,
) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    // The range is logically split into a merged run `start..mid` and an
    // unmerged run `mid..end`. Runs of unmerged nodes are moved, as a whole,
    // in front of the first merged node they are less than.
    let (mut merged, merged_back, mut to_merge) = (start, list.prev_node(mid), mid);
    // Once the back of the merged run <= the front of the unmerged run, the
    // rest is already in place.
    while to_merge != end && less(list.element(to_merge), list.element(merged_back)) {
        while merged != to_merge && !less(list.element(to_merge), list.element(merged)) {
            merged = list.next_node(merged);
        }
        if merged == to_merge {
            break;
        }

        // Every node of `to_merge..next_to_merge` is < `*merged`.
        let mut next_to_merge = list.next_node(to_merge);
        while next_to_merge != end && less(list.element(next_to_merge), list.element(merged)) {
            next_to_merge = list.next_node(next_to_merge);
        }
        if merged == start {
            start = to_merge;
        }
        let back = list.prev_node(next_to_merge);
        list.move_nodes(to_merge, back, merged);
        to_merge = next_to_merge;
    }
    start
}

fn insertion_sort_range<T, F>(list: &mut List<T>, mut start: usize, end: usize, less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    if start == end {
        return start;
    }
    let (mut sorted_back, mut to_sort) = (start, list.next_node(start));
    loop {
        // Skip the nodes that already extend the sorted run.
        while to_sort != end && !less(list.element(to_sort), list.element(sorted_back)) {
            sorted_back = to_sort;
            to_sort = list.next_node(to_sort);
        }
        if to_sort == end {
            break;
        }
        // First node of the sorted run that is > `*to_sort`.
        let mut sorted = start;
        while sorted != to_sort && !less(list.element(to_sort), list.element(sorted)) {
            sorted = list.next_node(sorted);
        }
        if sorted == start {
            start = to_sort;
        }
        let next = list.next_node(to_sort);
        list.move_node(std::mem::replace(&mut to_sort, next), sorted);
    }
    start
}

#[cfg(test)]
mod tests {
    use super::{mid_of_range, INSERTION_SORT_THRESHOLD};
    use crate::List;
    use std::iter::FromIterator;

    #[test]
    fn mid_of_ranges() {
        for n in 0..10 {
            let list = List::from_iter(0..n);
            let (mid, len) = mid_of_range(&list, list.front_node(), list.ghost_node());
            assert_eq!(len, n);
            assert_eq!(list.get(mid).copied(), (0..n).nth(n / 2));
        }
    }

    #[test]
    fn sort_short_and_long_runs() {
        for n in [0, 1, 2, INSERTION_SORT_THRESHOLD, INSERTION_SORT_THRESHOLD + 1, 100] {
            let mut list = List::from_iter((0..n).rev());
            list.sort();
            assert_eq!(Vec::from_iter(list.iter().copied()), Vec::from_iter(0..n));
            list.assert_well_formed();
        }
    }
}
