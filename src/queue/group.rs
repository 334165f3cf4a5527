use crate::list::{List, GHOST};
use crate::queue::Queue;

/// An entry of a list of queues: a queue with its cached size and an id.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct QueueGroup {
    queue: Queue,
    size: usize,
    id: usize,
}

impl QueueGroup {
    /// Wrap `queue`, caching its current size.
    pub fn new(queue: Queue, id: usize) -> Self {
        let size = queue.size();
        Self { queue, size, id }
    }

    pub fn queue(&self) -> &Queue {
        &self.queue
    }

    /// Mutable access to the queue. The cached size is left as is until
    /// [`QueueGroup::sync_size`] is called.
    pub fn queue_mut(&mut self) -> &mut Queue {
        &mut self.queue
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn id(&self) -> usize {
        self.id
    }

    /// Recount the queue and cache the result.
    pub fn sync_size(&mut self) -> usize {
        self.size = self.queue.size();
        self.size
    }

    pub fn into_queue(self) -> Queue {
        self.queue
    }
}

/// Merge every queue of `groups` into the queue of the first group and
/// return the total number of elements.
///
/// All queues must be sorted in the direction given by `descend`. The
/// other groups are left with empty queues and a cached size of 0; the
/// first group caches the total. An empty `groups` gives 0.
///
/// # Complexity
///
/// The queues are folded one after another, so this operation computes in
/// *O*(*k* * *n*) time for *k* queues with *n* elements in total.
///
/// # Examples
///
/// ```
/// use cyclic_queue::{merge_all, List, Queue, QueueGroup};
/// use std::iter::FromIterator;
///
/// let mut groups = List::from_iter(vec![
///     QueueGroup::new(Queue::from_iter(["1", "4"]), 0),
///     QueueGroup::new(Queue::from_iter(["2"]), 1),
///     QueueGroup::new(Queue::from_iter(["3", "5"]), 2),
/// ]);
/// assert_eq!(merge_all(&mut groups, false), 5);
///
/// let first = groups.front().unwrap();
/// assert_eq!(first.queue().values().collect::<Vec<_>>(), ["1", "2", "3", "4", "5"]);
/// assert_eq!(first.size(), 5);
/// assert!(groups.iter().skip(1).all(|group| group.queue().is_empty()));
/// ```
pub fn merge_all(groups: &mut List<QueueGroup>, descend: bool) -> usize {
    if groups.is_empty() {
        return 0;
    }
    let first = groups.front_node();
    let mut total = groups.element(first).size;
    let mut node = groups.next_node(first);
    while node != GHOST {
        let (head, other) = groups.elements_mut(first, node);
        head.queue.merge(&mut other.queue, descend);
        total += other.size;
        other.size = 0;
        node = groups.next_node(node);
    }
    groups.element_mut(first).size = total;
    total
}
