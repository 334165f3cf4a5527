use crate::error::QueueError;
use crate::queue::{Element, Queue};

/// The operations of [`Queue`] on a queue that may be absent.
///
/// On `None`, size queries give 0, removals give `None`, insertions
/// report [`QueueError::MissingQueue`] and every other mutation does
/// nothing.
///
/// # Examples
///
/// ```
/// use cyclic_queue::{MaybeQueue, Queue, QueueError};
///
/// let mut absent: Option<Queue> = None;
/// assert_eq!(absent.size(), 0);
/// assert_eq!(absent.insert_tail("a"), Err(QueueError::MissingQueue));
/// assert!(absent.remove_head(None).is_none());
///
/// let mut present = Some(Queue::new());
/// present.insert_tail("a").unwrap();
/// assert_eq!(present.size(), 1);
/// present.free();
/// assert!(present.is_none());
/// ```
pub trait MaybeQueue {
    /// Release the queue, if any, leaving it absent.
    fn free(&mut self);
    fn insert_head(&mut self, value: &str) -> Result<(), QueueError>;
    fn insert_tail(&mut self, value: &str) -> Result<(), QueueError>;
    fn remove_head(&mut self, buf: Option<&mut [u8]>) -> Option<Element>;
    fn remove_tail(&mut self, buf: Option<&mut [u8]>) -> Option<Element>;
    fn size(&self) -> usize;
    /// An absent queue is empty.
    fn is_empty(&self) -> bool;
    fn is_singular(&self) -> bool;
    fn delete_mid(&mut self) -> bool;
    /// `false` on an absent queue.
    fn delete_duplicates(&mut self) -> bool;
    fn swap_pairs(&mut self);
    fn reverse(&mut self);
    fn reverse_k_group(&mut self, k: usize);
    fn sort(&mut self, descend: bool);
    fn filter_ascend(&mut self) -> usize;
    fn filter_descend(&mut self) -> usize;
}

impl MaybeQueue for Option<Queue> {
    fn free(&mut self) {
        if let Some(queue) = self.take() {
            queue.free();
        }
    }

    fn insert_head(&mut self, value: &str) -> Result<(), QueueError> {
        self.as_mut()
            .ok_or(QueueError::MissingQueue)?
            .insert_head(value)
    }

    fn insert_tail(&mut self, value: &str) -> Result<(), QueueError> {
        self.as_mut()
            .ok_or(QueueError::MissingQueue)?
            .insert_tail(value)
    }

    fn remove_head(&mut self, buf: Option<&mut [u8]>) -> Option<Element> {
        self.as_mut()?.remove_head(buf)
    }

    fn remove_tail(&mut self, buf: Option<&mut [u8]>) -> Option<Element> {
        self.as_mut()?.remove_tail(buf)
    }

    fn size(&self) -> usize {
        self.as_ref().map_or(0, Queue::size)
    }

    fn is_empty(&self) -> bool {
        self.as_ref().map_or(true, Queue::is_empty)
    }

    fn is_singular(&self) -> bool {
        self.as_ref().map_or(false, Queue::is_singular)
    }

    fn delete_mid(&mut self) -> bool {
        self.as_mut().map_or(false, Queue::delete_mid)
    }

    fn delete_duplicates(&mut self) -> bool {
        self.as_mut().map_or(false, Queue::delete_duplicates)
    }

    fn swap_pairs(&mut self) {
        if let Some(queue) = self {
            queue.swap_pairs();
        }
    }

    fn reverse(&mut self) {
        if let Some(queue) = self {
            queue.reverse();
        }
    }

    fn reverse_k_group(&mut self, k: usize) {
        if let Some(queue) = self {
            queue.reverse_k_group(k);
        }
    }

    fn sort(&mut self, descend: bool) {
        if let Some(queue) = self {
            queue.sort(descend);
        }
    }

    fn filter_ascend(&mut self) -> usize {
        self.as_mut().map_or(0, Queue::filter_ascend)
    }

    fn filter_descend(&mut self) -> usize {
        self.as_mut().map_or(0, Queue::filter_descend)
    }
}

#[cfg(test)]
mod tests {
    use super::MaybeQueue;
    use crate::{Queue, QueueError};
    use std::iter::FromIterator;

    #[test]
    fn absent_queue() {
        let mut queue: Option<Queue> = None;
        let mut buf = [0xff_u8; 4];
        assert_eq!(queue.insert_head("a"), Err(QueueError::MissingQueue));
        assert_eq!(queue.insert_tail("a"), Err(QueueError::MissingQueue));
        assert!(queue.remove_head(Some(&mut buf)).is_none());
        assert!(queue.remove_tail(None).is_none());
        assert_eq!(buf, [0xff; 4]);
        assert_eq!(queue.size(), 0);
        assert!(MaybeQueue::is_empty(&queue));
        assert!(!queue.is_singular());
        assert!(!queue.delete_mid());
        assert!(!queue.delete_duplicates());
        queue.swap_pairs();
        queue.reverse();
        queue.reverse_k_group(2);
        queue.sort(false);
        assert_eq!(queue.filter_ascend(), 0);
        assert_eq!(queue.filter_descend(), 0);
        queue.free();
        assert!(queue.is_none());
    }

    #[test]
    fn present_queue() {
        let mut queue = Some(Queue::from_iter(["c", "a", "b"]));
        queue.sort(false);
        queue.reverse_k_group(2);
        queue.swap_pairs();
        queue.reverse();
        assert_eq!(
            queue.as_ref().map(|q| q.values().collect::<Vec<_>>()),
            Some(vec!["c", "b", "a"])
        );
        assert!(queue.delete_mid());
        assert_eq!(queue.filter_descend(), 2);
        assert_eq!(queue.remove_tail(None).map(|e| e.into_value()), Some(String::from("a")));
        assert!(queue.is_singular());
        assert!(queue.delete_duplicates());
        queue.free();
        assert_eq!(queue.size(), 0);
    }
}
