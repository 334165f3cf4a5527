//! This crate provides a queue of strings built on a doubly-linked list with
//! owned nodes, implemented as a cyclic list around a ghost node.
//!
//! There are two layers:
//! - [`List`], the generic cyclic list, with cursors, iterators and the
//!   reordering algorithms (reverse, pair swap, group reverse, duplicate
//!   removal, monotonic filters, merge and merge sort);
//! - [`Queue`], a list of owned strings ([`Element`]s) with the operations of
//!   a C-style queue, including the k-way [`merge_all`] over a list of
//!   [`QueueGroup`]s and the absent queue through [`MaybeQueue`].
//!
//! Here is a quick example showing how the queue works.
//!
//! ```
//! use cyclic_queue::Queue;
//! use std::iter::FromIterator;
//!
//! let mut queue = Queue::from_iter(["gerbil", "bear", "dolphin", "bear"]);
//!
//! queue.sort(false);
//! assert_eq!(queue.values().collect::<Vec<_>>(), ["bear", "bear", "dolphin", "gerbil"]);
//!
//! queue.delete_duplicates(); // no copy of "bear" survives
//! assert_eq!(queue.values().collect::<Vec<_>>(), ["dolphin", "gerbil"]);
//!
//! let mut buf = [0_u8; 4];
//! let head = queue.remove_head(Some(&mut buf)).unwrap();
//! assert_eq!(head.value(), "dolphin");
//! assert_eq!(&buf, b"dol\0"); // truncated, NUL-terminated
//! ```
//!
//! # Memory Layout
//!
//! The nodes of a list live in an arena owned by the list and link to each
//! other by slot:
//! ```text
//!          ┌─────────────────────────────────────────────────────────────────────┐
//!          ↓                                                     (Ghost) slot 0  │
//!    ╔═══════════╗           ╔═══════════╗                        ┌───────────┐  │
//!    ║   next    ║ ────────→ ║   next    ║ ────────→ ┄┄ ────────→ │   next    │ ─┘
//!    ╟───────────╢           ╟───────────╢       slot ...         ├───────────┤
//! ┌─ ║   prev    ║ ←──────── ║   prev    ║ ←──────── ┄┄ ←──────── │   prev    │
//! │  ╟───────────╢           ╟───────────╢                        ├───────────┤
//! │  ║ payload T ║           ║ payload T ║                        ┊No payload ┊
//! │  ╚═══════════╝           ╚═══════════╝                        └╌╌╌╌╌╌╌╌╌╌╌┘
//! │      slot i                  slot j                                   ↑
//! └───────────────────────────────────────────────────────────────────────┘
//! ```
//! The `List` contains:
//! - the arena `nodes`, whose slot 0 is the ghost node;
//! - a stack of vacant slots, reused by later insertions;
//! - a length field `len` indicating the length of the list. It can be disabled by
//!   disabling the `length` feature in your `Cargo.toml`:
//! ```text
//! [dependencies]
//! cyclic_queue = { default-features = false }
//! ```
//!
//! Each node holds:
//! - the `next` slot of the next element (or the ghost node if it is the last
//!   element in the list);
//! - the `prev` slot of the previous element (or the ghost node if it is the
//!   first element in the list);
//! - the actual payload `T`, except the ghost node.
//!
//! Initially, the ghost node of an empty list links to itself both ways. As
//! elements are inserted into the list, `ghost.next` is the first element and
//! `ghost.prev` is the last element of the list.
//!
//! In convention, in a list with length *n*, the nodes are indexed by 0, 1, ...,
//! *n* - 1, and the ghost node is always indexed by *n*.
//!
//! # Iteration
//!
//! Iterating over a list is by the [`Iter`] and [`IterMut`] iterators. These are
//! double-ended iterators and iterate the list like an array (fused and non-cyclic).
//!
//! ```
//! use cyclic_queue::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3]);
//! let mut iter = list.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next_back(), Some(&3));
//! assert_eq!(iter.next(), Some(&2));
//! assert_eq!(iter.next(), None); // Fused and non-cyclic
//!
//! list.iter_mut().for_each(|item| *item *= 2);
//! assert_eq!(Vec::from_iter(list), vec![2, 4, 6]);
//! ```
//!
//! # Cursors
//!
//! The cursors [`Cursor`] and [`CursorMut`] move forward or backward over the
//! list. In a list with length *n*, there are *n* + 1 valid locations for the
//! cursor, the last one being the ghost node. [`CursorMut`] inserts, removes,
//! splits and splices at its position.
//!
//! ```
//! use cyclic_queue::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3, 4]);
//!
//! let mut cursor = list.cursor_start_mut();
//!
//! cursor.insert(5); // becomes [5, 1, 2, 3, 4], points to 1
//! assert_eq!(cursor.current(), Some(&1));
//!
//! assert!(cursor.seek_forward(2).is_ok());
//! assert_eq!(cursor.remove(), Some(3)); // becomes [5, 1, 2, 4], points to 4
//! assert_eq!(cursor.current(), Some(&4));
//!
//! assert_eq!(cursor.backspace(), Some(2)); // becomes [5, 1, 4], points to 4
//! assert_eq!(cursor.current(), Some(&4));
//!
//! assert_eq!(Vec::from_iter(list), vec![5, 1, 4]);
//! ```
//!
//! [`Cursor`]: crate::list::cursor::Cursor
//! [`CursorMut`]: crate::list::cursor::CursorMut

#[doc(inline)]
pub use error::QueueError;
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use list::List;
#[doc(inline)]
pub use queue::{merge_all, merge_two, Element, MaybeQueue, Queue, QueueGroup};

mod error;
pub mod list;
pub mod queue;
