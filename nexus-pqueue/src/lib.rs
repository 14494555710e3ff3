//! Allocation-light binary heap priority queues.
//!
//! This crate provides priority queues meant to be embedded in larger systems
//! like schedulers, timer wheels and event loops. The queues hold small
//! copyable handles, not the data itself:
//!
//! ```text
//! Caller storage (arena, slab, array) - owns the data
//! Heap / PriorityQueue                - orders handles into it
//! ```
//!
//! # Engines
//!
//! | Type | Buffer | Capacity | Allocation |
//! |------|--------|----------|------------|
//! | [`StaticHeap`] | Borrowed `&mut [MaybeUninit<T>]` | Fixed | Never |
//! | [`InlineHeap`] | Inline `[MaybeUninit<T>; N]` | Fixed (`N`) | Never |
//! | [`PriorityQueue`] | Owned | Grows per [`Growth`] | On overflow only |
//!
//! All three run the same heap engine ([`Heap`]): O(log n) push and pop, O(1)
//! peek, O(1) swap.
//!
//! # Ordering
//!
//! A [`Compare`] relation decides what "top" means. `precedes(a, b)` returns
//! `true` if `a` is at least as prioritized as `b`: [`MinFirst`] (`<=`) for a
//! min-heap, [`MaxFirst`] (`>=`) for a max-heap, or any
//! `Fn(&T, &T) -> bool`.
//!
//! # Quick Start
//!
//! ```
//! use nexus_pqueue::{heap, StaticHeap};
//!
//! struct Timer {
//!     fire_at: u64,
//! }
//!
//! let timers = [Timer { fire_at: 30 }, Timer { fire_at: 10 }, Timer { fire_at: 20 }];
//!
//! // The heap holds indices into `timers`
//! let mut slots = heap::slots::<usize, 8>();
//! let mut pending = StaticHeap::from_slots(&mut slots, |a: &usize, b: &usize| {
//!     timers[*a].fire_at <= timers[*b].fire_at
//! });
//!
//! for idx in 0..timers.len() {
//!     pending.try_push(idx).unwrap();
//! }
//!
//! assert_eq!(pending.pop(), Some(1));
//! assert_eq!(pending.pop(), Some(2));
//! assert_eq!(pending.pop(), Some(0));
//! assert_eq!(pending.pop(), None);
//! ```
//!
//! # Failure Modes
//!
//! Pushing never panics and never loses the item:
//!
//! - [`Full`] / [`PushError::Full`]: the queue is at capacity and may not
//!   grow. Nothing changes.
//! - [`PushError::OutOfMemory`]: the queue tried to grow and the allocation
//!   failed. Buffer, length and capacity are exactly as before.
//!
//! Popping or peeking an empty queue returns `None`; emptiness is not an
//! error.
//!
//! # Threading
//!
//! The queues do no synchronization. Mutation takes `&mut self`; wrap a
//! queue in a lock to share it.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod heap;
pub mod order;
pub mod queue;

pub use error::{AllocError, Full, PushError};
pub use heap::{DrainSorted, Heap, InlineHeap, Slots, StaticHeap};
pub use order::{Compare, MaxFirst, MinFirst};
pub use queue::{Growth, PriorityQueue, PriorityQueueBuilder};
