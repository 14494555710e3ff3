//! Growable priority queue.
//!
//! [`PriorityQueue`] owns its slot buffer and runs the same heap engine as
//! [`StaticHeap`](crate::StaticHeap). When a push finds the buffer full it
//! consults its [`Growth`] policy: either reject the item, or grow the buffer
//! and retry. Growth is all-or-nothing. A failed allocation leaves the buffer,
//! length and capacity exactly as they were.
//!
//! Capacity never shrinks.
//!
//! # Example
//!
//! ```
//! use nexus_pqueue::{MinFirst, PriorityQueue};
//!
//! // Start with 4 slots, add 16 each time the queue fills up
//! let mut pq = PriorityQueue::new(16, 4, MinFirst).unwrap();
//!
//! for key in [5u32, 3, 8, 1, 9] {
//!     pq.try_push(key).unwrap();
//! }
//! assert_eq!(pq.capacity(), 20);
//! assert_eq!(pq.pop(), Some(1));
//! ```

use core::fmt;
use core::mem::MaybeUninit;

use crate::heap::{DrainSorted, Heap};
use crate::{AllocError, Compare, PushError};

/// Slot count used by [`PriorityQueueBuilder`] when none is given.
pub const DEFAULT_CAPACITY: usize = 16;

/// What a full [`PriorityQueue`] does on push.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Growth {
    /// Never grow; pushes past capacity fail with [`PushError::Full`].
    Fixed,
    /// Add this many slots per growth (`capacity += step`).
    ///
    /// A step of zero behaves like [`Growth::Fixed`].
    Step(usize),
    /// Double the slot count (at least one new slot).
    #[default]
    Double,
}

impl Growth {
    /// Maps an increment step to a policy; `0` disables growth.
    ///
    /// ```
    /// use nexus_pqueue::Growth;
    ///
    /// assert_eq!(Growth::from_step(0), Growth::Fixed);
    /// assert_eq!(Growth::from_step(16), Growth::Step(16));
    /// ```
    #[inline]
    pub const fn from_step(step: usize) -> Self {
        if step == 0 {
            Growth::Fixed
        } else {
            Growth::Step(step)
        }
    }

    /// Slots to add to a full buffer of `capacity` slots, or `None` if the
    /// policy does not grow.
    #[inline]
    pub const fn additional(self, capacity: usize) -> Option<usize> {
        match self {
            Growth::Fixed | Growth::Step(0) => None,
            Growth::Step(step) => Some(step),
            Growth::Double => Some(if capacity == 0 { 1 } else { capacity }),
        }
    }
}

/// Builder for [`PriorityQueue`].
///
/// ```
/// use nexus_pqueue::{Growth, MaxFirst, PriorityQueueBuilder};
///
/// let mut pq = PriorityQueueBuilder::new()
///     .capacity(2)
///     .growth(Growth::Double)
///     .build(MaxFirst)
///     .unwrap();
///
/// for key in [1u64, 7, 3] {
///     pq.try_push(key).unwrap();
/// }
/// assert_eq!(pq.capacity(), 4);
/// assert_eq!(pq.peek(), Some(7));
/// ```
#[derive(Clone, Debug)]
pub struct PriorityQueueBuilder {
    capacity: usize,
    growth: Growth,
}

impl Default for PriorityQueueBuilder {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            growth: Growth::default(),
        }
    }
}

impl PriorityQueueBuilder {
    /// Returns a builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial slot count. Default: [`DEFAULT_CAPACITY`].
    pub fn capacity(mut self, slots: usize) -> Self {
        self.capacity = slots;
        self
    }

    /// Growth policy. Default: [`Growth::Double`].
    pub fn growth(mut self, growth: Growth) -> Self {
        self.growth = growth;
        self
    }

    /// Additive growth by `step` slots; `0` disables growth.
    pub fn inc_step(self, step: usize) -> Self {
        self.growth(Growth::from_step(step))
    }

    /// Disables growth.
    pub fn fixed(self) -> Self {
        self.growth(Growth::Fixed)
    }

    /// Allocates the queue.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the initial buffer cannot be allocated.
    pub fn build<T: Copy, C: Compare<T>>(self, cmp: C) -> Result<PriorityQueue<T, C>, AllocError> {
        let slots = alloc_slots(self.capacity)?;
        Ok(PriorityQueue {
            heap: Heap::with_slots(slots, cmp),
            growth: self.growth,
        })
    }
}

/// A binary heap priority queue over an owned, growable buffer.
///
/// Holds item handles (`T: Copy`) ordered by the comparator `C`. Dropping
/// the queue frees the buffer, never the data the handles refer to.
pub struct PriorityQueue<T, C> {
    heap: Heap<T, C, Vec<MaybeUninit<T>>>,
    growth: Growth,
}

impl<T: Copy, C: Compare<T>> PriorityQueue<T, C> {
    /// Creates a queue with `capacity` slots that grows by `inc_step` slots
    /// whenever a push finds it full. An `inc_step` of `0` disables growth.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the initial buffer cannot be allocated.
    pub fn new(inc_step: usize, capacity: usize, cmp: C) -> Result<Self, AllocError> {
        PriorityQueueBuilder::default()
            .capacity(capacity)
            .inc_step(inc_step)
            .build(cmp)
    }

    /// Returns the number of slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.heap.capacity()
    }

    /// Returns `true` if every slot is occupied.
    ///
    /// The next push will grow the buffer or fail, depending on the policy.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.heap.is_full()
    }

    /// Returns the number of free slots before the next growth.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.heap.remaining()
    }

    /// Returns the top item without removing it.
    ///
    /// Returns `None` if the queue is empty.
    #[inline]
    pub fn peek(&self) -> Option<T> {
        self.heap.peek()
    }

    /// Pushes an item, growing the buffer if it is full and the policy
    /// allows.
    ///
    /// # Errors
    ///
    /// - [`PushError::Full`] if the queue is full and growth is disabled.
    /// - [`PushError::OutOfMemory`] if growing the buffer failed. The queue
    ///   keeps its previous buffer, length and capacity.
    ///
    /// Both variants hand the item back.
    pub fn try_push(&mut self, item: T) -> Result<(), PushError<T>> {
        if self.heap.is_full() {
            let Some(additional) = self.growth.additional(self.capacity()) else {
                return Err(PushError::Full(item));
            };
            if let Err(error) = self.grow(additional) {
                return Err(PushError::OutOfMemory { item, error });
            }
        }

        self.heap.try_push(item).map_err(PushError::from)
    }

    /// Removes and returns the top item.
    ///
    /// Returns `None`, leaving the queue untouched, if it is empty.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.heap.pop()
    }

    /// Adds at least `additional` free slots ahead of time.
    ///
    /// Does nothing if enough slots are already free.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the buffer cannot grow. The queue is left
    /// unchanged.
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), AllocError> {
        let free = self.remaining();
        if free >= additional {
            return Ok(());
        }
        self.grow(additional - free)
    }

    /// Returns the items in heap order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.heap.as_slice()
    }

    /// Iterates over the items in heap order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.heap.iter()
    }

    /// Returns an iterator that pops items in priority order.
    ///
    /// Items the iterator does not yield are removed when it is dropped.
    #[inline]
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, T, C, Vec<MaybeUninit<T>>> {
        self.heap.drain_sorted()
    }

    fn grow(&mut self, additional: usize) -> Result<(), AllocError> {
        let capacity = self.capacity();
        let slots = self.heap.slots_mut();

        // Reserve first so a failure leaves the buffer untouched.
        if let Err(source) = slots.try_reserve_exact(additional) {
            tracing::debug!(capacity, additional, "priority queue growth failed");
            return Err(AllocError::new(capacity.saturating_add(additional), source));
        }
        slots.resize(capacity + additional, MaybeUninit::uninit());

        tracing::debug!(capacity, additional, "priority queue grew");
        Ok(())
    }
}

impl<T, C> PriorityQueue<T, C> {
    /// Returns the number of items in the queue.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` if the queue holds no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Removes all items. Capacity is unchanged.
    #[inline]
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Returns the growth policy.
    #[inline]
    pub fn growth(&self) -> Growth {
        self.growth
    }

    /// Returns the comparator.
    #[inline]
    pub fn comparator(&self) -> &C {
        self.heap.comparator()
    }

    /// Exchanges the entire state of two queues in O(1): buffers (and the
    /// ownership of their allocations), lengths, capacities, comparators and
    /// growth policies.
    ///
    /// `&mut` exclusivity rules out swapping a queue with itself.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        self.heap.swap(&mut other.heap);
        core::mem::swap(&mut self.growth, &mut other.growth);
    }
}

impl<T, C> fmt::Debug for PriorityQueue<T, C>
where
    T: Copy + fmt::Debug,
    C: Compare<T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .field("growth", &self.growth)
            .field("items", &self.as_slice())
            .finish()
    }
}

impl<'q, T: Copy, C: Compare<T>> IntoIterator for &'q PriorityQueue<T, C> {
    type Item = &'q T;
    type IntoIter = core::slice::Iter<'q, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Allocates `count` uninitialized slots without aborting on failure.
fn alloc_slots<T: Copy>(count: usize) -> Result<Vec<MaybeUninit<T>>, AllocError> {
    let mut slots = Vec::new();
    slots
        .try_reserve_exact(count)
        .map_err(|source| AllocError::new(count, source))?;
    slots.resize(count, MaybeUninit::uninit());
    Ok(slots)
}
