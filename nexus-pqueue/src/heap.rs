//! Fixed-capacity binary heap over a block of slots.
//!
//! The heap stores item handles in a contiguous slot buffer laid out as a
//! complete binary tree: node `i` has children `2i + 1` and `2i + 2` and
//! parent `(i - 1) / 2`. It never allocates; the buffer is either borrowed
//! from the caller ([`StaticHeap`]), held inline ([`InlineHeap`]), or owned
//! by a [`PriorityQueue`](crate::PriorityQueue) that grows it.
//!
//! # Example
//!
//! ```
//! use nexus_pqueue::{heap, MinFirst, StaticHeap};
//!
//! let mut slots = heap::slots::<u32, 4>();
//! let mut heap = StaticHeap::from_slots(&mut slots, MinFirst);
//!
//! for key in [3, 1, 4, 2] {
//!     heap.try_push(key).unwrap();
//! }
//! assert!(heap.try_push(5).is_err());
//!
//! assert_eq!(heap.pop(), Some(1));
//! assert_eq!(heap.peek(), Some(2));
//! ```

use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::mem::{self, MaybeUninit};

use crate::{Compare, Full};

mod sealed {
    pub trait Sealed {}
}

/// Backing buffer for a [`Heap`].
///
/// Sealed: the heap relies on the slot count staying fixed between its own
/// calls, so only the buffers provided by this crate qualify.
pub trait Slots<T>: sealed::Sealed {
    /// All slots, initialized or not.
    fn as_slots(&self) -> &[MaybeUninit<T>];

    /// All slots, initialized or not.
    fn as_slots_mut(&mut self) -> &mut [MaybeUninit<T>];
}

impl<T> sealed::Sealed for &mut [MaybeUninit<T>] {}

impl<T> Slots<T> for &mut [MaybeUninit<T>] {
    #[inline]
    fn as_slots(&self) -> &[MaybeUninit<T>] {
        self
    }

    #[inline]
    fn as_slots_mut(&mut self) -> &mut [MaybeUninit<T>] {
        self
    }
}

impl<T, const N: usize> sealed::Sealed for [MaybeUninit<T>; N] {}

impl<T, const N: usize> Slots<T> for [MaybeUninit<T>; N] {
    #[inline]
    fn as_slots(&self) -> &[MaybeUninit<T>] {
        self
    }

    #[inline]
    fn as_slots_mut(&mut self) -> &mut [MaybeUninit<T>] {
        self
    }
}

impl<T> sealed::Sealed for Vec<MaybeUninit<T>> {}

impl<T> Slots<T> for Vec<MaybeUninit<T>> {
    #[inline]
    fn as_slots(&self) -> &[MaybeUninit<T>] {
        self
    }

    #[inline]
    fn as_slots_mut(&mut self) -> &mut [MaybeUninit<T>] {
        self
    }
}

/// Returns `N` uninitialized slots for a [`StaticHeap`].
///
/// ```
/// use nexus_pqueue::{heap, MaxFirst, StaticHeap};
///
/// let mut slots = heap::slots::<u64, 32>();
/// let heap = StaticHeap::from_slots(&mut slots, MaxFirst);
/// assert_eq!(heap.capacity(), 32);
/// ```
#[inline]
pub const fn slots<T: Copy, const N: usize>() -> [MaybeUninit<T>; N] {
    [MaybeUninit::uninit(); N]
}

/// Heap over a caller-provided slot slice.
pub type StaticHeap<'a, T, C> = Heap<T, C, &'a mut [MaybeUninit<T>]>;

/// Heap with `N` slots held inline.
pub type InlineHeap<T, C, const N: usize> = Heap<T, C, [MaybeUninit<T>; N]>;

/// A fixed-capacity binary heap.
///
/// Items are handles (`T: Copy`): indices into caller-owned storage, shared
/// references, keys. The heap stores handles and never touches what they
/// point at; it only hands them to the comparator `C`.
///
/// Capacity is the slot count of the buffer `S` and never changes.
///
/// Use the [`StaticHeap`] and [`InlineHeap`] aliases to construct one.
pub struct Heap<T, C, S> {
    slots: S,
    len: usize,
    cmp: C,
    _marker: PhantomData<T>,
}

impl<'a, T: Copy, C: Compare<T>> Heap<T, C, &'a mut [MaybeUninit<T>]> {
    /// Creates an empty heap over `slots`.
    ///
    /// Capacity is `slots.len()`. Any previous contents of the slots are
    /// ignored.
    #[inline]
    pub fn from_slots(slots: &'a mut [MaybeUninit<T>], cmp: C) -> Self {
        Self::with_slots(slots, cmp)
    }
}

impl<T: Copy, C: Compare<T>, const N: usize> Heap<T, C, [MaybeUninit<T>; N]> {
    /// Creates an empty heap with `N` inline slots.
    ///
    /// ```
    /// use nexus_pqueue::{InlineHeap, MinFirst};
    ///
    /// let mut heap: InlineHeap<u32, MinFirst, 8> = InlineHeap::new(MinFirst);
    /// heap.try_push(3).unwrap();
    /// heap.try_push(1).unwrap();
    /// assert_eq!(heap.peek(), Some(1));
    /// ```
    #[inline]
    pub fn new(cmp: C) -> Self {
        Self::with_slots(slots(), cmp)
    }
}

impl<T, C, S> Heap<T, C, S> {
    /// Returns the number of items in the heap.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the heap holds no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes all items. Capacity is unchanged.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Returns the comparator.
    #[inline]
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Exchanges the entire state of two heaps: buffers, lengths,
    /// capacities and comparators.
    ///
    /// Borrowed and owned buffers move as handles. An [`InlineHeap`] carries
    /// its slots by value, so swapping two of them copies the slot arrays.
    ///
    /// `&mut` exclusivity rules out swapping a heap with itself.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }
}

impl<T: Copy, C: Compare<T>, S: Slots<T>> Heap<T, C, S> {
    pub(crate) fn with_slots(slots: S, cmp: C) -> Self {
        Self {
            slots,
            len: 0,
            cmp,
            _marker: PhantomData,
        }
    }

    /// Returns the number of slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.as_slots().len()
    }

    /// Returns `true` if every slot is occupied.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Returns the number of free slots.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.capacity() - self.len
    }

    /// Returns the top item without removing it.
    ///
    /// Returns `None` if the heap is empty.
    #[inline]
    pub fn peek(&self) -> Option<T> {
        self.as_slice().first().copied()
    }

    /// Pushes an item onto the heap.
    ///
    /// # Errors
    ///
    /// Returns `Err(Full(item))` if the heap is at capacity. The heap is
    /// left unchanged.
    pub fn try_push(&mut self, item: T) -> Result<(), Full<T>> {
        let pos = self.len;
        match self.slots.as_slots_mut().get_mut(pos) {
            Some(slot) => {
                slot.write(item);
            }
            None => return Err(Full(item)),
        }
        self.len = pos + 1;

        let (items, cmp) = self.parts_mut();
        sift_up(items, cmp, pos);
        Ok(())
    }

    /// Removes and returns the top item.
    ///
    /// Returns `None`, leaving the heap untouched, if it is empty.
    pub fn pop(&mut self) -> Option<T> {
        let top = self.peek()?;

        let last = self.len - 1;
        self.len = last;
        if last > 0 {
            // Safety: `last` was below the old length, so the slot is
            // initialized; shrinking `len` does not clear it.
            let tail = unsafe { self.slots.as_slots()[last].assume_init() };
            let (items, cmp) = self.parts_mut();
            sift_down(items, cmp, 0, tail);
        }

        Some(top)
    }

    /// Returns the items in heap order.
    ///
    /// The first element is the top; beyond that only the heap property
    /// holds, not a total order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        let slots = &self.slots.as_slots()[..self.len];
        // Safety: slots below `len` are initialized, and `MaybeUninit<T>`
        // has the same layout as `T`.
        unsafe { core::slice::from_raw_parts(slots.as_ptr().cast::<T>(), slots.len()) }
    }

    /// Iterates over the items in heap order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns an iterator that pops items in priority order.
    ///
    /// Items the iterator does not yield are removed when it is dropped.
    ///
    /// ```
    /// use nexus_pqueue::{InlineHeap, MaxFirst};
    ///
    /// let mut heap: InlineHeap<u8, MaxFirst, 4> = InlineHeap::new(MaxFirst);
    /// for key in [2, 9, 4] {
    ///     heap.try_push(key).unwrap();
    /// }
    /// let sorted: Vec<u8> = heap.drain_sorted().collect();
    /// assert_eq!(sorted, [9, 4, 2]);
    /// assert!(heap.is_empty());
    /// ```
    #[inline]
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, T, C, S> {
        DrainSorted { heap: self }
    }

    pub(crate) fn slots_mut(&mut self) -> &mut S {
        &mut self.slots
    }

    #[inline]
    fn parts_mut(&mut self) -> (&mut [T], &C) {
        let slots = &mut self.slots.as_slots_mut()[..self.len];
        // Safety: see `as_slice`.
        let items =
            unsafe { core::slice::from_raw_parts_mut(slots.as_mut_ptr().cast::<T>(), slots.len()) };
        (items, &self.cmp)
    }
}

impl<T, C, S> fmt::Debug for Heap<T, C, S>
where
    T: Copy + fmt::Debug,
    C: Compare<T>,
    S: Slots<T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Heap")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("items", &self.as_slice())
            .finish()
    }
}

impl<'h, T: Copy, C: Compare<T>, S: Slots<T>> IntoIterator for &'h Heap<T, C, S> {
    type Item = &'h T;
    type IntoIter = core::slice::Iter<'h, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator returned by [`Heap::drain_sorted`].
pub struct DrainSorted<'h, T: Copy, C: Compare<T>, S: Slots<T>> {
    heap: &'h mut Heap<T, C, S>,
}

impl<T: Copy, C: Compare<T>, S: Slots<T>> Iterator for DrainSorted<'_, T, C, S> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.heap.pop()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.heap.len, Some(self.heap.len))
    }
}

impl<T: Copy, C: Compare<T>, S: Slots<T>> ExactSizeIterator for DrainSorted<'_, T, C, S> {}

impl<T: Copy, C: Compare<T>, S: Slots<T>> FusedIterator for DrainSorted<'_, T, C, S> {}

impl<T: Copy, C: Compare<T>, S: Slots<T>> Drop for DrainSorted<'_, T, C, S> {
    fn drop(&mut self) {
        self.heap.clear();
    }
}

/// Moves the item at `pos` toward the root until its parent precedes it.
#[inline]
pub(crate) fn sift_up<T: Copy, C: Compare<T>>(items: &mut [T], cmp: &C, pos: usize) {
    let item = items[pos];
    let mut hole = pos;

    // The parent is only computed under the `hole > 0` guard.
    while hole > 0 {
        let parent = (hole - 1) / 2;
        if !cmp.precedes(&item, &items[parent]) {
            break;
        }
        items[hole] = items[parent];
        hole = parent;
    }

    items[hole] = item;
}

/// Places `item` at `pos` and moves it toward the leaves until it precedes
/// both children.
#[inline]
pub(crate) fn sift_down<T: Copy, C: Compare<T>>(items: &mut [T], cmp: &C, pos: usize, item: T) {
    let len = items.len();
    let mut hole = pos;

    loop {
        let left = 2 * hole + 1;
        if left >= len {
            break;
        }

        let right = left + 1;
        let child = if right < len && cmp.precedes(&items[right], &items[left]) {
            right
        } else {
            left
        };

        if cmp.precedes(&item, &items[child]) {
            break;
        }
        items[hole] = items[child];
        hole = child;
    }

    items[hole] = item;
}

/// Returns `true` if every node precedes its children.
#[cfg(test)]
pub(crate) fn holds_heap_property<T, C: Compare<T>>(items: &[T], cmp: &C) -> bool {
    (1..items.len()).all(|child| cmp.precedes(&items[(child - 1) / 2], &items[child]))
}
