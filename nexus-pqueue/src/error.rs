//! Error types for heap operations.
//!
//! Every failure hands control back to the caller with the queue untouched.
//! Push errors carry the rejected item so nothing is lost.

use core::fmt;
use std::collections::TryReserveError;

/// Error returned when a fixed-capacity heap is full.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Full<T>(pub T);

impl<T> Full<T> {
    /// Returns the item that could not be pushed.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> fmt::Display for Full<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "heap is full")
    }
}

impl<T: fmt::Debug> std::error::Error for Full<T> {}

/// Allocation of the slot buffer failed.
///
/// Returned by construction of a growable queue, and embedded in
/// [`PushError::OutOfMemory`] when growth fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocError {
    slots: usize,
    source: TryReserveError,
}

impl AllocError {
    pub(crate) fn new(slots: usize, source: TryReserveError) -> Self {
        Self { slots, source }
    }

    /// Total slot count the failed allocation asked for.
    pub fn requested_slots(&self) -> usize {
        self.slots
    }
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to allocate {} heap slots", self.slots)
    }
}

impl std::error::Error for AllocError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Error returned by [`PriorityQueue::try_push`](crate::PriorityQueue::try_push).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushError<T> {
    /// The queue is at capacity and growth is disabled.
    Full(T),
    /// The queue is at capacity and growing the buffer failed.
    ///
    /// The queue keeps its previous buffer, length and capacity.
    OutOfMemory {
        /// The item that could not be pushed.
        item: T,
        /// The failed allocation.
        error: AllocError,
    },
}

impl<T> PushError<T> {
    /// Returns the item that could not be pushed.
    pub fn into_inner(self) -> T {
        match self {
            PushError::Full(item) | PushError::OutOfMemory { item, .. } => item,
        }
    }

    /// Returns `true` for [`PushError::Full`].
    pub fn is_full(&self) -> bool {
        matches!(self, PushError::Full(_))
    }

    /// Returns `true` for [`PushError::OutOfMemory`].
    pub fn is_out_of_memory(&self) -> bool {
        matches!(self, PushError::OutOfMemory { .. })
    }
}

impl<T> From<Full<T>> for PushError<T> {
    fn from(full: Full<T>) -> Self {
        PushError::Full(full.0)
    }
}

impl<T> fmt::Display for PushError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PushError::Full(_) => write!(f, "priority queue is full"),
            PushError::OutOfMemory { error, .. } => {
                write!(f, "priority queue could not grow: {error}")
            }
        }
    }
}

impl<T: fmt::Debug> std::error::Error for PushError<T> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PushError::Full(_) => None,
            PushError::OutOfMemory { error, .. } => Some(error),
        }
    }
}
