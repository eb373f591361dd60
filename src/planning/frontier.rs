//! Bounded FIFO queue backing the breadth-first frontier.
//!
//! A circular buffer over one contiguous backing store. Capacity doubles
//! when the buffer fills and halves when occupancy drops below a quarter,
//! so enqueue/dequeue stay amortized O(1) while memory tracks the live
//! frontier size within a constant factor.

use crate::grid::Cell;

/// Capacity of a freshly created queue.
const INITIAL_CAPACITY: usize = 4;

/// FIFO queue of grid cells over a resizable circular buffer.
///
/// Invariants: `size <= capacity` at all times; `head` and `tail` are
/// valid offsets even at size 0 or size == capacity; a full buffer grows
/// before inserting, never overwrites.
#[derive(Debug, Clone)]
pub struct FrontierQueue {
    /// Backing store. Slots outside the live window hold stale cells.
    buf: Vec<Cell>,
    /// Offset of the oldest element.
    head: usize,
    /// Offset one past the newest element (mod capacity).
    tail: usize,
    /// Number of live elements.
    size: usize,
}

impl FrontierQueue {
    /// Create an empty queue with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    /// Create an empty queue with at least `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            buf: vec![(0, 0); capacity],
            head: 0,
            tail: 0,
            size: 0,
        }
    }

    /// Number of queued cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    /// True iff no cells are queued.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Append a cell at the tail.
    pub fn enqueue(&mut self, cell: Cell) {
        if self.size == self.capacity() {
            self.resize(2 * self.size);
        }
        self.buf[self.tail] = cell;
        self.tail = (self.tail + 1) % self.capacity();
        self.size += 1;
    }

    /// Remove and return the oldest cell.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty. An empty dequeue means the caller
    /// lost track of its frontier; returning a stale slot here would
    /// silently corrupt the search, so the violation is fatal.
    pub fn dequeue(&mut self) -> Cell {
        assert!(self.size > 0, "dequeue from empty frontier queue");
        // Shrink check runs before removal, at 25% occupancy.
        if self.size < self.capacity() / 4 {
            self.resize(self.capacity() / 2);
        }
        let cell = self.buf[self.head];
        self.head = (self.head + 1) % self.capacity();
        self.size -= 1;
        cell
    }

    /// Reallocate to `new_capacity`, unrolling the circular wraparound so
    /// the current head lands at index 0 of the fresh buffer.
    fn resize(&mut self, new_capacity: usize) {
        debug_assert!(self.size <= new_capacity);
        let mut buf = vec![(0, 0); new_capacity];
        for (i, slot) in buf.iter_mut().take(self.size).enumerate() {
            *slot = self.buf[(self.head + i) % self.capacity()];
        }
        self.buf = buf;
        self.head = 0;
        self.tail = self.size;
    }
}

impl Default for FrontierQueue {
    fn default() -> Self {
        Self::new()
    }
}
