//! Growable double-ended queue over a single power-of-two ring buffer.
//!
//! # Layout
//! [`RingBuffer`] keeps every element in one `Vec<Option<T>>` whose length (the
//! *capacity*) is always a power of two, never below 4.  Two cursors describe the live
//! run: `head` is the slot of the first element and `tail` is the slot the next
//! [`push`](RingBuffer::push) writes to.  Every index is wrapped with
//! `& (capacity - 1)`, so the power-of-two property is what keeps the arithmetic
//! correct; only growth and the shrink paths ever change the slot count.
//!
//! `head == tail` always means *empty*.  A write that makes the cursors collide doubles
//! the storage before returning, so the buffer is never observed full.
//!
//! # Vacant slots
//! Slots outside `[head, tail)` hold `None`.  Removal `take`s the value out of its slot,
//! so the buffer never keeps a stale element alive after handing it back.
//!
//! # Mid-sequence edits
//! [`remove`](RingBuffer::remove), [`remove_range`](RingBuffer::remove_range) and
//! [`splice`](RingBuffer::splice) always move the shorter side of the sequence (the
//! elements before the edit point or the ones after it), so an edit at either end is
//! O(1) in the number of moved elements and an edit in the middle costs at most half the
//! length.

use core::fmt;

use crate::error::RingBufferError;
use crate::shrink::ShrinkPolicy;

/// Smallest slot count a [`RingBuffer`] ever uses.
pub(crate) const MIN_CAPACITY: usize = 4;

// ─── RingBuffer ───────────────────────────────────────────────────────────────

/// A double-ended queue backed by one contiguous, power-of-two sized ring buffer.
///
/// * `push`/`unshift`/`pop`/`shift` are amortized O(1).
/// * Random access by logical index is O(1); negative indices count from the back.
/// * An optional *max capacity* turns the buffer into a sliding window: inserting past
///   the bound evicts from the opposite end.
/// * `remove`, `remove_range` and `splice` move only the shorter side of the sequence.
///
/// Invalid positions are reported with `None` and leave the buffer untouched.
///
/// ```
/// use ring_deque::RingBuffer;
///
/// let mut buf = RingBuffer::from(vec![1, 2, 3, 4]);
/// assert_eq!(buf.peek_at(-1), Some(&4));
/// assert_eq!(buf.remove(1), Some(2));
/// assert_eq!(buf.to_vec(), vec![1, 3, 4]);
/// ```
#[derive(Clone)]
pub struct RingBuffer<T> {
    slots: Vec<Option<T>>,
    head: usize,
    tail: usize,
    mask: usize,
    max_capacity: Option<usize>,
    shrink: ShrinkPolicy,
}

impl<T> RingBuffer<T> {
    /// Creates an empty buffer with the minimum capacity of 4 slots.
    pub fn new() -> Self {
        Self::with_slots(vacant_slots(MIN_CAPACITY), 0)
    }

    /// Creates an empty buffer that can hold `hint` elements without growing.
    ///
    /// # Panics
    /// Panics if no power of two above `hint` fits in `usize`.
    pub fn with_capacity(hint: usize) -> Self {
        match Self::try_with_capacity(hint) {
            Ok(buf) => buf,
            Err(err) => panic!("{err}"),
        }
    }

    /// Fallible counterpart of [`with_capacity`](RingBuffer::with_capacity).
    pub fn try_with_capacity(hint: usize) -> Result<Self, RingBufferError> {
        let capacity = capacity_for(hint)?;
        Ok(Self::with_slots(vacant_slots(capacity), 0))
    }

    /// Creates an empty buffer that never holds more than `max` elements.
    ///
    /// Once full, `push` evicts the front element and `unshift` evicts the back one.
    pub fn with_max_capacity(max: usize) -> Result<Self, RingBufferError> {
        Self::bounded(Vec::new(), max)
    }

    /// Bulk-loads `items` and bounds the buffer to `max` elements.
    ///
    /// If `items` holds more than `max` elements the oldest (front) ones are evicted, so
    /// the bound holds from construction on.
    pub fn bounded<I>(items: I, max: usize) -> Result<Self, RingBufferError>
    where
        I: IntoIterator<Item = T>,
    {
        if max == 0 {
            return Err(RingBufferError::ZeroMaxCapacity);
        }
        let mut buf = Self::try_from_vec(items.into_iter().collect())?;
        buf.max_capacity = Some(max);
        buf.evict_front_overflow();
        Ok(buf)
    }

    /// Replaces the shrink policy (builder style).
    pub fn with_shrink_policy(mut self, policy: ShrinkPolicy) -> Self {
        self.shrink = policy;
        self
    }

    fn try_from_vec(items: Vec<T>) -> Result<Self, RingBufferError> {
        let len = items.len();
        let capacity = capacity_for(len)?;
        let mut slots: Vec<Option<T>> = items.into_iter().map(Some).collect();
        slots.resize_with(capacity, || None);
        Ok(Self::with_slots(slots, len))
    }

    fn with_slots(slots: Vec<Option<T>>, tail: usize) -> Self {
        debug_assert!(slots.len().is_power_of_two() && slots.len() >= MIN_CAPACITY);
        debug_assert!(tail < slots.len());
        Self {
            mask: slots.len() - 1,
            slots,
            head: 0,
            tail,
            max_capacity: None,
            shrink: ShrinkPolicy::default(),
        }
    }

    /// Returns the number of elements in the buffer.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.tail.wrapping_sub(self.head) & self.mask
    }

    /// Returns `true` if the buffer contains no elements.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.head == self.tail
    }

    /// Returns the current slot count. Always a power of two, at least 4.
    ///
    /// One slot is always kept vacant, so at most `capacity() - 1` elements fit before
    /// the next insertion grows the storage.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the eviction bound, if one was configured.
    #[inline]
    pub fn max_capacity(&self) -> Option<usize> {
        self.max_capacity
    }

    /// Returns the active shrink policy.
    #[inline]
    pub fn shrink_policy(&self) -> ShrinkPolicy {
        self.shrink
    }

    #[inline(always)]
    fn wrap_add(&self, idx: usize, add: usize) -> usize {
        idx.wrapping_add(add) & self.mask
    }

    #[inline(always)]
    fn wrap_sub(&self, idx: usize, sub: usize) -> usize {
        idx.wrapping_sub(sub) & self.mask
    }

    /// Resolves a possibly negative logical index against `[-len, len)`.
    fn resolve(&self, index: isize) -> Option<usize> {
        let len = self.len();
        if index >= 0 {
            let i = index as usize;
            (i < len).then_some(i)
        } else {
            let back = index.unsigned_abs();
            (back <= len).then(|| len - back)
        }
    }

    /// Like [`resolve`](Self::resolve) but also accepts `len` itself (an insertion point).
    fn resolve_insert(&self, index: isize) -> Option<usize> {
        let len = self.len();
        if index >= 0 {
            let i = index as usize;
            (i <= len).then_some(i)
        } else {
            let back = index.unsigned_abs();
            (back <= len).then(|| len - back)
        }
    }

    // ─── access ───────────────────────────────────────────────────────────────

    /// Returns the front element, or `None` if empty.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.get(0)
    }

    /// Returns the element at logical `index`.
    ///
    /// Negative indices count from the back (`-1` is the last element).  Anything
    /// outside `[-len, len)` yields `None`.
    pub fn peek_at(&self, index: isize) -> Option<&T> {
        self.get(self.resolve(index)?)
    }

    /// Returns a shared reference to the element at logical `index`, or `None`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len() {
            self.slots[self.wrap_add(self.head, index)].as_ref()
        } else {
            None
        }
    }

    /// Returns an exclusive reference to the element at logical `index`, or `None`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.len() {
            let pos = self.wrap_add(self.head, index);
            self.slots[pos].as_mut()
        } else {
            None
        }
    }

    /// Returns the front element, or `None` if empty.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Returns the back element, or `None` if empty.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.len().checked_sub(1).and_then(|last| self.get(last))
    }

    fn iter(&self) -> impl Iterator<Item = &T> {
        (0..self.len()).filter_map(move |i| {
            let slot = self.slots[self.wrap_add(self.head, i)].as_ref();
            debug_assert!(slot.is_some(), "live slot was vacant");
            slot
        })
    }

    // ─── ends ─────────────────────────────────────────────────────────────────

    /// Appends `item` to the back and returns the new length.
    ///
    /// With a max capacity configured, the front element is evicted when the bound
    /// would be exceeded.
    pub fn push(&mut self, item: T) -> usize {
        self.write_back(item);
        if self.over_bound() {
            self.shift();
        }
        self.len()
    }

    /// Prepends `item` to the front and returns the new length.
    ///
    /// With a max capacity configured, the back element is evicted when the bound would
    /// be exceeded.
    pub fn unshift(&mut self, item: T) -> usize {
        self.write_front(item);
        if self.over_bound() {
            self.pop();
        }
        self.len()
    }

    /// Removes and returns the front element, or `None` if empty.
    pub fn shift(&mut self) -> Option<T> {
        let item = self.take_front()?;
        self.maybe_shrink();
        Some(item)
    }

    /// Removes and returns the back element, or `None` if empty.
    pub fn pop(&mut self) -> Option<T> {
        let item = self.take_back()?;
        self.maybe_shrink();
        Some(item)
    }

    #[inline]
    fn over_bound(&self) -> bool {
        self.max_capacity.is_some_and(|max| self.len() > max)
    }

    fn evict_front_overflow(&mut self) {
        while self.over_bound() {
            self.take_front();
        }
    }

    /// Writes at `tail`, growing if the buffer just filled up.
    fn write_back(&mut self, item: T) {
        self.slots[self.tail] = Some(item);
        self.tail = self.wrap_add(self.tail, 1);
        if self.tail == self.head {
            self.grow();
        }
    }

    /// Writes just before `head`, growing if the buffer just filled up.
    fn write_front(&mut self, item: T) {
        self.head = self.wrap_sub(self.head, 1);
        self.slots[self.head] = Some(item);
        if self.head == self.tail {
            self.grow();
        }
    }

    fn take_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let item = self.slots[self.head].take();
        self.head = self.wrap_add(self.head, 1);
        debug_assert!(item.is_some(), "live slot was vacant");
        item
    }

    fn take_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.tail = self.wrap_sub(self.tail, 1);
        let item = self.slots[self.tail].take();
        debug_assert!(item.is_some(), "live slot was vacant");
        item
    }

    // ─── storage ──────────────────────────────────────────────────────────────

    /// Doubles the slot count.
    ///
    /// Called right after a write made `head == tail`, i.e. every slot is live and the
    /// run starts at `head`.  Rotating the run to slot 0 leaves it contiguous, so the new
    /// slots can simply be appended behind it.
    #[inline(never)]
    fn grow(&mut self) {
        let old = self.slots.len();
        self.slots.rotate_left(self.head);
        self.slots.resize_with(old << 1, || None);
        self.head = 0;
        self.tail = old;
        self.mask = (old << 1) - 1;
        #[cfg(feature = "tracing")]
        tracing::trace!(from = old, to = old << 1, len = old, "ring buffer grew");
        self.debug_check();
    }

    fn maybe_shrink(&mut self) {
        if self
            .shrink
            .should_halve(self.slots.len(), self.head, self.tail)
        {
            self.halve();
        }
    }

    /// Drops the upper half of the slots. The live run must already lie below it.
    fn halve(&mut self) {
        let old = self.slots.len();
        let half = old >> 1;
        debug_assert!(self.head <= self.tail && self.tail < half);
        self.slots.truncate(half);
        self.slots.shrink_to_fit();
        self.mask = half - 1;
        #[cfg(feature = "tracing")]
        tracing::trace!(from = old, to = half, len = self.len(), "ring buffer halved");
        self.debug_check();
    }

    /// Compacts the live run to slot 0 and halves the storage as far as it will go.
    ///
    /// Works regardless of the configured [`ShrinkPolicy`].
    pub fn shrink_to_fit(&mut self) {
        let len = self.len();
        let old = self.slots.len();
        let mut capacity = old;
        while capacity > MIN_CAPACITY && len < capacity >> 1 {
            capacity >>= 1;
        }
        if capacity == old {
            return;
        }
        self.slots.rotate_left(self.head);
        self.slots.truncate(capacity);
        self.slots.shrink_to_fit();
        self.head = 0;
        self.tail = len;
        self.mask = capacity - 1;
        #[cfg(feature = "tracing")]
        tracing::trace!(from = old, to = capacity, len, "ring buffer shrunk to fit");
        self.debug_check();
    }

    #[inline(always)]
    fn debug_check(&self) {
        debug_assert!(self.slots.len().is_power_of_two());
        debug_assert!(self.slots.len() >= MIN_CAPACITY);
        debug_assert_eq!(self.mask, self.slots.len() - 1);
        debug_assert!(self.head < self.slots.len() && self.tail < self.slots.len());
    }

    // ─── mid-sequence edits ───────────────────────────────────────────────────

    /// Removes and returns the element at logical `index` (negative counts from the
    /// back), or `None` if `index` is outside `[-len, len)`.
    ///
    /// Elements on the shorter side of `index` slide one slot to close the gap.
    pub fn remove(&mut self, index: isize) -> Option<T> {
        let i = self.resolve(index)?;
        self.remove_at(i)
    }

    fn remove_at(&mut self, i: usize) -> Option<T> {
        let len = self.len();
        let mut gap = self.wrap_add(self.head, i);
        let item = self.slots[gap].take();
        if i < len / 2 {
            for _ in 0..i {
                let from = self.wrap_sub(gap, 1);
                self.slots.swap(from, gap);
                gap = from;
            }
            self.head = self.wrap_add(self.head, 1);
        } else {
            for _ in i + 1..len {
                let from = self.wrap_add(gap, 1);
                self.slots.swap(from, gap);
                gap = from;
            }
            self.tail = self.wrap_sub(self.tail, 1);
        }
        item
    }

    /// Removes up to `count` elements starting at logical `index` and returns them in
    /// order.
    ///
    /// `count` is clamped to the elements available after `index`.  Returns `None` if the
    /// buffer is empty, `index` is outside `[-len, len)`, or `count` is zero.
    pub fn remove_range(&mut self, index: isize, count: usize) -> Option<Vec<T>> {
        let i = self.resolve(index)?;
        if count == 0 {
            return None;
        }
        if count == 1 {
            return self.remove_at(i).map(|item| vec![item]);
        }
        let len = self.len();
        let count = count.min(len - i);
        if count == len {
            return Some(self.take_all());
        }

        let start = self.wrap_add(self.head, i);
        let mut removed = Vec::with_capacity(count);
        for k in 0..count {
            let pos = self.wrap_add(start, k);
            removed.extend(self.slots[pos].take());
        }

        let suffix = len - i - count;
        if i < suffix {
            // Slide the prefix toward the back, last element first.
            for k in (0..i).rev() {
                let from = self.wrap_add(self.head, k);
                let to = self.wrap_add(from, count);
                self.slots.swap(from, to);
            }
            self.head = self.wrap_add(self.head, count);
        } else {
            for k in i + count..len {
                let from = self.wrap_add(self.head, k);
                let to = self.wrap_sub(from, count);
                self.slots.swap(from, to);
            }
            self.tail = self.wrap_sub(self.tail, count);
        }
        self.maybe_shrink();
        Some(removed)
    }

    /// Array-style splice: removes up to `count` elements at `index`, inserts `items` in
    /// their place and returns the removed elements.
    ///
    /// With no items this is exactly [`remove_range`](RingBuffer::remove_range).  With
    /// items, `index` may be anywhere in `[-len, len]` (`len` appends) and `count` may be
    /// zero; any other `index` returns `None` without touching the buffer.
    ///
    /// The side of the sequence that is shorter relative to `index` is lifted out and
    /// rebuilt with `unshift` (front side) or `push` (back side), so the cost follows the
    /// shorter side plus the edit itself.  On a bounded buffer each rebuild step evicts
    /// like the call it makes: a front-side rebuild drops elements from the back, a
    /// back-side rebuild drops them from the front.
    pub fn splice<I>(&mut self, index: isize, count: usize, items: I) -> Option<Vec<T>>
    where
        I: IntoIterator<Item = T>,
    {
        let items: Vec<T> = items.into_iter().collect();
        if items.is_empty() {
            return self.remove_range(index, count);
        }
        let i = self.resolve_insert(index)?;
        let len = self.len();
        let count = count.min(len - i);

        let removed = if len == 0 || i < len / 2 {
            let prefix: Vec<T> = (0..i).filter_map(|_| self.take_front()).collect();
            let removed: Vec<T> = (0..count).filter_map(|_| self.take_front()).collect();
            for item in items.into_iter().rev() {
                self.unshift(item);
            }
            for item in prefix.into_iter().rev() {
                self.unshift(item);
            }
            removed
        } else {
            let mut suffix: Vec<T> = (0..len - i - count)
                .filter_map(|_| self.take_back())
                .collect();
            suffix.reverse();
            let mut removed: Vec<T> = (0..count).filter_map(|_| self.take_back()).collect();
            removed.reverse();
            for item in items {
                self.push(item);
            }
            for item in suffix {
                self.push(item);
            }
            removed
        };
        Some(removed)
    }

    // ─── bulk ─────────────────────────────────────────────────────────────────

    /// Drops every element and resets both cursors to slot 0. Capacity is kept.
    pub fn clear(&mut self) {
        self.slots.fill_with(|| None);
        self.head = 0;
        self.tail = 0;
    }

    fn take_all(&mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len());
        while let Some(item) = self.take_front() {
            out.push(item);
        }
        self.head = 0;
        self.tail = 0;
        out
    }

    /// Returns the elements front to back, consuming the buffer.
    pub fn into_vec(mut self) -> Vec<T> {
        self.take_all()
    }
}

impl<T: Clone> RingBuffer<T> {
    /// Clones the elements front to back into a `Vec`, leaving the buffer untouched.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

/// Slot count for `len` elements: the smallest power of two strictly above `len`, at
/// least [`MIN_CAPACITY`].
fn capacity_for(len: usize) -> Result<usize, RingBufferError> {
    len.checked_add(1)
        .and_then(usize::checked_next_power_of_two)
        .map(|capacity| capacity.max(MIN_CAPACITY))
        .ok_or(RingBufferError::CapacityOverflow { requested: len })
}

fn vacant_slots<T>(capacity: usize) -> Vec<Option<T>> {
    let mut slots = Vec::with_capacity(capacity);
    slots.resize_with(capacity, || None);
    slots
}

impl<T> Default for RingBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for RingBuffer<T> {
    /// Bulk-loads `items` with `head = 0` and `tail = items.len()`.
    ///
    /// # Panics
    /// Panics if no power of two above `items.len()` fits in `usize`.
    fn from(items: Vec<T>) -> Self {
        match Self::try_from_vec(items) {
            Ok(buf) => buf,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> FromIterator<T> for RingBuffer<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T> Extend<T> for RingBuffer<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for RingBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for RingBuffer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}
impl<T: Eq> Eq for RingBuffer<T> {}
