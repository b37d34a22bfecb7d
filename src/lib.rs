//! # Ring Deque
//!
//! A double-ended queue backed by a single contiguous ring buffer whose size is always a
//! power of two.
//!
//! ## Key Features
//!
//! * **Amortized O(1) at both ends:** `push`/`pop` at the back, `unshift`/`shift` at the front.
//! * **O(1) random access:** `peek_at` accepts negative indices counted from the back.
//! * **Sliding window:** an optional max capacity evicts from the opposite end on overflow.
//! * **Array-style editing:** `remove`, `remove_range` and `splice` move only the shorter
//!   side of the sequence.
//! * **Memory hygiene:** vacated slots are cleared immediately and a [`ShrinkPolicy`]
//!   decides when sparse storage is halved.
//!
//! ## Capacity
//!
//! * The slot count is a **power of two**, at least **4**, and one slot is always kept
//!   vacant so that `head == tail` unambiguously means *empty*.
//! * Storage only doubles on growth and only halves on shrink.
//!
//! ## Cargo features
//!
//! * `tracing`: emits `trace`-level events when storage grows or shrinks.
//!
//! ## Examples
//!
//! ### Deque
//!
//! ```rust
//! use ring_deque::RingBuffer;
//!
//! let mut d = RingBuffer::new();
//! d.push(2);
//! d.push(3);
//! d.unshift(1);
//!
//! assert_eq!(d.len(), 3);
//! assert_eq!(d.peek(), Some(&1));
//! assert_eq!(d.peek_at(-1), Some(&3));
//! assert_eq!(d.shift(), Some(1));
//! assert_eq!(d.pop(), Some(3));
//! ```
//!
//! ### Sliding window
//!
//! ```rust
//! use ring_deque::RingBuffer;
//!
//! let mut window = RingBuffer::bounded(vec![1, 2, 3], 3).unwrap();
//! window.push(4);
//!
//! assert_eq!(window.to_vec(), vec![2, 3, 4]);
//! ```
//!
//! ### Splice
//!
//! ```rust
//! use ring_deque::RingBuffer;
//!
//! let mut d: RingBuffer<i32> = RingBuffer::new();
//! assert_eq!(d.splice(0, 0, [1, 2, 3]), Some(vec![]));
//! assert_eq!(d.splice(1, 1, [20, 21]), Some(vec![2]));
//! assert_eq!(d.to_vec(), vec![1, 20, 21, 3]);
//! ```

// --- Module Declarations ---

pub mod error;
pub mod ring_buffer;
pub mod shrink;

// --- Re-exports ---

pub use error::RingBufferError;
pub use ring_buffer::RingBuffer;
pub use shrink::ShrinkPolicy;
