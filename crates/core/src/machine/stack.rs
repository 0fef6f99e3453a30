//! Stack-window bookkeeping.
//!
//! The stack is a fixed-capacity, downward-growing window at the high end of
//! machine memory. This module keeps the window's bookkeeping as plain
//! integer indices into the owned memory buffer, with every access validated
//! against the window bounds before any read or write; the original design's
//! pointer arithmetic for boundary math does not survive here.

use crate::common::Fault;
use crate::memory::WordBuffer;

/// Bookkeeping for the downward-growing stack window.
///
/// The window occupies the inclusive index range `[end_index, first_index]`
/// of machine memory. `first_index` is the fixed bottom boundary where the
/// first push lands; `top` tracks the current top-of-stack cell and equals
/// `first_index` while the stack is empty. Invariant: `0 <= depth <= capacity`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StackWindow {
    first_index: usize,
    end_index: usize,
    top: usize,
    depth: usize,
}

impl StackWindow {
    /// Creates an empty window whose bottom cell is `first_index` and which
    /// may grow downward through `capacity` words.
    ///
    /// # Panics
    ///
    /// Panics if the window would extend below memory index 0, i.e. when
    /// `capacity > first_index + 1`.
    pub fn new(first_index: usize, capacity: usize) -> Self {
        assert!(
            capacity <= first_index + 1,
            "stack capacity {capacity} does not fit below index {first_index}"
        );
        Self {
            first_index,
            end_index: first_index + 1 - capacity,
            top: first_index,
            depth: 0,
        }
    }

    /// Index one past the bottom boundary; fixed for the machine's lifetime.
    pub const fn first_index(&self) -> usize {
        self.first_index
    }

    /// Lowest index the stack may occupy; everything below is code region.
    pub const fn end_index(&self) -> usize {
        self.end_index
    }

    /// Index of the current top-of-stack word.
    pub const fn top(&self) -> usize {
        self.top
    }

    /// Number of words currently pushed.
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Total window capacity in words.
    pub const fn capacity(&self) -> usize {
        self.first_index + 1 - self.end_index
    }

    /// Returns `true` when no words are pushed.
    pub const fn is_empty(&self) -> bool {
        self.depth == 0
    }

    /// Pushes one word.
    ///
    /// The first push into an empty stack writes at the bottom boundary
    /// without moving `top`; every later push decrements `top` first.
    ///
    /// # Errors
    ///
    /// [`Fault::InvalidStackOperation`] when the stack is at capacity.
    pub fn push(&mut self, memory: &mut WordBuffer, value: i32) -> Result<(), Fault> {
        if self.depth == self.capacity() {
            return Err(Fault::InvalidStackOperation);
        }
        if self.depth != 0 {
            self.top -= 1;
        }
        memory.set(self.top, value);
        self.depth += 1;
        Ok(())
    }

    /// Pops the top word, zeroing the vacated cell.
    ///
    /// `top` moves back up unless the stack becomes empty, in which case it
    /// already sits at the bottom boundary.
    ///
    /// # Errors
    ///
    /// [`Fault::InvalidStackOperation`] when the stack is empty.
    pub fn pop(&mut self, memory: &mut WordBuffer) -> Result<i32, Fault> {
        if self.depth == 0 {
            return Err(Fault::InvalidStackOperation);
        }
        let value = memory.get(self.top).unwrap_or(0);
        memory.set(self.top, 0);
        self.depth -= 1;
        if self.depth != 0 {
            self.top += 1;
        }
        Ok(value)
    }

    /// Resolves a LOAD/STORE effective address `top + base + offset`.
    ///
    /// Valid only when the stack is non-empty and the address stays inside
    /// the occupied range `[top, first_index]`; the arithmetic is done at
    /// 64-bit width so overflowing operand combinations fault instead of
    /// wrapping into the window.
    ///
    /// # Errors
    ///
    /// [`Fault::InvalidStackOperation`] on an empty stack or an address
    /// outside the window.
    pub fn effective_index(&self, base: i32, offset: i32) -> Result<usize, Fault> {
        let address = self.top as i64 + i64::from(base) + i64::from(offset);
        if address < self.top as i64 || address > self.first_index as i64 {
            return Err(Fault::InvalidStackOperation);
        }
        if self.depth == 0 {
            return Err(Fault::InvalidStackOperation);
        }
        Ok(address as usize)
    }

    /// Zero-fills the whole window and rewinds the bookkeeping to empty.
    pub fn reset(&mut self, memory: &mut WordBuffer) {
        memory.zero_range(self.end_index, self.first_index);
        self.top = self.first_index;
        self.depth = 0;
    }
}
