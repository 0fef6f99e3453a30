//! Growable word-addressed memory buffer.
//!
//! This module provides a safe wrapper around the flat memory of the machine:
//! a single owned sequence of 32-bit signed words holding both the program
//! image and the stack window. It replaces the original design's manually
//! reallocated raw buffer with an owned, bounds-checked abstraction that keeps
//! the same incremental growth policy and zero-fill-on-grow contract.

use crate::common::constants::MEMORY_CHUNK_WORDS;

/// Flat word-addressed memory: program words at the low end, stack window at
/// the high end.
///
/// The buffer always spans a whole number of [`MEMORY_CHUNK_WORDS`] chunks and
/// every grown region is zero-filled. Ownership is exclusive: the buffer is
/// moved into the machine that executes against it and freed exactly once
/// when that machine is dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordBuffer {
    words: Vec<i32>,
}

impl WordBuffer {
    /// Creates a buffer of one zero-filled chunk.
    pub fn new() -> Self {
        Self {
            words: vec![0; MEMORY_CHUNK_WORDS],
        }
    }

    /// Builds a buffer directly from a word vector.
    ///
    /// Intended for embedders that assemble programs in memory rather than
    /// loading a byte image; the vector is padded up to a whole chunk.
    pub fn from_words(mut words: Vec<i32>) -> Self {
        let len = words.len().max(1).div_ceil(MEMORY_CHUNK_WORDS) * MEMORY_CHUNK_WORDS;
        words.resize(len, 0);
        Self { words }
    }

    /// Returns the buffer capacity in words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the buffer holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Reads the word at `index`, or `None` when the index is out of range.
    pub fn get(&self, index: usize) -> Option<i32> {
        self.words.get(index).copied()
    }

    /// Writes the word at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range; callers validate indices against
    /// the stack window or grow the buffer first.
    pub fn set(&mut self, index: usize, word: i32) {
        self.words[index] = word;
    }

    /// Zero-fills the inclusive index range `[from, to]`.
    pub fn zero_range(&mut self, from: usize, to: usize) {
        self.words[from..=to].fill(0);
    }

    /// Grows the buffer so that writing at `next_index` still leaves
    /// `tail_reserve` words of headroom behind it.
    ///
    /// Growth happens in whole zero-filled chunks, repeated until the
    /// headroom fits. This is the loader's growth policy: the reserved tail
    /// is the requested stack region, which must never be overrun by program
    /// words.
    pub fn reserve_tail(&mut self, next_index: usize, tail_reserve: usize) {
        while next_index + tail_reserve >= self.words.len() {
            self.words.resize(self.words.len() + MEMORY_CHUNK_WORDS, 0);
        }
    }

    /// Returns the buffer contents as a word slice.
    pub fn as_slice(&self) -> &[i32] {
        &self.words
    }
}

impl Default for WordBuffer {
    fn default() -> Self {
        Self::new()
    }
}
