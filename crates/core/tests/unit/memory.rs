//! # Word Buffer Tests
//!
//! Tests for the growable word-addressed memory buffer: chunked growth,
//! zero-fill, and bounds-checked access.

use pretty_assertions::assert_eq;
use tinycpu_core::WordBuffer;

const CHUNK: usize = 1024;

#[test]
fn test_new_buffer_is_one_zeroed_chunk() {
    let buffer = WordBuffer::new();
    assert_eq!(buffer.len(), CHUNK);
    assert!(buffer.as_slice().iter().all(|&w| w == 0));
}

#[test]
fn test_get_and_set() {
    let mut buffer = WordBuffer::new();
    buffer.set(0, -1);
    buffer.set(CHUNK - 1, 7);
    assert_eq!(buffer.get(0), Some(-1));
    assert_eq!(buffer.get(CHUNK - 1), Some(7));
    assert_eq!(buffer.get(CHUNK), None);
}

#[test]
fn test_reserve_tail_grows_in_whole_chunks() {
    let mut buffer = WordBuffer::new();
    buffer.reserve_tail(0, 16);
    assert_eq!(buffer.len(), CHUNK);

    // Writing near the end with a 16-word tail forces one chunk of growth.
    buffer.reserve_tail(CHUNK - 16, 16);
    assert_eq!(buffer.len(), 2 * CHUNK);
}

#[test]
fn test_reserve_tail_grows_repeatedly_for_large_tails() {
    let mut buffer = WordBuffer::new();
    buffer.reserve_tail(0, 3000);
    assert_eq!(buffer.len(), 3 * CHUNK);
}

#[test]
fn test_grown_region_is_zero_filled() {
    let mut buffer = WordBuffer::new();
    buffer.set(CHUNK - 1, 42);
    buffer.reserve_tail(CHUNK - 1, 64);
    assert_eq!(buffer.get(CHUNK - 1), Some(42));
    assert!(buffer.as_slice()[CHUNK..].iter().all(|&w| w == 0));
}

#[test]
fn test_from_words_pads_to_a_chunk() {
    let buffer = WordBuffer::from_words(vec![1, 2, 3]);
    assert_eq!(buffer.len(), CHUNK);
    assert_eq!(buffer.get(0), Some(1));
    assert_eq!(buffer.get(3), Some(0));

    let empty = WordBuffer::from_words(Vec::new());
    assert_eq!(empty.len(), CHUNK);
}

#[test]
fn test_zero_range_is_inclusive() {
    let mut buffer = WordBuffer::new();
    for i in 10..=20 {
        buffer.set(i, 9);
    }
    buffer.zero_range(11, 19);
    assert_eq!(buffer.get(10), Some(9));
    assert!((11..=19).all(|i| buffer.get(i) == Some(0)));
    assert_eq!(buffer.get(20), Some(9));
}
