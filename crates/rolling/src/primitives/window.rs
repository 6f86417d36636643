//! Windowing primitives for rolling reductions.
//!
//! This module provides non-owning window views that alias a [`Sequence`]'s
//! storage, and the iterator that walks them from the first start offset to
//! the last, so that reducers never copy a window.

// External dependencies
use core::iter::{Copied, FusedIterator, StepBy, Take};
use core::slice::Iter;

// Internal dependencies
use crate::primitives::sequence::Sequence;

// Contiguous logical range `[offset, offset + len)` of a sequence.
#[derive(Debug, Clone, Copy)]
pub struct WindowView<'a, T> {
    seq: Sequence<'a, T>,
    offset: usize,
    len: usize,
}

impl<'a, T: Copy> WindowView<'a, T> {
    // Describe the window starting at logical element `offset`.
    #[inline]
    pub fn new(seq: Sequence<'a, T>, offset: usize, len: usize) -> Self {
        debug_assert!(
            offset + len <= seq.len(),
            "WindowView::new: window extends past the end of the sequence"
        );
        Self { seq, offset, len }
    }

    // Start offset within the parent sequence.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    // Number of elements in the window.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    // True only for a zero-length view.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // Element `k` of the window, if in bounds.
    #[inline]
    pub fn get(&self, k: usize) -> Option<T> {
        if k < self.len {
            self.seq.get(self.offset + k)
        } else {
            None
        }
    }

    // Borrow the window as a plain slice when the parent has unit stride.
    #[inline]
    pub fn as_contiguous(&self) -> Option<&'a [T]> {
        if self.seq.stride() == 1 {
            Some(&self.seq.storage()[self.offset..self.offset + self.len])
        } else {
            None
        }
    }

    // Iterate the window's elements in order, reading the parent storage in place.
    #[inline]
    pub fn iter(&self) -> Take<StepBy<Copied<Iter<'a, T>>>> {
        let stride = self.seq.stride();
        let start = (self.offset * stride).min(self.seq.storage().len());
        self.seq.storage()[start..]
            .iter()
            .copied()
            .step_by(stride)
            .take(self.len)
    }
}

// Iterator over every window of a fixed length, in increasing start order.
#[derive(Debug, Clone)]
pub struct Windows<'a, T> {
    seq: Sequence<'a, T>,
    window_size: usize,
    front: usize,
    back: usize,
}

impl<'a, T: Copy> Windows<'a, T> {
    // Walk all windows of `window_size` elements over `seq`.
    //
    // Yields nothing when `window_size` is zero or exceeds the sequence.
    #[inline]
    pub fn new(seq: Sequence<'a, T>, window_size: usize) -> Self {
        let count = if window_size == 0 {
            0
        } else {
            seq.len()
                .checked_sub(window_size)
                .map_or(0, |last_start| last_start + 1)
        };
        Self {
            seq,
            window_size,
            front: 0,
            back: count,
        }
    }

    // Number of windows `len - window_size + 1` for a valid configuration.
    #[inline]
    pub fn count_for(len: usize, window_size: usize) -> usize {
        if window_size == 0 || window_size > len {
            0
        } else {
            len - window_size + 1
        }
    }
}

impl<'a, T: Copy> Iterator for Windows<'a, T> {
    type Item = WindowView<'a, T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let view = WindowView::new(self.seq, self.front, self.window_size);
        self.front += 1;
        Some(view)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T: Copy> DoubleEndedIterator for Windows<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(WindowView::new(self.seq, self.back, self.window_size))
    }
}

impl<T: Copy> ExactSizeIterator for Windows<'_, T> {}

impl<T: Copy> FusedIterator for Windows<'_, T> {}
