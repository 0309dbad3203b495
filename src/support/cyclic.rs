//! Endlessly repeating sequences with atomic advancement

use std::sync::atomic::{AtomicUsize, Ordering};

/// Finite sequence handed out in order, wrapping to the start forever
///
/// Advancing is a single atomic read-and-increment, so concurrent consumers
/// each observe a distinct position of the cycle.
#[derive(Debug)]
pub struct Cyclic<T> {
    elements: Vec<T>,
    cursor: AtomicUsize,
}

impl<T> Cyclic<T> {
    /// Create a cycle over `elements`, starting at the first one
    pub fn new<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self {
            elements: elements.into_iter().collect(),
            cursor: AtomicUsize::new(0),
        }
    }

    /// Number of elements in one cycle
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check whether the cycle has no elements
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Index of the element the next advance returns
    pub fn position(&self) -> usize {
        self.cursor.load(Ordering::Acquire)
    }

    /// Return the current element and move to the next one
    ///
    /// Returns `None` only for an empty cycle.
    pub fn advance(&self) -> Option<&T> {
        let last = self.elements.len().checked_sub(1)?;
        let index = self
            .cursor
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |index| {
                Some(if index >= last { 0 } else { index + 1 })
            })
            .unwrap_or_else(|index| index);
        self.elements.get(index)
    }

    /// Restart the cycle from the first element
    pub fn reset(&self) {
        self.cursor.store(0, Ordering::Release);
    }
}

impl<'a, T> Iterator for &'a Cyclic<T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let cycle: &'a Cyclic<T> = *self;
        cycle.advance()
    }
}

impl<T: Clone> Clone for Cyclic<T> {
    fn clone(&self) -> Self {
        Self {
            elements: self.elements.clone(),
            cursor: AtomicUsize::new(self.position()),
        }
    }
}
