//! Insertion Order Module
//!
//! Tracks the order in which keys were inserted so the oldest one can be
//! evicted when the store overflows.

use std::collections::VecDeque;

// == Insertion Order ==
/// Queue of keys by insertion time.
///
/// Keys are stored in a VecDeque where:
/// - Front = Newest insertion
/// - Back = Oldest insertion
///
/// Reads never reorder keys; only a (re)insertion moves a key to the front.
#[derive(Debug, Default)]
pub struct InsertionOrder {
    order: VecDeque<String>,
}

impl InsertionOrder {
    // == Constructor ==
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }

    // == Record Insert ==
    /// Marks a key as the newest insertion.
    ///
    /// An existing occurrence is dropped first, so overwrites count as fresh
    /// insertions.
    pub fn record_insert(&mut self, key: &str) {
        self.remove(key);
        self.order.push_front(key.to_string());
    }

    // == Remove ==
    /// Removes a key from the queue.
    pub fn remove(&mut self, key: &str) {
        self.order.retain(|k| k != key);
    }

    // == Pop Oldest ==
    /// Returns and removes the oldest inserted key.
    pub fn pop_oldest(&mut self) -> Option<String> {
        self.order.pop_back()
    }

    // == Clear ==
    pub fn clear(&mut self) {
        self.order.clear();
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
