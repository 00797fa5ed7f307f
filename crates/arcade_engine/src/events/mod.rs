//! Deferred event queue
//!
//! Producers push during a frame; the owner drains once the frame is
//! finished. Events come out in the order they went in.

use std::collections::VecDeque;

/// FIFO queue of events awaiting delivery
#[derive(Debug, Clone)]
pub struct EventQueue<E> {
    pending: VecDeque<E>,
}

impl<E> EventQueue<E> {
    /// Create an empty queue
    pub fn new() -> Self {
        Self {
            pending: VecDeque::new(),
        }
    }

    /// Queue an event for later delivery
    pub fn push(&mut self, event: E) {
        self.pending.push_back(event);
    }

    /// Take every queued event, oldest first
    pub fn drain(&mut self) -> impl Iterator<Item = E> + '_ {
        self.pending.drain(..)
    }
}

impl<E> Default for EventQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_preserves_order() {
        let mut queue = EventQueue::new();
        queue.push("fire");
        queue.push("explosion");
        let drained: Vec<_> = queue.drain().collect();
        assert_eq!(drained, vec!["fire", "explosion"]);
        assert_eq!(queue.drain().count(), 0);
    }
}
