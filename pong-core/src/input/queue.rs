//! Per-frame event queue
//!
//! Input producers only append; the main loop drains the queue once per
//! frame and applies events in order, so the most recent press wins.
//! When the queue is full the oldest event is evicted.

use heapless::Deque;

use super::InputEvent;

/// Default queue depth used by [`crate::Game`]
pub const DEFAULT_QUEUE_LEN: usize = 16;

/// Bounded FIFO of input events
#[derive(Debug, Clone)]
pub struct EventQueue<const N: usize = DEFAULT_QUEUE_LEN> {
    events: Deque<InputEvent, N>,
    /// Events evicted because the queue was full
    dropped: u32,
}

impl<const N: usize> Default for EventQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> EventQueue<N> {
    pub const fn new() -> Self {
        Self {
            events: Deque::new(),
            dropped: 0,
        }
    }

    /// Append an event
    ///
    /// Returns false if an older event had to be evicted to make room.
    pub fn push(&mut self, event: InputEvent) -> bool {
        match self.events.push_back(event) {
            Ok(()) => true,
            Err(event) => {
                self.events.pop_front();
                self.dropped = self.dropped.wrapping_add(1);
                if self.events.push_back(event).is_err() {
                    // Zero-capacity queue
                    self.dropped = self.dropped.wrapping_add(1);
                }
                false
            }
        }
    }

    /// Take the oldest event
    pub fn pop(&mut self) -> Option<InputEvent> {
        self.events.pop_front()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Total events evicted since creation
    pub fn dropped(&self) -> u32 {
        self.dropped
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}
