//! Queued player input.
//!
//! Host callbacks push edge events here whenever they arrive; the tick
//! drains the queue at exactly one point so input never races the step.

use std::collections::VecDeque;

/// UI-agnostic input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimInput {
    /// Leave the idle screen and begin a run.
    Start,
    /// Upward impulse.
    Flap,
    /// Dismiss the game-over screen.
    Resume,
}

/// FIFO of inputs waiting for the next tick.
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pending: VecDeque<SimInput>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, input: SimInput) {
        self.pending.push_back(input);
    }

    /// Take every pending input, oldest first.
    pub fn drain(&mut self) -> Vec<SimInput> {
        self.pending.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
