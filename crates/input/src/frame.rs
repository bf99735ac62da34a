//! Per-frame action latch.
//!
//! The game consumes one action per frame. Key presses that arrive between
//! two frames are folded into a single action: the first press wins and later
//! ones in the same frame are dropped.

use crate::types::Action;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pending: Action,
}

impl FrameInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a press. Returns false if this frame already has an action.
    pub fn push(&mut self, action: Action) -> bool {
        if action == Action::None || self.pending != Action::None {
            return false;
        }
        self.pending = action;
        true
    }

    pub fn pending(&self) -> Action {
        self.pending
    }

    /// Hand the frame's action to the game and reset for the next frame.
    pub fn take(&mut self) -> Action {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_frame_yields_none() {
        let mut input = FrameInput::new();
        assert_eq!(input.take(), Action::None);
    }

    #[test]
    fn first_press_wins() {
        let mut input = FrameInput::new();
        assert!(input.push(Action::Left));
        assert!(!input.push(Action::Rotate));
        assert_eq!(input.pending(), Action::Left);
        assert_eq!(input.take(), Action::Left);
        assert_eq!(input.take(), Action::None);
    }

    #[test]
    fn none_does_not_occupy_the_frame() {
        let mut input = FrameInput::new();
        assert!(!input.push(Action::None));
        assert!(input.push(Action::Right));
        assert_eq!(input.take(), Action::Right);
    }
}
