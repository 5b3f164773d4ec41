//! Scripted frame resolution for deterministic tests.

use std::collections::VecDeque;

use parking_lot::Mutex;

use crate::frame::{Frame, FrameResolver};

/// A [`FrameResolver`] that replays a fixed stack and a queue of call
/// sites instead of walking the real one.
pub(crate) struct ScriptedResolver {
    stack: Vec<Frame>,
    sites: Mutex<VecDeque<Frame>>,
    captures: Mutex<usize>,
}

impl ScriptedResolver {
    pub(crate) fn new(stack: Vec<Frame>, sites: Vec<Frame>) -> Self {
        Self {
            stack,
            sites: Mutex::new(sites.into()),
            captures: Mutex::new(0),
        }
    }

    pub(crate) fn with_stack(stack: Vec<Frame>) -> Self {
        Self::new(stack, Vec::new())
    }

    /// Number of full stack captures performed so far.
    pub(crate) fn captures(&self) -> usize {
        *self.captures.lock()
    }
}

impl FrameResolver for ScriptedResolver {
    fn capture(&self, skip: usize) -> Vec<Frame> {
        *self.captures.lock() += 1;
        self.stack.iter().skip(skip).cloned().collect()
    }

    fn call_site(&self, _skip: usize) -> Option<Frame> {
        self.sites.lock().pop_front()
    }
}

/// Shorthand frame constructor for test fixtures.
pub(crate) fn frame(file: &str, function: &str, line: u32) -> Frame {
    Frame::new(file, function, line)
}
