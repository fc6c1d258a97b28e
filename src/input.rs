//! Input sources
//!
//! The simulation only sees `FrameInput`. Where it comes from (keyboard,
//! replay, a test script) is up to the `InputSource`.

use crate::sim::FrameInput;

/// Produces one `FrameInput` per frame
pub trait InputSource {
    fn next_input(&mut self, frame: u64) -> FrameInput;
}

impl<F> InputSource for F
where
    F: FnMut(u64) -> FrameInput,
{
    fn next_input(&mut self, frame: u64) -> FrameInput {
        self(frame)
    }
}

/// Plays back a list of (frames, input) segments, then idles
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    segments: Vec<(u64, FrameInput)>,
    segment: usize,
    used: u64,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hold `input` for `frames` frames
    pub fn then(mut self, frames: u64, input: FrameInput) -> Self {
        if frames > 0 {
            self.segments.push((frames, input));
        }
        self
    }

    pub fn is_finished(&self) -> bool {
        self.segment >= self.segments.len()
    }
}

impl InputSource for ScriptedInput {
    fn next_input(&mut self, _frame: u64) -> FrameInput {
        let Some(&(frames, input)) = self.segments.get(self.segment) else {
            return FrameInput::default();
        };
        self.used += 1;
        if self.used >= frames {
            self.segment += 1;
            self.used = 0;
        }
        input
    }
}
