//! Tick-driven sprite animation sequencing
//!
//! Frame selection only; drawing stays with the host. The player advances
//! once per simulation tick, so animation speed is expressed in ticks and
//! stays deterministic under a fixed timestep.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// An animation definition: the frame ids to cycle through, how many ticks
/// each frame holds, and whether the sequence loops.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animation {
    pub frames: Vec<u32>,
    pub ticks_per_frame: u32,
    pub looping: bool,
}

impl Animation {
    /// Fails on an empty frame list or a zero hold time.
    pub fn new(frames: Vec<u32>, ticks_per_frame: u32, looping: bool) -> Result<Self> {
        if frames.is_empty() {
            return Err(Error::validation("animation", "frame list is empty"));
        }
        if ticks_per_frame == 0 {
            return Err(Error::validation("animation", "ticks_per_frame must be >= 1"));
        }
        Ok(Self {
            frames,
            ticks_per_frame,
            looping,
        })
    }
}

/// Playback cursor over an [`Animation`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationPlayer {
    animation: Animation,
    cursor: usize,
    ticks: u32,
    finished: bool,
}

impl AnimationPlayer {
    pub fn new(animation: Animation) -> Self {
        Self {
            animation,
            cursor: 0,
            ticks: 0,
            finished: false,
        }
    }

    /// Advance one simulation tick. A non-looping animation parks on its
    /// last frame and reports finished.
    pub fn tick(&mut self) {
        if self.finished {
            return;
        }
        self.ticks += 1;
        if self.ticks < self.animation.ticks_per_frame {
            return;
        }
        self.ticks = 0;
        self.cursor += 1;
        if self.cursor == self.animation.frames.len() {
            if self.animation.looping {
                self.cursor = 0;
            } else {
                self.cursor -= 1;
                self.finished = true;
            }
        }
    }

    /// The frame id to draw this tick
    #[inline]
    pub fn frame(&self) -> u32 {
        self.animation.frames[self.cursor]
    }

    #[inline]
    pub fn finished(&self) -> bool {
        self.finished
    }

    /// Rewind to the first frame
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.ticks = 0;
        self.finished = false;
    }
}
