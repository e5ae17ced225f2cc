use std::time::Duration;

/// Fixed frame-rate cap for the render loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameLimiter {
    budget: Duration,
}

impl FrameLimiter {
    /// A zero target is treated as 1 fps.
    pub fn new(target_fps: u32) -> Self {
        let fps = target_fps.max(1) as u64;
        Self {
            budget: Duration::from_nanos(1_000_000_000 / fps),
        }
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// Time left in the frame after `elapsed`.
    ///
    /// - `Some(d)`: sleep `d` before starting the next frame.
    /// - `None`: the frame ran over budget; start the next one immediately.
    pub fn remaining(&self, elapsed: Duration) -> Option<Duration> {
        match self.budget.checked_sub(elapsed) {
            Some(d) if !d.is_zero() => Some(d),
            _ => None,
        }
    }
}
