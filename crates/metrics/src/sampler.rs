//! Sampling state: frame-rate window and CPU averaging.
//!
//! Pure and clock-free; the worker feeds it measured deltas and probe
//! readings, which keeps the cadence rules testable tick by tick.

use std::collections::VecDeque;

use arrayvec::ArrayVec;

use crate::types::{MetricsSample, CPU_AVERAGE_TICKS, FPS_WINDOW_LEN, TARGET_FPS};

/// Sliding mean over the last [`FPS_WINDOW_LEN`] positive deltas.
#[derive(Debug, Clone)]
pub struct FrameRateWindow {
    deltas_ms: VecDeque<f32>,
    fallback_fps: f32,
}

impl Default for FrameRateWindow {
    fn default() -> Self {
        Self::new(TARGET_FPS as f32)
    }
}

impl FrameRateWindow {
    pub fn new(fallback_fps: f32) -> Self {
        Self {
            deltas_ms: VecDeque::with_capacity(FPS_WINDOW_LEN),
            fallback_fps,
        }
    }

    /// Record a delta and return the current estimate.
    ///
    /// A non-positive or non-finite delta is not recorded and yields the fallback rate.
    pub fn record(&mut self, delta_ms: f32) -> f32 {
        if !(delta_ms.is_finite() && delta_ms > 0.0) {
            return self.fallback_fps;
        }
        if self.deltas_ms.len() == FPS_WINDOW_LEN {
            self.deltas_ms.pop_front();
        }
        self.deltas_ms.push_back(delta_ms);
        let mean = self.deltas_ms.iter().sum::<f32>() / self.deltas_ms.len() as f32;
        1000.0 / mean
    }

    pub fn len(&self) -> usize {
        self.deltas_ms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deltas_ms.is_empty()
    }
}

/// Batches raw CPU readings and publishes their mean every [`CPU_AVERAGE_TICKS`].
#[derive(Debug, Clone, Default)]
pub struct CpuAverager {
    readings: ArrayVec<f32, CPU_AVERAGE_TICKS>,
    published: f32,
}

impl CpuAverager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one reading and return the figure to publish this tick.
    pub fn record(&mut self, reading: f32) -> f32 {
        self.readings.push(reading);
        if self.readings.is_full() {
            let sum: f32 = self.readings.iter().sum();
            self.published = sum / CPU_AVERAGE_TICKS as f32;
            self.readings.clear();
        }
        self.published
    }

    pub fn published(&self) -> f32 {
        self.published
    }
}

/// Combined per-tick sampler.
#[derive(Debug, Clone, Default)]
pub struct MetricsSampler {
    frame_rate: FrameRateWindow,
    cpu: CpuAverager,
}

impl MetricsSampler {
    pub fn new(fallback_fps: f32) -> Self {
        Self {
            frame_rate: FrameRateWindow::new(fallback_fps),
            cpu: CpuAverager::new(),
        }
    }

    pub fn tick(&mut self, delta_ms: f32, cpu_reading: f32) -> MetricsSample {
        MetricsSample {
            fps: self.frame_rate.record(delta_ms),
            frame_time_ms: delta_ms,
            cpu_percent: self.cpu.record(cpu_reading),
        }
    }
}
