//! Metrics module - background frame-rate and CPU sampling
//!
//! A sampler thread ticks at the render cadence, estimates the frame rate
//! from its own tick deltas and averages process CPU usage, then hands each
//! [`MetricsSample`](crate::types::MetricsSample) to the render loop over a
//! bounded channel. No state is shared between the two threads.
//!
//! # Cadence
//!
//! - **FPS**: `1000 / mean` of the last 60 positive tick deltas; an unusable
//!   delta reports the target rate instead
//! - **CPU**: raw readings are batched; every 15th tick publishes the batch
//!   mean, other ticks republish the previous figure (0 before the first batch)
//!
//! # Example
//!
//! ```
//! use iso_grid_metrics::MetricsSampler;
//!
//! let mut sampler = MetricsSampler::new(60.0);
//! let sample = sampler.tick(0.0, 12.0);
//! assert_eq!(sample.fps, 60.0);
//! assert_eq!(sample.cpu_percent, 0.0);
//! ```

pub mod probe;
pub mod sampler;
pub mod worker;

pub use iso_grid_types as types;

pub use probe::{CpuProbe, ProcessCpuProbe};
pub use sampler::{CpuAverager, FrameRateWindow, MetricsSampler};
pub use worker::{
    publish, sample_channel, spawn_sampler, Publish, ResilientProbe, SampleFeed, SamplerConfig,
    SAMPLE_QUEUE_DEPTH,
};
