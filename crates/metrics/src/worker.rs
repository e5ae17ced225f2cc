//! Background sampler thread.
//!
//! Bridges the sampling state with the render loop: one sample per tick is
//! handed over a bounded channel, the render loop picks the newest up with
//! [`SampleFeed::latest`].

use std::sync::mpsc::{self, Receiver, SyncSender, TrySendError};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use crate::probe::CpuProbe;
use crate::sampler::MetricsSampler;
use crate::types::MetricsSample;

/// Samples that may wait in the channel before new ones are dropped.
pub const SAMPLE_QUEUE_DEPTH: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplerConfig {
    pub interval: Duration,
    /// Reported when the measured delta is unusable.
    pub fallback_fps: f32,
}

impl SamplerConfig {
    pub fn for_fps(target_fps: u32) -> Self {
        let fps = target_fps.max(1);
        Self {
            interval: Duration::from_nanos(1_000_000_000 / fps as u64),
            fallback_fps: fps as f32,
        }
    }
}

/// Probe wrapper that substitutes the last good reading on failure.
pub struct ResilientProbe<P> {
    inner: P,
    last_good: f32,
    failures: u64,
}

impl<P: CpuProbe> ResilientProbe<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            last_good: 0.0,
            failures: 0,
        }
    }

    pub fn read(&mut self) -> f32 {
        match self.inner.cpu_percent() {
            Ok(v) if v.is_finite() => {
                self.last_good = v;
            }
            Ok(v) => {
                self.failures += 1;
                tracing::warn!(reading = v, "discarding non-finite cpu reading");
            }
            Err(e) => {
                self.failures += 1;
                // Log the first failure and then sparsely; a broken probe fails every tick.
                if self.failures == 1 || self.failures % 600 == 0 {
                    tracing::warn!(failures = self.failures, "cpu probe failed: {:#}", e);
                }
            }
        }
        self.last_good
    }

    pub fn failures(&self) -> u64 {
        self.failures
    }
}

/// Render-loop side of the handoff.
///
/// Remembers the last sample it handed out, so a frame with nothing queued
/// keeps showing the previous values.
pub struct SampleFeed {
    rx: Receiver<MetricsSample>,
    last: Option<MetricsSample>,
}

impl SampleFeed {
    fn new(rx: Receiver<MetricsSample>) -> Self {
        Self { rx, last: None }
    }

    /// Newest sample seen so far, draining anything queued. Never blocks.
    ///
    /// `None` only until the sampler has published once.
    pub fn latest(&mut self) -> Option<MetricsSample> {
        if let Some(sample) = self.rx.try_iter().last() {
            self.last = Some(sample);
        }
        self.last
    }

    /// Block until the next sample arrives or `timeout` passes.
    pub fn recv_timeout(&mut self, timeout: Duration) -> Option<MetricsSample> {
        let sample = self.rx.recv_timeout(timeout).ok()?;
        self.last = Some(sample);
        Some(sample)
    }
}

/// Outcome of handing one sample to the render loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Publish {
    Sent,
    /// Queue full; the sample was discarded.
    Dropped,
    /// The feed is gone; the sampler should stop.
    Disconnected,
}

/// Queue `sample` without ever blocking the sampler.
pub fn publish(tx: &SyncSender<MetricsSample>, sample: MetricsSample) -> Publish {
    match tx.try_send(sample) {
        Ok(()) => Publish::Sent,
        Err(TrySendError::Full(_)) => Publish::Dropped,
        Err(TrySendError::Disconnected(_)) => Publish::Disconnected,
    }
}

/// Bounded channel of [`SAMPLE_QUEUE_DEPTH`] samples and its feed.
pub fn sample_channel() -> (SyncSender<MetricsSample>, SampleFeed) {
    let (tx, rx) = mpsc::sync_channel::<MetricsSample>(SAMPLE_QUEUE_DEPTH);
    (tx, SampleFeed::new(rx))
}

/// Start the sampler thread. It runs until the returned feed is dropped.
pub fn spawn_sampler<P>(probe: P, config: SamplerConfig) -> Result<SampleFeed>
where
    P: CpuProbe + Send + 'static,
{
    let (tx, feed) = sample_channel();
    thread::Builder::new()
        .name("metrics-sampler".to_string())
        .spawn(move || run_sampler(probe, config, tx))
        .context("spawn metrics sampler thread")?;
    Ok(feed)
}

fn run_sampler<P: CpuProbe>(probe: P, config: SamplerConfig, tx: SyncSender<MetricsSample>) {
    tracing::info!(interval_ms = config.interval.as_millis() as u64, "metrics sampler started");

    let mut probe = ResilientProbe::new(probe);
    let mut sampler = MetricsSampler::new(config.fallback_fps);
    let mut prev = Instant::now();

    loop {
        thread::sleep(config.interval);

        let now = Instant::now();
        let delta_ms = now.duration_since(prev).as_secs_f32() * 1000.0;
        prev = now;

        let sample = sampler.tick(delta_ms, probe.read());
        if publish(&tx, sample) == Publish::Disconnected {
            break;
        }
    }

    tracing::info!(probe_failures = probe.failures(), "metrics sampler stopped");
}
