use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::{bail, Result};
use iso_grid::metrics::{spawn_sampler, CpuProbe, MetricsSampler, SamplerConfig};

/// Fails every other read and counts all of them.
struct CountingProbe {
    reads: Arc<AtomicUsize>,
}

impl CpuProbe for CountingProbe {
    fn cpu_percent(&mut self) -> Result<f32> {
        let n = self.reads.fetch_add(1, Ordering::SeqCst);
        if n % 2 == 0 {
            bail!("no reading on tick {n}");
        }
        Ok(5.0)
    }
}

fn counting_probe() -> (CountingProbe, Arc<AtomicUsize>) {
    let reads = Arc::new(AtomicUsize::new(0));
    (
        CountingProbe {
            reads: Arc::clone(&reads),
        },
        reads,
    )
}

fn fast(interval_ms: u64) -> SamplerConfig {
    SamplerConfig {
        interval: Duration::from_millis(interval_ms),
        fallback_fps: 60.0,
    }
}

#[test]
fn sampler_publishes_cpu_mean_every_fifteen_ticks() {
    let mut sampler = MetricsSampler::new(60.0);
    let mut published = Vec::new();
    for i in 1..=30 {
        published.push(sampler.tick(16.0, i as f32).cpu_percent);
    }

    // Ticks 1-14 have nothing to publish yet.
    assert!(published[..14].iter().all(|&c| c == 0.0));
    // Tick 15 publishes mean(1..=15) and later ticks repeat it.
    assert!(published[14..29].iter().all(|&c| (c - 8.0).abs() < 1e-4));
    // Tick 30 publishes mean(16..=30).
    assert!((published[29] - 23.0).abs() < 1e-4);
}

#[test]
fn sampler_fps_tracks_recent_deltas() {
    let mut sampler = MetricsSampler::new(60.0);
    for _ in 0..60 {
        sampler.tick(40.0, 0.0);
    }
    let s = sampler.tick(40.0, 0.0);
    assert!((s.fps - 25.0).abs() < 1e-3);
    assert_eq!(s.frame_time_ms, 40.0);

    // 60 fresh deltas push the old ones out of the window.
    let mut last = s;
    for _ in 0..60 {
        last = sampler.tick(10.0, 0.0);
    }
    assert!((last.fps - 100.0).abs() < 1e-2);
}

#[test]
fn sampler_reports_fallback_on_zero_delta() {
    let mut sampler = MetricsSampler::new(60.0);
    sampler.tick(20.0, 0.0);
    let s = sampler.tick(0.0, 0.0);
    assert_eq!(s.fps, 60.0);
    // The bad delta is not recorded.
    let s = sampler.tick(20.0, 0.0);
    assert!((s.fps - 50.0).abs() < 1e-3);
}

#[test]
fn sampler_thread_survives_probe_failures() {
    let (probe, _) = counting_probe();
    let mut feed = spawn_sampler(probe, fast(1)).unwrap();

    for _ in 0..20 {
        let sample = feed
            .recv_timeout(Duration::from_secs(5))
            .expect("sampler stopped producing");
        assert!(sample.cpu_percent.is_finite());
    }
}

#[test]
fn sampler_thread_stops_after_feed_is_dropped() {
    let (probe, reads) = counting_probe();
    let mut feed = spawn_sampler(probe, fast(1)).unwrap();
    feed.recv_timeout(Duration::from_secs(5))
        .expect("sampler produced nothing");
    drop(feed);

    // The next send fails and the thread returns; give it time to notice.
    thread::sleep(Duration::from_millis(100));
    let settled = reads.load(Ordering::SeqCst);
    thread::sleep(Duration::from_millis(100));
    assert_eq!(reads.load(Ordering::SeqCst), settled);
}

#[test]
fn sample_feed_holds_last_value_between_ticks() {
    let (probe, _) = counting_probe();
    let mut feed = spawn_sampler(probe, fast(250)).unwrap();

    let first = feed
        .recv_timeout(Duration::from_secs(5))
        .expect("sampler produced nothing");
    // The next tick is 250 ms away, so nothing new is queued yet.
    assert_eq!(feed.latest(), Some(first));
    assert_eq!(feed.latest(), Some(first));
}

#[test]
fn sample_feed_latest_never_blocks() {
    let (probe, _) = counting_probe();
    let mut feed = spawn_sampler(probe, fast(60_000)).unwrap();
    assert_eq!(feed.latest(), None);
}
