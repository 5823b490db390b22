use serde::Serialize;
use std::time::Duration;

use crate::media::MediaDescriptor;

use super::clock::Clock;

const WORKLOAD_ITERATIONS: u32 = 1000;
/// Bitrate at which the efficiency score is unscaled
const REFERENCE_BIT_RATE_KBPS: f64 = 320.0;

/// Result of one simulated codec cycle
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CycleMeasurement {
    /// 1-based
    pub cycle_index: u32,
    pub processing_time_ms: f64,
    /// `None` when the processing time was zero and the score is undefined
    pub efficiency: Option<f64>,
    /// Synthetic workload result scaled by bitrate. Diagnostic only, never
    /// used as the efficiency.
    pub workload_score: f64,
}

/// Simulates codec work: a fixed latency followed by a small trigonometric
/// workload, timed on the injected clock.
pub struct CycleProcessor<C: Clock> {
    delay: Duration,
    clock: C,
}

impl<C: Clock> CycleProcessor<C> {
    pub fn new(delay: Duration, clock: C) -> Self {
        Self { delay, clock }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn process(&self, media: &MediaDescriptor, cycle_index: u32) -> CycleMeasurement {
        let start = self.clock.now();

        self.clock.sleep(self.delay);
        let workload_score = run_workload(cycle_index, media.bit_rate_kbps());

        let elapsed = self.clock.now().saturating_sub(start);
        let processing_time_ms = elapsed.as_secs_f64() * 1000.0;
        let efficiency = efficiency(processing_time_ms, media.bit_rate_kbps());

        if efficiency.is_none() {
            log::warn!(
                "Cycle {}: processing time is zero, efficiency is undefined",
                cycle_index
            );
        }
        log::debug!(
            "Cycle {}: {:.3}ms, workload_score={:.4}",
            cycle_index,
            processing_time_ms,
            workload_score
        );

        CycleMeasurement {
            cycle_index,
            processing_time_ms,
            efficiency,
            workload_score,
        }
    }
}

/// sum(sin(0.01k) * cos(0.02 * cycle)) over the fixed iteration count,
/// normalised by bitrate in Mbps.
fn run_workload(cycle_index: u32, bit_rate_kbps: u32) -> f64 {
    let phase = (0.02 * cycle_index as f64).cos();
    let acc: f64 = (0..WORKLOAD_ITERATIONS)
        .map(|k| (0.01 * k as f64).sin() * phase)
        .sum();
    acc.abs() / (bit_rate_kbps as f64 * 0.001)
}

/// Efficiency score shown to the user: cycles-per-second at this timing,
/// scaled by bitrate relative to 320 kbps.
pub fn efficiency(processing_time_ms: f64, bit_rate_kbps: u32) -> Option<f64> {
    if processing_time_ms > 0.0 {
        Some((1000.0 / processing_time_ms) * (bit_rate_kbps as f64 / REFERENCE_BIT_RATE_KBPS))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::clock::{ManualClock, SystemClock};

    fn media(bit_rate: u32) -> MediaDescriptor {
        MediaDescriptor::new("sample.mp3", "MP3", 180.0, bit_rate)
    }

    #[test]
    fn efficiency_formula() {
        assert!((efficiency(100.0, 320).unwrap() - 10.0).abs() < 1e-12);
        assert!((efficiency(200.0, 160).unwrap() - 2.5).abs() < 1e-12);
        assert_eq!(efficiency(0.0, 320), None);
    }

    #[test]
    fn manual_clock_measures_exact_delay() {
        let processor = CycleProcessor::new(Duration::from_millis(100), ManualClock::new());
        let m = processor.process(&media(320), 1);
        assert_eq!(m.cycle_index, 1);
        assert!((m.processing_time_ms - 100.0).abs() < 1e-9);
        assert!((m.efficiency.unwrap() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn zero_delay_yields_undefined_efficiency() {
        let processor = CycleProcessor::new(Duration::ZERO, ManualClock::new());
        let m = processor.process(&media(320), 3);
        assert_eq!(m.processing_time_ms, 0.0);
        assert_eq!(m.efficiency, None);
    }

    #[test]
    fn workload_score_is_separate_from_efficiency() {
        let processor = CycleProcessor::new(Duration::from_millis(100), ManualClock::new());
        let m = processor.process(&media(320), 1);
        let expected = run_workload(1, 320);
        assert_eq!(m.workload_score, expected);
        assert!(m.workload_score > 0.0);
        assert_ne!(Some(m.workload_score), m.efficiency);
    }

    #[test]
    fn workload_is_deterministic_per_cycle() {
        assert_eq!(run_workload(4, 320), run_workload(4, 320));
        // Higher bitrate divides the same accumulation by more
        assert!(run_workload(4, 640) < run_workload(4, 320));
    }

    #[test]
    fn real_clock_respects_delay_floor() {
        let processor = CycleProcessor::new(Duration::from_millis(100), SystemClock::new());
        let m = processor.process(&media(320), 1);
        assert!(m.processing_time_ms >= 100.0);
        let efficiency = m.efficiency.unwrap();
        assert!(efficiency.is_finite());
        assert!(efficiency >= 0.0);
    }
}
