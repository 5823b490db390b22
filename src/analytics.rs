use serde::Serialize;

use crate::audio::features::SignalStats;
use crate::codec::series::PerformanceSeries;
use crate::error::{Result, SimError};

/// Average cycle time (ms) below which codec performance counts as optimal
const OPTIMAL_PROCESSING_MS: f64 = 150.0;
/// Peak amplitude that must be exceeded for playback without normalization
const PLAYBACK_PEAK_THRESHOLD: f64 = 0.8;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SeriesStats {
    pub min: f64,
    pub max: f64,
    pub sum: f64,
    pub average: f64,
}

impl SeriesStats {
    /// `None` for an empty slice.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let sum: f64 = values.iter().sum();
        Some(Self {
            min,
            max,
            sum,
            average: sum / values.len() as f64,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceVerdict {
    Optimal,
    NeedsOptimization,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AmplitudeVerdict {
    SufficientForPlayback,
    MayNeedNormalization,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AudioAnalysis {
    pub sample_count: usize,
    pub peak_amplitude: f64,
    pub rms_power: f64,
    /// Peak / RMS; `None` for a silent buffer
    pub dynamic_range: Option<f64>,
}

/// Everything the final report shows, as plain numbers.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnalyticsReport {
    pub cycles: usize,
    pub processing_time: SeriesStats,
    /// Over cycles with a defined efficiency; `None` if there were none
    pub efficiency: Option<SeriesStats>,
    pub undefined_efficiencies: usize,
    pub audio: AudioAnalysis,
    pub performance: PerformanceVerdict,
    pub amplitude: AmplitudeVerdict,
}

pub fn analyze(series: &PerformanceSeries, signal: &SignalStats) -> Result<AnalyticsReport> {
    let processing_time =
        SeriesStats::from_values(&series.processing_times()).ok_or(SimError::EmptySeries)?;

    let efficiencies = series.efficiencies();
    let defined: Vec<f64> = efficiencies.iter().flatten().copied().collect();
    let undefined_efficiencies = efficiencies.len() - defined.len();
    let efficiency = SeriesStats::from_values(&defined);

    if undefined_efficiencies > 0 {
        log::warn!(
            "{} of {} cycles have an undefined efficiency and are excluded from its statistics",
            undefined_efficiencies,
            efficiencies.len()
        );
    }

    let performance = if processing_time.average < OPTIMAL_PROCESSING_MS {
        PerformanceVerdict::Optimal
    } else {
        PerformanceVerdict::NeedsOptimization
    };

    let amplitude = if signal.peak_amplitude > PLAYBACK_PEAK_THRESHOLD {
        AmplitudeVerdict::SufficientForPlayback
    } else {
        AmplitudeVerdict::MayNeedNormalization
    };

    Ok(AnalyticsReport {
        cycles: series.len(),
        processing_time,
        efficiency,
        undefined_efficiencies,
        audio: AudioAnalysis {
            sample_count: signal.sample_count,
            peak_amplitude: signal.peak_amplitude,
            rms_power: signal.rms_power,
            dynamic_range: signal.dynamic_range(),
        },
        performance,
        amplitude,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::cycle::{efficiency, CycleMeasurement};

    fn series(times: &[f64]) -> PerformanceSeries {
        PerformanceSeries::from_measurements(
            times
                .iter()
                .enumerate()
                .map(|(i, &t)| CycleMeasurement {
                    cycle_index: i as u32 + 1,
                    processing_time_ms: t,
                    efficiency: efficiency(t, 320),
                    workload_score: 0.0,
                })
                .collect(),
        )
    }

    fn signal(peak: f64, rms: f64) -> SignalStats {
        SignalStats {
            sample_count: 1024,
            peak_amplitude: peak,
            rms_power: rms,
        }
    }

    #[test]
    fn processing_time_stats() {
        let report = analyze(&series(&[100.0, 120.0, 140.0]), &signal(0.5, 0.3)).unwrap();
        assert_eq!(report.cycles, 3);
        assert_eq!(report.processing_time.min, 100.0);
        assert_eq!(report.processing_time.max, 140.0);
        assert_eq!(report.processing_time.sum, 360.0);
        assert!((report.processing_time.average - 120.0).abs() < 1e-12);
        assert_eq!(report.performance, PerformanceVerdict::Optimal);
    }

    #[test]
    fn efficiency_stats_follow_processing_times() {
        let report = analyze(&series(&[100.0, 200.0]), &signal(0.5, 0.3)).unwrap();
        let eff = report.efficiency.unwrap();
        assert!((eff.max - 10.0).abs() < 1e-12);
        assert!((eff.min - 5.0).abs() < 1e-12);
        assert!((eff.average - 7.5).abs() < 1e-12);
        assert_eq!(report.undefined_efficiencies, 0);
    }

    #[test]
    fn slow_average_needs_optimization() {
        let report = analyze(&series(&[150.0, 150.0]), &signal(0.5, 0.3)).unwrap();
        assert_eq!(report.performance, PerformanceVerdict::NeedsOptimization);

        let report = analyze(&series(&[149.99]), &signal(0.5, 0.3)).unwrap();
        assert_eq!(report.performance, PerformanceVerdict::Optimal);
    }

    #[test]
    fn dynamic_range_and_amplitude_boundary() {
        let report = analyze(&series(&[100.0]), &signal(0.8, 0.4)).unwrap();
        assert!((report.audio.dynamic_range.unwrap() - 2.0).abs() < 1e-12);
        // Threshold is strict: exactly 0.8 is not enough
        assert_eq!(report.amplitude, AmplitudeVerdict::MayNeedNormalization);

        let report = analyze(&series(&[100.0]), &signal(0.81, 0.4)).unwrap();
        assert_eq!(report.amplitude, AmplitudeVerdict::SufficientForPlayback);
    }

    #[test]
    fn silent_signal_has_undefined_dynamic_range() {
        let report = analyze(&series(&[100.0]), &signal(0.0, 0.0)).unwrap();
        assert_eq!(report.audio.dynamic_range, None);
        assert_eq!(report.amplitude, AmplitudeVerdict::MayNeedNormalization);
    }

    #[test]
    fn undefined_efficiencies_are_excluded() {
        let report = analyze(&series(&[0.0, 100.0]), &signal(0.5, 0.3)).unwrap();
        assert_eq!(report.undefined_efficiencies, 1);
        let eff = report.efficiency.unwrap();
        assert!((eff.average - 10.0).abs() < 1e-12);

        let report = analyze(&series(&[0.0, 0.0]), &signal(0.5, 0.3)).unwrap();
        assert_eq!(report.efficiency, None);
        assert_eq!(report.undefined_efficiencies, 2);
    }

    #[test]
    fn empty_series_is_rejected() {
        let err = analyze(&PerformanceSeries::default(), &signal(0.5, 0.3)).unwrap_err();
        assert!(matches!(err, SimError::EmptySeries));
    }

    #[test]
    fn report_serializes_verdicts_in_snake_case() {
        let report = analyze(&series(&[100.0]), &signal(0.9, 0.4)).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["performance"], "optimal");
        assert_eq!(json["amplitude"], "sufficient_for_playback");
        assert_eq!(json["processing_time"]["average"], 100.0);
    }
}
