use rayon::prelude::*;

use crate::config::SimulationConfig;
use crate::error::{Result, SimError};
use crate::media::MediaDescriptor;

use super::clock::Clock;
use super::cycle::{CycleMeasurement, CycleProcessor};

/// Ordered measurements of one run, cycle 1 first.
#[derive(Clone, Debug, Default)]
pub struct PerformanceSeries {
    measurements: Vec<CycleMeasurement>,
}

impl PerformanceSeries {
    pub fn from_measurements(measurements: Vec<CycleMeasurement>) -> Self {
        Self { measurements }
    }

    pub fn measurements(&self) -> &[CycleMeasurement] {
        &self.measurements
    }

    pub fn len(&self) -> usize {
        self.measurements.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.measurements.is_empty()
    }

    pub fn processing_times(&self) -> Vec<f64> {
        self.measurements.iter().map(|m| m.processing_time_ms).collect()
    }

    pub fn efficiencies(&self) -> Vec<Option<f64>> {
        self.measurements.iter().map(|m| m.efficiency).collect()
    }
}

/// Runs every configured cycle in order, reporting each one to `on_cycle` as
/// soon as it completes.
pub fn run_series<C, F>(
    config: &SimulationConfig,
    media: &MediaDescriptor,
    processor: &CycleProcessor<C>,
    mut on_cycle: F,
) -> Result<PerformanceSeries>
where
    C: Clock,
    F: FnMut(&CycleMeasurement),
{
    check_cycles(config)?;

    let mut measurements = Vec::with_capacity(config.cycles as usize);
    for cycle_index in 1..=config.cycles {
        let measurement = processor.process(media, cycle_index);
        on_cycle(&measurement);
        measurements.push(measurement);
    }

    log::info!("Completed {} processing cycles", measurements.len());
    Ok(PerformanceSeries::from_measurements(measurements))
}

/// Runs cycles concurrently on the rayon pool. Cycles are independent, so the
/// result matches a sequential run apart from timing; `on_cycle` still sees
/// them in cycle order, after all have finished.
pub fn run_series_parallel<C, F>(
    config: &SimulationConfig,
    media: &MediaDescriptor,
    processor: &CycleProcessor<C>,
    mut on_cycle: F,
) -> Result<PerformanceSeries>
where
    C: Clock,
    F: FnMut(&CycleMeasurement),
{
    check_cycles(config)?;

    let measurements: Vec<CycleMeasurement> = (1..=config.cycles)
        .into_par_iter()
        .map(|cycle_index| processor.process(media, cycle_index))
        .collect();

    for measurement in &measurements {
        on_cycle(measurement);
    }

    log::info!(
        "Completed {} processing cycles on {} threads",
        measurements.len(),
        rayon::current_num_threads()
    );
    Ok(PerformanceSeries::from_measurements(measurements))
}

fn check_cycles(config: &SimulationConfig) -> Result<()> {
    if config.cycles == 0 {
        return Err(SimError::invalid("cycles", "must be greater than zero"));
    }
    Ok(())
}
