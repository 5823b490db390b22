use std::f64::consts::PI;

use crate::error::{Result, SimError};

use super::features::SignalStats;

/// Synthetic audio block: one full sine period under a slow amplitude envelope.
#[derive(Clone, Debug)]
pub struct AudioBuffer {
    samples: Vec<f64>,
    peak_amplitude: f64,
    rms_power: f64,
}

impl AudioBuffer {
    /// Generates `buffer_size` samples and their peak/RMS statistics in one pass.
    /// Output is fully deterministic for a given size.
    pub fn generate(buffer_size: usize) -> Result<Self> {
        if buffer_size == 0 {
            return Err(SimError::invalid("buffer_size", "must be greater than zero"));
        }

        let n = buffer_size as f64;
        let mut samples = Vec::with_capacity(buffer_size);
        let mut peak_amplitude = 0.0f64;
        let mut sum_squares = 0.0f64;

        for i in 0..buffer_size {
            let t = i as f64;
            let raw = (2.0 * PI * t / n).sin();
            // Envelope stays within [0.2, 0.8]
            let sample = raw * (0.5 + 0.3 * (0.1 * t).sin());

            peak_amplitude = peak_amplitude.max(sample.abs());
            sum_squares += sample * sample;
            samples.push(sample);
        }

        let rms_power = (sum_squares / n).sqrt();

        log::debug!(
            "Generated audio buffer: {} samples, peak={:.4}, rms={:.4}",
            buffer_size,
            peak_amplitude,
            rms_power
        );

        Ok(Self {
            samples,
            peak_amplitude,
            rms_power,
        })
    }

    #[allow(dead_code)]
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    pub fn peak_amplitude(&self) -> f64 {
        self.peak_amplitude
    }

    pub fn rms_power(&self) -> f64 {
        self.rms_power
    }

    /// Playback span of the buffer at `sample_rate` Hz.
    pub fn duration_seconds(&self, sample_rate: f64) -> f64 {
        self.samples.len() as f64 / sample_rate
    }

    pub fn stats(&self) -> SignalStats {
        SignalStats {
            sample_count: self.sample_count(),
            peak_amplitude: self.peak_amplitude,
            rms_power: self.rms_power,
        }
    }
}
