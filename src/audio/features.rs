/// Whole-buffer signal statistics, detached from the samples they describe
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SignalStats {
    pub sample_count: usize,
    /// Maximum absolute sample value
    pub peak_amplitude: f64,
    /// sqrt(mean(sample²))
    pub rms_power: f64,
}

impl SignalStats {
    /// Peak-to-RMS ratio. `None` for a silent signal.
    pub fn dynamic_range(&self) -> Option<f64> {
        if self.rms_power > 0.0 {
            Some(self.peak_amplitude / self.rms_power)
        } else {
            None
        }
    }
}
