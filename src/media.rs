use serde::Serialize;

use crate::config::MediaConfig;
use crate::error::{Result, SimError};

/// Formats the simulated codec can handle. Matching is exact and case-sensitive.
pub const SUPPORTED_FORMATS: [&str; 3] = ["MP3", "WAV", "FLAC"];

/// Metadata for the media resource being "played". Read-only once built.
#[derive(Clone, Debug, Serialize)]
pub struct MediaDescriptor {
    identifier: String,
    format: String,
    duration_seconds: f64,
    bit_rate_kbps: u32,
    codec_supported: bool,
}

impl MediaDescriptor {
    pub fn new(
        identifier: impl Into<String>,
        format: impl Into<String>,
        duration_seconds: f64,
        bit_rate_kbps: u32,
    ) -> Self {
        let format = format.into();
        let codec_supported = SUPPORTED_FORMATS.contains(&format.as_str());
        Self {
            identifier: identifier.into(),
            format,
            duration_seconds,
            bit_rate_kbps,
            codec_supported,
        }
    }

    pub fn from_config(cfg: &MediaConfig) -> Self {
        Self::new(
            cfg.identifier.clone(),
            cfg.format.clone(),
            cfg.duration_seconds,
            cfg.bit_rate_kbps,
        )
    }

    /// Construction accepts anything; callers that need sane values check here.
    pub fn validate(&self) -> Result<()> {
        if self.identifier.trim().is_empty() {
            return Err(SimError::invalid("identifier", "must not be empty"));
        }
        if !(self.duration_seconds.is_finite() && self.duration_seconds >= 0.0) {
            return Err(SimError::invalid(
                "duration_seconds",
                format!("must be a non-negative number, got {}", self.duration_seconds),
            ));
        }
        if self.bit_rate_kbps == 0 {
            return Err(SimError::invalid("bit_rate_kbps", "must be greater than zero"));
        }
        Ok(())
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    pub fn duration_seconds(&self) -> f64 {
        self.duration_seconds
    }

    pub fn bit_rate_kbps(&self) -> u32 {
        self.bit_rate_kbps
    }

    pub fn codec_supported(&self) -> bool {
        self.codec_supported
    }
}
