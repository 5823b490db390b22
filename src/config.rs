use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Result, SimError};

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub media: MediaConfig,
}

/// Fixed parameters of a simulation run.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SimulationConfig {
    #[serde(default = "default_cycles")]
    pub cycles: u32,
    #[serde(default = "default_buffer_size")]
    pub buffer_size: usize,
    #[serde(default = "default_sample_rate")]
    pub sample_rate: f64,
    #[serde(default = "default_video_frame_rate")]
    pub video_frame_rate: u32,
    /// Simulated codec latency per cycle, in milliseconds
    #[serde(default = "default_codec_delay_ms")]
    pub codec_delay_ms: u64,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct MediaConfig {
    #[serde(default = "default_identifier")]
    pub identifier: String,
    #[serde(default = "default_format")]
    pub format: String,
    #[serde(default = "default_duration")]
    pub duration_seconds: f64,
    #[serde(default = "default_bit_rate")]
    pub bit_rate_kbps: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            cycles: default_cycles(),
            buffer_size: default_buffer_size(),
            sample_rate: default_sample_rate(),
            video_frame_rate: default_video_frame_rate(),
            codec_delay_ms: default_codec_delay_ms(),
        }
    }
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            identifier: default_identifier(),
            format: default_format(),
            duration_seconds: default_duration(),
            bit_rate_kbps: default_bit_rate(),
        }
    }
}

impl SimulationConfig {
    pub fn codec_delay(&self) -> Duration {
        Duration::from_millis(self.codec_delay_ms)
    }

    /// Rejects values that would make the run produce NaN or nothing at all.
    pub fn validate(&self) -> Result<()> {
        if self.cycles == 0 {
            return Err(SimError::invalid("cycles", "must be greater than zero"));
        }
        if self.buffer_size == 0 {
            return Err(SimError::invalid("buffer_size", "must be greater than zero"));
        }
        if !(self.sample_rate.is_finite() && self.sample_rate > 0.0) {
            return Err(SimError::invalid(
                "sample_rate",
                format!("must be a positive number, got {}", self.sample_rate),
            ));
        }
        Ok(())
    }
}

fn default_cycles() -> u32 { 10 }
fn default_buffer_size() -> usize { 1024 }
fn default_sample_rate() -> f64 { 44100.0 }
fn default_video_frame_rate() -> u32 { 30 }
fn default_codec_delay_ms() -> u64 { 100 }
fn default_identifier() -> String { "professional_audio_sample.mp3".into() }
fn default_format() -> String { "MP3".into() }
fn default_duration() -> f64 { 180.0 }
fn default_bit_rate() -> u32 { 320 }

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|source| SimError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| SimError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Explicit path first, then `codecsim.toml` in the working directory, then the
/// per-user config locations.
pub fn discover_config(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    let local = PathBuf::from("codecsim.toml");
    if local.exists() {
        return Some(local);
    }
    if let Some(home) = dirs::home_dir() {
        let xdg = home.join(".config").join("codecsim").join("config.toml");
        if xdg.exists() {
            return Some(xdg);
        }
    }
    if let Some(config_dir) = dirs::config_dir() {
        let platform = config_dir.join("codecsim").join("config.toml");
        if platform.exists() {
            return Some(platform);
        }
    }
    None
}
