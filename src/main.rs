mod analytics;
mod audio;
mod cli;
mod codec;
mod config;
mod error;
mod media;
mod report;

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

use audio::buffer::AudioBuffer;
use cli::Cli;
use codec::clock::SystemClock;
use codec::cycle::{CycleMeasurement, CycleProcessor};
use codec::series::{run_series, run_series_parallel};
use config::Config;
use media::MediaDescriptor;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();

    let mut cfg = match config::discover_config(cli.config.as_deref()) {
        Some(path) => {
            let cfg = config::load_config(&path)?;
            log::info!("Loaded config from {}", path.display());
            cfg
        }
        None => Config::default(),
    };

    // CLI flags win over file values
    if let Some(cycles) = cli.cycles {
        cfg.simulation.cycles = cycles;
    }
    if let Some(buffer_size) = cli.buffer_size {
        cfg.simulation.buffer_size = buffer_size;
    }
    if let Some(delay_ms) = cli.delay_ms {
        cfg.simulation.codec_delay_ms = delay_ms;
    }

    let sim = &cfg.simulation;
    sim.validate().context("Invalid simulation settings")?;

    let media = MediaDescriptor::from_config(&cfg.media);
    media.validate().context("Invalid media settings")?;
    if !media.codec_supported() {
        log::warn!("Format {} is not supported by the simulated codec", media.format());
    }

    // --json keeps stdout to the single JSON document
    let text = !cli.json;

    if text {
        print!("{}", report::header());
        print!("{}", report::media_block(&media));
    }

    let buffer = AudioBuffer::generate(sim.buffer_size)?;
    log::info!(
        "Audio buffer: {} samples, peak={:.4}, rms={:.4}",
        buffer.sample_count(),
        buffer.peak_amplitude(),
        buffer.rms_power()
    );
    if text {
        print!("{}", report::buffer_block(sim, &buffer));
        println!("{}", report::simulation_banner());
    }

    let processor = CycleProcessor::new(sim.codec_delay(), SystemClock::new());
    log::info!(
        "Running {} cycles with {}ms codec delay{}",
        sim.cycles,
        processor.delay().as_millis(),
        if cli.parallel { " (parallel)" } else { "" }
    );

    let pb = ProgressBar::new(sim.cycles as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} cycles")
            .context("Invalid progress bar template")?
            .progress_chars("=>-"),
    );

    let total = sim.cycles;
    let on_cycle = |m: &CycleMeasurement| {
        if text {
            pb.suspend(|| println!("{}", report::cycle_line(m, total)));
        }
        pb.inc(1);
    };

    let series = if cli.parallel {
        run_series_parallel(sim, &media, &processor, on_cycle)?
    } else {
        run_series(sim, &media, &processor, on_cycle)?
    };
    pb.finish_and_clear();

    let analytics = analytics::analyze(&series, &buffer.stats())?;

    if text {
        print!("{}", report::analytics_block(&analytics));
        print!("{}", report::status_footer());
    } else {
        let json = report::RunReport::new(&media, sim, &series, &analytics)
            .to_json()
            .context("Failed to serialize run report")?;
        println!("{}", json);
    }
    log::info!("Done");
    Ok(())
}
