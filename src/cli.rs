use clap::Parser;
use std::path::PathBuf;

/// Every argument is optional; with none the run uses the built-in reference
/// configuration.
#[derive(Parser, Debug)]
#[command(name = "codecsim", about = "Simulated media player codec and audio buffer analysis")]
pub struct Cli {
    /// Config file (TOML). Defaults to ./codecsim.toml or the user config dir
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of processing cycles
    #[arg(long)]
    pub cycles: Option<u32>,

    /// Audio buffer size in samples
    #[arg(long)]
    pub buffer_size: Option<usize>,

    /// Simulated codec delay per cycle in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Run cycles concurrently
    #[arg(long)]
    pub parallel: bool,

    /// Print the analytics report as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_is_valid() {
        let cli = Cli::try_parse_from(["codecsim"]).unwrap();
        assert!(cli.config.is_none());
        assert!(cli.cycles.is_none());
        assert!(!cli.parallel);
        assert!(!cli.json);
    }

    #[test]
    fn parses_overrides() {
        let cli = Cli::try_parse_from([
            "codecsim",
            "--cycles",
            "3",
            "--buffer-size",
            "256",
            "--delay-ms",
            "0",
            "--parallel",
            "--json",
        ])
        .unwrap();
        assert_eq!(cli.cycles, Some(3));
        assert_eq!(cli.buffer_size, Some(256));
        assert_eq!(cli.delay_ms, Some(0));
        assert!(cli.parallel);
        assert!(cli.json);
    }
}
