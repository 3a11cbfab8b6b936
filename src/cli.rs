// cli.rs - Command-line interface configuration
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "septagon")]
#[command(about = "Headless driver for the septagon case scene", long_about = None)]
pub struct Cli {
    /// JSON scene configuration; defaults are used for missing fields
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of frames to simulate
    #[arg(long, default_value_t = 120)]
    pub frames: u64,

    /// Simulated frame rate
    #[arg(long, default_value_t = 60.0)]
    pub fps: f32,

    /// Click the drawer on this frame (repeatable)
    #[arg(long = "toggle-at")]
    pub toggle_at: Vec<u64>,

    /// Override the clock locale, e.g. de_DE
    #[arg(long)]
    pub locale: Option<String>,

    /// Show the clock in 12-hour mode
    #[arg(long = "twelve-hour", default_value = "false")]
    pub twelve_hour: bool,

    /// Pace frames against the wall clock instead of simulating them
    #[arg(long, default_value = "false")]
    pub realtime: bool,

    /// Disable per-frame output
    #[arg(long, default_value = "false")]
    pub quiet: bool,
}

impl Cli {
    /// Wall-clock pause between real-time frames, `None` if `fps` gives none
    pub fn frame_interval(&self) -> Option<Duration> {
        if !(self.fps.is_finite() && self.fps > 0.0) {
            return None;
        }
        Duration::try_from_secs_f32(1.0 / self.fps).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["septagon"]);
        assert_eq!(cli.frames, 120);
        assert!(cli.toggle_at.is_empty());
        assert!(!cli.quiet);
    }

    #[test]
    fn test_repeated_toggles() {
        let cli = Cli::parse_from(["septagon", "--toggle-at", "1", "--toggle-at", "90", "--twelve-hour"]);
        assert_eq!(cli.toggle_at, vec![1, 90]);
        assert!(cli.twelve_hour);
    }

    #[test]
    fn test_frame_interval() {
        let cli = Cli::parse_from(["septagon", "--fps", "50"]);
        let pace = cli.frame_interval().unwrap();
        assert!((pace.as_secs_f32() - 0.02).abs() < 1e-6);

        for fps in ["0", "-30", "inf", "1e-39"] {
            let arg = format!("--fps={}", fps);
            let cli = Cli::parse_from(["septagon", arg.as_str()]);
            assert!(cli.frame_interval().is_none(), "fps {}", fps);
        }
    }
}
