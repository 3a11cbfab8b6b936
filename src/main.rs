use std::fs;
use std::thread;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use septagon::cli::Cli;
use septagon::clock::{ClockSnapshot, SystemTime};
use septagon::core::{FixedStep, FrameClock};
use septagon::scene::{CaseScene, FrameOutput, InteractionEvent, TargetId};
use septagon::traits::InteractionHandler;
use septagon::SceneConfig;

/// One line of driver output
#[derive(Serialize)]
struct FrameRecord<'a> {
    frame: u64,
    time: f32,
    #[serde(flatten)]
    output: &'a FrameOutput,
    #[serde(skip_serializing_if = "Option::is_none")]
    clock: Option<ClockSnapshot>,
}

fn load_config(cli: &Cli) -> Result<SceneConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            SceneConfig::from_json_str(&json)
                .with_context(|| format!("failed to parse config {}", path.display()))?
        }
        None => SceneConfig::default(),
    };

    if let Some(locale) = &cli.locale {
        config.clock.locale = locale.clone();
    }
    if cli.twelve_hour {
        config.clock.use_24_hour = false;
    }
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let pace = cli
        .frame_interval()
        .with_context(|| format!("--fps {} gives no usable frame interval", cli.fps))?;

    let config = load_config(&cli)?;
    let mut scene = CaseScene::new(&config).context("invalid scene configuration")?;
    let source = SystemTime;

    let mut wall_clock = FrameClock::new();
    let mut time = 0.0;

    for frame in FixedStep::new(cli.fps).take_frames(cli.frames) {
        let delta = if cli.realtime {
            thread::sleep(pace);
            wall_clock.tick()
        } else {
            frame.delta
        };
        time += delta;

        if cli.toggle_at.contains(&frame.number) {
            scene.handle(InteractionEvent::Click(TargetId::Drawer))?;
        }

        let output = scene.frame(delta)?;
        let clock = scene.tick(delta, &source)?;

        if !cli.quiet {
            let record = FrameRecord {
                frame: frame.number,
                time,
                output: &output,
                clock,
            };
            println!("{}", serde_json::to_string(&record)?);
        }
    }

    let drawer = scene.drawer();
    log::info!(
        "finished {} frames, drawer {} at {:.3}",
        cli.frames,
        if drawer.is_open { "open" } else { "closed" },
        drawer.current_distance
    );

    Ok(())
}
