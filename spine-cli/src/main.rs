use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use spine_core::anchor::{AnchorDriver, Linear, Orbit, Slither, Stationary};
use spine_core::export::Trace;
use spine_core::glam::Vec2;
use spine_core::{config, AnchorPose, ChainConfig, SpineChain, VERSION};

#[derive(Parser, Debug)]
#[command(name = "spine", version = VERSION, about = "Procedural spine chain tools")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load a chain config YAML and print its derived constants
    Inspect { path: String },
    /// Step a chain behind a scripted anchor and write a JSON trace
    Simulate {
        /// Chain config YAML; defaults are used when omitted
        #[arg(long)]
        config: Option<String>,
        #[arg(long, value_enum, default_value_t = Driver::Slither)]
        driver: Driver,
        #[arg(long, default_value_t = 300)]
        steps: u64,
        /// Orbit radius, or slither swing in degrees
        #[arg(long, default_value_t = 2.0)]
        radius: f32,
        /// Distance per tick (linear/slither) or degrees per tick (orbit)
        #[arg(long, default_value_t = 0.2)]
        speed: f32,
        /// Record every Nth step
        #[arg(long, default_value_t = 1)]
        every: u64,
        /// Output path; stdout when omitted
        #[arg(long)]
        out: Option<String>,
    },
    /// Print the rest-pose preview joints for a config as JSON
    RestPose {
        #[arg(long)]
        config: Option<String>,
        #[arg(long, default_value_t = 0.0)]
        x: f32,
        #[arg(long, default_value_t = 0.0)]
        y: f32,
        /// Heading in degrees, counter-clockwise from +Y
        #[arg(long, default_value_t = 0.0)]
        heading: f32,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Driver {
    Stationary,
    Orbit,
    Linear,
    Slither,
}

fn load_config(path: Option<&str>) -> Result<ChainConfig> {
    match path {
        Some(p) => config::load_from_path(p),
        None => Ok(ChainConfig::default()),
    }
}

fn make_driver(kind: Driver, radius: f32, speed: f32) -> Box<dyn AnchorDriver> {
    match kind {
        Driver::Stationary => Box::new(Stationary(AnchorPose::default())),
        Driver::Orbit => Box::new(Orbit { center: Vec2::ZERO, radius, degrees_per_tick: speed }),
        Driver::Linear => Box::new(Linear { start: Vec2::ZERO, velocity: Vec2::Y * speed }),
        Driver::Slither => Box::new(Slither {
            position: Vec2::ZERO,
            heading_deg: 0.0,
            speed,
            amplitude_deg: radius,
            period_ticks: 60.0,
        }),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Inspect { path } => {
            let cfg = config::load_from_path(&path)?;
            println!("Loaded chain: {}", path);
            println!("  joints: {} (segment {:.3}, total {:.2})", cfg.joint_count, cfg.segment_length(), cfg.total_length);
            println!("  min bend: {:.1}° (max turn {:.1}°)", cfg.min_bend_angle, 180.0 - cfg.min_bend_angle);
            println!("  stiffness: {:.2}", cfg.stiffness);
            println!("  search: {} probes of {:.4}", cfg.search_steps, cfg.probe_step());
            println!("  anchor: {:?} (offset {:.3})", cfg.anchor, cfg.anchor_offset());
        }
        Command::Simulate { config, driver, steps, radius, speed, every, out } => {
            let cfg = load_config(config.as_deref())?;
            let mut chain = SpineChain::new(cfg)?;
            let mut driver = make_driver(driver, radius, speed);
            let mut trace = Trace::for_chain(&chain);
            let every = every.max(1);
            for tick in 0..steps {
                let pose = driver.pose(tick);
                chain.follow(pose);
                log::trace!("tick {tick}: {:?}", chain.last_report());
                if tick % every == 0 {
                    trace.record(tick, pose.position, &chain);
                }
            }
            log::info!("simulated {} steps, recorded {} frames", steps, trace.frames.len());
            match out {
                Some(path) => {
                    let file = std::fs::File::create(&path).with_context(|| format!("creating {}", path))?;
                    trace.write_json(std::io::BufWriter::new(file))?;
                    println!("Wrote {} frames to {}", trace.frames.len(), path);
                }
                None => println!("{}", trace.to_json()?),
            }
        }
        Command::RestPose { config, x, y, heading } => {
            let cfg = load_config(config.as_deref())?;
            let chain = SpineChain::new(cfg)?;
            let h = heading.to_radians();
            let anchor = AnchorPose::new(Vec2::new(x, y), Vec2::new(-h.sin(), h.cos()));
            println!("{}", serde_json::to_string_pretty(&chain.rest_pose(anchor))?);
        }
    }
    Ok(())
}
