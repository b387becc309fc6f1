//! Spin Bounce entry point
//!
//! Runs a headless session: aims, launches, steps the simulation at 60 fps and
//! logs what the ball does. Usage:
//!
//! ```text
//! spin-bounce [CONFIG.json] [--sides N] [--seconds S] [--friction-model linear|exponential]
//! spin-bounce --print-config
//! ```

use std::path::PathBuf;

use glam::Vec2;

use spin_bounce::{Game, dot, normalize};
use spin_bounce::platform::{InputEvent, PointerButton};
use spin_bounce::settings::{FrictionModel, PhysicsConfig};
use spin_bounce::sim::{SimulationState, max_penetration, shape_name};

/// Frame time of the scripted session
const FRAME_DT: f32 = 1.0 / 60.0;
/// How often to log a snapshot (frames)
const LOG_EVERY: u64 = 60;
/// A frame whose heading turns by more than ~2.5 degrees counts as a bounce
const BOUNCE_COS: f32 = 0.999;

#[derive(Debug, Default)]
struct Args {
    config: Option<PathBuf>,
    sides: Option<u32>,
    seconds: Option<f32>,
    friction_model: Option<FrictionModel>,
    print_config: bool,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args::default();
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--sides" => {
                let value = iter.next().ok_or("--sides needs a value")?;
                args.sides = Some(value.parse().map_err(|_| format!("bad --sides: {value}"))?);
            }
            "--seconds" => {
                let value = iter.next().ok_or("--seconds needs a value")?;
                args.seconds = Some(value.parse().map_err(|_| format!("bad --seconds: {value}"))?);
            }
            "--friction-model" => {
                let value = iter.next().ok_or("--friction-model needs a value")?;
                args.friction_model = Some(
                    FrictionModel::from_str(&value).ok_or(format!("unknown friction model: {value}"))?,
                );
            }
            "--print-config" => args.print_config = true,
            other if other.starts_with("--") => return Err(format!("unknown flag: {other}")),
            path => args.config = Some(PathBuf::from(path)),
        }
    }
    Ok(args)
}

fn deepest_penetration(state: &SimulationState) -> f32 {
    max_penetration(
        &state.polygon,
        state.rotation_deg,
        state.center(),
        state.ball.pos,
        state.ball.radius,
    )
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };

    if args.print_config {
        println!("{}", PhysicsConfig::default().to_json());
        return;
    }

    let mut config = match &args.config {
        Some(path) => PhysicsConfig::load(path),
        None => PhysicsConfig::default(),
    };
    if let Some(model) = args.friction_model {
        config.friction_model = model;
    }

    log::info!("Spin Bounce (headless) starting...");
    log::info!(
        "rotation {} deg/s, gravity {}, friction {} ({}), launch speed {}",
        config.rotation_speed,
        config.gravity,
        config.friction,
        config.friction_model.as_str(),
        config.launch_speed
    );

    let mut game = Game::new(config);

    if let Some(sides) = args.sides {
        // Click the matching tab, the same way a user would
        let tab = game.controller().tabs().iter().find(|t| t.sides == sides).cloned();
        match tab {
            Some(tab) => {
                game.handle_event(InputEvent::PointerPressed {
                    button: PointerButton::Primary,
                    pos: tab.center(),
                });
            }
            None => log::warn!("No tab for {} sides, keeping {}", sides, game.state().sides()),
        }
    }

    // Aim up and to the right of the ball, then right-click
    let aim = game.state().center() + Vec2::new(80.0, -45.0);
    game.handle_event(InputEvent::PointerMoved(aim));
    let idle_frame = game.frame();
    log::info!(
        "Idle frame: {} triangles, {} bytes",
        idle_frame.triangle_count(),
        idle_frame.as_bytes().len()
    );
    game.handle_event(InputEvent::PointerPressed {
        button: PointerButton::Secondary,
        pos: aim,
    });

    let seconds = args.seconds.unwrap_or(10.0).max(0.0);
    let frames = (seconds / FRAME_DT).round() as u64;
    let mut bounces = 0u64;
    let mut worst_penetration = f32::NEG_INFINITY;
    let mut min_speed = f32::INFINITY;
    let mut max_speed = 0.0f32;

    for frame in 1..=frames {
        let before = normalize(game.state().ball.vel);
        if game.update(FRAME_DT) == 0 {
            continue;
        }
        let state = game.state();
        if dot(before, normalize(state.ball.vel)) < BOUNCE_COS {
            bounces += 1;
        }

        worst_penetration = worst_penetration.max(deepest_penetration(state));
        let speed = state.ball.speed();
        min_speed = min_speed.min(speed);
        max_speed = max_speed.max(speed);

        if frame % LOG_EVERY == 0 {
            match serde_json::to_string(&game.snapshot()) {
                Ok(json) => log::debug!("frame {}: {}", frame, json),
                Err(e) => log::warn!("Snapshot serialization failed: {}", e),
            }
            log::info!(
                "t={:.1}s pos=({:.1}, {:.1}) speed={:.2} rotation={:.1}",
                frame as f32 * FRAME_DT,
                state.ball.pos.x,
                state.ball.pos.y,
                speed,
                state.rotation_deg
            );
        }
    }

    let state = game.state();
    println!(
        "{} ({} sides), {:.1}s simulated in {} ticks",
        shape_name(state.sides()).unwrap_or("Polygon"),
        state.sides(),
        state.elapsed,
        state.time_ticks
    );
    println!(
        "speed min/max: {:.2} / {:.2}, deepest penetration after resolution: {:.3}px",
        min_speed, max_speed, worst_penetration
    );
    println!("frames with a bounce: {}", bounces);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No browser frontend; the library is driven by the embedding page
}
