//! Hearth Player - host binary for the character controller
//!
//! Runs the character interactively in a window, or headless from a replay
//! script.
//!
//! Usage:
//!   hearth-player [--config <character.toml>] [--clips <clips.toml>] [--script <replay.toml>]

use anyhow::{Context, Result};
use clap::Parser;
use hearth_player::defaults::build_controller;
use hearth_player::replay::ReplayScript;
use hearth_player::PlayerApp;
use std::path::PathBuf;
use winit::event_loop::{ControlFlow, EventLoop};

#[derive(Parser)]
#[command(name = "hearth-player")]
#[command(about = "Hearth player - walk a character around with camera-relative controls")]
struct Args {
    /// Character tuning and key bindings (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Clip manifest supplied by the asset loader (TOML)
    #[arg(long)]
    clips: Option<PathBuf>,

    /// Run headless from a replay script instead of opening a window
    #[arg(long)]
    script: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let mut controller = build_controller(args.config.as_deref(), args.clips.as_deref())?;

    if let Some(script_path) = &args.script {
        let script = ReplayScript::load(script_path)?;
        let report = script.run(&mut controller)?;

        println!("Frames:   {}", report.frames);
        println!(
            "Position: ({:.3}, {:.3}, {:.3})",
            report.position.x, report.position.y, report.position.z
        );
        println!("Facing:   {:.3} rad", report.facing);
        println!("State:    {:?}", report.state);
        println!("Animation events:");
        for event in &report.events {
            println!("  {:?}", event);
        }
        return Ok(());
    }

    let keys = controller.config().keys.clone();
    println!("Controls:");
    println!(
        "  {}{}{}{}     - Move (camera relative)",
        keys.forward.to_uppercase(),
        keys.left.to_uppercase(),
        keys.backward.to_uppercase(),
        keys.right.to_uppercase()
    );
    println!("  {:<8} - Toggle run", keys.run_toggle);
    for binding in &controller.config().one_shots {
        println!("  {:<8} - {}", binding.key, binding.clip);
    }
    println!("  Drag     - Orbit camera");
    println!("  Wheel    - Zoom");
    println!("  Escape   - Exit");

    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = PlayerApp::new(controller);
    event_loop.run_app(&mut app)?;

    Ok(())
}
