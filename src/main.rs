//! Headless demo loop.
//!
//! Stands in for the windowing collaborator: paces frames with
//! [`FrameTiming`], feeds elapsed time to the engine, and submits each frame
//! to a logging sink. A scripted key sequence exercises the command surface
//! since there is no real keyboard here.

use std::time::Duration;

use volta::engine::Engine;
use volta::options::Options;
use volta::render::LogSink;
use volta::util::frame_timing::FrameTiming;

const TARGET_FPS: u32 = 60;
const DEFAULT_DURATION_SECS: f32 = 5.0;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let options = match args.next() {
        Some(path) => match Options::load(std::path::Path::new(&path)) {
            Ok(opts) => opts,
            Err(e) => {
                log::error!("failed to load options from {path}: {e}");
                std::process::exit(1);
            }
        },
        None => Options::default(),
    };

    let duration_secs = args
        .next()
        .and_then(|s| s.parse::<f32>().ok())
        .unwrap_or(DEFAULT_DURATION_SECS);

    let mut engine = Engine::new(options);

    // No window, no key events: start the cubes spinning around Y the way
    // pressing D would.
    let _ = engine.handle_key("KeyD");

    let mut sink = LogSink;
    let mut timing = FrameTiming::new(TARGET_FPS);
    let mut next_report = Duration::from_secs(1);
    let total = Duration::from_secs_f32(duration_secs.max(0.0));
    let mut elapsed = Duration::ZERO;

    log::info!(
        "running headless for {:.1}s at {TARGET_FPS} fps",
        total.as_secs_f32()
    );

    while elapsed < total && !engine.should_quit() {
        let dt = timing.next_frame();
        elapsed += dt;

        engine.tick(dt.as_secs_f32());
        engine.submit_frame(&mut sink);

        if elapsed >= next_report {
            next_report += Duration::from_secs(1);
            for (i, obj) in engine.objects().iter().enumerate() {
                log::info!(
                    "object {i}: position {:?}, target waypoint {}",
                    obj.position(),
                    obj.walker.target_index()
                );
            }
            log::info!(
                "camera eye {:?}, {:.1} fps",
                engine.camera().eye(),
                timing.fps()
            );
        }
    }

    log::info!("done after {:.2}s", elapsed.as_secs_f32());
}
