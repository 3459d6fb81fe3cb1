//! Duck Dodge entry point
//!
//! Native builds have no window yet: the binary drives the reference scene
//! headlessly with a scripted input pattern and reports how each round went.
//!
//! Usage: `duck-dodge [settings.json]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::path::Path;

    use duck_dodge::consts::FRAME_DT;
    use duck_dodge::sim::GameEvent;
    use duck_dodge::{InputEvent, Key, PlayMode, Scene, Settings};

    env_logger::init();
    log::info!("Duck Dodge (native, headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load_or_default(Path::new(&path)),
        None => Settings::default(),
    };

    let mut play = match PlayMode::new(Scene::reference(), settings) {
        Ok(play) => play,
        Err(e) => {
            log::error!("Failed to start: {e}");
            std::process::exit(1);
        }
    };
    play.set_drawable_size(glam::UVec2::new(1280, 720));
    log::info!("Session seed {} (pass it as \"seed\" in settings to replay)", play.seed());

    const FRAMES: u32 = 60 * 60;
    const RESTART_DELAY_FRAMES: u32 = 30;

    let mut frames_over = 0;
    let mut survived = Vec::new();
    let mut round_start = 0;

    for frame in 0..FRAMES {
        // Weave across the lane in two-second sweeps, boosting every other sweep
        let sweep = frame / 120;
        let (press, release) = if sweep % 2 == 0 {
            (Key::ArrowLeft, Key::ArrowRight)
        } else {
            (Key::ArrowRight, Key::ArrowLeft)
        };
        play.handle_event(&InputEvent::KeyUp(release));
        play.handle_event(&InputEvent::KeyDown(press));
        let boost = if sweep % 4 < 2 {
            InputEvent::KeyDown(Key::Space)
        } else {
            InputEvent::KeyUp(Key::Space)
        };
        play.handle_event(&boost);

        if play.is_over() {
            frames_over += 1;
            if frames_over == RESTART_DELAY_FRAMES {
                play.handle_event(&InputEvent::KeyDown(Key::R));
                play.handle_event(&InputEvent::KeyUp(Key::R));
            }
        }

        match play.update(FRAME_DT) {
            Some(GameEvent::RoundOver { .. }) => {
                survived.push((frame - round_start) as f32 * FRAME_DT);
                frames_over = 0;
            }
            Some(GameEvent::Restarted) => round_start = frame,
            None => {}
        }
    }

    println!("\n{}", play.status_text());
    println!("Seed: {}", play.seed());
    println!("Rounds finished: {}", survived.len());
    for (i, secs) in survived.iter().enumerate() {
        println!("  round {:>2}: survived {:.2}s", i + 1, secs);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No web front end yet
}
