//! Play mode: the boundary between the platform loop and the simulation
//!
//! Frame lifecycle: `handle_event()` for each polled event → `update()` once →
//! `set_drawable_size()` → renderer reads `scene()` and `is_over()`.

use glam::UVec2;

use crate::input::{EventResponse, InputEvent, InputLatch};
use crate::scene::{Scene, SceneBindings, SceneError};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, TickInput, tick};

/// Owns the scene, the input latch and the simulation for one game session
#[derive(Debug)]
pub struct PlayMode {
    scene: Scene,
    bindings: SceneBindings,
    latch: InputLatch,
    state: GameState,
}

impl PlayMode {
    /// Bind to `scene` and lay out the first round
    pub fn new(scene: Scene, settings: Settings) -> Result<Self, SceneError> {
        settings.validate()?;
        let bindings =
            SceneBindings::resolve(&scene, &settings.obstacle_prefix, settings.obstacle_count)?;
        let (duck, head, obstacles) = bindings.capture(&scene);

        let seed = settings.resolve_seed();
        let state = GameState::new(duck, head, obstacles, settings, seed);
        log::info!(
            "Play mode ready: {} obstacles, seed {}",
            state.obstacles.len(),
            state.seed
        );

        let mut play = Self {
            scene,
            bindings,
            latch: InputLatch::new(),
            state,
        };
        play.sync_scene();
        Ok(play)
    }

    /// Feed one platform event into the input latch
    pub fn handle_event(&mut self, event: &InputEvent) -> EventResponse {
        self.latch.handle_event(event)
    }

    /// Run one simulation tick for `elapsed` seconds and publish the result
    pub fn update(&mut self, elapsed: f32) -> Option<GameEvent> {
        let input = TickInput::from_latch(&self.latch);
        let event = tick(&mut self.state, &input, elapsed);
        self.latch.clear_downs();
        self.sync_scene();
        event
    }

    /// Set the camera aspect from the output surface size
    pub fn set_drawable_size(&mut self, size: UVec2) {
        if size.y == 0 {
            return;
        }
        if let Some(camera) = self.scene.camera_mut() {
            camera.aspect = size.x as f32 / size.y as f32;
        }
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// Overlay text for the current round state
    pub fn status_text(&self) -> &'static str {
        if self.is_over() {
            "Game over! Press R to restart"
        } else {
            "Left/right arrows steer; space boosts; escape ungrabs mouse"
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn latch(&self) -> &InputLatch {
        &self.latch
    }

    /// Seed of this session; replaying it with the same inputs repeats the run
    pub fn seed(&self) -> u64 {
        self.state.seed
    }

    /// Raw state access for scripted test setups. Bypasses round invariants.
    #[doc(hidden)]
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    fn sync_scene(&mut self) {
        self.bindings.write_back(&self.state, &mut self.scene);
    }
}
