//! Duck Dodge - a lane-strafing obstacle-avoidance game core
//!
//! Core modules:
//! - `sim`: Per-frame simulation (actor motion, obstacle field, collisions, round state)
//! - `input`: Input latch fed by the platform event boundary
//! - `scene`: Transform/camera set the simulation is bound to
//! - `play`: Boundary entry points (events in, ticks, render queries out)
//! - `settings`: Data-driven tuning and lane geometry

pub mod input;
pub mod play;
pub mod scene;
pub mod settings;
pub mod sim;

pub use input::{EventResponse, InputEvent, InputLatch, Key};
pub use play::PlayMode;
pub use scene::{Camera, Scene, SceneError, Transform};
pub use settings::{ScaleReset, Settings, SettingsError};

/// Game configuration constants (defaults for [`Settings`])
pub mod consts {
    /// Entity names looked up in the scene
    pub const HEAD_NAME: &str = "Head";
    pub const DUCK_NAME: &str = "Duck";
    pub const OBSTACLE_PREFIX: &str = "Icosphere";

    /// Obstacles in the reference scene
    pub const OBSTACLE_COUNT: usize = 39;

    /// Lane extent on the lateral (Y) axis
    pub const LANE_MIN_Y: f32 = -6.0;
    pub const LANE_MAX_Y: f32 = 6.0;

    /// Longitudinal (X) layout of the obstacle field
    pub const FIELD_ORIGIN_X: f32 = -20.0;
    pub const FIELD_LENGTH: f32 = 195.0;
    /// Obstacles past this X have passed the duck and get recycled
    pub const NEAR_BOUNDARY_X: f32 = 10.0;

    /// Obstacle scroll speed (units/s)
    pub const OBSTACLE_SPEED: f32 = 50.0;

    /// Duck lateral speed (units/s), normal and boosted
    pub const STEER_SPEED: f32 = 10.0;
    pub const BOOST_SPEED: f32 = 30.0;

    /// Head tilt rate (degrees/s) and limit (degrees)
    pub const TILT_RATE: f32 = 500.0;
    pub const MAX_TILT_DEGREES: f32 = 50.0;

    /// Head bob: one full cycle every WOBBLE_PERIOD seconds, peak WOBBLE_DEGREES
    pub const WOBBLE_PERIOD: f32 = 6.0;
    pub const WOBBLE_DEGREES: f32 = 7.0;

    /// Round ends when clearance to any obstacle falls below this
    pub const COLLISION_THRESHOLD: f32 = 1.0;

    /// Random scale factor range applied to obstacles on reset
    pub const MIN_SPAWN_SCALE: f32 = 0.3;
    pub const MAX_SPAWN_SCALE: f32 = 1.0;

    /// Frame step used by the headless driver
    pub const FRAME_DT: f32 = 1.0 / 60.0;
}
