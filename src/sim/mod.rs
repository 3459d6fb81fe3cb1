//! Simulation module
//!
//! All gameplay logic lives here. It stays free of rendering and platform
//! code:
//! - Elapsed time comes in as a plain `dt`
//! - Randomness comes from the state's own seeded RNG
//! - Obstacles are processed in scene discovery order

pub mod actor;
pub mod collision;
pub mod field;
pub mod state;
pub mod tick;

pub use actor::{advance_wobble, bob_rotation, update_actor};
pub use collision::{check_hit, min_clearance, sd_sphere};
pub use field::{advance_obstacles, field_span, reset_obstacles};
pub use state::{Duck, GameEvent, GameState, Head, Obstacle, RoundPhase};
pub use tick::{TickInput, tick};
