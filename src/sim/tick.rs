//! Per-frame simulation tick
//!
//! One call per rendered frame. While the round is active the duck steers,
//! the field scrolls, and the collision check may end the round. Once over,
//! nothing moves until a restart press resets the round.

use super::actor::update_actor;
use super::collision::check_hit;
use super::field::advance_obstacles;
use super::state::{GameEvent, GameState, RoundPhase};
use crate::input::InputLatch;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Steer toward lane minimum (held)
    pub steer_left: bool,
    /// Steer toward lane maximum (held)
    pub steer_right: bool,
    /// Faster lateral movement (held)
    pub boost: bool,
    /// Restart was pressed since the previous tick
    pub restart: bool,
}

impl TickInput {
    /// Snapshot held levels and the restart edge from the latch
    pub fn from_latch(latch: &InputLatch) -> Self {
        Self {
            steer_left: latch.left.pressed,
            steer_right: latch.right.pressed,
            boost: latch.boost.pressed,
            restart: latch.restart.downs > 0,
        }
    }
}

/// Advance the game state by `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Option<GameEvent> {
    match state.phase {
        RoundPhase::Over => {
            if input.restart {
                state.reset_round();
                log::info!("Round {} started", state.rounds);
                Some(GameEvent::Restarted)
            } else {
                None
            }
        }

        RoundPhase::Active => {
            state.time_ticks += 1;

            update_actor(&mut state.duck, &mut state.head, input, dt, &state.settings);
            advance_obstacles(&mut state.obstacles, dt, &state.settings, &mut state.rng);

            let clearance = check_hit(
                state.duck.position,
                &state.obstacles,
                state.settings.collision_threshold,
            )?;

            state.phase = RoundPhase::Over;
            log::info!(
                "Round {} over after {} ticks (clearance {:.3})",
                state.rounds,
                state.time_ticks,
                clearance
            );
            Some(GameEvent::RoundOver { clearance })
        }
    }
}
