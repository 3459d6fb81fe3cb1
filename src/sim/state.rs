//! Game state and core simulation types

use glam::{Quat, Vec3};
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::field;
use crate::settings::Settings;

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Gameplay rules apply each tick
    #[default]
    Active,
    /// Duck was hit; waiting for a restart input
    Over,
}

/// Notable transitions produced by a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A collision ended the round
    RoundOver { clearance: f32 },
    /// A restart input began a new round
    Restarted,
}

/// The player's duck body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Duck {
    pub position: Vec3,
    initial_position: Vec3,
}

impl Duck {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            initial_position: position,
        }
    }

    /// Position captured when the duck was bound
    pub fn initial_position(&self) -> Vec3 {
        self.initial_position
    }

    pub fn reset(&mut self) {
        self.position = self.initial_position;
    }
}

/// The duck's head: a slow bob plus a roll that follows steering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Head {
    base_rotation: Quat,
    /// Bob cycle position, always in [0, 1)
    pub wobble_phase: f32,
    /// Steering roll, clamped to +/- max tilt
    pub tilt_degrees: f32,
    /// Rotation derived on the last tick
    pub rotation: Quat,
}

impl Head {
    pub fn new(base_rotation: Quat) -> Self {
        Self {
            base_rotation,
            wobble_phase: 0.0,
            tilt_degrees: 0.0,
            rotation: base_rotation,
        }
    }

    pub fn base_rotation(&self) -> Quat {
        self.base_rotation
    }
}

/// A spherical obstacle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub position: Vec3,
    /// Uniform scale; `scale.x` doubles as the collision radius
    pub scale: Vec3,
}

impl Obstacle {
    pub fn new(position: Vec3, scale: Vec3) -> Self {
        Self { position, scale }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.scale.x
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    pub rng: Pcg32,
    pub settings: Settings,
    pub duck: Duck,
    pub head: Head,
    /// Obstacles in scene discovery order
    pub obstacles: Vec<Obstacle>,
    pub phase: RoundPhase,
    /// Ticks simulated while active
    pub time_ticks: u64,
    /// Rounds started, including the first
    pub rounds: u32,
}

impl GameState {
    /// Build the state from bound entities and lay out the first round
    pub fn new(
        duck: Duck,
        head: Head,
        obstacles: Vec<Obstacle>,
        settings: Settings,
        seed: u64,
    ) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            settings,
            duck,
            head,
            obstacles,
            phase: RoundPhase::Active,
            time_ticks: 0,
            rounds: 0,
        };
        state.reset_round();
        state
    }

    pub fn is_over(&self) -> bool {
        self.phase == RoundPhase::Over
    }

    /// Lay out the obstacle field and return the duck to its start
    pub fn reset_round(&mut self) {
        field::reset_obstacles(&mut self.obstacles, &self.settings, &mut self.rng);
        self.duck.reset();
        self.phase = RoundPhase::Active;
        self.rounds += 1;
    }
}
