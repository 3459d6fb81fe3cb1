//! Obstacle field
//!
//! Obstacles sit on the X axis at a fixed spacing and scroll toward the duck
//! in lockstep. One that passes the near boundary is pushed back by whole
//! field spans, so the layout stays periodic.

use glam::Vec3;
use rand::Rng;

use super::state::Obstacle;
use crate::settings::{ScaleReset, Settings};

/// Total length covered by one period of the layout
#[inline]
pub fn field_span(settings: &Settings) -> f32 {
    settings.obstacle_spacing() * settings.obstacle_count as f32
}

fn random_lane_y<R: Rng + ?Sized>(settings: &Settings, rng: &mut R) -> f32 {
    rng.random_range(settings.lane_min_y..settings.lane_max_y)
}

/// Scroll every obstacle toward the duck, recycling those that passed it.
/// Returns how many were recycled.
pub fn advance_obstacles<R: Rng + ?Sized>(
    obstacles: &mut [Obstacle],
    dt: f32,
    settings: &Settings,
    rng: &mut R,
) -> usize {
    let span = field_span(settings);
    let step = dt * settings.obstacle_speed;
    let mut recycled = 0;

    for obstacle in obstacles.iter_mut() {
        obstacle.position.x += step;

        let overshoot = obstacle.position.x - settings.near_boundary_x;
        if overshoot > 0.0 {
            // Whole spans only; a long frame may need more than one
            let spans = (overshoot / span).ceil().max(1.0);
            obstacle.position.x -= spans * span;
            obstacle.position.y = random_lane_y(settings, rng);
            recycled += 1;
        }
    }

    if recycled > 0 {
        log::debug!("Recycled {recycled} obstacle(s)");
    }
    recycled
}

/// Lay the field out as a descending staircase from the origin, with fresh
/// lateral positions and a fresh scale factor per obstacle
pub fn reset_obstacles<R: Rng + ?Sized>(obstacles: &mut [Obstacle], settings: &Settings, rng: &mut R) {
    let spacing = settings.obstacle_spacing();

    for (i, obstacle) in obstacles.iter_mut().enumerate() {
        obstacle.position.x = settings.field_origin_x - i as f32 * spacing;
        obstacle.position.y = random_lane_y(settings, rng);

        let factor = rng.random_range(settings.min_spawn_scale..settings.max_spawn_scale);
        obstacle.scale = match settings.scale_reset {
            ScaleReset::Compound => obstacle.scale * factor,
            ScaleReset::Rebase => Vec3::splat(factor),
        };
    }
}
